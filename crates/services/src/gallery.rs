use std::path::PathBuf;

use rand::Rng;
use rand::seq::IndexedRandom;
use serenade_core::model::ButtonPosition;
use tracing::{info, warn};

use crate::error::GalleryError;
use crate::media::{EmbeddedMedia, MediaResolver};

/// How many photos are sampled before the mosaic keeps its tiles.
pub const MOSAIC_SAMPLE: usize = 20;
/// Bounds, in viewport percent, for the wandering proposal button.
pub const BUTTON_RANGE: std::ops::RangeInclusive<u8> = 15..=75;

/// Slides for the carousel and tiles for the intro mosaic.
#[derive(Debug, Clone)]
pub struct GalleryService {
    resolver: MediaResolver,
    pictures_dir: PathBuf,
    mosaic_width: u32,
    mosaic_tiles: usize,
}

impl GalleryService {
    #[must_use]
    pub fn new(
        resolver: MediaResolver,
        pictures_dir: impl Into<PathBuf>,
        mosaic_width: u32,
        mosaic_tiles: usize,
    ) -> Self {
        Self {
            resolver,
            pictures_dir: pictures_dir.into(),
            mosaic_width,
            mosaic_tiles,
        }
    }

    /// Every photo and video in the pictures directory, embedded in name
    /// order.
    ///
    /// # Errors
    ///
    /// Returns `GalleryError::NoMedia` when the directory holds no media or
    /// none of it could be embedded.
    pub fn load_slides(&self) -> Result<Vec<EmbeddedMedia>, GalleryError> {
        let paths = self.resolver.list_media(&self.pictures_dir);
        let slides = self.resolver.encode_all(&paths);
        if slides.is_empty() {
            warn!(dir = %self.pictures_dir.display(), found = paths.len(), "gallery is empty");
            return Err(GalleryError::NoMedia {
                dir: self.pictures_dir.clone(),
            });
        }
        info!(count = slides.len(), "gallery slides loaded");
        Ok(slides)
    }

    /// A random sample of photos for the intro background. Empty when the
    /// directory has none; the intro falls back to a gradient.
    #[must_use]
    pub fn load_mosaic<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec<EmbeddedMedia> {
        let images = self.resolver.list_images(&self.pictures_dir);
        let sample: Vec<PathBuf> = images
            .choose_multiple(rng, MOSAIC_SAMPLE)
            .cloned()
            .collect();
        let mut tiles = self
            .resolver
            .encode_all_with_width(&sample, self.mosaic_width);
        tiles.truncate(self.mosaic_tiles);
        tiles
    }
}

#[must_use]
pub fn random_button_position<R: Rng + ?Sized>(rng: &mut R) -> ButtonPosition {
    ButtonPosition {
        top: rng.random_range(BUTTON_RANGE),
        left: rng.random_range(BUTTON_RANGE),
    }
}
