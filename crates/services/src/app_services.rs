use std::sync::Arc;

use serenade_core::model::PresentationSettings;
use tracing::info;

use crate::Clock;
use crate::error::AppServicesError;
use crate::gallery::GalleryService;
use crate::media::MediaResolver;
use crate::music::MusicService;
use crate::quiz_service::QuizService;

/// Assembles app-facing services from validated settings.
#[derive(Clone)]
pub struct AppServices {
    settings: Arc<PresentationSettings>,
    clock: Clock,
    gallery: Arc<GalleryService>,
    music: Arc<MusicService>,
    quiz: Arc<QuizService>,
}

impl AppServices {
    /// Build every service over the configured media directories.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError::QuestionBank` if the built-in question
    /// bank fails validation.
    pub fn new(settings: PresentationSettings, clock: Clock) -> Result<Self, AppServicesError> {
        let resolver = MediaResolver::new(settings.max_image_width());
        let gallery = Arc::new(GalleryService::new(
            resolver,
            settings.pictures_dir(),
            settings.mosaic_image_width(),
            settings.mosaic_tiles(),
        ));
        let music = Arc::new(MusicService::new(resolver, settings.music_dir()));
        let quiz = Arc::new(QuizService::with_default_bank()?);

        info!(
            pictures = %settings.pictures_dir().display(),
            music = %settings.music_dir().display(),
            questions = quiz.len(),
            "services ready"
        );

        Ok(Self {
            settings: Arc::new(settings),
            clock,
            gallery,
            music,
            quiz,
        })
    }

    #[must_use]
    pub fn settings(&self) -> Arc<PresentationSettings> {
        Arc::clone(&self.settings)
    }

    #[must_use]
    pub fn clock(&self) -> Clock {
        self.clock
    }

    #[must_use]
    pub fn gallery(&self) -> Arc<GalleryService> {
        Arc::clone(&self.gallery)
    }

    #[must_use]
    pub fn music(&self) -> Arc<MusicService> {
        Arc::clone(&self.music)
    }

    #[must_use]
    pub fn quiz(&self) -> Arc<QuizService> {
        Arc::clone(&self.quiz)
    }
}
