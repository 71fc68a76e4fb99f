//! Listing media files and embedding them as `data:` URIs.
//!
//! Nothing is cached: every call goes back to the filesystem. The data set
//! is one couple's photo folder and a couple of songs.

use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use image::codecs::jpeg::JpegEncoder;
use image::imageops::FilterType;
use tracing::{debug, warn};

use crate::error::MediaError;

const JPEG_QUALITY: u8 = 85;
/// Alternate data stream markers left behind by Windows downloads.
const ZONE_IDENTIFIER_SUFFIX: &str = ":Zone.Identifier";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MediaKind {
    Image,
    Video,
    Audio,
}

impl MediaKind {
    #[must_use]
    pub fn extensions(self) -> &'static [&'static str] {
        match self {
            MediaKind::Image => &["jpg", "jpeg", "png", "gif", "bmp", "webp"],
            MediaKind::Video => &["mp4", "avi", "mov", "mkv", "webm"],
            MediaKind::Audio => &["mp3", "wav", "ogg", "m4a"],
        }
    }

    /// Classify a path by its extension, case-insensitively.
    #[must_use]
    pub fn of(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        [MediaKind::Image, MediaKind::Video, MediaKind::Audio]
            .into_iter()
            .find(|kind| kind.extensions().contains(&ext.as_str()))
    }
}

/// MIME type used in the `data:` URI for non-image media.
#[must_use]
pub fn mime_for(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();
    match ext.as_str() {
        "mp4" => "video/mp4",
        "webm" => "video/webm",
        "avi" => "video/x-msvideo",
        "mov" => "video/quicktime",
        "mkv" => "video/x-matroska",
        "wav" => "audio/wav",
        "ogg" => "audio/ogg",
        "m4a" => "audio/mp4",
        "mp3" => "audio/mpeg",
        _ => "application/octet-stream",
    }
}

/// A media file ready to be dropped into a `src` attribute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmbeddedMedia {
    pub path: PathBuf,
    pub kind: MediaKind,
    pub data_uri: String,
}

impl EmbeddedMedia {
    #[must_use]
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MediaResolver {
    max_image_width: u32,
}

impl Default for MediaResolver {
    fn default() -> Self {
        Self::new(1920)
    }
}

impl MediaResolver {
    #[must_use]
    pub fn new(max_image_width: u32) -> Self {
        Self { max_image_width }
    }

    #[must_use]
    pub fn max_image_width(&self) -> u32 {
        self.max_image_width
    }

    /// Files in `dir` whose extension matches one of `kinds`, sorted by name.
    ///
    /// A missing or unreadable directory is an empty list.
    #[must_use]
    pub fn list(&self, dir: &Path, kinds: &[MediaKind]) -> Vec<PathBuf> {
        let entries = match fs::read_dir(dir) {
            Ok(entries) => entries,
            Err(err) => {
                debug!(dir = %dir.display(), error = %err, "media directory unavailable");
                return Vec::new();
            }
        };

        let mut names: Vec<String> = entries
            .filter_map(Result::ok)
            .filter(|entry| entry.file_type().map(|ty| !ty.is_dir()).unwrap_or(false))
            .map(|entry| entry.file_name().to_string_lossy().into_owned())
            .filter(|name| !name.ends_with(ZONE_IDENTIFIER_SUFFIX))
            .filter(|name| MediaKind::of(Path::new(name)).is_some_and(|kind| kinds.contains(&kind)))
            .collect();
        names.sort();

        names.into_iter().map(|name| dir.join(name)).collect()
    }

    #[must_use]
    pub fn list_images(&self, dir: &Path) -> Vec<PathBuf> {
        self.list(dir, &[MediaKind::Image])
    }

    /// Images and videos, interleaved in name order.
    #[must_use]
    pub fn list_media(&self, dir: &Path) -> Vec<PathBuf> {
        self.list(dir, &[MediaKind::Image, MediaKind::Video])
    }

    #[must_use]
    pub fn list_music(&self, dir: &Path) -> Vec<PathBuf> {
        self.list(dir, &[MediaKind::Audio])
    }

    /// Embed one file, downsizing images to the resolver's max width.
    ///
    /// # Errors
    ///
    /// Returns `MediaError` when the file cannot be read, decoded or is not
    /// a recognized media type.
    pub fn encode(&self, path: &Path) -> Result<EmbeddedMedia, MediaError> {
        self.encode_with_width(path, self.max_image_width)
    }

    /// Like [`MediaResolver::encode`] with an explicit image width cap.
    ///
    /// # Errors
    ///
    /// Returns `MediaError` when the file cannot be read, decoded or is not
    /// a recognized media type.
    pub fn encode_with_width(
        &self,
        path: &Path,
        max_width: u32,
    ) -> Result<EmbeddedMedia, MediaError> {
        let kind = MediaKind::of(path).ok_or_else(|| MediaError::Unsupported {
            path: path.to_path_buf(),
        })?;

        let data_uri = match kind {
            MediaKind::Image => encode_image(path, max_width)?,
            MediaKind::Video | MediaKind::Audio => {
                let bytes = fs::read(path).map_err(|source| MediaError::Io {
                    path: path.to_path_buf(),
                    source,
                })?;
                format!("data:{};base64,{}", mime_for(path), STANDARD.encode(bytes))
            }
        };

        Ok(EmbeddedMedia {
            path: path.to_path_buf(),
            kind,
            data_uri,
        })
    }

    /// Embed every path, logging and skipping the ones that fail.
    #[must_use]
    pub fn encode_all(&self, paths: &[PathBuf]) -> Vec<EmbeddedMedia> {
        self.encode_all_with_width(paths, self.max_image_width)
    }

    #[must_use]
    pub fn encode_all_with_width(&self, paths: &[PathBuf], max_width: u32) -> Vec<EmbeddedMedia> {
        paths
            .iter()
            .filter_map(|path| match self.encode_with_width(path, max_width) {
                Ok(media) => Some(media),
                Err(err) => {
                    warn!(error = %err, "skipping media file");
                    None
                }
            })
            .collect()
    }
}

/// Re-encode an image as JPEG, scaled down to `max_width` when wider.
fn encode_image(path: &Path, max_width: u32) -> Result<String, MediaError> {
    let image_err = |source: image::ImageError| MediaError::Image {
        path: path.to_path_buf(),
        source,
    };

    let mut img = image::open(path).map_err(image_err)?;
    if img.width() > max_width {
        let ratio = f64::from(max_width) / f64::from(img.width());
        // Truncation matches the integer height the width ratio implies.
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let height = ((f64::from(img.height()) * ratio) as u32).max(1);
        img = img.resize_exact(max_width, height, FilterType::Lanczos3);
    }

    let rgb = img.to_rgb8();
    let mut buffer = Cursor::new(Vec::new());
    JpegEncoder::new_with_quality(&mut buffer, JPEG_QUALITY)
        .encode_image(&rgb)
        .map_err(image_err)?;

    Ok(format!(
        "data:image/jpeg;base64,{}",
        STANDARD.encode(buffer.into_inner())
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_extensions_case_insensitively() {
        assert_eq!(MediaKind::of(Path::new("a.JPG")), Some(MediaKind::Image));
        assert_eq!(MediaKind::of(Path::new("clip.webm")), Some(MediaKind::Video));
        assert_eq!(MediaKind::of(Path::new("song.Mp3")), Some(MediaKind::Audio));
        assert_eq!(MediaKind::of(Path::new("notes.txt")), None);
        assert_eq!(MediaKind::of(Path::new("d.jpg:Zone.Identifier")), None);
        assert_eq!(MediaKind::of(Path::new("README")), None);
    }

    #[test]
    fn mime_types_follow_extension() {
        assert_eq!(mime_for(Path::new("x.mov")), "video/quicktime");
        assert_eq!(mime_for(Path::new("x.MP4")), "video/mp4");
        assert_eq!(mime_for(Path::new("x.mp3")), "audio/mpeg");
        assert_eq!(mime_for(Path::new("x")), "application/octet-stream");
    }

    #[test]
    fn unsupported_files_are_rejected_before_io() {
        let resolver = MediaResolver::default();
        let err = resolver.encode(Path::new("does-not-exist.txt")).unwrap_err();
        assert!(matches!(err, MediaError::Unsupported { .. }));
    }
}
