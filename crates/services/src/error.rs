//! Shared error types for the services crate.

use std::path::PathBuf;

use serenade_core::model::{QuestionError, SettingsError};
use thiserror::Error;

/// Errors emitted while reading or embedding a single media file.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum MediaError {
    #[error("{} is not a recognized media file", path.display())]
    Unsupported { path: PathBuf },
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to process image {}: {source}", path.display())]
    Image {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}

/// Errors emitted by `GalleryService`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum GalleryError {
    #[error("no photos or videos found in {}", dir.display())]
    NoMedia { dir: PathBuf },
}

/// Errors emitted while bootstrapping app services.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppServicesError {
    #[error(transparent)]
    Settings(#[from] SettingsError),
    #[error(transparent)]
    QuestionBank(#[from] QuestionError),
}
