#![forbid(unsafe_code)]

pub mod app_services;
pub mod error;
pub mod gallery;
pub mod media;
pub mod music;
pub mod quiz_service;

pub use serenade_core::Clock;

pub use app_services::AppServices;
pub use error::{AppServicesError, GalleryError, MediaError};
pub use gallery::{GalleryService, random_button_position};
pub use media::{EmbeddedMedia, MediaKind, MediaResolver};
pub use music::{MusicService, TrackRole, pick_track};
pub use quiz_service::QuizService;
