use std::sync::Arc;

use serenade_core::Clock;
use serenade_core::model::PresentationSettings;
use services::{GalleryService, MusicService, QuizService};

pub trait UiApp: Send + Sync {
    fn settings(&self) -> Arc<PresentationSettings>;
    fn clock(&self) -> Clock;
    /// Navigation hint applied when the window opens without one.
    fn start_page(&self) -> Option<String>;

    fn gallery(&self) -> Arc<GalleryService>;
    fn music(&self) -> Arc<MusicService>;
    fn quiz(&self) -> Arc<QuizService>;
}

#[derive(Clone)]
pub struct AppContext {
    settings: Arc<PresentationSettings>,
    clock: Clock,
    start_page: Option<String>,

    gallery: Arc<GalleryService>,
    music: Arc<MusicService>,
    quiz: Arc<QuizService>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            settings: app.settings(),
            clock: app.clock(),
            start_page: app.start_page(),
            gallery: app.gallery(),
            music: app.music(),
            quiz: app.quiz(),
        }
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
    pub fn start_page(&self) -> Option<&str> {
        self.start_page.as_deref()
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

// This context is provided by the application composition root (e.g. `crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
