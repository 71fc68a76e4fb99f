//! Page sequencing: which page renders, and how a visit moves between pages.
//!
//! The sequencer owns no session. Callers hand it the visit's
//! [`VisitSession`] explicitly, so one sequencer can be shared by every
//! render of a visit and a request can be resolved on a copy before it is
//! committed.

use std::collections::HashMap;

use thiserror::Error;

use crate::model::{PageId, VisitSession};

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SequencerError {
    #[error("no renderer registered for page `{0}`")]
    Unregistered(PageId),
}

/// The `page` query parameter of an incoming navigation, if any.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NavigationRequest {
    page: Option<String>,
}

impl NavigationRequest {
    /// An empty value means the parameter was absent.
    #[must_use]
    pub fn from_query(page: &str) -> Self {
        Self {
            page: (!page.is_empty()).then(|| page.to_string()),
        }
    }

    #[must_use]
    pub fn none() -> Self {
        Self::default()
    }

    /// Pages an external link may jump straight to. Intro and Proposal are
    /// only reachable through the sequence itself. The value must match
    /// exactly; case or padding variants are not hints.
    #[must_use]
    pub fn target(&self) -> Option<PageId> {
        match self.page.as_deref() {
            Some("gallery") => Some(PageId::Gallery),
            Some("quiz") => Some(PageId::Quiz),
            _ => None,
        }
    }
}

/// Registration table from page identifier to render callback.
#[derive(Clone)]
pub struct PageSequencer<R> {
    renderers: HashMap<PageId, R>,
}

impl<R> Default for PageSequencer<R> {
    fn default() -> Self {
        Self {
            renderers: HashMap::new(),
        }
    }
}

impl<R> PageSequencer<R> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `render` for `page`. A later registration replaces an
    /// earlier one; the replaced callback is returned.
    pub fn register(&mut self, page: PageId, render: R) -> Option<R> {
        self.renderers.insert(page, render)
    }

    #[must_use]
    pub fn with_page(mut self, page: PageId, render: R) -> Self {
        self.register(page, render);
        self
    }

    #[must_use]
    pub fn is_registered(&self, page: PageId) -> bool {
        self.renderers.contains_key(&page)
    }

    /// Move the visit to `page`.
    ///
    /// # Errors
    ///
    /// Returns `SequencerError::Unregistered` and leaves the session alone
    /// when `page` has no renderer.
    pub fn navigate_to(
        &self,
        session: &mut VisitSession,
        page: PageId,
    ) -> Result<PageId, SequencerError> {
        if !self.is_registered(page) {
            return Err(SequencerError::Unregistered(page));
        }
        session.current_page = page;
        Ok(page)
    }

    /// Apply the request's navigation hint, if it names a registered page
    /// an external link may target. Otherwise the session keeps its page.
    pub fn resolve_from_request(
        &self,
        session: &mut VisitSession,
        request: &NavigationRequest,
    ) -> PageId {
        if let Some(target) = request.target().filter(|page| self.is_registered(*page)) {
            session.current_page = target;
        }
        session.current_page
    }

    /// Invoke the callback registered for the session's current page.
    ///
    /// # Errors
    ///
    /// Returns `SequencerError::Unregistered` when nothing is registered.
    pub fn render_current<T>(&self, session: &VisitSession) -> Result<T, SequencerError>
    where
        R: Fn() -> T,
    {
        self.renderers
            .get(&session.current_page)
            .map(|render| render())
            .ok_or(SequencerError::Unregistered(session.current_page))
    }
}

/// Timed edge taken without user input.
#[must_use]
pub fn auto_advance_target(page: PageId) -> Option<PageId> {
    match page {
        PageId::Intro => Some(PageId::Quiz),
        PageId::Quiz | PageId::Gallery | PageId::Proposal => None,
    }
}

/// Edge back into the quiz once the gallery has cycled through its media.
#[must_use]
pub fn replay_target(page: PageId) -> Option<PageId> {
    match page {
        PageId::Gallery => Some(PageId::Quiz),
        PageId::Intro | PageId::Quiz | PageId::Proposal => None,
    }
}
