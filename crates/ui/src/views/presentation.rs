use std::rc::Rc;

use dioxus::prelude::*;
use serenade_core::model::{PageId, VisitSession};
use serenade_core::sequencer::{NavigationRequest, PageSequencer};
use tracing::{info, warn};

use crate::context::AppContext;
use crate::views::{GalleryView, IntroView, MusicPlayer, ProposalView, QuizView};

pub type PageRender = fn() -> Element;

fn render_intro() -> Element {
    rsx! { IntroView {} }
}

fn render_quiz() -> Element {
    rsx! { QuizView {} }
}

fn render_gallery() -> Element {
    rsx! { GalleryView {} }
}

fn render_proposal() -> Element {
    rsx! { ProposalView {} }
}

#[must_use]
pub fn build_sequencer() -> PageSequencer<PageRender> {
    PageSequencer::<PageRender>::new()
        .with_page(PageId::Intro, render_intro)
        .with_page(PageId::Quiz, render_quiz)
        .with_page(PageId::Gallery, render_gallery)
        .with_page(PageId::Proposal, render_proposal)
}

/// Page transitions for the views. Every move goes through the sequencer
/// so an unregistered page never becomes current.
#[derive(Clone)]
pub struct PageNavigator {
    session: Signal<VisitSession>,
    sequencer: Rc<PageSequencer<PageRender>>,
}

impl PageNavigator {
    #[must_use]
    pub fn new(session: Signal<VisitSession>, sequencer: Rc<PageSequencer<PageRender>>) -> Self {
        Self { session, sequencer }
    }

    pub fn go(&self, page: PageId) {
        let mut session = self.session;
        let result = self.sequencer.navigate_to(&mut session.write(), page);
        match result {
            Ok(page) => info!(page = %page, "page changed"),
            Err(err) => warn!(error = %err, "navigation rejected"),
        }
    }

    /// Clear the quiz and take the visit back to it.
    pub fn replay_quiz(&self, to: PageId) {
        let mut session = self.session;
        session.write().reset_quiz();
        self.go(to);
    }
}

#[component]
pub fn PresentationView(page: String) -> Element {
    let ctx = use_context::<AppContext>();
    let session = use_context::<Signal<VisitSession>>();
    let sequencer = use_hook(|| Rc::new(build_sequencer()));
    use_context_provider(|| PageNavigator::new(session, Rc::clone(&sequencer)));

    // A hint is honored once; later renders with the same query leave the
    // visit where the user took it.
    let mut applied_hint = use_signal(|| None::<String>);
    let query = if page.trim().is_empty() {
        ctx.start_page().unwrap_or_default().to_string()
    } else {
        page
    };
    let request = if applied_hint.read().as_deref() == Some(query.as_str()) {
        NavigationRequest::none()
    } else {
        NavigationRequest::from_query(&query)
    };

    let mut visit = session.read().clone();
    let current = sequencer.resolve_from_request(&mut visit, &request);

    let sequencer_for_commit = Rc::clone(&sequencer);
    use_effect(use_reactive((&query,), move |(query,)| {
        if applied_hint.peek().as_deref() == Some(query.as_str()) {
            return;
        }
        let mut session = session;
        let mut next = session.peek().clone();
        let page = sequencer_for_commit
            .resolve_from_request(&mut next, &NavigationRequest::from_query(&query));
        if next != *session.peek() {
            info!(page = %page, hint = %query, "navigation hint applied");
            session.set(next);
        }
        applied_hint.set(Some(query));
    }));

    let content = match sequencer.render_current(&visit) {
        Ok(content) => content,
        Err(err) => rsx! {
            div { class: "notice notice--error",
                p { "{err}" }
            }
        },
    };

    rsx! {
        div { class: "presentation presentation--{current.slug()}",
            {content}
            MusicPlayer { page: current }
        }
    }
}
