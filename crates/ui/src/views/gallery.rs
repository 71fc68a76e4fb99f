use std::time::Duration;

use dioxus::prelude::*;
use serenade_core::Clock;
use serenade_core::model::{GalleryClick, PageId, VisitSession};
use serenade_core::sequencer::replay_target;
use services::{EmbeddedMedia, MediaKind, random_button_position};
use tracing::{debug, info};

use crate::context::AppContext;
use crate::views::{PageNavigator, ViewError, ViewState, run_blocking, view_state_from_resource};
use crate::vm::{CarouselState, caption_for, map_counter};

#[component]
pub fn GalleryView() -> Element {
    let ctx = use_context::<AppContext>();
    let settings = ctx.settings();
    let gallery = ctx.gallery();

    let resource = use_resource(move || {
        let gallery = gallery.clone();
        async move {
            run_blocking(move || gallery.load_slides())
                .await
                .and_then(|slides| slides.map_err(ViewError::from))
        }
    });
    let state = view_state_from_resource(&resource);

    rsx! {
        div { class: "page gallery-page",
            h1 { class: "gallery-title", "💕 {settings.title()} 💕" }
            RelationshipCounter {
                start: settings.relationship_start(),
                clock: ctx.clock(),
                tick: settings.timing().counter_tick,
            }
            match state {
                ViewState::Idle => rsx! {
                    p { "Aguardando..." }
                },
                ViewState::Loading => rsx! {
                    p { class: "gallery-loading", "Carregando memórias..." }
                },
                ViewState::Error(err) => rsx! {
                    div { class: "notice notice--error",
                        p { "{err.message()}" }
                    }
                },
                ViewState::Ready(slides) => rsx! {
                    Carousel { slides, slide_duration: settings.timing().slide_duration }
                    ProposalGate { clicks_required: settings.clicks_to_proposal() }
                },
            }
        }
    }
}

#[component]
fn RelationshipCounter(start: chrono::NaiveDateTime, clock: Clock, tick: Duration) -> Element {
    let now = use_signal(|| clock.now());

    use_future(move || async move {
        let mut now = now;
        loop {
            tokio::time::sleep(tick).await;
            now.set(clock.now());
        }
    });

    let vm = map_counter(start, now());
    rsx! {
        div { class: "counter",
            h2 { class: "counter-title", "⏰ Tempo de Relacionamento" }
            p { class: "counter-subtitle", "{vm.subtitle}" }
            div { class: "counter-units",
                for unit in vm.units {
                    div { class: "counter-unit",
                        span { class: "counter-value", "{unit.value}" }
                        span { class: "counter-label", "{unit.label}" }
                    }
                }
            }
        }
    }
}

#[component]
fn Carousel(slides: Vec<EmbeddedMedia>, slide_duration: Duration) -> Element {
    let session = use_context::<Signal<VisitSession>>();
    let len = slides.len();
    let mut carousel = use_signal(|| CarouselState::new(len));

    use_future(move || async move {
        let mut session = session;
        let mut carousel = carousel;
        loop {
            tokio::time::sleep(slide_duration).await;
            let completed = carousel.write().advance();
            if completed {
                info!("gallery cycle complete");
                let mut visit = session.write();
                visit.mark_cycle_complete();
                visit.set_button_position(random_button_position(&mut rand::rng()));
            }
        }
    });

    let state = carousel();
    let Some(slide) = slides.get(state.index()).cloned() else {
        return rsx! {};
    };
    let caption = caption_for(state.index());
    let progress = state.progress_percent();

    rsx! {
        div { class: "carousel",
            div { class: "carousel-frame",
                match slide.kind {
                    MediaKind::Video => rsx! {
                        video {
                            class: "carousel-media",
                            src: "{slide.data_uri}",
                            autoplay: true,
                            muted: true,
                            r#loop: true,
                        }
                    },
                    MediaKind::Image | MediaKind::Audio => rsx! {
                        img { class: "carousel-media", src: "{slide.data_uri}", alt: "{slide.file_name()}" }
                    },
                }
            }
            p { class: "carousel-caption", "{caption}" }
            div { class: "carousel-controls",
                button {
                    class: "btn btn-secondary",
                    r#type: "button",
                    onclick: move |_| {
                        let previous = (state.index() + len - 1) % len;
                        carousel.write().go_to(previous);
                    },
                    "❮"
                }
                span { class: "carousel-counter", "{state.counter_label()}" }
                button {
                    class: "btn btn-secondary",
                    r#type: "button",
                    onclick: move |_| carousel.write().go_to((state.index() + 1) % len),
                    "❯"
                }
            }
            div { class: "carousel-progress",
                div { class: "carousel-progress-fill", style: "width: {progress}%;" }
            }
            p { class: "carousel-progress-label", "{progress}%" }
        }
    }
}

/// After a full cycle: a wandering button that unlocks the proposal, and a
/// way back into the quiz.
#[component]
fn ProposalGate(clicks_required: u32) -> Element {
    let session = use_context::<Signal<VisitSession>>();
    let navigator = use_context::<PageNavigator>();

    let gallery = session.read().gallery.clone();
    if !gallery.progress_complete {
        return rsx! {};
    }

    let position = gallery.button_position;
    let on_click = {
        let navigator = navigator.clone();
        move |_: MouseEvent| {
            let mut session = session;
            let outcome = session.write().register_gallery_click(clicks_required);
            debug!(?outcome, "gate clicked");
            match outcome {
                GalleryClick::Counted(_) => {
                    session
                        .write()
                        .set_button_position(random_button_position(&mut rand::rng()));
                }
                GalleryClick::Unlocked => {
                    if let Some(next) = PageId::Gallery.next() {
                        navigator.go(next);
                    }
                }
                GalleryClick::Ignored => {}
            }
        }
    };
    let on_replay = move |_: MouseEvent| {
        if let Some(target) = replay_target(PageId::Gallery) {
            navigator.replay_quiz(target);
        }
    };

    rsx! {
        div { class: "gate",
            div { class: "gate-counter", "💕 {gallery.click_count} / {clicks_required}" }
            button {
                class: "gate-button",
                r#type: "button",
                style: "top: {position.top}%; left: {position.left}%;",
                onclick: on_click,
                "💖 Clique aqui 💖"
            }
            button {
                class: "btn btn-secondary gate-replay",
                r#type: "button",
                onclick: on_replay,
                "🔁 Refazer o quiz"
            }
        }
    }
}
