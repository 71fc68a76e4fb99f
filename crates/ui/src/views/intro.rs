use dioxus::prelude::*;
use serenade_core::model::PageId;
use serenade_core::sequencer::auto_advance_target;
use tracing::debug;

use crate::context::AppContext;
use crate::views::{PageNavigator, run_blocking};
use crate::vm::{INFINITY_CAPTION, TypingFrame};

/// Pause after a phrase is fully typed.
const PHRASE_PAUSE: std::time::Duration = std::time::Duration::from_millis(1500);

#[component]
pub fn IntroView() -> Element {
    let ctx = use_context::<AppContext>();
    let navigator = use_context::<PageNavigator>();
    let timing = *ctx.settings().timing();
    let gallery = ctx.gallery();

    let frame = use_signal(TypingFrame::default);
    let show_skip = use_signal(|| false);

    let mosaic = use_resource(move || {
        let gallery = gallery.clone();
        async move {
            run_blocking(move || gallery.load_mosaic(&mut rand::rng()))
                .await
                .unwrap_or_default()
        }
    });

    use_future(move || async move {
        let mut frame = frame;
        tokio::time::sleep(timing.typing_start_delay).await;
        loop {
            let next = frame.peek().step();
            frame.set(next);
            if next == TypingFrame::Finished {
                break;
            }
            let pause = if next.is_phrase_complete() {
                PHRASE_PAUSE
            } else {
                timing.typing_interval
            };
            tokio::time::sleep(pause).await;
        }
    });

    use_future(move || async move {
        let mut show_skip = show_skip;
        tokio::time::sleep(timing.intro_skip_reveal).await;
        show_skip.set(true);
    });

    let navigator_for_timer = navigator.clone();
    use_future(move || {
        let navigator = navigator_for_timer.clone();
        async move {
            tokio::time::sleep(timing.intro_auto_advance).await;
            if let Some(next) = auto_advance_target(PageId::Intro) {
                debug!(next = %next, "intro timer elapsed");
                navigator.go(next);
            }
        }
    });

    let tiles = mosaic.read().clone().unwrap_or_default();
    let current = frame();
    let typed = current.visible_text();

    rsx! {
        div { class: "page intro-page",
            if tiles.is_empty() {
                div { class: "intro-background intro-background--gradient" }
            } else {
                div { class: "intro-background intro-mosaic",
                    for tile in tiles {
                        img { class: "intro-mosaic-tile", src: "{tile.data_uri}", alt: "" }
                    }
                }
            }
            div { class: "intro-overlay",
                if current == TypingFrame::Finished {
                    div { class: "intro-infinity",
                        div { class: "intro-infinity-symbol", "∞" }
                        p { class: "intro-infinity-text", "{INFINITY_CAPTION}" }
                        p { class: "intro-forever", "Para sempre" }
                    }
                } else {
                    h1 { class: "intro-typed",
                        "{typed}"
                        span { class: "cursor" }
                    }
                }
            }
            if show_skip() {
                button {
                    class: "btn btn-primary intro-skip",
                    r#type: "button",
                    onclick: move |_| {
                        if let Some(next) = PageId::Intro.next() {
                            navigator.go(next);
                        }
                    },
                    "Pular ➜"
                }
            }
        }
    }
}
