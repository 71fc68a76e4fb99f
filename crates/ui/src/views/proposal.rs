use dioxus::prelude::*;
use serenade_core::model::VisitSession;
use tracing::info;

use crate::vm::{PROPOSAL_MESSAGE, RainDrop, emoji_rain};

const RAIN_DROPS: usize = 40;

#[component]
pub fn ProposalView() -> Element {
    let session = use_context::<Signal<VisitSession>>();
    let celebrating = session.read().is_celebrating();

    let on_accept = move |_: MouseEvent| {
        let mut session = session;
        session.write().accept_proposal();
        info!("proposal accepted");
    };

    rsx! {
        div { class: "page proposal-page",
            div { class: "proposal-hearts",
                for heart in ["💖", "💗", "💕", "❤️", "💖", "💗", "💕", "❤️"] {
                    span { class: "proposal-heart", "{heart}" }
                }
            }
            div { class: "proposal-card",
                p { class: "proposal-message",
                    for line in PROPOSAL_MESSAGE {
                        span { class: "proposal-message-line", "{line}" }
                    }
                }
                div { class: "proposal-ring", "💍" }
                h1 { class: "proposal-question", "QUER CASAR COMIGO?" }
            }
            if celebrating {
                Celebration {}
            } else {
                button {
                    class: "btn btn-primary proposal-accept",
                    r#type: "button",
                    onclick: on_accept,
                    "💕 SIM! EU ACEITO! 💕"
                }
            }
        }
    }
}

#[component]
fn Celebration() -> Element {
    let drops: Vec<RainDrop> = use_hook(|| emoji_rain(&mut rand::rng(), RAIN_DROPS));

    rsx! {
        div { class: "celebration",
            div { class: "emoji-rain",
                for drop in drops {
                    span { class: "emoji-drop", style: "{drop.style()}", "{drop.emoji}" }
                }
            }
            div { class: "celebration-card",
                h1 { class: "celebration-title", "🎉 ELA DISSE SIM! 🎉" }
                div { class: "celebration-emojis", "💍 💕 🎊 ✨ 🥳 🎆 💖 🎈" }
                p { class: "celebration-text", "AAHHH QUE FELICIDADE!" }
                p { class: "celebration-text", "VAMOS CASAR! 💍💕✨" }
            }
        }
    }
}
