use dioxus::prelude::*;
use serenade_core::model::PageId;

use crate::context::AppContext;
use crate::views::run_blocking;

/// Background song for the current page. Silent when no track matches.
#[component]
pub fn MusicPlayer(page: PageId) -> Element {
    let ctx = use_context::<AppContext>();
    let music = ctx.music();

    let track = use_resource(use_reactive((&page,), move |(page,)| {
        let music = music.clone();
        async move {
            run_blocking(move || music.track_for_page(page))
                .await
                .ok()
                .flatten()
        }
    }));

    let track = track.read().clone().flatten();
    rsx! {
        if let Some(track) = track {
            div { class: "music-player",
                audio {
                    src: "{track.data_uri}",
                    autoplay: true,
                    r#loop: true,
                }
            }
        }
    }
}
