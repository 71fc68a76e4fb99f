use dioxus::prelude::*;
use dioxus_router::Routable;

use crate::views::PresentationView;

/// One route: the presentation, with an optional `page` hint in the query.
#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[route("/?:page", PresentationView)]
    Presentation { page: String },
}
