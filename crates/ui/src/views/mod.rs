mod gallery;
mod intro;
mod music;
mod presentation;
mod proposal;
mod quiz;
mod state;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use gallery::GalleryView;
pub use intro::IntroView;
pub use music::MusicPlayer;
pub use presentation::{PageNavigator, PageRender, PresentationView, build_sequencer};
pub use proposal::ProposalView;
pub use quiz::{QuizView, use_answer_submit};
pub use state::{ViewError, ViewState, run_blocking, view_state_from_resource};
