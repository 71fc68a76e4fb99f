use thiserror::Error;

use crate::model::{PageError, QuestionError, SettingsError};
use crate::sequencer::SequencerError;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Page(#[from] PageError),
    #[error(transparent)]
    Question(#[from] QuestionError),
    #[error(transparent)]
    Settings(#[from] SettingsError),
    #[error(transparent)]
    Sequencer(#[from] SequencerError),
}
