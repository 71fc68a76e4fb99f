mod page;
mod question;
mod session;
mod settings;

pub use page::{PageError, PageId};
pub use question::{AnswerKey, Question, QuestionError, QuestionId};
pub use session::{
    ButtonPosition, GalleryClick, GalleryProgress, Popup, PopupKind, ProposalAnswer, QuizProgress,
    QuizStep, VisitSession,
};
pub use settings::{
    DEFAULT_TITLE, PresentationSettings, PresentationSettingsDraft, SettingsError, TimingSettings,
    default_relationship_start,
};
