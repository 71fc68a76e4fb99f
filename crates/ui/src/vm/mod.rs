mod carousel_vm;
mod intro_vm;
mod proposal_vm;
mod quiz_vm;
mod time_fmt;

pub use carousel_vm::{CarouselState, caption_for};
pub use intro_vm::{INFINITY_CAPTION, INTRO_PHRASES, TypingFrame};
pub use proposal_vm::{PROPOSAL_MESSAGE, RainDrop, emoji_rain};
pub use quiz_vm::{QuestionVm, QuizResultVm, map_question, map_quiz_result};
pub use time_fmt::{CounterUnit, CounterVm, format_since, map_counter};
