use std::collections::BTreeMap;

use crate::model::{PageId, QuestionId};

//
// ─── POPUP ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PopupKind {
    Success,
    Error,
    /// Reserved for the joke question reveal.
    Special,
}

impl PopupKind {
    #[must_use]
    pub fn accent_color(self) -> &'static str {
        match self {
            PopupKind::Success => "#90ee90",
            PopupKind::Error => "#ff6347",
            PopupKind::Special => "#ff6b9d",
        }
    }

    #[must_use]
    pub fn css_modifier(self) -> &'static str {
        match self {
            PopupKind::Success => "popup--success",
            PopupKind::Error => "popup--error",
            PopupKind::Special => "popup--special",
        }
    }
}

/// Transient feedback shown over the quiz after an answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Popup {
    pub message: String,
    pub kind: PopupKind,
}

impl Popup {
    #[must_use]
    pub fn new(message: impl Into<String>, kind: PopupKind) -> Self {
        Self {
            message: message.into(),
            kind,
        }
    }

    /// Message split on line breaks, for rendering one line per element.
    #[must_use]
    pub fn lines(&self) -> Vec<&str> {
        self.message.lines().collect()
    }
}

//
// ─── QUIZ PROGRESS ────────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuizProgress {
    pub current_question: usize,
    pub answers: BTreeMap<QuestionId, usize>,
    pub show_result: bool,
}

/// What happened when the popup after an answer was dismissed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizStep {
    NextQuestion(usize),
    ShowResult,
    /// No popup was pending; nothing changed.
    Idle,
}

//
// ─── GALLERY PROGRESS ─────────────────────────────────────────────────────────
//

/// Button position as (top, left) viewport percentages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ButtonPosition {
    pub top: u8,
    pub left: u8,
}

impl Default for ButtonPosition {
    fn default() -> Self {
        Self { top: 45, left: 45 }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GalleryProgress {
    pub progress_complete: bool,
    pub click_count: u32,
    pub button_position: ButtonPosition,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GalleryClick {
    /// Click counted; holds the new count.
    Counted(u32),
    /// Enough clicks; the proposal is unlocked and counters were reset.
    Unlocked,
    /// The media cycle has not finished yet, so the gate is closed.
    Ignored,
}

//
// ─── PROPOSAL ─────────────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ProposalAnswer {
    #[default]
    Pending,
    Accepted,
}

//
// ─── VISIT SESSION ────────────────────────────────────────────────────────────
//

/// Everything one visit remembers. `Default` is a fresh visit; there is no
/// partially-initialized state to guard against.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VisitSession {
    pub current_page: PageId,
    pub quiz: QuizProgress,
    pub popup: Option<Popup>,
    pub gallery: GalleryProgress,
    pub proposal: ProposalAnswer,
}

impl VisitSession {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn current_page(&self) -> PageId {
        self.current_page
    }

    pub fn record_answer(&mut self, question: QuestionId, choice: usize) {
        self.quiz.answers.insert(question, choice);
    }

    #[must_use]
    pub fn answer_for(&self, question: QuestionId) -> Option<usize> {
        self.quiz.answers.get(&question).copied()
    }

    pub fn show_popup(&mut self, popup: Popup) {
        self.popup = Some(popup);
    }

    #[must_use]
    pub fn has_popup(&self) -> bool {
        self.popup.is_some()
    }

    /// Dismiss the pending popup and move the quiz forward one step.
    pub fn finish_popup_step(&mut self, total_questions: usize) -> QuizStep {
        if self.popup.take().is_none() {
            return QuizStep::Idle;
        }
        if self.quiz.current_question + 1 < total_questions {
            self.quiz.current_question += 1;
            QuizStep::NextQuestion(self.quiz.current_question)
        } else {
            self.quiz.show_result = true;
            QuizStep::ShowResult
        }
    }

    pub fn reset_quiz(&mut self) {
        self.quiz = QuizProgress::default();
        self.popup = None;
    }

    pub fn mark_cycle_complete(&mut self) {
        self.gallery.progress_complete = true;
    }

    pub fn set_button_position(&mut self, position: ButtonPosition) {
        self.gallery.button_position = position;
    }

    /// Count a click on the gallery gate button.
    pub fn register_gallery_click(&mut self, required: u32) -> GalleryClick {
        if !self.gallery.progress_complete {
            return GalleryClick::Ignored;
        }
        self.gallery.click_count += 1;
        if self.gallery.click_count >= required {
            self.gallery.click_count = 0;
            self.gallery.progress_complete = false;
            GalleryClick::Unlocked
        } else {
            GalleryClick::Counted(self.gallery.click_count)
        }
    }

    pub fn accept_proposal(&mut self) {
        self.proposal = ProposalAnswer::Accepted;
    }

    #[must_use]
    pub fn is_celebrating(&self) -> bool {
        self.proposal == ProposalAnswer::Accepted
    }
}
