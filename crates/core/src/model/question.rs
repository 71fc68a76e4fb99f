use std::fmt;
use thiserror::Error;

//
// ─── ERRORS ───────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum QuestionError {
    #[error("question ordinal must start at 1")]
    ZeroOrdinal,

    #[error("question prompt cannot be empty")]
    EmptyPrompt,

    #[error("question {ordinal} needs at least two options, got {count}")]
    TooFewOptions { ordinal: u8, count: usize },

    #[error("question {ordinal} marks option {index} as correct but only has {count}")]
    AnswerOutOfRange {
        ordinal: u8,
        index: usize,
        count: usize,
    },
}

//
// ─── IDENTIFIERS ──────────────────────────────────────────────────────────────
//

/// 1-based ordinal of a question in the bank.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct QuestionId(u8);

impl QuestionId {
    #[must_use]
    pub fn new(ordinal: u8) -> Self {
        Self(ordinal)
    }

    #[must_use]
    pub fn value(&self) -> u8 {
        self.0
    }
}

impl fmt::Debug for QuestionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "q{}", self.0)
    }
}

impl fmt::Display for QuestionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "q{}", self.0)
    }
}

//
// ─── QUESTION ─────────────────────────────────────────────────────────────────
//

/// Which option, if any, counts as the right answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnswerKey {
    Correct(usize),
    /// Every option is "wrong"; the reveal is the punchline. Never scored.
    Joke,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    id: QuestionId,
    prompt: String,
    options: Vec<String>,
    answer: AnswerKey,
}

impl Question {
    /// Build a validated question.
    ///
    /// # Errors
    ///
    /// Returns `QuestionError` when the ordinal is zero, the prompt is blank,
    /// fewer than two options are given, or the correct index is out of range.
    pub fn new(
        ordinal: u8,
        prompt: impl Into<String>,
        options: Vec<String>,
        answer: AnswerKey,
    ) -> Result<Self, QuestionError> {
        if ordinal == 0 {
            return Err(QuestionError::ZeroOrdinal);
        }
        let prompt = prompt.into().trim().to_string();
        if prompt.is_empty() {
            return Err(QuestionError::EmptyPrompt);
        }
        if options.len() < 2 {
            return Err(QuestionError::TooFewOptions {
                ordinal,
                count: options.len(),
            });
        }
        if let AnswerKey::Correct(index) = answer {
            if index >= options.len() {
                return Err(QuestionError::AnswerOutOfRange {
                    ordinal,
                    index,
                    count: options.len(),
                });
            }
        }

        Ok(Self {
            id: QuestionId::new(ordinal),
            prompt,
            options,
            answer,
        })
    }

    #[must_use]
    pub fn id(&self) -> QuestionId {
        self.id
    }

    #[must_use]
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    #[must_use]
    pub fn options(&self) -> &[String] {
        &self.options
    }

    #[must_use]
    pub fn answer(&self) -> AnswerKey {
        self.answer
    }

    #[must_use]
    pub fn is_joke(&self) -> bool {
        matches!(self.answer, AnswerKey::Joke)
    }

    /// A joke question has no correct choice.
    #[must_use]
    pub fn is_correct(&self, choice: usize) -> bool {
        self.answer == AnswerKey::Correct(choice)
    }

    #[must_use]
    pub fn correct_option(&self) -> Option<&str> {
        match self.answer {
            AnswerKey::Correct(index) => self.options.get(index).map(String::as_str),
            AnswerKey::Joke => None,
        }
    }

    /// `"b) Cinema"` style label; letters run a, b, c...
    #[must_use]
    pub fn option_label(&self, index: usize) -> Option<String> {
        let option = self.options.get(index)?;
        let letter = u8::try_from(index)
            .ok()
            .and_then(|offset| b'a'.checked_add(offset))
            .filter(u8::is_ascii_lowercase)
            .map_or('?', char::from);
        Some(format!("{letter}) {option}"))
    }
}
