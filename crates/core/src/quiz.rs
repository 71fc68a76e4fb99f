//! Quiz scoring. Pure: answers in, score out.

use std::collections::BTreeMap;

use crate::model::{Question, QuestionId};

/// Coarse verdict shown under the final score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedbackTier {
    Perfect,
    Great,
    Good,
    Fair,
    NeedsStudy,
}

impl FeedbackTier {
    #[must_use]
    pub fn from_percentage(percentage: f64) -> Self {
        if percentage >= 100.0 {
            Self::Perfect
        } else if percentage >= 80.0 {
            Self::Great
        } else if percentage >= 60.0 {
            Self::Good
        } else if percentage >= 40.0 {
            Self::Fair
        } else {
            Self::NeedsStudy
        }
    }

    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            Self::Perfect => "PERFEIÇÃO ABSOLUTA! 🏆\nVocê me conhece melhor\nque eu mesma! 💖",
            Self::Great => "INCRÍVEL! 🎉\nVocê realmente presta\natenção em tudo! 💕",
            Self::Good => "MUITO BOM! 😊\nVocê me conhece\nbastante! ❤️",
            Self::Fair => "BOM COMEÇO! 😅\nMas ainda tem\nmuito pra aprender! 💗",
            Self::NeedsStudy => "VAMOS ESTUDAR\nMAIS BEBÊ! 📚\nAinda temos tempo! 💝",
        }
    }

    #[must_use]
    pub fn emoji(self) -> &'static str {
        match self {
            Self::Perfect => "🌟",
            Self::Great => "⭐",
            Self::Good => "💫",
            Self::Fair => "✨",
            Self::NeedsStudy => "💕",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct QuizScore {
    pub correct_count: u32,
    pub wrong_count: u32,
    pub total: u32,
    pub percentage: f64,
    pub feedback: FeedbackTier,
    /// Ordinals of scoreable questions answered wrong or not at all.
    pub wrong_questions: Vec<QuestionId>,
}

/// Count matches against each question's correct option.
///
/// Joke questions are skipped and missing answers count as wrong. With no
/// scoreable questions the percentage is zero.
#[must_use]
pub fn score_answers(answers: &BTreeMap<QuestionId, usize>, questions: &[Question]) -> QuizScore {
    let mut correct_count = 0u32;
    let mut total = 0u32;
    let mut wrong_questions = Vec::new();

    for question in questions.iter().filter(|question| !question.is_joke()) {
        total += 1;
        let is_right = answers
            .get(&question.id())
            .is_some_and(|choice| question.is_correct(*choice));
        if is_right {
            correct_count += 1;
        } else {
            wrong_questions.push(question.id());
        }
    }

    let percentage = if total == 0 {
        0.0
    } else {
        f64::from(correct_count) / f64::from(total) * 100.0
    };

    QuizScore {
        correct_count,
        wrong_count: total - correct_count,
        total,
        percentage,
        feedback: FeedbackTier::from_percentage(percentage),
        wrong_questions,
    }
}
