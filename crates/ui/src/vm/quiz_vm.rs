use serenade_core::model::Question;
use serenade_core::quiz::QuizScore;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuestionVm {
    pub counter_label: String,
    pub prompt: String,
    pub options: Vec<String>,
    pub button_label: &'static str,
    pub progress_percent: u8,
}

/// Map the question at `index` (zero-based) of a bank of `total`.
#[must_use]
pub fn map_question(question: &Question, index: usize, total: usize) -> QuestionVm {
    let is_last = index + 1 >= total;
    let progress_percent = if total == 0 {
        0
    } else {
        u8::try_from((index + 1) * 100 / total).unwrap_or(100)
    };
    QuestionVm {
        counter_label: format!("Pergunta {} de {total}", index + 1),
        prompt: format!("{}. {}", question.id().value(), question.prompt()),
        options: (0..question.options().len())
            .filter_map(|option| question.option_label(option))
            .collect(),
        button_label: if is_last {
            "💕 Ver Resultado 💕"
        } else {
            "💕 Próxima Pergunta 💕"
        },
        progress_percent,
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuizResultVm {
    pub emoji: &'static str,
    pub headline: String,
    pub grade: String,
    pub feedback_lines: Vec<&'static str>,
    pub wrong_label: Option<String>,
}

#[must_use]
pub fn map_quiz_result(score: &QuizScore) -> QuizResultVm {
    let wrong_label = (!score.wrong_questions.is_empty()).then(|| {
        let numbers = score
            .wrong_questions
            .iter()
            .map(|id| id.value().to_string())
            .collect::<Vec<_>>()
            .join(", ");
        format!("Para revisar: {numbers}")
    });
    QuizResultVm {
        emoji: score.feedback.emoji(),
        headline: format!(
            "Você acertou {} de {} perguntas!",
            score.correct_count, score.total
        ),
        grade: format!("Nota: {:.0}%", score.percentage),
        feedback_lines: score.feedback.message().lines().collect(),
        wrong_label,
    }
}
