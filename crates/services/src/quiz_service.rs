use std::collections::BTreeMap;

use rand::Rng;
use rand::seq::IndexedRandom;
use serenade_core::model::{AnswerKey, Popup, PopupKind, Question, QuestionError, QuestionId};
use serenade_core::quiz::{QuizScore, score_answers};
use tracing::debug;

/// Reveal shown for the joke question, whatever was picked.
pub const JOKE_REVEAL: &str = "💖 A resposta é:\nEU NA SUA VIDA, BEBÊ!!!! 💖";

const SUCCESS_MESSAGES: &[&str] = &[
    "✅ Ai sim bebê,\nvocê é o amor da\nminha vida ❤️",
    "💕 Acertou meu amor!\nVocê me conhece\ntão bem! 💕",
    "🌟 Isso aí bebê!\nVocê é demais! 🌟",
    "💖 Perfeito!\nMeu coração é seu! 💖",
    "✨ Maravilhosa!\nComo sempre! ✨",
    "❤️ Acertou meu bem!\nTe amo demais! ❤️",
];

/// Error templates; `{}` is replaced by the correct option's text.
const ERROR_TEMPLATES: &[&str] = &[
    "❌ Ops bebê!\nA resposta certa é:\n{}",
    "💔 Errou meu amor!\nMas tudo bem...\nEra: {}",
    "😅 Quase lá bebê!\nA correta era:\n{}",
    "🤔 Não foi dessa vez!\nA certa é:\n{}",
];

/// The question bank plus answer judging.
#[derive(Debug, Clone)]
pub struct QuizService {
    questions: Vec<Question>,
}

impl QuizService {
    #[must_use]
    pub fn new(questions: Vec<Question>) -> Self {
        Self { questions }
    }

    /// The built-in ten-question bank.
    ///
    /// # Errors
    ///
    /// Returns `QuestionError` if a bank entry fails validation.
    pub fn with_default_bank() -> Result<Self, QuestionError> {
        Ok(Self::new(default_bank()?))
    }

    #[must_use]
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    #[must_use]
    pub fn question(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Popup for `choice` on `question`. The joke question always gets its
    /// reveal; otherwise a random success or error line is picked.
    pub fn judge<R: Rng + ?Sized>(&self, question: &Question, choice: usize, rng: &mut R) -> Popup {
        let popup = match question.answer() {
            AnswerKey::Joke => Popup::new(JOKE_REVEAL, PopupKind::Special),
            AnswerKey::Correct(index) if index == choice => {
                let message = SUCCESS_MESSAGES.choose(rng).copied().unwrap_or_default();
                Popup::new(message, PopupKind::Success)
            }
            AnswerKey::Correct(_) => {
                let template = ERROR_TEMPLATES.choose(rng).copied().unwrap_or("{}");
                let correct = question.correct_option().unwrap_or_default();
                Popup::new(template.replace("{}", correct), PopupKind::Error)
            }
        };
        debug!(question = %question.id(), choice, kind = ?popup.kind, "answer judged");
        popup
    }

    #[must_use]
    pub fn score(&self, answers: &BTreeMap<QuestionId, usize>) -> QuizScore {
        score_answers(answers, &self.questions)
    }
}

fn default_bank() -> Result<Vec<Question>, QuestionError> {
    let entries: [(&str, &[&str], AnswerKey); 10] = [
        (
            "Qual foi o primeiro lugar que te convidei para sair?",
            &["Habbibs", "Assistir Netflix", "Minha Casa", "Cinema", "Hiper BomPreço"],
            AnswerKey::Correct(4),
        ),
        (
            "Onde foi nosso primeiro beijo?",
            &["No golzera", "No sunshine", "Lá na mimosa", "No cinema"],
            AnswerKey::Correct(0),
        ),
        (
            "Qual foi nossa primeira viagem?",
            &["Canoa Quebrada", "Cumbuco", "Icaraí", "Morro Branco"],
            AnswerKey::Correct(1),
        ),
        (
            "Qual a data do nosso primeiro beijo?",
            &["16/03/2020", "16/04/2020", "16/03/2021", "16/04/2021", "14/05/2021"],
            AnswerKey::Correct(2),
        ),
        (
            "Qual local mais gostamos de sair ?",
            &["Praia", "Shopping", "Comer", "Academia", "Cinema"],
            AnswerKey::Correct(2),
        ),
        (
            "Qual música representa nosso relacionamento?",
            &[
                "SomeWhere Only We Know",
                "Golzinho",
                "Na hora de amar",
                "Todas as músicas românticas me lembra você",
                "Não tem uma específica",
            ],
            AnswerKey::Correct(3),
        ),
        (
            "Qual o motivo da nossa primeira briga?",
            &["Stella", "Sorvete", "Viagem", "Sol quente"],
            AnswerKey::Correct(0),
        ),
        (
            "O que eu gosto mais em você?",
            &[
                "Cabeça e Topete",
                "Sorriso e Sinal no canto da boca",
                "Olhar e bico",
                "Quando fica manhosa",
                "Todas as respostas anteriores",
            ],
            AnswerKey::Correct(4),
        ),
        (
            "Qual comida eu não costumava comer muito e passei a comer mais depois que te conheci?",
            &["Sushi", "Kebbab", "Pizza", "Hamburguer"],
            AnswerKey::Correct(1),
        ),
        (
            "Qual foi o primeiro presente que te dei?",
            &["Squeeze", "Bolsa", "Viagem", "Calça", "Perfume"],
            AnswerKey::Joke,
        ),
    ];

    entries
        .into_iter()
        .zip(1u8..)
        .map(|((prompt, options, answer), ordinal)| {
            let options = options.iter().map(|option| (*option).to_string()).collect();
            Question::new(ordinal, prompt, options, answer)
        })
        .collect()
}
