pub const INTRO_PHRASES: [&str; 2] = [
    "Meu amor, agora construí minha própria aplicação",
    "Só para te dizer o quanto te amo, e sou feliz por ter você",
];

pub const INFINITY_CAPTION: &str = "Que o nosso amor seja como o infinito";

/// Where the typewriter is: which phrase and how many characters of it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TypingFrame {
    #[default]
    Waiting,
    Typing {
        phrase: usize,
        chars: usize,
    },
    /// All phrases typed; the infinity symbol takes over.
    Finished,
}

impl TypingFrame {
    /// The next frame after one typing interval.
    #[must_use]
    pub fn step(self) -> Self {
        match self {
            TypingFrame::Waiting => TypingFrame::Typing {
                phrase: 0,
                chars: 0,
            },
            TypingFrame::Typing { phrase, chars } => {
                let len = INTRO_PHRASES
                    .get(phrase)
                    .map_or(0, |text| text.chars().count());
                if chars < len {
                    TypingFrame::Typing {
                        phrase,
                        chars: chars + 1,
                    }
                } else if phrase + 1 < INTRO_PHRASES.len() {
                    TypingFrame::Typing {
                        phrase: phrase + 1,
                        chars: 0,
                    }
                } else {
                    TypingFrame::Finished
                }
            }
            TypingFrame::Finished => TypingFrame::Finished,
        }
    }

    /// True when the current phrase is fully typed and a pause is due.
    #[must_use]
    pub fn is_phrase_complete(self) -> bool {
        match self {
            TypingFrame::Typing { phrase, chars } => INTRO_PHRASES
                .get(phrase)
                .is_some_and(|text| chars >= text.chars().count()),
            TypingFrame::Waiting | TypingFrame::Finished => false,
        }
    }

    #[must_use]
    pub fn visible_text(self) -> String {
        match self {
            TypingFrame::Typing { phrase, chars } => INTRO_PHRASES
                .get(phrase)
                .map(|text| text.chars().take(chars).collect())
                .unwrap_or_default(),
            TypingFrame::Waiting | TypingFrame::Finished => String::new(),
        }
    }
}
