/// Lines shown under the slides, cycled by slide index.
const VERSES: &[&str] = &[
    "No teu olhar encontrei meu lar",
    "Em cada sorriso, um novo amanhecer",
    "Nossos sonhos entrelaçados como estrelas",
    "Tua mão na minha, eternidade em um toque",
    "Cada momento contigo é poesia",
    "Teus olhos são meu céu preferido",
    "Contigo, o tempo não passa, dança",
    "Nossa história escrita em cada abraço",
    "Caminhando juntos rumo ao infinito",
    "Teu amor é minha canção favorita",
    "Cada foto, uma memória eterna",
    "Você é o amor da minha vida",
    "Para sempre ao teu lado, meu amor",
];

/// Slide position plus how many slides have run their full duration.
///
/// The first cycle is complete once every slide has been shown; the
/// carousel keeps looping afterwards.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CarouselState {
    len: usize,
    index: usize,
    shown: usize,
}

impl CarouselState {
    #[must_use]
    pub fn new(len: usize) -> Self {
        Self {
            len,
            index: 0,
            shown: 0,
        }
    }

    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The current slide has run its course; move to the next one.
    /// Returns `true` exactly once, when the first full cycle completes.
    pub fn advance(&mut self) -> bool {
        if self.len == 0 {
            return false;
        }
        let was_complete = self.is_cycle_complete();
        self.shown = (self.shown + 1).min(self.len);
        self.index = (self.index + 1) % self.len;
        !was_complete && self.is_cycle_complete()
    }

    pub fn go_to(&mut self, index: usize) {
        if index < self.len {
            self.index = index;
        }
    }

    #[must_use]
    pub fn is_cycle_complete(&self) -> bool {
        self.len > 0 && self.shown >= self.len
    }

    #[must_use]
    pub fn progress_percent(&self) -> u8 {
        if self.len == 0 {
            return 0;
        }
        u8::try_from(self.shown * 100 / self.len).unwrap_or(100)
    }

    #[must_use]
    pub fn counter_label(&self) -> String {
        if self.len == 0 {
            return String::new();
        }
        format!("{} / {}", self.index + 1, self.len)
    }
}

#[must_use]
pub fn caption_for(index: usize) -> &'static str {
    VERSES[index % VERSES.len()]
}
