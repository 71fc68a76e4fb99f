use rand::Rng;
use rand::seq::IndexedRandom;

const RAIN_EMOJIS: &[&str] = &["💖", "💗", "💕", "❤️", "💍", "🎉", "✨", "🥳"];

pub const PROPOSAL_MESSAGE: [&str; 3] = [
    "Beatriz, meu amor,",
    "Você ilumina minha vida todos os dias.",
    "Esses anos ao seu lado foram os melhores da minha vida.",
];

/// One falling emoji of the celebration overlay.
#[derive(Clone, Debug, PartialEq)]
pub struct RainDrop {
    pub emoji: &'static str,
    pub left_percent: u8,
    pub delay_secs: f32,
    pub duration_secs: f32,
}

impl RainDrop {
    #[must_use]
    pub fn style(&self) -> String {
        format!(
            "left: {}%; animation-delay: {:.2}s; animation-duration: {:.2}s;",
            self.left_percent, self.delay_secs, self.duration_secs
        )
    }
}

#[must_use]
pub fn emoji_rain<R: Rng + ?Sized>(rng: &mut R, count: usize) -> Vec<RainDrop> {
    (0..count)
        .map(|_| RainDrop {
            emoji: RAIN_EMOJIS.choose(rng).copied().unwrap_or("💖"),
            left_percent: rng.random_range(0..=100),
            delay_secs: rng.random_range(0.0..3.0),
            duration_secs: rng.random_range(3.0..6.0),
        })
        .collect()
}
