use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::domain::card::Card;
use crate::domain::deck::Deck;
use crate::engine::RandomSource;
use crate::infra::rng_seed::RngSeed;

/// Детерминированный RNG для раздач и реплея.
/// Позволяет воспроизводить одни и те же колоды при одинаковом seed
/// (ChaCha8 стабилен между платформами).
#[derive(Clone, Debug)]
pub struct DeterministicRng {
    inner: ChaCha8Rng,
}

impl DeterministicRng {
    pub fn from_seed(seed: [u8; 32]) -> Self {
        Self {
            inner: ChaCha8Rng::from_seed(seed),
        }
    }
}

impl RandomSource for DeterministicRng {
    /// Fisher–Yates (реализация `rand`).
    fn shuffle<T>(&mut self, slice: &mut [T]) {
        slice.shuffle(&mut self.inner);
    }
}

/// Перемешать канонические 52 карты по строковому seed.
/// Чистая функция: один seed – один порядок.
pub fn shuffle_deck(seed: &str) -> Vec<Card> {
    let mut rng = RngSeed::from_phrase(seed).to_rng();
    let mut deck = Deck::standard_52();
    rng.shuffle(&mut deck.cards);
    deck.cards
}
