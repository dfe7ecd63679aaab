//! RngSeed: доменный seed для покерного RNG.
//!
//! Позволяет:
//!   - получить 32-байтовый seed из произвольной строки (SHA-256);
//!   - построить seed раздачи: H(match_seed || hand_number);
//!   - создать DeterministicRng из seed.
//!
//! Никакой внешней энтропии: одна и та же строка всегда даёт один и тот же seed.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::domain::HandNumber;
use crate::infra::rng::DeterministicRng;

/// 32-байтовый seed для RNG.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct RngSeed {
    pub bytes: [u8; 32],
}

impl RngSeed {
    /// Seed из строки: SHA-256 от её байтов.
    pub fn from_phrase(phrase: &str) -> Self {
        let hash = Sha256::digest(phrase.as_bytes());

        let mut out = [0u8; 32];
        out.copy_from_slice(&hash);

        Self { bytes: out }
    }

    /// Seed конкретной раздачи: конкатенация seed матча и номера раздачи.
    ///
    /// Пример: ("m-42", 7) -> from_phrase("m-427").
    pub fn for_hand(match_seed: &str, hand_number: HandNumber) -> Self {
        Self::from_phrase(&format!("{match_seed}{hand_number}"))
    }

    /// Создать DeterministicRng из seed.
    pub fn to_rng(&self) -> DeterministicRng {
        DeterministicRng::from_seed(self.bytes)
    }
}
