use serde::{Deserialize, Serialize};

use crate::domain::card::{Card, Rank, Suit};

/// Колода карт. В домене: просто упорядоченный список карт.
/// Перемешивание делает infra (seeded RNG), НЕ здесь.
///
/// Верх колоды: конец вектора: `draw_one` делает `pop`.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Deck {
    pub cards: Vec<Card>,
}

impl Deck {
    /// Стандартная 52-карточная колода в каноническом порядке (rank-major):
    /// 2c 2d 2h 2s 3c 3d ... As.
    pub fn standard_52() -> Self {
        let mut cards = Vec::with_capacity(52);
        for rank in Rank::ALL {
            for suit in Suit::ALL {
                cards.push(Card::new(rank, suit));
            }
        }
        Deck { cards }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Взять одну карту сверху колоды.
    pub fn draw_one(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Взять ровно n карт сверху. Если карт не хватает: None, колода не трогается.
    pub fn draw_exact(&mut self, n: usize) -> Option<Vec<Card>> {
        if self.cards.len() < n {
            return None;
        }
        let mut taken = Vec::with_capacity(n);
        for _ in 0..n {
            taken.extend(self.cards.pop());
        }
        Some(taken)
    }
}
