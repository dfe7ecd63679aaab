//! Оценка силы покерных рук (Texas Hold'em).
//!
//! Движок не знает, как устроена оценка: он получает её через
//! трейт [`HandEvaluator`]. Стандартная реализация – [`StandardEvaluator`].

pub mod evaluator;
pub mod hand_rank;
pub mod lookup_tables;

pub use evaluator::{evaluate_best_hand, evaluate_cards};
pub use hand_rank::{describe_hand, HandCategory};

use crate::domain::card::Card;
use crate::domain::hand::HandRank;

/// Внешняя способность ранжировать руки.
pub trait HandEvaluator {
    /// Сила лучшей руки из 2 карманных + 3..5 карт борда.
    fn evaluate(&self, hole: &[Card; 2], board: &[Card]) -> HandRank;

    /// Индексы значений, достигающих максимума (может быть несколько – сплит).
    fn winners(&self, values: &[HandRank]) -> Vec<usize> {
        let Some(best) = values.iter().max() else {
            return Vec::new();
        };
        values
            .iter()
            .enumerate()
            .filter(|(_, v)| *v == best)
            .map(|(i, _)| i)
            .collect()
    }
}

/// Обычный 7-карточный оценщик.
#[derive(Clone, Copy, Debug, Default)]
pub struct StandardEvaluator;

impl HandEvaluator for StandardEvaluator {
    fn evaluate(&self, hole: &[Card; 2], board: &[Card]) -> HandRank {
        evaluate_best_hand(hole, board)
    }
}
