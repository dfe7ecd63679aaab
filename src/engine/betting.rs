use serde::{Deserialize, Serialize};

use crate::domain::chips::Chips;
use crate::domain::hand::Street;

/// Состояние раунда ставок (на конкретной улице).
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct BettingState {
    /// Улица, к которой относится этот раунд.
    pub street: Street,
    /// Текущая целевая ставка, до которой должны дотянуться игроки (BB, bet, raise).
    pub current_bet: Chips,
    /// Размер последнего полного повышения (для минимального ре-рейза).
    pub last_raise_size: Chips,
    /// Указатель в порядок хода текущей улицы.
    pub pointer: usize,
}

impl BettingState {
    pub fn new(street: Street, current_bet: Chips, last_raise_size: Chips) -> Self {
        Self {
            street,
            current_bet,
            last_raise_size,
            pointer: 0,
        }
    }

    /// Новая улица: ставки нет, минимальный шаг снова = BB.
    pub fn for_street(street: Street, big_blind: Chips) -> Self {
        Self::new(street, Chips::ZERO, big_blind)
    }

    /// Обновить состояние после того, как кто-то довёл ставку до `new_bet`.
    ///
    /// Возвращает true, если это полное повышение (≥ last_raise_size), –
    /// тогда ход переоткрывается для всех живых игроков.
    /// Короткий all-in только поднимает current_bet.
    pub fn on_raise(&mut self, new_bet: Chips) -> bool {
        if new_bet <= self.current_bet {
            return false;
        }

        let increase = new_bet - self.current_bet;
        self.current_bet = new_bet;

        if increase >= self.last_raise_size {
            self.last_raise_size = increase.max(Chips(1));
            true
        } else {
            false
        }
    }
}
