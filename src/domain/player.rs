use serde::{Deserialize, Serialize};

use crate::domain::card::Card;
use crate::domain::chips::Chips;
use crate::domain::table::SeatIndex;

/// Место за столом между раздачами (живёт весь матч).
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct TableSeat {
    pub seat_index: SeatIndex,
    /// Текущий стек за столом.
    pub stack: Chips,
    /// Вылетел из турнира (нулевой стек или внешнее решение).
    pub eliminated: bool,
}

impl TableSeat {
    pub fn new(seat_index: SeatIndex, stack: Chips) -> Self {
        Self {
            seat_index,
            stack,
            eliminated: false,
        }
    }

    /// Участвует ли место в следующей раздаче.
    pub fn is_active(&self) -> bool {
        !self.eliminated && !self.stack.is_zero()
    }
}

/// Состояние игрока внутри одной раздачи.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct SeatState {
    pub stack: Chips,
    pub folded: bool,
    pub all_in: bool,
    /// Сколько всего внесено за раздачу (для side pots).
    pub total_contribution: Chips,
    /// Сколько внесено на текущей улице.
    pub street_contribution: Chips,
    pub hole_cards: [Card; 2],
    /// Сделал ли действие на этой улице.
    pub acted: bool,
}

impl SeatState {
    pub fn new(stack: Chips, hole_cards: [Card; 2]) -> Self {
        Self {
            stack,
            folded: false,
            all_in: false,
            total_contribution: Chips::ZERO,
            street_contribution: Chips::ZERO,
            hole_cards,
            acted: false,
        }
    }

    /// Может ли ещё добровольно действовать (не сфолдил и не all-in).
    pub fn can_act(&self) -> bool {
        !self.folded && !self.all_in
    }

    /// Претендует ли на банк.
    pub fn is_contending(&self) -> bool {
        !self.folded
    }

    /// Переложить не более `amount` из стека в вклад. Возвращает реально внесённое.
    /// Если стек закончился – ставим all-in.
    pub fn commit(&mut self, amount: Chips) -> Chips {
        let paid = amount.min(self.stack);
        self.stack -= paid;
        self.street_contribution += paid;
        self.total_contribution += paid;
        if self.stack.is_zero() {
            self.all_in = true;
        }
        paid
    }

    /// Сброс перед новой улицей: сфолдившие и all-in считаются уже походившими.
    pub fn reset_for_street(&mut self) {
        self.street_contribution = Chips::ZERO;
        self.acted = !self.can_act();
    }
}
