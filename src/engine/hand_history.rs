use serde::{Deserialize, Serialize};

use crate::domain::card::Card;
use crate::domain::chips::Chips;
use crate::domain::hand::Street;
use crate::domain::{HandNumber, SeatIndex};
use crate::engine::actions::ActionKind;

/// Тип события в раздаче.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum HandEventKind {
    /// Новая раздача началась.
    HandStarted {
        hand_number: HandNumber,
        button: SeatIndex,
        small_blind_seat: SeatIndex,
        big_blind_seat: SeatIndex,
        small_blind: Chips,
        big_blind: Chips,
    },

    /// Блайнд поставлен (может быть меньше номинала при коротком стеке).
    BlindPosted { seat: SeatIndex, amount: Chips },

    /// Игрок получил карманные карты.
    HoleCardsDealt { seat: SeatIndex, cards: [Card; 2] },

    /// Открыты общие карты новой улицы.
    BoardDealt { street: Street, cards: Vec<Card> },

    /// Действие игрока; `amount` – сколько фишек ушло в банк.
    PlayerActed {
        seat: SeatIndex,
        action: ActionKind,
        amount: Chips,
        stack_after: Chips,
    },

    /// Шоудаун – открытие карт.
    ShowdownReveal {
        seat: SeatIndex,
        hole_cards: [Card; 2],
        rank_value: u32,
    },

    /// Выплата банка(ов).
    PotAwarded { seat: SeatIndex, amount: Chips },

    /// Возврат фишек слоя, на который никто не претендует.
    ChipsReturned { seat: SeatIndex, amount: Chips },

    /// Место выбыло по итогам раздачи.
    SeatEliminated { seat: SeatIndex },

    /// Раздача завершена.
    HandFinished { hand_number: HandNumber },
}

/// Событие в раздаче с порядковым номером.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct HandEvent {
    pub index: u32,
    pub kind: HandEventKind,
}

/// Полная история раздачи.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct HandHistory {
    pub hand_number: HandNumber,
    pub events: Vec<HandEvent>,
}

impl HandHistory {
    pub fn new(hand_number: HandNumber) -> Self {
        Self {
            hand_number,
            events: Vec::new(),
        }
    }

    pub fn push(&mut self, kind: HandEventKind) {
        let idx = self.events.len() as u32;
        self.events.push(HandEvent { index: idx, kind });
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}
