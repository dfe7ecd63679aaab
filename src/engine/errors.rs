use crate::domain::{Chips, HandNumber, SeatIndex};
use crate::engine::actions::ActionKind;

use thiserror::Error;

/// Ошибки движка стола.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("Некорректная конфигурация: {0}")]
    InvalidConfig(String),

    #[error("Нет активных мест для раздачи")]
    NoActiveSeats,

    #[error("Для раздачи нужно минимум 2 активных места, есть {0}")]
    NotEnoughPlayers(usize),

    #[error("Раздача не активна")]
    NoActiveHand,

    #[error("Идёт раздача #{expected}, запрошена #{got}")]
    HandNumberMismatch { expected: HandNumber, got: HandNumber },

    #[error("Место {0} не существует за столом")]
    UnknownSeat(SeatIndex),

    #[error("Нельзя менять рассадку во время раздачи")]
    HandInProgress,

    #[error("Колода закончилась")]
    DeckExhausted,

    #[error("Недопустимое действие {0:?} в текущем состоянии раздачи")]
    IllegalAction(ActionKind),

    #[error("Сумма {amount} вне диапазона [{min}, {max}]")]
    AmountOutOfRange { amount: Chips, min: Chips, max: Chips },

    #[error("Внутренняя ошибка: {0}")]
    Internal(&'static str),
}
