use serde::{Deserialize, Serialize};

use crate::domain::{Chips, SeatIndex, Street};

/// Тип действия игрока. Закрытый набор: всё остальное отвергается на границе.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ActionKind {
    Fold,
    Check,
    Call,
    /// Первая ставка на улице (ставки ещё нет).
    Bet,
    /// Повышение существующей ставки.
    Raise,
    /// Поставить весь стек.
    AllIn,
}

/// Решение, пришедшее снаружи (ответ на DecisionRequest).
///
/// `amount` – итоговая ставка на улице ("raise to") для bet/raise;
/// для fold/check/call/all_in игнорируется.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Decision {
    pub action: ActionKind,
    #[serde(default)]
    pub amount: Chips,
}

impl Decision {
    pub fn fold() -> Self {
        Self::simple(ActionKind::Fold)
    }

    pub fn check() -> Self {
        Self::simple(ActionKind::Check)
    }

    pub fn call() -> Self {
        Self::simple(ActionKind::Call)
    }

    pub fn all_in() -> Self {
        Self::simple(ActionKind::AllIn)
    }

    pub fn bet(to: u64) -> Self {
        Self {
            action: ActionKind::Bet,
            amount: Chips(to),
        }
    }

    pub fn raise(to: u64) -> Self {
        Self {
            action: ActionKind::Raise,
            amount: Chips(to),
        }
    }

    fn simple(action: ActionKind) -> Self {
        Self {
            action,
            amount: Chips::ZERO,
        }
    }
}

/// Запись в логе действий раздачи.
///
/// `amount` – сколько фишек действие переложило из стека в банк.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ActionRecord {
    pub seat_index: SeatIndex,
    pub action: ActionKind,
    pub amount: Chips,
    pub street: Street,
}
