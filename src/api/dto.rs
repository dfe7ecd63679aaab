use serde::{Deserialize, Serialize};

use crate::api::errors::ApiError;
use crate::domain::card::Card;
use crate::domain::chips::Chips;
use crate::domain::hand::{ResolvedHand, Street};
use crate::domain::{HandNumber, SeatIndex};
use crate::engine::actions::{ActionRecord, Decision};
use crate::engine::validation::LegalActions;

/// Публичное состояние места (без карманных карт).
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SeatView {
    pub seat_index: SeatIndex,
    pub stack: Chips,
    pub folded: bool,
    pub all_in: bool,
    /// Вклад за всю раздачу.
    pub contribution: Chips,
    /// Вклад на текущей улице.
    pub street_contribution: Chips,
    pub eliminated: bool,
}

/// Запрос решения у внешнего источника (человек, бот, модель).
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DecisionRequest {
    pub hand_number: HandNumber,
    pub street: Street,
    pub actor_seat_index: SeatIndex,
    /// Карманные карты того, кто ходит. Чужие карты не раскрываются.
    pub hole_cards: [Card; 2],
    pub legal_actions: LegalActions,
    pub pot: Chips,
    pub current_bet: Chips,
    pub board: Vec<Card>,
    pub seats: Vec<SeatView>,
    pub actions_this_hand: Vec<ActionRecord>,
}

/// Что движок отдаёт наружу после каждого шага.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", content = "data", rename_all = "snake_case")]
pub enum TableStep {
    /// Нужно решение от места.
    Decision(DecisionRequest),
    /// Раздача закончена и рассчитана.
    HandComplete(ResolvedHand),
}

impl TableStep {
    pub fn decision_request(&self) -> Option<&DecisionRequest> {
        match self {
            TableStep::Decision(req) => Some(req),
            TableStep::HandComplete(_) => None,
        }
    }

    pub fn resolved(&self) -> Option<&ResolvedHand> {
        match self {
            TableStep::HandComplete(resolved) => Some(resolved),
            TableStep::Decision(_) => None,
        }
    }

    pub fn into_resolved(self) -> Option<ResolvedHand> {
        match self {
            TableStep::HandComplete(resolved) => Some(resolved),
            TableStep::Decision(_) => None,
        }
    }
}

/// Снимок стола для наблюдателя.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TableSnapshot {
    pub dealer_button: Option<SeatIndex>,
    pub last_hand_number: Option<HandNumber>,
    /// Номер раздачи, которая сейчас идёт.
    pub hand_in_progress: Option<HandNumber>,
    pub street: Option<Street>,
    pub board: Vec<Card>,
    pub pot: Chips,
    pub seats: Vec<SeatView>,
    pub elimination_order: Vec<SeatIndex>,
}

/// Разобрать решение из JSON вида `{"action":"raise","amount":120}`.
pub fn parse_decision(json: &str) -> Result<Decision, ApiError> {
    serde_json::from_str(json).map_err(|e| ApiError::BadRequest(format!("bad decision JSON: {e}")))
}
