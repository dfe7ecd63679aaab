use serde::{Deserialize, Serialize};

use crate::domain::chips::Chips;
use crate::domain::player::SeatState;
use crate::engine::actions::{ActionKind, Decision};
use crate::engine::betting::BettingState;
use crate::engine::errors::EngineError;

/// Набор допустимых действий для игрока, который сейчас ходит.
///
/// Суммы bet/raise – итоговая ставка на улице ("raise to").
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct LegalActions {
    pub can_fold: bool,
    pub can_check: bool,
    pub call_amount: Chips,
    pub min_bet: Chips,
    pub min_raise_to: Chips,
    pub max_raise_to: Chips,
    pub can_all_in: bool,
    /// Bet возможен только когда ставки на улице нет.
    pub can_bet: bool,
    /// Raise возможен только против существующей ставки и если ход
    /// не закрыт коротким all-in.
    pub can_raise: bool,
}

impl LegalActions {
    /// Посчитать допустимые действия.
    ///
    /// `raise_open` = false, если игрок уже походил на этой улице и с тех пор
    /// не было полного повышения (его может догнать только короткий all-in).
    pub fn compute(
        street_contribution: Chips,
        stack: Chips,
        betting: &BettingState,
        big_blind: Chips,
        raise_open: bool,
    ) -> Self {
        let call_amount = betting.current_bet.saturating_sub(street_contribution);
        let can_check = call_amount.is_zero();
        let max_raise_to = street_contribution + stack;
        let min_raise_to = max_raise_to.min(betting.current_bet + betting.last_raise_size.max(Chips(1)));
        let min_bet = big_blind.max(betting.last_raise_size);

        Self {
            can_fold: !call_amount.is_zero(),
            can_check,
            call_amount,
            min_bet,
            min_raise_to,
            max_raise_to,
            can_all_in: !stack.is_zero(),
            can_bet: can_check && !stack.is_zero(),
            can_raise: !can_check && raise_open && max_raise_to > betting.current_bet,
        }
    }

    /// То же, но прямо по состоянию места.
    pub fn for_seat(seat: &SeatState, betting: &BettingState, big_blind: Chips) -> Self {
        let raise_open = !seat.acted;
        Self::compute(seat.street_contribution, seat.stack, betting, big_blind, raise_open)
    }

    /// Границы bet: от current_bet + min_bet (не выше всего стека) до всего стека.
    pub fn bet_bounds(&self, current_bet: Chips) -> (Chips, Chips) {
        let min = self.max_raise_to.min(current_bet + self.min_bet);
        (min, self.max_raise_to)
    }

    pub fn raise_bounds(&self) -> (Chips, Chips) {
        (self.min_raise_to, self.max_raise_to)
    }

    /// Разрешено ли вообще действие такого типа.
    pub fn allows(&self, kind: ActionKind) -> bool {
        match kind {
            ActionKind::Fold => self.can_fold,
            ActionKind::Check => self.can_check,
            ActionKind::Call => !self.call_amount.is_zero(),
            ActionKind::Bet => self.can_bet,
            ActionKind::Raise => self.can_raise,
            ActionKind::AllIn => self.can_all_in,
        }
    }
}

/// Проверка решения против набора допустимых действий.
pub fn validate_decision(
    legal: &LegalActions,
    decision: &Decision,
    current_bet: Chips,
) -> Result<(), EngineError> {
    if !legal.allows(decision.action) {
        return Err(EngineError::IllegalAction(decision.action));
    }

    let bounds = match decision.action {
        ActionKind::Bet => Some(legal.bet_bounds(current_bet)),
        ActionKind::Raise => Some(legal.raise_bounds()),
        _ => None,
    };

    if let Some((min, max)) = bounds {
        if decision.amount < min || decision.amount > max {
            return Err(EngineError::AmountOutOfRange {
                amount: decision.amount,
                min,
                max,
            });
        }
    }

    Ok(())
}
