//! Допустимые действия и проверка решений.

use poker_table_core::domain::chips::Chips;
use poker_table_core::domain::hand::Street;
use poker_table_core::engine::actions::{ActionKind, Decision};
use poker_table_core::engine::betting::BettingState;
use poker_table_core::engine::validation::{validate_decision, LegalActions};
use poker_table_core::engine::EngineError;

const BB: Chips = Chips(20);

fn preflop() -> BettingState {
    BettingState::new(Street::Preflop, BB, BB)
}

#[test]
fn facing_big_blind_with_deep_stack() {
    let legal = LegalActions::compute(Chips::ZERO, Chips(1_000), &preflop(), BB, true);

    assert!(legal.can_fold);
    assert!(!legal.can_check);
    assert_eq!(legal.call_amount, Chips(20));
    assert_eq!(legal.min_bet, Chips(20));
    assert_eq!(legal.min_raise_to, Chips(40));
    assert_eq!(legal.max_raise_to, Chips(1_000));
    assert!(legal.can_all_in);
    assert!(legal.can_raise);
    assert!(!legal.can_bet);
}

#[test]
fn big_blind_option_can_check_or_bet() {
    let legal = LegalActions::compute(BB, Chips(980), &preflop(), BB, true);

    assert!(legal.can_check);
    assert!(!legal.can_fold, "Нельзя фолдить, когда можно чекнуть");
    assert!(legal.can_bet);
    assert!(!legal.can_raise);
    assert_eq!(legal.bet_bounds(BB), (Chips(40), Chips(1_000)));
}

#[test]
fn short_stack_cannot_raise_but_can_go_all_in() {
    let legal = LegalActions::compute(Chips::ZERO, Chips(15), &preflop(), BB, true);

    assert_eq!(legal.call_amount, Chips(20));
    assert_eq!(legal.max_raise_to, Chips(15));
    assert_eq!(legal.min_raise_to, Chips(15), "min_raise_to не выше стека");
    assert!(!legal.can_raise);
    assert!(legal.can_all_in);
}

#[test]
fn closed_action_disables_raise_only() {
    let betting = BettingState::new(Street::Flop, Chips(150), Chips(80));
    let legal = LegalActions::compute(Chips(100), Chips(900), &betting, BB, false);

    assert_eq!(legal.call_amount, Chips(50));
    assert!(!legal.can_raise);
    assert!(legal.can_all_in);
    assert!(legal.allows(ActionKind::Call));
    assert!(!legal.allows(ActionKind::Raise));
}

#[test]
fn fresh_street_min_bet_is_big_blind() {
    let betting = BettingState::for_street(Street::Turn, BB);
    let legal = LegalActions::compute(Chips::ZERO, Chips(500), &betting, BB, true);

    assert!(legal.can_check);
    assert!(legal.can_bet);
    assert_eq!(legal.bet_bounds(betting.current_bet), (Chips(20), Chips(500)));
}

#[test]
fn bet_lower_bound_capped_by_stack() {
    let betting = BettingState::for_street(Street::River, BB);
    let legal = LegalActions::compute(Chips::ZERO, Chips(12), &betting, BB, true);

    assert_eq!(legal.bet_bounds(betting.current_bet), (Chips(12), Chips(12)));
}

#[test]
fn zero_stack_has_no_all_in() {
    let legal = LegalActions::compute(Chips(20), Chips::ZERO, &preflop(), BB, true);
    assert!(!legal.can_all_in);
    assert!(!legal.can_bet);
}

#[test]
fn full_raise_reopens_short_raise_does_not() {
    let mut betting = preflop();

    assert!(betting.on_raise(Chips(60)), "20 → 60 = полное повышение");
    assert_eq!(betting.current_bet, Chips(60));
    assert_eq!(betting.last_raise_size, Chips(40));

    assert!(!betting.on_raise(Chips(80)), "+20 < 40 – короткий all-in");
    assert_eq!(betting.current_bet, Chips(80));
    assert_eq!(betting.last_raise_size, Chips(40));

    assert!(!betting.on_raise(Chips(80)), "не повышение");
}

#[test]
fn validate_rejects_fold_when_check_available() {
    let legal = LegalActions::compute(BB, Chips(980), &preflop(), BB, true);
    assert_eq!(
        validate_decision(&legal, &Decision::fold(), BB),
        Err(EngineError::IllegalAction(ActionKind::Fold))
    );
    assert_eq!(validate_decision(&legal, &Decision::check(), BB), Ok(()));
}

#[test]
fn validate_rejects_check_when_facing_bet() {
    let legal = LegalActions::compute(Chips::ZERO, Chips(1_000), &preflop(), BB, true);
    assert_eq!(
        validate_decision(&legal, &Decision::check(), BB),
        Err(EngineError::IllegalAction(ActionKind::Check))
    );
    assert_eq!(
        validate_decision(&legal, &Decision::bet(100), BB),
        Err(EngineError::IllegalAction(ActionKind::Bet))
    );
}

#[test]
fn validate_checks_raise_range() {
    let legal = LegalActions::compute(Chips::ZERO, Chips(1_000), &preflop(), BB, true);

    assert_eq!(
        validate_decision(&legal, &Decision::raise(30), BB),
        Err(EngineError::AmountOutOfRange {
            amount: Chips(30),
            min: Chips(40),
            max: Chips(1_000),
        })
    );
    assert!(matches!(
        validate_decision(&legal, &Decision::raise(5_000), BB),
        Err(EngineError::AmountOutOfRange { .. })
    ));
    assert_eq!(validate_decision(&legal, &Decision::raise(40), BB), Ok(()));
    assert_eq!(validate_decision(&legal, &Decision::raise(1_000), BB), Ok(()));
}

#[test]
fn validate_checks_bet_range() {
    let betting = BettingState::for_street(Street::Flop, BB);
    let legal = LegalActions::compute(Chips::ZERO, Chips(300), &betting, BB, true);

    assert!(matches!(
        validate_decision(&legal, &Decision::bet(19), Chips::ZERO),
        Err(EngineError::AmountOutOfRange { .. })
    ));
    assert_eq!(validate_decision(&legal, &Decision::bet(20), Chips::ZERO), Ok(()));
}
