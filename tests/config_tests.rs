//! Конфиг стола, расписание блайндов и разбор решений из JSON.

use poker_table_core::api::{parse_decision, ApiError};
use poker_table_core::domain::blinds::{BlindLevel, BlindSchedule};
use poker_table_core::domain::chips::Chips;
use poker_table_core::domain::table::TableConfig;
use poker_table_core::engine::{ActionKind, Decision, EngineError, TableEngine};

#[test]
fn demo_config_is_valid() {
    assert_eq!(TableConfig::demo("x").validate(), Ok(()));
    assert_eq!(BlindSchedule::simple_demo_schedule().validate(), Ok(()));
}

#[test]
fn config_rejects_bad_seats_and_stacks() {
    let mut cfg = TableConfig::demo("x");
    cfg.seats.clear();
    assert!(cfg.validate().is_err());

    let mut cfg = TableConfig::demo("x");
    cfg.seats = (0..11).collect();
    assert!(cfg.validate().is_err(), "больше 10 мест");

    let mut cfg = TableConfig::demo("x");
    cfg.seats = vec![0, 1, 1];
    assert!(cfg.validate().is_err(), "дубликат места");

    let mut cfg = TableConfig::demo("x");
    cfg.starting_stack = Chips::ZERO;
    assert!(cfg.validate().is_err());
}

#[test]
fn config_rejects_bad_blinds() {
    let mut cfg = TableConfig::demo("x");
    cfg.blinds = BlindSchedule::new(Vec::new());
    assert!(cfg.validate().is_err());

    cfg.blinds = BlindSchedule::fixed(Chips(20), Chips(20));
    assert!(cfg.validate().is_err(), "BB должен быть больше SB");

    cfg.blinds = BlindSchedule::new(vec![BlindLevel::new(2, Chips(10), Chips(20), 5)]);
    assert!(cfg.validate().is_err(), "уровни нумеруются с 1");
}

#[test]
fn table_engine_refuses_invalid_config() {
    let mut cfg = TableConfig::demo("x");
    cfg.starting_stack = Chips::ZERO;
    assert!(matches!(
        TableEngine::new(cfg),
        Err(EngineError::InvalidConfig(_))
    ));
}

#[test]
fn config_from_json() {
    let json = r#"{
        "match_seed": "json-match",
        "starting_stack": 2000,
        "seats": [0, 2, 4],
        "blinds": { "levels": [
            { "level": 1, "small_blind": 10, "big_blind": 20, "hands": 5 },
            { "level": 2, "small_blind": 20, "big_blind": 40, "hands": 5 }
        ] }
    }"#;

    let cfg = TableConfig::from_json(json).unwrap();
    assert_eq!(cfg.match_seed, "json-match");
    assert_eq!(cfg.starting_stack, Chips(2_000));
    assert_eq!(cfg.seats, vec![0, 2, 4]);
    assert_eq!(cfg.blinds.levels.len(), 2);

    assert!(TableConfig::from_json("{ not json").is_err());
    assert!(TableConfig::from_json(&json.replace("2000", "0")).is_err());
}

#[test]
fn blind_level_follows_hand_number() {
    let schedule = BlindSchedule::simple_demo_schedule();

    assert_eq!(schedule.level_for_hand(1).unwrap().level, 1);
    assert_eq!(schedule.level_for_hand(10).unwrap().level, 1);
    assert_eq!(schedule.level_for_hand(11).unwrap().level, 2);
    assert_eq!(schedule.level_for_hand(50).unwrap().level, 5);
    assert_eq!(
        schedule.level_for_hand(10_000).unwrap().level,
        5,
        "последний уровень действует бессрочно"
    );
    assert_eq!(schedule.level_by_number(3).unwrap().big_blind, Chips(50));
}

#[test]
fn decisions_parse_from_json() {
    assert_eq!(
        parse_decision(r#"{"action":"raise","amount":120}"#),
        Ok(Decision::raise(120))
    );
    assert_eq!(parse_decision(r#"{"action":"fold"}"#), Ok(Decision::fold()));
    assert_eq!(
        parse_decision(r#"{"action":"all_in"}"#).unwrap().action,
        ActionKind::AllIn
    );

    assert!(matches!(
        parse_decision(r#"{"action":"muck"}"#),
        Err(ApiError::BadRequest(_))
    ));
    assert!(matches!(parse_decision("nope"), Err(ApiError::BadRequest(_))));
}

#[test]
fn decision_request_serializes_camel_case() {
    let mut engine = TableEngine::new(TableConfig::demo("json")).unwrap();
    let step = engine.next_decision(1).unwrap();
    let json = serde_json::to_value(&step).unwrap();

    assert_eq!(json["type"], "decision");
    let data = &json["data"];
    assert_eq!(data["handNumber"], 1);
    assert_eq!(data["street"], "preflop");
    assert!(data["actorSeatIndex"].is_number());
    assert_eq!(data["legalActions"]["callAmount"], 20);
    assert_eq!(data["legalActions"]["canCheck"], false);
    assert!(data["actionsThisHand"].as_array().unwrap().is_empty());
}
