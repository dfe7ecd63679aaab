// src/bin/table_sim_cli.rs
//
// Dev-симулятор: играет матч до одного игрока простыми ботами.
//
//   table_sim_cli [config.json] [passive|pushy]
//
// RUST_LOG=debug покажет ход раздач из движка.

use std::env;
use std::fs;
use std::process::ExitCode;

use poker_table_core::api::DecisionRequest;
use poker_table_core::domain::{HandNumber, TableConfig};
use poker_table_core::engine::{Decision, TableEngine};

const MAX_HANDS: HandNumber = 2_000;

/// Поведение ботов за столом.
#[derive(Copy, Clone, Debug)]
enum Policy {
    /// Только check/call.
    Passive,
    /// Пары и тузы – all-in, остальное check/call.
    Pushy,
}

fn main() -> ExitCode {
    env_logger::init();

    let args: Vec<String> = env::args().skip(1).collect();

    let config = match args.first().filter(|a| a.ends_with(".json")) {
        Some(path) => match fs::read_to_string(path)
            .map_err(|e| e.to_string())
            .and_then(|s| TableConfig::from_json(&s))
        {
            Ok(cfg) => cfg,
            Err(e) => {
                eprintln!("[CLI] не удалось прочитать конфиг {path}: {e}");
                return ExitCode::FAILURE;
            }
        },
        None => TableConfig::demo("table-sim"),
    };

    let policy = if args.iter().any(|a| a == "pushy") {
        Policy::Pushy
    } else {
        Policy::Passive
    };

    let mut engine = match TableEngine::new(config) {
        Ok(engine) => engine,
        Err(e) => {
            eprintln!("[CLI] ОШИБКА конфига: {e}");
            return ExitCode::FAILURE;
        }
    };

    println!("================ TABLE SIM ({policy:?}) =================");

    let mut hand_number: HandNumber = 1;
    while !engine.is_match_over() && hand_number <= MAX_HANDS {
        match engine.play_hand(hand_number, |req| decide(policy, req)) {
            Ok(resolved) => {
                let winners: Vec<String> = resolved
                    .winners
                    .iter()
                    .map(|w| format!("seat {} +{}", w.seat_index, w.amount))
                    .collect();
                let board: Vec<String> = resolved.board.iter().map(|c| c.to_string()).collect();
                println!(
                    "[HAND #{hand_number}] board [{}] -> {}",
                    board.join(" "),
                    winners.join(", ")
                );
            }
            Err(e) => {
                eprintln!("[CLI] ОШИБКА в раздаче #{hand_number}: {e}");
                return ExitCode::FAILURE;
            }
        }
        hand_number += 1;
    }

    println!();
    println!("Итоговые места: {:?}", engine.standings());
    for seat in &engine.snapshot().seats {
        println!("  seat {:>2}: {}", seat.seat_index, seat.stack);
    }
    match engine.fingerprint() {
        Ok(fp) => println!("fingerprint: {fp}"),
        Err(e) => {
            eprintln!("[CLI] ОШИБКА отпечатка: {e}");
            return ExitCode::FAILURE;
        }
    }

    ExitCode::SUCCESS
}

fn decide(policy: Policy, req: &DecisionRequest) -> Decision {
    let legal = &req.legal_actions;
    let [a, b] = req.hole_cards;
    let strong = a.rank == b.rank || a.rank.value() == 14 || b.rank.value() == 14;

    if matches!(policy, Policy::Pushy) && strong && legal.can_all_in {
        return Decision::all_in();
    }
    if legal.can_check {
        Decision::check()
    } else {
        Decision::call()
    }
}
