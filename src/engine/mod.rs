//! Покерный движок: позиции, ставки, переход улиц, сайд-поты, расчёт.
//!
//! Высокоуровневый объект: `TableEngine`
//! Основные операции:
//!   - `next_decision` – стартовать/продолжить раздачу и получить запрос решения
//!   - `apply_decision` – применить решение игрока
//!   - `TableManager` – несколько матчей с защитой от параллельных переходов

pub mod actions;
pub mod betting;
pub mod errors;
pub mod game_loop;
pub mod hand_history;
pub mod positions;
pub mod showdown;
pub mod side_pots;
pub mod table_engine;
pub mod table_manager;
pub mod validation;

pub use actions::{ActionKind, ActionRecord, Decision};
pub use errors::EngineError;
pub use game_loop::{advance, apply_decision, resolve_hand, start_hand, HandEngine, HandProgress};
pub use hand_history::{HandEvent, HandEventKind, HandHistory};
pub use positions::BlindSeats;
pub use showdown::{settle, Settlement};
pub use side_pots::{compute_pot_tiers, PotContribution, PotTier};
pub use table_engine::TableEngine;
pub use table_manager::{ManagerError, MatchId, TableManager};
pub use validation::LegalActions;

/// RNG интерфейс для engine.
/// Реализация – `infra::DeterministicRng`.
pub trait RandomSource {
    fn shuffle<T>(&mut self, slice: &mut [T]);
}
