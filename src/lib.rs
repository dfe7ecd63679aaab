//! Детерминированный движок турнирного стола (No-Limit Hold'em).
//!
//! Слои:
//! - `domain` – карты, фишки, места, стол, блайнды, итог раздачи;
//! - `infra` – seeded RNG и тасовка;
//! - `eval` – оценка силы рук;
//! - `engine` – позиции, ставки, сайд-поты, расчёт, менеджер матчей;
//! - `api` – то, что видит внешний источник решений.

pub mod api;
pub mod domain;
pub mod engine;
pub mod eval;
pub mod infra;
