//! Внешний контракт стола.
//!
//! Здесь описываются:
//! - DTO (dto.rs): запрос решения, шаг стола, снимок стола;
//! - ошибки (errors.rs): то, что видит клиент.

pub mod dto;
pub mod errors;

pub use dto::*;
pub use errors::*;
