use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::engine::{EngineError, ManagerError};

/// Ошибки внешнего API (то, что отдаём клиенту).
#[derive(Clone, Debug, Error, Serialize, Deserialize, PartialEq, Eq)]
pub enum ApiError {
    /// Неправильные входные данные (например, битый JSON).
    #[error("bad request: {0}")]
    BadRequest(String),

    /// Матч не найден.
    #[error("match not found: {0}")]
    MatchNotFound(String),

    /// Решение отвергнуто движком (нелегальное действие, не та раздача).
    #[error("rejected: {0}")]
    Rejected(String),

    /// Внутренняя ошибка.
    #[error("internal: {0}")]
    Internal(String),
}

impl From<EngineError> for ApiError {
    fn from(err: EngineError) -> Self {
        match err {
            EngineError::Internal(_) => ApiError::Internal(err.to_string()),
            EngineError::InvalidConfig(_) => ApiError::BadRequest(err.to_string()),
            other => ApiError::Rejected(other.to_string()),
        }
    }
}

impl From<ManagerError> for ApiError {
    fn from(err: ManagerError) -> Self {
        match err {
            ManagerError::MatchNotFound(id) => ApiError::MatchNotFound(id),
            ManagerError::Engine(e) => e.into(),
            other => ApiError::Internal(other.to_string()),
        }
    }
}
