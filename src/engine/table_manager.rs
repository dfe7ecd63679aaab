// src/engine/table_manager.rs

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, TryLockError};

use thiserror::Error;

use crate::api::dto::TableStep;
use crate::domain::table::TableConfig;
use crate::domain::HandNumber;
use crate::engine::actions::Decision;
use crate::engine::errors::EngineError;
use crate::engine::table_engine::TableEngine;
use crate::eval::{HandEvaluator, StandardEvaluator};

/// Идентификатор матча (один матч = один стол).
pub type MatchId = String;

/// Ошибки уровня менеджера матчей (над движком одного стола).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ManagerError {
    #[error("матч {0} не найден")]
    MatchNotFound(MatchId),

    #[error("матч {0} уже существует")]
    MatchExists(MatchId),

    #[error("состояние матча {0} повреждено паникой")]
    Poisoned(MatchId),

    #[error(transparent)]
    Engine(#[from] EngineError),
}

/// Менеджер матчей:
/// - хранит по одному `TableEngine` на матч;
/// - на каждый матч не больше одного перехода состояния одновременно.
///
/// Если матч уже занят другим переходом, вызов ничего не делает и
/// возвращает `Ok(None)`.
pub struct TableManager<E: HandEvaluator = StandardEvaluator> {
    matches: HashMap<MatchId, Mutex<TableEngine<E>>>,
}

impl<E: HandEvaluator> Default for TableManager<E> {
    fn default() -> Self {
        Self {
            matches: HashMap::new(),
        }
    }
}

impl TableManager<StandardEvaluator> {
    /// Создать пустой менеджер.
    pub fn new() -> Self {
        Self::default()
    }

    /// Завести матч со стандартным оценщиком.
    pub fn create_match(
        &mut self,
        match_id: impl Into<MatchId>,
        config: TableConfig,
    ) -> Result<(), ManagerError> {
        self.insert_match(match_id.into(), TableEngine::new(config)?)
    }
}

impl<E: HandEvaluator> TableManager<E> {
    /// Добавить уже собранный движок стола.
    pub fn insert_match(
        &mut self,
        match_id: MatchId,
        engine: TableEngine<E>,
    ) -> Result<(), ManagerError> {
        if self.matches.contains_key(&match_id) {
            return Err(ManagerError::MatchExists(match_id));
        }
        log::info!("матч {match_id} зарегистрирован");
        self.matches.insert(match_id, Mutex::new(engine));
        Ok(())
    }

    pub fn has_match(&self, match_id: &str) -> bool {
        self.matches.contains_key(match_id)
    }

    pub fn remove_match(&mut self, match_id: &str) -> Option<TableEngine<E>> {
        self.matches
            .remove(match_id)
            .map(|m| m.into_inner().unwrap_or_else(|p| p.into_inner()))
    }

    pub fn match_ids(&self) -> Vec<&MatchId> {
        self.matches.keys().collect()
    }

    /// Эксклюзивный (блокирующий) доступ к движку матча.
    pub fn engine(&self, match_id: &str) -> Result<MutexGuard<'_, TableEngine<E>>, ManagerError> {
        let slot = self
            .matches
            .get(match_id)
            .ok_or_else(|| ManagerError::MatchNotFound(match_id.to_string()))?;
        slot.lock()
            .map_err(|_| ManagerError::Poisoned(match_id.to_string()))
    }

    /// Следующий шаг раздачи; `Ok(None)` – матч занят другим переходом.
    pub fn next_decision(
        &self,
        match_id: &str,
        hand_number: HandNumber,
    ) -> Result<Option<TableStep>, ManagerError> {
        self.with_match(match_id, |engine| engine.next_decision(hand_number))
    }

    /// Применить решение; `Ok(None)` – матч занят другим переходом.
    pub fn apply_decision(
        &self,
        match_id: &str,
        decision: Decision,
    ) -> Result<Option<TableStep>, ManagerError> {
        self.with_match(match_id, |engine| engine.apply_decision(decision))
    }

    fn with_match<T, F>(&self, match_id: &str, f: F) -> Result<Option<T>, ManagerError>
    where
        F: FnOnce(&mut TableEngine<E>) -> Result<T, EngineError>,
    {
        let slot = self
            .matches
            .get(match_id)
            .ok_or_else(|| ManagerError::MatchNotFound(match_id.to_string()))?;

        let mut guard = match slot.try_lock() {
            Ok(guard) => guard,
            Err(TryLockError::WouldBlock) => {
                log::warn!("матч {match_id} занят, запрос пропущен");
                return Ok(None);
            }
            Err(TryLockError::Poisoned(_)) => {
                return Err(ManagerError::Poisoned(match_id.to_string()));
            }
        };

        Ok(Some(f(&mut guard)?))
    }
}
