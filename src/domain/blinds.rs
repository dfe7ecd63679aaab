// src/domain/blinds.rs

use serde::{Deserialize, Serialize};

use crate::domain::chips::Chips;

/// Один уровень блайндов.
/// Пример: level = 3, SB = 100, BB = 200, hands = 10 (уровень длится 10 раздач).
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct BlindLevel {
    /// Порядковый номер уровня (1, 2, 3, ...).
    pub level: u32,
    /// Малый блайнд.
    pub small_blind: Chips,
    /// Большой блайнд.
    pub big_blind: Chips,
    /// Сколько раздач длится уровень.
    pub hands: u32,
}

impl BlindLevel {
    pub fn new(level: u32, small_blind: Chips, big_blind: Chips, hands: u32) -> Self {
        Self {
            level,
            small_blind,
            big_blind,
            hands,
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.small_blind.is_zero() {
            return Err(format!("BlindLevel {}: small_blind = 0", self.level));
        }
        if self.big_blind.is_zero() {
            return Err(format!("BlindLevel {}: big_blind = 0", self.level));
        }
        if self.big_blind <= self.small_blind {
            return Err(format!(
                "BlindLevel {}: big_blind ({}) <= small_blind ({})",
                self.level, self.big_blind, self.small_blind
            ));
        }
        if self.hands == 0 {
            return Err(format!("BlindLevel {}: hands = 0", self.level));
        }
        Ok(())
    }
}

/// Расписание блайндов турнира: уровни растут по числу сыгранных раздач.
/// Последний уровень действует бессрочно.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct BlindSchedule {
    pub levels: Vec<BlindLevel>,
}

impl BlindSchedule {
    pub fn new(levels: Vec<BlindLevel>) -> Self {
        Self { levels }
    }

    /// Один фиксированный уровень на весь матч.
    pub fn fixed(small_blind: Chips, big_blind: Chips) -> Self {
        Self {
            levels: vec![BlindLevel::new(1, small_blind, big_blind, u32::MAX)],
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.levels.is_empty() {
            return Err("BlindSchedule: empty levels".into());
        }

        let mut expected_level = 1u32;
        for lvl in &self.levels {
            lvl.validate()?;
            if lvl.level != expected_level {
                return Err(format!(
                    "BlindSchedule: expected level {}, got {}",
                    expected_level, lvl.level
                ));
            }
            expected_level += 1;
        }

        Ok(())
    }

    pub fn level_by_number(&self, number: u32) -> Option<&BlindLevel> {
        self.levels.iter().find(|lvl| lvl.level == number)
    }

    /// Уровень для раздачи с номером `hand_number` (нумерация с 1).
    pub fn level_for_hand(&self, hand_number: u64) -> Option<&BlindLevel> {
        let played = hand_number.saturating_sub(1);
        let mut acc = 0u64;

        for lvl in &self.levels {
            acc += u64::from(lvl.hands);
            if played < acc {
                return Some(lvl);
            }
        }

        self.levels.last()
    }

    pub fn simple_demo_schedule() -> Self {
        let levels = vec![
            BlindLevel::new(1, Chips::new(10), Chips::new(20), 10),
            BlindLevel::new(2, Chips::new(15), Chips::new(30), 10),
            BlindLevel::new(3, Chips::new(25), Chips::new(50), 10),
            BlindLevel::new(4, Chips::new(50), Chips::new(100), 10),
            BlindLevel::new(5, Chips::new(100), Chips::new(200), 10),
        ];

        BlindSchedule { levels }
    }
}
