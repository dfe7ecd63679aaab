use serde::{Deserialize, Serialize};

use crate::domain::{chips::Chips, SeatIndex};

/// Вклад одного места в банк раздачи.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PotContribution {
    pub seat: SeatIndex,
    /// Сколько суммарно фишек внесено (все улицы, включая блайнды).
    pub amount: Chips,
    pub folded: bool,
}

/// Слой банка (main pot / side pot).
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct PotTier {
    /// Уровень вклада, которым слой ограничен сверху.
    pub level: Chips,
    /// participants * (level - предыдущий уровень).
    pub amount: Chips,
    /// Все, кто внёс не меньше `level` (включая сфолдивших).
    pub participants: Vec<SeatIndex>,
    /// Участники, которые не сфолдили.
    pub eligible: Vec<SeatIndex>,
}

/// Разбить банк на слои по различным положительным уровням вкладов.
///
/// Слои идут от младшего к старшему. Сумма `amount` по всем слоям
/// равна сумме всех вкладов. Места в слоях – по возрастанию индекса.
pub fn compute_pot_tiers(contributions: &[PotContribution]) -> Vec<PotTier> {
    let mut levels: Vec<Chips> = contributions
        .iter()
        .map(|c| c.amount)
        .filter(|a| !a.is_zero())
        .collect();
    levels.sort();
    levels.dedup();

    let mut entries = contributions.to_vec();
    entries.sort_by_key(|c| c.seat);

    let mut tiers = Vec::with_capacity(levels.len());
    let mut prev_level = Chips::ZERO;

    for level in levels {
        let participants: Vec<&PotContribution> =
            entries.iter().filter(|c| c.amount >= level).collect();

        let step = level - prev_level;
        tiers.push(PotTier {
            level,
            amount: Chips(step.0 * participants.len() as u64),
            participants: participants.iter().map(|c| c.seat).collect(),
            eligible: participants
                .iter()
                .filter(|c| !c.folded)
                .map(|c| c.seat)
                .collect(),
        });

        prev_level = level;
    }

    tiers
}
