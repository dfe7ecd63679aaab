use core::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::card::Card;
use crate::domain::chips::Chips;
use crate::domain::table::SeatIndex;
use crate::domain::HandNumber;

/// Улица раздачи.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum Street {
    Preflop,
    Flop,
    Turn,
    River,
}

impl Street {
    /// Следующая улица; после ривера – None (дальше только расчёт).
    pub fn next(self) -> Option<Street> {
        match self {
            Street::Preflop => Some(Street::Flop),
            Street::Flop => Some(Street::Turn),
            Street::Turn => Some(Street::River),
            Street::River => None,
        }
    }

    /// Сколько карт лежит на борде на этой улице: 0 / 3 / 4 / 5.
    pub fn board_len(self) -> usize {
        match self {
            Street::Preflop => 0,
            Street::Flop => 3,
            Street::Turn => 4,
            Street::River => 5,
        }
    }
}

impl fmt::Display for Street {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Street::Preflop => "preflop",
            Street::Flop => "flop",
            Street::Turn => "turn",
            Street::River => "river",
        };
        f.write_str(s)
    }
}

/// Ранг руки: больше = сильнее. Заполняется через `eval`.
#[derive(
    Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash,
)]
pub struct HandRank(pub u32);

/// Выигрыш места в раздаче (сумма по всем банкам).
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Winner {
    pub seat_index: SeatIndex,
    pub amount: Chips,
}

/// Итог по месту после раздачи.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SeatResult {
    pub seat_index: SeatIndex,
    pub stack: Chips,
    pub eliminated: bool,
}

/// Разыгранный слой банка (main / side pot) – для аудита.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SettledTier {
    /// Граница уровня вклада, задающая этот слой.
    pub level: Chips,
    pub amount: Chips,
    /// Кто может выиграть слой (не сфолдили).
    pub eligible: Vec<SeatIndex>,
    pub winners: Vec<SeatIndex>,
}

/// Открытая на шоудауне рука.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ShowdownHand {
    pub seat_index: SeatIndex,
    pub hole_cards: [Card; 2],
    pub rank: HandRank,
}

/// Финальный снимок раздачи. Выдаётся ровно один раз, после чего
/// состояние раздачи уничтожается.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedHand {
    pub hand_number: HandNumber,
    pub board: Vec<Card>,
    pub winners: Vec<Winner>,
    pub seats: Vec<SeatResult>,
    pub tiers: Vec<SettledTier>,
    /// Фишки слоёв, на которые никто не претендует: возвращены вкладчикам.
    #[serde(default)]
    pub returned: Vec<Winner>,
    pub showdown: Vec<ShowdownHand>,
}

impl ResolvedHand {
    /// Сколько всего выплачено победителям.
    pub fn total_awarded(&self) -> Chips {
        self.winners.iter().map(|w| w.amount).sum()
    }

    pub fn amount_won_by(&self, seat: SeatIndex) -> Chips {
        self.winners
            .iter()
            .filter(|w| w.seat_index == seat)
            .map(|w| w.amount)
            .sum()
    }
}
