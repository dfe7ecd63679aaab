use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::domain::blinds::BlindSchedule;
use crate::domain::chips::Chips;
use crate::domain::player::TableSeat;
use crate::domain::HandNumber;

/// Индекс места за столом. Стабилен между раздачами.
pub type SeatIndex = u8;

/// Максимум мест: 2 * 10 карманных + 5 борда < 52.
pub const MAX_SEATS: usize = 10;

/// Конфиг матча за одним турнирным столом.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct TableConfig {
    /// Seed матча. Seed раздачи = match_seed + номер раздачи.
    pub match_seed: String,
    /// Стартовый стек каждого места.
    pub starting_stack: Chips,
    /// Индексы мест, с которыми стартует стол.
    pub seats: Vec<SeatIndex>,
    /// Расписание блайндов.
    pub blinds: BlindSchedule,
}

impl TableConfig {
    /// Жёсткая валидация конфига.
    pub fn validate(&self) -> Result<(), String> {
        if self.seats.is_empty() {
            return Err("TableConfig: no seats".into());
        }
        if self.seats.len() > MAX_SEATS {
            return Err(format!(
                "TableConfig: {} seats, max is {}",
                self.seats.len(),
                MAX_SEATS
            ));
        }
        let unique: BTreeSet<SeatIndex> = self.seats.iter().copied().collect();
        if unique.len() != self.seats.len() {
            return Err("TableConfig: duplicate seat index".into());
        }
        if self.starting_stack.is_zero() {
            return Err("TableConfig: starting_stack = 0".into());
        }
        self.blinds.validate()
    }

    /// Разобрать конфиг из JSON и сразу провалидировать.
    pub fn from_json(s: &str) -> Result<Self, String> {
        let cfg: TableConfig =
            serde_json::from_str(s).map_err(|e| format!("TableConfig: bad JSON: {e}"))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Удобный пресет: 6-max, стек 1500, демо-расписание блайндов.
    pub fn demo(match_seed: &str) -> Self {
        Self {
            match_seed: match_seed.to_string(),
            starting_stack: Chips::new(1_500),
            seats: (0..6).collect(),
            blinds: BlindSchedule::simple_demo_schedule(),
        }
    }
}

/// Состояние стола между раздачами.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Table {
    pub config: TableConfig,

    /// Места за столом по индексу.
    pub seats: BTreeMap<SeatIndex, TableSeat>,

    /// Физический порядок мест: все когда-либо виденные индексы по возрастанию.
    /// Только растёт.
    pub seat_order: Vec<SeatIndex>,

    /// Место дилерской кнопки или None, если раздач ещё не было.
    pub dealer_button: Option<SeatIndex>,

    /// Номер последней начатой раздачи.
    pub last_hand_number: Option<HandNumber>,

    /// Места в порядке вылета (первый вылетевший – первым).
    pub elimination_order: Vec<SeatIndex>,
}

impl Table {
    /// Стол по (уже провалидированному) конфигу.
    pub fn new(config: TableConfig) -> Self {
        let mut table = Self {
            seats: BTreeMap::new(),
            seat_order: Vec::new(),
            dealer_button: None,
            last_hand_number: None,
            elimination_order: Vec::new(),
            config,
        };
        let stack = table.config.starting_stack;
        for seat in table.config.seats.clone() {
            table.seat_player(seat, stack);
        }
        table
    }

    /// Посадить (или пересадить) игрока с заданным стеком.
    /// Пересаженное место больше не считается выбывшим.
    pub fn seat_player(&mut self, seat: SeatIndex, stack: Chips) {
        self.seats.insert(seat, TableSeat::new(seat, stack));
        self.elimination_order.retain(|s| *s != seat);
        if let Err(pos) = self.seat_order.binary_search(&seat) {
            self.seat_order.insert(pos, seat);
        }
    }

    /// Пометить место выбывшим. Повторный вызов ничего не меняет.
    pub fn eliminate(&mut self, seat: SeatIndex) -> bool {
        match self.seats.get_mut(&seat) {
            Some(s) if !s.eliminated => {
                s.eliminated = true;
                self.elimination_order.push(seat);
                true
            }
            _ => false,
        }
    }

    /// Активные места (не выбыли, стек > 0) в физическом порядке.
    pub fn active_seats(&self) -> Vec<SeatIndex> {
        self.seat_order
            .iter()
            .copied()
            .filter(|s| self.seats.get(s).map(TableSeat::is_active).unwrap_or(false))
            .collect()
    }

    pub fn stack_of(&self, seat: SeatIndex) -> Option<Chips> {
        self.seats.get(&seat).map(|s| s.stack)
    }

    /// Сумма всех стеков за столом.
    pub fn total_chips(&self) -> Chips {
        self.seats.values().map(|s| s.stack).sum()
    }
}
