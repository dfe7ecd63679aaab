use serde::{Deserialize, Serialize};

use crate::domain::{SeatIndex, Table};
use crate::engine::errors::EngineError;

/// Кнопка и блайнды конкретной раздачи.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct BlindSeats {
    pub button: SeatIndex,
    pub small_blind: SeatIndex,
    pub big_blind: SeatIndex,
}

/// Следующее физическое место по кругу, независимо от того, активно ли оно.
/// `from` может отсутствовать в порядке – тогда берём первое место после него.
pub fn next_physical_seat(table: &Table, from: SeatIndex) -> Option<SeatIndex> {
    table
        .seat_order
        .iter()
        .copied()
        .find(|&s| s > from)
        .or_else(|| table.seat_order.first().copied())
}

/// Идём по физическим местам после `from`, пока не встретим активное.
pub fn next_active_seat(
    table: &Table,
    from: SeatIndex,
    active: &[SeatIndex],
) -> Result<SeatIndex, EngineError> {
    if active.is_empty() {
        return Err(EngineError::NoActiveSeats);
    }

    let mut seat = from;
    for _ in 0..table.seat_order.len() {
        seat = next_physical_seat(table, seat).ok_or(EngineError::NoActiveSeats)?;
        if active.contains(&seat) {
            return Ok(seat);
        }
    }

    Err(EngineError::Internal("активное место вне физического порядка"))
}

/// Куда переезжает кнопка в новой раздаче.
///
/// - первая раздача: первое активное место;
/// - heads-up: кнопка обязана стоять на активном месте;
/// - 3+ активных: мёртвая кнопка, двигается на следующее физическое место
///   (даже если оно пустое/выбывшее).
pub fn advance_button(table: &Table, active: &[SeatIndex]) -> Result<SeatIndex, EngineError> {
    match table.dealer_button {
        None => active.first().copied().ok_or(EngineError::NoActiveSeats),
        Some(prev) if active.len() == 2 => next_active_seat(table, prev, active),
        Some(prev) => next_physical_seat(table, prev).ok_or(EngineError::NoActiveSeats),
    }
}

/// Блайнды для заданной кнопки.
///
/// Heads-up: SB = кнопка, BB = второе активное место.
/// Иначе: SB и BB – два следующих активных места после кнопки.
pub fn assign_blinds(
    table: &Table,
    button: SeatIndex,
    active: &[SeatIndex],
) -> Result<BlindSeats, EngineError> {
    if active.len() == 2 {
        if !active.contains(&button) {
            return Err(EngineError::Internal("heads-up: кнопка не на активном месте"));
        }
        let big_blind = next_active_seat(table, button, active)?;
        return Ok(BlindSeats {
            button,
            small_blind: button,
            big_blind,
        });
    }

    let small_blind = next_active_seat(table, button, active)?;
    let big_blind = next_active_seat(table, small_blind, active)?;
    Ok(BlindSeats {
        button,
        small_blind,
        big_blind,
    })
}

/// Порядок хода по активным местам, начиная с первого активного после `after`.
pub fn action_order_after(
    table: &Table,
    after: SeatIndex,
    active: &[SeatIndex],
) -> Result<Vec<SeatIndex>, EngineError> {
    let first = next_active_seat(table, after, active)?;

    let mut ordered: Vec<SeatIndex> = table
        .seat_order
        .iter()
        .copied()
        .filter(|s| active.contains(s))
        .collect();

    let start = ordered
        .iter()
        .position(|&s| s == first)
        .ok_or(EngineError::Internal("первое место вне порядка"))?;
    ordered.rotate_left(start);
    Ok(ordered)
}

/// Все физические места по часовой стрелке, начиная сразу после `button`.
/// Порядок раздачи лишних фишек при сплите.
pub fn clockwise_after(table: &Table, button: SeatIndex) -> Vec<SeatIndex> {
    let mut order = table.seat_order.clone();
    let start = order.iter().position(|&s| s > button).unwrap_or(0);
    order.rotate_left(start);
    order
}
