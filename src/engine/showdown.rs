//! Расчёт раздачи: слои банка, победители, лишние фишки.

use std::collections::BTreeMap;

use crate::domain::card::Card;
use crate::domain::chips::Chips;
use crate::domain::hand::{HandRank, SettledTier, ShowdownHand};
use crate::domain::player::SeatState;
use crate::domain::SeatIndex;
use crate::engine::errors::EngineError;
use crate::engine::side_pots::{compute_pot_tiers, PotContribution};
use crate::eval::HandEvaluator;

/// Результат расчёта до применения к столу.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Settlement {
    /// Выигрыш по местам (только ненулевые).
    pub winnings: BTreeMap<SeatIndex, Chips>,
    /// Возврат фишек из слоёв без претендентов.
    pub returned: BTreeMap<SeatIndex, Chips>,
    pub tiers: Vec<SettledTier>,
    pub showdown: Vec<ShowdownHand>,
}

impl Settlement {
    pub fn total_awarded(&self) -> Chips {
        self.winnings.values().copied().sum()
    }

    pub fn total_returned(&self) -> Chips {
        self.returned.values().copied().sum()
    }

    /// Сколько место получает обратно в стек.
    pub fn credit_for(&self, seat: SeatIndex) -> Chips {
        self.winnings.get(&seat).copied().unwrap_or_default()
            + self.returned.get(&seat).copied().unwrap_or_default()
    }
}

/// Рассчитать банк раздачи.
///
/// `odd_chip_order` – все места по часовой стрелке от места после кнопки;
/// лишние фишки сплита уходят по одной в этом порядке.
///
/// Ошибка `Internal`, если оценщик не назвал победителя слоя, назвал
/// индекс вне списка претендентов или выплаты не сходятся с банком.
/// Стол при этом не трогается.
pub fn settle<E: HandEvaluator + ?Sized>(
    seats: &BTreeMap<SeatIndex, SeatState>,
    board: &[Card],
    odd_chip_order: &[SeatIndex],
    evaluator: &E,
) -> Result<Settlement, EngineError> {
    let pot: Chips = seats.values().map(|s| s.total_contribution).sum();
    let contenders: Vec<SeatIndex> = seats
        .iter()
        .filter(|(_, s)| s.is_contending())
        .map(|(&seat, _)| seat)
        .collect();

    let mut settlement = Settlement::default();

    match contenders.as_slice() {
        [] => return Ok(settlement),
        [only] => {
            // Все остальные сфолдили: банк целиком, карты не открываются.
            if !pot.is_zero() {
                settlement.winnings.insert(*only, pot);
                settlement.tiers.push(SettledTier {
                    level: seats
                        .values()
                        .map(|s| s.total_contribution)
                        .max()
                        .unwrap_or_default(),
                    amount: pot,
                    eligible: vec![*only],
                    winners: vec![*only],
                });
            }
            return Ok(settlement);
        }
        _ => {}
    }

    let ranks: BTreeMap<SeatIndex, HandRank> = contenders
        .iter()
        .filter_map(|seat| seats.get(seat).map(|s| (*seat, s)))
        .map(|(seat, s)| (seat, evaluator.evaluate(&s.hole_cards, board)))
        .collect();

    settlement.showdown = ranks
        .iter()
        .filter_map(|(&seat, &rank)| {
            seats.get(&seat).map(|s| ShowdownHand {
                seat_index: seat,
                hole_cards: s.hole_cards,
                rank,
            })
        })
        .collect();

    let contributions: Vec<PotContribution> = seats
        .iter()
        .map(|(&seat, s)| PotContribution {
            seat,
            amount: s.total_contribution,
            folded: s.folded,
        })
        .collect();

    for tier in compute_pot_tiers(&contributions) {
        if tier.amount.is_zero() {
            continue;
        }

        if tier.eligible.is_empty() {
            // Каждый вкладчик слоя внёс в него ровно одинаковую долю.
            let share = Chips(tier.amount.0 / tier.participants.len().max(1) as u64);
            log::warn!(
                "слой {} без претендентов, возвращаем {} вкладчикам {:?}",
                tier.level,
                tier.amount,
                tier.participants
            );
            for seat in &tier.participants {
                *settlement.returned.entry(*seat).or_default() += share;
            }
            continue;
        }

        let values: Vec<HandRank> = tier
            .eligible
            .iter()
            .map(|seat| ranks.get(seat).copied().unwrap_or_default())
            .collect();
        let mut winners = Vec::new();
        for i in evaluator.winners(&values) {
            let seat = tier.eligible.get(i).copied().ok_or_else(|| {
                log::error!(
                    "оценщик вернул индекс {i} для слоя {} из {} претендентов",
                    tier.level,
                    tier.eligible.len()
                );
                EngineError::Internal("winner index outside tier")
            })?;
            winners.push(seat);
        }
        winners.sort();
        winners.dedup();

        if winners.is_empty() {
            log::error!("оценщик не вернул победителей слоя {}", tier.level);
            return Err(EngineError::Internal("tier without winners"));
        }

        split_tier(tier.amount, &winners, odd_chip_order, &mut settlement.winnings)?;

        settlement.tiers.push(SettledTier {
            level: tier.level,
            amount: tier.amount,
            eligible: tier.eligible,
            winners,
        });
    }

    let paid = settlement.total_awarded() + settlement.total_returned();
    if paid != pot {
        log::error!("выплачено {paid} из банка {pot}");
        return Err(EngineError::Internal("settlement does not conserve chips"));
    }

    Ok(settlement)
}

/// Поровну между победителями, остаток – по одной фишке в порядке `odd_chip_order`.
fn split_tier(
    amount: Chips,
    winners: &[SeatIndex],
    odd_chip_order: &[SeatIndex],
    winnings: &mut BTreeMap<SeatIndex, Chips>,
) -> Result<(), EngineError> {
    let count = winners.len() as u64;
    let base = Chips(amount.0 / count);
    let mut remainder = amount.0 % count;

    for seat in winners {
        *winnings.entry(*seat).or_default() += base;
    }

    for seat in odd_chip_order.iter().filter(|s| winners.contains(s)) {
        if remainder == 0 {
            break;
        }
        *winnings.entry(*seat).or_default() += Chips(1);
        remainder -= 1;
    }

    // Победитель вне порядка обхода: отдаём остаток первому по индексу.
    if remainder > 0 {
        let first = winners
            .first()
            .ok_or(EngineError::Internal("tier without winners"))?;
        *winnings.entry(*first).or_default() += Chips(remainder);
    }

    winnings.retain(|_, v| !v.is_zero());
    Ok(())
}
