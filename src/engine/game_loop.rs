use std::collections::BTreeMap;

use crate::domain::card::Card;
use crate::domain::chips::Chips;
use crate::domain::deck::Deck;
use crate::domain::hand::{ResolvedHand, SeatResult, Street, Winner};
use crate::domain::player::SeatState;
use crate::domain::table::Table;
use crate::domain::{HandNumber, SeatIndex};
use crate::engine::actions::{ActionKind, ActionRecord, Decision};
use crate::engine::betting::BettingState;
use crate::engine::errors::EngineError;
use crate::engine::hand_history::{HandEventKind, HandHistory};
use crate::engine::positions::{
    action_order_after, advance_button, assign_blinds, clockwise_after, BlindSeats,
};
use crate::engine::showdown::settle;
use crate::engine::validation::{validate_decision, LegalActions};
use crate::engine::RandomSource;
use crate::eval::HandEvaluator;
use crate::infra::rng_seed::RngSeed;

/// Куда пришла раздача после очередного шага.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HandProgress {
    /// Ждём решения от этого места.
    AwaitingDecision(SeatIndex),
    /// Торговля окончена, остался только расчёт.
    Complete,
}

/// Внутреннее состояние одной раздачи.
///
/// Стол (`Table`) во время раздачи не трогается: стеки за столом
/// обновляются только в [`resolve_hand`].
#[derive(Clone, Debug)]
pub struct HandEngine {
    pub hand_number: HandNumber,
    pub positions: BlindSeats,
    pub small_blind: Chips,
    pub big_blind: Chips,
    pub street: Street,
    pub board: Vec<Card>,
    pub deck: Deck,
    /// Участники раздачи (все активные места на момент старта).
    pub seats: BTreeMap<SeatIndex, SeatState>,
    pub preflop_order: Vec<SeatIndex>,
    pub postflop_order: Vec<SeatIndex>,
    /// Порядок раздачи лишних фишек: от места после кнопки по часовой.
    pub odd_chip_order: Vec<SeatIndex>,
    pub betting: BettingState,
    pub actions: Vec<ActionRecord>,
    pub history: HandHistory,
}

impl HandEngine {
    /// Порядок хода на текущей улице.
    pub fn current_order(&self) -> &[SeatIndex] {
        match self.street {
            Street::Preflop => &self.preflop_order,
            _ => &self.postflop_order,
        }
    }

    /// Сумма всех вкладов.
    pub fn pot(&self) -> Chips {
        self.seats.values().map(|s| s.total_contribution).sum()
    }

    /// Сколько мест ещё претендуют на банк.
    pub fn contenders(&self) -> usize {
        self.seats.values().filter(|s| s.is_contending()).count()
    }

    /// Сколько мест ещё могут действовать (не fold, не all-in).
    pub fn live_count(&self) -> usize {
        self.seats.values().filter(|s| s.can_act()).count()
    }

    /// Закрыта ли текущая улица.
    ///
    /// Один живой игрок (или ни одного) – закрыта, если он уравнял ставку.
    /// Иначе все живые походили и внесли ровно current_bet.
    pub fn is_street_closed(&self) -> bool {
        let current_bet = self.betting.current_bet;
        let live: Vec<&SeatState> = self.seats.values().filter(|s| s.can_act()).collect();

        if live.len() <= 1 {
            return live.iter().all(|s| s.street_contribution >= current_bet);
        }

        live.iter()
            .all(|s| s.acted && s.street_contribution == current_bet)
    }

    /// Сдвинуть указатель на ближайшее место, которое может ходить.
    fn normalize_actor(&mut self) -> Option<SeatIndex> {
        let order = self.current_order().to_vec();
        let n = order.len();
        if n == 0 {
            return None;
        }

        for k in 0..n {
            let idx = (self.betting.pointer + k) % n;
            let seat = order[idx];
            if self.seats.get(&seat).map(SeatState::can_act).unwrap_or(false) {
                self.betting.pointer = idx;
                return Some(seat);
            }
        }
        None
    }

    /// Кто должен ходить прямо сейчас (None – торговля на улице закончена).
    pub fn current_actor(&mut self) -> Option<SeatIndex> {
        if self.contenders() <= 1 || self.is_street_closed() {
            return None;
        }
        self.normalize_actor()
    }

    pub fn legal_actions(&self, seat: SeatIndex) -> Result<LegalActions, EngineError> {
        let state = self.seats.get(&seat).ok_or(EngineError::UnknownSeat(seat))?;
        Ok(LegalActions::for_seat(state, &self.betting, self.big_blind))
    }
}

/// Старт новой раздачи:
/// - двигает кнопку и назначает блайнды;
/// - тасует колоду по seed раздачи;
/// - раздаёт карманные карты;
/// - постит блайнды и настраивает ставки префлопа.
pub fn start_hand(table: &mut Table, hand_number: HandNumber) -> Result<HandEngine, EngineError> {
    let active = table.active_seats();
    if active.len() < 2 {
        return Err(EngineError::NotEnoughPlayers(active.len()));
    }

    let level = table
        .config
        .blinds
        .level_for_hand(hand_number)
        .cloned()
        .ok_or_else(|| EngineError::InvalidConfig("пустое расписание блайндов".into()))?;

    let button = advance_button(table, &active)?;
    let positions = assign_blinds(table, button, &active)?;
    let preflop_order = action_order_after(table, positions.big_blind, &active)?;
    let postflop_order = action_order_after(table, button, &active)?;
    let odd_chip_order = clockwise_after(table, button);

    let mut deck = Deck::standard_52();
    RngSeed::for_hand(&table.config.match_seed, hand_number)
        .to_rng()
        .shuffle(&mut deck.cards);

    let mut history = HandHistory::new(hand_number);
    history.push(HandEventKind::HandStarted {
        hand_number,
        button,
        small_blind_seat: positions.small_blind,
        big_blind_seat: positions.big_blind,
        small_blind: level.small_blind,
        big_blind: level.big_blind,
    });

    // Два круга раздачи по одной карте, места по возрастанию.
    let mut first_round = Vec::with_capacity(active.len());
    for _ in &active {
        first_round.push(deck.draw_one().ok_or(EngineError::DeckExhausted)?);
    }

    let mut seats = BTreeMap::new();
    for (seat, first) in active.iter().zip(first_round) {
        let second = deck.draw_one().ok_or(EngineError::DeckExhausted)?;
        let stack = table.stack_of(*seat).ok_or(EngineError::UnknownSeat(*seat))?;
        history.push(HandEventKind::HoleCardsDealt {
            seat: *seat,
            cards: [first, second],
        });
        seats.insert(*seat, SeatState::new(stack, [first, second]));
    }

    for (seat, amount) in [
        (positions.small_blind, level.small_blind),
        (positions.big_blind, level.big_blind),
    ] {
        let state = seats.get_mut(&seat).ok_or(EngineError::UnknownSeat(seat))?;
        let paid = state.commit(amount);
        history.push(HandEventKind::BlindPosted { seat, amount: paid });
    }

    table.dealer_button = Some(button);
    table.last_hand_number = Some(hand_number);

    log::debug!(
        "раздача #{hand_number}: кнопка {button}, SB {} ({}), BB {} ({}), мест {}",
        positions.small_blind,
        level.small_blind,
        positions.big_blind,
        level.big_blind,
        active.len()
    );

    Ok(HandEngine {
        hand_number,
        positions,
        small_blind: level.small_blind,
        big_blind: level.big_blind,
        street: Street::Preflop,
        board: Vec::new(),
        deck,
        seats,
        preflop_order,
        postflop_order,
        odd_chip_order,
        betting: BettingState::new(Street::Preflop, level.big_blind, level.big_blind),
        actions: Vec::new(),
        history,
    })
}

/// Применить решение игрока, который сейчас ходит.
///
/// Bet/raise с суммой вне диапазона отвергаются; после проверки сумма
/// всё равно зажимается в границы.
pub fn apply_decision(
    engine: &mut HandEngine,
    decision: Decision,
) -> Result<ActionRecord, EngineError> {
    let actor = engine
        .current_actor()
        .ok_or(EngineError::Internal("нет места, ожидающего хода"))?;

    let current_bet = engine.betting.current_bet;
    let big_blind = engine.big_blind;
    let street = engine.street;

    let (paid, street_total, stack_after) = {
        let seat = engine
            .seats
            .get_mut(&actor)
            .ok_or(EngineError::UnknownSeat(actor))?;
        let legal = LegalActions::for_seat(seat, &engine.betting, big_blind);
        validate_decision(&legal, &decision, current_bet)?;

        let paid = match decision.action {
            ActionKind::Fold => {
                seat.folded = true;
                Chips::ZERO
            }
            ActionKind::Check => Chips::ZERO,
            ActionKind::Call => seat.commit(legal.call_amount),
            ActionKind::Bet | ActionKind::Raise => {
                let (min, max) = if decision.action == ActionKind::Bet {
                    legal.bet_bounds(current_bet)
                } else {
                    legal.raise_bounds()
                };
                let target = decision.amount.clamp(min, max);
                seat.commit(target.saturating_sub(seat.street_contribution))
            }
            ActionKind::AllIn => seat.commit(seat.stack),
        };
        seat.acted = true;
        (paid, seat.street_contribution, seat.stack)
    };

    if street_total > current_bet && engine.betting.on_raise(street_total) {
        // Полное повышение: ход снова открыт для всех живых.
        for (seat, state) in engine.seats.iter_mut() {
            if *seat != actor && state.can_act() {
                state.acted = false;
            }
        }
    }

    let n = engine.current_order().len().max(1);
    engine.betting.pointer = (engine.betting.pointer + 1) % n;

    let record = ActionRecord {
        seat_index: actor,
        action: decision.action,
        amount: paid,
        street,
    };
    engine.actions.push(record.clone());
    engine.history.push(HandEventKind::PlayerActed {
        seat: actor,
        action: decision.action,
        amount: paid,
        stack_after,
    });

    log::trace!(
        "раздача #{}: место {actor} {:?} на {paid}",
        engine.hand_number,
        decision.action
    );

    Ok(record)
}

/// Довести раздачу до следующей точки решения или до конца.
///
/// Закрытая улица переходит на следующую; если живых игроков ≤ 1,
/// борд докладывается до ривера без торговли.
pub fn advance(engine: &mut HandEngine) -> Result<HandProgress, EngineError> {
    loop {
        if engine.contenders() <= 1 {
            return Ok(HandProgress::Complete);
        }

        if !engine.is_street_closed() {
            return engine
                .normalize_actor()
                .map(HandProgress::AwaitingDecision)
                .ok_or(EngineError::Internal("улица открыта, но ходить некому"));
        }

        if engine.street == Street::River {
            return Ok(HandProgress::Complete);
        }

        if engine.live_count() <= 1 {
            while engine.street != Street::River {
                deal_next_street(engine)?;
            }
            log::debug!("раздача #{}: борд доложен без торговли", engine.hand_number);
            return Ok(HandProgress::Complete);
        }

        deal_next_street(engine)?;
    }
}

/// Открыть следующую улицу и сбросить ставки.
fn deal_next_street(engine: &mut HandEngine) -> Result<(), EngineError> {
    let next = engine
        .street
        .next()
        .ok_or(EngineError::Internal("после ривера улиц нет"))?;

    let count = next.board_len().saturating_sub(engine.board.len());
    let cards = engine
        .deck
        .draw_exact(count)
        .ok_or(EngineError::DeckExhausted)?;
    engine.board.extend_from_slice(&cards);

    engine.street = next;
    engine.betting = BettingState::for_street(next, engine.big_blind);
    for state in engine.seats.values_mut() {
        state.reset_for_street();
    }

    engine.history.push(HandEventKind::BoardDealt {
        street: next,
        cards,
    });
    Ok(())
}

/// Рассчитать законченную раздачу и применить итог к столу.
///
/// Стек места = остаток + выигрыш; нулевой стек = вылет. Если вылетели
/// несколько мест, раньше вылетает то, у кого было меньше фишек до раздачи.
/// При ошибке расчёта ни стол, ни раздача не меняются.
pub fn resolve_hand<E: HandEvaluator + ?Sized>(
    engine: &mut HandEngine,
    table: &mut Table,
    evaluator: &E,
) -> Result<(ResolvedHand, HandHistory), EngineError> {
    let chips_before = table.total_chips();
    let settlement = settle(
        &engine.seats,
        &engine.board,
        &engine.odd_chip_order,
        evaluator,
    )?;

    for shown in &settlement.showdown {
        engine.history.push(HandEventKind::ShowdownReveal {
            seat: shown.seat_index,
            hole_cards: shown.hole_cards,
            rank_value: shown.rank.0,
        });
    }
    for (&seat, &amount) in &settlement.winnings {
        engine
            .history
            .push(HandEventKind::PotAwarded { seat, amount });
    }
    for (&seat, &amount) in &settlement.returned {
        engine
            .history
            .push(HandEventKind::ChipsReturned { seat, amount });
    }

    let mut busted: Vec<(Chips, SeatIndex)> = Vec::new();
    for (&seat, state) in &engine.seats {
        let final_stack = state.stack + settlement.credit_for(seat);
        if let Some(table_seat) = table.seats.get_mut(&seat) {
            table_seat.stack = final_stack;
        }
        if final_stack.is_zero() {
            busted.push((state.stack + state.total_contribution, seat));
        }
    }

    debug_assert_eq!(
        chips_before,
        table.total_chips(),
        "раздача не должна создавать или терять фишки"
    );

    busted.sort();
    for (_, seat) in busted {
        if table.eliminate(seat) {
            log::info!("раздача #{}: место {seat} выбыло", engine.hand_number);
            engine
                .history
                .push(HandEventKind::SeatEliminated { seat });
        }
    }

    engine.history.push(HandEventKind::HandFinished {
        hand_number: engine.hand_number,
    });

    let winners: Vec<Winner> = settlement
        .winnings
        .iter()
        .map(|(&seat_index, &amount)| Winner { seat_index, amount })
        .collect();

    log::info!(
        "раздача #{} завершена: банк {}, победители {:?}",
        engine.hand_number,
        engine.pot(),
        winners.iter().map(|w| w.seat_index).collect::<Vec<_>>()
    );

    let resolved = ResolvedHand {
        hand_number: engine.hand_number,
        board: engine.board.clone(),
        winners,
        seats: seat_results(table),
        tiers: settlement.tiers,
        returned: settlement
            .returned
            .iter()
            .map(|(&seat_index, &amount)| Winner { seat_index, amount })
            .collect(),
        showdown: settlement.showdown,
    };

    let history = std::mem::replace(&mut engine.history, HandHistory::new(engine.hand_number));
    Ok((resolved, history))
}

/// Снимок всех мест стола в физическом порядке.
pub fn seat_results(table: &Table) -> Vec<SeatResult> {
    table
        .seat_order
        .iter()
        .filter_map(|seat| table.seats.get(seat))
        .map(|s| SeatResult {
            seat_index: s.seat_index,
            stack: s.stack,
            eliminated: s.eliminated,
        })
        .collect()
}
