//! Движок одного турнирного стола: раздачи подряд, рассадка, итоги матча.

use serde::Serialize;
use sha2::{Digest, Sha256};

use crate::api::dto::{DecisionRequest, SeatView, TableSnapshot, TableStep};
use crate::domain::chips::Chips;
use crate::domain::hand::{ResolvedHand, SeatResult, Winner};
use crate::domain::table::{Table, TableConfig, MAX_SEATS};
use crate::domain::{HandNumber, SeatIndex};
use crate::engine::actions::Decision;
use crate::engine::errors::EngineError;
use crate::engine::game_loop::{
    advance, apply_decision, resolve_hand, seat_results, start_hand, HandEngine, HandProgress,
};
use crate::engine::hand_history::{HandEventKind, HandHistory};
use crate::eval::{HandEvaluator, StandardEvaluator};

/// Стол + (опционально) текущая раздача + история всех раздач.
///
/// Раздача создаётся первым запросом решения с новым номером и
/// уничтожается сразу после расчёта.
pub struct TableEngine<E: HandEvaluator = StandardEvaluator> {
    table: Table,
    hand: Option<HandEngine>,
    evaluator: E,
    transcript: Vec<HandHistory>,
}

impl TableEngine<StandardEvaluator> {
    pub fn new(config: TableConfig) -> Result<Self, EngineError> {
        Self::with_evaluator(config, StandardEvaluator)
    }
}

impl<E: HandEvaluator> TableEngine<E> {
    /// Стол с внешним оценщиком рук.
    pub fn with_evaluator(config: TableConfig, evaluator: E) -> Result<Self, EngineError> {
        config.validate().map_err(EngineError::InvalidConfig)?;
        log::info!(
            "стол создан: мест {}, стек {}, seed {:?}",
            config.seats.len(),
            config.starting_stack,
            config.match_seed
        );
        Ok(Self {
            table: Table::new(config),
            hand: None,
            evaluator,
            transcript: Vec::new(),
        })
    }

    pub fn table(&self) -> &Table {
        &self.table
    }

    pub fn hand(&self) -> Option<&HandEngine> {
        self.hand.as_ref()
    }

    pub fn current_hand_number(&self) -> Option<HandNumber> {
        self.hand.as_ref().map(|h| h.hand_number)
    }

    /// Следующий шаг раздачи `hand_number`.
    ///
    /// Если раздачи нет – стартует новую (номер должен быть больше
    /// последнего сыгранного). Повторный вызов без решения возвращает тот же запрос.
    pub fn next_decision(&mut self, hand_number: HandNumber) -> Result<TableStep, EngineError> {
        if let Some(hand) = &self.hand {
            if hand.hand_number != hand_number {
                return Err(EngineError::HandNumberMismatch {
                    expected: hand.hand_number,
                    got: hand_number,
                });
            }
            return self.step();
        }

        if let Some(last) = self.table.last_hand_number {
            if hand_number <= last {
                return Err(EngineError::HandNumberMismatch {
                    expected: last + 1,
                    got: hand_number,
                });
            }
        }

        let active = self.table.active_seats();
        match active.as_slice() {
            [] => Err(EngineError::NoActiveSeats),
            [only] => Ok(TableStep::HandComplete(self.resolve_walkover(hand_number, *only))),
            _ => {
                self.hand = Some(start_hand(&mut self.table, hand_number)?);
                self.step()
            }
        }
    }

    /// Применить решение текущего игрока и вернуть следующий шаг.
    ///
    /// Отвергнутое решение не меняет состояние.
    pub fn apply_decision(&mut self, decision: Decision) -> Result<TableStep, EngineError> {
        let hand = self.hand.as_mut().ok_or(EngineError::NoActiveHand)?;

        if let HandProgress::Complete = advance(hand)? {
            return self.step();
        }

        if let Err(err) = apply_decision(hand, decision) {
            log::warn!(
                "раздача #{}: решение {:?} отвергнуто: {err}",
                hand.hand_number,
                decision
            );
            return Err(err);
        }

        self.step()
    }

    /// Сыграть раздачу целиком, спрашивая решения у `decide`.
    pub fn play_hand<F>(
        &mut self,
        hand_number: HandNumber,
        mut decide: F,
    ) -> Result<ResolvedHand, EngineError>
    where
        F: FnMut(&DecisionRequest) -> Decision,
    {
        let mut step = self.next_decision(hand_number)?;
        loop {
            match step {
                TableStep::HandComplete(resolved) => return Ok(resolved),
                TableStep::Decision(request) => {
                    step = self.apply_decision(decide(&request))?;
                }
            }
        }
    }

    fn step(&mut self) -> Result<TableStep, EngineError> {
        let hand = self.hand.as_mut().ok_or(EngineError::NoActiveHand)?;

        match advance(hand)? {
            HandProgress::AwaitingDecision(seat) => {
                Ok(TableStep::Decision(decision_request(hand, seat)?))
            }
            HandProgress::Complete => {
                let (resolved, history) = resolve_hand(hand, &mut self.table, &self.evaluator)?;
                self.hand = None;
                self.transcript.push(history);
                Ok(TableStep::HandComplete(resolved))
            }
        }
    }

    /// Один активный игрок: раздача без блайндов и карт, выигрыш 0.
    fn resolve_walkover(&mut self, hand_number: HandNumber, seat: SeatIndex) -> ResolvedHand {
        self.table.last_hand_number = Some(hand_number);

        let mut history = HandHistory::new(hand_number);
        history.push(HandEventKind::PotAwarded {
            seat,
            amount: Chips::ZERO,
        });
        history.push(HandEventKind::HandFinished { hand_number });
        self.transcript.push(history);

        log::info!("раздача #{hand_number}: за столом один активный игрок (место {seat})");

        ResolvedHand {
            hand_number,
            board: Vec::new(),
            winners: vec![Winner {
                seat_index: seat,
                amount: Chips::ZERO,
            }],
            seats: seat_results(&self.table),
            tiers: Vec::new(),
            returned: Vec::new(),
            showdown: Vec::new(),
        }
    }

    /// Посадить игрока между раздачами.
    pub fn seat_player(&mut self, seat: SeatIndex, stack: Chips) -> Result<(), EngineError> {
        if self.hand.is_some() {
            return Err(EngineError::HandInProgress);
        }
        if stack.is_zero() {
            return Err(EngineError::InvalidConfig(format!(
                "место {seat}: нулевой стек"
            )));
        }
        if !self.table.seats.contains_key(&seat) && self.table.seat_order.len() >= MAX_SEATS {
            return Err(EngineError::InvalidConfig(format!(
                "за столом уже {MAX_SEATS} мест"
            )));
        }

        self.table.seat_player(seat, stack);
        log::info!("место {seat} занято, стек {stack}");
        Ok(())
    }

    /// Снять место с турнира между раздачами. false – уже было выбывшим.
    pub fn eliminate_seat(&mut self, seat: SeatIndex) -> Result<bool, EngineError> {
        if self.hand.is_some() {
            return Err(EngineError::HandInProgress);
        }
        if !self.table.seats.contains_key(&seat) {
            return Err(EngineError::UnknownSeat(seat));
        }
        Ok(self.table.eliminate(seat))
    }

    /// Матч окончен, когда активных мест ≤ 1.
    pub fn is_match_over(&self) -> bool {
        self.table.active_seats().len() <= 1
    }

    /// Места от лучшего к худшему: оставшиеся по стеку, затем вылетевшие
    /// в обратном порядке вылета.
    pub fn standings(&self) -> Vec<SeatIndex> {
        let mut alive: Vec<(Chips, SeatIndex)> = self
            .table
            .seats
            .values()
            .filter(|s| !s.eliminated)
            .map(|s| (s.stack, s.seat_index))
            .collect();
        alive.sort_by(|a, b| b.0.cmp(&a.0).then(a.1.cmp(&b.1)));

        alive
            .into_iter()
            .map(|(_, seat)| seat)
            .chain(self.table.elimination_order.iter().rev().copied())
            .collect()
    }

    /// История всех сыгранных раздач.
    pub fn transcript(&self) -> &[HandHistory] {
        &self.transcript
    }

    /// SHA-256 (hex) от истории раздач и текущих стеков.
    /// Одинаковый конфиг + одинаковые решения = одинаковый отпечаток.
    pub fn fingerprint(&self) -> Result<String, EngineError> {
        #[derive(Serialize)]
        struct Fingerprint<'a> {
            transcript: &'a [HandHistory],
            seats: Vec<SeatResult>,
        }

        let payload = serde_json::to_vec(&Fingerprint {
            transcript: &self.transcript,
            seats: seat_results(&self.table),
        })
        .map_err(|err| {
            log::error!("не удалось сериализовать историю для отпечатка: {err}");
            EngineError::Internal("fingerprint serialization failed")
        })?;

        Ok(Sha256::digest(&payload)
            .iter()
            .map(|b| format!("{b:02x}"))
            .collect())
    }

    pub fn snapshot(&self) -> TableSnapshot {
        let seats = self
            .table
            .seat_order
            .iter()
            .filter_map(|seat| self.table.seats.get(seat))
            .map(|ts| match self.hand.as_ref().and_then(|h| h.seats.get(&ts.seat_index)) {
                Some(state) => SeatView {
                    seat_index: ts.seat_index,
                    stack: state.stack,
                    folded: state.folded,
                    all_in: state.all_in,
                    contribution: state.total_contribution,
                    street_contribution: state.street_contribution,
                    eliminated: ts.eliminated,
                },
                None => SeatView {
                    seat_index: ts.seat_index,
                    stack: ts.stack,
                    folded: false,
                    all_in: false,
                    contribution: Chips::ZERO,
                    street_contribution: Chips::ZERO,
                    eliminated: ts.eliminated,
                },
            })
            .collect();

        TableSnapshot {
            dealer_button: self.table.dealer_button,
            last_hand_number: self.table.last_hand_number,
            hand_in_progress: self.current_hand_number(),
            street: self.hand.as_ref().map(|h| h.street),
            board: self.hand.as_ref().map(|h| h.board.clone()).unwrap_or_default(),
            pot: self.hand.as_ref().map(HandEngine::pot).unwrap_or_default(),
            seats,
            elimination_order: self.table.elimination_order.clone(),
        }
    }
}

/// Запрос решения для места `seat` в текущем состоянии раздачи.
fn decision_request(hand: &HandEngine, seat: SeatIndex) -> Result<DecisionRequest, EngineError> {
    let state = hand.seats.get(&seat).ok_or(EngineError::UnknownSeat(seat))?;

    Ok(DecisionRequest {
        hand_number: hand.hand_number,
        street: hand.street,
        actor_seat_index: seat,
        hole_cards: state.hole_cards,
        legal_actions: hand.legal_actions(seat)?,
        pot: hand.pot(),
        current_bet: hand.betting.current_bet,
        board: hand.board.clone(),
        seats: hand
            .seats
            .iter()
            .map(|(&seat_index, s)| SeatView {
                seat_index,
                stack: s.stack,
                folded: s.folded,
                all_in: s.all_in,
                contribution: s.total_contribution,
                street_contribution: s.street_contribution,
                eliminated: false,
            })
            .collect(),
        actions_this_hand: hand.actions.clone(),
    })
}
