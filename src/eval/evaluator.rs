use crate::domain::card::{Card, Rank};
use crate::domain::hand::HandRank;

use super::hand_rank::HandCategory;
use super::lookup_tables::{detect_straight, rank_to_bit, top_ranks, RankMask};

/// Лучшая 5-карточная рука из hole + board.
///
/// Ожидается 2 карманные и от 3 до 5 карт борда, но функция
/// корректна для любых 5–7 карт (и не паникует на меньшем числе).
pub fn evaluate_best_hand(hole: &[Card], board: &[Card]) -> HandRank {
    let mut all_cards = Vec::with_capacity(hole.len() + board.len());
    all_cards.extend_from_slice(hole);
    all_cards.extend_from_slice(board);
    evaluate_cards(&all_cards)
}

/// Оценка набора карт через счётчики рангов и маски мастей,
/// без перебора 5-карточных сочетаний.
pub fn evaluate_cards(cards: &[Card]) -> HandRank {
    let mut rank_counts = [0u8; 15]; // индексы 2..=14
    let mut suit_masks: [RankMask; 4] = [0; 4];
    let mut all_mask: RankMask = 0;

    for card in cards {
        rank_counts[card.rank.value() as usize] += 1;
        suit_masks[card.suit.index()] |= rank_to_bit(card.rank);
        all_mask |= rank_to_bit(card.rank);
    }

    let flush_mask = suit_masks.iter().copied().find(|m| m.count_ones() >= 5);

    if let Some(mask) = flush_mask {
        if let Some(high) = detect_straight(mask) {
            return HandRank::from_category_and_ranks(HandCategory::StraightFlush, &[high]);
        }
    }

    // (count, rank): сначала по количеству, потом по рангу – по убыванию.
    let mut groups: Vec<(u8, Rank)> = Rank::ALL
        .iter()
        .copied()
        .filter(|r| rank_counts[r.value() as usize] > 0)
        .map(|r| (rank_counts[r.value() as usize], r))
        .collect();
    groups.sort_by(|a, b| b.cmp(a));

    let (top_count, top_rank) = match groups.first() {
        Some(g) => *g,
        None => return HandRank::from_category_and_ranks(HandCategory::HighCard, &[]),
    };

    let kickers = |exclude: &[Rank], n: usize| -> Vec<Rank> {
        let mut mask = all_mask;
        for r in exclude {
            mask &= !rank_to_bit(*r);
        }
        top_ranks(mask, n)
    };

    if top_count >= 4 {
        let mut ranks = vec![top_rank];
        ranks.extend(kickers(&[top_rank], 1));
        return HandRank::from_category_and_ranks(HandCategory::FourOfAKind, &ranks);
    }

    if top_count == 3 {
        // Вторая тройка тоже годится как пара для фулл-хауса.
        if let Some(&(_, pair)) = groups[1..].iter().find(|(c, _)| *c >= 2) {
            return HandRank::from_category_and_ranks(HandCategory::FullHouse, &[top_rank, pair]);
        }
    }

    if let Some(mask) = flush_mask {
        return HandRank::from_category_and_ranks(HandCategory::Flush, &top_ranks(mask, 5));
    }

    if let Some(high) = detect_straight(all_mask) {
        return HandRank::from_category_and_ranks(HandCategory::Straight, &[high]);
    }

    if top_count == 3 {
        let mut ranks = vec![top_rank];
        ranks.extend(kickers(&[top_rank], 2));
        return HandRank::from_category_and_ranks(HandCategory::ThreeOfAKind, &ranks);
    }

    if top_count == 2 {
        if let Some(&(2, second)) = groups.get(1) {
            let mut ranks = vec![top_rank, second];
            ranks.extend(kickers(&[top_rank, second], 1));
            return HandRank::from_category_and_ranks(HandCategory::TwoPair, &ranks);
        }
        let mut ranks = vec![top_rank];
        ranks.extend(kickers(&[top_rank], 3));
        return HandRank::from_category_and_ranks(HandCategory::OnePair, &ranks);
    }

    HandRank::from_category_and_ranks(HandCategory::HighCard, &top_ranks(all_mask, 5))
}
