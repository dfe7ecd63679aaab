use crate::domain::card::Rank;

/// Битовая маска рангов.
///
/// Используем 13 бит (от 2 до A):
/// бит 0 = двойка, бит 12 = туз.
pub type RankMask = u16;

/// A2345: туз (бит 12) + двойка..пятёрка (биты 0..3).
pub const WHEEL_MASK: RankMask = 0b1_0000_0000_1111;

/// Пять подряд идущих бит.
const FIVE_IN_A_ROW: RankMask = 0b1_1111;

/// Получить битовую маску для одного ранга.
pub fn rank_to_bit(rank: Rank) -> RankMask {
    1u16 << (rank.value() - 2)
}

/// Найти стрит в битовой маске рангов.
/// Возвращает старшую карту стрита, если он есть.
///
/// Особый случай: wheel (A2345) → Rank::Five.
pub fn detect_straight(rank_mask: RankMask) -> Option<Rank> {
    // От broadway (старшая = A) вниз до 6-high.
    for high in (6u8..=14).rev() {
        let window = FIVE_IN_A_ROW << (high - 6);
        if rank_mask & window == window {
            return Rank::from_value(high);
        }
    }
    if rank_mask & WHEEL_MASK == WHEEL_MASK {
        return Some(Rank::Five);
    }
    None
}

/// Старшие `n` рангов из маски (по убыванию).
pub fn top_ranks(rank_mask: RankMask, n: usize) -> Vec<Rank> {
    Rank::ALL
        .iter()
        .rev()
        .copied()
        .filter(|r| rank_mask & rank_to_bit(*r) != 0)
        .take(n)
        .collect()
}
