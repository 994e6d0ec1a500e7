//! Bitboard（81升の集合）

use crate::types::Square;

/// Bitboard
///
/// 升の index（縦型配置）をそのままビット位置として `u128` の下位81bitに載せる。
#[derive(Clone, Copy, PartialEq, Eq, Default, Hash)]
#[repr(transparent)]
pub struct Bitboard(u128);

impl Bitboard {
    /// 空のBitboard
    pub const EMPTY: Bitboard = Bitboard(0);

    /// 全升が立っているBitboard
    pub const ALL: Bitboard = Bitboard((1u128 << 81) - 1);

    /// 内部値を直接指定して生成（81bit 以上は切り捨てる）
    #[inline]
    pub const fn from_raw(raw: u128) -> Bitboard {
        Bitboard(raw & Self::ALL.0)
    }

    /// 単一升のBitboard
    #[inline]
    pub const fn from_square(sq: Square) -> Bitboard {
        Bitboard(1u128 << sq.index())
    }

    #[inline]
    pub const fn raw(self) -> u128 {
        self.0
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// ビットが立っている数
    #[inline]
    pub const fn count(self) -> u32 {
        self.0.count_ones()
    }

    /// 2つ以上のビットが立っているか
    #[inline]
    pub const fn more_than_one(self) -> bool {
        self.0 & self.0.wrapping_sub(1) != 0
    }

    #[inline]
    pub const fn contains(self, sq: Square) -> bool {
        (self.0 >> sq.index()) & 1 != 0
    }

    #[inline]
    pub fn set(&mut self, sq: Square) {
        self.0 |= 1u128 << sq.index();
    }

    #[inline]
    pub fn clear(&mut self, sq: Square) {
        self.0 &= !(1u128 << sq.index());
    }

    /// index 最小の升（空ならNone）
    #[inline]
    pub const fn lsb(self) -> Option<Square> {
        if self.0 == 0 {
            None
        } else {
            Some(Square::from_u8_unchecked(self.0.trailing_zeros() as u8))
        }
    }

    /// index 最大の升（空ならNone）
    #[inline]
    pub const fn msb(self) -> Option<Square> {
        if self.0 == 0 {
            None
        } else {
            Some(Square::from_u8_unchecked((127 - self.0.leading_zeros()) as u8))
        }
    }

    /// index 最小の升を取り出して消す
    #[inline]
    pub fn pop(&mut self) -> Option<Square> {
        let sq = self.lsb()?;
        self.0 &= self.0 - 1;
        Some(sq)
    }

    /// 升を index 昇順に列挙する
    #[inline]
    pub const fn iter(self) -> BitboardIter {
        BitboardIter(self)
    }

    /// const 文脈用の和集合
    #[inline]
    pub const fn or(self, rhs: Bitboard) -> Bitboard {
        Bitboard(self.0 | rhs.0)
    }

    /// const 文脈用の差集合
    #[inline]
    pub const fn and_not(self, rhs: Bitboard) -> Bitboard {
        Bitboard(self.0 & !rhs.0)
    }
}

impl std::ops::BitAnd for Bitboard {
    type Output = Bitboard;

    #[inline]
    fn bitand(self, rhs: Bitboard) -> Bitboard {
        Bitboard(self.0 & rhs.0)
    }
}

impl std::ops::BitOr for Bitboard {
    type Output = Bitboard;

    #[inline]
    fn bitor(self, rhs: Bitboard) -> Bitboard {
        Bitboard(self.0 | rhs.0)
    }
}

impl std::ops::BitXor for Bitboard {
    type Output = Bitboard;

    #[inline]
    fn bitxor(self, rhs: Bitboard) -> Bitboard {
        Bitboard(self.0 ^ rhs.0)
    }
}

impl std::ops::Not for Bitboard {
    type Output = Bitboard;

    #[inline]
    fn not(self) -> Bitboard {
        Bitboard(!self.0 & Self::ALL.0)
    }
}

impl std::ops::BitAndAssign for Bitboard {
    #[inline]
    fn bitand_assign(&mut self, rhs: Bitboard) {
        self.0 &= rhs.0;
    }
}

impl std::ops::BitOrAssign for Bitboard {
    #[inline]
    fn bitor_assign(&mut self, rhs: Bitboard) {
        self.0 |= rhs.0;
    }
}

impl std::ops::BitXorAssign for Bitboard {
    #[inline]
    fn bitxor_assign(&mut self, rhs: Bitboard) {
        self.0 ^= rhs.0;
    }
}

impl std::fmt::Debug for Bitboard {
    /// 先手から見た盤面図（9筋が左）で表示
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f)?;
        for rank in 0..9u8 {
            for file in (0..9u8).rev() {
                let sq = Square::from_u8_unchecked(file * 9 + rank);
                f.write_str(if self.contains(sq) { "●" } else { "・" })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Bitboardのイテレータ
pub struct BitboardIter(Bitboard);

impl Iterator for BitboardIter {
    type Item = Square;

    #[inline]
    fn next(&mut self) -> Option<Square> {
        self.0.pop()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.0.count() as usize;
        (n, Some(n))
    }
}

impl ExactSizeIterator for BitboardIter {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{File, Rank};

    #[test]
    fn test_bitboard_set_clear() {
        let sq = Square::new(File::File5, Rank::Rank5);
        let mut bb = Bitboard::EMPTY;
        bb.set(sq);
        assert!(bb.contains(sq));
        assert_eq!(bb.count(), 1);
        bb.clear(sq);
        assert!(bb.is_empty());
    }

    #[test]
    fn test_bitboard_all_and_not() {
        assert_eq!(Bitboard::ALL.count(), 81);
        assert!((!Bitboard::ALL).is_empty());
        assert_eq!(!Bitboard::EMPTY, Bitboard::ALL);
    }

    #[test]
    fn test_bitboard_lsb_msb() {
        let bb = Bitboard::from_square(Square::SQ_11) | Bitboard::from_square(Square::SQ_99);
        assert_eq!(bb.lsb(), Some(Square::SQ_11));
        assert_eq!(bb.msb(), Some(Square::SQ_99));
        assert!(bb.more_than_one());
        assert_eq!(Bitboard::EMPTY.lsb(), None);
        assert_eq!(Bitboard::EMPTY.msb(), None);
    }

    #[test]
    fn test_bitboard_iter_in_index_order() {
        let squares = [Square::SQ_99, Square::SQ_11, Square::SQ_55];
        let mut bb = Bitboard::EMPTY;
        for sq in squares {
            bb.set(sq);
        }
        let collected: Vec<_> = bb.iter().collect();
        assert_eq!(collected, vec![Square::SQ_11, Square::SQ_55, Square::SQ_99]);
        assert_eq!(bb.iter().len(), 3);
    }
}
