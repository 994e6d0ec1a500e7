//! 手駒（Hand）

use super::PieceType;

/// 手駒（32bit packed）
///
/// 各駒種の枚数フィールドの直上に1bitの番兵（借り検出用）を置く:
/// - bit 0-4:   歩 (5bit, 番兵 bit 5)
/// - bit 6-8:   香 (3bit, 番兵 bit 9)
/// - bit 10-12: 桂 (3bit, 番兵 bit 13)
/// - bit 14-16: 銀 (3bit, 番兵 bit 17)
/// - bit 18-20: 金 (3bit, 番兵 bit 21)
/// - bit 22-23: 角 (2bit, 番兵 bit 24)
/// - bit 25-26: 飛 (2bit, 番兵 bit 27)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(transparent)]
pub struct Hand(u32);

impl Hand {
    /// 空の手駒
    pub const EMPTY: Hand = Hand(0);

    const BORROW_MASK: u32 =
        (1 << 5) | (1 << 9) | (1 << 13) | (1 << 17) | (1 << 21) | (1 << 24) | (1 << 27);

    /// 駒種ごとの上限枚数
    #[inline]
    pub const fn max_count(pt: PieceType) -> u32 {
        match pt {
            PieceType::Pawn => 18,
            PieceType::Bishop | PieceType::Rook => 2,
            PieceType::Lance | PieceType::Knight | PieceType::Silver | PieceType::Gold => 4,
            _ => 0,
        }
    }

    /// 指定駒種の枚数を取得
    #[inline]
    pub const fn count(self, pt: PieceType) -> u32 {
        let (shift, mask) = Self::shift_mask(pt);
        (self.0 >> shift) & mask
    }

    /// 指定駒種を持っているか
    #[inline]
    pub const fn has(self, pt: PieceType) -> bool {
        self.count(pt) > 0
    }

    /// 1枚追加
    #[inline]
    pub const fn add(self, pt: PieceType) -> Hand {
        debug_assert!(self.count(pt) < Self::max_count(pt));
        let (shift, _) = Self::shift_mask(pt);
        Hand(self.0 + (1 << shift))
    }

    /// 1枚減らす
    #[inline]
    pub const fn sub(self, pt: PieceType) -> Hand {
        debug_assert!(self.has(pt));
        let (shift, _) = Self::shift_mask(pt);
        Hand(self.0 - (1 << shift))
    }

    /// 指定枚数をセット
    #[inline]
    pub const fn set(self, pt: PieceType, count: u32) -> Hand {
        let (shift, mask) = Self::shift_mask(pt);
        Hand((self.0 & !(mask << shift)) | ((count & mask) << shift))
    }

    /// 全ての駒種で self の枚数が other 以上か
    ///
    /// フィールド単位の引き算で借りが出れば番兵ビットが立つ。
    #[inline]
    pub const fn is_superior_or_equal(self, other: Hand) -> bool {
        (self.0.wrapping_sub(other.0) & Self::BORROW_MASK) == 0
    }

    /// 空かどうか
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// 手駒の総枚数
    #[inline]
    pub const fn total(self) -> u32 {
        let mut sum = 0;
        let mut i = 0;
        while i < PieceType::HAND_NUM {
            sum += self.count(PieceType::HAND_PIECES[i]);
            i += 1;
        }
        sum
    }

    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }

    const fn shift_mask(pt: PieceType) -> (u32, u32) {
        match pt {
            PieceType::Pawn => (0, 0x1F),
            PieceType::Lance => (6, 0x07),
            PieceType::Knight => (10, 0x07),
            PieceType::Silver => (14, 0x07),
            PieceType::Gold => (18, 0x07),
            PieceType::Bishop => (22, 0x03),
            PieceType::Rook => (25, 0x03),
            _ => (0, 0), // 玉・成駒は手駒にならない
        }
    }
}
