//! 升（Square）
//!
//! 縦型配置: `index = file * 9 + rank`。1一 が 0、9九 が 80。

use super::{File, Rank};

/// 升（0〜80）
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct Square(u8);

impl Square {
    /// 升の数
    pub const NUM: usize = 81;

    pub const SQ_11: Square = Square(0);
    pub const SQ_55: Square = Square(40);
    pub const SQ_99: Square = Square(80);

    /// 筋と段から生成
    #[inline]
    pub const fn new(file: File, rank: Rank) -> Square {
        Square(file as u8 * 9 + rank as u8)
    }

    /// u8から変換（範囲チェックあり）
    #[inline]
    pub const fn from_u8(n: u8) -> Option<Square> {
        if (n as usize) < Self::NUM { Some(Square(n)) } else { None }
    }

    /// u8から変換（範囲チェックなし、呼び出し側で 0..81 を保証する）
    #[inline]
    pub(crate) const fn from_u8_unchecked(n: u8) -> Square {
        debug_assert!((n as usize) < Self::NUM);
        Square(n)
    }

    #[inline]
    pub const fn file(self) -> File {
        File::ALL[(self.0 / 9) as usize]
    }

    #[inline]
    pub const fn rank(self) -> Rank {
        Rank::ALL[(self.0 % 9) as usize]
    }

    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    #[inline]
    pub const fn raw(self) -> u8 {
        self.0
    }

    /// 盤面を180度回転させた升
    #[inline]
    pub const fn inverse(self) -> Square {
        Square(80 - self.0)
    }

    /// USI表記（例: "7g"）
    pub fn to_usi(self) -> String {
        let mut s = String::with_capacity(2);
        s.push(self.file().to_usi_char());
        s.push(self.rank().to_usi_char());
        s
    }

    /// USI表記から変換
    pub fn from_usi(s: &str) -> Option<Square> {
        let mut chars = s.chars();
        let file = File::from_usi_char(chars.next()?)?;
        let rank = Rank::from_usi_char(chars.next()?)?;
        if chars.next().is_some() {
            return None;
        }
        Some(Square::new(file, rank))
    }

    /// 全ての升（index 昇順）
    pub fn all() -> impl Iterator<Item = Square> {
        (0..Self::NUM as u8).map(Square)
    }
}

impl std::fmt::Display for Square {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.file().to_usi_char(), self.rank().to_usi_char())
    }
}
