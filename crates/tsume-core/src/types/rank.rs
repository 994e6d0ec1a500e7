//! 段（Rank）

use super::Color;

/// 段（一段〜九段）
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Rank {
    Rank1 = 0,
    Rank2 = 1,
    Rank3 = 2,
    Rank4 = 3,
    Rank5 = 4,
    Rank6 = 5,
    Rank7 = 6,
    Rank8 = 7,
    Rank9 = 8,
}

impl Rank {
    /// 段の数
    pub const NUM: usize = 9;

    /// 全ての段
    pub const ALL: [Rank; 9] = [
        Rank::Rank1,
        Rank::Rank2,
        Rank::Rank3,
        Rank::Rank4,
        Rank::Rank5,
        Rank::Rank6,
        Rank::Rank7,
        Rank::Rank8,
        Rank::Rank9,
    ];

    /// u8から変換
    #[inline]
    pub const fn from_u8(n: u8) -> Option<Rank> {
        if n < 9 { Some(Rank::ALL[n as usize]) } else { None }
    }

    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// 成れる段かどうか（先手は一〜三段、後手は七〜九段）
    #[inline]
    pub const fn is_promotion_zone(self, color: Color) -> bool {
        match color {
            Color::Black => (self as u8) <= 2,
            Color::White => (self as u8) >= 6,
        }
    }

    /// 手番から見た段（先手視点に正規化）
    #[inline]
    pub const fn relative(self, color: Color) -> Rank {
        match color {
            Color::Black => self,
            Color::White => Rank::ALL[8 - self as usize],
        }
    }

    /// USI表記の文字（'a'〜'i'）
    #[inline]
    pub const fn to_usi_char(self) -> char {
        (b'a' + self as u8) as char
    }

    /// USI表記の文字から変換
    #[inline]
    pub const fn from_usi_char(c: char) -> Option<Rank> {
        match c {
            'a'..='i' => Rank::from_u8(c as u8 - b'a'),
            _ => None,
        }
    }
}
