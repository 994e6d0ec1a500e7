//! 指し手（Move）
//!
//! 16bit 表現:
//! - bit 0-6:   移動先
//! - bit 7-13:  移動元（駒打ちの場合は打つ駒種）
//! - bit 14:    駒打ちフラグ
//! - bit 15:    成りフラグ

use thiserror::Error;

use super::{PieceType, Square};

/// 指し手文字列の解析エラー
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoveParseError {
    #[error("malformed move token: {0:?}")]
    Syntax(String),
    #[error("move {0} is not legal in this position")]
    Illegal(String),
}

/// 指し手
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(transparent)]
pub struct Move(u16);

impl Move {
    /// 無効な指し手（探索失敗・合法手なし）
    pub const NONE: Move = Move(0);

    const TO_MASK: u16 = 0x7F;
    const FROM_SHIFT: u16 = 7;
    const DROP_FLAG: u16 = 1 << 14;
    const PROMOTE_FLAG: u16 = 1 << 15;

    /// 盤上の駒を動かす指し手
    #[inline]
    pub const fn new_move(from: Square, to: Square, promote: bool) -> Move {
        let flag = if promote { Self::PROMOTE_FLAG } else { 0 };
        Move(to.raw() as u16 | ((from.raw() as u16) << Self::FROM_SHIFT) | flag)
    }

    /// 駒打ち
    #[inline]
    pub const fn new_drop(pt: PieceType, to: Square) -> Move {
        debug_assert!(pt.is_hand_piece());
        Move(to.raw() as u16 | ((pt as u16) << Self::FROM_SHIFT) | Self::DROP_FLAG)
    }

    #[inline]
    pub const fn to(self) -> Square {
        Square::from_u8_unchecked((self.0 & Self::TO_MASK) as u8)
    }

    /// 移動元（駒打ちでないこと）
    #[inline]
    pub const fn from(self) -> Square {
        debug_assert!(!self.is_drop());
        Square::from_u8_unchecked(((self.0 >> Self::FROM_SHIFT) & Self::TO_MASK) as u8)
    }

    /// 打つ駒種（駒打ちであること）
    #[inline]
    pub const fn drop_piece_type(self) -> PieceType {
        debug_assert!(self.is_drop());
        match PieceType::from_u8(((self.0 >> Self::FROM_SHIFT) & Self::TO_MASK) as u8) {
            Some(pt) => pt,
            None => PieceType::Pawn,
        }
    }

    #[inline]
    pub const fn is_drop(self) -> bool {
        self.0 & Self::DROP_FLAG != 0
    }

    #[inline]
    pub const fn is_promote(self) -> bool {
        self.0 & Self::PROMOTE_FLAG != 0
    }

    #[inline]
    pub const fn is_none(self) -> bool {
        self.0 == 0
    }

    #[inline]
    pub const fn is_some(self) -> bool {
        self.0 != 0
    }

    #[inline]
    pub const fn raw(self) -> u16 {
        self.0
    }

    /// USI 形式の文字列（"7g7f", "7g7f+", "S*2g", "none"）
    pub fn to_usi(self) -> String {
        if self.is_none() {
            return "none".to_string();
        }
        if self.is_drop() {
            return format!("{}*{}", self.drop_piece_type().to_sfen_char(), self.to());
        }
        let suffix = if self.is_promote() { "+" } else { "" };
        format!("{}{}{}", self.from(), self.to(), suffix)
    }

    /// USI 形式の文字列を構文解析する（合法性は検査しない）
    pub fn from_usi(s: &str) -> Result<Move, MoveParseError> {
        let syntax = || MoveParseError::Syntax(s.to_string());
        if !s.is_ascii() {
            return Err(syntax());
        }
        if s.len() == 4 && s.as_bytes()[1] == b'*' {
            let pt = s
                .chars()
                .next()
                .filter(char::is_ascii_uppercase)
                .and_then(PieceType::from_sfen_char)
                .filter(|pt| pt.is_hand_piece())
                .ok_or_else(syntax)?;
            let to = Square::from_usi(&s[2..4]).ok_or_else(syntax)?;
            return Ok(Move::new_drop(pt, to));
        }

        let (body, promote) = match s.strip_suffix('+') {
            Some(body) => (body, true),
            None => (s, false),
        };
        if body.len() != 4 {
            return Err(syntax());
        }
        let from = Square::from_usi(&body[0..2]).ok_or_else(syntax)?;
        let to = Square::from_usi(&body[2..4]).ok_or_else(syntax)?;
        if from == to {
            return Err(syntax());
        }
        Ok(Move::new_move(from, to, promote))
    }
}

impl std::fmt::Debug for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Move({})", self.to_usi())
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_usi())
    }
}
