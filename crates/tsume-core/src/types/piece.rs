//! 駒（Piece）
//!
//! 下位4bitが駒種（1..=14）、bit 4 が手番。0 は `Piece::NONE`。

use super::{Color, PieceType};

/// 駒（先後の区別あり）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct Piece(u8);

impl Piece {
    /// 駒なし
    pub const NONE: Piece = Piece(0);

    // 先手の駒
    pub const B_PAWN: Piece = Piece(1);
    pub const B_LANCE: Piece = Piece(2);
    pub const B_KNIGHT: Piece = Piece(3);
    pub const B_SILVER: Piece = Piece(4);
    pub const B_BISHOP: Piece = Piece(5);
    pub const B_ROOK: Piece = Piece(6);
    pub const B_GOLD: Piece = Piece(7);
    pub const B_KING: Piece = Piece(8);
    pub const B_PRO_PAWN: Piece = Piece(9);
    pub const B_HORSE: Piece = Piece(13);
    pub const B_DRAGON: Piece = Piece(14);

    // 後手の駒（+16）
    pub const W_PAWN: Piece = Piece(17);
    pub const W_LANCE: Piece = Piece(18);
    pub const W_KNIGHT: Piece = Piece(19);
    pub const W_SILVER: Piece = Piece(20);
    pub const W_BISHOP: Piece = Piece(21);
    pub const W_ROOK: Piece = Piece(22);
    pub const W_GOLD: Piece = Piece(23);
    pub const W_KING: Piece = Piece(24);
    pub const W_PRO_PAWN: Piece = Piece(25);
    pub const W_HORSE: Piece = Piece(29);
    pub const W_DRAGON: Piece = Piece(30);

    /// 配列サイズ用（NONEを含む）
    pub const NUM: usize = 31;

    /// ColorとPieceTypeから生成
    #[inline]
    pub const fn new(color: Color, piece_type: PieceType) -> Piece {
        Piece(piece_type as u8 | ((color as u8) << 4))
    }

    /// 駒種を取得（`NONE` に対しては呼ばないこと）
    #[inline]
    pub const fn piece_type(self) -> PieceType {
        debug_assert!(self.0 != 0);
        match PieceType::from_u8(self.0 & 0x0F) {
            Some(pt) => pt,
            None => PieceType::Pawn,
        }
    }

    /// 手番を取得
    #[inline]
    pub const fn color(self) -> Color {
        if self.0 & 0x10 == 0 { Color::Black } else { Color::White }
    }

    #[inline]
    pub const fn is_none(self) -> bool {
        self.0 == 0
    }

    #[inline]
    pub const fn is_some(self) -> bool {
        self.0 != 0
    }

    /// 成った駒（成れない駒はそのまま）
    #[inline]
    pub const fn promoted(self) -> Piece {
        match self.piece_type().promote() {
            Some(pt) => Piece::new(self.color(), pt),
            None => self,
        }
    }

    /// 成る前の駒
    #[inline]
    pub const fn unpromoted(self) -> Piece {
        Piece::new(self.color(), self.piece_type().unpromote())
    }

    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    #[inline]
    pub const fn raw(self) -> u8 {
        self.0
    }

    /// SFEN 表記（例: "P", "+p", "k"）
    pub fn to_sfen(self) -> String {
        if self.is_none() {
            return String::new();
        }
        let pt = self.piece_type();
        let c = pt.to_sfen_char();
        let c = match self.color() {
            Color::Black => c,
            Color::White => c.to_ascii_lowercase(),
        };
        if pt.is_promoted() { format!("+{c}") } else { c.to_string() }
    }

    /// SFEN の駒文字（成りの '+' は含まない）から生駒を生成
    pub fn from_sfen_char(c: char) -> Option<Piece> {
        let pt = PieceType::from_sfen_char(c)?;
        let color = if c.is_ascii_uppercase() { Color::Black } else { Color::White };
        Some(Piece::new(color, pt))
    }
}

impl Default for Piece {
    fn default() -> Self {
        Piece::NONE
    }
}
