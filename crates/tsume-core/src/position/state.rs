//! 局面状態（StateInfo）
//!
//! 1手ごとに積まれるスナップショット。undo_move はこれを pop するだけで済むよう、
//! 差分で戻せない情報（捕獲駒・ハッシュ・王手情報・連続王手数）をすべて持つ。

use crate::bitboard::Bitboard;
use crate::types::{Color, Hand, Move, Piece, PieceType};

/// 局面状態
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StateInfo {
    /// 盤面ハッシュ（手番込み）
    pub board_key: u64,
    /// 手駒ハッシュ
    pub hand_key: u64,
    /// 手駒スナップショット（千日手判定用）[Color]
    pub hands: [Hand; Color::NUM],
    /// 連続王手カウンタ [Color]
    pub continuous_check: [u32; Color::NUM],
    /// 王手している駒
    pub checkers: Bitboard,
    /// 玉への利きを遮っている駒（敵味方とも）[Color]
    pub blockers_for_king: [Bitboard; Color::NUM],
    /// pinしている駒 [Color]（Color側の玉をpinしている敵駒）
    pub pinners: [Bitboard; Color::NUM],
    /// 駒種ごとに、手番側が置けば王手になる升 [PieceType]
    pub check_squares: [Bitboard; PieceType::NUM + 1],
    /// この局面に至る手で捕獲した駒
    pub captured_piece: Piece,
    /// この局面に至った指し手（初期局面は NONE）
    pub last_move: Move,
}

impl StateInfo {
    /// 空の状態
    pub const fn new() -> Self {
        StateInfo {
            board_key: 0,
            hand_key: 0,
            hands: [Hand::EMPTY; Color::NUM],
            continuous_check: [0; Color::NUM],
            checkers: Bitboard::EMPTY,
            blockers_for_king: [Bitboard::EMPTY; Color::NUM],
            pinners: [Bitboard::EMPTY; Color::NUM],
            check_squares: [Bitboard::EMPTY; PieceType::NUM + 1],
            captured_piece: Piece::NONE,
            last_move: Move::NONE,
        }
    }

    /// 局面全体のハッシュ
    #[inline]
    pub const fn key(&self) -> u64 {
        self.board_key ^ self.hand_key
    }
}

impl Default for StateInfo {
    fn default() -> Self {
        Self::new()
    }
}
