//! 合法手生成モジュール
//!
//! - `generate_legal`: 合法手すべて
//! - `generate_legal_wily`: 無駄な不成を除いた合法手
//! - `generate_checks`: 王手になる合法手
//! - `perft`: ノード数計測

mod generator;
mod movelist;
mod perft;
mod types;

pub use generator::{
    generate, generate_checks, generate_legal, generate_legal_wily, has_legal_move, is_checkmate,
    is_legal,
};
pub use movelist::MoveList;
pub use perft::{perft, perft_divide};
pub use types::{GenType, MAX_MOVES};

use crate::position::Position;
use crate::types::Move;

/// 合法手を Vec で返す
pub fn legal_moves(pos: &Position) -> Vec<Move> {
    let mut list = MoveList::new();
    generate_legal(pos, &mut list);
    list.as_slice().to_vec()
}
