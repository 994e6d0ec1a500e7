//! 局面表現モジュール
//!
//! - `Position`: 局面
//! - `StateInfo`: 1手ごとの局面状態（ハッシュ、王手情報、連続王手数）
//! - `do_move` / `undo_move`: 手の実行と巻き戻し
//! - SFEN形式の解析・出力
//! - 千日手判定

mod pos;
mod repetition;
mod sfen;
mod state;
mod zobrist;

pub use pos::Position;
pub use sfen::{SfenError, SFEN_HIRATE};
pub use state::StateInfo;
pub use zobrist::{zobrist_hand, zobrist_psq, zobrist_side, ZOBRIST};
