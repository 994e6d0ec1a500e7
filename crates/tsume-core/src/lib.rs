//! # tsume-core
//!
//! 将棋のルールエンジンと詰み探索ライブラリ。
//!
//! ## モジュール構成
//!
//! - `types`: 基本型（Color, Square, Piece, Hand, Move, etc.）
//! - `bitboard`: ビットボードと利きテーブル
//! - `position`: 局面表現、do_move/undo_move、SFEN、千日手判定
//! - `movegen`: 合法手生成と perft
//! - `mate`: 1手詰めと固定手数の詰み探索
//! - `dfpn`: df-pn 詰み探索
//! - `features`: 機械学習用の特徴量プレーン
//!

// 基本型
pub mod types;

// 盤面表現
pub mod bitboard;
pub mod position;

// 合法手生成
pub mod movegen;

// 詰み探索
pub mod dfpn;
pub mod mate;

// 特徴量
pub mod features;

pub use dfpn::{DfPnSolver, Outcome, SearchResult, SolverConfig};
pub use position::{Position, SfenError, SFEN_HIRATE};
pub use types::{Color, Hand, Move, MoveParseError, Piece, PieceType, RepetitionState, Square};
