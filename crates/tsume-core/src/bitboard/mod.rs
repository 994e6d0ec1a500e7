//! ビットボードモジュール
//!
//! 81升の盤面を128bit整数の下位81bitで表現する。
//!
//! - `Bitboard`: 盤面集合
//! - 近接駒の利きテーブル
//! - 飛び駒の利き計算

mod core;
mod sliders;
mod tables;

pub use core::Bitboard;
pub use core::BitboardIter;
pub use sliders::*;
pub use tables::*;
