//! 特徴量プレーンの生成と書き出し

use crate::bitboard::{file_bb, Bitboard};
use crate::position::Position;
use crate::types::{Color, File, PieceType, Square};

use super::feature_type::{FeatureType, PlaneSource};

/// 書き出し時の並び
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    /// `[C][81]`
    ChannelsFirst,
    /// `[81][C]`
    ChannelsLast,
}

/// 1枚のプレーン
///
/// `rotate` が立っていれば盤を180度回転して読む（白番の盤上プレーン）。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Plane {
    bb: Bitboard,
    rotate: bool,
}

impl Plane {
    const fn uniform(on: bool) -> Self {
        Self { bb: if on { Bitboard::ALL } else { Bitboard::EMPTY }, rotate: false }
    }

    /// 手番側から見た升 `i` の値
    #[inline]
    fn get(&self, i: usize) -> f32 {
        let Some(sq) = Square::from_u8(i as u8) else {
            return 0.0;
        };
        let sq = if self.rotate { sq.inverse() } else { sq };
        if self.bb.contains(sq) { 1.0 } else { 0.0 }
    }
}

/// 指定された特徴量を積み重ねたもの
#[derive(Debug, Clone)]
pub struct FeatureStack {
    planes: Vec<Plane>,
}

impl FeatureStack {
    /// 局面から特徴量を作る（1種類につき1プレーン）
    pub fn new(pos: &Position, features: &[FeatureType]) -> Self {
        let us = pos.side_to_move();
        let rotate = us == Color::White;
        let planes = features.iter().map(|&ft| Self::plane(pos, us, rotate, ft)).collect();
        Self { planes }
    }

    fn plane(pos: &Position, us: Color, rotate: bool, ft: FeatureType) -> Plane {
        let owner = |mine: bool| if mine { us } else { !us };

        match ft.source() {
            PlaneSource::Turn { black } => Plane::uniform((us == Color::Black) == black),
            PlaneSource::Piece { mine, pt, with_promoted } => {
                let c = owner(mine);
                let mut bb = pos.pieces(c, pt);
                if with_promoted {
                    if let Some(promoted) = pt.promote() {
                        bb |= pos.pieces(c, promoted);
                    }
                }
                Plane { bb, rotate }
            }
            PlaneSource::Stand { mine, pt, count } => {
                Plane::uniform(pos.hand(owner(mine)).count(pt) >= count)
            }
            PlaneSource::Check => Plane::uniform(pos.in_check()),
            PlaneSource::NoPawnFile { mine } => {
                let pawns = pos.pieces(owner(mine), PieceType::Pawn);
                let mut bb = Bitboard::EMPTY;
                for file in File::ALL {
                    if (pawns & file_bb(file)).is_empty() {
                        bb |= file_bb(file);
                    }
                }
                Plane { bb, rotate }
            }
        }
    }

    /// プレーン数
    #[inline]
    pub fn len(&self) -> usize {
        self.planes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.planes.is_empty()
    }

    /// `channel` 番目のプレーンの升 `i`（手番側から見た番号）の値
    pub fn get(&self, channel: usize, i: usize) -> f32 {
        self.planes[channel].get(i)
    }

    /// 0/1 の浮動小数点列として書き出す
    pub fn extract(&self, layout: Layout) -> Vec<f32> {
        let channels = self.planes.len();
        let mut out = vec![0.0f32; channels * Square::NUM];

        for (ch, plane) in self.planes.iter().enumerate() {
            for sq in plane.bb.iter() {
                let i = if plane.rotate { sq.inverse().index() } else { sq.index() };
                let idx = match layout {
                    Layout::ChannelsFirst => ch * Square::NUM + i,
                    Layout::ChannelsLast => i * channels + ch,
                };
                out[idx] = 1.0;
            }
        }
        out
    }
}
