//! 機械学習用の特徴量プレーン
//!
//! 盤上の駒は手番側から見た向きで並べる。白番では盤を180度回転する。

mod feature_type;
mod stack;

pub use feature_type::FeatureType;
pub use stack::{FeatureStack, Layout};
