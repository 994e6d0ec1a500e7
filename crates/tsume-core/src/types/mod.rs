//! 基本型

mod color;
mod file;
mod hand;
mod moves;
mod piece;
mod piece_type;
mod rank;
mod repetition;
mod square;

pub use color::Color;
pub use file::File;
pub use hand::Hand;
pub use moves::{Move, MoveParseError};
pub use piece::Piece;
pub use piece_type::PieceType;
pub use rank::Rank;
pub use repetition::RepetitionState;
pub use square::Square;
