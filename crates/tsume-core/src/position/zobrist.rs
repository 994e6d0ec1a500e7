//! Zobristハッシュ
//!
//! 盤面キー（手番込み）と手駒キーを分けて持つ。千日手判定は盤面キーの一致で候補を探し、
//! 手駒は別途比較する。

use crate::types::{Color, Piece, PieceType, Square};

/// Zobristハッシュ用乱数テーブル
pub struct Zobrist {
    /// 手番用（後手番のときに xor される）
    pub side: u64,
    /// 駒×升 [Piece.index()][Square.index()]
    pub psq: [[u64; Square::NUM]; Piece::NUM],
    /// 手駒1枚あたりの加算値 [Color][PieceType]
    pub hand: [[u64; PieceType::HAND_NUM + 1]; Color::NUM],
}

impl Zobrist {
    /// テーブル初期化
    pub const fn init() -> Self {
        let mut zobrist = Zobrist {
            side: 0,
            psq: [[0; Square::NUM]; Piece::NUM],
            hand: [[0; PieceType::HAND_NUM + 1]; Color::NUM],
        };

        let mut seed = 0x123456789ABCDEF0u64;

        seed = xorshift64(seed);
        // 最下位bitは0にしておき、手番は side の xor のみで表す
        zobrist.side = seed | 1;

        // Piece::NONE は常に0
        let mut pc = 1;
        while pc < Piece::NUM {
            let mut sq = 0;
            while sq < Square::NUM {
                seed = xorshift64(seed);
                zobrist.psq[pc][sq] = seed & !1;
                sq += 1;
            }
            pc += 1;
        }

        let mut c = 0;
        while c < Color::NUM {
            let mut pt = 1;
            while pt <= PieceType::HAND_NUM {
                seed = xorshift64(seed);
                zobrist.hand[c][pt] = seed & !1;
                pt += 1;
            }
            c += 1;
        }

        zobrist
    }
}

/// XorShift64疑似乱数生成（const fn対応）
const fn xorshift64(mut x: u64) -> u64 {
    x ^= x << 13;
    x ^= x >> 7;
    x ^= x << 17;
    x
}

/// グローバルZobristテーブル
pub static ZOBRIST: Zobrist = Zobrist::init();

/// 駒と升のハッシュを取得
#[inline]
pub fn zobrist_psq(pc: Piece, sq: Square) -> u64 {
    ZOBRIST.psq[pc.index()][sq.index()]
}

/// 手駒1枚分のハッシュを取得（加算で使う）
#[inline]
pub fn zobrist_hand(color: Color, pt: PieceType) -> u64 {
    debug_assert!(pt.is_hand_piece());
    ZOBRIST.hand[color.index()][pt.index()]
}

/// 手番のハッシュを取得
#[inline]
pub fn zobrist_side() -> u64 {
    ZOBRIST.side
}
