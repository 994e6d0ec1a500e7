//! 近接駒の利きテーブルと盤面マスク

use crate::types::{Color, File, PieceType, Rank, Square};

use super::Bitboard;

/// 筋のBitboard
pub static FILE_BB: [Bitboard; File::NUM] = init_file_bb();

/// 段のBitboard
pub static RANK_BB: [Bitboard; Rank::NUM] = init_rank_bb();

/// 敵陣（成れる3段）[Color]
pub static PROMOTION_ZONE_BB: [Bitboard; Color::NUM] = init_promotion_zone_bb();

/// 歩の利き [Color][Square]
pub static PAWN_EFFECT: [[Bitboard; Square::NUM]; Color::NUM] = init_step_table(&[(0, -1)]);

/// 桂の利き [Color][Square]
pub static KNIGHT_EFFECT: [[Bitboard; Square::NUM]; Color::NUM] =
    init_step_table(&[(-1, -2), (1, -2)]);

/// 銀の利き [Color][Square]
pub static SILVER_EFFECT: [[Bitboard; Square::NUM]; Color::NUM] =
    init_step_table(&[(-1, -1), (0, -1), (1, -1), (-1, 1), (1, 1)]);

/// 金の利き [Color][Square]
pub static GOLD_EFFECT: [[Bitboard; Square::NUM]; Color::NUM] =
    init_step_table(&[(-1, -1), (0, -1), (1, -1), (-1, 0), (1, 0), (0, 1)]);

/// 王の利き [Square]
pub static KING_EFFECT: [Bitboard; Square::NUM] = init_step_table(&[
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
])[0];

// === 初期化関数 ===

const fn init_file_bb() -> [Bitboard; File::NUM] {
    let mut result = [Bitboard::EMPTY; File::NUM];
    let mut file = 0;
    while file < 9 {
        result[file] = Bitboard::from_raw(0x1FFu128 << (file * 9));
        file += 1;
    }
    result
}

const fn init_rank_bb() -> [Bitboard; Rank::NUM] {
    let mut result = [Bitboard::EMPTY; Rank::NUM];
    let mut rank = 0;
    while rank < 9 {
        let mut bits = 0u128;
        let mut file = 0;
        while file < 9 {
            bits |= 1u128 << (file * 9 + rank);
            file += 1;
        }
        result[rank] = Bitboard::from_raw(bits);
        rank += 1;
    }
    result
}

const fn init_promotion_zone_bb() -> [Bitboard; Color::NUM] {
    let ranks = init_rank_bb();
    [
        ranks[0].or(ranks[1]).or(ranks[2]),
        ranks[6].or(ranks[7]).or(ranks[8]),
    ]
}

/// 先手視点の (筋差, 段差) から手番ごとの利きテーブルを作る
///
/// 段差が負なら先手の前方。後手は符号を反転する。
const fn init_step_table(offsets: &[(i32, i32)]) -> [[Bitboard; Square::NUM]; Color::NUM] {
    let mut result = [[Bitboard::EMPTY; Square::NUM]; Color::NUM];
    let mut color = 0;
    while color < 2 {
        let sign = if color == 0 { 1 } else { -1 };
        let mut sq = 0;
        while sq < 81 {
            let file = (sq / 9) as i32;
            let rank = (sq % 9) as i32;
            let mut bits = 0u128;
            let mut i = 0;
            while i < offsets.len() {
                let f = file + offsets[i].0 * sign;
                let r = rank + offsets[i].1 * sign;
                if f >= 0 && f < 9 && r >= 0 && r < 9 {
                    bits |= 1u128 << (f * 9 + r);
                }
                i += 1;
            }
            result[color][sq] = Bitboard::from_raw(bits);
            sq += 1;
        }
        color += 1;
    }
    result
}

// === 利き取得関数 ===

/// 歩の利きを取得
#[inline]
pub fn pawn_effect(color: Color, sq: Square) -> Bitboard {
    PAWN_EFFECT[color.index()][sq.index()]
}

/// 桂の利きを取得
#[inline]
pub fn knight_effect(color: Color, sq: Square) -> Bitboard {
    KNIGHT_EFFECT[color.index()][sq.index()]
}

/// 銀の利きを取得
#[inline]
pub fn silver_effect(color: Color, sq: Square) -> Bitboard {
    SILVER_EFFECT[color.index()][sq.index()]
}

/// 金の利きを取得
#[inline]
pub fn gold_effect(color: Color, sq: Square) -> Bitboard {
    GOLD_EFFECT[color.index()][sq.index()]
}

/// 王の利きを取得
#[inline]
pub fn king_effect(sq: Square) -> Bitboard {
    KING_EFFECT[sq.index()]
}

/// 指定の筋のBitboard
#[inline]
pub fn file_bb(file: File) -> Bitboard {
    FILE_BB[file.index()]
}

/// 指定の段のBitboard
#[inline]
pub fn rank_bb(rank: Rank) -> Bitboard {
    RANK_BB[rank.index()]
}

/// 手番側から見た敵陣
#[inline]
pub fn promotion_zone_bb(color: Color) -> Bitboard {
    PROMOTION_ZONE_BB[color.index()]
}

/// 手番側から見て奥から `n` 段（行き所のない升の判定用）
#[inline]
pub fn far_ranks_bb(color: Color, n: usize) -> Bitboard {
    let mut bb = Bitboard::EMPTY;
    for i in 0..n.min(Rank::NUM) {
        let idx = match color {
            Color::Black => i,
            Color::White => Rank::NUM - 1 - i,
        };
        bb |= RANK_BB[idx];
    }
    bb
}

/// 駒種に応じた利きを取得（近接駒のみ）
#[inline]
pub fn step_effect(pt: PieceType, color: Color, sq: Square) -> Bitboard {
    match pt {
        PieceType::Pawn => pawn_effect(color, sq),
        PieceType::Knight => knight_effect(color, sq),
        PieceType::Silver => silver_effect(color, sq),
        PieceType::Gold
        | PieceType::ProPawn
        | PieceType::ProLance
        | PieceType::ProKnight
        | PieceType::ProSilver => gold_effect(color, sq),
        PieceType::King => king_effect(sq),
        // 遠方駒は sliders 側で occupied を使って計算する
        _ => Bitboard::EMPTY,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(s: &str) -> Square {
        Square::from_usi(s).unwrap()
    }

    #[test]
    fn test_file_rank_bb() {
        assert_eq!(file_bb(File::File1).count(), 9);
        assert!(file_bb(File::File1).contains(sq("1a")));
        assert!(file_bb(File::File1).contains(sq("1i")));
        assert!(!file_bb(File::File1).contains(sq("2a")));
        assert!(rank_bb(Rank::Rank3).contains(sq("9c")));
        assert_eq!(promotion_zone_bb(Color::Black).count(), 27);
        assert!(promotion_zone_bb(Color::White).contains(sq("5g")));
        assert_eq!(far_ranks_bb(Color::White, 2), rank_bb(Rank::Rank8) | rank_bb(Rank::Rank9));
    }

    #[test]
    fn test_pawn_effect() {
        assert_eq!(pawn_effect(Color::Black, sq("7g")), Bitboard::from_square(sq("7f")));
        assert_eq!(pawn_effect(Color::White, sq("3c")), Bitboard::from_square(sq("3d")));
        assert!(pawn_effect(Color::Black, sq("5a")).is_empty());
    }

    #[test]
    fn test_knight_effect() {
        let bb = knight_effect(Color::Black, sq("5e"));
        assert_eq!(bb.count(), 2);
        assert!(bb.contains(sq("4c")));
        assert!(bb.contains(sq("6c")));
        assert!(knight_effect(Color::Black, sq("5b")).is_empty());
        assert!(knight_effect(Color::White, sq("1a")).contains(sq("2c")));
    }

    #[test]
    fn test_gold_silver_king_counts() {
        assert_eq!(gold_effect(Color::Black, sq("5e")).count(), 6);
        assert_eq!(silver_effect(Color::Black, sq("5e")).count(), 5);
        assert_eq!(king_effect(sq("5e")).count(), 8);
        assert_eq!(king_effect(sq("1a")).count(), 3);
        // 後手の金は後ろ斜めに利く
        assert!(gold_effect(Color::White, sq("5e")).contains(sq("4f")));
        assert!(!gold_effect(Color::White, sq("5e")).contains(sq("4d")));
    }
}
