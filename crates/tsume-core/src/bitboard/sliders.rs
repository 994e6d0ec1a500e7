//! 飛び駒の利き
//!
//! 8方向の半直線テーブルを使い、最初に当たる駒を lsb/msb で求める。

use crate::types::{Color, Square};

use super::{king_effect, Bitboard};

/// 方向
///
/// index が増える向き（下・左・左上・左下）と減る向きで最初の駒の取り方が変わる。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Direction {
    /// 段が減る（先手の前方）
    N = 0,
    /// 段が増える
    S = 1,
    /// 筋が減る
    E = 2,
    /// 筋が増える
    W = 3,
    NE = 4,
    NW = 5,
    SE = 6,
    SW = 7,
}

impl Direction {
    pub const ALL: [Direction; 8] = [
        Direction::N,
        Direction::S,
        Direction::E,
        Direction::W,
        Direction::NE,
        Direction::NW,
        Direction::SE,
        Direction::SW,
    ];

    /// (筋差, 段差)
    const fn delta(self) -> (i32, i32) {
        match self {
            Direction::N => (0, -1),
            Direction::S => (0, 1),
            Direction::E => (-1, 0),
            Direction::W => (1, 0),
            Direction::NE => (-1, -1),
            Direction::NW => (1, -1),
            Direction::SE => (-1, 1),
            Direction::SW => (1, 1),
        }
    }

    /// index が増える向きか
    #[inline]
    const fn is_positive(self) -> bool {
        let (df, dr) = self.delta();
        df * 9 + dr > 0
    }

    #[inline]
    const fn opposite(self) -> Direction {
        match self {
            Direction::N => Direction::S,
            Direction::S => Direction::N,
            Direction::E => Direction::W,
            Direction::W => Direction::E,
            Direction::NE => Direction::SW,
            Direction::SW => Direction::NE,
            Direction::NW => Direction::SE,
            Direction::SE => Direction::NW,
        }
    }
}

/// 半直線 [Direction][Square]（起点を含まない）
static RAYS: [[Bitboard; Square::NUM]; 8] = init_rays();

/// 2升の間（両端を含まない）
static BETWEEN: [[Bitboard; Square::NUM]; Square::NUM] = init_between();

/// 2升を通る直線（両端を含む）
static LINE: [[Bitboard; Square::NUM]; Square::NUM] = init_line();

const fn init_rays() -> [[Bitboard; Square::NUM]; 8] {
    let mut result = [[Bitboard::EMPTY; Square::NUM]; 8];
    let mut d = 0;
    while d < 8 {
        let (df, dr) = Direction::ALL[d].delta();
        let mut sq = 0;
        while sq < 81 {
            let mut f = (sq / 9) as i32 + df;
            let mut r = (sq % 9) as i32 + dr;
            let mut bits = 0u128;
            while f >= 0 && f < 9 && r >= 0 && r < 9 {
                bits |= 1u128 << (f * 9 + r);
                f += df;
                r += dr;
            }
            result[d][sq] = Bitboard::from_raw(bits);
            sq += 1;
        }
        d += 1;
    }
    result
}

const fn init_between() -> [[Bitboard; Square::NUM]; Square::NUM] {
    let rays = init_rays();
    let mut result = [[Bitboard::EMPTY; Square::NUM]; Square::NUM];
    let mut a = 0;
    while a < 81 {
        let mut d = 0;
        while d < 8 {
            let ray = rays[d][a];
            let mut b = 0;
            while b < 81 {
                if (ray.raw() >> b) & 1 != 0 {
                    result[a][b] = ray.and_not(rays[d][b]).and_not(Bitboard::from_raw(1u128 << b));
                }
                b += 1;
            }
            d += 1;
        }
        a += 1;
    }
    result
}

const fn init_line() -> [[Bitboard; Square::NUM]; Square::NUM] {
    let rays = init_rays();
    let mut result = [[Bitboard::EMPTY; Square::NUM]; Square::NUM];
    let mut a = 0;
    while a < 81 {
        let mut d = 0;
        while d < 8 {
            let ray = rays[d][a];
            let back = rays[Direction::ALL[d].opposite() as usize][a];
            let full = ray.or(back).or(Bitboard::from_raw(1u128 << a));
            let mut b = 0;
            while b < 81 {
                if (ray.raw() >> b) & 1 != 0 {
                    result[a][b] = full;
                }
                b += 1;
            }
            d += 1;
        }
        a += 1;
    }
    result
}

/// 1方向の利き（最初に当たる駒の升を含む）
#[inline]
pub fn ray_effect(dir: Direction, sq: Square, occupied: Bitboard) -> Bitboard {
    let ray = RAYS[dir as usize][sq.index()];
    let blockers = ray & occupied;
    let first = if dir.is_positive() { blockers.lsb() } else { blockers.msb() };
    match first {
        Some(b) => ray & !RAYS[dir as usize][b.index()],
        None => ray,
    }
}

/// 香の利きを計算
#[inline]
pub fn lance_effect(color: Color, sq: Square, occupied: Bitboard) -> Bitboard {
    match color {
        Color::Black => ray_effect(Direction::N, sq, occupied),
        Color::White => ray_effect(Direction::S, sq, occupied),
    }
}

/// 角の利きを計算
#[inline]
pub fn bishop_effect(sq: Square, occupied: Bitboard) -> Bitboard {
    ray_effect(Direction::NE, sq, occupied)
        | ray_effect(Direction::NW, sq, occupied)
        | ray_effect(Direction::SE, sq, occupied)
        | ray_effect(Direction::SW, sq, occupied)
}

/// 飛車の利きを計算
#[inline]
pub fn rook_effect(sq: Square, occupied: Bitboard) -> Bitboard {
    ray_effect(Direction::N, sq, occupied)
        | ray_effect(Direction::S, sq, occupied)
        | ray_effect(Direction::E, sq, occupied)
        | ray_effect(Direction::W, sq, occupied)
}

/// 馬の利きを計算（角の利き + 王の利き）
#[inline]
pub fn horse_effect(sq: Square, occupied: Bitboard) -> Bitboard {
    bishop_effect(sq, occupied) | king_effect(sq)
}

/// 龍の利きを計算（飛車の利き + 王の利き）
#[inline]
pub fn dragon_effect(sq: Square, occupied: Bitboard) -> Bitboard {
    rook_effect(sq, occupied) | king_effect(sq)
}

/// 何もない盤での香の利き（前方の半直線）
#[inline]
pub fn lance_step_ray(color: Color, sq: Square) -> Bitboard {
    match color {
        Color::Black => RAYS[Direction::N as usize][sq.index()],
        Color::White => RAYS[Direction::S as usize][sq.index()],
    }
}

/// 2升の間のBitboard（両端を含まない、同一直線上にない場合は空）
#[inline]
pub fn between_bb(sq1: Square, sq2: Square) -> Bitboard {
    BETWEEN[sq1.index()][sq2.index()]
}

/// 2升を通る直線（同一直線上にない場合は空）
#[inline]
pub fn line_bb(sq1: Square, sq2: Square) -> Bitboard {
    LINE[sq1.index()][sq2.index()]
}

/// 3升が同一直線上にあるか
#[inline]
pub fn aligned(sq1: Square, sq2: Square, sq3: Square) -> bool {
    line_bb(sq1, sq2).contains(sq3)
}
