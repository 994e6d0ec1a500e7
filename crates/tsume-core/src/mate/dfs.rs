//! 固定手数の詰み探索（全幅の AND/OR 探索）
//!
//! DF-PN の結果を検証するための基準実装。枝刈りは合法性以外に行わない。

use crate::movegen::{generate_checks, generate_legal, MoveList};
use crate::position::Position;
use crate::types::Move;

use super::mate1ply::mate_1ply;

/// `max_ply` 手以内に詰ませる初手を返す（見つからなければ `Move::NONE`）
///
/// 手番側が攻め方。局面は元に戻して返す。
pub fn dfs(pos: &mut Position, max_ply: i32) -> Move {
    attack(pos, max_ply)
}

/// 攻め方の手番（OR ノード）
fn attack(pos: &mut Position, limit: i32) -> Move {
    if limit < 1 {
        return Move::NONE;
    }

    let m = mate_1ply(pos);
    if m.is_some() {
        return m;
    }
    if limit < 3 {
        return Move::NONE;
    }

    let mut checks = MoveList::new();
    generate_checks(pos, &mut checks);

    for &m in &checks {
        pos.do_move(m);
        let escape = defence(pos, limit - 1);
        pos.undo_move();
        if escape.is_none() {
            return m;
        }
    }

    Move::NONE
}

/// 玉方の手番（AND ノード）
///
/// 詰みを逃れる応手を返す。どの応手でも詰むなら `Move::NONE`。
fn defence(pos: &mut Position, limit: i32) -> Move {
    let mut moves = MoveList::new();
    generate_legal(pos, &mut moves);

    for &m in &moves {
        pos.do_move(m);
        let mate = attack(pos, limit - 1);
        pos.undo_move();
        if mate.is_none() {
            return m;
        }
    }

    Move::NONE
}
