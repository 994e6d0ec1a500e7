//! 合法手生成
//!
//! 疑似合法手（自玉の安全を無視した手）を列挙してから `is_legal` で絞り込む。
//! 王手回避も同じフィルタで処理する。

use crate::bitboard::{
    aligned, between_bb, far_ranks_bb, file_bb, king_effect, pawn_effect, promotion_zone_bb,
    Bitboard,
};
use crate::position::Position;
use crate::types::{Color, File, Move, PieceType, Square};

use super::movelist::MoveList;
use super::types::GenType;

/// 合法手をすべて生成する
pub fn generate_legal(pos: &Position, list: &mut MoveList) {
    generate(pos, GenType::Legal, list);
}

/// 無駄な不成を除いた合法手を生成する
pub fn generate_legal_wily(pos: &Position, list: &mut MoveList) {
    generate(pos, GenType::LegalWily, list);
}

/// 王手になる合法手を生成する
pub fn generate_checks(pos: &Position, list: &mut MoveList) {
    generate(pos, GenType::Checks, list);
}

/// 指定タイプで指し手を生成する
pub fn generate(pos: &Position, gen_type: GenType, list: &mut MoveList) {
    list.clear();
    generate_board_moves(pos, gen_type.is_wily(), list);
    generate_drops(pos, list);
    list.retain(|m| is_legal(pos, m));
    if gen_type == GenType::Checks {
        list.retain(|m| pos.gives_check(m));
    }
}

/// 合法手があるか
pub fn has_legal_move(pos: &Position) -> bool {
    let mut list = MoveList::new();
    generate_legal(pos, &mut list);
    !list.is_empty()
}

/// 詰んでいるか（王手されていて合法手がない）
pub fn is_checkmate(pos: &Position) -> bool {
    pos.in_check() && !has_legal_move(pos)
}

/// 盤上の駒の移動（疑似合法）
fn generate_board_moves(pos: &Position, wily: bool, list: &mut MoveList) {
    let us = pos.side_to_move();
    let occupied = pos.occupied();
    let target = !pos.pieces_c(us);

    for from in pos.pieces_c(us).iter() {
        let pc = pos.piece_on(from);
        let pt = pc.piece_type();
        let moves = Position::effect(pc, from, occupied) & target;
        for to in moves.iter() {
            push_board_move(us, pt, from, to, wily, list);
        }
    }
}

/// 成り・不成を展開して追加する
fn push_board_move(
    us: Color,
    pt: PieceType,
    from: Square,
    to: Square,
    wily: bool,
    list: &mut MoveList,
) {
    let zone = promotion_zone_bb(us);
    let can_promote = pt.can_promote() && (zone.contains(from) || zone.contains(to));
    if !can_promote {
        list.push(Move::new_move(from, to, false));
        return;
    }

    list.push(Move::new_move(from, to, true));

    // 行き所のない升への不成は反則
    let dead = match pt {
        PieceType::Pawn | PieceType::Lance => far_ranks_bb(us, 1),
        PieceType::Knight => far_ranks_bb(us, 2),
        _ => Bitboard::EMPTY,
    };
    if dead.contains(to) {
        return;
    }

    if wily {
        match pt {
            PieceType::Pawn | PieceType::Bishop | PieceType::Rook => return,
            PieceType::Lance if far_ranks_bb(us, 2).contains(to) => return,
            _ => {}
        }
    }

    list.push(Move::new_move(from, to, false));
}

/// 駒打ち（疑似合法、二歩と行き所のない升は除外済み）
fn generate_drops(pos: &Position, list: &mut MoveList) {
    let us = pos.side_to_move();
    let hand = pos.hand(us);
    if hand.is_empty() {
        return;
    }
    let empty = !pos.occupied();

    for pt in PieceType::HAND_PIECES {
        if !hand.has(pt) {
            continue;
        }
        let mut targets = empty;
        match pt {
            PieceType::Pawn => {
                targets &= !far_ranks_bb(us, 1);
                let pawns = pos.pieces(us, PieceType::Pawn);
                for file in File::ALL {
                    if !(pawns & file_bb(file)).is_empty() {
                        targets &= !file_bb(file);
                    }
                }
            }
            PieceType::Lance => targets &= !far_ranks_bb(us, 1),
            PieceType::Knight => targets &= !far_ranks_bb(us, 2),
            _ => {}
        }
        for to in targets.iter() {
            list.push(Move::new_drop(pt, to));
        }
    }
}

/// 疑似合法手が合法か
///
/// 自玉を取られる状態にしないこと、および打ち歩詰めでないことを調べる。
pub fn is_legal(pos: &Position, m: Move) -> bool {
    let us = pos.side_to_move();

    if m.is_drop() && m.drop_piece_type() == PieceType::Pawn && is_pawn_drop_mate(pos, m.to()) {
        return false;
    }

    let Some(ksq) = pos.king_square(us) else {
        return true;
    };
    let to = m.to();

    if !m.is_drop() && m.from() == ksq {
        // 玉自身を除いた占有で利きを調べる（飛び駒の延長線へ逃げる手を弾く）
        let occupied = pos.occupied() ^ Bitboard::from_square(ksq);
        return pos.attackers_to_c_occ(to, !us, occupied).is_empty();
    }

    let checkers = pos.checkers();
    if checkers.more_than_one() {
        return false;
    }
    if let Some(checker) = checkers.lsb() {
        if to != checker && !between_bb(ksq, checker).contains(to) {
            return false;
        }
    }

    m.is_drop() || !pos.blockers_for_king(us).contains(m.from()) || aligned(m.from(), to, ksq)
}

/// 歩を `to` に打つと相手玉が詰むか（打ち歩詰め判定）
///
/// 歩による王手は接触王手なので、受けは歩を取るか玉が逃げるかしかない。
fn is_pawn_drop_mate(pos: &Position, to: Square) -> bool {
    let us = pos.side_to_move();
    let them = !us;
    let Some(ksq) = pos.king_square(them) else {
        return false;
    };
    if !pawn_effect(us, to).contains(ksq) {
        return false;
    }

    let occupied = pos.occupied() | Bitboard::from_square(to);

    // 玉以外の駒で歩を取れるか（pinされた駒は pin の線上でのみ動ける）
    let capturers =
        pos.attackers_to_c_occ(to, them, occupied) & !pos.pieces(them, PieceType::King);
    let pinned = pos.blockers_for_king(them);
    for sq in capturers.iter() {
        if !pinned.contains(sq) || aligned(sq, to, ksq) {
            return false;
        }
    }

    // 玉が逃げられるか（歩を取る手を含む）
    let without_king = occupied ^ Bitboard::from_square(ksq);
    let escapes = king_effect(ksq) & !pos.pieces_c(them);
    for sq in escapes.iter() {
        if pos.attackers_to_c_occ(sq, us, without_king).is_empty() {
            return false;
        }
    }

    true
}
