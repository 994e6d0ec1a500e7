//! perft（合法手生成の検証用ノード数計測）

use crate::position::Position;

use super::generator::generate_legal;
use super::movelist::MoveList;

/// 指定深さまでの末端局面数を数える
///
/// 局面は呼び出し前の状態に戻して返す。
pub fn perft(pos: &mut Position, depth: u32) -> u64 {
    if depth == 0 {
        return 1;
    }

    let mut list = MoveList::new();
    generate_legal(pos, &mut list);
    if depth == 1 {
        return list.len() as u64;
    }

    let mut nodes = 0;
    for &m in &list {
        pos.do_move(m);
        nodes += perft(pos, depth - 1);
        pos.undo_move();
    }
    nodes
}

/// 初手ごとの内訳付き perft
pub fn perft_divide(pos: &mut Position, depth: u32) -> Vec<(String, u64)> {
    let mut list = MoveList::new();
    generate_legal(pos, &mut list);

    let mut result = Vec::with_capacity(list.len());
    for &m in &list {
        pos.do_move(m);
        let nodes = if depth <= 1 { 1 } else { perft(pos, depth - 1) };
        pos.undo_move();
        result.push((m.to_usi(), nodes));
    }
    log::trace!("perft_divide depth={depth} moves={}", result.len());
    result
}
