//! 1手詰め判定

use crate::movegen::{generate_checks, has_legal_move, MoveList};
use crate::position::Position;
use crate::types::Move;

/// 1手で詰ませる指し手を返す（なければ `Move::NONE`）
///
/// 王手になる合法手を順に試し、相手に合法手が残らないものを探す。
/// 打ち歩詰めは合法手生成の段階で除かれている。局面は元に戻して返す。
pub fn mate_1ply(pos: &mut Position) -> Move {
    let mut checks = MoveList::new();
    generate_checks(pos, &mut checks);

    for &m in &checks {
        pos.do_move(m);
        let mated = !has_legal_move(pos);
        pos.undo_move();
        if mated {
            return m;
        }
    }

    Move::NONE
}

#[cfg(test)]
mod tests {
    use super::*;

    fn solve(sfen: &str) -> String {
        let mut pos = Position::from_sfen(sfen).unwrap();
        let before = pos.to_sfen();
        let m = mate_1ply(&mut pos);
        assert_eq!(pos.to_sfen(), before);
        m.to_usi()
    }

    #[test]
    fn test_mate_1ply_drop() {
        assert_eq!(solve("4k4/9/4G4/9/9/9/9/9/4K4 b G 1"), "G*5b");
        assert_eq!(solve("4k4/9/9/9/9/9/4g4/9/4K4 w g 1"), "G*5h");
    }

    #[test]
    fn test_mate_1ply_board_move() {
        assert_eq!(solve("4k4/9/4G4/2B6/9/9/9/9/4K4 b - 1"), "5c5b");
    }

    #[test]
    fn test_mate_1ply_none() {
        assert_eq!(solve("4k4/9/4G4/9/9/9/9/9/4K4 b - 1"), "none");
        assert_eq!(solve("4k4/9/9/9/9/9/9/9/4K4 b G 1"), "none");
    }
}
