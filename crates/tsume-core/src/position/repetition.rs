//! 千日手判定

use crate::types::RepetitionState;

use super::pos::Position;

impl Position {
    /// 現局面の千日手状態を手番側から見て判定する
    ///
    /// 4手前から2手おきに盤面キー（手番込み）が一致する局面を遡って探す。
    /// 手駒まで一致すれば連続王手、通常の千日手の順に調べ、手駒が違えば優等・劣等を返す。
    /// `strict` のときは同一局面が4回目に現れるまで千日手とせず、連続王手も6回以上を要求する。
    pub fn repetition_state(&self, strict: bool) -> RepetitionState {
        let states = self.states();
        let current = self.state();
        let ply = states.len() - 1;
        let us = self.side_to_move().index();
        let them = (!self.side_to_move()).index();

        let my_checks = current.continuous_check[us] as usize;
        let op_checks = current.continuous_check[them] as usize;
        let min_checks = if strict { 6 } else { 0 };

        let mut repetitions = 0;
        let mut p = ply as isize - 4;
        while p >= 0 {
            let old = &states[p as usize];
            if old.board_key == current.board_key {
                let distance = ply - p as usize;
                if old.hands == current.hands {
                    if op_checks >= min_checks && op_checks * 2 >= distance {
                        return RepetitionState::Win;
                    }
                    if my_checks >= min_checks && my_checks * 2 >= distance {
                        return RepetitionState::Lose;
                    }
                    if !strict || repetitions == 2 {
                        return RepetitionState::Draw;
                    }
                    repetitions += 1;
                    // 数えた局面の直前の同手番局面は飛ばす
                    p -= 2;
                } else {
                    let mine = current.hands[us];
                    let before = old.hands[us];
                    if mine.is_superior_or_equal(before) {
                        return RepetitionState::Superior;
                    }
                    if before.is_superior_or_equal(mine) {
                        return RepetitionState::Inferior;
                    }
                }
            }
            p -= 2;
        }

        RepetitionState::None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state_of(sfen: &str, strict: bool) -> RepetitionState {
        Position::from_sfen(sfen).unwrap().repetition_state(strict)
    }

    #[test]
    fn test_no_repetition_at_root() {
        assert_eq!(Position::startpos().repetition_state(false), RepetitionState::None);
        assert_eq!(Position::startpos().repetition_state(true), RepetitionState::None);
    }

    #[test]
    fn test_plain_repetition() {
        let sfen = "startpos moves 2h3h 8b7b 3h2h 7b8b";
        assert_eq!(state_of(sfen, false), RepetitionState::Draw);
        assert_eq!(state_of(sfen, true), RepetitionState::None);
    }

    #[test]
    fn test_strict_needs_fourfold() {
        let eight = "startpos moves 2h3h 8b7b 3h2h 7b8b 2h3h 8b7b 3h2h 7b8b";
        assert_eq!(state_of(eight, true), RepetitionState::None);
        let twelve = "startpos moves 2h3h 8b7b 3h2h 7b8b 2h3h 8b7b 3h2h 7b8b 2h3h 8b7b 3h2h 7b8b";
        assert_eq!(state_of(twelve, true), RepetitionState::Draw);
    }

    #[test]
    fn test_perpetual_check() {
        let base = "2k6/9/KR7/9/9/9/9/9/9 b - 1 moves 8c7c 7a8a 7c8c 8a7a";
        assert_eq!(state_of(base, false), RepetitionState::Lose);
        assert_eq!(state_of(&format!("{base} 8c7c"), false), RepetitionState::Win);
    }

    #[test]
    fn test_undo_restores_classification() {
        let mut pos =
            Position::from_sfen("2k6/9/KR7/9/9/9/9/9/9 b - 1 moves 8c7c 7a8a 7c8c 8a7a 8c7c")
                .unwrap();
        pos.undo_move();
        pos.undo_move();
        assert_eq!(pos.repetition_state(false), RepetitionState::None);
        let m = pos.move_from_usi("7c8c").unwrap();
        pos.do_move(m);
        let before = pos.repetition_state(false);
        let m = pos.move_from_usi("8a7a").unwrap();
        pos.do_move(m);
        pos.undo_move();
        assert_eq!(pos.repetition_state(false), before);
    }
}
