//! ランダムな指し手列での do_move / undo_move の整合性

use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;
use tsume_core::movegen::{generate_legal, MoveList};
use tsume_core::{Color, Position};

const START_SFENS: [&str; 3] = [
    "startpos",
    "l6nl/5+P1gk/2np1S3/p1p4Pp/3P2Sp1/1PPb2P1P/P5GS1/R8/LN4bKL w RGgsn5p 1",
    "R8/2K1S1SSk/4B4/9/9/9/9/9/1L1L1L3 b RBGSNLP3g3n17p 1",
];

fn material(pos: &Position) -> u32 {
    pos.occupied().count() + pos.hand(Color::Black).total() + pos.hand(Color::White).total()
}

fn random_walk(sfen: &str, seed: u64, plies: usize) {
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(seed);
    let mut pos = Position::from_sfen(sfen).unwrap();
    let original = pos.clone();
    let total = material(&pos);
    let mut keys = vec![pos.key()];

    for _ in 0..plies {
        let mut list = MoveList::new();
        generate_legal(&pos, &mut list);
        if list.is_empty() {
            break;
        }
        let m = list[rng.random_range(0..list.len())];
        pos.do_move(m);

        assert_eq!(material(&pos), total);
        // 差分計算したキーと、局面を作り直したときのキーが一致する
        let rebuilt = Position::from_sfen(&pos.position_sfen()).unwrap();
        assert_eq!(rebuilt.key(), pos.key(), "{}", pos.to_sfen());
        assert_eq!(rebuilt.checkers(), pos.checkers());
        keys.push(pos.key());
    }

    while pos.history_len() > original.history_len() {
        assert_eq!(keys.pop(), Some(pos.key()));
        pos.undo_move();
    }
    assert_eq!(pos, original);
    assert_eq!(pos.to_sfen(), original.to_sfen());
}

#[test]
fn test_random_walks_restore_position() {
    for (i, sfen) in START_SFENS.iter().enumerate() {
        for seed in 0..4u64 {
            random_walk(sfen, seed * 31 + i as u64, 256);
        }
    }
}

#[test]
fn test_clone_is_independent() {
    let mut pos = Position::startpos();
    let snapshot = pos.clone();
    let m = pos.move_from_usi("7g7f").unwrap();
    pos.do_move(m);
    assert_ne!(pos, snapshot);
    assert_eq!(snapshot, Position::startpos());
    assert_eq!(snapshot.history_len(), 0);
}
