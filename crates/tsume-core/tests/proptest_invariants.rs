//! ランダムな局面での不変条件

use proptest::prelude::*;
use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;
use tsume_core::movegen::{generate_legal, MoveList};
use tsume_core::{Color, Move, Position};

/// 乱数で指し進めた局面と、その指し手列
fn walk(seed: u64, plies: usize) -> (Position, Vec<Move>) {
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(seed);
    let mut pos = Position::startpos();
    let mut moves = Vec::new();
    for _ in 0..plies {
        let mut list = MoveList::new();
        generate_legal(&pos, &mut list);
        if list.is_empty() {
            break;
        }
        let m = list[rng.random_range(0..list.len())];
        pos.do_move(m);
        moves.push(m);
    }
    (pos, moves)
}

fn material(pos: &Position) -> u32 {
    pos.occupied().count() + pos.hand(Color::Black).total() + pos.hand(Color::White).total()
}

proptest! {
    #![proptest_config(ProptestConfig { cases: 32, .. ProptestConfig::default() })]

    #[test]
    fn prop_material_is_conserved(seed in any::<u64>(), plies in 0usize..120) {
        let (pos, _) = walk(seed, plies);
        prop_assert_eq!(material(&pos), 40);
        prop_assert!(pos.king_square(Color::Black).is_some());
        prop_assert!(pos.king_square(Color::White).is_some());
    }

    #[test]
    fn prop_undo_restores(seed in any::<u64>(), plies in 1usize..80) {
        let (mut pos, moves) = walk(seed, plies);
        let sfen = pos.to_sfen();
        let replayed = Position::from_sfen(&sfen).unwrap();
        prop_assert_eq!(replayed.key(), pos.key());

        for _ in 0..moves.len() {
            pos.undo_move();
        }
        prop_assert_eq!(pos, Position::startpos());
    }

    #[test]
    fn prop_clone_is_independent(seed in any::<u64>(), plies in 1usize..60) {
        let (pos, _) = walk(seed, plies);
        let snapshot = pos.position_sfen();
        let mut copy = pos.clone();
        let mut list = MoveList::new();
        generate_legal(&copy, &mut list);
        if let Some(&m) = list.iter().next() {
            copy.do_move(m);
        }
        prop_assert_eq!(pos.position_sfen(), snapshot);
    }
}
