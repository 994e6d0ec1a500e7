//! 1手詰めと固定手数の詰み探索

mod common;

use common::SHORTEST_MATES;
use tsume_core::mate::{dfs, mate_1ply};
use tsume_core::movegen::is_checkmate;
use tsume_core::{Move, Position};

/// 指したあと詰んでいるか
fn mates(pos: &mut Position, m: Move) -> bool {
    pos.do_move(m);
    let mated = is_checkmate(pos);
    pos.undo_move();
    mated
}

#[test]
fn test_mate_1ply_fixtures() {
    let cases = [
        ("4k4/9/4G4/9/9/9/9/9/4K4 b G 1", "G*5b"),
        ("4k4/9/4G4/9/9/9/9/9/4K4 b S 1", "S*5b"),
        ("3gkg3/9/3pG4/9/9/9/9/9/4K4 b N 1", "N*4c"),
        ("3gkg3/9/4Gp3/9/9/9/9/9/4K4 b N 1", "N*6c"),
        ("3sk4/9/4G4/9/9/9/9/9/4K4 b G 1", "G*4b"),
        ("3nkl3/9/4G4/9/9/9/9/9/4K4 b B 1", "B*6b"),
        ("3nkl3/9/4P4/9/9/9/9/9/4K4 b R 1", "R*5b"),
        ("3nkl3/9/4S4/9/9/9/9/9/4K4 b L 1", "L*5b"),
        ("4k4/9/9/9/9/9/4g4/9/4K4 w g 1", "G*5h"),
        ("4k4/9/3B5/9/9/9/9/9/4K4 b G 1", "G*5b"),
        ("4k4/9/4G4/2B6/9/9/9/9/4K4 b - 1", "5c5b"),
        ("3gk4/9/4SG3/9/9/9/9/9/4K4 b - 1", "4c4b"),
        ("4k4/9/4G4/9/9/9/9/4L4/4K4 b - 1", "5c5b"),
        ("4kg1RR/3s5/9/9/9/9/9/9/4K4 b - 1", "2a4a+"),
    ];

    for (sfen, expected) in cases {
        let mut pos = Position::from_sfen(sfen).unwrap();
        let before = pos.clone();

        let expected = pos.move_from_usi(expected).unwrap();
        assert!(mates(&mut pos, expected), "{sfen}");

        let found = mate_1ply(&mut pos);
        assert!(found.is_some(), "{sfen}");
        assert!(mates(&mut pos, found), "{sfen} {}", found.to_usi());
        assert_eq!(pos, before);
    }
}

#[test]
fn test_mate_1ply_none() {
    for sfen in [
        "4k4/9/4G4/9/9/9/9/9/4K4 b - 1",
        "4kg2R/3s5/9/9/9/9/9/9/4K4 b - 1",
        "4k4/9/9/9/9/9/9/9/4K4 b G 1",
        "startpos",
    ] {
        let mut pos = Position::from_sfen(sfen).unwrap();
        assert!(mate_1ply(&mut pos).is_none(), "{sfen}");
    }
}

#[test]
fn test_dfs_agrees_with_mate_1ply() {
    let mut pos = Position::from_sfen("3nkl3/9/4S4/9/9/9/9/9/4K4 b L 1").unwrap();
    let m = dfs(&mut pos, 1);
    assert!(m.is_some());
    assert!(mates(&mut pos, m));
}

#[test]
fn test_dfs_mate_in_five() {
    let mut pos = Position::from_sfen("9/9/4k4/9/4P4/9/9/9/K8 b 3G2r2bg4s4n4l17p 1").unwrap();
    let before = pos.clone();
    assert!(dfs(&mut pos, 3).is_none());
    let m = dfs(&mut pos, 5);
    assert_eq!(m.to_usi(), "G*5d");
    assert_eq!(pos, before);
}

#[test]
fn test_dfs_shortest_mates() {
    for &(sfen, ply, first) in SHORTEST_MATES {
        let mut pos = Position::from_sfen(sfen).unwrap();
        let before = pos.clone();

        assert!(dfs(&mut pos, ply - 2).is_none(), "{sfen}");
        let m = dfs(&mut pos, ply);
        assert!(m.is_some(), "{sfen}");
        assert!(first.contains(&m.to_usi().as_str()), "{sfen}: {}", m.to_usi());
        assert!(dfs(&mut pos, ply + 2).is_some(), "{sfen}");
        assert_eq!(pos, before);
    }
}

#[test]
fn test_dfs_nonpositive_limit() {
    let mut pos = Position::from_sfen("4k4/9/4G4/9/9/9/9/9/4K4 b G 1").unwrap();
    assert!(dfs(&mut pos, 0).is_none());
    assert!(dfs(&mut pos, -3).is_none());
}
