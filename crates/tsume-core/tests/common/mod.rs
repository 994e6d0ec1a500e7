//! 統合テスト共通の局面と検査

#![allow(dead_code)] // テストファイルごとに使うものが違う

use tsume_core::movegen::{generate_checks, is_checkmate, MoveList};
use tsume_core::{Move, Position};

/// 最短手数ちょうどで詰む局面
///
/// (局面, 最短手数, その手数で詰ませられる初手すべて)。玉方の持駒はない。
pub const SHORTEST_MATES: &[(&str, i32, &[&str])] = &[
    ("3+B1pR2/7k1/8p/9/9/7N1/9/9/K8 b R 1", 3, &["R*2a", "R*3b"]),
    ("5+B2k/9/9/9/8N/9/9/9/K8 b GL 1", 3, &["L*1d"]),
    ("6S2/8k/9/8n/9/9/9/9/K8 b RN 1", 3, &["R*2b"]),
    ("6l2/6Bk1/9/8g/9/9/9/9/K8 b 2G 1", 3, &["G*2c"]),
    ("1B7/5lk2/9/3+R5/9/8+P/9/9/K8 b RP 1", 5, &["6d3d"]),
    ("7p1/8k/9/3R1R2n/9/9/9/8L/K8 b L 1", 5, &["4d4b+"]),
    ("8k/9/8P/8p/9/7+BB/9/9/K8 b RL 1", 5, &["2f4d", "R*1b"]),
    ("9/9/4k4/9/4P4/9/9/9/K8 b 3G2r2bg4s4n4l17p 1", 5, &["G*5d"]),
    ("8k/9/9/9/9/7B1/9/9/K8 b BG 1", 7, &["B*3c"]),
    (
        "8+p/8k/8n/8p/7n1/9/9/5R3/K8 b B 1",
        7,
        &["B*3d", "B*5f", "B*6g", "B*7h", "B*8i"],
    ),
    ("5+B+p1k/9/8n/7ll/9/4+B4/7S1/9/K8 b N 1", 7, &["N*2c"]),
    ("5+B+p1k/5l3/8n/7l1/9/4+B4/7S1/9/K8 b N 1", 9, &["N*2c"]),
    ("5+B+p1k/5l3/8n/7l1/9/3S+B4/9/9/K8 b N 1", 9, &["N*2c"]),
    ("8n/8k/9/8p/7n+p/9/9/5R3/K8 b B 1", 9, &["4h4b+"]),
    ("5+B+p1k/5l3/5n2n/5R1l1/9/4+B4/7S1/9/K8 b 2N 1", 11, &["N*2c"]),
    ("5+B+p1k/5l3/6l1n/7l1/9/4+B4/7S1/9/K8 b 2N 1", 11, &["N*2c"]),
    ("5+B2k/5l1n1/6S1n/2+p4l1/8s/4+B4/9/9/K8 b N 1", 11, &["N*2c"]),
];

/// 手順が合法で、攻め方の手はすべて王手、最後は詰みであること
pub fn assert_valid_pv(sfen: &str, pv: &[Move]) {
    assert_eq!(pv.len() % 2, 1, "{sfen}");
    let mut pos = Position::from_sfen(sfen).unwrap();
    for (i, &m) in pv.iter().enumerate() {
        if i % 2 == 0 {
            let mut checks = MoveList::new();
            generate_checks(&pos, &mut checks);
            assert!(checks.contains(m), "{sfen}: {} is not a check", m.to_usi());
        }
        assert_eq!(pos.move_from_usi(&m.to_usi()).unwrap(), m);
        pos.do_move(m);
    }
    assert!(is_checkmate(&pos), "{sfen}");
}
