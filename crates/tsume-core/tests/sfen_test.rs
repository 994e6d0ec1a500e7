//! SFEN の読み書き

use tsume_core::{Color, PieceType, Position, SfenError, SFEN_HIRATE};

#[test]
fn test_startpos_expands_to_hirate() {
    let pos = Position::from_sfen("startpos").unwrap();
    assert_eq!(pos.to_sfen(), SFEN_HIRATE);
    assert_eq!(pos.position_sfen(), SFEN_HIRATE);
}

#[test]
fn test_bare_sfen_roundtrip() {
    for sfen in [
        "R8/2K1S1SSk/4B4/9/9/9/9/9/1L1L1L3 b RBGSNLP3g3n17p 1",
        "l6nl/5+P1gk/2np1S3/p1p4Pp/3P2Sp1/1PPb2P1P/P5GS1/R8/LN4bKL w RGgsn5p 1",
        "kgsnlbrp1/+s+n+l+p5/5+P+L+N+S/1PRBLNSGK/9/9/9/9/9 b G7Pg7p 1",
        "4k4/9/9/9/9/9/9/9/4K4 w - 123",
    ] {
        let pos = Position::from_sfen(sfen).unwrap();
        assert_eq!(pos.to_sfen(), sfen);
        assert_eq!(pos.position_sfen(), sfen);
    }
}

#[test]
fn test_moves_are_replayed() {
    let pos = Position::from_sfen("startpos moves 7g7f 3c3d 8h2b+").unwrap();
    assert_eq!(pos.to_sfen(), format!("{SFEN_HIRATE} moves 7g7f 3c3d 8h2b+"));
    assert_eq!(pos.side_to_move(), Color::White);
    assert_eq!(pos.game_ply(), 4);
    assert_eq!(pos.hand(Color::Black).count(PieceType::Bishop), 1);
    assert_eq!(
        pos.position_sfen(),
        "lnsgkgsnl/1r5+B1/pppppp1pp/6p2/9/2P6/PP1PPPPPP/7R1/LNSGKGSNL w B 4"
    );

    let replay = Position::from_sfen(&pos.to_sfen()).unwrap();
    assert_eq!(replay.key(), pos.key());
    assert_eq!(replay.position_sfen(), pos.position_sfen());
}

#[test]
fn test_do_move_extends_to_sfen() {
    let mut pos = Position::startpos();
    let m = pos.move_from_usi("2g2f").unwrap();
    pos.do_move(m);
    assert_eq!(pos.to_sfen(), format!("{SFEN_HIRATE} moves 2g2f"));
    pos.undo_move();
    assert_eq!(pos.to_sfen(), SFEN_HIRATE);
}

#[test]
fn test_errors() {
    assert!(matches!(Position::from_sfen(""), Err(SfenError::Board(_))));
    assert!(matches!(
        Position::from_sfen("4k4/9/9/9/9/9/9/9 b - 1"),
        Err(SfenError::Board(_))
    ));
    assert!(matches!(
        Position::from_sfen("4k4/9/9/9/9/9/9/9/4K4 x - 1"),
        Err(SfenError::SideToMove(_))
    ));
    assert!(matches!(
        Position::from_sfen("4k4/9/9/9/9/9/9/9/4K4 b 3Q 1"),
        Err(SfenError::Hand(_))
    ));
    assert!(matches!(
        Position::from_sfen("4k4/9/9/9/9/9/9/9/4K4 b - zero"),
        Err(SfenError::Ply(_))
    ));
    assert!(matches!(
        Position::from_sfen("startpos moves 7g7f 7g7f"),
        Err(SfenError::Move(_))
    ));
}

#[test]
fn test_piece_counts_are_limited() {
    // 盤上3枚 + 手駒2枚で飛車が5枚
    let too_many = "4k3R/8r/9/9/9/9/9/r8/K8 b 2R 1";
    assert!(matches!(Position::from_sfen(too_many), Err(SfenError::Hand(_))));
    // 盤上だけで飛車が3枚
    assert!(matches!(
        Position::from_sfen("4k4/8R/8r/9/9/9/9/r8/K8 b - 1"),
        Err(SfenError::Board(_))
    ));
    // 成駒も元の駒として数える（と金を含めて歩が19枚）
    assert!(matches!(
        Position::from_sfen("4k4/9/9/9/4+P4/9/9/9/4K4 b 9P9p 1"),
        Err(SfenError::Hand(_))
    ));

    // 上限ちょうどなら読め、取る手も指せる
    let mut pos = Position::from_sfen("4k4/8R/9/9/9/9/9/r8/K8 b - 1").unwrap();
    let m = pos.move_from_usi("9i9h").unwrap();
    pos.do_move(m);
    assert_eq!(pos.hand(Color::Black).count(PieceType::Rook), 1);
    pos.undo_move();
    assert_eq!(pos.position_sfen(), "4k4/8R/9/9/9/9/9/r8/K8 b - 1");
}
