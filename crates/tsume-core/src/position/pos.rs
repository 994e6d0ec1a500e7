//! 局面（Position）

use crate::bitboard::{
    aligned, between_bb, bishop_effect, dragon_effect, gold_effect, horse_effect, king_effect,
    knight_effect, lance_effect, lance_step_ray, pawn_effect, rook_effect, silver_effect,
    Bitboard,
};
use crate::types::{Color, Hand, Move, Piece, PieceType, Square};

use super::state::StateInfo;
use super::zobrist::{zobrist_hand, zobrist_psq, zobrist_side};

/// 将棋の局面
///
/// 盤面・手駒・手番に加えて、初期局面からの StateInfo の積み上げを持つ。
/// `states[0]` が初期局面、末尾が現局面の状態。
#[derive(Clone, PartialEq, Eq)]
pub struct Position {
    // === 盤面 ===
    /// 各升の駒 [Square]
    pub(super) board: [Piece; Square::NUM],
    /// 駒種別Bitboard [PieceType]
    pub(super) by_type: [Bitboard; PieceType::NUM + 1],
    /// 先後別Bitboard
    pub(super) by_color: [Bitboard; Color::NUM],

    // === 手駒 ===
    pub(super) hand: [Hand; Color::NUM],

    // === 状態 ===
    pub(super) side_to_move: Color,
    /// 手数（SFEN の手数欄と同じく 1 始まり）
    pub(super) game_ply: i32,
    /// 玉の位置 [Color]（詰将棋では攻め方の玉がないことがある）
    pub(super) king_square: [Option<Square>; Color::NUM],
    /// 局面状態の履歴
    pub(super) states: Vec<StateInfo>,
    /// 読み込んだ初期局面のSFEN（手順なし）
    pub(super) initial_sfen: String,
}

impl Position {
    // ========== 局面設定 ==========

    /// 空の局面を生成
    pub fn new() -> Self {
        Position {
            board: [Piece::NONE; Square::NUM],
            by_type: [Bitboard::EMPTY; PieceType::NUM + 1],
            by_color: [Bitboard::EMPTY; Color::NUM],
            hand: [Hand::EMPTY; Color::NUM],
            side_to_move: Color::Black,
            game_ply: 1,
            king_square: [None; Color::NUM],
            states: vec![StateInfo::new()],
            initial_sfen: String::new(),
        }
    }

    /// 盤面・手駒・手番が揃った後に初期局面の状態を構築する
    pub(super) fn init_root_state(&mut self) {
        let mut st = StateInfo::new();
        for sq in self.occupied().iter() {
            st.board_key ^= zobrist_psq(self.piece_on(sq), sq);
        }
        if self.side_to_move == Color::White {
            st.board_key ^= zobrist_side();
        }
        for c in Color::ALL {
            for pt in PieceType::HAND_PIECES {
                let n = self.hand[c.index()].count(pt) as u64;
                st.hand_key = st.hand_key.wrapping_add(zobrist_hand(c, pt).wrapping_mul(n));
            }
        }
        st.hands = self.hand;
        self.states = vec![st];

        self.update_checkers();
        self.update_blockers_and_pinners();
        self.update_check_squares();

        // 開始局面で王手されていれば、直前に相手が王手をかけたとみなす
        if self.in_check() {
            let them = !self.side_to_move;
            self.state_mut().continuous_check[them.index()] = 1;
        }
    }

    // ========== 盤面アクセス ==========

    /// 指定升の駒を取得
    #[inline]
    pub fn piece_on(&self, sq: Square) -> Piece {
        self.board[sq.index()]
    }

    /// 駒のある升
    #[inline]
    pub fn occupied(&self) -> Bitboard {
        self.by_color[0] | self.by_color[1]
    }

    /// 指定駒種（先後両方）
    #[inline]
    pub fn pieces_pt(&self, pt: PieceType) -> Bitboard {
        self.by_type[pt.index()]
    }

    /// 指定手番の駒
    #[inline]
    pub fn pieces_c(&self, c: Color) -> Bitboard {
        self.by_color[c.index()]
    }

    /// 指定手番・指定駒種の駒
    #[inline]
    pub fn pieces(&self, c: Color, pt: PieceType) -> Bitboard {
        self.by_type[pt.index()] & self.by_color[c.index()]
    }

    /// 金の動きをする駒（金・と・成香・成桂・成銀）
    #[inline]
    pub fn golds(&self, c: Color) -> Bitboard {
        (self.by_type[PieceType::Gold.index()]
            | self.by_type[PieceType::ProPawn.index()]
            | self.by_type[PieceType::ProLance.index()]
            | self.by_type[PieceType::ProKnight.index()]
            | self.by_type[PieceType::ProSilver.index()])
            & self.by_color[c.index()]
    }

    /// 手駒
    #[inline]
    pub fn hand(&self, c: Color) -> Hand {
        self.hand[c.index()]
    }

    /// 手駒の枚数
    #[inline]
    pub fn stand_count(&self, c: Color, pt: PieceType) -> u32 {
        self.hand[c.index()].count(pt)
    }

    /// 玉の位置
    #[inline]
    pub fn king_square(&self, c: Color) -> Option<Square> {
        self.king_square[c.index()]
    }

    /// 手番
    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    /// 手数
    #[inline]
    pub fn game_ply(&self) -> i32 {
        self.game_ply
    }

    /// 現在の状態
    #[inline]
    pub fn state(&self) -> &StateInfo {
        // states は常に初期局面の状態を含む
        &self.states[self.states.len() - 1]
    }

    #[inline]
    fn state_mut(&mut self) -> &mut StateInfo {
        let last = self.states.len() - 1;
        &mut self.states[last]
    }

    /// 初期局面から現局面までの状態列（先頭が初期局面）
    #[inline]
    pub fn states(&self) -> &[StateInfo] {
        &self.states
    }

    /// 局面のハッシュ（盤面・手番・手駒）
    #[inline]
    pub fn key(&self) -> u64 {
        self.state().key()
    }

    /// 盤面と手番のみのハッシュ
    #[inline]
    pub fn board_key(&self) -> u64 {
        self.state().board_key
    }

    /// 直前の指し手（初期局面では NONE）
    #[inline]
    pub fn last_move(&self) -> Move {
        self.state().last_move
    }

    /// 直前の指し手で取られた駒
    #[inline]
    pub fn captured_piece(&self) -> Piece {
        self.state().captured_piece
    }

    /// 初期局面から現局面までに指された手
    pub fn history_moves(&self) -> Vec<Move> {
        self.states[1..].iter().map(|st| st.last_move).collect()
    }

    /// 初期局面から指された手数
    #[inline]
    pub fn history_len(&self) -> usize {
        self.states.len() - 1
    }

    /// 連続王手の回数
    #[inline]
    pub fn continuous_check(&self, c: Color) -> u32 {
        self.state().continuous_check[c.index()]
    }

    // ========== 利き ==========

    /// 指定升に置いた駒の利き
    pub fn effect(pc: Piece, sq: Square, occupied: Bitboard) -> Bitboard {
        let c = pc.color();
        match pc.piece_type() {
            PieceType::Pawn => pawn_effect(c, sq),
            PieceType::Lance => lance_effect(c, sq, occupied),
            PieceType::Knight => knight_effect(c, sq),
            PieceType::Silver => silver_effect(c, sq),
            PieceType::Bishop => bishop_effect(sq, occupied),
            PieceType::Rook => rook_effect(sq, occupied),
            PieceType::Gold
            | PieceType::ProPawn
            | PieceType::ProLance
            | PieceType::ProKnight
            | PieceType::ProSilver => gold_effect(c, sq),
            PieceType::King => king_effect(sq),
            PieceType::Horse => horse_effect(sq, occupied),
            PieceType::Dragon => dragon_effect(sq, occupied),
        }
    }

    /// 指定升に利いている指定手番の駒（占有指定）
    ///
    /// 相手側の利きテーブルを sq から引くことで、逆向きに駒を探す。
    pub fn attackers_to_c_occ(&self, sq: Square, c: Color, occupied: Bitboard) -> Bitboard {
        let them = !c;
        let step = (pawn_effect(them, sq) & self.pieces(c, PieceType::Pawn))
            | (knight_effect(them, sq) & self.pieces(c, PieceType::Knight))
            | (silver_effect(them, sq) & self.pieces(c, PieceType::Silver))
            | (gold_effect(them, sq) & self.golds(c))
            | (king_effect(sq)
                & (self.pieces(c, PieceType::King)
                    | self.pieces(c, PieceType::Horse)
                    | self.pieces(c, PieceType::Dragon)));
        let slide = (lance_effect(them, sq, occupied) & self.pieces(c, PieceType::Lance))
            | (bishop_effect(sq, occupied)
                & (self.pieces(c, PieceType::Bishop) | self.pieces(c, PieceType::Horse)))
            | (rook_effect(sq, occupied)
                & (self.pieces(c, PieceType::Rook) | self.pieces(c, PieceType::Dragon)));
        step | slide
    }

    /// 指定升に利いている指定手番の駒
    #[inline]
    pub fn attackers_to_c(&self, sq: Square, c: Color) -> Bitboard {
        self.attackers_to_c_occ(sq, c, self.occupied())
    }

    /// 指定升に利いている駒（先後両方）
    pub fn attackers_to(&self, sq: Square) -> Bitboard {
        let occ = self.occupied();
        self.attackers_to_c_occ(sq, Color::Black, occ)
            | self.attackers_to_c_occ(sq, Color::White, occ)
    }

    /// 指定手番の駒が sq に利いているか
    #[inline]
    pub fn is_attacked(&self, sq: Square, by: Color) -> bool {
        !self.attackers_to_c(sq, by).is_empty()
    }

    /// 玉への利きを遮っている駒 [Color側の玉]
    #[inline]
    pub fn blockers_for_king(&self, c: Color) -> Bitboard {
        self.state().blockers_for_king[c.index()]
    }

    /// c側の玉をpinしている敵駒
    #[inline]
    pub fn pinners(&self, c: Color) -> Bitboard {
        self.state().pinners[c.index()]
    }

    /// 王手している駒
    #[inline]
    pub fn checkers(&self) -> Bitboard {
        self.state().checkers
    }

    /// 王手されているか
    #[inline]
    pub fn in_check(&self) -> bool {
        !self.state().checkers.is_empty()
    }

    /// 手番側が指定駒種を置けば王手になる升
    #[inline]
    pub fn check_squares(&self, pt: PieceType) -> Bitboard {
        self.state().check_squares[pt.index()]
    }

    // ========== 内部操作 ==========

    /// 盤面に駒を置く
    pub(super) fn put_piece(&mut self, pc: Piece, sq: Square) {
        debug_assert!(self.board[sq.index()].is_none());
        self.board[sq.index()] = pc;
        self.by_type[pc.piece_type().index()].set(sq);
        self.by_color[pc.color().index()].set(sq);
        if pc.piece_type() == PieceType::King {
            self.king_square[pc.color().index()] = Some(sq);
        }
    }

    /// 盤面から駒を取り除く
    fn remove_piece(&mut self, sq: Square) -> Piece {
        let pc = self.board[sq.index()];
        debug_assert!(pc.is_some());
        self.board[sq.index()] = Piece::NONE;
        self.by_type[pc.piece_type().index()].clear(sq);
        self.by_color[pc.color().index()].clear(sq);
        pc
    }

    /// 手駒を直接設定（SFEN読み込み用）
    pub(super) fn set_hand(&mut self, c: Color, hand: Hand) {
        self.hand[c.index()] = hand;
    }

    fn update_checkers(&mut self) {
        let us = self.side_to_move;
        let checkers = match self.king_square(us) {
            Some(ksq) => self.attackers_to_c(ksq, !us),
            None => Bitboard::EMPTY,
        };
        self.state_mut().checkers = checkers;
    }

    /// pin駒とpinしている駒を更新
    fn update_blockers_and_pinners(&mut self) {
        let occupied = self.occupied();
        for c in Color::ALL {
            let mut blockers = Bitboard::EMPTY;
            let mut pinners = Bitboard::EMPTY;

            if let Some(ksq) = self.king_square(c) {
                let them = !c;
                // 間の駒を無視すれば玉に利く敵の飛び駒
                let snipers = (lance_step_ray(c, ksq) & self.pieces(them, PieceType::Lance))
                    | (bishop_effect(ksq, Bitboard::EMPTY)
                        & (self.pieces(them, PieceType::Bishop)
                            | self.pieces(them, PieceType::Horse)))
                    | (rook_effect(ksq, Bitboard::EMPTY)
                        & (self.pieces(them, PieceType::Rook)
                            | self.pieces(them, PieceType::Dragon)));

                for sniper in snipers.iter() {
                    let between = between_bb(ksq, sniper) & occupied;
                    if !between.is_empty() && !between.more_than_one() {
                        blockers |= between;
                        if !(between & self.pieces_c(c)).is_empty() {
                            pinners.set(sniper);
                        }
                    }
                }
            }

            let st = self.state_mut();
            st.blockers_for_king[c.index()] = blockers;
            st.pinners[c.index()] = pinners;
        }
    }

    /// 王手升を更新
    fn update_check_squares(&mut self) {
        let them = !self.side_to_move;
        let mut squares = [Bitboard::EMPTY; PieceType::NUM + 1];

        if let Some(ksq) = self.king_square(them) {
            let occupied = self.occupied();
            let gold = gold_effect(them, ksq);
            squares[PieceType::Pawn.index()] = pawn_effect(them, ksq);
            squares[PieceType::Lance.index()] = lance_effect(them, ksq, occupied);
            squares[PieceType::Knight.index()] = knight_effect(them, ksq);
            squares[PieceType::Silver.index()] = silver_effect(them, ksq);
            squares[PieceType::Bishop.index()] = bishop_effect(ksq, occupied);
            squares[PieceType::Rook.index()] = rook_effect(ksq, occupied);
            squares[PieceType::Gold.index()] = gold;
            squares[PieceType::ProPawn.index()] = gold;
            squares[PieceType::ProLance.index()] = gold;
            squares[PieceType::ProKnight.index()] = gold;
            squares[PieceType::ProSilver.index()] = gold;
            squares[PieceType::Horse.index()] = horse_effect(ksq, occupied);
            squares[PieceType::Dragon.index()] = dragon_effect(ksq, occupied);
        }

        self.state_mut().check_squares = squares;
    }

    // ========== 指し手実行 ==========

    /// 指し手を実行
    ///
    /// 合法手であること。非合法手を渡したときの動作は保証しない。
    pub fn do_move(&mut self, m: Move) {
        assert!(m.is_some(), "do_move called with Move::NONE");

        let us = self.side_to_move;
        let prev = self.state();
        let mut board_key = prev.board_key ^ zobrist_side();
        let mut hand_key = prev.hand_key;
        let mut continuous_check = prev.continuous_check;
        let mut captured_piece = Piece::NONE;

        let to = m.to();
        if m.is_drop() {
            let pt = m.drop_piece_type();
            let pc = Piece::new(us, pt);
            self.hand[us.index()] = self.hand[us.index()].sub(pt);
            hand_key = hand_key.wrapping_sub(zobrist_hand(us, pt));
            self.put_piece(pc, to);
            board_key ^= zobrist_psq(pc, to);
        } else {
            let from = m.from();
            if self.piece_on(to).is_some() {
                let captured = self.remove_piece(to);
                debug_assert!(captured.color() != us);
                debug_assert!(captured.piece_type() != PieceType::King);
                let hand_pt = captured.piece_type().unpromote();
                board_key ^= zobrist_psq(captured, to);
                self.hand[us.index()] = self.hand[us.index()].add(hand_pt);
                hand_key = hand_key.wrapping_add(zobrist_hand(us, hand_pt));
                captured_piece = captured;
            }

            let pc = self.remove_piece(from);
            debug_assert!(pc.color() == us);
            board_key ^= zobrist_psq(pc, from);
            let moved = if m.is_promote() { pc.promoted() } else { pc };
            self.put_piece(moved, to);
            board_key ^= zobrist_psq(moved, to);
        }

        self.side_to_move = !us;
        self.game_ply += 1;

        self.states.push(StateInfo {
            board_key,
            hand_key,
            hands: self.hand,
            continuous_check,
            captured_piece,
            last_move: m,
            ..StateInfo::new()
        });

        self.update_checkers();
        continuous_check[us.index()] =
            if self.in_check() { continuous_check[us.index()] + 1 } else { 0 };
        self.state_mut().continuous_check = continuous_check;
        self.update_blockers_and_pinners();
        self.update_check_squares();
    }

    /// 直前の do_move を取り消す
    pub fn undo_move(&mut self) {
        assert!(self.states.len() > 1, "undo_move called without a matching do_move");

        let Some(st) = self.states.pop() else {
            return;
        };
        let m = st.last_move;
        let to = m.to();

        self.side_to_move = !self.side_to_move;
        self.game_ply -= 1;

        if m.is_drop() {
            self.remove_piece(to);
        } else {
            let moved = self.remove_piece(to);
            let pc = if m.is_promote() { moved.unpromoted() } else { moved };
            self.put_piece(pc, m.from());
            if st.captured_piece.is_some() {
                self.put_piece(st.captured_piece, to);
            }
        }

        self.hand = self.state().hands;
    }

    /// 指し手を実行した後の局面のハッシュキー（局面は動かさない）
    pub fn key_after(&self, m: Move) -> u64 {
        let us = self.side_to_move;
        let st = self.state();
        let mut board_key = st.board_key ^ zobrist_side();
        let mut hand_key = st.hand_key;
        let to = m.to();

        if m.is_drop() {
            let pt = m.drop_piece_type();
            hand_key = hand_key.wrapping_sub(zobrist_hand(us, pt));
            board_key ^= zobrist_psq(Piece::new(us, pt), to);
        } else {
            let captured = self.piece_on(to);
            if captured.is_some() {
                board_key ^= zobrist_psq(captured, to);
                hand_key = hand_key.wrapping_add(zobrist_hand(us, captured.piece_type().unpromote()));
            }
            let pc = self.piece_on(m.from());
            let moved = if m.is_promote() { pc.promoted() } else { pc };
            board_key ^= zobrist_psq(pc, m.from()) ^ zobrist_psq(moved, to);
        }

        board_key ^ hand_key
    }

    /// 指し手が王手になるか（局面を動かさずに判定）
    pub fn gives_check(&self, m: Move) -> bool {
        let us = self.side_to_move;
        let Some(ksq) = self.king_square(!us) else {
            return false;
        };
        let to = m.to();

        if m.is_drop() {
            return self.check_squares(m.drop_piece_type()).contains(to);
        }

        let from = m.from();
        let pc = self.piece_on(from);
        let pt = match pc.piece_type().promote() {
            Some(promoted) if m.is_promote() => promoted,
            _ => pc.piece_type(),
        };

        // 直接王手
        if self.check_squares(pt).contains(to) {
            return true;
        }

        // 開き王手
        self.blockers_for_king(!us).contains(from) && !aligned(from, to, ksq)
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Position").field("sfen", &self.position_sfen()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(s: &str) -> Square {
        Square::from_usi(s).unwrap()
    }

    fn mv(pos: &Position, s: &str) -> Move {
        pos.move_from_usi(s).unwrap()
    }

    #[test]
    fn test_position_new() {
        let pos = Position::new();
        assert_eq!(pos.side_to_move(), Color::Black);
        assert!(pos.occupied().is_empty());
        assert_eq!(pos.history_len(), 0);
    }

    #[test]
    fn test_startpos_accessors() {
        let pos = Position::startpos();
        assert_eq!(pos.piece_on(sq("5i")), Piece::B_KING);
        assert_eq!(pos.piece_on(sq("2b")), Piece::W_BISHOP);
        assert_eq!(pos.king_square(Color::White), Some(sq("5a")));
        assert_eq!(pos.occupied().count(), 40);
        assert!(!pos.in_check());
        assert_eq!(pos.stand_count(Color::Black, PieceType::Pawn), 0);
    }

    #[test]
    fn test_attackers_to() {
        let pos = Position::startpos();
        // 7f には 7g の歩だけが利く
        let attackers = pos.attackers_to_c(sq("7f"), Color::Black);
        assert_eq!(attackers, Bitboard::from_square(sq("7g")));
        // 5h には先手の金2枚・銀なし・玉が利く
        let attackers = pos.attackers_to_c(sq("5h"), Color::Black);
        assert!(attackers.contains(sq("5i")));
        assert!(attackers.contains(sq("4i")));
        assert!(attackers.contains(sq("6i")));
        assert!(attackers.contains(sq("2h")));
    }

    #[test]
    fn test_do_move_normal_and_undo() {
        let mut pos = Position::startpos();
        let key = pos.key();
        let m = mv(&pos, "7g7f");
        pos.do_move(m);
        assert_eq!(pos.piece_on(sq("7f")), Piece::B_PAWN);
        assert!(pos.piece_on(sq("7g")).is_none());
        assert_eq!(pos.side_to_move(), Color::White);
        assert_eq!(pos.game_ply(), 2);
        assert_eq!(pos.last_move(), m);
        assert_ne!(pos.key(), key);
        pos.undo_move();
        assert_eq!(pos.key(), key);
        assert_eq!(pos, Position::startpos());
    }

    #[test]
    fn test_do_move_capture_promote_drop() {
        let mut pos = Position::from_sfen("4k4/9/4p4/9/9/9/9/4R4/4K4 b - 1").unwrap();
        let m = mv(&pos, "5h5c+");
        pos.do_move(m);
        assert_eq!(pos.piece_on(sq("5c")), Piece::B_DRAGON);
        assert!(pos.in_check());
        assert_eq!(pos.captured_piece(), Piece::W_PAWN);
        assert_eq!(pos.stand_count(Color::Black, PieceType::Pawn), 1);

        let m2 = mv(&pos, "5a4a");
        pos.do_move(m2);
        let drop = mv(&pos, "P*5b");
        assert!(!pos.gives_check(drop));
        pos.do_move(drop);
        assert_eq!(pos.piece_on(sq("5b")), Piece::B_PAWN);
        assert_eq!(pos.stand_count(Color::Black, PieceType::Pawn), 0);

        pos.undo_move();
        pos.undo_move();
        pos.undo_move();
        assert_eq!(pos.position_sfen(), "4k4/9/4p4/9/9/9/9/4R4/4K4 b - 1");
    }

    #[test]
    fn test_key_is_path_independent() {
        let mut a = Position::startpos();
        for s in ["7g7f", "3c3d", "2g2f"] {
            let m = mv(&a, s);
            a.do_move(m);
        }
        let mut b = Position::startpos();
        for s in ["2g2f", "3c3d", "7g7f"] {
            let m = mv(&b, s);
            b.do_move(m);
        }
        assert_eq!(a.key(), b.key());
        assert_eq!(a.board_key(), b.board_key());
    }

    #[test]
    fn test_key_after_matches_do_move() {
        let mut pos = Position::from_sfen("4k4/9/4p4/9/9/9/9/4R4/4K4 b P 1").unwrap();
        for s in ["5h5c+", "5h5c", "P*2e", "5i4h"] {
            let m = mv(&pos, s);
            let expected = pos.key_after(m);
            pos.do_move(m);
            assert_eq!(pos.key(), expected, "{s}");
            pos.undo_move();
        }
    }

    #[test]
    fn test_gives_check_direct_and_discovered() {
        let pos = Position::from_sfen("4k4/9/9/9/4B4/9/9/4R4/4K4 b G 1").unwrap();
        assert!(pos.gives_check(mv(&pos, "G*5b")));
        assert!(!pos.gives_check(mv(&pos, "G*5c")));
        // 角が退けば飛車の開き王手
        assert!(pos.gives_check(mv(&pos, "5e4d")));
        assert!(!pos.gives_check(mv(&pos, "5h4h")));
    }

    #[test]
    fn test_pins() {
        let pos = Position::from_sfen("4k4/4r4/9/9/9/9/9/4S4/4K4 b - 1").unwrap();
        assert_eq!(pos.blockers_for_king(Color::Black), Bitboard::from_square(sq("5h")));
        assert_eq!(pos.pinners(Color::Black), Bitboard::from_square(sq("5b")));
    }

    #[test]
    fn test_continuous_check_counter() {
        let mut pos = Position::from_sfen("2k6/9/KR7/9/9/9/9/9/9 b - 1").unwrap();
        assert_eq!(pos.continuous_check(Color::Black), 0);
        let m = mv(&pos, "8c7c");
        pos.do_move(m);
        assert!(pos.in_check());
        assert_eq!(pos.continuous_check(Color::Black), 1);
        let m = mv(&pos, "7a8a");
        pos.do_move(m);
        assert_eq!(pos.continuous_check(Color::Black), 1);
        assert_eq!(pos.continuous_check(Color::White), 0);
    }

    #[test]
    #[should_panic(expected = "without a matching do_move")]
    fn test_undo_without_do_panics() {
        let mut pos = Position::startpos();
        pos.undo_move();
    }
}
