//! SFEN形式の解析・出力

use thiserror::Error;

use crate::movegen::{generate_legal, MoveList};
use crate::types::{Color, File, Hand, Move, MoveParseError, Piece, PieceType, Rank, Square};

use super::pos::Position;

/// 平手初期局面のSFEN
pub const SFEN_HIRATE: &str = "lnsgkgsnl/1r5b1/ppppppppp/9/9/9/PPPPPPPPP/1B5R1/LNSGKGSNL b - 1";

/// SFENパースエラー
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SfenError {
    /// 盤面の形式が不正
    #[error("invalid board: {0}")]
    Board(String),
    /// 手番の形式が不正
    #[error("invalid side to move: {0}")]
    SideToMove(String),
    /// 手駒の形式が不正
    #[error("invalid hand: {0}")]
    Hand(String),
    /// 手数の形式が不正
    #[error("invalid ply: {0}")]
    Ply(String),
    /// 手順中の指し手が不正
    #[error("invalid move in sequence: {0}")]
    Move(String),
}

impl Position {
    /// 平手初期局面
    pub fn startpos() -> Position {
        match Position::from_sfen(SFEN_HIRATE) {
            Ok(pos) => pos,
            Err(e) => unreachable!("hirate SFEN must parse: {e}"),
        }
    }

    /// SFEN文字列から局面を生成
    ///
    /// `startpos` または4欄（手数は省略可）のSFENのあとに `moves ...` を続けられる。
    /// 手順は合法手と照合しながら適用する。
    pub fn from_sfen(sfen: &str) -> Result<Position, SfenError> {
        let tokens: Vec<&str> = sfen.split_whitespace().collect();
        let (fields, rest): (Vec<&str>, &[&str]) = match tokens.first() {
            None => return Err(SfenError::Board("empty input".to_string())),
            Some(&"startpos") => (SFEN_HIRATE.split_whitespace().collect(), &tokens[1..]),
            Some(_) => {
                let end = tokens.iter().position(|t| *t == "moves").unwrap_or(tokens.len());
                (tokens[..end].to_vec(), &tokens[end..])
            }
        };

        let mut pos = Self::parse_fields(&fields)?;

        match rest.split_first() {
            None => {}
            Some((&"moves", moves)) => {
                for token in moves {
                    let m = pos
                        .move_from_usi(token)
                        .map_err(|e| SfenError::Move(e.to_string()))?;
                    pos.do_move(m);
                }
            }
            Some((other, _)) => {
                return Err(SfenError::Move(format!("expected 'moves', got '{other}'")));
            }
        }

        Ok(pos)
    }

    /// 盤面・手番・手駒・手数の各欄から局面を組み立てる
    fn parse_fields(fields: &[&str]) -> Result<Position, SfenError> {
        if fields.len() < 3 || fields.len() > 4 {
            return Err(SfenError::Board(format!(
                "expected 3 or 4 fields, got {}",
                fields.len()
            )));
        }

        let mut pos = Position::new();
        pos.parse_board(fields[0])?;

        pos.side_to_move = match fields[1] {
            "b" => Color::Black,
            "w" => Color::White,
            other => return Err(SfenError::SideToMove(other.to_string())),
        };

        let [black, white] = parse_hand(fields[2])?;
        pos.set_hand(Color::Black, black);
        pos.set_hand(Color::White, white);
        pos.check_piece_counts()?;

        pos.game_ply = match fields.get(3) {
            Some(s) => match s.parse::<i32>() {
                Ok(n) if n >= 1 => n,
                _ => return Err(SfenError::Ply(s.to_string())),
            },
            None => 1,
        };

        pos.init_root_state();
        pos.initial_sfen = pos.position_sfen();
        Ok(pos)
    }

    /// 盤上と両者の手駒を合わせた枚数が駒の総数を超えていないか
    ///
    /// 成駒は元の駒として数える。手駒で超えた場合は `Hand`、盤上だけで超えた場合は `Board`。
    fn check_piece_counts(&self) -> Result<(), SfenError> {
        for pt in PieceType::HAND_PIECES {
            let on_board = self
                .occupied()
                .iter()
                .filter(|&sq| self.piece_on(sq).piece_type().unpromote() == pt)
                .count() as u32;
            let in_hand = self.hand(Color::Black).count(pt) + self.hand(Color::White).count(pt);
            let max = Hand::max_count(pt);
            if on_board > max {
                return Err(SfenError::Board(format!(
                    "{on_board} pieces of {pt:?} on board, at most {max}"
                )));
            }
            if on_board + in_hand > max {
                return Err(SfenError::Hand(format!(
                    "{} pieces of {pt:?} in total, at most {max}",
                    on_board + in_hand
                )));
            }
        }
        Ok(())
    }

    /// 盤面部分をパース
    fn parse_board(&mut self, board: &str) -> Result<(), SfenError> {
        let ranks: Vec<&str> = board.split('/').collect();
        if ranks.len() != Rank::NUM {
            return Err(SfenError::Board(format!("expected 9 ranks, got {}", ranks.len())));
        }

        for (rank, text) in Rank::ALL.into_iter().zip(ranks) {
            // 9筋から1筋へ向かって読む
            let mut file = File::NUM as i32;
            let mut promoted = false;

            for c in text.chars() {
                if c == '+' {
                    if promoted {
                        return Err(SfenError::Board(text.to_string()));
                    }
                    promoted = true;
                    continue;
                }

                if let Some(n) = c.to_digit(10) {
                    if promoted || n == 0 {
                        return Err(SfenError::Board(text.to_string()));
                    }
                    file -= n as i32;
                    if file < 0 {
                        return Err(SfenError::Board(format!("too many squares in '{text}'")));
                    }
                    continue;
                }

                let mut pc = Piece::from_sfen_char(c)
                    .ok_or_else(|| SfenError::Board(format!("unknown piece '{c}'")))?;
                if promoted {
                    if !pc.piece_type().can_promote() {
                        return Err(SfenError::Board(format!("'+{c}' cannot be promoted")));
                    }
                    pc = pc.promoted();
                    promoted = false;
                }

                file -= 1;
                if file < 0 {
                    return Err(SfenError::Board(format!("too many squares in '{text}'")));
                }
                let sq = Square::new(File::ALL[file as usize], rank);

                if pc.piece_type() == PieceType::King && self.king_square(pc.color()).is_some() {
                    return Err(SfenError::Board("more than one king per side".to_string()));
                }
                self.put_piece(pc, sq);
            }

            if promoted || file != 0 {
                return Err(SfenError::Board(format!("rank '{text}' does not cover 9 files")));
            }
        }

        Ok(())
    }

    /// 現局面のSFEN（手順なし）
    pub fn position_sfen(&self) -> String {
        let mut result = String::new();

        for (i, rank) in Rank::ALL.into_iter().enumerate() {
            let mut empty = 0;
            for file in File::ALL.into_iter().rev() {
                let pc = self.piece_on(Square::new(file, rank));
                if pc.is_none() {
                    empty += 1;
                    continue;
                }
                if empty > 0 {
                    result.push_str(&empty.to_string());
                    empty = 0;
                }
                result.push_str(&pc.to_sfen());
            }
            if empty > 0 {
                result.push_str(&empty.to_string());
            }
            if i + 1 < Rank::NUM {
                result.push('/');
            }
        }

        result.push(' ');
        result.push(self.side_to_move.to_sfen_char());

        result.push(' ');
        let hands = self.hand_to_sfen();
        if hands.is_empty() {
            result.push('-');
        } else {
            result.push_str(&hands);
        }

        result.push(' ');
        result.push_str(&self.game_ply.to_string());
        result
    }

    /// 初期局面のSFENに、そこから指された手順を付けたもの
    pub fn to_sfen(&self) -> String {
        let moves = self.history_moves();
        if moves.is_empty() {
            return self.initial_sfen.clone();
        }
        let tokens: Vec<String> = moves.iter().map(|m| m.to_usi()).collect();
        format!("{} moves {}", self.initial_sfen, tokens.join(" "))
    }

    /// USI形式の指し手を現局面の合法手と照合する
    pub fn move_from_usi(&self, token: &str) -> Result<Move, MoveParseError> {
        let parsed = Move::from_usi(token)?;
        let mut list = MoveList::new();
        generate_legal(self, &mut list);
        list.iter()
            .copied()
            .find(|m| *m == parsed)
            .ok_or_else(|| MoveParseError::Illegal(token.to_string()))
    }

    fn hand_to_sfen(&self) -> String {
        let mut result = String::new();
        for c in Color::ALL {
            let hand = self.hand(c);
            for pt in PieceType::HAND_PIECES {
                let n = hand.count(pt);
                if n == 0 {
                    continue;
                }
                if n > 1 {
                    result.push_str(&n.to_string());
                }
                result.push_str(&Piece::new(c, pt).to_sfen());
            }
        }
        result
    }
}

/// 手駒欄をパース（先手・後手の順）
fn parse_hand(text: &str) -> Result<[Hand; Color::NUM], SfenError> {
    let mut hands = [Hand::EMPTY; Color::NUM];
    if text == "-" {
        return Ok(hands);
    }

    let mut count: u32 = 0;
    let mut has_count = false;
    for c in text.chars() {
        if let Some(d) = c.to_digit(10) {
            count = count * 10 + d;
            has_count = true;
            if count > 18 {
                return Err(SfenError::Hand(text.to_string()));
            }
            continue;
        }

        let pc = Piece::from_sfen_char(c).ok_or_else(|| SfenError::Hand(text.to_string()))?;
        let pt = pc.piece_type();
        if !pt.is_hand_piece() {
            return Err(SfenError::Hand(text.to_string()));
        }
        let n = if has_count { count } else { 1 };
        let hand = &mut hands[pc.color().index()];
        let total = hand.count(pt) + n;
        if n == 0 || total > Hand::max_count(pt) {
            return Err(SfenError::Hand(text.to_string()));
        }
        *hand = hand.set(pt, total);
        count = 0;
        has_count = false;
    }

    if has_count {
        return Err(SfenError::Hand(text.to_string()));
    }
    Ok(hands)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_startpos_roundtrip() {
        let pos = Position::from_sfen("startpos").unwrap();
        assert_eq!(pos.to_sfen(), SFEN_HIRATE);
        assert_eq!(pos.position_sfen(), SFEN_HIRATE);
        assert_eq!(pos.side_to_move(), Color::Black);
    }

    #[test]
    fn test_sfen_roundtrip_with_hands() {
        let sfen = "9/9/4k4/9/4P4/9/9/9/K8 b 3G2r2bg4s4n4l17p 1";
        let pos = Position::from_sfen(sfen).unwrap();
        assert_eq!(pos.to_sfen(), sfen);
        assert_eq!(pos.stand_count(Color::Black, PieceType::Gold), 3);
        assert_eq!(pos.stand_count(Color::White, PieceType::Pawn), 17);
        assert_eq!(pos.stand_count(Color::White, PieceType::Gold), 1);
    }

    #[test]
    fn test_sfen_promoted_pieces() {
        let sfen = "kgsnlbrp1/+s+n+l+p5/5+P+L+N+S/1PRBLNSGK/9/9/9/9/9 b G7Pg7p 1";
        let pos = Position::from_sfen(sfen).unwrap();
        assert_eq!(pos.position_sfen(), sfen);
        let sq = Square::from_usi("9b").unwrap();
        assert_eq!(pos.piece_on(sq).piece_type(), PieceType::ProSilver);
    }

    #[test]
    fn test_sfen_with_moves() {
        let pos = Position::from_sfen("startpos moves 7g7f 3c3d").unwrap();
        assert_eq!(pos.history_moves().len(), 2);
        assert_eq!(pos.to_sfen(), format!("{SFEN_HIRATE} moves 7g7f 3c3d"));
        assert_eq!(pos.game_ply(), 3);
        assert_eq!(
            pos.position_sfen(),
            "lnsgkgsnl/1r5b1/pppppp1pp/6p2/9/2P6/PP1PPPPPP/1B5R1/LNSGKGSNL b - 3"
        );
    }

    #[test]
    fn test_sfen_errors() {
        assert!(matches!(Position::from_sfen(""), Err(SfenError::Board(_))));
        assert!(matches!(
            Position::from_sfen("lnsgkgsnl/1r5b1/ppppppppp/9/9/9/PPPPPPPPP/1B5R1 b - 1"),
            Err(SfenError::Board(_))
        ));
        assert!(matches!(
            Position::from_sfen("lnsgkgsnl/1r5b1/ppppppppp/9/9/9/PPPPPPPPP/1B5R1/LNSGKGSNL x - 1"),
            Err(SfenError::SideToMove(_))
        ));
        assert!(matches!(
            Position::from_sfen("4k4/9/9/9/9/9/9/9/4K4 b 3K 1"),
            Err(SfenError::Hand(_))
        ));
        assert!(matches!(
            Position::from_sfen("4k4/9/9/9/9/9/9/9/4K4 b - zero"),
            Err(SfenError::Ply(_))
        ));
        assert!(matches!(Position::from_sfen("startpos moves 7g7e"), Err(SfenError::Move(_))));
        assert!(matches!(
            Position::from_sfen("4k3R/8r/9/9/9/9/9/r8/K8 b 2R 1"),
            Err(SfenError::Hand(_))
        ));
        assert!(matches!(
            Position::from_sfen("4k4/9/9/9/9/9/9/9/4K4 b - 1 5i5h junk"),
            Err(SfenError::Board(_))
        ));
    }

    #[test]
    fn test_move_from_usi() {
        let pos = Position::startpos();
        assert!(pos.move_from_usi("7g7f").is_ok());
        assert!(matches!(pos.move_from_usi("7g7e"), Err(MoveParseError::Illegal(_))));
        assert!(matches!(pos.move_from_usi("zz"), Err(MoveParseError::Syntax(_))));
    }
}
