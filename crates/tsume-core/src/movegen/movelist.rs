//! 指し手リスト

use crate::types::Move;

use super::types::MAX_MOVES;

/// 指し手生成バッファ
///
/// 固定長配列なので、探索の各ノードでヒープ確保せずに使える。
pub struct MoveList {
    moves: [Move; MAX_MOVES],
    len: usize,
}

impl MoveList {
    /// 空のMoveListを作成
    #[inline]
    pub const fn new() -> Self {
        Self {
            moves: [Move::NONE; MAX_MOVES],
            len: 0,
        }
    }

    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Move> {
        self.moves[..self.len].iter()
    }

    /// 指定された指し手が含まれているか
    pub fn contains(&self, mv: Move) -> bool {
        self.as_slice().contains(&mv)
    }

    /// 指し手を追加
    #[inline]
    pub fn push(&mut self, mv: Move) {
        debug_assert!(self.len < MAX_MOVES);
        self.moves[self.len] = mv;
        self.len += 1;
    }

    /// 条件を満たす指し手だけを残す（順序は保つ）
    pub fn retain(&mut self, mut keep: impl FnMut(Move) -> bool) {
        let mut kept = 0;
        for i in 0..self.len {
            let mv = self.moves[i];
            if keep(mv) {
                self.moves[kept] = mv;
                kept += 1;
            }
        }
        self.len = kept;
    }

    /// 空にする
    #[inline]
    pub fn clear(&mut self) {
        self.len = 0;
    }

    #[inline]
    pub fn as_slice(&self) -> &[Move] {
        &self.moves[..self.len]
    }

    /// USI形式の文字列に変換
    pub fn to_usi_strings(&self) -> Vec<String> {
        self.iter().map(|m| m.to_usi()).collect()
    }
}

impl Default for MoveList {
    fn default() -> Self {
        Self::new()
    }
}

impl std::ops::Index<usize> for MoveList {
    type Output = Move;

    fn index(&self, index: usize) -> &Self::Output {
        &self.as_slice()[index]
    }
}

impl<'a> IntoIterator for &'a MoveList {
    type Item = &'a Move;
    type IntoIter = std::slice::Iter<'a, Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{File, PieceType, Rank, Square};

    #[test]
    fn test_movelist_push_and_contains() {
        let mut list = MoveList::new();
        assert!(list.is_empty());
        let mv = Move::new_move(
            Square::new(File::File7, Rank::Rank7),
            Square::new(File::File7, Rank::Rank6),
            false,
        );
        list.push(mv);
        assert_eq!(list.len(), 1);
        assert!(list.contains(mv));
        assert_eq!(list[0], mv);
    }

    #[test]
    fn test_movelist_retain() {
        let mut list = MoveList::new();
        let sq = Square::new(File::File5, Rank::Rank5);
        list.push(Move::new_drop(PieceType::Gold, sq));
        list.push(Move::new_drop(PieceType::Pawn, sq));
        list.push(Move::new_drop(PieceType::Rook, sq));
        list.retain(|m| m.drop_piece_type() != PieceType::Pawn);
        assert_eq!(list.len(), 2);
        assert_eq!(list.to_usi_strings(), vec!["G*5e", "R*5e"]);
        list.clear();
        assert!(list.is_empty());
    }
}
