//! 合法手生成の型定義

/// 指し手バッファの大きさ
///
/// 合法手の理論上の最大は593手。絞り込み前の疑似合法手も収まるよう余裕を持たせる。
pub const MAX_MOVES: usize = 1024;

/// 指し手生成のタイプ
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenType {
    /// 合法手すべて（行き所のある不成を含む）
    Legal,
    /// 合法手から無駄な不成を除いたもの
    ///
    /// 歩・角・飛の成れる不成と、香の奥2段への不成を生成しない。
    LegalWily,
    /// 王手になる合法手（不成を含む）
    Checks,
}

impl GenType {
    /// 無駄な不成を省くか
    #[inline]
    pub const fn is_wily(self) -> bool {
        matches!(self, Self::LegalWily)
    }
}
