//! DF-PN ソルバーの設定

use serde::{Deserialize, Serialize};

/// ソルバー設定
///
/// `max_node_count` と `max_depth` は 0 で無制限。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolverConfig {
    /// 置換表に使うメモリ（MB）
    pub memory_mb: usize,
    /// 1回の探索で展開する最大ノード数
    pub max_node_count: u64,
    /// 詰み手順の最大手数
    pub max_depth: u32,
}

impl SolverConfig {
    /// 既定値
    pub const DEFAULT_MEMORY_MB: usize = 16;
    pub const DEFAULT_MAX_NODE_COUNT: u64 = 1_000_000;
    pub const DEFAULT_MAX_DEPTH: u32 = 31;

    /// ノード数上限（0 は無制限）
    #[inline]
    pub(crate) fn node_limit(&self) -> u64 {
        if self.max_node_count == 0 { u64::MAX } else { self.max_node_count }
    }

    /// 手数上限（0 は無制限）
    #[inline]
    pub(crate) fn depth_limit(&self) -> u32 {
        if self.max_depth == 0 { u32::MAX } else { self.max_depth }
    }
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            memory_mb: Self::DEFAULT_MEMORY_MB,
            max_node_count: Self::DEFAULT_MAX_NODE_COUNT,
            max_depth: Self::DEFAULT_MAX_DEPTH,
        }
    }
}
