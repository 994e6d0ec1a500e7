//! 詰み探索（1手詰め・固定手数の全幅探索）

mod dfs;
mod mate1ply;

pub use dfs::dfs;
pub use mate1ply::mate_1ply;
