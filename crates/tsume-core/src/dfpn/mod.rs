//! df-pn による詰み探索
//!
//! - `DfPnSolver`: 探索本体
//! - `SolverConfig`: メモリ量・ノード数・手数の上限
//! - `DfPnTable`: 4エントリクラスタの置換表

mod config;
mod solver;
mod tt;

pub use config::SolverConfig;
pub use solver::{DfPnSolver, Outcome, SearchResult};
pub use tt::{DfPnTable, TableValue, CLUSTER_SIZE, INF};
