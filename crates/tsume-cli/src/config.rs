//! ソルバー設定ファイルの読み込み

use std::path::Path;

use anyhow::{bail, Context, Result};
use tsume_core::SolverConfig;

/// TOML または JSON（拡張子で判別）から設定を読む
pub fn load_config(path: &Path) -> Result<SolverConfig> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config file {}", path.display()))?;

    let ext = path.extension().and_then(|e| e.to_str()).unwrap_or_default();
    let config: SolverConfig = match ext.to_ascii_lowercase().as_str() {
        "toml" => toml::from_str(&text)
            .with_context(|| format!("invalid TOML in {}", path.display()))?,
        "json" => serde_json::from_str(&text)
            .with_context(|| format!("invalid JSON in {}", path.display()))?,
        other => bail!("unsupported config extension {other:?} (expected .toml or .json)"),
    };
    log::debug!("loaded solver config from {}: {:?}", path.display(), config);
    Ok(config)
}

/// コマンドライン指定で上書き
pub fn apply_overrides(
    mut config: SolverConfig,
    memory_mb: Option<usize>,
    max_nodes: Option<u64>,
    max_depth: Option<u32>,
) -> SolverConfig {
    if let Some(v) = memory_mb {
        config.memory_mb = v;
    }
    if let Some(v) = max_nodes {
        config.max_node_count = v;
    }
    if let Some(v) = max_depth {
        config.max_depth = v;
    }
    config
}
