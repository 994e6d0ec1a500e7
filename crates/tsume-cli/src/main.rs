//! tsume: 将棋の合法手生成と詰み探索のコマンドライン

mod config;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde_json::json;
use tsume_core::mate::dfs;
use tsume_core::movegen::{generate_legal, generate_legal_wily, perft, MoveList};
use tsume_core::{DfPnSolver, Outcome, Position, SolverConfig};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// ログレベル（RUST_LOG があればそちらを優先）
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    /// 結果を JSON で出力
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// 合法手を列挙
    Moves {
        /// SFEN または "startpos [moves ...]"
        #[arg(required = true, num_args = 1..)]
        position: Vec<String>,
        /// 無駄な不成を除く
        #[arg(long)]
        wily: bool,
    },
    /// perft でノード数を数える
    Perft {
        #[arg(required = true, num_args = 1..)]
        position: Vec<String>,
        #[arg(long, default_value_t = 1)]
        depth: u32,
    },
    /// 千日手判定
    Repetition {
        #[arg(required = true, num_args = 1..)]
        position: Vec<String>,
        /// 4回目の同一局面まで千日手としない
        #[arg(long)]
        strict: bool,
    },
    /// 固定手数の全幅詰み探索
    Dfs {
        #[arg(required = true, num_args = 1..)]
        position: Vec<String>,
        #[arg(long, default_value_t = 5)]
        ply: i32,
    },
    /// df-pn 詰み探索
    Solve {
        #[arg(required = true, num_args = 1..)]
        position: Vec<String>,
        /// 詰み手順をすべて出力
        #[arg(long)]
        pv: bool,
        /// 設定ファイル（.toml / .json）
        #[arg(long)]
        config: Option<PathBuf>,
        #[arg(long)]
        memory_mb: Option<usize>,
        /// 0 で無制限
        #[arg(long)]
        max_nodes: Option<u64>,
        /// 0 で無制限
        #[arg(long)]
        max_depth: Option<u32>,
    },
}

fn main() {
    let cli = Cli::parse();

    env_logger::Builder::from_env(
        env_logger::Env::default().filter_or(env_logger::DEFAULT_FILTER_ENV, &cli.log_level),
    )
    .target(env_logger::Target::Stderr)
    .init();

    if let Err(e) = run(cli) {
        log::error!("{e:#}");
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}

fn parse_position(tokens: &[String]) -> Result<Position> {
    let sfen = tokens.join(" ");
    Position::from_sfen(&sfen).with_context(|| format!("failed to parse position {sfen:?}"))
}

fn run(cli: Cli) -> Result<()> {
    let json = cli.json;

    match cli.command {
        Command::Moves { position, wily } => {
            let pos = parse_position(&position)?;
            let mut list = MoveList::new();
            if wily {
                generate_legal_wily(&pos, &mut list);
            } else {
                generate_legal(&pos, &mut list);
            }
            let moves = list.to_usi_strings();
            if json {
                println!("{}", json!({ "count": moves.len(), "moves": moves }));
            } else {
                println!("{}", moves.join(" "));
            }
        }
        Command::Perft { position, depth } => {
            let mut pos = parse_position(&position)?;
            let nodes = perft(&mut pos, depth);
            if json {
                println!("{}", json!({ "depth": depth, "nodes": nodes }));
            } else {
                println!("{nodes}");
            }
        }
        Command::Repetition { position, strict } => {
            let pos = parse_position(&position)?;
            let state = pos.repetition_state(strict);
            if json {
                println!("{}", json!({ "state": state.to_string(), "strict": strict }));
            } else {
                println!("{state}");
            }
        }
        Command::Dfs { position, ply } => {
            let mut pos = parse_position(&position)?;
            let m = dfs(&mut pos, ply);
            if json {
                let mate = m.is_some().then(|| m.to_usi());
                println!("{}", json!({ "ply": ply, "mate": mate }));
            } else {
                println!("{}", m.to_usi());
            }
        }
        Command::Solve { position, pv, config: config_path, memory_mb, max_nodes, max_depth } => {
            let pos = parse_position(&position)?;
            let base = match config_path {
                Some(path) => config::load_config(&path)?,
                None => SolverConfig::default(),
            };
            let config = config::apply_overrides(base, memory_mb, max_nodes, max_depth);
            log::info!("solving with {config:?}");

            let mut solver = DfPnSolver::with_config(config);
            let result = solver.solve_position(&pos, pv);
            if json {
                let text = serde_json::to_string(&result).context("failed to encode result")?;
                println!("{text}");
            } else {
                match result.outcome {
                    Outcome::Mate => println!("mate {}", result.pv.join(" ")),
                    Outcome::NoMate => println!("nomate"),
                    Outcome::Unknown => println!("unknown"),
                }
                println!("nodes {}", result.nodes);
            }
        }
    }

    Ok(())
}
