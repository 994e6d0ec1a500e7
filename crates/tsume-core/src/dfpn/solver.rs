//! df-pn 詰み探索
//!
//! 証明数・反証数は常に攻め方から見た値で持つ。OR ノードが攻め方の手番、AND ノードが玉方の手番。
//! 千日手や手数制限で決まった値は経路に依存するため置換表には書かず、親の子リストにだけ残す。
//! 手数制限による反証は「不詰」ではないので、根まで伝わった場合は `Outcome::Unknown` とする。

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::mate::mate_1ply;
use crate::movegen::{generate_checks, generate_legal, is_checkmate, MoveList};
use crate::position::Position;
use crate::types::{Move, RepetitionState};

use super::config::SolverConfig;
use super::tt::{DfPnTable, INF};

/// 証明数・反証数の加算（INF 以外は INF-1 で飽和）
#[inline]
fn add(a: u32, b: u32) -> u32 {
    if a == INF || b == INF {
        INF
    } else {
        (a as u64 + b as u64).min(INF as u64 - 1) as u32
    }
}

/// 探索結果の種別
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    /// 詰みを証明した
    Mate,
    /// 不詰を証明した
    NoMate,
    /// ノード数上限で打ち切った、または手数上限の先を読めていない
    Unknown,
}

/// 探索結果
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    pub outcome: Outcome,
    /// 詰み手順（USI 形式）。`with_pv` でなければ初手のみ
    pub pv: Vec<String>,
    /// 展開したノード数
    pub nodes: u64,
}

/// ノードの評価値
#[derive(Debug, Clone, Copy)]
struct NodeResult {
    pn: u32,
    dn: u32,
    /// 詰みまでの手数（証明済みのときだけ意味を持つ）
    mate_ply: u16,
    /// 千日手・手数制限に依存した値か
    path_dependent: bool,
    /// 手数制限で打ち切った反証に依存しているか
    depth_cut: bool,
    /// OR ノードで詰みを証明した手
    best_move: Move,
}

impl NodeResult {
    const fn proven(mate_ply: u16, path_dependent: bool, best_move: Move) -> Self {
        Self { pn: 0, dn: INF, mate_ply, path_dependent, depth_cut: false, best_move }
    }

    const fn disproven(path_dependent: bool, depth_cut: bool) -> Self {
        Self { pn: INF, dn: 0, mate_ply: 0, path_dependent, depth_cut, best_move: Move::NONE }
    }

    const fn unknown(pn: u32, dn: u32) -> Self {
        Self { pn, dn, mate_ply: 0, path_dependent: false, depth_cut: false, best_move: Move::NONE }
    }

    #[inline]
    const fn is_proven(&self) -> bool {
        self.pn == 0
    }

    /// 根の値を探索結果の種別にする
    const fn outcome(&self) -> Outcome {
        if self.pn == 0 {
            Outcome::Mate
        } else if self.dn == 0 && !self.depth_cut {
            Outcome::NoMate
        } else {
            Outcome::Unknown
        }
    }
}

/// 展開中ノードの子
#[derive(Debug, Clone, Copy)]
struct Child {
    mv: Move,
    pn: u32,
    dn: u32,
    mate_ply: u16,
    path_dependent: bool,
    depth_cut: bool,
}

/// df-pn ソルバー
///
/// 置換表は探索ごとにクリアする。1つのソルバーを複数スレッドで共有しないこと。
pub struct DfPnSolver {
    config: SolverConfig,
    table: DfPnTable,
    nodes: u64,
    node_limit: u64,
    depth_limit: u32,
    aborted: bool,
}

impl DfPnSolver {
    /// 置換表のメモリ量（MB）を指定して作成（他の設定は既定値）
    pub fn new(memory_mb: usize) -> Self {
        Self::with_config(SolverConfig { memory_mb, ..SolverConfig::default() })
    }

    /// 設定を指定して作成
    pub fn with_config(config: SolverConfig) -> Self {
        Self {
            config,
            table: DfPnTable::new(config.memory_mb),
            nodes: 0,
            node_limit: config.node_limit(),
            depth_limit: config.depth_limit(),
            aborted: false,
        }
    }

    #[inline]
    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// ノード数上限を変更（0 は無制限）
    pub fn set_max_node_count(&mut self, max_node_count: u64) {
        self.config.max_node_count = max_node_count;
    }

    /// 手数上限を変更（0 は無制限）
    pub fn set_max_depth(&mut self, max_depth: u32) {
        self.config.max_depth = max_depth;
    }

    /// 直前の探索で展開したノード数
    #[inline]
    pub fn searched_node_count(&self) -> u64 {
        self.nodes
    }

    /// 詰みの初手を返す（詰まない・分からないときは `Move::NONE`）
    pub fn solve(&mut self, pos: &Position) -> Move {
        let mut work = pos.clone();
        let root = self.search_root(&mut work);
        if root.is_proven() { root.best_move } else { Move::NONE }
    }

    /// 詰み手順を返す（詰まない・分からないときは空）
    ///
    /// 返す手順は必ず詰みで終わる。
    pub fn solve_with_pv(&mut self, pos: &Position) -> Vec<Move> {
        let mut work = pos.clone();
        let root = self.search_root(&mut work);
        if !root.is_proven() {
            return Vec::new();
        }
        self.extract_pv(&mut work)
    }

    /// 探索して結果をまとめて返す
    pub fn solve_position(&mut self, pos: &Position, with_pv: bool) -> SearchResult {
        let mut work = pos.clone();
        let root = self.search_root(&mut work);

        let outcome = root.outcome();
        let pv = match outcome {
            Outcome::Mate if with_pv => self.mate_line(&mut work, root.best_move),
            Outcome::Mate => vec![root.best_move],
            Outcome::NoMate | Outcome::Unknown => Vec::new(),
        };

        SearchResult {
            outcome,
            pv: pv.iter().map(|m| m.to_usi()).collect(),
            nodes: self.nodes,
        }
    }

    /// 詰み手順を取り出す。取り出せなければ初手だけを返す
    fn mate_line(&mut self, pos: &mut Position, first: Move) -> Vec<Move> {
        let pv = self.extract_pv(pos);
        if pv.is_empty() { vec![first] } else { pv }
    }

    fn reset(&mut self) {
        self.table.clear();
        self.nodes = 0;
        self.aborted = false;
        self.node_limit = self.config.node_limit();
        self.depth_limit = self.config.depth_limit();
    }

    fn search_root(&mut self, pos: &mut Position) -> NodeResult {
        self.reset();
        let root = self.mid(pos, INF, INF, 0, true);
        let result = if self.aborted { NodeResult::unknown(root.pn, root.dn) } else { root };

        log::debug!(
            "dfpn: {:?} pn={} dn={} mate_ply={} nodes={} table={}/{}",
            result.outcome(),
            result.pn,
            result.dn,
            result.mate_ply,
            self.nodes,
            self.table.len(),
            self.table.capacity()
        );
        result
    }

    /// 千日手の判定結果を攻め方視点の値に変換
    ///
    /// 優等局面（攻め方が手駒を増やした / 玉方が手駒を減らした）だけは探索を続ける。
    fn repetition_result(pos: &Position, or_node: bool) -> Option<NodeResult> {
        match (pos.repetition_state(false), or_node) {
            (RepetitionState::None, _) => None,
            (RepetitionState::Superior, true) => None,
            (RepetitionState::Inferior, false) => None,
            _ => Some(NodeResult::disproven(true, false)),
        }
    }

    /// 閾値を超えるまでノードを展開する
    fn mid(
        &mut self,
        pos: &mut Position,
        th_pn: u32,
        th_dn: u32,
        depth: u32,
        or_node: bool,
    ) -> NodeResult {
        self.nodes += 1;
        if self.nodes > self.node_limit {
            self.aborted = true;
            return NodeResult::unknown(1, 1);
        }

        if depth > 0 {
            if let Some(result) = Self::repetition_result(pos, or_node) {
                return result;
            }
        }

        if or_node && depth >= self.depth_limit {
            return NodeResult::disproven(true, true);
        }

        if or_node {
            let m = mate_1ply(pos);
            if m.is_some() {
                let result = NodeResult::proven(1, false, m);
                self.table.store(pos.key(), 0, INF, 1, 1);
                return result;
            }
        }

        let mut moves = MoveList::new();
        if or_node {
            generate_checks(pos, &mut moves);
        } else {
            generate_legal(pos, &mut moves);
        }

        if moves.is_empty() {
            return if or_node {
                NodeResult::disproven(false, false)
            } else {
                NodeResult::proven(0, false, Move::NONE)
            };
        }

        let mut children: SmallVec<[Child; 32]> = moves
            .iter()
            .map(|&mv| {
                let (pn, dn, mate_ply) = match self.table.lookup(pos.key_after(mv)) {
                    Some(v) => (v.pn, v.dn, v.mate_ply),
                    None => (1, 1, 0),
                };
                Child { mv, pn, dn, mate_ply, path_dependent: false, depth_cut: false }
            })
            .collect();

        let key = pos.key();
        let start_nodes = self.nodes;

        let (pn, dn) = loop {
            let (pn, dn) = Self::combine(&children, or_node);
            if pn >= th_pn || dn >= th_dn {
                break (pn, dn);
            }

            let (best, second) = Self::select(&children, or_node);
            let child = children[best];

            let (c_th_pn, c_th_dn) = if or_node {
                (
                    th_pn.min(second.saturating_add(1)),
                    (th_dn as u64 - dn as u64 + child.dn as u64).min(INF as u64) as u32,
                )
            } else {
                (
                    (th_pn as u64 - pn as u64 + child.pn as u64).min(INF as u64) as u32,
                    th_dn.min(second.saturating_add(1)),
                )
            };

            pos.do_move(child.mv);
            let r = self.mid(pos, c_th_pn, c_th_dn, depth + 1, !or_node);
            pos.undo_move();

            if self.aborted {
                return NodeResult::unknown(pn, dn);
            }

            let c = &mut children[best];
            c.pn = r.pn;
            c.dn = r.dn;
            c.mate_ply = r.mate_ply;
            c.path_dependent = r.path_dependent;
            c.depth_cut = r.depth_cut;
        };

        let result = Self::finish(&children, pn, dn, or_node);
        if !result.path_dependent {
            let amount = self.nodes - start_nodes + 1;
            self.table.store(key, result.pn, result.dn, result.mate_ply, amount);
        }
        result
    }

    /// 子の値からノードの証明数・反証数を求める
    fn combine(children: &[Child], or_node: bool) -> (u32, u32) {
        if or_node {
            children.iter().fold((INF, 0), |(pn, dn), c| (pn.min(c.pn), add(dn, c.dn)))
        } else {
            children.iter().fold((0, INF), |(pn, dn), c| (add(pn, c.pn), dn.min(c.dn)))
        }
    }

    /// 次に展開する子と、2番目に小さい値を返す
    fn select(children: &[Child], or_node: bool) -> (usize, u32) {
        let value = |c: &Child| if or_node { c.pn } else { c.dn };
        let mut best = 0;
        let mut second = INF;
        for (i, c) in children.iter().enumerate().skip(1) {
            let v = value(c);
            if v < value(&children[best]) {
                second = value(&children[best]);
                best = i;
            } else if v < second {
                second = v;
            }
        }
        (best, second)
    }

    /// 展開を終えたノードの結果をまとめる
    fn finish(children: &[Child], pn: u32, dn: u32, or_node: bool) -> NodeResult {
        if pn == 0 {
            if or_node {
                // 最短の詰み。経路に依存しない証明があればそれを優先
                let proven = || children.iter().filter(|c| c.pn == 0);
                let path_dependent = proven().all(|c| c.path_dependent);
                let best = proven()
                    .filter(|c| c.path_dependent == path_dependent)
                    .min_by_key(|c| c.mate_ply);
                match best {
                    Some(c) => NodeResult::proven(c.mate_ply.saturating_add(1), path_dependent, c.mv),
                    None => NodeResult::unknown(pn, dn),
                }
            } else {
                let mate_ply = children.iter().map(|c| c.mate_ply).max().unwrap_or(0);
                let path_dependent = children.iter().any(|c| c.path_dependent);
                NodeResult::proven(mate_ply.saturating_add(1), path_dependent, Move::NONE)
            }
        } else if dn == 0 {
            // OR は全ての子の反証、AND はどれか1つの反証に依存する
            let (path_dependent, depth_cut) = if or_node {
                (
                    children.iter().any(|c| c.path_dependent),
                    children.iter().any(|c| c.depth_cut),
                )
            } else {
                let disproven = || children.iter().filter(|c| c.dn == 0);
                (disproven().all(|c| c.path_dependent), disproven().all(|c| c.depth_cut))
            };
            NodeResult::disproven(path_dependent, depth_cut)
        } else {
            NodeResult::unknown(pn, dn)
        }
    }

    /// 子局面の確定値を得る（置換表になければ探索し直す）
    fn child_result(
        &mut self,
        pos: &mut Position,
        m: Move,
        depth: u32,
        or_child: bool,
    ) -> NodeResult {
        if let Some(v) = self.table.lookup(pos.key_after(m)).filter(|v| v.is_final()) {
            return NodeResult {
                pn: v.pn,
                dn: v.dn,
                mate_ply: v.mate_ply,
                path_dependent: false,
                depth_cut: false,
                best_move: Move::NONE,
            };
        }

        self.node_limit = self.nodes.saturating_add(self.config.node_limit());
        pos.do_move(m);
        let r = self.mid(pos, INF, INF, depth, or_child);
        pos.undo_move();
        r
    }

    /// 証明済みの局面から詰み手順を取り出す
    ///
    /// 攻め方は最短、玉方は最長の応手を選ぶ。詰みで終わらない手順は捨てる。
    fn extract_pv(&mut self, pos: &mut Position) -> Vec<Move> {
        let mut pv = Vec::new();
        let mut or_node = true;

        while (pv.len() as u64) <= self.depth_limit as u64 {
            let mut moves = MoveList::new();
            if or_node {
                generate_checks(pos, &mut moves);
            } else {
                generate_legal(pos, &mut moves);
            }
            if moves.is_empty() {
                break;
            }

            let depth = pv.len() as u32 + 1;
            let best = if or_node {
                self.pick_attack(pos, &moves, depth)
            } else {
                self.pick_defence(pos, &moves, depth)
            };
            if self.aborted {
                log::warn!("dfpn: node limit reached while extracting pv");
                break;
            }
            let Some(m) = best else {
                break;
            };

            pos.do_move(m);
            pv.push(m);
            or_node = !or_node;
        }

        let mated = !or_node && is_checkmate(pos);
        for _ in 0..pv.len() {
            pos.undo_move();
        }

        if mated {
            pv
        } else {
            log::warn!("dfpn: discarded pv of {} plies that does not end in checkmate", pv.len());
            Vec::new()
        }
    }

    /// 最短で詰む王手を選ぶ
    fn pick_attack(&mut self, pos: &mut Position, moves: &MoveList, depth: u32) -> Option<Move> {
        let m = mate_1ply(pos);
        if m.is_some() {
            return Some(m);
        }

        // 置換表に証明が残っていればそこから選ぶ
        let mut best: Option<(Move, u16)> = None;
        for &m in moves {
            let Some(v) = self.table.lookup(pos.key_after(m)) else {
                continue;
            };
            if v.pn == 0 && best.is_none_or(|(_, ply)| v.mate_ply < ply) {
                best = Some((m, v.mate_ply));
            }
        }
        if let Some((m, _)) = best {
            return Some(m);
        }

        for &m in moves {
            let r = self.child_result(pos, m, depth, false);
            if self.aborted {
                return None;
            }
            if r.is_proven() && best.is_none_or(|(_, ply)| r.mate_ply < ply) {
                best = Some((m, r.mate_ply));
            }
        }
        best.map(|(m, _)| m)
    }

    /// 最長で詰む応手を選ぶ（逃れる応手があれば None）
    fn pick_defence(&mut self, pos: &mut Position, moves: &MoveList, depth: u32) -> Option<Move> {
        let mut best: Option<(Move, u16)> = None;
        for &m in moves {
            let r = self.child_result(pos, m, depth, true);
            if self.aborted || !r.is_proven() {
                return None;
            }
            if best.is_none_or(|(_, ply)| r.mate_ply > ply) {
                best = Some((m, r.mate_ply));
            }
        }
        best.map(|(m, _)| m)
    }
}
