//! DF-PN 用の置換表
//!
//! 4エントリのクラスタを固定数だけ確保する。満杯のクラスタでは探索量が最小のエントリを置き換える。

/// 証明数・反証数の無限大
pub const INF: u32 = u32::MAX;

/// クラスタあたりのエントリ数
pub const CLUSTER_SIZE: usize = 4;

/// 置換表エントリ
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct Entry {
    key: u64,
    pn: u32,
    dn: u32,
    /// この局面以下で展開したノード数（0 は空き）
    amount: u32,
    mate_ply: u16,
}

#[derive(Debug, Clone, Copy, Default)]
struct Cluster {
    entries: [Entry; CLUSTER_SIZE],
}

/// 置換表から読み出した値
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableValue {
    pub pn: u32,
    pub dn: u32,
    pub mate_ply: u16,
}

impl TableValue {
    /// 証明済みまたは反証済みか
    #[inline]
    pub const fn is_final(&self) -> bool {
        self.pn == 0 || self.dn == 0
    }
}

/// 置換表
pub struct DfPnTable {
    clusters: Box<[Cluster]>,
    used: usize,
}

impl DfPnTable {
    /// メモリ量（MB）から置換表を作成（最低1クラスタ）
    pub fn new(memory_mb: usize) -> Self {
        let bytes = memory_mb.saturating_mul(1024 * 1024);
        let count = (bytes / std::mem::size_of::<Cluster>()).max(1);
        log::debug!(
            "dfpn table: {} clusters, {} entries ({} MB)",
            count,
            count * CLUSTER_SIZE,
            memory_mb
        );
        Self { clusters: vec![Cluster::default(); count].into_boxed_slice(), used: 0 }
    }

    /// 全エントリ数
    #[inline]
    pub fn capacity(&self) -> usize {
        self.clusters.len() * CLUSTER_SIZE
    }

    /// 使用中のエントリ数
    #[inline]
    pub fn len(&self) -> usize {
        self.used
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.used == 0
    }

    /// 全エントリを消す
    pub fn clear(&mut self) {
        self.clusters.fill(Cluster::default());
        self.used = 0;
    }

    #[inline]
    fn cluster_index(&self, key: u64) -> usize {
        ((key as u128 * self.clusters.len() as u128) >> 64) as usize
    }

    /// 局面を検索
    pub fn lookup(&self, key: u64) -> Option<TableValue> {
        let cluster = &self.clusters[self.cluster_index(key)];
        cluster.entries.iter().find(|e| e.amount != 0 && e.key == key).map(|e| TableValue {
            pn: e.pn,
            dn: e.dn,
            mate_ply: e.mate_ply,
        })
    }

    /// 局面を書き込む
    ///
    /// 同じキーがあれば上書きし、なければ空きか探索量最小のエントリを使う。
    pub fn store(&mut self, key: u64, pn: u32, dn: u32, mate_ply: u16, amount: u64) {
        let idx = self.cluster_index(key);
        let amount = amount.clamp(1, u32::MAX as u64) as u32;
        let entries = &mut self.clusters[idx].entries;

        let slot = match entries.iter().position(|e| e.amount != 0 && e.key == key) {
            Some(i) => i,
            None => match entries.iter().position(|e| e.amount == 0) {
                Some(i) => {
                    self.used += 1;
                    i
                }
                None => {
                    let mut victim = 0;
                    for (i, e) in entries.iter().enumerate() {
                        if e.amount < entries[victim].amount {
                            victim = i;
                        }
                    }
                    victim
                }
            },
        };

        entries[slot] = Entry { key, pn, dn, amount, mate_ply };
    }
}
