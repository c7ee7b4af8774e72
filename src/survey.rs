//! 哈希函数对比 - 同一份词流同时写入多张表，按负载因子和哈希函数分组统计

use crate::{
    error::ProbeError,
    hash::{HashAlgorithm, HashFunctionKind},
    map::{ProbeTable, ProbeTableConfig, DEFAULT_INITIAL_CAPACITY},
    stats::{render_report, TableStats},
    types::Entry,
};

/// 默认对比的最大负载因子
pub const DEFAULT_LOADS: [f64; 3] = [0.7, 0.8, 0.9];

struct SurveyTable {
    kind: HashFunctionKind,
    table: ProbeTable<String>,
}

/// 多表对比
///
/// 表按负载因子优先排列，同一负载因子内按给定的哈希函数顺序排列
pub struct HashSurvey {
    tables: Vec<SurveyTable>,
    words: u64,
}

impl HashSurvey {
    /// 每个(负载因子, 哈希函数)组合创建一张表
    pub fn new(
        loads: &[f64],
        kinds: &[HashFunctionKind],
        initial_capacity: usize,
        algorithm: HashAlgorithm,
    ) -> Result<Self, ProbeError> {
        if loads.is_empty() || kinds.is_empty() {
            return Err(ProbeError::InvalidConfig {
                reason: "survey needs at least one load factor and one hash function".into(),
            });
        }

        let mut tables = Vec::with_capacity(loads.len() * kinds.len());
        for &max_load_factor in loads {
            for &kind in kinds {
                let config = ProbeTableConfig {
                    initial_capacity,
                    max_load_factor,
                };
                tables.push(SurveyTable {
                    kind,
                    table: ProbeTable::new(config, kind.build(algorithm))?,
                });
            }
        }
        log_debug!("survey created with {} tables", tables.len());
        Ok(Self { tables, words: 0 })
    }

    /// 默认组合：负载因子0.7/0.8/0.9 × 三种参考哈希函数
    pub fn with_defaults() -> Result<Self, ProbeError> {
        Self::new(
            &DEFAULT_LOADS,
            &HashFunctionKind::ALL,
            DEFAULT_INITIAL_CAPACITY,
            HashAlgorithm::default(),
        )
    }

    /// 把一个词写入所有表
    pub fn observe(&mut self, word: &str) {
        self.words += 1;
        for entry in &mut self.tables {
            entry.table.put(word.to_string());
        }
    }

    /// 已观察的词数（含重复）
    pub fn word_count(&self) -> u64 {
        self.words
    }

    pub fn tables(&self) -> impl Iterator<Item = (HashFunctionKind, &ProbeTable<String>)> + '_ {
        self.tables.iter().map(|entry| (entry.kind, &entry.table))
    }

    /// 所有表的统计快照，顺序与创建顺序一致
    pub fn stats(&self) -> Vec<TableStats> {
        self.tables.iter().map(|entry| entry.table.stats()).collect()
    }

    /// 带哈希函数种类的统计快照，用于渲染报告
    pub fn labelled_stats(&self) -> Vec<(HashFunctionKind, TableStats)> {
        self.tables
            .iter()
            .map(|entry| (entry.kind, entry.table.stats()))
            .collect()
    }

    /// 文本对比报告
    pub fn report(&self) -> String {
        render_report(&self.labelled_stats(), self.most_frequent())
    }

    /// 出现最多的词
    ///
    /// 优先取第一张内置哈希表；各表内容相同，只有槽位顺序不同
    pub fn most_frequent(&self) -> Option<&Entry<String>> {
        self.tables
            .iter()
            .find(|entry| entry.kind == HashFunctionKind::Builtin)
            .or_else(|| self.tables.first())
            .and_then(|entry| entry.table.max_element())
    }

    /// 所有表的Prometheus指标
    pub fn export_prometheus(&self) -> String {
        self.tables
            .iter()
            .map(|entry| entry.table.export_prometheus())
            .collect()
    }
}
