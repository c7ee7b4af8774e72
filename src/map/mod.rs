//! 哈希表核心模块 - 线性探测开放寻址表及其配置

pub mod probe_table;

pub use probe_table::{ProbeTable, ProbeTableConfig, Slots};

/// 默认初始槽位数
pub const DEFAULT_INITIAL_CAPACITY: usize = 100;
/// 默认最大负载因子
pub const DEFAULT_MAX_LOAD_FACTOR: f64 = 0.7;
/// 最大负载因子的下限，更小的值扩容所需容量不切实际
pub const MIN_MAX_LOAD_FACTOR: f64 = 0.001;
/// 初始槽位数上限
pub const MAX_CAPACITY: usize = 1 << 30;
