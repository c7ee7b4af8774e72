//! Rust线性探测哈希表库
//!
//! 开放寻址 + 线性探测的词频计数哈希表，每次探测都会记录冲突与探测次数，
//! 用于比较不同哈希函数、不同最大负载因子下的表现。
//!
//! ## 主要特性
//! - 可插拔哈希函数（二进制位和、128进制多项式、内置通用哈希）
//! - 超过最大负载因子时自动两倍扩容
//! - 冲突/探测统计，可导出Prometheus格式
//!
//! ## 快速开始
//!
//! ```rust
//! use probe_hashtable::*;
//!
//! fn main() -> Result<(), ProbeError> {
//!     // 使用默认配置（容量100，负载因子0.7）
//!     let mut table = ProbeTable::new(
//!         ProbeTableConfig::default(),
//!         Box::new(PositionalPolynomial),
//!     )?;
//!
//!     for word in ["the", "quick", "the", "fox", "the"] {
//!         table.put(word.to_string());
//!     }
//!
//!     assert_eq!(table.get(&"the".to_string())?, 3);
//!
//!     // 打印统计信息
//!     println!("{:?}", table.stats());
//!     Ok(())
//! }
//! ```


#![warn(clippy::all)]

#[cfg(feature = "logging")]
#[doc(hidden)]
pub use log as __log;

#[cfg(feature = "logging")]
#[macro_export]
macro_rules! log_debug {
    ($($arg:tt)*) => {
        $crate::__log::debug!($($arg)*)
    };
}

#[cfg(feature = "logging")]
#[macro_export]
macro_rules! log_info {
    ($($arg:tt)*) => {
        $crate::__log::info!($($arg)*)
    };
}

#[cfg(feature = "logging")]
#[macro_export]
macro_rules! log_warn {
    ($($arg:tt)*) => {
        $crate::__log::warn!($($arg)*)
    };
}

#[cfg(feature = "logging")]
#[macro_export]
macro_rules! log_error {
    ($($arg:tt)*) => {
        $crate::__log::error!($($arg)*)
    };
}

#[cfg(not(feature = "logging"))]
#[macro_export]
macro_rules! log_debug {
    ($($arg:tt)*) => {};
}

#[cfg(not(feature = "logging"))]
#[macro_export]
macro_rules! log_info {
    ($($arg:tt)*) => {};
}

#[cfg(not(feature = "logging"))]
#[macro_export]
macro_rules! log_warn {
    ($($arg:tt)*) => {};
}

#[cfg(not(feature = "logging"))]
#[macro_export]
macro_rules! log_error {
    ($($arg:tt)*) => {};
}
// 核心模块导出
pub mod error;
pub mod types;
pub mod map;
pub mod hash;
pub mod stats;
pub mod tokenize;
pub mod survey;

// 公共接口导出
pub use crate::{
    map::{
        ProbeTable,
        ProbeTableConfig,
        Slots,
        DEFAULT_INITIAL_CAPACITY,
        DEFAULT_MAX_LOAD_FACTOR,
        MAX_CAPACITY,
        MIN_MAX_LOAD_FACTOR,
    },
    hash::{
        HashFunction,
        HashFunctionKind,
        HashAlgorithm,
        BinaryDigitSum,
        PositionalPolynomial,
        BuiltinHash,
    },
    stats::{
        ProbeStats,
        TableStats,
        render_report,
    },
    tokenize::Tokenizer,
    survey::HashSurvey,
    error::ProbeError,
    types::{Key, ByteKey, Entry}
};

// 简化默认类型别名
pub type WordTable = ProbeTable<String>;

// 便捷功能函数

/// 批量计数
///
/// 逐个调用`put`，返回新出现的键数量
pub fn batch_put<K: Key + Eq>(
    table: &mut ProbeTable<K>,
    keys: impl IntoIterator<Item = K>,
) -> usize {
    let before = table.len();
    for key in keys {
        table.put(key);
    }
    table.len() - before
}

/// 出现次数最多的条目
///
/// 按槽位顺序扫描，次数相同时保留先遇到的条目；空表返回`None`
pub fn max_element<K: Key>(table: &ProbeTable<K>) -> Option<&Entry<K>> {
    table.max_element()
}
