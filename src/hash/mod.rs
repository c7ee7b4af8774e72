//! 哈希模块 - 统一管理可插拔哈希函数

pub mod binary_digits;
pub mod polynomial;
pub mod builtin;

pub use binary_digits::BinaryDigitSum;
pub use polynomial::PositionalPolynomial;
pub use builtin::{BuiltinHash, HashAlgorithm};

use std::{fmt, str::FromStr};

use crate::{error::ProbeError, types::Key};

/// 哈希函数特征
///
/// 把键映射为非负整数，表通过`slot`把它落到槽位上
pub trait HashFunction {
    /// 计算键的哈希值
    fn hash(&self, key: &dyn Key) -> u64;

    /// 键在给定容量下的理想槽位
    ///
    /// 默认对`hash`取模。数学定义超出`u64`的哈希函数应直接按容量取模计算，
    /// 保证槽位等于完整整数值对容量取模的结果。
    fn slot(&self, key: &dyn Key, capacity: usize) -> usize {
        calculate_slot(self.hash(key), capacity)
    }

    /// 哈希函数名称，用于统计和报告
    fn name(&self) -> &str {
        "custom"
    }
}

impl<T> HashFunction for T
where
    T: Fn(&[u8]) -> u64,
{
    fn hash(&self, key: &dyn Key) -> u64 {
        self(key.as_bytes())
    }
}

/// 参考哈希函数族
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HashFunctionKind {
    Builtin,
    BinaryDigitSum,
    Polynomial,
}

impl HashFunctionKind {
    /// 全部参考哈希函数，按报告顺序排列
    pub const ALL: [HashFunctionKind; 3] = [
        HashFunctionKind::Builtin,
        HashFunctionKind::BinaryDigitSum,
        HashFunctionKind::Polynomial,
    ];

    /// 构建哈希函数，`algorithm`只对内置哈希生效
    pub fn build(self, algorithm: HashAlgorithm) -> Box<dyn HashFunction> {
        match self {
            HashFunctionKind::Builtin => Box::new(BuiltinHash::new(algorithm)),
            HashFunctionKind::BinaryDigitSum => Box::new(BinaryDigitSum),
            HashFunctionKind::Polynomial => Box::new(PositionalPolynomial),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            HashFunctionKind::Builtin => "builtin",
            HashFunctionKind::BinaryDigitSum => "binary",
            HashFunctionKind::Polynomial => "polynomial",
        }
    }

    /// 对比报告中的标题
    pub fn report_label(&self) -> &'static str {
        match self {
            HashFunctionKind::Builtin => "Inbuilt Function",
            HashFunctionKind::BinaryDigitSum => "First Function",
            HashFunctionKind::Polynomial => "Second Function",
        }
    }
}

impl fmt::Display for HashFunctionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HashFunctionKind {
    type Err = ProbeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "builtin" | "inbuilt" => Ok(HashFunctionKind::Builtin),
            "binary" | "first" => Ok(HashFunctionKind::BinaryDigitSum),
            "polynomial" | "second" => Ok(HashFunctionKind::Polynomial),
            _ => Err(ProbeError::InvalidHashName { name: s.to_string() }),
        }
    }
}

/// 哈希工具函数
pub fn calculate_slot(hash: u64, capacity: usize) -> usize {
    (hash % capacity as u64) as usize
}
