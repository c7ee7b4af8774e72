//! 内置通用哈希 - 作为对比基线

use crate::{error::ProbeError, hash::HashFunction, types::Key};
use ahash::RandomState;
use std::{
    fmt,
    hash::{BuildHasher, Hash, Hasher},
    str::FromStr,
};

/// 哈希算法选择
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HashAlgorithm {
    #[default]
    AHash,
    XxHash,
    Default,
}

impl HashAlgorithm {
    pub fn as_str(&self) -> &'static str {
        match self {
            HashAlgorithm::AHash => "ahash",
            HashAlgorithm::XxHash => "xxhash",
            HashAlgorithm::Default => "default",
        }
    }
}

impl fmt::Display for HashAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HashAlgorithm {
    type Err = ProbeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ahash" => Ok(HashAlgorithm::AHash),
            "xxhash" => Ok(HashAlgorithm::XxHash),
            "default" | "std" => Ok(HashAlgorithm::Default),
            _ => Err(ProbeError::InvalidHashName { name: s.to_string() }),
        }
    }
}

/// 字节哈希函数
type ByteHasher = Box<dyn Fn(&[u8]) -> u64>;

/// 内置哈希
///
/// 固定种子，同一进程内结果确定
pub struct BuiltinHash {
    algorithm: HashAlgorithm,
    hasher: ByteHasher,
    name: String,
}

impl BuiltinHash {
    const SEED: usize = 42;

    /// 创建内置哈希
    pub fn new(algorithm: HashAlgorithm) -> Self {
        Self {
            algorithm,
            hasher: Self::build_hasher_function(algorithm, Self::SEED),
            name: format!("builtin-{}", algorithm),
        }
    }

    pub fn algorithm(&self) -> HashAlgorithm {
        self.algorithm
    }

    /// 构建哈希函数
    fn build_hasher_function(algorithm: HashAlgorithm, seed: usize) -> ByteHasher {
        match algorithm {
            HashAlgorithm::AHash => {
                let state = RandomState::with_seed(seed);
                Box::new(move |data: &[u8]| {
                    let mut hasher = state.build_hasher();
                    data.hash(&mut hasher);
                    hasher.finish()
                })
            }
            HashAlgorithm::XxHash => {
                let seed = seed as u64;
                Box::new(move |data: &[u8]| {
                    let mut hasher = twox_hash::XxHash64::with_seed(seed);
                    data.hash(&mut hasher);
                    hasher.finish()
                })
            }
            HashAlgorithm::Default => {
                Box::new(|data: &[u8]| {
                    let mut hasher = std::collections::hash_map::DefaultHasher::new();
                    data.hash(&mut hasher);
                    hasher.finish()
                })
            }
        }
    }
}

impl Default for BuiltinHash {
    fn default() -> Self {
        Self::new(HashAlgorithm::default())
    }
}

impl fmt::Debug for BuiltinHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BuiltinHash")
            .field("algorithm", &self.algorithm)
            .finish()
    }
}

impl HashFunction for BuiltinHash {
    fn hash(&self, key: &dyn Key) -> u64 {
        (self.hasher)(key.as_bytes())
    }

    fn name(&self) -> &str {
        &self.name
    }
}

// 单元测试
#[cfg(test)]
mod tests {
    use super::*;

    fn check_algorithm(algorithm: HashAlgorithm) {
        let hasher = BuiltinHash::new(algorithm);
        let h1 = hasher.hash(&"consistent_key");
        let h2 = hasher.hash(&String::from("consistent_key"));
        assert_eq!(h1, h2, "相同键应有相同的哈希值");
        assert_ne!(hasher.hash(&"the"), hasher.hash(&"fox"));
        assert_eq!(hasher.name(), format!("builtin-{}", algorithm));
    }

    #[test]
    fn test_builtin_ahash() {
        check_algorithm(HashAlgorithm::AHash);
    }

    #[test]
    fn test_builtin_xxhash() {
        check_algorithm(HashAlgorithm::XxHash);
    }

    #[test]
    fn test_builtin_default() {
        check_algorithm(HashAlgorithm::Default);
    }

    #[test]
    fn test_algorithm_parse() {
        assert_eq!("AHASH".parse::<HashAlgorithm>().unwrap(), HashAlgorithm::AHash);
        assert_eq!("std".parse::<HashAlgorithm>().unwrap(), HashAlgorithm::Default);
        assert!("sha1".parse::<HashAlgorithm>().is_err());
    }
}
