//! 二进制位和哈希 - 把每个字符码点的二进制写法当作十进制数累加

use crate::{hash::HashFunction, types::Key};

/// 二进制位和哈希
///
/// `'a'`的码点97写成二进制是`1100001`，按十进制读作1100001后累加。
/// 码点最多21个二进制位，单字符值用`u128`计算。`hash`的累加结果按2^64回绕，
/// `slot`逐项对容量取模，非ASCII文本的槽位仍等于完整和的余数。
#[derive(Debug, Clone, Copy, Default)]
pub struct BinaryDigitSum;

impl BinaryDigitSum {
    /// 单个码点的二进制数字按十进制解释
    pub fn binary_as_decimal(code_point: u32) -> u128 {
        if code_point == 0 {
            return 0;
        }
        let width = u32::BITS - code_point.leading_zeros();
        (0..width).rev().fold(0u128, |acc, bit| {
            acc * 10 + ((code_point >> bit) & 1) as u128
        })
    }
}

impl HashFunction for BinaryDigitSum {
    fn hash(&self, key: &dyn Key) -> u64 {
        key.as_str()
            .chars()
            .map(|ch| Self::binary_as_decimal(ch as u32))
            .fold(0u128, |acc, value| acc.wrapping_add(value)) as u64
    }

    fn slot(&self, key: &dyn Key, capacity: usize) -> usize {
        let modulus = capacity as u128;
        key.as_str()
            .chars()
            .map(|ch| Self::binary_as_decimal(ch as u32) % modulus)
            .fold(0u128, |acc, value| (acc + value) % modulus) as usize
    }

    fn name(&self) -> &str {
        "binary"
    }
}
