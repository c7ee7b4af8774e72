//! 128进制多项式哈希 - Σ codepoint(char_i) × 128^i

use crate::{hash::HashFunction, types::Key};

const RADIX: u64 = 128;

/// 位置多项式哈希
///
/// `hash`按2^64回绕，128^i = 2^(7i)，第11个字符起的项对它没有贡献。
/// 槽位不经过回绕值：`slot`用霍纳法则直接对容量取模，得到完整多项式的余数。
#[derive(Debug, Clone, Copy, Default)]
pub struct PositionalPolynomial;

impl HashFunction for PositionalPolynomial {
    fn hash(&self, key: &dyn Key) -> u64 {
        let mut hash = 0u64;
        let mut weight = 1u64;
        for ch in key.as_str().chars() {
            hash = hash.wrapping_add((ch as u64).wrapping_mul(weight));
            weight = weight.wrapping_mul(RADIX);
        }
        hash
    }

    fn slot(&self, key: &dyn Key, capacity: usize) -> usize {
        let modulus = capacity as u128;
        // 从最高位开始：acc = acc × 128 + codepoint (mod capacity)
        let residue = key
            .as_str()
            .chars()
            .rev()
            .fold(0u128, |acc, ch| (acc * RADIX as u128 + ch as u128) % modulus);
        residue as usize
    }

    fn name(&self) -> &str {
        "polynomial"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_polynomial_values() {
        let hasher = PositionalPolynomial;
        assert_eq!(hasher.hash(&""), 0);
        assert_eq!(hasher.hash(&"a"), 97);
        assert_eq!(hasher.hash(&"ab"), 97 + 98 * 128);
        assert_eq!(hasher.hash(&"abc"), 97 + 98 * 128 + 99 * 128 * 128);
    }

    #[test]
    fn test_position_matters() {
        let hasher = PositionalPolynomial;
        assert_ne!(hasher.hash(&"ab"), hasher.hash(&"ba"));
    }

    #[test]
    fn test_long_keys_wrap() {
        let hasher = PositionalPolynomial;
        // 前10个字符相同，之后的字符权重回绕为0
        assert_eq!(
            hasher.hash(&"abcdefghijXYZ"),
            hasher.hash(&"abcdefghijQRS")
        );
    }

    #[test]
    fn test_slot_matches_short_hash() {
        let hasher = PositionalPolynomial;
        for word in ["", "a", "the", "quick", "abcdefghi"] {
            for capacity in [1, 7, 100, 128, 1024] {
                assert_eq!(
                    hasher.slot(&word, capacity),
                    (hasher.hash(&word) % capacity as u64) as usize
                );
            }
        }
    }

    #[test]
    fn test_slot_uses_full_polynomial() {
        let hasher = PositionalPolynomial;
        // 完整整数值对100取模；回绕后的值两者都落在13
        assert_eq!(hasher.slot(&"internationalization", 100), 57);
        assert_eq!(hasher.slot(&"internationally", 100), 53);
        assert_eq!(hasher.hash(&"internationalization") % 100, 13);
    }
}
