//! Base-62 encoding of counter values into short identifiers.
//!
//! Identifiers are never decoded; lookups always match the encoded string
//! exactly, so only the forward direction exists here.

/// Digit alphabet, ordered from the zero symbol to the highest digit.
pub const ALPHABET: &[u8; 62] = b"0123456789abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

const BASE: u64 = ALPHABET.len() as u64;

/// Encodes `num` as a base-62 string, most significant digit first.
///
/// `encode(0)` yields the single zero symbol rather than an empty string.
///
/// # Examples
///
/// ```
/// use base62_shortener::utils::base62::encode;
///
/// assert_eq!(encode(0), "0");
/// assert_eq!(encode(61), "Z");
/// assert_eq!(encode(62), "10");
/// ```
pub fn encode(mut num: u64) -> String {
    if num == 0 {
        return (ALPHABET[0] as char).to_string();
    }

    let mut digits = Vec::with_capacity(11);
    while num > 0 {
        digits.push(ALPHABET[(num % BASE) as usize]);
        num /= BASE;
    }
    digits.reverse();

    // The alphabet is pure ASCII.
    digits.into_iter().map(char::from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_alphabet_has_unique_symbols() {
        let unique: HashSet<u8> = ALPHABET.iter().copied().collect();
        assert_eq!(unique.len(), 62);
    }

    #[test]
    fn test_encode_zero() {
        assert_eq!(encode(0), "0");
    }

    #[test]
    fn test_encode_single_digits() {
        assert_eq!(encode(1), "1");
        assert_eq!(encode(9), "9");
        assert_eq!(encode(10), "a");
        assert_eq!(encode(35), "z");
        assert_eq!(encode(36), "A");
        assert_eq!(encode(61), "Z");
    }

    #[test]
    fn test_encode_rollover() {
        assert_eq!(encode(62), "10");
        assert_eq!(encode(63), "11");
        assert_eq!(encode(62 * 62 - 1), "ZZ");
        assert_eq!(encode(62 * 62), "100");
    }

    #[test]
    fn test_encode_baseline_values() {
        // 10001 = 2 * 62^2 + 37 * 62 + 19
        assert_eq!(encode(10_001), "2Bj");
        assert_eq!(encode(10_002), "2Bk");
    }

    #[test]
    fn test_encode_max_value() {
        let encoded = encode(u64::MAX);
        assert_eq!(encoded.len(), 11);
        assert_eq!(encoded, "lYGhA16ahyf");
    }

    #[test]
    fn test_encode_is_deterministic() {
        for n in [0, 1, 61, 62, 10_001, 987_654_321, u64::MAX] {
            assert_eq!(encode(n), encode(n));
        }
    }

    #[test]
    fn test_encode_is_injective_over_operating_range() {
        let mut seen = HashSet::new();
        for n in 0..200_000u64 {
            assert!(seen.insert(encode(n)), "collision at {}", n);
        }
    }

    #[test]
    fn test_encode_uses_only_alphabet_symbols() {
        for n in (0..1_000_000u64).step_by(7919) {
            assert!(encode(n).bytes().all(|b| ALPHABET.contains(&b)));
        }
    }
}
