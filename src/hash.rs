/// Polynomial string hash: `result = byte + 31 * result` over every byte.
///
/// Arithmetic wraps on overflow; only the value modulo the table capacity is
/// ever used.
pub const fn hash(word: &str) -> u32 {
    let bytes = word.as_bytes();
    let mut result: u32 = 0;
    let mut i = 0;
    while i < bytes.len() {
        result = (bytes[i] as u32).wrapping_add(result.wrapping_mul(31));
        i += 1;
    }
    result
}

/// Key-derived probe increment in `1..capacity`.
pub const fn step(hashed: u32, capacity: usize) -> usize {
    1 + (hashed as usize % (capacity - 1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_known_values() {
        assert_eq!(hash(""), 0);
        assert_eq!(hash("a"), 97);
        assert_eq!(hash("bat"), 97301);
        assert_eq!(hash("hello"), 99162322);
    }

    #[test]
    fn test_hash_wraps() {
        // long enough to overflow u32 several times over
        assert_eq!(hash("supercalifragilistic"), 4101467033);
    }

    #[test]
    fn test_step_range() {
        for capacity in 2..50 {
            for word in ["", "a", "bat", "hello", "zebra"] {
                let s = step(hash(word), capacity);
                assert!((1..capacity).contains(&s));
            }
        }
        assert_eq!(step(hash("bat"), 7), 6);
        assert_eq!(step(hash("pat"), 7), 2);
    }
}
