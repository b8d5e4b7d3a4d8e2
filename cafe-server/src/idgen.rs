//! Employee ID generation
//!
//! IDs have the form `UI` + 7 characters drawn uniformly from `A-Z0-9`,
//! redrawn until the suffix contains at least one digit. A draw misses a
//! digit with probability (26/36)^7 ≈ 0.10, so the expected attempt count
//! is barely above one; the cap exists so a broken RNG fails loudly instead
//! of spinning. No uniqueness check against stored IDs is performed - with
//! 36^7 suffixes a collision is astronomically unlikely at this scale.

use rand::Rng;

use crate::utils::{AppError, AppResult};

const ID_PREFIX: &str = "UI";
const SUFFIX_LEN: usize = 7;
const ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";
const MAX_ATTEMPTS: usize = 64;

/// Generate a readable employee identifier, e.g. `UI58KQ2ZV`
pub fn generate_employee_id() -> AppResult<String> {
    let mut rng = rand::thread_rng();

    for _ in 0..MAX_ATTEMPTS {
        let suffix: String = (0..SUFFIX_LEN)
            .map(|_| ALPHABET[rng.gen_range(0..ALPHABET.len())] as char)
            .collect();
        if suffix.bytes().any(|b| b.is_ascii_digit()) {
            return Ok(format!("{ID_PREFIX}{suffix}"));
        }
    }

    Err(AppError::internal(format!(
        "employee id generation exhausted {MAX_ATTEMPTS} attempts without a digit"
    )))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_shape() {
        for _ in 0..1000 {
            let id = generate_employee_id().unwrap();
            assert_eq!(id.len(), 9);
            assert!(id.starts_with("UI"));

            let suffix = &id[2..];
            assert!(suffix.bytes().all(|b| ALPHABET.contains(&b)));
            assert!(suffix.bytes().any(|b| b.is_ascii_digit())); // 至少一位数字
        }
    }

    #[test]
    fn test_ids_are_not_constant() {
        let a = generate_employee_id().unwrap();
        let b = generate_employee_id().unwrap();
        let c = generate_employee_id().unwrap();
        // 三连碰撞的概率可以忽略
        assert!(!(a == b && b == c));
    }
}
