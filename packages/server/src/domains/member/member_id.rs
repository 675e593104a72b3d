//! Member identifier generation.
//!
//! The identifier is a checksum of the contact pair, not a key: distinct
//! pairs may collide and nothing relies on uniqueness.

const MODULUS: u64 = 100_000;

/// Derive the 5-digit member identifier for an `(email, phone)` pair.
///
/// Sums the UTF-16 code units of both strings, reduces modulo 100000 and
/// zero-pads to five digits.
pub fn generate_member_id(email: &str, phone: &str) -> String {
    let combined = code_unit_sum(email) + code_unit_sum(phone);
    format!("{:05}", combined % MODULUS)
}

fn code_unit_sum(value: &str) -> u64 {
    value.encode_utf16().map(u64::from).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_value() {
        // 646 (email) + 523 (phone)
        assert_eq!(generate_member_id("a@x.com", "0712345678"), "01169");
    }

    #[test]
    fn test_deterministic() {
        let first = generate_member_id("jane@example.com", "0701234567");
        let second = generate_member_id("jane@example.com", "0701234567");
        assert_eq!(first, second);
    }

    #[test]
    fn test_always_five_ascii_digits() {
        let samples = [
            ("", ""),
            ("a", "1"),
            ("someone.with.a.long.address@example.org", "0799999999"),
            ("ünïcødé@example.com", "0700000000"),
            (&"z".repeat(5000), "0712345678"),
        ];
        for (email, phone) in samples {
            let id = generate_member_id(email, phone);
            assert_eq!(id.len(), 5, "{id}");
            assert!(id.bytes().all(|b| b.is_ascii_digit()), "{id}");
        }
    }

    #[test]
    fn test_wraps_modulo() {
        // 'z' is 122; 1000 of them sum to 122000 -> 22000
        assert_eq!(generate_member_id(&"z".repeat(1000), ""), "22000");
    }

    #[test]
    fn test_collisions_are_possible() {
        // Same multiset of characters, different pairs
        assert_eq!(
            generate_member_id("ab@x.com", "0712345678"),
            generate_member_id("ba@x.com", "0712345678")
        );
    }
}
