use std::sync::LazyLock;

use regex::Regex;

use crate::domains::directory::{DirectoryError, DirectoryResult};

static PHONE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{10}$").expect("phone pattern is valid"));

/// Phones are exactly ten ASCII digits, no separators or country prefix.
pub fn validate_phone(phone: &str) -> DirectoryResult<()> {
    if PHONE_PATTERN.is_match(phone) {
        Ok(())
    } else {
        Err(DirectoryError::InvalidPhone)
    }
}
