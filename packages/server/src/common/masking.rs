//! Display-only masking of contact fields.
//!
//! Masking never touches stored records: callers mask a clone at the point a
//! value leaves the system (HTTP responses, dashboard views).

/// Width of the masked span in both transforms.
const MASK: &str = "****";

const EMAIL_MASK: &str = "***";

/// Mask a 10-digit phone number: `0701234567` -> `0701****67`.
///
/// Anything that is not exactly ten ASCII digits is returned unchanged.
pub fn mask_phone(phone: &str) -> String {
    if phone.len() != 10 || !phone.bytes().all(|b| b.is_ascii_digit()) {
        return phone.to_string();
    }
    format!("{}{}{}", &phone[..4], MASK, &phone[8..])
}

/// Mask the local part of an email: `johndoe@example.com` -> `jo***@example.com`.
///
/// The domain is kept as-is. A value without `@` is returned unchanged.
pub fn mask_email(email: &str) -> String {
    let Some((local, domain)) = email.split_once('@') else {
        return email.to_string();
    };
    let visible: String = local.chars().take(2).collect();
    format!("{}{}@{}", visible, EMAIL_MASK, domain)
}
