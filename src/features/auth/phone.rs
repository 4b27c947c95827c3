//! Phone number helpers for the sign-in form. Numbers are normalized to E.164
//! before they reach the API, and masked before they are shown in the UI.

/// Normalizes a phone number by removing common formatting characters.
pub(crate) fn normalize_phone_number(phone: &str) -> String {
    phone
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '+')
        .collect()
}

/// Checks that a phone number is valid E.164: a `+`, a non-zero leading digit,
/// and at most fifteen digits total.
pub(crate) fn is_valid_phone(phone: &str) -> bool {
    let normalized = normalize_phone_number(phone);
    let Some(digits) = normalized.strip_prefix('+') else {
        return false;
    };
    if !(2..=15).contains(&digits.len()) {
        return false;
    }
    if !digits.chars().all(|c| c.is_ascii_digit()) {
        return false;
    }
    !digits.starts_with('0')
}

/// Masks a phone number for display (e.g. `+25****5678`), keeping only the
/// leading characters and the last four digits visible.
pub(crate) fn mask_phone_number(phone: &str) -> String {
    let normalized = normalize_phone_number(phone);
    if normalized.len() >= 7 {
        format!(
            "{}****{}",
            &normalized[0..3],
            &normalized[normalized.len() - 4..]
        )
    } else {
        "****".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_phone_number() {
        assert_eq!(normalize_phone_number("061-234-5678"), "0612345678");
        assert_eq!(normalize_phone_number("+252 61 234 5678"), "+252612345678");
        assert_eq!(normalize_phone_number("(61) 234-5678"), "612345678");
    }

    #[test]
    fn test_is_valid_phone() {
        assert!(is_valid_phone("+252612345678"));
        assert!(is_valid_phone("+14155552671"));
        assert!(is_valid_phone("+442071838750"));
        assert!(is_valid_phone("+252 61 234 5678")); // Normalized before checking
        assert!(!is_valid_phone("252612345678")); // Missing +
        assert!(!is_valid_phone("+0123456789")); // Invalid country code
        assert!(!is_valid_phone("+1234567890123456")); // Too long
        assert!(!is_valid_phone("+"));
    }

    #[test]
    fn test_mask_phone_number() {
        assert_eq!(mask_phone_number("+252612345678"), "+25****5678");
        assert_eq!(mask_phone_number("+14155552671"), "+14****2671");
        assert_eq!(mask_phone_number("12345"), "****");
    }
}
