use super::tables::{even_value, odd_value, remainder_char};

/// Length of an Italian fiscal code, control character included.
pub const FISCAL_CODE_LENGTH: usize = 16;

/// Compute the control character for the first 15 characters of a fiscal code.
///
/// Returns `None` if `prefix` is not exactly 15 bytes long or contains a
/// character outside `0-9`/`A-Z`. Lowercase letters are not accepted.
pub fn fiscal_code_control_char(prefix: &str) -> Option<char> {
    let bytes = prefix.as_bytes();
    if bytes.len() != FISCAL_CODE_LENGTH - 1 {
        return None;
    }

    let mut total = 0;
    for (index, &c) in bytes.iter().enumerate() {
        // Positions are 1-based: index 0 is the first odd position.
        total += if index % 2 == 1 { even_value(c)? } else { odd_value(c)? };
    }

    remainder_char(total % 26).map(char::from)
}

/// Check whether `value` is a checksum-valid Italian fiscal code.
///
/// The value is taken as-is: no trimming, no case folding.
pub fn is_valid_fiscal_code(value: &str) -> bool {
    if value.len() != FISCAL_CODE_LENGTH {
        return false;
    }

    // Length is in bytes, so a multi-byte character makes the split point
    // fall inside it; that can never be a valid code anyway.
    let Some((prefix, control)) = value.split_at_checked(FISCAL_CODE_LENGTH - 1) else {
        return false;
    };

    match fiscal_code_control_char(prefix) {
        Some(expected) => control.len() == 1 && control.starts_with(expected),
        None => false,
    }
}
