use super::luhn::luhn_checksum;

/// Length of an Italian VAT number, check digit included.
pub const VAT_NUMBER_LENGTH: usize = 11;

/// Check whether `value` is a checksum-valid Italian VAT number.
///
/// The value must be exactly 11 ASCII digits (no spaces, no `IT` prefix)
/// and its Luhn checksum must be a non-zero multiple of 10. The non-zero
/// rule rejects `00000000000`.
pub fn is_valid_vat_number(value: &str) -> bool {
    if value.len() != VAT_NUMBER_LENGTH {
        return false;
    }

    match luhn_checksum(value) {
        Some(sum) => sum != 0 && sum % 10 == 0,
        None => false,
    }
}

/// Compute the check digit completing a 10-digit prefix into a valid VAT number.
///
/// Returns `None` if `prefix` is not exactly 10 ASCII digits, or if no
/// completion exists (the all-zero prefix).
pub fn vat_number_check_digit(prefix: &str) -> Option<char> {
    if prefix.len() != VAT_NUMBER_LENGTH - 1 {
        return None;
    }

    // Appending a digit shifts every prefix digit one offset to the left,
    // so weight the prefix as if the check digit were already there.
    let shifted = luhn_checksum(&format!("{prefix}0"))?;
    if shifted == 0 {
        return None;
    }

    let check = (10 - shifted % 10) % 10;
    char::from_digit(check, 10)
}
