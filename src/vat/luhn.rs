//! Luhn (mod 10) checksum.

/// Fold a doubled digit back into a single digit (`14` → `1 + 4`).
fn fold(doubled: u32) -> u32 {
    doubled / 10 + doubled % 10
}

/// Compute the Luhn checksum of an ASCII digit string.
///
/// Digits are weighted from the rightmost one: even offsets count as-is,
/// odd offsets are doubled and folded. Returns `None` if any character is
/// not an ASCII digit. The caller decides what sum is acceptable.
pub fn luhn_checksum(digits: &str) -> Option<u32> {
    digits
        .bytes()
        .rev()
        .enumerate()
        .try_fold(0u32, |sum, (offset, c)| {
            if !c.is_ascii_digit() {
                return None;
            }
            let digit = u32::from(c - b'0');
            let weighted = if offset % 2 == 1 { fold(digit * 2) } else { digit };
            Some(sum + weighted)
        })
}
