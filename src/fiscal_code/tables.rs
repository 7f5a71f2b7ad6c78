//! Character conversion tables of the codice fiscale control algorithm
//! (DM 23/12/1976, Allegato 4).

/// Values of odd-positioned letters `A..=Z`.
///
/// Digits share the values of the first ten letters (`0` = `A`, `1` = `B`, ...).
static ODD_LETTERS: [u32; 26] = [
    1, 0, 5, 7, 9, 13, 15, 17, 19, 21, // A-J
    2, 4, 18, 20, 11, 3, 6, 8, 12, 14, // K-T
    16, 10, 22, 25, 24, 23, // U-Z
];

/// Value of a character at an odd (1-based) position, `None` if it is not
/// an uppercase ASCII letter or a digit.
pub(crate) fn odd_value(c: u8) -> Option<u32> {
    match c {
        b'0'..=b'9' => Some(ODD_LETTERS[usize::from(c - b'0')]),
        b'A'..=b'Z' => Some(ODD_LETTERS[usize::from(c - b'A')]),
        _ => None,
    }
}

/// Value of a character at an even (1-based) position: digits count as
/// themselves, letters by alphabet index.
pub(crate) fn even_value(c: u8) -> Option<u32> {
    match c {
        b'0'..=b'9' => Some(u32::from(c - b'0')),
        b'A'..=b'Z' => Some(u32::from(c - b'A')),
        _ => None,
    }
}

/// Control character for a weighted sum remainder (`0` = `A` ... `25` = `Z`).
pub(crate) fn remainder_char(remainder: u32) -> Option<u8> {
    u8::try_from(remainder)
        .ok()
        .filter(|r| *r < 26)
        .map(|r| b'A' + r)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn odd_digits_match_first_ten_letters() {
        for (digit, letter) in (b'0'..=b'9').zip(b'A'..=b'J') {
            assert_eq!(odd_value(digit), odd_value(letter));
        }
    }

    #[test]
    fn odd_table_spot_checks() {
        assert_eq!(odd_value(b'0'), Some(1));
        assert_eq!(odd_value(b'1'), Some(0));
        assert_eq!(odd_value(b'5'), Some(13));
        assert_eq!(odd_value(b'M'), Some(18));
        assert_eq!(odd_value(b'X'), Some(25));
        assert_eq!(odd_value(b'Z'), Some(23));
    }

    #[test]
    fn odd_table_is_a_permutation() {
        let mut seen: Vec<u32> = (b'A'..=b'Z').filter_map(odd_value).collect();
        seen.sort_unstable();
        assert_eq!(seen, (0..26).collect::<Vec<_>>());
    }

    #[test]
    fn even_table_collapses_digits_onto_letters() {
        assert_eq!(even_value(b'0'), Some(0));
        assert_eq!(even_value(b'A'), Some(0));
        assert_eq!(even_value(b'9'), Some(9));
        assert_eq!(even_value(b'J'), Some(9));
        assert_eq!(even_value(b'Z'), Some(25));
    }

    #[test]
    fn lookup_misses() {
        for c in [b'a', b'z', b' ', b'-', b'.', 0xC3] {
            assert_eq!(odd_value(c), None);
            assert_eq!(even_value(c), None);
        }
    }

    #[test]
    fn remainders() {
        assert_eq!(remainder_char(0), Some(b'A'));
        assert_eq!(remainder_char(18), Some(b'S'));
        assert_eq!(remainder_char(25), Some(b'Z'));
        assert_eq!(remainder_char(26), None);
        assert_eq!(remainder_char(u32::MAX), None);
    }
}
