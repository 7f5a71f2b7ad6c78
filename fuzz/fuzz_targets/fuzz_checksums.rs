#![no_main]

use fiscale::fiscal_code::*;
use fiscale::vat::*;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        // A string can never be both kinds of fiscal data.
        assert!(!(is_valid_fiscal_code(s) && is_valid_vat_number(s)));

        if let Some(control) = fiscal_code_control_char(s) {
            assert!(is_valid_fiscal_code(&format!("{s}{control}")));
        }
        if let Some(digit) = vat_number_check_digit(s) {
            assert!(is_valid_vat_number(&format!("{s}{digit}")));
        }
    }
});
