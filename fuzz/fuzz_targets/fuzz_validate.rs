#![no_main]

use fiscale::core::*;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        // Must not panic, and well-typed input never errors.
        let outcome = validate_fiscal_data(s, &ItalianFiscalData::new());
        assert!(outcome.is_ok());
    }
});
