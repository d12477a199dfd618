#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        if let Ok(table) = spar::parse_table(s) {
            let _ = spar::validate_table(&table);
        }
    }
});
