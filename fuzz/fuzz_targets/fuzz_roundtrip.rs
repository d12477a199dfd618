#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(s) = std::str::from_utf8(data) else {
        return;
    };
    let Ok(table) = spar::parse_table(s) else {
        return;
    };
    let yaml = spar::serialize_table(&table).expect("parsed tables must serialize");
    let back = spar::parse_table(&yaml).expect("serialized tables must parse");
    assert_eq!(back, table);
});
