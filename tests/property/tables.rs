use proptest::prelude::*;
use spar::*;

/// Strategy for a subset of the reachable keys, each mapped to a bare ID.
fn arb_partial_table() -> impl Strategy<Value = LookupTable> {
    let keys = reachable_keys();
    prop::collection::vec(any::<bool>(), keys.len()).prop_map(move |keep| {
        let rows = keys
            .iter()
            .zip(keep)
            .enumerate()
            .filter(|(_, (_, k))| *k)
            .map(|(i, (key, _))| (*key, format!("SPAR{}", 30000 + i)));
        LookupTable::from_entries(Edition::Custom, rows)
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    // Missing reachable keys are exactly the T-001 errors.
    #[test]
    fn coverage_errors_match_missing_keys(table in arb_partial_table()) {
        let result = validate_table(&table);
        let missing = reachable_keys().iter().filter(|k| table.get(k).is_none()).count();
        prop_assert_eq!(result.errors.len(), missing);
        prop_assert!(result.errors.iter().all(|e| e.rule == "T-001"));
        prop_assert!(result.warnings.is_empty(), "{:?}", result.warnings);
    }

    // serialize → parse preserves every row of any table.
    #[test]
    fn serialized_tables_parse_back(table in arb_partial_table()) {
        let yaml = serialize_table(&table).unwrap();
        let back = parse_table(&yaml).unwrap();
        prop_assert_eq!(back, table);
    }

    // A wizard over a partial table never panics and never invents codes.
    #[test]
    fn partial_tables_resolve_or_report_unmapped(table in arb_partial_table()) {
        for key in reachable_keys() {
            let mut wizard = Wizard::builder().table(table.clone()).build();
            let mut steps = vec![(Field::Series, "80"), (Field::Device, key.device().as_str())];
            if let LookupKey::A { function, aux_latch, thickness, .. } = key {
                steps.push((Field::Function, function.as_str()));
                steps.push((Field::AuxLatch, aux_latch.as_str()));
                steps.push((Field::Thickness, thickness.as_str()));
            } else if let LookupKey::B { thickness, .. } = key {
                steps.push((Field::Thickness, thickness.as_str()));
            }
            let mut last = None;
            for (field, value) in steps {
                last = Some(wizard.set_field(field, value).unwrap());
            }
            let result = last.unwrap().result;
            match table.get(&key) {
                Some(code) => prop_assert_eq!(result.code(), Some(code)),
                None => prop_assert_eq!(result, Resolution::Unmapped { key }),
            }
        }
    }
}
