use spar::*;

use super::common::init_tracing;

const FULL: &str = r#"
edition: custom
codes:
  "80":
    "8400":
      exit_only:
        "yes":
          "2": SPAR20001
          "2-9/16": SPAR20002
        "no":
          "2": SPAR20003
          "2-9/16": SPAR20004
      all_other:
        "yes":
          "2": SPAR20005
          "2-9/16": SPAR20006
        "no":
          "2": SPAR20007
          "2-9/16": SPAR20008
    "8500":
      all_other:
        "2": SPAR20009
        "2-9/16": SPAR20010
"#;

#[test]
fn load_accepts_a_complete_table() {
    let loaded = load(FULL).expect("complete table should load");
    assert_eq!(loaded.table.len(), 10);
    assert!(loaded.warnings.is_empty(), "{:?}", loaded.warnings);
}

#[test]
fn wizard_from_yaml_resolves_against_loaded_codes() {
    let mut wizard = Wizard::from_yaml(FULL).expect("complete table should load");
    wizard.set_field(Field::Series, "80").unwrap();
    wizard.set_field(Field::Device, "8500").unwrap();
    let snap = wizard.set_field(Field::Thickness, "2-9/16").unwrap();
    assert_eq!(snap.result.code(), Some("SPAR20010"));
}

#[test]
fn load_rejects_a_table_with_gaps() {
    let yaml = r#"
codes:
  "80":
    "8500":
      all_other:
        "2": SPAR10080
"#;
    let errors = load(yaml).unwrap_err();
    assert_eq!(errors.len(), 9);
    assert!(errors.iter().all(|e| matches!(e, LoadError::Validation(v) if v.rule == "T-001")));
}

#[test]
fn load_reports_parse_errors() {
    let errors = load("codes: [1, 2]").unwrap_err();
    assert!(matches!(&errors[..], [LoadError::Parse(_)]));
}

#[test]
fn gap_in_table_resolves_to_unmapped() {
    init_tracing();
    let yaml = r#"
codes:
  "80":
    "8500":
      all_other:
        "2": SPAR10080
"#;
    let table = parse_table(yaml).unwrap();
    let mut wizard = Wizard::builder().table(table).build();
    wizard.set_field(Field::Series, "80").unwrap();
    wizard.set_field(Field::Device, "8500").unwrap();
    let snap = wizard.set_field(Field::Thickness, "2-9/16").unwrap();
    assert!(matches!(snap.result, Resolution::Unmapped { .. }));
    assert_eq!(snap.result.code(), None);
}

#[test]
fn serialized_table_reloads_with_identical_codes() {
    let loaded = load(FULL).unwrap();
    let yaml = serialize_table(&loaded.table).unwrap();
    let again = load(&yaml).unwrap();
    assert_eq!(again.table, loaded.table);
}
