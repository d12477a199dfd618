#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use spar::{Field, Wizard};

#[derive(Debug, Arbitrary)]
enum Op {
    Set { field: u8, value: String },
    Reset,
}

fuzz_target!(|ops: Vec<Op>| {
    let mut wizard = Wizard::new();
    for op in ops {
        match op {
            Op::Set { field, value } => {
                let field = Field::ALL[field as usize % Field::ALL.len()];
                let before = wizard.snapshot();
                if wizard.set_field(field, &value).is_err() {
                    assert_eq!(wizard.snapshot(), before);
                }
            }
            Op::Reset => {
                wizard.reset();
            }
        }
        let snap = wizard.snapshot();
        assert_eq!(snap.availability, spar::availability(&snap.state));
        assert!(!matches!(snap.result, spar::Resolution::Unmapped { .. }));
    }
});
