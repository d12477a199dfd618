use spar::{Field, Snapshot, Wizard};
use tracing_subscriber::EnvFilter;

/// Route crate logs to the test harness. Honors `RUST_LOG`.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Apply `(field, value)` steps in order, panicking on the first rejection.
pub fn walk(wizard: &mut Wizard, steps: &[(Field, &str)]) -> Snapshot {
    init_tracing();
    let mut last = wizard.snapshot();
    for (field, value) in steps {
        last = wizard
            .set_field(*field, value)
            .unwrap_or_else(|e| panic!("step {}={} rejected: {}", field, value, e));
    }
    last
}

/// A complete Path A walk.
pub fn path_a(function: &'static str, aux: &'static str, thickness: &'static str) -> Vec<(Field, &'static str)> {
    vec![
        (Field::Series, "80"),
        (Field::Device, "8400"),
        (Field::Function, function),
        (Field::AuxLatch, aux),
        (Field::Thickness, thickness),
    ]
}

/// A complete Path B walk.
pub fn path_b(thickness: &'static str) -> Vec<(Field, &'static str)> {
    vec![
        (Field::Series, "80"),
        (Field::Device, "8500"),
        (Field::Thickness, thickness),
    ]
}
