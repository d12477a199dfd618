use spar::*;

fn assert_unavailable(result: Result<Snapshot, WizardError>, field: Field) {
    match result {
        Err(WizardError::InvalidValue {
            field: f, reason, ..
        }) => {
            assert_eq!(f, field);
            assert_eq!(reason, RejectReason::Unavailable);
        }
        other => panic!("expected unavailable rejection, got {:?}", other),
    }
}

#[test]
fn aux_latch_rejected_without_device() {
    let mut wizard = Wizard::new();
    wizard.set_field(Field::Series, "80").unwrap();
    let before = wizard.snapshot();
    assert_unavailable(wizard.set_field(Field::AuxLatch, "yes"), Field::AuxLatch);
    assert_eq!(wizard.snapshot(), before);
}

#[test]
fn aux_latch_rejected_on_rim_exit() {
    let mut wizard = Wizard::new();
    wizard.set_field(Field::Series, "80").unwrap();
    wizard.set_field(Field::Device, "8500").unwrap();
    let before = wizard.snapshot();
    assert_unavailable(wizard.set_field(Field::AuxLatch, "yes"), Field::AuxLatch);
    assert_eq!(wizard.snapshot(), before);
}

#[test]
fn function_cannot_be_chosen_on_rim_exit() {
    let mut wizard = Wizard::new();
    wizard.set_field(Field::Series, "80").unwrap();
    wizard.set_field(Field::Device, "8500").unwrap();
    assert_unavailable(
        wizard.set_field(Field::Function, "exit_only"),
        Field::Function,
    );
    assert_eq!(wizard.state().function, Some(Function::AllOther));
}

#[test]
fn device_rejected_before_series() {
    let mut wizard = Wizard::new();
    assert_unavailable(wizard.set_field(Field::Device, "8400"), Field::Device);
}

#[test]
fn out_of_domain_values_leave_state_unchanged() {
    let mut wizard = Wizard::new();
    wizard.set_field(Field::Series, "80").unwrap();
    let before = wizard.snapshot();
    for (field, value) in [
        (Field::Device, "8600"),
        (Field::Device, ""),
        (Field::Series, "80 "),
    ] {
        let err = wizard.set_field(field, value).unwrap_err();
        assert!(matches!(
            err,
            WizardError::InvalidValue {
                reason: RejectReason::OutOfDomain,
                ..
            }
        ));
    }
    assert_eq!(wizard.snapshot(), before);
}
