use spar::*;

use super::common::{path_a, walk};

#[test]
fn switching_to_rim_exit_clears_path_a_answers() {
    let mut wizard = Wizard::new();
    let before = walk(&mut wizard, &path_a("exit_only", "yes", "2"));
    assert!(before.result.is_resolved());

    let snap = wizard.set_field(Field::Device, "8500").unwrap();
    assert_eq!(snap.state.function, Some(Function::AllOther));
    assert_eq!(snap.state.aux_latch, None);
    assert_eq!(snap.state.thickness, None);
    assert_eq!(snap.result.code(), None);

    let snap = wizard.set_field(Field::Thickness, "2").unwrap();
    assert_eq!(snap.result.code(), Some("SPAR10080"));
}

#[test]
fn switching_back_to_cvr_exit_asks_for_function_again() {
    let mut wizard = Wizard::new();
    walk(
        &mut wizard,
        &[
            (Field::Series, "80"),
            (Field::Device, "8500"),
            (Field::Thickness, "2-9/16"),
        ],
    );
    let snap = wizard.set_field(Field::Device, "8400").unwrap();
    assert_eq!(snap.state.function, None);
    assert_eq!(snap.state.thickness, None);
    assert_eq!(
        snap.availability.fields(),
        vec![Field::Series, Field::Device, Field::Function]
    );
}

#[test]
fn changing_function_clears_aux_latch_and_thickness() {
    let mut wizard = Wizard::new();
    walk(&mut wizard, &path_a("exit_only", "yes", "2"));
    let snap = wizard.set_field(Field::Function, "all_other").unwrap();
    assert_eq!(snap.state.aux_latch, None);
    assert_eq!(snap.state.thickness, None);
    assert!(!snap.availability.thickness);
}

#[test]
fn changing_thickness_keeps_upstream_answers() {
    let mut wizard = Wizard::new();
    walk(&mut wizard, &path_a("exit_only", "yes", "2"));
    let snap = wizard.set_field(Field::Thickness, "2-9/16").unwrap();
    assert_eq!(snap.state.aux_latch, Some(AuxLatch::Yes));
    assert_eq!(snap.result.code(), Some("SPAR10068"));
}

#[test]
fn reset_returns_to_initial_availability() {
    let initial = Wizard::new().snapshot();
    let mut wizard = Wizard::new();
    walk(&mut wizard, &path_a("all_other", "no", "2"));
    let snap = wizard.reset();
    assert_eq!(snap, initial);
    assert_eq!(snap.availability.fields(), vec![Field::Series]);
    assert_eq!(snap.result.code(), None);
    assert!(!snap.can_restart());
}
