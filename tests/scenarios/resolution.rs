use spar::*;

use super::common::{path_a, path_b, walk};

#[test]
fn exit_only_with_aux_latch_at_two_inches() {
    let mut wizard = Wizard::new();
    let snap = walk(&mut wizard, &path_a("exit_only", "yes", "2"));
    assert_eq!(snap.result.code(), Some("SPAR10091"));
}

#[test]
fn exit_only_with_aux_latch_at_two_nine_sixteenths() {
    let mut wizard = Wizard::new();
    let snap = walk(&mut wizard, &path_a("exit_only", "yes", "2-9/16"));
    assert_eq!(snap.result.code(), Some("SPAR10068"));
}

#[test]
fn rim_exit_fixes_function_and_resolves() {
    let mut wizard = Wizard::new();
    let snap = walk(&mut wizard, &path_b("2"));
    assert_eq!(snap.state.function, Some(Function::AllOther));
    assert_eq!(snap.result.code(), Some("SPAR10080"));
}

#[test]
fn all_other_without_aux_latch_at_two_nine_sixteenths() {
    let mut wizard = Wizard::new();
    let snap = walk(&mut wizard, &path_a("all_other", "no", "2-9/16"));
    assert_eq!(snap.result.code(), Some("SPAR10063"));
}

#[test]
fn every_path_a_combination_resolves() {
    for function in Field::Function.domain() {
        for aux in Field::AuxLatch.domain() {
            for thickness in Field::Thickness.domain() {
                let mut wizard = Wizard::new();
                let snap = walk(&mut wizard, &path_a(function, aux, thickness));
                assert!(
                    snap.result.is_resolved(),
                    "no code for 8400/{}/{}/{}: {:?}",
                    function,
                    aux,
                    thickness,
                    snap.result
                );
            }
        }
    }
}

#[test]
fn every_path_b_combination_resolves() {
    for thickness in Field::Thickness.domain() {
        let mut wizard = Wizard::new();
        let snap = walk(&mut wizard, &path_b(thickness));
        assert!(snap.result.is_resolved(), "no code for 8500/{}", thickness);
    }
}

#[test]
fn result_is_absent_until_the_last_answer() {
    let mut wizard = Wizard::new();
    let steps = path_a("exit_only", "no", "2");
    let (last, init) = steps.split_last().unwrap();
    let snap = walk(&mut wizard, init);
    assert_eq!(
        snap.result,
        Resolution::Incomplete {
            missing: vec![Field::Thickness]
        }
    );
    let snap = wizard.set_field(last.0, last.1).unwrap();
    assert!(snap.result.is_resolved());
}

#[test]
fn resolve_is_idempotent() {
    let mut wizard = Wizard::new();
    walk(&mut wizard, &path_a("all_other", "yes", "2"));
    let first = resolve(wizard.state(), wizard.table());
    let second = resolve(wizard.state(), wizard.table());
    assert_eq!(first, second);
    assert_eq!(&first, wizard.result());
}

#[test]
fn legacy_edition_uses_descriptive_codes() {
    let mut wizard = Wizard::builder().edition(Edition::Legacy).build();
    let snap = walk(&mut wizard, &path_a("exit_only", "no", "2-9/16"));
    assert_eq!(snap.result.code(), Some("SPAR-80-8400-10-N106-T256"));
}
