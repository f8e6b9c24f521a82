#![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic, clippy::float_cmp)]
//! Integration tests for the `ProfileFormState` transitions seen from a front end.

use profile_setup_core::{
    CompletionProgress, CoreError, FocusedField, FormField, NavigationPhase, ProfileFormState,
    ProfileSnapshot,
};
use proptest::prelude::*;

/// 按前端的输入顺序回放编辑，得到表单状态
fn form_after(edits: &[Edit]) -> ProfileFormState {
    let mut form = ProfileFormState::new();
    for edit in edits {
        apply(&mut form, edit);
    }
    form
}

// ===== Scenarios =====

#[test]
fn empty_form_cannot_continue() {
    let form = form_after(&[]);
    assert_eq!(form.completion_progress().fraction(), 0.0);
    assert!(!form.continue_enabled());
}

#[test]
fn name_only_is_a_third() {
    let form = form_after(&[Edit::Name("Ann".into())]);
    assert_eq!(form.completion_progress().fraction(), 0.33);
    assert!(!form.continue_enabled());
}

#[test]
fn name_and_age_reach_threshold() {
    let mut form = form_after(&[Edit::Name("Ann".into()), Edit::Age("30".into())]);
    assert_eq!(form.completion_progress().fraction(), 0.66);
    assert!(form.continue_enabled());

    let snapshot = form.request_continue().expect("eligible form should navigate");
    assert_eq!(snapshot, ProfileSnapshot::new("Ann", Some(30)));
}

#[test]
fn verification_alone_is_not_enough() {
    let form = form_after(&[Edit::Toggle]);
    assert_eq!(form.completion_progress().fraction(), 0.34);
    assert!(!form.continue_enabled());
}

#[test]
fn verification_with_one_field_unlocks_continue() {
    for edits in [
        [Edit::Name("Ann".into()), Edit::Toggle],
        [Edit::Age("30".into()), Edit::Toggle],
    ] {
        let form = form_after(&edits);
        assert_eq!(form.completion_progress().points(), 67);
        assert!(form.continue_enabled());
    }
}

#[test]
fn full_profile_is_complete() {
    let form = form_after(&[Edit::Name("Ann".into()), Edit::Age("30".into()), Edit::Toggle]);
    assert_eq!(form.completion_progress(), CompletionProgress::COMPLETE);
    assert_eq!(form.completion_progress().fraction(), 1.0);
}

#[test]
fn snapshot_survives_later_edits() {
    let mut form = form_after(&[Edit::Name("Ann".into()), Edit::Age("30".into())]);
    let snapshot = form.request_continue().unwrap();

    form.set_name("Changed");
    form.set_age_text("99");
    form.toggle_verified();

    assert_eq!(snapshot.name(), "Ann");
    assert_eq!(snapshot.age(), Some(30));
}

#[test]
fn repeated_ineligible_continue_leaves_state_alone() {
    let mut form = form_after(&[Edit::Age("7".into())]);
    form.focus(FormField::Age);
    let before = form.clone();

    for _ in 0..5 {
        assert!(matches!(
            form.request_continue(),
            Err(CoreError::NotEligible { .. })
        ));
    }

    assert_eq!(form, before);
    assert_eq!(form.navigation_phase(), NavigationPhase::Editing);
}

#[test]
fn keyboard_walkthrough() {
    let mut form = ProfileFormState::new();

    form.focus(FormField::Name);
    form.set_name("Ann");
    form.submit_from_name();
    assert_eq!(form.focused_field(), FocusedField::Age);

    form.set_age_text("30");
    form.submit_from_age();
    assert_eq!(form.focused_field(), FocusedField::None);

    // 焦点已清除时再提交不会有效果
    form.submit_from_age();
    form.submit_from_name();
    assert_eq!(form.focused_field(), FocusedField::None);

    assert!(form.request_continue().is_ok());
}

// ===== Properties =====

#[derive(Debug, Clone)]
enum Edit {
    Name(String),
    Age(String),
    Toggle,
    Focus(bool),
    ClearFocus,
    SubmitName,
    SubmitAge,
}

fn edit_strategy() -> impl Strategy<Value = Edit> {
    prop_oneof![
        "[a-zA-Z ]{0,6}".prop_map(Edit::Name),
        "[0-9a-z-]{0,4}".prop_map(Edit::Age),
        Just(Edit::Toggle),
        any::<bool>().prop_map(Edit::Focus),
        Just(Edit::ClearFocus),
        Just(Edit::SubmitName),
        Just(Edit::SubmitAge),
    ]
}

fn apply(form: &mut ProfileFormState, edit: &Edit) {
    match edit {
        Edit::Name(v) => form.set_name(v.clone()),
        Edit::Age(v) => form.set_age_text(v.clone()),
        Edit::Toggle => form.toggle_verified(),
        Edit::Focus(name) => form.focus(if *name { FormField::Name } else { FormField::Age }),
        Edit::ClearFocus => form.clear_focus(),
        Edit::SubmitName => form.submit_from_name(),
        Edit::SubmitAge => form.submit_from_age(),
    }
}

fn expected_points(form: &ProfileFormState) -> u8 {
    let mut points = 0;
    if !form.name().is_empty() {
        points += 33;
    }
    if !form.age_text().is_empty() {
        points += 33;
    }
    if form.is_verified() {
        points += 34;
    }
    points
}

proptest! {
    #[test]
    fn progress_is_weighted_sum_of_predicates(edits in prop::collection::vec(edit_strategy(), 0..24)) {
        let mut form = ProfileFormState::new();
        for edit in &edits {
            apply(&mut form, edit);
            prop_assert_eq!(form.completion_progress().points(), expected_points(&form));
        }
    }

    #[test]
    fn continue_succeeds_iff_threshold_met(edits in prop::collection::vec(edit_strategy(), 0..24)) {
        let mut form = form_after(&edits);

        let eligible = form.completion_progress().points() >= 66;
        let before = form.clone();
        let result = form.request_continue();

        prop_assert_eq!(result.is_ok(), eligible);
        if !eligible {
            prop_assert_eq!(form, before);
        }
    }

    #[test]
    fn progress_does_not_depend_on_edit_order(
        name in "[a-z]{0,3}",
        age in "[0-9]{0,3}",
        verified in any::<bool>(),
    ) {
        let mut forward = ProfileFormState::new();
        forward.set_name(name.clone());
        forward.set_age_text(age.clone());
        if verified {
            forward.toggle_verified();
        }

        let mut backward = ProfileFormState::new();
        if verified {
            backward.toggle_verified();
        }
        backward.set_age_text(age);
        backward.set_name(name);

        prop_assert_eq!(forward.completion_progress(), backward.completion_progress());
    }
}
