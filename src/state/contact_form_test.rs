use super::*;

fn filled() -> ContactForm {
    ContactForm {
        name: "Jane".to_owned(),
        email: "jane@x.com".to_owned(),
        message: "Hello".to_owned(),
        ..ContactForm::default()
    }
}

// =============================================================
// Defaults
// =============================================================

#[test]
fn default_is_idle_and_empty() {
    let form = ContactForm::default();
    assert_eq!(form.status, SubmitStatus::Idle);
    assert!(form.name.is_empty());
    assert!(form.email.is_empty());
    assert!(form.message.is_empty());
}

#[test]
fn status_variants_are_distinct() {
    assert_ne!(SubmitStatus::Idle, SubmitStatus::Submitting);
    assert_ne!(SubmitStatus::Idle, SubmitStatus::Submitted);
    assert_ne!(SubmitStatus::Submitting, SubmitStatus::Submitted);
}

// =============================================================
// Required fields
// =============================================================

#[test]
fn complete_requires_all_three_fields() {
    assert!(filled().is_complete());

    for blank in ["name", "email", "message"] {
        let mut form = filled();
        match blank {
            "name" => form.name.clear(),
            "email" => form.email.clear(),
            _ => form.message.clear(),
        }
        assert!(!form.is_complete(), "{blank} empty should be incomplete");
    }
}

#[test]
fn whitespace_only_fields_are_incomplete() {
    let mut form = filled();
    form.message = "   ".to_owned();
    assert!(!form.is_complete());
}

#[test]
fn begin_submit_rejects_incomplete_form() {
    let mut form = filled();
    form.email.clear();
    assert!(form.begin_submit().is_none());
    assert_eq!(form.status, SubmitStatus::Idle);
    // Untouched fields keep their values on rejection.
    assert_eq!(form.name, "Jane");
    assert_eq!(form.message, "Hello");
}

// =============================================================
// Happy path: idle -> submitting -> submitted -> idle
// =============================================================

#[test]
fn begin_submit_clears_fields_and_enters_submitting() {
    let mut form = filled();
    let token = form.begin_submit();
    assert!(token.is_some());
    assert_eq!(form.status, SubmitStatus::Submitting);
    assert!(form.name.is_empty());
    assert!(form.email.is_empty());
    assert!(form.message.is_empty());
}

#[test]
fn full_cycle_returns_to_idle() {
    let mut form = filled();
    let Some(token) = form.begin_submit() else {
        unreachable!("complete form must submit");
    };
    assert!(form.complete_submit(token));
    assert_eq!(form.status, SubmitStatus::Submitted);
    assert!(form.dismiss(token));
    assert_eq!(form.status, SubmitStatus::Idle);
}

#[test]
fn begin_submit_rejected_while_submitting() {
    let mut form = filled();
    let _ = form.begin_submit();
    form.name = "Jane".to_owned();
    form.email = "jane@x.com".to_owned();
    form.message = "Hello".to_owned();
    assert!(form.begin_submit().is_none());
    assert_eq!(form.status, SubmitStatus::Submitting);
}

// =============================================================
// Stale-token suppression
// =============================================================

#[test]
fn stale_token_cannot_complete_a_later_submission() {
    let mut form = filled();
    let Some(first) = form.begin_submit() else {
        unreachable!("complete form must submit");
    };
    assert!(form.complete_submit(first));
    assert!(form.dismiss(first));

    // Second submission gets a fresh token; the old one is inert.
    form.name = "Jane".to_owned();
    form.email = "jane@x.com".to_owned();
    form.message = "Again".to_owned();
    let Some(second) = form.begin_submit() else {
        unreachable!("complete form must submit");
    };
    assert_ne!(first, second);
    assert!(!form.complete_submit(first));
    assert_eq!(form.status, SubmitStatus::Submitting);
    assert!(!form.dismiss(first));
    assert!(form.complete_submit(second));
}

#[test]
fn complete_submit_requires_submitting_state() {
    let mut form = filled();
    assert!(!form.complete_submit(1));
    let Some(token) = form.begin_submit() else {
        unreachable!("complete form must submit");
    };
    assert!(form.complete_submit(token));
    // Already submitted; a repeat of the same timer is a no-op.
    assert!(!form.complete_submit(token));
    assert_eq!(form.status, SubmitStatus::Submitted);
}

#[test]
fn dismiss_requires_submitted_state() {
    let mut form = filled();
    let Some(token) = form.begin_submit() else {
        unreachable!("complete form must submit");
    };
    // Dismiss timer firing before completion is ignored.
    assert!(!form.dismiss(token));
    assert_eq!(form.status, SubmitStatus::Submitting);
}
