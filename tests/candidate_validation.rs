//! Candidate registration validation tests
//!
//! The registration wizard validates each step before advancing and the
//! whole draft again on submit; the passport number must be typed twice and
//! the accuracy declaration ticked. The confirmation fields never leave the
//! browser.

use mcm_console::app::candidate::{CandidateDraft, STEP_COUNT};

fn complete_draft() -> CandidateDraft {
    CandidateDraft {
        appointment_location: "Accra Central".into(),
        country: "1".into(),
        city: "4".into(),
        country_traveling_to: "7".into(),
        first_name: "Ama".into(),
        last_name: "Mensah".into(),
        dob: "1994-03-12".into(),
        nationality: "Ghanaian".into(),
        gender: "FEMALE".into(),
        marital_status: "SINGLE".into(),
        passport_number: "G1234567".into(),
        confirm_passport: "G1234567".into(),
        passport_issue_date: "2022-01-05".into(),
        passport_issue_place: "Accra".into(),
        passport_expiry_date: "2032-01-04".into(),
        visa_type: "WORK".into(),
        email: "ama@example.com".into(),
        phone: "+233201234567".into(),
        national_id: "GHA-0001".into(),
        position_applied: "Driver".into(),
        confirm_info: true,
    }
}

/// An empty draft flags every step-1 field.
#[test]
fn empty_step_one_flags_all_fields() {
    let missing = CandidateDraft::default().validate_step(1);
    assert_eq!(
        missing,
        vec!["appointment_location", "country", "city", "country_traveling_to"]
    );
}

/// A fully filled draft passes every step and the submit check.
#[test]
fn complete_draft_validates_clean() {
    let draft = complete_draft();
    for step in 1..=STEP_COUNT {
        assert!(draft.validate_step(step).is_empty(), "step {step} flagged");
    }
    assert!(draft.validate_all().is_empty());
}

/// A passport confirmation that does not match flags the confirmation
/// field, not the passport itself.
#[test]
fn passport_mismatch_flags_confirmation() {
    let mut draft = complete_draft();
    draft.confirm_passport = "G7654321".into();

    let missing = draft.validate_step(3);
    assert_eq!(missing, vec!["confirm_passport"]);
}

/// The declaration checkbox is required.
#[test]
fn unchecked_declaration_blocks_submit() {
    let mut draft = complete_draft();
    draft.confirm_info = false;

    assert_eq!(draft.validate_step(3), vec!["confirm_info"]);
    assert_eq!(draft.validate_all(), vec!["confirm_info"]);
}

/// Whitespace-only values count as empty.
#[test]
fn whitespace_counts_as_empty() {
    let mut draft = complete_draft();
    draft.first_name = "   ".into();

    assert_eq!(draft.validate_step(2), vec!["first_name"]);
}

/// The multipart body carries every entered field but never the client-only
/// confirmation fields.
#[test]
fn submit_fields_exclude_confirmations() {
    let draft = complete_draft();
    let fields = draft.submit_fields();

    assert_eq!(fields.len(), 19);
    assert!(fields.iter().any(|(k, v)| *k == "passport_number" && v == "G1234567"));
    assert!(fields.iter().all(|(k, _)| *k != "confirm_passport"));
    assert!(fields.iter().all(|(k, _)| *k != "confirm_info"));
}
