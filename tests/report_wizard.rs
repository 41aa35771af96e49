//! Medical report wizard integration tests
//!
//! The wizard persists progressively: every Next saves the current step's
//! field subset before advancing, creating the report on the first save and
//! patching it afterwards. These tests drive the state machine through a
//! complete examination without any network, checking the plan and payload
//! it hands the page at each stage.

use mcm_console::app::report::{NextAction, ReportDraft, ReportStep, SavePlan};

fn filled_identify(draft: &mut ReportDraft) {
    draft.fields.booking_id = "42".into();
    draft.fields.report_expiry_date = "2026-11-30".into();
    draft.fields.ghc_code = "GHC-0042".into();
    draft.fields.gcc_slip_no = "SLIP-77".into();
}

/// Step 1 with required fields empty must block without producing a plan.
#[test]
fn identify_step_blocks_on_missing_required_fields() {
    let draft = ReportDraft::new();

    match draft.prepare_next() {
        NextAction::Blocked(missing) => {
            assert!(missing.contains(&"booking_id"));
            assert!(missing.contains(&"report_expiry_date"));
            assert!(missing.contains(&"ghc_code"));
            assert!(missing.contains(&"gcc_slip_no"));
        }
        other => panic!("expected Blocked, got {other:?}"),
    }
}

/// Clearing the systemic defaults blocks the step and names both fields so
/// the form can flag them.
#[test]
fn cleared_systemic_fields_are_flagged() {
    let mut draft = ReportDraft::new();
    filled_identify(&mut draft);
    draft.commit_next(Some(5));
    assert_eq!(draft.step, ReportStep::Systemic);

    draft.fields.system_cardiovascular.clear();
    draft.fields.system_respiratory = "  ".into();

    match draft.prepare_next() {
        NextAction::Blocked(missing) => {
            assert_eq!(missing, vec!["system_cardiovascular", "system_respiratory"]);
        }
        other => panic!("expected Blocked, got {other:?}"),
    }
}

/// The first successful save creates; every later save patches the same id.
#[test]
fn first_save_creates_then_updates() {
    let mut draft = ReportDraft::new();
    filled_identify(&mut draft);

    match draft.prepare_next() {
        NextAction::Save { plan, finishing, .. } => {
            assert_eq!(plan, SavePlan::Create);
            assert!(!finishing);
        }
        other => panic!("expected Save, got {other:?}"),
    }

    // Backend assigned id 9001 for the create
    draft.commit_next(Some(9001));
    assert_eq!(draft.report_id, Some(9001));
    assert_eq!(draft.step, ReportStep::Systemic);

    match draft.prepare_next() {
        NextAction::Save { plan, .. } => assert_eq!(plan, SavePlan::Update(9001)),
        other => panic!("expected Save, got {other:?}"),
    }
}

/// Each step's payload carries only its own field group.
#[test]
fn step_payloads_are_disjoint() {
    let mut draft = ReportDraft::new();
    filled_identify(&mut draft);

    let identify = draft.step_payload();
    assert_eq!(identify["booking_id"], "42");
    assert!(identify.get("system_cardiovascular").is_none());
    assert!(identify.get("blood_group").is_none());

    draft.commit_next(Some(1));
    let systemic = draft.step_payload();
    assert_eq!(systemic["system_cardiovascular"], "NAD");
    assert!(systemic.get("booking_id").is_none());
    assert!(systemic.get("fit_status").is_none());
}

/// A full pass through all five steps lands in the terminal state, with the
/// final save marked as finishing.
#[test]
fn full_run_reaches_submitted() {
    let mut draft = ReportDraft::new();
    filled_identify(&mut draft);
    draft.fields.blood_group = "O+".into();
    draft.fields.blood_haemoglobin = "14.1".into();

    let mut assigned = Some(7);
    for _ in 0..ReportStep::COUNT {
        let finishing_step = draft.step == ReportStep::FinalAssessment;
        match draft.prepare_next() {
            NextAction::Save { finishing, .. } => {
                assert_eq!(finishing, finishing_step);
            }
            other => panic!("blocked mid-run at {:?}: {other:?}", draft.step),
        }
        draft.commit_next(assigned.take());
    }

    assert_eq!(draft.step, ReportStep::Submitted);
    assert_eq!(draft.report_id, Some(7));
}

/// Previous never saves and never blocks, even with empty fields.
#[test]
fn back_steps_without_validation() {
    let mut draft = ReportDraft::new();
    filled_identify(&mut draft);
    draft.commit_next(Some(3));
    assert_eq!(draft.step, ReportStep::Systemic);

    draft.fields.system_cardiovascular.clear();
    draft.back();
    assert_eq!(draft.step, ReportStep::Identify);

    // Backing off the first step is a no-op
    draft.back();
    assert_eq!(draft.step, ReportStep::Identify);
}

/// BMI is derived from height and weight, to two decimals, and cleared when
/// either input stops being a positive number.
#[test]
fn bmi_follows_height_and_weight() {
    let mut draft = ReportDraft::new();

    draft.set_height("1.80".into());
    assert_eq!(draft.fields.bmi, "");

    draft.set_weight("81".into());
    assert_eq!(draft.fields.bmi, "25.00");

    draft.set_weight("not a number".into());
    assert_eq!(draft.fields.bmi, "");

    draft.set_weight("-50".into());
    assert_eq!(draft.fields.bmi, "");
}

/// A backend snapshot refills the fields, coercing numeric values to their
/// display strings and ignoring keys the form does not know.
#[test]
fn snapshot_refills_fields() {
    let snapshot = serde_json::json!({
        "booking_id": 42,
        "ghc_code": "GHC-0042",
        "blood_group": "AB-",
        "created_at": "2026-08-01T09:00:00Z",
        "hospital": { "id": 3 }
    });

    let mut draft = ReportDraft::resume(9001);
    draft.apply_snapshot(snapshot.as_object().unwrap());

    assert_eq!(draft.report_id, Some(9001));
    assert_eq!(draft.fields.booking_id, "42");
    assert_eq!(draft.fields.ghc_code, "GHC-0042");
    assert_eq!(draft.fields.blood_group, "AB-");
    // Defaults untouched by the snapshot survive
    assert_eq!(draft.fields.fit_status, "FIT");
}

/// Abandoning resets everything, including the report id.
#[test]
fn abandon_resets_the_draft() {
    let mut draft = ReportDraft::resume(55);
    filled_identify(&mut draft);
    draft.abandon();

    assert_eq!(draft, ReportDraft::new());
}
