//! Medical report wizard page.
//!
//! Drives the progressive-save state machine in [`crate::app::report`]:
//! validation and the create-vs-update decision happen in the draft, the
//! page only executes the network plan and commits the outcome. A cached
//! report id from a previous session resumes the same backend draft.

use dioxus::prelude::*;

use crate::app::api::{self, Booking, MedicalReport, ReportIdResponse};
use crate::app::auth::use_auth;
use crate::app::components::{ErrorAlert, Layout, SelectField, TextField};
use crate::app::report::{NextAction, ReportDraft, ReportStep, SavePlan};

/// Report wizard page. `passport` pre-fills the booking lookup when the
/// hospital queue links here; `mode=view` renders the read-only summary.
#[component]
pub fn MedicalReports(passport: String, mode: String) -> Element {
    let auth = use_auth();
    let mut draft = use_signal(ReportDraft::new);
    let mut flags = use_signal(Vec::<&'static str>::new);
    let mut error = use_signal(|| None::<String>);
    let mut busy = use_signal(|| false);

    // Search state
    let mut search = use_signal(|| passport.clone());
    let mut search_results = use_signal(Vec::<Booking>::new);
    let mut adopted_booking = use_signal(|| None::<Booking>);

    // Signed upload state, live after submission
    let mut signed_file = use_signal(|| None::<(String, Vec<u8>)>);
    let mut signed_uploaded = use_signal(|| false);

    let view_mode = mode == "view";

    // Resume a cached draft once on mount
    use_effect(move || {
        if let Some(report_id) = ReportDraft::cached_report_id() {
            let token = auth.token();
            spawn(async move {
                let url = format!("/api/medical-reports/{report_id}");
                match api::get_json::<MedicalReport>(&url, token.as_deref()).await {
                    Ok(report) => {
                        draft.with_mut(|d| {
                            *d = ReportDraft::resume(report.id);
                            d.apply_snapshot(&report.fields);
                        });
                    }
                    Err(e) => error.set(Some(e.to_string())),
                }
            });
        }
    });

    let run_search = move |_| {
        let passport = search().trim().to_string();
        if passport.is_empty() {
            return;
        }
        let token = auth.token();
        spawn(async move {
            let url = format!(
                "/api/bookings?passport_number={}",
                urlencoding::encode(&passport)
            );
            match api::get_json::<Vec<Booking>>(&url, token.as_deref()).await {
                Ok(bookings) => search_results.set(bookings),
                Err(e) => error.set(Some(e.to_string())),
            }
        });
    };

    // Adopt a booking: prefill step 1 and pick up any in-flight report
    let mut adopt = move |booking: Booking| {
        let token = auth.token();
        spawn(async move {
            draft.with_mut(|d| d.fields.booking_id = booking.id.to_string());
            let url = format!("/api/medical-reports/booking/{}", booking.id);
            if let Ok(report) = api::get_json::<MedicalReport>(&url, token.as_deref()).await {
                draft.with_mut(|d| {
                    d.report_id = Some(report.id);
                    d.apply_snapshot(&report.fields);
                });
            }
            adopted_booking.set(Some(booking));
            search_results.set(Vec::new());
        });
    };

    let next = move |_| {
        let action = draft.read().prepare_next();
        match action {
            NextAction::Blocked(missing) => flags.set(missing),
            NextAction::Save { plan, payload, .. } => {
                flags.set(Vec::new());
                error.set(None);
                busy.set(true);
                let token = auth.token();
                spawn(async move {
                    let result = match plan {
                        SavePlan::Create => api::post_json::<_, ReportIdResponse>(
                            "/api/medical-reports",
                            token.as_deref(),
                            &payload,
                        )
                        .await
                        .map(|r| Some(r.id)),
                        SavePlan::Update(id) => api::patch_json::<_, serde_json::Value>(
                            &format!("/api/medical-reports/{id}"),
                            token.as_deref(),
                            &payload,
                        )
                        .await
                        .map(|_| None),
                    };
                    match result {
                        Ok(assigned_id) => draft.with_mut(|d| d.commit_next(assigned_id)),
                        // Save failure keeps the wizard on the current step
                        Err(e) => error.set(Some(e.to_string())),
                    }
                    busy.set(false);
                });
            }
        }
    };

    let previous = move |_| {
        draft.with_mut(|d| d.back());
        flags.set(Vec::new());
    };

    let abandon = move |_| {
        if api::confirm("Abandon this report draft?") {
            draft.with_mut(|d| d.abandon());
            adopted_booking.set(None);
            flags.set(Vec::new());
        }
    };

    let download_pdf = move |_| {
        let Some(report_id) = draft.read().report_id else { return };
        let token = auth.token();
        spawn(async move {
            let url = format!("/api/medical-reports/{report_id}/pdf");
            match api::fetch_blob_url(&url, token.as_deref()).await {
                Ok(blob_url) => api::open_in_new_tab(&blob_url),
                Err(e) => error.set(Some(e.to_string())),
            }
        });
    };

    let pick_signed = move |e: Event<FormData>| {
        spawn(async move {
            if let Some(file) = e.files().first().cloned() {
                if let Ok(bytes) = file.read_bytes().await {
                    signed_file.set(Some((file.name(), bytes.to_vec())));
                }
            }
        });
    };

    let upload_signed = move |_| {
        let Some(report_id) = draft.read().report_id else { return };
        let Some((name, bytes)) = signed_file() else {
            error.set(Some("Choose a signed report file first".to_string()));
            return;
        };
        let token = auth.token();
        spawn(async move {
            let url = format!("/api/medical-reports/{report_id}/submit-signed");
            match api::post_multipart::<serde_json::Value>(
                &url,
                token.as_deref(),
                &[],
                Some(("file", name.as_str(), bytes.as_slice())),
            )
            .await
            {
                Ok(_) => signed_uploaded.set(true),
                Err(e) => error.set(Some(e.to_string())),
            }
        });
    };

    let d = draft();
    let flagged = flags();
    let step = d.step;
    let total = ReportStep::COUNT;
    let percent = step.index().min(total) * 100 / total;
    let results = search_results();
    let booking = adopted_booking();
    let signed_name = signed_file().map(|(name, _)| name);

    rsx! {
        Layout {
            title: "Medical Reports".to_string(),
            active_path: "/medical-reports".to_string(),

            if let Some(message) = error() {
                ErrorAlert {
                    message: message,
                    on_dismiss: move |_| error.set(None),
                }
            }

            // Passport / booking lookup
            div { class: "card p-4 mb-6 max-w-2xl",
                div { class: "flex items-end gap-2",
                    div { class: "flex-1",
                        TextField {
                            label: "Passport number",
                            value: search(),
                            placeholder: "Find candidate booking...",
                            on_input: move |v| search.set(v),
                        }
                    }
                    button { class: "btn btn-primary mb-3", onclick: run_search, "Search" }
                }
                for result in results {
                    div { key: "{result.id}", class: "flex items-center justify-between border-t py-2",
                        div {
                            span { class: "font-semibold mr-2", "{result.first_name} {result.last_name}" }
                            span { class: "text-sm text-muted font-mono", "{result.passport_number}" }
                        }
                        button {
                            class: "btn btn-ghost btn-sm",
                            onclick: {
                                let result = result.clone();
                                move |_| adopt(result.clone())
                            },
                            "Use booking"
                        }
                    }
                }
                if let Some(b) = booking {
                    p { class: "text-sm text-muted mt-2",
                        "Examining {b.first_name} {b.last_name} (booking #{b.id})"
                    }
                }
            }

            if view_mode {
                div { class: "card p-6 max-w-2xl",
                    h3 { class: "text-lg font-semibold mb-2", "Completed report" }
                    p { class: "text-sm text-muted mb-4",
                        "Search for the candidate above, then download the report document."
                    }
                    button {
                        class: "btn btn-primary",
                        disabled: d.report_id.is_none(),
                        onclick: download_pdf,
                        "Download PDF"
                    }
                }
            } else if step == ReportStep::Submitted {
                div { class: "card p-6 max-w-2xl",
                    h3 { class: "text-lg font-semibold mb-2", "Report submitted" }

                    div { class: "flex gap-2 mb-4",
                        button { class: "btn btn-primary", onclick: download_pdf, "Download PDF" }
                    }

                    h4 { class: "font-semibold mb-1", "Countersigned report" }
                    if signed_uploaded() {
                        p { class: "text-sm", "Signed report uploaded." }
                    } else {
                        input { r#type: "file", onchange: pick_signed }
                        if let Some(name) = signed_name {
                            p { class: "text-xs text-muted mt-1", "Selected: {name}" }
                        }
                        button {
                            class: "btn btn-ghost btn-sm mt-2",
                            onclick: upload_signed,
                            "Upload signed report"
                        }
                    }
                }
            } else {
                // Progress bar
                div { class: "mb-6 max-w-2xl",
                    div { class: "flex justify-between mb-1",
                        span { class: "text-sm font-medium text-muted",
                            "Step {step.index()} of {total}: {step.title()}"
                        }
                        span { class: "text-sm font-medium text-muted", "{percent}%" }
                    }
                    div { class: "h-2 rounded bg-elevated",
                        div {
                            class: "h-2 rounded bg-primary",
                            style: "width: {percent}%",
                        }
                    }
                }

                div { class: "card p-6 max-w-2xl",
                    if step == ReportStep::Identify {
                        IdentifyStep { draft: draft, flagged: flagged.clone() }
                    } else if step == ReportStep::Systemic {
                        SystemicStep { draft: draft, flagged: flagged.clone() }
                    } else if step == ReportStep::Vision {
                        VisionStep { draft: draft, flagged: flagged.clone() }
                    } else if step == ReportStep::Lab {
                        LabStep { draft: draft, flagged: flagged.clone() }
                    } else if step == ReportStep::FinalAssessment {
                        FinalStep { draft: draft, flagged: flagged.clone() }
                    }

                    div { class: "flex items-center justify-between mt-4",
                        button {
                            class: "btn btn-ghost",
                            disabled: step == ReportStep::Identify || busy(),
                            onclick: previous,
                            "Previous"
                        }
                        button { class: "btn btn-ghost btn-sm", onclick: abandon, "Abandon" }
                        button {
                            class: "btn btn-primary",
                            disabled: busy(),
                            onclick: next,
                            if busy() {
                                "Saving..."
                            } else if step == ReportStep::FinalAssessment {
                                "Submit report"
                            } else {
                                "Save & continue"
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn IdentifyStep(draft: Signal<ReportDraft>, flagged: Vec<&'static str>) -> Element {
    let d = draft();
    rsx! {
        TextField {
            label: "Booking ID",
            value: d.fields.booking_id.clone(),
            error: flagged.contains(&"booking_id"),
            on_input: move |v| draft.with_mut(|d| d.fields.booking_id = v),
        }
        TextField {
            label: "Report expiry date",
            value: d.fields.report_expiry_date.clone(),
            input_type: "date",
            error: flagged.contains(&"report_expiry_date"),
            on_input: move |v| draft.with_mut(|d| d.fields.report_expiry_date = v),
        }
        TextField {
            label: "GHC code",
            value: d.fields.ghc_code.clone(),
            error: flagged.contains(&"ghc_code"),
            on_input: move |v| draft.with_mut(|d| d.fields.ghc_code = v),
        }
        TextField {
            label: "GCC slip number",
            value: d.fields.gcc_slip_no.clone(),
            error: flagged.contains(&"gcc_slip_no"),
            on_input: move |v| draft.with_mut(|d| d.fields.gcc_slip_no = v),
        }
        div { class: "grid grid-cols-3 gap-3",
            TextField {
                label: "Height (m)",
                value: d.fields.height.clone(),
                input_type: "number",
                placeholder: "1.75",
                on_input: move |v| draft.with_mut(|d| d.set_height(v)),
            }
            TextField {
                label: "Weight (kg)",
                value: d.fields.weight.clone(),
                input_type: "number",
                placeholder: "75.5",
                on_input: move |v| draft.with_mut(|d| d.set_weight(v)),
            }
            TextField {
                label: "BMI",
                value: d.fields.bmi.clone(),
                readonly: true,
                on_input: move |_| {},
            }
        }
        div { class: "grid grid-cols-3 gap-3",
            TextField {
                label: "Blood pressure",
                value: d.fields.bp.clone(),
                placeholder: "120/80",
                on_input: move |v| draft.with_mut(|d| d.fields.bp = v),
            }
            TextField {
                label: "Pulse",
                value: d.fields.pulse.clone(),
                on_input: move |v| draft.with_mut(|d| d.fields.pulse = v),
            }
            TextField {
                label: "Respiratory rate (/min)",
                value: d.fields.rr_min.clone(),
                on_input: move |v| draft.with_mut(|d| d.fields.rr_min = v),
            }
        }
    }
}

#[component]
fn SystemicStep(draft: Signal<ReportDraft>, flagged: Vec<&'static str>) -> Element {
    let d = draft();
    rsx! {
        TextField {
            label: "Cardiovascular",
            value: d.fields.system_cardiovascular.clone(),
            error: flagged.contains(&"system_cardiovascular"),
            on_input: move |v| draft.with_mut(|d| d.fields.system_cardiovascular = v),
        }
        TextField {
            label: "Respiratory",
            value: d.fields.system_respiratory.clone(),
            error: flagged.contains(&"system_respiratory"),
            on_input: move |v| draft.with_mut(|d| d.fields.system_respiratory = v),
        }
        TextField {
            label: "Gastrointestinal",
            value: d.fields.system_gastrointestinal.clone(),
            on_input: move |v| draft.with_mut(|d| d.fields.system_gastrointestinal = v),
        }
        TextField {
            label: "Neurological",
            value: d.fields.system_neurological.clone(),
            on_input: move |v| draft.with_mut(|d| d.fields.system_neurological = v),
        }
        TextField {
            label: "Musculoskeletal",
            value: d.fields.system_musculoskeletal.clone(),
            on_input: move |v| draft.with_mut(|d| d.fields.system_musculoskeletal = v),
        }
        TextField {
            label: "Skin",
            value: d.fields.system_skin.clone(),
            on_input: move |v| draft.with_mut(|d| d.fields.system_skin = v),
        }
    }
}

#[component]
fn VisionStep(draft: Signal<ReportDraft>, flagged: Vec<&'static str>) -> Element {
    let d = draft();
    rsx! {
        div { class: "grid grid-cols-2 gap-3",
            TextField {
                label: "Distant vision (left, unaided)",
                value: d.fields.vision_distant_unaided_left.clone(),
                error: flagged.contains(&"vision_distant_unaided_left"),
                on_input: move |v| draft.with_mut(|d| d.fields.vision_distant_unaided_left = v),
            }
            TextField {
                label: "Distant vision (right, unaided)",
                value: d.fields.vision_distant_unaided_right.clone(),
                error: flagged.contains(&"vision_distant_unaided_right"),
                on_input: move |v| draft.with_mut(|d| d.fields.vision_distant_unaided_right = v),
            }
        }
        TextField {
            label: "Colour vision",
            value: d.fields.vision_colour.clone(),
            on_input: move |v| draft.with_mut(|d| d.fields.vision_colour = v),
        }
        div { class: "grid grid-cols-2 gap-3",
            TextField {
                label: "Hearing (left)",
                value: d.fields.hearing_left.clone(),
                on_input: move |v| draft.with_mut(|d| d.fields.hearing_left = v),
            }
            TextField {
                label: "Hearing (right)",
                value: d.fields.hearing_right.clone(),
                on_input: move |v| draft.with_mut(|d| d.fields.hearing_right = v),
            }
        }
    }
}

#[component]
fn LabStep(draft: Signal<ReportDraft>, flagged: Vec<&'static str>) -> Element {
    let d = draft();
    rsx! {
        div { class: "grid grid-cols-2 gap-3",
            SelectField {
                label: "Blood group",
                value: d.fields.blood_group.clone(),
                options: ["A+", "A-", "B+", "B-", "AB+", "AB-", "O+", "O-"]
                    .iter()
                    .map(|g| (g.to_string(), g.to_string()))
                    .collect(),
                error: flagged.contains(&"blood_group"),
                on_change: move |v| draft.with_mut(|d| d.fields.blood_group = v),
            }
            TextField {
                label: "Haemoglobin",
                value: d.fields.blood_haemoglobin.clone(),
                error: flagged.contains(&"blood_haemoglobin"),
                on_input: move |v| draft.with_mut(|d| d.fields.blood_haemoglobin = v),
            }
        }
        TextField {
            label: "Thick film (malaria)",
            value: d.fields.thick_film_malaria.clone(),
            on_input: move |v| draft.with_mut(|d| d.fields.thick_film_malaria = v),
        }
        div { class: "grid grid-cols-2 gap-3",
            TextField {
                label: "Random blood sugar",
                value: d.fields.biochem_rbs.clone(),
                on_input: move |v| draft.with_mut(|d| d.fields.biochem_rbs = v),
            }
            TextField {
                label: "Creatinine",
                value: d.fields.biochem_creatinine.clone(),
                on_input: move |v| draft.with_mut(|d| d.fields.biochem_creatinine = v),
            }
        }
        div { class: "grid grid-cols-3 gap-3",
            TextField {
                label: "HIV serology",
                value: d.fields.serology_hiv.clone(),
                on_input: move |v| draft.with_mut(|d| d.fields.serology_hiv = v),
            }
            TextField {
                label: "HCV serology",
                value: d.fields.serology_hcv.clone(),
                on_input: move |v| draft.with_mut(|d| d.fields.serology_hcv = v),
            }
            TextField {
                label: "HBsAg serology",
                value: d.fields.serology_hbsag.clone(),
                on_input: move |v| draft.with_mut(|d| d.fields.serology_hbsag = v),
            }
        }
        TextField {
            label: "Pregnancy test",
            value: d.fields.pregnancy_test.clone(),
            on_input: move |v| draft.with_mut(|d| d.fields.pregnancy_test = v),
        }
    }
}

#[component]
fn FinalStep(draft: Signal<ReportDraft>, flagged: Vec<&'static str>) -> Element {
    let d = draft();
    rsx! {
        TextField {
            label: "Chest X-ray",
            value: d.fields.radiology_chest_xray.clone(),
            error: flagged.contains(&"radiology_chest_xray"),
            on_input: move |v| draft.with_mut(|d| d.fields.radiology_chest_xray = v),
        }
        SelectField {
            label: "Fitness status",
            value: d.fields.fit_status.clone(),
            options: vec![
                ("FIT".to_string(), "FIT FOR TRAVEL".to_string()),
                ("UNFIT".to_string(), "UNFIT".to_string()),
            ],
            error: flagged.contains(&"fit_status"),
            on_change: move |v| draft.with_mut(|d| d.fields.fit_status = v),
        }
        TextField {
            label: "Remarks",
            value: d.fields.remarks.clone(),
            on_input: move |v| draft.with_mut(|d| d.fields.remarks = v),
        }
    }
}
