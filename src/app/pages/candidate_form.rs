//! Candidate registration wizard.
//!
//! Three steps, validated per step; the whole draft goes out as a single
//! multipart request with an optional photo on the final step. There is no
//! progressive save; "Clear form" resets everything.

use dioxus::prelude::*;

use crate::app::api::{self, City, Country, Position};
use crate::app::auth::use_auth;
use crate::app::candidate::{CandidateDraft, STEP_COUNT};
use crate::app::components::{CheckboxField, ErrorAlert, Layout, SelectField, TextField};

/// Candidate registration page.
#[component]
pub fn CandidateForm() -> Element {
    let auth = use_auth();
    let mut draft = use_signal(CandidateDraft::default);
    let mut step = use_signal(|| 1usize);
    let mut flags = use_signal(Vec::<&'static str>::new);
    let mut error = use_signal(|| None::<String>);
    let mut submitted = use_signal(|| false);
    let mut busy = use_signal(|| false);

    // Photo is read into memory as soon as it is picked
    let mut photo = use_signal(|| None::<(String, Vec<u8>)>);

    let countries = use_resource(move || {
        let token = auth.token();
        async move {
            api::get_json::<Vec<Country>>("/api/locations/countries", token.as_deref())
                .await
                .ok()
        }
    });

    // Appointment cities follow the selected appointment country
    let cities = use_resource(move || {
        let token = auth.token();
        let country = draft.read().country.clone();
        async move {
            if country.is_empty() {
                return Some(Vec::new());
            }
            api::get_json::<Vec<City>>(
                &format!("/api/locations/countries/{country}/cities"),
                token.as_deref(),
            )
            .await
            .ok()
        }
    });

    let positions = use_resource(move || {
        let token = auth.token();
        async move {
            api::get_json::<Vec<Position>>("/api/locations/positions", token.as_deref())
                .await
                .ok()
        }
    });

    let next = move |_| {
        let missing = draft.read().validate_step(step());
        flags.set(missing.clone());
        if missing.is_empty() && step() < STEP_COUNT {
            step.set(step() + 1);
        }
    };

    let previous = move |_| {
        if step() > 1 {
            step.set(step() - 1);
        }
    };

    let clear = move |_| {
        draft.set(CandidateDraft::default());
        photo.set(None);
        flags.set(Vec::new());
        step.set(1);
        submitted.set(false);
    };

    let pick_photo = move |e: Event<FormData>| {
        spawn(async move {
            if let Some(file) = e.files().first().cloned() {
                if let Ok(bytes) = file.read_bytes().await {
                    photo.set(Some((file.name(), bytes.to_vec())));
                }
            }
        });
    };

    let submit = move |_| {
        let current = draft();
        let missing = current.validate_all();
        flags.set(missing.clone());
        if !missing.is_empty() {
            return;
        }
        busy.set(true);
        error.set(None);
        let token = auth.token();
        let picked = photo();
        spawn(async move {
            let fields = current.submit_fields();
            let file = picked
                .as_ref()
                .map(|(name, bytes)| ("photo", name.as_str(), bytes.as_slice()));
            match api::post_multipart::<serde_json::Value>(
                "/api/candidates/register",
                token.as_deref(),
                &fields,
                file,
            )
            .await
            {
                Ok(_) => {
                    draft.set(CandidateDraft::default());
                    photo.set(None);
                    step.set(1);
                    submitted.set(true);
                }
                Err(e) => error.set(Some(e.to_string())),
            }
            busy.set(false);
        });
    };

    let country_options: Vec<(String, String)> = countries
        .read()
        .clone()
        .flatten()
        .unwrap_or_default()
        .into_iter()
        .map(|c| (c.id.to_string(), c.name))
        .collect();
    let city_options: Vec<(String, String)> = cities
        .read()
        .clone()
        .flatten()
        .unwrap_or_default()
        .into_iter()
        .map(|c| (c.id.to_string(), c.name))
        .collect();
    let position_options: Vec<(String, String)> = positions
        .read()
        .clone()
        .flatten()
        .unwrap_or_default()
        .into_iter()
        .map(|p| (p.name.clone(), p.name))
        .collect();

    let d = draft();
    let flagged = flags();
    let current_step = step();
    let percent = current_step * 100 / STEP_COUNT;
    let photo_name = photo().map(|(name, _)| name);

    rsx! {
        Layout {
            title: "Candidate Registration".to_string(),
            active_path: "/form".to_string(),

            if let Some(message) = error() {
                ErrorAlert {
                    message: message,
                    on_dismiss: move |_| error.set(None),
                }
            }
            if submitted() {
                div { class: "card bg-primary/10 p-3 mb-4", "Candidate registered" }
            }

            // Progress bar
            div { class: "mb-6 max-w-2xl",
                div { class: "flex justify-between mb-1",
                    span { class: "text-sm font-medium text-muted", "Step {current_step} of {STEP_COUNT}" }
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
                if current_step == 1 {
                    h3 { class: "text-lg font-semibold mb-3", "Appointment" }
                    TextField {
                        label: "Appointment location",
                        value: d.appointment_location.clone(),
                        error: flagged.contains(&"appointment_location"),
                        on_input: move |v| draft.with_mut(|d| d.appointment_location = v),
                    }
                    SelectField {
                        label: "Country",
                        value: d.country.clone(),
                        options: country_options.clone(),
                        error: flagged.contains(&"country"),
                        on_change: move |v| draft.with_mut(|d| {
                            d.country = v;
                            d.city.clear();
                        }),
                    }
                    SelectField {
                        label: "City",
                        value: d.city.clone(),
                        options: city_options,
                        error: flagged.contains(&"city"),
                        on_change: move |v| draft.with_mut(|d| d.city = v),
                    }
                    SelectField {
                        label: "Country traveling to",
                        value: d.country_traveling_to.clone(),
                        options: country_options,
                        error: flagged.contains(&"country_traveling_to"),
                        on_change: move |v| draft.with_mut(|d| d.country_traveling_to = v),
                    }
                } else if current_step == 2 {
                    h3 { class: "text-lg font-semibold mb-3", "Candidate" }
                    TextField {
                        label: "First name",
                        value: d.first_name.clone(),
                        error: flagged.contains(&"first_name"),
                        on_input: move |v| draft.with_mut(|d| d.first_name = v),
                    }
                    TextField {
                        label: "Last name",
                        value: d.last_name.clone(),
                        error: flagged.contains(&"last_name"),
                        on_input: move |v| draft.with_mut(|d| d.last_name = v),
                    }
                    TextField {
                        label: "Date of birth",
                        value: d.dob.clone(),
                        input_type: "date",
                        error: flagged.contains(&"dob"),
                        on_input: move |v| draft.with_mut(|d| d.dob = v),
                    }
                    TextField {
                        label: "Nationality",
                        value: d.nationality.clone(),
                        error: flagged.contains(&"nationality"),
                        on_input: move |v| draft.with_mut(|d| d.nationality = v),
                    }
                    SelectField {
                        label: "Gender",
                        value: d.gender.clone(),
                        options: vec![
                            ("MALE".to_string(), "Male".to_string()),
                            ("FEMALE".to_string(), "Female".to_string()),
                        ],
                        error: flagged.contains(&"gender"),
                        on_change: move |v| draft.with_mut(|d| d.gender = v),
                    }
                    SelectField {
                        label: "Marital status",
                        value: d.marital_status.clone(),
                        options: vec![
                            ("SINGLE".to_string(), "Single".to_string()),
                            ("MARRIED".to_string(), "Married".to_string()),
                            ("DIVORCED".to_string(), "Divorced".to_string()),
                            ("WIDOWED".to_string(), "Widowed".to_string()),
                        ],
                        error: flagged.contains(&"marital_status"),
                        on_change: move |v| draft.with_mut(|d| d.marital_status = v),
                    }
                } else {
                    h3 { class: "text-lg font-semibold mb-3", "Passport, Visa & Contact" }
                    TextField {
                        label: "Passport number",
                        value: d.passport_number.clone(),
                        error: flagged.contains(&"passport_number"),
                        on_input: move |v| draft.with_mut(|d| d.passport_number = v),
                    }
                    TextField {
                        label: "Confirm passport number",
                        value: d.confirm_passport.clone(),
                        error: flagged.contains(&"confirm_passport"),
                        on_input: move |v| draft.with_mut(|d| d.confirm_passport = v),
                    }
                    TextField {
                        label: "Passport issue date",
                        value: d.passport_issue_date.clone(),
                        input_type: "date",
                        error: flagged.contains(&"passport_issue_date"),
                        on_input: move |v| draft.with_mut(|d| d.passport_issue_date = v),
                    }
                    TextField {
                        label: "Passport issue place",
                        value: d.passport_issue_place.clone(),
                        error: flagged.contains(&"passport_issue_place"),
                        on_input: move |v| draft.with_mut(|d| d.passport_issue_place = v),
                    }
                    TextField {
                        label: "Passport expiry date",
                        value: d.passport_expiry_date.clone(),
                        input_type: "date",
                        error: flagged.contains(&"passport_expiry_date"),
                        on_input: move |v| draft.with_mut(|d| d.passport_expiry_date = v),
                    }
                    TextField {
                        label: "Visa type",
                        value: d.visa_type.clone(),
                        error: flagged.contains(&"visa_type"),
                        on_input: move |v| draft.with_mut(|d| d.visa_type = v),
                    }
                    TextField {
                        label: "Email",
                        value: d.email.clone(),
                        input_type: "email",
                        error: flagged.contains(&"email"),
                        on_input: move |v| draft.with_mut(|d| d.email = v),
                    }
                    TextField {
                        label: "Phone",
                        value: d.phone.clone(),
                        error: flagged.contains(&"phone"),
                        on_input: move |v| draft.with_mut(|d| d.phone = v),
                    }
                    TextField {
                        label: "National ID",
                        value: d.national_id.clone(),
                        error: flagged.contains(&"national_id"),
                        on_input: move |v| draft.with_mut(|d| d.national_id = v),
                    }
                    SelectField {
                        label: "Position applied",
                        value: d.position_applied.clone(),
                        options: position_options,
                        error: flagged.contains(&"position_applied"),
                        on_change: move |v| draft.with_mut(|d| d.position_applied = v),
                    }

                    div { class: "mb-3",
                        label { class: "block text-sm font-medium mb-1", "Photo (optional)" }
                        input {
                            r#type: "file",
                            accept: "image/*",
                            onchange: pick_photo,
                        }
                        if let Some(name) = photo_name {
                            p { class: "text-xs text-muted mt-1", "Selected: {name}" }
                        }
                    }

                    CheckboxField {
                        label: "I confirm the information above is accurate",
                        checked: d.confirm_info,
                        error: flagged.contains(&"confirm_info"),
                        on_change: move |v| draft.with_mut(|d| d.confirm_info = v),
                    }
                }

                div { class: "flex items-center justify-between mt-4",
                    button {
                        class: "btn btn-ghost",
                        disabled: current_step == 1 || busy(),
                        onclick: previous,
                        "Previous"
                    }
                    button { class: "btn btn-ghost btn-sm", onclick: clear, "Clear form" }
                    if current_step < STEP_COUNT {
                        button { class: "btn btn-primary", onclick: next, "Next step" }
                    } else {
                        button {
                            class: "btn btn-primary",
                            disabled: busy(),
                            onclick: submit,
                            if busy() { "Submitting..." } else { "Submit registration" }
                        }
                    }
                }
            }
        }
    }
}
