//! Candidate registration draft.
//!
//! Three steps (appointment, candidate, passport & contact), every field
//! required, validated per step and again on submit. Unlike the medical
//! report wizard there is no progressive save: the whole draft goes out as
//! one multipart request on the final step.

use serde::{Deserialize, Serialize};

/// Registration steps, 1-based to match the progress display.
pub const STEP_COUNT: usize = 3;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CandidateDraft {
    // Step 1: appointment
    pub appointment_location: String,
    pub country: String,
    pub city: String,
    pub country_traveling_to: String,

    // Step 2: candidate
    pub first_name: String,
    pub last_name: String,
    pub dob: String,
    pub nationality: String,
    pub gender: String,
    pub marital_status: String,

    // Step 3: passport, visa & contact
    pub passport_number: String,
    pub confirm_passport: String,
    pub passport_issue_date: String,
    pub passport_issue_place: String,
    pub passport_expiry_date: String,
    pub visa_type: String,
    pub email: String,
    pub phone: String,
    pub national_id: String,
    pub position_applied: String,
    /// Accuracy declaration checkbox; must be ticked before submit
    pub confirm_info: bool,
}

impl CandidateDraft {
    /// Required fields of a step that are empty or inconsistent. The
    /// passport confirmation mismatch flags `confirm_passport` specifically.
    pub fn validate_step(&self, step: usize) -> Vec<&'static str> {
        let mut missing: Vec<&'static str> = Vec::new();
        let mut require = |name: &'static str, value: &str| {
            if value.trim().is_empty() {
                missing.push(name);
            }
        };

        match step {
            1 => {
                require("appointment_location", &self.appointment_location);
                require("country", &self.country);
                require("city", &self.city);
                require("country_traveling_to", &self.country_traveling_to);
            }
            2 => {
                require("first_name", &self.first_name);
                require("last_name", &self.last_name);
                require("dob", &self.dob);
                require("nationality", &self.nationality);
                require("gender", &self.gender);
                require("marital_status", &self.marital_status);
            }
            3 => {
                require("passport_number", &self.passport_number);
                require("confirm_passport", &self.confirm_passport);
                require("passport_issue_date", &self.passport_issue_date);
                require("passport_issue_place", &self.passport_issue_place);
                require("passport_expiry_date", &self.passport_expiry_date);
                require("visa_type", &self.visa_type);
                require("email", &self.email);
                require("phone", &self.phone);
                require("national_id", &self.national_id);
                require("position_applied", &self.position_applied);
                if !self.confirm_passport.trim().is_empty()
                    && self.confirm_passport != self.passport_number
                {
                    missing.push("confirm_passport");
                }
                if !self.confirm_info {
                    missing.push("confirm_info");
                }
            }
            _ => {}
        }
        missing
    }

    /// Validate the whole draft before submit.
    pub fn validate_all(&self) -> Vec<&'static str> {
        (1..=STEP_COUNT)
            .flat_map(|step| self.validate_step(step))
            .collect()
    }

    /// Multipart text fields for `/candidates/register`. The confirmation
    /// fields are client-side only and never sent.
    pub fn submit_fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("appointment_location", self.appointment_location.clone()),
            ("country", self.country.clone()),
            ("city", self.city.clone()),
            ("country_traveling_to", self.country_traveling_to.clone()),
            ("first_name", self.first_name.clone()),
            ("last_name", self.last_name.clone()),
            ("dob", self.dob.clone()),
            ("nationality", self.nationality.clone()),
            ("gender", self.gender.clone()),
            ("marital_status", self.marital_status.clone()),
            ("passport_number", self.passport_number.clone()),
            ("passport_issue_date", self.passport_issue_date.clone()),
            ("passport_issue_place", self.passport_issue_place.clone()),
            ("passport_expiry_date", self.passport_expiry_date.clone()),
            ("visa_type", self.visa_type.clone()),
            ("email", self.email.clone()),
            ("phone", self.phone.clone()),
            ("national_id", self.national_id.clone()),
            ("position_applied", self.position_applied.clone()),
        ]
    }
}
