//! Medical report wizard state machine.
//!
//! The wizard persists progressively: each successful `Next` writes the
//! current step's field subset to the backend (create on the first step when
//! no report id exists yet, partial update afterwards) and only then
//! advances. The assigned report id is cached in localStorage so a reload
//! resumes the same backend draft instead of creating a duplicate.
//!
//! All decisions are made here as pure values; the page component performs
//! the actual network calls and feeds the results back in.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::app::storage;

/// Wizard steps in order, plus the terminal state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReportStep {
    Identify,
    Systemic,
    Vision,
    Lab,
    FinalAssessment,
    Submitted,
}

impl ReportStep {
    pub const COUNT: usize = 5;

    /// 1-based position for the progress bar (Submitted counts as past the end)
    pub fn index(&self) -> usize {
        match self {
            ReportStep::Identify => 1,
            ReportStep::Systemic => 2,
            ReportStep::Vision => 3,
            ReportStep::Lab => 4,
            ReportStep::FinalAssessment => 5,
            ReportStep::Submitted => 6,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            ReportStep::Identify => "Identification & Vitals",
            ReportStep::Systemic => "Systemic Examination",
            ReportStep::Vision => "Vision & Hearing",
            ReportStep::Lab => "Laboratory",
            ReportStep::FinalAssessment => "Radiology & Final Assessment",
            ReportStep::Submitted => "Submitted",
        }
    }

    fn next(&self) -> ReportStep {
        match self {
            ReportStep::Identify => ReportStep::Systemic,
            ReportStep::Systemic => ReportStep::Vision,
            ReportStep::Vision => ReportStep::Lab,
            ReportStep::Lab => ReportStep::FinalAssessment,
            ReportStep::FinalAssessment | ReportStep::Submitted => ReportStep::Submitted,
        }
    }

    fn previous(&self) -> Option<ReportStep> {
        match self {
            ReportStep::Identify => None,
            ReportStep::Systemic => Some(ReportStep::Identify),
            ReportStep::Vision => Some(ReportStep::Systemic),
            ReportStep::Lab => Some(ReportStep::Vision),
            ReportStep::FinalAssessment => Some(ReportStep::Lab),
            ReportStep::Submitted => Some(ReportStep::FinalAssessment),
        }
    }
}

/// Examination field values. Everything is kept as entered; numeric fields
/// are parsed only where a derived value needs them.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ReportFields {
    // Identification & vitals
    pub booking_id: String,
    pub report_expiry_date: String,
    pub ghc_code: String,
    pub gcc_slip_no: String,
    pub height: String,
    pub weight: String,
    /// Derived from height/weight; never entered directly
    pub bmi: String,
    pub bp: String,
    pub pulse: String,
    pub rr_min: String,

    // Systemic examination
    pub system_cardiovascular: String,
    pub system_respiratory: String,
    pub system_gastrointestinal: String,
    pub system_neurological: String,
    pub system_musculoskeletal: String,
    pub system_skin: String,

    // Vision & hearing
    pub vision_distant_unaided_left: String,
    pub vision_distant_unaided_right: String,
    pub vision_colour: String,
    pub hearing_left: String,
    pub hearing_right: String,

    // Laboratory
    pub blood_group: String,
    pub blood_haemoglobin: String,
    pub thick_film_malaria: String,
    pub biochem_rbs: String,
    pub biochem_creatinine: String,
    pub serology_hiv: String,
    pub serology_hcv: String,
    pub serology_hbsag: String,
    pub pregnancy_test: String,

    // Radiology & final assessment
    pub radiology_chest_xray: String,
    pub fit_status: String,
    pub remarks: String,
}

impl Default for ReportFields {
    fn default() -> Self {
        Self {
            booking_id: String::new(),
            report_expiry_date: String::new(),
            ghc_code: String::new(),
            gcc_slip_no: String::new(),
            height: String::new(),
            weight: String::new(),
            bmi: String::new(),
            bp: String::new(),
            pulse: String::new(),
            rr_min: String::new(),
            system_cardiovascular: "NAD".into(),
            system_respiratory: "NAD".into(),
            system_gastrointestinal: "NAD".into(),
            system_neurological: "NAD".into(),
            system_musculoskeletal: "NAD".into(),
            system_skin: "NAD".into(),
            vision_distant_unaided_left: "6/6".into(),
            vision_distant_unaided_right: "6/6".into(),
            vision_colour: "Normal".into(),
            hearing_left: "Normal".into(),
            hearing_right: "Normal".into(),
            blood_group: String::new(),
            blood_haemoglobin: String::new(),
            thick_film_malaria: "Absent".into(),
            biochem_rbs: String::new(),
            biochem_creatinine: String::new(),
            serology_hiv: "Negative".into(),
            serology_hcv: "Negative".into(),
            serology_hbsag: "Negative".into(),
            pregnancy_test: "NEGATIVE".into(),
            radiology_chest_xray: "NAD".into(),
            fit_status: "FIT".into(),
            remarks: String::new(),
        }
    }
}

/// How the next save must hit the backend.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SavePlan {
    /// `POST /medical-reports`
    Create,
    /// `PATCH /medical-reports/:id`
    Update(i64),
}

/// Outcome of asking the draft to advance.
#[derive(Clone, Debug, PartialEq)]
pub enum NextAction {
    /// Validation failed; the named fields are flagged, nothing is sent
    Blocked(Vec<&'static str>),
    /// Persist this payload with this plan, then call `commit_next`
    Save {
        plan: SavePlan,
        payload: Value,
        /// True when this save completes the final step
        finishing: bool,
    },
}

/// The in-memory wizard draft.
#[derive(Clone, Debug, PartialEq)]
pub struct ReportDraft {
    pub report_id: Option<i64>,
    pub step: ReportStep,
    pub fields: ReportFields,
}

impl Default for ReportDraft {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportDraft {
    pub fn new() -> Self {
        Self {
            report_id: None,
            step: ReportStep::Identify,
            fields: ReportFields::default(),
        }
    }

    /// Resume a draft whose id was cached by a previous session. Fields are
    /// refilled from the backend snapshot separately.
    pub fn resume(report_id: i64) -> Self {
        Self {
            report_id: Some(report_id),
            ..Self::new()
        }
    }

    /// Required fields of the current step that are empty.
    pub fn validate_step(&self) -> Vec<&'static str> {
        let f = &self.fields;
        let required: &[(&'static str, &str)] = match self.step {
            ReportStep::Identify => &[
                ("booking_id", &f.booking_id),
                ("report_expiry_date", &f.report_expiry_date),
                ("ghc_code", &f.ghc_code),
                ("gcc_slip_no", &f.gcc_slip_no),
            ],
            ReportStep::Systemic => &[
                ("system_cardiovascular", &f.system_cardiovascular),
                ("system_respiratory", &f.system_respiratory),
            ],
            ReportStep::Vision => &[
                ("vision_distant_unaided_left", &f.vision_distant_unaided_left),
                ("vision_distant_unaided_right", &f.vision_distant_unaided_right),
            ],
            ReportStep::Lab => &[
                ("blood_group", &f.blood_group),
                ("blood_haemoglobin", &f.blood_haemoglobin),
            ],
            ReportStep::FinalAssessment => &[
                ("radiology_chest_xray", &f.radiology_chest_xray),
                ("fit_status", &f.fit_status),
            ],
            ReportStep::Submitted => &[],
        };
        required
            .iter()
            .filter(|(_, value)| value.trim().is_empty())
            .map(|(name, _)| *name)
            .collect()
    }

    /// The current step's field subset. Groups are disjoint: a step's save
    /// never resends another step's fields.
    pub fn step_payload(&self) -> Value {
        let f = &self.fields;
        match self.step {
            ReportStep::Identify => json!({
                "booking_id": f.booking_id,
                "report_expiry_date": f.report_expiry_date,
                "ghc_code": f.ghc_code,
                "gcc_slip_no": f.gcc_slip_no,
                "height": f.height,
                "weight": f.weight,
                "bmi": f.bmi,
                "bp": f.bp,
                "pulse": f.pulse,
                "rr_min": f.rr_min,
            }),
            ReportStep::Systemic => json!({
                "system_cardiovascular": f.system_cardiovascular,
                "system_respiratory": f.system_respiratory,
                "system_gastrointestinal": f.system_gastrointestinal,
                "system_neurological": f.system_neurological,
                "system_musculoskeletal": f.system_musculoskeletal,
                "system_skin": f.system_skin,
            }),
            ReportStep::Vision => json!({
                "vision_distant_unaided_left": f.vision_distant_unaided_left,
                "vision_distant_unaided_right": f.vision_distant_unaided_right,
                "vision_colour": f.vision_colour,
                "hearing_left": f.hearing_left,
                "hearing_right": f.hearing_right,
            }),
            ReportStep::Lab => json!({
                "blood_group": f.blood_group,
                "blood_haemoglobin": f.blood_haemoglobin,
                "thick_film_malaria": f.thick_film_malaria,
                "biochem_rbs": f.biochem_rbs,
                "biochem_creatinine": f.biochem_creatinine,
                "serology_hiv": f.serology_hiv,
                "serology_hcv": f.serology_hcv,
                "serology_hbsag": f.serology_hbsag,
                "pregnancy_test": f.pregnancy_test,
            }),
            ReportStep::FinalAssessment => json!({
                "radiology_chest_xray": f.radiology_chest_xray,
                "fit_status": f.fit_status,
                "remarks": f.remarks,
            }),
            ReportStep::Submitted => json!({}),
        }
    }

    /// Decide what `Next` should do. Validation failures never reach the
    /// network; the create-vs-update decision is made only after validation
    /// passes.
    pub fn prepare_next(&self) -> NextAction {
        let missing = self.validate_step();
        if !missing.is_empty() {
            return NextAction::Blocked(missing);
        }
        let plan = match self.report_id {
            Some(id) => SavePlan::Update(id),
            None => SavePlan::Create,
        };
        NextAction::Save {
            plan,
            payload: self.step_payload(),
            finishing: self.step == ReportStep::FinalAssessment,
        }
    }

    /// Record a successful save and advance. `assigned_id` is the id the
    /// backend returned for a create; it is cached for resumption. Finishing
    /// the last step clears the cache.
    pub fn commit_next(&mut self, assigned_id: Option<i64>) {
        if let Some(id) = assigned_id {
            self.report_id = Some(id);
            storage::local_set(storage::REPORT_DRAFT_KEY, &id.to_string());
        }
        self.step = self.step.next();
        if self.step == ReportStep::Submitted {
            storage::local_remove(storage::REPORT_DRAFT_KEY);
        }
    }

    /// Step back without saving. Never blocked.
    pub fn back(&mut self) {
        if let Some(prev) = self.step.previous() {
            self.step = prev;
        }
    }

    /// Abandon the draft, clearing the cached id.
    pub fn abandon(&mut self) {
        storage::local_remove(storage::REPORT_DRAFT_KEY);
        *self = Self::new();
    }

    /// Derived BMI: weight / height² to two decimals when both are positive
    /// numbers, otherwise cleared.
    pub fn set_height(&mut self, value: String) {
        self.fields.height = value;
        self.recompute_bmi();
    }

    pub fn set_weight(&mut self, value: String) {
        self.fields.weight = value;
        self.recompute_bmi();
    }

    fn recompute_bmi(&mut self) {
        let height: Option<f64> = self.fields.height.trim().parse().ok();
        let weight: Option<f64> = self.fields.weight.trim().parse().ok();
        self.fields.bmi = match (height, weight) {
            (Some(h), Some(w)) if h > 0.0 && w > 0.0 => format!("{:.2}", w / (h * h)),
            _ => String::new(),
        };
    }

    /// Refill fields from a backend report snapshot (resume / adopt an
    /// in-flight report for a booking). Unknown keys are ignored.
    pub fn apply_snapshot(&mut self, snapshot: &serde_json::Map<String, Value>) {
        let f = &mut self.fields;
        let slots: [(&str, &mut String); 33] = [
            ("booking_id", &mut f.booking_id),
            ("report_expiry_date", &mut f.report_expiry_date),
            ("ghc_code", &mut f.ghc_code),
            ("gcc_slip_no", &mut f.gcc_slip_no),
            ("height", &mut f.height),
            ("weight", &mut f.weight),
            ("bmi", &mut f.bmi),
            ("bp", &mut f.bp),
            ("pulse", &mut f.pulse),
            ("rr_min", &mut f.rr_min),
            ("system_cardiovascular", &mut f.system_cardiovascular),
            ("system_respiratory", &mut f.system_respiratory),
            ("system_gastrointestinal", &mut f.system_gastrointestinal),
            ("system_neurological", &mut f.system_neurological),
            ("system_musculoskeletal", &mut f.system_musculoskeletal),
            ("system_skin", &mut f.system_skin),
            ("vision_distant_unaided_left", &mut f.vision_distant_unaided_left),
            ("vision_distant_unaided_right", &mut f.vision_distant_unaided_right),
            ("vision_colour", &mut f.vision_colour),
            ("hearing_left", &mut f.hearing_left),
            ("hearing_right", &mut f.hearing_right),
            ("blood_group", &mut f.blood_group),
            ("blood_haemoglobin", &mut f.blood_haemoglobin),
            ("thick_film_malaria", &mut f.thick_film_malaria),
            ("biochem_rbs", &mut f.biochem_rbs),
            ("biochem_creatinine", &mut f.biochem_creatinine),
            ("serology_hiv", &mut f.serology_hiv),
            ("serology_hcv", &mut f.serology_hcv),
            ("serology_hbsag", &mut f.serology_hbsag),
            ("pregnancy_test", &mut f.pregnancy_test),
            ("radiology_chest_xray", &mut f.radiology_chest_xray),
            ("fit_status", &mut f.fit_status),
            ("remarks", &mut f.remarks),
        ];
        for (key, slot) in slots {
            if let Some(value) = snapshot.get(key) {
                match value {
                    Value::String(s) => *slot = s.clone(),
                    Value::Number(n) => *slot = n.to_string(),
                    _ => {}
                }
            }
        }
    }

    /// The id cached by a previous session, if any.
    pub fn cached_report_id() -> Option<i64> {
        storage::local_get(storage::REPORT_DRAFT_KEY)?.parse().ok()
    }
}
