//! Resume form state and per-field update operations
//!
//! The model is a caller-owned value: every keystroke in the UI maps to one
//! `update_*` call, which stores the raw input, flips the relevant messages
//! in the [`ErrorSet`], and marks the form as having unsettled edits. Input
//! is never rejected, only flagged.

use chrono::{Datelike, Local};

use super::errors::{
    ErrorSet, INVALID_EMAIL_ERROR, INVALID_PHONE_ERROR, INVALID_YEAR_ERROR, YEAR_TOO_HIGH_ERROR,
    YEAR_TOO_LOW_ERROR,
};
use super::validate::{is_safe_integer, is_valid_email, is_valid_phone, parse_leading_int};

/// Earliest accepted graduation year
pub const MIN_GRAD_YEAR: i64 = 1976;
/// Latest accepted graduation year
pub const MAX_GRAD_YEAR: i64 = 2040;

/// Development focus choices offered by the form
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Focus {
    #[default]
    FullStack,
    FrontEnd,
    BackEnd,
}

impl Focus {
    pub const ALL: [Focus; 3] = [Focus::FullStack, Focus::FrontEnd, Focus::BackEnd];

    pub fn label(&self) -> &'static str {
        match self {
            Focus::FullStack => "Full Stack",
            Focus::FrontEnd => "Front End",
            Focus::BackEnd => "Back End",
        }
    }

    pub fn next(self) -> Self {
        let idx = Self::ALL.iter().position(|f| *f == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> Self {
        let idx = Self::ALL.iter().position(|f| *f == self).unwrap_or(0);
        Self::ALL[(idx + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// Skill checkboxes offered by the form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Skill {
    TypeScript,
    Python,
    Css,
    React,
    Php,
    Databases,
    Docker,
    Git,
}

impl Skill {
    pub const ALL: [Skill; 8] = [
        Skill::TypeScript,
        Skill::Python,
        Skill::Css,
        Skill::React,
        Skill::Php,
        Skill::Databases,
        Skill::Docker,
        Skill::Git,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Skill::TypeScript => "TypeScript",
            Skill::Python => "Python",
            Skill::Css => "CSS",
            Skill::React => "React",
            Skill::Php => "PHP",
            Skill::Databases => "Databases",
            Skill::Docker => "Docker",
            Skill::Git => "Git",
        }
    }
}

/// Experience ranges offered by the form
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Experience {
    #[default]
    None,
    OneToTwo,
    ThreeToFive,
    FiveToTen,
    TenPlus,
}

impl Experience {
    pub const ALL: [Experience; 5] = [
        Experience::None,
        Experience::OneToTwo,
        Experience::ThreeToFive,
        Experience::FiveToTen,
        Experience::TenPlus,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Experience::None => "No experience",
            Experience::OneToTwo => "1-2 years",
            Experience::ThreeToFive => "3-5 years",
            Experience::FiveToTen => "5-10 years",
            Experience::TenPlus => "10+ years",
        }
    }

    pub fn next(self) -> Self {
        let idx = Self::ALL.iter().position(|e| *e == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> Self {
        let idx = Self::ALL.iter().position(|e| *e == self).unwrap_or(0);
        Self::ALL[(idx + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// Debounced indicator of "edit activity settled"
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SaveStatus {
    #[default]
    Ready,
    Saving,
    Saved,
}

impl SaveStatus {
    pub fn label(&self) -> &'static str {
        match self {
            SaveStatus::Ready => "Ready",
            SaveStatus::Saving => "Saving...",
            SaveStatus::Saved => "Saved",
        }
    }
}

/// Current value of every form field.
///
/// `None` on a numeric field stands in for a value that did not parse;
/// everything else is echoed back exactly as typed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResumeForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub objective: String,
    pub degree: String,
    /// `None` when the last input did not parse to a number
    pub grad_year: Option<i64>,
    pub focus: Focus,
    /// Insertion-ordered, duplicate-free
    pub skills: Vec<Skill>,
    pub experience: Experience,
    /// The slider keeps this in 1-10; the model stores whatever it is handed
    pub confidence_level: Option<i64>,
    pub start_date: String,
}

impl Default for ResumeForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            phone: String::new(),
            objective: String::new(),
            degree: String::new(),
            grad_year: Some(current_year()),
            focus: Focus::default(),
            skills: Vec::new(),
            experience: Experience::default(),
            confidence_level: Some(5),
            start_date: Local::now().format("%Y-%m-%d").to_string(),
        }
    }
}

/// Current calendar year, the default and reset value for `grad_year`
pub fn current_year() -> i64 {
    i64::from(Local::now().year())
}

/// The form model: field values, active validation messages, and the
/// debounced save status.
#[derive(Debug, Clone, Default)]
pub struct ResumeState {
    pub form: ResumeForm,
    pub errors: ErrorSet,
    pub save_status: SaveStatus,
    revision: u64,
}

impl ResumeState {
    /// Revision counter, bumped by every mutation. The autosave task records
    /// the revision it was scheduled for; [`ResumeState::settle`] ignores
    /// notifications carrying a stale one.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    fn touch(&mut self) {
        self.revision += 1;
        self.save_status = SaveStatus::Saving;
    }

    pub fn update_name(&mut self, raw: &str) {
        self.form.name = raw.to_string();
        self.touch();
    }

    pub fn update_email(&mut self, raw: &str) {
        self.form.email = raw.to_string();
        self.errors.set(INVALID_EMAIL_ERROR, is_valid_email(raw));
        self.touch();
    }

    pub fn update_phone(&mut self, raw: &str) {
        self.form.phone = raw.to_string();
        self.errors.set(INVALID_PHONE_ERROR, is_valid_phone(raw));
        self.touch();
    }

    pub fn update_objective(&mut self, raw: &str) {
        self.form.objective = raw.to_string();
        self.touch();
    }

    pub fn update_degree(&mut self, raw: &str) {
        self.form.degree = raw.to_string();
        self.touch();
    }

    /// Empty input resets the year to the current one and clears all three
    /// year messages. Anything else is stored as parsed, even when invalid,
    /// so the field reflects what the user typed.
    pub fn update_grad_year(&mut self, raw: &str) {
        if raw.is_empty() {
            self.form.grad_year = Some(current_year());
            self.errors.set(INVALID_YEAR_ERROR, true);
            self.errors.set(YEAR_TOO_LOW_ERROR, true);
            self.errors.set(YEAR_TOO_HIGH_ERROR, true);
        } else {
            let parsed = parse_leading_int(raw);
            self.form.grad_year = parsed;
            match parsed {
                Some(year) if is_safe_integer(year) => {
                    self.errors.set(INVALID_YEAR_ERROR, true);
                    self.errors.set(YEAR_TOO_LOW_ERROR, year >= MIN_GRAD_YEAR);
                    self.errors.set(YEAR_TOO_HIGH_ERROR, year <= MAX_GRAD_YEAR);
                }
                // Range cannot be judged on a non-number or unsafe value
                _ => {
                    self.errors.set(INVALID_YEAR_ERROR, false);
                    self.errors.set(YEAR_TOO_LOW_ERROR, true);
                    self.errors.set(YEAR_TOO_HIGH_ERROR, true);
                }
            }
        }
        self.touch();
    }

    pub fn update_focus(&mut self, focus: Focus) {
        self.form.focus = focus;
        self.touch();
    }

    /// Idempotent both ways: adding a present skill and removing an absent
    /// one are no-ops for the set (the edit still counts as activity).
    pub fn update_skills(&mut self, skill: Skill, included: bool) {
        if included {
            if !self.form.skills.contains(&skill) {
                self.form.skills.push(skill);
            }
        } else {
            self.form.skills.retain(|s| *s != skill);
        }
        self.touch();
    }

    pub fn update_experience(&mut self, experience: Experience) {
        self.form.experience = experience;
        self.touch();
    }

    /// Passthrough store; the slider control already constrains the range
    pub fn update_confidence_level(&mut self, raw: &str) {
        self.form.confidence_level = parse_leading_int(raw);
        self.touch();
    }

    pub fn update_start_date(&mut self, raw: &str) {
        self.form.start_date = raw.to_string();
        self.touch();
    }

    /// Called when the debounce window for `revision` elapses. A stale
    /// revision means another edit superseded the timer; it is ignored.
    /// Returns whether the status actually flipped to `Saved`.
    pub fn settle(&mut self, revision: u64) -> bool {
        if revision == self.revision && self.save_status == SaveStatus::Saving {
            self.save_status = SaveStatus::Saved;
            true
        } else {
            false
        }
    }
}
