//! In-progress answers collected across the seven wizard steps.

use super::catalog;
use super::domain::{
    AiPolicy, AiUsageLevel, AssessmentError, Department, DepartmentScores, EmployeeBracket,
    MaturityLevel, Submission,
};
use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AssessmentStep {
    CompanySnapshot,
    GoalsAndPainPoints,
    AiToday,
    DepartmentMaturity,
    DataAndSystems,
    RiskAndReadiness,
    Contact,
}

impl AssessmentStep {
    pub const fn ordered() -> [Self; 7] {
        [
            Self::CompanySnapshot,
            Self::GoalsAndPainPoints,
            Self::AiToday,
            Self::DepartmentMaturity,
            Self::DataAndSystems,
            Self::RiskAndReadiness,
            Self::Contact,
        ]
    }

    pub const fn number(self) -> u8 {
        match self {
            Self::CompanySnapshot => 1,
            Self::GoalsAndPainPoints => 2,
            Self::AiToday => 3,
            Self::DepartmentMaturity => 4,
            Self::DataAndSystems => 5,
            Self::RiskAndReadiness => 6,
            Self::Contact => 7,
        }
    }

    pub const fn title(self) -> &'static str {
        match self {
            Self::CompanySnapshot => "Company Snapshot",
            Self::GoalsAndPainPoints => "Goals & Pain Points",
            Self::AiToday => "AI Today",
            Self::DepartmentMaturity => "AI Maturity by Department",
            Self::DataAndSystems => "Data & Systems",
            Self::RiskAndReadiness => "Risk & Readiness",
            Self::Contact => "Contact Information",
        }
    }

    pub const fn description(self) -> &'static str {
        match self {
            Self::CompanySnapshot => "Tell us about your business",
            Self::GoalsAndPainPoints => "What are your priorities?",
            Self::AiToday => "How are you using AI currently?",
            Self::DepartmentMaturity => "Rate AI adoption across departments",
            Self::DataAndSystems => "Where do you store and manage data?",
            Self::RiskAndReadiness => "Understanding your AI concerns",
            Self::Contact => "How can we reach you?",
        }
    }

    pub fn next(self) -> Option<Self> {
        Self::ordered()
            .into_iter()
            .find(|step| step.number() == self.number() + 1)
    }

    pub fn previous(self) -> Option<Self> {
        Self::ordered()
            .into_iter()
            .find(|step| step.number() + 1 == self.number())
    }
}

/// Effect of toggling a multi-select option.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    Selected,
    Deselected,
    /// The cap was reached or a "none" sentinel blocks other values.
    Unchanged,
}

/// Per-field messages produced when a step fails validation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationErrors {
    fields: BTreeMap<&'static str, String>,
}

impl ValidationErrors {
    fn add(&mut self, field: &'static str, message: &str) {
        self.fields.insert(field, message.to_string());
    }

    fn merge(&mut self, other: ValidationErrors) {
        self.fields.extend(other.fields);
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.fields.get(field).map(String::as_str)
    }

    pub fn fields(&self) -> &BTreeMap<&'static str, String> {
        &self.fields
    }

    fn into_result(self) -> Result<(), ValidationErrors> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let details = self
            .fields
            .iter()
            .map(|(field, message)| format!("{field}: {message}"))
            .collect::<Vec<_>>()
            .join("; ");
        write!(f, "assessment is incomplete ({details})")
    }
}

impl std::error::Error for ValidationErrors {}

/// Mutable draft owned by one respondent's session. The scoring core only ever
/// sees the [`Submission`] produced by [`AssessmentDraft::finalize`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AssessmentDraft {
    company_name: String,
    industry: String,
    employees: Option<EmployeeBracket>,
    role: String,
    country: String,
    goals: Vec<String>,
    time_wasters: Vec<String>,
    ai_usage_level: Option<AiUsageLevel>,
    ai_tools: Vec<String>,
    other_ai_tools: String,
    ai_users: Vec<String>,
    department_scores: DepartmentScores,
    automated_processes: Vec<String>,
    data_storage: String,
    core_systems: Vec<String>,
    ai_policy: Option<AiPolicy>,
    data_types: Vec<String>,
    biggest_concern: String,
    email: String,
    wants_call: bool,
    comments: String,
}

impl AssessmentDraft {
    pub fn new() -> Self {
        Self::default()
    }

    // Company snapshot

    pub fn set_company_name(&mut self, name: impl Into<String>) -> &mut Self {
        self.company_name = name.into();
        self
    }

    pub fn set_industry(&mut self, industry: impl Into<String>) -> &mut Self {
        self.industry = industry.into();
        self
    }

    pub fn set_employees(&mut self, bracket: EmployeeBracket) -> &mut Self {
        self.employees = Some(bracket);
        self
    }

    pub fn set_role(&mut self, role: impl Into<String>) -> &mut Self {
        self.role = role.into();
        self
    }

    pub fn set_country(&mut self, country: impl Into<String>) -> &mut Self {
        self.country = country.into();
        self
    }

    // Goals & pain points

    pub fn toggle_goal(&mut self, goal: &str) -> Result<Selection, AssessmentError> {
        ensure_option("goal", goal, catalog::GOALS)?;
        Ok(toggle_capped(&mut self.goals, goal, Some(catalog::GOAL_LIMIT)))
    }

    pub fn toggle_time_waster(&mut self, waster: &str) -> Result<Selection, AssessmentError> {
        ensure_option("time-waster", waster, catalog::TIME_WASTERS)?;
        Ok(toggle_capped(
            &mut self.time_wasters,
            waster,
            Some(catalog::TIME_WASTER_LIMIT),
        ))
    }

    // AI today

    pub fn set_ai_usage_level(&mut self, level: AiUsageLevel) -> &mut Self {
        self.ai_usage_level = Some(level);
        self
    }

    pub fn toggle_ai_tool(&mut self, tool: &str) -> Result<Selection, AssessmentError> {
        if !catalog::is_known_ai_tool(tool) {
            return Err(AssessmentError::invalid(format!("unknown AI tool '{tool}'")));
        }
        Ok(toggle_exclusive(&mut self.ai_tools, tool, catalog::NO_AI_TOOLS))
    }

    pub fn set_other_ai_tools(&mut self, tools: impl Into<String>) -> &mut Self {
        self.other_ai_tools = tools.into();
        self
    }

    pub fn toggle_ai_user(&mut self, user: &str) -> Result<Selection, AssessmentError> {
        ensure_option("AI user", user, catalog::AI_USERS)?;
        Ok(toggle_exclusive(&mut self.ai_users, user, catalog::NO_AI_USERS))
    }

    // Department maturity

    pub fn set_department_score(
        &mut self,
        department: Department,
        level: MaturityLevel,
    ) -> &mut Self {
        self.department_scores.set(department, level);
        self
    }

    /// Automated processes only apply once a department has implemented AI.
    pub fn show_automated_processes(&self) -> bool {
        self.department_scores
            .any_at_least(MaturityLevel::Implemented)
    }

    pub fn toggle_automated_process(
        &mut self,
        process: &str,
    ) -> Result<Selection, AssessmentError> {
        ensure_option("automated process", process, catalog::AUTOMATED_PROCESSES)?;
        Ok(toggle_capped(&mut self.automated_processes, process, None))
    }

    // Data & systems

    pub fn set_data_storage(&mut self, storage: impl Into<String>) -> &mut Self {
        self.data_storage = storage.into();
        self
    }

    pub fn toggle_core_system(&mut self, system: &str) -> Result<Selection, AssessmentError> {
        ensure_option("core system", system, catalog::CORE_SYSTEMS)?;
        Ok(toggle_capped(
            &mut self.core_systems,
            system,
            Some(catalog::CORE_SYSTEM_LIMIT),
        ))
    }

    // Risk & readiness

    pub fn set_ai_policy(&mut self, policy: AiPolicy) -> &mut Self {
        self.ai_policy = Some(policy);
        self
    }

    pub fn toggle_data_type(&mut self, data_type: &str) -> Result<Selection, AssessmentError> {
        ensure_option("data type", data_type, catalog::DATA_TYPES)?;
        Ok(toggle_exclusive(
            &mut self.data_types,
            data_type,
            catalog::NO_DATA_TYPES,
        ))
    }

    pub fn set_biggest_concern(&mut self, concern: impl Into<String>) -> &mut Self {
        self.biggest_concern = concern.into();
        self
    }

    // Contact

    pub fn set_email(&mut self, email: impl Into<String>) -> &mut Self {
        self.email = email.into();
        self
    }

    pub fn set_wants_call(&mut self, wants_call: bool) -> &mut Self {
        self.wants_call = wants_call;
        self
    }

    /// Comments beyond the character limit are cut off.
    pub fn set_comments(&mut self, comments: &str) -> &mut Self {
        self.comments = comments.chars().take(catalog::COMMENT_LIMIT).collect();
        self
    }

    pub fn department_scores(&self) -> &DepartmentScores {
        &self.department_scores
    }

    pub fn validate_step(&self, step: AssessmentStep) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::default();

        match step {
            AssessmentStep::CompanySnapshot => {
                if self.company_name.trim().is_empty() {
                    errors.add("companyName", "Company name is required");
                }
                if self.industry.is_empty() {
                    errors.add("industry", "Industry is required");
                }
                if self.employees.is_none() {
                    errors.add("employees", "Number of employees is required");
                }
                if self.role.is_empty() {
                    errors.add("role", "Your role is required");
                }
                if self.country.is_empty() {
                    errors.add("country", "Country is required");
                }
            }
            AssessmentStep::GoalsAndPainPoints => {
                if self.goals.is_empty() {
                    errors.add("goals", "Select at least one goal");
                }
                if self.time_wasters.is_empty() {
                    errors.add("timeWasters", "Select at least one time-waster");
                }
            }
            AssessmentStep::AiToday => {
                if self.ai_usage_level.is_none() {
                    errors.add("aiUsageLevel", "Please select your AI usage level");
                }
                if self.ai_users.is_empty() {
                    errors.add("aiUsers", "Select who uses AI");
                }
            }
            AssessmentStep::DepartmentMaturity => {}
            AssessmentStep::DataAndSystems => {
                if self.data_storage.is_empty() {
                    errors.add("dataStorage", "Please select where customer data is stored");
                }
            }
            AssessmentStep::RiskAndReadiness => {
                if self.ai_policy.is_none() {
                    errors.add("aiPolicy", "Please select your AI usage policy");
                }
                if self.biggest_concern.is_empty() {
                    errors.add("biggestConcern", "Please select your biggest concern");
                }
            }
            AssessmentStep::Contact => {
                if self.email.trim().is_empty() {
                    errors.add("email", "Email is required");
                } else if !catalog::is_valid_email(&self.email) {
                    errors.add("email", "Please enter a valid email");
                }
            }
        }

        errors.into_result()
    }

    /// Validate every step, stamp the submission time, and score the result.
    pub fn finalize(self, submitted_at: DateTime<Utc>) -> Result<Submission, ValidationErrors> {
        let mut errors = ValidationErrors::default();
        for step in AssessmentStep::ordered() {
            if let Err(step_errors) = self.validate_step(step) {
                errors.merge(step_errors);
            }
        }

        let (Some(employees), Some(ai_usage_level), Some(ai_policy)) =
            (self.employees, self.ai_usage_level, self.ai_policy)
        else {
            return Err(errors);
        };
        errors.into_result()?;

        let submission = Submission {
            timestamp: submitted_at.to_rfc3339_opts(SecondsFormat::Millis, true),
            company_name: self.company_name.trim().to_string(),
            industry: self.industry,
            employees,
            role: self.role,
            country: self.country,
            goals: self.goals,
            time_wasters: self.time_wasters,
            ai_usage_level,
            ai_tools: self.ai_tools,
            other_ai_tools: self.other_ai_tools.trim().to_string(),
            ai_users: self.ai_users,
            department_scores: self.department_scores,
            automated_processes: self.automated_processes,
            data_storage: self.data_storage,
            core_systems: self.core_systems,
            ai_policy,
            data_types: self.data_types,
            biggest_concern: self.biggest_concern,
            email: self.email.trim().to_string(),
            wants_call: self.wants_call,
            comments: self.comments,
            maturity_score: None,
            segment: None,
        };

        Ok(submission.normalized())
    }
}

fn ensure_option(kind: &str, value: &str, options: &[&str]) -> Result<(), AssessmentError> {
    if options.contains(&value) {
        Ok(())
    } else {
        Err(AssessmentError::invalid(format!("unknown {kind} '{value}'")))
    }
}

fn toggle_capped(values: &mut Vec<String>, value: &str, cap: Option<usize>) -> Selection {
    if let Some(index) = values.iter().position(|existing| existing == value) {
        values.remove(index);
        return Selection::Deselected;
    }
    if cap.is_some_and(|limit| values.len() >= limit) {
        return Selection::Unchanged;
    }
    values.push(value.to_string());
    Selection::Selected
}

/// Selecting the sentinel replaces every other value; other values are ignored
/// while the sentinel is selected.
fn toggle_exclusive(values: &mut Vec<String>, value: &str, sentinel: &str) -> Selection {
    if value == sentinel {
        if values.iter().any(|existing| existing == sentinel) {
            values.clear();
            return Selection::Deselected;
        }
        values.clear();
        values.push(sentinel.to_string());
        return Selection::Selected;
    }
    if values.iter().any(|existing| existing == sentinel) {
        return Selection::Unchanged;
    }
    toggle_capped(values, value, None)
}
