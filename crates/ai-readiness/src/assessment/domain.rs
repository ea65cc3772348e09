use serde::{Deserialize, Serialize};
use std::fmt;

/// Precondition violations raised by the scoring core.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AssessmentError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

impl AssessmentError {
    pub(crate) fn invalid(detail: impl Into<String>) -> Self {
        Self::InvalidInput(detail.into())
    }
}

/// The six business functions rated during an assessment, in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Department {
    CustomerService,
    Sales,
    Marketing,
    Operations,
    Finance,
    Hr,
}

impl Department {
    pub const fn ordered() -> [Self; 6] {
        [
            Self::CustomerService,
            Self::Sales,
            Self::Marketing,
            Self::Operations,
            Self::Finance,
            Self::Hr,
        ]
    }

    /// Stable key used in stored payloads and HTTP requests.
    pub const fn key(self) -> &'static str {
        match self {
            Self::CustomerService => "customerService",
            Self::Sales => "sales",
            Self::Marketing => "marketing",
            Self::Operations => "operations",
            Self::Finance => "finance",
            Self::Hr => "hr",
        }
    }

    /// Label shown in the form and the consultant brief.
    pub const fn label(self) -> &'static str {
        match self {
            Self::CustomerService => "Customer Service",
            Self::Sales => "Sales",
            Self::Marketing => "Marketing",
            Self::Operations => "Operations / Delivery",
            Self::Finance => "Finance / Admin",
            Self::Hr => "HR / People",
        }
    }

    /// Compact label attached to quick-win recommendations.
    pub const fn short_label(self) -> &'static str {
        match self {
            Self::CustomerService => "Customer Service",
            Self::Sales => "Sales",
            Self::Marketing => "Marketing",
            Self::Operations => "Operations",
            Self::Finance => "Finance",
            Self::Hr => "HR",
        }
    }

    pub fn from_key(key: &str) -> Result<Self, AssessmentError> {
        Self::ordered()
            .into_iter()
            .find(|department| department.key() == key.trim())
            .ok_or_else(|| AssessmentError::invalid(format!("unknown department key '{key}'")))
    }
}

impl fmt::Display for Department {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Depth of AI adoption within one department (0-3).
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(try_from = "u8", into = "u8")]
pub enum MaturityLevel {
    #[default]
    NotUsing,
    Experimenting,
    Implemented,
    Embedded,
}

impl MaturityLevel {
    pub const fn ordered() -> [Self; 4] {
        [
            Self::NotUsing,
            Self::Experimenting,
            Self::Implemented,
            Self::Embedded,
        ]
    }

    pub const fn value(self) -> u8 {
        match self {
            Self::NotUsing => 0,
            Self::Experimenting => 1,
            Self::Implemented => 2,
            Self::Embedded => 3,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::NotUsing => "Not using",
            Self::Experimenting => "Experimenting",
            Self::Implemented => "Implemented",
            Self::Embedded => "Embedded",
        }
    }
}

impl TryFrom<u8> for MaturityLevel {
    type Error = AssessmentError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::ordered()
            .get(usize::from(value))
            .copied()
            .ok_or_else(|| {
                AssessmentError::invalid(format!("department rating {value} is outside 0-3"))
            })
    }
}

impl From<MaturityLevel> for u8 {
    fn from(level: MaturityLevel) -> Self {
        level.value()
    }
}

/// Rating for each of the six departments. The key set is fixed: deserializing a
/// payload with a missing or unknown department fails.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct DepartmentScores {
    pub customer_service: MaturityLevel,
    pub sales: MaturityLevel,
    pub marketing: MaturityLevel,
    pub operations: MaturityLevel,
    pub finance: MaturityLevel,
    pub hr: MaturityLevel,
}

impl DepartmentScores {
    pub const fn uniform(level: MaturityLevel) -> Self {
        Self {
            customer_service: level,
            sales: level,
            marketing: level,
            operations: level,
            finance: level,
            hr: level,
        }
    }

    /// Build ratings from raw integers in declaration order.
    pub fn from_values(values: [u8; 6]) -> Result<Self, AssessmentError> {
        let mut scores = Self::default();
        for (department, value) in Department::ordered().into_iter().zip(values) {
            scores.set(department, MaturityLevel::try_from(value)?);
        }
        Ok(scores)
    }

    pub const fn get(&self, department: Department) -> MaturityLevel {
        match department {
            Department::CustomerService => self.customer_service,
            Department::Sales => self.sales,
            Department::Marketing => self.marketing,
            Department::Operations => self.operations,
            Department::Finance => self.finance,
            Department::Hr => self.hr,
        }
    }

    pub fn set(&mut self, department: Department, level: MaturityLevel) {
        let slot = match department {
            Department::CustomerService => &mut self.customer_service,
            Department::Sales => &mut self.sales,
            Department::Marketing => &mut self.marketing,
            Department::Operations => &mut self.operations,
            Department::Finance => &mut self.finance,
            Department::Hr => &mut self.hr,
        };
        *slot = level;
    }

    /// Entries in declaration order.
    pub fn entries(&self) -> [(Department, MaturityLevel); 6] {
        Department::ordered().map(|department| (department, self.get(department)))
    }

    pub fn any_at_least(&self, level: MaturityLevel) -> bool {
        self.entries().iter().any(|(_, rating)| *rating >= level)
    }
}

/// Sum of the six department ratings, always within 0..=18.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct MaturityScore(pub(super) u8);

impl MaturityScore {
    pub const MAX: u8 = 18;

    pub fn new(value: u8) -> Result<Self, AssessmentError> {
        if value > Self::MAX {
            return Err(AssessmentError::invalid(format!(
                "maturity score {value} exceeds maximum {}",
                Self::MAX
            )));
        }
        Ok(Self(value))
    }

    pub const fn value(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for MaturityScore {
    type Error = AssessmentError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<MaturityScore> for u8 {
    fn from(score: MaturityScore) -> Self {
        score.0
    }
}

impl fmt::Display for MaturityScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Ordinal maturity classification derived from the score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Segment {
    Starter,
    Explorer,
    Implementer,
    Scaler,
}

impl Segment {
    pub const fn ordered() -> [Self; 4] {
        [Self::Starter, Self::Explorer, Self::Implementer, Self::Scaler]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Starter => "Starter",
            Self::Explorer => "Explorer",
            Self::Implementer => "Implementer",
            Self::Scaler => "Scaler",
        }
    }

    pub const fn description(self) -> &'static str {
        match self {
            Self::Starter => "You're at the beginning of your AI journey. Focus on quick wins and building foundational knowledge.",
            Self::Explorer => "You're experimenting with AI tools. Time to identify high-impact use cases and scale what works.",
            Self::Implementer => "You're actively implementing AI across departments. Focus on integration and measuring ROI.",
            Self::Scaler => "You're an AI leader! Focus on optimization, advanced use cases, and sharing best practices.",
        }
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EmployeeBracket {
    #[serde(rename = "1")]
    Solo,
    #[serde(rename = "2–5")]
    TwoToFive,
    #[serde(rename = "6–15")]
    SixToFifteen,
    #[serde(rename = "16–50")]
    SixteenToFifty,
    #[serde(rename = "51–200")]
    FiftyOneToTwoHundred,
    #[serde(rename = "200+")]
    OverTwoHundred,
}

impl EmployeeBracket {
    pub const fn ordered() -> [Self; 6] {
        [
            Self::Solo,
            Self::TwoToFive,
            Self::SixToFifteen,
            Self::SixteenToFifty,
            Self::FiftyOneToTwoHundred,
            Self::OverTwoHundred,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Solo => "1",
            Self::TwoToFive => "2–5",
            Self::SixToFifteen => "6–15",
            Self::SixteenToFifty => "16–50",
            Self::FiftyOneToTwoHundred => "51–200",
            Self::OverTwoHundred => "200+",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AiUsageLevel {
    #[serde(rename = "Not at all")]
    NotAtAll,
    #[serde(rename = "Tried it")]
    TriedIt,
    #[serde(rename = "Using weekly")]
    Weekly,
    #[serde(rename = "Using daily")]
    Daily,
    #[serde(rename = "Built into tools we pay for")]
    BuiltIntoTools,
}

impl AiUsageLevel {
    pub const fn ordered() -> [Self; 5] {
        [
            Self::NotAtAll,
            Self::TriedIt,
            Self::Weekly,
            Self::Daily,
            Self::BuiltIntoTools,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::NotAtAll => "Not at all",
            Self::TriedIt => "Tried it",
            Self::Weekly => "Using weekly",
            Self::Daily => "Using daily",
            Self::BuiltIntoTools => "Built into tools we pay for",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AiPolicy {
    #[serde(rename = "No")]
    NoPolicy,
    #[serde(rename = "Informal")]
    Informal,
    #[serde(rename = "Basic guidelines")]
    BasicGuidelines,
    #[serde(rename = "Clear policy + training")]
    ClearPolicyAndTraining,
}

impl AiPolicy {
    pub const fn ordered() -> [Self; 4] {
        [
            Self::NoPolicy,
            Self::Informal,
            Self::BasicGuidelines,
            Self::ClearPolicyAndTraining,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::NoPolicy => "No",
            Self::Informal => "Informal",
            Self::BasicGuidelines => "Basic guidelines",
            Self::ClearPolicyAndTraining => "Clear policy + training",
        }
    }
}

/// Complete record of one respondent's answers plus the derived score and segment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Submission {
    pub timestamp: String,
    pub company_name: String,
    pub industry: String,
    pub employees: EmployeeBracket,
    pub role: String,
    pub country: String,
    pub goals: Vec<String>,
    pub time_wasters: Vec<String>,
    pub ai_usage_level: AiUsageLevel,
    pub ai_tools: Vec<String>,
    #[serde(default)]
    pub other_ai_tools: String,
    pub ai_users: Vec<String>,
    pub department_scores: DepartmentScores,
    #[serde(default)]
    pub automated_processes: Vec<String>,
    pub data_storage: String,
    pub core_systems: Vec<String>,
    pub ai_policy: AiPolicy,
    pub data_types: Vec<String>,
    pub biggest_concern: String,
    pub email: String,
    pub wants_call: bool,
    #[serde(default)]
    pub comments: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub maturity_score: Option<MaturityScore>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub segment: Option<Segment>,
}

impl Submission {
    /// Recompute score and segment from the department ratings.
    pub fn scored(mut self) -> Self {
        let score = super::scoring::score(&self.department_scores);
        self.maturity_score = Some(score);
        self.segment = Some(super::scoring::classify(score));
        self
    }

    /// Drop answers that only apply once a department is rated Implemented or
    /// higher, then recompute score and segment.
    pub fn normalized(mut self) -> Self {
        if !self
            .department_scores
            .any_at_least(MaturityLevel::Implemented)
        {
            self.automated_processes.clear();
        }
        self.scored()
    }

    /// Derived score and segment, rejecting records that were never scored or whose
    /// segment disagrees with the stored score.
    pub fn derived(&self) -> Result<(MaturityScore, Segment), AssessmentError> {
        let score = self
            .maturity_score
            .ok_or_else(|| AssessmentError::invalid("submission has not been scored"))?;
        let segment = self
            .segment
            .ok_or_else(|| AssessmentError::invalid("submission is missing its segment"))?;
        let expected = super::scoring::classify(score);
        if segment != expected {
            return Err(AssessmentError::invalid(format!(
                "segment {segment} does not match score {score} (expected {expected})"
            )));
        }
        Ok((score, segment))
    }

    /// Check the record-level invariants a finalized submission must satisfy.
    pub fn validate(&self) -> Result<(), AssessmentError> {
        use super::catalog;

        let required = [
            ("companyName", self.company_name.as_str()),
            ("industry", self.industry.as_str()),
            ("role", self.role.as_str()),
            ("country", self.country.as_str()),
        ];
        if let Some((field, _)) = required.iter().find(|(_, value)| value.trim().is_empty()) {
            return Err(AssessmentError::invalid(format!("{field} is required")));
        }

        if chrono::DateTime::parse_from_rfc3339(self.timestamp.trim()).is_err() {
            return Err(AssessmentError::invalid(format!(
                "timestamp '{}' is not an RFC 3339 instant",
                self.timestamp
            )));
        }

        let answered = [
            ("goals", self.goals.is_empty()),
            ("timeWasters", self.time_wasters.is_empty()),
            ("aiUsers", self.ai_users.is_empty()),
            ("dataStorage", self.data_storage.trim().is_empty()),
            ("biggestConcern", self.biggest_concern.trim().is_empty()),
        ];
        if let Some((field, _)) = answered.iter().find(|(_, missing)| *missing) {
            return Err(AssessmentError::invalid(format!("{field} is required")));
        }

        let capped = [
            ("goals", &self.goals, catalog::GOAL_LIMIT),
            ("timeWasters", &self.time_wasters, catalog::TIME_WASTER_LIMIT),
            ("coreSystems", &self.core_systems, catalog::CORE_SYSTEM_LIMIT),
        ];
        for (field, values, limit) in capped {
            if values.len() > limit {
                return Err(AssessmentError::invalid(format!(
                    "{field} allows at most {limit} selections, found {}",
                    values.len()
                )));
            }
        }

        let sentinels = [
            ("aiTools", &self.ai_tools, catalog::NO_AI_TOOLS),
            ("aiUsers", &self.ai_users, catalog::NO_AI_USERS),
            ("dataTypes", &self.data_types, catalog::NO_DATA_TYPES),
        ];
        for (field, values, sentinel) in sentinels {
            if values.len() > 1 && values.iter().any(|value| value == sentinel) {
                return Err(AssessmentError::invalid(format!(
                    "{field} cannot combine '{sentinel}' with other selections"
                )));
            }
        }

        if !catalog::is_valid_email(&self.email) {
            return Err(AssessmentError::invalid(format!(
                "email '{}' is not a valid address",
                self.email
            )));
        }

        if self.comments.chars().count() > catalog::COMMENT_LIMIT {
            return Err(AssessmentError::invalid(format!(
                "comments exceed {} characters",
                catalog::COMMENT_LIMIT
            )));
        }

        Ok(())
    }
}

/// Catalog recommendation tied to a single department.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuickWin {
    pub title: &'static str,
    pub description: &'static str,
    pub department: Department,
    pub department_label: &'static str,
}

impl QuickWin {
    pub const fn new(
        department: Department,
        title: &'static str,
        description: &'static str,
    ) -> Self {
        Self {
            title,
            description,
            department,
            department_label: department.short_label(),
        }
    }
}
