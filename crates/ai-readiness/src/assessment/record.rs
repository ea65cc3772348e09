use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::domain::{
    AiPolicy, AiUsageLevel, AssessmentError, DepartmentScores, EmployeeBracket, MaturityScore,
    Segment, Submission,
};

/// Identifier assigned when an assessment is persisted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AssessmentId(pub String);

impl std::fmt::Display for AssessmentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Persisted shape of an assessment. Field names follow the storage schema
/// (`company_name`, `department_scores`, `wants_call`, ...) rather than the
/// camelCase names of [`Submission`]; the department keys inside
/// `department_scores` stay camelCase.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredAssessment {
    pub id: AssessmentId,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
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
    pub maturity_score: MaturityScore,
    pub segment: Segment,
}

impl StoredAssessment {
    /// Map a scored submission onto the storage schema.
    pub fn from_submission(
        id: AssessmentId,
        created_at: DateTime<Utc>,
        user_id: Option<String>,
        submission: Submission,
    ) -> Result<Self, AssessmentError> {
        let (maturity_score, segment) = submission.derived()?;
        Ok(Self {
            id,
            created_at,
            user_id,
            timestamp: submission.timestamp,
            company_name: submission.company_name,
            industry: submission.industry,
            employees: submission.employees,
            role: submission.role,
            country: submission.country,
            goals: submission.goals,
            time_wasters: submission.time_wasters,
            ai_usage_level: submission.ai_usage_level,
            ai_tools: submission.ai_tools,
            other_ai_tools: submission.other_ai_tools,
            ai_users: submission.ai_users,
            department_scores: submission.department_scores,
            automated_processes: submission.automated_processes,
            data_storage: submission.data_storage,
            core_systems: submission.core_systems,
            ai_policy: submission.ai_policy,
            data_types: submission.data_types,
            biggest_concern: submission.biggest_concern,
            email: submission.email,
            wants_call: submission.wants_call,
            comments: submission.comments,
            maturity_score,
            segment,
        })
    }

    /// Rebuild the in-memory submission.
    pub fn to_submission(&self) -> Submission {
        Submission {
            timestamp: self.timestamp.clone(),
            company_name: self.company_name.clone(),
            industry: self.industry.clone(),
            employees: self.employees,
            role: self.role.clone(),
            country: self.country.clone(),
            goals: self.goals.clone(),
            time_wasters: self.time_wasters.clone(),
            ai_usage_level: self.ai_usage_level,
            ai_tools: self.ai_tools.clone(),
            other_ai_tools: self.other_ai_tools.clone(),
            ai_users: self.ai_users.clone(),
            department_scores: self.department_scores,
            automated_processes: self.automated_processes.clone(),
            data_storage: self.data_storage.clone(),
            core_systems: self.core_systems.clone(),
            ai_policy: self.ai_policy,
            data_types: self.data_types.clone(),
            biggest_concern: self.biggest_concern.clone(),
            email: self.email.clone(),
            wants_call: self.wants_call,
            comments: self.comments.clone(),
            maturity_score: Some(self.maturity_score),
            segment: Some(self.segment),
        }
    }
}
