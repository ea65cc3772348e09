use std::sync::Arc;

use axum::response::Response;
use chrono::{TimeZone, Utc};
use serde_json::Value;

use crate::assessment::brief::BriefTimezone;
use crate::assessment::domain::{
    AiPolicy, AiUsageLevel, DepartmentScores, EmployeeBracket, Submission,
};
use crate::assessment::record::{AssessmentId, StoredAssessment};
use crate::assessment::repository::{
    AssessmentRepository, InMemoryAssessmentRepository, RepositoryError,
};
use crate::assessment::service::{AssessmentService, SubmitAssessment};

pub(crate) fn utc() -> BriefTimezone {
    BriefTimezone::parse("utc").expect("utc parses")
}

/// Unscored submission for Harbor Lights Studio with the given ratings.
pub(crate) fn submission(values: [u8; 6]) -> Submission {
    Submission {
        timestamp: "2025-03-15T10:00:00.000Z".to_string(),
        company_name: "Harbor Lights Studio".to_string(),
        industry: "Professional Services".to_string(),
        employees: EmployeeBracket::SixToFifteen,
        role: "Owner".to_string(),
        country: "Ireland".to_string(),
        goals: vec!["More leads".to_string(), "Reduce admin".to_string()],
        time_wasters: vec![
            "Emails & follow-ups".to_string(),
            "Quoting & proposals".to_string(),
        ],
        ai_usage_level: AiUsageLevel::Weekly,
        ai_tools: vec!["ChatGPT".to_string(), "Canva AI".to_string()],
        other_ai_tools: String::new(),
        ai_users: vec!["Owner / Leadership".to_string(), "Marketing".to_string()],
        department_scores: DepartmentScores::from_values(values).expect("ratings in range"),
        automated_processes: Vec::new(),
        data_storage: "CRM".to_string(),
        core_systems: vec!["Google Workspace".to_string(), "Xero".to_string()],
        ai_policy: AiPolicy::Informal,
        data_types: vec!["Personal customer data".to_string()],
        biggest_concern: "Data privacy".to_string(),
        email: "hello@harborlights.studio".to_string(),
        wants_call: true,
        comments: String::new(),
        maturity_score: None,
        segment: None,
    }
}

pub(crate) fn scored_submission(values: [u8; 6]) -> Submission {
    submission(values).scored()
}

pub(crate) fn stored_assessment(id: &str, values: [u8; 6]) -> StoredAssessment {
    StoredAssessment::from_submission(
        AssessmentId(id.to_string()),
        Utc.with_ymd_and_hms(2025, 3, 15, 10, 0, 0)
            .single()
            .expect("valid instant"),
        Some("user-1".to_string()),
        scored_submission(values),
    )
    .expect("scored submission maps")
}

pub(crate) fn submit_request(values: [u8; 6]) -> SubmitAssessment {
    SubmitAssessment {
        submission: submission(values),
        user_id: Some("user-1".to_string()),
    }
}

pub(crate) fn build_service() -> (
    AssessmentService<InMemoryAssessmentRepository>,
    Arc<InMemoryAssessmentRepository>,
) {
    let repository = Arc::new(InMemoryAssessmentRepository::default());
    let service = AssessmentService::new(repository.clone(), utc());
    (service, repository)
}

pub(crate) struct ConflictRepository;

impl AssessmentRepository for ConflictRepository {
    fn insert(&self, _record: StoredAssessment) -> Result<StoredAssessment, RepositoryError> {
        Err(RepositoryError::Conflict)
    }

    fn fetch(&self, _id: &AssessmentId) -> Result<Option<StoredAssessment>, RepositoryError> {
        Ok(None)
    }

    fn list(&self) -> Result<Vec<StoredAssessment>, RepositoryError> {
        Ok(Vec::new())
    }
}

pub(crate) struct UnavailableRepository;

impl AssessmentRepository for UnavailableRepository {
    fn insert(&self, _record: StoredAssessment) -> Result<StoredAssessment, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn fetch(&self, _id: &AssessmentId) -> Result<Option<StoredAssessment>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn list(&self) -> Result<Vec<StoredAssessment>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }
}

pub(crate) async fn read_body(response: Response) -> Vec<u8> {
    axum::body::to_bytes(response.into_body(), 1 << 20)
        .await
        .expect("read body")
        .to_vec()
}

pub(crate) async fn read_json_body(response: Response) -> Value {
    serde_json::from_slice(&read_body(response).await).expect("json payload")
}
