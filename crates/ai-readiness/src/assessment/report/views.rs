use chrono::{DateTime, Utc};
use serde::Serialize;

use super::super::domain::{Department, MaturityLevel, MaturityScore, QuickWin, Segment, Submission};
use super::super::record::{AssessmentId, StoredAssessment};

#[derive(Debug, Clone, Serialize)]
pub struct DepartmentRatingEntry {
    pub department: Department,
    pub label: &'static str,
    pub score: u8,
    pub maturity_label: &'static str,
}

impl DepartmentRatingEntry {
    pub fn new(department: Department, level: MaturityLevel) -> Self {
        Self {
            department,
            label: department.label(),
            score: level.value(),
            maturity_label: level.label(),
        }
    }
}

/// Everything the results page shows for one assessment.
#[derive(Debug, Clone, Serialize)]
pub struct AssessmentResults {
    pub id: AssessmentId,
    pub created_at: DateTime<Utc>,
    pub maturity_score: MaturityScore,
    pub max_score: u8,
    pub segment: Segment,
    pub segment_description: &'static str,
    pub departments: Vec<DepartmentRatingEntry>,
    pub lowest_departments: Vec<DepartmentRatingEntry>,
    pub quick_wins: Vec<QuickWin>,
    pub consultant_brief: String,
    pub submission: Submission,
}

/// Response returned once an assessment has been stored.
#[derive(Debug, Clone, Serialize)]
pub struct StoredAssessmentView {
    pub id: AssessmentId,
    pub created_at: DateTime<Utc>,
    pub maturity_score: MaturityScore,
    pub segment: Segment,
}

impl From<&StoredAssessment> for StoredAssessmentView {
    fn from(record: &StoredAssessment) -> Self {
        Self {
            id: record.id.clone(),
            created_at: record.created_at,
            maturity_score: record.maturity_score,
            segment: record.segment,
        }
    }
}

/// One row of the admin listing and CSV export.
#[derive(Debug, Clone, Serialize)]
pub struct AssessmentRow {
    pub id: AssessmentId,
    pub created_at: DateTime<Utc>,
    pub company_name: String,
    pub industry: String,
    pub employees: &'static str,
    pub email: String,
    pub maturity_score: MaturityScore,
    pub segment: Segment,
}

impl From<&StoredAssessment> for AssessmentRow {
    fn from(record: &StoredAssessment) -> Self {
        Self {
            id: record.id.clone(),
            created_at: record.created_at,
            company_name: record.company_name.clone(),
            industry: record.industry.clone(),
            employees: record.employees.label(),
            email: record.email.clone(),
            maturity_score: record.maturity_score,
            segment: record.segment,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SegmentCount {
    pub segment: Segment,
    pub count: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct AdminOverview {
    pub total_assessments: usize,
    pub unique_users: usize,
    pub average_score: f32,
    pub segment_distribution: Vec<SegmentCount>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub most_common_segment: Option<Segment>,
    pub assessments: Vec<AssessmentRow>,
}
