//! AI-readiness assessment: wizard draft, scoring core, recommendations, the
//! consultant brief, persistence, and the HTTP surface around them.

pub mod brief;
pub mod catalog;
pub mod domain;
pub mod draft;
pub mod quick_wins;
pub mod record;
pub mod report;
pub mod repository;
pub mod router;
pub mod scoring;
pub mod service;

#[cfg(test)]
pub(crate) mod tests;

pub use brief::{format_brief, format_brief_in, BriefTimezone};
pub use domain::{
    AiPolicy, AiUsageLevel, AssessmentError, Department, DepartmentScores, EmployeeBracket,
    MaturityLevel, MaturityScore, QuickWin, Segment, Submission,
};
pub use draft::{AssessmentDraft, AssessmentStep, Selection, ValidationErrors};
pub use quick_wins::{quick_wins, QuickWinCatalog};
pub use record::{AssessmentId, StoredAssessment};
pub use report::views::{AdminOverview, AssessmentResults, AssessmentRow, StoredAssessmentView};
pub use repository::{AssessmentRepository, InMemoryAssessmentRepository, RepositoryError};
pub use router::assessment_router;
pub use scoring::{classify, lowest_departments, score};
pub use service::{AssessmentService, AssessmentServiceError, SubmitAssessment};
