use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use chrono::Utc;
use serde::Deserialize;
use tracing::{info, warn};

use super::brief::BriefTimezone;
use super::domain::{AssessmentError, Submission};
use super::draft::{AssessmentDraft, ValidationErrors};
use super::quick_wins::QuickWinCatalog;
use super::record::{AssessmentId, StoredAssessment};
use super::report::views::{AdminOverview, AssessmentResults};
use super::report::{build_overview, build_results, export_csv, ExportError};
use super::repository::{AssessmentRepository, RepositoryError};

/// Payload accepted when a finished assessment is stored.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitAssessment {
    pub submission: Submission,
    #[serde(default)]
    pub user_id: Option<String>,
}

/// Service composing the repository, the quick-win catalog, and brief rendering.
pub struct AssessmentService<R> {
    repository: Arc<R>,
    catalog: &'static QuickWinCatalog,
    timezone: BriefTimezone,
}

static ASSESSMENT_SEQUENCE: AtomicU64 = AtomicU64::new(1);

fn next_assessment_id() -> AssessmentId {
    let id = ASSESSMENT_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    AssessmentId(format!("asmt-{id:06}"))
}

impl<R> AssessmentService<R>
where
    R: AssessmentRepository + 'static,
{
    pub fn new(repository: Arc<R>, timezone: BriefTimezone) -> Self {
        Self::with_catalog(repository, QuickWinCatalog::standard(), timezone)
    }

    pub fn with_catalog(
        repository: Arc<R>,
        catalog: &'static QuickWinCatalog,
        timezone: BriefTimezone,
    ) -> Self {
        Self {
            repository,
            catalog,
            timezone,
        }
    }

    pub fn catalog(&self) -> &'static QuickWinCatalog {
        self.catalog
    }

    /// Validate and persist a finished submission. Score and segment are always
    /// recomputed from the department ratings, and automated processes are
    /// dropped unless some department is rated Implemented or higher.
    pub fn submit(
        &self,
        request: SubmitAssessment,
    ) -> Result<StoredAssessment, AssessmentServiceError> {
        let submission = request.submission.normalized();
        submission.validate()?;

        let record = StoredAssessment::from_submission(
            next_assessment_id(),
            Utc::now(),
            request.user_id.filter(|user| !user.trim().is_empty()),
            submission,
        )?;

        let stored = self.repository.insert(record)?;
        info!(
            assessment_id = %stored.id,
            maturity_score = stored.maturity_score.value(),
            segment = %stored.segment,
            "assessment stored"
        );
        Ok(stored)
    }

    /// Finalize a wizard draft and store it.
    pub fn submit_draft(
        &self,
        draft: AssessmentDraft,
        user_id: Option<String>,
    ) -> Result<StoredAssessment, AssessmentServiceError> {
        let submission = draft.finalize(Utc::now())?;
        self.submit(SubmitAssessment {
            submission,
            user_id,
        })
    }

    pub fn get(&self, id: &AssessmentId) -> Result<StoredAssessment, AssessmentServiceError> {
        match self.repository.fetch(id) {
            Ok(Some(record)) => Ok(record),
            Ok(None) => {
                warn!(assessment_id = %id, "assessment not found");
                Err(RepositoryError::NotFound.into())
            }
            Err(error) => {
                warn!(assessment_id = %id, %error, "failed to load assessment");
                Err(error.into())
            }
        }
    }

    /// Results page for a stored assessment.
    pub fn results(&self, id: &AssessmentId) -> Result<AssessmentResults, AssessmentServiceError> {
        let record = self.get(id)?;
        Ok(build_results(&record, self.catalog, self.timezone)?)
    }

    pub fn brief(&self, id: &AssessmentId) -> Result<String, AssessmentServiceError> {
        Ok(self.results(id)?.consultant_brief)
    }

    pub fn overview(&self) -> Result<AdminOverview, AssessmentServiceError> {
        let records = self.list()?;
        Ok(build_overview(&records))
    }

    pub fn export_csv(&self) -> Result<String, AssessmentServiceError> {
        let records = self.list()?;
        Ok(export_csv(&records, self.timezone)?)
    }

    fn list(&self) -> Result<Vec<StoredAssessment>, AssessmentServiceError> {
        self.repository.list().map_err(|error| {
            warn!(%error, "failed to list assessments");
            error.into()
        })
    }
}

/// Error raised by the assessment service.
#[derive(Debug, thiserror::Error)]
pub enum AssessmentServiceError {
    #[error(transparent)]
    Invalid(#[from] AssessmentError),
    #[error(transparent)]
    Validation(#[from] ValidationErrors),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
    #[error(transparent)]
    Export(#[from] ExportError),
}
