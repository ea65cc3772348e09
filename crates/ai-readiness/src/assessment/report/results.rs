use super::super::brief::{format_brief_in, BriefTimezone};
use super::super::domain::{AssessmentError, MaturityScore};
use super::super::quick_wins::QuickWinCatalog;
use super::super::record::StoredAssessment;
use super::super::scoring::lowest_departments;
use super::views::{AssessmentResults, DepartmentRatingEntry};

/// Derive recommendations and the consultant brief for a stored assessment.
pub fn build_results(
    record: &StoredAssessment,
    catalog: &QuickWinCatalog,
    timezone: BriefTimezone,
) -> Result<AssessmentResults, AssessmentError> {
    let submission = record.to_submission();
    let (maturity_score, segment) = submission.derived()?;
    let ratings = submission.department_scores;

    let lowest = lowest_departments(&ratings);
    let quick_wins = catalog.recommend(&lowest);
    let consultant_brief = format_brief_in(&submission, timezone)?;

    Ok(AssessmentResults {
        id: record.id.clone(),
        created_at: record.created_at,
        maturity_score,
        max_score: MaturityScore::MAX,
        segment,
        segment_description: segment.description(),
        departments: ratings
            .entries()
            .into_iter()
            .map(|(department, level)| DepartmentRatingEntry::new(department, level))
            .collect(),
        lowest_departments: lowest
            .into_iter()
            .map(|department| DepartmentRatingEntry::new(department, ratings.get(department)))
            .collect(),
        quick_wins,
        consultant_brief,
        submission,
    })
}
