use super::super::domain::Segment;
use super::super::record::StoredAssessment;
use super::views::{AdminOverview, AssessmentRow, SegmentCount};
use std::collections::HashSet;

pub fn build_overview(records: &[StoredAssessment]) -> AdminOverview {
    let mut ordered: Vec<&StoredAssessment> = records.iter().collect();
    ordered.sort_by(|a, b| b.created_at.cmp(&a.created_at));

    let total_assessments = ordered.len();
    let average_score = if total_assessments > 0 {
        let sum: u32 = ordered
            .iter()
            .map(|record| u32::from(record.maturity_score.value()))
            .sum();
        let mean = sum as f32 / total_assessments as f32;
        (mean * 10.0).round() / 10.0
    } else {
        0.0
    };

    let unique_users = ordered
        .iter()
        .filter_map(|record| record.user_id.as_deref())
        .filter(|user| !user.is_empty())
        .collect::<HashSet<_>>()
        .len();

    let segment_distribution: Vec<SegmentCount> = Segment::ordered()
        .into_iter()
        .map(|segment| SegmentCount {
            segment,
            count: ordered
                .iter()
                .filter(|record| record.segment == segment)
                .count(),
        })
        .filter(|entry| entry.count > 0)
        .collect();

    // Ties go to the lower segment.
    let most_common_segment = segment_distribution
        .iter()
        .fold(None::<&SegmentCount>, |best, entry| match best {
            Some(current) if current.count >= entry.count => Some(current),
            _ => Some(entry),
        })
        .map(|entry| entry.segment);

    AdminOverview {
        total_assessments,
        unique_users,
        average_score,
        segment_distribution,
        most_common_segment,
        assessments: ordered.into_iter().map(AssessmentRow::from).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assessment::tests::common::stored_assessment;
    use chrono::Duration;

    #[test]
    fn empty_listing_has_neutral_stats() {
        let overview = build_overview(&[]);
        assert_eq!(overview.total_assessments, 0);
        assert_eq!(overview.average_score, 0.0);
        assert!(overview.segment_distribution.is_empty());
        assert!(overview.most_common_segment.is_none());
    }

    #[test]
    fn overview_summarizes_scores_users_and_segments() {
        let mut first = stored_assessment("asmt-1", [0, 0, 0, 0, 1, 1]);
        first.user_id = Some("user-a".to_string());
        let mut second = stored_assessment("asmt-2", [1, 1, 1, 1, 1, 1]);
        second.user_id = Some("user-a".to_string());
        second.created_at = first.created_at + Duration::hours(1);
        let mut third = stored_assessment("asmt-3", [3, 3, 3, 3, 2, 2]);
        third.user_id = None;
        third.created_at = first.created_at + Duration::hours(2);

        let overview = build_overview(&[first, second, third]);

        assert_eq!(overview.total_assessments, 3);
        assert_eq!(overview.unique_users, 1);
        // (2 + 6 + 16) / 3 = 8.0
        assert_eq!(overview.average_score, 8.0);
        assert_eq!(
            overview.segment_distribution,
            vec![
                SegmentCount { segment: Segment::Starter, count: 1 },
                SegmentCount { segment: Segment::Explorer, count: 1 },
                SegmentCount { segment: Segment::Scaler, count: 1 },
            ]
        );
        assert_eq!(overview.most_common_segment, Some(Segment::Starter));
        let ids: Vec<_> = overview.assessments.iter().map(|row| row.id.0.as_str()).collect();
        assert_eq!(ids, ["asmt-3", "asmt-2", "asmt-1"]);
    }

    #[test]
    fn average_is_rounded_to_one_decimal() {
        let records = [
            stored_assessment("a", [1, 0, 0, 0, 0, 0]),
            stored_assessment("b", [1, 1, 0, 0, 0, 0]),
            stored_assessment("c", [1, 1, 0, 0, 0, 0]),
        ];
        // 5 / 3 = 1.666...
        assert_eq!(build_overview(&records).average_score, 1.7);
    }

    #[test]
    fn most_common_segment_prefers_the_larger_group() {
        let records = [
            stored_assessment("a", [0; 6]),
            stored_assessment("b", [2; 6]),
            stored_assessment("c", [2, 2, 2, 2, 2, 1]),
        ];
        let overview = build_overview(&records);
        assert_eq!(overview.most_common_segment, Some(Segment::Implementer));
    }
}
