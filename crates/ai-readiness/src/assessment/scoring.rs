use super::domain::{Department, DepartmentScores, MaturityScore, Segment};

const SCALER_THRESHOLD: u8 = 15;
const IMPLEMENTER_THRESHOLD: u8 = 10;
const EXPLORER_THRESHOLD: u8 = 5;

/// Sum the six department ratings.
pub fn score(ratings: &DepartmentScores) -> MaturityScore {
    let total = ratings
        .entries()
        .iter()
        .map(|(_, level)| level.value())
        .sum();
    MaturityScore(total)
}

/// Map a score onto its segment, checking the highest threshold first.
pub fn classify(score: MaturityScore) -> Segment {
    let value = score.value();
    if value >= SCALER_THRESHOLD {
        Segment::Scaler
    } else if value >= IMPLEMENTER_THRESHOLD {
        Segment::Implementer
    } else if value >= EXPLORER_THRESHOLD {
        Segment::Explorer
    } else {
        Segment::Starter
    }
}

/// The two weakest departments. Equal ratings keep declaration order; no other
/// signal breaks ties.
pub fn lowest_departments(ratings: &DepartmentScores) -> [Department; 2] {
    let mut entries = ratings.entries();
    entries.sort_by_key(|(_, level)| *level);
    [entries[0].0, entries[1].0]
}
