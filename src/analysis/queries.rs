use crate::gradebook::Gradebook;

/// Students at or above a mark in the first of two subjects, and in both.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PairDistinction {
    pub first_subject: String,
    pub second_subject: String,
    pub threshold: i64,
    pub first_only: Vec<String>,
    pub both: Vec<String>,
}

/// Outcome of the custom subject filter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubjectFilter {
    NotFound,
    Matches(Vec<String>),
}

/// `None` unless both subjects exist (exact, case-sensitive names).
pub fn distinction_pair(
    gradebook: &Gradebook,
    first: &str,
    second: &str,
    threshold: i64,
) -> Option<PairDistinction> {
    let a = gradebook.subject_index(first)?;
    let b = gradebook.subject_index(second)?;

    Some(PairDistinction {
        first_subject: first.to_string(),
        second_subject: second.to_string(),
        threshold,
        first_only: gradebook.students_where(|row| row[a] >= threshold),
        both: gradebook.students_where(|row| row[a] >= threshold && row[b] >= threshold),
    })
}

/// Students with at least one mark strictly below `threshold`, each listed once.
pub fn below_in_any(gradebook: &Gradebook, threshold: i64) -> Vec<String> {
    gradebook.students_where(|row| row.iter().any(|&m| m < threshold))
}

/// Students scoring at least `threshold` in `subject`.
pub fn filter_by_subject(gradebook: &Gradebook, subject: &str, threshold: i64) -> SubjectFilter {
    match gradebook.subject_index(subject) {
        Some(col) => SubjectFilter::Matches(gradebook.students_where(|row| row[col] >= threshold)),
        None => SubjectFilter::NotFound,
    }
}
