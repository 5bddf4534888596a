use crate::gradebook::{Gradebook, GradebookError, Result};

#[derive(Debug, Clone, PartialEq)]
pub struct WeightedScore {
    pub name: String,
    pub score: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct WeightedReport {
    /// Set when the entered weights do not add up to exactly 100.
    pub normalization_notice: bool,
    /// Weights after dividing by 100.
    pub normalized: Vec<f64>,
    /// Roster order.
    pub scores: Vec<WeightedScore>,
}

/// Weighted composite per student.
///
/// Weights are percentages, one per subject. They are always divided by 100;
/// a sum other than 100 only raises the notice and is never rescaled.
pub fn weighted_scores(gradebook: &Gradebook, weights: &[f64]) -> Result<WeightedReport> {
    let expected = gradebook.subjects().len();
    if weights.len() != expected {
        return Err(GradebookError::WeightCountMismatch {
            expected,
            got: weights.len(),
        });
    }

    let sum: f64 = weights.iter().sum();
    let normalized: Vec<f64> = weights.iter().map(|w| w / 100.0).collect();

    let scores = gradebook
        .marks()
        .iter_rows()
        .zip(gradebook.students())
        .map(|(row, name)| WeightedScore {
            name: name.clone(),
            score: row
                .iter()
                .zip(&normalized)
                .map(|(&mark, w)| mark as f64 * w)
                .sum(),
        })
        .collect();

    Ok(WeightedReport {
        normalization_notice: sum != 100.0,
        normalized,
        scores,
    })
}
