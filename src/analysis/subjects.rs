use super::stats::column_mean;
use crate::gradebook::Gradebook;

/// Toppers and under-performers for one subject.
#[derive(Debug, Clone, PartialEq)]
pub struct SubjectBreakdown {
    pub subject: String,
    pub top_mark: i64,
    /// Every student holding the top mark, roster order.
    pub toppers: Vec<String>,
    pub mean: f64,
    /// Students strictly below the mean, roster order. May be empty.
    pub below_average: Vec<String>,
}

/// One breakdown per subject. Empty when there are no students.
pub fn analyze_subjects(gradebook: &Gradebook) -> Vec<SubjectBreakdown> {
    let marks = gradebook.marks();
    if marks.rows() == 0 {
        return Vec::new();
    }

    gradebook
        .subjects()
        .iter()
        .enumerate()
        .map(|(col, subject)| {
            let top_mark = marks.column(col).max().unwrap_or_default();
            let mean = column_mean(marks, col);
            SubjectBreakdown {
                subject: subject.clone(),
                top_mark,
                toppers: gradebook.students_where(|row| row[col] == top_mark),
                mean,
                below_average: gradebook.students_where(|row| (row[col] as f64) < mean),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gradebook::sample_gradebook;

    #[test]
    fn test_tied_toppers_all_listed() {
        let gb = sample_gradebook(
            &["A", "B", "C", "D"],
            &["Math"],
            vec![vec![80], vec![95], vec![95], vec![60]],
        );
        let result = analyze_subjects(&gb);
        assert_eq!(result[0].top_mark, 95);
        assert_eq!(result[0].toppers, vec!["B", "C"]);
    }

    #[test]
    fn test_below_average_is_strict() {
        let gb = sample_gradebook(&["A", "B", "C"], &["Math"], vec![vec![40], vec![60], vec![80]]);
        let result = analyze_subjects(&gb);
        assert_eq!(result[0].mean, 60.0);
        assert_eq!(result[0].below_average, vec!["A"]);
    }

    #[test]
    fn test_uniform_column_has_nobody_below() {
        let gb = sample_gradebook(&["A", "B"], &["Art", "Math"], vec![vec![70, 10], vec![70, 90]]);
        let result = analyze_subjects(&gb);
        assert_eq!(result[0].toppers, vec!["A", "B"]);
        assert!(result[0].below_average.is_empty());
        assert_eq!(result[1].subject, "Math");
        assert_eq!(result[1].toppers, vec!["B"]);
        assert_eq!(result[1].below_average, vec!["A"]);
    }

    #[test]
    fn test_no_students() {
        let gb = sample_gradebook(&[], &["Math"], vec![]);
        assert!(analyze_subjects(&gb).is_empty());
    }
}
