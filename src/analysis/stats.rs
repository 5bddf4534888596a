use crate::gradebook::MarkMatrix;

/// Reductions over one student's marks.
#[derive(Debug, Clone, PartialEq)]
pub struct RowStats {
    /// Widened so any row of `i64` marks sums without overflow.
    pub total: i128,
    pub mean: f64,
    pub max: i64,
    pub min: i64,
}

/// Reductions over one subject's marks.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnStats {
    pub mean: f64,
    pub std_dev: f64,
    pub max: i64,
    pub min: i64,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Descriptives {
    /// One entry per student, roster order.
    pub students: Vec<RowStats>,
    /// One entry per subject, column order.
    pub subjects: Vec<ColumnStats>,
}

/// Per-student and per-subject reductions. Empty when either dimension is zero.
pub fn describe(marks: &MarkMatrix) -> Descriptives {
    if marks.is_empty() {
        return Descriptives::default();
    }

    let students = marks.iter_rows().map(row_stats).collect();
    let subjects = (0..marks.cols())
        .map(|c| column_stats(marks.column(c)))
        .collect();

    Descriptives { students, subjects }
}

/// Row sums, roster order.
pub fn row_totals(marks: &MarkMatrix) -> Vec<i128> {
    marks.iter_rows().map(sum_wide).collect()
}

/// Arithmetic mean of a column.
pub fn column_mean(marks: &MarkMatrix, col: usize) -> f64 {
    mean(marks.column(col))
}

fn row_stats(row: &[i64]) -> RowStats {
    let total = sum_wide(row);
    RowStats {
        total,
        mean: total as f64 / row.len() as f64,
        max: row.iter().copied().max().unwrap_or_default(),
        min: row.iter().copied().min().unwrap_or_default(),
    }
}

fn column_stats<I>(values: I) -> ColumnStats
where
    I: Iterator<Item = i64> + Clone,
{
    let mean = mean(values.clone());
    let n = values.clone().count() as f64;
    // population variance: divide by N
    let variance = values
        .clone()
        .map(|v| {
            let d = v as f64 - mean;
            d * d
        })
        .sum::<f64>()
        / n;

    ColumnStats {
        mean,
        std_dev: variance.sqrt(),
        max: values.clone().max().unwrap_or_default(),
        min: values.min().unwrap_or_default(),
    }
}

fn sum_wide(row: &[i64]) -> i128 {
    row.iter().map(|&v| i128::from(v)).sum()
}

fn mean<I: Iterator<Item = i64>>(values: I) -> f64 {
    let (sum, count) = values.fold((0i128, 0usize), |(s, c), v| (s + i128::from(v), c + 1));
    if count == 0 {
        0.0
    } else {
        sum as f64 / count as f64
    }
}
