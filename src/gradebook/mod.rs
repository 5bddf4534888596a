pub mod array;
pub mod error;

pub use array::MarkArray;
pub use error::{GradebookError, Result};

/// N×M grid of integer marks, one row per student and one column per subject.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkMatrix {
    rows: usize,
    cols: usize,
    data: Vec<i64>,
}

impl MarkMatrix {
    /// Build a matrix from its rows. Every row must have `cols` entries.
    pub fn from_rows(rows: Vec<Vec<i64>>, cols: usize) -> Result<Self> {
        let n = rows.len();
        let mut data = Vec::with_capacity(n * cols);
        for row in rows {
            if row.len() != cols {
                return Err(GradebookError::DimensionMismatch {
                    expected: vec![n, cols],
                    got: vec![n, row.len()],
                });
            }
            data.extend(row);
        }
        Ok(Self { rows: n, cols, data })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn is_empty(&self) -> bool {
        self.rows == 0 || self.cols == 0
    }

    pub fn get(&self, row: usize, col: usize) -> i64 {
        self.data[row * self.cols + col]
    }

    /// Marks of one student across all subjects.
    pub fn row(&self, row: usize) -> &[i64] {
        let start = row * self.cols;
        &self.data[start..start + self.cols]
    }

    /// Marks of all students in one subject, top to bottom.
    pub fn column(&self, col: usize) -> impl Iterator<Item = i64> + Clone + '_ {
        (0..self.rows).map(move |r| self.get(r, col))
    }

    pub fn iter_rows(&self) -> impl Iterator<Item = &[i64]> + '_ {
        (0..self.rows).map(move |r| self.row(r))
    }

    /// Row-major copy as a 2-D [`MarkArray`].
    pub fn to_array(&self) -> MarkArray {
        MarkArray::from_parts(self.data.clone(), vec![self.rows, self.cols])
    }
}

/// A session's class: student names, subject names and their marks.
///
/// Built once at startup and read-only afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Gradebook {
    students: Vec<String>,
    subjects: Vec<String>,
    marks: MarkMatrix,
}

impl Gradebook {
    pub fn new(students: Vec<String>, subjects: Vec<String>, marks: MarkMatrix) -> Result<Self> {
        if marks.rows() != students.len() || marks.cols() != subjects.len() {
            return Err(GradebookError::DimensionMismatch {
                expected: vec![students.len(), subjects.len()],
                got: vec![marks.rows(), marks.cols()],
            });
        }
        Ok(Self {
            students,
            subjects,
            marks,
        })
    }

    /// Convenience constructor from nested rows.
    pub fn from_rows(students: Vec<String>, subjects: Vec<String>, rows: Vec<Vec<i64>>) -> Result<Self> {
        let marks = MarkMatrix::from_rows(rows, subjects.len())?;
        Self::new(students, subjects, marks)
    }

    pub fn students(&self) -> &[String] {
        &self.students
    }

    pub fn subjects(&self) -> &[String] {
        &self.subjects
    }

    pub fn marks(&self) -> &MarkMatrix {
        &self.marks
    }

    /// Column index of a subject, matched exactly and case-sensitively.
    pub fn subject_index(&self, name: &str) -> Option<usize> {
        self.subjects.iter().position(|s| s == name)
    }

    /// Names of the students whose row satisfies `pred`, in roster order.
    pub fn students_where<F>(&self, mut pred: F) -> Vec<String>
    where
        F: FnMut(&[i64]) -> bool,
    {
        self.marks
            .iter_rows()
            .zip(&self.students)
            .filter(|(row, _)| pred(*row))
            .map(|(_, name)| name.clone())
            .collect()
    }
}

#[cfg(test)]
pub(crate) fn sample_gradebook(students: &[&str], subjects: &[&str], rows: Vec<Vec<i64>>) -> Gradebook {
    Gradebook::from_rows(
        students.iter().map(|s| s.to_string()).collect(),
        subjects.iter().map(|s| s.to_string()).collect(),
        rows,
    )
    .unwrap()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matrix_accessors() {
        let m = MarkMatrix::from_rows(vec![vec![1, 2], vec![3, 4], vec![5, 6]], 2).unwrap();
        assert_eq!(m.rows(), 3);
        assert_eq!(m.cols(), 2);
        assert_eq!(m.row(1), &[3, 4]);
        assert_eq!(m.column(1).collect::<Vec<_>>(), vec![2, 4, 6]);
        assert_eq!(m.get(2, 0), 5);
    }

    #[test]
    fn test_ragged_rows_rejected() {
        let err = MarkMatrix::from_rows(vec![vec![1, 2], vec![3]], 2).unwrap_err();
        assert!(matches!(err, GradebookError::DimensionMismatch { .. }));
    }

    #[test]
    fn test_gradebook_label_mismatch() {
        let marks = MarkMatrix::from_rows(vec![vec![1, 2]], 2).unwrap();
        let result = Gradebook::new(vec!["A".into(), "B".into()], vec!["X".into(), "Y".into()], marks);
        assert!(result.is_err());
    }

    #[test]
    fn test_subject_index_is_case_sensitive() {
        let gb = sample_gradebook(&["A"], &["Math", "English"], vec![vec![1, 2]]);
        assert_eq!(gb.subject_index("English"), Some(1));
        assert_eq!(gb.subject_index("math"), None);
    }

    #[test]
    fn test_students_where_keeps_roster_order() {
        let gb = sample_gradebook(&["A", "B", "C"], &["X"], vec![vec![9], vec![1], vec![9]]);
        assert_eq!(gb.students_where(|row| row[0] > 5), vec!["A", "C"]);
    }

    #[test]
    fn test_empty_matrix() {
        let gb = sample_gradebook(&[], &["X", "Y"], vec![]);
        assert!(gb.marks().is_empty());
        assert_eq!(gb.marks().to_array().shape(), &[0, 2]);
    }
}
