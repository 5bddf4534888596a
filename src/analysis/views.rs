use crate::gradebook::{MarkArray, MarkMatrix, Result};

/// The reshaping views shown by the matrix operations menu entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatrixViews {
    pub transposed: MarkArray,
    pub flattened: MarkArray,
    pub raveled: MarkArray,
    /// Shape (1, N, M).
    pub reshaped: MarkArray,
    /// Shape (N, M + 1), filled cyclically from the flattened marks.
    pub resized: MarkArray,
    pub swapped: MarkArray,
    /// Flatten followed by reshape back to (N, M).
    pub round_trip: MarkArray,
}

/// Compute every view. The source matrix is left untouched.
pub fn matrix_views(marks: &MarkMatrix) -> Result<MatrixViews> {
    let (n, m) = (marks.rows(), marks.cols());
    let array = marks.to_array();
    let flattened = array.flatten();

    Ok(MatrixViews {
        transposed: array.transpose()?,
        raveled: array.ravel(),
        reshaped: array.reshape(vec![1, n, m])?,
        resized: array.resize(vec![n, m + 1]),
        swapped: array.swap_axes(0, 1)?,
        round_trip: flattened.reshape(vec![n, m])?,
        flattened,
    })
}
