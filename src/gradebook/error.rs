use std::fmt;

/// Errors raised by the gradebook engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GradebookError {
    /// Matrix dimensions do not line up with the label lists.
    DimensionMismatch {
        expected: Vec<usize>,
        got: Vec<usize>,
    },

    /// A requested shape cannot hold the array's elements.
    InvalidShape {
        shape: Vec<usize>,
        reason: &'static str,
    },

    /// An axis index is out of range for the array's rank.
    AxisOutOfBounds { axis: usize, ndim: usize },

    /// One weight per subject is required.
    WeightCountMismatch { expected: usize, got: usize },
}

impl fmt::Display for GradebookError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DimensionMismatch { expected, got } => {
                write!(f, "dimension mismatch: expected {expected:?}, got {got:?}")
            }
            Self::InvalidShape { shape, reason } => {
                write!(f, "invalid shape {shape:?}: {reason}")
            }
            Self::AxisOutOfBounds { axis, ndim } => {
                write!(f, "axis {axis} out of bounds for array with {ndim} dimensions")
            }
            Self::WeightCountMismatch { expected, got } => {
                write!(f, "expected {expected} weights (one per subject), got {got}")
            }
        }
    }
}

impl std::error::Error for GradebookError {}

pub type Result<T> = std::result::Result<T, GradebookError>;
