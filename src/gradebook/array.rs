//! Row-major integer arrays of arbitrary rank, used for the matrix views.

use std::fmt;

use super::error::{GradebookError, Result};

/// An n-dimensional array of marks stored contiguously in row-major order.
///
/// The product of `shape` always equals `data.len()`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkArray {
    data: Vec<i64>,
    shape: Vec<usize>,
}

impl MarkArray {
    /// Build an array from flat data and a shape.
    pub fn from_vec(data: Vec<i64>, shape: Vec<usize>) -> Result<Self> {
        let numel: usize = shape.iter().product();
        if numel != data.len() {
            return Err(GradebookError::InvalidShape {
                shape,
                reason: "shape product does not match data length",
            });
        }
        Ok(Self { data, shape })
    }

    /// Caller guarantees the shape product matches the data length.
    pub(crate) fn from_parts(data: Vec<i64>, shape: Vec<usize>) -> Self {
        debug_assert_eq!(shape.iter().product::<usize>(), data.len());
        Self { data, shape }
    }

    pub fn shape(&self) -> &[usize] {
        &self.shape
    }

    pub fn ndim(&self) -> usize {
        self.shape.len()
    }

    pub fn as_slice(&self) -> &[i64] {
        &self.data
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Copy of the data as a 1-D array.
    pub fn flatten(&self) -> Self {
        Self {
            data: self.data.clone(),
            shape: vec![self.data.len()],
        }
    }

    /// Same as [`flatten`](Self::flatten): storage is always contiguous.
    pub fn ravel(&self) -> Self {
        self.flatten()
    }

    /// Reinterpret the data under a new shape with the same element count.
    pub fn reshape(&self, shape: Vec<usize>) -> Result<Self> {
        let numel: usize = shape.iter().product();
        if numel != self.data.len() {
            return Err(GradebookError::InvalidShape {
                shape,
                reason: "new shape has different number of elements",
            });
        }
        Ok(Self {
            data: self.data.clone(),
            shape,
        })
    }

    /// Resize to any shape, repeating the flattened data cyclically from the
    /// start and truncating to the new size. An empty source fills with zeros.
    pub fn resize(&self, shape: Vec<usize>) -> Self {
        let numel: usize = shape.iter().product();
        let data = if self.data.is_empty() {
            vec![0; numel]
        } else {
            self.data.iter().copied().cycle().take(numel).collect()
        };
        Self { data, shape }
    }

    /// Transpose a 2-D array.
    pub fn transpose(&self) -> Result<Self> {
        if self.ndim() != 2 {
            return Err(GradebookError::InvalidShape {
                shape: self.shape.clone(),
                reason: "transpose requires a 2-D array; use swap_axes for other ranks",
            });
        }
        self.swap_axes(0, 1)
    }

    /// Exchange two axes, copying the data into the new layout.
    pub fn swap_axes(&self, a: usize, b: usize) -> Result<Self> {
        let ndim = self.ndim();
        for axis in [a, b] {
            if axis >= ndim {
                return Err(GradebookError::AxisOutOfBounds { axis, ndim });
            }
        }

        let mut axes: Vec<usize> = (0..ndim).collect();
        axes.swap(a, b);

        let in_strides = strides(&self.shape);
        let new_shape: Vec<usize> = axes.iter().map(|&ax| self.shape[ax]).collect();
        let mut data = Vec::with_capacity(self.data.len());

        // Walk output positions odometer style and map each back to the input.
        let mut index = vec![0usize; ndim];
        for _ in 0..self.data.len() {
            let flat: usize = axes
                .iter()
                .enumerate()
                .map(|(out_ax, &in_ax)| index[out_ax] * in_strides[in_ax])
                .sum();
            data.push(self.data[flat]);

            for d in (0..ndim).rev() {
                index[d] += 1;
                if index[d] < new_shape[d] {
                    break;
                }
                index[d] = 0;
            }
        }

        Ok(Self {
            data,
            shape: new_shape,
        })
    }
}

fn strides(shape: &[usize]) -> Vec<usize> {
    let mut strides = vec![1; shape.len()];
    for i in (0..shape.len().saturating_sub(1)).rev() {
        strides[i] = strides[i + 1] * shape[i + 1];
    }
    strides
}

impl fmt::Display for MarkArray {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // zero-size arrays print flat whatever their rank, as numpy does
        if self.data.is_empty() {
            return write!(f, "[]");
        }
        if self.shape.is_empty() {
            return write!(f, "{}", self.data[0]);
        }
        write_nested(f, &self.data, &self.shape, 0)
    }
}

fn write_nested(f: &mut fmt::Formatter<'_>, data: &[i64], shape: &[usize], depth: usize) -> fmt::Result {
    write!(f, "[")?;
    if shape.len() == 1 {
        for (i, v) in data.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{v}")?;
        }
        return write!(f, "]");
    }

    let chunk: usize = shape[1..].iter().product();
    for i in 0..shape[0] {
        if i > 0 {
            // numpy separates deeper blocks with extra blank lines
            for _ in 0..shape.len() - 1 {
                writeln!(f)?;
            }
            write!(f, "{}", " ".repeat(depth + 1))?;
        }
        let start = i * chunk;
        write_nested(f, &data[start..start + chunk], &shape[1..], depth + 1)?;
    }
    write!(f, "]")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> MarkArray {
        MarkArray::from_vec(vec![1, 2, 3, 4, 5, 6], vec![2, 3]).unwrap()
    }

    #[test]
    fn test_from_vec_rejects_bad_shape() {
        let err = MarkArray::from_vec(vec![1, 2, 3], vec![2, 2]).unwrap_err();
        assert!(matches!(err, GradebookError::InvalidShape { .. }));
    }

    #[test]
    fn test_transpose() {
        let t = sample().transpose().unwrap();
        assert_eq!(t.shape(), &[3, 2]);
        assert_eq!(t.as_slice(), &[1, 4, 2, 5, 3, 6]);
    }

    #[test]
    fn test_double_transpose_is_identity() {
        let a = sample();
        assert_eq!(a.transpose().unwrap().transpose().unwrap(), a);
    }

    #[test]
    fn test_transpose_requires_2d() {
        let flat = sample().flatten();
        assert!(flat.transpose().is_err());
    }

    #[test]
    fn test_swap_axes_3d() {
        let a = MarkArray::from_vec((0..6).collect(), vec![1, 2, 3]).unwrap();
        let s = a.swap_axes(0, 2).unwrap();
        assert_eq!(s.shape(), &[3, 2, 1]);
        assert_eq!(s.as_slice(), &[0, 3, 1, 4, 2, 5]);
    }

    #[test]
    fn test_swap_axes_out_of_bounds() {
        let err = sample().swap_axes(0, 2).unwrap_err();
        assert_eq!(err, GradebookError::AxisOutOfBounds { axis: 2, ndim: 2 });
    }

    #[test]
    fn test_reshape_roundtrip() {
        let a = sample();
        let back = a.flatten().reshape(vec![2, 3]).unwrap();
        assert_eq!(back, a);
    }

    #[test]
    fn test_reshape_size_mismatch() {
        assert!(sample().reshape(vec![4, 2]).is_err());
    }

    #[test]
    fn test_resize_cycles_from_start() {
        let r = sample().resize(vec![2, 4]);
        assert_eq!(r.as_slice(), &[1, 2, 3, 4, 5, 6, 1, 2]);
    }

    #[test]
    fn test_resize_truncates() {
        let r = sample().resize(vec![2, 2]);
        assert_eq!(r.as_slice(), &[1, 2, 3, 4]);
    }

    #[test]
    fn test_resize_empty_source_zero_fills() {
        let empty = MarkArray::from_vec(vec![], vec![0, 2]).unwrap();
        let r = empty.resize(vec![1, 3]);
        assert_eq!(r.as_slice(), &[0, 0, 0]);
    }

    #[test]
    fn test_display_2d() {
        assert_eq!(sample().to_string(), "[[1 2 3]\n [4 5 6]]");
    }

    #[test]
    fn test_display_3d() {
        let a = sample().reshape(vec![1, 2, 3]).unwrap();
        assert_eq!(a.to_string(), "[[[1 2 3]\n  [4 5 6]]]");
    }

    #[test]
    fn test_display_zero_size() {
        let no_rows = MarkArray::from_vec(vec![], vec![0, 2]).unwrap();
        assert_eq!(no_rows.to_string(), "[]");
        assert_eq!(no_rows.transpose().unwrap().to_string(), "[]");
        let empty_3d = MarkArray::from_vec(vec![], vec![1, 0, 2]).unwrap();
        assert_eq!(empty_3d.to_string(), "[]");
    }

    #[test]
    fn test_display_1d() {
        assert_eq!(sample().flatten().to_string(), "[1 2 3 4 5 6]");
    }
}
