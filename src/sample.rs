//! Point samples and shape enforcement.
//!
//! A [`Sample`] is a rectangular (N, D) table of finite `f64` coordinates
//! stored row-major in one shared buffer. Samples are never edited in
//! place: operations that change the rows build a new sample. Cloning
//! shares the buffer, so an aliased sample can be told apart from an
//! equal copy with [`Sample::ptr_eq`].

use std::sync::Arc;

use crate::error::TpcfError;

/// An immutable (N, D) table of point coordinates.
#[derive(Debug, Clone)]
pub struct Sample {
    data: Arc<[f64]>,
    dim: usize,
}

impl Sample {
    /// Builds a sample from row-major coordinates.
    ///
    /// # Errors
    /// [`TpcfError::Shape`] if `dim` is zero, `data.len()` is not a
    /// multiple of `dim`, or any coordinate is NaN/Inf.
    ///
    /// # Examples
    /// ```
    /// use tpcf_helpers::sample::Sample;
    /// let s = Sample::from_flat(vec![0.0, 0.0, 1.0, 1.0], 2).unwrap();
    /// assert_eq!(s.shape(), (2, 2));
    /// ```
    pub fn from_flat(data: Vec<f64>, dim: usize) -> Result<Self, TpcfError> {
        if dim == 0 {
            return Err(TpcfError::Shape(
                "points must have at least one coordinate".into(),
            ));
        }
        if data.len() % dim != 0 {
            return Err(TpcfError::Shape(format!(
                "{} coordinates cannot be split into rows of length {dim}",
                data.len()
            )));
        }
        if let Some(pos) = data.iter().position(|x| !x.is_finite()) {
            return Err(TpcfError::Shape(format!(
                "non-finite coordinate at row {}, column {}",
                pos / dim,
                pos % dim
            )));
        }
        Ok(Self {
            data: data.into(),
            dim,
        })
    }

    /// Number of points (rows).
    pub fn len(&self) -> usize {
        self.data.len() / self.dim
    }

    /// Returns true if the sample has no points.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Coordinates per point.
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// `(rows, dim)`.
    pub fn shape(&self) -> (usize, usize) {
        (self.len(), self.dim)
    }

    /// The coordinates of point `i`, or `None` if out of range.
    pub fn row(&self, i: usize) -> Option<&[f64]> {
        let start = i.checked_mul(self.dim)?;
        let end = start.checked_add(self.dim)?;
        self.data.get(start..end)
    }

    /// Iterates over the points in order.
    pub fn rows(&self) -> impl ExactSizeIterator<Item = &[f64]> + '_ {
        self.data.chunks_exact(self.dim)
    }

    /// Row-major coordinate buffer.
    pub fn as_flat(&self) -> &[f64] {
        &self.data
    }

    /// Builds a new sample from the rows at `indices`, in that order.
    ///
    /// # Errors
    /// [`TpcfError::InvalidArgument`] if an index is out of range.
    pub fn select_rows(&self, indices: &[usize]) -> Result<Self, TpcfError> {
        let mut data = Vec::with_capacity(indices.len() * self.dim);
        for &i in indices {
            let row = self.row(i).ok_or_else(|| {
                TpcfError::InvalidArgument(format!(
                    "row index {i} out of range for sample with {} rows",
                    self.len()
                ))
            })?;
            data.extend_from_slice(row);
        }
        Ok(Self {
            data: data.into(),
            dim: self.dim,
        })
    }

    /// Returns true if both handles share the same storage.
    pub fn ptr_eq(&self, other: &Sample) -> bool {
        Arc::ptr_eq(&self.data, &other.data) && self.dim == other.dim
    }
}

/// Element-wise exact equality; samples of different shape are unequal.
impl PartialEq for Sample {
    fn eq(&self, other: &Self) -> bool {
        self.dim == other.dim && self.data[..] == other.data[..]
    }
}

/// Converts raw rows into a canonical (N, `expected_dim`) [`Sample`].
///
/// An input with zero rows yields an empty sample.
///
/// # Errors
/// [`TpcfError::Shape`] if `expected_dim` is zero, a row has a different
/// length, or a coordinate is NaN/Inf.
///
/// # Examples
/// ```
/// use tpcf_helpers::sample::enforce_sample_has_correct_shape;
/// let rows = vec![vec![0.0, 0.0, 0.0], vec![1.0, 2.0, 3.0]];
/// let s = enforce_sample_has_correct_shape(&rows, 3).unwrap();
/// assert_eq!(s.shape(), (2, 3));
/// assert!(enforce_sample_has_correct_shape(&rows, 2).is_err());
/// ```
pub fn enforce_sample_has_correct_shape<I, R>(rows: I, expected_dim: usize) -> Result<Sample, TpcfError>
where
    I: IntoIterator<Item = R>,
    R: AsRef<[f64]>,
{
    if expected_dim == 0 {
        return Err(TpcfError::Shape(
            "points must have at least one coordinate".into(),
        ));
    }
    let mut data = Vec::new();
    for (i, row) in rows.into_iter().enumerate() {
        let row = row.as_ref();
        if row.len() != expected_dim {
            return Err(TpcfError::Shape(format!(
                "row {i} has {} coordinates, expected {expected_dim}",
                row.len()
            )));
        }
        data.extend_from_slice(row);
    }
    Sample::from_flat(data, expected_dim)
}

// ============================================================================
// Tests
// ============================================================================
