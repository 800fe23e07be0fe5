//! Normalization of the optional second sample.
//!
//! Every two-point clustering routine accepts an optional `sample2`. When it
//! is absent the routine correlates `sample1` with itself; when it is given
//! but equal to `sample1` the cross-correlation would merely repeat the
//! auto-correlation, so it is switched off.

use crate::advisory::{self, Advisory};
use crate::error::TpcfError;
use crate::sample::{enforce_sample_has_correct_shape, Sample};

/// The caller's `sample2` argument before normalization.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum OptionalSample {
    /// Raw rows that still need shape enforcement.
    Provided(Vec<Vec<f64>>),
    /// No second sample; `sample1` stands in for it.
    #[default]
    Absent,
}

impl From<Option<Vec<Vec<f64>>>> for OptionalSample {
    fn from(rows: Option<Vec<Vec<f64>>>) -> Self {
        match rows {
            Some(rows) => OptionalSample::Provided(rows),
            None => OptionalSample::Absent,
        }
    }
}

/// Result of [`process_optional_input_sample2`].
#[derive(Debug, Clone)]
pub struct ProcessedSample2 {
    /// The normalized second sample. Shares storage with `sample1` when the
    /// argument was absent.
    pub sample2: Sample,
    /// Whether `sample2` is the same sample as `sample1`.
    pub sample1_is_sample2: bool,
    /// Whether the cross-correlation should still be computed.
    pub do_cross: bool,
    /// Warnings raised along the way.
    pub advisories: Vec<Advisory>,
}

/// Resolves the optional `sample2` against `sample1`.
///
/// `sample1` must already have passed
/// [`enforce_sample_has_correct_shape`] with the same `expected_dim`.
///
/// - `Absent`: `sample2` aliases `sample1`, `sample1_is_sample2` is true
///   and `do_cross` is left as given.
/// - `Provided` with a different shape: `sample1_is_sample2` is false.
/// - `Provided` and element-wise equal: `sample1_is_sample2` is true,
///   `do_cross` is forced to false and [`Advisory::IdenticalSamples`] is
///   raised.
/// - Otherwise `sample1_is_sample2` is false.
///
/// # Errors
/// [`TpcfError::Shape`] if the provided rows fail shape enforcement.
///
/// # Examples
/// ```
/// use tpcf_helpers::sample::Sample;
/// use tpcf_helpers::sample2::{process_optional_input_sample2, OptionalSample};
/// let s1 = Sample::from_flat(vec![0.0, 0.0, 1.0, 1.0], 2).unwrap();
/// let out = process_optional_input_sample2(&s1, OptionalSample::Absent, true, 2).unwrap();
/// assert!(out.sample1_is_sample2);
/// assert!(out.do_cross);
/// assert!(out.sample2.ptr_eq(&s1));
/// ```
pub fn process_optional_input_sample2(
    sample1: &Sample,
    sample2: OptionalSample,
    do_cross: bool,
    expected_dim: usize,
) -> Result<ProcessedSample2, TpcfError> {
    let mut advisories = Vec::new();
    let rows = match sample2 {
        OptionalSample::Absent => {
            return Ok(ProcessedSample2 {
                sample2: sample1.clone(),
                sample1_is_sample2: true,
                do_cross,
                advisories,
            });
        }
        OptionalSample::Provided(rows) => rows,
    };

    let sample2 = enforce_sample_has_correct_shape(&rows, expected_dim)?;
    let (sample1_is_sample2, do_cross) = if sample1.shape() != sample2.shape() {
        (false, do_cross)
    } else if *sample1 == sample2 {
        advisory::raise(&mut advisories, Advisory::IdenticalSamples);
        (true, false)
    } else {
        (false, do_cross)
    };

    Ok(ProcessedSample2 {
        sample2,
        sample1_is_sample2,
        do_cross,
        advisories,
    })
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn two_points() -> Sample {
        Sample::from_flat(vec![0.0, 0.0, 1.0, 1.0], 2).unwrap()
    }

    #[test]
    fn test_absent_aliases_sample1() {
        let s1 = two_points();
        let out = process_optional_input_sample2(&s1, OptionalSample::Absent, true, 2).unwrap();
        assert!(out.sample2.ptr_eq(&s1));
        assert_eq!(out.sample2, s1);
        assert!(out.sample1_is_sample2);
        assert!(out.do_cross, "absent branch leaves do_cross alone");
        assert!(out.advisories.is_empty());
    }

    #[test]
    fn test_absent_keeps_do_cross_false() {
        let s1 = two_points();
        let out = process_optional_input_sample2(&s1, OptionalSample::Absent, false, 2).unwrap();
        assert!(!out.do_cross);
    }

    #[test]
    fn test_equal_content_disables_cross() {
        let s1 = two_points();
        let s2 = OptionalSample::Provided(vec![vec![0.0, 0.0], vec![1.0, 1.0]]);
        let out = process_optional_input_sample2(&s1, s2, true, 2).unwrap();
        assert!(out.sample1_is_sample2);
        assert!(!out.do_cross);
        assert!(!out.sample2.ptr_eq(&s1));
        assert_eq!(out.advisories, vec![Advisory::IdenticalSamples]);
    }

    #[test]
    fn test_different_content() {
        let s1 = two_points();
        let s2 = OptionalSample::Provided(vec![vec![2.0, 2.0], vec![3.0, 3.0]]);
        let out = process_optional_input_sample2(&s1, s2, true, 2).unwrap();
        assert!(!out.sample1_is_sample2);
        assert!(out.do_cross);
        assert!(out.advisories.is_empty());
    }

    #[test]
    fn test_different_row_count() {
        let s1 = two_points();
        let s2 = OptionalSample::Provided(vec![vec![0.0, 0.0]]);
        let out = process_optional_input_sample2(&s1, s2, true, 2).unwrap();
        assert!(!out.sample1_is_sample2);
        assert!(out.do_cross);
        assert_eq!(out.sample2.len(), 1);
    }

    #[test]
    fn test_shape_error_propagates() {
        let s1 = two_points();
        let s2 = OptionalSample::Provided(vec![vec![0.0, 0.0, 0.0]]);
        let err = process_optional_input_sample2(&s1, s2, true, 2).unwrap_err();
        assert!(matches!(err, TpcfError::Shape(_)));
    }

    #[test]
    fn test_from_option() {
        assert_eq!(OptionalSample::from(None), OptionalSample::Absent);
        assert_eq!(
            OptionalSample::from(Some(vec![vec![1.0]])),
            OptionalSample::Provided(vec![vec![1.0]])
        );
    }
}
