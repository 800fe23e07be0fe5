//! Configuration for tpcf input preparation.

use crate::error::TpcfError;
use crate::estimator::Estimator;

/// Options controlling how tpcf inputs are validated and prepared.
#[derive(Debug, Clone, PartialEq)]
pub struct PreprocessConfig {
    /// Estimator name (default: `"Landy-Szalay"`).
    pub estimator: String,

    /// Samples larger than this are randomly downsampled (default: 1,000,000).
    pub max_sample_size: usize,

    /// Coordinates per point (default: 3).
    pub expected_dim: usize,

    /// Compute the auto-correlation of each sample (default: true).
    pub do_auto: bool,

    /// Compute the cross-correlation between the samples (default: true).
    pub do_cross: bool,
}

impl Default for PreprocessConfig {
    fn default() -> Self {
        Self {
            estimator: Estimator::LandySzalay.name().to_string(),
            max_sample_size: 1_000_000,
            expected_dim: 3,
            do_auto: true,
            do_cross: true,
        }
    }
}

impl PreprocessConfig {
    /// Checks every option and resolves the estimator.
    ///
    /// # Errors
    /// [`TpcfError::InvalidArgument`] for an unknown estimator, a zero
    /// `max_sample_size` or `expected_dim`, or when neither `do_auto` nor
    /// `do_cross` is set.
    pub fn validate(&self) -> Result<Estimator, TpcfError> {
        let estimator: Estimator = self.estimator.parse()?;
        if self.max_sample_size == 0 {
            return Err(TpcfError::InvalidArgument(
                "`max_sample_size` must be positive".into(),
            ));
        }
        if self.expected_dim == 0 {
            return Err(TpcfError::InvalidArgument(
                "`expected_dim` must be positive".into(),
            ));
        }
        if !self.do_auto && !self.do_cross {
            return Err(TpcfError::InvalidArgument(
                "both `do_auto` and `do_cross` are false, nothing to compute".into(),
            ));
        }
        Ok(estimator)
    }
}
