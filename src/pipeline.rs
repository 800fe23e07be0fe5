//! End-to-end preparation of tpcf arguments.
//!
//! Runs the validation gates in the order a correlation-function entry
//! point needs them: options, `sample1` shape, `sample2` normalization,
//! then downsampling. The first failure aborts the whole preparation.

use rand::Rng;

use crate::advisory::Advisory;
use crate::config::PreprocessConfig;
use crate::downsample::downsample_inputs_exceeding_max_sample_size;
use crate::error::TpcfError;
use crate::estimator::Estimator;
use crate::sample::{enforce_sample_has_correct_shape, Sample};
use crate::sample2::{process_optional_input_sample2, OptionalSample};

/// Validated inputs ready for pair counting.
#[derive(Debug, Clone)]
pub struct TpcfInputs {
    /// Shape-checked and possibly downsampled first sample.
    pub sample1: Sample,
    /// Second sample; an alias of `sample1` when `sample1_is_sample2` holds.
    pub sample2: Sample,
    /// Whether both samples are the same points.
    pub sample1_is_sample2: bool,
    /// Whether to compute auto-correlations.
    pub do_auto: bool,
    /// Whether to compute the cross-correlation; false for identical samples.
    pub do_cross: bool,
    /// Resolved estimator.
    pub estimator: Estimator,
    /// Every advisory raised, in order.
    pub advisories: Vec<Advisory>,
}

/// Validates and prepares the arguments of a two-point correlation
/// function computation.
///
/// # Errors
/// [`TpcfError::InvalidArgument`] for bad options and [`TpcfError::Shape`]
/// for malformed samples.
///
/// # Examples
/// ```
/// use tpcf_helpers::config::PreprocessConfig;
/// use tpcf_helpers::pipeline::process_tpcf_args;
/// use tpcf_helpers::random::create_rng;
/// use tpcf_helpers::sample2::OptionalSample;
/// let rows = vec![vec![0.0, 0.0, 0.0], vec![1.0, 1.0, 1.0]];
/// let cfg = PreprocessConfig::default();
/// let inputs = process_tpcf_args(&rows, OptionalSample::Absent, &cfg, &mut create_rng(0)).unwrap();
/// assert!(inputs.sample1_is_sample2);
/// ```
pub fn process_tpcf_args<I, Row, R>(
    sample1: I,
    sample2: OptionalSample,
    config: &PreprocessConfig,
    rng: &mut R,
) -> Result<TpcfInputs, TpcfError>
where
    I: IntoIterator<Item = Row>,
    Row: AsRef<[f64]>,
    R: Rng,
{
    let estimator = config.validate()?;
    let sample1 = enforce_sample_has_correct_shape(sample1, config.expected_dim)?;
    let processed =
        process_optional_input_sample2(&sample1, sample2, config.do_cross, config.expected_dim)?;
    let downsampled = downsample_inputs_exceeding_max_sample_size(
        &sample1,
        &processed.sample2,
        processed.sample1_is_sample2,
        config.max_sample_size,
        rng,
    )?;

    let mut advisories = processed.advisories;
    advisories.extend(downsampled.advisories);
    log::debug!(
        "prepared tpcf inputs: estimator={estimator}, sample1={:?}, sample2={:?}, same={}",
        downsampled.sample1.shape(),
        downsampled.sample2.shape(),
        processed.sample1_is_sample2
    );

    Ok(TpcfInputs {
        sample1: downsampled.sample1,
        sample2: downsampled.sample2,
        sample1_is_sample2: processed.sample1_is_sample2,
        do_auto: config.do_auto,
        do_cross: processed.do_cross,
        estimator,
        advisories,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::advisory::SampleLabel;
    use crate::random::create_rng;

    fn grid(n: usize) -> Vec<Vec<f64>> {
        (0..n).map(|i| vec![i as f64, 0.0, 0.0]).collect()
    }

    #[test]
    fn test_identical_then_downsampled() {
        let cfg = PreprocessConfig {
            max_sample_size: 10,
            ..Default::default()
        };
        let rows = grid(50);
        let inputs = process_tpcf_args(
            &rows,
            OptionalSample::Provided(rows.clone()),
            &cfg,
            &mut create_rng(1),
        )
        .unwrap();
        assert!(inputs.sample1_is_sample2);
        assert!(!inputs.do_cross);
        assert_eq!(inputs.sample1.len(), 10);
        assert!(inputs.sample2.ptr_eq(&inputs.sample1));
        assert_eq!(
            inputs.advisories,
            vec![
                Advisory::IdenticalSamples,
                Advisory::Downsampled(SampleLabel::Sample1),
            ]
        );
    }

    #[test]
    fn test_cross_inputs_kept() {
        let cfg = PreprocessConfig::default();
        let inputs = process_tpcf_args(
            grid(5),
            OptionalSample::Provided(vec![vec![9.0, 9.0, 9.0]]),
            &cfg,
            &mut create_rng(1),
        )
        .unwrap();
        assert!(!inputs.sample1_is_sample2);
        assert!(inputs.do_cross);
        assert_eq!(inputs.sample2.len(), 1);
        assert!(inputs.advisories.is_empty());
    }

    #[test]
    fn test_bad_estimator_fails_first() {
        let cfg = PreprocessConfig {
            estimator: "Foo".into(),
            ..Default::default()
        };
        // sample1 is malformed too, but the option check runs first.
        let err = process_tpcf_args(
            vec![vec![0.0]],
            OptionalSample::Absent,
            &cfg,
            &mut create_rng(1),
        )
        .unwrap_err();
        assert!(matches!(err, TpcfError::InvalidArgument(_)));
    }

    #[test]
    fn test_malformed_sample1() {
        let cfg = PreprocessConfig::default();
        let err = process_tpcf_args(
            vec![vec![0.0, 1.0]],
            OptionalSample::Absent,
            &cfg,
            &mut create_rng(1),
        )
        .unwrap_err();
        assert!(matches!(err, TpcfError::Shape(_)));
    }
}
