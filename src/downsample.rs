//! Random downsampling of oversized samples.
//!
//! Pair counting scales as O(N²), so samples larger than `max_sample_size`
//! are replaced by a uniformly random subset of that many points, drawn
//! without replacement. Retained points appear in permutation order, not
//! their original order.

use rand::Rng;

use crate::advisory::{self, Advisory, SampleLabel};
use crate::error::TpcfError;
use crate::random::sample_indices_without_replacement;
use crate::sample::Sample;

/// Output of [`downsample_inputs_exceeding_max_sample_size`].
#[derive(Debug, Clone)]
pub struct DownsampledInputs {
    /// `sample1`, capped at the size limit.
    pub sample1: Sample,
    /// Shares storage with `sample1` when the inputs were the same sample.
    pub sample2: Sample,
    /// One [`Advisory::Downsampled`] per sample that was reduced.
    pub advisories: Vec<Advisory>,
}

/// Caps both samples at `max_sample_size` points.
///
/// When `sample1_is_sample2` is true only `sample1` is considered and the
/// returned `sample2` is an alias of the returned `sample1`, so the two
/// stay identical after downsampling. Otherwise each sample is checked and
/// subsampled independently. A sample at or below the limit is returned
/// untouched, which makes repeated calls with the same limit a no-op.
///
/// # Errors
/// [`TpcfError::InvalidArgument`] if `max_sample_size` is zero.
///
/// # Examples
/// ```
/// use tpcf_helpers::downsample::downsample_inputs_exceeding_max_sample_size;
/// use tpcf_helpers::random::create_rng;
/// use tpcf_helpers::sample::Sample;
/// let s = Sample::from_flat((0..30).map(f64::from).collect(), 3).unwrap();
/// let mut rng = create_rng(1);
/// let out = downsample_inputs_exceeding_max_sample_size(&s, &s, true, 4, &mut rng).unwrap();
/// assert_eq!(out.sample1.len(), 4);
/// assert!(out.sample2.ptr_eq(&out.sample1));
/// ```
pub fn downsample_inputs_exceeding_max_sample_size<R: Rng>(
    sample1: &Sample,
    sample2: &Sample,
    sample1_is_sample2: bool,
    max_sample_size: usize,
    rng: &mut R,
) -> Result<DownsampledInputs, TpcfError> {
    if max_sample_size == 0 {
        return Err(TpcfError::InvalidArgument(
            "`max_sample_size` must be positive".into(),
        ));
    }
    let mut advisories = Vec::new();

    let sample1 = limit(sample1, SampleLabel::Sample1, max_sample_size, rng, &mut advisories)?;
    let sample2 = if sample1_is_sample2 {
        sample1.clone()
    } else {
        limit(sample2, SampleLabel::Sample2, max_sample_size, rng, &mut advisories)?
    };

    Ok(DownsampledInputs {
        sample1,
        sample2,
        advisories,
    })
}

/// [`downsample_inputs_exceeding_max_sample_size`] drawing from the
/// thread-local generator.
///
/// # Errors
/// Same as [`downsample_inputs_exceeding_max_sample_size`].
pub fn downsample_with_thread_rng(
    sample1: &Sample,
    sample2: &Sample,
    sample1_is_sample2: bool,
    max_sample_size: usize,
) -> Result<DownsampledInputs, TpcfError> {
    downsample_inputs_exceeding_max_sample_size(
        sample1,
        sample2,
        sample1_is_sample2,
        max_sample_size,
        &mut rand::rng(),
    )
}

fn limit<R: Rng>(
    sample: &Sample,
    label: SampleLabel,
    max_sample_size: usize,
    rng: &mut R,
    advisories: &mut Vec<Advisory>,
) -> Result<Sample, TpcfError> {
    if sample.len() <= max_sample_size {
        return Ok(sample.clone());
    }
    let inds = sample_indices_without_replacement(sample.len(), max_sample_size, rng);
    let reduced = sample.select_rows(&inds)?;
    log::debug!(
        "{label}: kept {} of {} points",
        reduced.len(),
        sample.len()
    );
    advisory::raise(advisories, Advisory::Downsampled(label));
    Ok(reduced)
}

// ============================================================================
// Tests
// ============================================================================


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::random::create_rng;
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(200))]

        #[test]
        fn size_never_exceeds_limit(
            seed in 0_u64..10000,
            n1 in 0_usize..300,
            n2 in 0_usize..300,
            max in 1_usize..150,
        ) {
            let s1 = Sample::from_flat(vec![1.0; n1 * 2], 2).unwrap();
            let s2 = Sample::from_flat(vec![2.0; n2 * 2], 2).unwrap();
            let mut rng = create_rng(seed);
            let out = downsample_inputs_exceeding_max_sample_size(&s1, &s2, false, max, &mut rng).unwrap();
            prop_assert_eq!(out.sample1.len(), n1.min(max));
            prop_assert_eq!(out.sample2.len(), n2.min(max));
            let expected = usize::from(n1 > max) + usize::from(n2 > max);
            prop_assert_eq!(out.advisories.len(), expected);
        }
    }
}
