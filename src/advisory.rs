//! Non-fatal advisories raised while preparing samples.
//!
//! Advisories are logged at `warn` level when raised and also handed back
//! to the caller, so the outcome is visible whether or not a logger is
//! installed.

/// Identifies one of the two input samples.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SampleLabel {
    Sample1,
    Sample2,
}

impl std::fmt::Display for SampleLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SampleLabel::Sample1 => f.write_str("sample1"),
            SampleLabel::Sample2 => f.write_str("sample2"),
        }
    }
}

/// A warning-level outcome that adjusts data or flags but does not fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advisory {
    /// `sample2` equals `sample1` exactly; only the auto-correlation is computed.
    IdenticalSamples,
    /// The labelled sample exceeded the size limit and was randomly subsampled.
    Downsampled(SampleLabel),
}

impl std::fmt::Display for Advisory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Advisory::IdenticalSamples => f.write_str(
                "`sample1` and `sample2` are exactly the same, \
                 only the auto-correlation will be returned",
            ),
            Advisory::Downsampled(label) => write!(
                f,
                "`{label}` exceeds `max_sample_size`, downsampling `{label}`"
            ),
        }
    }
}

/// Logs `advisory` and records it in `sink`.
pub(crate) fn raise(sink: &mut Vec<Advisory>, advisory: Advisory) {
    log::warn!("{advisory}");
    sink.push(advisory);
}
