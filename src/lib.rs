//! # tpcf-helpers
//!
//! Argument validation and sample preparation for two-point correlation
//! function (tpcf) estimators.
//!
//! This crate sits in front of a pair-counting engine. It knows nothing
//! about binning, spatial indexing, or estimator arithmetic; it only makes
//! sure the engine receives well-formed inputs.
//!
//! ## Modules
//!
//! - [`estimator`] — Known estimators and the pair counts each needs
//! - [`sample`] — (N, D) point samples and shape enforcement
//! - [`sample2`] — Resolution of the optional second sample
//! - [`downsample`] — Random subsampling of oversized samples
//! - [`random`] — Seeded RNG, shuffles, sampling without replacement
//! - [`config`] / [`pipeline`] — All of the above in one call
//!
//! ## Warnings
//!
//! Non-fatal outcomes (identical samples, downsampling) are logged through
//! the [`log`] facade at `warn` level and returned as [`Advisory`] values.

pub mod advisory;
pub mod config;
pub mod downsample;
pub mod error;
pub mod estimator;
pub mod pipeline;
pub mod random;
pub mod sample;
pub mod sample2;

pub use advisory::{Advisory, SampleLabel};
pub use config::PreprocessConfig;
pub use downsample::{
    downsample_inputs_exceeding_max_sample_size, downsample_with_thread_rng, DownsampledInputs,
};
pub use error::TpcfError;
pub use estimator::{verify_tpcf_estimator, Estimator, PairCountRequirements};
pub use pipeline::{process_tpcf_args, TpcfInputs};
pub use sample::{enforce_sample_has_correct_shape, Sample};
pub use sample2::{process_optional_input_sample2, OptionalSample, ProcessedSample2};
