//! Two-point correlation function estimators.
//!
//! Each estimator converts pair counts between the data sample (D) and a
//! random sample (R) into a clustering statistic. The estimators differ in
//! which pair counts they consume:
//!
//! | Estimator | DD | DR | RR |
//! |---|---|---|---|
//! | [`Estimator::Natural`] | yes | no | yes |
//! | [`Estimator::DavisPeebles`] | yes | yes | no |
//! | [`Estimator::Hewett`] | yes | yes | yes |
//! | [`Estimator::Hamilton`] | yes | yes | yes |
//! | [`Estimator::LandySzalay`] | yes | yes | yes |
//!
//! Only the names and their count requirements live here; the estimator
//! arithmetic belongs to the pair-counting engine.

use crate::error::TpcfError;

/// A known two-point correlation function estimator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Estimator {
    Natural,
    DavisPeebles,
    Hewett,
    Hamilton,
    LandySzalay,
}

/// Which pair counts an estimator needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PairCountRequirements {
    /// Data-data pairs.
    pub dd: bool,
    /// Data-random pairs.
    pub dr: bool,
    /// Random-random pairs.
    pub rr: bool,
}

impl Estimator {
    /// Every estimator, in table order.
    pub const ALL: [Estimator; 5] = [
        Estimator::Natural,
        Estimator::DavisPeebles,
        Estimator::Hewett,
        Estimator::Hamilton,
        Estimator::LandySzalay,
    ];

    /// The canonical name of the estimator.
    pub fn name(self) -> &'static str {
        match self {
            Estimator::Natural => "Natural",
            Estimator::DavisPeebles => "Davis-Peebles",
            Estimator::Hewett => "Hewett",
            Estimator::Hamilton => "Hamilton",
            Estimator::LandySzalay => "Landy-Szalay",
        }
    }

    /// Looks up an estimator by its exact canonical name.
    ///
    /// Matching is case-sensitive.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|e| e.name() == name)
    }

    /// Pair counts this estimator consumes.
    pub fn pair_count_requirements(self) -> PairCountRequirements {
        let (dd, dr, rr) = match self {
            Estimator::Natural => (true, false, true),
            Estimator::DavisPeebles => (true, true, false),
            Estimator::Hewett | Estimator::Hamilton | Estimator::LandySzalay => (true, true, true),
        };
        PairCountRequirements { dd, dr, rr }
    }
}

impl std::fmt::Display for Estimator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for Estimator {
    type Err = TpcfError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| unknown_estimator(s))
    }
}

fn unknown_estimator(name: &str) -> TpcfError {
    let available: Vec<&str> = Estimator::ALL.iter().map(|e| e.name()).collect();
    TpcfError::InvalidArgument(format!(
        "estimator `{name}` is not in the list of available estimators: {available:?}"
    ))
}

/// Requires that `estimator` names one of the available estimators.
///
/// Returns the input unchanged on success.
///
/// # Errors
/// [`TpcfError::InvalidArgument`] naming the rejected value and listing
/// every valid name.
///
/// # Examples
/// ```
/// use tpcf_helpers::estimator::verify_tpcf_estimator;
/// assert_eq!(verify_tpcf_estimator("Landy-Szalay").unwrap(), "Landy-Szalay");
/// assert!(verify_tpcf_estimator("Foo").is_err());
/// ```
pub fn verify_tpcf_estimator(estimator: &str) -> Result<&str, TpcfError> {
    match Estimator::from_name(estimator) {
        Some(_) => Ok(estimator),
        None => Err(unknown_estimator(estimator)),
    }
}

// ============================================================================
// Tests
// ============================================================================


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(300))]

        #[test]
        fn verify_agrees_with_lookup(name in "[A-Za-z-]{0,16}") {
            let known = Estimator::from_name(&name).is_some();
            prop_assert_eq!(verify_tpcf_estimator(&name).is_ok(), known);
        }
    }
}
