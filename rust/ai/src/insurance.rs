use std::fmt;
use std::str::FromStr;

use acefive_engine::state::ShoeState;

use crate::StrategyError;

/// Whether to take insurance when the dealer shows an ace.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum InsurancePolicy {
    #[default]
    Never,
    Always,
    /// Insure once the running count reaches the threshold.
    CountAtLeast(i32),
}

impl InsurancePolicy {
    pub fn decide(self, shoe: &ShoeState) -> bool {
        match self {
            InsurancePolicy::Never => false,
            InsurancePolicy::Always => true,
            InsurancePolicy::CountAtLeast(threshold) => shoe.count() >= threshold,
        }
    }
}

impl FromStr for InsurancePolicy {
    type Err = StrategyError;

    /// Accepts `never`, `always` or `count:<n>`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "never" | "no" => Ok(InsurancePolicy::Never),
            "always" | "yes" => Ok(InsurancePolicy::Always),
            other => other
                .strip_prefix("count:")
                .and_then(|n| n.trim().parse().ok())
                .map(InsurancePolicy::CountAtLeast)
                .ok_or_else(|| StrategyError::InvalidInsurance(s.to_string())),
        }
    }
}

impl fmt::Display for InsurancePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InsurancePolicy::Never => f.write_str("never"),
            InsurancePolicy::Always => f.write_str("always"),
            InsurancePolicy::CountAtLeast(n) => write!(f, "count:{}", n),
        }
    }
}
