//! # acefive-ai: Decision Engine for the Blackjack Player
//!
//! Pure decision functions for the Ace-Five blackjack player. Every decision
//! is a function of the current [`TableState`] plus the query arguments; no
//! I/O and no hidden randomness.
//!
//! ## Core Components
//!
//! - [`Strategy`] - Trait answering play, bet and insurance queries
//! - [`ace_five`] - Ace-Five counting strategy
//! - [`play`] - Hard / soft / pair / surrender tables
//! - [`betting`] - Pluggable bet sizing policies
//! - [`insurance`] - Insurance policy
//! - [`create_strategy`] - Factory building a strategy from options
//!
//! ## Quick Start
//!
//! ```rust
//! use acefive_ai::{create_strategy, StrategyOptions};
//! use acefive_engine::cards::Rank;
//! use acefive_engine::protocol::{Action, PlayQuery};
//! use acefive_engine::state::TableState;
//!
//! let ai = create_strategy("ace-five", &StrategyOptions::default()).unwrap();
//!
//! let mut table = TableState::default();
//! table.hand.deal(Some(Rank::Eight));
//! table.hand.deal(Some(Rank::Eight));
//! let query = PlayQuery { player_total: 16, dealer_upcard: 10 };
//! assert_eq!(ai.decide_play(&table, query), Action::Split);
//! ```

use std::fmt;
use std::str::FromStr;

use acefive_engine::protocol::{Action, PlayQuery};
use acefive_engine::state::{ShoeState, TableState};
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub mod ace_five;
pub mod betting;
pub mod insurance;
pub mod play;

use betting::{BetPolicy, CountScaled, FlatBet};
use insurance::InsurancePolicy;
use play::PlayRules;

/// Trait answering the three query kinds the game engine poses.
///
/// # Example Implementation
///
/// ```rust
/// use acefive_ai::Strategy;
/// use acefive_engine::protocol::{Action, PlayQuery};
/// use acefive_engine::state::{ShoeState, TableState};
///
/// #[derive(Debug)]
/// struct StandPat;
///
/// impl Strategy for StandPat {
///     fn decide_play(&self, _table: &TableState, _query: PlayQuery) -> Action {
///         Action::Stand
///     }
///     fn decide_bet(&self, _shoe: &ShoeState) -> u32 {
///         1
///     }
///     fn decide_insurance(&self, _shoe: &ShoeState) -> bool {
///         false
///     }
///     fn name(&self) -> &str {
///         "StandPat"
///     }
/// }
/// ```
pub trait Strategy: Send + Sync + fmt::Debug {
    /// Choose an action for a `play?` query.
    fn decide_play(&self, table: &TableState, query: PlayQuery) -> Action;

    /// Wager for the next hand, in units; at least one.
    fn decide_bet(&self, shoe: &ShoeState) -> u32;

    /// Answer to `insurance?`.
    fn decide_insurance(&self, shoe: &ShoeState) -> bool;

    fn name(&self) -> &str;
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StrategyError {
    #[error("Unknown strategy: {0}")]
    UnknownStrategy(String),
    #[error("Unknown bet policy: {0} (expected flat or count-scaled)")]
    UnknownBetPolicy(String),
    #[error("Invalid insurance policy: {0} (expected never, always or count:<n>)")]
    InvalidInsurance(String),
}

/// Which bet sizing policy to plug in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BetPolicyKind {
    #[default]
    Flat,
    CountScaled,
}

impl FromStr for BetPolicyKind {
    type Err = StrategyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "flat" => Ok(BetPolicyKind::Flat),
            "count-scaled" | "count_scaled" | "scaled" => Ok(BetPolicyKind::CountScaled),
            _ => Err(StrategyError::UnknownBetPolicy(s.to_string())),
        }
    }
}

impl fmt::Display for BetPolicyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BetPolicyKind::Flat => f.write_str("flat"),
            BetPolicyKind::CountScaled => f.write_str("count-scaled"),
        }
    }
}

/// Knobs accepted by [`create_strategy`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StrategyOptions {
    pub rules: PlayRules,
    pub bet_policy: BetPolicyKind,
    /// Units wagered by the flat policy.
    pub flat_bet: u32,
    pub insurance: InsurancePolicy,
}

impl Default for StrategyOptions {
    fn default() -> Self {
        Self {
            rules: PlayRules::default(),
            bet_policy: BetPolicyKind::Flat,
            flat_bet: 1,
            insurance: InsurancePolicy::Never,
        }
    }
}

/// Build a strategy by name.
///
/// # Supported Strategies
///
/// - `"ace-five"` - Ace-Five count with the simple strategy tables
///
/// # Example
///
/// ```rust
/// use acefive_ai::{create_strategy, StrategyError, StrategyOptions};
///
/// let ai = create_strategy("ace-five", &StrategyOptions::default()).unwrap();
/// assert_eq!(ai.name(), "AceFive");
///
/// let err = create_strategy("martingale", &StrategyOptions::default()).unwrap_err();
/// assert_eq!(err, StrategyError::UnknownStrategy("martingale".into()));
/// ```
pub fn create_strategy(
    name: &str,
    options: &StrategyOptions,
) -> Result<Box<dyn Strategy>, StrategyError> {
    match name {
        "ace-five" | "acefive" => {
            let betting: Box<dyn BetPolicy> = match options.bet_policy {
                BetPolicyKind::Flat => Box::new(FlatBet {
                    units: options.flat_bet,
                }),
                BetPolicyKind::CountScaled => Box::new(CountScaled),
            };
            Ok(Box::new(ace_five::AceFive::new(
                options.rules,
                betting,
                options.insurance,
            )))
        }
        _ => Err(StrategyError::UnknownStrategy(name.to_string())),
    }
}
