//! Bet sizing policies.
//!
//! The active policy is a flat bet; [`CountScaled`] is the Ace-Five spread
//! (double after a favourable count, back to one unit otherwise) and can be
//! switched on through configuration without touching the protocol layer.

use acefive_engine::state::ShoeState;

/// Decide how many units to wager on the next hand.
pub trait BetPolicy: Send + Sync + std::fmt::Debug {
    /// Must return at least one unit.
    fn next_bet(&self, shoe: &ShoeState) -> u32;

    fn name(&self) -> &str;
}

/// Always the same wager regardless of the count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlatBet {
    pub units: u32,
}

impl Default for FlatBet {
    fn default() -> Self {
        Self { units: 1 }
    }
}

impl BetPolicy for FlatBet {
    fn next_bet(&self, _shoe: &ShoeState) -> u32 {
        self.units.max(1)
    }

    fn name(&self) -> &str {
        "flat"
    }
}

/// Running count above this value lets the bet grow.
pub const FAVOURABLE_COUNT: i32 = 1;

/// Doubles the previous bet while the count is favourable, capped at the
/// shoe's bet cap; drops back to one unit otherwise.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CountScaled;

impl BetPolicy for CountScaled {
    fn next_bet(&self, shoe: &ShoeState) -> u32 {
        if shoe.count() <= FAVOURABLE_COUNT {
            1
        } else if shoe.last_bet() < shoe.bet_cap() {
            shoe.last_bet().saturating_mul(2).clamp(1, shoe.bet_cap())
        } else {
            shoe.bet_cap()
        }
    }

    fn name(&self) -> &str {
        "count-scaled"
    }
}
