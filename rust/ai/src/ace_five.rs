//! Ace-Five counting player.
//!
//! Plays the simple strategy tables in [`crate::play`] and keeps the
//! Ace-Five running count available to the bet and insurance policies.

use acefive_engine::protocol::{Action, PlayQuery};
use acefive_engine::state::{ShoeState, TableState};

use crate::Strategy;
use crate::betting::{BetPolicy, FlatBet};
use crate::insurance::InsurancePolicy;
use crate::play::{PlayInput, PlayRules, decide_play};

/// Ace-Five strategy with pluggable bet sizing and insurance.
///
/// # Example
///
/// ```rust
/// use acefive_ai::Strategy;
/// use acefive_ai::ace_five::AceFive;
/// use acefive_engine::cards::Rank;
/// use acefive_engine::protocol::{Action, PlayQuery};
/// use acefive_engine::state::TableState;
///
/// let ai = AceFive::default();
/// let mut table = TableState::default();
/// table.hand.deal(Some(Rank::Ace));
/// table.hand.deal(Some(Rank::Five));
///
/// let query = PlayQuery { player_total: -16, dealer_upcard: 4 };
/// assert_eq!(ai.decide_play(&table, query), Action::Double);
/// assert_eq!(ai.decide_bet(&table.shoe), 1);
/// assert!(!ai.decide_insurance(&table.shoe));
/// ```
#[derive(Debug)]
pub struct AceFive {
    rules: PlayRules,
    betting: Box<dyn BetPolicy>,
    insurance: InsurancePolicy,
}

impl Default for AceFive {
    fn default() -> Self {
        Self::new(
            PlayRules::default(),
            Box::new(FlatBet::default()),
            InsurancePolicy::default(),
        )
    }
}

impl AceFive {
    pub fn new(
        rules: PlayRules,
        betting: Box<dyn BetPolicy>,
        insurance: InsurancePolicy,
    ) -> Self {
        Self {
            rules,
            betting,
            insurance,
        }
    }

    pub fn bet_policy(&self) -> &dyn BetPolicy {
        self.betting.as_ref()
    }
}

impl Strategy for AceFive {
    fn decide_play(&self, table: &TableState, query: PlayQuery) -> Action {
        decide_play(PlayInput::from_hand(query, &table.hand, &self.rules), &self.rules)
    }

    fn decide_bet(&self, shoe: &ShoeState) -> u32 {
        self.betting.next_bet(shoe).max(1)
    }

    fn decide_insurance(&self, shoe: &ShoeState) -> bool {
        self.insurance.decide(shoe)
    }

    fn name(&self) -> &str {
        "AceFive"
    }
}
