//! Playing tables for hit / stand / double / split / surrender.
//!
//! ```text
//!  -- hard --------------------------------
//!                    2 to 6     7 to A
//!  4 to 8              H          H
//!  9                   D          H
//!  10 or 11        D with more than dealer
//!  12 to 16            S          H
//!  17 to 21            S          S
//!
//!  -- soft --------------------------------
//!                    2 to 6     7 to A
//!  13 to 15            H          H
//!  16 to 18            D          H
//!  19 to 21            S          S
//!
//!  -- split -------------------------------
//!                    2 to 6     7 to A
//!  22,33,66,77,99      Y          N
//!  88,AA               Y          Y
//!  44,55,TT            N          N
//! ```
//!
//! A double that is no longer available (three or more cards) falls back to
//! hit, except soft 18 which stands.

use acefive_engine::cards::Rank;
use acefive_engine::protocol::{Action, PlayQuery};
use acefive_engine::state::{HandState, PairMatch};
use serde::{Deserialize, Serialize};

/// Highest dealer up-card against which the "weak dealer" columns apply.
const WEAK_DEALER_MAX: u32 = 6;

/// Optional rule variations on top of the base tables.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct PlayRules {
    /// Surrender hard 16 against a dealer ten. Off unless configured.
    pub surrender_hard16_vs_ten: bool,
    pub pair_match: PairMatch,
}

/// Everything a play decision depends on.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct PlayInput {
    pub query: PlayQuery,
    pub cards_dealt: u32,
    /// Rank of the opening pair, when the hand is still exactly that pair.
    pub pair: Option<Rank>,
}

impl PlayInput {
    pub fn from_hand(query: PlayQuery, hand: &HandState, rules: &PlayRules) -> Self {
        Self {
            query,
            cards_dealt: hand.cards_dealt(),
            pair: hand.opening_pair(rules.pair_match),
        }
    }

    fn can_double(&self) -> bool {
        self.cards_dealt == 2
    }
}

/// Evaluate the tables; first match wins: split, surrender, hard, soft.
pub fn decide_play(input: PlayInput, rules: &PlayRules) -> Action {
    let dealer = input.query.dealer_upcard;

    if let Some(rank) = input.pair
        && input.cards_dealt == 2
        && should_split(rank, dealer)
    {
        return Action::Split;
    }

    if rules.surrender_hard16_vs_ten
        && !input.query.is_soft()
        && input.query.magnitude() == 16
        && dealer == 10
        && input.can_double()
    {
        return Action::Surrender;
    }

    if input.query.is_soft() {
        soft_total(input.query.magnitude(), dealer, input.can_double())
    } else {
        hard_total(input.query.magnitude(), dealer, input.can_double())
    }
}

fn should_split(rank: Rank, dealer: u32) -> bool {
    match rank {
        Rank::Ace | Rank::Eight => true,
        Rank::Two | Rank::Three | Rank::Six | Rank::Seven | Rank::Nine => {
            dealer <= WEAK_DEALER_MAX
        }
        // 44, 55 and tens stay together
        _ => false,
    }
}

fn hard_total(total: u32, dealer: u32, can_double: bool) -> Action {
    match total {
        0..=8 => Action::Hit,
        9 if dealer <= WEAK_DEALER_MAX && can_double => Action::Double,
        9 => Action::Hit,
        10 | 11 if total > dealer && can_double => Action::Double,
        10 | 11 => Action::Hit,
        12..=16 if dealer <= WEAK_DEALER_MAX => Action::Stand,
        12..=16 => Action::Hit,
        _ => Action::Stand,
    }
}

fn soft_total(total: u32, dealer: u32, can_double: bool) -> Action {
    match total {
        0..=15 => Action::Hit,
        16..=18 if dealer > WEAK_DEALER_MAX => Action::Hit,
        16..=18 if can_double => Action::Double,
        18 => Action::Stand,
        16 | 17 => Action::Hit,
        _ => Action::Stand,
    }
}
