//! Per-shoe and per-hand state observed by the player.
//!
//! Both structs are plain data owned by whoever runs the read loop; nothing
//! here performs I/O or keeps global state.

use serde::{Deserialize, Serialize};

use crate::cards::Rank;

/// Default ceiling for count-scaled bet spreads, in betting units.
pub const DEFAULT_BET_CAP: u32 = 32;

/// Ace-Five running count contribution of a single rank.
pub fn ace_five_delta(rank: Rank) -> i32 {
    match rank {
        Rank::Ace => -1,
        Rank::Five => 1,
        _ => 0,
    }
}

/// How two opening cards are compared when looking for a splittable pair.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PairMatch {
    /// Ranks must be identical: `T`+`K` is not a pair.
    #[default]
    Literal,
    /// Any two ten-valued cards form a pair.
    TenValue,
}

impl PairMatch {
    pub fn matches(self, a: Rank, b: Rank) -> bool {
        match self {
            PairMatch::Literal => a == b,
            PairMatch::TenValue => a == b || (a.is_ten_valued() && b.is_ten_valued()),
        }
    }
}

/// State that lives for one shoe: reset only by a shuffle.
#[derive(Debug, Clone, Eq, PartialEq, Serialize)]
pub struct ShoeState {
    count: i32,
    last_bet: u32,
    bet_cap: u32,
}

impl Default for ShoeState {
    fn default() -> Self {
        Self::new(DEFAULT_BET_CAP)
    }
}

impl ShoeState {
    pub fn new(bet_cap: u32) -> Self {
        Self {
            count: 0,
            last_bet: 1,
            bet_cap: bet_cap.max(1),
        }
    }

    pub fn count(&self) -> i32 {
        self.count
    }

    pub fn last_bet(&self) -> u32 {
        self.last_bet
    }

    pub fn bet_cap(&self) -> u32 {
        self.bet_cap
    }

    pub fn observe(&mut self, rank: Rank) {
        self.count += ace_five_delta(rank);
    }

    pub fn shuffle(&mut self) {
        self.count = 0;
        self.last_bet = 1;
    }

    pub fn record_bet(&mut self, units: u32) {
        self.last_bet = units;
    }
}

/// Cards the player has received in the current hand.
#[derive(Debug, Clone, Default, Eq, PartialEq, Serialize)]
pub struct HandState {
    cards_dealt: u32,
    first: Option<Rank>,
    second: Option<Rank>,
}

impl HandState {
    pub fn cards_dealt(&self) -> u32 {
        self.cards_dealt
    }

    pub fn first(&self) -> Option<Rank> {
        self.first
    }

    pub fn second(&self) -> Option<Rank> {
        self.second
    }

    pub fn new_hand(&mut self) {
        *self = HandState::default();
    }

    /// The engine moved the second card away to start a split hand; the card
    /// left in place becomes card number one of the new hand.
    pub fn split_ok(&mut self) {
        self.cards_dealt = 1;
    }

    /// Register one card dealt to the player. `rank` is `None` when the card
    /// token could not be read; the card still counts towards the hand.
    pub fn deal(&mut self, rank: Option<Rank>) {
        self.cards_dealt += 1;
        match self.cards_dealt {
            1 => self.first = rank,
            2 => self.second = rank,
            _ => {}
        }
    }

    /// Rank of the opening pair, if exactly two cards are in hand and they match.
    pub fn opening_pair(&self, pair_match: PairMatch) -> Option<Rank> {
        if self.cards_dealt != 2 {
            return None;
        }
        match (self.first, self.second) {
            (Some(a), Some(b)) if pair_match.matches(a, b) => Some(a),
            _ => None,
        }
    }
}

/// Everything the dispatcher tracks between two reads.
#[derive(Debug, Clone, Default, Eq, PartialEq, Serialize)]
pub struct TableState {
    pub shoe: ShoeState,
    pub hand: HandState,
}

impl TableState {
    pub fn new(bet_cap: u32) -> Self {
        Self {
            shoe: ShoeState::new(bet_cap),
            hand: HandState::default(),
        }
    }
}
