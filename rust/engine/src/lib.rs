//! # acefive-engine: Blackjack Player Protocol Core
//!
//! Data types shared by the Ace-Five blackjack player: cards, the textual
//! line protocol spoken with the game engine, and the per-shoe / per-hand
//! state the player keeps between reads. Nothing in this crate performs I/O.
//!
//! ## Core Modules
//!
//! - [`cards`] - Card representation (Suit, Rank, Card) and token parsing
//! - [`protocol`] - Command classification, play queries and reply tokens
//! - [`state`] - Running count, bet ledger and opening-hand tracking
//! - [`errors`] - Protocol error type
//!
//! ## Quick Start
//!
//! ```rust
//! use acefive_engine::protocol::{parse_line, Command, Seat};
//! use acefive_engine::state::TableState;
//!
//! let mut table = TableState::default();
//! for line in ["shuffling", "new_hand 1 0", "card_player 5D", "card_dealer AS"] {
//!     match parse_line(line) {
//!         Command::Shuffling => table.shoe.shuffle(),
//!         Command::NewHand => table.hand.new_hand(),
//!         Command::Card { seat, card: Ok(card) } => {
//!             table.shoe.observe(card.rank);
//!             if seat == Seat::Player {
//!                 table.hand.deal(Some(card.rank));
//!             }
//!         }
//!         _ => {}
//!     }
//! }
//! assert_eq!(table.shoe.count(), 0);
//! assert_eq!(table.hand.cards_dealt(), 1);
//! ```

pub mod cards;
pub mod errors;
pub mod protocol;
pub mod state;
