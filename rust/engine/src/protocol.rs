//! Line protocol spoken between the game engine and the player.
//!
//! Every inbound line is turned into a [`Command`] by a single call to
//! [`parse_line`]; the dispatcher then matches exhaustively on the variant
//! instead of re-testing string prefixes. Outbound lines are [`Reply`] values
//! whose `Display` form is the exact wire token.
//!
//! ```rust
//! use acefive_engine::protocol::{parse_line, Command, PlayQuery, Query};
//!
//! assert_eq!(parse_line("shuffling"), Command::Shuffling);
//! assert_eq!(
//!     parse_line("play? -16 4"),
//!     Command::Query(Query::Play(Ok(PlayQuery { player_total: -16, dealer_upcard: 4 })))
//! );
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::errors::ProtocolError;

/// Whose hand a dealt card belongs to.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub enum Seat {
    Player,
    Dealer,
}

/// Arguments of a `play?` query.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct PlayQuery {
    /// Hand total; a negative value encodes a soft total of the same magnitude.
    pub player_total: i32,
    /// Dealer up-card value with the sign dropped.
    pub dealer_upcard: u32,
}

impl PlayQuery {
    pub fn is_soft(&self) -> bool {
        self.player_total < 0
    }

    pub fn magnitude(&self) -> u32 {
        self.player_total.unsigned_abs()
    }
}

/// A line ending in `?`: the engine blocks until it gets exactly one reply.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum Query {
    Play(Result<PlayQuery, ProtocolError>),
    Bet,
    Insurance,
    /// Any other `?`-terminated line, kept verbatim.
    Unknown(String),
}

/// One inbound line, classified.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum Command {
    Bye,
    Shuffling,
    NewHand,
    PlayerSplitOk,
    /// `card_player`, `card_dealer`, `card_dealer_up`, `card_dealer_hole`.
    Card {
        seat: Seat,
        card: Result<Card, ProtocolError>,
    },
    Query(Query),
    /// The engine reports that the last thing we sent was not understood.
    InvalidCommand,
    /// Informational line that needs neither a reply nor a state change
    /// (`player_wins ...`, `dealer_blackjack`, `bankroll ...`).
    Notice(String),
    Blank,
}

/// Playing decision for a `play?` query.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    Hit,
    Stand,
    Double,
    Split,
    Surrender,
}

impl Action {
    pub fn as_str(self) -> &'static str {
        match self {
            Action::Hit => "hit",
            Action::Stand => "stand",
            Action::Double => "double",
            Action::Split => "split",
            Action::Surrender => "surrender",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One outbound line.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Reply {
    Play(Action),
    Bet(u32),
    Insurance(bool),
    /// Neutral answer to a query the strategy does not implement.
    Decline,
}

impl fmt::Display for Reply {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reply::Play(action) => write!(f, "{}", action),
            Reply::Bet(units) => write!(f, "{}", units),
            Reply::Insurance(true) => f.write_str("yes"),
            Reply::Insurance(false) | Reply::Decline => f.write_str("no"),
        }
    }
}

/// Classify one line received from the game engine.
///
/// Surrounding whitespace (including the trailing newline) is ignored. The
/// function never fails: argument problems are carried inside the variant so
/// that the caller can still answer the engine.
pub fn parse_line(line: &str) -> Command {
    let line = line.trim();
    if line.is_empty() {
        return Command::Blank;
    }

    match line {
        "bye" => return Command::Bye,
        "shuffling" => return Command::Shuffling,
        "insurance?" => return Command::Query(Query::Insurance),
        "bet?" => return Command::Query(Query::Bet),
        "invalid_command" => return Command::InvalidCommand,
        _ => {}
    }

    if line.starts_with("new_hand") {
        Command::NewHand
    } else if line.starts_with("player_split_ok") {
        Command::PlayerSplitOk
    } else if line.starts_with("card_") {
        parse_card(line)
    } else if let Some(args) = line.strip_prefix("play?") {
        Command::Query(Query::Play(parse_play_args(args)))
    } else if line.ends_with('?') {
        Command::Query(Query::Unknown(line.to_string()))
    } else {
        Command::Notice(line.to_string())
    }
}

fn parse_card(line: &str) -> Command {
    let mut tokens = line.split_whitespace();
    let seat = match tokens.next() {
        Some("card_player") => Seat::Player,
        _ => Seat::Dealer,
    };
    // A trailing split-hand id may follow the card token.
    let card = match tokens.next() {
        Some(token) => token.parse::<Card>(),
        None => Err(ProtocolError::MissingArgument {
            command: "card",
            name: "card",
        }),
    };
    Command::Card { seat, card }
}

fn parse_play_args(args: &str) -> Result<PlayQuery, ProtocolError> {
    let mut tokens = args.split_whitespace();
    let player_total = parse_int(tokens.next(), "player")?;
    let dealer = parse_int(tokens.next(), "dealer")?;
    if let Some(extra) = tokens.next() {
        return Err(ProtocolError::TrailingArgument(extra.to_string()));
    }
    Ok(PlayQuery {
        player_total,
        dealer_upcard: dealer.unsigned_abs(),
    })
}

fn parse_int(token: Option<&str>, name: &'static str) -> Result<i32, ProtocolError> {
    let token = token.ok_or(ProtocolError::MissingArgument {
        command: "play?",
        name,
    })?;
    token.parse().map_err(|_| ProtocolError::InvalidInteger {
        name,
        value: token.to_string(),
    })
}
