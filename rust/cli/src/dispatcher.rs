//! Protocol read loop.
//!
//! The [`Dispatcher`] owns the only copy of the table state. For each line it
//! records the line on the side channel, classifies it with
//! [`parse_line`], updates state or asks the strategy, and writes at most
//! one reply, flushing before the next read because the engine blocks on it.
//!
//! ## Fault handling
//!
//! - Malformed `play?` arguments: warn, answer `stand`, state untouched
//! - Unknown `...?` queries: answer `no`, state untouched
//! - `invalid_command` from the engine: warn, no reply
//! - I/O failure on the protocol stream: returned as [`CliError::Io`]
//!
//! # Example
//!
//! ```rust
//! use std::io::Cursor;
//! use acefive_ai::{create_strategy, StrategyOptions};
//! use acefive_cli::dispatcher::Dispatcher;
//! use acefive_cli::transcript::Transcript;
//!
//! let strategy = create_strategy("ace-five", &StrategyOptions::default()).unwrap();
//! let mut dispatcher = Dispatcher::new(strategy, 32, Transcript::disabled());
//!
//! let mut input = Cursor::new("shuffling\nnew_hand\ncard_player TH\ncard_player TD\nplay? 20 10\nbye\n");
//! let mut out = Vec::new();
//! dispatcher.run(&mut input, &mut out).unwrap();
//! assert_eq!(String::from_utf8(out).unwrap(), "stand\n");
//! ```

use std::io::{BufRead, Write};

use acefive_ai::Strategy;
use acefive_engine::protocol::{parse_line, Action, Command, Query, Reply, Seat};
use acefive_engine::state::TableState;
use serde::Serialize;
use tracing::{debug, info, trace, warn};

use crate::error::CliError;
use crate::io_utils::read_protocol_line;
use crate::transcript::Transcript;

/// What the read loop should do after one command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Continue,
    Reply(Reply),
    Stop,
}

/// Counters reported when a session ends.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SessionSummary {
    pub lines: u64,
    pub replies: u64,
    pub hands: u64,
    pub shuffles: u64,
    pub protocol_faults: u64,
}

#[derive(Debug)]
pub struct Dispatcher {
    strategy: Box<dyn Strategy>,
    table: TableState,
    transcript: Transcript,
    summary: SessionSummary,
}

impl Dispatcher {
    pub fn new(strategy: Box<dyn Strategy>, bet_cap: u32, transcript: Transcript) -> Self {
        Self {
            strategy,
            table: TableState::new(bet_cap),
            transcript,
            summary: SessionSummary::default(),
        }
    }

    pub fn table(&self) -> &TableState {
        &self.table
    }

    pub fn summary(&self) -> &SessionSummary {
        &self.summary
    }

    /// Handle one raw line: side channel first, then dispatch.
    pub fn handle_line(&mut self, line: &str) -> Step {
        self.summary.lines += 1;
        self.transcript.record_line(line);
        trace!(line, "received");
        self.dispatch(parse_line(line))
    }

    pub fn dispatch(&mut self, command: Command) -> Step {
        match command {
            Command::Bye => Step::Stop,
            Command::Shuffling => {
                self.table.shoe.shuffle();
                self.summary.shuffles += 1;
                debug!("shuffle: running count reset");
                Step::Continue
            }
            Command::NewHand => {
                self.table.hand.new_hand();
                self.summary.hands += 1;
                Step::Continue
            }
            Command::PlayerSplitOk => {
                self.table.hand.split_ok();
                Step::Continue
            }
            Command::Card { seat, card } => {
                let rank = match card {
                    Ok(card) => {
                        self.table.shoe.observe(card.rank);
                        if seat == Seat::Player {
                            self.transcript.record_card(&card);
                        }
                        Some(card.rank)
                    }
                    Err(e) => {
                        self.summary.protocol_faults += 1;
                        warn!(error = %e, ?seat, "unreadable card, count unchanged");
                        None
                    }
                };
                if seat == Seat::Player {
                    self.table.hand.deal(rank);
                }
                debug!(
                    count = self.table.shoe.count(),
                    cards = self.table.hand.cards_dealt(),
                    "card observed"
                );
                Step::Continue
            }
            Command::Query(query) => Step::Reply(self.answer(query)),
            Command::InvalidCommand => {
                warn!("engine reported our last reply as an invalid command");
                Step::Continue
            }
            Command::Notice(text) => {
                trace!(notice = %text, "ignored");
                Step::Continue
            }
            Command::Blank => Step::Continue,
        }
    }

    fn answer(&mut self, query: Query) -> Reply {
        match query {
            Query::Play(Ok(play)) => {
                let action = self.strategy.decide_play(&self.table, play);
                debug!(
                    player = play.player_total,
                    dealer = play.dealer_upcard,
                    cards = self.table.hand.cards_dealt(),
                    %action,
                    "play"
                );
                Reply::Play(action)
            }
            Query::Play(Err(e)) => {
                self.summary.protocol_faults += 1;
                warn!(error = %e, "malformed play query, standing");
                Reply::Play(Action::Stand)
            }
            Query::Bet => {
                let bet = self.strategy.decide_bet(&self.table.shoe);
                self.table.shoe.record_bet(bet);
                debug!(bet, count = self.table.shoe.count(), "bet");
                Reply::Bet(bet)
            }
            Query::Insurance => Reply::Insurance(self.strategy.decide_insurance(&self.table.shoe)),
            Query::Unknown(text) => {
                debug!(query = %text, "unknown query, declining");
                Reply::Decline
            }
        }
    }

    /// Run until `bye` or end of input.
    pub fn run(
        &mut self,
        input: &mut dyn BufRead,
        out: &mut dyn Write,
    ) -> Result<SessionSummary, CliError> {
        let result = self.pump(input, out);
        self.transcript.finish();
        result?;
        info!(
            strategy = self.strategy.name(),
            lines = self.summary.lines,
            replies = self.summary.replies,
            hands = self.summary.hands,
            shuffles = self.summary.shuffles,
            protocol_faults = self.summary.protocol_faults,
            count = self.table.shoe.count(),
            "session finished"
        );
        Ok(self.summary.clone())
    }

    fn pump(&mut self, input: &mut dyn BufRead, out: &mut dyn Write) -> Result<(), CliError> {
        while let Some(line) = read_protocol_line(input)? {
            match self.handle_line(&line) {
                Step::Continue => {}
                Step::Reply(reply) => {
                    writeln!(out, "{}", reply)?;
                    out.flush()?;
                    self.summary.replies += 1;
                }
                Step::Stop => break,
            }
        }
        Ok(())
    }
}
