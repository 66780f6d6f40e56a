//! Diagnostic side channel.
//!
//! Two optional plain-text files, both consumed by offline analysis tools:
//!
//! - the transcript: every line received from the engine, verbatim;
//! - the cards log: one player card token per line (`AH`, `TC`, ...), no
//!   header and no blank lines.
//!
//! Writes are buffered and never flushed on the reply path. A failing side
//! channel is logged once and closed; it never ends the session.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use acefive_engine::cards::Card;
use tracing::warn;

use crate::io_utils::ensure_parent_dir;

#[derive(Debug, Default)]
pub struct Transcript {
    lines: Option<BufWriter<File>>,
    cards: Option<BufWriter<File>>,
}

impl Transcript {
    pub fn disabled() -> Self {
        Self::default()
    }

    /// Create (truncate) the requested files. `None` leaves a channel off.
    pub fn open(lines: Option<&Path>, cards: Option<&Path>) -> std::io::Result<Self> {
        Ok(Self {
            lines: lines.map(create).transpose()?,
            cards: cards.map(create).transpose()?,
        })
    }

    pub fn is_enabled(&self) -> bool {
        self.lines.is_some() || self.cards.is_some()
    }

    pub fn record_line(&mut self, line: &str) {
        append(&mut self.lines, "transcript", line);
    }

    pub fn record_card(&mut self, card: &Card) {
        append(&mut self.cards, "cards log", &card.to_string());
    }

    /// Flush both channels; called once when the session ends.
    pub fn finish(&mut self) {
        for (slot, name) in [(&mut self.lines, "transcript"), (&mut self.cards, "cards log")] {
            if let Some(writer) = slot.as_mut()
                && let Err(e) = writer.flush()
            {
                warn!(channel = name, error = %e, "failed to flush side channel");
                *slot = None;
            }
        }
    }
}

fn create(path: &Path) -> std::io::Result<BufWriter<File>> {
    ensure_parent_dir(path)?;
    Ok(BufWriter::new(File::create(path)?))
}

fn append(slot: &mut Option<BufWriter<File>>, name: &str, text: &str) {
    if let Some(writer) = slot.as_mut()
        && let Err(e) = writeln!(writer, "{}", text)
    {
        warn!(channel = name, error = %e, "side channel disabled after write failure");
        *slot = None;
    }
}
