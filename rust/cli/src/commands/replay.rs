//! # Replay Command
//!
//! Feeds a recorded engine transcript through a fresh player and prints the
//! replies it would have sent. Useful for auditing a session or for
//! rebuilding a cards log from an old transcript.

use std::fs::File;
use std::io::{BufReader, Write};
use std::path::Path;

use crate::cli::PlayerArgs;
use crate::commands::play::{resolve_config, run_session};
use crate::error::CliError;
use crate::logging;
use crate::ui;

pub fn handle_replay_command(
    input: &Path,
    player: &PlayerArgs,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    let config = resolve_config(player, err)?;
    logging::init_logging(config.verbose);

    let file = match File::open(input) {
        Ok(f) => f,
        Err(e) => {
            return Err(CliError::InvalidInput(format!(
                "cannot open {}: {}",
                input.display(),
                e
            )));
        }
    };
    let mut reader = BufReader::new(file);
    let summary = run_session(&config, &mut reader, out)?;
    if summary.protocol_faults > 0 {
        ui::display_warning(
            err,
            &format!("{} protocol fault(s) in transcript", summary.protocol_faults),
        )?;
    }
    Ok(())
}
