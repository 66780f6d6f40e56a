//! # Play Command
//!
//! Runs the player against a live game engine: protocol lines arrive on
//! stdin, replies leave on stdout, diagnostics go to stderr.

use std::io::{BufRead, Write};

use acefive_ai::create_strategy;
use tracing::debug;

use crate::cli::PlayerArgs;
use crate::config::{self, Config};
use crate::dispatcher::{Dispatcher, SessionSummary};
use crate::error::CliError;
use crate::logging;
use crate::transcript::Transcript;
use crate::ui;

/// Handle the play command.
///
/// # Arguments
///
/// * `player` - Command-line overrides for the configuration
/// * `input` - Protocol stream from the engine
/// * `out` - Protocol stream to the engine (replies only)
/// * `err` - Error stream for configuration problems
///
/// # Returns
///
/// * `Ok(())` after `bye` or end of input
/// * `Err(CliError)` for configuration errors or a failed protocol stream
pub fn handle_play_command(
    player: &PlayerArgs,
    input: &mut dyn BufRead,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    let config = resolve_config(player, err)?;
    logging::init_logging(config.verbose);
    run_session(&config, input, out).map(|_| ())
}

pub(crate) fn resolve_config(player: &PlayerArgs, err: &mut dyn Write) -> Result<Config, CliError> {
    match config::resolve(player) {
        Ok(resolved) => Ok(resolved.config),
        Err(e) => {
            ui::write_error(err, &format!("Invalid configuration: {}", e))?;
            Err(CliError::Config(format!("Invalid configuration: {}", e)))
        }
    }
}

/// Build the strategy and side channel described by `config`.
pub(crate) fn build_dispatcher(config: &Config) -> Result<Dispatcher, CliError> {
    let strategy = create_strategy(&config.strategy, &config.strategy_options())?;
    let transcript = Transcript::open(config.transcript.as_deref(), config.cards_log.as_deref())?;
    debug!(
        strategy = strategy.name(),
        bet_policy = %config.bet_policy,
        insurance = %config.insurance,
        surrender = config.surrender,
        transcript = transcript.is_enabled(),
        "player ready"
    );
    Ok(Dispatcher::new(strategy, config.max_bet, transcript))
}

pub(crate) fn run_session(
    config: &Config,
    input: &mut dyn BufRead,
    out: &mut dyn Write,
) -> Result<SessionSummary, CliError> {
    let mut dispatcher = build_dispatcher(config)?;
    dispatcher.run(input, out)
}
