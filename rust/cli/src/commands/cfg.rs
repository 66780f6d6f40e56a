//! Configuration command handler.
//!
//! Displays every setting with the layer it came from (default, file, env
//! or cli) as pretty JSON.
//!
//! # Example Output
//!
//! ```json
//! {
//!   "strategy": {
//!     "value": "ace-five",
//!     "source": "default"
//!   },
//!   ...
//! }
//! ```

use std::io::Write;

use crate::cli::PlayerArgs;
use crate::config;
use crate::error::CliError;
use crate::ui;

pub fn handle_cfg_command(
    player: &PlayerArgs,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    let resolved = match config::resolve(player) {
        Ok(r) => r,
        Err(e) => {
            ui::write_error(err, &format!("Invalid configuration: {}", e))?;
            return Err(CliError::Config(format!("Invalid configuration: {}", e)));
        }
    };

    let config::ConfigResolved { config, sources } = resolved;
    let display = serde_json::json!({
        "strategy": {
            "value": config.strategy,
            "source": sources.strategy,
        },
        "bet_policy": {
            "value": config.bet_policy,
            "source": sources.bet_policy,
        },
        "flat_bet": {
            "value": config.flat_bet,
            "source": sources.flat_bet,
        },
        "max_bet": {
            "value": config.max_bet,
            "source": sources.max_bet,
        },
        "insurance": {
            "value": config.insurance.to_string(),
            "source": sources.insurance,
        },
        "surrender": {
            "value": config.surrender,
            "source": sources.surrender,
        },
        "pair_match": {
            "value": config.pair_match,
            "source": sources.pair_match,
        },
        "transcript": {
            "value": config.transcript,
            "source": sources.transcript,
        },
        "cards_log": {
            "value": config.cards_log,
            "source": sources.cards_log,
        },
        "verbose": {
            "value": config.verbose,
            "source": sources.verbose,
        }
    });
    let json_str = serde_json::to_string_pretty(&display).map_err(std::io::Error::other)?;
    writeln!(out, "{}", json_str)?;
    Ok(())
}
