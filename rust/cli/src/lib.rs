//! # acefive CLI Library
//!
//! Command-line front-end for the Ace-Five blackjack player. The player talks
//! to a blackjack game engine over a line protocol on stdin/stdout, keeps the
//! Ace-Five running count for the life of a shoe, and answers every query the
//! engine poses.
//!
//! ## Main Entry Point
//!
//! The primary entry point is the [`run`] function, which parses command-line arguments
//! and executes the appropriate subcommand.
//!
//! ## Example Usage
//!
//! ```no_run
//! use std::io;
//! let args = vec!["acefive", "play"];
//! let code = acefive_cli::run(args, &mut io::stdout(), &mut io::stderr());
//! assert_eq!(code, 0);
//! ```
//!
//! ## Available Subcommands
//!
//! - `play`: Answer a live game engine on stdin/stdout
//! - `replay`: Run a recorded transcript through the player
//! - `cfg`: Display current configuration settings

use std::io::Write;

use clap::Parser;

pub mod cli;
mod commands;
pub mod config;
pub mod dispatcher;
mod error;
mod exit_code;
pub mod io_utils;
pub mod logging;
#[macro_use]
mod macros;
pub mod transcript;
pub mod ui;

use cli::{AcefiveCli, Commands};
use commands::{handle_cfg_command, handle_play_command, handle_replay_command};

pub use error::CliError;

/// Main entry point for the CLI application.
///
/// # Arguments
///
/// * `args` - Iterator over command-line arguments (typically `std::env::args()`)
/// * `out` - Output stream for protocol replies and command output (typically `stdout`)
/// * `err` - Output stream for error messages (typically `stderr`)
///
/// # Returns
///
/// Exit code: `0` for success (including `bye` and end of input), `2` for errors
///
/// # Example
///
/// ```
/// use std::io;
/// let code = acefive_cli::run(vec!["acefive", "cfg"], &mut io::stdout(), &mut io::stderr());
/// assert_eq!(code, 0);
/// ```
pub fn run<I, S>(args: I, out: &mut dyn Write, err: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let argv: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();
    let parsed = AcefiveCli::try_parse_from(&argv);

    let cli = match parsed {
        Ok(cli) => cli,
        Err(e) => {
            use clap::error::ErrorKind;
            return match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                    write_or_exit!(out, "{}", e.to_string().trim_end());
                    exit_code::SUCCESS
                }
                _ => {
                    write_or_exit!(err, "{}", e.to_string().trim_end());
                    exit_code::ERROR
                }
            };
        }
    };

    let result = match cli.cmd {
        Commands::Play { player } => {
            let stdin = std::io::stdin();
            let mut stdin_lock = stdin.lock();
            handle_play_command(&player, &mut stdin_lock, out, err)
        }
        Commands::Replay { input, player } => handle_replay_command(&input, &player, out, err),
        Commands::Cfg { player } => handle_cfg_command(&player, out, err),
    };

    match result {
        Ok(()) => exit_code::SUCCESS,
        Err(CliError::Config(_)) => exit_code::ERROR,
        Err(e) => {
            write_or_exit!(err, "Error: {}", e);
            exit_code::ERROR
        }
    }
}
