//! Command handler modules for the acefive CLI.
//!
//! Each command is implemented in its own module file with a consistent pattern:
//!
//! - Public handler function: `pub fn handle_COMMAND_command(...) -> Result<(), CliError>`
//! - Dependency injection: streams (`&mut dyn Write`, `&mut dyn BufRead`) passed as parameters
//! - Error propagation: All errors propagated via `CliError` enum

mod cfg;
mod play;
mod replay;

pub use cfg::handle_cfg_command;
pub use play::handle_play_command;
pub use replay::handle_replay_command;
