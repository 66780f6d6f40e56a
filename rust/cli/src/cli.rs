//! Command-line definitions.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "acefive",
    version,
    about = "Ace-Five counting blackjack player speaking the engine's line protocol"
)]
pub struct AcefiveCli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Play against a game engine on stdin/stdout until `bye` or end of input
    Play {
        #[command(flatten)]
        player: PlayerArgs,
    },
    /// Feed a recorded engine transcript through the player and print the replies
    Replay {
        #[arg(long)]
        input: PathBuf,
        #[command(flatten)]
        player: PlayerArgs,
    },
    /// Show the resolved configuration and where each value came from
    Cfg {
        #[command(flatten)]
        player: PlayerArgs,
    },
}

/// Flags shared by every subcommand; each one overrides file and environment.
#[derive(Args, Debug, Default, Clone)]
pub struct PlayerArgs {
    /// Strategy name
    #[arg(long)]
    pub strategy: Option<String>,
    /// Bet sizing policy: flat or count-scaled
    #[arg(long)]
    pub bet_policy: Option<String>,
    /// Units wagered by the flat policy
    #[arg(long)]
    pub flat_bet: Option<u32>,
    /// Ceiling for the count-scaled policy
    #[arg(long)]
    pub max_bet: Option<u32>,
    /// Insurance policy: never, always or count:<n>
    #[arg(long)]
    pub insurance: Option<String>,
    /// Surrender hard 16 against a dealer ten
    #[arg(long)]
    pub surrender: bool,
    /// Pair detection for splits: literal or ten-value
    #[arg(long)]
    pub pair_match: Option<String>,
    /// Write every received line to this file
    #[arg(long)]
    pub transcript: Option<PathBuf>,
    /// Write every player card token to this file
    #[arg(long)]
    pub cards_log: Option<PathBuf>,
    /// Debug logging on stderr
    #[arg(long, short)]
    pub verbose: bool,
}
