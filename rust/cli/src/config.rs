//! Player configuration.
//!
//! Values are resolved in layers, later layers winning:
//! built-in defaults, the TOML file named by `ACEFIVE_CONFIG`, `ACEFIVE_*`
//! environment variables, then command-line flags. Every value remembers
//! which layer it came from so `acefive cfg` can show it.

use std::fs;
use std::path::PathBuf;

use acefive_ai::insurance::InsurancePolicy;
use acefive_ai::play::PlayRules;
use acefive_ai::{BetPolicyKind, StrategyOptions};
use acefive_engine::state::{DEFAULT_BET_CAP, PairMatch};
use serde::{Deserialize, Serialize};

use crate::cli::PlayerArgs;

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub strategy: String,
    pub bet_policy: BetPolicyKind,
    pub flat_bet: u32,
    pub max_bet: u32,
    pub insurance: InsurancePolicy,
    pub surrender: bool,
    pub pair_match: PairMatch,
    pub transcript: Option<PathBuf>,
    pub cards_log: Option<PathBuf>,
    pub verbose: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueSource {
    Default,
    File,
    Env,
    Cli,
}

#[derive(Debug, Clone, Copy)]
pub struct ConfigSources {
    pub strategy: ValueSource,
    pub bet_policy: ValueSource,
    pub flat_bet: ValueSource,
    pub max_bet: ValueSource,
    pub insurance: ValueSource,
    pub surrender: ValueSource,
    pub pair_match: ValueSource,
    pub transcript: ValueSource,
    pub cards_log: ValueSource,
    pub verbose: ValueSource,
}

impl Default for ConfigSources {
    fn default() -> Self {
        Self {
            strategy: ValueSource::Default,
            bet_policy: ValueSource::Default,
            flat_bet: ValueSource::Default,
            max_bet: ValueSource::Default,
            insurance: ValueSource::Default,
            surrender: ValueSource::Default,
            pair_match: ValueSource::Default,
            transcript: ValueSource::Default,
            cards_log: ValueSource::Default,
            verbose: ValueSource::Default,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ConfigResolved {
    pub config: Config,
    pub sources: ConfigSources,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            strategy: "ace-five".into(),
            bet_policy: BetPolicyKind::Flat,
            flat_bet: 1,
            max_bet: DEFAULT_BET_CAP,
            insurance: InsurancePolicy::Never,
            surrender: false,
            pair_match: PairMatch::Literal,
            transcript: None,
            cards_log: None,
            verbose: false,
        }
    }
}

impl Config {
    pub fn strategy_options(&self) -> StrategyOptions {
        StrategyOptions {
            rules: PlayRules {
                surrender_hard16_vs_ten: self.surrender,
                pair_match: self.pair_match,
            },
            bet_policy: self.bet_policy,
            flat_bet: self.flat_bet,
            insurance: self.insurance,
        }
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    Invalid(String),
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}
impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        ConfigError::Parse(e)
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "cannot read config file: {}", e),
            ConfigError::Parse(e) => write!(f, "cannot parse config file: {}", e),
            ConfigError::Invalid(msg) => f.write_str(msg),
        }
    }
}

/// Defaults, file and environment; no command-line layer.
pub fn load_with_sources() -> Result<ConfigResolved, ConfigError> {
    let mut cfg = Config::default();
    let mut sources = ConfigSources::default();

    if let Ok(path) = std::env::var("ACEFIVE_CONFIG")
        && !path.is_empty()
    {
        let s = fs::read_to_string(path)?;
        let f: FileConfig = toml::from_str(&s)?;
        if let Some(v) = f.strategy {
            cfg.strategy = v;
            sources.strategy = ValueSource::File;
        }
        if let Some(v) = f.bet_policy {
            cfg.bet_policy = v;
            sources.bet_policy = ValueSource::File;
        }
        if let Some(v) = f.flat_bet {
            cfg.flat_bet = v;
            sources.flat_bet = ValueSource::File;
        }
        if let Some(v) = f.max_bet {
            cfg.max_bet = v;
            sources.max_bet = ValueSource::File;
        }
        if let Some(v) = f.insurance {
            cfg.insurance = parse_insurance(&v)?;
            sources.insurance = ValueSource::File;
        }
        if let Some(v) = f.surrender {
            cfg.surrender = v;
            sources.surrender = ValueSource::File;
        }
        if let Some(v) = f.pair_match {
            cfg.pair_match = v;
            sources.pair_match = ValueSource::File;
        }
        if let Some(v) = f.transcript {
            cfg.transcript = Some(v);
            sources.transcript = ValueSource::File;
        }
        if let Some(v) = f.cards_log {
            cfg.cards_log = Some(v);
            sources.cards_log = ValueSource::File;
        }
        if let Some(v) = f.verbose {
            cfg.verbose = v;
            sources.verbose = ValueSource::File;
        }
    }

    if let Some(v) = env_value("ACEFIVE_STRATEGY") {
        cfg.strategy = v;
        sources.strategy = ValueSource::Env;
    }
    if let Some(v) = env_value("ACEFIVE_BET_POLICY") {
        cfg.bet_policy = v
            .parse()
            .map_err(|_| ConfigError::Invalid(format!("Invalid bet_policy: {}", v)))?;
        sources.bet_policy = ValueSource::Env;
    }
    if let Some(v) = env_value("ACEFIVE_FLAT_BET") {
        cfg.flat_bet = v
            .parse()
            .map_err(|_| ConfigError::Invalid("Invalid flat_bet".into()))?;
        sources.flat_bet = ValueSource::Env;
    }
    if let Some(v) = env_value("ACEFIVE_MAX_BET") {
        cfg.max_bet = v
            .parse()
            .map_err(|_| ConfigError::Invalid("Invalid max_bet".into()))?;
        sources.max_bet = ValueSource::Env;
    }
    if let Some(v) = env_value("ACEFIVE_INSURANCE") {
        cfg.insurance = parse_insurance(&v)?;
        sources.insurance = ValueSource::Env;
    }
    if let Some(v) = env_value("ACEFIVE_SURRENDER") {
        cfg.surrender =
            parse_bool(&v).ok_or_else(|| ConfigError::Invalid("Invalid surrender".into()))?;
        sources.surrender = ValueSource::Env;
    }
    if let Some(v) = env_value("ACEFIVE_PAIR_MATCH") {
        cfg.pair_match = parse_pair_match(&v)?;
        sources.pair_match = ValueSource::Env;
    }
    if let Some(v) = env_value("ACEFIVE_TRANSCRIPT") {
        cfg.transcript = Some(v.into());
        sources.transcript = ValueSource::Env;
    }
    if let Some(v) = env_value("ACEFIVE_CARDS_LOG") {
        cfg.cards_log = Some(v.into());
        sources.cards_log = ValueSource::Env;
    }
    if let Some(v) = env_value("ACEFIVE_VERBOSE") {
        cfg.verbose =
            parse_bool(&v).ok_or_else(|| ConfigError::Invalid("Invalid verbose".into()))?;
        sources.verbose = ValueSource::Env;
    }

    validate(&cfg)?;
    Ok(ConfigResolved {
        config: cfg,
        sources,
    })
}

/// Full resolution including command-line flags.
pub fn resolve(args: &PlayerArgs) -> Result<ConfigResolved, ConfigError> {
    let ConfigResolved {
        config: mut cfg,
        mut sources,
    } = load_with_sources()?;

    if let Some(v) = &args.strategy {
        cfg.strategy = v.clone();
        sources.strategy = ValueSource::Cli;
    }
    if let Some(v) = &args.bet_policy {
        cfg.bet_policy = v
            .parse()
            .map_err(|_| ConfigError::Invalid(format!("Invalid bet_policy: {}", v)))?;
        sources.bet_policy = ValueSource::Cli;
    }
    if let Some(v) = args.flat_bet {
        cfg.flat_bet = v;
        sources.flat_bet = ValueSource::Cli;
    }
    if let Some(v) = args.max_bet {
        cfg.max_bet = v;
        sources.max_bet = ValueSource::Cli;
    }
    if let Some(v) = &args.insurance {
        cfg.insurance = parse_insurance(v)?;
        sources.insurance = ValueSource::Cli;
    }
    if args.surrender {
        cfg.surrender = true;
        sources.surrender = ValueSource::Cli;
    }
    if let Some(v) = &args.pair_match {
        cfg.pair_match = parse_pair_match(v)?;
        sources.pair_match = ValueSource::Cli;
    }
    if let Some(v) = &args.transcript {
        cfg.transcript = Some(v.clone());
        sources.transcript = ValueSource::Cli;
    }
    if let Some(v) = &args.cards_log {
        cfg.cards_log = Some(v.clone());
        sources.cards_log = ValueSource::Cli;
    }
    if args.verbose {
        cfg.verbose = true;
        sources.verbose = ValueSource::Cli;
    }

    validate(&cfg)?;
    Ok(ConfigResolved {
        config: cfg,
        sources,
    })
}

#[derive(Debug, Deserialize)]
struct FileConfig {
    #[serde(default)]
    strategy: Option<String>,
    #[serde(default)]
    bet_policy: Option<BetPolicyKind>,
    #[serde(default)]
    flat_bet: Option<u32>,
    #[serde(default)]
    max_bet: Option<u32>,
    #[serde(default)]
    insurance: Option<String>,
    #[serde(default)]
    surrender: Option<bool>,
    #[serde(default)]
    pair_match: Option<PairMatch>,
    #[serde(default)]
    transcript: Option<PathBuf>,
    #[serde(default)]
    cards_log: Option<PathBuf>,
    #[serde(default)]
    verbose: Option<bool>,
}

fn validate(cfg: &Config) -> Result<(), ConfigError> {
    if cfg.flat_bet == 0 {
        return Err(ConfigError::Invalid(
            "Invalid configuration: flat_bet must be >=1".into(),
        ));
    }
    if cfg.max_bet == 0 {
        return Err(ConfigError::Invalid(
            "Invalid configuration: max_bet must be >=1".into(),
        ));
    }
    Ok(())
}

fn env_value(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.is_empty())
}

fn parse_insurance(s: &str) -> Result<InsurancePolicy, ConfigError> {
    s.parse()
        .map_err(|e: acefive_ai::StrategyError| ConfigError::Invalid(e.to_string()))
}

fn parse_pair_match(s: &str) -> Result<PairMatch, ConfigError> {
    match s.trim().to_ascii_lowercase().as_str() {
        "literal" => Ok(PairMatch::Literal),
        "ten-value" | "ten_value" => Ok(PairMatch::TenValue),
        _ => Err(ConfigError::Invalid(format!(
            "Invalid pair_match: {} (expected literal or ten-value)",
            s
        ))),
    }
}

fn parse_bool(s: &str) -> Option<bool> {
    match s.to_ascii_lowercase().as_str() {
        "1" | "true" | "on" | "yes" => Some(true),
        "0" | "false" | "off" | "no" => Some(false),
        _ => None,
    }
}
