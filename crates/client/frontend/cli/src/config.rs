//! CLI-specific configuration.
use std::env;
use std::path::PathBuf;

use arena_core::DuelConfig;
use arena_runtime::SessionConfig;

/// Terminal client configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CliConfig {
    /// Fixed seed for reproducible sessions.
    pub seed: Option<u64>,
    pub max_exchanges: u32,
    /// TOML roster replacing the built-in templates.
    pub roster_path: Option<PathBuf>,
    pub coin_toss: bool,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            seed: None,
            max_exchanges: DuelConfig::DEFAULT_MAX_EXCHANGES,
            roster_path: None,
            coin_toss: true,
        }
    }
}

impl CliConfig {
    /// Construct CLI configuration from environment variables.
    ///
    /// Environment variables:
    /// - `ARENA_SEED` - Seed for the session random source (default: entropy)
    /// - `ARENA_MAX_EXCHANGES` - Exchange cap per duel (default: 1000)
    /// - `ARENA_ROSTER` - Path to a roster TOML file (default: built-in roster)
    /// - `ARENA_COIN_TOSS` - `false` lets the first pick always open (default: true)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`CliConfig::from_env`] over an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(seed) = parse(&lookup, "ARENA_SEED") {
            config.seed = Some(seed);
        }
        if let Some(max) = parse::<u32>(&lookup, "ARENA_MAX_EXCHANGES") {
            config.max_exchanges = max.max(1);
        }
        if let Some(path) = lookup("ARENA_ROSTER").filter(|path| !path.trim().is_empty()) {
            config.roster_path = Some(PathBuf::from(path));
        }
        if let Some(coin_toss) = parse(&lookup, "ARENA_COIN_TOSS") {
            config.coin_toss = coin_toss;
        }

        config
    }

    pub fn session_config(&self) -> SessionConfig {
        SessionConfig {
            seed: self.seed,
            coin_toss: self.coin_toss,
            duel: DuelConfig::with_max_exchanges(self.max_exchanges),
        }
    }
}

fn parse<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    lookup(key)?.trim().parse().ok()
}
