use std::env;
use std::path::PathBuf;

use rogue_core::Command;

/// Client configuration, read from the environment (and `.env`).
#[derive(Clone, Debug, PartialEq)]
pub struct ClientConfig {
    /// Session seed every random roll is derived from.
    pub seed: u64,
    /// Commands played back before live input is read.
    pub replay: Vec<Command>,
    pub session_id: Option<String>,
    /// Overrides the platform log directory.
    pub log_dir: Option<PathBuf>,
    /// Index of the final zone of the demo dungeon.
    pub difficulty: u32,
    /// Monster density `M` of the demo dungeon.
    pub density: f64,
}

impl ClientConfig {
    pub const DEFAULT_SEED: u64 = 0x5eed;
    pub const DEFAULT_DIFFICULTY: u32 = 3;
    pub const DEFAULT_DENSITY: f64 = 3.0;

    /// Load configuration from environment variables.
    ///
    /// - `ROGUE_SEED`: session seed
    /// - `ROGUE_REPLAY`: comma-separated command codes, e.g. `1,1,4,3`
    /// - `ROGUE_SESSION_ID`: log subdirectory name
    /// - `ROGUE_LOG_DIR`: log root
    /// - `ROGUE_DIFFICULTY`: final zone index (at least 1)
    /// - `ROGUE_DENSITY`: monster density (positive)
    ///
    /// Unparsable values fall back to the defaults.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(seed) = read_env::<u64>("ROGUE_SEED") {
            config.seed = seed;
        }

        if let Ok(replay) = env::var("ROGUE_REPLAY") {
            config.replay = parse_replay(&replay);
        }

        config.session_id = env::var("ROGUE_SESSION_ID").ok();
        config.log_dir = env::var("ROGUE_LOG_DIR").ok().map(PathBuf::from);

        if let Some(difficulty) = read_env::<u32>("ROGUE_DIFFICULTY") {
            config.difficulty = difficulty.max(1);
        }

        if let Some(density) = read_env::<f64>("ROGUE_DENSITY")
            && density.is_finite()
            && density > 0.0
        {
            config.density = density;
        }

        config
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            seed: Self::DEFAULT_SEED,
            replay: Vec::new(),
            session_id: None,
            log_dir: None,
            difficulty: Self::DEFAULT_DIFFICULTY,
            density: Self::DEFAULT_DENSITY,
        }
    }
}

/// Parses a comma-separated list of command codes. Empty entries are skipped.
pub fn parse_replay(input: &str) -> Vec<Command> {
    input
        .split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(Command::parse)
        .collect()
}

/// Formats commands the way `ROGUE_REPLAY` expects them.
pub fn format_replay<'a>(commands: impl IntoIterator<Item = &'a Command>) -> String {
    commands
        .into_iter()
        .map(|command| command.code().to_string())
        .collect::<Vec<_>>()
        .join(",")
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}
