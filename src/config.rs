//! Configuration loading (TOML).
//!
//! Every section is optional; a missing `spice.toml` means defaults.
//!
//! ```toml
//! [solver]
//! strategy = "exhaustive"
//! tolerance = 1e-9
//!
//! [race]
//! max_hours = 72
//! stop_at_breakeven = false
//!
//! [data]
//! dir = "data"
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

#[cfg(feature = "system-allocation")]
use crate::systems::allocation::SolverConfig;
#[cfg(feature = "system-forage_race")]
use crate::systems::forage_race::RaceConfig;

/// Looked up in the working directory when no path is given.
pub const CONFIG_FILE: &str = "spice.toml";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[cfg(feature = "system-allocation")]
    #[serde(default)]
    pub solver: SolverConfig,

    #[cfg(feature = "system-forage_race")]
    #[serde(default)]
    pub race: RaceConfig,

    #[serde(default)]
    pub data: DataConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataConfig {
    /// Directory holding `territories.json` and `genetics.json`.
    pub dir: PathBuf,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self { dir: PathBuf::from("data") }
    }
}

impl Config {
    /// `./spice.toml` if present, defaults otherwise.
    pub fn load() -> anyhow::Result<Self> {
        let path = Path::new(CONFIG_FILE);
        if path.exists() {
            Self::load_from(path)
        } else {
            Ok(Self::default())
        }
    }

    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Failed to read config {}: {}", path.display(), e))?;
        Self::parse(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config {}: {}", path.display(), e))
    }

    pub fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_is_all_defaults() {
        let cfg = Config::parse("").unwrap();
        assert_eq!(cfg.data.dir, PathBuf::from("data"));
    }

    #[cfg(all(feature = "system-allocation", feature = "system-forage_race"))]
    #[test]
    fn sections_override_defaults() {
        use crate::systems::allocation::Strategy;

        let cfg = Config::parse(
            r#"
            [solver]
            strategy = "dynamic_programming"

            [race]
            max_hours = 72.0
            stop_at_breakeven = false
            "#,
        )
        .unwrap();
        assert_eq!(cfg.solver.strategy, Strategy::DynamicProgramming);
        assert_eq!(cfg.solver.tolerance, 1e-9);
        assert_eq!(cfg.race.max_hours, 72.0);
        assert!(!cfg.race.stop_at_breakeven);
    }
}
