//! Catalog loader for `territories.json` and `genetics.json`.

use std::path::Path;

use serde::de::DeserializeOwned;
use tracing::info;

use super::model::{Genetic, Pet, Team, Territory};
use super::DEFAULT_TEAMS;
use crate::error::TeamError;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

pub const TERRITORIES_FILE: &str = "territories.json";
pub const GENETICS_FILE: &str = "genetics.json";

/// All static game data the race needs, with name and id lookups.
#[derive(Clone, Debug, Default)]
pub struct Catalog {
    territories: Vec<Territory>,
    genetics: Vec<Genetic>,
}

impl Catalog {
    pub fn new(territories: Vec<Territory>, genetics: Vec<Genetic>) -> Self {
        Self { territories, genetics }
    }

    /// Load both data files from `dir`.
    pub fn load_dir(dir: &Path) -> LoadResult<Self> {
        let territories: Vec<Territory> = load_json(&dir.join(TERRITORIES_FILE))?;
        let genetics: Vec<Genetic> = load_json(&dir.join(GENETICS_FILE))?;
        info!(
            dir = %dir.display(),
            territories = territories.len(),
            genetics = genetics.len(),
            "catalog loaded"
        );
        Ok(Self::new(territories, genetics))
    }

    /// Parse both data sets from JSON text.
    pub fn from_json(territories: &str, genetics: &str) -> LoadResult<Self> {
        let territories = serde_json::from_str(territories)
            .map_err(|e| anyhow::anyhow!("Failed to parse territories JSON: {}", e))?;
        let genetics = serde_json::from_str(genetics)
            .map_err(|e| anyhow::anyhow!("Failed to parse genetics JSON: {}", e))?;
        Ok(Self::new(territories, genetics))
    }

    pub fn territories(&self) -> &[Territory] { &self.territories }
    pub fn genetics(&self) -> &[Genetic] { &self.genetics }

    pub fn genetic_by_id(&self, id: u32) -> Option<&Genetic> {
        self.genetics.iter().find(|g| g.id == id)
    }

    pub fn genetic_by_name(&self, name: &str) -> Option<&Genetic> {
        self.genetics.iter().find(|g| g.name == name)
    }

    pub fn territory_by_name(&self, name: &str) -> Option<&Territory> {
        self.territories.iter().find(|t| t.name == name)
    }

    /// One of the [`DEFAULT_TEAMS`] with a hand-entered speed.
    pub fn default_team(&self, label: &str, speed: f64) -> Result<Team, TeamError> {
        let (_, genes) = DEFAULT_TEAMS
            .iter()
            .find(|(name, _)| *name == label)
            .ok_or_else(|| TeamError::UnknownTeam(label.to_string()))?;
        let pets = genes
            .iter()
            .map(|name| {
                self.genetic_by_name(name)
                    .cloned()
                    .map(Pet::new)
                    .ok_or_else(|| TeamError::UnknownGenetic(name.to_string()))
            })
            .collect::<Result<Vec<_>, _>>()?;
        Team::with_speed(label, pets, speed)
    }
}

/// Helper function to read and parse a JSON file.
pub(crate) fn load_json<T: DeserializeOwned>(path: &Path) -> LoadResult<T> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))?;
    serde_json::from_str(&content)
        .map_err(|e| anyhow::anyhow!("Failed to parse {}: {}", path.display(), e))
}
