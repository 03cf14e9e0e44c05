//! Game content: genetics, pets, territories and teams.
//!
//! Plain data types with the few derived values the race needs. Loading from
//! disk lives in [`loader`].

pub mod loader;
pub mod model;

pub use loader::{Catalog, LoadResult};
pub use model::{Genetic, Pet, Team, Territory};

/// Pets per team.
pub const MAX_TEAM_SIZE: usize = 4;

/// Race horizon used when the caller does not pick one.
pub const MAX_SIMULATION_HOURS: u32 = 48;

pub const META_TEAM: &str = "Meta Team";
pub const ALCHEMIC_TEAM: &str = "Alchemic Team";

/// Default team compositions, by genetic name.
pub const DEFAULT_TEAMS: [(&str, [&str; MAX_TEAM_SIZE]); 2] = [
    (META_TEAM, ["Borger", "Miasma", "Forager", "Converter"]),
    (ALCHEMIC_TEAM, ["Alchemic", "Alchemic", "Alchemic", "Converter"]),
];

pub const ALCHEMIC: &str = "Alchemic";
pub const MONOLITHIC: &str = "Monolithic";

pub const GENETIC_ASSETS_PATH: &str = "assets/genetics";
pub const SPICE_ASSETS_PATH: &str = "assets/spices";
pub const TERRITORY_ASSETS_PATH: &str = "assets/territories";
