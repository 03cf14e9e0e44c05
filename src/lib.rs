/*!
`spice_optimizer` — exact budget allocation and forage race simulation for
spice foraging.

What it does
- Picks the combination of foraging upgrades (`ResourceOption`s) that
  maximizes total spice yield without exceeding a budget
  (`systems::allocation::solve`). Exact bounded knapsack, deterministic ties.
- Races two pet teams on a territory and reports when the second team's
  spice stack overtakes the first (`systems::forage_race`).
- Loads genetics/territory data and builds the default teams (`content`).

How to use (call surface only)
- `solve(&options, budget) -> Result<Allocation, InvalidInput>`
- `ForageRace::new(&territory, &team_a, &team_b, cfg).run() -> RaceReport`

What it does NOT do
- No persistence, no network, no UI. The `spice` binary is a thin caller.
*/

pub mod config;
pub mod content;
pub mod error;
pub mod logger;
pub mod mechanics;
pub mod systems;

#[cfg(all(feature = "system-allocation", feature = "system-forage_race"))]
pub mod cli;

pub use error::{InvalidInput, TeamError};

#[cfg(feature = "system-allocation")]
pub use systems::allocation::{
    Allocation, Budget, Pick, ResourceOption, Solver, SolverConfig, Strategy, solve,
};
