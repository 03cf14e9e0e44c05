//! # Allocation
//!
//! Chooses which foraging upgrades to buy with a fixed budget so total spice
//! yield is maximal. This is a bounded knapsack: every [`ResourceOption`] has a
//! cost, a yield and a maximum multiplicity (1 unless made repeatable).
//!
//! ## Guarantees
//! - `total_cost <= budget` for every returned [`Allocation`].
//! - The optimum is exact; raising the budget never lowers it.
//! - Ties on yield resolve to the lexicographically greatest multiplicity
//!   vector in option order (earlier options first, as many as fit).
//! - Zero budget, or nothing affordable, gives the empty allocation.
//! - Negative or non-finite numbers fail with [`InvalidInput`] before any work.
//!
//! ## Strategies
//! - [`Strategy::DynamicProgramming`] tables whole budget units; it needs
//!   integral costs and a table under [`SolverConfig::dp_cell_limit`]. A row
//!   costs one pass over the budget, however large the multiplicity.
//! - [`Strategy::Exhaustive`] is branch-and-bound and handles fractional
//!   costs. Worst case is exponential in the number of options, which stays
//!   small for game content.
//! - [`Strategy::Auto`] prefers the table and falls back to the search.

mod dp;
mod exhaustive;
mod model;

pub use model::{Allocation, Budget, Pick, ResourceOption, Strategy};

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::error::InvalidInput;

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolverConfig {
    pub strategy: Strategy,
    /// Yields closer than this count as a tie.
    pub tolerance: f64,
    /// Largest DP table (`(options + 1) * (budget + 1)` cells) before `Auto`
    /// switches to the search.
    pub dp_cell_limit: usize,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self { strategy: Strategy::Auto, tolerance: 1e-9, dp_cell_limit: 4_000_000 }
    }
}

/// Stateless solver; the config is fixed at construction.
#[derive(Clone, Copy, Debug, Default)]
pub struct Solver {
    cfg: SolverConfig,
}

impl Solver {
    pub fn new(cfg: SolverConfig) -> Self {
        Self { cfg }
    }

    pub fn with_strategy(strategy: Strategy) -> Self {
        Self::new(SolverConfig { strategy, ..SolverConfig::default() })
    }

    pub fn config(&self) -> &SolverConfig {
        &self.cfg
    }

    /// Best allocation of `budget` across `options`.
    pub fn solve(&self, options: &[ResourceOption], budget: f64) -> Result<Allocation, InvalidInput> {
        let budget = Budget::new(budget)?;
        for (i, o) in options.iter().enumerate() {
            o.validate(i)?;
        }

        if budget.is_zero() || options.is_empty() {
            debug!(options = options.len(), "zero budget or no options; empty allocation");
            return Ok(Allocation::empty(budget, self.cfg.strategy));
        }

        let tol = self.cfg.tolerance.max(0.0);
        let table = match self.cfg.strategy {
            Strategy::Exhaustive => None,
            Strategy::Auto | Strategy::DynamicProgramming => {
                dp::solve(options, budget.amount(), tol, self.cfg.dp_cell_limit)
            }
        };

        let (counts, used) = match table {
            Some(counts) => (counts, Strategy::DynamicProgramming),
            None => {
                if self.cfg.strategy == Strategy::DynamicProgramming {
                    debug!("fractional costs or table too large; using exhaustive search");
                }
                let out = exhaustive::search(options, budget.amount(), tol);
                trace!(nodes = out.nodes, "branch-and-bound finished");
                (out.counts, Strategy::Exhaustive)
            }
        };

        let alloc = Allocation::from_counts(options, &counts, budget, used);
        debug!(
            options = options.len(),
            budget = budget.amount(),
            strategy = %used,
            total_cost = alloc.total_cost(),
            total_yield = alloc.total_yield(),
            "allocation solved"
        );
        Ok(alloc)
    }
}

/// [`Solver::solve`] with the default config.
pub fn solve(options: &[ResourceOption], budget: f64) -> Result<Allocation, InvalidInput> {
    Solver::default().solve(options, budget)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn opts(pairs: &[(f64, f64)]) -> Vec<ResourceOption> {
        pairs
            .iter()
            .enumerate()
            .map(|(i, &(c, y))| ResourceOption::new(format!("o{i}"), c, y))
            .collect()
    }

    #[test]
    fn dp_is_chosen_for_whole_costs() {
        let a = solve(&opts(&[(3.0, 5.0), (5.0, 8.0)]), 8.0).unwrap();
        assert_eq!(a.strategy(), Strategy::DynamicProgramming);
        assert_eq!(a.counts(2), vec![1, 1]);
    }

    #[test]
    fn fractional_costs_fall_back_to_search() {
        let a = solve(&opts(&[(1.5, 3.0), (2.5, 4.0)]), 4.0).unwrap();
        assert_eq!(a.strategy(), Strategy::Exhaustive);
        assert_eq!(a.total_yield(), 7.0);
    }

    #[test]
    fn cell_limit_forces_search() {
        let solver = Solver::new(SolverConfig { dp_cell_limit: 10, ..SolverConfig::default() });
        let a = solver.solve(&opts(&[(3.0, 5.0), (5.0, 8.0)]), 8.0).unwrap();
        assert_eq!(a.strategy(), Strategy::Exhaustive);
        assert_eq!(a.total_yield(), 13.0);
    }

    #[test]
    fn free_options_are_always_taken() {
        let o = vec![
            ResourceOption::new("free", 0.0, 2.0).repeatable(3),
            ResourceOption::new("paid", 4.0, 1.0),
        ];
        for strategy in [Strategy::Exhaustive, Strategy::DynamicProgramming] {
            let a = Solver::with_strategy(strategy).solve(&o, 1.0).unwrap();
            assert_eq!(a.counts(2), vec![3, 0], "{strategy}");
            assert_eq!(a.total_yield(), 6.0);
        }
    }

    #[test]
    fn disabled_option_is_never_picked() {
        let o = vec![ResourceOption::new("off", 1.0, 100.0).repeatable(0)];
        let a = solve(&o, 10.0).unwrap();
        assert!(a.is_empty());
    }
}
