use serde::{Deserialize, Serialize};

use crate::error::InvalidInput;

/// One selectable foraging upgrade. Immutable once built.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ResourceOption {
    label: String,
    cost: f64,
    #[serde(rename = "yield")]
    yields: f64,
    #[serde(default = "one")]
    max_count: u32,
}

fn one() -> u32 {
    1
}

impl ResourceOption {
    /// A pick-at-most-once option.
    pub fn new(label: impl Into<String>, cost: f64, yields: f64) -> Self {
        Self { label: label.into(), cost, yields, max_count: 1 }
    }

    /// Same option, selectable up to `max_count` times (0 disables it).
    #[must_use]
    pub fn repeatable(mut self, max_count: u32) -> Self {
        self.max_count = max_count;
        self
    }

    pub fn label(&self) -> &str { &self.label }
    pub fn cost(&self) -> f64 { self.cost }
    pub fn yields(&self) -> f64 { self.yields }
    pub fn max_count(&self) -> u32 { self.max_count }

    pub(crate) fn validate(&self, index: usize) -> Result<(), InvalidInput> {
        if !self.cost.is_finite() {
            return Err(InvalidInput::not_finite(format!("cost of option #{index}"), self.cost));
        }
        if !self.yields.is_finite() {
            return Err(InvalidInput::not_finite(format!("yield of option #{index}"), self.yields));
        }
        if self.cost < 0.0 {
            return Err(InvalidInput::NegativeCost {
                index,
                label: self.label.clone(),
                cost: self.cost,
            });
        }
        if self.yields < 0.0 {
            return Err(InvalidInput::NegativeYield {
                index,
                label: self.label.clone(),
                value: self.yields,
            });
        }
        Ok(())
    }
}

/// Spending limit for one query. Always finite and `>= 0`.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct Budget(f64);

impl Budget {
    pub fn new(amount: f64) -> Result<Self, InvalidInput> {
        if !amount.is_finite() {
            return Err(InvalidInput::not_finite("budget", amount));
        }
        if amount < 0.0 {
            return Err(InvalidInput::NegativeBudget(amount));
        }
        Ok(Self(amount))
    }

    pub fn amount(self) -> f64 { self.0 }

    pub fn is_zero(self) -> bool { self.0 == 0.0 }
}

impl TryFrom<f64> for Budget {
    type Error = InvalidInput;
    fn try_from(amount: f64) -> Result<Self, Self::Error> {
        Self::new(amount)
    }
}

/// How the optimum was (or should be) searched for.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    /// Dynamic programming when every cost is a whole number and the table fits,
    /// branch-and-bound otherwise.
    #[default]
    Auto,
    /// Depth-first branch-and-bound; exact for fractional costs.
    Exhaustive,
    /// Table over integer budget steps; falls back to `Exhaustive` when not applicable.
    DynamicProgramming,
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Auto => "auto",
            Self::Exhaustive => "exhaustive",
            Self::DynamicProgramming => "dynamic_programming",
        })
    }
}

/// One selected option and how many times it was taken.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Pick {
    /// Position in the caller's option list.
    pub index: usize,
    pub label: String,
    pub count: u32,
    /// `count * cost`
    pub cost: f64,
    /// `count * yield`
    pub yields: f64,
}

/// Result of one solve: selected options and totals.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Allocation {
    picks: Vec<Pick>,
    total_cost: f64,
    total_yield: f64,
    budget: Budget,
    strategy: Strategy,
}

impl Allocation {
    pub(crate) fn empty(budget: Budget, strategy: Strategy) -> Self {
        Self { picks: Vec::new(), total_cost: 0.0, total_yield: 0.0, budget, strategy }
    }

    /// Builds the allocation from per-option multiplicities. Totals are summed in
    /// option order, the same order the searches use for their feasibility checks.
    pub(crate) fn from_counts(
        options: &[ResourceOption],
        counts: &[u32],
        budget: Budget,
        strategy: Strategy,
    ) -> Self {
        let mut out = Self::empty(budget, strategy);
        for (index, (opt, &count)) in options.iter().zip(counts).enumerate() {
            if count == 0 {
                continue;
            }
            let cost = f64::from(count) * opt.cost;
            let yields = f64::from(count) * opt.yields;
            out.total_cost += cost;
            out.total_yield += yields;
            out.picks.push(Pick { index, label: opt.label.clone(), count, cost, yields });
        }
        out
    }

    pub fn picks(&self) -> &[Pick] { &self.picks }
    pub fn total_cost(&self) -> f64 { self.total_cost }
    pub fn total_yield(&self) -> f64 { self.total_yield }
    pub fn budget(&self) -> Budget { self.budget }
    pub fn strategy(&self) -> Strategy { self.strategy }

    pub fn is_empty(&self) -> bool {
        self.picks.is_empty()
    }

    /// Budget left unspent.
    pub fn remaining(&self) -> f64 {
        (self.budget.0 - self.total_cost).max(0.0)
    }

    /// Multiplicity of the option at `index` (0 when not selected).
    pub fn count_of(&self, index: usize) -> u32 {
        self.picks.iter().find(|p| p.index == index).map_or(0, |p| p.count)
    }

    /// Multiplicities for every option, in option order.
    pub fn counts(&self, option_count: usize) -> Vec<u32> {
        (0..option_count).map(|i| self.count_of(i)).collect()
    }
}
