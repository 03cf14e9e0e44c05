//! Forage race: two teams fill the same territory side by side.
//!
//! Time jumps straight to the next fill of whichever team is closer to one.
//! Each fill costs more forage than the last (see
//! [`mechanics::forage_requirement`](crate::mechanics::forage_requirement)),
//! Alchemic pets add spice per fill and Monolithic pets slow the cost growth.
//! The interesting output is the *breakeven*: the first moment team B's stack
//! is strictly larger than team A's. A player who claims more often than that
//! should run team A.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::content::{ALCHEMIC, MAX_SIMULATION_HOURS, MONOLITHIC, Team, Territory};
use crate::mechanics::{forage_requirement, spice_per_fill, time_to_fill};

/// Relative slack when checking whether progress reached a requirement;
/// `p + s * ((req - p) / s)` can land one ulp short.
const FILL_EPSILON: f64 = 1e-12;

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RaceConfig {
    pub max_hours: f64,
    /// End the race at the step where breakeven is found.
    pub stop_at_breakeven: bool,
}

impl Default for RaceConfig {
    fn default() -> Self {
        Self { max_hours: f64::from(MAX_SIMULATION_HOURS), stop_at_breakeven: true }
    }
}

/// Cumulative spice of both teams at one instant.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct RaceSample {
    pub hours: f64,
    pub spice_a: f64,
    pub spice_b: f64,
    /// Set from the breakeven step onward.
    pub breakeven: Option<f64>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RaceReport {
    pub territory: String,
    pub label_a: String,
    pub label_b: String,
    pub max_hours: f64,
    pub samples: Vec<RaceSample>,
    pub breakeven: Option<f64>,
}

impl RaceReport {
    pub fn last(&self) -> Option<&RaceSample> {
        self.samples.last()
    }
}

#[derive(Clone, Copy, Debug)]
struct Forager {
    spice: f64,
    fills: u32,
    progress: f64,
    speed: f64,
    alchemic: u32,
    monolithic: u32,
}

impl Forager {
    fn new(team: &Team) -> Self {
        Self {
            spice: 0.0,
            fills: 0,
            progress: 0.0,
            speed: team.speed(),
            alchemic: team.count_genetic(ALCHEMIC),
            monolithic: team.count_genetic(MONOLITHIC),
        }
    }

    fn requirement(&self, base: f64) -> f64 {
        forage_requirement(base, self.fills, self.monolithic)
    }

    fn next_fill(&self, base: f64) -> f64 {
        time_to_fill(self.requirement(base), self.progress, self.speed)
    }

    fn advance(&mut self, base: f64, dt: f64) {
        if self.speed <= 0.0 {
            return;
        }
        self.progress += self.speed * dt;
        let req = self.requirement(base);
        if self.progress >= req * (1.0 - FILL_EPSILON) {
            self.fills += 1;
            self.spice += spice_per_fill(self.alchemic);
            // overflow past the requirement is not carried over
            self.progress = 0.0;
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Phase {
    Start,
    Running,
    Done,
}

/// Step-by-step race. Yields the t=0 sample first, then one sample per fill event.
#[derive(Clone, Debug)]
pub struct ForageRace {
    territory: String,
    label_a: String,
    label_b: String,
    base: f64,
    a: Forager,
    b: Forager,
    hours: f64,
    breakeven: Option<f64>,
    cfg: RaceConfig,
    phase: Phase,
}

impl ForageRace {
    pub fn new(territory: &Territory, team_a: &Team, team_b: &Team, cfg: RaceConfig) -> Self {
        Self {
            territory: territory.name.clone(),
            label_a: team_a.name().to_string(),
            label_b: team_b.name().to_string(),
            base: f64::from(territory.forage),
            a: Forager::new(team_a),
            b: Forager::new(team_b),
            hours: 0.0,
            breakeven: None,
            cfg,
            phase: Phase::Start,
        }
    }

    pub fn breakeven(&self) -> Option<f64> {
        self.breakeven
    }

    fn sample(&self) -> RaceSample {
        RaceSample {
            hours: self.hours,
            spice_a: self.a.spice,
            spice_b: self.b.spice,
            breakeven: self.breakeven,
        }
    }

    /// Drive the race to the end and collect every sample.
    pub fn run(mut self) -> RaceReport {
        let samples: Vec<RaceSample> = self.by_ref().collect();
        RaceReport {
            territory: self.territory,
            label_a: self.label_a,
            label_b: self.label_b,
            max_hours: self.cfg.max_hours,
            samples,
            breakeven: self.breakeven,
        }
    }
}

impl Iterator for ForageRace {
    type Item = RaceSample;

    fn next(&mut self) -> Option<RaceSample> {
        match self.phase {
            Phase::Done => return None,
            Phase::Start => {
                self.phase = Phase::Running;
                return Some(self.sample());
            }
            Phase::Running => {}
        }

        let dt = self.a.next_fill(self.base).min(self.b.next_fill(self.base));
        let t = self.hours + dt;
        // also catches two idle teams (t = inf)
        if !(t <= self.cfg.max_hours) {
            self.phase = Phase::Done;
            return None;
        }

        self.hours = t;
        self.a.advance(self.base, dt);
        self.b.advance(self.base, dt);

        if self.breakeven.is_none() && self.b.spice > self.a.spice {
            self.breakeven = Some(t);
            debug!(territory = %self.territory, hours = t, "breakeven reached");
            if self.cfg.stop_at_breakeven {
                self.phase = Phase::Done;
            }
        }
        Some(self.sample())
    }
}

/// Race the same two teams on every territory, in catalog order.
pub fn race_all(territories: &[Territory], team_a: &Team, team_b: &Team, cfg: RaceConfig) -> Vec<RaceReport> {
    territories
        .iter()
        .map(|t| ForageRace::new(t, team_a, team_b, cfg).run())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn forager(speed: f64) -> Forager {
        Forager { spice: 0.0, fills: 0, progress: 0.0, speed, alchemic: 1, monolithic: 0 }
    }

    #[test]
    fn rounding_shortfall_still_completes_the_fill() {
        let mut f = forager(1.0);
        // ten units needed; a shortfall of one part in 1e13 is float noise
        f.advance(10.0, 10.0 * (1.0 - 1e-13));
        assert_eq!((f.fills, f.progress, f.spice), (1, 0.0, 1.5));
    }

    #[test]
    fn real_shortfall_waits_for_the_next_step() {
        let mut f = forager(1.0);
        f.advance(10.0, 10.0 * (1.0 - 1e-9));
        assert_eq!(f.fills, 0);
        assert!(f.progress < 10.0);

        f.advance(10.0, f.next_fill(10.0));
        assert_eq!(f.fills, 1);
        assert_eq!(f.progress, 0.0);
    }
}
