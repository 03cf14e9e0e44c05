//! Foraging mechanics: fill requirements and spice per fill.

/// Each fill raises the next requirement by this compounding rate (before
/// Monolithic dampening).
pub const FILL_GROWTH: f64 = 0.02;

/// Monolithic pets dampen fill growth in groups of this size.
pub const MONOLITHIC_DIVISOR: f64 = 5.0;

/// Extra spice per fill for each Alchemic pet on the team.
pub const ALCHEMIC_BONUS: f64 = 0.5;

/// Forage needed for the next fill: (base + fills) * (1 + 0.02 / (mono/5 + 1))^fills.
#[inline]
pub fn forage_requirement(base: f64, fills: u32, monolithic: u32) -> f64 {
    let growth = 1.0 + FILL_GROWTH / (f64::from(monolithic) / MONOLITHIC_DIVISOR + 1.0);
    (base + f64::from(fills)) * growth.powi(fills as i32)
}

/// Spice gained per completed fill.
#[inline]
pub fn spice_per_fill(alchemic: u32) -> f64 {
    1.0 + ALCHEMIC_BONUS * f64::from(alchemic)
}

/// Hours until the next fill; infinite for a team that does not move.
#[inline]
pub fn time_to_fill(requirement: f64, progress: f64, speed: f64) -> f64 {
    if speed <= 0.0 {
        f64::INFINITY
    } else {
        (requirement - progress) / speed
    }
}
