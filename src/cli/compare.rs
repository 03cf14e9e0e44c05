// src/cli/compare.rs — `spice compare`, `spice compare-all`, `spice territories`

use std::fmt::Write as _;

use crate::content::{ALCHEMIC_TEAM, Catalog, META_TEAM, Team};
use crate::mechanics::{format_number, format_time};
use crate::systems::forage_race::{ForageRace, RaceConfig, RaceReport, race_all};

pub const LABEL_A: &str = "Non-Alchemic";
pub const LABEL_B: &str = "Alchemic";

/// The two default teams, renamed for display.
pub fn default_pair(catalog: &Catalog, base_speed: f64, alchemic_speed: f64) -> anyhow::Result<(Team, Team)> {
    for (name, v) in [("base speed", base_speed), ("alchemic speed", alchemic_speed)] {
        anyhow::ensure!(v.is_finite() && v >= 0.0, "{name} must be a finite number >= 0, got {v}");
    }
    let meta = catalog.default_team(META_TEAM, base_speed)?;
    let alch = catalog.default_team(ALCHEMIC_TEAM, alchemic_speed)?;
    Ok((
        Team::with_speed(LABEL_A, meta.pets().to_vec(), meta.speed())?,
        Team::with_speed(LABEL_B, alch.pets().to_vec(), alch.speed())?,
    ))
}

pub fn run_compare(
    catalog: &Catalog,
    territory: &str,
    base_speed: f64,
    alchemic_speed: f64,
    cfg: RaceConfig,
) -> anyhow::Result<()> {
    let territory = catalog
        .territory_by_name(territory)
        .ok_or_else(|| anyhow::anyhow!("unknown territory '{territory}'"))?;
    let (a, b) = default_pair(catalog, base_speed, alchemic_speed)?;

    println!("{} ({})", territory.name, territory.spice_name());
    println!("  {LABEL_A} speed: {}", format_number(a.speed()));
    println!("  {LABEL_B} speed: {}", format_number(b.speed()));

    let report = ForageRace::new(territory, &a, &b, cfg).run();
    print!("{}", render_timeline(&report));
    println!("{}", render_breakeven(&report));
    println!();
    println!("Claim more often than breakeven? Stick with {LABEL_A}.");
    println!("Claim less often? Use {LABEL_B} for long-term stacking.");
    println!("Tip: the Converter gives a 50% chance to keep your stack when claiming.");
    Ok(())
}

pub fn run_compare_all(
    catalog: &Catalog,
    base_speed: f64,
    alchemic_speed: f64,
    cfg: RaceConfig,
) -> anyhow::Result<()> {
    let (a, b) = default_pair(catalog, base_speed, alchemic_speed)?;
    for report in race_all(catalog.territories(), &a, &b, cfg) {
        println!("{:<24} {}", report.territory, render_breakeven(&report));
    }
    Ok(())
}

pub fn run_territories(catalog: &Catalog) {
    for t in catalog.territories() {
        println!("{:<24} forage {:>6}  fight {:>6}  -> {}", t.name, t.forage, t.fight, t.spice_name());
    }
}

/// One line per fill event: time and both stacks.
pub fn render_timeline(report: &RaceReport) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{:>10}  {:>12}  {:>12}", "time", report.label_a, report.label_b);
    for s in &report.samples {
        let _ = writeln!(
            out,
            "{:>10}  {:>12}  {:>12}",
            format_time(s.hours),
            format_number(s.spice_a),
            format_number(s.spice_b),
        );
    }
    out
}

pub fn render_breakeven(report: &RaceReport) -> String {
    match report.breakeven {
        Some(hours) => format!(
            "{} surpasses {} after {}.",
            report.label_b,
            report.label_a,
            format_time(hours)
        ),
        None => format!("No breakeven found within {}.", format_time(report.max_hours)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    fn shipped() -> Catalog {
        Catalog::load_dir(&Path::new(env!("CARGO_MANIFEST_DIR")).join("data")).unwrap()
    }

    #[test]
    fn default_pair_renames_teams() {
        let (a, b) = default_pair(&shipped(), 10.0, 8.0).unwrap();
        assert_eq!((a.name(), a.speed()), (LABEL_A, 10.0));
        assert_eq!((b.name(), b.speed()), (LABEL_B, 8.0));
    }

    #[test]
    fn default_pair_refuses_bad_speeds() {
        let catalog = shipped();
        assert!(default_pair(&catalog, -1.0, 5.0).is_err());
        assert!(default_pair(&catalog, 5.0, f64::NAN).is_err());
        assert!(default_pair(&catalog, f64::INFINITY, 5.0).is_err());
    }
}
