// tests/forage_race.rs
#![cfg(feature = "system-forage_race")]

use pretty_assertions::assert_eq;
use spice_optimizer::content::{Genetic, Pet, Team, Territory};
use spice_optimizer::systems::forage_race::{ForageRace, RaceConfig, RaceSample, race_all};

fn pets(names: &[&str]) -> Vec<Pet> {
    names
        .iter()
        .enumerate()
        .map(|(i, n)| Pet::new(Genetic { id: i as u32, name: n.to_string() }))
        .collect()
}

fn team(name: &str, genes: &[&str], speed: f64) -> Team {
    Team::with_speed(name, pets(genes), speed).unwrap()
}

fn territory(forage: u32) -> Territory {
    Territory { name: "Grasslands".into(), forage, fight: 5 }
}

const UNTIL_BREAKEVEN: RaceConfig = RaceConfig { max_hours: 48.0, stop_at_breakeven: true };
const FULL: RaceConfig = RaceConfig { max_hours: 12.0, stop_at_breakeven: false };

/* ──────────────────────────────────────────────────────────────────────────
1) Hand-computed race
────────────────────────────────────────────────────────────────────────── */

#[test]
fn alchemics_overtake_on_their_first_fill() {
    // A: 10/h, 1 spice per fill. B: 5/h, three Alchemics → 2.5 spice per fill.
    let a = team("Meta", &["Borger", "Miasma", "Forager", "Converter"], 10.0);
    let b = team("Alch", &["Alchemic", "Alchemic", "Alchemic", "Converter"], 5.0);

    let samples: Vec<RaceSample> = ForageRace::new(&territory(10), &a, &b, UNTIL_BREAKEVEN).collect();

    let s = |hours, spice_a, spice_b, breakeven| RaceSample { hours, spice_a, spice_b, breakeven };
    assert_eq!(
        samples,
        vec![
            s(0.0, 0.0, 0.0, None),
            s(1.0, 1.0, 0.0, None),
            s(2.0, 1.0, 2.5, Some(2.0)),
        ]
    );
}

#[test]
fn run_collects_report() {
    let a = team("Non-Alchemic", &["Borger"], 10.0);
    let b = team("Alchemic", &["Alchemic", "Alchemic", "Alchemic"], 5.0);
    let report = ForageRace::new(&territory(10), &a, &b, UNTIL_BREAKEVEN).run();

    assert_eq!(report.territory, "Grasslands");
    assert_eq!(report.label_a, "Non-Alchemic");
    assert_eq!(report.label_b, "Alchemic");
    assert_eq!(report.breakeven, Some(2.0));
    assert_eq!(report.samples.len(), 3);
    assert_eq!(report.last().map(|s| s.spice_b), Some(2.5));
}

#[test]
fn monolithics_win_through_slower_growth() {
    // Same speed; both fill at t=1. Monolithic growth is 1 + 0.02/1.8 instead of 1.02,
    // so B's second fill lands first.
    let a = team("Plain", &["Borger", "Borger", "Borger", "Borger"], 10.0);
    let b = team("Mono", &["Monolithic", "Monolithic", "Monolithic", "Monolithic"], 10.0);

    let report = ForageRace::new(&territory(10), &a, &b, UNTIL_BREAKEVEN).run();
    let expected = 1.0 + 11.0 * (1.0 + 0.02 / 1.8) / 10.0;
    let got = report.breakeven.expect("breakeven");
    assert!((got - expected).abs() < 1e-9, "breakeven {got} != {expected}");
}

/* ──────────────────────────────────────────────────────────────────────────
2) Horizon and degenerate teams
────────────────────────────────────────────────────────────────────────── */

#[test]
fn full_race_stays_within_horizon() {
    let a = team("A", &["Borger"], 10.0);
    let b = team("B", &["Alchemic"], 7.0);
    let report = ForageRace::new(&territory(10), &a, &b, FULL).run();

    assert!(report.samples.len() > 3);
    for w in report.samples.windows(2) {
        assert!(w[1].hours > w[0].hours, "time went backwards: {w:?}");
        assert!(w[1].spice_a >= w[0].spice_a && w[1].spice_b >= w[0].spice_b);
    }
    assert!(report.last().unwrap().hours <= FULL.max_hours);

    // once found, breakeven sticks
    let first = report.samples.iter().position(|s| s.breakeven.is_some()).unwrap();
    assert!(report.samples[first..].iter().all(|s| s.breakeven == report.breakeven));
}

#[test]
fn idle_teams_never_start() {
    let a = team("A", &["Borger"], 0.0);
    let b = team("B", &["Alchemic"], 0.0);
    let report = ForageRace::new(&territory(10), &a, &b, UNTIL_BREAKEVEN).run();
    assert_eq!(report.samples.len(), 1);
    assert_eq!(report.breakeven, None);
}

#[test]
fn idle_leader_is_passed_on_first_fill() {
    let a = team("A", &["Borger"], 0.0);
    let b = team("B", &["Forager"], 5.0);
    let report = ForageRace::new(&territory(10), &a, &b, UNTIL_BREAKEVEN).run();
    assert_eq!(report.breakeven, Some(2.0));
}

#[test]
fn faster_plain_team_is_never_caught() {
    let a = team("A", &["Borger"], 20.0);
    let b = team("B", &["Forager"], 10.0);
    let report = ForageRace::new(&territory(10), &a, &b, FULL).run();
    assert_eq!(report.breakeven, None);
}

#[test]
fn race_all_keeps_territory_order() {
    let lands = vec![territory(10), Territory { name: "Jungle".into(), forage: 40, fight: 30 }];
    let a = team("A", &["Borger"], 10.0);
    let b = team("B", &["Alchemic", "Alchemic", "Alchemic"], 5.0);

    let reports = race_all(&lands, &a, &b, UNTIL_BREAKEVEN);
    let names: Vec<&str> = reports.iter().map(|r| r.territory.as_str()).collect();
    assert_eq!(names, vec!["Grasslands", "Jungle"]);
    assert_eq!(reports[0].breakeven, Some(2.0));
    assert_eq!(reports[1].breakeven, Some(8.0));
}
