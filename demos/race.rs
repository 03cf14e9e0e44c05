// demos/race.rs
// Run with:
//   cargo run --example race

use spice_optimizer::content::{Genetic, Pet, Team, Territory};
use spice_optimizer::mechanics::{format_number, format_time};
use spice_optimizer::systems::forage_race::{ForageRace, RaceConfig};

fn gene(id: u32, name: &str) -> Genetic {
    Genetic { id, name: name.to_string() }
}

fn main() {
    let territory = Territory { name: "Stinky Sewers".into(), forage: 75, fight: 2500 };

    let meta = Team::with_speed(
        "Non-Alchemic",
        ["Borger", "Miasma", "Forager", "Converter"]
            .iter()
            .enumerate()
            .map(|(i, n)| Pet::new(gene(i as u32, n)))
            .collect(),
        40.0,
    )
    .expect("4 pets");
    let alch = Team::with_speed(
        "Alchemic",
        vec![
            Pet::new(gene(17, "Alchemic")),
            Pet::new(gene(17, "Alchemic")),
            Pet::new(gene(17, "Alchemic")),
            Pet::new(gene(27, "Converter")),
        ],
        25.0,
    )
    .expect("4 pets");

    let cfg = RaceConfig { max_hours: 24.0, stop_at_breakeven: false };
    let report = ForageRace::new(&territory, &meta, &alch, cfg).run();

    println!("== {} ==", territory.spice_name());
    for s in report.samples.iter().step_by(5) {
        println!(
            "{:>8}  {:>8}  {:>8}",
            format_time(s.hours),
            format_number(s.spice_a),
            format_number(s.spice_b)
        );
    }
    match report.breakeven {
        Some(h) => println!("{} passes {} after {}", report.label_b, report.label_a, format_time(h)),
        None => println!("no breakeven within {}", format_time(cfg.max_hours)),
    }
}
