// src/main.rs — spice entry point

use std::path::{Path, PathBuf};

use clap::Parser;

use spice_optimizer::cli::{Cli, Commands, compare, solve};
use spice_optimizer::config::Config;
use spice_optimizer::content::Catalog;
use spice_optimizer::logger;

fn main() {
    // Initialize logging (respects RUST_LOG)
    logger::init_logging("warn");

    if let Err(e) = run() {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = match cli.config.as_deref() {
        Some(path) => Config::load_from(Path::new(path))?,
        None => Config::load()?,
    };
    if let Some(dir) = cli.data_dir {
        config.data.dir = PathBuf::from(dir);
    }

    match cli.command {
        Commands::Solve { options, budget, strategy, json } => {
            solve::run_solve(&config, Path::new(&options), budget, strategy.map(Into::into), json)
        }
        Commands::Compare { territory, speeds } => {
            let catalog = Catalog::load_dir(&config.data.dir)?;
            let mut race = config.race;
            if let Some(hours) = speeds.hours {
                race.max_hours = hours;
            }
            compare::run_compare(&catalog, &territory, speeds.base_speed, speeds.alchemic_speed, race)
        }
        Commands::CompareAll { speeds } => {
            let catalog = Catalog::load_dir(&config.data.dir)?;
            let mut race = config.race;
            if let Some(hours) = speeds.hours {
                race.max_hours = hours;
            }
            compare::run_compare_all(&catalog, speeds.base_speed, speeds.alchemic_speed, race)
        }
        Commands::Territories => {
            let catalog = Catalog::load_dir(&config.data.dir)?;
            compare::run_territories(&catalog);
            Ok(())
        }
    }
}
