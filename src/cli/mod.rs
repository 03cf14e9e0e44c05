// src/cli/mod.rs — CLI definition (clap derive)

pub mod compare;
pub mod solve;

use clap::{Parser, Subcommand, ValueEnum};

use crate::systems::allocation::Strategy;

#[derive(Parser)]
#[command(name = "spice", about = "Optimize your foraging. Maximize your spices.", version)]
pub struct Cli {
    /// Config file path (defaults to ./spice.toml when present)
    #[arg(long, global = true)]
    pub config: Option<String>,

    /// Directory with territories.json and genetics.json (overrides config)
    #[arg(long, global = true)]
    pub data_dir: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Best set of upgrades for a budget
    Solve {
        /// JSON or TOML file: { budget?, options: [{label, cost, yield, max_count?}] }
        #[arg(short, long)]
        options: String,
        /// Budget to spend (overrides the file's budget)
        #[arg(short, long)]
        budget: Option<f64>,
        /// Search strategy (overrides config)
        #[arg(short, long, value_enum)]
        strategy: Option<StrategyArg>,
        /// Print the allocation as JSON
        #[arg(long)]
        json: bool,
    },
    /// Non-Alchemic vs Alchemic team on one territory
    Compare {
        #[arg(short, long)]
        territory: String,
        #[command(flatten)]
        speeds: Speeds,
    },
    /// Non-Alchemic vs Alchemic team on every territory
    CompareAll {
        #[command(flatten)]
        speeds: Speeds,
    },
    /// List known territories
    Territories,
}

#[derive(clap::Args, Clone, Copy)]
pub struct Speeds {
    /// Average foraging speed without Alchemics
    #[arg(long, default_value = "0", value_parser = non_negative)]
    pub base_speed: f64,
    /// Average foraging speed with 3 Alchemics and 1 Converter
    #[arg(long, default_value = "0", value_parser = non_negative)]
    pub alchemic_speed: f64,
    /// Race horizon in hours (overrides config)
    #[arg(long, value_parser = non_negative)]
    pub hours: Option<f64>,
}

/// Finite and `>= 0`.
fn non_negative(s: &str) -> Result<f64, String> {
    let v: f64 = s.trim().parse().map_err(|_| format!("'{s}' is not a number"))?;
    if !v.is_finite() || v < 0.0 {
        return Err(format!("must be a finite number >= 0, got {s}"));
    }
    Ok(v)
}

#[derive(Clone, Copy, ValueEnum)]
pub enum StrategyArg {
    Auto,
    Exhaustive,
    Dp,
}

impl From<StrategyArg> for Strategy {
    fn from(s: StrategyArg) -> Self {
        match s {
            StrategyArg::Auto => Strategy::Auto,
            StrategyArg::Exhaustive => Strategy::Exhaustive,
            StrategyArg::Dp => Strategy::DynamicProgramming,
        }
    }
}
