// src/cli/solve.rs — `spice solve`

use std::fmt::Write as _;
use std::path::Path;

use serde::Deserialize;

use crate::config::Config;
use crate::mechanics::format_number;
use crate::systems::allocation::{Allocation, ResourceOption, Solver, Strategy};

/// Input file for `spice solve`.
#[derive(Debug, Deserialize)]
pub struct OptionsFile {
    #[serde(default)]
    pub budget: Option<f64>,
    pub options: Vec<ResourceOption>,
}

impl OptionsFile {
    /// TOML when the extension says so, JSON otherwise.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Failed to read options {}: {}", path.display(), e))?;
        let is_toml = path.extension().is_some_and(|ext| ext.eq_ignore_ascii_case("toml"));
        Self::parse(&content, is_toml)
            .map_err(|e| anyhow::anyhow!("Failed to parse options {}: {}", path.display(), e))
    }

    pub fn parse(content: &str, is_toml: bool) -> anyhow::Result<Self> {
        Ok(if is_toml {
            toml::from_str(content)?
        } else {
            serde_json::from_str(content)?
        })
    }
}

pub fn run_solve(
    config: &Config,
    path: &Path,
    budget: Option<f64>,
    strategy: Option<Strategy>,
    json: bool,
) -> anyhow::Result<()> {
    let file = OptionsFile::load(path)?;
    let budget = budget.or(file.budget).ok_or_else(|| {
        anyhow::anyhow!("no budget: pass --budget or set `budget` in {}", path.display())
    })?;

    let mut solver_cfg = config.solver;
    if let Some(strategy) = strategy {
        solver_cfg.strategy = strategy;
    }
    let alloc = Solver::new(solver_cfg).solve(&file.options, budget)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&alloc)?);
    } else {
        print!("{}", render(&alloc));
    }
    Ok(())
}

/// Human-readable table of the picks and totals.
pub fn render(alloc: &Allocation) -> String {
    let mut out = String::new();
    let budget = alloc.budget().amount();
    if alloc.is_empty() {
        let _ = writeln!(out, "Nothing fits in a budget of {}.", format_number(budget));
        return out;
    }

    let width = alloc.picks().iter().map(|p| p.label.chars().count()).max().unwrap_or(0);
    for p in alloc.picks() {
        let _ = writeln!(
            out,
            "{:>4}x {:<width$}  cost {:>8}  yield {:>8}",
            p.count,
            p.label,
            format_number(p.cost),
            format_number(p.yields),
        );
    }
    let _ = writeln!(
        out,
        "Total: cost {} of {} ({} left), yield {} [{}]",
        format_number(alloc.total_cost()),
        format_number(budget),
        format_number(alloc.remaining()),
        format_number(alloc.total_yield()),
        alloc.strategy(),
    );
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::systems::allocation::solve;

    #[test]
    fn parses_json_and_toml() {
        let json = r#"{ "budget": 8, "options": [
            { "label": "Sharper Shovel", "cost": 3, "yield": 5 },
            { "label": "Spice Pouch", "cost": 5, "yield": 8, "max_count": 2 }
        ] }"#;
        let f = OptionsFile::parse(json, false).unwrap();
        assert_eq!(f.budget, Some(8.0));
        assert_eq!(f.options[0].max_count(), 1);
        assert_eq!(f.options[1].max_count(), 2);

        let toml = r#"
            [[options]]
            label = "Sharper Shovel"
            cost = 3.0
            yield = 5.0
        "#;
        let f = OptionsFile::parse(toml, true).unwrap();
        assert_eq!(f.budget, None);
        assert_eq!(f.options[0].yields(), 5.0);
    }

    #[test]
    fn renders_picks_and_totals() {
        let opts = vec![ResourceOption::new("A", 3.0, 5.0), ResourceOption::new("B", 5.0, 8.0)];
        let text = render(&solve(&opts, 8.0).unwrap());
        assert!(text.contains("1x A"));
        assert!(text.contains("1x B"));
        assert!(text.contains("Total: cost 8 of 8 (0 left), yield 13"));

        let empty = render(&solve(&opts, 0.0).unwrap());
        assert_eq!(empty, "Nothing fits in a budget of 0.\n");
    }

    #[test]
    fn columns_line_up_for_accented_labels() {
        let opts = vec![
            ResourceOption::new("Épée de Mélange", 3.0, 5.0),
            ResourceOption::new("Sack", 5.0, 8.0),
            ResourceOption::new("砂の袋", 1.0, 1.0),
        ];
        let text = render(&solve(&opts, 9.0).unwrap());
        let columns: Vec<usize> = text
            .lines()
            .filter(|l| !l.starts_with("Total"))
            .map(|l| l.split("  cost").next().unwrap_or(l).chars().count())
            .collect();
        assert_eq!(columns.len(), 3);
        assert!(columns.iter().all(|&c| c == columns[0]), "misaligned:\n{text}");
    }
}
