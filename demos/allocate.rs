// demos/allocate.rs
// Run with:
//   cargo run --example allocate

use spice_optimizer::systems::allocation::{ResourceOption, Solver, Strategy, solve};

fn main() {
    // Upgrade shop for one claim cycle (pick your own numbers)
    let options = vec![
        ResourceOption::new("Sharper Shovel", 3.0, 5.0),
        ResourceOption::new("Spice Pouch", 5.0, 8.0),
        ResourceOption::new("Forage Charm", 4.0, 6.0).repeatable(3),
        ResourceOption::new("Golden Sieve", 9.0, 15.0),
    ];

    for budget in [0.0, 8.0, 15.0, 40.0] {
        let alloc = solve(&options, budget).expect("valid input");
        println!("== budget {budget} ==");
        for p in alloc.picks() {
            println!("  {}x {:<16} cost {:>5}  yield {:>5}", p.count, p.label, p.cost, p.yields);
        }
        println!(
            "  total cost {} / yield {} via {}",
            alloc.total_cost(),
            alloc.total_yield(),
            alloc.strategy()
        );
    }

    // Same query, forced through the branch-and-bound search.
    let alloc = Solver::with_strategy(Strategy::Exhaustive)
        .solve(&options, 15.0)
        .expect("valid input");
    println!("exhaustive @15 -> yield {}", alloc.total_yield());
}
