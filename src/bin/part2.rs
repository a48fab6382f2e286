use anyhow::{Context, Result};
use clap::Parser;
use seating::{CLIArgs, CycleEngine, Rule, Simulator};

fn main() -> Result<()> {
    seating::init_tracing();
    let args = CLIArgs::parse();
    let grid = seating::read_grid(&args.input_path).with_context(|| {
        format!(
            "Failed to read seats layout from given input file({}).",
            args.input_path.display()
        )
    })?;

    let rule = Rule::line_of_sight();
    let mut simulator =
        Simulator::new(&rule, args.max_cycles).with_engine(CycleEngine::new(args.traversal()));
    if args.show {
        simulator = simulator.with_observer(|cycle, grid| println!("Cycle {}:\n{}\n", cycle, grid));
    }
    let result = simulator
        .run(grid)
        .context("Failed to simulate seats layout with line-of-sight rule.")?;

    println!(
        "After {} cycle(s), given seats layout stabilizes, and there are {} seats occupied.",
        result.cycles_run, result.occupied_count
    );

    Ok(())
}
