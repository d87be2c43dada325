#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use anyhow::Context;
#[cfg(feature = "std")]
use battleship_abilities::{init_logging, print_board, run, Scenario};
#[cfg(feature = "std")]
use clap::Parser;
#[cfg(feature = "std")]
use std::path::PathBuf;

/// Place ships, stamp ability stencils and print the resulting board.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    /// JSON scenario to run instead of the built-in one.
    #[arg(long)]
    scenario: Option<PathBuf>,
}

#[cfg(feature = "std")]
fn load_scenario(path: &PathBuf) -> anyhow::Result<Scenario> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading scenario {}", path.display()))?;
    let scenario = serde_json::from_str(&text)
        .with_context(|| format!("parsing scenario {}", path.display()))?;
    Ok(scenario)
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    let scenario = match &cli.scenario {
        Some(path) => load_scenario(path)?,
        None => Scenario::reference(),
    };
    log::info!(
        "running {}x{} board with {} ships and {} abilities",
        scenario.config.rows,
        scenario.config.cols,
        scenario.ships.len(),
        scenario.abilities.len()
    );

    let board = run(&scenario)?;
    print_board(&board);
    Ok(())
}
