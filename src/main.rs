//! CLI entry point for generating labyrinths and checking escape paths

use clap::Parser;
use linked_labyrinth::io::cli::{Cli, LabyrinthRunner, init_logging};

// The report is the program's output
#[allow(clippy::print_stdout)]
fn main() -> linked_labyrinth::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    let runner = LabyrinthRunner::new(cli);
    print!("{}", runner.run()?);
    Ok(())
}
