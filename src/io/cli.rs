//! Command-line interface for generating labyrinths and checking escape paths

use clap::{Args, Parser, Subcommand};
use log::info;
use std::fmt::Write;
use std::path::PathBuf;

use crate::generation::placement::{grid_maze_for, twisty_maze_for};
use crate::io::configuration::{DEFAULT_COLS, DEFAULT_NAME, DEFAULT_ROWS, DEFAULT_TWISTY_SIZE};
use crate::io::error::Result;
use crate::io::image::export_maze_as_png;
use crate::io::text::{describe_links, render_grid};
use crate::maze::demo::demo_maze;
use crate::maze::path::{PathOutcome, walk};
use crate::maze::{Item, Maze};

#[derive(Parser)]
#[command(name = "linked-labyrinth")]
#[command(
    author,
    version,
    about = "Generate name-seeded labyrinths and check paths to freedom"
)]
/// Command-line arguments for the labyrinth tool
pub struct Cli {
    /// Log generation details
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Which labyrinth to work with
    #[command(subcommand)]
    pub command: Command,
}

/// Options shared by every labyrinth kind
#[derive(Args, Debug, Clone, Default)]
pub struct WalkArgs {
    /// Directions to follow from the start, e.g. `ESNWW`
    #[arg(short, long)]
    pub path: Option<String>,

    /// Print the maze layout
    #[arg(short, long)]
    pub show: bool,
}

/// Labyrinth kinds
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Spanning-tree grid labyrinth unique to a name
    Grid {
        /// Name the labyrinth is generated for
        #[arg(short, long, default_value = DEFAULT_NAME)]
        name: String,

        /// Number of rows
        #[arg(short, long, default_value_t = DEFAULT_ROWS)]
        rows: usize,

        /// Number of columns
        #[arg(short, long, default_value_t = DEFAULT_COLS)]
        cols: usize,

        /// Save a PNG drawing of the maze
        #[arg(long, value_name = "FILE")]
        png: Option<PathBuf>,

        /// Path and display options
        #[command(flatten)]
        walk: WalkArgs,
    },

    /// Free-form linked labyrinth unique to a name
    Twisty {
        /// Name the labyrinth is generated for
        #[arg(short, long, default_value = DEFAULT_NAME)]
        name: String,

        /// Number of cells
        #[arg(long, default_value_t = DEFAULT_TWISTY_SIZE)]
        size: usize,

        /// Path and display options
        #[command(flatten)]
        walk: WalkArgs,
    },

    /// Fixed demonstration labyrinth
    Demo {
        /// Save a PNG drawing of the maze
        #[arg(long, value_name = "FILE")]
        png: Option<PathBuf>,

        /// Path and display options
        #[command(flatten)]
        walk: WalkArgs,
    },
}

impl Command {
    /// Adjective used in user-facing messages
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Grid { .. } => "gridded",
            Self::Twisty { .. } => "twisty",
            Self::Demo { .. } => "demo",
        }
    }

    const fn walk_args(&self) -> &WalkArgs {
        match self {
            Self::Grid { walk, .. } | Self::Twisty { walk, .. } | Self::Demo { walk, .. } => walk,
        }
    }
}

/// Install the logger; `RUST_LOG` overrides the default level
pub fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    // A second initialisation (e.g. from tests) is harmless
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .try_init();
}

/// Builds the requested labyrinth and produces the report text
pub struct LabyrinthRunner {
    cli: Cli,
}

impl LabyrinthRunner {
    /// Create a runner for the parsed arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Build the maze described by the arguments
    ///
    /// # Errors
    ///
    /// Returns an error if the generation parameters are invalid
    pub fn build_maze(&self) -> Result<Maze> {
        match &self.cli.command {
            Command::Grid {
                name, rows, cols, ..
            } => grid_maze_for(name, *rows, *cols),
            Command::Twisty { name, size, .. } => twisty_maze_for(name, *size),
            Command::Demo { .. } => Ok(demo_maze()),
        }
    }

    /// Generate, optionally export and check a path, returning the report
    ///
    /// # Errors
    ///
    /// Returns an error if generation fails or the PNG cannot be written
    pub fn run(&self) -> Result<String> {
        let command = &self.cli.command;
        let maze = self.build_maze()?;
        let walk_args = command.walk_args();
        let mut report = String::new();

        let _ = writeln!(report, "{}", summarize(&maze));

        if walk_args.show {
            let drawing = render_grid(&maze).unwrap_or_else(|| describe_links(&maze));
            report.push_str(&drawing);
        }

        if let Command::Grid { png: Some(png), .. } | Command::Demo { png: Some(png), .. } =
            command
        {
            export_maze_as_png(&maze, png)?;
            info!("saved maze drawing to {}", png.display());
        }

        if let Some(path) = &walk_args.path {
            let outcome = walk(&maze, path);
            let _ = writeln!(report, "{}", verdict(&outcome, command.kind()));
        }

        Ok(report)
    }
}

fn locate(maze: &Maze, id: usize) -> String {
    maze.position_of(id).map_or_else(
        || format!("cell {id}"),
        |(row, col)| format!("({row}, {col})"),
    )
}

/// One-line description of where the start and items are
pub fn summarize(maze: &Maze) -> String {
    let mut line = format!(
        "{} cells, start at {}",
        maze.len(),
        locate(maze, maze.start())
    );
    for item in Item::ALL {
        if let Some(id) = maze.find_item(item) {
            let _ = write!(line, ", {item} at {}", locate(maze, id));
        }
    }
    line
}

/// User-facing message for the outcome of a walk
pub fn verdict(outcome: &PathOutcome, kind: &str) -> String {
    match outcome {
        PathOutcome::Escaped => {
            format!("Congratulations! You've found your way out of your {kind} labyrinth.")
        }
        PathOutcome::WallHit { step, direction } => format!(
            "Sorry, but you're still stuck in your {kind} labyrinth (step {} walks into a wall going {direction}).",
            step + 1
        ),
        PathOutcome::InvalidDirection { step, symbol } => format!(
            "Sorry, but you're still stuck in your {kind} labyrinth (step {} '{symbol}' is not one of N, S, E, W).",
            step + 1
        ),
        PathOutcome::MissingItems { missing } => {
            let names: Vec<String> = missing.iter().map(ToString::to_string).collect();
            format!(
                "Sorry, but you're still stuck in your {kind} labyrinth (still missing: {}).",
                names.join(", ")
            )
        }
    }
}
