//! marga - grid maze solver
//!
//! Loads an ASCII maze and solves it with the marga A* engine, either on a
//! blocking loop or as a cooperative task sharing a single-threaded executor
//! with a progress ticker.
//!
//! Usage:
//!   marga solve mazes/corridor.txt
//!   marga solve mazes/rooms.txt --mode cooperative --diagonal --timeout-ms 50
//!   RUST_LOG=marga=trace marga solve mazes/corridor.txt

mod config;
mod error;
mod maze;

use std::cell::Cell;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::rc::Rc;

use clap::{Parser, Subcommand, ValueEnum};
use futures::executor::LocalPool;
use futures::task::LocalSpawnExt;
use log::{error, info, warn};
use marga::{AStar, SearchResult, SearchStatus, TieBreak};

use config::CliConfig;
use error::{CliError, Result};
use maze::{GridCoord, Maze};

/// Grid maze solver built on the marga A* engine
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Solve a maze file
    Solve(SolveArgs),
}

#[derive(clap::Args, Debug)]
struct SolveArgs {
    /// Maze file (`#` wall, `.` floor, `S` start, `G` goal)
    maze: PathBuf,

    /// Configuration file path
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Wall-clock budget in milliseconds (overrides config)
    #[arg(short, long)]
    timeout_ms: Option<f64>,

    /// Execution driver
    #[arg(short, long, value_enum, default_value_t = Mode::Blocking)]
    mode: Mode,

    /// Allow diagonal moves (overrides config)
    #[arg(short, long)]
    diagonal: bool,

    /// Ordering among equal scores (overrides config)
    #[arg(long, value_enum)]
    tie_break: Option<TieBreakArg>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Mode {
    /// Run to completion on the main thread
    Blocking,
    /// One expansion per scheduler turn, interleaved with a ticker task
    Cooperative,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum TieBreakArg {
    /// Smaller heuristic first, then insertion order
    LowestH,
    /// Insertion order
    Fifo,
}

impl From<TieBreakArg> for TieBreak {
    fn from(arg: TieBreakArg) -> Self {
        match arg {
            TieBreakArg::LowestH => TieBreak::LowestHeuristic,
            TieBreakArg::Fifo => TieBreak::Fifo,
        }
    }
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let outcome = match args.command {
        Command::Solve(solve_args) => solve(&solve_args),
    };

    match outcome {
        Ok(SearchStatus::Success) => ExitCode::SUCCESS,
        Ok(_) => ExitCode::from(2),
        Err(e) => {
            error!("{}", e);
            ExitCode::from(1)
        }
    }
}

/// Merge config file and command-line overrides.
fn load_config(args: &SolveArgs) -> Result<CliConfig> {
    let mut config = match &args.config {
        Some(path) => {
            info!("Loading configuration from {:?}", path);
            CliConfig::load(path)?
        }
        None => CliConfig::default(),
    };

    if let Some(ms) = args.timeout_ms {
        config.search.timeout_ms = Some(ms);
    }
    if args.diagonal {
        config.maze.allow_diagonal = true;
    }
    if let Some(tie_break) = args.tie_break {
        config.search.tie_break = tie_break.into();
    }
    Ok(config)
}

fn load_maze(path: &Path, config: &CliConfig) -> Result<Maze> {
    let text = std::fs::read_to_string(path).map_err(|source| CliError::Io {
        path: path.display().to_string(),
        source,
    })?;
    Maze::parse(&text, &config.maze)
}

fn solve(args: &SolveArgs) -> Result<SearchStatus> {
    let config = load_config(args)?;
    let maze = load_maze(&args.maze, &config)?;
    let options = config.search.to_options()?;

    info!(
        "Maze {}x{}, start {} goal {}, {} moves, {:?} driver",
        maze.width(),
        maze.height(),
        maze.start(),
        maze.goal(),
        if config.maze.allow_diagonal { "8-way" } else { "4-way" },
        args.mode
    );

    let astar = AStar::new(&maze, maze.start()).with_options(options);
    let result = match args.mode {
        Mode::Blocking => astar.run(),
        Mode::Cooperative => run_with_ticker(&astar),
    };

    report(&maze, &result);
    Ok(result.status)
}

/// Run the search cooperatively next to a task that counts scheduler turns.
fn run_with_ticker(astar: &AStar<&Maze>) -> SearchResult<GridCoord> {
    let mut pool = LocalPool::new();
    let done = Rc::new(Cell::new(false));
    let ticks = Rc::new(Cell::new(0usize));

    let ticker = {
        let done = Rc::clone(&done);
        let ticks = Rc::clone(&ticks);
        async move {
            while !done.get() {
                ticks.set(ticks.get() + 1);
                tokio::task::yield_now().await;
            }
        }
    };
    if let Err(e) = pool.spawner().spawn_local(ticker) {
        warn!("Ticker task not started: {}", e);
    }

    let result = pool.run_until(async {
        let result = astar.run_cooperative().await;
        done.set(true);
        result
    });

    info!(
        "Ticker ran {} times alongside {} expansions",
        ticks.get(),
        result.nodes_expanded
    );
    result
}

fn report(maze: &Maze, result: &SearchResult<GridCoord>) {
    match result.status {
        SearchStatus::Success => info!("Path found"),
        SearchStatus::NoPath => warn!("No path to goal; showing closest approach"),
        SearchStatus::Timeout => warn!("Timed out; showing best effort so far"),
    }

    println!("status:         {}", result.status);
    println!("cost:           {:.3}", result.cost);
    println!("path length:    {}", result.path.len());
    println!("nodes expanded: {}", result.nodes_expanded);
    println!("elapsed:        {:.3} ms", result.elapsed.as_secs_f64() * 1000.0);
    println!();
    println!("{}", maze.render(&result.path));
}
