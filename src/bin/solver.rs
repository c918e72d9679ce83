use clap::{Parser, Subcommand};
use statespace::{
    config::SearchConfig,
    problems::{KiwisAndDogs, NQueensRepair, DEFAULT_SEED},
    search::{validate, HeuristicName, Problem, SearchEngineName, Verbosity},
};
use std::{path::PathBuf, process::ExitCode};
use tracing::{error, info, warn};

#[derive(Parser)]
#[command(version)]
/// Solve one of the bundled search problems.
struct Cli {
    #[command(subcommand)]
    command: Commands,
    #[arg(
        help = "A TOML search config. Options given on the command line take \
        precedence over the file.",
        long = "config",
        id = "CONFIG"
    )]
    config: Option<PathBuf>,
    #[arg(
        value_enum,
        help = "The search engine to use",
        short = 'e',
        long = "engine",
        id = "ENGINE"
    )]
    engine: Option<SearchEngineName>,
    #[arg(
        help = "The largest depth limit for iterative deepening",
        short = 'd',
        long = "max-depth",
        id = "MAX_DEPTH"
    )]
    max_depth: Option<usize>,
    #[arg(
        value_enum,
        help = "The heuristic to use with the A* engines",
        long = "heuristic",
        id = "HEURISTIC"
    )]
    heuristic: Option<HeuristicName>,
    #[arg(
        value_enum,
        help = "The verbosity level",
        short = 'v',
        long = "verbosity",
        id = "VERBOSITY"
    )]
    verbosity: Option<Verbosity>,
    #[arg(help = "Whether to use coloured output", short = 'c', long = "colour")]
    colour: bool,
    #[arg(help = "Print a JSON report instead of the path", long = "json")]
    json: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Move every kiwi to A and every dog to E on a small conditional graph.
    KiwisAndDogs,
    /// Repair a random n-queens board by moving queens within their column.
    NQueens {
        #[arg(help = "Number of queens", long = "n-queens", default_value_t = 8)]
        n_queens: usize,
        #[arg(help = "Seed for the start board", long = "seed", default_value_t = DEFAULT_SEED)]
        seed: u64,
    },
}

impl Cli {
    fn search_config(&self) -> Result<SearchConfig, String> {
        let mut config = match &self.config {
            Some(path) => SearchConfig::from_path(path).map_err(|e| e.to_string())?,
            None => SearchConfig::default(),
        };
        if let Some(engine) = self.engine {
            config.engine = engine;
        }
        if let Some(max_depth) = self.max_depth {
            config.max_depth = max_depth;
        }
        if let Some(heuristic) = self.heuristic {
            config.heuristic = heuristic;
        }
        if let Some(verbosity) = self.verbosity {
            config.verbosity = verbosity;
        }
        Ok(config)
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match cli.search_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    let level: tracing::Level = config.verbosity.into();
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_ansi(cli.colour)
        .with_line_number(true)
        .with_writer(std::io::stderr)
        .compact()
        .init();

    let result = match cli.command {
        Commands::KiwisAndDogs => solve(&KiwisAndDogs::new(), &config, cli.json),
        Commands::NQueens { n_queens, seed } => {
            solve(&NQueensRepair::new(n_queens, seed), &config, cli.json)
        }
    };

    match result {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(2),
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

/// Returns whether a valid solution was found.
fn solve<P: Problem>(problem: &P, config: &SearchConfig, json: bool) -> Result<bool, String> {
    for state in problem.get_start_states() {
        if !problem.is_valid_state(&state) {
            warn!(?state, "start state is not valid");
        }
    }

    let mut heuristic = config.heuristic.create(problem);
    let solution = config
        .create_engine::<P>()
        .run(problem, Some(heuristic.as_mut()))
        .map_err(|e| e.to_string())?;

    if json {
        println!("{}", solution.report().to_json().map_err(|e| e.to_string())?);
    }

    if !solution.is_solved() {
        info!(status = ?solution.status(), "no solution found");
        if !json {
            println!("No solution found: {:?}", solution.status());
        }
        return Ok(false);
    }

    info!("validating solution");
    match validate(&solution, problem) {
        Ok(()) => info!("solution is valid"),
        Err(e) => {
            error!("solution is invalid: {}", e);
            return Ok(false);
        }
    }
    info!(
        length = solution.len(),
        cost = solution.cost().map(|cost| cost.into_inner())
    );

    if !json {
        println!("Solution found:");
        println!("{}", solution.path_to_string());
        if let Some(cost) = solution.cost() {
            println!("Solution cost: {}", cost);
        }
    }
    Ok(true)
}
