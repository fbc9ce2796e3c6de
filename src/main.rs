//! Wordle Solver - CLI
//!
//! Entropy-maximising Wordle solver with batch and interactive modes.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::warn;
use wordle_solver::{
    commands::{
        SolveConfig, Target, analyze_word, build_opening, run_benchmark, run_interactive,
        solve_word,
    },
    config::SolverConfig,
    logging,
    output::{
        print_analysis_result, print_benchmark_result, print_opening_summary, print_solve_result,
    },
    solver::{OpeningTable, Solver, StrategyKind, StrategyType},
    wordlists::{WordList, loader::load_from_file},
};

#[derive(Parser)]
#[command(
    name = "wordle_solver",
    about = "Wordle solver using information-theoretic guess selection",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Word list: TSV of `word<TAB>1` (challenge) or `word<TAB>0` (guess only)
    #[arg(short = 'w', long, global = true, default_value = "words.tsv")]
    wordlist: PathBuf,

    /// TOML settings file; flags below override it
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Guess selection strategy
    #[arg(short, long, global = true, value_enum)]
    strategy: Option<StrategyKind>,

    /// Random seed for reproducible runs
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Precomputed opening table (JSON)
    #[arg(short, long, global = true)]
    opening: Option<PathBuf>,

    /// Near-top band width in bits
    #[arg(short, long, global = true)]
    tolerance: Option<f64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Solve a specific challenge word
    Solve {
        /// The target word to solve
        word: String,

        /// Round cap (0 = unlimited)
        #[arg(short, long)]
        max_rounds: Option<usize>,

        /// Show candidate counts and entropy for every round
        #[arg(short, long)]
        verbose: bool,
    },

    /// Solve a random (or indexed) challenge word
    Play {
        /// Position of the target in the challenge list
        #[arg(short, long)]
        index: Option<usize>,

        /// Round cap (0 = unlimited)
        #[arg(short, long)]
        max_rounds: Option<usize>,

        /// Show candidate counts and entropy for every round
        #[arg(short, long)]
        verbose: bool,
    },

    /// Benchmark solver performance
    Benchmark {
        /// Number of challenge words to test (default: all)
        #[arg(short = 'n', long)]
        count: Option<usize>,

        /// Round cap (0 = unlimited)
        #[arg(short, long)]
        max_rounds: Option<usize>,
    },

    /// Analyze the entropy of a specific word
    Analyze {
        /// Word to analyze
        word: String,
    },

    /// Suggest guesses for a game played elsewhere (default)
    Interactive {
        /// Round cap (0 = unlimited)
        #[arg(short, long)]
        max_rounds: Option<usize>,
    },

    /// Precompute an opening table
    Opening {
        /// Force the first guess instead of the best-scoring one
        #[arg(short, long)]
        first_guess: Option<String>,

        /// Where to write the table
        #[arg(long)]
        output: PathBuf,
    },
}

impl Commands {
    const fn verbose(&self) -> bool {
        matches!(
            self,
            Self::Solve { verbose: true, .. } | Self::Play { verbose: true, .. }
        )
    }
}

/// Merge the config file (if any) with command-line overrides
fn load_config(cli: &Cli) -> Result<SolverConfig> {
    let mut config = match &cli.config {
        Some(path) => SolverConfig::load(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => SolverConfig::default(),
    };

    if let Some(strategy) = cli.strategy {
        config.strategy = strategy;
    }
    if let Some(tolerance) = cli.tolerance {
        config.tolerance = tolerance;
    }
    if let Some(seed) = cli.seed {
        config.random_seed = Some(seed);
    }
    if let Some(path) = &cli.opening {
        config.opening_table = Some(path.clone());
    }

    config.validate()?;
    Ok(config)
}

/// Load and check the opening table; a bad table is skipped, not fatal
fn load_opening(path: &Path, word_list: &WordList) -> Option<OpeningTable> {
    let table = OpeningTable::load(path)
        .and_then(|table| table.validate(word_list).map(|()| table));

    match table {
        Ok(table) => Some(table),
        Err(err) => {
            warn!(path = %path.display(), %err, "ignoring opening table");
            None
        }
    }
}

/// `--max-rounds` overrides the config; 0 means no cap
fn round_cap(flag: Option<usize>, config: &SolverConfig) -> Option<usize> {
    match flag {
        Some(0) => None,
        Some(n) => Some(n),
        None => config.max_rounds,
    }
}

fn main() -> Result<()> {
    let mut cli = Cli::parse();
    let command = cli
        .command
        .take()
        .unwrap_or(Commands::Interactive { max_rounds: None });

    logging::init(command.verbose());

    let config = load_config(&cli)?;
    let word_list = load_from_file(&cli.wordlist)
        .with_context(|| format!("loading word list {}", cli.wordlist.display()))?;

    if let Commands::Opening {
        first_guess,
        output,
    } = &command
    {
        let summary = build_opening(&word_list, first_guess.as_deref(), output)?;
        print_opening_summary(&summary, output);
        return Ok(());
    }

    let opening = config
        .opening_table
        .as_deref()
        .and_then(|path| load_opening(path, &word_list));

    let mut rng = config
        .random_seed
        .map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);
    let mut solver = Solver::with_rng(
        config.build_strategy(),
        &word_list,
        StdRng::from_rng(&mut rng),
    );
    if let Some(table) = &opening {
        solver = solver.with_opening(table);
    }

    match command {
        Commands::Solve {
            word,
            max_rounds,
            verbose,
        } => {
            let target = Target::Word(&word);
            run_solve(&mut solver, target, round_cap(max_rounds, &config), verbose, &mut rng)
        }
        Commands::Play {
            index,
            max_rounds,
            verbose,
        } => {
            let target = index.map_or(Target::Random, Target::Index);
            run_solve(&mut solver, target, round_cap(max_rounds, &config), verbose, &mut rng)
        }
        Commands::Benchmark { count, max_rounds } => {
            let result = run_benchmark(&mut solver, count, round_cap(max_rounds, &config), true);
            print_benchmark_result(&result);
            Ok(())
        }
        Commands::Analyze { word } => {
            let result = analyze_word(&word, &word_list)?;
            print_analysis_result(&result);
            Ok(())
        }
        Commands::Interactive { max_rounds } => {
            let stdin = std::io::stdin();
            run_interactive(
                &mut solver,
                round_cap(max_rounds, &config),
                stdin.lock(),
                std::io::stdout(),
            )?;
            Ok(())
        }
        Commands::Opening { .. } => Ok(()),
    }
}

fn run_solve(
    solver: &mut Solver<'_, StrategyType>,
    target: Target<'_>,
    max_rounds: Option<usize>,
    verbose: bool,
    rng: &mut StdRng,
) -> Result<()> {
    let config = SolveConfig {
        target,
        max_rounds,
        verbose,
    };
    let result = solve_word(&config, solver, rng)?;

    print_solve_result(&result, verbose);
    Ok(())
}
