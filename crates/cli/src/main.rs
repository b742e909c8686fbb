mod game;
mod protocol;

use clap::{Parser, Subcommand, ValueEnum};
use log::error;

use othello_core::search::{Algorithm, Search, SearchOptions};

#[derive(Parser, Debug)]
#[command(about = "Othello-playing agent speaking the match manager's line protocol")]
struct Cli {
    #[command(subcommand)]
    command: Option<SubCommands>,

    /// Raise stderr logging to debug (per-move node counts, cache size).
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Debug, Subcommand)]
enum SubCommands {
    /// Play the engine against itself and print each position.
    Selfplay {
        #[arg(long, default_value_t = 8)]
        size: u8,

        /// Depth limit; -1 searches until the game is decided.
        #[arg(long, default_value_t = 5, allow_hyphen_values = true)]
        depth: i32,

        #[arg(long, value_enum, default_value_t = AlgorithmArg::Alphabeta)]
        algorithm: AlgorithmArg,

        #[arg(long)]
        no_caching: bool,

        #[arg(long)]
        no_ordering: bool,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum AlgorithmArg {
    Minimax,
    Alphabeta,
}

impl From<AlgorithmArg> for Algorithm {
    fn from(arg: AlgorithmArg) -> Algorithm {
        match arg {
            AlgorithmArg::Minimax => Algorithm::Minimax,
            AlgorithmArg::Alphabeta => Algorithm::AlphaBeta,
        }
    }
}

fn main() {
    let args = Cli::parse();
    let level = if args.verbose {
        log::Level::Debug
    } else {
        log::Level::Info
    };
    simple_logger::init_with_level(level).expect("logger already initialized");

    match args.command {
        Some(SubCommands::Selfplay {
            size,
            depth,
            algorithm,
            no_caching,
            no_ordering,
        }) => {
            let options = SearchOptions {
                algorithm: algorithm.into(),
                depth_limit: depth,
                caching: !no_caching,
                ordering: !no_ordering,
            };
            game::selfplay(size, &options);
        }
        None => {
            if let Err(e) = protocol::run(&mut Search::new()) {
                error!("protocol error: {e}");
                std::process::exit(1);
            }
        }
    }
}
