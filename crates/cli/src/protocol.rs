//! Line-oriented match manager protocol.
//!
//! The manager speaks a simple framing over stdin/stdout: the agent
//! introduces itself with a name line, reads one CSV configuration
//! line, then answers every `SCORE` status + board pair with a chosen
//! move until a `FINAL` status ends the match. All diagnostics go to
//! stderr through the logger; stdout carries protocol lines only.

use std::io::{self, BufRead, Write};

use log::{debug, info, warn};

use othello_core::board::Board;
use othello_core::constants::{MAX_BOARD_SIZE, MIN_BOARD_SIZE};
use othello_core::disc::Disc;
use othello_core::search::{Algorithm, Search, SearchOptions};

/// Name line sent to the manager before the configuration is read.
const AGENT_NAME: &str = "Othello AI";

/// Agent configuration received from the manager.
///
/// The wire format is one CSV line: `color,limit,minimax,caching,ordering`
/// with color `1` (dark) or `2` (light), a depth limit where `-1` means
/// unlimited, and `0`/`1` flags.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AgentConfig {
    /// The color this agent plays.
    pub color: Disc,
    /// Search configuration derived from the remaining fields.
    pub options: SearchOptions,
}

/// One status line from the manager.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Status {
    /// Running score; a board line follows and a move is expected.
    Score(u32, u32),
    /// Final score; the match is over.
    Final(u32, u32),
}

fn invalid_data(message: String) -> io::Error {
    io::Error::new(io::ErrorKind::InvalidData, message)
}

/// Parses the CSV configuration line.
pub fn parse_config(line: &str) -> io::Result<AgentConfig> {
    let fields: Vec<&str> = line.trim().split(',').map(str::trim).collect();
    if fields.len() != 5 {
        return Err(invalid_data(format!(
            "expected 5 configuration fields, got {}: {line:?}",
            fields.len()
        )));
    }

    let numbers: Vec<i32> = fields
        .iter()
        .map(|f| {
            f.parse::<i32>()
                .map_err(|e| invalid_data(format!("bad configuration field {f:?}: {e}")))
        })
        .collect::<io::Result<_>>()?;

    let color = match numbers[0] {
        1 => Disc::Dark,
        2 => Disc::Light,
        other => return Err(invalid_data(format!("bad player color: {other}"))),
    };

    Ok(AgentConfig {
        color,
        options: SearchOptions {
            algorithm: if numbers[2] == 1 {
                Algorithm::Minimax
            } else {
                Algorithm::AlphaBeta
            },
            depth_limit: numbers[1],
            caching: numbers[3] == 1,
            ordering: numbers[4] == 1,
        },
    })
}

/// Parses a `SCORE`/`FINAL` status line.
pub fn parse_status(line: &str) -> io::Result<Status> {
    let mut parts = line.split_whitespace();
    let tag = parts
        .next()
        .ok_or_else(|| invalid_data(format!("empty status line: {line:?}")))?;
    let mut next_score = || -> io::Result<u32> {
        parts
            .next()
            .ok_or_else(|| invalid_data(format!("truncated status line: {line:?}")))?
            .parse()
            .map_err(|e| invalid_data(format!("bad score in status line {line:?}: {e}")))
    };
    let dark = next_score()?;
    let light = next_score()?;

    match tag {
        "SCORE" => Ok(Status::Score(dark, light)),
        "FINAL" => Ok(Status::Final(dark, light)),
        other => Err(invalid_data(format!("unknown status tag: {other:?}"))),
    }
}

/// Parses a serialized board line.
///
/// The manager sends the board as a nested list of cell digits (`0`
/// empty, `1` dark, `2` light). Everything except the digits is
/// framing, so the parser keeps the digit characters in order and
/// requires them to form a square of a supported size.
pub fn parse_board(line: &str) -> io::Result<Board> {
    let cells: Vec<Disc> = line
        .chars()
        .filter(|c| c.is_ascii_digit())
        .map(|c| {
            Disc::from_digit(c as u8 - b'0')
                .ok_or_else(|| invalid_data(format!("bad cell digit {c:?} in board line")))
        })
        .collect::<io::Result<_>>()?;

    let size = cells.len().isqrt();
    if size * size != cells.len() {
        return Err(invalid_data(format!(
            "board line holds {} cells, not a square",
            cells.len()
        )));
    }
    if !(MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&size) {
        return Err(invalid_data(format!("unsupported board size: {size}")));
    }
    Ok(Board::from_cells(size as u8, cells))
}

/// Logs the configuration report the way the manager's operators expect
/// to see it on stderr.
fn report_config(config: &AgentConfig) {
    match config.options.algorithm {
        Algorithm::Minimax => info!("Running MINIMAX"),
        Algorithm::AlphaBeta => info!("Running ALPHA-BETA"),
    }
    info!(
        "State Caching is {}",
        if config.options.caching { "ON" } else { "OFF" }
    );
    info!(
        "Node Ordering is {}",
        if config.options.ordering { "ON" } else { "OFF" }
    );
    if config.options.depth_limit < 0 {
        info!("Depth Limit is OFF");
    } else {
        info!("Depth Limit is {}", config.options.depth_limit);
    }
    if config.options.algorithm == Algorithm::Minimax && config.options.ordering {
        warn!("Node Ordering should have no impact on Minimax");
    }
}

/// Runs the protocol loop until the manager reports a final score.
pub fn run(search: &mut Search) -> io::Result<()> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    let mut stdout = io::stdout();

    writeln!(stdout, "{AGENT_NAME}")?;
    stdout.flush()?;

    let config_line = lines
        .next()
        .ok_or_else(|| invalid_data("missing configuration line".into()))??;
    let config = parse_config(&config_line)?;
    report_config(&config);

    while let Some(line) = lines.next() {
        match parse_status(&line?)? {
            Status::Final(dark, light) => {
                info!("Final score: dark {dark}, light {light}");
                break;
            }
            Status::Score(dark, light) => {
                debug!("Score: dark {dark}, light {light}");
                let board_line = lines
                    .next()
                    .ok_or_else(|| invalid_data("missing board line after SCORE".into()))??;
                let board = parse_board(&board_line)?;

                let result = search.run(&board, config.color, &config.options);
                debug!(
                    "Selected {} (value {}, {} nodes, {} cached positions)",
                    result.best_move,
                    result.score,
                    result.n_nodes,
                    search.cache_len()
                );

                writeln!(stdout, "{}", result.best_move)?;
                stdout.flush()?;
            }
        }
    }

    Ok(())
}
