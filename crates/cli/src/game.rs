//! Engine-vs-engine self-play with a colored terminal board.

use colored::Colorize;
use log::{debug, info};

use othello_core::board::Board;
use othello_core::disc::Disc;
use othello_core::move_list::Move;
use othello_core::search::{Search, SearchOptions};

/// Prints a colored representation of the board to the terminal.
///
/// Dark discs render green, light discs yellow, the last move on a
/// highlighted background, and the side to move's legal cells as dots.
fn print_board(board: &Board, side_to_move: Disc, last_move: Option<Move>) {
    let size = board.size();

    print!("   ");
    for col in 0..size {
        print!(" {}", (b'a' + col) as char);
    }
    println!();

    for row in 0..size {
        print!("{:2} ", row + 1);
        for col in 0..size {
            let mv = Move::new(col, row);
            let is_last_move = Some(mv) == last_move;
            let symbol = match board.get(col, row) {
                Disc::Dark if is_last_move => "X".on_bright_black().bright_green(),
                Disc::Light if is_last_move => "O".on_bright_black().bright_yellow(),
                Disc::Dark => "X".bright_green(),
                Disc::Light => "O".bright_yellow(),
                Disc::Empty if board.is_legal_move(side_to_move, mv) => "·".bright_cyan(),
                Disc::Empty => " ".normal(),
            };
            print!(" {symbol}");
        }
        println!();
    }

    let (dark, light) = board.score();
    println!(
        "   {}: {dark}  {}: {light}",
        "Dark".bright_green(),
        "Light".bright_yellow()
    );
}

/// Plays the engine against itself until neither side can move.
///
/// Both sides share one engine instance; the transposition cache keys
/// on the perspective color, so the two viewpoints never collide.
pub fn selfplay(size: u8, options: &SearchOptions) {
    let mut search = Search::new();
    let mut board = Board::new(size);
    let mut side = Disc::Dark;
    let mut turn = 0u32;

    print_board(&board, side, None);

    loop {
        if board.legal_moves(side).is_empty() {
            if board.legal_moves(side.opposite()).is_empty() {
                break;
            }
            info!("{side:?} passes");
            side = side.opposite();
            continue;
        }

        let result = search.run(&board, side, options);
        turn += 1;
        let mover = side;
        board = board.apply_move(side, result.best_move);
        side = side.opposite();

        println!();
        println!("Turn {turn}: {mover:?} plays {}", result.best_move);
        print_board(&board, side, Some(result.best_move));
        debug!(
            "value {}, {} nodes, {} cached positions",
            result.score,
            result.n_nodes,
            search.cache_len()
        );
    }

    let (dark, light) = board.score();
    println!();
    match dark.cmp(&light) {
        std::cmp::Ordering::Greater => println!("{}", "Dark wins!".bright_green()),
        std::cmp::Ordering::Less => println!("{}", "Light wins!".bright_yellow()),
        std::cmp::Ordering::Equal => println!("{}", "Draw".bright_cyan()),
    }
    println!("Final score: dark {dark}, light {light}");
}
