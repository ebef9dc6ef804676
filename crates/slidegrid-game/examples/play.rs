//! Example driver that plays a shuffled puzzle from greedy hints.
//!
//! This is the "external tool layer" the engine is designed for, made
//! concrete: it maps a difficulty label to a preset, renders grids as
//! pipe-delimited rows with the blank shown as a space, and repeatedly
//! asks the advisor for a move until the puzzle is solved, the advisor
//! plateaus, or the step budget runs out.
//!
//! # Usage
//!
//! ```sh
//! cargo run --example play
//! cargo run --example play -- --size 4 --difficulty hard
//! cargo run --example play -- --seed 42 --max-steps 500
//! RUST_LOG=info cargo run --example play
//! ```

use std::process;

use clap::Parser;
use slidegrid_game::{Difficulty, Session};
use slidegrid_hint::Hint;

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Board side length.
    #[arg(long, value_name = "N", default_value_t = 3)]
    size: usize,

    /// Difficulty label: easy, medium, or hard.
    #[arg(long, value_name = "LABEL", default_value = "medium")]
    difficulty: String,

    /// Shuffle seed; random when omitted.
    #[arg(long, value_name = "SEED")]
    seed: Option<u64>,

    /// Give up after this many hint-driven moves.
    #[arg(long, value_name = "COUNT", default_value_t = 200)]
    max_steps: usize,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let difficulty = match args.difficulty.parse::<Difficulty>() {
        Ok(difficulty) => difficulty,
        Err(err) => {
            eprintln!("{err}");
            process::exit(2);
        }
    };

    let mut session = match args.seed {
        Some(seed) => Session::with_seed(args.size, seed),
        None => Session::new(args.size),
    }
    .unwrap_or_else(|err| {
        eprintln!("{err}");
        process::exit(2);
    });

    log::info!(
        "starting a {difficulty} game on a {size}x{size} board (seed {seed})",
        size = session.size(),
        seed = session.seed(),
    );
    let grid = session.start(difficulty);
    println!("Shuffled board:\n{}", render(grid.rows()));

    for step in 1..=args.max_steps {
        match session.hint() {
            Hint::Move { direction, distance } => {
                log::info!("step {step}: {direction} (distance {distance} after)");
                let outcome = session.apply_move(direction);
                if outcome.solved {
                    println!("Solved in {step} moves:\n{}", render(outcome.grid.rows()));
                    return;
                }
            }
            Hint::AlreadySolved => {
                println!("Already solved.");
                return;
            }
            Hint::NoImprovement => {
                let status = session.status();
                println!(
                    "Stuck after {moves} moves at distance {distance} — \
                     no single move improves from here:\n{board}",
                    moves = step - 1,
                    distance = status.distance,
                    board = render(status.grid.rows()),
                );
                return;
            }
        }
    }

    let status = session.status();
    println!(
        "Step budget exhausted at distance {distance}:\n{board}",
        distance = status.distance,
        board = render(status.grid.rows()),
    );
}

/// Renders rows as pipe-delimited cells, with the blank as a space.
fn render<'a>(rows: impl Iterator<Item = &'a [usize]>) -> String {
    let mut out = String::new();
    for row in rows {
        let cells: Vec<String> = row
            .iter()
            .map(|&label| {
                if label == 0 {
                    " ".to_owned()
                } else {
                    label.to_string()
                }
            })
            .collect();
        out.push_str(&format!("| {} |\n", cells.join(" | ")));
    }
    out
}
