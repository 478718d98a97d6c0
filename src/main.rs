//! Command-line referee.
//!
//! Run with:
//! `cargo run --release -- replay moves.txt`
//! `cargo run --release -- random --plies 60 --seed 42`

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use chess_referee::app_config::AppConfig;
use chess_referee::chess_errors::ChessErrors;
use chess_referee::game_state::board_factory::BoardFactory;
use chess_referee::move_validation::game_engine::GameEngine;
use chess_referee::utils::game_replay::{replay_moves, ReplayOutcome};
use chess_referee::utils::move_reader::read_moves_from_path;
use chess_referee::utils::random_playout::{random_playout, PlayoutConfig};
use chess_referee::utils::render_board::BoardRenderer;

#[derive(Debug, Parser)]
#[command(
    name = "chess_referee",
    version,
    about = "Validates chess moves and renders the resulting positions"
)]
struct Cli {
    /// JSON configuration (board_size, name_mappings).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Replay a move file from the starting position.
    Replay {
        /// One move per line, e.g. `e2e4`.
        moves_file: PathBuf,
    },
    /// Play random legal moves from the starting position.
    Random {
        #[arg(long, default_value_t = PlayoutConfig::default().plies)]
        plies: usize,
        #[arg(long, default_value_t = PlayoutConfig::default().seed)]
        seed: u64,
    },
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match run(cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<ExitCode, ChessErrors> {
    let config = match &cli.config {
        Some(path) => AppConfig::load(path)?,
        None => AppConfig::default(),
    };
    let factory = BoardFactory::new(&config);
    let renderer = BoardRenderer::new(&config);
    let engine = GameEngine::new();

    match cli.command {
        Command::Replay { moves_file } => {
            let moves = match read_moves_from_path(&moves_file) {
                Ok(moves) => moves,
                Err(err @ ChessErrors::MoveFileUnreadable { .. }) => {
                    println!("Could not find file with moves via path: {}", moves_file.display());
                    tracing::error!("{err}");
                    return Ok(ExitCode::FAILURE);
                }
                Err(err) => return Err(err),
            };

            let replay = replay_moves(&engine, factory.starting_board()?, &moves);
            println!("Replay started {}", replay.started_at.format("%Y-%m-%d %H:%M:%S"));
            println!("{}", renderer.render(&replay.initial_board));

            for ply in &replay.plies {
                println!("{}", ply.mv);
                println!("{}", renderer.render(&ply.board_after));
                if ply.gives_check {
                    println!();
                    println!("Warning: {} King is in check!", ply.mv.color.opposite());
                    println!();
                }
            }

            if let ReplayOutcome::Rejected { mv, violation, .. } = &replay.outcome {
                println!("Illegal move: {mv}");
                println!("{violation}");
            }
            Ok(ExitCode::SUCCESS)
        }
        Command::Random { plies, seed } => {
            let playout = random_playout(
                &engine,
                factory.starting_board()?,
                PlayoutConfig { plies, seed },
            );
            for (ply, mv) in playout.moves.iter().enumerate() {
                println!("{:>3}. {mv}", ply + 1);
            }
            println!("{}", renderer.render(&playout.final_board));
            if playout.exhausted {
                println!("{} has no legal move.", playout.side_to_move);
            }
            Ok(ExitCode::SUCCESS)
        }
    }
}
