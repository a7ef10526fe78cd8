#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use clap::{Parser, Subcommand};
#[cfg(feature = "std")]
use dots_and_boxes::prelude::*;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
#[cfg(feature = "std")]
enum Commands {
    /// Play a two-player game on this terminal, taking turns at the keyboard.
    Play,
    /// Apply moves to a fresh game and print the resulting state as JSON.
    Replay {
        #[arg(required = true, help = "Moves in notation, e.g. A1t B1r (quote moves containing spaces)")]
        moves: Vec<String>,
    },
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Play => {
            println!("Dots and Boxes - type 'help' for instructions.");
            let mut game = Game::new();
            let mut p1 = CliPlayer::new();
            let mut p2 = CliPlayer::hot_seat_partner();
            let summary = run_session(&mut game, [&mut p1, &mut p2]);
            log::info!(
                "session ended: {} move(s), {} rejected, outcome {:?}",
                summary.moves,
                summary.rejected,
                summary.outcome
            );
        }
        Commands::Replay { moves } => {
            let mut game = Game::new();
            for text in &moves {
                let mv: Move = text
                    .parse()
                    .map_err(|e| anyhow::anyhow!("'{}': {}", text, e))?;
                game.apply_move(mv.row, mv.col, mv.direction)
                    .map_err(|e| anyhow::anyhow!("'{}': {}", text, e))?;
            }
            println!("{}", serde_json::to_string_pretty(&game.snapshot())?);
        }
    }
    Ok(())
}
