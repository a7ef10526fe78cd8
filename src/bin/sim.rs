use clap::Parser;
use dots_and_boxes::{init_logging, run_session, Game, PlayerId, RandomSource};
use serde_json::json;

/// Play one game between two random movers and print the result as JSON.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
    seed: Option<u64>,
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let args = Args::parse();
    let seed = args.seed.unwrap_or_else(rand::random);

    let mut p1 = RandomSource::from_seed(seed);
    let mut p2 = RandomSource::from_seed(seed.wrapping_add(1));
    let mut game = Game::new();
    let summary = run_session(&mut game, [&mut p1, &mut p2]);

    let outcome = summary
        .outcome
        .ok_or_else(|| anyhow::anyhow!("simulation stopped before the game ended"))?;

    let result = json!({
        "seed": seed,
        "moves": summary.moves,
        "scores": {
            "P1": game.score(PlayerId::P1),
            "P2": game.score(PlayerId::P2),
        },
        "winner": outcome.winner().map(|id| id.label()),
    });

    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
