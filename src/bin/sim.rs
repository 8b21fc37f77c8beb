use pig::{decide, Decision, GameEngine, OpponentKind, RuleMode, Seat};
use rand::{rngs::SmallRng, SeedableRng};
use serde_json::json;

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    if args.len() < 3 || args.len() > 4 {
        eprintln!("Usage: {} <games> <seed> [single|double]", args[0]);
        std::process::exit(1);
    }
    let games: u32 = args[1].parse()?;
    let seed: u64 = args[2].parse()?;
    let mode = match args.get(3).map(String::as_str) {
        None | Some("single") => RuleMode::SingleDie,
        Some("double") => RuleMode::DoubleDie,
        Some(other) => {
            eprintln!("Unknown rules {:?}, expected single or double", other);
            std::process::exit(1);
        }
    };

    let mut rng = SmallRng::seed_from_u64(seed);
    let mut engine = GameEngine::new(mode, OpponentKind::Computer);
    let mut steps: u64 = 0;
    for _ in 0..games {
        while !engine.is_over() {
            match decide(&engine.snapshot()) {
                Decision::Roll => engine.roll(&mut rng),
                Decision::Hold => engine.hold(),
            }
            steps += 1;
        }
        // Fresh game, same running win/loss records.
        engine.reset(true);
    }

    let view = engine.snapshot();
    let first = &view.players[Seat::First];
    let second = &view.players[Seat::Second];
    let winner = if first.wins > second.wins {
        "player1"
    } else if second.wins > first.wins {
        "player2"
    } else {
        "tie"
    };

    let result = json!({
        "games": games,
        "rules": mode.to_string(),
        "player1": {"wins": first.wins, "losses": first.losses},
        "player2": {"wins": second.wins, "losses": second.losses},
        "winner": winner,
        "steps": steps,
    });
    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
