#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use pig::{
    init_logging, AiPlayer, CliPlayer, GameEngine, GameSession, OpponentKind, Player, RuleMode,
    Seat, SeatPair, TARGET_SCORE,
};

#[cfg(feature = "std")]
use clap::{Parser, ValueEnum};
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::SeedableRng;
#[cfg(feature = "std")]
use tokio::time::Duration;

#[derive(ValueEnum, Clone, Debug)]
#[cfg(feature = "std")]
enum OpponentArg {
    Human,
    Computer,
}

#[derive(ValueEnum, Clone, Debug)]
#[cfg(feature = "std")]
enum RulesArg {
    Single,
    Double,
}

#[derive(Parser)]
#[command(author, version, about = "Pig, the dice game: first to 100 wins", long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[arg(long, value_enum, default_value_t = OpponentArg::Computer)]
    opponent: OpponentArg,
    #[arg(long, value_enum, default_value_t = RulesArg::Single)]
    rules: RulesArg,
    #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
    seed: Option<u64>,
    #[arg(long, default_value_t = 600, help = "Pause before each computer step, ms")]
    delay_ms: u64,
}

#[cfg(feature = "std")]
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    let mode = match cli.rules {
        RulesArg::Single => RuleMode::SingleDie,
        RulesArg::Double => RuleMode::DoubleDie,
    };
    let opponent = match cli.opponent {
        OpponentArg::Human => OpponentKind::Human,
        OpponentArg::Computer => OpponentKind::Computer,
    };

    println!("Pig: {} rules, first to {} wins.", mode, TARGET_SCORE);
    match mode {
        RuleMode::SingleDie => {
            println!("Roll to build up your turn score; hold to bank it.");
            println!("A 1 forfeits the turn score and ends your turn.");
        }
        RuleMode::DoubleDie => {
            println!("Roll two dice; hold to bank your turn score.");
            println!("A single 1 busts the turn, double ones wipe your banked total,");
            println!("and any other pair must be followed by another roll.");
        }
    }
    if let Some(s) = cli.seed {
        println!("Using fixed seed: {} (game will be reproducible)", s);
    }

    let rng = if let Some(s) = cli.seed {
        SmallRng::seed_from_u64(s)
    } else {
        let mut seed_rng = rand::rng();
        SmallRng::from_rng(&mut seed_rng)
    };

    let engine = GameEngine::new(mode, opponent);
    let players: SeatPair<Box<dyn Player>> = SeatPair::new(
        Box::new(CliPlayer::new()),
        match opponent {
            OpponentKind::Human => Box::new(CliPlayer::new()),
            OpponentKind::Computer => Box::new(AiPlayer::new()),
        },
    );

    let mut session = GameSession::new(engine, players, rng, Duration::from_millis(cli.delay_ms));
    let final_view = session.run().await?;

    let first = &final_view.players[Seat::First];
    let second = &final_view.players[Seat::Second];
    println!(
        "\nFinal record: {}: {}W/{}L, {}: {}W/{}L. Thanks for playing!",
        first.name, first.wins, first.losses, second.name, second.wins, second.losses
    );
    Ok(())
}
