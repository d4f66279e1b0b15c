use rand::{rngs::SmallRng, SeedableRng};
use salvo::{AiPlayer, Game, GameStatus, Player, Shot, Side, DEFAULT_GRID_SIZE};
use serde::Serialize;

#[derive(Serialize)]
struct SideReport {
    shots: usize,
    remaining: usize,
}

#[derive(Serialize)]
struct Report<'a> {
    winner: Option<Side>,
    turns: usize,
    player: SideReport,
    computer: SideReport,
    shots: &'a [Shot],
}

impl SideReport {
    fn of(game: &Game, side: Side) -> Self {
        Self {
            shots: game.shot_count(side),
            remaining: game.remaining(side),
        }
    }
}

fn main() -> anyhow::Result<()> {
    salvo::init_logging(0);
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 3 {
        eprintln!("Usage: {} <seed1> <seed2>", args[0]);
        std::process::exit(1);
    }
    let seed1: u64 = args[1].parse()?;
    let seed2: u64 = args[2].parse()?;

    let size = DEFAULT_GRID_SIZE;
    let mut rng1 = SmallRng::seed_from_u64(seed1);
    let mut game = Game::new(size, &mut rng1)?;
    let mut p1 = AiPlayer::new(size, rng1)?;
    let mut p2 = AiPlayer::new(size, SmallRng::seed_from_u64(seed2))?;

    let max_shots = 2 * size * size;
    while game.status() == GameStatus::InProgress {
        let actor: &mut dyn Player = match game.turn() {
            Side::Player => &mut p1,
            Side::Computer => &mut p2,
        };
        if game.play_turn(actor)?.is_none() {
            anyhow::bail!("{} ran out of moves", game.turn().name());
        }
        if game.shots().len() > max_shots {
            anyhow::bail!("game took too many shots");
        }
    }

    let report = Report {
        winner: game.winner(),
        turns: game.shots().len(),
        player: SideReport::of(&game, Side::Player),
        computer: SideReport::of(&game, Side::Computer),
        shots: game.shots(),
    };
    println!("{}", serde_json::to_string(&report)?);
    Ok(())
}
