#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use salvo::{
    init_logging, ui, AiPlayer, CliPlayer, Game, GameStatus, Player, Side, DEFAULT_GRID_SIZE,
};

#[cfg(feature = "std")]
use clap::{Parser, Subcommand};
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::SeedableRng;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    /// Raise the log level one step per flag (-v debug, -vv trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
#[cfg(feature = "std")]
enum Commands {
    /// Play against the computer.
    Play {
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
        #[arg(long, default_value_t = DEFAULT_GRID_SIZE)]
        grid_size: usize,
    },
    /// Watch the computer play against itself.
    Watch {
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
        #[arg(long, default_value_t = DEFAULT_GRID_SIZE)]
        grid_size: usize,
    },
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Play { seed, grid_size } => {
            if let Some(s) = seed {
                println!("Using fixed seed: {} (game will be reproducible)", s);
            }
            let mut rng = seeded_rng(seed, 0);
            let mut game = Game::new(grid_size, &mut rng)?;
            let mut human = CliPlayer::stdio();
            let mut computer = AiPlayer::new(grid_size, seeded_rng(seed, 1))?;

            println!("{}", ui::welcome());
            run(&mut game, &mut human, &mut computer, true)?;
        }
        Commands::Watch { seed, grid_size } => {
            if let Some(s) = seed {
                println!("Using fixed seed: {} (game will be reproducible)", s);
            }
            let mut rng = seeded_rng(seed, 0);
            let mut game = Game::new(grid_size, &mut rng)?;
            let mut first = AiPlayer::new(grid_size, seeded_rng(seed, 1))?;
            let mut second = AiPlayer::new(grid_size, seeded_rng(seed, 2))?;

            run(&mut game, &mut first, &mut second, false)?;
            println!("Player fleet:\n{}", ui::render_grid(game.fleet(Side::Player), true));
            println!("Computer fleet:\n{}", ui::render_grid(game.fleet(Side::Computer), true));
        }
    }
    Ok(())
}

#[cfg(feature = "std")]
fn seeded_rng(seed: Option<u64>, offset: u64) -> SmallRng {
    match seed {
        Some(s) => SmallRng::seed_from_u64(s.wrapping_add(offset)),
        None => {
            let mut seed_rng = rand::rng();
            SmallRng::from_rng(&mut seed_rng)
        }
    }
}

/// Alternate turns until one fleet is gone or a player quits.
#[cfg(feature = "std")]
fn run(
    game: &mut Game,
    player: &mut dyn Player,
    computer: &mut dyn Player,
    show_boards: bool,
) -> anyhow::Result<()> {
    let mut current = None;
    while game.status() == GameStatus::InProgress {
        let side = game.turn();
        if current != Some(side) {
            println!("{}", ui::turn_header(side));
            if show_boards && side == Side::Player {
                println!("{}", ui::render_grid(game.fleet(Side::Computer), false));
            }
            current = Some(side);
        }

        let actor: &mut dyn Player = match side {
            Side::Player => &mut *player,
            Side::Computer => &mut *computer,
        };
        let Some(shot) = game.play_turn(actor)? else {
            println!("\nExit salvo...");
            return Ok(());
        };
        if side == Side::Computer {
            println!("{}", ui::action(&shot.command));
        }
        println!(
            "{}",
            ui::describe(side, shot.outcome, game.remaining(side.opponent()))
        );
    }

    match game.status() {
        GameStatus::Won => println!("{}", ui::victory()),
        GameStatus::Lost => println!("{}", ui::defeat()),
        GameStatus::InProgress => {}
    }
    Ok(())
}
