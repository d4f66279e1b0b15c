use rand::rngs::SmallRng;
use rand::SeedableRng;
use salvo::{
    AiPlayer, Coordinate, Game, GameError, GameStatus, Grid, Orientation, Outcome, Player, Side,
    DEFAULT_GRID_SIZE,
};

/// battleship a0..e0, destroyer a2..d2, destroyer j3..j6
const COMPUTER_CELLS: [&str; 13] = [
    "a0", "b0", "c0", "d0", "e0", "a2", "b2", "c2", "d2", "j3", "j4", "j5", "j6",
];

fn scripted_grid() -> Grid {
    Grid::with_layout(
        DEFAULT_GRID_SIZE,
        &[
            (Coordinate::new(0, 0), Orientation::Horizontal),
            (Coordinate::new(0, 2), Orientation::Horizontal),
            (Coordinate::new(9, 3), Orientation::Vertical),
        ],
    )
    .unwrap()
}

fn scripted_game() -> Game {
    Game::from_grids(scripted_grid(), scripted_grid())
}

/// Replays a fixed list of commands.
struct Script(Vec<&'static str>, Vec<Outcome>);

impl Player for Script {
    fn next_command(&mut self) -> Option<String> {
        if self.0.is_empty() {
            None
        } else {
            Some(self.0.remove(0).to_string())
        }
    }

    fn handle_outcome(&mut self, _command: &str, outcome: Outcome) {
        self.1.push(outcome);
    }
}

#[test]
fn test_player_moves_first() {
    let game = scripted_game();
    assert_eq!(game.turn(), Side::Player);
    assert_eq!(game.status(), GameStatus::InProgress);
    assert_eq!(game.winner(), None);
}

#[test]
fn test_miss_passes_turn_and_hit_keeps_it() {
    let mut game = scripted_game();
    assert_eq!(game.fire("a0").unwrap(), Outcome::ShipTouched);
    assert_eq!(game.turn(), Side::Player);

    assert_eq!(game.fire("f9").unwrap(), Outcome::MissedHit);
    assert_eq!(game.turn(), Side::Computer);

    // The computer fires at the player's fleet, not its own.
    assert_eq!(game.fire("a0").unwrap(), Outcome::ShipTouched);
    assert_eq!(game.fleet(Side::Player).history(), ["a0"]);
    assert_eq!(game.fleet(Side::Computer).history(), ["a0", "f9"]);
}

#[test]
fn test_rejected_commands_keep_turn_without_shot() {
    let mut game = scripted_game();
    assert_eq!(game.fire("z9").unwrap(), Outcome::InvalidCommand);
    assert_eq!(game.fire("f9").unwrap(), Outcome::MissedHit);
    assert_eq!(game.fire("a9").unwrap(), Outcome::MissedHit);
    assert_eq!(game.turn(), Side::Player);
    assert_eq!(game.fire("f9").unwrap(), Outcome::AlreadyPlayed);
    assert_eq!(game.turn(), Side::Player);
    assert_eq!(game.shots().len(), 2);
    assert_eq!(game.shot_count(Side::Player), 1);
}

#[test]
fn test_destroying_last_vessel_wins() {
    let mut game = scripted_game();
    let (last, rest) = COMPUTER_CELLS.split_last().unwrap();
    for cell in rest {
        game.fire(cell).unwrap();
        assert_eq!(game.turn(), Side::Player);
    }
    assert_eq!(game.remaining(Side::Computer), 1);
    assert_eq!(game.fire(last).unwrap(), Outcome::ShipAllDestroyed);
    assert_eq!(game.status(), GameStatus::Won);
    assert_eq!(game.winner(), Some(Side::Player));
    assert_eq!(game.remaining(Side::Player), 3);
    assert_eq!(game.fire("a9"), Err(GameError::GameOver));
}

#[test]
fn test_computer_win_is_a_loss() {
    let mut game = scripted_game();
    game.fire("j9").unwrap();
    for cell in COMPUTER_CELLS {
        game.fire(cell).unwrap();
    }
    assert_eq!(game.status(), GameStatus::Lost);
    assert_eq!(game.winner(), Some(Side::Computer));
}

#[test]
fn test_play_turn_reports_back_to_player() {
    let mut game = scripted_game();
    let mut script = Script(vec!["a0", "a1"], Vec::new());

    let shot = game.play_turn(&mut script).unwrap().unwrap();
    assert_eq!(shot.side, Side::Player);
    assert_eq!(shot.outcome, Outcome::ShipTouched);
    game.play_turn(&mut script).unwrap();
    assert_eq!(script.1, vec![Outcome::ShipTouched, Outcome::MissedHit]);

    // Player leaves when it has nothing more to say.
    assert_eq!(game.play_turn(&mut script).unwrap(), None);
    assert_eq!(game.status(), GameStatus::InProgress);
}

#[test]
fn test_ai_vs_ai_game() {
    for seed in 0..20u64 {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut game = Game::new(DEFAULT_GRID_SIZE, &mut rng).unwrap();
        let mut p1 = AiPlayer::new(DEFAULT_GRID_SIZE, SmallRng::seed_from_u64(seed + 1000)).unwrap();
        let mut p2 = AiPlayer::new(DEFAULT_GRID_SIZE, SmallRng::seed_from_u64(seed + 2000)).unwrap();

        while game.status() == GameStatus::InProgress {
            let actor: &mut dyn Player = match game.turn() {
                Side::Player => &mut p1,
                Side::Computer => &mut p2,
            };
            let shot = game.play_turn(actor).unwrap().expect("ai always has a move");
            assert!(!shot.outcome.is_rejected(), "seed {seed}: {shot:?}");
            assert!(game.shots().len() <= 2 * DEFAULT_GRID_SIZE * DEFAULT_GRID_SIZE);
        }

        let winner = game.winner().unwrap();
        assert_eq!(game.remaining(winner.opponent()), 0);
        assert!(game.remaining(winner) > 0);
        assert_eq!(game.shots().last().unwrap().outcome, Outcome::ShipAllDestroyed);
    }
}
