use std::collections::HashSet;

use rand::rngs::SmallRng;
use rand::SeedableRng;
use salvo::{
    decode, orthogonal_neighbors, AiPlayer, Coordinate, GridError, Outcome, TargetMode, Targeting,
    MAX_GRID_SIZE,
};

fn targeting(seed: u64) -> Targeting<SmallRng> {
    Targeting::new(10, SmallRng::seed_from_u64(seed)).unwrap()
}

#[test]
fn test_register_outcome_records_lowercase_history() {
    let mut ai = targeting(1);
    ai.register_outcome("A5", Outcome::MissedHit);
    assert_eq!(ai.history(), ["a5"]);
    assert!(ai.in_history(Coordinate::new(0, 5)));
    assert!(!ai.in_history(Coordinate::new(0, 6)));
    assert_eq!(ai.mode(), TargetMode::Hunt);
}

#[test]
fn test_touch_enters_target_and_destroy_clears_it() {
    let mut ai = targeting(1);
    ai.register_outcome("f5", Outcome::ShipTouched);
    assert_eq!(ai.mode(), TargetMode::Target(Coordinate::new(5, 5)));

    ai.register_outcome("f6", Outcome::MissedHit);
    assert_eq!(ai.last_touched(), Some(Coordinate::new(5, 5)));

    ai.register_outcome("g5", Outcome::ShipTouched);
    assert_eq!(ai.last_touched(), Some(Coordinate::new(6, 5)));

    ai.register_outcome("h5", Outcome::ShipDestroyed);
    assert_eq!(ai.mode(), TargetMode::Hunt);

    ai.register_outcome("a0", Outcome::ShipTouched);
    ai.register_outcome("a1", Outcome::ShipAllDestroyed);
    assert_eq!(ai.last_touched(), None);
}

#[test]
fn test_target_guess_is_an_orthogonal_neighbor() {
    let expected: HashSet<_> = ["b5", "d5", "c4", "c6"].into_iter().collect();
    for seed in 0..50 {
        let mut ai = targeting(seed);
        ai.register_outcome("c5", Outcome::ShipTouched);
        let guess = ai.next_guess().unwrap();
        assert!(expected.contains(guess.as_str()), "seed {seed}: {guess}");
    }
}

#[test]
fn test_target_skips_guessed_neighbors() {
    for seed in 0..50 {
        let mut ai = targeting(seed);
        ai.register_outcome("b5", Outcome::MissedHit);
        ai.register_outcome("d5", Outcome::MissedHit);
        ai.register_outcome("c4", Outcome::MissedHit);
        ai.register_outcome("c5", Outcome::ShipTouched);
        assert_eq!(ai.next_guess().as_deref(), Some("c6"));
    }
}

#[test]
fn test_exhausted_neighbors_fall_back_to_hunt() {
    for seed in 0..50 {
        let mut ai = targeting(seed);
        for token in ["b5", "d5", "c4", "c6"] {
            ai.register_outcome(token, Outcome::MissedHit);
        }
        ai.register_outcome("c5", Outcome::ShipTouched);
        let guess = ai.next_guess().unwrap();
        assert!(!ai.history().contains(&guess), "seed {seed}: repeated {guess}");
        assert!(decode(&guess, 10).is_some());
        assert_eq!(ai.mode(), TargetMode::Hunt);
    }
}

#[test]
fn test_hunt_never_repeats_and_covers_grid() {
    let mut ai = targeting(3);
    let mut seen = HashSet::new();
    for _ in 0..100 {
        let guess = ai.next_guess().unwrap();
        assert!(seen.insert(guess.clone()), "repeated {guess}");
        ai.register_outcome(&guess, Outcome::MissedHit);
    }
    assert_eq!(seen.len(), 100);
    assert_eq!(ai.next_guess(), None);
}

#[test]
fn test_neighbors_are_clipped_to_grid() {
    let corner = orthogonal_neighbors(Coordinate::new(0, 0), 10);
    assert_eq!(corner, vec![Coordinate::new(1, 0), Coordinate::new(0, 1)]);

    let edge = orthogonal_neighbors(Coordinate::new(9, 4), 10);
    assert_eq!(
        edge,
        vec![Coordinate::new(8, 4), Coordinate::new(9, 3), Coordinate::new(9, 5)]
    );

    assert_eq!(orthogonal_neighbors(Coordinate::new(5, 5), 10).len(), 4);
    assert!(orthogonal_neighbors(Coordinate::new(0, 0), 1).is_empty());
}

#[test]
fn test_invalid_touch_token_is_recorded_but_ignored() {
    let mut ai = targeting(1);
    ai.register_outcome("z99", Outcome::ShipTouched);
    assert_eq!(ai.history(), ["z99"]);
    assert_eq!(ai.mode(), TargetMode::Hunt);
}

#[test]
fn test_rejects_grid_sizes_without_tokens() {
    for size in [0, MAX_GRID_SIZE + 1, 40] {
        assert_eq!(
            Targeting::new(size, SmallRng::seed_from_u64(1)).err(),
            Some(GridError::InvalidGridSize(size))
        );
        assert!(AiPlayer::new(size, SmallRng::seed_from_u64(1)).is_err());
    }
}

#[test]
fn test_widest_grid_hunts_valid_tokens() {
    let mut ai = Targeting::new(MAX_GRID_SIZE, SmallRng::seed_from_u64(7)).unwrap();
    for _ in 0..MAX_GRID_SIZE * MAX_GRID_SIZE {
        let guess = ai.next_guess().unwrap();
        assert!(decode(&guess, MAX_GRID_SIZE).is_some(), "bad token {guess}");
        ai.register_outcome(&guess, Outcome::MissedHit);
    }
    assert_eq!(ai.next_guess(), None);
    assert!(ai.history().iter().any(|t| t.starts_with('z')));
}
