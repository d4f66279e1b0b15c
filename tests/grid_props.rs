use proptest::prelude::*;
use rand::{rngs::SmallRng, seq::SliceRandom, SeedableRng};
use salvo::{Coordinate, Grid, Outcome, DEFAULT_GRID_SIZE};

fn random_grid(seed: u64) -> Grid {
    let mut rng = SmallRng::seed_from_u64(seed);
    Grid::new(DEFAULT_GRID_SIZE, &mut rng).unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn second_guess_is_already_played(
        seed in any::<u64>(),
        column in 0..DEFAULT_GRID_SIZE,
        row in 0..DEFAULT_GRID_SIZE,
    ) {
        let mut grid = random_grid(seed);
        let token = Coordinate::new(column, row).to_token();
        let first = grid.hit(&token);
        prop_assert!(matches!(
            first,
            Outcome::MissedHit | Outcome::ShipTouched | Outcome::ShipDestroyed
        ));
        prop_assert_eq!(
            first == Outcome::MissedHit,
            !grid.occupied().contains(Coordinate::new(column, row))
        );
        let history = grid.history().to_vec();
        prop_assert_eq!(grid.hit(&token), Outcome::AlreadyPlayed);
        prop_assert_eq!(grid.history(), &history[..]);
    }

    #[test]
    fn outcomes_follow_vessel_state(seed in any::<u64>(), order in any::<u64>()) {
        let mut grid = random_grid(seed);
        let mut rng = SmallRng::seed_from_u64(order);
        let mut cells: Vec<Coordinate> = (0..DEFAULT_GRID_SIZE)
            .flat_map(|row| (0..DEFAULT_GRID_SIZE).map(move |column| Coordinate::new(column, row)))
            .collect();
        cells.shuffle(&mut rng);

        let mut destroyed = 0;
        for cell in cells {
            let outcome = grid.hit(&cell.to_token());
            match outcome {
                Outcome::ShipDestroyed => destroyed += 1,
                Outcome::ShipAllDestroyed => {
                    destroyed += 1;
                    prop_assert_eq!(destroyed, 3);
                    prop_assert!(grid.all_destroyed());
                }
                Outcome::ShipTouched => prop_assert!(!grid.all_destroyed()),
                Outcome::MissedHit => {}
                other => prop_assert!(false, "unexpected outcome {}", other),
            }
            prop_assert_eq!(grid.remaining_vessel_count(), 3 - destroyed);
        }
        prop_assert!(grid.all_destroyed());
    }
}
