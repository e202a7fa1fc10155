use proptest::prelude::*;
use rand::{rngs::StdRng, Rng, SeedableRng};
use solobattleship::{
    board::{BoardSize, Coordinate, ManagerCell, VisibleCell},
    fleet::{FleetSetup, FLEET_SIZE},
    game::{GameState, Session},
    ships::Orientation,
    turn::TurnOutcome,
};

fn random_session(seed: u64, n: usize) -> Session {
    let mut rng = StdRng::seed_from_u64(seed);
    Session::new(&mut rng, BoardSize::new(n).unwrap()).unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn second_shot_is_always_already_hit(
        seed in any::<u64>(),
        n in BoardSize::MIN..=BoardSize::MAX,
        row in 0usize..26,
        col in 0usize..26,
    ) {
        let mut session = random_session(seed, n);
        let coord = Coordinate::new(row % n, col % n);
        let first = session.fire(coord).unwrap();
        let expected = match session.manager().get(coord) {
            Some(ManagerCell::Empty) => VisibleCell::Miss,
            _ => VisibleCell::Hit,
        };
        prop_assert!(first.revealed());
        prop_assert_eq!(session.visible().get(coord), Some(expected));

        let visible = session.visible().clone();
        let fleet = session.fleet().clone();
        for _ in 0..3 {
            prop_assert_eq!(session.fire(coord).unwrap(), TurnOutcome::AlreadyHit);
        }
        prop_assert_eq!(session.visible(), &visible);
        prop_assert_eq!(session.fleet(), &fleet);
    }

    #[test]
    fn off_board_shots_change_nothing(
        seed in any::<u64>(),
        n in BoardSize::MIN..=BoardSize::MAX,
        row in 0usize..64,
        extra in 0usize..64,
        row_off in any::<bool>(),
    ) {
        let mut session = random_session(seed, n);
        let coord = if row_off {
            Coordinate::new(n + extra, row % n)
        } else {
            Coordinate::new(row % n, n + extra)
        };
        let manager = session.manager().clone();
        let visible = session.visible().clone();
        prop_assert_eq!(session.fire(coord).unwrap(), TurnOutcome::InvalidMove);
        prop_assert_eq!(session.manager(), &manager);
        prop_assert_eq!(session.visible(), &visible);
        prop_assert_eq!(session.sunk_count(), 0);
    }

    #[test]
    fn health_drops_once_per_revealed_cell(seed in any::<u64>(), n in BoardSize::MIN..=12usize) {
        let mut session = random_session(seed, n);
        let mut rng = StdRng::seed_from_u64(seed ^ 0x5eed);
        for _ in 0..(n * n * 2) {
            if session.state() == GameState::Won {
                break;
            }
            let coord = Coordinate::new(rng.gen_range(0, n), rng.gen_range(0, n));
            let before: Vec<usize> = session.fleet().iter().map(|(_, s)| s.health()).collect();
            let outcome = session.fire(coord).unwrap();
            let after: Vec<usize> = session.fleet().iter().map(|(_, s)| s.health()).collect();
            for (i, (b, a)) in before.iter().zip(&after).enumerate() {
                let expected = match outcome.ship() {
                    Some(index) if index.get() == i => b - 1,
                    _ => *b,
                };
                prop_assert_eq!(*a, expected);
            }
            let sunk = session.fleet().sunk_count();
            prop_assert_eq!(session.sunk_count(), sunk);
            prop_assert_eq!(session.state() == GameState::Won, sunk == FLEET_SIZE);
        }
    }

    #[test]
    fn won_exactly_at_fifth_sink(seed in any::<u64>(), n in BoardSize::MIN..=BoardSize::MAX) {
        let mut session = random_session(seed, n);
        let mut rng = StdRng::seed_from_u64(seed.rotate_left(17));
        let mut targets: Vec<Coordinate> = session
            .fleet()
            .iter()
            .flat_map(|(_, ship)| ship.coords().collect::<Vec<_>>())
            .collect();
        // Shuffle so ships are finished in an arbitrary order.
        for i in (1..targets.len()).rev() {
            targets.swap(i, rng.gen_range(0, i + 1));
        }
        let total = targets.len();
        for (shot, coord) in targets.into_iter().enumerate() {
            prop_assert_eq!(session.state(), GameState::AwaitingMove);
            let outcome = session.fire(coord).unwrap();
            prop_assert!(matches!(outcome, TurnOutcome::Hit(_) | TurnOutcome::Sunk(_)));
            if shot + 1 < total {
                prop_assert!(session.sunk_count() < FLEET_SIZE);
            }
        }
        prop_assert_eq!(session.state(), GameState::Won);
        prop_assert_eq!(session.sunk_count(), FLEET_SIZE);
    }
}

/// A 5x5 board with the fleet stacked one ship per row, each starting at column 0.
fn stacked_session() -> Session {
    let mut setup = FleetSetup::new(BoardSize::new(5).unwrap()).unwrap();
    for row in 0..5 {
        setup
            .place(Coordinate::new(row, 0), Orientation::Horizontal)
            .unwrap();
    }
    Session::from_setup(setup).unwrap()
}

#[test]
fn two_cell_ship_hit_sunk_and_rehit() {
    let mut session = stacked_session();
    let battleship = session
        .fleet()
        .iter()
        .find(|(_, ship)| ship.len() == 2)
        .map(|(index, _)| index)
        .unwrap();
    let health = |session: &Session| session.fleet().get(battleship).unwrap().health();

    assert_eq!(
        session.fire(Coordinate::new(4, 0)),
        Ok(TurnOutcome::Hit(battleship))
    );
    assert_eq!(health(&session), 1);
    assert_eq!(session.sunk_count(), 0);

    assert_eq!(
        session.fire(Coordinate::new(4, 1)),
        Ok(TurnOutcome::Sunk(battleship))
    );
    assert_eq!(health(&session), 0);
    assert_eq!(session.sunk_count(), 1);

    assert_eq!(
        session.fire(Coordinate::new(4, 0)),
        Ok(TurnOutcome::AlreadyHit)
    );
    assert_eq!(health(&session), 0);
}

#[test]
fn row_five_is_off_a_five_board() {
    let mut session = stacked_session();
    assert_eq!(
        session.fire(Coordinate::new(5, 0)),
        Ok(TurnOutcome::InvalidMove)
    );
}

#[test]
fn open_water_is_a_miss_then_already_hit() {
    let mut session = stacked_session();
    let coord = Coordinate::new(2, 3);
    assert_eq!(session.manager().get(coord), Some(ManagerCell::Empty));
    assert_eq!(session.fire(coord), Ok(TurnOutcome::Miss));
    assert_eq!(session.visible().get(coord), Some(VisibleCell::Miss));
    assert_eq!(session.fire(coord), Ok(TurnOutcome::AlreadyHit));
    assert!(session.visible().render().contains("c _ _ _ o _"));
}
