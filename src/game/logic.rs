//! Single-trial engine for the three-door game.
//!
//! Every function takes the random source as a parameter so runs can be
//! replayed from a seed.

use super::types::{Door, GameRecord, Strategy, DOORS};
use rand::seq::SliceRandom;
use rand::Rng;

/// Picks a door uniformly at random.
pub fn random_door<R: Rng + ?Sized>(rng: &mut R) -> Door {
    DOORS[rng.gen_range(0..DOORS.len())]
}

/// Door the host reveals: never the prize and never the player's pick.
///
/// When the player picked the prize the host has two goats to choose from and
/// picks one uniformly; otherwise exactly one door qualifies.
pub fn host_opens<R: Rng + ?Sized>(prize: Door, choice: Door, rng: &mut R) -> Door {
    let candidates: Vec<Door> = DOORS
        .iter()
        .copied()
        .filter(|&door| door != prize && door != choice)
        .collect();

    candidates
        .choose(rng)
        .copied()
        .unwrap_or_else(|| unreachable!("three doors always leave the host a goat to reveal"))
}

/// The only door that is neither the current pick nor the opened one.
pub fn switch_door(choice: Door, opened: Door) -> Door {
    debug_assert_ne!(choice, opened, "host never opens the player's door");

    DOORS
        .iter()
        .copied()
        .find(|&door| door != choice && door != opened)
        .unwrap_or_else(|| unreachable!("a closed door always remains after the reveal"))
}

/// Plays the rest of a game whose prize and first pick are already fixed.
pub fn play_from<R: Rng + ?Sized>(
    prize: Door,
    initial_choice: Door,
    strategy: Strategy,
    rng: &mut R,
) -> GameRecord {
    let opened = host_opens(prize, initial_choice, rng);

    let final_choice = if strategy.switches() {
        switch_door(initial_choice, opened)
    } else {
        initial_choice
    };

    GameRecord {
        prize,
        initial_choice,
        opened,
        final_choice,
        strategy,
    }
}

/// Plays one full game: hide the prize, pick a door, reveal a goat, then
/// stay or switch.
pub fn play_trial<R: Rng + ?Sized>(strategy: Strategy, rng: &mut R) -> GameRecord {
    let prize = random_door(rng);
    let initial_choice = random_door(rng);
    play_from(prize, initial_choice, strategy, rng)
}

/// Plays one game and reports whether the player drove off with the car.
pub fn simulate_game<R: Rng + ?Sized>(switch: bool, rng: &mut R) -> bool {
    play_trial(Strategy::from_switch(switch), rng).won()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn door(id: u8) -> Door {
        Door::new(id).unwrap()
    }

    #[test]
    fn test_host_opens_only_goat_when_player_missed() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        for _ in 0..50 {
            assert_eq!(host_opens(door(0), door(1), &mut rng), door(2));
            assert_eq!(host_opens(door(2), door(0), &mut rng), door(1));
        }
    }

    #[test]
    fn test_host_picks_both_goats_when_player_hit() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let mut seen = [false; 3];

        for _ in 0..200 {
            let opened = host_opens(door(0), door(0), &mut rng);
            assert_ne!(opened, door(0));
            seen[opened.id() as usize] = true;
        }

        assert!(seen[1] && seen[2], "host should reveal either goat");
    }

    #[test]
    fn test_switch_door_is_remaining_door() {
        assert_eq!(switch_door(door(0), door(1)), door(2));
        assert_eq!(switch_door(door(1), door(2)), door(0));
        assert_eq!(switch_door(door(2), door(0)), door(1));
    }

    #[test]
    fn test_stay_keeps_losing_pick() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let record = play_from(door(0), door(1), Strategy::Stay, &mut rng);

        assert_eq!(record.opened, door(2));
        assert_eq!(record.final_choice, door(1));
        assert!(!record.won());
    }

    #[test]
    fn test_switch_away_from_prize_loses() {
        let mut rng = ChaCha8Rng::seed_from_u64(4);
        for _ in 0..20 {
            let record = play_from(door(0), door(0), Strategy::Switch, &mut rng);

            assert!(record.opened == door(1) || record.opened == door(2));
            assert_ne!(record.final_choice, record.opened);
            assert_ne!(record.final_choice, door(0));
            assert!(!record.won());
        }
    }

    #[test]
    fn test_switch_to_prize_wins() {
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let record = play_from(door(0), door(1), Strategy::Switch, &mut rng);

        assert_eq!(record.opened, door(2));
        assert_eq!(record.final_choice, door(0));
        assert!(record.won());
    }

    #[test]
    fn test_play_trial_upholds_host_rules() {
        let mut rng = ChaCha8Rng::seed_from_u64(99);
        for strategy in Strategy::all() {
            for _ in 0..1000 {
                let record = play_trial(strategy, &mut rng);
                assert_ne!(record.opened, record.prize);
                assert_ne!(record.opened, record.initial_choice);
                assert_ne!(record.final_choice, record.opened);
                if strategy == Strategy::Stay {
                    assert_eq!(record.final_choice, record.initial_choice);
                } else {
                    assert_ne!(record.final_choice, record.initial_choice);
                }
            }
        }
    }

    #[test]
    fn test_switch_wins_exactly_when_first_pick_missed() {
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        for _ in 0..500 {
            let record = play_trial(Strategy::Switch, &mut rng);
            assert_eq!(record.won(), record.initial_choice != record.prize);
        }
    }

    #[test]
    fn test_simulate_game_is_deterministic_for_seed() {
        let mut a = ChaCha8Rng::seed_from_u64(2024);
        let mut b = ChaCha8Rng::seed_from_u64(2024);

        let first: Vec<bool> = (0..100).map(|_| simulate_game(true, &mut a)).collect();
        let second: Vec<bool> = (0..100).map(|_| simulate_game(true, &mut b)).collect();

        assert_eq!(first, second);
    }
}
