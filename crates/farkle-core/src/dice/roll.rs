//! Roll generation.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::{MAX_FACE, MIN_FACE};

/// Roll `count` six-sided dice using the given RNG.
///
/// Each face is drawn uniformly from 1..=6. A count of zero yields an
/// empty roll.
pub fn generate_roll<R: Rng + ?Sized>(count: usize, rng: &mut R) -> Vec<u32> {
    (0..count)
        .map(|_| rng.random_range(MIN_FACE..=MAX_FACE))
        .collect()
}

/// A dice source that owns its RNG.
///
/// Seeded rollers are reproducible, which is what tests and simulations
/// use; interactive play uses [`DiceRoller::from_os_entropy`].
#[derive(Debug, Clone)]
pub struct DiceRoller {
    rng: StdRng,
}

impl DiceRoller {
    /// A roller whose sequence is fully determined by `seed`.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// A roller seeded from operating-system entropy.
    pub fn from_os_entropy() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Roll `count` dice.
    pub fn roll(&mut self, count: usize) -> Vec<u32> {
        let dice = generate_roll(count, &mut self.rng);
        tracing::trace!(?dice, "rolled");
        dice
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roll_has_requested_length() {
        let mut rng = StdRng::seed_from_u64(42);
        assert_eq!(generate_roll(4, &mut rng).len(), 4);
        assert_eq!(generate_roll(6, &mut rng).len(), 6);
    }

    #[test]
    fn zero_dice_is_empty() {
        let mut rng = StdRng::seed_from_u64(42);
        assert!(generate_roll(0, &mut rng).is_empty());
    }

    #[test]
    fn faces_in_range() {
        let mut rng = StdRng::seed_from_u64(7);
        for count in 1..=6 {
            for _ in 0..100 {
                for face in generate_roll(count, &mut rng) {
                    assert!((1..=6).contains(&face));
                }
            }
        }
    }

    #[test]
    fn every_face_appears() {
        let mut roller = DiceRoller::seeded(3);
        let dice = roller.roll(600);
        for face in 1..=6 {
            assert!(dice.contains(&face), "face {face} never rolled");
        }
    }

    #[test]
    fn seeded_roller_is_deterministic() {
        let mut a = DiceRoller::seeded(99);
        let mut b = DiceRoller::seeded(99);
        for _ in 0..10 {
            assert_eq!(a.roll(6), b.roll(6));
        }
    }

    #[test]
    fn entropy_roller_rolls() {
        let mut roller = DiceRoller::from_os_entropy();
        assert_eq!(roller.roll(3).len(), 3);
    }
}
