//! Six-sided dice: face validation, face tallies, and roll generation.
//!
//! Farkle is played with six standard d6. Faces are plain `u32` values so
//! that out-of-range input can reach the scorer and degrade to zero there
//! instead of being rejected by the type system.

pub mod roll;

pub use roll::{DiceRoller, generate_roll};

/// Number of dice a player rolls at the start of a turn (and after hot dice).
pub const DICE_PER_TURN: usize = 6;

/// Lowest face on a die.
pub const MIN_FACE: u32 = 1;

/// Highest face on a die.
pub const MAX_FACE: u32 = 6;

/// Returns true if `face` is a face of a six-sided die.
pub fn is_valid_face(face: u32) -> bool {
    (MIN_FACE..=MAX_FACE).contains(&face)
}

/// Returns true if `dice` is a scoreable roll: one to six dice, all valid faces.
pub fn is_valid_roll(dice: &[u32]) -> bool {
    (1..=DICE_PER_TURN).contains(&dice.len()) && dice.iter().all(|&f| is_valid_face(f))
}

/// Per-face die counts for a set of dice.
///
/// Index 0 is unused so that `counts[face]` reads naturally. Faces outside
/// 1..=6 are not counted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FaceCounts {
    counts: [u8; 7],
}

impl FaceCounts {
    /// Tally the valid faces in `dice`.
    pub fn from_dice(dice: &[u32]) -> Self {
        let mut counts = [0u8; 7];
        for &face in dice {
            if is_valid_face(face) {
                counts[face as usize] = counts[face as usize].saturating_add(1);
            }
        }
        Self { counts }
    }

    /// How many dice show `face`.
    pub fn get(&self, face: u32) -> u8 {
        if is_valid_face(face) {
            self.counts[face as usize]
        } else {
            0
        }
    }

    /// Remove up to `n` dice showing `face`, returning how many were removed.
    pub fn take(&mut self, face: u32, n: u8) -> u8 {
        if !is_valid_face(face) {
            return 0;
        }
        let slot = &mut self.counts[face as usize];
        let taken = (*slot).min(n);
        *slot -= taken;
        taken
    }

    /// Faces that still have at least one die, ascending.
    pub fn faces(&self) -> impl Iterator<Item = u32> + '_ {
        (MIN_FACE..=MAX_FACE).filter(|&f| self.counts[f as usize] > 0)
    }

    /// Number of distinct faces present.
    pub fn distinct(&self) -> usize {
        self.faces().count()
    }

    /// Total number of dice counted.
    pub fn total(&self) -> usize {
        self.counts.iter().map(|&c| c as usize).sum()
    }

    /// Returns true if every die in `other` is also present here (multiset inclusion).
    pub fn contains(&self, other: &FaceCounts) -> bool {
        (MIN_FACE..=MAX_FACE).all(|f| other.get(f) <= self.get(f))
    }

    /// Expand the remaining counts back into dice values, ascending by face.
    pub fn to_dice(&self) -> Vec<u32> {
        self.faces()
            .flat_map(|f| std::iter::repeat_n(f, self.counts[f as usize] as usize))
            .collect()
    }
}

/// Returns true if `meld` is a multiset subset of `roll` by face value.
///
/// Invalid faces in `meld` make it a non-subset.
pub fn is_sub_multiset(meld: &[u32], roll: &[u32]) -> bool {
    if meld.iter().any(|&f| !is_valid_face(f)) {
        return false;
    }
    FaceCounts::from_dice(roll).contains(&FaceCounts::from_dice(meld))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_faces() {
        assert!(is_valid_face(1));
        assert!(is_valid_face(6));
        assert!(!is_valid_face(0));
        assert!(!is_valid_face(7));
    }

    #[test]
    fn valid_rolls() {
        assert!(is_valid_roll(&[1]));
        assert!(is_valid_roll(&[1, 2, 3, 4, 5, 6]));
        assert!(!is_valid_roll(&[]));
        assert!(!is_valid_roll(&[1, 2, 3, 4, 5, 6, 1]));
        assert!(!is_valid_roll(&[7, 8, 9]));
    }

    #[test]
    fn counts_and_take() {
        let mut counts = FaceCounts::from_dice(&[2, 2, 2, 5]);
        assert_eq!(counts.get(2), 3);
        assert_eq!(counts.get(5), 1);
        assert_eq!(counts.distinct(), 2);
        assert_eq!(counts.total(), 4);

        assert_eq!(counts.take(2, 2), 2);
        assert_eq!(counts.get(2), 1);
        assert_eq!(counts.take(2, 5), 1);
        assert_eq!(counts.get(2), 0);
        assert_eq!(counts.to_dice(), vec![5]);
    }

    #[test]
    fn counts_ignore_invalid_faces() {
        let counts = FaceCounts::from_dice(&[0, 7, 3]);
        assert_eq!(counts.total(), 1);
        assert_eq!(counts.get(7), 0);
    }

    #[test]
    fn sub_multiset() {
        assert!(is_sub_multiset(&[1, 5], &[1, 2, 3, 4, 5, 6]));
        assert!(is_sub_multiset(&[], &[2, 3]));
        assert!(is_sub_multiset(&[5, 5, 5], &[2, 5, 5, 4, 5, 6]));
        assert!(!is_sub_multiset(&[1, 1], &[1, 2, 3]));
        assert!(!is_sub_multiset(&[9], &[9]));
    }
}
