//! Fixed neighbor offset tables and the unbiased shuffle used for tie-breaking.

use itertools::iproduct;
use rand::seq::SliceRandom;
use rand::Rng;

use super::vectors::XyzOffset;

/// Straight down
pub const DOWN: XyzOffset = XyzOffset::new(0, -1, 0);

/// Straight up
pub const UP: XyzOffset = XyzOffset::new(0, 1, 0);

/// The four axis-aligned horizontal neighbors
pub const HORIZONTAL_CARDINALS: [XyzOffset; 4] = [
    XyzOffset::new(-1, 0, 0),
    XyzOffset::new(1, 0, 0),
    XyzOffset::new(0, 0, -1),
    XyzOffset::new(0, 0, 1),
];

/// The eight cells one layer down that are not directly below
/// Axis diagonals first, then corner diagonals
pub const DOWN_DIAGONALS: [XyzOffset; 8] = [
    XyzOffset::new(-1, -1, 0),
    XyzOffset::new(1, -1, 0),
    XyzOffset::new(0, -1, -1),
    XyzOffset::new(0, -1, 1),
    XyzOffset::new(-1, -1, -1),
    XyzOffset::new(-1, -1, 1),
    XyzOffset::new(1, -1, -1),
    XyzOffset::new(1, -1, 1),
];

/// The full 26 cell Moore neighborhood, ordered by dx, then dy, then dz
pub fn moore_neighborhood() -> Vec<XyzOffset> {
    iproduct!(-1..=1, -1..=1, -1..=1)
        .map(|(dx, dy, dz)| XyzOffset::new(dx, dy, dz))
        .filter(|offset| !offset.is_zero())
        .collect()
}

/// In place uniform permutation (Fisher-Yates)
pub fn shuffle_offsets<R: Rng + ?Sized>(offsets: &mut [XyzOffset], rng: &mut R) {
    offsets.shuffle(rng);
}

/// The horizontal cardinals in a fresh random order
pub fn shuffled_cardinals<R: Rng + ?Sized>(rng: &mut R) -> [XyzOffset; 4] {
    let mut out = HORIZONTAL_CARDINALS;
    shuffle_offsets(&mut out, rng);
    out
}

/// Draws up to `count` of the down diagonals without replacement
pub fn sample_down_diagonals<R: Rng + ?Sized>(rng: &mut R, count: usize) -> Vec<XyzOffset> {
    DOWN_DIAGONALS
        .choose_multiple(rng, count)
        .copied()
        .collect()
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    #[test]
    fn test_moore_neighborhood_has_26_unique() {
        let neighbors = moore_neighborhood();
        assert_eq!(neighbors.len(), 26);
        let unique: HashSet<_> = neighbors.iter().collect();
        assert_eq!(unique.len(), 26);
        assert!(neighbors.iter().all(|o| !o.is_zero()));
    }

    #[test]
    fn test_down_diagonals_are_all_below_and_not_straight_down() {
        for offset in DOWN_DIAGONALS {
            assert_eq!(offset.dy, -1);
            assert_ne!(offset, DOWN);
        }
        let unique: HashSet<_> = DOWN_DIAGONALS.iter().collect();
        assert_eq!(unique.len(), 8);
    }

    #[test]
    fn test_shuffle_is_a_permutation() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..32 {
            let shuffled = shuffled_cardinals(&mut rng);
            let before: HashSet<_> = HORIZONTAL_CARDINALS.iter().collect();
            let after: HashSet<_> = shuffled.iter().collect();
            assert_eq!(before, after);
        }
    }

    /// Every ordering position should see every direction eventually, otherwise
    /// the tie-breaking would favour one side
    #[test]
    fn test_shuffle_has_no_fixed_first_choice() {
        let mut rng = StdRng::seed_from_u64(11);
        let firsts: HashSet<_> = (0..200).map(|_| shuffled_cardinals(&mut rng)[0]).collect();
        assert_eq!(firsts.len(), 4);
    }

    #[test]
    fn test_sample_without_replacement() {
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..32 {
            let sample = sample_down_diagonals(&mut rng, 4);
            assert_eq!(sample.len(), 4);
            let unique: HashSet<_> = sample.iter().collect();
            assert_eq!(unique.len(), 4);
        }
        assert_eq!(sample_down_diagonals(&mut rng, 20).len(), 8);
    }

    #[test]
    fn test_seeded_shuffle_is_reproducible() {
        let a = shuffled_cardinals(&mut StdRng::seed_from_u64(99));
        let b = shuffled_cardinals(&mut StdRng::seed_from_u64(99));
        assert_eq!(a, b);
    }
}
