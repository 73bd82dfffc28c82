#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
//! Board symmetries and fundamental-solution counting.
//!
//! The square has eight symmetries (four rotations, each optionally
//! mirrored). Two solutions related by one of them are the same *fundamental*
//! solution; for the classic 8-by-8 board the 92 solutions collapse to 12.
//! A placement's canonical form is the lexicographically smallest of its
//! eight images, so two placements are symmetric iff their canonical forms
//! are equal.

use crate::queens::board::{Col, Placement};
use rustc_hash::FxHashSet;

/// Rotates a complete placement a quarter turn clockwise.
///
/// A queen at `(row, col)` moves to `(col, n - 1 - row)`.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn rotate(placement: &Placement) -> Placement {
    let n = placement.len();
    let mut rotated: Vec<Col> = vec![0; n];

    for (row, col) in placement.iter().enumerate() {
        rotated[col as usize] = (n - 1 - row) as Col;
    }

    Placement::from(rotated)
}

/// Mirrors a placement left to right.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn mirror(placement: &Placement) -> Placement {
    let n = placement.len();
    placement.iter().map(|col| (n - 1) as Col - col).collect()
}

/// The canonical representative of a placement's symmetry class: the
/// lexicographically smallest of its eight images.
#[must_use]
pub fn canonical(placement: &Placement) -> Placement {
    let mut best = placement.clone();
    let mut current = placement.clone();

    for _ in 0..4 {
        let mirrored = mirror(&current);
        if current < best {
            best = current.clone();
        }
        if mirrored < best {
            best = mirrored;
        }
        current = rotate(&current);
    }

    best
}

/// Filters an enumeration down to one representative per symmetry class,
/// keeping the first solution seen from each class.
#[must_use]
pub fn fundamental(solutions: &[Placement]) -> Vec<Placement> {
    let mut seen = FxHashSet::default();
    solutions
        .iter()
        .filter(|solution| seen.insert(canonical(solution)))
        .cloned()
        .collect()
}

/// The number of solutions distinct under rotation and reflection.
#[must_use]
pub fn fundamental_count(solutions: &[Placement]) -> usize {
    fundamental(solutions).len()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::queens::solver::Queens;

    #[test]
    fn test_rotate_four_times_is_identity() {
        let placement = Placement::from(vec![1, 3, 0, 2]);
        let back = rotate(&rotate(&rotate(&rotate(&placement))));
        assert_eq!(back, placement);
    }

    #[test]
    fn test_mirror_twice_is_identity() {
        let placement = Placement::from(vec![1, 3, 0, 2]);
        assert_eq!(mirror(&mirror(&placement)), placement);
    }

    #[test]
    fn test_mirror_of_n4_solution() {
        let placement = Placement::from(vec![1, 3, 0, 2]);
        assert_eq!(mirror(&placement).as_slice(), &[2, 0, 3, 1]);
    }

    #[test]
    fn test_canonical_invariant_under_symmetry() {
        for solution in Queens::new(6).unwrap().solve().solutions {
            let class = canonical(&solution);
            assert_eq!(canonical(&rotate(&solution)), class);
            assert_eq!(canonical(&mirror(&solution)), class);
        }
    }

    #[test]
    fn test_fundamental_counts() {
        // Distinct-under-symmetry counts for n = 4..=8: 1, 2, 1, 6, 12.
        let expected = [(4, 1), (5, 2), (6, 1), (7, 6), (8, 12)];
        for (n, fundamental_solutions) in expected {
            let enumeration = Queens::new(n).unwrap().solve();
            assert_eq!(
                fundamental_count(&enumeration.solutions),
                fundamental_solutions,
                "fundamental count mismatch for n = {n}"
            );
        }
    }

    #[test]
    fn test_fundamental_keeps_first_representative() {
        let enumeration = Queens::new(4).unwrap().solve();
        let representatives = fundamental(&enumeration.solutions);
        assert_eq!(representatives, vec![enumeration.solutions[0].clone()]);
    }
}
