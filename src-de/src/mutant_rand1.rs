use ndarray::{Array1, Array2};
use rand::Rng;

use crate::distinct_indices::distinct_indices;

/// rand/1 mutant `x_r1 + f * (x_r2 - x_r3)` built from `pop`.
///
/// Donors are mutually distinct but may include the target itself.
pub(crate) fn mutant_rand1<R: Rng + ?Sized>(pop: &Array2<f64>, f: f64, rng: &mut R) -> Array1<f64> {
    let idxs = distinct_indices(3, pop.nrows(), rng);
    let r1 = idxs[0];
    let r2 = idxs[1];
    let r3 = idxs[2];
    &pop.row(r1) + &((&pop.row(r2) - &pop.row(r3)) * f)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_zero_factor_copies_a_donor() {
        let pop = array![[1.0, 1.0], [2.0, 2.0], [3.0, 3.0], [4.0, 4.0]];
        let mut rng = StdRng::seed_from_u64(5);
        for _ in 0..50 {
            let v = mutant_rand1(&pop, 0.0, &mut rng);
            assert!(pop.rows().into_iter().any(|row| row == v.view()));
        }
    }

    #[test]
    fn test_identical_population_has_no_step() {
        let pop = Array2::from_elem((6, 3), 0.25);
        let mut rng = StdRng::seed_from_u64(9);
        let v = mutant_rand1(&pop, 0.9, &mut rng);
        assert_eq!(v, Array1::from_elem(3, 0.25));
    }

    #[test]
    fn test_mutant_is_on_a_donor_difference_line() {
        // 1-D population of distinct integers: v - x_r1 must be f * (x_r2 - x_r3)
        let pop = array![[0.0], [10.0], [100.0], [1000.0]];
        let mut rng = StdRng::seed_from_u64(21);
        let f = 0.5;
        for _ in 0..50 {
            let v = mutant_rand1(&pop, f, &mut rng)[0];
            let found = (0..4).any(|a| {
                (0..4).any(|b| {
                    (0..4).any(|c| {
                        a != b
                            && a != c
                            && b != c
                            && v == pop[(a, 0)] + f * (pop[(b, 0)] - pop[(c, 0)])
                    })
                })
            });
            assert!(found, "mutant {} is not a rand/1 combination", v);
        }
    }
}
