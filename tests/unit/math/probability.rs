//! Tests for count-weighted and uniform index draws

#[cfg(test)]
mod tests {
    use rand::{SeedableRng, rngs::StdRng};
    use remixel::math::probability::{uniform_index, weighted_index};

    // Tests zero-count entries are never drawn
    // Verified by adding one to every count
    #[test]
    fn test_weighted_skips_zero_counts() {
        let mut rng = StdRng::seed_from_u64(1);

        for _ in 0..200 {
            assert_eq!(weighted_index(&[0, 5, 0], &mut rng), Some(1));
        }
    }

    // Tests empty or all-zero counts have no draw
    // Verified by returning the last index as a fallback
    #[test]
    fn test_weighted_without_mass() {
        let mut rng = StdRng::seed_from_u64(1);

        assert_eq!(weighted_index(&[], &mut rng), None);
        assert_eq!(weighted_index(&[0, 0], &mut rng), None);
    }

    // Tests draws follow the counts
    // Verified by drawing uniformly over indices
    #[test]
    fn test_weighted_proportions() {
        let mut rng = StdRng::seed_from_u64(42);
        let draws: u32 = 8000;
        let ones = (0..draws)
            .filter(|_| weighted_index(&[1, 3], &mut rng) == Some(1))
            .count();

        let ratio = ones as f64 / f64::from(draws);
        assert!((ratio - 0.75).abs() < 0.03, "ratio was {ratio}");
    }

    // Tests uniform draws stay in range and reach every index
    // Verified by drawing from 0..len - 1
    #[test]
    fn test_uniform_range() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut seen = [false; 5];

        for _ in 0..500 {
            let index = uniform_index(5, &mut rng);
            assert!(matches!(index, Some(i) if i < 5));
            if let Some(i) = index {
                seen[i] = true;
            }
        }
        assert!(seen.iter().all(|&hit| hit));
        assert_eq!(uniform_index(0, &mut rng), None);
    }
}
