use rand::Rng;

/// Draw an index with probability proportional to its count
///
/// Walks the cumulative distribution with a single uniform draw. Returns
/// `None` when the counts sum to zero.
pub fn weighted_index<R: Rng>(counts: &[u32], rng: &mut R) -> Option<usize> {
    let total: u64 = counts.iter().map(|&count| u64::from(count)).sum();
    if total == 0 {
        return None;
    }

    let mut remaining = rng.random_range(0..total);
    for (index, &count) in counts.iter().enumerate() {
        let count = u64::from(count);
        if remaining < count {
            return Some(index);
        }
        remaining -= count;
    }
    None
}

/// Draw an index uniformly from `0..len`, or `None` when `len` is zero
pub fn uniform_index<R: Rng>(len: usize, rng: &mut R) -> Option<usize> {
    (len > 0).then(|| rng.random_range(0..len))
}
