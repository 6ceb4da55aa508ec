//! Partitioning of the equation index space across workers

use serde::{Deserialize, Serialize};

/// Contiguous index range `[start, stop)` owned by one worker
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Partition {
    pub worker: usize,
    pub start: u64,
    pub stop: u64,
}

impl Partition {
    pub fn new(worker: usize, start: u64, stop: u64) -> Self {
        debug_assert!(start <= stop);
        Self { worker, start, stop }
    }

    pub fn len(&self) -> u64 {
        self.stop - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start >= self.stop
    }
}

/// Split `[0, num_equations)` into `workers` near-equal contiguous ranges
///
/// Sizes differ by at most one. When there are fewer equations than
/// workers, the surplus partitions are empty.
pub fn partition(num_equations: u64, workers: usize) -> Vec<Partition> {
    let boundary = |w: usize| -> u64 {
        // u128 keeps num_equations * w from overflowing
        (u128::from(num_equations) * w as u128 / workers as u128) as u64
    };

    (0..workers)
        .map(|w| Partition::new(w, boundary(w), boundary(w + 1)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_even_split() {
        let parts = partition(100, 4);
        assert_eq!(
            parts.iter().map(|p| (p.start, p.stop)).collect::<Vec<_>>(),
            vec![(0, 25), (25, 50), (50, 75), (75, 100)]
        );
    }

    #[test]
    fn test_uneven_split() {
        let parts = partition(10, 3);
        assert_eq!(parts[0].start, 0);
        assert_eq!(parts[2].stop, 10);
        for pair in parts.windows(2) {
            assert_eq!(pair[0].stop, pair[1].start);
        }
        let sizes: Vec<u64> = parts.iter().map(Partition::len).collect();
        assert!(sizes.iter().max().unwrap() - sizes.iter().min().unwrap() <= 1);
    }

    #[test]
    fn test_fewer_equations_than_workers() {
        let parts = partition(3, 16);
        assert_eq!(parts.len(), 16);
        assert_eq!(parts.iter().filter(|p| !p.is_empty()).count(), 3);
        assert_eq!(parts.iter().map(Partition::len).sum::<u64>(), 3);
    }

    #[test]
    fn test_huge_space_does_not_overflow() {
        let parts = partition(u64::MAX, 16);
        assert_eq!(parts.last().unwrap().stop, u64::MAX);
        assert_eq!(parts[1].start, u64::MAX / 16);
    }

    #[test]
    fn test_single_worker() {
        assert_eq!(partition(75, 1), vec![Partition::new(0, 0, 75)]);
    }
}
