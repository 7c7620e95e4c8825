/// Number of cards in a hand.
pub const HAND_SIZE: usize = 5;

/// Binomial coefficient C(n, k); zero when k > n, `usize::MAX` when the
/// result does not fit.
pub fn choose(n: usize, k: usize) -> usize {
    if k > n {
        return 0;
    }
    let k = k.min(n - k);
    // C(n, i) * (n - i) is always divisible by i + 1
    (0..k)
        .try_fold(1u128, |acc, i| Some(acc.checked_mul((n - i) as u128)? / (i as u128 + 1)))
        .and_then(|c| usize::try_from(c).ok())
        .unwrap_or(usize::MAX)
}

/// Iterator over all C(n,5) ways of choosing 5 indices from `0..n`.
///
/// Index sets come out in lexicographic order. A fresh iterator always
/// replays the same sequence; `n < 5` yields nothing.
#[derive(Debug, Clone)]
pub struct Combinations {
    n: usize,
    indices: [usize; HAND_SIZE],
    remaining: usize,
}

impl Combinations {
    pub fn new(n: usize) -> Self {
        Self {
            n,
            indices: [0, 1, 2, 3, 4],
            remaining: choose(n, HAND_SIZE),
        }
    }
}

impl Iterator for Combinations {
    type Item = [usize; HAND_SIZE];

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;

        let result = self.indices;
        if self.remaining == 0 {
            return Some(result);
        }

        // Find the rightmost index that can be incremented
        let mut i = HAND_SIZE - 1;
        while self.indices[i] >= self.n - (HAND_SIZE - i) {
            i -= 1;
        }
        self.indices[i] += 1;

        // Reset all indices to the right
        for j in (i + 1)..HAND_SIZE {
            self.indices[j] = self.indices[j - 1] + 1;
        }

        Some(result)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Combinations {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_choose() {
        assert_eq!(choose(5, 5), 1);
        assert_eq!(choose(6, 5), 6);
        assert_eq!(choose(7, 5), 21);
        assert_eq!(choose(52, 5), 2_598_960);
        assert_eq!(choose(4, 5), 0);
    }

    #[test]
    fn test_choose_large_n() {
        assert_eq!(choose(100, 5), 75_287_520);
        assert_eq!(choose(100, 95), 75_287_520);
        assert_eq!(choose(100, 50), usize::MAX);
        assert_eq!(choose(usize::MAX, 5), usize::MAX);
        assert_eq!(Combinations::new(100).len(), 75_287_520);
    }

    #[cfg(target_pointer_width = "64")]
    #[test]
    fn test_choose_fits_despite_large_intermediate() {
        // the running product passes u64::MAX before the final division
        assert_eq!(choose(66, 33), 7_219_428_434_016_265_740);
        assert_eq!(choose(67, 33), 14_226_520_737_620_288_370);
        assert_eq!(choose(68, 34), usize::MAX);
    }

    #[test]
    fn test_five_yields_single_combination() {
        let combos: Vec<[usize; 5]> = Combinations::new(5).collect();
        assert_eq!(combos, vec![[0, 1, 2, 3, 4]]);
    }

    #[test]
    fn test_fewer_than_five_yields_nothing() {
        assert_eq!(Combinations::new(4).count(), 0);
        assert_eq!(Combinations::new(0).count(), 0);
    }

    #[test]
    fn test_generates_21_combinations() {
        let combos: Vec<[usize; 5]> = Combinations::new(7).collect();
        assert_eq!(combos.len(), 21);
        assert_eq!(combos.first(), Some(&[0, 1, 2, 3, 4]));
        assert_eq!(combos.last(), Some(&[2, 3, 4, 5, 6]));
    }

    #[test]
    fn test_counts_match_binomial() {
        for n in 5..=12 {
            assert_eq!(Combinations::new(n).count(), choose(n, 5), "n = {n}");
        }
    }

    #[test]
    fn test_all_combinations_valid_and_unique() {
        let mut seen = HashSet::new();
        for combo in Combinations::new(9) {
            assert!(combo.iter().all(|&i| i < 9));
            for i in 1..5 {
                assert!(combo[i] > combo[i - 1]);
            }
            assert!(seen.insert(combo), "Duplicate combination found: {combo:?}");
        }
        assert_eq!(seen.len(), 126);
    }

    #[test]
    fn test_lexicographic_order() {
        let combos: Vec<[usize; 5]> = Combinations::new(8).collect();
        for pair in combos.windows(2) {
            assert!(
                pair[0] < pair[1],
                "Not in lexicographic order: {:?} then {:?}",
                pair[0],
                pair[1]
            );
        }
    }

    #[test]
    fn test_len_tracks_remaining() {
        let mut iter = Combinations::new(6);
        assert_eq!(iter.len(), 6);
        iter.next();
        assert_eq!(iter.len(), 5);
        for _ in 0..5 {
            assert!(iter.next().is_some());
        }
        assert!(iter.next().is_none());
        assert!(iter.next().is_none());
    }
}
