//! Lazy enumeration of `k`-element subsets in lexicographic index order.

use std::iter::FusedIterator;

/// Iterator over every `k`-element subset of `0..n`, each yielded as an
/// ascending index vector.
///
/// Subsets come out in lexicographic order of their index tuples, so
/// `[0, 1]` precedes `[0, 2]` which precedes `[1, 2]`. Cloning the iterator
/// restarts nothing: the clone continues from the same position.
#[derive(Clone, Debug)]
pub struct Combinations {
    n: usize,
    k: usize,
    indices: Vec<usize>,
    started: bool,
    exhausted: bool,
}

impl Combinations {
    /// Enumerate subsets of size `k` drawn from `0..n`. Yields nothing when
    /// `k > n`.
    pub fn new(n: usize, k: usize) -> Self {
        Self {
            n,
            k,
            indices: (0..k).collect(),
            started: false,
            exhausted: k > n,
        }
    }

    pub fn n(&self) -> usize {
        self.n
    }

    pub fn k(&self) -> usize {
        self.k
    }

    /// Total number of subsets this enumerator produces from the start.
    pub fn total(&self) -> u128 {
        binomial(self.n, self.k)
    }

    /// Advance `indices` to the next tuple, returning `false` once the last
    /// tuple `[n-k, .., n-1]` has been passed.
    fn advance(&mut self) -> bool {
        let (n, k) = (self.n, self.k);
        let Some(pivot) = (0..k).rev().find(|&i| self.indices[i] < n - k + i)
        else {
            return false;
        };
        self.indices[pivot] += 1;
        for i in pivot + 1..k {
            self.indices[i] = self.indices[i - 1] + 1;
        }
        true
    }
}

impl Iterator for Combinations {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted {
            return None;
        }
        if !self.started {
            self.started = true;
        } else if !self.advance() {
            self.exhausted = true;
            return None;
        }
        Some(self.indices.clone())
    }
}

impl FusedIterator for Combinations {}

/// Every `k`-element subset of `items`, preserving relative order, in
/// lexicographic order of the selected positions. `items` is only borrowed.
pub fn combinations<T: Clone>(
    items: &[T],
    k: usize,
) -> impl Iterator<Item = Vec<T>> + '_ {
    Combinations::new(items.len(), k)
        .map(move |indices| indices.iter().map(|&i| items[i].clone()).collect())
}

/// `C(n, k)`, saturating at `u128::MAX`.
pub fn binomial(n: usize, k: usize) -> u128 {
    if k > n {
        return 0;
    }
    let k = k.min(n - k);
    (0..k).fold(1u128, |acc, i| {
        // acc * (n - i) is always divisible by (i + 1) at this point.
        acc.saturating_mul((n - i) as u128) / (i as u128 + 1)
    })
}
