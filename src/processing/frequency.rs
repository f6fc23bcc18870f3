//! Frequency statistics: mode and value counts.
//!
//! Both are order-sensitive on ties: among values with the same count, the one that appears
//! first in the input wins (for [`mode`]) or is listed first (for [`value_counts`]).

use std::collections::HashMap;
use std::hash::Hash;

struct Tally<K> {
    counts: HashMap<K, (usize, usize)>,
}

impl<K: Eq + Hash> Tally<K> {
    fn of(values: impl IntoIterator<Item = K>) -> Self {
        let mut counts: HashMap<K, (usize, usize)> = HashMap::new();
        for (position, value) in values.into_iter().enumerate() {
            counts.entry(value).or_insert((0, position)).0 += 1;
        }
        Self { counts }
    }

    /// (value, count) ordered by count descending then first occurrence.
    fn ranked(self) -> Vec<(K, usize)> {
        let mut entries: Vec<(K, usize, usize)> = self
            .counts
            .into_iter()
            .map(|(value, (count, first))| (value, count, first))
            .collect();
        entries.sort_by(|a, b| b.1.cmp(&a.1).then(a.2.cmp(&b.2)));
        entries.into_iter().map(|(value, count, _)| (value, count)).collect()
    }
}

/// Most frequent value, or `None` for empty input.
pub fn mode<K: Eq + Hash>(values: impl IntoIterator<Item = K>) -> Option<K> {
    Tally::of(values).ranked().into_iter().next().map(|(value, _)| value)
}

/// Count of each distinct value, most frequent first.
pub fn value_counts<K: Eq + Hash>(values: impl IntoIterator<Item = K>) -> Vec<(K, usize)> {
    Tally::of(values).ranked()
}
