//! Relative frequencies of categorical values.

use std::hash::Hash;

use rustc_hash::FxHashMap;

/// A single tabulated category.
#[derive(Debug, Clone, PartialEq)]
pub struct Frequency<K> {
    pub key: K,
    pub count: usize,
    pub percent: f64,
}

/// Counts occurrences of each distinct key, remembering the order in which keys were first seen.
#[derive(Debug, Clone)]
pub struct Tally<K> {
    counts: Vec<(K, usize)>,
    index: FxHashMap<K, usize>,
    total: usize,
}
impl<K: Eq + Hash + Clone> Tally<K> {
    pub fn add(&mut self, key: K) {
        self.total += 1;
        match self.index.get(&key) {
            Some(&slot) => self.counts[slot].1 += 1,
            None => {
                self.index.insert(key.clone(), self.counts.len());
                self.counts.push((key, 1));
            }
        }
    }

    /// Relative frequencies, expressed as percentages, ordered by descending count. Ties retain
    /// first-seen order. An empty tally yields an empty vector.
    pub fn relative(&self) -> Vec<Frequency<K>> {
        let mut frequencies = self
            .counts
            .iter()
            .map(|(key, count)| Frequency {
                key: key.clone(),
                count: *count,
                percent: *count as f64 / self.total as f64 * 100.0,
            })
            .collect::<Vec<_>>();
        // stable sort keeps first-seen order among equal counts
        frequencies.sort_by(|a, b| b.count.cmp(&a.count));
        frequencies
    }
}

impl<K> Default for Tally<K> {
    fn default() -> Self {
        Self {
            counts: vec![],
            index: FxHashMap::default(),
            total: 0,
        }
    }
}

impl<K: Eq + Hash + Clone> FromIterator<K> for Tally<K> {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut tally = Tally::default();
        for key in iter {
            tally.add(key);
        }
        tally
    }
}
