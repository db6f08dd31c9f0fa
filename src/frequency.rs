use std::collections::HashMap;

use crate::symbol::Symbol;


/// Occurrence counts of every distinct symbol, in order of first appearance.
///
/// The order is what the tree builder breaks weight ties with,
/// so it must not depend on hashing.
#[derive(Debug, Clone)]
pub struct FrequencyTable<T> {

    entries: Vec<(T, usize)>,
    index: HashMap<T, usize>,
    total: usize

}

impl<T> FrequencyTable<T>
where
    T: Symbol
{

    pub fn len(&self) -> usize {
        self.entries.len()
    }


    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }


    /// Total number of symbols that were analyzed
    pub const fn total(&self) -> usize {
        self.total
    }


    pub fn iter(&self) -> impl Iterator<Item = &(T, usize)> {
        self.entries.iter()
    }


    pub fn count(&self, value: &T) -> Option<usize> {
        self.index.get(value)
            .map(|&i| self.entries[i].1)
    }


    /// The count of `value` normalized by the total. Only used for reporting.
    pub fn probability(&self, value: &T) -> Option<f64> {
        self.count(value)
            .map(|count| count as f64 / self.total as f64)
    }


    /// Shannon entropy in bits per symbol, the lower bound of the average code length.
    pub fn entropy(&self) -> f64 {
        self.entries.iter()
            .filter_map(|(value, _)| self.probability(value))
            .map(|p| -p * p.log2())
            .sum()
    }

}


pub fn analyze<T>(data: impl IntoIterator<Item = T>) -> FrequencyTable<T>
where
    T: Symbol
{

    let mut entries: Vec<(T, usize)> = Vec::new();
    let mut index: HashMap<T, usize> = HashMap::new();
    let mut total = 0;

    for value in data {

        total += 1;

        if let Some(&i) = index.get(&value) {
            entries[i].1 += 1;
        } else {
            index.insert(value.clone(), entries.len());
            entries.push((value, 1));
        }
    }

    FrequencyTable {
        entries,
        index,
        total
    }
}
