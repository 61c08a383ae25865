//! Facet Sets
//!
//! Small sorted string sets used for the brand and category filter criteria.

use std::string::ToString;

use smallvec::SmallVec;

/// A sorted, deduplicated set of facet values backed by `SmallVec<[String; 5]>`.
///
/// An empty set places no restriction on the facet it filters.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FacetSet {
    values: SmallVec<[String; 5]>,
}

impl FacetSet {
    /// Create an empty facet set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a facet set from string slices.
    pub fn from_strs(values: &[&str]) -> Self {
        let mut values: SmallVec<[String; 5]> =
            values.iter().map(ToString::to_string).collect();

        values.sort();
        values.dedup();

        Self { values }
    }

    /// Add a value to the set.
    pub fn insert(&mut self, value: &str) {
        let value_string = value.to_string();

        if let Err(pos) = self.values.binary_search(&value_string) {
            self.values.insert(pos, value_string);
        }
    }

    /// Remove a value from the set.
    pub fn remove(&mut self, value: &str) {
        let value_string = value.to_string();

        if let Ok(pos) = self.values.binary_search(&value_string) {
            self.values.remove(pos);
        }
    }

    /// Check whether the set contains a value.
    pub fn contains(&self, value: &str) -> bool {
        self.values.binary_search(&value.to_string()).is_ok()
    }

    /// Check if the set is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Get the number of values in the set.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Remove all values from the set.
    pub fn clear(&mut self) {
        self.values.clear();
    }

    /// Iterate over the values in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.values.iter().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_strs_sorts_and_deduplicates() {
        let set = FacetSet::from_strs(&["Road", "Electric", "Road", "Hybrid"]);

        assert_eq!(set.len(), 3);
        assert_eq!(set.iter().collect::<Vec<_>>(), ["Electric", "Hybrid", "Road"]);
    }

    #[test]
    fn contains_works() {
        let set = FacetSet::from_strs(&["Hero", "Bajaj"]);

        assert!(set.contains("Hero"));
        assert!(set.contains("Bajaj"));
        assert!(!set.contains("TVS"));
    }

    #[test]
    fn insert_and_remove_keep_sorted_order() {
        let mut set = FacetSet::new();

        set.insert("TVS");
        set.insert("Ather");
        set.insert("TVS");

        assert_eq!(set.iter().collect::<Vec<_>>(), ["Ather", "TVS"]);

        set.remove("Ather");

        assert_eq!(set.len(), 1);
        assert!(!set.contains("Ather"));
    }

    #[test]
    fn clear_empties_the_set() {
        let mut set = FacetSet::from_strs(&["Road"]);

        set.clear();

        assert!(set.is_empty());
        assert_eq!(set.len(), 0);
    }
}
