//! Evidence mappings.
//!
//! An [`Evidence`] fixes a truth value for a subset of the network's variables.
//! Inference never mutates a caller's mapping: extending evidence goes through
//! [`Evidence::with`], which returns an updated copy.

use std::hash::Hash;

use rustc_hash::FxHashMap;

/// Assignment of truth values to a subset of variables, keyed by identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(
        transparent,
        bound(
            serialize = "V: serde::Serialize",
            deserialize = "V: serde::Deserialize<'de> + Eq + Hash"
        )
    )
)]
pub struct Evidence<V: Eq + Hash> {
    values: FxHashMap<V, bool>,
}

impl<V: Eq + Hash> Default for Evidence<V> {
    fn default() -> Self {
        Self {
            values: FxHashMap::default(),
        }
    }
}

impl<V: Eq + Hash> Evidence<V> {
    /// Creates an empty mapping.
    pub fn new() -> Self {
        Self::default()
    }

    /// Value fixed for `variable`, if any.
    pub fn get(&self, variable: &V) -> Option<bool> {
        self.values.get(variable).copied()
    }

    pub fn contains(&self, variable: &V) -> bool {
        self.values.contains_key(variable)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Fixes `variable` to `value`, returning the previous value if one was set.
    pub fn insert(&mut self, variable: V, value: bool) -> Option<bool> {
        self.values.insert(variable, value)
    }

    pub fn remove(&mut self, variable: &V) -> Option<bool> {
        self.values.remove(variable)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&V, bool)> {
        self.values.iter().map(|(k, v)| (k, *v))
    }
}

impl<V: Eq + Hash + Clone> Evidence<V> {
    /// Returns a copy of this mapping with `variable` fixed to `value`.
    ///
    /// An existing entry for `variable` is replaced in the copy; `self` is untouched.
    #[must_use]
    pub fn with(&self, variable: V, value: bool) -> Self {
        let mut extended = self.clone();
        extended.insert(variable, value);
        extended
    }
}

impl<V, K> FromIterator<(K, bool)> for Evidence<V>
where
    V: Eq + Hash,
    K: Into<V>,
{
    fn from_iter<I: IntoIterator<Item = (K, bool)>>(iter: I) -> Self {
        let mut evidence = Evidence::new();
        evidence.extend(iter);
        evidence
    }
}

impl<V, K> Extend<(K, bool)> for Evidence<V>
where
    V: Eq + Hash,
    K: Into<V>,
{
    fn extend<I: IntoIterator<Item = (K, bool)>>(&mut self, iter: I) {
        for (variable, value) in iter {
            self.insert(variable.into(), value);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;

    #[test]
    fn with_leaves_receiver_untouched() {
        let base: Evidence<Arc<str>> = [("JohnCalls", true)].into_iter().collect();
        let extended = base.with(Arc::from("MaryCalls"), false);

        assert_eq!(base.len(), 1);
        assert!(!base.contains(&Arc::from("MaryCalls")));
        assert_eq!(extended.len(), 2);
        assert_eq!(extended.get(&Arc::from("MaryCalls")), Some(false));
        assert_eq!(extended.get(&Arc::from("JohnCalls")), Some(true));
    }

    #[test]
    fn with_replaces_existing_entry_in_copy() {
        let base: Evidence<String> = [("Alarm", true)].into_iter().collect();
        let flipped = base.with("Alarm".to_string(), false);
        assert_eq!(base.get(&"Alarm".to_string()), Some(true));
        assert_eq!(flipped.get(&"Alarm".to_string()), Some(false));
        assert_eq!(flipped.len(), 1);
        let entries: Vec<(&String, bool)> = flipped.iter().collect();
        assert_eq!(entries, [(&"Alarm".to_string(), false)]);
    }

    #[test]
    fn insert_reports_previous_value() {
        let mut evidence: Evidence<&str> = Evidence::new();
        assert!(evidence.is_empty());
        assert_eq!(evidence.insert("Burglary", true), None);
        assert_eq!(evidence.insert("Burglary", false), Some(true));
        assert_eq!(evidence.len(), 1);
        assert_eq!(evidence.remove(&"Burglary"), Some(false));
        assert_eq!(evidence.remove(&"Burglary"), None);
        assert!(evidence.is_empty());
    }

    #[test]
    fn later_pairs_win_when_collecting() {
        let evidence: Evidence<&str> = [("Alarm", true), ("Alarm", false)].into_iter().collect();
        assert_eq!(evidence.get(&"Alarm"), Some(false));
        assert_eq!(evidence.len(), 1);
    }
}
