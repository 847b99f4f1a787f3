//! Selector → generated class name mapping.

use std::collections::BTreeSet;
use std::collections::hash_map::{HashMap, Iter};

#[cfg(feature = "json")]
use serde::{Deserialize, Serialize};

/// Map from original selector text to the class name generated for it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "json", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "json", serde(transparent))]
pub struct ClassMap(HashMap<String, String>);

impl ClassMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `generated` for `selector`, returning the previous entry.
    pub fn insert(
        &mut self,
        selector: impl Into<String>,
        generated: impl Into<String>,
    ) -> Option<String> {
        self.0.insert(selector.into(), generated.into())
    }

    /// Get the generated name for a selector, if one exists.
    pub fn get(&self, selector: &str) -> Option<&str> {
        self.0.get(selector).map(|s| s.as_str())
    }

    /// Whether some selector already maps to `generated`.
    pub fn contains_generated(&self, generated: &str) -> bool {
        self.0.values().any(|v| v == generated)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> Iter<'_, String, String> {
        self.0.iter()
    }

    /// Copy every entry of `other` into this map. `other` wins on collision.
    pub fn merge(&mut self, other: &ClassMap) {
        for (k, v) in &other.0 {
            self.0.insert(k.clone(), v.clone());
        }
    }

    /// All generated names, deduplicated and space-joined.
    ///
    /// Names are emitted in sorted order so the result is stable across runs.
    /// Empty names are skipped.
    ///
    /// ```
    /// use goss::ClassMap;
    ///
    /// let mut map = ClassMap::new();
    /// map.insert("x", "c1");
    /// map.insert("y", "c1");
    /// map.insert("z", "c2");
    /// assert_eq!(map.classes(), "c1 c2");
    /// ```
    pub fn classes(&self) -> String {
        let unique: BTreeSet<&str> = self
            .0
            .values()
            .map(|v| v.as_str())
            .filter(|v| !v.is_empty())
            .collect();
        unique.into_iter().collect::<Vec<_>>().join(" ")
    }
}

impl<'a> IntoIterator for &'a ClassMap {
    type Item = (&'a String, &'a String);
    type IntoIter = Iter<'a, String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for ClassMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}
