//! Ordered map type for object values.
//!
//! This module provides [`JsMap`], a wrapper around [`IndexMap`] that keeps
//! object keys in insertion order. Iteration order is what the encoder
//! emits, so an ordered map is what makes output deterministic.
//!
//! ## Examples
//!
//! ```rust
//! use jslit::{JsMap, JsValue};
//!
//! let mut map = JsMap::new();
//! map.insert("name".to_string(), JsValue::from("Alice"));
//! map.insert("age".to_string(), JsValue::from(30));
//!
//! assert_eq!(map.len(), 2);
//! assert_eq!(map.get("name").and_then(|v| v.as_str()), Some("Alice"));
//! ```

use indexmap::IndexMap;
use std::collections::HashMap;

/// An ordered map of string keys to values.
///
/// A thin wrapper around [`IndexMap`]; keys serialize in insertion order.
///
/// # Examples
///
/// ```rust
/// use jslit::{JsMap, JsValue};
///
/// let mut map = JsMap::new();
/// map.insert("first".to_string(), JsValue::from(1));
/// map.insert("second".to_string(), JsValue::from(2));
///
/// let keys: Vec<_> = map.keys().cloned().collect();
/// assert_eq!(keys, vec!["first", "second"]);
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct JsMap(IndexMap<String, crate::JsValue>);

impl JsMap {
    /// Creates an empty `JsMap`.
    #[must_use]
    pub fn new() -> Self {
        JsMap(IndexMap::new())
    }

    /// Creates an empty `JsMap` with the specified capacity.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        JsMap(IndexMap::with_capacity(capacity))
    }

    /// Inserts a key-value pair into the map.
    ///
    /// If the map already contained this key, the old value is returned.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use jslit::{JsMap, JsValue};
    ///
    /// let mut map = JsMap::new();
    /// assert!(map.insert("key".to_string(), JsValue::from(42)).is_none());
    /// assert!(map.insert("key".to_string(), JsValue::from(43)).is_some());
    /// ```
    pub fn insert(&mut self, key: String, value: crate::JsValue) -> Option<crate::JsValue> {
        self.0.insert(key, value)
    }

    /// Returns a reference to the value corresponding to the key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&crate::JsValue> {
        self.0.get(key)
    }

    /// Returns `true` if the map contains the given key.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Returns the number of entries in the map.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the map contains no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns an iterator over the keys of the map, in insertion order.
    pub fn keys(&self) -> indexmap::map::Keys<'_, String, crate::JsValue> {
        self.0.keys()
    }

    /// Returns an iterator over the values of the map, in insertion order.
    pub fn values(&self) -> indexmap::map::Values<'_, String, crate::JsValue> {
        self.0.values()
    }

    /// Returns an iterator over the key-value pairs of the map, in insertion order.
    pub fn iter(&self) -> indexmap::map::Iter<'_, String, crate::JsValue> {
        self.0.iter()
    }
}

impl From<HashMap<String, crate::JsValue>> for JsMap {
    fn from(map: HashMap<String, crate::JsValue>) -> Self {
        JsMap(map.into_iter().collect())
    }
}

impl From<JsMap> for HashMap<String, crate::JsValue> {
    fn from(map: JsMap) -> Self {
        map.0.into_iter().collect()
    }
}

impl IntoIterator for JsMap {
    type Item = (String, crate::JsValue);
    type IntoIter = indexmap::map::IntoIter<String, crate::JsValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a JsMap {
    type Item = (&'a String, &'a crate::JsValue);
    type IntoIter = indexmap::map::Iter<'a, String, crate::JsValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl FromIterator<(String, crate::JsValue)> for JsMap {
    fn from_iter<T: IntoIterator<Item = (String, crate::JsValue)>>(iter: T) -> Self {
        JsMap(IndexMap::from_iter(iter))
    }
}
