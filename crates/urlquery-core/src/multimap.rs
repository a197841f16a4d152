//! Insertion-ordered map that keeps duplicate keys.
//!
//! Entries live in a single `Vec` that defines iteration and serialization
//! order. A side index maps each key to the positions of its occurrences so
//! lookups do not scan the whole list.

use std::collections::HashMap;
use std::fmt;

use serde::ser::{Serialize, Serializer};

use crate::error::ArityError;

/// One decoded `key=value` pair.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct Entry {
    pub key: String,
    pub value: String,
}

/// Ordered key/value container allowing the same key more than once.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderedMultiMap {
    entries: Vec<Entry>,
    index: HashMap<String, Vec<usize>>,
}

impl OrderedMultiMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a map from `[key, value]` pairs, validating every pair first.
    ///
    /// Each pair must hold exactly two elements. Nothing is built when any
    /// pair fails; the error names the first bad pair.
    pub fn from_pairs<I, P, S>(pairs: I) -> Result<Self, ArityError>
    where
        I: IntoIterator<Item = P>,
        P: AsRef<[S]>,
        S: AsRef<str>,
    {
        let mut map = Self::new();
        for (index, pair) in pairs.into_iter().enumerate() {
            match pair.as_ref() {
                [key, value] => {
                    let (key, value): (&str, &str) = (key.as_ref(), value.as_ref());
                    map.append(key, value);
                }
                other => {
                    return Err(ArityError {
                        index,
                        len: other.len(),
                    })
                }
            }
        }
        Ok(map)
    }

    /// Appends an entry after all existing ones.
    pub fn append(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let position = self.entries.len();
        self.index.entry(key.clone()).or_default().push(position);
        self.entries.push(Entry {
            key,
            value: value.into(),
        });
    }

    /// Value of the first occurrence of `key`, or `""` when absent.
    pub fn get(&self, key: &str) -> &str {
        self.index
            .get(key)
            .and_then(|positions| positions.first())
            .map(|&i| self.entries[i].value.as_str())
            .unwrap_or("")
    }

    /// Values of every occurrence of `key`, in insertion order.
    pub fn get_all(&self, key: &str) -> Vec<&str> {
        self.index
            .get(key)
            .map(|positions| {
                positions
                    .iter()
                    .map(|&i| self.entries[i].value.as_str())
                    .collect()
            })
            .unwrap_or_default()
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    /// Number of entries, duplicates counted individually.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Replaces the value of the first occurrence of `key` in place and drops
    /// any later occurrences. Appends when the key is absent.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let Some(positions) = self.index.get(&key) else {
            self.append(key, value);
            return;
        };

        let first = positions[0];
        let has_duplicates = positions.len() > 1;
        self.entries[first].value = value.into();

        if has_duplicates {
            let mut position = 0;
            self.entries.retain(|entry| {
                let keep = entry.key != key || position == first;
                position += 1;
                keep
            });
            self.reindex();
        }
    }

    /// Removes every occurrence of `key`, returning the removed values in order.
    pub fn remove(&mut self, key: &str) -> Vec<String> {
        if self.index.remove(key).is_none() {
            return Vec::new();
        }
        let (removed, kept): (Vec<Entry>, Vec<Entry>) = std::mem::take(&mut self.entries)
            .into_iter()
            .partition(|entry| entry.key == key);
        self.entries = kept;
        self.reindex();
        removed.into_iter().map(|entry| entry.value).collect()
    }

    /// Distinct keys in order of first appearance.
    pub fn keys(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries
            .iter()
            .enumerate()
            .filter(move |&(i, entry)| {
                self.index
                    .get(&entry.key)
                    .and_then(|positions| positions.first())
                    == Some(&i)
            })
            .map(|(_, entry)| entry.key.as_str())
    }

    pub fn iter(&self) -> Iter<'_> {
        Iter(self.entries.iter())
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    fn reindex(&mut self) {
        self.index.clear();
        for (position, entry) in self.entries.iter().enumerate() {
            self.index
                .entry(entry.key.clone())
                .or_default()
                .push(position);
        }
    }
}

/// Borrowing iterator over `(key, value)` pairs in insertion order.
#[derive(Debug, Clone)]
pub struct Iter<'a>(std::slice::Iter<'a, Entry>);

impl<'a> Iterator for Iter<'a> {
    type Item = (&'a str, &'a str);

    fn next(&mut self) -> Option<Self::Item> {
        self.0
            .next()
            .map(|entry| (entry.key.as_str(), entry.value.as_str()))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl<'a> IntoIterator for &'a OrderedMultiMap {
    type Item = (&'a str, &'a str);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K, V> FromIterator<(K, V)> for OrderedMultiMap
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut map = Self::new();
        map.extend(iter);
        map
    }
}

impl<K, V> Extend<(K, V)> for OrderedMultiMap
where
    K: Into<String>,
    V: Into<String>,
{
    fn extend<T: IntoIterator<Item = (K, V)>>(&mut self, iter: T) {
        for (key, value) in iter {
            self.append(key, value);
        }
    }
}

/// `key=value` pairs joined by `&`, in insertion order, without escaping.
impl fmt::Display for OrderedMultiMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, entry) in self.entries.iter().enumerate() {
            if i > 0 {
                f.write_str("&")?;
            }
            write!(f, "{}={}", entry.key, entry.value)?;
        }
        Ok(())
    }
}

impl Serialize for OrderedMultiMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(&self.entries)
    }
}
