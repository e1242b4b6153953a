//! Selection lists that map display labels back to record identifiers.
//!
//! A `Choices` is built once from a fetched result set. Labels keep the
//! fetch order. Any record whose label would clash with another entry is
//! suffixed with its id, repeatedly if needed, so that every label in the
//! final list is distinct and every entry resolves to exactly one key.

use std::collections::HashMap;

use crate::{AppError, Result};

/// Ordered, uniquely labelled selection list.
#[derive(Debug, Clone, PartialEq)]
pub struct Choices<K> {
    sources: Vec<(String, Option<i64>)>,
    labels: Vec<String>,
    keys: Vec<K>,
}

impl Choices<i64> {
    /// Build a list from fetched records.
    #[must_use]
    pub fn from_records<T>(
        records: &[T],
        label: impl Fn(&T) -> String,
        id: impl Fn(&T) -> i64,
    ) -> Self {
        let sources: Vec<(String, Option<i64>)> =
            records.iter().map(|r| (label(r), Some(id(r)))).collect();
        let keys = sources.iter().filter_map(|(_, key)| *key).collect();
        Self::from_parts(sources, keys)
    }

    /// Turn a required choice into an optional one, with `none_label`
    /// offered first and resolving to `None`. A record that carries the
    /// same label is suffixed with its id.
    #[must_use]
    pub fn optional(self, none_label: &str) -> Choices<Option<i64>> {
        let sources = std::iter::once((none_label.to_owned(), None))
            .chain(self.sources)
            .collect();
        let keys = std::iter::once(None)
            .chain(self.keys.into_iter().map(Some))
            .collect();
        Choices::from_parts(sources, keys)
    }
}

impl<K: Copy> Choices<K> {
    fn from_parts(sources: Vec<(String, Option<i64>)>, keys: Vec<K>) -> Self {
        let labels = disambiguate(&sources);
        Self {
            sources,
            labels,
            keys,
        }
    }

    /// Display labels in presentation order.
    #[must_use]
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Whether the list has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Resolve the entry at `index`, as returned by a selection prompt.
    ///
    /// # Errors
    ///
    /// Returns `AppError::NotFound` if `index` is out of range.
    pub fn key_at(&self, index: usize) -> Result<K> {
        self.keys
            .get(index)
            .copied()
            .ok_or_else(|| AppError::NotFound(format!("no choice at position {index}")))
    }

    /// Label of the entry at `index`.
    #[must_use]
    pub fn label_at(&self, index: usize) -> Option<&str> {
        self.labels.get(index).map(String::as_str)
    }
}

// Entries without an id are never renamed. A keyed entry that clashes is
// suffixed once; if it still clashes after that (only possible against an
// unkeyed entry), it is suffixed again.
fn disambiguate(sources: &[(String, Option<i64>)]) -> Vec<String> {
    let mut labels: Vec<String> = sources.iter().map(|(text, _)| text.clone()).collect();
    let mut suffixed = vec![false; labels.len()];

    loop {
        let mut counts: HashMap<&str, usize> = HashMap::new();
        for label in &labels {
            *counts.entry(label.as_str()).or_default() += 1;
        }
        let clashing: Vec<usize> = (0..labels.len())
            .filter(|&i| counts.get(labels[i].as_str()).copied().unwrap_or_default() > 1)
            .filter(|&i| sources[i].1.is_some())
            .collect();
        if clashing.is_empty() {
            return labels;
        }

        let fresh: Vec<usize> = clashing.iter().copied().filter(|&i| !suffixed[i]).collect();
        let targets = if fresh.is_empty() { clashing } else { fresh };
        for i in targets {
            if let Some(id) = sources[i].1 {
                labels[i] = format!("{} (id {id})", labels[i]);
                suffixed[i] = true;
            }
        }
    }
}
