use std::collections::HashMap;

use crate::types::{CommitActivitySeries, SeriesKey};

/// Manages caching of fetched commit-activity series
pub struct SeriesCache {
    cache: HashMap<SeriesKey, CommitActivitySeries>,
}

impl SeriesCache {
    /// Create a new series cache
    pub fn new() -> Self {
        Self {
            cache: HashMap::new(),
        }
    }

    /// Store a series in the cache
    pub fn store(&mut self, key: SeriesKey, series: CommitActivitySeries) {
        self.cache.insert(key, series);
    }

    /// Retrieve a series from the cache
    pub fn get(&self, key: &SeriesKey) -> Option<&CommitActivitySeries> {
        self.cache.get(key)
    }

    /// Clear the cache
    pub fn clear(&mut self) {
        self.cache.clear();
    }
}

impl Default for SeriesCache {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::CommitActivityPoint;

    #[test]
    fn store_and_get_round_trip() {
        let mut cache = SeriesCache::new();
        let key = SeriesKey::all_topics("bdougie", None);
        let series = CommitActivitySeries {
            points: vec![CommitActivityPoint {
                date: "2023-01-01".to_string(),
                commits: 4,
            }],
        };

        cache.store(key.clone(), series.clone());
        assert_eq!(cache.get(&key), Some(&series));

        let other = SeriesKey::all_topics("bdougie", Some(vec![1]));
        assert!(cache.get(&other).is_none());

        cache.clear();
        assert!(cache.get(&key).is_none());
    }
}
