use std::time::{Duration, Instant};

use log::{info, trace};

/// Memoizes the last successful load for one key (the source URL).
///
/// Owned by the caller; nothing is invalidated behind its back except by the
/// optional max age.
pub struct Cache<V> {
    entry: Option<CacheEntry<V>>,
    max_age: Option<Duration>,
}

pub struct CacheEntry<V> {
    pub key: String,
    pub timestamp: Instant,
    pub value: V,
}

impl<V> Default for Cache<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> Cache<V> {
    pub fn new() -> Self {
        Self {
            entry: None,
            max_age: None,
        }
    }

    pub fn with_max_age(mut self, max_age: Duration) -> Self {
        self.max_age = Some(max_age);
        self
    }

    fn is_valid(&self, entry: &CacheEntry<V>, key: &str) -> bool {
        if entry.key != key {
            return false;
        }

        match self.max_age {
            Some(max_age) => entry.timestamp.elapsed() < max_age,
            None => true,
        }
    }

    /// Returns the cached value and when it was stored.
    pub fn lookup(&self, key: &str) -> Option<(Instant, &V)> {
        match &self.entry {
            Some(entry) if self.is_valid(entry, key) => Some((entry.timestamp, &entry.value)),
            _ => None,
        }
    }

    pub fn insert(&mut self, key: impl Into<String>, value: V) -> &V {
        trace!("Inserted new entry into cache");
        &self
            .entry
            .insert(CacheEntry {
                key: key.into(),
                timestamp: Instant::now(),
                value,
            })
            .value
    }

    pub fn invalidate(&mut self) {
        if let Some(entry) = self.entry.take() {
            trace!(
                "Removing {} from cache (age {}s)",
                entry.key,
                entry.timestamp.elapsed().as_secs()
            );
        }
    }

    /// Looks up `key`, running `load` and storing its result on a miss.
    /// A failed load leaves the cache empty.
    pub fn get_or_try_insert_with<E>(
        &mut self,
        key: &str,
        load: impl FnOnce() -> Result<V, E>,
    ) -> Result<&V, E> {
        let entry = match self.entry.take() {
            Some(entry) if self.is_valid(&entry, key) => {
                info!("Found {} in cache", key);
                entry
            }
            stale => {
                if let Some(stale) = stale {
                    trace!("Replacing cached {}", stale.key);
                }
                CacheEntry {
                    key: key.to_string(),
                    timestamp: Instant::now(),
                    value: load()?,
                }
            }
        };

        Ok(&self.entry.insert(entry).value)
    }
}
