// src/infrastructure/cache.rs
//! TTL cache over rendered page payloads. Stands in for the original's
//! background revalidation: a hit inside the interval is served as-is, the
//! first miss after expiry refetches from the CMS. Preview requests bypass
//! this cache entirely at the call site.

use crate::application::ports::ClockPort;
use chrono::{DateTime, Duration as ChronoDuration, Utc};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

struct CacheEntry {
    expires_at: DateTime<Utc>,
    value: serde_json::Value,
}

pub struct PageCache {
    clock: Arc<ClockPort>,
    entries: Mutex<HashMap<String, CacheEntry>>,
}

impl PageCache {
    pub fn new(clock: Arc<ClockPort>) -> Self {
        Self {
            clock,
            entries: Mutex::new(HashMap::new()),
        }
    }

    pub fn get(&self, key: &str) -> Option<serde_json::Value> {
        let now = self.clock.now();
        let mut entries = self.entries.lock().unwrap_or_else(|e| e.into_inner());
        match entries.get(key) {
            Some(entry) if entry.expires_at > now => Some(entry.value.clone()),
            Some(_) => {
                entries.remove(key);
                None
            }
            None => None,
        }
    }

    pub fn put(&self, key: impl Into<String>, value: serde_json::Value, ttl: Duration) {
        let ttl = ChronoDuration::from_std(ttl).unwrap_or_else(|_| ChronoDuration::zero());
        let now = self.clock.now();
        let entry = CacheEntry {
            expires_at: now + ttl,
            value,
        };
        let mut entries = self.entries.lock().unwrap_or_else(|e| e.into_inner());
        // Keys include caller-supplied cursors, so the map only stays bounded
        // if stale entries are reclaimed on every write.
        entries.retain(|_, existing| existing.expires_at > now);
        entries.insert(key.into(), entry);
    }

    #[cfg(test)]
    fn len(&self) -> usize {
        self.entries.lock().unwrap_or_else(|e| e.into_inner()).len()
    }
}
