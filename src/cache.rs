//! Expiring key/value cache used for tokens and decoded query responses.
//!
//! The client only depends on the [`Cache`] trait: a get/set store of decoded
//! JSON values where every entry carries an absolute expiry instant and an
//! expired entry behaves exactly like a miss. Production uses the in-memory
//! [`MemoryCache`]; tests inject recording or failing fakes.

use std::{collections::HashMap, sync::Mutex};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::Value;

/// An expiring key/value store of decoded JSON values.
///
/// Implementations must be safe to share across request-handling tasks;
/// callers hold them behind `Arc<dyn Cache>`. Redundant concurrent writes to
/// the same key are acceptable (last writer wins), so no method needs to
/// span more than one entry.
#[async_trait]
pub trait Cache: Send + Sync {
    /// Returns the stored value for `key`, or `None` if absent or expired.
    ///
    /// Expiry must never be silently ignored: a lookup at or past the
    /// entry's `expires_at` is a miss.
    async fn get(&self, key: &str) -> Option<Value>;

    /// Stores `value` under `key` until `expires_at`, replacing any
    /// previous entry.
    async fn set(&self, key: &str, value: Value, expires_at: DateTime<Utc>);
}

struct CacheEntry {
    value: Value,
    expires_at: DateTime<Utc>,
}

/// Process-wide in-memory [`Cache`].
///
/// Entries are checked against the clock at read time; expired ones are
/// dropped on the spot rather than swept in the background.
#[derive(Default)]
pub struct MemoryCache {
    entries: Mutex<HashMap<String, CacheEntry>>,
}

impl MemoryCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of live (non-expired) entries.
    pub fn len(&self) -> usize {
        let now = Utc::now();
        let entries = self.entries.lock().unwrap();
        entries.values().filter(|e| now < e.expires_at).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl Cache for MemoryCache {
    async fn get(&self, key: &str) -> Option<Value> {
        let mut entries = self.entries.lock().unwrap();
        if let Some(entry) = entries.get(key) {
            if Utc::now() < entry.expires_at {
                return Some(entry.value.clone());
            }
            entries.remove(key);
        }
        None
    }

    async fn set(&self, key: &str, value: Value, expires_at: DateTime<Utc>) {
        let mut entries = self.entries.lock().unwrap();
        entries.insert(key.to_string(), CacheEntry { value, expires_at });
    }
}
