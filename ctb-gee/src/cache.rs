//! Client-owned response cache.
//!
//! Every backend request is idempotent and read-only, so responses are
//! memoized here, keyed by the full request string (URL plus body). Entries
//! are time-boxed and the map is capacity-bounded, evicting the oldest
//! entry when full. `Rc<RefCell<..>>` suits the single-threaded WASM
//! execution model where all page renders happen on one thread.

use serde_json::Value;
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

/// Default entry lifetime: five minutes.
pub const DEFAULT_TTL_MS: f64 = 5.0 * 60.0 * 1000.0;

/// Default maximum number of cached responses.
pub const DEFAULT_CAPACITY: usize = 64;

struct Entry {
    inserted_ms: f64,
    value: Value,
}

struct Inner {
    ttl_ms: f64,
    capacity: usize,
    entries: HashMap<String, Entry>,
}

/// Cheaply cloneable cache shared by all requests of one client.
#[derive(Clone)]
pub struct ResponseCache {
    inner: Rc<RefCell<Inner>>,
}

impl ResponseCache {
    pub fn new() -> ResponseCache {
        ResponseCache::with(DEFAULT_TTL_MS, DEFAULT_CAPACITY)
    }

    pub fn with(ttl_ms: f64, capacity: usize) -> ResponseCache {
        ResponseCache {
            inner: Rc::new(RefCell::new(Inner {
                ttl_ms,
                capacity,
                entries: HashMap::new(),
            })),
        }
    }

    /// Look up a fresh entry; expired entries are removed on the way out.
    pub fn get(&self, key: &str) -> Option<Value> {
        self.get_at(key, now_ms())
    }

    /// Insert a response, evicting the oldest entry if at capacity.
    pub fn put(&self, key: &str, value: Value) {
        self.put_at(key, value, now_ms());
    }

    pub fn len(&self) -> usize {
        self.inner.borrow().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    // Clock-injected variants so expiry is testable without sleeping.

    pub fn get_at(&self, key: &str, now_ms: f64) -> Option<Value> {
        let mut inner = self.inner.borrow_mut();
        let expired = match inner.entries.get(key) {
            Some(entry) => now_ms - entry.inserted_ms > inner.ttl_ms,
            None => return None,
        };
        if expired {
            inner.entries.remove(key);
            return None;
        }
        inner.entries.get(key).map(|e| e.value.clone())
    }

    pub fn put_at(&self, key: &str, value: Value, now_ms: f64) {
        let mut inner = self.inner.borrow_mut();
        if !inner.entries.contains_key(key) && inner.entries.len() >= inner.capacity {
            let oldest = inner
                .entries
                .iter()
                .min_by(|a, b| a.1.inserted_ms.total_cmp(&b.1.inserted_ms))
                .map(|(k, _)| k.clone());
            if let Some(k) = oldest {
                inner.entries.remove(&k);
            }
        }
        inner.entries.insert(
            key.to_string(),
            Entry {
                inserted_ms: now_ms,
                value,
            },
        );
    }
}

impl Default for ResponseCache {
    fn default() -> Self {
        ResponseCache::new()
    }
}

#[cfg(target_arch = "wasm32")]
fn now_ms() -> f64 {
    js_sys::Date::now()
}

#[cfg(not(target_arch = "wasm32"))]
fn now_ms() -> f64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs_f64() * 1000.0)
        .unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn hit_within_ttl() {
        let cache = ResponseCache::with(1000.0, 4);
        cache.put_at("k", json!(1), 0.0);
        assert_eq!(cache.get_at("k", 500.0), Some(json!(1)));
    }

    #[test]
    fn expired_entry_is_removed() {
        let cache = ResponseCache::with(1000.0, 4);
        cache.put_at("k", json!(1), 0.0);
        assert_eq!(cache.get_at("k", 1500.0), None);
        assert!(cache.is_empty());
    }

    #[test]
    fn capacity_evicts_oldest() {
        let cache = ResponseCache::with(10_000.0, 2);
        cache.put_at("a", json!(1), 0.0);
        cache.put_at("b", json!(2), 10.0);
        cache.put_at("c", json!(3), 20.0);
        assert_eq!(cache.len(), 2);
        assert_eq!(cache.get_at("a", 30.0), None);
        assert_eq!(cache.get_at("b", 30.0), Some(json!(2)));
        assert_eq!(cache.get_at("c", 30.0), Some(json!(3)));
    }

    #[test]
    fn reinsert_refreshes_without_evicting_others() {
        let cache = ResponseCache::with(10_000.0, 2);
        cache.put_at("a", json!(1), 0.0);
        cache.put_at("b", json!(2), 10.0);
        cache.put_at("a", json!(9), 20.0);
        assert_eq!(cache.len(), 2);
        assert_eq!(cache.get_at("a", 30.0), Some(json!(9)));
        assert_eq!(cache.get_at("b", 30.0), Some(json!(2)));
    }
}
