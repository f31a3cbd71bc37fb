use super::KeyValueStore;
use crate::utils::error::{AppError, AppResult};
use std::collections::HashMap;
use std::sync::Mutex;

/// In-memory store, optionally with a byte quota that rejects oversized writes
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
    quota: Option<usize>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store whose total stored bytes may not exceed `bytes`
    pub fn with_quota(bytes: usize) -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
            quota: Some(bytes),
        }
    }

    fn lock(&self) -> AppResult<std::sync::MutexGuard<'_, HashMap<String, String>>> {
        self.entries
            .lock()
            .map_err(|_| AppError::Storage("memory store lock poisoned".to_string()))
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> AppResult<Option<String>> {
        Ok(self.lock()?.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> AppResult<()> {
        let mut entries = self.lock()?;

        if let Some(quota) = self.quota {
            let others: usize = entries
                .iter()
                .filter(|(k, _)| k.as_str() != key)
                .map(|(k, v)| k.len() + v.len())
                .sum();
            let needed = others + key.len() + value.len();
            if needed > quota {
                return Err(AppError::Storage(format!(
                    "quota exceeded ({} of {} bytes)",
                    needed, quota
                )));
            }
        }

        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> AppResult<()> {
        self.lock()?.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_roundtrip() {
        let store = MemoryStore::new();
        store.set("selectedCategory", "Motivation").unwrap();
        assert_eq!(store.get("selectedCategory").unwrap().as_deref(), Some("Motivation"));
        store.remove("selectedCategory").unwrap();
        assert_eq!(store.get("selectedCategory").unwrap(), None);
    }

    #[test]
    fn test_memory_store_quota() {
        let store = MemoryStore::with_quota(16);
        store.set("k", "0123456789").unwrap();
        // overwriting the same key only counts the new value
        store.set("k", "abcdefghij").unwrap();

        let err = store.set("other", "0123456789").unwrap_err();
        assert!(matches!(err, AppError::Storage(_)));
        assert_eq!(store.get("other").unwrap(), None);
        assert_eq!(store.get("k").unwrap().as_deref(), Some("abcdefghij"));
    }
}
