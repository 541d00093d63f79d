//! In-memory key-value store for tests and throwaway sessions.

use std::{cell::RefCell, collections::HashMap};

use jiff::Timestamp;

use super::{KeyValueStore, Result};

/// Key-value store backed by a `HashMap`. Nothing survives the process.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, (Vec<u8>, Timestamp)>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>> {
        Ok(self.entries.borrow().get(key).map(|(v, _)| v.clone()))
    }

    fn put(&self, key: &str, value: &[u8]) -> Result<()> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), (value.to_vec(), Timestamp::now()));
        Ok(())
    }

    fn updated_at(&self, key: &str) -> Result<Option<Timestamp>> {
        Ok(self.entries.borrow().get(key).map(|(_, t)| *t))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn put_then_get() {
        let store = MemoryStore::new();
        assert!(store.get("k").unwrap().is_none());

        store.put("k", b"v").unwrap();
        assert_eq!(store.get("k").unwrap().unwrap(), b"v");
        assert!(store.updated_at("k").unwrap().is_some());
    }
}
