//! Durable string key/value storage behind one trait.
//!
//! History and settings only ever see [Storage]; front ends pick
//! [SqliteStorage] for the data dir or [MemoryStorage] for throwaway runs.

mod memory;
mod sqlite;

pub use memory::MemoryStorage;
pub use sqlite::SqliteStorage;

use crate::error::Result;

pub trait Storage {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
    fn remove(&mut self, key: &str) -> Result<()>;
}

impl<S: Storage + ?Sized> Storage for Box<S> {
    fn get(&self, key: &str) -> Result<Option<String>> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value)
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        (**self).remove(key)
    }
}

impl<S: Storage + ?Sized> Storage for &mut S {
    fn get(&self, key: &str) -> Result<Option<String>> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value)
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        (**self).remove(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn exercise(storage: &mut dyn Storage) {
        assert_eq!(storage.get("a").unwrap(), None);
        storage.set("a", "1").unwrap();
        assert_eq!(storage.get("a").unwrap().as_deref(), Some("1"));
        storage.set("a", "2").unwrap();
        assert_eq!(storage.get("a").unwrap().as_deref(), Some("2"));
        storage.remove("a").unwrap();
        assert_eq!(storage.get("a").unwrap(), None);
        // removing a missing key is not an error
        storage.remove("a").unwrap();
    }

    #[test]
    fn memory_storage_contract() {
        exercise(&mut MemoryStorage::new());
    }

    #[test]
    fn sqlite_storage_contract() {
        let dir = tempfile::tempdir().unwrap();
        exercise(&mut SqliteStorage::open(dir.path()).unwrap());
    }

    #[test]
    fn boxed_storage_forwards() {
        let mut boxed: Box<dyn Storage + Send> = Box::new(MemoryStorage::new());
        boxed.set("k", "v").unwrap();
        assert_eq!(Storage::get(&boxed, "k").unwrap().as_deref(), Some("v"));
    }
}
