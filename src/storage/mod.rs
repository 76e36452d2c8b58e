//! Durable key-value slots backing the form.
//!
//! [`KeyValueStore`] is the seam: the controller only ever talks to a
//! [`Persistence`] wrapping some store, so tests run against [`MemoryStore`]
//! and the binary against [`FileStore`].

pub mod error;
pub mod file;
pub mod memory;
pub mod persistence;

pub use error::{PersistenceError, StorageError};
pub use file::FileStore;
pub use memory::MemoryStore;
pub use persistence::{DEFAULT_SLOT_KEY, Persistence};

pub trait KeyValueStore: Send {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;

    fn remove(&mut self, key: &str) -> Result<(), StorageError>;
}
