//! The journal store: the one shared resource of the service.
//!
//! A [`JournalStore`] is built once at startup and cloned into every request.
//! Each operation is a single store access; the Postgres backend relies on
//! row-level atomicity, the memory backend on its lock.

pub mod memory;
pub mod postgres;

use sqlx::PgPool;
use uuid::Uuid;

use crate::error::AppResult;
use crate::models::journal_entry::{JournalEntry, NewJournalEntry};

pub use memory::MemoryStore;

#[derive(Clone)]
pub enum JournalStore {
    Postgres(PgPool),
    Memory(MemoryStore),
}

impl JournalStore {
    pub fn memory() -> Self {
        JournalStore::Memory(MemoryStore::new())
    }

    pub fn backend_name(&self) -> &'static str {
        match self {
            JournalStore::Postgres(_) => "postgres",
            JournalStore::Memory(_) => "memory",
        }
    }

    /// All entries, newest first.
    pub async fn list(&self) -> AppResult<Vec<JournalEntry>> {
        match self {
            JournalStore::Postgres(db) => Ok(postgres::list(db).await?),
            JournalStore::Memory(store) => Ok(store.list().await),
        }
    }

    pub async fn insert(&self, entry: &NewJournalEntry) -> AppResult<JournalEntry> {
        match self {
            JournalStore::Postgres(db) => Ok(postgres::insert(db, entry).await?),
            JournalStore::Memory(store) => Ok(store.insert(entry).await),
        }
    }

    /// Replace `text` and `mood` of an existing entry. `None` if `id` is unknown.
    pub async fn update(
        &self,
        id: Uuid,
        entry: &NewJournalEntry,
    ) -> AppResult<Option<JournalEntry>> {
        match self {
            JournalStore::Postgres(db) => Ok(postgres::update(db, id, entry).await?),
            JournalStore::Memory(store) => Ok(store.update(id, entry).await),
        }
    }

    /// Returns whether an entry was removed.
    pub async fn delete(&self, id: Uuid) -> AppResult<bool> {
        match self {
            JournalStore::Postgres(db) => Ok(postgres::delete(db, id).await?),
            JournalStore::Memory(store) => Ok(store.delete(id).await),
        }
    }

    pub async fn ping(&self) -> AppResult<()> {
        match self {
            JournalStore::Postgres(db) => Ok(postgres::ping(db).await?),
            JournalStore::Memory(_) => Ok(()),
        }
    }
}
