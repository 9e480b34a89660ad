use std::collections::HashMap;
use std::sync::Arc;

use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::models::journal_entry::{JournalEntry, NewJournalEntry};

/// In-process journal store (for local development and tests).
/// Clones share the same entries.
#[derive(Clone, Default)]
pub struct MemoryStore {
    entries: Arc<RwLock<HashMap<Uuid, JournalEntry>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn list(&self) -> Vec<JournalEntry> {
        let entries = self.entries.read().await;
        let mut list: Vec<JournalEntry> = entries.values().cloned().collect();
        list.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(a.id.cmp(&b.id)));
        list
    }

    pub async fn insert(&self, entry: &NewJournalEntry) -> JournalEntry {
        let created = JournalEntry {
            id: Uuid::new_v4(),
            text: entry.text.clone(),
            mood: entry.mood,
            created_at: Utc::now(),
        };
        self.entries
            .write()
            .await
            .insert(created.id, created.clone());
        created
    }

    pub async fn update(&self, id: Uuid, entry: &NewJournalEntry) -> Option<JournalEntry> {
        let mut entries = self.entries.write().await;
        let existing = entries.get_mut(&id)?;
        existing.text = entry.text.clone();
        existing.mood = entry.mood;
        Some(existing.clone())
    }

    pub async fn delete(&self, id: Uuid) -> bool {
        self.entries.write().await.remove(&id).is_some()
    }

    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::journal_entry::Mood;

    fn entry(text: &str, mood: Mood) -> NewJournalEntry {
        NewJournalEntry::new(text, mood).unwrap()
    }

    #[tokio::test]
    async fn test_list_is_newest_first() {
        let store = MemoryStore::new();
        let first = store.insert(&entry("first", Mood::Happy)).await;
        tokio::time::sleep(std::time::Duration::from_millis(2)).await;
        let second = store.insert(&entry("second", Mood::Sad)).await;

        let list = store.list().await;
        assert_eq!(list.len(), 2);
        assert_eq!(list[0].id, second.id);
        assert_eq!(list[1].id, first.id);
    }

    #[tokio::test]
    async fn test_update_keeps_id_and_created_at() {
        let store = MemoryStore::new();
        let created = store.insert(&entry("before", Mood::Neutral)).await;

        let updated = store
            .update(created.id, &entry("after", Mood::Stressed))
            .await
            .expect("entry exists");
        assert_eq!(updated.id, created.id);
        assert_eq!(updated.created_at, created.created_at);
        assert_eq!(updated.text, "after");
        assert_eq!(updated.mood, Mood::Stressed);
    }

    #[tokio::test]
    async fn test_update_unknown_id_changes_nothing() {
        let store = MemoryStore::new();
        let created = store.insert(&entry("kept", Mood::Happy)).await;

        assert!(store
            .update(Uuid::new_v4(), &entry("other", Mood::Sad))
            .await
            .is_none());
        assert_eq!(store.list().await, vec![created]);
    }

    #[tokio::test]
    async fn test_delete() {
        let store = MemoryStore::new();
        let created = store.insert(&entry("gone", Mood::Excited)).await;

        assert!(store.delete(created.id).await);
        assert!(!store.delete(created.id).await);
        assert_eq!(store.len().await, 0);
    }

    #[tokio::test]
    async fn test_clones_share_entries() {
        let store = MemoryStore::new();
        let handle = store.clone();
        handle.insert(&entry("shared", Mood::Happy)).await;
        assert_eq!(store.len().await, 1);
    }
}
