use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::journal_entry::{JournalEntry, NewJournalEntry};

pub async fn list(db: &PgPool) -> Result<Vec<JournalEntry>, sqlx::Error> {
    sqlx::query_as::<_, JournalEntry>(
        r#"
        SELECT id, text, mood, created_at FROM journal_entries
        ORDER BY created_at DESC, id ASC
        "#,
    )
    .fetch_all(db)
    .await
}

pub async fn insert(db: &PgPool, entry: &NewJournalEntry) -> Result<JournalEntry, sqlx::Error> {
    sqlx::query_as::<_, JournalEntry>(
        r#"
        INSERT INTO journal_entries (id, text, mood, created_at)
        VALUES ($1, $2, $3, $4)
        RETURNING id, text, mood, created_at
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(&entry.text)
    .bind(entry.mood)
    .bind(Utc::now())
    .fetch_one(db)
    .await
}

pub async fn update(
    db: &PgPool,
    id: Uuid,
    entry: &NewJournalEntry,
) -> Result<Option<JournalEntry>, sqlx::Error> {
    sqlx::query_as::<_, JournalEntry>(
        r#"
        UPDATE journal_entries SET text = $2, mood = $3
        WHERE id = $1
        RETURNING id, text, mood, created_at
        "#,
    )
    .bind(id)
    .bind(&entry.text)
    .bind(entry.mood)
    .fetch_optional(db)
    .await
}

pub async fn delete(db: &PgPool, id: Uuid) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM journal_entries WHERE id = $1")
        .bind(id)
        .execute(db)
        .await?;

    Ok(result.rows_affected() > 0)
}

pub async fn ping(db: &PgPool) -> Result<(), sqlx::Error> {
    sqlx::query_scalar::<_, i32>("SELECT 1")
        .fetch_one(db)
        .await
        .map(|_| ())
}

// These run against a live Postgres: `DATABASE_URL=... cargo test -- --ignored`.
#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::journal_entry::Mood;

    fn entry(text: &str, mood: Mood) -> NewJournalEntry {
        NewJournalEntry::new(text, mood).unwrap()
    }

    #[sqlx::test]
    #[ignore = "requires DATABASE_URL"]
    async fn test_list_is_newest_first(db: PgPool) -> sqlx::Result<()> {
        let first = insert(&db, &entry("first", Mood::Happy)).await?;
        tokio::time::sleep(std::time::Duration::from_millis(2)).await;
        let second = insert(&db, &entry("second", Mood::Sad)).await?;

        let entries = list(&db).await?;
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].id, second.id);
        assert_eq!(entries[1].id, first.id);
        Ok(())
    }

    #[sqlx::test]
    #[ignore = "requires DATABASE_URL"]
    async fn test_update_returns_row_and_keeps_created_at(db: PgPool) -> sqlx::Result<()> {
        let created = insert(&db, &entry("before", Mood::Neutral)).await?;

        let updated = update(&db, created.id, &entry("after", Mood::Excited))
            .await?
            .expect("row exists");
        assert_eq!(updated.id, created.id);
        assert_eq!(updated.created_at, created.created_at);
        assert_eq!(updated.text, "after");
        assert_eq!(updated.mood, Mood::Excited);

        assert!(update(&db, Uuid::new_v4(), &entry("x", Mood::Sad)).await?.is_none());
        Ok(())
    }

    #[sqlx::test]
    #[ignore = "requires DATABASE_URL"]
    async fn test_delete_reports_whether_a_row_was_removed(db: PgPool) -> sqlx::Result<()> {
        let created = insert(&db, &entry("gone", Mood::Stressed)).await?;

        assert!(delete(&db, created.id).await?);
        assert!(!delete(&db, created.id).await?);
        assert!(list(&db).await?.is_empty());
        ping(&db).await
    }
}
