/// SQL query functions for database operations

use crate::db::models::Entry;
use crate::db::Database;
use crate::error::Result;
use std::path::Path;
use tracing::{debug, info};

impl Database {
    /// Record a visit to `path`, inserting it if new
    ///
    /// # Returns
    /// * `Ok(u64)` - The new weight
    pub async fn increase(&self, path: &str) -> Result<u64> {
        self.update_weight(path, Entry::increased).await
    }

    /// Lower the weight of `path`, inserting it at zero if new
    pub async fn decrease(&self, path: &str) -> Result<u64> {
        self.update_weight(path, Entry::decreased).await
    }

    async fn update_weight(&self, path: &str, update: fn(u64) -> u64) -> Result<u64> {
        let mut tx = self.pool().begin().await?;

        // write first: this takes the write lock up front (waiting out the busy
        // timeout), so a concurrent reader can't deadlock us on upgrade
        sqlx::query("INSERT INTO paths (path, weight) VALUES (?, 0) ON CONFLICT(path) DO NOTHING")
            .bind(path)
            .execute(&mut *tx)
            .await?;

        let current: Option<(i64,)> = sqlx::query_as("SELECT weight FROM paths WHERE path = ?")
            .bind(path)
            .fetch_optional(&mut *tx)
            .await?;

        let old = current.map_or(0, |(w,)| w.max(0) as u64);
        let new = update(old).min(i64::MAX as u64);

        sqlx::query(
            r#"
            INSERT INTO paths (path, weight) VALUES (?, ?)
            ON CONFLICT(path) DO UPDATE SET weight = excluded.weight
            "#,
        )
        .bind(path)
        .bind(new as i64)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;
        debug!(path, old, new, "updated weight");

        Ok(new)
    }

    /// Get the weight of a single path
    pub async fn weight(&self, path: &str) -> Result<Option<u64>> {
        let row: Option<(i64,)> = sqlx::query_as("SELECT weight FROM paths WHERE path = ?")
            .bind(path)
            .fetch_optional(self.pool())
            .await?;

        Ok(row.map(|(w,)| w.max(0) as u64))
    }

    /// All entries, heaviest first, ties broken by path
    pub async fn sorted(&self) -> Result<Vec<Entry>> {
        let entries = sqlx::query_as::<_, Entry>(
            "SELECT path, weight FROM paths ORDER BY weight DESC, path ASC",
        )
        .fetch_all(self.pool())
        .await?;

        Ok(entries)
    }

    /// Remove entries whose directory is gone or whose weight dropped to zero
    ///
    /// # Returns
    /// * `Ok(usize)` - Number of entries removed
    pub async fn purge(&self) -> Result<usize> {
        let entries = self.sorted().await?;
        let stale: Vec<&Entry> = entries
            .iter()
            .filter(|e| e.weight == 0 || !Path::new(&e.path).exists())
            .collect();

        let mut tx = self.pool().begin().await?;
        for entry in &stale {
            sqlx::query("DELETE FROM paths WHERE path = ?")
                .bind(&entry.path)
                .execute(&mut *tx)
                .await?;
        }
        tx.commit().await?;

        info!(removed = stale.len(), "purged database");
        Ok(stale.len())
    }

    /// Printable listing, lightest first so the best match ends up last on screen
    pub async fn stats_report(&self) -> Result<String> {
        let entries = self.sorted().await?;

        let mut report = String::new();
        for entry in entries.iter().rev() {
            report.push_str(&entry.to_string());
            report.push('\n');
        }

        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_increase() {
        let db = Database::new_test().await.unwrap();

        assert_eq!(db.increase("/a").await.unwrap(), 100);
        assert_eq!(db.increase("/a").await.unwrap(), 141);
        assert_eq!(db.weight("/a").await.unwrap(), Some(141));
        assert_eq!(db.weight("/b").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_decrease() {
        let db = Database::new_test().await.unwrap();

        db.increase("/a").await.unwrap();
        db.increase("/a").await.unwrap();
        assert_eq!(db.decrease("/a").await.unwrap(), 41);
        assert_eq!(db.decrease("/a").await.unwrap(), 0);

        // unknown paths are recorded at zero
        assert_eq!(db.decrease("/new").await.unwrap(), 0);
        assert_eq!(db.weight("/new").await.unwrap(), Some(0));
    }

    #[tokio::test]
    async fn test_concurrent_increases_all_count() {
        let temp = TempDir::new().unwrap();
        let db_path = temp.path().join("rzc.db");
        Database::new(&db_path).await.unwrap().close().await;

        // one handle per task, like separate shells running the hook
        let mut tasks = Vec::new();
        for _ in 0..8 {
            let db_path = db_path.clone();
            tasks.push(tokio::spawn(async move {
                let db = Database::new(&db_path).await.unwrap();
                let result = db.increase("/shared").await;
                db.close().await;
                result
            }));
        }
        for task in tasks {
            task.await.unwrap().unwrap();
        }

        let expected = (0..8).fold(0, |w, _| Entry::increased(w));
        let db = Database::new(&db_path).await.unwrap();
        assert_eq!(db.weight("/shared").await.unwrap(), Some(expected));
        db.close().await;
    }

    #[tokio::test]
    async fn test_sorted() {
        let db = Database::new_test().await.unwrap();

        db.increase("/light").await.unwrap();
        db.increase("/heavy").await.unwrap();
        db.increase("/heavy").await.unwrap();
        db.increase("/also-light").await.unwrap();

        let paths: Vec<String> = db.sorted().await.unwrap().into_iter().map(|e| e.path).collect();
        assert_eq!(paths, vec!["/heavy", "/also-light", "/light"]);
    }

    #[tokio::test]
    async fn test_purge() {
        let temp = TempDir::new().unwrap();
        let alive = temp.path().to_str().unwrap().to_string();

        let db = Database::new_test().await.unwrap();
        db.increase(&alive).await.unwrap();
        db.increase("/definitely/not/here/o23ne").await.unwrap();
        db.decrease("/zero").await.unwrap();

        assert_eq!(db.purge().await.unwrap(), 2);

        let remaining = db.sorted().await.unwrap();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].path, alive);
    }

    #[tokio::test]
    async fn test_stats_report() {
        let db = Database::new_test().await.unwrap();
        db.increase("/one").await.unwrap();
        db.increase("/two").await.unwrap();
        db.increase("/two").await.unwrap();

        let report = db.stats_report().await.unwrap();
        assert_eq!(report, "weight=100,\tpath=/one\nweight=141,\tpath=/two\n");
    }
}
