use super::model::{CheckInRow, NewCheckIn};
use async_trait::async_trait;
use sqlx::postgres::PgPool;

/// Persistence for check-ins. Rows are append-only.
#[async_trait]
pub trait CheckInStore: Send + Sync {
    /// Round-trips a trivial query to prove a connection can be used.
    async fn ping(&self) -> anyhow::Result<()>;

    /// All check-ins, newest first. Rows sharing a creation time keep
    /// reverse insertion order.
    async fn list(&self) -> anyhow::Result<Vec<CheckInRow>>;

    async fn insert(&self, check_in: &NewCheckIn) -> anyhow::Result<CheckInRow>;

    /// Inserts rows one at a time without a surrounding transaction and
    /// returns how many were written.
    async fn insert_many(&self, check_ins: &[NewCheckIn]) -> anyhow::Result<u64>;
}

pub struct PgCheckInStore {
    pool: PgPool,
}

impl PgCheckInStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CheckInStore for PgCheckInStore {
    async fn ping(&self) -> anyhow::Result<()> {
        let mut conn = self.pool.acquire().await?;
        sqlx::query("SELECT 1").execute(&mut *conn).await?;
        Ok(())
    }

    async fn list(&self) -> anyhow::Result<Vec<CheckInRow>> {
        let rows = sqlx::query_as::<_, CheckInRow>(
            "SELECT id, nickname, day, country_code, tags, created_at
            FROM check_ins
            ORDER BY created_at DESC, id DESC",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    async fn insert(&self, check_in: &NewCheckIn) -> anyhow::Result<CheckInRow> {
        let row = sqlx::query_as::<_, CheckInRow>(
            "INSERT INTO check_ins (nickname, day, country_code, tags)
            VALUES ($1, $2, $3, $4)
            RETURNING id, nickname, day, country_code, tags, created_at",
        )
        .bind(&check_in.nickname)
        .bind(check_in.day)
        .bind(&check_in.country_code)
        .bind(check_in.tags.as_slice())
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    async fn insert_many(&self, check_ins: &[NewCheckIn]) -> anyhow::Result<u64> {
        let mut conn = self.pool.acquire().await?;
        let mut inserted = 0;
        for check_in in check_ins {
            sqlx::query(
                "INSERT INTO check_ins (nickname, day, country_code, tags) VALUES ($1, $2, $3, $4)",
            )
            .bind(&check_in.nickname)
            .bind(check_in.day)
            .bind(&check_in.country_code)
            .bind(check_in.tags.as_slice())
            .execute(&mut *conn)
            .await?;
            inserted += 1;
        }
        Ok(inserted)
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::checkins::seed::sample_check_ins;
    use crate::db::{ensure_schema, testing::TestDatabase};
    use chrono::{TimeZone, Utc};

    async fn store() -> Option<(TestDatabase, PgCheckInStore)> {
        let db = TestDatabase::create().await?;
        ensure_schema(&db.pool).await.unwrap();
        let store = PgCheckInStore::new(db.pool.clone());
        Some((db, store))
    }

    fn check_in(nickname: &str, tags: &[&str]) -> NewCheckIn {
        NewCheckIn {
            nickname: nickname.to_string(),
            day: 2,
            country_code: "US".to_string(),
            tags: tags.iter().map(|tag| tag.to_string()).collect(),
        }
    }

    #[tokio::test]
    async fn ping_round_trips() {
        let (db, store) = match store().await {
            Some(setup) => setup,
            None => return,
        };

        store.ping().await.unwrap();
        db.cleanup().await;
    }

    #[tokio::test]
    async fn insert_returns_server_assigned_fields() {
        let (db, store) = match store().await {
            Some(setup) => setup,
            None => return,
        };

        let first = store.insert(&check_in("Alex", &["authentic"])).await.unwrap();
        let second = store.insert(&check_in("Bo", &[])).await.unwrap();

        assert_eq!(first.nickname, "Alex");
        assert_eq!(first.day, 2);
        assert_eq!(first.country_code, "US");
        assert_eq!(first.tags, vec!["authentic".to_string()]);
        assert!(second.id > first.id);
        assert!(second.tags.is_empty());
        assert!(second.created_at >= first.created_at);
        db.cleanup().await;
    }

    #[tokio::test]
    async fn listing_is_newest_first_with_insertion_order_ties() {
        let (db, store) = match store().await {
            Some(setup) => setup,
            None => return,
        };

        let insert_at = |nickname: &'static str, millis: i64| {
            sqlx::query(
                "INSERT INTO check_ins (nickname, day, country_code, tags, created_at)
                VALUES ($1, 1, 'VN', '{}', $2)",
            )
            .bind(nickname)
            .bind(Utc.timestamp_millis_opt(millis).unwrap())
        };

        // "late" is inserted first but carries the newest timestamp
        insert_at("late", 3_000).execute(&db.pool).await.unwrap();
        for nickname in ["A", "B", "C"] {
            insert_at(nickname, 1_000).execute(&db.pool).await.unwrap();
        }

        let order: Vec<String> = store
            .list()
            .await
            .unwrap()
            .into_iter()
            .map(|row| row.nickname)
            .collect();
        assert_eq!(order, ["late", "C", "B", "A"]);
        db.cleanup().await;
    }

    #[tokio::test]
    async fn seeding_twice_keeps_both_copies() {
        let (db, store) = match store().await {
            Some(setup) => setup,
            None => return,
        };

        let samples = sample_check_ins();
        assert_eq!(store.insert_many(&samples).await.unwrap(), 7);
        assert_eq!(store.insert_many(&samples).await.unwrap(), 7);

        let rows = store.list().await.unwrap();
        assert_eq!(rows.len(), 14);
        assert_eq!(rows.iter().filter(|row| row.nickname == "小明").count(), 2);
        db.cleanup().await;
    }

    #[tokio::test]
    async fn empty_table_lists_nothing() {
        let (db, store) = match store().await {
            Some(setup) => setup,
            None => return,
        };

        assert!(store.list().await.unwrap().is_empty());
        db.cleanup().await;
    }
}
