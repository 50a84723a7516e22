use std::collections::HashMap;

use nutrio_db::table::SecureStore;
use sea_query::{Expr, ExprTrait, OnConflict, Query, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use sqlx::SqlitePool;
use tokio::sync::RwLock;

/// Device-local storage for identity data.
#[async_trait::async_trait]
pub trait KeyValueStore: Send + Sync {
    async fn get(&self, key: &str) -> nutrio_shared::Result<Option<String>>;
    async fn set(&self, key: &str, value: &str) -> nutrio_shared::Result<()>;
    async fn delete(&self, key: &str) -> nutrio_shared::Result<()>;
}

/// Store backed by the `secure_store` table.
#[derive(Clone)]
pub struct SqliteStore(pub SqlitePool);

#[async_trait::async_trait]
impl KeyValueStore for SqliteStore {
    async fn get(&self, key: &str) -> nutrio_shared::Result<Option<String>> {
        let statement = Query::select()
            .column(SecureStore::Value)
            .from(SecureStore::Table)
            .and_where(Expr::col(SecureStore::Key).eq(key))
            .limit(1)
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);

        let row = sqlx::query_as_with::<_, (String,), _>(&sql, values)
            .fetch_optional(&self.0)
            .await?;

        Ok(row.map(|(value,)| value))
    }

    async fn set(&self, key: &str, value: &str) -> nutrio_shared::Result<()> {
        let statement = Query::insert()
            .into_table(SecureStore::Table)
            .columns([SecureStore::Key, SecureStore::Value, SecureStore::UpdatedAt])
            .values_panic([
                key.into(),
                value.into(),
                Expr::current_timestamp().into(),
            ])
            .on_conflict(
                OnConflict::column(SecureStore::Key)
                    .update_columns([SecureStore::Value, SecureStore::UpdatedAt])
                    .to_owned(),
            )
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        sqlx::query_with(&sql, values).execute(&self.0).await?;

        Ok(())
    }

    async fn delete(&self, key: &str) -> nutrio_shared::Result<()> {
        let statement = Query::delete()
            .from_table(SecureStore::Table)
            .and_where(Expr::col(SecureStore::Key).eq(key))
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        sqlx::query_with(&sql, values).execute(&self.0).await?;

        Ok(())
    }
}

#[derive(Default)]
pub struct MemoryStore(RwLock<HashMap<String, String>>);

#[async_trait::async_trait]
impl KeyValueStore for MemoryStore {
    async fn get(&self, key: &str) -> nutrio_shared::Result<Option<String>> {
        Ok(self.0.read().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> nutrio_shared::Result<()> {
        self.0
            .write()
            .await
            .insert(key.to_owned(), value.to_owned());

        Ok(())
    }

    async fn delete(&self, key: &str) -> nutrio_shared::Result<()> {
        self.0.write().await.remove(key);

        Ok(())
    }
}
