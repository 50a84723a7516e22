use sea_query::{ColumnDef, Expr, Table, TableCreateStatement, TableDropStatement};

use crate::table::SecureStore;

pub struct Operation;

fn create_secure_store_table_statement() -> TableCreateStatement {
    Table::create()
        .table(SecureStore::Table)
        .col(
            ColumnDef::new(SecureStore::Key)
                .string()
                .not_null()
                .primary_key(),
        )
        .col(ColumnDef::new(SecureStore::Value).text().not_null())
        .col(
            ColumnDef::new(SecureStore::UpdatedAt)
                .timestamp_with_time_zone()
                .not_null()
                .default(Expr::current_timestamp()),
        )
        .to_owned()
}

fn drop_secure_store_table_statement() -> TableDropStatement {
    Table::drop().table(SecureStore::Table).to_owned()
}

#[async_trait::async_trait]
impl sqlx_migrator::Operation<sqlx::Sqlite> for Operation {
    async fn up(
        &self,
        connection: &mut sqlx::SqliteConnection,
    ) -> Result<(), sqlx_migrator::Error> {
        let statement =
            create_secure_store_table_statement().to_string(sea_query::SqliteQueryBuilder);
        sqlx::query(&statement).execute(connection).await?;

        Ok(())
    }

    async fn down(
        &self,
        connection: &mut sqlx::SqliteConnection,
    ) -> Result<(), sqlx_migrator::Error> {
        let statement =
            drop_secure_store_table_statement().to_string(sea_query::SqliteQueryBuilder);
        sqlx::query(&statement).execute(connection).await?;

        Ok(())
    }
}
