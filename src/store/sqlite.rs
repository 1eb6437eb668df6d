use sqlx::sqlite::{Sqlite, SqliteArguments, SqliteConnectOptions, SqlitePool, SqlitePoolOptions, SqliteRow};
use sqlx::query::Query;
use sqlx::Row;
use tracing::{debug, info};
use crate::core::config::Config;
use crate::core::error::Result;
use crate::query::BuiltQuery;
use crate::store::{DictionaryStore, EntryRow, SentenceRow};

/// Dictionary store backed by a SQLite pool. Every fetch checks out its own
/// connection, so concurrent searches never share one.
#[derive(Debug, Clone)]
pub struct SqliteStore {
    pool: SqlitePool,
}

impl SqliteStore {
    pub async fn open(config: &Config) -> Result<Self> {
        let options = SqliteConnectOptions::new()
            .filename(&config.database_path)
            .read_only(config.read_only)
            .create_if_missing(!config.read_only);

        let pool = SqlitePoolOptions::new()
            .max_connections(config.max_connections)
            .connect_with(options)
            .await?;

        info!(
            path = %config.database_path.display(),
            max_connections = config.max_connections,
            read_only = config.read_only,
            "Opened dictionary database"
        );
        Ok(SqliteStore { pool })
    }

    pub fn from_pool(pool: SqlitePool) -> Self {
        SqliteStore { pool }
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    pub async fn close(&self) {
        self.pool.close().await;
    }

    fn prepare(query: &BuiltQuery) -> Query<'_, Sqlite, SqliteArguments<'_>> {
        let mut prepared = sqlx::query(&query.sql);
        for param in &query.params {
            prepared = prepared.bind(param.as_str());
        }
        prepared
    }
}

fn text(row: &SqliteRow, column: &str) -> Result<String> {
    Ok(row.try_get::<Option<String>, _>(column)?.unwrap_or_default())
}

impl DictionaryStore for SqliteStore {
    async fn fetch_entries(&self, query: &BuiltQuery) -> Result<Vec<EntryRow>> {
        debug!(kind = %query.kind, strategy = ?query.strategy, params = ?query.params, "Fetching entries");
        let rows = Self::prepare(query).fetch_all(&self.pool).await?;

        rows.iter()
            .map(|row| {
                Ok(EntryRow {
                    simplified: text(row, "simplified")?,
                    traditional: text(row, "traditional")?,
                    jyutping: text(row, "jyutping")?,
                    pinyin: text(row, "pinyin")?,
                    definitions: row.try_get("definitions")?,
                })
            })
            .collect()
    }

    async fn fetch_sentences(&self, query: &BuiltQuery) -> Result<Vec<SentenceRow>> {
        debug!(kind = %query.kind, params = ?query.params, "Fetching sentences");
        let rows = Self::prepare(query).fetch_all(&self.pool).await?;

        rows.iter()
            .map(|row| {
                Ok(SentenceRow {
                    simplified: text(row, "simplified")?,
                    traditional: text(row, "traditional")?,
                    jyutping: text(row, "jyutping")?,
                    pinyin: text(row, "pinyin")?,
                    language: text(row, "language")?,
                    translations: row.try_get("translations")?,
                })
            })
            .collect()
    }
}
