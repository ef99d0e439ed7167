//! Split reader/writer SQLite pools.
//!
//! SQLite permits one writer at a time, so the write endpoints go through
//! a single-connection pool while GETs share a small reader pool. WAL
//! journal mode keeps readers unblocked during writes. Foreign keys are
//! switched on for both pools, which is what delegates referential
//! integrity to the store instead of this layer.

use std::str::FromStr;
use std::time::Duration;

use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePool, SqlitePoolOptions};

/// Reader pool cap. Ten-odd endpoints with one statement each do not need
/// more than a handful of concurrent read connections.
const READER_CONNECTIONS: u32 = 4;

/// Paired connection pools over one SQLite database file.
///
/// - `reader`: read-only pool for SELECT statements.
/// - `writer`: single connection carrying every INSERT/UPDATE/DELETE.
#[derive(Clone)]
pub struct DatabasePool {
    pub reader: SqlitePool,
    pub writer: SqlitePool,
}

impl DatabasePool {
    /// Open both pools against `database_url`, creating the database file
    /// if absent, and apply embedded migrations on the writer.
    pub async fn new(database_url: &str) -> Result<Self, sqlx::Error> {
        let opts = SqliteConnectOptions::from_str(database_url)?
            .journal_mode(SqliteJournalMode::Wal)
            .foreign_keys(true)
            .busy_timeout(Duration::from_secs(5))
            .create_if_missing(true);

        let writer = SqlitePoolOptions::new()
            .max_connections(1)
            .connect_with(opts.clone())
            .await?;

        // Schema must exist before the read-only pool opens
        sqlx::migrate!("../../migrations").run(&writer).await?;

        let reader = SqlitePoolOptions::new()
            .max_connections(READER_CONNECTIONS)
            .connect_with(opts.read_only(true))
            .await?;

        Ok(Self { reader, writer })
    }
}

/// Default database URL: `{HOSPICARE_DATA_DIR}/hospicare.db`, falling back
/// to `~/.hospicare/hospicare.db`.
pub fn default_database_url() -> String {
    let data_dir = std::env::var("HOSPICARE_DATA_DIR").unwrap_or_else(|_| {
        let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
        format!("{home}/.hospicare")
    });
    format!("sqlite://{data_dir}/hospicare.db")
}
