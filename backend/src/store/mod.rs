//! # City Store
//!
//! Durable storage for `City` records on top of a SQLite file.
//!
//! The store is a cheap, clonable handle holding only the database location.
//! Every operation opens its own connection on tokio's blocking pool, so the
//! request handlers suspend instead of blocking the actix workers. Write
//! serialization and id assignment are left to SQLite itself.
//!
//! ## Sub-modules:
//! - `cities`: schema provisioning and the CRUD queries.
//! - `error`: the `StoreError` taxonomy.

mod cities;
mod error;

pub use cities::parse_insert_payload;
pub use error::{StoreError, StoreResult};

use rusqlite::Connection;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// Handle to the `cities` collection. Shared with the HTTP layer as `web::Data`.
#[derive(Clone, Debug)]
pub struct CityStore {
    path: Arc<PathBuf>,
}

impl CityStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Arc::new(path.into()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn connect(&self) -> StoreResult<Connection> {
        let conn = Connection::open(self.path.as_path())?;
        conn.busy_timeout(BUSY_TIMEOUT)?;
        Ok(conn)
    }

    /// Runs `op` against a fresh connection on the blocking pool.
    async fn run<T, F>(&self, op: F) -> StoreResult<T>
    where
        T: Send + 'static,
        F: FnOnce(&mut Connection) -> StoreResult<T> + Send + 'static,
    {
        let store = self.clone();
        tokio::task::spawn_blocking(move || {
            let mut conn = store.connect()?;
            op(&mut conn)
        })
        .await
        .map_err(|e| StoreError::Task(e.to_string()))?
    }
}
