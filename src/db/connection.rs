//! Database session management.
//!
//! One synchronous SQLite session per process run. The handle owns the
//! connection; `close` is idempotent and `Drop` guarantees the session is
//! released exactly once, whether the run ends normally or unwinds on an
//! error.

use diesel::prelude::*;
use diesel::sqlite::SqliteConnection;
use tracing::debug;

use crate::config::DatabaseConfig;
use crate::error::{ConnectionError, Result};

/// An open database session.
pub struct Database {
    conn: Option<SqliteConnection>,
}

impl Database {
    /// Open a session for the configured DSN.
    ///
    /// Applies the optional statement timeout pragma and probes the
    /// session with a trivial statement so an unusable DSN fails here
    /// rather than on the first report.
    pub fn connect(config: &DatabaseConfig) -> Result<Self> {
        let mut conn =
            SqliteConnection::establish(&config.dsn).map_err(|source| ConnectionError::Open {
                dsn: config.dsn.clone(),
                source,
            })?;

        if let Some(timeout_ms) = config.statement_timeout_ms {
            diesel::sql_query(format!("PRAGMA busy_timeout={timeout_ms}"))
                .execute(&mut conn)
                .map_err(ConnectionError::Verify)?;
        }

        diesel::sql_query("SELECT 1")
            .execute(&mut conn)
            .map_err(ConnectionError::Verify)?;

        debug!(dsn = %config.dsn, "database session opened");
        Ok(Self { conn: Some(conn) })
    }

    /// The statement handle for issuing queries.
    pub fn conn(&mut self) -> Result<&mut SqliteConnection> {
        self.conn
            .as_mut()
            .ok_or_else(|| ConnectionError::NotConnected.into())
    }

    /// Whether the session is still open.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.conn.is_some()
    }

    /// Release the session. Safe to call more than once.
    pub fn close(&mut self) {
        if self.conn.take().is_some() {
            debug!("database session closed");
        }
    }
}

impl Drop for Database {
    fn drop(&mut self) {
        self.close();
    }
}
