//! Shared fixtures for unit tests.

use std::sync::Mutex;

use diesel::connection::SimpleConnection;
use diesel::prelude::*;
use diesel::sqlite::SqliteConnection;

use crate::config::DatabaseConfig;
use crate::db::Database;

/// Serializes tests that read or mutate process environment variables.
pub static ENV_LOCK: Mutex<()> = Mutex::new(());

/// DDL for the training schema, mirroring what the platform provisions.
pub const SCHEMA: &str = "
    CREATE TABLE users (id INTEGER PRIMARY KEY, name TEXT NOT NULL);
    CREATE TABLE devices (id INTEGER PRIMARY KEY, name TEXT NOT NULL);
    CREATE TABLE procedures (id INTEGER PRIMARY KEY, name TEXT NOT NULL);
    CREATE TABLE training_sessions (
        id INTEGER PRIMARY KEY,
        user_id INTEGER NOT NULL,
        procedure_id INTEGER NOT NULL,
        device_id INTEGER NOT NULL,
        session_date TEXT NOT NULL,
        duration_minutes INTEGER NOT NULL,
        result TEXT NOT NULL
    );
    CREATE TABLE user_feedback (
        id INTEGER PRIMARY KEY,
        session_id INTEGER NOT NULL,
        comment TEXT NOT NULL,
        score INTEGER NOT NULL
    );
    CREATE TABLE evaluation_reports (
        id INTEGER PRIMARY KEY,
        session_id INTEGER NOT NULL,
        instructor_feedback TEXT NOT NULL,
        total_score REAL NOT NULL
    );
    CREATE TABLE device_maintenance (
        id INTEGER PRIMARY KEY,
        device_id INTEGER NOT NULL,
        maintenance_date TEXT NOT NULL,
        description TEXT NOT NULL,
        technician TEXT NOT NULL
    );
    CREATE TABLE achievements (
        id INTEGER PRIMARY KEY,
        user_id INTEGER NOT NULL,
        name TEXT NOT NULL,
        description TEXT NOT NULL,
        achieved_on TEXT NOT NULL
    );
    CREATE TABLE training_preferences (
        user_id INTEGER PRIMARY KEY,
        preferences_json TEXT NOT NULL
    );
    CREATE TABLE performance_metrics (
        id INTEGER PRIMARY KEY,
        session_id INTEGER NOT NULL,
        metric_type TEXT NOT NULL,
        value REAL NOT NULL
    );
";

/// Two users, two devices, one session each, plus detail rows.
pub const SEED: &str = "
    INSERT INTO users VALUES (1, 'Ana'), (2, 'Bruno');
    INSERT INTO devices VALUES (1, 'SimRig-1'), (2, 'SimRig-2');
    INSERT INTO procedures VALUES (1, 'Emergency landing'), (2, 'Engine start');
    INSERT INTO training_sessions VALUES
        (1, 1, 1, 1, '2026-05-02', 45, 'passed'),
        (2, 2, 2, 2, '2026-05-03', 30, 'failed');
    INSERT INTO user_feedback VALUES
        (1, 1, 'Felt realistic', 9),
        (2, 2, 'Controls lagged', 6);
    INSERT INTO evaluation_reports VALUES
        (1, 1, 'Stable approach, clean flare', 92.5);
    INSERT INTO device_maintenance VALUES
        (1, 1, '2026-04-20', 'Hydraulics check', 'Silva'),
        (2, 2, '2026-04-25', 'Projector alignment', 'Costa');
    INSERT INTO achievements VALUES
        (1, 1, 'First solo', 'Completed a session without assistance', '2026-05-02');
    INSERT INTO training_preferences VALUES
        (1, '{\"difficulty\":\"hard\"}');
    INSERT INTO performance_metrics VALUES
        (1, 1, 'reaction_time_ms', 420.0),
        (2, 2, 'reaction_time_ms', 510.0);
";

/// In-memory connection with the schema and standard seed applied.
pub fn seeded_connection() -> SqliteConnection {
    let mut conn = SqliteConnection::establish(":memory:").unwrap();
    conn.batch_execute(SCHEMA).unwrap();
    conn.batch_execute(SEED).unwrap();
    conn
}

/// In-memory [`Database`] handle with the schema and standard seed.
pub fn seeded_database() -> Database {
    let config = DatabaseConfig {
        dsn: ":memory:".into(),
        ..Default::default()
    };
    let mut db = Database::connect(&config).unwrap();
    let conn = db.conn().unwrap();
    conn.batch_execute(SCHEMA).unwrap();
    conn.batch_execute(SEED).unwrap();
    db
}
