//! Filter value discovery.
//!
//! Each filter dimension is backed by a dimension table; the operator
//! picks one value from the distinct, ordered set.

use diesel::prelude::*;
use diesel::sqlite::SqliteConnection;

use crate::db::schema::{devices, users};
use crate::error::{QueryError, Result};
use crate::report::FilterDimension;

/// Distinct user names, ordered.
pub fn distinct_users(conn: &mut SqliteConnection) -> Result<Vec<String>> {
    let names = users::table
        .select(users::name)
        .distinct()
        .order(users::name.asc())
        .load(conn)
        .map_err(QueryError::Statement)?;
    Ok(names)
}

/// Distinct device names, ordered.
pub fn distinct_devices(conn: &mut SqliteConnection) -> Result<Vec<String>> {
    let names = devices::table
        .select(devices::name)
        .distinct()
        .order(devices::name.asc())
        .load(conn)
        .map_err(QueryError::Statement)?;
    Ok(names)
}

/// Distinct values for the given dimension.
pub fn distinct_values(
    conn: &mut SqliteConnection,
    dimension: FilterDimension,
) -> Result<Vec<String>> {
    match dimension {
        FilterDimension::User => distinct_users(conn),
        FilterDimension::Device => distinct_devices(conn),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use diesel::connection::SimpleConnection;

    fn fixture() -> SqliteConnection {
        let mut conn = crate::testutil::seeded_connection();
        // Duplicate name to exercise DISTINCT.
        conn.batch_execute("INSERT INTO users VALUES (3, 'Ana')")
            .unwrap();
        conn
    }

    #[test]
    fn users_are_distinct_and_ordered() {
        let mut conn = fixture();
        let names = distinct_users(&mut conn).unwrap();
        assert_eq!(names, vec!["Ana".to_string(), "Bruno".to_string()]);
    }

    #[test]
    fn devices_are_distinct_and_ordered() {
        let mut conn = fixture();
        let names = distinct_devices(&mut conn).unwrap();
        assert_eq!(names, vec!["SimRig-1".to_string(), "SimRig-2".to_string()]);
    }

    #[test]
    fn distinct_values_dispatches_on_dimension() {
        let mut conn = fixture();
        let users = distinct_values(&mut conn, FilterDimension::User).unwrap();
        let devices = distinct_values(&mut conn, FilterDimension::Device).unwrap();
        assert_eq!(users.len(), 2);
        assert_eq!(devices.len(), 2);
    }
}
