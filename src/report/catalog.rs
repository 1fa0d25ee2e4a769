//! Report execution.
//!
//! Every report is a fixed inner-join query expressed in the Diesel DSL.
//! Optional equality filters are applied with `.filter()` on a boxed
//! query, so filter values always travel as bound parameters and ANDing
//! several filters is just repeated narrowing.

use diesel::prelude::*;
use diesel::sqlite::SqliteConnection;
use tracing::debug;

use crate::db::schema::{
    achievements, device_maintenance, devices, evaluation_reports, performance_metrics,
    procedures, training_preferences, training_sessions, user_feedback, users,
};
use crate::error::{QueryError, Result};
use crate::report::{FilterDimension, Filters, ReportKind, ReportTable};

/// Execute one report with the given filters.
///
/// Filters on a dimension the report's join graph does not contain are
/// rejected before any statement runs. Statement failures surface as a
/// query error with no partial result.
pub fn run(
    conn: &mut SqliteConnection,
    kind: ReportKind,
    filters: &Filters,
) -> Result<ReportTable> {
    check_filter_support(kind, filters)?;

    let rows = match kind {
        ReportKind::Sessions => sessions(conn, filters)?,
        ReportKind::UserFeedback => user_feedback_rows(conn, filters)?,
        ReportKind::InstructorFeedback => instructor_feedback(conn, filters)?,
        ReportKind::Maintenance => maintenance(conn, filters)?,
        ReportKind::Achievements => achievement_rows(conn, filters)?,
        ReportKind::Preferences => preferences(conn, filters)?,
        ReportKind::Metrics => metrics(conn, filters)?,
    };

    debug!(report = kind.slug(), rows = rows.len(), "report executed");
    Ok(ReportTable {
        title: kind.title(),
        columns: kind.columns(),
        rows,
    })
}

fn check_filter_support(kind: ReportKind, filters: &Filters) -> Result<()> {
    let supported = kind.supported_filters();
    if filters.user.is_some() && !supported.contains(&FilterDimension::User) {
        return Err(QueryError::UnsupportedFilter {
            report: kind.slug(),
            dimension: FilterDimension::User.label(),
        }
        .into());
    }
    if filters.device.is_some() && !supported.contains(&FilterDimension::Device) {
        return Err(QueryError::UnsupportedFilter {
            report: kind.slug(),
            dimension: FilterDimension::Device.label(),
        }
        .into());
    }
    Ok(())
}

fn sessions(conn: &mut SqliteConnection, filters: &Filters) -> Result<Vec<Vec<String>>> {
    let mut query = training_sessions::table
        .inner_join(users::table)
        .inner_join(procedures::table)
        .inner_join(devices::table)
        .select((
            training_sessions::id,
            users::name,
            procedures::name,
            devices::name,
            training_sessions::session_date,
            training_sessions::duration_minutes,
            training_sessions::result,
        ))
        .order(training_sessions::id.asc())
        .into_boxed();

    if let Some(user) = &filters.user {
        query = query.filter(users::name.eq(user.clone()));
    }
    if let Some(device) = &filters.device {
        query = query.filter(devices::name.eq(device.clone()));
    }

    let rows: Vec<(i32, String, String, String, String, i32, String)> =
        query.load(conn).map_err(QueryError::Statement)?;

    Ok(rows
        .into_iter()
        .map(|(id, user, procedure, device, date, duration, result)| {
            vec![
                id.to_string(),
                user,
                procedure,
                device,
                date,
                duration.to_string(),
                result,
            ]
        })
        .collect())
}

fn user_feedback_rows(conn: &mut SqliteConnection, filters: &Filters) -> Result<Vec<Vec<String>>> {
    let mut query = user_feedback::table
        .inner_join(
            training_sessions::table
                .inner_join(users::table)
                .inner_join(procedures::table),
        )
        .select((
            user_feedback::id,
            users::name,
            procedures::name,
            user_feedback::comment,
            user_feedback::score,
        ))
        .order(user_feedback::id.asc())
        .into_boxed();

    if let Some(user) = &filters.user {
        query = query.filter(users::name.eq(user.clone()));
    }

    let rows: Vec<(i32, String, String, String, i32)> =
        query.load(conn).map_err(QueryError::Statement)?;

    Ok(rows
        .into_iter()
        .map(|(id, user, procedure, comment, score)| {
            vec![id.to_string(), user, procedure, comment, score.to_string()]
        })
        .collect())
}

fn instructor_feedback(conn: &mut SqliteConnection, filters: &Filters) -> Result<Vec<Vec<String>>> {
    let mut query = evaluation_reports::table
        .inner_join(
            training_sessions::table
                .inner_join(users::table)
                .inner_join(procedures::table),
        )
        .select((
            evaluation_reports::id,
            users::name,
            procedures::name,
            evaluation_reports::instructor_feedback,
            evaluation_reports::total_score,
        ))
        .order(evaluation_reports::id.asc())
        .into_boxed();

    if let Some(user) = &filters.user {
        query = query.filter(users::name.eq(user.clone()));
    }

    let rows: Vec<(i32, String, String, String, f32)> =
        query.load(conn).map_err(QueryError::Statement)?;

    Ok(rows
        .into_iter()
        .map(|(id, user, procedure, feedback, total)| {
            vec![id.to_string(), user, procedure, feedback, total.to_string()]
        })
        .collect())
}

fn maintenance(conn: &mut SqliteConnection, filters: &Filters) -> Result<Vec<Vec<String>>> {
    let mut query = device_maintenance::table
        .inner_join(devices::table)
        .select((
            device_maintenance::id,
            devices::name,
            device_maintenance::maintenance_date,
            device_maintenance::description,
            device_maintenance::technician,
        ))
        .order(device_maintenance::id.asc())
        .into_boxed();

    if let Some(device) = &filters.device {
        query = query.filter(devices::name.eq(device.clone()));
    }

    let rows: Vec<(i32, String, String, String, String)> =
        query.load(conn).map_err(QueryError::Statement)?;

    Ok(rows
        .into_iter()
        .map(|(id, device, date, description, technician)| {
            vec![id.to_string(), device, date, description, technician]
        })
        .collect())
}

fn achievement_rows(conn: &mut SqliteConnection, filters: &Filters) -> Result<Vec<Vec<String>>> {
    let mut query = achievements::table
        .inner_join(users::table)
        .select((
            achievements::name,
            users::name,
            achievements::description,
            achievements::achieved_on,
        ))
        .order(achievements::id.asc())
        .into_boxed();

    if let Some(user) = &filters.user {
        query = query.filter(users::name.eq(user.clone()));
    }

    let rows: Vec<(String, String, String, String)> =
        query.load(conn).map_err(QueryError::Statement)?;

    Ok(rows
        .into_iter()
        .map(|(achievement, user, description, date)| vec![achievement, user, description, date])
        .collect())
}

fn preferences(conn: &mut SqliteConnection, filters: &Filters) -> Result<Vec<Vec<String>>> {
    let mut query = training_preferences::table
        .inner_join(users::table)
        .select((users::name, training_preferences::preferences_json))
        .order(users::name.asc())
        .into_boxed();

    if let Some(user) = &filters.user {
        query = query.filter(users::name.eq(user.clone()));
    }

    let rows: Vec<(String, String)> = query.load(conn).map_err(QueryError::Statement)?;

    Ok(rows
        .into_iter()
        .map(|(user, preferences)| vec![user, preferences])
        .collect())
}

fn metrics(conn: &mut SqliteConnection, filters: &Filters) -> Result<Vec<Vec<String>>> {
    let mut query = performance_metrics::table
        .inner_join(training_sessions::table.inner_join(users::table))
        .select((
            performance_metrics::id,
            users::name,
            performance_metrics::metric_type,
            performance_metrics::value,
        ))
        .order(performance_metrics::id.asc())
        .into_boxed();

    if let Some(user) = &filters.user {
        query = query.filter(users::name.eq(user.clone()));
    }

    let rows: Vec<(i32, String, String, f32)> =
        query.load(conn).map_err(QueryError::Statement)?;

    Ok(rows
        .into_iter()
        .map(|(id, user, metric_type, value)| {
            vec![id.to_string(), user, metric_type, value.to_string()]
        })
        .collect())
}
