//! Diesel table definitions for the training schema.
//!
//! The schema is fixed and owned by the training platform; this tool only
//! reads from it.

diesel::table! {
    users (id) {
        id -> Integer,
        name -> Text,
    }
}

diesel::table! {
    devices (id) {
        id -> Integer,
        name -> Text,
    }
}

diesel::table! {
    procedures (id) {
        id -> Integer,
        name -> Text,
    }
}

diesel::table! {
    training_sessions (id) {
        id -> Integer,
        user_id -> Integer,
        procedure_id -> Integer,
        device_id -> Integer,
        session_date -> Text,
        duration_minutes -> Integer,
        result -> Text,
    }
}

diesel::table! {
    user_feedback (id) {
        id -> Integer,
        session_id -> Integer,
        comment -> Text,
        score -> Integer,
    }
}

diesel::table! {
    evaluation_reports (id) {
        id -> Integer,
        session_id -> Integer,
        instructor_feedback -> Text,
        total_score -> Float,
    }
}

diesel::table! {
    device_maintenance (id) {
        id -> Integer,
        device_id -> Integer,
        maintenance_date -> Text,
        description -> Text,
        technician -> Text,
    }
}

diesel::table! {
    achievements (id) {
        id -> Integer,
        user_id -> Integer,
        name -> Text,
        description -> Text,
        achieved_on -> Text,
    }
}

diesel::table! {
    training_preferences (user_id) {
        user_id -> Integer,
        preferences_json -> Text,
    }
}

diesel::table! {
    performance_metrics (id) {
        id -> Integer,
        session_id -> Integer,
        metric_type -> Text,
        value -> Float,
    }
}

diesel::joinable!(training_sessions -> users (user_id));
diesel::joinable!(training_sessions -> procedures (procedure_id));
diesel::joinable!(training_sessions -> devices (device_id));
diesel::joinable!(user_feedback -> training_sessions (session_id));
diesel::joinable!(evaluation_reports -> training_sessions (session_id));
diesel::joinable!(performance_metrics -> training_sessions (session_id));
diesel::joinable!(device_maintenance -> devices (device_id));
diesel::joinable!(achievements -> users (user_id));
diesel::joinable!(training_preferences -> users (user_id));

diesel::allow_tables_to_appear_in_same_query!(
    users,
    devices,
    procedures,
    training_sessions,
    user_feedback,
    evaluation_reports,
    device_maintenance,
    achievements,
    training_preferences,
    performance_metrics,
);
