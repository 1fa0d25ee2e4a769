use thiserror::Error;

/// Configuration-related errors with structured variants.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing required field: {field}")]
    MissingField { field: &'static str },

    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },

    #[error("failed to read config file: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[source] toml::de::Error),

    #[error("{0}")]
    Other(String),
}

/// Failures at the database-session boundary.
///
/// `Open` and `Verify` happen at connect time and are fatal to the
/// session. `NotConnected` means a statement was requested after the
/// handle was closed; the menu loop never does this, so it surfaces as a
/// fatal error rather than a panic.
#[derive(Error, Debug)]
pub enum ConnectionError {
    #[error("failed to open database '{dsn}': {source}")]
    Open {
        dsn: String,
        #[source]
        source: diesel::ConnectionError,
    },

    #[error("database probe failed: {0}")]
    Verify(#[source] diesel::result::Error),

    #[error("statement requested on a closed connection")]
    NotConnected,
}

/// Failures while executing a report statement.
///
/// Recoverable at the menu level: other reports remain usable.
#[derive(Error, Debug)]
pub enum QueryError {
    #[error("report query failed: {0}")]
    Statement(#[from] diesel::result::Error),

    #[error("report '{report}' does not support filtering by {dimension}")]
    UnsupportedFilter {
        report: &'static str,
        dimension: &'static str,
    },
}

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Connection(#[from] ConnectionError),

    #[error(transparent)]
    Query(#[from] QueryError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl From<dialoguer::Error> for Error {
    fn from(err: dialoguer::Error) -> Self {
        // dialoguer::Error wraps an IO error
        Error::Io(std::io::Error::other(err.to_string()))
    }
}

impl Error {
    /// True for errors the interactive loop can report and survive.
    #[must_use]
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Error::Query(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_errors_are_recoverable() {
        let err = Error::Query(QueryError::UnsupportedFilter {
            report: "maintenance",
            dimension: "user",
        });
        assert!(err.is_recoverable());
    }

    #[test]
    fn connection_errors_are_fatal() {
        let err = Error::Connection(ConnectionError::NotConnected);
        assert!(!err.is_recoverable());
    }

    #[test]
    fn unsupported_filter_names_report_and_dimension() {
        let err = QueryError::UnsupportedFilter {
            report: "maintenance",
            dimension: "user",
        };
        let message = err.to_string();
        assert!(message.contains("maintenance"));
        assert!(message.contains("user"));
    }
}
