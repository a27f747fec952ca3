//! Startup failures surfaced to the user instead of a partial dashboard.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum InitError {
    #[error("no statistics found in {origin}; generate them first using the 'tcpstats' script")]
    Missing { origin: String },

    #[error("statistics in {origin} are malformed: {source}")]
    Malformed {
        origin: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("couldn't read statistics from {origin}: {source}")]
    Io {
        origin: String,
        #[source]
        source: std::io::Error,
    },

    #[error("host page couldn't provide {origin}: {reason}")]
    Host { origin: String, reason: String },
}

impl InitError {
    pub fn is_missing(&self) -> bool {
        matches!(self, InitError::Missing { .. })
    }
}
