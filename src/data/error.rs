//! Fixture errors.

/// Errors raised while reading the bundled fixtures.
#[derive(Debug, thiserror::Error)]
pub enum DataError {
    #[error("Bundled fixture {fixture} is malformed: {message}")]
    Malformed {
        fixture: &'static str,
        message: String,
    },

    #[error("No demo function #{index} (there are {available})")]
    NoSuchFunction { index: usize, available: usize },
}
