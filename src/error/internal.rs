use thiserror::Error;

/// Internal issues with the codebase indicating unexpected behavior & possible bugs
#[derive(Error, Debug)]
pub enum InternalError {
    /// A timezone name read back from the database is not a known IANA zone.
    #[error("Unknown timezone '{0}' stored for user {1}")]
    InvalidTimezone(String, u64),
}
