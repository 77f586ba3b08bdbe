use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    #[error("unknown manga status code {0}")]
    UnknownStatus(i32),
    #[error("invalid manga status {0:?}, expected a status name or code")]
    InvalidStatus(String),
}
