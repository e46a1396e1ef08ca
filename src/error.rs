use std::fmt;

/// Everything that can go wrong while extracting a playlist.
///
/// `Auth` aborts the whole run. The remaining variants only abort the
/// playlist that produced them.
#[derive(Debug)]
pub enum EtlError {
    /// Token endpoint unreachable, rejected the credentials or answered
    /// without an `access_token`.
    Auth(String),
    /// Non-success status, transport failure or unparsable body.
    Api(reqwest::Error),
    /// An expected JSON key is absent or has the wrong type.
    Structure(String),
    /// Missing or invalid configuration value.
    Config(String),
    IoError(std::io::Error),
    CsvError(csv::Error),
}

impl EtlError {
    pub fn structure(record: usize, pointer: &str, expected: &str) -> Self {
        EtlError::Structure(format!(
            "record {record}: expected {expected} at '{pointer}'"
        ))
    }
}

impl fmt::Display for EtlError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EtlError::Auth(msg) => write!(f, "authentication failed: {msg}"),
            EtlError::Api(err) => write!(f, "api request failed: {err}"),
            EtlError::Structure(msg) => write!(f, "unexpected response structure: {msg}"),
            EtlError::Config(msg) => write!(f, "configuration error: {msg}"),
            EtlError::IoError(err) => write!(f, "io error: {err}"),
            EtlError::CsvError(err) => write!(f, "csv error: {err}"),
        }
    }
}

impl std::error::Error for EtlError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            EtlError::Api(err) => Some(err),
            EtlError::IoError(err) => Some(err),
            EtlError::CsvError(err) => Some(err),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for EtlError {
    fn from(err: reqwest::Error) -> Self {
        EtlError::Api(err)
    }
}

impl From<std::io::Error> for EtlError {
    fn from(err: std::io::Error) -> Self {
        EtlError::IoError(err)
    }
}

impl From<csv::Error> for EtlError {
    fn from(err: csv::Error) -> Self {
        EtlError::CsvError(err)
    }
}
