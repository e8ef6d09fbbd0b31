use thiserror::Error;

/// Everything that can go wrong inside a single API operation.
///
/// These never cross the public operation boundary: `Client` catches them,
/// writes one log line, and returns the documented failure value instead.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Connection, timeout, or response-decoding failure from the transport.
    #[error("http transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The service answered with a non-2xx status.
    #[error("request failed with HTTP {0}")]
    Status(reqwest::StatusCode),

    /// Dataset could not be encoded to CSV.
    #[error("csv encoding error: {0}")]
    Csv(#[from] csv::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV writer produced bytes that are not valid UTF-8.
    #[error("csv output is not valid utf-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}
