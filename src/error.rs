use std::io;

use thiserror::Error;

/// Failure raised by a Livestatus round trip.
///
/// Every failure surfaces through this one type; nothing is retried or
/// recovered internally.
#[derive(Debug, Error)]
pub enum LivestatusError {
    /// The underlying connect, send or read failed at the OS level.
    #[error("failed to connect to Livestatus: {0}")]
    Transport(#[from] io::Error),

    /// The peer closed the connection without sending a single byte.
    #[error("Livestatus service returned no data")]
    EmptyResponse,

    /// The peer answered with a status code other than `200`; the message
    /// is everything the server sent after the fixed16 header.
    #[error("the Livestatus query contained an error: {0}")]
    Protocol(String),

    /// The response payload was not well-formed JSON of the expected shape.
    #[error("failed to decode Livestatus payload: {0}")]
    Decode(#[from] serde_json::Error),
}
