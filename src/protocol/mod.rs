//! The Livestatus wire protocol.
//!
//! This module implements the client side of the Livestatus query protocol,
//! a line-oriented text protocol exposed by monitoring engines over TCP or a
//! Unix domain socket. It covers the full exchange: sending a serialized
//! query, validating the response header, and decoding the tabular payload.
//!
//! # Overview
//!
//! Every call is one independent blocking round trip. The client connects,
//! writes the request text, half-closes the write direction of the socket
//! (the request carries no length prefix, so shutting down the write side is
//! what tells the server the request is complete), then reads until the peer
//! closes the connection.
//!
//! # Key Components
//!
//! - [`Connection`]: a long-lived handle to a peer address; opens and tears
//!   down a fresh socket on every call.
//! - [`Peer`]: the peer address; its shape (host/port pair vs. filesystem
//!   path) selects the socket family.
//! - [`Record`]: one decoded result row, keyed by column name.
//!
//! # Wire Format
//!
//! Requests are plain text, one header per line, terminated by a blank line:
//!
//! ```text
//! GET hosts
//! ResponseHeader: fixed16
//! Columns: name state
//! Filter: state = 0
//! OutputFormat: json
//! ColumnHeaders: on
//! ```
//!
//! Responses start with the fixed16 header: 16 bytes carrying a 3-digit
//! ASCII status code followed by length padding. On a `200` status the rest
//! of the stream is a JSON array of arrays whose first row names the
//! columns; on any other status it is a diagnostic message. This client
//! reads to end-of-stream rather than trusting the declared length.
//!
//! # See Also
//!
//! - [`query`](crate::query): builds the request text consumed here.
mod decoder;
mod response;
mod transport;

pub use decoder::Record;
pub use transport::{Connection, KeepaliveConfig, Peer};
