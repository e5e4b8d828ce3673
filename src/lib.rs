pub mod error;
pub mod protocol;
pub mod query;

pub use error::LivestatusError;
pub use protocol::{Connection, KeepaliveConfig, Peer, Record};
pub use query::Query;
