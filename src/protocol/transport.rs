use std::{
    io::{self, Read, Write},
    net::{Shutdown, ToSocketAddrs},
    path::{Path, PathBuf},
    time::Duration,
};

use encoding_rs::{Encoding, WINDOWS_1252};
use log::debug;
use socket2::{Domain, SockAddr, Socket, TcpKeepalive, Type};

use crate::{error::LivestatusError, query::Query};

use super::{decoder, decoder::Record, response};

/// Address of a Livestatus endpoint.
///
/// The shape picks the socket family: a host/port pair means TCP, a path
/// means a Unix domain socket.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Peer {
    Tcp { host: String, port: u16 },
    Unix(PathBuf),
}

impl<H: Into<String>> From<(H, u16)> for Peer {
    fn from((host, port): (H, u16)) -> Self {
        Peer::Tcp {
            host: host.into(),
            port,
        }
    }
}

impl From<PathBuf> for Peer {
    fn from(path: PathBuf) -> Self {
        Peer::Unix(path)
    }
}

impl From<&Path> for Peer {
    fn from(path: &Path) -> Self {
        Peer::Unix(path.to_path_buf())
    }
}

impl From<&str> for Peer {
    fn from(path: &str) -> Self {
        Peer::Unix(PathBuf::from(path))
    }
}

/// TCP keep-alive tuning applied to every TCP round trip.
///
/// Monitoring engines sit on long-lived deployments where a dead peer would
/// otherwise leave the read blocked forever; short probes surface that.
/// Not applied to Unix domain sockets, where keep-alive has no meaning.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeepaliveConfig {
    /// Idle time before the first probe.
    pub idle: Duration,
    /// Interval between probes.
    pub interval: Duration,
    /// Unanswered probes before the connection is declared dead.
    pub retries: u32,
}

impl Default for KeepaliveConfig {
    fn default() -> Self {
        Self {
            idle: Duration::from_secs(10),
            interval: Duration::from_secs(5),
            retries: 5,
        }
    }
}

/// A handle to one Livestatus endpoint.
///
/// The handle itself is long-lived but holds no socket: every call opens a
/// fresh connection, performs one blocking round trip and tears it down.
/// Because no per-call state is stored on the handle, one `Connection` may
/// be shared across threads; concurrent calls simply use separate sockets.
///
/// ```no_run
/// use livestatus::Connection;
///
/// let conn = Connection::new(("monitoring.example.org", 6557));
/// let hosts = conn
///     .table("hosts")
///     .columns(["name", "state"])
///     .filter("state = 0")
///     .execute()?;
/// # Ok::<(), livestatus::LivestatusError>(())
/// ```
#[derive(Debug)]
pub struct Connection {
    peer: Peer,
    encoding: &'static Encoding,
    keepalive: Option<KeepaliveConfig>,
}

impl Connection {
    /// Creates a handle with the default response encoding (Latin-1
    /// compatible `windows-1252`) and default TCP keep-alive tuning.
    pub fn new(peer: impl Into<Peer>) -> Self {
        Self {
            peer: peer.into(),
            encoding: WINDOWS_1252,
            keepalive: Some(KeepaliveConfig::default()),
        }
    }

    /// Overrides the encoding used to turn response bytes into text.
    pub fn encoding(mut self, encoding: &'static Encoding) -> Self {
        self.encoding = encoding;
        self
    }

    /// Overrides or disables TCP keep-alive probing.
    pub fn keepalive(mut self, keepalive: Option<KeepaliveConfig>) -> Self {
        self.keepalive = keepalive;
        self
    }

    /// Starts a query against the named table. Any string is accepted; the
    /// server is the authority on which tables exist.
    pub fn table(&self, name: impl Into<String>) -> Query<'_> {
        Query::new(self, name)
    }

    /// Performs one blocking round trip with the given request text and
    /// decodes the response into records.
    pub fn execute(&self, request: &str) -> Result<Vec<Record>, LivestatusError> {
        let raw = self.round_trip(request.as_bytes())?;
        let payload = response::validate(&raw)?;
        decoder::decode(payload)
    }

    fn round_trip(&self, request: &[u8]) -> Result<String, LivestatusError> {
        // The socket drops on every exit path below, so teardown can never
        // displace an error raised during the exchange.
        let mut socket = self.connect()?;
        socket.write_all(request)?;
        // Half-close: the request carries no length prefix, so shutting
        // down the write side is what signals "end of request".
        socket.shutdown(Shutdown::Write)?;

        let mut bytes = Vec::new();
        socket.read_to_end(&mut bytes)?;
        debug!("read {} bytes from {:?}", bytes.len(), self.peer);

        let (text, _, _) = self.encoding.decode(&bytes);
        Ok(text.into_owned())
    }

    fn connect(&self) -> Result<Socket, LivestatusError> {
        match &self.peer {
            Peer::Tcp { host, port } => {
                let addr = (host.as_str(), *port)
                    .to_socket_addrs()?
                    .next()
                    .ok_or_else(|| {
                        io::Error::new(
                            io::ErrorKind::NotFound,
                            format!("no address found for {host}:{port}"),
                        )
                    })?;

                let socket = Socket::new(Domain::for_address(addr), Type::STREAM, None)?;
                socket.set_reuse_address(true)?;
                if let Some(ka) = &self.keepalive {
                    let probes = TcpKeepalive::new()
                        .with_time(ka.idle)
                        .with_interval(ka.interval)
                        .with_retries(ka.retries);
                    socket.set_tcp_keepalive(&probes)?;
                }

                debug!("connecting to {addr} over tcp");
                socket.connect(&addr.into())?;
                Ok(socket)
            }
            Peer::Unix(path) => {
                let socket = Socket::new(Domain::UNIX, Type::STREAM, None)?;

                debug!("connecting to {} over unix socket", path.display());
                socket.connect(&SockAddr::unix(path)?)?;
                Ok(socket)
            }
        }
    }
}
