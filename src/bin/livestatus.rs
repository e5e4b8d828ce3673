use std::error::Error;

use clap::Parser;
use livestatus::{Connection, Peer};

#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Livestatus endpoint: HOST:PORT for TCP or a Unix socket path
    address: String,
    /// Table to query
    table: String,
    /// Columns to request; server default (all columns) when omitted
    #[arg(short, long, value_delimiter = ',')]
    columns: Vec<String>,
    /// Filter expression, passed through verbatim (repeatable)
    #[arg(short, long)]
    filter: Vec<String>,
    /// Response text encoding label, e.g. utf-8 or windows-1252
    #[arg(long)]
    encoding: Option<String>,
    /// Disable TCP keep-alive probing
    #[arg(long)]
    no_keepalive: bool,
}

/// HOST:PORT parses as a TCP peer; anything else is a socket path.
fn parse_peer(address: &str) -> Peer {
    if let Some((host, port)) = address.rsplit_once(':') {
        if let Ok(port) = port.parse::<u16>() {
            return Peer::from((host, port));
        }
    }
    Peer::from(address)
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let cli = Cli::parse();
    let mut conn = Connection::new(parse_peer(&cli.address));
    if let Some(label) = &cli.encoding {
        let encoding = encoding_rs::Encoding::for_label(label.as_bytes())
            .ok_or_else(|| format!("unknown encoding '{label}'"))?;
        conn = conn.encoding(encoding);
    }
    if cli.no_keepalive {
        conn = conn.keepalive(None);
    }

    let mut query = conn.table(cli.table);
    if !cli.columns.is_empty() {
        query = query.columns(cli.columns);
    }
    for filter in cli.filter {
        query = query.filter(filter);
    }

    for record in query.execute()? {
        println!("{}", serde_json::to_string(&record)?);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn host_port_address_is_tcp() {
        assert_eq!(
            parse_peer("localhost:6557"),
            Peer::from(("localhost", 6557))
        );
    }

    #[test]
    fn path_address_is_a_unix_socket() {
        assert_eq!(
            parse_peer("/var/run/nagios/live"),
            Peer::from("/var/run/nagios/live")
        );
    }

    #[test]
    fn out_of_range_port_falls_back_to_a_path() {
        assert_eq!(parse_peer("./live:99999"), Peer::from("./live:99999"));
    }
}
