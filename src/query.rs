//! Query construction for Livestatus tables.
//!
//! A [`Query`] is minted from a [`Connection`](crate::Connection) with a
//! table name, optionally refined with columns and filters, and consumed by
//! a single [`execute`](Query::execute) call.
use std::fmt;

use crate::{LivestatusError, Record, protocol::Connection};

/// One Livestatus request under construction.
///
/// Setters take the query by value and hand it back, so a partially built
/// query has exactly one owner and cannot be mutated through an alias.
/// Table names are passed through untouched; the server decides whether a
/// table exists.
#[derive(Debug)]
pub struct Query<'a> {
    conn: &'a Connection,
    table: String,
    columns: Vec<String>,
    filters: Vec<String>,
}

impl<'a> Query<'a> {
    pub(crate) fn new(conn: &'a Connection, table: impl Into<String>) -> Self {
        Self {
            conn,
            table: table.into(),
            columns: Vec::new(),
            filters: Vec::new(),
        }
    }

    /// Replaces the column selection. An empty selection requests the
    /// server default, which is every column of the table.
    pub fn columns<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.columns = names.into_iter().map(Into::into).collect();
        self
    }

    /// Appends one filter expression, passed to the server verbatim.
    /// Multiple filters are ANDed by the protocol.
    pub fn filter(mut self, expr: impl Into<String>) -> Self {
        self.filters.push(expr.into());
        self
    }

    /// Serializes the query and performs one blocking round trip over the
    /// bound connection. Failures surface from the transport unchanged.
    pub fn execute(self) -> Result<Vec<Record>, LivestatusError> {
        self.conn.execute(&self.to_string())
    }
}

impl fmt::Display for Query<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "GET {}\nResponseHeader: fixed16", self.table)?;
        if self.columns.iter().any(|c| !c.is_empty()) {
            write!(f, "\nColumns: {}", self.columns.join(" "))?;
        }
        for filter in &self.filters {
            write!(f, "\nFilter: {filter}")?;
        }
        // The trailing newline terminates the request on the wire.
        write!(f, "\nOutputFormat: json\nColumnHeaders: on\n")
    }
}

#[cfg(test)]
mod tests {
    use crate::protocol::Connection;

    fn conn() -> Connection {
        Connection::new(("localhost", 6557))
    }

    #[test]
    fn bare_query_wire_text() {
        let conn = conn();

        assert_eq!(
            conn.table("hosts").to_string(),
            "GET hosts\nResponseHeader: fixed16\nOutputFormat: json\nColumnHeaders: on\n"
        );
    }

    #[test]
    fn columns_and_filters_in_order() {
        let conn = conn();
        let query = conn
            .table("services")
            .columns(["host_name", "state"])
            .filter("state = 2")
            .filter("host_name = web01");

        assert_eq!(
            query.to_string(),
            "GET services\n\
             ResponseHeader: fixed16\n\
             Columns: host_name state\n\
             Filter: state = 2\n\
             Filter: host_name = web01\n\
             OutputFormat: json\n\
             ColumnHeaders: on\n"
        );
    }

    #[test]
    fn columns_replace_prior_selection() {
        let conn = conn();
        let query = conn.table("hosts").columns(["name"]).columns(["address"]);

        let text = query.to_string();
        assert!(text.contains("Columns: address\n"));
        assert!(!text.contains("name"));
    }

    #[test]
    fn empty_column_names_omit_the_line() {
        let conn = conn();
        let query = conn.table("hosts").columns(["", ""]);

        assert!(!query.to_string().contains("Columns:"));
    }

    #[test]
    fn any_table_name_is_accepted() {
        let conn = conn();

        let text = conn.table("no_such_table").to_string();
        assert!(text.starts_with("GET no_such_table\n"));
    }
}
