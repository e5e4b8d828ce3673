use serde_json::Value;

use crate::error::LivestatusError;

/// One result row, keyed by column name in header-row order.
///
/// Values keep whatever type JSON decoding produced. If the server sends a
/// duplicate column name, the later occurrence's value wins.
pub type Record = serde_json::Map<String, Value>;

/// Decodes a validated payload into records.
///
/// The payload must be a JSON array of arrays; its first row names the
/// columns and every following row is zipped with it positionally. An empty
/// array decodes to an empty record sequence.
pub(crate) fn decode(payload: &str) -> Result<Vec<Record>, LivestatusError> {
    let rows: Vec<Vec<Value>> = serde_json::from_str(payload)?;
    let Some((header, data)) = rows.split_first() else {
        return Ok(Vec::new());
    };

    let names: Vec<String> = header.iter().map(column_name).collect();
    let records = data
        .iter()
        .map(|row| {
            names
                .iter()
                .zip(row)
                .map(|(name, value)| (name.clone(), value.clone()))
                .collect()
        })
        .collect();
    Ok(records)
}

fn column_name(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
