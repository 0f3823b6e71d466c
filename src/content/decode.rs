// src/content/decode.rs
//
// The two remote payload shapes, each behind the same
// `&str -> Vec<SheetRow>` contract. Which decoder runs is decided by the
// transport that produced the response, never by sniffing the payload.
use serde::Deserialize;
use serde_json::Value;
use std::fmt;

/// One parsed (key, value) candidate from the remote sheet. Rows are raw at
/// this stage; empty keys/values are filtered out later by the fetcher.
#[derive(Debug, Clone, PartialEq)]
pub struct SheetRow {
    pub key: String,
    pub value: String,
}

#[derive(Debug)]
pub enum DecodeError {
    /// The gviz wrapper markers (`{` ... `}`) were absent or inverted.
    MissingPayload,
    Json(serde_json::Error),
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecodeError::MissingPayload => write!(f, "no JSON payload between wrapper markers"),
            DecodeError::Json(e) => write!(f, "malformed payload: {}", e),
        }
    }
}

impl std::error::Error for DecodeError {}

impl From<serde_json::Error> for DecodeError {
    fn from(e: serde_json::Error) -> Self {
        DecodeError::Json(e)
    }
}

#[derive(Deserialize)]
struct RowObjectsBody {
    rows: Vec<RawRow>,
}

#[derive(Deserialize)]
struct RawRow {
    #[serde(default)]
    key: Option<Value>,
    #[serde(default)]
    value: Option<Value>,
}

/// Decode the row-objects shape: `{ "rows": [ { "key": .., "value": .. } ] }`.
/// Rows missing either field are skipped, not errors.
pub fn decode_row_objects(body: &str) -> Result<Vec<SheetRow>, DecodeError> {
    let parsed: RowObjectsBody = serde_json::from_str(body)?;
    let rows = parsed
        .rows
        .into_iter()
        .filter_map(|row| {
            let key = row.key.as_ref().and_then(cell_text)?;
            let value = row.value.as_ref().and_then(cell_text)?;
            Some(SheetRow { key: key.trim().to_string(), value })
        })
        .collect();
    Ok(rows)
}

#[derive(Deserialize)]
struct TableBody {
    table: Table,
}

#[derive(Deserialize)]
struct Table {
    rows: Vec<TableRow>,
}

#[derive(Deserialize)]
struct TableRow {
    #[serde(default)]
    c: Vec<Option<TableCell>>,
}

#[derive(Deserialize)]
struct TableCell {
    #[serde(default)]
    v: Option<Value>,
}

/// Decode the nested table shape the gviz endpoint returns. The body is text
/// wrapping a JSON object (a comment prefix and a `);` suffix), so everything
/// outside the first `{` and the last `}` is stripped before parsing. The
/// first two cells of each row are key and value; rows with fewer cells or
/// null cells are skipped.
pub fn decode_table(body: &str) -> Result<Vec<SheetRow>, DecodeError> {
    let start = body.find('{').ok_or(DecodeError::MissingPayload)?;
    let end = body.rfind('}').ok_or(DecodeError::MissingPayload)?;
    if end < start {
        return Err(DecodeError::MissingPayload);
    }
    let parsed: TableBody = serde_json::from_str(&body[start..=end])?;

    let rows = parsed
        .table
        .rows
        .into_iter()
        .filter_map(|row| {
            let mut cells = row.c.into_iter();
            let key_cell = cells.next().flatten()?;
            let value_cell = cells.next().flatten()?;
            let key = key_cell.v.as_ref().and_then(cell_text)?;
            let value = value_cell.v.as_ref().and_then(cell_text)?;
            Some(SheetRow { key: key.trim().to_string(), value })
        })
        .collect();
    Ok(rows)
}

// Sheet cells carry whatever the editor typed: strings, numbers, booleans.
// All of them render as text; nulls and structured values do not.
fn cell_text(v: &Value) -> Option<String> {
    match v {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_objects_basic() {
        let body = r#"{"rows":[{"key":"heroTitle","value":"X"},{"key":"goal","value":30000}]}"#;
        let rows = decode_row_objects(body).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0], SheetRow { key: "heroTitle".into(), value: "X".into() });
        assert_eq!(rows[1].value, "30000");
    }

    #[test]
    fn row_objects_skips_partial_rows() {
        let body = r#"{"rows":[{"key":"a"},{"value":"b"},{"key":"c","value":null},{"key":"d","value":"ok"}]}"#;
        let rows = decode_row_objects(body).unwrap();
        assert_eq!(rows, vec![SheetRow { key: "d".into(), value: "ok".into() }]);
    }

    #[test]
    fn row_objects_requires_rows_array() {
        assert!(matches!(
            decode_row_objects(r#"{"data":[]}"#),
            Err(DecodeError::Json(_))
        ));
    }

    #[test]
    fn table_strips_wrapper_text() {
        let body = concat!(
            "/*O_o*/\ngoogle.visualization.Query.setResponse(",
            r#"{"table":{"rows":[{"c":[{"v":" heroTitle "},{"v":"Y"}]}]}}"#,
            ");"
        );
        let rows = decode_table(body).unwrap();
        assert_eq!(rows, vec![SheetRow { key: "heroTitle".into(), value: "Y".into() }]);
    }

    #[test]
    fn table_stringifies_numeric_cells() {
        let body = r#"{"table":{"rows":[{"c":[{"v":"donorCount"},{"v":42}]}]}}"#;
        let rows = decode_table(body).unwrap();
        assert_eq!(rows[0].value, "42");
    }

    #[test]
    fn table_skips_short_and_null_rows() {
        let body = r#"{"table":{"rows":[
            {"c":[{"v":"only-one-cell"}]},
            {"c":[null,{"v":"x"}]},
            {"c":[{"v":"k"},{"v":null}]},
            {"c":[{"v":"good"},{"v":"row"}]}
        ]}}"#;
        let rows = decode_table(body).unwrap();
        assert_eq!(rows, vec![SheetRow { key: "good".into(), value: "row".into() }]);
    }

    #[test]
    fn table_without_markers_is_rejected() {
        assert!(matches!(
            decode_table("no json here"),
            Err(DecodeError::MissingPayload)
        ));
    }

    #[test]
    fn truncated_table_body_is_a_parse_error() {
        // A `}` exists before the cut, so the marker scan passes but the
        // JSON inside the markers is invalid.
        let body = r#"{"table":{"rows":[{"c":[{"v":"a"}"#;
        assert!(matches!(decode_table(body), Err(DecodeError::Json(_))));
    }
}
