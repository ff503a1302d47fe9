use std::path::Path;

use anyhow::{Context, Result, bail};
use serde_json::Value as JsonValue;

use super::model::{CellValue, Table};

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load a table from a file.  Dispatch by extension.
///
/// Supported formats:
/// * `.csv`  – delimited text, header row naming the columns
/// * `.json` – records-oriented array: `[{ "col": value, ... }, ...]`
pub fn load_file(path: &Path) -> Result<Table> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    match ext.as_str() {
        "csv" => load_csv(path),
        "json" => load_json(path),
        other => bail!("Unsupported file extension: .{other}"),
    }
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

/// CSV layout: comma-separated, header row with column names, one record
/// per row. Cell types are guessed per cell and then normalized per column.
fn load_csv(path: &Path) -> Result<Table> {
    let reader = csv::Reader::from_path(path).context("opening CSV")?;
    table_from_csv_reader(reader)
}

/// Shared CSV parsing over any reader; used by [`load_csv`] and by tests.
pub fn table_from_csv_reader<R: std::io::Read>(mut reader: csv::Reader<R>) -> Result<Table> {
    let headers: Vec<String> = reader
        .headers()
        .context("reading CSV headers")?
        .iter()
        .map(|h| h.to_string())
        .collect();

    let mut columns: Vec<Vec<CellValue>> = vec![Vec::new(); headers.len()];

    for (row_no, result) in reader.records().enumerate() {
        let record = result.with_context(|| format!("CSV row {row_no}"))?;
        if record.len() != headers.len() {
            bail!(
                "CSV row {row_no}: has {} fields, expected {}",
                record.len(),
                headers.len()
            );
        }
        for (col_idx, value) in record.iter().enumerate() {
            columns[col_idx].push(guess_cell_type(value));
        }
    }

    let pairs = headers
        .into_iter()
        .zip(columns)
        .map(|(name, cells)| (name, normalize_column(cells)))
        .collect();

    Table::from_columns(pairs).context("assembling table")
}

fn guess_cell_type(s: &str) -> CellValue {
    let s = s.trim();
    if s.is_empty() {
        return CellValue::Null;
    }
    if let Ok(i) = s.parse::<i64>() {
        return CellValue::Integer(i);
    }
    if let Ok(f) = s.parse::<f64>() {
        return CellValue::Float(f);
    }
    if s == "true" || s == "false" {
        return CellValue::Bool(s == "true");
    }
    CellValue::String(s.to_string())
}

/// Force every cell of a column to one consistent type.
///
/// * Any String cell makes the whole column textual.
/// * Otherwise a Float cell widens sibling Integers to Float.
/// * Null cells are left alone in either case.
fn normalize_column(cells: Vec<CellValue>) -> Vec<CellValue> {
    let has_string = cells
        .iter()
        .any(|c| matches!(c, CellValue::String(_) | CellValue::Bool(_)));
    let has_float = cells.iter().any(|c| matches!(c, CellValue::Float(_)));
    let has_int = cells.iter().any(|c| matches!(c, CellValue::Integer(_)));

    if has_string && (has_float || has_int) {
        return cells
            .into_iter()
            .map(|c| match c {
                CellValue::Null => CellValue::Null,
                CellValue::String(s) => CellValue::String(s),
                other => CellValue::String(other.to_string()),
            })
            .collect();
    }
    if has_float && has_int {
        return cells
            .into_iter()
            .map(|c| match c {
                CellValue::Integer(i) => CellValue::Float(i as f64),
                other => other,
            })
            .collect();
    }
    cells
}

// ---------------------------------------------------------------------------
// JSON loader
// ---------------------------------------------------------------------------

/// Expected JSON schema (records-oriented):
///
/// ```json
/// [
///   { "country": "Japan", "continent": "Asia", "lifeExp": 82.0 },
///   ...
/// ]
/// ```
///
/// Column order follows first appearance; rows missing a key get Null.
fn load_json(path: &Path) -> Result<Table> {
    let text = std::fs::read_to_string(path).context("reading JSON file")?;
    let root: JsonValue = serde_json::from_str(&text).context("parsing JSON")?;

    let records = root.as_array().context("Expected top-level JSON array")?;

    let mut names: Vec<String> = Vec::new();
    for (i, rec) in records.iter().enumerate() {
        let obj = rec
            .as_object()
            .with_context(|| format!("Row {i} is not a JSON object"))?;
        for key in obj.keys() {
            if !names.contains(key) {
                names.push(key.clone());
            }
        }
    }

    let mut columns: Vec<Vec<CellValue>> = vec![Vec::with_capacity(records.len()); names.len()];
    for rec in records {
        // First pass already rejected non-object rows.
        let Some(obj) = rec.as_object() else { continue };
        for (col_idx, name) in names.iter().enumerate() {
            let cell = obj.get(name).map(json_to_cell).unwrap_or(CellValue::Null);
            columns[col_idx].push(cell);
        }
    }

    let pairs = names
        .into_iter()
        .zip(columns)
        .map(|(name, cells)| (name, normalize_column(cells)))
        .collect();

    Table::from_columns(pairs).context("assembling table")
}

fn json_to_cell(val: &JsonValue) -> CellValue {
    match val {
        JsonValue::String(s) => CellValue::String(s.clone()),
        JsonValue::Number(n) => {
            if let Some(i) = n.as_i64() {
                CellValue::Integer(i)
            } else if let Some(f) = n.as_f64() {
                CellValue::Float(f)
            } else {
                CellValue::String(n.to_string())
            }
        }
        JsonValue::Bool(b) => CellValue::Bool(*b),
        JsonValue::Null => CellValue::Null,
        other => CellValue::String(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table_from_str(csv_text: &str) -> Table {
        let reader = csv::Reader::from_reader(csv_text.as_bytes());
        table_from_csv_reader(reader).unwrap()
    }

    #[test]
    fn header_row_names_the_columns() {
        let t = table_from_str("country,continent,lifeExp\nJapan,Asia,82.0\nSpain,Europe,83.1\n");
        assert_eq!(t.column_names(), ["country", "continent", "lifeExp"]);
        assert_eq!(t.n_rows(), 2);
    }

    #[test]
    fn cell_types_are_guessed() {
        let t = table_from_str("label,count,score,flag,blank\nx,3,1.5,true,\n");
        let row = |name: &str| t.column(name).unwrap()[0].clone();
        assert_eq!(row("label"), CellValue::String("x".into()));
        assert_eq!(row("count"), CellValue::Integer(3));
        assert_eq!(row("score"), CellValue::Float(1.5));
        assert_eq!(row("flag"), CellValue::Bool(true));
        assert_eq!(row("blank"), CellValue::Null);
    }

    #[test]
    fn mixed_int_float_column_is_widened() {
        let t = table_from_str("v\n1\n2.5\n");
        assert_eq!(t.column("v").unwrap()[0], CellValue::Float(1.0));
        assert_eq!(t.column("v").unwrap()[1], CellValue::Float(2.5));
    }

    #[test]
    fn stray_text_makes_a_column_textual() {
        let t = table_from_str("v\n1\noops\n");
        assert_eq!(t.column("v").unwrap()[0], CellValue::String("1".into()));
        assert_eq!(t.column("v").unwrap()[1], CellValue::String("oops".into()));
    }

    #[test]
    fn ragged_rows_fail() {
        let reader = csv::Reader::from_reader("a,b\n1\n".as_bytes());
        assert!(table_from_csv_reader(reader).is_err());
    }
}
