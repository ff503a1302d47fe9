use std::collections::BTreeMap;
use std::fmt;

use crate::error::{Error, Result};

// ---------------------------------------------------------------------------
// CellValue – a single cell in a table column
// ---------------------------------------------------------------------------

/// A dynamically-typed cell value.
/// Grouping keys live in sorted maps downstream so `CellValue` must be `Ord`.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    String(String),
    Integer(i64),
    Float(f64),
    Bool(bool),
    Null,
}

// -- Manual Eq/Ord so we can use CellValue as a sorted key --

impl Eq for CellValue {}

impl PartialOrd for CellValue {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for CellValue {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        use CellValue::*;
        fn discriminant(v: &CellValue) -> u8 {
            match v {
                Null => 0,
                Bool(_) => 1,
                Integer(_) => 2,
                Float(_) => 3,
                String(_) => 4,
            }
        }
        let da = discriminant(self);
        let db = discriminant(other);
        if da != db {
            return da.cmp(&db);
        }
        match (self, other) {
            (Null, Null) => std::cmp::Ordering::Equal,
            (Bool(a), Bool(b)) => a.cmp(b),
            (Integer(a), Integer(b)) => a.cmp(b),
            (Float(a), Float(b)) => a.total_cmp(b),
            (String(a), String(b)) => a.cmp(b),
            _ => std::cmp::Ordering::Equal,
        }
    }
}

impl std::hash::Hash for CellValue {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        std::mem::discriminant(self).hash(state);
        match self {
            CellValue::String(s) => s.hash(state),
            CellValue::Integer(i) => i.hash(state),
            CellValue::Float(f) => f.to_bits().hash(state),
            CellValue::Bool(b) => b.hash(state),
            CellValue::Null => {}
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::String(s) => write!(f, "{s}"),
            CellValue::Integer(i) => write!(f, "{i}"),
            CellValue::Float(v) => write!(f, "{v}"),
            CellValue::Bool(b) => write!(f, "{b}"),
            CellValue::Null => write!(f, "<null>"),
        }
    }
}

impl CellValue {
    /// Try to interpret the value as an `f64`.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            CellValue::Float(v) => Some(*v),
            CellValue::Integer(i) => Some(*i as f64),
            _ => None,
        }
    }

    /// Whether this cell can sit in a numeric column (`Null` counts: it
    /// surfaces as NaN through the numeric accessor).
    pub fn is_numeric(&self) -> bool {
        matches!(
            self,
            CellValue::Float(_) | CellValue::Integer(_) | CellValue::Null
        )
    }
}

// ---------------------------------------------------------------------------
// Column handles
// ---------------------------------------------------------------------------

/// A numeric view of a table column. `Null` cells appear as NaN; consumers
/// are expected to skip non-finite values.
#[derive(Debug, Clone, PartialEq)]
pub struct NumericColumn {
    pub name: String,
    pub values: Vec<f64>,
}

/// A categorical view of a table column: one label per row, plus the
/// ordered set of distinct labels.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoricalColumn {
    pub name: String,
    pub labels: Vec<String>,
    pub distinct: Vec<String>,
}

// ---------------------------------------------------------------------------
// Table – named, equal-length columns forming aligned rows
// ---------------------------------------------------------------------------

/// An in-memory table. Columns keep their insertion order; every column
/// has the same length.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    column_names: Vec<String>,
    columns: BTreeMap<String, Vec<CellValue>>,
    n_rows: usize,
}

impl Table {
    /// Build a table from ordered `(name, cells)` pairs.
    ///
    /// Fails with [`Error::InvalidColumn`] if a column name repeats or if
    /// the columns are not all the same length.
    pub fn from_columns(pairs: Vec<(String, Vec<CellValue>)>) -> Result<Self> {
        let n_rows = pairs.first().map(|(_, cells)| cells.len()).unwrap_or(0);
        let mut column_names = Vec::with_capacity(pairs.len());
        let mut columns = BTreeMap::new();

        for (name, cells) in pairs {
            if cells.len() != n_rows {
                return Err(Error::invalid_column(
                    &name,
                    format!("has {} rows, expected {n_rows}", cells.len()),
                ));
            }
            if columns.insert(name.clone(), cells).is_some() {
                return Err(Error::invalid_column(&name, "duplicate column name"));
            }
            column_names.push(name);
        }

        Ok(Table {
            column_names,
            columns,
            n_rows,
        })
    }

    pub fn n_rows(&self) -> usize {
        self.n_rows
    }

    pub fn is_empty(&self) -> bool {
        self.n_rows == 0
    }

    /// Column names in their original (header) order.
    pub fn column_names(&self) -> &[String] {
        &self.column_names
    }

    /// Raw cells of a column, if present.
    pub fn column(&self, name: &str) -> Option<&[CellValue]> {
        self.columns.get(name).map(Vec::as_slice)
    }

    fn require(&self, name: &str) -> Result<&[CellValue]> {
        self.column(name)
            .ok_or_else(|| Error::invalid_column(name, "no such column"))
    }

    /// Typed numeric accessor.
    ///
    /// Fails with [`Error::InvalidColumn`] when the column is absent or
    /// contains non-numeric cells. `Null` cells become NaN.
    pub fn numeric(&self, name: &str) -> Result<NumericColumn> {
        let cells = self.require(name)?;
        let mut values = Vec::with_capacity(cells.len());
        for (row, cell) in cells.iter().enumerate() {
            match cell {
                CellValue::Null => values.push(f64::NAN),
                other => match other.as_f64() {
                    Some(v) => values.push(v),
                    None => {
                        return Err(Error::invalid_column(
                            name,
                            format!("row {row} holds non-numeric value `{other}`"),
                        ))
                    }
                },
            }
        }
        Ok(NumericColumn {
            name: name.to_string(),
            values,
        })
    }

    /// Typed categorical accessor.
    ///
    /// A continuous (Float) column is the wrong semantic type for grouping
    /// and fails with [`Error::InvalidColumn`]; everything else is labelled
    /// by its display string. The distinct set keeps the cells' sort order.
    pub fn categorical(&self, name: &str) -> Result<CategoricalColumn> {
        let cells = self.require(name)?;
        for (row, cell) in cells.iter().enumerate() {
            if matches!(cell, CellValue::Float(_)) {
                return Err(Error::invalid_column(
                    name,
                    format!("row {row} holds continuous value `{cell}`, not a category label"),
                ));
            }
        }
        let mut sorted: Vec<&CellValue> = cells.iter().collect();
        sorted.sort();
        sorted.dedup();
        Ok(CategoricalColumn {
            name: name.to_string(),
            labels: cells.iter().map(CellValue::to_string).collect(),
            distinct: sorted.into_iter().map(CellValue::to_string).collect(),
        })
    }

    /// Names of columns the numeric accessor would accept.
    pub fn numeric_column_names(&self) -> Vec<String> {
        self.column_names
            .iter()
            .filter(|name| self.columns[name.as_str()].iter().all(CellValue::is_numeric))
            .cloned()
            .collect()
    }

    /// Names of columns the categorical accessor would accept.
    pub fn categorical_column_names(&self) -> Vec<String> {
        self.column_names
            .iter()
            .filter(|name| {
                !self.columns[name.as_str()]
                    .iter()
                    .any(|c| matches!(c, CellValue::Float(_)))
            })
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Table {
        Table::from_columns(vec![
            (
                "continent".into(),
                vec![
                    CellValue::String("Asia".into()),
                    CellValue::String("Europe".into()),
                    CellValue::String("Asia".into()),
                ],
            ),
            (
                "lifeExp".into(),
                vec![
                    CellValue::Float(70.0),
                    CellValue::Float(80.0),
                    CellValue::Integer(60),
                ],
            ),
        ])
        .unwrap()
    }

    #[test]
    fn ragged_columns_are_rejected() {
        let err = Table::from_columns(vec![
            ("a".into(), vec![CellValue::Integer(1)]),
            ("b".into(), vec![]),
        ])
        .unwrap_err();
        assert!(matches!(err, Error::InvalidColumn { ref name, .. } if name == "b"));
    }

    #[test]
    fn numeric_accessor_widens_and_nans_nulls() {
        let t = Table::from_columns(vec![(
            "v".into(),
            vec![CellValue::Integer(2), CellValue::Null, CellValue::Float(1.5)],
        )])
        .unwrap();
        let col = t.numeric("v").unwrap();
        assert_eq!(col.values[0], 2.0);
        assert!(col.values[1].is_nan());
        assert_eq!(col.values[2], 1.5);
    }

    #[test]
    fn numeric_accessor_rejects_strings_and_missing_columns() {
        let t = sample();
        assert!(matches!(
            t.numeric("continent"),
            Err(Error::InvalidColumn { .. })
        ));
        assert!(matches!(
            t.numeric("nope"),
            Err(Error::InvalidColumn { ref name, .. }) if name == "nope"
        ));
    }

    #[test]
    fn categorical_accessor_rejects_floats() {
        let t = sample();
        assert!(matches!(
            t.categorical("lifeExp"),
            Err(Error::InvalidColumn { .. })
        ));
        let col = t.categorical("continent").unwrap();
        assert_eq!(col.labels, vec!["Asia", "Europe", "Asia"]);
        assert_eq!(col.distinct, vec!["Asia", "Europe"]);
    }

    #[test]
    fn column_name_helpers() {
        let t = sample();
        assert_eq!(t.numeric_column_names(), vec!["lifeExp"]);
        assert_eq!(t.categorical_column_names(), vec!["continent"]);
    }
}
