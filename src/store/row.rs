use std::collections::BTreeMap;

use super::StoreError;

/// Statement parameter or column value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    Text(String),
    Int(i32),
    Null,
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Text(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Text(value.to_string())
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Int(value)
    }
}

/// One result row, keyed by column name.
///
/// NULL columns read as the zero value of the requested type.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Row {
    columns: BTreeMap<String, Value>,
}

impl Row {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a row by pairing column names with positional values.
    pub fn from_columns(columns: &[&str], values: Vec<Value>) -> Result<Self, StoreError> {
        if columns.len() != values.len() {
            return Err(StoreError::Statement(format!(
                "expected {} parameters, got {}",
                columns.len(),
                values.len()
            )));
        }

        Ok(Self {
            columns: columns
                .iter()
                .map(|name| name.to_string())
                .zip(values)
                .collect(),
        })
    }

    /// Builds a row from a JSON object such as the output of `to_jsonb`.
    pub fn from_json(value: serde_json::Value) -> Result<Self, StoreError> {
        let serde_json::Value::Object(object) = value else {
            return Err(StoreError::decode("*", "row is not a JSON object"));
        };

        let mut row = Row::new();
        for (column, value) in object {
            let value = match value {
                serde_json::Value::Null => Value::Null,
                serde_json::Value::String(text) => Value::Text(text),
                serde_json::Value::Number(number) => number
                    .as_i64()
                    .and_then(|n| i32::try_from(n).ok())
                    .map(Value::Int)
                    .ok_or_else(|| {
                        StoreError::decode(&column, format!("{number} is not a 32-bit integer"))
                    })?,
                other => {
                    return Err(StoreError::decode(
                        &column,
                        format!("unsupported value {other}"),
                    ));
                }
            };
            row.insert(column, value);
        }
        Ok(row)
    }

    pub fn insert(&mut self, column: impl Into<String>, value: Value) {
        self.columns.insert(column.into(), value);
    }

    pub fn get(&self, column: &str) -> Option<&Value> {
        self.columns.get(column)
    }

    pub fn text(&self, column: &str) -> Result<String, StoreError> {
        match self.get(column) {
            Some(Value::Text(text)) => Ok(text.clone()),
            Some(Value::Null) => Ok(String::new()),
            Some(Value::Int(_)) => Err(StoreError::decode(column, "expected text, found integer")),
            None => Err(StoreError::decode(column, "missing column")),
        }
    }

    pub fn int(&self, column: &str) -> Result<i32, StoreError> {
        match self.get(column) {
            Some(Value::Int(number)) => Ok(*number),
            Some(Value::Null) => Ok(0),
            Some(Value::Text(_)) => Err(StoreError::decode(column, "expected integer, found text")),
            None => Err(StoreError::decode(column, "missing column")),
        }
    }
}
