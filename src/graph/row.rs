//! Row and streaming types for query results.

use crate::error::AppError;
use futures::Stream;
use std::collections::HashMap;
use std::fmt;
use std::pin::Pin;

/// Parameters for SPARQL queries.
///
/// A map of `$name` tokens to the RDF terms they are bound to.
pub type Params = HashMap<String, Value>;

/// A stream of rows from a query result.
pub type RowStream<'a> = Pin<Box<dyn Stream<Item = Result<Row, AppError>> + Send + 'a>>;

/// A typed RDF term as returned in a solution binding.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Value {
    /// An IRI reference, without angle brackets.
    Iri(String),
    /// A literal's lexical form (datatype and language tag are dropped).
    Literal(String),
    /// A blank node label.
    BlankNode(String),
}

impl Value {
    /// Creates an IRI value.
    pub fn iri(iri: impl Into<String>) -> Self {
        Value::Iri(iri.into())
    }

    /// Creates a plain literal value.
    pub fn literal(value: impl Into<String>) -> Self {
        Value::Literal(value.into())
    }

    /// The IRI, lexical form, or blank node label.
    pub fn as_str(&self) -> &str {
        match self {
            Value::Iri(s) | Value::Literal(s) | Value::BlankNode(s) => s,
        }
    }

    /// Returns the IRI if this value is one.
    pub fn as_iri(&self) -> Option<&str> {
        match self {
            Value::Iri(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Conversion from a bound [`Value`] into a Rust type.
pub trait FromValue: Sized {
    fn from_value(value: &Value) -> Result<Self, String>;
}

impl FromValue for Value {
    fn from_value(value: &Value) -> Result<Self, String> {
        Ok(value.clone())
    }
}

impl FromValue for String {
    fn from_value(value: &Value) -> Result<Self, String> {
        Ok(value.as_str().to_string())
    }
}

impl FromValue for i64 {
    fn from_value(value: &Value) -> Result<Self, String> {
        value
            .as_str()
            .trim()
            .parse()
            .map_err(|e| format!("'{}' is not an integer: {}", value, e))
    }
}

impl FromValue for f64 {
    fn from_value(value: &Value) -> Result<Self, String> {
        value
            .as_str()
            .trim()
            .parse()
            .map_err(|e| format!("'{}' is not a number: {}", value, e))
    }
}

/// A single row from a query result.
///
/// Holds one binding per projected variable; unbound variables are absent.
#[derive(Debug, Clone, Default)]
pub struct Row {
    data: HashMap<String, Value>,
}

impl Row {
    /// Creates a new row from a map of variable names to values.
    pub fn new(data: HashMap<String, Value>) -> Self {
        Self { data }
    }

    /// Gets a bound variable, converting it to the requested type.
    ///
    /// # Errors
    ///
    /// Returns an error if the variable is unbound or the conversion fails.
    ///
    /// # Example
    ///
    /// ```ignore
    /// let uri: String = row.get("uri")?;
    /// let lat: f64 = row.get("lat")?;
    /// ```
    pub fn get<T: FromValue>(&self, key: &str) -> Result<T, AppError> {
        self.data
            .get(key)
            .ok_or_else(|| AppError::Decode(format!("variable not bound: {}", key)))
            .and_then(|v| {
                T::from_value(v)
                    .map_err(|e| AppError::Decode(format!("failed to decode '{}': {}", key, e)))
            })
    }

    /// Gets a variable, returning `None` if it is unbound.
    ///
    /// Still returns an error if the variable is bound but conversion fails.
    pub fn get_opt<T: FromValue>(&self, key: &str) -> Result<Option<T>, AppError> {
        match self.data.get(key) {
            Some(v) => T::from_value(v)
                .map(Some)
                .map_err(|e| AppError::Decode(format!("failed to decode '{}': {}", key, e))),
            None => Ok(None),
        }
    }

    /// Returns the raw value for a variable, if bound.
    pub fn get_raw(&self, key: &str) -> Option<&Value> {
        self.data.get(key)
    }

    /// Returns all bound variable names in this row.
    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.data.keys().map(|s| s.as_str())
    }

    /// Returns the number of bound variables in this row.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns true if no variable is bound.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

impl From<HashMap<String, Value>> for Row {
    fn from(data: HashMap<String, Value>) -> Self {
        Self::new(data)
    }
}

impl<const N: usize> From<[(&str, Value); N]> for Row {
    fn from(pairs: [(&str, Value); N]) -> Self {
        Self::new(
            pairs
                .into_iter()
                .map(|(k, v)| (k.to_string(), v))
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_get_string() {
        let row = Row::from([("label", Value::literal("Maimonides"))]);

        let label: String = row.get("label").unwrap();
        assert_eq!(label, "Maimonides");
    }

    #[test]
    fn test_row_get_iri_as_string() {
        let row = Row::from([("uri", Value::iri("http://example.org/Q1"))]);

        let uri: String = row.get("uri").unwrap();
        assert_eq!(uri, "http://example.org/Q1");
        assert_eq!(row.get_raw("uri").unwrap().as_iri(), Some("http://example.org/Q1"));
    }

    #[test]
    fn test_row_get_number() {
        let row = Row::from([("lat", Value::literal(" 31.77 ")), ("year", Value::literal("1190"))]);

        let lat: f64 = row.get("lat").unwrap();
        let year: i64 = row.get("year").unwrap();
        assert!((lat - 31.77).abs() < f64::EPSILON);
        assert_eq!(year, 1190);
    }

    #[test]
    fn test_row_get_number_malformed() {
        let row = Row::from([("year", Value::literal("c. 1200"))]);
        let result: Result<i64, _> = row.get("year");
        assert!(matches!(result, Err(AppError::Decode(_))));
    }

    #[test]
    fn test_row_get_missing_key() {
        let row = Row::default();
        let result: Result<String, _> = row.get("missing");
        assert!(result.is_err());
    }

    #[test]
    fn test_row_get_opt_unbound() {
        let row = Row::default();
        let name: Option<String> = row.get_opt("missing").unwrap();
        assert_eq!(name, None);
    }

    #[test]
    fn test_row_get_opt_present() {
        let row = Row::from([("year", Value::literal("2005"))]);
        let year: Option<String> = row.get_opt("year").unwrap();
        assert_eq!(year.as_deref(), Some("2005"));
    }

    #[test]
    fn test_row_columns() {
        let row = Row::from([("a", Value::literal("1")), ("b", Value::literal("2"))]);

        let mut columns: Vec<_> = row.columns().collect();
        columns.sort();
        assert_eq!(columns, vec!["a", "b"]);
        assert_eq!(row.len(), 2);
    }
}
