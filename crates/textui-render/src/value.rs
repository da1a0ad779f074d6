//! Cell values and ordered records.
//!
//! A [`Record`] is one row of structured data: an insertion-ordered mapping
//! from field name to [`Value`]. Records feed the CRUD screen and also hold
//! form answers, so field order is always the order fields were first added.

use std::fmt::{self, Write};

use chrono::{NaiveDate, NaiveDateTime};
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

/// Default pattern used to display dates.
pub const DEFAULT_DATE_FORMAT: &str = "%Y-%m-%d";

/// A scalar, date or list value.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    Text(String),
    Integer(i64),
    Float(f64),
    Date(NaiveDateTime),
    List(Vec<String>),
    Bool(bool),
    Null,
}

impl Value {
    /// Name of the variant, for error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Text(_) => "text",
            Value::Integer(_) => "integer",
            Value::Float(_) => "float",
            Value::Date(_) => "date",
            Value::List(_) => "list",
            Value::Bool(_) => "bool",
            Value::Null => "null",
        }
    }

    /// Borrow the text, if this is a text value.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Numeric view of integers and floats.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Integer(n) => Some(*n as f64),
            Value::Float(n) => Some(*n),
            _ => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Display the value, formatting dates with `date_format` (a chrono pattern).
    ///
    /// Returns `None` when `date_format` has an invalid specifier.
    pub fn display_with(&self, date_format: &str) -> Option<String> {
        match self {
            Value::Date(date) => {
                let mut out = String::new();
                write!(out, "{}", date.format(date_format)).ok()?;
                Some(out)
            }
            other => Some(other.to_string()),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Text(s) => write!(f, "{}", s),
            Value::Integer(n) => write!(f, "{}", n),
            Value::Float(n) => write!(f, "{}", n),
            Value::Date(date) => write!(f, "{}", date.format(DEFAULT_DATE_FORMAT)),
            Value::List(items) => write!(f, "{}", items.join(", ")),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Null => Ok(()),
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Integer(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Integer(n.into())
    }
}

impl From<u32> for Value {
    fn from(n: u32) -> Self {
        Value::Integer(n.into())
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Float(n)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<NaiveDateTime> for Value {
    fn from(date: NaiveDateTime) -> Self {
        Value::Date(date)
    }
}

impl From<NaiveDate> for Value {
    fn from(date: NaiveDate) -> Self {
        Value::Date(date.and_time(chrono::NaiveTime::MIN))
    }
}

impl From<Vec<String>> for Value {
    fn from(items: Vec<String>) -> Self {
        Value::List(items)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(Value::Null)
    }
}

/// An insertion-ordered mapping from field name to value.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Record {
    fields: Vec<(String, Value)>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    /// Insert a field. An existing key keeps its position and gets the new value.
    ///
    /// Returns the previous value, if any.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        let key = key.into();
        let value = value.into();
        match self.fields.iter_mut().find(|(k, _)| *k == key) {
            Some((_, slot)) => Some(std::mem::replace(slot, value)),
            None => {
                self.fields.push((key, value));
                None
            }
        }
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn remove(&mut self, key: &str) -> Option<Value> {
        let pos = self.fields.iter().position(|(k, _)| k == key)?;
        Some(self.fields.remove(pos).1)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(k, _)| k.as_str())
    }

    pub fn values(&self) -> impl Iterator<Item = &Value> {
        self.fields.iter().map(|(_, v)| v)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn clear(&mut self) {
        self.fields.clear();
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Record {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut record = Record::new();
        for (k, v) in iter {
            record.insert(k, v);
        }
        record
    }
}

impl Serialize for Record {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (k, v) in &self.fields {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_scalars() {
        assert_eq!(Value::from("abc").to_string(), "abc");
        assert_eq!(Value::from(43).to_string(), "43");
        assert_eq!(Value::from(224.99).to_string(), "224.99");
        assert_eq!(Value::from(348.0).to_string(), "348");
        assert_eq!(Value::Null.to_string(), "");
    }

    #[test]
    fn display_list_joins_with_comma() {
        let value = Value::from(vec!["a".to_string(), "b".to_string()]);
        assert_eq!(value.to_string(), "a, b");
    }

    #[test]
    fn display_date_default_and_custom() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 9).unwrap();
        let value = Value::from(date);
        assert_eq!(value.to_string(), "2024-03-09");
        assert_eq!(value.display_with("%d/%m/%Y").unwrap(), "09/03/2024");
        assert_eq!(value.display_with("%Q"), None);
        assert_eq!(Value::from(3).display_with("%Q").unwrap(), "3");
    }

    #[test]
    fn record_keeps_insertion_order() {
        let record = Record::new()
            .with("name", "John")
            .with("age", 43)
            .with("gender", "M");
        let keys: Vec<_> = record.keys().collect();
        assert_eq!(keys, vec!["name", "age", "gender"]);
    }

    #[test]
    fn record_insert_replaces_in_place() {
        let mut record = Record::new().with("a", 1).with("b", 2);
        let previous = record.insert("a", 10);
        assert_eq!(previous, Some(Value::Integer(1)));
        let pairs: Vec<_> = record.iter().map(|(k, v)| (k, v.to_string())).collect();
        assert_eq!(pairs, vec![("a", "10".to_string()), ("b", "2".to_string())]);
    }

    #[test]
    fn record_remove() {
        let mut record = Record::new().with("a", 1).with("b", 2);
        assert_eq!(record.remove("a"), Some(Value::Integer(1)));
        assert_eq!(record.remove("a"), None);
        assert_eq!(record.len(), 1);
    }

    #[test]
    fn record_serializes_as_ordered_map() {
        let record = Record::new().with("z", "last").with("a", 1);
        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(json, r#"{"z":"last","a":1}"#);
    }
}
