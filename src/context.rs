//! Template contexts: typed variable values and the ways of building them.

use crate::catalog::Catalog;
use crate::constants::{BOOL_VARIABLES, LIST_VARIABLES};
use crate::error::Result;
use crate::extractor::all_variables;
use indexmap::IndexMap;
use log::warn;
use serde::Serialize;

/// Value of a single template variable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Value {
    String(String),
    Bool(bool),
    List(Vec<String>),
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::String(s) => write!(f, "{s}"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::List(items) => write!(f, "{}", items.join(",")),
        }
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<Vec<String>> for Value {
    fn from(value: Vec<String>) -> Self {
        Value::List(value)
    }
}

/// Type a variable's value takes, decided by its name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueType {
    Str,
    Bool,
    List,
}

impl ValueType {
    pub fn of(name: &str) -> Self {
        if LIST_VARIABLES.contains(&name) {
            ValueType::List
        } else if BOOL_VARIABLES.contains(&name) {
            ValueType::Bool
        } else {
            ValueType::Str
        }
    }

    pub fn default_value(self) -> Value {
        match self {
            ValueType::Str => Value::String(String::new()),
            ValueType::Bool => Value::Bool(false),
            ValueType::List => Value::List(Vec::new()),
        }
    }

    /// Converts a raw command-line string: lists split on commas, booleans are
    /// true only for a case-insensitive `true`.
    pub fn coerce(self, raw: &str) -> Value {
        match self {
            ValueType::Str => Value::String(raw.to_string()),
            ValueType::Bool => Value::Bool(raw.eq_ignore_ascii_case("true")),
            ValueType::List => Value::List(raw.split(',').map(str::to_string).collect()),
        }
    }
}

/// Ordered mapping of variable names to values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Context {
    values: IndexMap<String, Value>,
}

impl Context {
    pub fn new() -> Self {
        Self::default()
    }

    /// Zips names and values positionally.
    ///
    /// Lists of different lengths are paired up to the shorter one; the rest is
    /// dropped with a warning.
    pub fn from_pairs<N, V>(names: &[N], values: Vec<V>) -> Self
    where
        N: AsRef<str>,
        V: Into<Value>,
    {
        if names.len() != values.len() {
            warn!(
                "Got {} variable names but {} values, pairing only the first {}",
                names.len(),
                values.len(),
                names.len().min(values.len())
            );
        }
        names
            .iter()
            .zip(values)
            .map(|(name, value)| (name.as_ref().to_string(), value.into()))
            .collect()
    }

    /// Default context covering every variable of every template in the catalog.
    pub fn defaults(catalog: &Catalog) -> Result<Self> {
        Ok(all_variables(catalog)?
            .into_iter()
            .map(|name| {
                let value = ValueType::of(&name).default_value();
                (name, value)
            })
            .collect())
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.values.get(name)
    }

    pub fn insert<K: Into<String>, V: Into<Value>>(&mut self, name: K, value: V) -> Option<Value> {
        self.values.insert(name.into(), value.into())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }
}

impl FromIterator<(String, Value)> for Context {
    fn from_iter<T: IntoIterator<Item = (String, Value)>>(iter: T) -> Self {
        Self { values: iter.into_iter().collect() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_type_of() {
        assert_eq!(ValueType::of("install_requires"), ValueType::List);
        assert_eq!(ValueType::of("console_scripts"), ValueType::List);
        assert_eq!(ValueType::of("readthedocs"), ValueType::Bool);
        assert_eq!(ValueType::of("program_name"), ValueType::Str);
    }

    #[test]
    fn test_coerce() {
        assert_eq!(
            ValueType::List.coerce("a,b,c"),
            Value::List(vec!["a".into(), "b".into(), "c".into()])
        );
        assert_eq!(ValueType::Bool.coerce("True"), Value::Bool(true));
        assert_eq!(ValueType::Bool.coerce("TRUE"), Value::Bool(true));
        assert_eq!(ValueType::Bool.coerce("false"), Value::Bool(false));
        assert_eq!(ValueType::Bool.coerce("yes"), Value::Bool(false));
        assert_eq!(ValueType::Str.coerce("a,b"), Value::from("a,b"));
    }

    #[test]
    fn test_value_display() {
        assert_eq!(Value::from("x").to_string(), "x");
        assert_eq!(Value::Bool(true).to_string(), "true");
        assert_eq!(Value::List(vec!["a".into(), "b".into()]).to_string(), "a,b");
    }
}
