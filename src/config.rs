//! Persisted configuration handling.
//! The configuration file is a flat YAML mapping of variable names to values,
//! rewritten in full after every change.

use crate::catalog::Catalog;
use crate::context::{Context, Value, ValueType};
use crate::error::{Error, Result};
use log::debug;
use std::path::{Path, PathBuf};

/// Reads a context from a configuration file.
///
/// No schema is applied: unknown keys are kept and missing keys stay absent.
/// Scalars other than booleans are kept as strings, `null` becomes an empty string.
///
/// # Errors
/// * `Error::ConfigFormatError` if the file is not a flat YAML mapping
pub fn load_context<P: AsRef<Path>>(path: P) -> Result<Context> {
    let path = path.as_ref();
    debug!("Loading configuration from {}", path.display());
    let content = std::fs::read_to_string(path).map_err(|e| Error::ConfigFormatError {
        path: path.display().to_string(),
        reason: e.to_string(),
    })?;
    parse_context(&content).map_err(|reason| Error::ConfigFormatError {
        path: path.display().to_string(),
        reason,
    })
}

fn parse_context(content: &str) -> std::result::Result<Context, String> {
    if content.trim().is_empty() {
        return Ok(Context::new());
    }
    let document: serde_yaml::Value = serde_yaml::from_str(content).map_err(|e| e.to_string())?;
    let mapping = match document {
        serde_yaml::Value::Null => return Ok(Context::new()),
        serde_yaml::Value::Mapping(mapping) => mapping,
        _ => return Err("expected a mapping of variable names to values".to_string()),
    };

    let mut context = Context::new();
    for (key, value) in mapping {
        let key = scalar_to_string(&key)
            .ok_or_else(|| "keys must be plain strings".to_string())?;
        let value = match value {
            serde_yaml::Value::Bool(b) => Value::Bool(b),
            serde_yaml::Value::Sequence(items) => Value::List(
                items
                    .iter()
                    .map(|item| {
                        scalar_to_string(item)
                            .ok_or_else(|| format!("'{key}' must be a list of plain values"))
                    })
                    .collect::<std::result::Result<_, _>>()?,
            ),
            other => Value::String(
                scalar_to_string(&other)
                    .ok_or_else(|| format!("'{key}' must be a string, boolean or list"))?,
            ),
        };
        context.insert(key, value);
    }
    Ok(context)
}

fn scalar_to_string(value: &serde_yaml::Value) -> Option<String> {
    match value {
        serde_yaml::Value::Null => Some(String::new()),
        serde_yaml::Value::Bool(b) => Some(b.to_string()),
        serde_yaml::Value::Number(n) => Some(n.to_string()),
        serde_yaml::Value::String(s) => Some(s.clone()),
        _ => None,
    }
}

/// Writes a context to a configuration file, replacing its content.
pub fn save_context<P: AsRef<Path>>(path: P, context: &Context) -> Result<()> {
    let path = path.as_ref();
    let content = serde_yaml::to_string(context)?;
    std::fs::write(path, content).map_err(|e| Error::WriteError {
        path: path.display().to_string(),
        source: e,
    })?;
    debug!("Saved configuration to {}", path.display());
    Ok(())
}

/// A context bound to the file it is persisted in.
#[derive(Debug)]
pub struct ConfigFile {
    path: PathBuf,
    context: Context,
}

impl ConfigFile {
    /// Opens an existing configuration file.
    pub fn open<P: Into<PathBuf>>(path: P) -> Result<Self> {
        let path = path.into();
        let context = load_context(&path)?;
        Ok(Self { path, context })
    }

    /// Writes the default context of `catalog` to `path`, replacing any existing file.
    pub fn init<P: Into<PathBuf>>(path: P, catalog: &Catalog) -> Result<Self> {
        let config = Self { path: path.into(), context: Context::defaults(catalog)? };
        config.save()?;
        Ok(config)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn context(&self) -> &Context {
        &self.context
    }

    pub fn into_context(self) -> Context {
        self.context
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.context.get(key)
    }

    /// Stores `raw` under `key`, converted according to the key's type.
    pub fn set(&mut self, key: &str, raw: &str) -> Result<()> {
        self.context.insert(key, ValueType::of(key).coerce(raw));
        self.save()
    }

    /// Like [`ConfigFile::set`], except that list keys get `raw` appended.
    pub fn add(&mut self, key: &str, raw: &str) -> Result<()> {
        let value = match ValueType::of(key) {
            ValueType::List => {
                let mut items = match self.context.get(key) {
                    Some(Value::List(items)) => items.clone(),
                    _ => Vec::new(),
                };
                items.push(raw.to_string());
                Value::List(items)
            }
            value_type => value_type.coerce(raw),
        };
        self.context.insert(key, value);
        self.save()
    }

    fn save(&self) -> Result<()> {
        save_context(&self.path, &self.context)
    }
}
