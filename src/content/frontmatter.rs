//! Frontmatter parsing.
//!
//! Markdown posts carry metadata in a leading block, either YAML-style
//! (`---`) or TOML (`+++`). Values are kept as JSON values so that key
//! presence, not value shape, decides what the slug assigner sees.

use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::{Map, Value};

/// Metadata declared at the top of a post.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Frontmatter(Map<String, Value>);

impl Frontmatter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    #[cfg(test)]
    pub fn with(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.0.insert(key.to_owned(), value.into());
        self
    }

    pub fn contains(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(Value::as_str)
    }

    /// Text form of a declared key, if present.
    ///
    /// Strings are returned as-is, numbers and booleans in display form,
    /// arrays joined with `,`, and `null` as the empty string.
    pub fn text(&self, key: &str) -> Option<String> {
        self.0.get(key).map(value_to_text)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Map<String, Value>> for Frontmatter {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

fn value_to_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::Array(items) => items.iter().map(value_to_text).collect::<Vec<_>>().join(","),
        Value::Object(_) => value.to_string(),
    }
}

/// Split a source file into its frontmatter and body.
///
/// A file without a frontmatter block yields an empty mapping and the whole
/// source as body.
pub fn extract(source: &str) -> Result<(Frontmatter, &str)> {
    match detect(source) {
        Some((block, body, Fence::Toml)) => Ok((parse_toml(block)?, body)),
        Some((block, body, Fence::Yaml)) => Ok((parse_yaml_like(block), body)),
        None => Ok((Frontmatter::new(), source)),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Fence {
    Yaml,
    Toml,
}

/// Locate a `---` or `+++` block at the start of the file.
fn detect(source: &str) -> Option<(&str, &str, Fence)> {
    let trimmed = source.trim_start_matches('\u{feff}').trim_start();

    for (marker, fence) in [("---", Fence::Yaml), ("+++", Fence::Toml)] {
        if let Some(rest) = trimmed.strip_prefix(marker)
            && let Some(end) = rest.find(&format!("\n{marker}"))
        {
            let block = rest[..end].trim();
            let after = &rest[end + 1 + marker.len()..];
            // Drop the remainder of the closing fence line.
            let body = after.split_once('\n').map_or("", |(_, body)| body);
            return Some((block, body.trim_start_matches('\n'), fence));
        }
    }

    None
}

fn parse_toml(block: &str) -> Result<Frontmatter> {
    let table: toml::Table = toml::from_str(block).context("Invalid TOML frontmatter")?;
    Ok(table
        .into_iter()
        .map(|(key, value)| (key, toml_to_json(value)))
        .collect::<Map<_, _>>()
        .into())
}

/// TOML datetimes become their string form so `date = 2024-01-01` works unquoted.
pub(crate) fn toml_to_json(value: toml::Value) -> Value {
    match value {
        toml::Value::String(s) => Value::String(s),
        toml::Value::Integer(i) => Value::Number(i.into()),
        toml::Value::Float(f) => serde_json::Number::from_f64(f).map_or(Value::Null, Value::Number),
        toml::Value::Boolean(b) => Value::Bool(b),
        toml::Value::Datetime(dt) => Value::String(dt.to_string()),
        toml::Value::Array(items) => Value::Array(items.into_iter().map(toml_to_json).collect()),
        toml::Value::Table(table) => Value::Object(
            table
                .into_iter()
                .map(|(key, value)| (key, toml_to_json(value)))
                .collect(),
        ),
    }
}

/// Parse simple YAML-like frontmatter (`key: value` per line).
fn parse_yaml_like(block: &str) -> Frontmatter {
    let mut map = Map::new();

    for line in block.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        if let Some((key, value)) = line.split_once(':') {
            let key = key.trim();
            if key.is_empty() {
                continue;
            }
            map.insert(key.to_owned(), parse_yaml_value(value.trim()));
        }
    }

    map.into()
}

/// Parse a YAML-like scalar or flow list.
///
/// - `"quoted"` / `'quoted'` → string without quotes
/// - `true`, `false`, `null`, `~`, empty → typed values
/// - integers and floats → numbers
/// - `[a, b]` → array of parsed items
/// - anything else → string
fn parse_yaml_value(s: &str) -> Value {
    if s.is_empty() || s == "~" || s.eq_ignore_ascii_case("null") {
        return Value::Null;
    }

    if let Some(inner) = strip_quotes(s) {
        return Value::String(inner.to_owned());
    }

    if s.eq_ignore_ascii_case("true") {
        return Value::Bool(true);
    }
    if s.eq_ignore_ascii_case("false") {
        return Value::Bool(false);
    }

    if let Ok(n) = s.parse::<i64>() {
        return Value::Number(n.into());
    }
    if let Ok(n) = s.parse::<f64>()
        && let Some(num) = serde_json::Number::from_f64(n)
    {
        return Value::Number(num);
    }

    if let Some(inner) = s.strip_prefix('[').and_then(|s| s.strip_suffix(']')) {
        let items = inner
            .split(',')
            .map(str::trim)
            .filter(|item| !item.is_empty())
            .map(parse_yaml_value)
            .collect();
        return Value::Array(items);
    }

    Value::String(s.to_owned())
}

fn strip_quotes(s: &str) -> Option<&str> {
    ['"', '\'']
        .into_iter()
        .find_map(|q| s.strip_prefix(q).and_then(|s| s.strip_suffix(q)))
}
