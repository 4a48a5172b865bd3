//! Core data structures for idea generation
//!
//! The server payload is loosely typed: any field may be missing, `null`,
//! zero or an empty string, and all of those fall back to a default when
//! rendered. [`Loose`] carries that rule so the typed views on [`Idea`]
//! never have to reason about raw JSON.

use crate::utils::error::{AppError, AppResult};
use crate::utils::format::capitalize_first;
use regex::Regex;
use serde::de::{self, MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use std::fmt;
use std::sync::LazyLock;

static PRESET_DECORATION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[^A-Za-z0-9_\s]").expect("preset decoration pattern is valid")
});

/// A non-empty, trimmed prompt string
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Prompt(String);

impl Prompt {
    /// Trim the raw input; whitespace-only input yields `None`
    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    /// Build a prompt from a preset button label such as `"🚀 Fintech!"`.
    ///
    /// Everything except ASCII word characters and whitespace is removed
    /// before trimming.
    pub fn from_preset_label(label: &str) -> Option<Self> {
        let stripped = PRESET_DECORATION.replace_all(label, "");
        Self::parse(&stripped)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Prompt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Prompt {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A JSON value read with falsy-means-missing semantics.
///
/// `null`, `false`, `0`, `""` and an absent field are all falsy.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Loose(Option<Value>);

impl Loose {
    pub fn new(value: Value) -> Self {
        Self(Some(value))
    }

    pub fn missing() -> Self {
        Self(None)
    }

    pub fn is_truthy(&self) -> bool {
        match &self.0 {
            None | Some(Value::Null) => false,
            Some(Value::Bool(b)) => *b,
            Some(Value::Number(n)) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
            Some(Value::String(s)) => !s.is_empty(),
            Some(Value::Array(_)) | Some(Value::Object(_)) => true,
        }
    }

    /// Display text of the value; an absent field reads `undefined`
    pub fn text(&self) -> String {
        match &self.0 {
            None => "undefined".to_string(),
            Some(value) => display_value(value),
        }
    }

    pub fn truthy_text(&self) -> Option<String> {
        self.is_truthy().then(|| self.text())
    }

    /// Display text, or `fallback` when the value is falsy
    pub fn or(&self, fallback: &str) -> String {
        self.truthy_text().unwrap_or_else(|| fallback.to_string())
    }

    /// Look up a key when the value is an object; anything else yields a missing value
    pub fn get(&self, key: &str) -> Loose {
        match &self.0 {
            Some(Value::Object(map)) => Loose(map.get(key).cloned()),
            _ => Loose(None),
        }
    }

    pub fn into_value(self) -> Option<Value> {
        self.0
    }
}

fn display_value(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::String(s) => s.clone(),
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                i.to_string()
            } else if let Some(u) = n.as_u64() {
                u.to_string()
            } else {
                // f64 Display already drops a zero fraction ("9" for 9.0)
                n.as_f64().map(|f| f.to_string()).unwrap_or_default()
            }
        }
        Value::Array(items) => items
            .iter()
            .map(|item| match item {
                Value::Null => String::new(),
                other => display_value(other),
            })
            .collect::<Vec<_>>()
            .join(","),
        Value::Object(_) => "[object Object]".to_string(),
    }
}

/// The three scored dimensions shown on every card
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Metric {
    Novelty,
    Uniqueness,
    BusinessValue,
}

impl Metric {
    pub const ALL: [Metric; 3] = [Metric::Novelty, Metric::Uniqueness, Metric::BusinessValue];

    pub fn label(self) -> &'static str {
        match self {
            Metric::Novelty => "Novelty",
            Metric::Uniqueness => "Uniqueness",
            Metric::BusinessValue => "Business Value",
        }
    }

    pub fn fallback(self) -> &'static str {
        match self {
            Metric::Novelty => "8",
            Metric::Uniqueness => "7",
            Metric::BusinessValue => "9",
        }
    }
}

/// One generated idea as returned by the server
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Idea {
    pub idea: Loose,
    pub novelty: Loose,
    pub uniqueness: Loose,
    pub business_value: Loose,
    pub differentiator: Loose,
    pub validation: Loose,
    pub market_analysis: Loose,
    pub justification: Loose,
}

/// Validation sub-record with defaults applied
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Validation {
    pub target_users: String,
    pub entry_barrier: String,
    pub monetization: String,
    pub risks: String,
}

/// Market analysis sub-record with defaults applied
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarketAnalysis {
    pub tam: String,
    pub cagr: String,
    pub source: String,
}

/// Any non-null item is an idea; strings, numbers and arrays simply have none
/// of the fields and render with every default.
impl<'de> Deserialize<'de> for Idea {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match Value::deserialize(deserializer)? {
            Value::Null => Err(de::Error::custom(
                "Cannot read properties of null (reading 'idea')",
            )),
            Value::Object(map) => {
                let field = |key: &str| Loose(map.get(key).cloned());
                Ok(Self {
                    idea: field("idea"),
                    novelty: field("novelty"),
                    uniqueness: field("uniqueness"),
                    business_value: field("business_value"),
                    differentiator: field("differentiator"),
                    validation: field("validation"),
                    market_analysis: field("market_analysis"),
                    justification: field("justification"),
                })
            }
            _ => Ok(Self::default()),
        }
    }
}

impl Idea {
    pub fn text(&self) -> String {
        self.idea.text()
    }

    pub fn score(&self, metric: Metric) -> String {
        let raw = match metric {
            Metric::Novelty => &self.novelty,
            Metric::Uniqueness => &self.uniqueness,
            Metric::BusinessValue => &self.business_value,
        };
        raw.or(metric.fallback())
    }

    pub fn differentiator(&self) -> Option<String> {
        self.differentiator.truthy_text()
    }

    pub fn justification(&self) -> Option<String> {
        self.justification.truthy_text()
    }

    pub fn validation(&self) -> Option<Validation> {
        if !self.validation.is_truthy() {
            return None;
        }
        let v = &self.validation;
        Some(Validation {
            target_users: v.get("target_users").or("TBD"),
            entry_barrier: capitalize_first(&v.get("entry_barrier").or("medium")),
            monetization: v.get("monetization").or("TBD"),
            risks: v.get("risks").or("Market competition"),
        })
    }

    pub fn market_analysis(&self) -> Option<MarketAnalysis> {
        if !self.market_analysis.is_truthy() {
            return None;
        }
        let m = &self.market_analysis;
        Some(MarketAnalysis {
            tam: m.get("tam").or("Analyzing..."),
            cagr: m.get("cagr").or("Calculating..."),
            source: m.get("source").or("Market Research 2024"),
        })
    }
}

/// Named idea clusters in the order the server declared them
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ClusterSet {
    clusters: Vec<(String, Vec<Idea>)>,
}

impl ClusterSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a cluster; a repeated name replaces the earlier ideas in place
    pub fn push(&mut self, name: impl Into<String>, ideas: Vec<Idea>) {
        let name = name.into();
        match self.clusters.iter_mut().find(|(n, _)| *n == name) {
            Some((_, existing)) => *existing = ideas,
            None => self.clusters.push((name, ideas)),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Idea])> {
        self.clusters
            .iter()
            .map(|(name, ideas)| (name.as_str(), ideas.as_slice()))
    }

    pub fn is_empty(&self) -> bool {
        self.clusters.is_empty()
    }

    pub fn len(&self) -> usize {
        self.clusters.len()
    }

    pub fn idea_count(&self) -> usize {
        self.clusters.iter().map(|(_, ideas)| ideas.len()).sum()
    }
}

impl Serialize for ClusterSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.clusters.len()))?;
        for (name, ideas) in &self.clusters {
            map.serialize_entry(name, ideas)?;
        }
        map.end()
    }
}

struct ClusterSetVisitor;

impl<'de> Visitor<'de> for ClusterSetVisitor {
    type Value = ClusterSet;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("an object mapping cluster names to idea arrays")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<ClusterSet, A::Error> {
        let mut set = ClusterSet::new();
        while let Some((name, ideas)) = access.next_entry::<String, Vec<Idea>>()? {
            set.push(name, ideas);
        }
        Ok(set)
    }
}

impl<'de> Deserialize<'de> for ClusterSet {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(ClusterSetVisitor)
    }
}

/// Top-level `{success, clusters | error}` wrapper from the endpoint
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Envelope {
    pub success: Loose,
    /// Only read once `success` is truthy
    pub clusters: Loose,
    pub error: Loose,
}

/// What a parsed envelope asks the page to show
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Clusters(ClusterSet),
    Failure(String),
}

impl Envelope {
    pub fn from_json(body: &str) -> AppResult<Self> {
        serde_json::from_str(body).map_err(|e| AppError::Parse(e.to_string()))
    }

    pub fn into_outcome(self) -> AppResult<Outcome> {
        if !self.success.is_truthy() {
            return Ok(Outcome::Failure(self.error.text()));
        }
        match self.clusters.into_value() {
            None | Some(Value::Null) => Err(AppError::Parse(
                "Cannot convert undefined or null to object".to_string(),
            )),
            Some(value) => serde_json::from_value::<ClusterSet>(value)
                .map(Outcome::Clusters)
                .map_err(|e| AppError::Parse(e.to_string())),
        }
    }
}
