//! Raw method-spec shapes (serde auto-detects via untagged)
//!
//! Four shapes accepted, from simplest to richest:
//! - Form 1: `"focus"` -> single method on the default target
//! - Form 2: `{name: increment, as: bump}` -> single alias on the default target
//! - Form 3: `[sum, {name: increment, as: bump}]` -> method list on the default target
//! - Form 4: `{input: [focus, blur], panel: "refresh"}` -> per-target specs
//!
//! Anything else (null, numbers, nested junk) is caught by `MethodSpec::Other`
//! and normalizes to an empty mapping rather than failing.

use rustc_hash::FxHashMap;
use serde::Deserialize;
use serde_json::Value;

/// Reserved target name used when a spec names no target of its own.
pub const DEFAULT_TARGET: &str = "target";

/// A method exposed on the wrapper under a (possibly different) name.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MethodAlias {
    /// Method name on the target instance
    pub name: String,

    /// Name exposed on the wrapper
    #[serde(rename = "as")]
    pub exposed_as: String,
}

impl MethodAlias {
    /// Alias that exposes a method under its own name
    pub fn identity(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            exposed_as: name.clone(),
            name,
        }
    }
}

/// Shorthand constructor: `alias("increment", "bump")`
pub fn alias(name: impl Into<String>, exposed_as: impl Into<String>) -> MethodAlias {
    MethodAlias {
        name: name.into(),
        exposed_as: exposed_as.into(),
    }
}

/// One element of a method list: bare name or explicit alias.
///
/// Order matters for serde untagged: String is tried first, then the
/// `{name, as}` object form.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum MethodEntry {
    /// `"focus"` -> identity alias
    Name(String),

    /// `{name: increment, as: bump}` -> explicit alias
    Alias(MethodAlias),
}

impl MethodEntry {
    /// Expand to an alias (bare names become identity aliases)
    pub fn into_alias(self) -> MethodAlias {
        match self {
            MethodEntry::Name(name) => MethodAlias::identity(name),
            MethodEntry::Alias(alias) => alias,
        }
    }
}

impl From<&str> for MethodEntry {
    fn from(name: &str) -> Self {
        MethodEntry::Name(name.to_string())
    }
}

impl From<String> for MethodEntry {
    fn from(name: String) -> Self {
        MethodEntry::Name(name)
    }
}

impl From<MethodAlias> for MethodEntry {
    fn from(alias: MethodAlias) -> Self {
        MethodEntry::Alias(alias)
    }
}

/// The value side of one target key in map form.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum TargetMethods {
    /// `input: focus`
    Name(String),

    /// `input: [focus, blur, select]`
    ///
    /// Tried before `Alias`: serde's derived struct deserializer also
    /// accepts a two-element sequence as `{name, as}`, which would
    /// swallow two-entry lists if `Alias` came first.
    List(Vec<MethodEntry>),

    /// `input: {name: focus, as: grab}`
    Alias(MethodAlias),
}

impl TargetMethods {
    /// Expand to an ordered alias list (no deduplication: re-aliasing the
    /// same method several times is intentional)
    pub fn into_aliases(self) -> Vec<MethodAlias> {
        match self {
            TargetMethods::Name(name) => vec![MethodAlias::identity(name)],
            TargetMethods::Alias(alias) => vec![alias],
            TargetMethods::List(entries) => {
                entries.into_iter().map(MethodEntry::into_alias).collect()
            }
        }
    }
}

/// Raw method spec in any accepted shape.
///
/// Untagged order: scalar forms first, then list, then map, then the
/// catch-all. `Other` accepts any remaining value so deserialization is
/// total over arbitrary documents.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum MethodSpec {
    /// Form 1: bare method name
    Name(String),

    /// Form 2: bare alias
    Alias(MethodAlias),

    /// Form 3: list of names/aliases
    List(Vec<MethodEntry>),

    /// Form 4: target name -> methods
    Map(FxHashMap<String, TargetMethods>),

    /// Unrecognized shape; normalizes to an empty mapping
    Other(Value),
}

impl From<&str> for MethodSpec {
    fn from(name: &str) -> Self {
        MethodSpec::Name(name.to_string())
    }
}

impl From<String> for MethodSpec {
    fn from(name: String) -> Self {
        MethodSpec::Name(name)
    }
}

impl From<MethodAlias> for MethodSpec {
    fn from(alias: MethodAlias) -> Self {
        MethodSpec::Alias(alias)
    }
}

impl<T: Into<MethodEntry>> From<Vec<T>> for MethodSpec {
    fn from(entries: Vec<T>) -> Self {
        MethodSpec::List(entries.into_iter().map(Into::into).collect())
    }
}

impl From<FxHashMap<String, TargetMethods>> for MethodSpec {
    fn from(map: FxHashMap<String, TargetMethods>) -> Self {
        MethodSpec::Map(map)
    }
}

impl From<Value> for MethodSpec {
    fn from(value: Value) -> Self {
        // The untagged catch-all makes this infallible in practice
        serde_json::from_value(value).unwrap_or(MethodSpec::Other(Value::Null))
    }
}
