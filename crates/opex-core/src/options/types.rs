//! Engine option values and descriptors.

use std::fmt;

use indexmap::IndexMap;
use serde::Serialize;

use super::errors::OptionError;

/// Option names reserved by the engine protocol; they are set by opex itself.
pub const MANAGED_OPTION_NAMES: [&str; 4] = ["uci_chess960", "uci_variant", "multipv", "ponder"];

/// Name-to-value mapping read from, or written to, an option override file.
///
/// Iteration follows insertion order.
pub type OverrideMapping = IndexMap<String, ScalarValue>;

/// A configuration scalar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ScalarValue {
    /// No value; used for descriptors without a default
    Absent,
    Bool(bool),
    Int(i64),
    Str(String),
}

impl ScalarValue {
    /// Infer a scalar from option file text.
    ///
    /// Tried in order: `true`/`false` (case-insensitive), a 64-bit integer,
    /// and finally the text itself.
    pub fn infer(text: &str) -> Self {
        if text.eq_ignore_ascii_case("true") {
            return ScalarValue::Bool(true);
        }
        if text.eq_ignore_ascii_case("false") {
            return ScalarValue::Bool(false);
        }
        match text.parse::<i64>() {
            Ok(value) => ScalarValue::Int(value),
            Err(_) => ScalarValue::Str(text.to_string()),
        }
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, ScalarValue::Absent)
    }

    /// The empty string literal (not `Absent`).
    pub fn is_empty_str(&self) -> bool {
        matches!(self, ScalarValue::Str(s) if s.is_empty())
    }

    /// A concrete value for the scalar: `Absent` becomes the empty string.
    pub fn or_empty(&self) -> ScalarValue {
        match self {
            ScalarValue::Absent => ScalarValue::Str(String::new()),
            other => other.clone(),
        }
    }
}

impl fmt::Display for ScalarValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScalarValue::Absent => Ok(()),
            ScalarValue::Bool(value) => write!(f, "{}", value),
            ScalarValue::Int(value) => write!(f, "{}", value),
            ScalarValue::Str(value) => f.write_str(value),
        }
    }
}

impl From<bool> for ScalarValue {
    fn from(value: bool) -> Self {
        ScalarValue::Bool(value)
    }
}

impl From<i64> for ScalarValue {
    fn from(value: i64) -> Self {
        ScalarValue::Int(value)
    }
}

impl From<&str> for ScalarValue {
    fn from(value: &str) -> Self {
        ScalarValue::Str(value.to_string())
    }
}

impl From<String> for ScalarValue {
    fn from(value: String) -> Self {
        ScalarValue::Str(value)
    }
}

/// Kind of an engine option, with the kind-specific constraints.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OptionKind {
    Check,
    Spin { min: i64, max: i64 },
    Combo { allowed: Vec<String> },
    Button,
    String,
}

impl OptionKind {
    pub fn name(&self) -> &'static str {
        match self {
            OptionKind::Check => "check",
            OptionKind::Spin { .. } => "spin",
            OptionKind::Combo { .. } => "combo",
            OptionKind::Button => "button",
            OptionKind::String => "string",
        }
    }
}

impl fmt::Display for OptionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// An option as reported by an engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionDescriptor {
    pub name: String,
    pub kind: OptionKind,
    pub default: ScalarValue,
    /// Managed options are controlled by opex and cannot be overridden
    pub managed: bool,
}

impl OptionDescriptor {
    /// Build a descriptor; `managed` is derived from the option name.
    pub fn new(name: impl Into<String>, kind: OptionKind, default: ScalarValue) -> Self {
        let name = name.into();
        let managed = is_managed_name(&name);
        Self {
            name,
            kind,
            default,
            managed,
        }
    }

    pub fn check(name: impl Into<String>, default: bool) -> Self {
        Self::new(name, OptionKind::Check, ScalarValue::Bool(default))
    }

    pub fn spin(name: impl Into<String>, default: i64, min: i64, max: i64) -> Self {
        Self::new(name, OptionKind::Spin { min, max }, ScalarValue::Int(default))
    }

    pub fn combo<S: Into<String>>(
        name: impl Into<String>,
        default: &str,
        allowed: impl IntoIterator<Item = S>,
    ) -> Self {
        let allowed = allowed.into_iter().map(Into::into).collect();
        Self::new(name, OptionKind::Combo { allowed }, ScalarValue::from(default))
    }

    pub fn button(name: impl Into<String>) -> Self {
        Self::new(name, OptionKind::Button, ScalarValue::Absent)
    }

    /// A string option; `None` means the engine reported no default.
    pub fn string(name: impl Into<String>, default: Option<&str>) -> Self {
        let default = default.map_or(ScalarValue::Absent, ScalarValue::from);
        Self::new(name, OptionKind::String, default)
    }

    pub fn with_managed(mut self, managed: bool) -> Self {
        self.managed = managed;
        self
    }

    /// Whether the option may appear in an override file.
    pub fn is_configurable(&self) -> bool {
        !self.managed && self.kind != OptionKind::Button
    }

    /// The comment written after the option in an override file.
    pub fn type_annotation(&self) -> String {
        match &self.kind {
            OptionKind::Spin { min, max } => format!("type=spin, min={}, max={}", min, max),
            OptionKind::Combo { allowed } => {
                format!("type=combo, var={}", crate::errors::quoted_list(allowed))
            }
            kind => format!("type={}", kind),
        }
    }
}

/// Whether `name` is reserved by the engine protocol.
pub fn is_managed_name(name: &str) -> bool {
    MANAGED_OPTION_NAMES
        .iter()
        .any(|managed| managed.eq_ignore_ascii_case(name))
}

/// The full list of options reported by one engine, in report order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OptionCatalog {
    descriptors: Vec<OptionDescriptor>,
}

impl OptionCatalog {
    /// Build a catalog, rejecting duplicate option names.
    pub fn new(descriptors: Vec<OptionDescriptor>) -> Result<Self, OptionError> {
        for (i, descriptor) in descriptors.iter().enumerate() {
            if descriptors[..i].iter().any(|d| d.name == descriptor.name) {
                return Err(OptionError::DuplicateDescriptor {
                    name: descriptor.name.clone(),
                });
            }
        }
        Ok(Self { descriptors })
    }

    pub fn iter(&self) -> impl Iterator<Item = &OptionDescriptor> {
        self.descriptors.iter()
    }

    /// Descriptors that may appear in an override file, in catalog order.
    pub fn configurable(&self) -> impl Iterator<Item = &OptionDescriptor> {
        self.descriptors.iter().filter(|d| d.is_configurable())
    }

    pub fn get(&self, name: &str) -> Option<&OptionDescriptor> {
        self.descriptors.iter().find(|d| d.name == name)
    }

    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }
}
