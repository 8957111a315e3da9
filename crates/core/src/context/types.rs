use std::collections::BTreeMap;
use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::config::DetectorConfig;

/// Kind of syntactic unit a context describes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContextType {
    Module,
    Class,
    /// Instance method (`def name`)
    Method,
    /// Singleton method (`def self.name`)
    SingletonMethod,
}

impl fmt::Display for ContextType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContextType::Module => write!(f, "module"),
            ContextType::Class => write!(f, "class"),
            ContextType::Method => write!(f, "method"),
            ContextType::SingletonMethod => write!(f, "singleton_method"),
        }
    }
}

/// Default-value expression of a parameter, tagged by node type.
/// Detectors only look at the discriminant, so literal payloads are kept
/// as raw JSON and node types this model does not name become `Unknown`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Expression {
    True,
    False,
    Nil,
    Int {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        value: Option<serde_json::Value>,
    },
    Float {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        value: Option<serde_json::Value>,
    },
    Str {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        value: Option<serde_json::Value>,
    },
    Sym {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        value: Option<serde_json::Value>,
    },
    /// Any non-literal expression (method call, constant, ternary, ...)
    Other {
        #[serde(default)]
        node: String,
    },
    /// Node type reported by the parser that has no variant here
    #[serde(other)]
    Unknown,
}

impl Expression {
    pub fn is_boolean_literal(&self) -> bool {
        matches!(self, Expression::True | Expression::False)
    }
}

/// A parameter that declares a default value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DefaultAssignment {
    pub parameter: String,
    pub value: Expression,
}

/// One analyzable unit handed over by the parser.
/// `default_assignments` keeps declaration order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Context {
    #[serde(rename = "type")]
    pub kind: ContextType,
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub source: PathBuf,
    #[serde(alias = "declaration_line")]
    pub line: usize,
    #[serde(default)]
    pub default_assignments: Vec<DefaultAssignment>,
    /// Per-context detector configuration, e.g. from in-source annotations
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub config_overrides: BTreeMap<String, DetectorConfig>,
}

impl Context {
    pub fn new(kind: ContextType, full_name: impl Into<String>, line: usize) -> Self {
        Self {
            kind,
            full_name: full_name.into(),
            source: PathBuf::new(),
            line,
            default_assignments: Vec::new(),
            config_overrides: BTreeMap::new(),
        }
    }

    pub fn with_source(mut self, source: impl Into<PathBuf>) -> Self {
        self.source = source.into();
        self
    }

    pub fn with_default(mut self, parameter: impl Into<String>, value: Expression) -> Self {
        self.default_assignments.push(DefaultAssignment {
            parameter: parameter.into(),
            value,
        });
        self
    }

    pub fn with_override(mut self, smell_type: impl Into<String>, config: DetectorConfig) -> Self {
        self.config_overrides.insert(smell_type.into(), config);
        self
    }

    /// True if the context carries an override for `smell_type` that either
    /// switches it off or excludes this context by name.
    pub fn disables(&self, smell_type: &str) -> bool {
        self.config_overrides
            .get(smell_type)
            .is_some_and(|c| c.enabled == Some(false) || self.matches(&c.exclude))
    }

    /// Check the full name against exclusion patterns.
    /// Entries with glob metacharacters are matched as globs, others as substrings.
    pub fn matches(&self, patterns: &[String]) -> bool {
        patterns.iter().any(|pattern| {
            if pattern.contains(['*', '?', '[']) {
                glob::Pattern::new(pattern).is_ok_and(|p| p.matches(&self.full_name))
            } else {
                self.full_name.contains(pattern.as_str())
            }
        })
    }
}
