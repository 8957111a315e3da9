use std::collections::BTreeMap;

use crate::config::DetectorSettings;
use crate::context::{Context, ContextType};
use crate::error::Result;
use crate::warning::Warning;

/// Context types a detector examines unless it says otherwise
pub const DEFAULT_CONTEXTS: &[ContextType] = &[ContextType::Method, ContextType::SingletonMethod];

/// Core trait for all smell detectors.
/// Implementors inspect one context and return the smells found in it.
/// A detector must not keep state between contexts.
pub trait Detector: Send + Sync {
    /// Stable identity used for filtering and config lookup (e.g., "BooleanParameter")
    fn smell_type(&self) -> &'static str;

    /// Human-readable description of what this detector checks
    fn description(&self) -> &str;

    /// Context types this detector is willing to examine
    fn contexts(&self) -> &[ContextType] {
        DEFAULT_CONTEXTS
    }

    /// Settings resolved from configuration at construction
    fn settings(&self) -> &DetectorSettings;

    fn enabled(&self) -> bool {
        self.settings().enabled
    }

    fn applies_to(&self, kind: ContextType) -> bool {
        self.contexts().contains(&kind)
    }

    /// Examine a context of an applicable type and return its smells.
    fn sniff(&self, ctx: &Context) -> Result<Vec<Warning>>;

    /// Run `sniff` only if this detector should look at `ctx` at all:
    /// enabled, applicable, not switched off or excluded by the context's
    /// own overrides, and not excluded by name in the detector settings.
    fn run_for(&self, ctx: &Context) -> Result<Vec<Warning>> {
        if !self.enabled()
            || !self.applies_to(ctx.kind)
            || ctx.disables(self.smell_type())
            || ctx.matches(&self.settings().exclude)
        {
            return Ok(Vec::new());
        }
        self.sniff(ctx)
    }

    /// Build a warning stamped with this detector's identity and the context's location.
    fn warning(
        &self,
        ctx: &Context,
        lines: Vec<usize>,
        message: String,
        parameters: BTreeMap<String, String>,
    ) -> Warning {
        Warning {
            smell_type: self.smell_type().to_string(),
            context: ctx.full_name.clone(),
            source: ctx.source.clone(),
            lines,
            message,
            parameters,
        }
    }
}
