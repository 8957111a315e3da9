use rayon::prelude::*;

use super::smell_type::SmellType;
use super::traits::Detector;
use crate::config::Config;
use crate::context::{Context, ContextType};
use crate::error::Result;
use crate::warning::Warning;

/// Order detector variants by identity so output is stable across runs.
pub fn sort_smell_types(mut smell_types: Vec<SmellType>) -> Vec<SmellType> {
    smell_types.sort_by_key(|t| t.name);
    smell_types
}

/// Keep only the variants named in `filter`. An empty filter keeps everything;
/// names matching no variant are ignored.
pub fn filter_smell_types<S: AsRef<str>>(smell_types: Vec<SmellType>, filter: &[S]) -> Vec<SmellType> {
    if filter.is_empty() {
        return smell_types;
    }
    smell_types
        .into_iter()
        .filter(|t| filter.iter().any(|name| name.as_ref() == t.name))
        .collect()
}

/// Registry that owns one configured instance per detector variant and
/// routes contexts to the enabled, applicable ones.
pub struct DetectorRegistry {
    detectors: Vec<Box<dyn Detector>>,
}

impl DetectorRegistry {
    /// Construct one detector per variant, in the given order. Variants with
    /// no config entry get default settings.
    pub fn new(smell_types: &[SmellType], config: &Config) -> Self {
        let detectors = smell_types
            .iter()
            .map(|smell_type| {
                let settings = config.settings_for(smell_type.name);
                tracing::debug!(
                    smell_type = smell_type.name,
                    enabled = settings.enabled,
                    "constructing detector"
                );
                smell_type.instantiate(settings)
            })
            .collect();
        Self { detectors }
    }

    /// Run every enabled detector that applies to the context's type and
    /// concatenate their warnings in detector order. The first detector
    /// error aborts the examination.
    pub fn examine(&self, ctx: &Context) -> Result<Vec<Warning>> {
        let mut warnings = Vec::new();
        for detector in self.detectors_for(ctx.kind) {
            tracing::trace!(
                smell_type = detector.smell_type(),
                context = %ctx.full_name,
                "running detector"
            );
            warnings.extend(detector.run_for(ctx)?);
        }
        Ok(warnings)
    }

    /// Examine many contexts in parallel. Results keep the order of `contexts`.
    pub fn examine_all(&self, contexts: &[Context]) -> Result<Vec<Warning>> {
        let per_context: Vec<Vec<Warning>> = contexts
            .par_iter()
            .map(|ctx| self.examine(ctx))
            .collect::<Result<_>>()?;
        Ok(per_context.into_iter().flatten().collect())
    }

    /// Enabled detectors willing to examine contexts of `kind`
    pub fn detectors_for(&self, kind: ContextType) -> impl Iterator<Item = &dyn Detector> + '_ {
        self.enabled_detectors().filter(move |d| d.applies_to(kind))
    }

    fn enabled_detectors(&self) -> impl Iterator<Item = &dyn Detector> + '_ {
        self.detectors
            .iter()
            .map(|d| -> &dyn Detector { d.as_ref() })
            .filter(|d| d.enabled())
    }

    /// List all constructed detector names
    pub fn smell_types(&self) -> Vec<&'static str> {
        self.detectors.iter().map(|d| d.smell_type()).collect()
    }
}
