use std::collections::BTreeMap;

use smellguard::config::DetectorSettings;
use smellguard::context::Context;
use smellguard::detector::Detector;
use smellguard::warning::Warning;
use smellguard::{Error, Result};

/// Flags parameters whose default value is a boolean literal.
/// Such a parameter lets the caller pick which code path the method
/// takes, a form of control coupling.
///
/// Only literal `true`/`false` defaults are recognized; a default that
/// merely evaluates to a boolean is not.
pub struct BooleanParameter {
    settings: DetectorSettings,
}

impl BooleanParameter {
    pub fn new(settings: DetectorSettings) -> Self {
        Self { settings }
    }

    pub fn build(settings: DetectorSettings) -> Box<dyn Detector> {
        Box::new(Self::new(settings))
    }
}

impl Detector for BooleanParameter {
    fn smell_type(&self) -> &'static str {
        "BooleanParameter"
    }

    fn description(&self) -> &str {
        "Detects parameters defaulting to a boolean literal"
    }

    fn settings(&self) -> &DetectorSettings {
        &self.settings
    }

    fn sniff(&self, ctx: &Context) -> Result<Vec<Warning>> {
        ctx.default_assignments
            .iter()
            .filter(|assignment| assignment.value.is_boolean_literal())
            .map(|assignment| {
                if assignment.parameter.is_empty() {
                    return Err(Error::MalformedContext {
                        detector: self.smell_type().to_string(),
                        context: ctx.full_name.clone(),
                        reason: "default assignment without a parameter name".to_string(),
                    });
                }
                Ok(self.warning(
                    ctx,
                    vec![ctx.line],
                    format!("has boolean parameter '{}'", assignment.parameter),
                    BTreeMap::from([("parameter".to_string(), assignment.parameter.clone())]),
                ))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use smellguard::config::DetectorConfig;
    use smellguard::context::{ContextType, Expression};

    fn analyze(ctx: &Context) -> Vec<Warning> {
        BooleanParameter::new(DetectorSettings::default())
            .sniff(ctx)
            .unwrap()
    }

    fn method(line: usize) -> Context {
        Context::new(ContextType::Method, "Report#render", line).with_source("lib/report.rb")
    }

    #[test]
    fn test_no_defaults_no_warnings() {
        assert!(analyze(&method(1)).is_empty());
    }

    #[test]
    fn test_detects_true_and_false_defaults() {
        for value in [Expression::True, Expression::False] {
            let warnings = analyze(&method(4).with_default("flag", value));
            assert_eq!(warnings.len(), 1);
            assert!(warnings[0].message.contains("flag"));
            assert_eq!(warnings[0].parameters["parameter"], "flag");
            assert_eq!(warnings[0].smell_type, "BooleanParameter");
            assert_eq!(warnings[0].context, "Report#render");
            assert_eq!(warnings[0].source.to_str(), Some("lib/report.rb"));
        }
    }

    #[test]
    fn test_one_warning_per_parameter_in_declaration_order() {
        let ctx = method(8)
            .with_default("a", Expression::True)
            .with_default("b", Expression::False);
        let warnings = analyze(&ctx);
        let messages: Vec<_> = warnings.iter().map(|w| w.message.as_str()).collect();
        assert_eq!(
            messages,
            vec!["has boolean parameter 'a'", "has boolean parameter 'b'"]
        );
        assert!(warnings.iter().all(|w| w.lines == vec![8]));
    }

    #[test]
    fn test_non_boolean_defaults_ignored() {
        let ctx = method(3)
            .with_default("count", Expression::Int {
                value: Some(0.into()),
            })
            .with_default("name", Expression::Str {
                value: Some("x".into()),
            })
            .with_default("owner", Expression::Nil)
            .with_default("pattern", Expression::Unknown)
            .with_default("strict", Expression::Other {
                node: "send".to_string(),
            });
        assert!(analyze(&ctx).is_empty());
    }

    #[test]
    fn test_mixed_defaults() {
        let ctx = method(12)
            .with_default("verbose", Expression::True)
            .with_default("limit", Expression::Int {
                value: Some(5.into()),
            });
        let warnings = analyze(&ctx);
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].lines, vec![12]);
        assert_eq!(warnings[0].message, "has boolean parameter 'verbose'");
        assert_eq!(
            warnings[0].parameters,
            BTreeMap::from([("parameter".to_string(), "verbose".to_string())])
        );
    }

    #[test]
    fn test_unnamed_boolean_parameter_is_malformed() {
        let ctx = method(2).with_default("", Expression::True);
        let err = BooleanParameter::new(DetectorSettings::default())
            .sniff(&ctx)
            .unwrap_err();
        assert!(matches!(err, Error::MalformedContext { .. }));
    }

    #[test]
    fn test_applies_to_methods_only() {
        let detector = BooleanParameter::new(DetectorSettings::default());
        assert!(detector.applies_to(ContextType::Method));
        assert!(detector.applies_to(ContextType::SingletonMethod));
        assert!(!detector.applies_to(ContextType::Class));
        assert!(!detector.applies_to(ContextType::Module));
    }

    #[test]
    fn test_run_for_honors_exclude() {
        let detector = BooleanParameter::new(DetectorSettings {
            enabled: true,
            exclude: vec!["Report#*".to_string()],
        });
        let ctx = method(5).with_default("flag", Expression::True);
        assert!(detector.run_for(&ctx).unwrap().is_empty());
    }

    #[test]
    fn test_run_for_honors_context_override_exclude() {
        let detector = BooleanParameter::new(DetectorSettings::default());
        let override_config = DetectorConfig {
            enabled: None,
            exclude: vec!["#render".to_string()],
        };
        let ctx = method(5)
            .with_default("flag", Expression::True)
            .with_override("BooleanParameter", override_config);
        assert!(detector.run_for(&ctx).unwrap().is_empty());
    }
}
