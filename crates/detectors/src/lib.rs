pub mod boolean_parameter;

use smellguard::detector::{filter_smell_types, sort_smell_types, SmellType};

/// Returns every built-in detector variant, ordered by name
pub fn smell_types() -> Vec<SmellType> {
    sort_smell_types(vec![SmellType {
        name: "BooleanParameter",
        description: "Detects parameters defaulting to a boolean literal",
        build: boolean_parameter::BooleanParameter::build,
    }])
}

/// Built-in variants named in `filter`, or all of them when the filter is empty.
/// Unknown names are ignored.
pub fn eligible_smell_types<S: AsRef<str>>(filter: &[S]) -> Vec<SmellType> {
    filter_smell_types(smell_types(), filter)
}
