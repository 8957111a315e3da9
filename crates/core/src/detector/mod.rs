pub mod registry;
pub mod smell_type;
pub mod traits;

pub use registry::{filter_smell_types, sort_smell_types, DetectorRegistry};
pub use smell_type::SmellType;
pub use traits::{Detector, DEFAULT_CONTEXTS};
