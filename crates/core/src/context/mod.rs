pub mod loader;
pub mod types;

pub use loader::{load_contexts, parse_contexts};
pub use types::*;
