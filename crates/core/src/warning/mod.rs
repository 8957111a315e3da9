mod display;
mod types;

pub use types::Warning;
