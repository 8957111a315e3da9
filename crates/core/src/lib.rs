pub mod config;
pub mod context;
pub mod detector;
pub mod error;
pub mod report;
pub mod warning;

pub use error::{Error, Result};
