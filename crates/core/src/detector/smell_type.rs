use std::fmt;

use super::traits::Detector;
use crate::config::DetectorSettings;

/// Descriptor of one detector variant: its identity and how to construct it.
/// Detector crates expose a list of these; the registry builds instances from it.
#[derive(Clone, Copy)]
pub struct SmellType {
    pub name: &'static str,
    pub description: &'static str,
    pub build: fn(DetectorSettings) -> Box<dyn Detector>,
}

impl SmellType {
    pub fn instantiate(&self, settings: DetectorSettings) -> Box<dyn Detector> {
        (self.build)(settings)
    }
}

impl fmt::Debug for SmellType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SmellType").field("name", &self.name).finish()
    }
}

impl PartialEq for SmellType {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for SmellType {}
