use std::fmt;

use super::types::Warning;

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let lines: Vec<String> = self.lines.iter().map(|l| l.to_string()).collect();
        write!(
            f,
            "[{}]:{} {} ({})",
            lines.join(", "),
            self.context,
            self.message,
            self.smell_type
        )
    }
}
