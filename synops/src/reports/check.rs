//! Check command report data structures.

use std::path::PathBuf;

use super::output::{Output, Report};

/// Report data from manifest validation.
#[derive(Debug)]
pub struct CheckReport {
    /// Path to the manifest.
    pub config_path: PathBuf,
    /// Name of the described file.
    pub file_name: String,
    /// Number of entities per kind, sorted by kind.
    pub kinds: Vec<(&'static str, usize)>,
    /// Warning messages.
    pub warnings: Vec<String>,
}

impl CheckReport {
    pub fn entity_count(&self) -> usize {
        self.kinds.iter().map(|(_, n)| n).sum()
    }
}

impl Report for CheckReport {
    fn render(&self, out: &mut dyn Output) {
        for warning in &self.warnings {
            out.warning(warning);
        }
        if !self.warnings.is_empty() {
            out.newline();
        }

        out.preformatted(&format!("✓ {} is valid", self.config_path.display()));
        out.newline();
        out.key_value("file", &self.file_name);

        let count = self.entity_count();
        out.section(&format!(
            "{} entit{}",
            count,
            if count == 1 { "y" } else { "ies" }
        ));
        for (kind, n) in &self.kinds {
            out.key_value_indented(kind, &n.to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::output::tests::BufferOutput;

    #[test]
    fn test_check_report_lists_warnings_first() {
        let report = CheckReport {
            config_path: PathBuf::from("synops.toml"),
            file_name: "a.hpp".to_string(),
            kinds: vec![("class", 2), ("field", 3)],
            warnings: vec!["'a' references unknown entity 'b'".to_string()],
        };
        let mut out = BufferOutput::default();
        report.render(&mut out);
        assert_eq!(
            out.lines,
            [
                "warning: 'a' references unknown entity 'b'",
                "",
                "✓ synops.toml is valid",
                "",
                "file: a.hpp",
                "5 entities:",
                "  class: 2",
                "  field: 3",
            ]
        );
    }
}
