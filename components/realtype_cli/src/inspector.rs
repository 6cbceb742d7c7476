//! Classification front end
//!
//! The Inspector reads value literals and renders one of the
//! classifications from `type_classifier` as text or JSON.

use crate::cli::Mode;
use crate::error::CliResult;
use crate::literal::parse_values;
use core_types::{TypeLabel, Value};
use type_classifier::{
    all_same_basic_type, all_unique_real_types, basic_types_of, count_real_types, real_types_of,
};

/// Reads literals and prints classifications
pub struct Inspector {
    /// Classification to compute
    mode: Mode,
    /// Whether to render JSON instead of text
    json: bool,
}

impl Inspector {
    /// Create a new inspector for `mode`
    ///
    /// # Example
    /// ```
    /// use realtype_cli::{Inspector, Mode};
    ///
    /// let inspector = Inspector::new(Mode::Count);
    /// assert_eq!(inspector.inspect_string("[1, 2, null]").unwrap(), "null 1\nnumber 2");
    /// ```
    pub fn new(mode: Mode) -> Self {
        Self { mode, json: false }
    }

    /// Enable JSON output
    pub fn with_json(mut self, enabled: bool) -> Self {
        self.json = enabled;
        self
    }

    /// Classify the array literal in a file
    ///
    /// # Errors
    /// Returns `CliError` if the file cannot be read or holds a malformed
    /// literal
    pub fn inspect_file(&self, path: &str) -> CliResult<String> {
        let source = std::fs::read_to_string(path)?;
        self.inspect_string(&source)
    }

    /// Classify an inline array literal
    pub fn inspect_string(&self, source: &str) -> CliResult<String> {
        let values = parse_values(source)?;
        log::debug!("read {} values", values.len());
        self.classify(&values)
    }

    /// Render the configured classification of `values`
    pub fn classify(&self, values: &[Value]) -> CliResult<String> {
        match self.mode {
            Mode::Basic => self.render_labels(values, &basic_types_of(values)),
            Mode::Real => self.render_labels(values, &real_types_of(values)),
            Mode::Count => {
                let counts = count_real_types(values);
                if self.json {
                    Ok(counts.to_json()?)
                } else {
                    Ok(counts
                        .iter()
                        .map(|(label, count)| format!("{} {}", label, count))
                        .collect::<Vec<_>>()
                        .join("\n"))
                }
            }
            Mode::Unique => self.render_bool(all_unique_real_types(values)),
            Mode::Same => self.render_bool(all_same_basic_type(values)),
        }
    }

    fn render_labels(&self, values: &[Value], labels: &[TypeLabel]) -> CliResult<String> {
        if self.json {
            return Ok(serde_json::to_string(labels)?);
        }
        Ok(values
            .iter()
            .zip(labels)
            .map(|(value, label)| format!("{}\t{}", label, value.inspect()))
            .collect::<Vec<_>>()
            .join("\n"))
    }

    fn render_bool(&self, result: bool) -> CliResult<String> {
        if self.json {
            Ok(serde_json::to_string(&result)?)
        } else {
            Ok(result.to_string())
        }
    }
}
