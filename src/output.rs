//! Rendering of transformed names
//!
//! Text output is one line per name:
//!
//! ```text
//! actarus.prod.cpu_load -> cpu_load {server="actarus", type="prod"}
//! ```
//!
//! JSON and YAML emit a list of `{input, measurement, tags}` records. Tags
//! are sorted by key for deterministic output.

use std::collections::BTreeMap;
use std::fmt::Write;

use serde::Serialize;

use crate::cli::OutputFormat;
use crate::error::{AppError, AppResult};
use crate::transformer::{DottedName, Measurement, MeasurementTransformer};

/// A transformed name ready for output
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Rendered<'a> {
    /// Dotted name as given
    pub input: &'a str,
    /// Derived measurement name
    pub measurement: String,
    /// Derived tags, sorted by key
    pub tags: BTreeMap<String, String>,
}

impl<'a> Rendered<'a> {
    /// Pair an input name with its measurement
    pub fn new(input: &'a str, measurement: Measurement) -> Self {
        Self {
            input,
            measurement: measurement.name,
            tags: measurement.tags.into_iter().collect(),
        }
    }

    /// Transform `input`, rejecting names the transformers would pass through
    ///
    /// # Errors
    /// Returns `AppError::Transform` for an empty name
    pub fn from_name<T>(input: &'a str, transformer: &T) -> AppResult<Self>
    where
        T: MeasurementTransformer + ?Sized,
    {
        let name = DottedName::parse(input)?;
        Ok(Self::new(input, transformer.transform(name.as_str())))
    }
}

/// Render transformed names in the requested format
///
/// # Errors
/// Returns `AppError::Output` if JSON or YAML serialization fails
pub fn render(records: &[Rendered<'_>], format: OutputFormat) -> AppResult<String> {
    match format {
        OutputFormat::Text => Ok(render_text(records)),
        OutputFormat::Json => serde_json::to_string_pretty(records)
            .map(|mut s| {
                s.push('\n');
                s
            })
            .map_err(|e| AppError::Output(e.to_string())),
        OutputFormat::Yaml => {
            serde_yaml::to_string(records).map_err(|e| AppError::Output(e.to_string()))
        }
    }
}

fn render_text(records: &[Rendered<'_>]) -> String {
    let mut output = String::with_capacity(records.len() * 64);
    for record in records {
        let _ = write!(output, "{} -> {}", record.input, record.measurement);
        if !record.tags.is_empty() {
            output.push_str(" {");
            for (i, (key, value)) in record.tags.iter().enumerate() {
                if i > 0 {
                    output.push_str(", ");
                }
                let _ = write!(output, "{}=\"{}\"", key, value);
            }
            output.push('}');
        }
        output.push('\n');
    }
    output
}
