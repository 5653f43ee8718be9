//! Metric name transformation module
//!
//! Turns flat dotted metric names into a measurement name plus a tag set,
//! the shape expected by tag-based time-series backends.
//!
//! Two strategies are provided:
//! - [`KeyValueTransformer`]: `key.value.key.value...base`
//! - [`CategoriesTransformer`]: fixed, ordered labels for the leading tokens
//!
//! [`Transformer`] selects one of them at configuration time.
//!
//! # Example
//!
//! ```
//! use influx_naming::transformer::{MeasurementTransformer, Transformer};
//!
//! let t = Transformer::categories(["server", "type"]);
//! let m = t.transform("actarus.prod.cpu_load");
//! assert_eq!(m.name, "cpu_load");
//! assert_eq!(m.tags["server"], "actarus");
//! assert_eq!(m.tags["type"], "prod");
//! ```

pub mod categories;
pub mod key_value;
pub mod tokens;

use std::collections::HashMap;

use serde::Serialize;

pub use categories::CategoriesTransformer;
pub use key_value::KeyValueTransformer;
pub use tokens::{DottedName, SEPARATOR};

/// A measurement name with the tags derived from a dotted metric name
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Measurement {
    /// Measurement (series) name
    pub name: String,
    /// Tags extracted from the dotted name
    pub tags: HashMap<String, String>,
}

impl Measurement {
    /// A measurement that carries the name through untouched
    pub fn untagged(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            tags: HashMap::new(),
        }
    }
}

/// Contract shared by all naming strategies
///
/// Implementations are pure functions of the input name and their
/// construction-time configuration, and can be shared between threads.
pub trait MeasurementTransformer: Send + Sync {
    /// Tags derived from `name`; empty when the strategy extracts none
    fn tags(&self, name: &str) -> HashMap<String, String>;

    /// Measurement name derived from `name`
    fn measurement_name(&self, name: &str) -> String;

    /// Both parts at once
    ///
    /// Equivalent to calling [`tags`](Self::tags) and
    /// [`measurement_name`](Self::measurement_name); implementations override
    /// it to split the name only once.
    fn transform(&self, name: &str) -> Measurement {
        Measurement {
            name: self.measurement_name(name),
            tags: self.tags(name),
        }
    }
}

/// Naming strategy selected at configuration time
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transformer {
    /// Alternating key/value tokens
    KeyValue(KeyValueTransformer),
    /// Positional category labels
    Categories(CategoriesTransformer),
}

impl Transformer {
    /// Key/value strategy
    pub fn key_value() -> Self {
        Transformer::KeyValue(KeyValueTransformer::new())
    }

    /// Categories strategy with the given ordered labels
    pub fn categories<I, S>(categories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Transformer::Categories(CategoriesTransformer::new(categories))
    }

    /// Short strategy name, as used in configuration
    pub fn strategy_name(&self) -> &'static str {
        match self {
            Transformer::KeyValue(_) => "key_value",
            Transformer::Categories(_) => "categories",
        }
    }

    fn inner(&self) -> &dyn MeasurementTransformer {
        match self {
            Transformer::KeyValue(t) => t,
            Transformer::Categories(t) => t,
        }
    }
}

impl Default for Transformer {
    fn default() -> Self {
        Self::key_value()
    }
}

impl MeasurementTransformer for Transformer {
    fn tags(&self, name: &str) -> HashMap<String, String> {
        self.inner().tags(name)
    }

    fn measurement_name(&self, name: &str) -> String {
        self.inner().measurement_name(name)
    }

    fn transform(&self, name: &str) -> Measurement {
        self.inner().transform(name)
    }
}
