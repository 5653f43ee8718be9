//! Positional category labeling of dotted metric names
//!
//! Leading tokens are labeled with a fixed, ordered list of categories. At
//! least one token is always left for the measurement name, so categories
//! beyond `token_count - 1` are dropped for short names.

use std::collections::HashMap;

use super::tokens::{DottedName, SEPARATOR};
use super::{Measurement, MeasurementTransformer};
use crate::error::TransformError;

/// Transformer assigning category labels to the leading tokens of a name
///
/// With no categories configured it is a no-op: names pass through
/// unchanged and no tags are produced.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoriesTransformer {
    categories: Vec<String>,
}

impl CategoriesTransformer {
    /// Create a transformer from an ordered list of category labels
    ///
    /// # Example
    ///
    /// ```
    /// use influx_naming::transformer::{CategoriesTransformer, MeasurementTransformer};
    ///
    /// let t = CategoriesTransformer::new(["server", "type"]);
    /// assert_eq!(t.measurement_name("actarus.prod.cpu_load"), "cpu_load");
    /// ```
    pub fn new<I, S>(categories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            categories: categories.into_iter().map(Into::into).collect(),
        }
    }

    /// Create a transformer, rejecting labels that could never round-trip
    ///
    /// # Errors
    ///
    /// Returns `TransformError::InvalidCategory` for an empty label or a
    /// label containing the name separator.
    pub fn try_new<I, S>(categories: I) -> Result<Self, TransformError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let transformer = Self::new(categories);
        for (index, label) in transformer.categories.iter().enumerate() {
            if label.is_empty() {
                return Err(TransformError::InvalidCategory {
                    index,
                    label: label.clone(),
                    reason: "category label cannot be empty".to_string(),
                });
            }
            if label.contains(SEPARATOR) {
                return Err(TransformError::InvalidCategory {
                    index,
                    label: label.clone(),
                    reason: format!("category label cannot contain '{}'", SEPARATOR),
                });
            }
        }
        Ok(transformer)
    }

    /// Number of configured categories
    pub fn category_count(&self) -> usize {
        self.categories.len()
    }

    /// Configured categories, in order
    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    /// Number of leading tokens that receive a category
    fn labeled(&self, token_count: usize) -> usize {
        self.categories.len().min(token_count.saturating_sub(1))
    }

    fn label_tokens(&self, name: &DottedName<'_>) -> HashMap<String, String> {
        let k = self.labeled(name.len());
        self.categories
            .iter()
            .zip(name.tokens())
            .take(k)
            .map(|(category, token)| (category.clone(), token.to_string()))
            .collect()
    }
}

impl MeasurementTransformer for CategoriesTransformer {
    fn tags(&self, name: &str) -> HashMap<String, String> {
        if self.categories.is_empty() {
            return HashMap::new();
        }
        self.label_tokens(&DottedName::split(name))
    }

    fn measurement_name(&self, name: &str) -> String {
        if self.categories.is_empty() {
            return name.to_string();
        }
        let dotted = DottedName::split(name);
        dotted.join_from(self.labeled(dotted.len()))
    }

    fn transform(&self, name: &str) -> Measurement {
        if self.categories.is_empty() {
            return Measurement::untagged(name);
        }
        let dotted = DottedName::split(name);
        let k = self.labeled(dotted.len());
        if k < self.categories.len() {
            tracing::trace!(
                metric = name,
                labeled = k,
                configured = self.categories.len(),
                "Name shorter than category list; trailing categories dropped"
            );
        }
        Measurement {
            name: dotted.join_from(k),
            tags: self.label_tokens(&dotted),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_without_categories_acts_as_noop() {
        let t = CategoriesTransformer::default();
        for name in [
            "metric",
            "a.metric",
            "a.metric.that.should.define.different.name.spaces",
        ] {
            assert_eq!(t.measurement_name(name), name);
            assert!(t.tags(name).is_empty());
        }
        assert_eq!(t.category_count(), 0);
    }

    #[test]
    fn test_from_categories() {
        let t = CategoriesTransformer::new(["server", "type"]);
        let name = "actarus.prod.cpu_load";
        assert_eq!(t.measurement_name(name), "cpu_load");
        let tags = t.tags(name);
        assert_eq!(tags.len(), 2);
        assert_eq!(tags.get("server"), Some(&"actarus".to_string()));
        assert_eq!(tags.get("type"), Some(&"prod".to_string()));
    }

    #[test]
    fn test_remaining_tokens_form_measurement_name() {
        let t = CategoriesTransformer::new(["server", "type"]);
        let name = "actarus.prod.core_4.cpu_load";
        assert_eq!(t.measurement_name(name), "core_4.cpu_load");
        let tags = t.tags(name);
        assert_eq!(tags.get("server"), Some(&"actarus".to_string()));
        assert_eq!(tags.get("type"), Some(&"prod".to_string()));
        assert!(!tags.values().any(|v| v == "core_4"));
    }

    #[test]
    fn test_last_token_kept_when_categories_outnumber_tokens() {
        let t = CategoriesTransformer::new(["server", "type", "cores"]);
        let name = "actarus.prod.cpu_load";
        assert_eq!(t.measurement_name(name), "cpu_load");
        let tags = t.tags(name);
        assert_eq!(tags.len(), 2);
        assert!(!tags.contains_key("cores"));
        assert_eq!(t.category_count(), 3);
    }

    #[test]
    fn test_single_token_gets_no_category() {
        let t = CategoriesTransformer::new(["server"]);
        assert!(t.tags("cpu_load").is_empty());
        assert_eq!(t.measurement_name("cpu_load"), "cpu_load");
    }

    #[test]
    fn test_empty_name_is_returned_unchanged() {
        let t = CategoriesTransformer::new(["server", "type"]);
        assert!(t.tags("").is_empty());
        assert_eq!(t.measurement_name(""), "");
    }

    #[test]
    fn test_measurement_name_is_not_idempotent() {
        let t = CategoriesTransformer::new(["server", "type"]);
        let once = t.measurement_name("a.b.c.d");
        assert_eq!(once, "c.d");
        assert_eq!(t.measurement_name(&once), "d");
    }

    #[test]
    fn test_try_new_rejects_bad_labels() {
        assert!(CategoriesTransformer::try_new(["server", "type"]).is_ok());
        assert!(matches!(
            CategoriesTransformer::try_new(["server", ""]),
            Err(TransformError::InvalidCategory { index: 1, .. })
        ));
        assert!(matches!(
            CategoriesTransformer::try_new(["a.b"]),
            Err(TransformError::InvalidCategory { index: 0, .. })
        ));
    }

    #[test]
    fn test_transform_matches_individual_operations() {
        let t = CategoriesTransformer::new(["server", "type", "cores"]);
        for name in ["a", "a.b", "a.b.c", "a.b.c.d", "a.b.c.d.e"] {
            let m = t.transform(name);
            assert_eq!(m.name, t.measurement_name(name));
            assert_eq!(m.tags, t.tags(name));
        }
    }
}
