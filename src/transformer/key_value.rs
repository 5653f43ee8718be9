//! Key/value decomposition of dotted metric names
//!
//! A name is read as `key.value.key.value...base`. When the token count is
//! odd the base is the last token; when it is even the base is the last two
//! tokens, so `cores.cpu_load` keeps its full name and yields no tags.

use std::collections::HashMap;

use super::tokens::DottedName;
use super::{Measurement, MeasurementTransformer};

/// Transformer reading alternating key/value tokens as tags
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KeyValueTransformer;

impl KeyValueTransformer {
    /// Create a new key/value transformer
    pub fn new() -> Self {
        Self
    }

    /// Index of the first token belonging to the measurement name
    fn remainder_start(token_count: usize) -> usize {
        if token_count % 2 == 1 {
            token_count - 1
        } else {
            token_count.saturating_sub(2)
        }
    }

    fn split_tags(name: &DottedName<'_>) -> HashMap<String, String> {
        let start = Self::remainder_start(name.len());
        name.tokens()[..start]
            .chunks_exact(2)
            .map(|pair| (pair[0].to_string(), pair[1].to_string()))
            .collect()
    }
}

impl MeasurementTransformer for KeyValueTransformer {
    fn tags(&self, name: &str) -> HashMap<String, String> {
        Self::split_tags(&DottedName::split(name))
    }

    fn measurement_name(&self, name: &str) -> String {
        let dotted = DottedName::split(name);
        dotted.join_from(Self::remainder_start(dotted.len()))
    }

    fn transform(&self, name: &str) -> Measurement {
        let dotted = DottedName::split(name);
        let start = Self::remainder_start(dotted.len());
        tracing::trace!(metric = name, pairs = start / 2, "Key/value transform");
        Measurement {
            name: dotted.join_from(start),
            tags: Self::split_tags(&dotted),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn generated_name(pairs: usize, base: &str) -> String {
        let mut tokens: Vec<String> = Vec::with_capacity(pairs * 2 + 1);
        for i in 0..pairs {
            tokens.push(format!("key{}", i));
            tokens.push(format!("value{}", i));
        }
        tokens.push(base.to_string());
        tokens.join(".")
    }

    #[test]
    fn test_single_token_has_no_tags() {
        let t = KeyValueTransformer::new();
        assert!(t.tags("cpu_load").is_empty());
        assert_eq!(t.measurement_name("cpu_load"), "cpu_load");
    }

    #[test]
    fn test_two_tokens_keep_full_name() {
        let t = KeyValueTransformer::new();
        assert!(t.tags("cores.cpu_load").is_empty());
        assert_eq!(t.measurement_name("cores.cpu_load"), "cores.cpu_load");
    }

    #[test]
    fn test_three_tokens_yield_one_tag() {
        let t = KeyValueTransformer::new();
        let tags = t.tags("server.actarus.cpu_load");
        assert_eq!(tags.len(), 1);
        assert_eq!(tags.get("server"), Some(&"actarus".to_string()));
        assert_eq!(t.measurement_name("server.actarus.cpu_load"), "cpu_load");
    }

    #[test]
    fn test_odd_token_count_yields_n_tags() {
        let t = KeyValueTransformer::new();
        let name = generated_name(10, "metric");
        let tags = t.tags(&name);
        assert_eq!(tags.len(), 10);
        for i in 0..10 {
            assert_eq!(tags.get(&format!("key{}", i)), Some(&format!("value{}", i)));
        }
        assert_eq!(t.measurement_name(&name), "metric");
    }

    #[test]
    fn test_even_token_count_keeps_last_two_tokens() {
        let t = KeyValueTransformer::new();
        let name = generated_name(9, "metric.name");
        assert_eq!(t.tags(&name).len(), 9);
        assert_eq!(t.measurement_name(&name), "metric.name");
    }

    #[test]
    fn test_four_tokens() {
        let t = KeyValueTransformer::new();
        let m = t.transform("host.web01.jvm.heap_used");
        assert_eq!(m.name, "jvm.heap_used");
        assert_eq!(m.tags.len(), 1);
        assert_eq!(m.tags.get("host"), Some(&"web01".to_string()));
    }

    #[test]
    fn test_measurement_name_is_idempotent() {
        let t = KeyValueTransformer::new();
        for (name, expected) in [("a.b.c.d", "c.d"), ("a.b.c.d.e", "e"), ("a", "a")] {
            let once = t.measurement_name(name);
            assert_eq!(once, expected);
            assert_eq!(t.measurement_name(&once), once);
        }
    }

    #[test]
    fn test_duplicate_key_last_wins() {
        let t = KeyValueTransformer::new();
        let tags = t.tags("dc.eu.dc.us.requests");
        assert_eq!(tags.len(), 1);
        assert_eq!(tags.get("dc"), Some(&"us".to_string()));
    }

    #[test]
    fn test_empty_name_is_returned_unchanged() {
        let t = KeyValueTransformer::new();
        assert!(t.tags("").is_empty());
        assert_eq!(t.measurement_name(""), "");
    }

    #[test]
    fn test_transform_matches_individual_operations() {
        let t = KeyValueTransformer::new();
        for name in ["a", "a.b", "a.b.c", "a.b.c.d", "a.b.c.d.e"] {
            let m = t.transform(name);
            assert_eq!(m.name, t.measurement_name(name));
            assert_eq!(m.tags, t.tags(name));
        }
    }
}
