//! Per-tag counter breakdown
//!
//! Counters that can break their total down by tag combination advertise it
//! through [`AdditionalTaggingCounter`]. Each tag combination is keyed by a
//! tag identifier: the tag values joined with [`TAG_SEPARATOR`].
//!
//! Identifiers are only built through [`tag_identifier`], which refuses
//! values that would make the join ambiguous: values containing the
//! separator, or starting or ending with its `:` character (these merge with
//! an adjacent separator). No escaping is applied.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, RwLock};

use crate::error::TaggingError;

/// Separator joining tag values into a tag identifier
pub const TAG_SEPARATOR: &str = ":::";

const SEPARATOR_CHAR: char = ':';

/// Thread-safe monotonic counter
#[derive(Debug, Default)]
pub struct Counter {
    value: AtomicU64,
}

impl Counter {
    /// Create a new counter initialized to 0
    pub fn new() -> Self {
        Self {
            value: AtomicU64::new(0),
        }
    }

    /// Increment the counter by 1
    pub fn inc(&self) {
        self.inc_by(1);
    }

    /// Increment the counter by a specific amount
    pub fn inc_by(&self, n: u64) {
        self.value.fetch_add(n, Ordering::Relaxed);
    }

    /// Get the current value
    pub fn get(&self) -> u64 {
        self.value.load(Ordering::Relaxed)
    }

    /// Reset the counter to 0
    pub fn reset(&self) {
        self.value.store(0, Ordering::Relaxed);
    }
}

/// Capability of counters that keep an independent count per tag combination
pub trait AdditionalTaggingCounter {
    /// Sub-counters keyed by tag identifier
    ///
    /// Each handle counts only the events recorded under its tag combination.
    fn individual_count_per_tag(&self) -> HashMap<String, Arc<Counter>>;
}

/// Join tag values into a tag identifier
///
/// # Errors
///
/// - `TaggingError::NoTagValues` if `values` is empty
/// - `TaggingError::SeparatorInTagValue` if a value contains
///   [`TAG_SEPARATOR`] or starts or ends with `:`
///
/// # Example
///
/// ```
/// use influx_naming::tagging::tag_identifier;
///
/// assert_eq!(tag_identifier(["eu", "web01"]).unwrap(), "eu:::web01");
/// assert!(tag_identifier(["a:::b"]).is_err());
/// ```
pub fn tag_identifier<I, S>(values: I) -> Result<String, TaggingError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut identifier = String::new();
    let mut count = 0usize;
    for value in values {
        let value = value.as_ref();
        if value.contains(TAG_SEPARATOR)
            || value.starts_with(SEPARATOR_CHAR)
            || value.ends_with(SEPARATOR_CHAR)
        {
            return Err(TaggingError::SeparatorInTagValue {
                value: value.to_string(),
                separator: TAG_SEPARATOR,
            });
        }
        if count > 0 {
            identifier.push_str(TAG_SEPARATOR);
        }
        identifier.push_str(value);
        count += 1;
    }

    if count == 0 {
        return Err(TaggingError::NoTagValues);
    }
    Ok(identifier)
}

/// Split a tag identifier back into its tag values
pub fn split_tag_identifier(identifier: &str) -> Vec<&str> {
    identifier.split(TAG_SEPARATOR).collect()
}

/// Counter with a total and a per-tag-identifier breakdown
///
/// Sub-counters are created on first use. Increments are atomic, so
/// concurrent updates to the same tag combination are never lost.
#[derive(Debug, Default)]
pub struct TaggedCounter {
    total: Counter,
    per_tag: RwLock<HashMap<String, Arc<Counter>>>,
}

impl TaggedCounter {
    /// Create a new counter with no tag breakdown yet
    pub fn new() -> Self {
        Self::default()
    }

    /// Increment the total by 1 without a tag
    pub fn inc(&self) {
        self.total.inc();
    }

    /// Increment the total by `n` without a tag
    pub fn inc_by(&self, n: u64) {
        self.total.inc_by(n);
    }

    /// Increment the total and the sub-counter for `values` by 1
    ///
    /// # Errors
    ///
    /// Fails without recording anything if the values cannot form a tag
    /// identifier (see [`tag_identifier`]).
    pub fn inc_tagged<I, S>(&self, values: I) -> Result<(), TaggingError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.inc_tagged_by(values, 1)
    }

    /// Increment the total and the sub-counter for `values` by `n`
    pub fn inc_tagged_by<I, S>(&self, values: I, n: u64) -> Result<(), TaggingError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let identifier = tag_identifier(values)?;
        self.sub_counter(&identifier).inc_by(n);
        self.total.inc_by(n);
        Ok(())
    }

    /// Total count across all tags
    pub fn count(&self) -> u64 {
        self.total.get()
    }

    /// Count recorded under a tag identifier, 0 if never seen
    pub fn count_for(&self, identifier: &str) -> u64 {
        let per_tag = self.per_tag.read().unwrap_or_else(|e| e.into_inner());
        per_tag.get(identifier).map(|c| c.get()).unwrap_or(0)
    }

    /// Get or create the sub-counter for an identifier
    fn sub_counter(&self, identifier: &str) -> Arc<Counter> {
        {
            let per_tag = self.per_tag.read().unwrap_or_else(|e| e.into_inner());
            if let Some(counter) = per_tag.get(identifier) {
                return Arc::clone(counter);
            }
        }

        let mut per_tag = self.per_tag.write().unwrap_or_else(|e| e.into_inner());
        tracing::trace!(identifier, "Creating per-tag counter");
        Arc::clone(per_tag.entry(identifier.to_string()).or_default())
    }
}

impl AdditionalTaggingCounter for TaggedCounter {
    fn individual_count_per_tag(&self) -> HashMap<String, Arc<Counter>> {
        self.per_tag
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }
}
