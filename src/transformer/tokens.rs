//! Dotted name tokenizing helpers
//!
//! Both strategies share the same view of a metric identifier: the raw string
//! split on [`SEPARATOR`], with the measurement name rebuilt by rejoining a
//! suffix of those tokens.

use crate::error::TransformError;

/// Separator between the segments of a dotted metric name
pub const SEPARATOR: char = '.';

/// A metric identifier split into its dot-delimited tokens
///
/// Tokens borrow from the raw identifier. There is always at least one
/// token; splitting `""` yields a single empty token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DottedName<'a> {
    raw: &'a str,
    tokens: Vec<&'a str>,
}

impl<'a> DottedName<'a> {
    /// Split a raw identifier without validating it
    ///
    /// This is total: an empty identifier becomes one empty token, so the
    /// transformers hand it back unchanged.
    pub fn split(raw: &'a str) -> Self {
        Self {
            raw,
            tokens: raw.split(SEPARATOR).collect(),
        }
    }

    /// Split a raw identifier, rejecting the empty string
    ///
    /// # Errors
    ///
    /// Returns `TransformError::EmptyName` if `raw` is empty.
    pub fn parse(raw: &'a str) -> Result<Self, TransformError> {
        if raw.is_empty() {
            return Err(TransformError::EmptyName);
        }
        Ok(Self::split(raw))
    }

    /// The identifier this name was split from
    pub fn as_str(&self) -> &'a str {
        self.raw
    }

    /// All tokens, in order
    pub fn tokens(&self) -> &[&'a str] {
        &self.tokens
    }

    /// Number of tokens (always at least 1)
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Always `false`; present for API symmetry with `len`
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Rejoin the tokens from `start` onwards
    ///
    /// Returns the raw identifier untouched when `start` is 0, avoiding a
    /// re-join of the whole name.
    pub fn join_from(&self, start: usize) -> String {
        if start == 0 {
            return self.raw.to_string();
        }
        join(&self.tokens[start.min(self.tokens.len())..])
    }
}

/// Join tokens back into a dotted name
pub fn join<S: AsRef<str>>(tokens: &[S]) -> String {
    let capacity = tokens.iter().map(|t| t.as_ref().len() + 1).sum::<usize>();
    let mut out = String::with_capacity(capacity);
    for (i, token) in tokens.iter().enumerate() {
        if i > 0 {
            out.push(SEPARATOR);
        }
        out.push_str(token.as_ref());
    }
    out
}
