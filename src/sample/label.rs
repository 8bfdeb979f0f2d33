use serde::{Serialize, Deserialize};

use std::fmt;

use crate::constants::{DEFAULT_POSITIVE, DEFAULT_NEGATIVE};
use super::Instance;

/// The binary class label carried by tree nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Label {
    /// The positive class.
    Positive,
    /// The negative class.
    Negative,
}

/// The pair of string tokens that encode [`Label`] in the input data.
/// By default, `"1"` is positive and `"2"` is negative.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelSet {
    positive: String,
    negative: String,
}

impl Default for LabelSet {
    fn default() -> Self {
        Self::new(DEFAULT_POSITIVE, DEFAULT_NEGATIVE)
    }
}

impl LabelSet {
    /// Construct a new label set from the positive and negative tokens.
    pub fn new<P, N>(positive: P, negative: N) -> Self
        where P: Into<String>,
              N: Into<String>,
    {
        let positive = positive.into();
        let negative = negative.into();
        assert_ne!(
            positive, negative,
            "positive and negative tokens must differ"
        );
        Self { positive, negative }
    }

    /// Returns the token of the positive label.
    #[inline]
    pub fn positive(&self) -> &str {
        &self.positive
    }

    /// Returns the token of the negative label.
    #[inline]
    pub fn negative(&self) -> &str {
        &self.negative
    }

    /// Returns the token that encodes `label`.
    #[inline]
    pub fn token(&self, label: Label) -> &str {
        match label {
            Label::Positive => &self.positive,
            Label::Negative => &self.negative,
        }
    }

    /// Parses a token. Returns `None` for a foreign token.
    #[inline]
    pub fn parse(&self, token: &str) -> Option<Label> {
        if token == self.positive {
            Some(Label::Positive)
        } else if token == self.negative {
            Some(Label::Negative)
        } else {
            None
        }
    }

    /// Returns `true` if `instance` has the positive label.
    #[inline]
    pub fn is_positive(&self, instance: &Instance) -> bool {
        instance.label() == self.positive
    }

    /// Returns the label of `instance`.
    /// Any token other than the positive one counts as negative.
    #[inline]
    pub fn label_of(&self, instance: &Instance) -> Label {
        if self.is_positive(instance) { Label::Positive } else { Label::Negative }
    }
}

impl fmt::Display for LabelSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{+: {}, -: {}}}", self.positive, self.negative)
    }
}
