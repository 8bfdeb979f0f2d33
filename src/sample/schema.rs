//! Static description of the attributes of a data set.
use serde::{Serialize, Deserialize};

use std::fmt;

use crate::constants::DEFAULT_CODE_PREFIX;
use crate::error::Result;

/// The kind of an attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AttributeKind {
    /// A discrete attribute with `categories` codes,
    /// numbered from `start`.
    Categorical {
        /// Number of categories.
        categories: usize,
        /// The number of the first category.
        start: usize,
    },
    /// An integer attribute, binarized at a midpoint threshold.
    Numeric,
}

/// Describes a single attribute.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributeDescriptor {
    name: String,
    kind: AttributeKind,
}

impl AttributeDescriptor {
    /// A categorical attribute with `categories` codes numbered from `start`.
    pub fn categorical<T>(name: T, categories: usize, start: usize) -> Self
        where T: Into<String>
    {
        assert!(categories > 0, "a categorical attribute needs a category");
        let kind = AttributeKind::Categorical { categories, start };
        Self { name: name.into(), kind }
    }

    /// A numeric attribute.
    pub fn numeric<T>(name: T) -> Self
        where T: Into<String>
    {
        Self { name: name.into(), kind: AttributeKind::Numeric }
    }

    /// Returns the human-readable name.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the kind of this attribute.
    #[inline]
    pub fn kind(&self) -> AttributeKind {
        self.kind
    }

    /// Returns `true` if this attribute is numeric.
    #[inline]
    pub fn is_numeric(&self) -> bool {
        matches!(self.kind, AttributeKind::Numeric)
    }
}

/// An immutable, ordered list of attribute descriptors.
///
/// The category codes of the attribute at position `p`
/// are `{prefix}{p + 1}{start + i}` for `i = 0, 1, ..., categories - 1`.
/// With the default prefix `A`, the codes of the first attribute
/// with four categories starting from `1` are `A11, A12, A13, A14`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schema {
    attributes: Vec<AttributeDescriptor>,
    #[serde(default = "default_prefix")]
    prefix: String,
}

fn default_prefix() -> String {
    DEFAULT_CODE_PREFIX.to_string()
}

impl Schema {
    /// Construct a new schema from the given descriptors.
    pub fn new(attributes: Vec<AttributeDescriptor>) -> Self {
        Self { attributes, prefix: default_prefix(), }
    }

    /// Set the prefix of the generated category codes.
    pub fn code_prefix<T>(mut self, prefix: T) -> Self
        where T: Into<String>
    {
        self.prefix = prefix.into();
        self
    }

    /// The seven-attribute credit schema
    /// (4 to 11 categories, plus two numeric attributes).
    pub fn german_credit() -> Self {
        Self::new(vec![
            AttributeDescriptor::categorical(
                "Status of existing checking account", 4, 1
            ),
            AttributeDescriptor::categorical("Credit history", 5, 0),
            AttributeDescriptor::categorical("Purpose", 11, 0),
            AttributeDescriptor::categorical("Savings account/bonds", 5, 1),
            AttributeDescriptor::numeric("Duration in month"),
            AttributeDescriptor::numeric("Credit amount"),
            AttributeDescriptor::categorical("foreign worker", 2, 1),
        ])
    }

    /// Read a schema from a JSON string.
    pub fn from_json(json: &str) -> Result<Self> {
        let schema = serde_json::from_str(json)?;
        Ok(schema)
    }

    /// Returns the number of attributes.
    #[inline]
    pub fn len(&self) -> usize {
        self.attributes.len()
    }

    /// Returns `true` if the schema has no attribute.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }

    /// Returns the descriptor of the `attribute`-th attribute.
    #[inline]
    pub fn attribute(&self, attribute: usize) -> &AttributeDescriptor {
        &self.attributes[attribute]
    }

    /// Returns an iterator over the descriptors.
    #[inline]
    pub fn attributes(&self) -> impl Iterator<Item = &AttributeDescriptor> {
        self.attributes.iter()
    }

    /// Returns the indices of the numeric attributes.
    pub fn numeric_attributes(&self) -> impl Iterator<Item = usize> + '_ {
        self.attributes.iter()
            .enumerate()
            .filter_map(|(i, a)| a.is_numeric().then_some(i))
    }

    /// Returns the code of the `index`-th category of `attribute`.
    /// Returns `None` for a numeric attribute or an out-of-range index.
    pub fn category_code(&self, attribute: usize, index: usize)
        -> Option<String>
    {
        match self.attributes[attribute].kind {
            AttributeKind::Categorical { categories, start }
                if index < categories =>
            {
                let number = attribute + 1;
                let value = start + index;
                Some(format!("{}{number}{value}", self.prefix))
            },
            _ => None,
        }
    }

    /// Returns all category codes of `attribute`, in ascending order.
    /// A numeric attribute has no code.
    pub fn category_codes(&self, attribute: usize) -> Vec<String> {
        let n = match self.attributes[attribute].kind {
            AttributeKind::Categorical { categories, .. } => categories,
            AttributeKind::Numeric => 0,
        };
        (0..n).filter_map(|i| self.category_code(attribute, i))
            .collect()
    }
}

impl fmt::Display for Schema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self.attributes.iter()
            .map(|a| a.name.len())
            .max()
            .unwrap_or(0);
        for (i, attr) in self.attributes.iter().enumerate() {
            let kind = match attr.kind {
                AttributeKind::Categorical { categories, .. } => {
                    let codes = self.category_codes(i);
                    format!("{categories} categories {codes:?}")
                },
                AttributeKind::Numeric => "numeric".to_string(),
            };
            writeln!(f, "\t* [{name: <width$}] {kind}", name = attr.name)?;
        }
        Ok(())
    }
}
