use serde::{Serialize, Deserialize};

use std::ops::Index;

/// One labeled row: an ordered list of attribute values and a label token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Instance {
    values: Vec<String>,
    label: String,
}

impl Instance {
    /// Construct a new instance.
    pub fn new<V, T, L>(values: V, label: L) -> Self
        where V: IntoIterator<Item = T>,
              T: Into<String>,
              L: Into<String>,
    {
        let values = values.into_iter()
            .map(Into::into)
            .collect();
        Self { values, label: label.into() }
    }

    /// Returns the value of the `attribute`-th attribute.
    #[inline]
    pub fn value(&self, attribute: usize) -> &str {
        &self.values[attribute]
    }

    /// Returns all attribute values.
    #[inline]
    pub fn values(&self) -> &[String] {
        &self.values[..]
    }

    /// Returns the label token.
    #[inline]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Returns the number of attribute values.
    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` if this instance has no attribute value.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl Index<usize> for Instance {
    type Output = str;
    #[inline]
    fn index(&self, attribute: usize) -> &Self::Output {
        self.value(attribute)
    }
}
