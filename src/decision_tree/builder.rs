use crate::sample::{LabelSet, Schema};
use super::{
    classifier::Unseen,
    dtree::DecisionTree,
};

/// A struct that builds `DecisionTree`.
/// `DecisionTreeBuilder` keeps parameters for constructing `DecisionTree`.
///
/// # Example
///
/// ```no_run
/// use minitree::prelude::*;
///
/// let tree = DecisionTreeBuilder::new(Schema::german_credit())
///     .labels(LabelSet::new("good", "bad"))
///     .unseen(Unseen::Majority)
///     .build();
/// ```
#[derive(Clone)]
pub struct DecisionTreeBuilder {
    schema: Schema,
    labels: LabelSet,
    unseen: Unseen,
}

impl DecisionTreeBuilder {
    /// Construct a new instance of [`DecisionTreeBuilder`].
    /// By default, [`DecisionTreeBuilder`] sets the parameters as follows;
    /// ```text
    /// labels: LabelSet::default() == {+: "1", -: "2"},
    /// unseen: Unseen::Error,
    /// ```
    pub fn new(schema: Schema) -> Self {
        Self {
            schema,
            labels: LabelSet::default(),
            unseen: Unseen::default(),
        }
    }

    /// Set the label tokens.
    #[inline]
    pub fn labels(mut self, labels: LabelSet) -> Self {
        self.labels = labels;
        self
    }

    /// Set the policy for values that match no edge at prediction time.
    /// Default value is `Unseen::Error`.
    #[inline]
    pub fn unseen(mut self, unseen: Unseen) -> Self {
        self.unseen = unseen;
        self
    }

    /// Build a `DecisionTree`.
    /// This method consumes `self`.
    pub fn build(self) -> DecisionTree {
        DecisionTree::new(self.schema, self.labels, self.unseen)
    }
}
