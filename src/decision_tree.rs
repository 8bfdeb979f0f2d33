//! An ID3-style decision tree with greedy reduced-error pruning.

/// Defines the decision tree learner.
pub mod dtree;
/// Defines the classifier produced by `DecisionTree`.
pub mod classifier;
/// Defines the builder of `DecisionTree`.
pub mod builder;
/// Defines greedy reduced-error pruning.
pub mod prune;

/// Defines entropy and information gain.
pub mod criterion;
/// Defines midpoint thresholds of numeric attributes.
pub mod threshold;
/// Defines the partition of instances by an attribute.
pub mod partition;

/// Defines the inner representations of `DecisionTreeClassifier`.
pub mod node;


pub use builder::DecisionTreeBuilder;
pub use classifier::{DecisionTreeClassifier, Unseen};
pub use dtree::DecisionTree;
pub use node::{AttributeTest, Edge, Node};
pub use prune::PruneReport;
pub use threshold::ThresholdTable;
