//! Exports the decision tree learner, the data model, and the traits.
//!
pub use crate::sample::{
    AttributeDescriptor,
    AttributeKind,
    DataSet,
    Instance,
    Label,
    LabelSet,
    Schema,
};


pub use crate::decision_tree::{
    DecisionTree,
    DecisionTreeBuilder,
    DecisionTreeClassifier,
    Edge,
    Node,
    PruneReport,
    Unseen,
};


pub use crate::classifier::{
    // Classifier trait
    Classifier,
    accuracy,
};


pub use crate::error::TreeError;
