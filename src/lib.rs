#![warn(missing_docs)]

//!
//! A crate that grows binary decision trees with the ID3 algorithm
//! and prunes them with greedy reduced-error pruning.
//!
//! - Growing
//!     A tree is grown top-down from a training set.
//!     Each node splits on the attribute with the largest
//!     information gain among the attributes not yet tested on its path.
//!     Categorical attributes split into one child per category;
//!     numeric attributes split into two children at the midpoint
//!     of the values that reach the node.
//!
//!     Each numeric split stores the midpoint it was grown with,
//!     and prediction compares against that stored midpoint.
//!     Predictions on numeric attributes therefore differ from
//!     ID3 variants that classify with the midpoints
//!     of the most recently grown node.
//!
//! - Pruning
//!     Given a tuning set, the internal node whose collapse gives
//!     the best tuning accuracy is collapsed repeatedly,
//!     as long as the accuracy does not decrease.
//!
//! # Example
//! ```no_run
//! use minitree::prelude::*;
//!
//! let schema = Schema::new(vec![
//!     AttributeDescriptor::categorical("outlook", 3, 1),
//!     AttributeDescriptor::numeric("temperature"),
//! ]);
//! let train = DataSet::new(vec![
//!     Instance::new(vec!["A11", "30"], "1"),
//!     Instance::new(vec!["A12", "12"], "2"),
//!     Instance::new(vec!["A13", "25"], "1"),
//! ]);
//!
//! let f = DecisionTreeBuilder::new(schema)
//!     .build()
//!     .fit(&train)
//!     .unwrap();
//!
//! println!("{f}");
//! let predictions = f.classify(&train).unwrap();
//! ```

pub mod constants;
pub mod error;
pub mod sample;
pub mod classifier;
pub mod decision_tree;
pub mod prelude;

mod common;


pub use error::{Result, TreeError};

pub use sample::{
    AttributeDescriptor,
    AttributeKind,
    DataSet,
    Instance,
    Label,
    LabelSet,
    Schema,
};

pub use classifier::{Classifier, accuracy};

pub use decision_tree::{
    DecisionTree,
    DecisionTreeBuilder,
    DecisionTreeClassifier,
    Node,
    PruneReport,
    Unseen,
};
