//! Defines the data model: instances, data sets, the attribute schema,
//! and the label tokens.

// Provides the instance struct.
pub(crate) mod instance;
// Provides the data set struct.
pub(crate) mod dataset;
// Provides the attribute schema.
pub mod schema;
// Provides the binary label.
pub(crate) mod label;


pub use instance::Instance;
pub use dataset::DataSet;
pub use schema::{AttributeDescriptor, AttributeKind, Schema};
pub use label::{Label, LabelSet};
