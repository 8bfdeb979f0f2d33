//! Defines the decision tree classifier.
use colored::Colorize;
use serde::{Serialize, Deserialize};

use std::fmt;
use std::path::Path;
use std::fs::File;
use std::io::prelude::*;

use crate::classifier::{self, Classifier};
use crate::common::checkers;
use crate::constants::INDENT_WIDTH;
use crate::error::{Result, TreeError};
use crate::sample::{DataSet, Instance, Label, LabelSet, Schema};

use super::node::*;
use super::threshold::{numeric_value, Side};

/// What to do when an instance reaches a decision node
/// and none of the outgoing edges matches its value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Unseen {
    /// Fail with [`TreeError::UnseenCategory`].
    #[default]
    Error,
    /// Stop at the node and predict its majority label.
    Majority,
}

/// Decision tree classifier.
/// Holds the root node together with the schema and label tokens
/// it was grown with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionTreeClassifier {
    pub(crate) root: Node,
    schema: Schema,
    labels: LabelSet,
    unseen: Unseen,
}

impl DecisionTreeClassifier {
    pub(crate) fn new(
        root:   Node,
        schema: Schema,
        labels: LabelSet,
        unseen: Unseen,
    ) -> Self
    {
        Self { root, schema, labels, unseen, }
    }

    /// Returns the root node.
    #[inline]
    pub fn root(&self) -> &Node {
        &self.root
    }

    /// Returns the schema this tree was grown with.
    #[inline]
    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    /// Returns the label tokens.
    #[inline]
    pub fn labels(&self) -> &LabelSet {
        &self.labels
    }

    /// Returns the number of internal nodes.
    #[inline]
    pub fn internal_nodes(&self) -> usize {
        self.root.internal_nodes()
    }

    /// Returns the number of leaves.
    #[inline]
    pub fn leaves(&self) -> usize {
        self.root.leaves()
    }

    /// Returns the depth of the tree.
    #[inline]
    pub fn depth(&self) -> usize {
        self.root.depth()
    }

    /// Predicts the label token of each instance of `test`, in order.
    pub fn classify(&self, test: &DataSet) -> Result<Vec<String>> {
        checkers::test_set(&self.schema, test)?;
        let predictions = self.predict_all(test)?
            .into_iter()
            .map(|label| self.labels.token(label).to_string())
            .collect();
        Ok(predictions)
    }

    /// Returns the fraction of correctly classified instances of `data`.
    pub fn accuracy(&self, data: &DataSet) -> Result<f64> {
        let predictions = self.classify(data)?;
        classifier::accuracy(data, &predictions[..])
    }

    /// Returns the edge an instance follows at a node testing `test`.
    /// Numeric attributes are compared against the threshold
    /// frozen at training time.
    fn edge_of(&self, test: &AttributeTest, instance: &Instance)
        -> Result<Edge>
    {
        let edge = match test.threshold {
            Some(threshold) => {
                let value = numeric_value(
                    &self.schema, instance, test.attribute
                )?;
                match Side::of(value, threshold) {
                    Side::Low  => Edge::Low,
                    Side::High => Edge::High,
                }
            },
            None => {
                Edge::Category(instance.value(test.attribute).to_string())
            },
        };
        Ok(edge)
    }

    /// Write the current decision tree to dot file.
    pub fn to_dot_file<P>(&self, path: P) -> Result<()>
        where P: AsRef<Path>
    {
        let mut f = File::create(path)?;
        f.write_all(b"graph DecisionTree {\n")?;

        let token = |label: Label| self.labels.token(label).to_string();
        let info = self.root.to_dot_info(0, &token).0;
        for row in info {
            f.write_all(row.as_bytes())?;
        }

        f.write_all(b"}\n")?;

        Ok(())
    }

    /// Serializes this classifier to a JSON string.
    pub fn to_json(&self) -> Result<String> {
        let json = serde_json::to_string_pretty(self)?;
        Ok(json)
    }

    /// Deserializes a classifier from a JSON string.
    /// The tree must agree with the schema stored next to it.
    pub fn from_json(json: &str) -> Result<Self> {
        let classifier: Self = serde_json::from_str(json)?;
        classifier.validate()?;
        Ok(classifier)
    }

    /// Checks that the tree is well-formed
    /// and that every attribute test fits the schema.
    fn validate(&self) -> Result<()> {
        if !self.root.is_well_formed() {
            return Err(TreeError::MalformedTree {
                reason: "a leaf has children or a decision node has none"
                    .to_string(),
            });
        }
        self.validate_tests(&self.root)
    }

    fn validate_tests(&self, node: &Node) -> Result<()> {
        let Some(test) = node.test() else { return Ok(()); };

        let n_attributes = self.schema.len();
        if test.attribute >= n_attributes {
            return Err(TreeError::MalformedTree {
                reason: format!(
                    "node tests attribute {} of a {n_attributes}-attribute schema",
                    test.attribute,
                ),
            });
        }

        let numeric = self.schema.attribute(test.attribute).is_numeric();
        if numeric != test.threshold.is_some() {
            return Err(TreeError::MalformedTree {
                reason: format!(
                    "threshold of attribute `{}` does not match its kind",
                    test.name,
                ),
            });
        }

        node.children()
            .iter()
            .try_for_each(|child| self.validate_tests(child))
    }

    /// Prints the indented outline of the tree to the standard output.
    pub fn print(&self) {
        let mut lines = Vec::new();
        self.outline(&self.root, 0, &mut |depth, node| {
            let indent = " ".repeat(depth * INDENT_WIDTH);
            let edge = node.edge().token().bold();
            let line = match node.test() {
                Some(test) => {
                    let question = format!("{{{}?}}", test.name()).blue();
                    format!("{indent}{edge} {question}")
                },
                None => {
                    let token = self.labels.token(node.label());
                    let label = match node.label() {
                        Label::Positive => token.green(),
                        Label::Negative => token.red(),
                    };
                    format!("{indent}{edge} ({label})")
                },
            };
            lines.push(line);
        });
        for line in lines {
            println!("{line}");
        }
    }

    /// Visits the reachable nodes in pre-order with their depth.
    fn outline<'a, F>(&self, node: &'a Node, depth: usize, visit: &mut F)
        where F: FnMut(usize, &'a Node),
    {
        visit(depth, node);
        if node.is_terminal() { return; }
        for child in node.children() {
            self.outline(child, depth + 1, visit);
        }
    }
}

impl Classifier for DecisionTreeClassifier {
    fn predict(&self, instance: &Instance) -> Result<Label> {
        let expected = self.schema.len();
        if instance.len() != expected {
            let got = instance.len();
            // `predict_all` replaces the row index.
            return Err(TreeError::ArityMismatch { row: 0, expected, got });
        }

        let mut node = &self.root;
        while let Some(test) = node.test() {
            let edge = self.edge_of(test, instance)?;
            match node.children().iter().find(|child| child.edge == edge) {
                Some(child) => { node = child; },
                None => match self.unseen {
                    Unseen::Majority => { break; },
                    Unseen::Error => {
                        return Err(TreeError::UnseenCategory {
                            attribute: test.name().to_string(),
                            value: edge.token().to_string(),
                        });
                    },
                },
            }
        }
        Ok(node.label())
    }
}

impl fmt::Display for DecisionTreeClassifier {
    /// Writes the outline of the tree, e.g.,
    /// ```text
    /// Root {Status of existing checking account?}
    ///   A11 (2)
    ///   A12 {foreign worker?}
    ///     A71 (1)
    ///     A72 (2)
    /// ```
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut lines = Vec::new();
        self.outline(&self.root, 0, &mut |depth, node| {
            let indent = " ".repeat(depth * INDENT_WIDTH);
            let line = match node.test() {
                Some(test) => format!("{indent}{} {{{}?}}", node.edge(), test.name()),
                None => {
                    let token = self.labels.token(node.label());
                    format!("{indent}{} ({token})", node.edge())
                },
            };
            lines.push(line);
        });
        for line in lines {
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}
