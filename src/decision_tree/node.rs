//! A node struct used in the decision tree algorithm.
use serde::{Serialize, Deserialize};

use std::fmt;

use crate::constants::{ROOT_TOKEN, LOW_TOKEN, HIGH_TOKEN};
use crate::sample::Label;

/// The value on the edge from a parent to its child.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Edge {
    /// The root has no parent.
    Root,
    /// A category code of the attribute tested at the parent.
    Category(String),
    /// `value <= threshold` of the numeric attribute tested at the parent.
    Low,
    /// `value > threshold` of the numeric attribute tested at the parent.
    High,
}

impl Edge {
    /// Returns the token of this edge.
    #[inline]
    pub fn token(&self) -> &str {
        match self {
            Self::Root => ROOT_TOKEN,
            Self::Category(code) => code,
            Self::Low => LOW_TOKEN,
            Self::High => HIGH_TOKEN,
        }
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.token())
    }
}

/// The attribute tested at an internal node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributeTest {
    pub(crate) attribute: usize,
    pub(crate) name: String,
    /// The midpoint used while growing, for a numeric attribute.
    /// Prediction at this node compares against this value.
    pub(crate) threshold: Option<i64>,
}

impl AttributeTest {
    /// Returns the index of the tested attribute.
    #[inline]
    pub fn attribute(&self) -> usize {
        self.attribute
    }

    /// Returns the name of the tested attribute.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the frozen midpoint of a numeric attribute.
    #[inline]
    pub fn threshold(&self) -> Option<i64> {
        self.threshold
    }
}

/// A decision (internal) node or a terminal (leaf) node.
///
/// A node is terminal iff it has no child.
/// Every node keeps the majority label of the instances that reached it,
/// which the pruning procedure uses as the label of a collapsed node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub(crate) label: Label,
    pub(crate) edge: Edge,
    pub(crate) terminal: bool,
    pub(crate) test: Option<AttributeTest>,
    pub(crate) children: Vec<Node>,
}

impl Node {
    pub(crate) fn leaf(label: Label, edge: Edge) -> Self {
        Self {
            label,
            edge,
            terminal: true,
            test: None,
            children: Vec::new(),
        }
    }

    pub(crate) fn branch(
        label:    Label,
        edge:     Edge,
        test:     AttributeTest,
        children: Vec<Node>,
    ) -> Self
    {
        Self {
            label,
            edge,
            terminal: false,
            test: Some(test),
            children,
        }
    }

    /// Returns the majority label of this node.
    #[inline]
    pub fn label(&self) -> Label {
        self.label
    }

    /// Returns the edge from the parent to this node.
    #[inline]
    pub fn edge(&self) -> &Edge {
        &self.edge
    }

    /// Returns `true` if this node is a leaf.
    #[inline]
    pub fn is_terminal(&self) -> bool {
        self.terminal
    }

    /// Returns the attribute test of an internal node.
    /// A collapsed node keeps its test, but it is never consulted.
    #[inline]
    pub fn test(&self) -> Option<&AttributeTest> {
        if self.terminal { None } else { self.test.as_ref() }
    }

    /// Returns the children, in edge order.
    #[inline]
    pub fn children(&self) -> &[Node] {
        &self.children[..]
    }

    /// Turns this node into a leaf that predicts its majority label.
    pub(crate) fn collapse(&mut self) {
        self.terminal = true;
        self.children.clear();
    }

    /// Returns the node at `path`, a sequence of child indices.
    pub(crate) fn at_mut(&mut self, path: &[usize]) -> &mut Node {
        path.iter()
            .fold(self, |node, &i| &mut node.children[i])
    }

    /// Collects the paths of the internal nodes in pre-order.
    pub(crate) fn internal_paths(&self) -> Vec<Vec<usize>> {
        let mut paths = Vec::new();
        let mut path = Vec::new();
        self.collect_internal(&mut path, &mut paths);
        paths
    }

    fn collect_internal(
        &self,
        path:  &mut Vec<usize>,
        paths: &mut Vec<Vec<usize>>,
    )
    {
        if self.terminal { return; }

        paths.push(path.clone());
        for (i, child) in self.children.iter().enumerate() {
            path.push(i);
            child.collect_internal(path, paths);
            path.pop();
        }
    }

    /// Returns the number of internal nodes of this sub-tree.
    pub fn internal_nodes(&self) -> usize {
        if self.terminal { return 0; }
        1 + self.children.iter()
            .map(Node::internal_nodes)
            .sum::<usize>()
    }

    /// Returns the number of leaves of this sub-tree.
    pub fn leaves(&self) -> usize {
        if self.terminal { return 1; }
        self.children.iter()
            .map(Node::leaves)
            .sum::<usize>()
    }

    /// Returns the depth of this sub-tree. A leaf has depth `0`.
    pub fn depth(&self) -> usize {
        if self.terminal { return 0; }
        1 + self.children.iter()
            .map(Node::depth)
            .max()
            .unwrap_or(0)
    }

    /// Returns `true` if every reachable internal node has a child
    /// and every reachable leaf has none.
    pub fn is_well_formed(&self) -> bool {
        if self.terminal {
            self.children.is_empty()
        } else {
            !self.children.is_empty()
                && self.test.is_some()
                && self.children.iter().all(Node::is_well_formed)
        }
    }

    pub(crate) fn to_dot_info(
        &self,
        id: usize,
        token: &dyn Fn(Label) -> String,
    ) -> (Vec<String>, usize)
    {
        match self.test() {
            Some(test) => {
                let question = match test.threshold {
                    Some(thr) => format!("{} <= {thr} ?", test.name),
                    None => format!("{} ?", test.name),
                };
                let mut info = vec![
                    format!("\tnode_{id} [ label = \"{question}\" ];\n"),
                ];

                let mut next_id = id + 1;
                for child in self.children.iter() {
                    let child_id = next_id;
                    let (mut child_info, ret_id) = child.to_dot_info(
                        child_id, token
                    );
                    info.append(&mut child_info);
                    info.push(format!(
                        "\tnode_{id} -- node_{child_id} [ label = \"{}\" ];\n",
                        child.edge,
                    ));
                    next_id = ret_id;
                }

                (info, next_id)
            },
            None => {
                let info = format!(
                    "\tnode_{id} [ label = \"{}\", shape = box ];\n",
                    token(self.label),
                );

                (vec![info], id + 1)
            },
        }
    }
}
