use fixedbitset::FixedBitSet;
use rayon::prelude::*;
use tracing::{debug, info, trace};

use std::fmt;

use crate::common::checkers;
use crate::error::Result;
use crate::sample::{DataSet, Instance, Label, LabelSet, Schema};

use super::{
    classifier::{DecisionTreeClassifier, Unseen},
    criterion::{information_gain, Gain, LabelCount},
    node::*,
    partition::group_by_attribute,
    prune::PruneReport,
    threshold::ThresholdTable,
};

/// The ID3-style decision tree algorithm.
/// Given a training set of binary-labeled instances,
/// [`DecisionTree`] grows a [`DecisionTreeClassifier`] top-down,
/// splitting every node on the attribute with the largest information gain.
/// Each attribute is tested at most once on a path.
/// Numeric attributes are binarized at the midpoint of the values
/// reaching the node.
///
/// [`DecisionTree`] is constructed
/// by [`DecisionTreeBuilder`](crate::DecisionTreeBuilder).
///
/// # Example
/// ```no_run
/// use minitree::prelude::*;
///
/// # fn load(_: &str) -> DataSet { unimplemented!() }
/// let train = load("train.csv");
/// let tune = load("tune.csv");
/// let test = load("test.csv");
///
/// let tree = DecisionTreeBuilder::new(Schema::german_credit())
///     .build();
///
/// let (f, report) = tree.fit_with_tuning(&train, &tune).unwrap();
/// println!("{report}");
/// println!("{f}");
///
/// let predictions = f.classify(&test).unwrap();
/// ```
pub struct DecisionTree {
    schema: Schema,
    labels: LabelSet,
    unseen: Unseen,
}

impl DecisionTree {
    /// Initialize [`DecisionTree`].
    /// This method is called only via `DecisionTreeBuilder::build`.
    #[inline]
    pub(super) fn new(schema: Schema, labels: LabelSet, unseen: Unseen)
        -> Self
    {
        Self { schema, labels, unseen, }
    }

    /// Returns the schema.
    #[inline]
    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    /// Grows a tree on `train`.
    pub fn fit(&self, train: &DataSet) -> Result<DecisionTreeClassifier> {
        checkers::training_set(&self.schema, &self.labels, train)?;
        info!(
            instances = train.len(),
            attributes = self.schema.len(),
            "growing a decision tree"
        );

        let instances = train.iter().collect::<Vec<_>>();
        let mut available = FixedBitSet::with_capacity(self.schema.len());
        available.insert_range(..);

        let root = self.grow(&instances[..], &available, Edge::Root)?;

        info!(
            internal_nodes = root.internal_nodes(),
            leaves = root.leaves(),
            depth = root.depth(),
            "grown a decision tree"
        );

        let f = DecisionTreeClassifier::new(
            root, self.schema.clone(), self.labels.clone(), self.unseen
        );
        Ok(f)
    }

    /// Grows a tree on `train`, then prunes it against `tune`.
    pub fn fit_with_tuning(&self, train: &DataSet, tune: &DataSet)
        -> Result<(DecisionTreeClassifier, PruneReport)>
    {
        let mut f = self.fit(train)?;
        let report = f.prune(tune)?;
        Ok((f, report))
    }

    /// Construct the sub-tree for `instances`
    /// that reached the node through `edge`.
    fn grow(
        &self,
        instances: &[&Instance],
        available: &FixedBitSet,
        edge:      Edge,
    ) -> Result<Node>
    {
        // No data reaches this node.
        if instances.is_empty() {
            return Ok(Node::leaf(Label::Positive, edge));
        }

        // The midpoints depend on the instances reaching this node.
        let table = ThresholdTable::refresh(&self.schema, instances)?;

        let count = LabelCount::of(instances, &self.labels);
        let label = count.majority();

        if count.entropy() == 0f64 || available.count_ones(..) == 0 {
            return Ok(Node::leaf(label, edge));
        }

        let Some((attribute, edges, buckets)) = self.best_split(
            &table, available, instances
        )? else {
            return Ok(Node::leaf(label, edge));
        };

        let mut remaining = available.clone();
        remaining.set(attribute, false);

        let children = edges.into_iter()
            .zip(buckets)
            .map(|(edge, bucket)| self.grow(&bucket[..], &remaining, edge))
            .collect::<Result<Vec<_>>>()?;

        let test = AttributeTest {
            attribute,
            name: self.schema.attribute(attribute).name().to_string(),
            threshold: table.get(attribute),
        };
        Ok(Node::branch(label, edge, test, children))
    }

    /// Returns the available attribute with the largest information gain,
    /// with the partition it induces.
    /// Among attributes with equal gain, the one with the largest index wins.
    #[allow(clippy::type_complexity)]
    fn best_split<'a>(
        &self,
        table:     &ThresholdTable,
        available: &FixedBitSet,
        instances: &[&'a Instance],
    ) -> Result<Option<(usize, Vec<Edge>, Vec<Vec<&'a Instance>>)>>
    {
        let candidates = available.ones().collect::<Vec<_>>();

        let splits = candidates.into_par_iter()
            .map(|attribute| {
                let (edges, buckets) = group_by_attribute(
                    &self.schema, table, attribute, instances
                )?;
                let gain = information_gain(
                    instances, &buckets[..], &self.labels
                );
                Ok((attribute, Gain::from(gain), edges, buckets))
            })
            .collect::<Result<Vec<_>>>()?;

        let mut best = None;
        for (attribute, gain, edges, buckets) in splits {
            trace!(
                attribute = self.schema.attribute(attribute).name(),
                %gain,
                "candidate split"
            );
            let replace = match &best {
                None => true,
                Some((_, best_gain, _, _)) => gain >= *best_gain,
            };
            if replace {
                best = Some((attribute, gain, edges, buckets));
            }
        }

        let Some((attribute, gain, edges, buckets)) = best else {
            return Ok(None);
        };
        debug!(
            attribute = self.schema.attribute(attribute).name(),
            %gain,
            instances = instances.len(),
            "split"
        );
        Ok(Some((attribute, edges, buckets)))
    }
}

impl fmt::Display for DecisionTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "\
            ----------\n\
            # Decision Tree\n\n\
            - Split by: Information gain\n\
            - Labels: {}\n\
            - Unseen values: {:?}\n\
            - Attributes:\
            ",
            self.labels,
            self.unseen,
        )?;
        write!(f, "{}", self.schema)?;
        write!(f, "----------")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sample::AttributeDescriptor;
    use crate::DecisionTreeBuilder;

    fn builder(schema: Schema) -> DecisionTree {
        DecisionTreeBuilder::new(schema).build()
    }

    #[test]
    fn test_ties_go_to_the_last_attribute() {
        // Both attributes separate the labels perfectly.
        let schema = Schema::new(vec![
            AttributeDescriptor::categorical("first", 2, 1),
            AttributeDescriptor::categorical("second", 2, 1),
        ]);
        let train = DataSet::new(vec![
            Instance::new(vec!["A11", "A21"], "1"),
            Instance::new(vec!["A11", "A21"], "1"),
            Instance::new(vec!["A12", "A22"], "2"),
            Instance::new(vec!["A12", "A22"], "2"),
        ]);
        let f = builder(schema).fit(&train).unwrap();
        let test = f.root().test().unwrap();
        assert_eq!(test.name(), "second");
        assert_eq!(test.attribute(), 1);
    }

    #[test]
    fn test_zero_gain_ties_go_to_the_last_attribute() {
        // No attribute helps; the last one is still chosen.
        let schema = Schema::new(vec![
            AttributeDescriptor::categorical("first", 1, 1),
            AttributeDescriptor::categorical("second", 1, 1),
            AttributeDescriptor::categorical("third", 1, 1),
        ]);
        let train = DataSet::new(vec![
            Instance::new(vec!["A11", "A21", "A31"], "1"),
            Instance::new(vec!["A11", "A21", "A31"], "2"),
        ]);
        let f = builder(schema).fit(&train).unwrap();
        let root = f.root();
        assert_eq!(root.test().unwrap().name(), "third");
        assert_eq!(root.label(), Label::Positive);

        // Then "second", then "first", then a majority leaf.
        let child = &root.children()[0];
        assert_eq!(child.test().unwrap().name(), "second");
        let grandchild = &child.children()[0];
        assert_eq!(grandchild.test().unwrap().name(), "first");
        let leaf = &grandchild.children()[0];
        assert!(leaf.is_terminal());
        assert_eq!(leaf.label(), Label::Positive);
        assert!(f.root().is_well_formed());
    }

    #[test]
    fn test_strictly_better_attribute_wins() {
        let schema = Schema::new(vec![
            AttributeDescriptor::categorical("good", 2, 1),
            AttributeDescriptor::categorical("noise", 2, 1),
        ]);
        let train = DataSet::new(vec![
            Instance::new(vec!["A11", "A21"], "1"),
            Instance::new(vec!["A11", "A22"], "1"),
            Instance::new(vec!["A12", "A21"], "2"),
            Instance::new(vec!["A12", "A22"], "2"),
        ]);
        let f = builder(schema).fit(&train).unwrap();
        assert_eq!(f.root().test().unwrap().name(), "good");
        assert_eq!(f.internal_nodes(), 1);
    }

    #[test]
    fn test_empty_bucket_gets_positive_leaf() {
        let schema = Schema::new(vec![
            AttributeDescriptor::categorical("color", 3, 1),
        ]);
        let train = DataSet::new(vec![
            Instance::new(vec!["A11"], "2"),
            Instance::new(vec!["A13"], "1"),
        ]);
        let f = builder(schema).fit(&train).unwrap();
        let children = f.root().children();
        assert_eq!(children.len(), 3);
        assert_eq!(children[0].label(), Label::Negative);
        assert_eq!(children[1].label(), Label::Positive);
        assert_eq!(children[1].edge(), &Edge::Category("A12".into()));
        assert!(children[1].is_terminal());
        assert_eq!(children[2].label(), Label::Positive);
    }

    #[test]
    fn test_thresholds_are_path_dependent() {
        // `size` and `color` tie at the root, so `color` wins
        // and `size` is split on both branches with different midpoints.
        let schema = Schema::new(vec![
            AttributeDescriptor::numeric("size"),
            AttributeDescriptor::categorical("color", 2, 1),
        ]);
        let train = DataSet::new(vec![
            Instance::new(vec!["0",   "A21"], "1"),
            Instance::new(vec!["1",   "A21"], "1"),
            Instance::new(vec!["300", "A21"], "1"),
            Instance::new(vec!["299", "A21"], "2"),
            Instance::new(vec!["2",   "A22"], "2"),
            Instance::new(vec!["3",   "A22"], "1"),
            Instance::new(vec!["290", "A22"], "2"),
            Instance::new(vec!["280", "A22"], "2"),
        ]);
        let f = builder(schema).fit(&train).unwrap();
        let root = f.root();
        assert_eq!(root.test().unwrap().name(), "color");
        assert_eq!(root.test().unwrap().threshold(), None);

        let left = root.children()[0].test().unwrap();
        let right = root.children()[1].test().unwrap();
        assert_eq!(left.name(), "size");
        assert_eq!(left.threshold(), Some(150));
        assert_eq!(right.name(), "size");
        assert_eq!(right.threshold(), Some(146));

        let low = &root.children()[1].children()[0];
        assert_eq!(low.edge(), &Edge::Low);
        assert_eq!(low.label(), Label::Positive);
        assert_eq!(f.accuracy(&train).unwrap(), 0.75);
        assert!(root.is_well_formed());
    }

    #[test]
    fn test_no_attribute() {
        let schema = Schema::new(Vec::new());
        let train = DataSet::new(vec![
            Instance::new(Vec::<String>::new(), "2"),
            Instance::new(Vec::<String>::new(), "2"),
            Instance::new(Vec::<String>::new(), "1"),
        ]);
        let f = builder(schema).fit(&train).unwrap();
        assert!(f.root().is_terminal());
        assert_eq!(f.root().label(), Label::Negative);
    }
}
