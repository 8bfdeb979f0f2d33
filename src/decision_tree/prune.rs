//! Greedy reduced-error pruning.
//!
//! Each round collapses the single internal node whose removal
//! gives the best accuracy on a tuning set,
//! as long as that accuracy is at least the accuracy of the current tree.
//! The internal nodes and the baseline accuracy are recomputed every round,
//! since one collapse changes which further collapses help.
use serde::{Serialize, Deserialize};
use tracing::{debug, info};

use std::fmt;

use crate::common::checkers;
use crate::error::Result;
use crate::sample::DataSet;

use super::classifier::DecisionTreeClassifier;

/// Summary of a pruning run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PruneReport {
    /// Number of collapsed nodes.
    pub rounds: usize,
    /// Tuning accuracy of the tree before pruning.
    pub initial_accuracy: f64,
    /// Tuning accuracy of the pruned tree.
    pub final_accuracy: f64,
    /// Number of internal nodes before pruning.
    pub initial_internal_nodes: usize,
    /// Number of internal nodes after pruning.
    pub final_internal_nodes: usize,
}

impl fmt::Display for PruneReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "\
            ----------\n\
            # Pruning\n\n\
            - Rounds: {}\n\
            - Accuracy (tune): {:.4} -> {:.4}\n\
            - Internal nodes: {} -> {}\
            ",
            self.rounds,
            self.initial_accuracy,
            self.final_accuracy,
            self.initial_internal_nodes,
            self.final_internal_nodes,
        )?;
        write!(f, "----------")
    }
}

impl DecisionTreeClassifier {
    /// Prunes this tree against `tune` with greedy reduced-error pruning.
    ///
    /// The tuning accuracy never decreases.
    /// Pruning an already pruned tree with the same tuning set
    /// changes nothing.
    pub fn prune(&mut self, tune: &DataSet) -> Result<PruneReport> {
        checkers::training_set(self.schema(), self.labels(), tune)?;

        let initial_internal_nodes = self.internal_nodes();
        let initial_accuracy = self.accuracy(tune)?;
        info!(
            instances = tune.len(),
            internal_nodes = initial_internal_nodes,
            accuracy = initial_accuracy,
            "pruning a decision tree"
        );

        let mut rounds = 0;
        let mut baseline = initial_accuracy;
        while let Some(accuracy) = self.prune_once(tune, baseline)? {
            rounds += 1;
            baseline = accuracy;
            debug!(
                round = rounds,
                accuracy,
                internal_nodes = self.internal_nodes(),
                "collapsed a node"
            );
        }

        let report = PruneReport {
            rounds,
            initial_accuracy,
            final_accuracy: baseline,
            initial_internal_nodes,
            final_internal_nodes: self.internal_nodes(),
        };
        info!(
            rounds,
            accuracy = report.final_accuracy,
            internal_nodes = report.final_internal_nodes,
            "pruned a decision tree"
        );
        Ok(report)
    }

    /// Performs one round of pruning.
    /// Returns the new tuning accuracy if a node was collapsed.
    fn prune_once(&mut self, tune: &DataSet, baseline: f64)
        -> Result<Option<f64>>
    {
        let paths = self.root.internal_paths();

        let mut accuracies = Vec::with_capacity(paths.len());
        for path in paths.iter() {
            self.root.at_mut(path).terminal = true;
            let accuracy = self.accuracy(tune);
            self.root.at_mut(path).terminal = false;
            accuracies.push(accuracy?);
        }

        // The first node with the largest accuracy wins.
        let mut best: Option<(usize, f64)> = None;
        for (i, &accuracy) in accuracies.iter().enumerate() {
            let replace = match best {
                None => true,
                Some((_, best_accuracy)) => accuracy > best_accuracy,
            };
            if replace {
                best = Some((i, accuracy));
            }
        }

        match best {
            Some((i, accuracy)) if accuracy >= baseline => {
                self.root.at_mut(&paths[i]).collapse();
                Ok(Some(accuracy))
            },
            _ => Ok(None),
        }
    }
}
