//! Entropic impurity and information gain of binary labels.
use rayon::prelude::*;

use std::fmt;
use std::cmp::Ordering;

use crate::sample::{Instance, Label, LabelSet};

/// Information gain of a candidate split.
/// This is just a wrapper for `f64`.
#[repr(transparent)]
#[derive(Copy, Clone, Debug)]
pub(crate) struct Gain(pub(crate) f64);

impl From<f64> for Gain {
    #[inline(always)]
    fn from(gain: f64) -> Self {
        Self(gain)
    }
}

impl PartialEq for Gain {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.0.eq(&other.0)
    }
}

impl PartialOrd for Gain {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.0.partial_cmp(&other.0)
    }
}

impl fmt::Display for Gain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.6}", self.0)
    }
}

/// Counts of positive and negative instances.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct LabelCount {
    pub(crate) positive: usize,
    pub(crate) negative: usize,
}

impl LabelCount {
    pub(crate) fn of(instances: &[&Instance], labels: &LabelSet) -> Self {
        let positive = instances.iter()
            .filter(|inst| labels.is_positive(inst))
            .count();
        let negative = instances.len() - positive;
        Self { positive, negative }
    }

    #[inline]
    pub(crate) fn total(&self) -> usize {
        self.positive + self.negative
    }

    /// Binary entropy (in bits) of this count.
    pub(crate) fn entropy(&self) -> f64 {
        let total = self.total();
        if total == 0 { return 0f64; }

        let total = total as f64;
        let p = self.positive as f64 / total;
        let n = self.negative as f64 / total;

        bit_entropy_term(p) + bit_entropy_term(n)
    }

    /// The majority label. Positive wins ties.
    #[inline]
    pub(crate) fn majority(&self) -> Label {
        if self.positive >= self.negative {
            Label::Positive
        } else {
            Label::Negative
        }
    }
}

/// `-p log2 p`, which is exactly `0` at `p = 0`.
#[inline(always)]
fn bit_entropy_term(p: f64) -> f64 {
    if p <= 0f64 { 0f64 } else { -p * p.log2() }
}

/// Returns the binary entropy of the labels of `instances`.
/// The entropy of an empty set is `0`.
#[inline]
pub fn entropy(instances: &[&Instance], labels: &LabelSet) -> f64 {
    LabelCount::of(instances, labels).entropy()
}

/// Returns the majority label of `instances`. Positive wins ties.
#[inline]
pub fn majority(instances: &[&Instance], labels: &LabelSet) -> Label {
    LabelCount::of(instances, labels).majority()
}

/// Returns the information gain of splitting `instances` into `buckets`.
/// The buckets are expected to partition `instances`.
///
/// In exact arithmetic the gain is non-negative;
/// the floating-point result may be slightly below zero.
pub fn information_gain(
    instances: &[&Instance],
    buckets: &[Vec<&Instance>],
    labels: &LabelSet,
) -> f64
{
    let total = instances.len();
    if total == 0 { return 0f64; }
    let total = total as f64;

    let conditional = buckets.par_iter()
        .map(|bucket| {
            let weight = bucket.len() as f64 / total;
            weight * entropy(&bucket[..], labels)
        })
        .collect::<Vec<_>>()
        .into_iter()
        .sum::<f64>();

    entropy(instances, labels) - conditional
}
