use rand::prelude::*;
use rand::rngs::StdRng;
use serde::{Serialize, Deserialize};

use std::ops::Index;
use std::slice;

use super::Instance;

/// An ordered collection of [`Instance`]s.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataSet {
    instances: Vec<Instance>,
}

impl DataSet {
    /// Construct a new data set.
    pub fn new(instances: Vec<Instance>) -> Self {
        Self { instances }
    }

    /// Returns the number of instances.
    #[inline]
    pub fn len(&self) -> usize {
        self.instances.len()
    }

    /// Returns `true` if the data set has no instance.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }

    /// Returns the instances as a slice.
    #[inline]
    pub fn instances(&self) -> &[Instance] {
        &self.instances[..]
    }

    /// Returns an iterator over the instances.
    #[inline]
    pub fn iter(&self) -> slice::Iter<'_, Instance> {
        self.instances.iter()
    }

    /// Returns the label tokens, in order.
    pub fn labels(&self) -> Vec<&str> {
        self.instances.iter()
            .map(|inst| inst.label())
            .collect()
    }

    /// Shuffles the instances with the given `seed`
    /// and splits off a tuning set of `fraction * len` instances.
    /// Returns the pair `(train, tune)`.
    pub fn split_tuning(&self, fraction: f64, seed: u64) -> (Self, Self) {
        assert!(
            (0f64..=1f64).contains(&fraction),
            "fraction must be in [0, 1]. got {fraction}."
        );
        let mut rng = StdRng::seed_from_u64(seed);
        let mut instances = self.instances.clone();
        instances.shuffle(&mut rng);

        let n_tune = (fraction * instances.len() as f64).round() as usize;
        let tune = instances.split_off(instances.len() - n_tune);

        (Self::new(instances), Self::new(tune))
    }
}

impl From<Vec<Instance>> for DataSet {
    #[inline]
    fn from(instances: Vec<Instance>) -> Self {
        Self::new(instances)
    }
}

impl FromIterator<Instance> for DataSet {
    fn from_iter<I>(iter: I) -> Self
        where I: IntoIterator<Item = Instance>
    {
        Self::new(iter.into_iter().collect())
    }
}

impl Index<usize> for DataSet {
    type Output = Instance;
    #[inline]
    fn index(&self, row: usize) -> &Self::Output {
        &self.instances[row]
    }
}

impl<'a> IntoIterator for &'a DataSet {
    type Item = &'a Instance;
    type IntoIter = slice::Iter<'a, Instance>;
    fn into_iter(self) -> Self::IntoIter {
        self.instances.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn data(n: usize) -> DataSet {
        (0..n).map(|i| Instance::new(vec![i.to_string()], "1"))
            .collect()
    }

    #[test]
    fn test_split_tuning_sizes() {
        let data = data(10);
        let (train, tune) = data.split_tuning(0.3, 1234);
        assert_eq!(train.len(), 7);
        assert_eq!(tune.len(), 3);

        let mut values = train.iter()
            .chain(tune.iter())
            .map(|inst| inst.value(0).parse::<usize>().unwrap())
            .collect::<Vec<_>>();
        values.sort();
        assert_eq!(values, (0..10).collect::<Vec<_>>());
    }

    #[test]
    fn test_split_tuning_is_deterministic() {
        let data = data(20);
        let a = data.split_tuning(0.5, 7);
        let b = data.split_tuning(0.5, 7);
        assert_eq!(a, b);
    }

    #[test]
    #[should_panic]
    fn test_split_tuning_bad_fraction() {
        let _ = data(3).split_tuning(1.5, 0);
    }
}
