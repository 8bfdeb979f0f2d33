//! The trait implemented by fitted models.
use rayon::prelude::*;

use crate::error::{Result, TreeError};
use crate::sample::{DataSet, Instance, Label};

/// A trait that defines the behavor of classifier.
/// You only need to implement `predict` method.
pub trait Classifier {
    /// Predicts the label of `instance`.
    fn predict(&self, instance: &Instance) -> Result<Label>;

    /// Predicts the labels of `data`, in order.
    /// An empty data set is an error.
    /// A per-row error carries the index of the row in `data`.
    fn predict_all(&self, data: &DataSet) -> Result<Vec<Label>>
        where Self: Sync,
    {
        if data.is_empty() {
            return Err(TreeError::EmptyDataSet);
        }
        data.instances()
            .par_iter()
            .enumerate()
            .map(|(row, instance)| {
                self.predict(instance).map_err(|e| e.at_row(row))
            })
            .collect()
    }
}

/// Returns the fraction of `instances` whose label token
/// equals the prediction at the same position.
///
/// An empty data set,
/// or a number of predictions that differs from the number of instances,
/// is an error.
pub fn accuracy<S>(instances: &DataSet, predictions: &[S]) -> Result<f64>
    where S: AsRef<str>,
{
    if instances.is_empty() {
        return Err(TreeError::EmptyDataSet);
    }
    let expected = instances.len();
    let got = predictions.len();
    if expected != got {
        return Err(TreeError::InconsistentPredictionCount { expected, got });
    }

    let correct = instances.iter()
        .zip(predictions)
        .filter(|&(inst, p)| {
            let p: &str = p.as_ref();
            inst.label() == p
        })
        .count();

    Ok(correct as f64 / expected as f64)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn data() -> DataSet {
        DataSet::new(vec![
            Instance::new(vec!["A11"], "1"),
            Instance::new(vec!["A11"], "2"),
            Instance::new(vec!["A12"], "2"),
            Instance::new(vec!["A12"], "2"),
        ])
    }

    #[test]
    fn test_accuracy() {
        let acc = accuracy(&data(), &["1", "1", "2", "2"]).unwrap();
        assert_eq!(acc, 0.75);
    }

    #[test]
    fn test_accuracy_inconsistent_prediction_count() {
        let result = accuracy(&data(), &["1", "2", "2"]);
        assert!(matches!(
            result,
            Err(TreeError::InconsistentPredictionCount { expected: 4, got: 3 })
        ));

        let result = accuracy(&data(), &["1", "2", "2", "2", "1"]);
        assert!(matches!(
            result,
            Err(TreeError::InconsistentPredictionCount { expected: 4, got: 5 })
        ));
    }

    #[test]
    fn test_accuracy_empty() {
        let predictions: [&str; 0] = [];
        let result = accuracy(&DataSet::default(), &predictions);
        assert!(matches!(result, Err(TreeError::EmptyDataSet)));
    }

    struct Constant(Label);

    impl Classifier for Constant {
        fn predict(&self, _instance: &Instance) -> Result<Label> {
            Ok(self.0)
        }
    }

    #[test]
    fn test_predict_all_keeps_order_and_length() {
        let f = Constant(Label::Negative);
        let predictions = f.predict_all(&data()).unwrap();
        assert_eq!(predictions, vec![Label::Negative; 4]);

        let result = f.predict_all(&DataSet::default());
        assert!(matches!(result, Err(TreeError::EmptyDataSet)));
    }
}
