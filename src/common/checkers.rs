//! This file defines some functions that checks some pre-conditions
//! E.g., Shape of data

use crate::sample::{AttributeKind, DataSet, LabelSet, Schema};
use crate::error::{Result, TreeError};

/// Check whether the training sample is valid or not.
/// An empty data set is rejected.
pub(crate) fn training_set(
    schema: &Schema,
    labels: &LabelSet,
    data: &DataSet,
) -> Result<()>
{
    if data.is_empty() {
        return Err(TreeError::EmptyDataSet);
    }
    labeled_set(schema, labels, data)
}

/// Check that every row has one value per attribute,
/// a known label token,
/// and values that are valid under `schema`.
pub(crate) fn labeled_set(
    schema: &Schema,
    labels: &LabelSet,
    data: &DataSet,
) -> Result<()>
{
    let codes = (0..schema.len())
        .map(|attr| schema.category_codes(attr))
        .collect::<Vec<_>>();

    for (row, inst) in data.iter().enumerate() {
        arity(schema, row, inst.len())?;

        if labels.parse(inst.label()).is_none() {
            let label = inst.label().to_string();
            return Err(TreeError::UnknownLabel { row, label });
        }

        for (attr, desc) in schema.attributes().enumerate() {
            let value = inst.value(attr);
            let valid = match desc.kind() {
                AttributeKind::Numeric => value.parse::<i64>().is_ok(),
                AttributeKind::Categorical { .. } => {
                    codes[attr].iter().any(|code| code == value)
                },
            };
            if !valid {
                return Err(TreeError::MalformedInput {
                    attribute: desc.name().to_string(),
                    value: value.to_string(),
                });
            }
        }
    }
    Ok(())
}

/// Check that every row of an unlabeled (test) set
/// has one value per attribute.
pub(crate) fn test_set(schema: &Schema, data: &DataSet) -> Result<()> {
    if data.is_empty() {
        return Err(TreeError::EmptyDataSet);
    }
    for (row, inst) in data.iter().enumerate() {
        arity(schema, row, inst.len())?;
    }
    Ok(())
}

#[inline(always)]
fn arity(schema: &Schema, row: usize, got: usize) -> Result<()> {
    let expected = schema.len();
    if got != expected {
        return Err(TreeError::ArityMismatch { row, expected, got });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sample::{AttributeDescriptor, Instance};

    fn schema() -> Schema {
        Schema::new(vec![
            AttributeDescriptor::categorical("color", 2, 1),
            AttributeDescriptor::numeric("size"),
        ])
    }

    #[test]
    fn test_valid_set() {
        let data = DataSet::new(vec![
            Instance::new(vec!["A11", "3"], "1"),
            Instance::new(vec!["A12", "-7"], "2"),
        ]);
        assert!(training_set(&schema(), &LabelSet::default(), &data).is_ok());
    }

    #[test]
    fn test_empty_set() {
        let data = DataSet::default();
        let result = training_set(&schema(), &LabelSet::default(), &data);
        assert!(matches!(result, Err(TreeError::EmptyDataSet)));
    }

    #[test]
    fn test_arity_mismatch() {
        let data = DataSet::new(vec![
            Instance::new(vec!["A11", "3"], "1"),
            Instance::new(vec!["A11"], "1"),
        ]);
        let result = training_set(&schema(), &LabelSet::default(), &data);
        assert!(matches!(
            result,
            Err(TreeError::ArityMismatch { row: 1, expected: 2, got: 1 })
        ));
    }

    #[test]
    fn test_unknown_label() {
        let data = DataSet::new(vec![Instance::new(vec!["A11", "3"], "yes")]);
        let result = training_set(&schema(), &LabelSet::default(), &data);
        assert!(matches!(result, Err(TreeError::UnknownLabel { row: 0, .. })));
    }

    #[test]
    fn test_malformed_numeric() {
        let data = DataSet::new(vec![Instance::new(vec!["A11", "3.5"], "1")]);
        let result = training_set(&schema(), &LabelSet::default(), &data);
        assert!(matches!(result, Err(TreeError::MalformedInput { .. })));
    }

    #[test]
    fn test_undeclared_category() {
        let data = DataSet::new(vec![Instance::new(vec!["A13", "3"], "1")]);
        let result = training_set(&schema(), &LabelSet::default(), &data);
        assert!(matches!(result, Err(TreeError::MalformedInput { .. })));
    }

    #[test]
    fn test_test_set_ignores_labels() {
        let data = DataSet::new(vec![Instance::new(vec!["A19", "x"], "?")]);
        assert!(test_set(&schema(), &data).is_ok());
    }
}
