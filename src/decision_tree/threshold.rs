//! Midpoint thresholds that binarize numeric attributes.
use std::collections::BTreeMap;

use crate::error::{Result, TreeError};
use crate::sample::{Instance, Schema};

/// Parses the `attribute`-th value of `instance` as an integer.
#[inline]
pub(crate) fn numeric_value(
    schema: &Schema,
    instance: &Instance,
    attribute: usize,
) -> Result<i64>
{
    let value = instance.value(attribute);
    value.parse::<i64>()
        .map_err(|_| TreeError::MalformedInput {
            attribute: schema.attribute(attribute).name().to_string(),
            value: value.to_string(),
        })
}

/// Returns `floor((max + min) / 2)` of the `attribute`-th values
/// over `instances`.
pub fn midpoint(
    schema: &Schema,
    instances: &[&Instance],
    attribute: usize,
) -> Result<i64>
{
    if instances.is_empty() {
        return Err(TreeError::EmptyDataSet);
    }

    let mut min = i64::MAX;
    let mut max = i64::MIN;
    for inst in instances {
        let value = numeric_value(schema, inst, attribute)?;
        min = min.min(value);
        max = max.max(value);
    }

    // `i128` avoids overflow of `max + min`.
    let mid = (max as i128 + min as i128).div_euclid(2);
    Ok(mid as i64)
}

/// The side of a midpoint threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Side {
    /// `value <= threshold`
    Low,
    /// `value > threshold`
    High,
}

impl Side {
    #[inline]
    pub(crate) fn of(value: i64, threshold: i64) -> Self {
        if value <= threshold { Self::Low } else { Self::High }
    }
}

/// Maps each numeric attribute to the midpoint
/// over the instances that reach the current node.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ThresholdTable {
    midpoints: BTreeMap<usize, i64>,
}

impl ThresholdTable {
    /// Computes the midpoints of every numeric attribute of `schema`
    /// over `instances`.
    /// `instances` must not be empty.
    pub fn refresh(schema: &Schema, instances: &[&Instance]) -> Result<Self> {
        let midpoints = schema.numeric_attributes()
            .map(|attr| {
                midpoint(schema, instances, attr).map(|mid| (attr, mid))
            })
            .collect::<Result<BTreeMap<_, _>>>()?;
        Ok(Self { midpoints })
    }

    /// Returns the midpoint of `attribute`, if computed.
    #[inline]
    pub fn get(&self, attribute: usize) -> Option<i64> {
        self.midpoints.get(&attribute).copied()
    }
}
