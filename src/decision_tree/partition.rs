//! Groups instances into buckets by the value of an attribute.
use crate::error::{Result, TreeError};
use crate::sample::{AttributeKind, Instance, Schema};

use super::node::Edge;
use super::threshold::{numeric_value, Side, ThresholdTable};

/// Groups `instances` by the value of `attribute`.
///
/// * A categorical attribute yields one bucket per declared code,
///   in ascending code order. Every bucket exists, even if empty.
/// * A numeric attribute yields exactly two buckets `[low, high]`,
///   split at the midpoint stored in `table`.
///
/// The returned edges name the buckets.
pub fn group_by_attribute<'a>(
    schema:    &Schema,
    table:     &ThresholdTable,
    attribute: usize,
    instances: &[&'a Instance],
) -> Result<(Vec<Edge>, Vec<Vec<&'a Instance>>)>
{
    let desc = schema.attribute(attribute);
    match desc.kind() {
        AttributeKind::Categorical { categories, .. } => {
            let codes = schema.category_codes(attribute);
            let mut buckets = vec![Vec::new(); categories];
            for &inst in instances {
                let value = inst.value(attribute);
                let k = codes.iter()
                    .position(|code| code == value)
                    .ok_or_else(|| TreeError::MalformedInput {
                        attribute: desc.name().to_string(),
                        value: value.to_string(),
                    })?;
                buckets[k].push(inst);
            }
            let edges = codes.into_iter()
                .map(Edge::Category)
                .collect();
            Ok((edges, buckets))
        },
        AttributeKind::Numeric => {
            let threshold = table.get(attribute)
                .ok_or_else(|| TreeError::MissingThreshold {
                    attribute: desc.name().to_string(),
                })?;
            let mut low = Vec::new();
            let mut high = Vec::new();
            for &inst in instances {
                let value = numeric_value(schema, inst, attribute)?;
                match Side::of(value, threshold) {
                    Side::Low  => { low.push(inst); },
                    Side::High => { high.push(inst); },
                }
            }
            Ok((vec![Edge::Low, Edge::High], vec![low, high]))
        },
    }
}
