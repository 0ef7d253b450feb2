//! Multi-selection slicing and summaries.
//!
//! The explore surface differs from the cascading questionnaire: each
//! attribute carries a *set* of allowed values, an empty set means "no
//! constraint", and results are summarised as grouped metric means rather
//! than resolved to a single scenario.

use hw_core::{Attribute, AttributeValue, BillingType, ControlType, HeaterType, Location, UsagePattern};
use hw_data::{Dataset, Metric, ScenarioKey, ScenarioRow};

/// Independent multi-value filters, one per attribute.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MultiSelection {
    pub locations: Vec<Location>,
    pub occupants: Vec<u8>,
    pub usage_patterns: Vec<UsagePattern>,
    pub solar: Vec<bool>,
    pub billing: Vec<BillingType>,
    pub heaters: Vec<HeaterType>,
    pub controls: Vec<ControlType>,
}

impl MultiSelection {
    pub fn matches(&self, key: &ScenarioKey) -> bool {
        fn allowed<T: PartialEq>(allowed: &[T], value: &T) -> bool {
            allowed.is_empty() || allowed.contains(value)
        }

        allowed(&self.locations, &key.location)
            && allowed(&self.occupants, &key.occupants)
            && allowed(&self.usage_patterns, &key.usage_pattern)
            && allowed(&self.solar, &key.has_solar)
            && allowed(&self.billing, &key.billing)
            && allowed(&self.heaters, &key.heater)
            && allowed(&self.controls, &key.control)
    }
}

/// Rows passing every attribute filter.
pub fn select<'a>(dataset: &'a Dataset, selection: &MultiSelection) -> Vec<&'a ScenarioRow> {
    dataset
        .rows()
        .iter()
        .filter(|row| selection.matches(&row.key))
        .collect()
}

/// Mean of `metric` over the selected rows, grouped by `group`. Groups come
/// back in dataset order; an empty selection yields an empty summary.
pub fn mean_by(
    dataset: &Dataset,
    selection: &MultiSelection,
    group: Attribute,
    metric: Metric,
) -> Vec<(AttributeValue, f64)> {
    let mut sums: Vec<(AttributeValue, f64, usize)> = Vec::new();

    for row in select(dataset, selection) {
        let value = row.key.value_of(group);
        let sample = metric.extract(&row.metrics);
        match sums.iter_mut().find(|(v, _, _)| *v == value) {
            Some((_, sum, count)) => {
                *sum += sample;
                *count += 1;
            }
            None => sums.push((value, sample, 1)),
        }
    }

    sums.into_iter()
        .map(|(value, sum, count)| (value, sum / count as f64))
        .collect()
}
