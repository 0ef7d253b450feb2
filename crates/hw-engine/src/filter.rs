//! Cascading filter engine.
//!
//! Each selector in [`hw_core::CASCADE_ORDER`] only offers values consistent
//! with the selectors before it. Re-answering an earlier question can strand
//! later answers; [`reconcile`] clears any stored value that is no longer in
//! its valid set.

use hw_core::{Attribute, AttributeValue, CASCADE_ORDER};
use hw_data::{Dataset, ScenarioKey, ScenarioRow};

use crate::config::UserConfiguration;

/// The valid value set for `attribute`: the distinct values of that attribute
/// among rows satisfying every answered attribute *earlier* in the cascade.
/// Values come back in dataset order.
pub fn narrow(
    dataset: &Dataset,
    config: &UserConfiguration,
    attribute: Attribute,
) -> Vec<AttributeValue> {
    let mut values = Vec::new();
    for row in dataset.rows() {
        if !matches_prefix(config, &row.key, attribute) {
            continue;
        }
        let value = row.key.value_of(attribute);
        if !values.contains(&value) {
            values.push(value);
        }
    }
    values
}

fn matches_prefix(config: &UserConfiguration, key: &ScenarioKey, attribute: Attribute) -> bool {
    for earlier in CASCADE_ORDER {
        if earlier == attribute {
            break;
        }
        if let Some(value) = config.get(earlier)
            && key.value_of(earlier) != value
        {
            return false;
        }
    }
    true
}

/// Walk the cascade once, clearing any answer that is no longer valid given
/// the (already reconciled) answers before it. Returns the cleaned-up
/// configuration; the input is not mutated.
pub fn reconcile(dataset: &Dataset, config: &UserConfiguration) -> UserConfiguration {
    let mut out = *config;
    for attribute in CASCADE_ORDER {
        if let Some(value) = out.get(attribute) {
            let valid = narrow(dataset, &out, attribute);
            if !valid.contains(&value) {
                out.clear(attribute);
            }
        }
    }
    out
}

/// The rows selected by a configuration. Deliberately empty until every
/// question is answered: no partial results are shown.
pub fn filtered_rows<'a>(dataset: &'a Dataset, config: &UserConfiguration) -> Vec<&'a ScenarioRow> {
    if !config.is_complete() {
        return Vec::new();
    }
    dataset
        .rows()
        .iter()
        .filter(|row| config.matches(&row.key))
        .collect()
}
