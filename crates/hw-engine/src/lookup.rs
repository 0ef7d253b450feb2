//! Scenario lookup: configuration → dataset row.

use hw_data::{Dataset, ScenarioRow};

use crate::config::UserConfiguration;

/// Resolve a configuration to its scenario row.
///
/// Returns `None` when the configuration is incomplete (a partial
/// configuration never produces a partial match) or when the combination has
/// no row, which for a sparse dataset means the combination is technically
/// meaningless rather than missing. Should more than one row match — ruled
/// out for loaded datasets, which reject duplicate keys — the first row in
/// dataset order wins.
pub fn lookup<'a>(dataset: &'a Dataset, config: &UserConfiguration) -> Option<&'a ScenarioRow> {
    if !config.is_complete() {
        return None;
    }
    dataset.rows().iter().find(|row| config.matches(&row.key))
}

#[cfg(test)]
mod tests {
    use super::*;
    use hw_core::{BillingType, ControlType, HeaterType, Location, UsagePattern};
    use hw_data::{ScenarioKey, ScenarioMetrics, ScenarioRow};

    fn key(heater: HeaterType, billing: BillingType) -> ScenarioKey {
        ScenarioKey {
            location: Location::Adelaide,
            occupants: 2,
            usage_pattern: UsagePattern::MorningDominant,
            has_solar: false,
            billing,
            heater,
            control: ControlType::NoControl,
        }
    }

    fn dataset() -> Dataset {
        let metrics = ScenarioMetrics {
            net_present_cost: 0.0,
            capital_cost: 0.0,
            rebates: 0.0,
            annual_energy_cost: 0.0,
            annual_supply_cost: 0.0,
            annual_fit_opp_cost: 0.0,
            emissions_total: 0.0,
            annual_energy_consumption: 0.0,
        };
        Dataset::new(vec![
            ScenarioRow {
                key: key(HeaterType::Electric, BillingType::FlatRateElectricity),
                metrics,
            },
            ScenarioRow {
                key: key(HeaterType::GasStorage, BillingType::FlatRateGas),
                metrics,
            },
        ])
        .unwrap()
    }

    #[test]
    fn complete_configuration_resolves_to_its_row() {
        let dataset = dataset();
        let config = UserConfiguration::from_key(&key(
            HeaterType::Electric,
            BillingType::FlatRateElectricity,
        ));
        let row = lookup(&dataset, &config).unwrap();
        assert_eq!(row.key.heater, HeaterType::Electric);
    }

    #[test]
    fn incomplete_configuration_is_not_found() {
        let dataset = dataset();
        let mut config = UserConfiguration::from_key(&key(
            HeaterType::Electric,
            BillingType::FlatRateElectricity,
        ));
        config.control = None;
        assert!(lookup(&dataset, &config).is_none());
    }

    #[test]
    fn meaningless_combination_is_not_found() {
        // Gas storage on a time-varying electricity tariff is never simulated.
        let dataset = dataset();
        let config = UserConfiguration::from_key(&key(
            HeaterType::GasStorage,
            BillingType::TimeVaryingElectricity,
        ));
        assert!(lookup(&dataset, &config).is_none());
    }
}
