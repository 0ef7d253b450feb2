//! Upgrade candidate service.
//!
//! Applies every alternative-system rule to the current configuration, looks
//! the results up, and computes payback for the viable ones. Candidates are
//! dropped silently when the transformed combination has no scenario row or
//! the savings are non-positive; an empty candidate list is a valid outcome.

use hw_data::{Dataset, ScenarioRow};

use crate::config::UserConfiguration;
use crate::lookup::lookup;
use crate::payback::{PaybackOptions, PaybackResult, compute_payback};
use crate::rebates::RebateSchedule;
use crate::transform::AlternativeSystem;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UpgradeCandidate {
    pub system: AlternativeSystem,
    pub configuration: UserConfiguration,
    pub current: ScenarioRow,
    pub candidate: ScenarioRow,
    pub payback: PaybackResult,
}

/// Viable upgrades for the current configuration, in rule order.
pub fn upgrade_candidates(
    dataset: &Dataset,
    config: &UserConfiguration,
    schedule: &RebateSchedule,
    options: &PaybackOptions,
) -> Vec<UpgradeCandidate> {
    let Some(current) = lookup(dataset, config) else {
        tracing::debug!("current configuration has no scenario row, no candidates");
        return Vec::new();
    };

    let jurisdiction = current.key.location.jurisdiction();
    let mut candidates = Vec::new();

    for system in AlternativeSystem::ALL {
        let alternative = system.apply(config);

        let Some(candidate) = lookup(dataset, &alternative) else {
            tracing::debug!(system = %system, "alternative has no scenario row, skipped");
            continue;
        };
        if candidate.key == current.key {
            // The rule landed back on the current system; nothing to compare.
            continue;
        }

        let rebate = schedule.rebate_for(
            jurisdiction,
            current.key.heater,
            candidate.key.heater,
            candidate.metrics.capital_cost,
        );

        let Some(payback) = compute_payback(current, candidate, rebate, options) else {
            tracing::debug!(system = %system, "non-positive savings, skipped");
            continue;
        };

        candidates.push(UpgradeCandidate {
            system,
            configuration: alternative,
            current: *current,
            candidate: *candidate,
            payback,
        });
    }

    candidates
}

#[cfg(test)]
mod tests {
    use super::*;
    use hw_core::{BillingType, ControlType, HeaterType, Location, UsagePattern};
    use hw_data::{ScenarioKey, ScenarioMetrics, ScenarioRow};

    fn row(
        heater: HeaterType,
        billing: BillingType,
        has_solar: bool,
        annual_energy_cost: f64,
        capital_cost: f64,
    ) -> ScenarioRow {
        ScenarioRow {
            key: ScenarioKey {
                location: Location::Melbourne,
                occupants: 3,
                usage_pattern: UsagePattern::EvenlyDistributed,
                has_solar,
                billing,
                heater,
                control: ControlType::NoControl,
            },
            metrics: ScenarioMetrics {
                net_present_cost: 0.0,
                capital_cost,
                rebates: 0.0,
                annual_energy_cost,
                annual_supply_cost: 90.0,
                annual_fit_opp_cost: 0.0,
                emissions_total: 0.0,
                annual_energy_consumption: 0.0,
            },
        }
    }

    fn gas_household_dataset() -> Dataset {
        Dataset::new(vec![
            // Current system: gas storage on gas billing.
            row(HeaterType::GasStorage, BillingType::FlatRateGas, false, 900.0, 1600.0),
            // Cheap-to-run electric alternatives.
            row(HeaterType::HeatPump, BillingType::FlatRateElectricity, false, 400.0, 3300.0),
            row(HeaterType::Electric, BillingType::FlatRateElectricity, false, 950.0, 1100.0),
            row(HeaterType::SolarThermal, BillingType::FlatRateElectricity, false, 200.0, 5200.0),
            row(HeaterType::Electric, BillingType::FlatRateElectricity, true, 700.0, 1100.0),
            // Gas instant alternative.
            row(HeaterType::GasInstant, BillingType::FlatRateGas, false, 820.0, 1300.0),
        ])
        .unwrap()
    }

    fn gas_household() -> UserConfiguration {
        UserConfiguration {
            location: Some(Location::Melbourne),
            occupants: Some(3),
            usage_pattern: Some(UsagePattern::EvenlyDistributed),
            has_solar: Some(false),
            billing: Some(BillingType::FlatRateGas),
            heater: Some(HeaterType::GasStorage),
            control: Some(ControlType::NoControl),
        }
    }

    #[test]
    fn viable_upgrades_are_listed_with_rebates() {
        let dataset = gas_household_dataset();
        let candidates = upgrade_candidates(
            &dataset,
            &gas_household(),
            &RebateSchedule::builtin(),
            &PaybackOptions::default(),
        );

        let heat_pump = candidates
            .iter()
            .find(|c| c.system == AlternativeSystem::HeatPump)
            .expect("heat pump should be viable");
        // savings = 900 + 90 - 400 = 590; Melbourne is VIC: flat 1000 rebate.
        assert_eq!(heat_pump.payback.annual_savings, 590.0);
        assert_eq!(heat_pump.payback.rebate, 1000.0);
        assert_eq!(heat_pump.payback.adjusted_upfront, 2300.0);
    }

    #[test]
    fn non_viable_candidates_are_excluded() {
        let dataset = gas_household_dataset();
        let candidates = upgrade_candidates(
            &dataset,
            &gas_household(),
            &RebateSchedule::builtin(),
            &PaybackOptions::default(),
        );

        // Plain electric runs at 950/yr against 900 + 90 = 990, saving only
        // 40/yr; still viable. Bump its running cost and it must vanish.
        assert!(candidates.iter().any(|c| c.system == AlternativeSystem::Electric));

        let mut rows: Vec<_> = dataset.rows().to_vec();
        for r in &mut rows {
            if r.key.heater == HeaterType::Electric && !r.key.has_solar {
                r.metrics.annual_energy_cost = 1200.0;
            }
        }
        // Drop augmented twins before rebuilding; Dataset::new re-adds them.
        rows.retain(|r| !(r.key.heater.is_gas() && r.key.has_solar));
        let expensive = Dataset::new(rows).unwrap();

        let candidates = upgrade_candidates(
            &expensive,
            &gas_household(),
            &RebateSchedule::builtin(),
            &PaybackOptions::default(),
        );
        assert!(!candidates.iter().any(|c| c.system == AlternativeSystem::Electric));
    }

    #[test]
    fn missing_alternative_rows_are_skipped() {
        // Dataset without a solar-electric row: the SolarElectric rule's
        // target is absent, the rest still work.
        let dataset = Dataset::new(vec![
            row(HeaterType::GasStorage, BillingType::FlatRateGas, false, 900.0, 1600.0),
            row(HeaterType::HeatPump, BillingType::FlatRateElectricity, false, 400.0, 3300.0),
        ])
        .unwrap();

        let candidates = upgrade_candidates(
            &dataset,
            &gas_household(),
            &RebateSchedule::builtin(),
            &PaybackOptions::default(),
        );
        assert!(candidates.iter().all(|c| c.system != AlternativeSystem::SolarElectric));
        assert!(candidates.iter().any(|c| c.system == AlternativeSystem::HeatPump));
    }

    #[test]
    fn unknown_current_configuration_yields_no_candidates() {
        let dataset = gas_household_dataset();
        let mut config = gas_household();
        config.occupants = Some(5);
        assert!(
            upgrade_candidates(
                &dataset,
                &config,
                &RebateSchedule::builtin(),
                &PaybackOptions::default()
            )
            .is_empty()
        );
    }

    #[test]
    fn rule_landing_on_the_current_system_is_not_an_upgrade() {
        // Current system is already gas instant; the GasInstant rule must not
        // propose "upgrading" to itself.
        let dataset = gas_household_dataset();
        let config = UserConfiguration {
            heater: Some(HeaterType::GasInstant),
            ..gas_household()
        };
        let candidates = upgrade_candidates(
            &dataset,
            &config,
            &RebateSchedule::builtin(),
            &PaybackOptions::default(),
        );
        assert!(candidates.iter().all(|c| c.system != AlternativeSystem::GasInstant));
    }
}
