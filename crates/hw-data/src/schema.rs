//! Dataset schema: the coded CSV record and its decoded form.

use serde::{Deserialize, Serialize};

use hw_core::{
    Attribute, AttributeValue, BillingType, ControlType, CoreResult, HeaterType, Location,
    UsagePattern, occupants_from_raw,
};

/// One row of the simulation results CSV, exactly as written by the external
/// pipeline. Categorical columns carry short codes; decoding rejects anything
/// outside the fixed domains.
#[derive(Debug, Clone, Deserialize)]
pub struct RawRecord {
    pub location: String,
    pub household_size: i64,
    #[serde(rename = "profile_HWD")]
    pub profile_hwd: i64,
    pub has_solar: bool,
    pub heater_type: String,
    pub control_type: String,
    pub tariff_type: String,
    pub net_present_cost: f64,
    pub capital_cost: f64,
    pub rebates: f64,
    pub annual_energy_cost: f64,
    pub annual_supply_cost: f64,
    pub annual_fit_opp_cost: f64,
    pub emissions_total: f64,
    pub annual_energy_consumption: f64,
}

impl RawRecord {
    pub fn decode(&self) -> CoreResult<ScenarioRow> {
        let key = ScenarioKey {
            location: Location::from_code(&self.location)?,
            occupants: occupants_from_raw(self.household_size)?,
            usage_pattern: UsagePattern::from_code(self.profile_hwd)?,
            has_solar: self.has_solar,
            billing: BillingType::from_code(&self.tariff_type)?,
            heater: HeaterType::from_code(&self.heater_type)?,
            control: ControlType::from_code(&self.control_type)?,
        };
        let metrics = ScenarioMetrics {
            net_present_cost: self.net_present_cost,
            capital_cost: self.capital_cost,
            rebates: self.rebates,
            annual_energy_cost: self.annual_energy_cost,
            annual_supply_cost: self.annual_supply_cost,
            annual_fit_opp_cost: self.annual_fit_opp_cost,
            emissions_total: self.emissions_total,
            annual_energy_consumption: self.annual_energy_consumption,
        };
        Ok(ScenarioRow { key, metrics })
    }
}

/// The categorical attributes identifying one scenario. The dataset is sparse
/// over these: absent combinations are technically meaningless, not missing
/// data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ScenarioKey {
    pub location: Location,
    pub occupants: u8,
    pub usage_pattern: UsagePattern,
    pub has_solar: bool,
    pub billing: BillingType,
    pub heater: HeaterType,
    pub control: ControlType,
}

impl ScenarioKey {
    pub fn value_of(&self, attribute: Attribute) -> AttributeValue {
        match attribute {
            Attribute::Location => AttributeValue::Location(self.location),
            Attribute::Occupants => AttributeValue::Occupants(self.occupants),
            Attribute::UsagePattern => AttributeValue::UsagePattern(self.usage_pattern),
            Attribute::Solar => AttributeValue::Solar(self.has_solar),
            Attribute::Billing => AttributeValue::Billing(self.billing),
            Attribute::Heater => AttributeValue::Heater(self.heater),
            Attribute::Control => AttributeValue::Control(self.control),
        }
    }
}

/// Precomputed outcome metrics for one scenario.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScenarioMetrics {
    pub net_present_cost: f64,
    pub capital_cost: f64,
    pub rebates: f64,
    pub annual_energy_cost: f64,
    pub annual_supply_cost: f64,
    pub annual_fit_opp_cost: f64,
    pub emissions_total: f64,
    pub annual_energy_consumption: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScenarioRow {
    pub key: ScenarioKey,
    pub metrics: ScenarioMetrics,
}

/// Named outcome metric, for table/summary selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Metric {
    NetPresentCost,
    UpFrontCost,
    Rebates,
    AnnualEnergyCost,
    AnnualSupplyCost,
    AnnualFitOppCost,
    EmissionsTotal,
    AnnualEnergyConsumption,
}

impl Metric {
    pub const ALL: [Metric; 8] = [
        Metric::NetPresentCost,
        Metric::UpFrontCost,
        Metric::Rebates,
        Metric::AnnualEnergyCost,
        Metric::AnnualSupplyCost,
        Metric::AnnualFitOppCost,
        Metric::EmissionsTotal,
        Metric::AnnualEnergyConsumption,
    ];

    pub fn code(self) -> &'static str {
        match self {
            Metric::NetPresentCost => "net_present_cost",
            Metric::UpFrontCost => "capital_cost",
            Metric::Rebates => "rebates",
            Metric::AnnualEnergyCost => "annual_energy_cost",
            Metric::AnnualSupplyCost => "annual_supply_cost",
            Metric::AnnualFitOppCost => "annual_fit_opp_cost",
            Metric::EmissionsTotal => "emissions_total",
            Metric::AnnualEnergyConsumption => "annual_energy_consumption",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Metric::NetPresentCost => "Net present cost ($)",
            Metric::UpFrontCost => "Up front cost ($)",
            Metric::Rebates => "Rebates ($)",
            Metric::AnnualEnergyCost => "Annual cost ($/yr)",
            Metric::AnnualSupplyCost => "Annual supply cost ($/yr)",
            Metric::AnnualFitOppCost => "Decrease in solar export revenue ($/yr)",
            Metric::EmissionsTotal => "CO2 emissions (tons/yr)",
            Metric::AnnualEnergyConsumption => "Annual energy consumption (kWh)",
        }
    }

    pub fn extract(self, metrics: &ScenarioMetrics) -> f64 {
        match self {
            Metric::NetPresentCost => metrics.net_present_cost,
            Metric::UpFrontCost => metrics.capital_cost,
            Metric::Rebates => metrics.rebates,
            Metric::AnnualEnergyCost => metrics.annual_energy_cost,
            Metric::AnnualSupplyCost => metrics.annual_supply_cost,
            Metric::AnnualFitOppCost => metrics.annual_fit_opp_cost,
            Metric::EmissionsTotal => metrics.emissions_total,
            Metric::AnnualEnergyConsumption => metrics.annual_energy_consumption,
        }
    }
}

impl std::str::FromStr for Metric {
    type Err = hw_core::CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|m| m.code().eq_ignore_ascii_case(s))
            .ok_or_else(|| hw_core::CoreError::UnknownCode {
                what: "metric",
                code: s.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(heater: &str, tariff: &str) -> RawRecord {
        RawRecord {
            location: "Sydney".to_string(),
            household_size: 3,
            profile_hwd: 1,
            has_solar: false,
            heater_type: heater.to_string(),
            control_type: "GS".to_string(),
            tariff_type: tariff.to_string(),
            net_present_cost: 9000.0,
            capital_cost: 1500.0,
            rebates: 0.0,
            annual_energy_cost: 700.0,
            annual_supply_cost: 80.0,
            annual_fit_opp_cost: 0.0,
            emissions_total: 1.2,
            annual_energy_consumption: 2400.0,
        }
    }

    #[test]
    fn decode_maps_codes_to_enums() {
        let row = raw("heat_pump", "flat").decode().unwrap();
        assert_eq!(row.key.heater, HeaterType::HeatPump);
        assert_eq!(row.key.billing, BillingType::FlatRateElectricity);
        assert_eq!(row.key.location, Location::Sydney);
        assert_eq!(row.key.occupants, 3);
    }

    #[test]
    fn decode_rejects_unknown_heater() {
        assert!(raw("hydrogen", "flat").decode().is_err());
    }

    #[test]
    fn decode_rejects_unknown_tariff() {
        assert!(raw("resistive", "prepaid").decode().is_err());
    }

    #[test]
    fn value_of_matches_fields() {
        let row = raw("resistive", "flat").decode().unwrap();
        assert_eq!(
            row.key.value_of(Attribute::Heater),
            AttributeValue::Heater(HeaterType::Electric)
        );
        assert_eq!(row.key.value_of(Attribute::Occupants), AttributeValue::Occupants(3));
        assert_eq!(row.key.value_of(Attribute::Solar), AttributeValue::Solar(false));
    }

    #[test]
    fn metric_codes_round_trip() {
        for metric in Metric::ALL {
            assert_eq!(metric.code().parse::<Metric>().unwrap(), metric);
        }
    }
}
