//! Alternative-system rewrite rules.
//!
//! Each rule rewrites a configuration into the "what if I switched to X"
//! variant, fixing up control and billing so the result is a combination the
//! dataset can actually answer. Gas billing cannot drive an electric heater,
//! and diverter control is only modelled for plain electric heaters.

use std::fmt;

use hw_core::{BillingType, ControlType, HeaterType};

use crate::config::UserConfiguration;

/// The candidate systems a current configuration can be compared against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AlternativeSystem {
    HeatPump,
    SolarElectric,
    Electric,
    SolarThermal,
    GasInstant,
}

impl AlternativeSystem {
    pub const ALL: [AlternativeSystem; 5] = [
        AlternativeSystem::HeatPump,
        AlternativeSystem::SolarElectric,
        AlternativeSystem::Electric,
        AlternativeSystem::SolarThermal,
        AlternativeSystem::GasInstant,
    ];

    pub fn label(self) -> &'static str {
        match self {
            AlternativeSystem::HeatPump => "Heat pump",
            AlternativeSystem::SolarElectric => "Add solar electric (PV)",
            AlternativeSystem::Electric => "Electric",
            AlternativeSystem::SolarThermal => "Solar thermal",
            AlternativeSystem::GasInstant => "Gas instant",
        }
    }

    /// Apply the rewrite. Total and deterministic; the input is unchanged.
    pub fn apply(self, config: &UserConfiguration) -> UserConfiguration {
        let mut out = *config;
        match self {
            AlternativeSystem::HeatPump => {
                out.heater = Some(HeaterType::HeatPump);
                if out.billing == Some(BillingType::FlatRateGas) {
                    out.billing = Some(BillingType::FlatRateElectricity);
                    out.control = Some(ControlType::NoControl);
                }
                if out.control == Some(ControlType::SolarDiverter) {
                    out.control = Some(ControlType::SunnyHours);
                }
            }
            AlternativeSystem::SolarElectric => {
                out.has_solar = Some(true);
                if out.billing == Some(BillingType::FlatRateGas) {
                    out.heater = Some(HeaterType::Electric);
                    out.billing = Some(BillingType::FlatRateElectricity);
                    out.control = Some(ControlType::NoControl);
                }
            }
            AlternativeSystem::Electric => {
                out.heater = Some(HeaterType::Electric);
                if out.billing == Some(BillingType::FlatRateGas) {
                    out.billing = Some(BillingType::FlatRateElectricity);
                    out.control = Some(ControlType::NoControl);
                }
            }
            AlternativeSystem::SolarThermal => {
                out.heater = Some(HeaterType::SolarThermal);
                out.billing = Some(BillingType::FlatRateElectricity);
                out.control = Some(ControlType::NoControl);
            }
            AlternativeSystem::GasInstant => {
                out.heater = Some(HeaterType::GasInstant);
                out.billing = Some(BillingType::FlatRateGas);
                out.control = Some(ControlType::NoControl);
            }
        }
        out
    }
}

impl fmt::Display for AlternativeSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
