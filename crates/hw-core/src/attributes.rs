//! Categorical attribute vocabulary for the scenario dataset.
//!
//! Every attribute has a fixed, finite domain. Each variant carries a stable
//! coded string (the dataset wire format) and a display label (what the user
//! sees). The cascade order of the interactive selectors is an explicit
//! constant here, not an emergent property of call order.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::location::Location;

/// Hot water heater type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HeaterType {
    Electric,
    HeatPump,
    PremiumHeatPump,
    SolarThermal,
    GasInstant,
    GasStorage,
}

impl HeaterType {
    pub const ALL: [HeaterType; 6] = [
        HeaterType::Electric,
        HeaterType::HeatPump,
        HeaterType::PremiumHeatPump,
        HeaterType::SolarThermal,
        HeaterType::GasInstant,
        HeaterType::GasStorage,
    ];

    pub fn code(self) -> &'static str {
        match self {
            HeaterType::Electric => "resistive",
            HeaterType::HeatPump => "heat_pump",
            HeaterType::PremiumHeatPump => "heat_pump_premium",
            HeaterType::SolarThermal => "solar_thermal",
            HeaterType::GasInstant => "gas_instant",
            HeaterType::GasStorage => "gas_storage",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            HeaterType::Electric => "Electric",
            HeaterType::HeatPump => "Heat Pump",
            HeaterType::PremiumHeatPump => "Premium Heat Pump",
            HeaterType::SolarThermal => "Solar Thermal",
            HeaterType::GasInstant => "Gas Instant",
            HeaterType::GasStorage => "Gas Storage",
        }
    }

    pub fn from_code(code: &str) -> CoreResult<Self> {
        Self::ALL
            .into_iter()
            .find(|h| h.code().eq_ignore_ascii_case(code))
            .ok_or_else(|| CoreError::UnknownCode {
                what: "heater",
                code: code.to_string(),
            })
    }

    /// Gas-fired heaters are insensitive to household solar PV; the dataset
    /// augmentation relies on this.
    pub fn is_gas(self) -> bool {
        matches!(self, HeaterType::GasInstant | HeaterType::GasStorage)
    }
}

impl fmt::Display for HeaterType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for HeaterType {
    type Err = CoreError;

    fn from_str(s: &str) -> CoreResult<Self> {
        Self::from_code(s)
    }
}

/// Heater control strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ControlType {
    NoControl,
    Overnight,
    OffDuringPeak,
    OvernightAndSunny,
    SunnyHours,
    SolarDiverter,
    OffPeakOnly,
}

impl ControlType {
    pub const ALL: [ControlType; 7] = [
        ControlType::NoControl,
        ControlType::Overnight,
        ControlType::OffDuringPeak,
        ControlType::OvernightAndSunny,
        ControlType::SunnyHours,
        ControlType::SolarDiverter,
        ControlType::OffPeakOnly,
    ];

    pub fn code(self) -> &'static str {
        match self {
            ControlType::NoControl => "GS",
            ControlType::Overnight => "CL1",
            ControlType::OffDuringPeak => "CL2",
            ControlType::OvernightAndSunny => "CL3",
            ControlType::SunnyHours => "timer_SS",
            ControlType::SolarDiverter => "diverter",
            ControlType::OffPeakOnly => "timer_OP",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ControlType::NoControl => "Run as needed (no control)",
            ControlType::Overnight => "On overnight",
            ControlType::OffDuringPeak => "Off during peak billing times",
            ControlType::OvernightAndSunny => "On overnight and sunny hours",
            ControlType::SunnyHours => "On sunny hours",
            ControlType::SolarDiverter => "Active matching to solar",
            ControlType::OffPeakOnly => "On during off-peak billing times",
        }
    }

    pub fn from_code(code: &str) -> CoreResult<Self> {
        Self::ALL
            .into_iter()
            .find(|c| c.code().eq_ignore_ascii_case(code))
            .ok_or_else(|| CoreError::UnknownCode {
                what: "control",
                code: code.to_string(),
            })
    }
}

impl fmt::Display for ControlType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ControlType {
    type Err = CoreError;

    fn from_str(s: &str) -> CoreResult<Self> {
        Self::from_code(s)
    }
}

/// Hot water billing type (tariff).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BillingType {
    FlatRateElectricity,
    TimeVaryingElectricity,
    ControlledLoadElectricity,
    FlatRateGas,
}

impl BillingType {
    pub const ALL: [BillingType; 4] = [
        BillingType::FlatRateElectricity,
        BillingType::TimeVaryingElectricity,
        BillingType::ControlledLoadElectricity,
        BillingType::FlatRateGas,
    ];

    pub fn code(self) -> &'static str {
        match self {
            BillingType::FlatRateElectricity => "flat",
            BillingType::TimeVaryingElectricity => "tou",
            BillingType::ControlledLoadElectricity => "CL",
            BillingType::FlatRateGas => "gas",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            BillingType::FlatRateElectricity => "Flat rate electricity",
            BillingType::TimeVaryingElectricity => "Time varying rate electricity",
            BillingType::ControlledLoadElectricity => "Controlled load discount electricity",
            BillingType::FlatRateGas => "Flat rate gas",
        }
    }

    pub fn from_code(code: &str) -> CoreResult<Self> {
        Self::ALL
            .into_iter()
            .find(|b| b.code().eq_ignore_ascii_case(code))
            .ok_or_else(|| CoreError::UnknownCode {
                what: "billing",
                code: code.to_string(),
            })
    }
}

impl fmt::Display for BillingType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for BillingType {
    type Err = CoreError;

    fn from_str(s: &str) -> CoreResult<Self> {
        Self::from_code(s)
    }
}

/// Hot water usage pattern across the day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UsagePattern {
    MorningAndEvening,
    MorningEveningDaytime,
    EvenlyDistributed,
    MorningDominant,
    EveningDominant,
    LateNight,
}

impl UsagePattern {
    pub const ALL: [UsagePattern; 6] = [
        UsagePattern::MorningAndEvening,
        UsagePattern::MorningEveningDaytime,
        UsagePattern::EvenlyDistributed,
        UsagePattern::MorningDominant,
        UsagePattern::EveningDominant,
        UsagePattern::LateNight,
    ];

    /// Numeric code used in the dataset.
    pub fn code(self) -> u8 {
        match self {
            UsagePattern::MorningAndEvening => 1,
            UsagePattern::MorningEveningDaytime => 2,
            UsagePattern::EvenlyDistributed => 3,
            UsagePattern::MorningDominant => 4,
            UsagePattern::EveningDominant => 5,
            UsagePattern::LateNight => 6,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            UsagePattern::MorningAndEvening => "Morning and evening only",
            UsagePattern::MorningEveningDaytime => "Morning and evening with day time",
            UsagePattern::EvenlyDistributed => "Evenly distributed",
            UsagePattern::MorningDominant => "Morning dominant",
            UsagePattern::EveningDominant => "Evening dominant",
            UsagePattern::LateNight => "Late Night",
        }
    }

    pub fn from_code(code: i64) -> CoreResult<Self> {
        Self::ALL
            .into_iter()
            .find(|p| i64::from(p.code()) == code)
            .ok_or(CoreError::UsagePatternOutOfRange { pattern: code })
    }
}

impl fmt::Display for UsagePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for UsagePattern {
    type Err = CoreError;

    fn from_str(s: &str) -> CoreResult<Self> {
        let code: i64 = s.parse().map_err(|_| CoreError::UnknownCode {
            what: "usage pattern",
            code: s.to_string(),
        })?;
        Self::from_code(code)
    }
}

/// Validate a raw household occupant count from the dataset.
pub fn occupants_from_raw(count: i64) -> CoreResult<u8> {
    if (1..=6).contains(&count) {
        Ok(count as u8)
    } else {
        Err(CoreError::OccupantsOutOfRange { count })
    }
}

/// One selectable attribute of a scenario.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Attribute {
    Location,
    Occupants,
    UsagePattern,
    Solar,
    Billing,
    Heater,
    Control,
}

impl Attribute {
    pub fn label(self) -> &'static str {
        match self {
            Attribute::Location => "Location",
            Attribute::Occupants => "Household occupants",
            Attribute::UsagePattern => "Hot water usage pattern",
            Attribute::Solar => "Solar",
            Attribute::Billing => "Hot water billing type",
            Attribute::Heater => "Heater",
            Attribute::Control => "Heater control",
        }
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl Attribute {
    pub fn code(self) -> &'static str {
        match self {
            Attribute::Location => "location",
            Attribute::Occupants => "occupants",
            Attribute::UsagePattern => "usage_pattern",
            Attribute::Solar => "solar",
            Attribute::Billing => "billing",
            Attribute::Heater => "heater",
            Attribute::Control => "control",
        }
    }
}

impl FromStr for Attribute {
    type Err = CoreError;

    fn from_str(s: &str) -> CoreResult<Self> {
        CASCADE_ORDER
            .into_iter()
            .find(|a| a.code().eq_ignore_ascii_case(s))
            .ok_or_else(|| CoreError::UnknownCode {
                what: "attribute",
                code: s.to_string(),
            })
    }
}

/// The order in which the interactive selectors are applied. Each selector
/// only offers values consistent with the selectors before it in this list.
pub const CASCADE_ORDER: [Attribute; 7] = [
    Attribute::Location,
    Attribute::Occupants,
    Attribute::UsagePattern,
    Attribute::Solar,
    Attribute::Billing,
    Attribute::Heater,
    Attribute::Control,
];

/// A concrete value for one attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AttributeValue {
    Location(Location),
    Occupants(u8),
    UsagePattern(UsagePattern),
    Solar(bool),
    Billing(BillingType),
    Heater(HeaterType),
    Control(ControlType),
}

impl AttributeValue {
    pub fn attribute(self) -> Attribute {
        match self {
            AttributeValue::Location(_) => Attribute::Location,
            AttributeValue::Occupants(_) => Attribute::Occupants,
            AttributeValue::UsagePattern(_) => Attribute::UsagePattern,
            AttributeValue::Solar(_) => Attribute::Solar,
            AttributeValue::Billing(_) => Attribute::Billing,
            AttributeValue::Heater(_) => Attribute::Heater,
            AttributeValue::Control(_) => Attribute::Control,
        }
    }
}

impl fmt::Display for AttributeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttributeValue::Location(l) => write!(f, "{l}"),
            AttributeValue::Occupants(n) => write!(f, "{n}"),
            AttributeValue::UsagePattern(p) => write!(f, "{p}"),
            AttributeValue::Solar(true) => f.write_str("Yes"),
            AttributeValue::Solar(false) => f.write_str("No"),
            AttributeValue::Billing(b) => write!(f, "{b}"),
            AttributeValue::Heater(h) => write!(f, "{h}"),
            AttributeValue::Control(c) => write!(f, "{c}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn heater_codes_are_unique() {
        let mut seen = HashSet::new();
        for heater in HeaterType::ALL {
            assert!(seen.insert(heater.code()), "duplicate code: {}", heater.code());
        }
    }

    #[test]
    fn control_codes_are_unique() {
        let mut seen = HashSet::new();
        for control in ControlType::ALL {
            assert!(
                seen.insert(control.code()),
                "duplicate code: {}",
                control.code()
            );
        }
    }

    #[test]
    fn heater_code_round_trip() {
        for heater in HeaterType::ALL {
            assert_eq!(HeaterType::from_code(heater.code()).unwrap(), heater);
        }
    }

    #[test]
    fn heater_codes_parse_case_insensitively() {
        assert_eq!(
            HeaterType::from_code("Heat_Pump").unwrap(),
            HeaterType::HeatPump
        );
    }

    #[test]
    fn unknown_heater_code_is_rejected() {
        let err = HeaterType::from_code("hydrogen").unwrap_err();
        assert!(matches!(err, CoreError::UnknownCode { what: "heater", .. }));
    }

    #[test]
    fn usage_pattern_codes_cover_one_to_six() {
        for code in 1..=6 {
            UsagePattern::from_code(code).unwrap();
        }
        assert!(UsagePattern::from_code(0).is_err());
        assert!(UsagePattern::from_code(7).is_err());
    }

    #[test]
    fn occupants_range_is_enforced() {
        assert_eq!(occupants_from_raw(3).unwrap(), 3);
        assert!(occupants_from_raw(0).is_err());
        assert!(occupants_from_raw(7).is_err());
    }

    #[test]
    fn gas_heaters_are_flagged() {
        assert!(HeaterType::GasStorage.is_gas());
        assert!(HeaterType::GasInstant.is_gas());
        assert!(!HeaterType::HeatPump.is_gas());
        assert!(!HeaterType::SolarThermal.is_gas());
    }

    #[test]
    fn cascade_order_covers_every_attribute_once() {
        let mut seen = HashSet::new();
        for attr in CASCADE_ORDER {
            assert!(seen.insert(attr), "duplicate attribute: {attr:?}");
        }
        assert_eq!(seen.len(), 7);
    }

    #[test]
    fn solar_values_display_as_yes_no() {
        assert_eq!(AttributeValue::Solar(true).to_string(), "Yes");
        assert_eq!(AttributeValue::Solar(false).to_string(), "No");
    }
}
