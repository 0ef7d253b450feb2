//! The user's in-progress or completed set of attribute selections.

use serde::{Deserialize, Serialize};

use hw_core::{
    Attribute, AttributeValue, BillingType, ControlType, HeaterType, Location, UsagePattern,
};
use hw_data::ScenarioKey;

/// One optional value per categorical attribute; `None` means the question
/// has not been answered yet. Only a fully-specified configuration resolves
/// to a scenario row.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserConfiguration {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub occupants: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub usage_pattern: Option<UsagePattern>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub has_solar: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub billing: Option<BillingType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub heater: Option<HeaterType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub control: Option<ControlType>,
}

impl UserConfiguration {
    pub fn get(&self, attribute: Attribute) -> Option<AttributeValue> {
        match attribute {
            Attribute::Location => self.location.map(AttributeValue::Location),
            Attribute::Occupants => self.occupants.map(AttributeValue::Occupants),
            Attribute::UsagePattern => self.usage_pattern.map(AttributeValue::UsagePattern),
            Attribute::Solar => self.has_solar.map(AttributeValue::Solar),
            Attribute::Billing => self.billing.map(AttributeValue::Billing),
            Attribute::Heater => self.heater.map(AttributeValue::Heater),
            Attribute::Control => self.control.map(AttributeValue::Control),
        }
    }

    pub fn set(&mut self, value: AttributeValue) {
        match value {
            AttributeValue::Location(l) => self.location = Some(l),
            AttributeValue::Occupants(n) => self.occupants = Some(n),
            AttributeValue::UsagePattern(p) => self.usage_pattern = Some(p),
            AttributeValue::Solar(s) => self.has_solar = Some(s),
            AttributeValue::Billing(b) => self.billing = Some(b),
            AttributeValue::Heater(h) => self.heater = Some(h),
            AttributeValue::Control(c) => self.control = Some(c),
        }
    }

    pub fn clear(&mut self, attribute: Attribute) {
        match attribute {
            Attribute::Location => self.location = None,
            Attribute::Occupants => self.occupants = None,
            Attribute::UsagePattern => self.usage_pattern = None,
            Attribute::Solar => self.has_solar = None,
            Attribute::Billing => self.billing = None,
            Attribute::Heater => self.heater = None,
            Attribute::Control => self.control = None,
        }
    }

    /// Every question answered.
    pub fn is_complete(&self) -> bool {
        self.location.is_some()
            && self.occupants.is_some()
            && self.usage_pattern.is_some()
            && self.has_solar.is_some()
            && self.billing.is_some()
            && self.heater.is_some()
            && self.control.is_some()
    }

    /// True when every *answered* attribute equals the key's value. Unset
    /// attributes do not constrain.
    pub fn matches(&self, key: &ScenarioKey) -> bool {
        hw_core::CASCADE_ORDER.into_iter().all(|attribute| {
            self.get(attribute)
                .is_none_or(|value| key.value_of(attribute) == value)
        })
    }

    /// The configuration that selects exactly this scenario.
    pub fn from_key(key: &ScenarioKey) -> Self {
        Self {
            location: Some(key.location),
            occupants: Some(key.occupants),
            usage_pattern: Some(key.usage_pattern),
            has_solar: Some(key.has_solar),
            billing: Some(key.billing),
            heater: Some(key.heater),
            control: Some(key.control),
        }
    }
}
