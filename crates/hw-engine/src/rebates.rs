//! Jurisdiction rebate schedule.
//!
//! Rebate policy is data, not code: a schedule is an ordered list of entries,
//! each keyed by jurisdiction with optional heater constraints, and the first
//! matching entry decides the rebate. A built-in schedule ships with the
//! crate; a YAML file with the same shape can replace it.

use std::path::Path;

use serde::{Deserialize, Serialize};

use hw_core::{HeaterType, Jurisdiction};

pub type RebateResult<T> = Result<T, RebateError>;

#[derive(thiserror::Error, Debug)]
pub enum RebateError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// How a rebate amount is computed from the candidate system's up-front cost.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum RebateRule {
    /// A fixed amount.
    Flat { amount: f64 },
    /// A share of the up-front cost, clamped between a floor and a cap.
    CostShare { share: f64, floor: f64, cap: f64 },
}

impl RebateRule {
    pub fn amount_for(self, upfront_cost: f64) -> f64 {
        match self {
            RebateRule::Flat { amount } => amount,
            RebateRule::CostShare { share, floor, cap } => {
                (share * upfront_cost).clamp(floor, cap)
            }
        }
    }
}

/// One schedule line. Absent heater constraints match any heater.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RebateEntry {
    pub jurisdiction: Jurisdiction,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub previous_heater: Option<HeaterType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub candidate_heater: Option<HeaterType>,
    pub rule: RebateRule,
}

impl RebateEntry {
    fn matches(
        &self,
        jurisdiction: Jurisdiction,
        previous: HeaterType,
        candidate: HeaterType,
    ) -> bool {
        self.jurisdiction == jurisdiction
            && self.previous_heater.is_none_or(|h| h == previous)
            && self.candidate_heater.is_none_or(|h| h == candidate)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RebateSchedule {
    pub entries: Vec<RebateEntry>,
}

impl RebateSchedule {
    /// The rebate for replacing `previous` with `candidate` in a
    /// jurisdiction. Jurisdictions (or replacements) with no entry simply
    /// rebate nothing; an unrecognized jurisdiction never fails a
    /// computation.
    pub fn rebate_for(
        &self,
        jurisdiction: Jurisdiction,
        previous: HeaterType,
        candidate: HeaterType,
        candidate_upfront_cost: f64,
    ) -> f64 {
        self.entries
            .iter()
            .find(|entry| entry.matches(jurisdiction, previous, candidate))
            .map(|entry| entry.rule.amount_for(candidate_upfront_cost))
            .unwrap_or(0.0)
    }

    pub fn load_yaml(path: &Path) -> RebateResult<Self> {
        let content = std::fs::read_to_string(path)?;
        let schedule = serde_yaml::from_str(&content)?;
        Ok(schedule)
    }

    /// The schedule current at the time of writing. Policy changes land here
    /// or in an override file, never in the calculator.
    pub fn builtin() -> Self {
        use HeaterType::*;
        use Jurisdiction::*;

        let heat_pump_flat = |jurisdiction, amount| RebateEntry {
            jurisdiction,
            previous_heater: None,
            candidate_heater: Some(HeatPump),
            rule: RebateRule::Flat { amount },
        };

        Self {
            entries: vec![
                // ACT rebates half the up-front cost of efficient electric
                // replacements, bounded below and above.
                RebateEntry {
                    jurisdiction: Act,
                    previous_heater: None,
                    candidate_heater: Some(HeatPump),
                    rule: RebateRule::CostShare {
                        share: 0.5,
                        floor: 500.0,
                        cap: 2500.0,
                    },
                },
                heat_pump_flat(Vic, 1000.0),
                RebateEntry {
                    jurisdiction: Vic,
                    previous_heater: None,
                    candidate_heater: Some(SolarThermal),
                    rule: RebateRule::Flat { amount: 1000.0 },
                },
                heat_pump_flat(Nsw, 800.0),
                heat_pump_flat(Sa, 600.0),
                // QLD only rebates retiring a gas heater.
                RebateEntry {
                    jurisdiction: Qld,
                    previous_heater: Some(GasStorage),
                    candidate_heater: Some(HeatPump),
                    rule: RebateRule::Flat { amount: 550.0 },
                },
            ],
        }
    }
}
