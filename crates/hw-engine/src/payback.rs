//! Payback period calculation.
//!
//! Combines a current scenario row and a candidate scenario row into simple
//! and discounted payback periods. Annual savings compare the candidate's
//! energy cost against the current system's energy *and* supply cost: moving
//! off gas also drops the gas supply charge.

use hw_data::ScenarioRow;

/// Discounted payback stops accumulating after this many years.
pub const DISCOUNTED_HORIZON_YEARS: u32 = 50;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PaybackOptions {
    /// Small positive fraction, e.g. 0.02-0.06.
    pub discount_rate: f64,
    /// The existing heater is at end of life, so the baseline also has to buy
    /// a replacement and only the cost *difference* needs paying back.
    pub forced_replacement: bool,
}

impl Default for PaybackOptions {
    fn default() -> Self {
        Self {
            discount_rate: 0.04,
            forced_replacement: false,
        }
    }
}

/// Discounted payback outcome. Paying back in year 50 and never paying back
/// are different results; callers must surface them differently.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiscountedPayback {
    Within { years: u32 },
    BeyondHorizon,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PaybackResult {
    pub annual_savings: f64,
    pub rebate: f64,
    pub adjusted_upfront: f64,
    /// Simple payback in years, one decimal, never negative.
    pub simple_years: f64,
    pub discounted: DiscountedPayback,
}

/// Compute payback for replacing `current` with `candidate`, with `rebate`
/// already resolved from the jurisdiction schedule.
///
/// Returns `None` when annual savings are non-positive: the candidate is not
/// a viable upgrade and is excluded from results rather than reported with a
/// meaningless period.
pub fn compute_payback(
    current: &ScenarioRow,
    candidate: &ScenarioRow,
    rebate: f64,
    options: &PaybackOptions,
) -> Option<PaybackResult> {
    let annual_savings = current.metrics.annual_energy_cost + current.metrics.annual_supply_cost
        - candidate.metrics.annual_energy_cost;
    if annual_savings <= 0.0 {
        return None;
    }

    let adjusted_upfront = candidate.metrics.capital_cost - rebate;

    let simple_cost = if options.forced_replacement {
        adjusted_upfront - current.metrics.capital_cost
    } else {
        adjusted_upfront
    };
    let simple_years = round_one_decimal((simple_cost / annual_savings).max(0.0));

    Some(PaybackResult {
        annual_savings,
        rebate,
        adjusted_upfront,
        simple_years,
        discounted: discounted_payback(annual_savings, adjusted_upfront, options.discount_rate),
    })
}

fn discounted_payback(annual_savings: f64, target: f64, discount_rate: f64) -> DiscountedPayback {
    if target <= 0.0 {
        return DiscountedPayback::Within { years: 0 };
    }

    let mut cumulative = 0.0;
    for year in 1..=DISCOUNTED_HORIZON_YEARS {
        cumulative += annual_savings / (1.0 + discount_rate).powi(year as i32);
        if cumulative >= target {
            return DiscountedPayback::Within { years: year };
        }
    }
    DiscountedPayback::BeyondHorizon
}

fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
