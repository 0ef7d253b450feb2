//! hw-engine: configuration-driven filtering and scenario comparison.
//!
//! Contains:
//! - config (the user's attribute selections)
//! - filter (cascading selector narrowing)
//! - lookup (configuration → scenario row resolution)
//! - transform (alternative-system rewrite rules)
//! - rebates (jurisdiction rebate schedule)
//! - payback (simple + discounted payback)
//! - upgrade (candidate comparison service)
//! - explore (multi-selection slicing and summaries)

pub mod config;
pub mod explore;
pub mod filter;
pub mod lookup;
pub mod payback;
pub mod rebates;
pub mod transform;
pub mod upgrade;

pub use config::UserConfiguration;
pub use explore::{MultiSelection, mean_by, select};
pub use filter::{filtered_rows, narrow, reconcile};
pub use lookup::lookup;
pub use payback::{
    DISCOUNTED_HORIZON_YEARS, DiscountedPayback, PaybackOptions, PaybackResult, compute_payback,
};
pub use rebates::{RebateEntry, RebateError, RebateRule, RebateSchedule};
pub use transform::AlternativeSystem;
pub use upgrade::{UpgradeCandidate, upgrade_candidates};
