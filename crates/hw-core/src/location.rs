//! Locations, jurisdictions, and the postcode lookup.
//!
//! The dataset's location attribute is a representative capital-city climate
//! zone. Postcodes map onto the capital whose range covers them; the
//! jurisdiction (state or territory) drives rebate policy.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};

/// Representative capital-city climate zone used by the simulations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Location {
    Sydney,
    Melbourne,
    Brisbane,
    Adelaide,
    Perth,
    Hobart,
    Darwin,
    Canberra,
}

impl Location {
    pub const ALL: [Location; 8] = [
        Location::Sydney,
        Location::Melbourne,
        Location::Brisbane,
        Location::Adelaide,
        Location::Perth,
        Location::Hobart,
        Location::Darwin,
        Location::Canberra,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Location::Sydney => "Sydney",
            Location::Melbourne => "Melbourne",
            Location::Brisbane => "Brisbane",
            Location::Adelaide => "Adelaide",
            Location::Perth => "Perth",
            Location::Hobart => "Hobart",
            Location::Darwin => "Darwin",
            Location::Canberra => "Canberra",
        }
    }

    pub fn from_code(code: &str) -> CoreResult<Self> {
        Self::ALL
            .into_iter()
            .find(|l| l.label().eq_ignore_ascii_case(code))
            .ok_or_else(|| CoreError::UnknownCode {
                what: "location",
                code: code.to_string(),
            })
    }

    pub fn jurisdiction(self) -> Jurisdiction {
        match self {
            Location::Sydney => Jurisdiction::Nsw,
            Location::Melbourne => Jurisdiction::Vic,
            Location::Brisbane => Jurisdiction::Qld,
            Location::Adelaide => Jurisdiction::Sa,
            Location::Perth => Jurisdiction::Wa,
            Location::Hobart => Jurisdiction::Tas,
            Location::Darwin => Jurisdiction::Nt,
            Location::Canberra => Jurisdiction::Act,
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Location {
    type Err = CoreError;

    fn from_str(s: &str) -> CoreResult<Self> {
        Self::from_code(s)
    }
}

/// State or territory, the key for rebate policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Jurisdiction {
    Act,
    Nsw,
    Nt,
    Qld,
    Sa,
    Tas,
    Vic,
    Wa,
}

impl Jurisdiction {
    pub fn code(self) -> &'static str {
        match self {
            Jurisdiction::Act => "ACT",
            Jurisdiction::Nsw => "NSW",
            Jurisdiction::Nt => "NT",
            Jurisdiction::Qld => "QLD",
            Jurisdiction::Sa => "SA",
            Jurisdiction::Tas => "TAS",
            Jurisdiction::Vic => "VIC",
            Jurisdiction::Wa => "WA",
        }
    }
}

impl fmt::Display for Jurisdiction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Coarse postcode ranges for each capital. Territory ranges sit inside the
/// NSW span, so order matters: first covering range wins.
const POSTCODE_RANGES: &[(u32, u32, Location)] = &[
    (200, 299, Location::Canberra),
    (800, 999, Location::Darwin),
    (2600, 2618, Location::Canberra),
    (2900, 2920, Location::Canberra),
    (1000, 2599, Location::Sydney),
    (2619, 2899, Location::Sydney),
    (2921, 2999, Location::Sydney),
    (3000, 3999, Location::Melbourne),
    (8000, 8999, Location::Melbourne),
    (4000, 4999, Location::Brisbane),
    (9000, 9999, Location::Brisbane),
    (5000, 5999, Location::Adelaide),
    (6000, 6999, Location::Perth),
    (7000, 7999, Location::Hobart),
];

/// Map a postcode to its representative capital, or `None` when the postcode
/// falls outside every known range.
pub fn location_for_postcode(postcode: u32) -> Option<Location> {
    POSTCODE_RANGES
        .iter()
        .find(|(lo, hi, _)| (*lo..=*hi).contains(&postcode))
        .map(|(_, _, location)| *location)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn location_labels_are_unique() {
        let mut seen = HashSet::new();
        for location in Location::ALL {
            assert!(seen.insert(location.label()));
        }
    }

    #[test]
    fn location_code_round_trip() {
        for location in Location::ALL {
            assert_eq!(Location::from_code(location.label()).unwrap(), location);
        }
        assert_eq!(Location::from_code("sydney").unwrap(), Location::Sydney);
    }

    #[test]
    fn capital_postcodes_resolve() {
        assert_eq!(location_for_postcode(2000), Some(Location::Sydney));
        assert_eq!(location_for_postcode(3000), Some(Location::Melbourne));
        assert_eq!(location_for_postcode(4000), Some(Location::Brisbane));
        assert_eq!(location_for_postcode(5000), Some(Location::Adelaide));
        assert_eq!(location_for_postcode(6000), Some(Location::Perth));
        assert_eq!(location_for_postcode(7000), Some(Location::Hobart));
        assert_eq!(location_for_postcode(810), Some(Location::Darwin));
    }

    #[test]
    fn territory_ranges_win_over_nsw() {
        assert_eq!(location_for_postcode(2601), Some(Location::Canberra));
        assert_eq!(location_for_postcode(2900), Some(Location::Canberra));
        assert_eq!(location_for_postcode(2620), Some(Location::Sydney));
    }

    #[test]
    fn unknown_postcode_is_none() {
        assert_eq!(location_for_postcode(0), None);
        assert_eq!(location_for_postcode(99999), None);
    }

    #[test]
    fn every_location_has_a_jurisdiction() {
        let jurisdictions: HashSet<_> =
            Location::ALL.iter().map(|l| l.jurisdiction()).collect();
        assert_eq!(jurisdictions.len(), Location::ALL.len());
    }
}
