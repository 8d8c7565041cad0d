//! Tier catalog — the closed set of membership tiers
//!
//! Each tier binds an integer code to an exact decimal discount multiplier.
//! The catalog is authoritative: any code it does not recognize resolves
//! to the base tier ([`Tier::DEFAULT`]) instead of failing.
//!
//! | Tier | Code | Discount |
//! |------|------|----------|
//! | LV1  | 1    | 1        |
//! | LV2  | 2    | 0.9      |
//! | LV3  | 3    | 0.8      |
//! | LV4  | 4    | 0.7      |
//! | LV5  | 5    | 0.6      |

use rust_decimal::Decimal;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Integer code identifying a tier
pub type TierCode = i32;

/// A membership tier
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, JsonSchema,
)]
#[schemars(title = "Tier", description = "Membership tier")]
pub enum Tier {
    #[serde(rename = "LV1")]
    Lv1,
    #[serde(rename = "LV2")]
    Lv2,
    #[serde(rename = "LV3")]
    Lv3,
    #[serde(rename = "LV4")]
    Lv4,
    #[serde(rename = "LV5")]
    Lv5,
}

const ALL: [Tier; 5] = [Tier::Lv1, Tier::Lv2, Tier::Lv3, Tier::Lv4, Tier::Lv5];

impl Tier {
    /// Tier returned for unrecognized codes
    pub const DEFAULT: Tier = Tier::Lv1;

    /// Total lookup: the tier for `code`, or [`Tier::DEFAULT`] on a miss
    pub fn of(code: TierCode) -> Tier {
        Self::try_from_code(code).unwrap_or(Self::DEFAULT)
    }

    /// Strict lookup, `None` when the code is not in the catalog
    pub fn try_from_code(code: TierCode) -> Option<Tier> {
        ALL.iter().copied().find(|tier| tier.code() == code)
    }

    /// All tiers in declaration order
    pub fn all() -> &'static [Tier] {
        &ALL
    }

    pub fn iter() -> impl Iterator<Item = Tier> {
        ALL.iter().copied()
    }

    pub fn code(self) -> TierCode {
        match self {
            Tier::Lv1 => 1,
            Tier::Lv2 => 2,
            Tier::Lv3 => 3,
            Tier::Lv4 => 4,
            Tier::Lv5 => 5,
        }
    }

    /// Discount multiplier in `[0, 1]`
    ///
    /// The scale of each value is kept as written (`1`, `0.9`, ...), so
    /// products carry it through: `100 * 0.6` is `60.0`.
    pub fn discount(self) -> Decimal {
        match self {
            Tier::Lv1 => Decimal::ONE,
            Tier::Lv2 => Decimal::new(9, 1),
            Tier::Lv3 => Decimal::new(8, 1),
            Tier::Lv4 => Decimal::new(7, 1),
            Tier::Lv5 => Decimal::new(6, 1),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Tier::Lv1 => "LV1",
            Tier::Lv2 => "LV2",
            Tier::Lv3 => "LV3",
            Tier::Lv4 => "LV4",
            Tier::Lv5 => "LV5",
        }
    }
}

impl Default for Tier {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_codes_round_trip() {
        for tier in Tier::iter() {
            assert_eq!(Tier::of(tier.code()), tier);
        }
    }

    #[test]
    fn test_unknown_codes_fall_back_to_lv1() {
        for code in [0, 6, 7, -1, i32::MIN, i32::MAX] {
            assert_eq!(Tier::of(code), Tier::Lv1, "code {}", code);
            assert_eq!(Tier::try_from_code(code), None);
        }
    }

    #[test]
    fn test_declaration_order() {
        let codes: Vec<_> = Tier::iter().map(Tier::code).collect();
        assert_eq!(codes, vec![1, 2, 3, 4, 5]);
        assert_eq!(Tier::all().len(), 5);
    }

    #[test]
    fn test_discount_display_keeps_scale() {
        let shown: Vec<String> = Tier::iter().map(|t| t.discount().to_string()).collect();
        assert_eq!(shown, vec!["1", "0.9", "0.8", "0.7", "0.6"]);
    }

    #[test]
    fn test_serde_names() {
        assert_eq!(serde_json::to_string(&Tier::Lv3).unwrap(), "\"LV3\"");
        let tier: Tier = serde_json::from_str("\"LV5\"").unwrap();
        assert_eq!(tier, Tier::Lv5);
        assert_eq!(Tier::default(), Tier::Lv1);
        assert_eq!(Tier::Lv4.to_string(), "LV4");
    }
}
