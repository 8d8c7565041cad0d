//! Pricing service — lookup and dispatch pricing paths
//!
//! Two ways to price a purchase for a member tier code:
//!
//! - [`PricingService::price_by_lookup`] reads the discount straight from the
//!   catalog and multiplies: `price * Tier::of(code).discount()`.
//! - [`PricingService::price_by_dispatch`] picks a routine from the
//!   [`Registry`] and applies it. Each call writes one diagnostic line.
//!
//! In the default [`DispatchMode::Multiplier`] the dispatch path returns the
//! discount multiplier itself, not the discounted price. Set
//! [`DispatchMode::DiscountedPrice`] to make both paths agree.

use crate::catalog::{Tier, TierCode};
use crate::config::{Config, DispatchMode};
use crate::error::{Error, Result};
use crate::registry::Registry;
use rust_decimal::Decimal;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::io::{self, Write};

/// Price one code through the catalog
pub fn price_by_lookup(code: TierCode, price: Decimal) -> Decimal {
    price * Tier::of(code).discount()
}

/// Most fractional digits a `Decimal` can hold
const MAX_SCALE: u32 = 28;

/// Largest price scale whose product with any discount still fits
pub const MAX_PRICE_SCALE: u32 = MAX_SCALE - 1;

const MAX_MANTISSA: u128 = (1u128 << 96) - 1;

/// Check that `price` multiplies by every tier discount without rounding
///
/// A product is exact when its scale is at most 28 and
/// its mantissa fits in 96 bits. Negative prices are rejected.
pub fn ensure_exact_price(price: Decimal) -> Result<Decimal> {
    if price.is_sign_negative() {
        return Err(Error::InvalidPrice(format!("{}: must not be negative", price)));
    }
    if price.scale() > MAX_PRICE_SCALE {
        return Err(Error::InvalidPrice(format!(
            "{}: more than {} decimal places",
            price, MAX_PRICE_SCALE
        )));
    }
    let widest = Tier::iter()
        .map(|t| t.discount().mantissa().unsigned_abs())
        .max()
        .unwrap_or(1);
    if price.mantissa().unsigned_abs() > MAX_MANTISSA / widest {
        return Err(Error::InvalidPrice(format!(
            "{}: too many significant digits",
            price
        )));
    }
    Ok(price)
}

/// Parse a price, failing instead of rounding when digits would be lost
pub fn parse_price(s: &str) -> Result<Decimal> {
    let price = Decimal::from_str_exact(s.trim())
        .map_err(|e| Error::InvalidPrice(format!("'{}': {}", s, e)))?;
    ensure_exact_price(price)
}

/// Stateless entry point holding the registry and dispatch mode
#[derive(Debug, Clone)]
pub struct PricingService {
    registry: Registry,
    mode: DispatchMode,
}

impl PricingService {
    pub fn new(config: &Config) -> Self {
        Self::with_mode(config.dispatch.mode)
    }

    pub fn with_mode(mode: DispatchMode) -> Self {
        Self {
            registry: Registry::new(),
            mode,
        }
    }

    pub fn mode(&self) -> DispatchMode {
        self.mode
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn price_by_lookup(&self, code: TierCode, price: Decimal) -> Decimal {
        if Tier::try_from_code(code).is_none() {
            tracing::debug!(code, "unknown tier code, using {}", Tier::DEFAULT);
        }
        price_by_lookup(code, price)
    }

    /// Dispatch through the registry, writing the diagnostic line to stdout
    pub fn price_by_dispatch(&self, code: TierCode, price: Decimal) -> Decimal {
        let stdout = io::stdout();
        let mut lock = stdout.lock();
        self.price_by_dispatch_to(code, price, &mut lock)
    }

    /// Dispatch through the registry, writing the diagnostic line to `out`
    pub fn price_by_dispatch_to(
        &self,
        code: TierCode,
        price: Decimal,
        out: &mut dyn Write,
    ) -> Decimal {
        let discount = self.registry.resolve(code).apply(price, out);
        match self.mode {
            DispatchMode::Multiplier => discount,
            DispatchMode::DiscountedPrice => price * discount,
        }
    }

    /// Describe how `code` prices `price` on the lookup path
    pub fn quote(&self, code: TierCode, price: Decimal) -> Quote {
        let resolved = Tier::try_from_code(code);
        let tier = resolved.unwrap_or(Tier::DEFAULT);
        Quote {
            code,
            tier,
            fallback: resolved.is_none(),
            discount: tier.discount(),
            price,
            member_price: self.price_by_lookup(code, price),
        }
    }
}

impl Default for PricingService {
    fn default() -> Self {
        Self::with_mode(DispatchMode::default())
    }
}

/// Serializable pricing result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[schemars(title = "Quote", description = "Member price for a tier code")]
pub struct Quote {
    /// Code as requested
    pub code: TierCode,
    /// Tier the code resolved to
    pub tier: Tier,
    /// True when the code was unknown and the default tier applied
    pub fallback: bool,
    #[schemars(with = "String")]
    pub discount: Decimal,
    #[schemars(with = "String")]
    pub price: Decimal,
    #[schemars(with = "String")]
    pub member_price: Decimal,
}
