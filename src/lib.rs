// Production-quality lints
#![warn(
    clippy::todo,
    clippy::unimplemented,
    clippy::dbg_macro,
    clippy::print_stdout,
    clippy::print_stderr
)]
// Deny truly dangerous patterns
#![deny(clippy::mem_forget)]
// Allow common patterns in library code
#![allow(clippy::missing_errors_doc, clippy::missing_panics_doc)]

//! # tierprice — tiered membership pricing
//!
//! Computes a member price from a tier code in two equivalent ways:
//!
//! - **Lookup**: read the tier's discount from the [`Tier`] catalog and
//!   multiply it into the price.
//! - **Dispatch**: select a per-tier routine from a fixed [`Registry`] and
//!   apply it. Every routine writes one diagnostic line.
//!
//! Unknown codes never fail: both paths fall back to the base tier (LV1).
//! All arithmetic is exact ([`rust_decimal::Decimal`]).
//!
//! ## Quick Start
//!
//! ```rust
//! use rust_decimal::Decimal;
//! use tierprice::{PricingService, Tier};
//!
//! let service = PricingService::default();
//! let price = Decimal::from(100);
//!
//! assert_eq!(service.price_by_lookup(5, price).to_string(), "60.0");
//! assert_eq!(Tier::of(7), Tier::Lv1);
//!
//! let mut out = Vec::new();
//! let discount = service.price_by_dispatch_to(5, price, &mut out);
//! assert_eq!(discount.to_string(), "0.6");
//! assert_eq!(out, b"member level:5 ==> discount:0.6\n");
//! ```
//!
//! ## Tiers
//!
//! | Tier | Code | Discount | Dispatch line                       |
//! |------|------|----------|-------------------------------------|
//! | LV1  | 1    | 1        | `member level:1, discount:1`        |
//! | LV2  | 2    | 0.9      | `member level:2, discount:0.9`      |
//! | LV3  | 3    | 0.8      | `member level:3, discount:0.8`      |
//! | LV4  | 4    | 0.7      | `member level:4 ==> discount:0.7`   |
//! | LV5  | 5    | 0.6      | `member level:5 ==> discount:0.6`   |

pub mod catalog;
pub mod config;
pub mod demo;
pub mod error;
pub mod logging;
pub mod pricing;
pub mod registry;

// Re-exports
pub use catalog::{Tier, TierCode};
pub use config::{Config, DemoConfig, DispatchConfig, DispatchMode};
pub use demo::run_demo;
pub use error::{Error, Result};
pub use logging::init_logging;
pub use pricing::{ensure_exact_price, parse_price, price_by_lookup, PricingService, Quote};
pub use registry::{DispatchRoutine, LineStyle, Registry};
pub use rust_decimal::Decimal;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
