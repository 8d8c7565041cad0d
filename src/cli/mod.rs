//! CLI command implementations
//!
//! - `pricing`: demo, lookup, dispatch, tiers
//! - `config`: effective configuration and JSON schemas
//! - `util`: argument parsing helpers

pub mod config;
pub mod pricing;
pub mod util;

pub use config::{cmd_config, cmd_schema};
pub use pricing::{cmd_demo, cmd_dispatch, cmd_lookup, cmd_tiers};
