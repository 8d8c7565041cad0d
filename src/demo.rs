//! Demo driver
//!
//! Prices the configured sample (100 for codes 1, 5, 7 by default) through
//! both paths and prints each result as `enum: <code> ==> <result>`.

use crate::config::DemoConfig;
use crate::error::Result;
use crate::pricing::PricingService;
use std::io::Write;

pub fn run_demo(service: &PricingService, demo: &DemoConfig, out: &mut dyn Write) -> Result<()> {
    for &code in &demo.codes {
        let result = service.price_by_lookup(code, demo.price);
        writeln!(out, "enum: {} ==> {}", code, result)?;
    }

    for &code in &demo.codes {
        let result = service.price_by_dispatch_to(code, demo.price, out);
        writeln!(out, "enum: {} ==> {}", code, result)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_codes_print_nothing() {
        let demo = DemoConfig {
            codes: vec![],
            ..DemoConfig::default()
        };
        let mut out = Vec::new();
        run_demo(&PricingService::default(), &demo, &mut out).unwrap();
        assert!(out.is_empty());
    }
}
