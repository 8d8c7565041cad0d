//! Pricing CLI commands: demo, lookup, dispatch, tiers

use super::util::{has_flag, parse_code, parse_price, positional};
use std::io::{self, Write};
use tierprice::*;

pub fn cmd_demo(config: &Config) -> Result<()> {
    let service = PricingService::new(config);
    let stdout = io::stdout();
    let mut out = stdout.lock();
    run_demo(&service, &config.demo, &mut out)?;
    out.flush()?;
    Ok(())
}

pub fn cmd_lookup(args: &[String], config: &Config) -> Result<()> {
    let (code, price) = code_and_price(args, "Usage: tierprice lookup <code> <price> [--json]")?;
    let service = PricingService::new(config);

    if has_flag(args, "--json") {
        println!("{}", serde_json::to_string_pretty(&service.quote(code, price))?);
    } else {
        println!("{}", service.price_by_lookup(code, price));
    }
    Ok(())
}

pub fn cmd_dispatch(args: &[String], config: &Config) -> Result<()> {
    let (code, price) =
        code_and_price(args, "Usage: tierprice dispatch <code> <price> [--json]")?;
    let service = PricingService::new(config);
    let json_output = has_flag(args, "--json");

    // Keep stdout pure JSON when requested; the diagnostic line goes to stderr
    let result = if json_output {
        service.price_by_dispatch_to(code, price, &mut io::stderr())
    } else {
        service.price_by_dispatch(code, price)
    };

    if json_output {
        let output = serde_json::json!({
            "code": code,
            "tier": Tier::of(code),
            "mode": service.mode(),
            "price": price,
            "result": result,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!("{}", result);
    }
    Ok(())
}

pub fn cmd_tiers(args: &[String]) -> Result<()> {
    if has_flag(args, "--json") {
        let tiers: Vec<_> = Tier::iter()
            .map(|t| {
                serde_json::json!({
                    "tier": t,
                    "code": t.code(),
                    "discount": t.discount(),
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&tiers)?);
    } else {
        for tier in Tier::iter() {
            println!("{}  code:{}  discount:{}", tier, tier.code(), tier.discount());
        }
    }
    Ok(())
}

fn code_and_price(args: &[String], usage: &str) -> Result<(TierCode, Decimal)> {
    match positional(args).as_slice() {
        [code, price, ..] => Ok((parse_code(code)?, parse_price(price)?)),
        _ => Err(usage.into()),
    }
}
