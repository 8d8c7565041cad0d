//! tierprice CLI - Command-line interface
//!
//! Commands:
//!   demo      - Price the sample through both paths (default)
//!   lookup    - Member price via the tier catalog
//!   dispatch  - Member price via the routine registry
//!   tiers     - List the tier catalog
//!   schema    - Print JSON schema for an output type
//!   config    - Print the effective configuration

mod cli;

use std::path::Path;
use std::process::ExitCode;
use tierprice::*;

fn main() -> ExitCode {
    if let Err(e) = init_logging(logging::DEFAULT_FILTER) {
        eprintln!("Warning: {}", e);
    }

    let args: Vec<String> = std::env::args().skip(1).collect();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(1)
        }
    }
}

fn run(args: &[String]) -> Result<()> {
    let (config_path, args) = cli::util::split_config_arg(args)?;
    let command = args.first().map(String::as_str).unwrap_or("demo");
    let rest = args.get(1..).unwrap_or(&[]);

    match command {
        "version" | "--version" | "-v" => {
            println!("tierprice {}", VERSION);
            return Ok(());
        }
        "help" | "--help" | "-h" => {
            print_usage();
            return Ok(());
        }
        "tiers" => return cli::cmd_tiers(rest),
        "schema" => return cli::cmd_schema(rest),
        _ => {}
    }

    let cwd = std::env::current_dir().unwrap_or_else(|_| Path::new(".").to_path_buf());
    let config = cli::util::load_config(config_path.as_deref(), &cwd)?;
    tracing::debug!(mode = ?config.dispatch.mode, "configuration loaded");

    match command {
        "demo" => cli::cmd_demo(&config),
        "lookup" => cli::cmd_lookup(rest, &config),
        "dispatch" => cli::cmd_dispatch(rest, &config),
        "config" => cli::cmd_config(&config),
        cmd => {
            eprintln!("Unknown command: {}", cmd);
            print_usage();
            Err("Unknown command".into())
        }
    }
}

fn print_usage() {
    println!(
        r#"
tierprice - Tiered membership pricing

USAGE:
    tierprice [--config <file>] <COMMAND> [OPTIONS]

COMMANDS:
    demo                            Price 100 for codes 1, 5, 7 through both paths (default)
    lookup <code> <price>           Member price via the tier catalog
    dispatch <code> <price>         Member price via the routine registry
    tiers                           List the tier catalog
    schema [config|quote|tier]      Print JSON schema for output type
    config                          Print the effective configuration
    version                         Print version

OPTIONS:
    --config <file>                 Configuration file (default: ./.tierprice.yaml if present)
    --json                          JSON output format (lookup, dispatch, tiers)

EXAMPLES:
    tierprice
    tierprice lookup 5 100
    tierprice dispatch 4 250.00 --json
    tierprice --config pricing.yaml demo
"#
    );
}
