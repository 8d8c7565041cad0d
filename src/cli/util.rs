//! CLI utility helpers

use std::path::{Path, PathBuf};
use tierprice::{Config, Error, Result, TierCode};

pub use tierprice::parse_price;

/// Split the global `--config <file>` flag from the remaining arguments
pub fn split_config_arg(args: &[String]) -> Result<(Option<PathBuf>, Vec<String>)> {
    let mut path = None;
    let mut rest = Vec::with_capacity(args.len());
    let mut iter = args.iter();

    while let Some(arg) = iter.next() {
        if arg == "--config" || arg == "-c" {
            let value = iter
                .next()
                .ok_or_else(|| Error::Config("--config requires a file path".into()))?;
            path = Some(PathBuf::from(value));
        } else {
            rest.push(arg.clone());
        }
    }

    Ok((path, rest))
}

/// Explicit file if given, else `.tierprice.yaml` in `dir`, else defaults
pub fn load_config(path: Option<&Path>, dir: &Path) -> Result<Config> {
    match path {
        Some(p) => Config::load(p),
        None => Ok(Config::load_from_dir(dir)?.unwrap_or_default()),
    }
}

pub fn has_flag(args: &[String], flag: &str) -> bool {
    args.iter().any(|a| a == flag)
}

/// Arguments that are not flags, in order
pub fn positional(args: &[String]) -> Vec<&str> {
    args.iter()
        .filter(|a| !a.starts_with("--"))
        .map(String::as_str)
        .collect()
}

pub fn parse_code(s: &str) -> Result<TierCode> {
    s.trim()
        .parse::<TierCode>()
        .map_err(|e| Error::InvalidCode(format!("'{}': {}", s, e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tierprice::Decimal;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_split_config_arg() {
        let (path, rest) =
            split_config_arg(&args(&["lookup", "--config", "x.yaml", "5", "100"])).unwrap();
        assert_eq!(path, Some(PathBuf::from("x.yaml")));
        assert_eq!(rest, args(&["lookup", "5", "100"]));
    }

    #[test]
    fn test_split_config_arg_missing_value() {
        assert!(split_config_arg(&args(&["demo", "--config"])).is_err());
    }

    #[test]
    fn test_parse_numbers() {
        assert_eq!(parse_code(" 7 ").unwrap(), 7);
        assert!(parse_code("seven").is_err());
        assert_eq!(parse_price("12.50").unwrap(), Decimal::new(1250, 2));
        assert!(parse_price("-1").is_err());
        assert!(parse_price("1e").is_err());
    }

    #[test]
    fn test_parse_price_rejects_lossy_input() {
        // Would round to 20 on a plain parse
        let err = parse_price("19.999999999999999999999999999999").unwrap_err();
        assert!(matches!(err, Error::InvalidPrice(_)), "{}", err);
        // Parses exactly, but the LV2 product would need 29 places
        assert!(parse_price("0.0000000000000000000000000001").is_err());
        assert!(parse_price("0.000000000000000000000000001").is_ok());
    }

    #[test]
    fn test_positional_skips_flags() {
        let list = args(&["5", "--json", "100"]);
        assert_eq!(positional(&list), vec!["5", "100"]);
        assert!(has_flag(&list, "--json"));
    }
}
