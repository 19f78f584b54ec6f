//! # Command Line Arguments
//!
//! ## Usage
//! ```bash
//! # Run with defaults (30 % off, both formats, current directory)
//! cargo run -p pricetag-cli
//!
//! # Custom discount and output directory
//! cargo run -p pricetag-cli -- --discount 15 --out ./exports
//!
//! # JSON only, explicit config file
//! cargo run -p pricetag-cli -- --config ./pricetag.toml --format json
//! ```

use std::path::PathBuf;

use pricetag_export::ExportFormat;

use crate::config::CliConfig;
use crate::error::{CliError, CliResult};

pub const HELP: &str = "\
pricetag: money, discounts and cart export demo

Usage: pricetag [OPTIONS]

Options:
  -c, --config <PATH>     Config file (default: platform config dir/pricetag.toml)
  -o, --out <DIR>         Directory for exported carts (default: .)
  -d, --discount <PCT>    Discount percentage, 0 to 100 (default: 30)
  -f, --format <FORMAT>   Export format, xml or json; repeatable (default: both)
  -h, --help              Show this help message";

/// Parsed command line. `None` means "not given on the command line".
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CliArgs {
    pub config: Option<PathBuf>,
    pub out: Option<PathBuf>,
    pub discount: Option<f64>,
    pub formats: Vec<ExportFormat>,
    pub help: bool,
}

impl CliArgs {
    /// Parses arguments, program name excluded.
    pub fn parse<I>(args: I) -> CliResult<Self>
    where
        I: IntoIterator<Item = String>,
    {
        let mut parsed = CliArgs::default();
        let mut args = args.into_iter();

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--config" | "-c" => {
                    parsed.config = Some(PathBuf::from(value_for(&arg, args.next())?));
                }
                "--out" | "-o" => {
                    parsed.out = Some(PathBuf::from(value_for(&arg, args.next())?));
                }
                "--discount" | "-d" => {
                    let raw = value_for(&arg, args.next())?;
                    let percentage = raw.parse::<f64>().map_err(|_| {
                        CliError::InvalidArgument(format!("{arg} expects a number, got '{raw}'"))
                    })?;
                    parsed.discount = Some(percentage);
                }
                "--format" | "-f" => {
                    let raw = value_for(&arg, args.next())?;
                    let format = raw
                        .parse::<ExportFormat>()
                        .map_err(|e| CliError::InvalidArgument(e.to_string()))?;
                    if !parsed.formats.contains(&format) {
                        parsed.formats.push(format);
                    }
                }
                "--help" | "-h" => parsed.help = true,
                other => {
                    return Err(CliError::InvalidArgument(format!(
                        "unrecognized option '{other}'"
                    )))
                }
            }
        }

        Ok(parsed)
    }

    /// Command line values win over everything already in `config`.
    pub fn apply_to(&self, config: &mut CliConfig) {
        if let Some(out) = &self.out {
            config.export.output_dir = out.clone();
        }
        if let Some(percentage) = self.discount {
            config.discount.percentage = percentage;
        }
        if !self.formats.is_empty() {
            config.export.formats = self.formats.clone();
        }
    }
}

fn value_for(flag: &str, value: Option<String>) -> CliResult<String> {
    value.ok_or_else(|| CliError::InvalidArgument(format!("{flag} needs a value")))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> CliResult<CliArgs> {
        CliArgs::parse(args.iter().map(|s| s.to_string()))
    }

    #[test]
    fn test_no_arguments() {
        assert_eq!(parse(&[]).unwrap(), CliArgs::default());
    }

    #[test]
    fn test_all_options() {
        let args = parse(&[
            "--config", "p.toml", "-o", "exports", "--discount", "12.5", "-f", "json", "--format",
            "xml", "--format", "json",
        ])
        .unwrap();

        assert_eq!(args.config, Some(PathBuf::from("p.toml")));
        assert_eq!(args.out, Some(PathBuf::from("exports")));
        assert_eq!(args.discount, Some(12.5));
        assert_eq!(args.formats, vec![ExportFormat::Json, ExportFormat::Xml]);
        assert!(!args.help);
    }

    #[test]
    fn test_help() {
        assert!(parse(&["-h"]).unwrap().help);
    }

    #[test]
    fn test_errors() {
        assert!(matches!(parse(&["--out"]), Err(CliError::InvalidArgument(_))));
        assert!(matches!(
            parse(&["--discount", "half"]),
            Err(CliError::InvalidArgument(msg)) if msg.contains("half")
        ));
        assert!(matches!(parse(&["--format", "csv"]), Err(CliError::InvalidArgument(_))));
        assert!(matches!(parse(&["--verbose"]), Err(CliError::InvalidArgument(_))));
    }

    #[test]
    fn test_apply_to_config() {
        let mut config = CliConfig::default();
        parse(&["--discount", "5", "--format", "json"])
            .unwrap()
            .apply_to(&mut config);

        assert_eq!(config.discount.percentage, 5.0);
        assert_eq!(config.export.formats, vec![ExportFormat::Json]);
        assert_eq!(config.export.output_dir, PathBuf::from("."));
    }
}
