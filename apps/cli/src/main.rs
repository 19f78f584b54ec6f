//! # pricetag
//!
//! Prices a couple of products, applies the configured discount, exports the
//! cart in every configured format and prints two bounding boxes.
//!
//! ## Usage
//! ```bash
//! pricetag --discount 15 --out ./exports
//! RUST_LOG=pricetag_core=debug pricetag --format json
//! ```

mod args;
mod config;
mod demo;
mod error;
mod logging;

use crate::args::{CliArgs, HELP};
use crate::config::CliConfig;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = CliArgs::parse(std::env::args().skip(1))?;
    if args.help {
        println!("{HELP}");
        return Ok(());
    }

    let logging = logging::init();

    // An explicit config file must load; the default location is optional
    let mut config = match &args.config {
        Some(path) => CliConfig::load(Some(path.clone()))?,
        None => CliConfig::load_or_default(None),
    };
    args.apply_to(&mut config);
    config.validate()?;

    logging.apply_level(&config.logging.level);

    let report = demo::run(&config)?;
    for line in &report.lines {
        println!("{line}");
    }

    Ok(())
}
