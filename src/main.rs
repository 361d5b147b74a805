//! OpenAPI From Routes - Command-line tool for generating OpenAPI paths from a route tree.
//!
//! # Usage
//!
//! ```bash
//! openapi-from-routes [OPTIONS] <TREE_FILE>
//! ```
//!
//! # Examples
//!
//! Generate YAML documentation:
//! ```bash
//! openapi-from-routes routes.yaml -o openapi.yaml
//! ```
//!
//! Generate JSON documentation with a configuration file:
//! ```bash
//! openapi-from-routes routes.json -c swagger.yaml -f json -o openapi.json
//! ```

use anyhow::Result;
use clap::Parser;
use log::info;
use openapi_from_routes::cli;

fn main() -> Result<()> {
    let args = cli::CliArgs::parse();

    // -v shows per-route merge and skip decisions
    let level = if args.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };
    env_logger::Builder::from_default_env()
        .filter_level(level)
        .init();

    info!("Generating OpenAPI paths from {}", args.tree_path.display());

    // The tree file is checked only once logging is up, so failures are reported
    cli::run(cli::parse_args_from_parsed(args)?)?;

    info!("OpenAPI document generation completed successfully");
    Ok(())
}
