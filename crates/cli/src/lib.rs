//! Command-line front-end for `complexflag`.
use anyhow::Context;
use complexflag::{decode_generic, LocalFs, Resolver, Source};
use tracing::{debug, level_filters::LevelFilter};

pub mod args;
pub mod config;
pub mod output;

use args::{DecodeArgs, InspectArgs};
use config::Config;

/// Installs the stderr subscriber. `quiet` wins over `debug`.
pub fn init_logging(debug: bool, quiet: bool) {
    let level = if quiet {
        LevelFilter::OFF
    } else if debug {
        LevelFilter::DEBUG
    } else {
        LevelFilter::INFO
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
    if debug && !quiet {
        debug!("Debug mode enabled");
    }
}

/// Decodes the value and prints it in the requested encoding.
pub fn run_decode(args: DecodeArgs, config: &Config) -> anyhow::Result<()> {
    let value = Resolver::new(LocalFs)
        .unmarshal(&args.value)
        .context("failed to resolve flag value")?;
    let fmt = args.output.unwrap_or(config.output.format);
    let pretty = config.output.pretty && !args.compact;
    debug!(shape = value.shape(), output = ?fmt, pretty, "Rendering value");
    println!("{}", output::render(&value, fmt, pretty)?);
    Ok(())
}

/// Prints source, format and root shape of the value.
pub fn run_inspect(args: InspectArgs) -> anyhow::Result<()> {
    let classified = Resolver::new(LocalFs)
        .classify(&args.value)
        .context("failed to classify flag value")?;
    let value = decode_generic(&classified.content, classified.format)
        .context("failed to decode flag value")?;
    match &classified.source {
        Source::File(path) => println!("source: file {}", path.display()),
        Source::Inline => println!("source: inline"),
    }
    println!("format: {}", classified.format);
    println!("shape: {}", value.shape());
    Ok(())
}
