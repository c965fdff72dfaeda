use clap::{Args as ClapArgs, Parser, Subcommand};

use crate::output::OutputFormat;

#[derive(Parser)]
#[command(
    author,
    version,
    about = "Resolve structured JSON/YAML flag values",
    long_about = "Resolves a structured flag value given inline or as a file reference.

Values:
  @path/to/file.json    JSON file (.json)
  @path/to/file.yaml    YAML file (.yaml, .yml)
  '{\"a\": 1}' or '[1]'   inline JSON
  $'---\\na: 1'          inline YAML, must start with ---

Examples:
  complexflag decode @values.yaml --output json
  complexflag inspect '[\"one\", \"two\"]'",
    subcommand_required = true
)]
pub struct Cli {
    /// Enable debug output
    #[arg(long, global = true)]
    pub debug: bool,
    /// Suppress log output
    #[arg(long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Decode a value and print it re-encoded
    Decode(DecodeArgs),
    /// Show where a value comes from, its format and its root shape
    Inspect(InspectArgs),
}

#[derive(ClapArgs)]
pub struct DecodeArgs {
    /// Inline JSON/YAML or @file
    #[arg(allow_hyphen_values = true)]
    pub value: String,
    /// Output encoding (defaults to the config file, then JSON)
    #[arg(long, value_enum)]
    pub output: Option<OutputFormat>,
    /// Print JSON on a single line
    #[arg(long)]
    pub compact: bool,
}

#[derive(ClapArgs)]
pub struct InspectArgs {
    /// Inline JSON/YAML or @file
    #[arg(allow_hyphen_values = true)]
    pub value: String,
}

pub fn parse_cli() -> Cli {
    Cli::parse()
}
