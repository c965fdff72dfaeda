//! Entry point for the command-line interface.
//! Parses arguments, installs logging and dispatches to the subcommands.

use complexflag_cli::args::{parse_cli, Commands};
use complexflag_cli::config::load_config;
use complexflag_cli::{init_logging, run_decode, run_inspect};

fn main() -> anyhow::Result<()> {
    let cli = parse_cli();
    init_logging(cli.debug, cli.quiet);
    match cli.command {
        Commands::Decode(args) => run_decode(args, &load_config()?),
        Commands::Inspect(args) => run_inspect(args),
    }
}
