//! `checkdigit`: compute and validate check digits from the command line.
mod cli;
mod cmd;
mod error;
mod format;
mod io;

use clap::Parser as _;

pub use cli::{Cli, Command, OutputFormat, PathOrStdin};
use error::CliError;
use format::FormatterConfig;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(&cli) {
        eprintln!("{}", e.message());
        std::process::exit(e.exit_code());
    }
}

/// Dispatches the parsed command line to its subcommand.
fn run(cli: &Cli) -> Result<(), CliError> {
    let config = FormatterConfig::from_flags(cli.format, cli.quiet, cli.verbose);
    let strip = cli.strip_separators;

    match &cli.command {
        Command::Compute {
            scheme,
            payloads,
            append,
        } => cmd::compute::run(*scheme, payloads, *append, strip, &config),
        Command::Validate {
            scheme,
            values,
            input,
        } => cmd::validate::run(
            *scheme,
            values,
            input.as_ref(),
            strip,
            cli.max_input_size,
            &config,
        ),
        Command::Encode { hex } => cmd::codec::encode(hex, &config),
        Command::Decode { text } => cmd::codec::decode(text, strip, &config),
        Command::Schemes => cmd::info::schemes(&config),
        Command::Version => cmd::info::version(&config),
    }
}
