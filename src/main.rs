//! Tailwind Colors - browse Tailwind CSS palettes and copy colors
//!
//! Lists the v1, v2 and v3 palettes, converts colors between CSS notations,
//! and keeps a short history of copied colors.

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use twcolors::cli::{
    CliResult, ConfigArgs, ConvertArgs, ExitCode, HistoryArgs, NotationsArgs, PaletteArgs,
    PickArgs, VersionsArgs,
};

/// Tailwind Colors - browse Tailwind CSS palettes and copy colors
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List the families and shades of a palette
    Palette(PaletteArgs),
    /// Convert a hex color to a notation
    Convert(ConvertArgs),
    /// Copy a palette color and record it in the history
    Pick(PickArgs),
    /// Show, clear or re-copy recent picks
    History(HistoryArgs),
    /// Show or change the saved selection and preferences
    Config(ConfigArgs),
    /// List the recognized notation tags
    Notations(NotationsArgs),
    /// List the palette versions
    Versions(VersionsArgs),
}

impl Command {
    fn execute(&self) -> CliResult<()> {
        match self {
            Self::Palette(args) => args.execute(),
            Self::Convert(args) => args.execute(),
            Self::Pick(args) => args.execute(),
            Self::History(args) => args.execute(),
            Self::Config(args) => args.execute(),
            Self::Notations(args) => args.execute(),
            Self::Versions(args) => args.execute(),
        }
    }
}

fn main() -> std::process::ExitCode {
    // Usage errors exit as validation errors; --help/--version exit cleanly
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            let code = if e.use_stderr() {
                ExitCode::ValidationError
            } else {
                ExitCode::Success
            };
            return code.into();
        }
    };

    // Logs go to stderr so stdout stays machine-readable
    let filter = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match cli.command.execute() {
        Ok(()) => ExitCode::Success.into(),
        Err(e) => {
            eprintln!("Error: {e}");
            e.exit_code().into()
        }
    }
}
