//! CLI frontend for the April Fools prank generator.

mod commands;
mod logging;

use std::process;

use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(
    name = "af",
    about = "April Fools prank generator",
    version,
    propagate_version = true
)]
struct Cli {
    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Output format for generated pranks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// The bare message
    Text,
    /// A JSON object with name, role and message
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a prank message for a target
    Prank {
        /// Name of the target
        name: String,

        /// Role of the target (employee, developer, manager, or anything else)
        role: String,

        /// Reject unknown roles instead of using the default prank
        #[arg(long)]
        strict: bool,

        /// Output format
        #[arg(short, long, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// List the known roles
    Roles,
}

fn main() {
    let cli = Cli::parse();
    if let Err(e) = logging::init(cli.verbose) {
        eprintln!("error: {e}");
        process::exit(1);
    }

    let result = match cli.command {
        Commands::Prank {
            name,
            role,
            strict,
            format,
        } => commands::prank::run(&name, &role, strict, format),
        Commands::Roles => commands::roles::run(),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
