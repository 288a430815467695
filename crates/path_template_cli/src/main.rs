use clap::{Parser, Subcommand};
use colored::Colorize;
use tracing::error;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use path_template_cli::commands::config_cmd::{self, ConfigArgs};
use path_template_cli::commands::template_cmd::{self, TemplateCommands};

/// Parse, match and instantiate resource-name path templates
#[derive(Parser)]
#[command(name = "path-template")]
#[command(about = "Parse, match and instantiate resource-name path templates", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(flatten)]
    Template(TemplateCommands),

    /// Resolve layered client configuration files
    Config(ConfigArgs),

    /// Show the CLI version
    Version,
}

fn main() {
    // Initialize logging
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_env("PATH_TEMPLATE_LOG"))
        .init();

    let cli = Cli::parse();
    let result = match &cli.command {
        Commands::Template(cmd) => template_cmd::execute(cmd),
        Commands::Config(args) => config_cmd::execute(args),
        Commands::Version => Ok(format!("path-template version {}", env!("CARGO_PKG_VERSION"))),
    };

    match result {
        Ok(output) => println!("{output}"),
        Err(e) => {
            error!("Command failed: {e}");
            eprintln!("{} {e}", "Error:".red().bold());
            std::process::exit(1);
        }
    }
}
