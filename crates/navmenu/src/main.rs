//! navmenu CLI - Navigation menu tree tool.
//!
//! Provides commands for:
//! - `render`: Render the tree (or one subtree) as text, tree, HTML or Markdown
//! - `find`: Look up nodes by url
//! - `breadcrumbs`: Print the ancestor chain of a url
//! - `check`: Validate a navigation source and print a summary
//! - `export`: Print the normalized JSON literal

mod commands;
mod error;
mod output;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{BreadcrumbsArgs, CheckArgs, ExportArgs, FindArgs, GlobalArgs, RenderArgs};
use output::Output;

/// navmenu - Navigation menu tree tool.
#[derive(Parser)]
#[command(name = "navmenu", version, about)]
struct Cli {
    #[command(flatten)]
    global: GlobalArgs,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render the navigation tree.
    Render(RenderArgs),
    /// Find nodes by url.
    Find(FindArgs),
    /// Print the ancestor chain of a url.
    Breadcrumbs(BreadcrumbsArgs),
    /// Validate the navigation source and print a summary.
    Check(CheckArgs),
    /// Print the tree as normalized JSON.
    Export(ExportArgs),
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    // --verbose enables INFO level, otherwise use RUST_LOG or default to WARN
    let filter = if cli.global.verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Render(args) => args.execute(&cli.global),
        Commands::Find(args) => args.execute(&cli.global),
        Commands::Breadcrumbs(args) => args.execute(&cli.global),
        Commands::Check(args) => args.execute(&cli.global),
        Commands::Export(args) => args.execute(&cli.global),
    };

    if let Err(err) = result {
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_global_args_accepted_after_subcommand() {
        let cli = Cli::try_parse_from([
            "navmenu",
            "find",
            "files.html",
            "--source",
            "html/menudata.js",
            "--verbose",
        ])
        .unwrap();

        assert!(cli.global.verbose);
        assert!(matches!(cli.command, Commands::Find(_)));
    }

    #[test]
    fn test_unknown_style_rejected() {
        let result = Cli::try_parse_from(["navmenu", "render", "--style", "pdf"]);

        assert!(result.is_err());
    }
}
