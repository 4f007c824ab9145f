//! `navmenu check` command implementation.

use std::fmt::Write;

use clap::Args;
use navmenu_config::CliSettings;
use navmenu_tree::NavTree;

use super::{GlobalArgs, load_tree};
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the check command.
#[derive(Args)]
pub(crate) struct CheckArgs {
    /// List every url shared by more than one node.
    #[arg(long)]
    shared: bool,
}

impl CheckArgs {
    pub(crate) fn execute(self, global: &GlobalArgs) -> Result<(), CliError> {
        let output = Output::new();
        let config = global.load_config(CliSettings::default())?;

        output.highlight(&format!(
            "Checking {}",
            config.source_resolved.path.display()
        ));
        let tree = load_tree(&config)?;

        output.data(&summary(&tree, self.shared))?;
        output.success("Navigation tree is valid");
        Ok(())
    }
}

/// Node count, depth and url sharing statistics.
fn summary(tree: &NavTree, list_shared: bool) -> String {
    let shared = tree.shared_urls();
    let top_level = tree.roots().len();
    let max_depth = tree
        .max_depth()
        .map_or_else(|| "-".to_owned(), |depth| depth.to_string());

    let mut out = String::new();
    let _ = writeln!(out, "nodes: {}", tree.len());
    let _ = writeln!(out, "top-level: {top_level}");
    let _ = writeln!(out, "max depth: {max_depth}");
    let _ = writeln!(out, "shared urls: {}", shared.len());
    if list_shared {
        for (url, count) in shared {
            let _ = writeln!(out, "  {url} ({count})");
        }
    }
    out
}
