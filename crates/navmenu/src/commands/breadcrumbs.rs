//! `navmenu breadcrumbs` command implementation.

use clap::Args;
use navmenu_config::CliSettings;
use navmenu_tree::NavTree;

use super::{GlobalArgs, load_tree};
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the breadcrumbs command.
#[derive(Args)]
pub(crate) struct BreadcrumbsArgs {
    /// Url of the page.
    url: String,

    /// Separator placed between labels.
    #[arg(long, default_value = " > ")]
    separator: String,
}

impl BreadcrumbsArgs {
    pub(crate) fn execute(self, global: &GlobalArgs) -> Result<(), CliError> {
        let config = global.load_config(CliSettings::default())?;
        let tree = load_tree(&config)?;

        let trail = breadcrumb_trail(&tree, &self.url, &self.separator)
            .ok_or(CliError::NotFound(self.url))?;
        Output::new().data(&format!("{trail}\n"))?;
        Ok(())
    }
}

/// Labels from the top-level ancestor down to the first node with `url`.
fn breadcrumb_trail(tree: &NavTree, url: &str, separator: &str) -> Option<String> {
    let node = tree.find_by_url(url)?;
    let labels: Vec<&str> = tree
        .breadcrumbs(url)
        .into_iter()
        .chain(std::iter::once(node))
        .map(|n| n.text())
        .collect();
    Some(labels.join(separator))
}
