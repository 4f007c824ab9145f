//! `navmenu find` command implementation.

use std::fmt::Write;

use clap::Args;
use navmenu_config::CliSettings;
use navmenu_tree::{NavTree, NodeRef};

use super::{GlobalArgs, load_tree};
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the find command.
#[derive(Args)]
pub(crate) struct FindArgs {
    /// Url to look up, including any `#fragment`.
    url: String,

    /// Print every node with the url, not only the first.
    #[arg(short, long)]
    all: bool,
}

impl FindArgs {
    pub(crate) fn execute(self, global: &GlobalArgs) -> Result<(), CliError> {
        let config = global.load_config(CliSettings::default())?;
        let tree = load_tree(&config)?;

        let matches = find(&tree, &self.url, self.all);
        if matches.is_empty() {
            return Err(CliError::NotFound(self.url));
        }
        Output::new().data(&format_matches(&matches))?;
        Ok(())
    }
}

fn find<'a>(tree: &'a NavTree, url: &str, all: bool) -> Vec<NodeRef<'a>> {
    if all {
        tree.find_all_by_url(url)
    } else {
        tree.find_by_url(url).into_iter().collect()
    }
}

/// One tab-separated `depth text url` line per node.
fn format_matches(nodes: &[NodeRef<'_>]) -> String {
    let mut out = String::new();
    for node in nodes {
        let _ = writeln!(out, "{}\t{}\t{}", node.depth(), node.text(), node.url());
    }
    out
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::commands::test_support::MENUDATA;

    fn tree() -> NavTree {
        NavTree::from_source(MENUDATA, navmenu_tree::SourceFormat::Auto).unwrap()
    }

    #[test]
    fn test_find_first_match_only() {
        let tree = tree();

        let out = format_matches(&find(&tree, "globals.html", false));

        assert_eq!(out, "1\tGlobals\tglobals.html\n");
    }

    #[test]
    fn test_find_all_matches_in_pre_order() {
        let tree = tree();

        let out = format_matches(&find(&tree, "globals.html", true));

        assert_eq!(out, "1\tGlobals\tglobals.html\n2\tAll\tglobals.html\n");
    }

    #[test]
    fn test_find_fragment_is_part_of_url() {
        let tree = tree();

        assert!(find(&tree, "globals.html#index_b", true).is_empty());
        assert_eq!(find(&tree, "globals.html#index_a", false).len(), 1);
    }
}
