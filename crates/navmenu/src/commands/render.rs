//! `navmenu render` command implementation.

use clap::Args;
use navmenu_config::{CliSettings, Config};
use navmenu_render::{RenderStyle, Renderer};
use navmenu_tree::NavTree;

use super::{GlobalArgs, load_tree};
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the render command.
#[derive(Args)]
pub(crate) struct RenderArgs {
    /// Output style: text, tree, html or markdown (overrides config).
    #[arg(long)]
    style: Option<RenderStyle>,

    /// Number of levels to render (overrides config).
    #[arg(short = 'd', long)]
    max_depth: Option<usize>,

    /// Prefix for relative links (overrides config).
    #[arg(long)]
    link_prefix: Option<String>,

    /// Render only the subtree at the first node with this url.
    #[arg(short, long)]
    url: Option<String>,
}

impl RenderArgs {
    pub(crate) fn execute(self, global: &GlobalArgs) -> Result<(), CliError> {
        let config = global.load_config(CliSettings {
            style: self.style,
            max_depth: self.max_depth,
            link_prefix: self.link_prefix,
            ..CliSettings::default()
        })?;
        let tree = load_tree(&config)?;

        let rendered = render(&tree, &config, self.url.as_deref())?;
        Output::new().data(&rendered)?;
        Ok(())
    }
}

/// Build a renderer from the `[render]` section.
fn renderer_from_config(config: &Config) -> Renderer {
    let mut renderer = Renderer::new().with_indent(config.render.indent);
    if let Some(levels) = config.render.max_depth {
        renderer = renderer.with_max_depth(levels);
    }
    if let Some(prefix) = &config.render.link_prefix {
        renderer = renderer.with_link_prefix(prefix.clone());
    }
    renderer
}

fn render(tree: &NavTree, config: &Config, url: Option<&str>) -> Result<String, CliError> {
    let renderer = renderer_from_config(config);
    let style = config.render.style;

    let rendered = match url {
        Some(url) => {
            let node = tree
                .find_by_url(url)
                .ok_or_else(|| CliError::NotFound(url.to_owned()))?;
            renderer.render_to_string(node, style)?
        }
        None => renderer.render_tree_to_string(tree, style)?,
    };
    Ok(rendered)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::commands::test_support::{MENUDATA, config_for};

    #[test]
    fn test_render_whole_tree_with_configured_style() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_for(dir.path(), MENUDATA, "style = \"text\"\nmax_depth = 2");
        let tree = load_tree(&config).unwrap();

        let out = render(&tree, &config, None).unwrap();

        assert_eq!(
            out,
            "\
Main Page (index.html)
Files (files.html)
  File List (files.html)
  Globals (globals.html)
"
        );
    }

    #[test]
    fn test_render_subtree_by_url() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_for(dir.path(), MENUDATA, "style = \"tree\"");
        let tree = load_tree(&config).unwrap();

        let out = render(&tree, &config, Some("globals.html")).unwrap();

        assert_eq!(
            out,
            "\
└── Globals (globals.html)
    ├── All (globals.html)
    │   └── a (globals.html#index_a)
    └── Variables (globals_vars.html)
        └── m (globals_vars.html#index_m)
"
        );
    }

    #[test]
    fn test_render_applies_link_prefix() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_for(
            dir.path(),
            MENUDATA,
            "style = \"markdown\"\nlink_prefix = \"https://docs.example.com/\"",
        );
        let tree = load_tree(&config).unwrap();

        let out = render(&tree, &config, Some("globals_vars.html")).unwrap();

        assert_eq!(
            out,
            "\
- [Variables](https://docs.example.com/globals_vars.html)
  - [m](https://docs.example.com/globals_vars.html#index_m)
"
        );
    }

    #[test]
    fn test_render_unknown_url() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_for(dir.path(), MENUDATA, "");
        let tree = load_tree(&config).unwrap();

        let err = render(&tree, &config, Some("nope.html")).unwrap_err();

        assert!(matches!(err, CliError::NotFound(ref url) if url == "nope.html"));
    }
}
