//! CLI command implementations.

mod breadcrumbs;
mod check;
mod export;
mod find;
mod render;

use std::path::PathBuf;

use clap::Args;
use navmenu_config::{CliSettings, Config};
use navmenu_tree::{NavTree, SourceFormat};

use crate::error::CliError;

pub(crate) use breadcrumbs::BreadcrumbsArgs;
pub(crate) use check::CheckArgs;
pub(crate) use export::ExportArgs;
pub(crate) use find::FindArgs;
pub(crate) use render::RenderArgs;

/// Arguments shared by every command.
#[derive(Args)]
pub(crate) struct GlobalArgs {
    /// Path to configuration file (default: auto-discover navmenu.toml).
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Navigation source file (overrides config).
    #[arg(short, long, global = true, env = "NAVMENU_SOURCE")]
    source: Option<PathBuf>,

    /// Source syntax: auto, json or menudata (overrides config).
    #[arg(short, long, global = true)]
    format: Option<SourceFormat>,

    /// Enable verbose output.
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

impl GlobalArgs {
    /// Load configuration, layering `settings` and the global overrides on top.
    pub(crate) fn load_config(&self, settings: CliSettings) -> Result<Config, CliError> {
        let cli_settings = CliSettings {
            source_path: self.source.clone(),
            format: self.format,
            ..settings
        };
        Ok(Config::load(self.config.as_deref(), Some(&cli_settings))?)
    }
}

/// Read and build the navigation tree named by `config`.
pub(crate) fn load_tree(config: &Config) -> Result<NavTree, CliError> {
    let path = &config.source_resolved.path;
    let src = std::fs::read_to_string(path).map_err(|source| CliError::Source {
        path: path.clone(),
        source,
    })?;

    let tree = NavTree::from_source(&src, config.source_resolved.format).map_err(|source| {
        CliError::Load {
            path: path.clone(),
            source,
        }
    })?;
    tracing::info!(path = %path.display(), nodes = tree.len(), "Loaded navigation tree");
    Ok(tree)
}

#[cfg(test)]
pub(crate) mod test_support {
    use std::path::Path;

    use navmenu_config::Config;

    /// Write `src` and a `navmenu.toml` pointing at it into `dir`, then load it.
    pub(crate) fn config_for(dir: &Path, src: &str, render: &str) -> Config {
        std::fs::write(dir.join("nav.js"), src).unwrap();
        let config_path = dir.join("navmenu.toml");
        std::fs::write(
            &config_path,
            format!("[source]\npath = \"nav.js\"\n\n[render]\n{render}\n"),
        )
        .unwrap();
        Config::load(Some(&config_path), None).unwrap()
    }

    pub(crate) const MENUDATA: &str = r#"var menudata={children:[
{text:"Main Page",url:"index.html"},
{text:"Files",url:"files.html",children:[
{text:"File List",url:"files.html"},
{text:"Globals",url:"globals.html",children:[
{text:"All",url:"globals.html",children:[
{text:"a",url:"globals.html#index_a"}]},
{text:"Variables",url:"globals_vars.html",children:[
{text:"m",url:"globals_vars.html#index_m"}]}]}]}]}
"#;
}

#[cfg(test)]
mod tests {
    use super::test_support::{MENUDATA, config_for};
    use super::*;

    #[test]
    fn test_load_tree_from_config() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_for(dir.path(), MENUDATA, "");

        let tree = load_tree(&config).unwrap();

        assert_eq!(tree.len(), 8);
        assert_eq!(tree.max_depth(), Some(3));
    }

    #[test]
    fn test_load_tree_missing_source() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = config_for(dir.path(), MENUDATA, "");
        config.source_resolved.path = dir.path().join("missing.js");

        let err = load_tree(&config).unwrap_err();

        assert!(matches!(err, CliError::Source { .. }));
        assert!(err.to_string().contains("missing.js"));
    }

    #[test]
    fn test_load_tree_reports_path_with_malformed_node() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_for(
            dir.path(),
            r#"var menudata={children:[{text:"A",url:"a.html"},{url:"b.html"}]}"#,
            "",
        );

        let err = load_tree(&config).unwrap_err();

        let msg = err.to_string();
        assert!(msg.contains("nav.js"), "got: {msg}");
        assert!(msg.contains("children[1]"), "got: {msg}");
    }
}
