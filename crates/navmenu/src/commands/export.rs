//! `navmenu export` command implementation.

use clap::Args;
use navmenu_config::CliSettings;

use super::{GlobalArgs, load_tree};
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the export command.
#[derive(Args)]
pub(crate) struct ExportArgs {
    /// Pretty-print the JSON output.
    #[arg(short, long)]
    pretty: bool,
}

impl ExportArgs {
    pub(crate) fn execute(self, global: &GlobalArgs) -> Result<(), CliError> {
        let output = Output::new();
        let config = global.load_config(CliSettings::default())?;
        let tree = load_tree(&config)?;

        let json = tree.to_literal().to_json(self.pretty)?;
        output.data(&json)?;
        output.data("\n")?;
        output.info(&format!("Exported {} nodes", tree.len()));
        Ok(())
    }
}
