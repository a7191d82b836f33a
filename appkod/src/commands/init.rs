use std::path::PathBuf;

use clap::Args;
use eyre::Result;

use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct InitCommand {
    /// Directory to create blueprint.yaml in
    #[arg(default_value = ".")]
    pub dir: PathBuf,
}

impl InitCommand {
    pub fn run(&self) -> Result<()> {
        let report = ops::init(&self.dir)?;
        report.render(&mut TerminalOutput::new());
        Ok(())
    }
}
