use anyhow::Result;
use clap::Args;

use xbox_signature::SaveGameId;

/**
    Print the save folder identifier for a save name.
*/
#[derive(Args)]
pub struct SaveIdCommand {
    /// Save name, as shown in the dashboard.
    pub name: String,
}

impl SaveIdCommand {
    pub fn run(self) -> Result<()> {
        println!("{}", SaveGameId::from_name(&self.name));
        Ok(())
    }
}
