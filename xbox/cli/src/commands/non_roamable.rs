use anyhow::Result;
use clap::Args;

use crate::input::InputArgs;
use crate::keys::KeyArgs;

/**
    Print the non-roamable signature of a gamesave file.
*/
#[derive(Args)]
pub struct NonRoamableCommand {
    #[command(flatten)]
    pub keys: KeyArgs,

    #[command(flatten)]
    pub input: InputArgs,
}

impl NonRoamableCommand {
    pub fn run(self) -> Result<()> {
        let keys = self.keys.load()?;
        let title_signature_key = keys.title_signature_key()?;
        let console_key = keys.console_key()?;
        let data = self.input.read()?;

        let signature =
            xbox_signature::non_roamable_signature(title_signature_key, console_key, &data);

        println!("{signature}");
        Ok(())
    }
}
