use anyhow::Result;
use clap::Args;

use crate::input::InputArgs;
use crate::keys::KeyArgs;

/**
    Print the roamable signature of a gamesave file.
*/
#[derive(Args)]
pub struct RoamableCommand {
    #[command(flatten)]
    pub keys: KeyArgs,

    #[command(flatten)]
    pub input: InputArgs,
}

impl RoamableCommand {
    pub fn run(self) -> Result<()> {
        let keys = self.keys.load()?;
        let data = self.input.read()?;

        let signature = xbox_signature::roamable_signature(keys.title_signature_key()?, &data);

        println!("{signature}");
        Ok(())
    }
}
