use anyhow::Result;
use clap::Args;

use xbox_signature::TitleId;

use crate::keys::KeyArgs;

/**
    Print the content signature key for a title on one console.
*/
#[derive(Args)]
pub struct ContentKeyCommand {
    /// Title ID (8 hex digits, e.g. 4D530004).
    #[arg(long)]
    pub title_id: TitleId,

    #[command(flatten)]
    pub keys: KeyArgs,
}

impl ContentKeyCommand {
    pub fn run(self) -> Result<()> {
        let keys = self.keys.load()?;

        let key = xbox_signature::content_signature_key(self.title_id, keys.console_key()?);

        println!("{key}");
        Ok(())
    }
}
