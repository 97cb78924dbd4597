use anyhow::Result;
use clap::Args;

use xbox_signature::TitleId;

use crate::input::InputArgs;
use crate::keys::KeyArgs;

/**
    Print the signature of a content metadata header (ContentMeta.xbx).
*/
#[derive(Args)]
pub struct ContentCommand {
    /// Title ID (8 hex digits, e.g. 4D530004).
    #[arg(long)]
    pub title_id: TitleId,

    #[command(flatten)]
    pub keys: KeyArgs,

    #[command(flatten)]
    pub input: InputArgs,
}

impl ContentCommand {
    pub fn run(self) -> Result<()> {
        let keys = self.keys.load()?;
        let console_key = keys.console_key()?;
        let data = self.input.read()?;

        let signature = xbox_signature::content_signature(self.title_id, console_key, &data);

        println!("{signature}");
        Ok(())
    }
}
