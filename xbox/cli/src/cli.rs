use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};

use crate::commands::{
    ContentCommand, ContentKeyCommand, NonRoamableCommand, RoamableCommand, SaveIdCommand,
};

/**
    Gamesave and content signature tool.
*/
#[derive(Parser)]
#[command(name = "xsig", version)]
pub struct Cli {
    /// Log derivation steps (-v for debug, -vv for trace).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Roamable gamesave signature.
    Roamable(RoamableCommand),
    /// Non-roamable (console-bound) gamesave signature.
    NonRoamable(NonRoamableCommand),
    /// Content signature key for a title on one console.
    ContentKey(ContentKeyCommand),
    /// Content metadata signature.
    Content(ContentCommand),
    /// Save folder identifier for a save name.
    SaveId(SaveIdCommand),
}

impl Cli {
    pub fn verbosity(&self) -> u8 {
        self.verbose
    }

    pub fn run(self) -> Result<()> {
        match self.command {
            Command::Roamable(cmd) => cmd.run(),
            Command::NonRoamable(cmd) => cmd.run(),
            Command::ContentKey(cmd) => cmd.run(),
            Command::Content(cmd) => cmd.run(),
            Command::SaveId(cmd) => cmd.run(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn command_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_content_command() {
        let cli = Cli::try_parse_from([
            "xsig",
            "-vv",
            "content",
            "--title-id",
            "4D530004",
            "--console-key",
            "a0a1a2a3a4a5a6a7a8a9aaabacadaeaf",
            "ContentMeta.xbx",
            "--length",
            "108",
        ])
        .unwrap();
        assert_eq!(cli.verbosity(), 2);
        assert!(matches!(cli.command, Command::Content(_)));
    }

    #[test]
    fn rejects_malformed_key() {
        let res = Cli::try_parse_from(["xsig", "roamable", "--title-key", "abcd", "save.dat"]);
        assert!(res.is_err());
    }

    #[test]
    fn rejects_malformed_title_id() {
        let res = Cli::try_parse_from([
            "xsig",
            "content-key",
            "--title-id",
            "xyz",
            "--console-key",
            "a0a1a2a3a4a5a6a7a8a9aaabacadaeaf",
        ]);
        assert!(res.is_err());
    }
}
