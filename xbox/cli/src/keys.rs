use std::io::{BufRead, BufReader, Read};
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::Args;
use log::{debug, warn};

use xbox_signature::{ConsoleKey, TitleSignatureKey};

/**
    Key arguments shared by every signing command.

    Keys come from a key file, from inline hex, or both. Inline values win.
*/
#[derive(Args, Debug)]
pub struct KeyArgs {
    /// Key file with `name = hex` lines (`title_signature_key`, `xbox_hd_key`).
    #[arg(long, value_name = "PATH")]
    pub keys: Option<PathBuf>,

    /// Title signature key (32 hex digits) from the title's certificate.
    #[arg(long, value_name = "HEX")]
    pub title_key: Option<TitleSignatureKey>,

    /// Console key (XboxHDKey, 32 hex digits) from the EEPROM.
    #[arg(long, value_name = "HEX")]
    pub console_key: Option<ConsoleKey>,
}

impl KeyArgs {
    /**
        Resolve the key set from the key file (if any) and inline overrides.
    */
    pub fn load(&self) -> Result<KeySet> {
        let mut set = match &self.keys {
            Some(path) => {
                let file = std::fs::File::open(path)
                    .with_context(|| format!("failed to open key file {}", path.display()))?;
                KeySet::from_reader(file)
                    .with_context(|| format!("failed to parse key file {}", path.display()))?
            }
            None => KeySet::default(),
        };
        if let Some(key) = &self.title_key {
            set.title_signature_key = Some(key.clone());
        }
        if let Some(key) = &self.console_key {
            set.console_key = Some(key.clone());
        }
        Ok(set)
    }
}

/**
    Keys needed by the signing commands.
*/
#[derive(Debug, Default)]
pub struct KeySet {
    pub title_signature_key: Option<TitleSignatureKey>,
    pub console_key: Option<ConsoleKey>,
}

impl KeySet {
    /**
        Parse a key file.

        Blank lines and lines starting with `;` or `#` are ignored. Each other
        line has the form `name = hex`. Unknown names are skipped; a known name
        with a malformed value is an error.
    */
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let mut set = Self::default();
        for (index, line) in BufReader::new(reader).lines().enumerate() {
            let line = line?;
            let line = line.trim();
            if line.is_empty() || line.starts_with(';') || line.starts_with('#') {
                continue;
            }
            let Some((name, value)) = line.split_once('=') else {
                warn!("key file line {}: expected `name = hex`", index + 1);
                continue;
            };
            let name = name.trim().to_ascii_lowercase();
            match name.as_str() {
                "title_signature_key" | "title_key" => {
                    let key = TitleSignatureKey::from_hex(value)
                        .with_context(|| format!("line {}: {name}", index + 1))?;
                    set.title_signature_key = Some(key);
                }
                "xbox_hd_key" | "console_key" => {
                    let key = ConsoleKey::from_hex(value)
                        .with_context(|| format!("line {}: {name}", index + 1))?;
                    set.console_key = Some(key);
                }
                _ => debug!("key file line {}: skipping unknown key {name}", index + 1),
            }
        }
        Ok(set)
    }

    pub fn title_signature_key(&self) -> Result<&TitleSignatureKey> {
        match &self.title_signature_key {
            Some(key) => Ok(key),
            None => bail!("no title signature key: pass --title-key or a key file"),
        }
    }

    pub fn console_key(&self) -> Result<&ConsoleKey> {
        match &self.console_key {
            Some(key) => Ok(key),
            None => bail!("no console key: pass --console-key or a key file"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const KEY_FILE: &str = "\
; dumped from EEPROM
# and from default.xbe
title_signature_key = 000102030405060708090A0B0C0D0E0F

xbox_hd_key=a0a1a2a3a4a5a6a7a8a9aaabacadaeaf
eeprom_key = 00
not a key line
";

    #[test]
    fn parses_key_file() {
        let set = KeySet::from_reader(KEY_FILE.as_bytes()).unwrap();
        assert_eq!(
            set.title_signature_key().unwrap().as_bytes(),
            &core::array::from_fn::<u8, 16, _>(|i| i as u8)
        );
        assert_eq!(
            set.console_key().unwrap().as_bytes(),
            &core::array::from_fn::<u8, 16, _>(|i| 0xA0 + i as u8)
        );
    }

    #[test]
    fn aliases() {
        let set = KeySet::from_reader(
            "Title_Key = 000102030405060708090a0b0c0d0e0f\nconsole_key = a0a1a2a3a4a5a6a7a8a9aaabacadaeaf\n"
                .as_bytes(),
        )
        .unwrap();
        assert!(set.title_signature_key.is_some());
        assert!(set.console_key.is_some());
    }

    #[test]
    fn malformed_known_key() {
        let err = KeySet::from_reader("xbox_hd_key = a0a1".as_bytes()).unwrap_err();
        assert!(err.to_string().contains("line 1"));
    }

    #[test]
    fn missing_keys() {
        let set = KeySet::default();
        assert!(set.title_signature_key().is_err());
        assert!(set.console_key().is_err());
    }

    #[test]
    fn inline_overrides_nothing_loaded() {
        let args = KeyArgs {
            keys: None,
            title_key: None,
            console_key: Some(ConsoleKey::new([0x11; 16])),
        };
        let set = args.load().unwrap();
        assert!(set.title_signature_key.is_none());
        assert_eq!(set.console_key().unwrap().as_bytes(), &[0x11; 16]);
    }
}
