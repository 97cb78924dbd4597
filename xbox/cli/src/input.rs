use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::Args;

/**
    File to sign, optionally restricted to a byte range.
*/
#[derive(Args, Debug)]
pub struct InputArgs {
    /// File containing the data to sign.
    pub path: PathBuf,

    /// First byte to include.
    #[arg(long, default_value_t = 0)]
    pub offset: usize,

    /// Number of bytes to include (default: to end of file).
    #[arg(long)]
    pub length: Option<usize>,
}

impl InputArgs {
    pub fn read(&self) -> Result<Vec<u8>> {
        let data = std::fs::read(&self.path)
            .with_context(|| format!("failed to read {}", self.path.display()))?;
        let range = select_range(&data, self.offset, self.length)?;
        Ok(range.to_vec())
    }
}

/**
    Slice `data[offset..offset + length]`, or to the end when `length` is `None`.
*/
fn select_range(data: &[u8], offset: usize, length: Option<usize>) -> Result<&[u8]> {
    let end = match length {
        Some(length) => offset.checked_add(length),
        None => Some(data.len()),
    };
    match end {
        Some(end) if offset <= end && end <= data.len() => Ok(&data[offset..end]),
        _ => bail!(
            "range offset={offset} length={} is outside the {}-byte input",
            length.map_or_else(|| "-".to_owned(), |l| l.to_string()),
            data.len()
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whole_input() {
        assert_eq!(select_range(b"abcdef", 0, None).unwrap(), b"abcdef");
    }

    #[test]
    fn sub_range() {
        assert_eq!(select_range(b"abcdef", 2, Some(3)).unwrap(), b"cde");
        assert_eq!(select_range(b"abcdef", 4, None).unwrap(), b"ef");
        assert_eq!(select_range(b"abcdef", 6, Some(0)).unwrap(), b"");
    }

    #[test]
    fn out_of_range() {
        assert!(select_range(b"abcdef", 7, None).is_err());
        assert!(select_range(b"abcdef", 2, Some(5)).is_err());
        assert!(select_range(b"abcdef", usize::MAX, Some(2)).is_err());
    }
}
