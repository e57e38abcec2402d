use anyhow::{bail, Context, Result};
use log::debug;
use std::fs;
use std::io::{self, Read};
use std::path::Path;

/// Path that stands for standard input
pub const STDIN_PATH: &str = "-";

/// Read the two texts to compare. At most one side may be standard input.
pub fn read_pair(left: &Path, right: &Path) -> Result<(String, String)> {
    if is_stdin(left) && is_stdin(right) {
        bail!("Only one side can be read from standard input");
    }

    Ok((read_source(left)?, read_source(right)?))
}

/// Read a file, or standard input for `-`
pub fn read_source(path: &Path) -> Result<String> {
    if is_stdin(path) {
        let mut text = String::new();
        io::stdin()
            .read_to_string(&mut text)
            .context("Failed to read standard input")?;
        debug!("Read {} bytes from standard input", text.len());
        return Ok(text);
    }

    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read file {}", path.display()))?;
    debug!("Read {} bytes from {}", text.len(), path.display());

    Ok(text)
}

fn is_stdin(path: &Path) -> bool {
    path.as_os_str() == STDIN_PATH
}
