use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};

/// Writes `bytes` to `path`, creating the file or truncating an existing
/// one. The handle is scoped to this function and closed on every exit
/// path; the buffer is flushed before returning so a reported success means
/// the bytes reached the file.
pub fn write_bytes(path: &Path, bytes: &[u8]) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("cannot create output file {}", path.display()))?;

    let mut writer = BufWriter::new(file);
    writer
        .write_all(bytes)
        .and_then(|_| writer.flush())
        .with_context(|| format!("failed writing to {}", path.display()))?;

    Ok(())
}
