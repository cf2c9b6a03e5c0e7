use std::io;

use anyhow::Result;

use super::command::Cli;
use crate::input::read_bit_stream;
use crate::output::write_bytes;
use bitpack::bits;

/// Runs the whole pipeline: read stdin, validate, pack, write.
///
/// Validation failure aborts before the destination path is touched, so an
/// invalid stream never creates or truncates the output file.
pub fn cmd_pack(cli: &Cli) -> Result<()> {
    println!("enter bits, end input with Ctrl+D:");

    let stream = read_bit_stream(io::stdin().lock())?;

    if stream.is_empty() {
        log::warn!("no bits read; the output file will be empty");
    }

    let bytes = bits::pack(&stream)?;

    write_bytes(&cli.file, &bytes)?;

    log::info!(
        "packed {} bits into {} bytes, written to {}",
        stream.len(),
        bytes.len(),
        cli.file.display()
    );

    Ok(())
}
