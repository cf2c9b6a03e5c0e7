use std::io::BufRead;

use anyhow::Result;

use bitpack::bits;

/// Accumulates a bit stream from line-oriented input.
///
/// Reads lines until end-of-input, sanitizes each (spaces and line
/// terminators removed) and concatenates them in order. No validation
/// happens here; the accumulated stream is validated as a whole by the
/// packing step.
pub fn read_bit_stream<R: BufRead>(reader: R) -> Result<String> {
    let mut stream = String::new();

    for line in reader.lines() {
        let line = line?;
        stream.push_str(&bits::sanitize(&line));
    }

    log::debug!("accumulated {} bit characters from input", stream.len());

    Ok(stream)
}
