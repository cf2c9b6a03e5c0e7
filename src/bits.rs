//! Bit-stream sanitization, validation and packing.
//!
//! Bits are packed in MSB-first order: the leftmost character of a group
//! becomes the high bit of the output byte.

use crate::errors::PackError;

/// Characters removed before validation. Anything else (tabs included)
/// reaches the validator untouched.
const STRIPPED: [char; 3] = [' ', '\n', '\r'];

/// Removes spaces and line terminators from `text`, preserving the order of
/// all remaining characters.
pub fn sanitize(text: &str) -> String {
    text.chars().filter(|c| !STRIPPED.contains(c)).collect()
}

/// Checks that every character of `bits` is '0' or '1'.
///
/// The empty string passes vacuously. On failure, reports the first
/// offending character and its zero-based position in the sanitized stream.
pub fn validate(bits: &str) -> Result<(), PackError> {
    match bits.chars().enumerate().find(|&(_, c)| c != '0' && c != '1') {
        Some((position, found)) => Err(PackError::InvalidBit { position, found }),
        None => Ok(()),
    }
}

/// Validates `bits` and packs it into bytes.
///
/// The stream is partitioned left to right into groups of at most 8
/// characters; each group folds MSB-first into one byte. A trailing group
/// of k < 8 characters parses as a k-bit value, so `"101"` yields `[5]`.
/// Validation completes before any byte is produced; an invalid stream
/// returns an error with nothing packed.
pub fn pack(bits: &str) -> Result<Vec<u8>, PackError> {
    validate(bits)?;

    Ok(bits
        .as_bytes()
        .chunks(8)
        .map(|group| group.iter().fold(0u8, |acc, &c| (acc << 1) | (c - b'0')))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sanitize_strips_spaces_and_line_terminators() {
        assert_eq!(sanitize("01 00 00 01"), "01000001");
        assert_eq!(sanitize("0100\r\n0001\n"), "01000001");
        assert_eq!(sanitize(""), "");
    }

    #[test]
    fn sanitize_keeps_everything_else() {
        // Tabs are not stripped; they must fail validation instead.
        assert_eq!(sanitize("01\t10"), "01\t10");
    }

    #[test]
    fn validate_accepts_bit_strings() {
        assert_eq!(validate("0"), Ok(()));
        assert_eq!(validate("01000001"), Ok(()));
        assert_eq!(validate(""), Ok(()));
    }

    #[test]
    fn validate_reports_first_offender() {
        assert_eq!(
            validate("012"),
            Err(PackError::InvalidBit {
                position: 2,
                found: '2'
            })
        );
        assert_eq!(
            validate("01\t10"),
            Err(PackError::InvalidBit {
                position: 2,
                found: '\t'
            })
        );
    }

    #[test]
    fn pack_full_groups() {
        assert_eq!(pack("01000001").unwrap(), vec![65]);
        assert_eq!(pack("0100000101000010").unwrap(), vec![65, 66]);
        assert_eq!(pack("11111111").unwrap(), vec![255]);
        assert_eq!(pack("00000000").unwrap(), vec![0]);
    }

    #[test]
    fn pack_trailing_group_keeps_its_own_width() {
        assert_eq!(pack("101").unwrap(), vec![5]);
        assert_eq!(pack("010000011").unwrap(), vec![65, 1]);
    }

    #[test]
    fn pack_output_length_is_ceil_of_eighths() {
        for len in 1..=32 {
            let stream = "1".repeat(len);
            assert_eq!(pack(&stream).unwrap().len(), len.div_ceil(8));
        }
    }

    #[test]
    fn pack_empty_stream_yields_no_bytes() {
        assert_eq!(pack("").unwrap(), Vec::<u8>::new());
    }

    #[test]
    fn pack_rejects_invalid_streams_whole() {
        assert!(pack("012").is_err());
        assert!(pack("01000001x").is_err());
    }
}
