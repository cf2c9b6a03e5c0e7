//! Conversion of text-encoded binary digits into raw bytes.
//!
//! The model is a single linear pipeline:
//!
//! 1. Sanitize input text (drop spaces and line terminators).
//! 2. Validate that every remaining character is '0' or '1'.
//! 3. Partition into groups of up to 8 characters and fold each group
//!    MSB-first into one byte.
//!
//! ```rust
//! use bitpack::bits;
//!
//! let stream = bits::sanitize("0100 0001\n0100 0010");
//! assert_eq!(bits::pack(&stream).unwrap(), vec![65, 66]);
//! ```
//!
//! A trailing group shorter than 8 characters parses at its own width:
//! `"101"` packs to a single byte with value 5.

pub mod bits;
pub mod errors;
