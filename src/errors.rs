#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum PackError {
    #[error("invalid character {found:?} at position {position}: the stream must contain only zeros and ones")]
    InvalidBit { position: usize, found: char },
}
