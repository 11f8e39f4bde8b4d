use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum Error {
    #[error("not an iNES/NES 2.0 file: missing \"NES\\x1A\" signature")]
    InvalidSignature,

    #[error("truncated rom: expected at least {expected} bytes, found {found}")]
    Truncated { expected: usize, found: usize },

    #[error("unsupported feature: {0}")]
    UnsupportedFeature(String),
}
