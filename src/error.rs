//! 错误类型定义

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid symbol '{0}' in encoded input")]
    InvalidSymbol(char),

    #[error("check symbol '{0}' outside final position")]
    CheckSymbolInData(char),

    #[error("encoded input has no data symbols")]
    EmptyInput,

    #[error("{symbols} data symbols do not decode into {dest} bytes")]
    LengthMismatch { symbols: usize, dest: usize },

    #[error("checksum mismatch: expected '{expected}', got '{got}'")]
    ChecksumMismatch { expected: char, got: char },

    #[error("identifier does not carry version 4 / variant 10 bits")]
    InvalidGuidBits,

    #[error("entropy source failure: {0}")]
    EntropySource(#[from] rand::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
