use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("table has {symbols} symbols but {codes} codes")]
    InvalidTable { symbols: usize, codes: usize },

    #[error("symbol {0} has no code in the table")]
    UnknownSymbol(u8),

    #[error("bit sequence \"{0}\" is not a code in the table")]
    UnknownCode(String),

    #[error("stream ended at bit {bit_length} with {pending} bits left unmatched")]
    TruncatedStream { bit_length: usize, pending: usize },

    #[error("bit length {bit_length} exceeds the {available} bits of payload")]
    BitLengthOutOfRange { bit_length: usize, available: usize },

    #[error("invalid character {0:?} in bit string")]
    InvalidBitString(char),
}
