use thiserror::Error;

/// Fatal index-file decoding failures.
///
/// A file that cannot be opened is not one of these: the loaders resolve
/// that case to an empty mapping, since queries already tolerate empty
/// mappings. Anything below means the file exists but its contents cannot
/// be decoded safely, and the load as a whole must fail.
#[derive(Debug, Error)]
pub enum FormatError {
    #[error("i/o error while decoding index file: {0}")]
    Io(#[from] std::io::Error),

    #[error("postings file is {0} bytes, too short to hold its trailing record count")]
    TrailerTooShort(u64),

    #[error("dictionary record {record} has negative text length {len}")]
    NegativeLength { record: u32, len: i16 },

    #[error("record {record} text is not valid utf-8")]
    InvalidText { record: u32 },

    #[error("record {record} declares {needed} bytes but only {remaining} remain in the file")]
    Truncated { record: u32, needed: u64, remaining: u64 },
}

pub type Result<T> = std::result::Result<T, FormatError>;
