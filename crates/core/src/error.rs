//! Error types for the huffpack archiver.
//!
//! All operations return structured errors rather than panicking. A failed
//! parse surfaces the specific defect to the caller; it never produces a
//! partially-populated archive descriptor.

use thiserror::Error;

/// Top-level error type for all operations in the system.
///
/// Each variant corresponds to a specific failure domain:
/// - Format: the archive header is structurally invalid
/// - Corrupt: the payload does not replay cleanly against the code table
/// - Huffman: codec construction or encoding failures
/// - EmptyInput: encode was given zero bytes
/// - I/O: file system operations
#[derive(Debug, Error)]
pub enum Error {
    /// Archive header violates the expected layout
    #[error("format error: {0}")]
    Format(#[from] FormatError),

    /// Payload bits are inconsistent with the embedded code table
    #[error("corrupt archive: {0}")]
    Corrupt(#[from] CorruptArchiveError),

    /// Huffman codec error (e.g., symbol missing from the encode table)
    #[error("huffman codec error: {0}")]
    Huffman(#[from] HuffmanError),

    /// Encoding requires at least one input byte
    #[error("empty input: nothing to encode")]
    EmptyInput,

    /// File I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Archive header structural defects.
#[derive(Debug, Error)]
pub enum FormatError {
    /// First header line is not the magic marker
    #[error("invalid magic marker: expected \"HUFFMANHEADER\", got {actual:?}")]
    InvalidMagic { actual: String },

    /// File name line is empty
    #[error("missing original file name")]
    MissingFileName,

    /// File name line is not valid UTF-8
    #[error("original file name is not valid UTF-8")]
    FileNameNotUtf8,

    /// File name would break the line-oriented header
    #[error("file name contains a newline")]
    FileNameHasNewline,

    /// Entry count line is not a decimal number
    #[error("invalid code table entry count: {text:?}")]
    InvalidEntryCount { text: String },

    /// Code table declares zero entries
    #[error("code table is empty")]
    EmptyCodeTable,

    /// Header ended before the expected field
    #[error("header truncated before {what}")]
    Truncated { what: &'static str },

    /// Table entry has an empty or non-binary code string
    #[error("code table entry {index} is malformed")]
    MalformedEntry { index: usize },
}

/// Payload defects detected while unpacking or decoding.
#[derive(Debug, Error)]
pub enum CorruptArchiveError {
    /// Payload has no padding-count byte at all
    #[error("payload is empty: missing padding-count byte")]
    MissingPayload,

    /// Padding-count byte is out of the valid 0-7 range
    #[error("padding-count byte is {count}, must be 0-7")]
    InvalidPaddingCount { count: u8 },

    /// Payload holds fewer bits than the padding count claims
    #[error("payload claims {padding} padding bits but only {available_bits} bits follow")]
    PaddingExceedsPayload { padding: u8, available_bits: usize },

    /// Bit sequence matches no code in the recovery map
    #[error("no code matches the bit sequence starting at bit {bit_position}")]
    UnmatchedCode { bit_position: usize },

    /// Stream ended in the middle of a code
    #[error("{count} leftover bits at end of payload do not form a complete code")]
    TrailingBits { count: usize },
}

/// Huffman codec errors.
#[derive(Debug, Error)]
pub enum HuffmanError {
    /// Code length exceeds the 64-bit cap
    #[error("code length {length} exceeds maximum 64")]
    CodeTooLong { length: usize },

    /// Input byte has no entry in the encode table
    #[error("symbol {symbol:#04x} missing from encode table")]
    SymbolNotInTable { symbol: u8 },
}

/// Type alias for Result with our Error type
pub type Result<T> = std::result::Result<T, Error>;
