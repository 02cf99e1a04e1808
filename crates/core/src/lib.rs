//! huffpack-core: static Huffman compression with a self-describing archive
//!
//! This library provides the codec behind the `huffpack` tool:
//! - Builds a prefix-free binary code per distinct byte of the input
//! - Packs the encoded bitstream into bytes with explicit padding accounting
//! - Frames it as an archive whose text header embeds the code table needed
//!   for decompression
//!
//! # Architecture
//!
//! The system is designed around clear module boundaries:
//! - `huffman`: frequency analysis, tree construction, code assignment,
//!   bitstream decoding
//! - `bitio`: bit-string codes, MSB-first packing, padding accounting
//! - `archive`: header serialization/parsing and payload location
//! - `stats`: archive inspection for reporting
//!
//! # Design Principles
//!
//! - **No panics**: all errors are structured and recoverable
//! - **Single pass**: every operation is one synchronous transform over an
//!   in-memory buffer
//! - **Self-describing archives**: decode needs only the archive bytes; the
//!   Huffman tree itself is never persisted or reconstructed

pub mod archive;
pub mod bitio;
pub mod error;
pub mod huffman;
pub mod stats;

// Re-export commonly used types
pub use error::{Error, Result};
