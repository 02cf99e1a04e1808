//! Archive inspection backing the `info` command.
//!
//! Collects the observable numbers for an archive in one struct: sizes,
//! entry count, compression ratio, and the persisted code table.

use crate::archive;
use crate::bitio::{BitReader, Code};
use crate::error::Result;
use crate::huffman;

/// Everything the `info` command reports about an archive.
#[derive(Debug, Clone)]
pub struct ArchiveStats {
    /// Name recorded in the archive header
    pub file_name: String,

    /// Total archive size in bytes
    pub archive_len: usize,

    /// Header region size in bytes
    pub header_len: usize,

    /// Payload size in bytes, padding-count byte included
    pub payload_len: usize,

    /// Size of the recovered original in bytes
    pub decoded_len: usize,

    /// Number of code table entries
    pub entry_count: usize,

    code_table: Vec<(u8, Code)>,
}

impl ArchiveStats {
    /// Parse and decode `bytes`, collecting report data.
    ///
    /// Decoding is required because the archive stores no original length;
    /// the payload must be replayed to measure it.
    pub fn from_archive(bytes: &[u8]) -> Result<Self> {
        let info = archive::parse_header(bytes)?;
        let payload = &bytes[info.payload_offset..];
        let reader = BitReader::from_payload(payload)?;
        let data = huffman::decode_bits(reader, &info.recovery_map)?;

        let mut code_table: Vec<(u8, Code)> = info
            .recovery_map
            .iter()
            .map(|(&code, &symbol)| (symbol, code))
            .collect();
        code_table.sort_by_key(|&(symbol, _)| symbol);

        Ok(ArchiveStats {
            file_name: info.file_name,
            archive_len: bytes.len(),
            header_len: info.payload_offset,
            payload_len: payload.len(),
            decoded_len: data.len(),
            entry_count: code_table.len(),
            code_table,
        })
    }

    /// Compressed payload size relative to the recovered size.
    ///
    /// Returns 0.0 if the archive decodes to nothing.
    pub fn compression_ratio(&self) -> f64 {
        if self.decoded_len == 0 {
            0.0
        } else {
            self.payload_len as f64 / self.decoded_len as f64
        }
    }

    /// The persisted (symbol, code) pairs, sorted by symbol.
    pub fn code_table(&self) -> &[(u8, Code)] {
        &self.code_table
    }

    /// Print a human-readable summary to stdout.
    pub fn print_summary(&self) {
        println!("=== Archive Info ===");
        println!("Original file name: {}", self.file_name);
        println!(
            "Archive length: {} bytes (header {}, payload {})",
            self.archive_len, self.header_len, self.payload_len
        );
        println!("Original length: {} bytes", self.decoded_len);
        println!("Compression ratio: {:.1}%", self.compression_ratio() * 100.0);
        println!();
        println!("=== Code Table ({} entries) ===", self.entry_count);
        for (symbol, code) in &self.code_table {
            println!("{} = {}", symbol_label(*symbol), code);
        }
    }
}

/// Printable symbols render as themselves, everything else as hex.
fn symbol_label(symbol: u8) -> String {
    if symbol.is_ascii_graphic() || symbol == b' ' {
        (symbol as char).to_string()
    } else {
        format!("{symbol:#04x}")
    }
}
