//! `.huff` archive framing: text header followed by the binary payload.
//!
//! # Archive Layout
//!
//! ```text
//! +----------------------------+
//! | "HUFFMANHEADER" \n         |  magic marker
//! +----------------------------+
//! | original file name \n      |  non-empty
//! +----------------------------+
//! | entry count N \n           |  decimal, N >= 1
//! +----------------------------+
//! | N entries:                 |  <symbol byte><code bits> \n
//! |   (newline symbol opens an |
//! |    empty line; its code is |
//! |    on the following line)  |
//! +----------------------------+
//! | payload                    |  padding-count byte + packed bitstream
//! +----------------------------+
//! ```
//!
//! The header is byte-exact: symbol bytes are written raw and never decoded
//! as characters, so values >= 0x80 survive. The payload offset is taken
//! from the raw-byte cursor position after the final entry line, never from
//! decoded-character counts.

use crate::bitio::{BitReader, Code};
use crate::error::{FormatError, Result};
use crate::huffman::{self, CodeMap, RecoveryMap};

/// Magic marker opening every archive header.
pub const MAGIC: &[u8] = b"HUFFMANHEADER";

/// Parsed archive header plus the computed payload offset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveInfo {
    /// Name recorded when the archive was written
    pub file_name: String,

    /// code -> symbol table for decoding
    pub recovery_map: RecoveryMap,

    /// Byte offset where the payload starts
    pub payload_offset: usize,
}

/// Result of decoding an archive: the recovered bytes plus bookkeeping
/// used only for reporting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedFile {
    /// The recovered original bytes
    pub data: Vec<u8>,

    /// Name recorded in the archive header
    pub file_name: String,

    /// Payload length in bytes, padding-count byte included
    pub compressed_len: usize,
}

/// Serialize a complete archive from its parts.
///
/// Entries are written sorted by symbol byte so a given code map always
/// produces identical archive bytes.
///
/// # Errors
/// - `FormatError::MissingFileName` if `file_name` is empty
/// - `FormatError::FileNameHasNewline` if it would break the line framing
/// - `FormatError::EmptyCodeTable` if `code_map` has no entries
pub fn write_archive(file_name: &str, code_map: &CodeMap, payload: &[u8]) -> Result<Vec<u8>> {
    if file_name.is_empty() {
        return Err(FormatError::MissingFileName.into());
    }
    if file_name.contains('\n') {
        return Err(FormatError::FileNameHasNewline.into());
    }
    if code_map.is_empty() {
        return Err(FormatError::EmptyCodeTable.into());
    }

    let mut entries: Vec<(u8, Code)> = code_map.iter().map(|(&s, &c)| (s, c)).collect();
    entries.sort_by_key(|&(symbol, _)| symbol);

    let mut out = Vec::with_capacity(
        MAGIC.len() + file_name.len() + payload.len() + entries.len() * 12 + 8,
    );
    out.extend_from_slice(MAGIC);
    out.push(b'\n');
    out.extend_from_slice(file_name.as_bytes());
    out.push(b'\n');
    out.extend_from_slice(entries.len().to_string().as_bytes());
    out.push(b'\n');
    for (symbol, code) in entries {
        out.push(symbol);
        out.extend_from_slice(code.to_string().as_bytes());
        out.push(b'\n');
    }
    out.extend_from_slice(payload);
    Ok(out)
}

/// Byte-exact cursor over the header region of an archive.
struct HeaderCursor<'a> {
    data: &'a [u8],
    offset: usize,
}

impl<'a> HeaderCursor<'a> {
    /// Consume the next newline-terminated line, excluding the newline.
    fn next_line(&mut self, what: &'static str) -> Result<&'a [u8]> {
        let rest = &self.data[self.offset..];
        let end = rest
            .iter()
            .position(|&b| b == b'\n')
            .ok_or(FormatError::Truncated { what })?;
        self.offset += end + 1;
        Ok(&rest[..end])
    }
}

/// Parse the archive header and locate the payload.
///
/// The magic marker is validated first; every other structural defect is
/// reported as its own [`FormatError`] and aborts the parse.
pub fn parse_header(bytes: &[u8]) -> Result<ArchiveInfo> {
    let mut cursor = HeaderCursor {
        data: bytes,
        offset: 0,
    };

    let magic = cursor.next_line("magic marker")?;
    if magic != MAGIC {
        return Err(FormatError::InvalidMagic {
            actual: String::from_utf8_lossy(magic).into_owned(),
        }
        .into());
    }

    let name = cursor.next_line("file name")?;
    if name.is_empty() {
        return Err(FormatError::MissingFileName.into());
    }
    let file_name = std::str::from_utf8(name)
        .map_err(|_| FormatError::FileNameNotUtf8)?
        .to_owned();

    let count_line = cursor.next_line("entry count")?;
    let count: usize = std::str::from_utf8(count_line)
        .ok()
        .and_then(|text| text.parse().ok())
        .ok_or_else(|| FormatError::InvalidEntryCount {
            text: String::from_utf8_lossy(count_line).into_owned(),
        })?;
    if count == 0 {
        return Err(FormatError::EmptyCodeTable.into());
    }

    let mut recovery_map = RecoveryMap::with_capacity(count);
    for index in 0..count {
        let line = cursor.next_line("code table entry")?;
        let (symbol, code_text) = if line.is_empty() {
            // Newline symbol: the raw byte terminated its own line, so the
            // code sits on the line that follows.
            (b'\n', cursor.next_line("code table entry")?)
        } else {
            (line[0], &line[1..])
        };
        let code =
            Code::from_bit_text(code_text).ok_or(FormatError::MalformedEntry { index })?;
        // Duplicate codes: last entry wins, matching the declared table.
        recovery_map.insert(code, symbol);
    }

    Ok(ArchiveInfo {
        file_name,
        recovery_map,
        payload_offset: cursor.offset,
    })
}

/// Compress `data` and frame it as a complete archive.
///
/// This is the full encode pipeline: frequency table, code map, packed
/// payload, framed header.
pub fn encode_archive(file_name: &str, data: &[u8]) -> Result<Vec<u8>> {
    let freqs = huffman::count_frequencies(data);
    let code_map = huffman::build_code_map(&freqs)?;
    let payload = huffman::encode_bits(data, &code_map)?.into_payload();
    write_archive(file_name, &code_map, &payload)
}

/// Parse and decode a complete archive.
pub fn decode_archive(bytes: &[u8]) -> Result<DecodedFile> {
    let info = parse_header(bytes)?;
    let payload = &bytes[info.payload_offset..];
    let reader = BitReader::from_payload(payload)?;
    let data = huffman::decode_bits(reader, &info.recovery_map)?;
    Ok(DecodedFile {
        data,
        file_name: info.file_name,
        compressed_len: payload.len(),
    })
}
