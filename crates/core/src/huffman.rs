//! Static Huffman codec: frequency analysis, tree construction, code
//! assignment, and bitstream decoding.
//!
//! The tree is transient. It is built fresh for each encode call, walked
//! once to produce the [`CodeMap`], and dropped; archives persist the
//! inverted [`RecoveryMap`] instead, so decoding never reconstructs a tree.
//!
//! # Degenerate Input
//!
//! An input with exactly one distinct symbol has no usable tree (a lone
//! leaf yields an empty traversal path), so that symbol is bound directly
//! to the fixed one-bit code `1`. The decoder mirrors this: a one-entry
//! recovery map turns every stream bit into one occurrence of the symbol.

use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap};

use crate::bitio::{BitReader, BitWriter, Code};
use crate::error::{CorruptArchiveError, Error, HuffmanError, Result};

/// Symbol -> code table, produced once per encode call.
pub type CodeMap = HashMap<u8, Code>;

/// Code -> symbol table, persisted in the archive header and consumed by
/// the decoder.
pub type RecoveryMap = HashMap<Code, u8>;

/// Count byte occurrences in a single linear pass.
///
/// An empty input yields an all-zero table; [`build_code_map`] rejects it.
pub fn count_frequencies(data: &[u8]) -> [u64; 256] {
    let mut freqs = [0u64; 256];
    for &byte in data {
        freqs[byte as usize] += 1;
    }
    freqs
}

/// Transient Huffman tree node.
///
/// Each internal node exclusively owns its two children; nothing is shared,
/// so the whole tree frees when the encode call ends.
#[derive(Debug)]
enum HuffNode {
    Leaf {
        symbol: u8,
    },
    Internal {
        left: Box<HuffNode>,
        right: Box<HuffNode>,
    },
}

/// Heap entry pairing a node with its weight and insertion sequence number.
///
/// `BinaryHeap` is a max-heap, so the ordering is reversed to pop the
/// lowest weight first. Equal weights order by sequence number, which makes
/// merges deterministic within one encode call; no external determinism is
/// needed because decode uses the persisted recovery map.
struct HeapEntry {
    weight: u64,
    seq: u32,
    node: HuffNode,
}

impl Ord for HeapEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        (other.weight, other.seq).cmp(&(self.weight, self.seq))
    }
}

impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for HeapEntry {
    fn eq(&self, other: &Self) -> bool {
        self.weight == other.weight && self.seq == other.seq
    }
}

impl Eq for HeapEntry {}

/// Build the prefix-free code map for the given frequency table.
///
/// Standard greedy construction: all leaves go into a min-priority heap;
/// the two lowest-weight nodes are repeatedly merged under a fresh internal
/// node until one root remains, then a depth-first walk assigns bit 0 to
/// left branches and bit 1 to right branches.
///
/// # Errors
/// - `Error::EmptyInput` if no symbol has a non-zero count
/// - `HuffmanError::CodeTooLong` if a code would exceed 64 bits
pub fn build_code_map(freqs: &[u64; 256]) -> Result<CodeMap> {
    let mut heap = BinaryHeap::new();
    let mut seq = 0u32;
    for (symbol, &weight) in freqs.iter().enumerate() {
        if weight > 0 {
            heap.push(HeapEntry {
                weight,
                seq,
                node: HuffNode::Leaf {
                    symbol: symbol as u8,
                },
            });
            seq += 1;
        }
    }

    if heap.is_empty() {
        return Err(Error::EmptyInput);
    }

    let mut map = CodeMap::with_capacity(heap.len());

    // Single distinct symbol: skip tree construction and bind the fixed
    // one-bit code directly.
    if heap.len() == 1 {
        if let Some(HeapEntry {
            node: HuffNode::Leaf { symbol },
            ..
        }) = heap.pop()
        {
            map.insert(symbol, Code::ONE);
        }
        return Ok(map);
    }

    while heap.len() > 1 {
        let (Some(lower), Some(higher)) = (heap.pop(), heap.pop()) else {
            break;
        };
        heap.push(HeapEntry {
            weight: lower.weight + higher.weight,
            seq,
            node: HuffNode::Internal {
                left: Box::new(lower.node),
                right: Box::new(higher.node),
            },
        });
        seq += 1;
    }

    if let Some(root) = heap.pop() {
        assign_codes(&root.node, Code::new(), &mut map)?;
    }
    Ok(map)
}

/// Depth-first walk binding each leaf symbol to its accumulated path.
fn assign_codes(node: &HuffNode, prefix: Code, map: &mut CodeMap) -> Result<()> {
    match node {
        HuffNode::Leaf { symbol } => {
            map.insert(*symbol, prefix);
        }
        HuffNode::Internal { left, right } => {
            assign_codes(left, prefix.push(false)?, map)?;
            assign_codes(right, prefix.push(true)?, map)?;
        }
    }
    Ok(())
}

/// Invert a code map into the code -> symbol table persisted in archives.
pub fn invert_code_map(map: &CodeMap) -> RecoveryMap {
    map.iter().map(|(&symbol, &code)| (code, symbol)).collect()
}

/// Concatenate the code for every input byte, in original order.
///
/// # Errors
/// Returns `HuffmanError::SymbolNotInTable` if a byte has no code, which
/// can only happen with a map built from a different buffer.
pub fn encode_bits(data: &[u8], map: &CodeMap) -> Result<BitWriter> {
    let mut writer = BitWriter::new();
    for &byte in data {
        let code = map
            .get(&byte)
            .ok_or(HuffmanError::SymbolNotInTable { symbol: byte })?;
        writer.push_code(*code);
    }
    Ok(writer)
}

/// Replay the bitstream against `recovery`, recovering the original bytes.
///
/// Scans one bit at a time, extending an accumulator code; because the
/// persisted codes are prefix-free, the first map hit is unambiguous and
/// final, so the accumulator resets and scanning continues.
///
/// # Errors
/// - `CorruptArchiveError::UnmatchedCode` if the accumulator outgrows every
///   code in the map without matching
/// - `CorruptArchiveError::TrailingBits` if the stream ends mid-code
pub fn decode_bits(mut reader: BitReader<'_>, recovery: &RecoveryMap) -> Result<Vec<u8>> {
    // One-entry table: the encoder emitted one bit per occurrence, so every
    // stream bit maps to the single symbol regardless of its value.
    if recovery.len() == 1 {
        if let Some(&symbol) = recovery.values().next() {
            return Ok(vec![symbol; reader.bit_len()]);
        }
    }

    let longest = recovery.keys().map(Code::len).max().unwrap_or(0);
    let mut decoded = Vec::new();
    let mut accumulator = Code::new();
    let mut consumed = 0usize;

    while let Some(bit) = reader.read_bit() {
        accumulator = accumulator.push(bit)?;
        consumed += 1;
        if let Some(&symbol) = recovery.get(&accumulator) {
            decoded.push(symbol);
            accumulator = Code::new();
        } else if accumulator.len() >= longest {
            return Err(CorruptArchiveError::UnmatchedCode {
                bit_position: consumed - accumulator.len(),
            }
            .into());
        }
    }

    if !accumulator.is_empty() {
        return Err(CorruptArchiveError::TrailingBits {
            count: accumulator.len(),
        }
        .into());
    }
    Ok(decoded)
}
