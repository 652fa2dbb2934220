// File:    hex.rs
// Author:  apezoo
// Date:    2026-02-14
//
// Description: Byte sequence conversions, the readability heuristic, and the crib-dragging search primitive.
//
// License:
// This project is licensed under the terms of the GNU AGPLv3 license.
// See the LICENSE.md file in the project root for full license information.

//! Hex and byte sequence utilities.
//!
//! Sequences that passed through the catalog may carry gaps where a
//! character had no printable entry; those are `Option<u8>` slots with
//! `None` marking the gap. Gaps propagate through every operation here,
//! they are never rejected.

use log::{debug, warn};

use crate::ascii::AsciiCatalog;

/// Maps each character of `text` through the catalog. Characters outside
/// the printable range become `None` entries.
#[must_use]
pub fn text_to_bytes(catalog: &AsciiCatalog, text: &str) -> Vec<Option<u8>> {
    text.chars()
        .map(|ch| catalog.by_char(ch).map(|symbol| symbol.code))
        .collect()
}

/// Decodes the present bytes of a sequence; gaps are skipped. An empty
/// sequence decodes to the empty string.
#[must_use]
pub fn bytes_to_text(bytes: &[Option<u8>]) -> String {
    bytes.iter().flatten().map(|&b| char::from(b)).collect()
}

/// The noise filter for crib-drag output: every present byte must be an
/// ASCII letter, digit, space, or one of `, . ! ?`.
#[must_use]
pub fn is_readable(bytes: &[Option<u8>]) -> bool {
    bytes
        .iter()
        .flatten()
        .all(|&b| b.is_ascii_alphanumeric() || matches!(b, b' ' | b',' | b'.' | b'!' | b'?'))
}

/// XOR-combines the two ciphertexts into one stream. The shared keystream
/// cancels, leaving `plaintext1 XOR plaintext2` at every position.
/// Unequal lengths truncate to the shorter input.
#[must_use]
pub fn combine(first: &[u8], second: &[u8]) -> Vec<u8> {
    if first.len() != second.len() {
        warn!(
            "ciphertext lengths differ ({} vs {} bytes); combining the overlapping prefix only",
            first.len(),
            second.len()
        );
    }
    first.iter().zip(second.iter()).map(|(a, b)| a ^ b).collect()
}

/// One crib-drag result: the guess XOR-ed against the combined stream at
/// a single start offset.
#[derive(Debug, Clone)]
pub struct CribWindow {
    /// Start offset in the combined stream.
    pub offset: usize,
    /// XOR of the guess against the stream, truncated at the stream end;
    /// `None` where the guess carried a gap.
    pub bytes: Vec<Option<u8>>,
}

impl CribWindow {
    /// The decoded text of the window.
    #[must_use]
    pub fn text(&self) -> String {
        bytes_to_text(&self.bytes)
    }

    /// Whether the decoded window passes the readability filter.
    #[must_use]
    pub fn is_readable(&self) -> bool {
        is_readable(&self.bytes)
    }
}

/// Drags a guessed plaintext fragment across the combined stream.
///
/// The stream equals `plaintext1 XOR plaintext2`, so XOR-ing a correct
/// guess for one plaintext at the right offset recovers the other
/// plaintext there; wrong offsets typically decode to noise, which the
/// readability filter suppresses. One window is produced per start
/// offset `0..combined.len()`, truncated where the guess overruns the
/// stream (possibly down to an empty window).
#[must_use]
pub fn crib_drag(combined: &[u8], guess: &[Option<u8>]) -> Vec<CribWindow> {
    let mut windows = Vec::with_capacity(combined.len());
    for offset in 0..combined.len() {
        let overlap = guess.len().min(combined.len() - offset);
        let bytes = guess[..overlap]
            .iter()
            .zip(&combined[offset..offset + overlap])
            .map(|(slot, &stream)| slot.map(|g| g ^ stream))
            .collect();
        windows.push(CribWindow { offset, bytes });
    }

    let readable = windows.iter().filter(|w| w.is_readable()).count();
    debug!(
        "dragged {} guess bytes over {} offsets, {} readable",
        guess.len(),
        combined.len(),
        readable
    );
    windows
}
