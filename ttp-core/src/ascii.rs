// File:    ascii.rs
// Author:  apezoo
// Date:    2026-02-14
//
// Description: Catalog of the printable ASCII range, indexed by character, hex code, and byte value.
//
// License:
// This project is licensed under the terms of the GNU AGPLv3 license.
// See the LICENSE.md file in the project root for full license information.

//! The printable ASCII catalog.
//!
//! Every query in this crate is phrased over the printable range
//! (codes 32..=126, 95 symbols). The catalog enumerates that range once
//! at session start and answers lookups by character, by two-hex-digit
//! code, and by byte value. Out-of-range keys are a lookup miss, never
//! an error.

/// Lowest printable ASCII code (space).
pub const PRINTABLE_MIN: u8 = 32;
/// Highest printable ASCII code (`~`).
pub const PRINTABLE_MAX: u8 = 126;
/// Number of symbols in the printable range.
pub const PRINTABLE_COUNT: usize = (PRINTABLE_MAX - PRINTABLE_MIN + 1) as usize;

/// One printable ASCII character together with its byte value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AsciiSymbol {
    /// The character itself.
    pub ch: char,
    /// The byte value, 32..=126.
    pub code: u8,
}

impl AsciiSymbol {
    /// The two-hex-digit form of the byte value.
    #[must_use]
    pub fn hex(&self) -> String {
        hex::encode([self.code])
    }
}

/// Ordered catalog of the 95 printable ASCII symbols, ascending code
/// order. Built once and shared read-only for the session lifetime.
#[derive(Debug)]
pub struct AsciiCatalog {
    symbols: Vec<AsciiSymbol>,
}

impl AsciiCatalog {
    /// Builds the catalog for the full printable range.
    #[must_use]
    pub fn new() -> Self {
        let symbols = (PRINTABLE_MIN..=PRINTABLE_MAX)
            .map(|code| AsciiSymbol {
                ch: code as char,
                code,
            })
            .collect();
        Self { symbols }
    }

    /// Looks a symbol up by its character.
    #[must_use]
    pub fn by_char(&self, ch: char) -> Option<AsciiSymbol> {
        if ch.is_ascii() {
            self.by_code(ch as u8)
        } else {
            None
        }
    }

    /// Looks a symbol up by its two-hex-digit code, e.g. `"41"` for `A`.
    #[must_use]
    pub fn by_hex(&self, hex_code: &str) -> Option<AsciiSymbol> {
        match hex::decode(hex_code) {
            Ok(bytes) if bytes.len() == 1 => self.by_code(bytes[0]),
            _ => None,
        }
    }

    /// Looks a symbol up by its byte value.
    #[must_use]
    pub fn by_code(&self, code: u8) -> Option<AsciiSymbol> {
        if (PRINTABLE_MIN..=PRINTABLE_MAX).contains(&code) {
            Some(self.symbols[usize::from(code - PRINTABLE_MIN)])
        } else {
            None
        }
    }

    /// All 95 symbols in ascending code order.
    #[must_use]
    pub fn symbols(&self) -> &[AsciiSymbol] {
        &self.symbols
    }
}

impl Default for AsciiCatalog {
    fn default() -> Self {
        Self::new()
    }
}
