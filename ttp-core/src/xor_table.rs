//! Precomputed XOR relations over the printable ASCII range.
//!
//! The single most frequent analyst query in two-time pad recovery is
//! "which printable character pairs XOR to this observed byte". The
//! table computes all 95x95 ordered pairs once and indexes them by
//! result byte, turning that query into a constant-time lookup instead
//! of a 9025-pair scan.

use std::fmt;

use indexmap::IndexMap;

use crate::ascii::{AsciiCatalog, AsciiSymbol, PRINTABLE_COUNT, PRINTABLE_MIN};

/// The fact that `left XOR right == result` for one ordered symbol pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct XorRelation {
    /// Left operand.
    pub left: AsciiSymbol,
    /// Right operand.
    pub right: AsciiSymbol,
    /// `left.code ^ right.code`.
    pub result: u8,
}

impl XorRelation {
    /// The two-hex-digit form of the XOR byte.
    #[must_use]
    pub fn hex(&self) -> String {
        hex::encode([self.result])
    }
}

/// XOR relation table over all ordered pairs of printable symbols,
/// including `left == right` (XOR byte `00`). Built once per session,
/// read-only afterwards.
#[derive(Debug)]
pub struct XorTable {
    // grid[l][r] is the XOR byte of the l-th and r-th symbols.
    grid: Vec<[u8; PRINTABLE_COUNT]>,
    // Relations grouped by result byte; insertion order is build order
    // (outer loop over left, inner over right).
    by_result: Vec<Vec<XorRelation>>,
    symbols: Vec<AsciiSymbol>,
}

impl XorTable {
    /// Builds the table from a catalog.
    #[must_use]
    pub fn new(catalog: &AsciiCatalog) -> Self {
        let symbols: Vec<AsciiSymbol> = catalog.symbols().to_vec();
        let mut grid = vec![[0u8; PRINTABLE_COUNT]; PRINTABLE_COUNT];
        let mut by_result: Vec<Vec<XorRelation>> = vec![Vec::new(); 256];

        for (l, &left) in symbols.iter().enumerate() {
            for (r, &right) in symbols.iter().enumerate() {
                let result = left.code ^ right.code;
                grid[l][r] = result;
                by_result[usize::from(result)].push(XorRelation {
                    left,
                    right,
                    result,
                });
            }
        }

        Self {
            grid,
            by_result,
            symbols,
        }
    }

    /// The relation for one ordered pair of printable symbols.
    #[must_use]
    pub fn relation(&self, left: AsciiSymbol, right: AsciiSymbol) -> XorRelation {
        let result = self.grid[Self::ordinal(left)][Self::ordinal(right)];
        XorRelation {
            left,
            right,
            result,
        }
    }

    /// All relations with `left` as the left operand, in enumeration
    /// order of the right symbol.
    pub fn relations_from(&self, left: AsciiSymbol) -> impl Iterator<Item = XorRelation> + '_ {
        let row = &self.grid[Self::ordinal(left)];
        self.symbols
            .iter()
            .zip(row.iter())
            .map(move |(&right, &result)| XorRelation {
                left,
                right,
                result,
            })
    }

    /// All relations whose XOR equals `result`. Empty for bytes no
    /// printable pair produces.
    #[must_use]
    pub fn relations_for_result(&self, result: u8) -> &[XorRelation] {
        &self.by_result[usize::from(result)]
    }

    /// The printable symbols that can appear on either side of a pair
    /// XOR-ing to `result`: the de-duplicated union of left and right
    /// symbols, keyed by code, first occurrence first.
    #[must_use]
    pub fn candidate_symbols_for_result(&self, result: u8) -> Vec<AsciiSymbol> {
        let mut seen: IndexMap<u8, AsciiSymbol> = IndexMap::new();
        for relation in self.relations_for_result(result) {
            seen.entry(relation.left.code).or_insert(relation.left);
            seen.entry(relation.right.code).or_insert(relation.right);
        }
        seen.into_values().collect()
    }

    fn ordinal(symbol: AsciiSymbol) -> usize {
        usize::from(symbol.code - PRINTABLE_MIN)
    }
}

impl fmt::Display for XorTable {
    // The full 95x95 grid keyed by character, as printed by `/ascii`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "   ")?;
        for symbol in &self.symbols {
            write!(f, "{}  ", symbol.ch)?;
        }
        writeln!(f)?;

        for &left in &self.symbols {
            write!(f, "{} ", left.ch)?;
            for relation in self.relations_from(left) {
                write!(f, "{} ", relation.hex())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
