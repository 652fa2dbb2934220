//! Incremental reconstruction of the two plaintexts and the keystream.
//!
//! Knowledge accumulates monotonically from two kinds of facts: a byte
//! pinned to one exact stream position, and a guess applied wherever a
//! given combined-stream byte value occurs. A position pin always
//! shadows a value guess. The two message sides are kept as one paired
//! unit, because confirming a byte for one message at a position
//! algebraically fixes the other message's byte there.

use std::collections::HashMap;

/// Placeholder printed for positions with no reconstructed byte.
const PLACEHOLDER: char = '.';

/// Resolution of a single stream position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    /// Nothing known about this position.
    Unknown,
    /// A guess applied because of this position's stream byte value.
    ValueDerived(u8),
    /// A byte pinned to this exact position; always wins over a value
    /// guess.
    PositionConfirmed(u8),
}

/// Which of the two messages an operation addresses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    /// The first ciphertext's message.
    Msg1,
    /// The second ciphertext's message.
    Msg2,
}

impl Side {
    /// The paired message.
    #[must_use]
    pub fn other(self) -> Self {
        match self {
            Self::Msg1 => Self::Msg2,
            Self::Msg2 => Self::Msg1,
        }
    }
}

/// Best-known reconstruction of one message. Facts are added and cleared
/// by the analyst; nothing here is ever a fatal error, unknown positions
/// simply render as placeholders.
#[derive(Debug)]
pub struct Reconstruction {
    ciphertext: Vec<u8>,
    // Stream byte value -> guessed plaintext byte, applied wherever that
    // value occurs in the combined stream.
    by_value: [Option<u8>; 256],
    // Position -> plaintext byte, a hard override for that position.
    by_position: HashMap<usize, u8>,
}

impl Reconstruction {
    /// Creates an empty reconstruction for one ciphertext.
    #[must_use]
    pub fn new(ciphertext: Vec<u8>) -> Self {
        Self {
            ciphertext,
            by_value: [None; 256],
            by_position: HashMap::new(),
        }
    }

    /// This side's ciphertext bytes.
    #[must_use]
    pub fn ciphertext(&self) -> &[u8] {
        &self.ciphertext
    }

    /// Applies `plain` wherever the combined stream carries
    /// `stream_byte`, unless a position override shadows it.
    pub fn record_value_guess(&mut self, stream_byte: u8, plain: u8) {
        self.by_value[usize::from(stream_byte)] = Some(plain);
    }

    /// The current value guess for a stream byte value, if any.
    #[must_use]
    pub fn value_guess(&self, stream_byte: u8) -> Option<u8> {
        self.by_value[usize::from(stream_byte)]
    }

    /// Pins `plain` to one exact position, regardless of the stream byte
    /// observed there.
    pub fn record_position_byte(&mut self, position: usize, plain: u8) {
        self.by_position.insert(position, plain);
    }

    /// Pins a run of bytes at consecutive positions starting at `start`.
    /// Gaps leave their position untouched.
    pub fn record_sequence_at(&mut self, start: usize, bytes: &[Option<u8>]) {
        for (i, slot) in bytes.iter().enumerate() {
            if let Some(plain) = *slot {
                self.record_position_byte(start + i, plain);
            }
        }
    }

    /// Removes position overrides for `len` consecutive positions,
    /// reverting them to whatever value guess (or unknown) applies.
    pub fn clear_positions(&mut self, start: usize, len: usize) {
        for position in start..start.saturating_add(len) {
            self.by_position.remove(&position);
        }
    }

    /// Resolves one position against the stream byte observed there.
    /// A position override always shadows a value guess, regardless of
    /// the order the facts were recorded in.
    #[must_use]
    pub fn cell(&self, position: usize, stream_byte: u8) -> Cell {
        if let Some(&plain) = self.by_position.get(&position) {
            Cell::PositionConfirmed(plain)
        } else if let Some(plain) = self.value_guess(stream_byte) {
            Cell::ValueDerived(plain)
        } else {
            Cell::Unknown
        }
    }

    /// Renders the best current reconstruction over the combined stream,
    /// one character per position, `.` where nothing is known.
    #[must_use]
    pub fn render(&self, combined: &[u8]) -> String {
        combined
            .iter()
            .enumerate()
            .map(|(position, &stream_byte)| match self.cell(position, stream_byte) {
                Cell::PositionConfirmed(plain) | Cell::ValueDerived(plain) => char::from(plain),
                Cell::Unknown => PLACEHOLDER,
            })
            .collect()
    }

    /// Recovers keystream bytes at positions confirmed for this message:
    /// `ciphertext XOR plaintext` rendered as two hex digits plus a
    /// space, `.` for unconfirmed positions. Value guesses never
    /// contribute key bytes.
    #[must_use]
    pub fn derive_key(&self) -> String {
        let mut rendered = String::new();
        for (position, &cipher) in self.ciphertext.iter().enumerate() {
            match self.by_position.get(&position) {
                Some(&plain) => {
                    rendered.push_str(&hex::encode([cipher ^ plain]));
                    rendered.push(' ');
                }
                None => rendered.push(PLACEHOLDER),
            }
        }
        rendered
    }
}

/// The two reconstructions plus the combined stream, updated as one unit
/// so the sides never drift apart.
#[derive(Debug)]
pub struct ReconPair {
    combined: Vec<u8>,
    msg1: Reconstruction,
    msg2: Reconstruction,
}

impl ReconPair {
    /// Combines the two ciphertexts and creates two empty
    /// reconstructions. Unequal ciphertext lengths truncate to the
    /// shorter input.
    #[must_use]
    pub fn new(ciphertext1: Vec<u8>, ciphertext2: Vec<u8>) -> Self {
        let combined = crate::hex::combine(&ciphertext1, &ciphertext2);
        let len = combined.len();
        let mut ciphertext1 = ciphertext1;
        let mut ciphertext2 = ciphertext2;
        ciphertext1.truncate(len);
        ciphertext2.truncate(len);
        Self {
            combined,
            msg1: Reconstruction::new(ciphertext1),
            msg2: Reconstruction::new(ciphertext2),
        }
    }

    /// The combined stream (`plaintext1 XOR plaintext2`).
    #[must_use]
    pub fn combined(&self) -> &[u8] {
        &self.combined
    }

    /// Read access to one side.
    #[must_use]
    pub fn side(&self, side: Side) -> &Reconstruction {
        match side {
            Side::Msg1 => &self.msg1,
            Side::Msg2 => &self.msg2,
        }
    }

    fn side_mut(&mut self, side: Side) -> &mut Reconstruction {
        match side {
            Side::Msg1 => &mut self.msg1,
            Side::Msg2 => &mut self.msg2,
        }
    }

    /// Confirms a run of plaintext bytes for `side` starting at `start`
    /// and mirrors the algebraic complement (`stream XOR byte`) onto the
    /// other side, atomically. Truncates at the stream end; gaps touch
    /// neither side.
    pub fn confirm_at(&mut self, side: Side, start: usize, bytes: &[Option<u8>]) {
        let overlap = bytes.len().min(self.combined.len().saturating_sub(start));
        let own: Vec<Option<u8>> = bytes[..overlap].to_vec();
        let mirrored: Vec<Option<u8>> = own
            .iter()
            .zip(self.combined.get(start..start + overlap).unwrap_or(&[]))
            .map(|(slot, &stream)| slot.map(|plain| plain ^ stream))
            .collect();
        self.side_mut(side).record_sequence_at(start, &own);
        self.side_mut(side.other()).record_sequence_at(start, &mirrored);
    }

    /// Records a value-derived guess for one side only. Value guesses
    /// are keyed by stream byte value and are not mirrored; the paired
    /// byte is only fixed once a position is confirmed.
    pub fn record_value_guess(&mut self, side: Side, stream_byte: u8, plain: u8) {
        self.side_mut(side).record_value_guess(stream_byte, plain);
    }

    /// Clears position overrides on both sides.
    pub fn clear_at(&mut self, start: usize, len: usize) {
        self.msg1.clear_positions(start, len);
        self.msg2.clear_positions(start, len);
    }

    /// Renders one side's reconstruction over the combined stream.
    #[must_use]
    pub fn render(&self, side: Side) -> String {
        self.side(side).render(&self.combined)
    }

    /// Derives the keystream from one side's confirmed positions.
    #[must_use]
    pub fn derive_key(&self, side: Side) -> String {
        self.side(side).derive_key()
    }
}
