//! The interactive analysis session: command grammar, parsing, and the
//! dispatch loop around the `ttp-core` engine.

use std::io::{self, BufRead};

use ttp_core::ascii::AsciiCatalog;
use ttp_core::hex::{CribWindow, crib_drag, text_to_bytes};
use ttp_core::recon::{ReconPair, Side};
use ttp_core::xor_table::XorTable;

const HELP: &str = "Usage:
 /search  [needle]                      Drag a guessed string across the combined stream. (e.g. \"/search hello\")
 /index   [msg1|msg2] [offset]          Commit the last '/search' hit at an offset to msg1 or msg2
 /lookup  [index]                       List candidate ASCII characters for the combined byte at an index
 /set     [msg1|msg2] [index] [string]  Pin a string to a message at a specific position
 /guess   [msg1|msg2] [hex] [char]      Guess a character wherever a combined byte value occurs
 /unset   [index] [length]              Clear pinned positions of the given length
 /print   [?key]                        Print the reconstructions (use \"key\" for printing also the key)
 /ascii                                 Print the XOR relation grid (careful, big output)
 /clear                                 Clear the screen
 /help                                  Print this message
 /end                                   Finish and end the session
";

/// A parsed analyst command.
#[derive(Debug, PartialEq, Eq)]
pub(crate) enum Command {
    Search(String),
    Index(Side, usize),
    Lookup(usize),
    Set(Side, usize, String),
    Guess(Side, String, char),
    Unset(usize, usize),
    Print(bool),
    Ascii,
    Clear,
    Help,
    End,
}

impl Command {
    /// Parses one input line. `None` means the line matched no command.
    pub(crate) fn parse(line: &str) -> Option<Self> {
        let line = line.trim();
        let (head, rest) = match line.split_once(char::is_whitespace) {
            Some((head, rest)) => (head, rest.trim()),
            None => (line, ""),
        };

        match head {
            "/search" if !rest.is_empty() => Some(Self::Search(rest.to_string())),
            "/index" => {
                let mut parts = rest.split_whitespace();
                let side = parse_side(parts.next()?)?;
                let offset = parts.next()?.parse().ok()?;
                Some(Self::Index(side, offset))
            }
            "/lookup" => {
                let index = rest.split_whitespace().next()?.parse().ok()?;
                Some(Self::Lookup(index))
            }
            "/set" => {
                let (side, rest) = rest.split_once(char::is_whitespace)?;
                let side = parse_side(side)?;
                let (index, text) = rest.trim().split_once(char::is_whitespace)?;
                let index = index.parse().ok()?;
                let text = text.trim();
                if text.is_empty() {
                    None
                } else {
                    Some(Self::Set(side, index, text.to_string()))
                }
            }
            "/guess" => {
                let mut parts = rest.split_whitespace();
                let side = parse_side(parts.next()?)?;
                let hex_byte = parts.next()?.to_string();
                let mut chars = parts.next()?.chars();
                let ch = chars.next()?;
                if chars.next().is_some() {
                    return None;
                }
                Some(Self::Guess(side, hex_byte, ch))
            }
            "/unset" => {
                let mut parts = rest.split_whitespace();
                let index = parts.next()?.parse().ok()?;
                let length = parts.next()?.parse().ok()?;
                Some(Self::Unset(index, length))
            }
            "/print" => Some(Self::Print(rest == "key")),
            "/ascii" => Some(Self::Ascii),
            "/clear" => Some(Self::Clear),
            "/help" => Some(Self::Help),
            "/end" => Some(Self::End),
            _ => None,
        }
    }
}

fn parse_side(token: &str) -> Option<Side> {
    match token {
        "msg1" => Some(Side::Msg1),
        "msg2" => Some(Side::Msg2),
        _ => None,
    }
}

/// One interactive analysis session over two loaded ciphertexts.
pub(crate) struct Session {
    catalog: AsciiCatalog,
    table: XorTable,
    pair: ReconPair,
    last_search: Option<Vec<CribWindow>>,
}

impl Session {
    pub(crate) fn new(ciphertext1: Vec<u8>, ciphertext2: Vec<u8>) -> Self {
        let catalog = AsciiCatalog::new();
        let table = XorTable::new(&catalog);
        let pair = ReconPair::new(ciphertext1, ciphertext2);
        Self {
            catalog,
            table,
            pair,
            last_search: None,
        }
    }

    /// Runs the command loop until `/end` or end of input.
    pub(crate) fn run(&mut self) {
        self.print_messages(false);
        println!();
        print!("{HELP}");

        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            let Ok(line) = line else { break };
            if !self.dispatch(&line) {
                break;
            }
        }
    }

    // Returns false once the session should end.
    fn dispatch(&mut self, line: &str) -> bool {
        match Command::parse(line) {
            Some(Command::Search(needle)) => self.search(&needle),
            Some(Command::Index(side, offset)) => self.commit_index(side, offset),
            Some(Command::Lookup(index)) => self.lookup(index),
            Some(Command::Set(side, index, text)) => self.set(side, index, &text),
            Some(Command::Guess(side, hex_byte, ch)) => self.guess(side, &hex_byte, ch),
            Some(Command::Unset(index, length)) => self.unset(index, length),
            Some(Command::Print(with_key)) => self.print_messages(with_key),
            Some(Command::Ascii) => print!("{}", self.table),
            Some(Command::Clear) => print!("\x1b[2J"),
            Some(Command::Help) => print!("{HELP}"),
            Some(Command::End) => {
                println!("Goodbye");
                return false;
            }
            None => print!("{HELP}"),
        }
        true
    }

    fn search(&mut self, needle: &str) {
        let guess = text_to_bytes(&self.catalog, needle);
        let windows = crib_drag(self.pair.combined(), &guess);
        for window in windows.iter().filter(|w| w.is_readable()) {
            println!("{} => {}", window.offset, window.text());
        }
        self.last_search = Some(windows);
    }

    fn commit_index(&mut self, side: Side, offset: usize) {
        let Some(windows) = &self.last_search else {
            println!("No search result to commit. Run /search first.");
            return;
        };
        let Some(window) = windows.get(offset) else {
            println!("No search hit at offset {offset}.");
            return;
        };
        // The dragged-out window belongs to the named side; the guess
        // itself lands on the paired side via the mirrored update.
        let bytes = window.bytes.clone();
        self.pair.confirm_at(side, offset, &bytes);
        self.print_messages(false);
    }

    fn lookup(&self, index: usize) {
        let Some(&stream_byte) = self.pair.combined().get(index) else {
            println!("No byte at index {index} found!");
            return;
        };

        println!(
            "Possible matching ASCII chars for [{index}] => {}:",
            hex::encode([stream_byte])
        );
        for symbol in self.table.candidate_symbols_for_result(stream_byte) {
            let partner = stream_byte ^ symbol.code;
            println!(
                "[{}]=[{}⊕{}] {} ⊕ {}",
                hex::encode([stream_byte]),
                hex::encode([partner]),
                symbol.hex(),
                char::from(partner),
                symbol.ch
            );
        }
    }

    fn set(&mut self, side: Side, index: usize, text: &str) {
        let bytes = text_to_bytes(&self.catalog, text);
        self.pair.confirm_at(side, index, &bytes);
        self.print_messages(false);
    }

    fn guess(&mut self, side: Side, hex_byte: &str, ch: char) {
        let stream_byte = match hex::decode(hex_byte) {
            Ok(bytes) if bytes.len() == 1 => bytes[0],
            _ => {
                println!("'{hex_byte}' is not a two-hex-digit byte value.");
                return;
            }
        };
        let Some(symbol) = self.catalog.by_char(ch) else {
            println!("'{ch}' is not a printable ASCII character.");
            return;
        };
        self.pair.record_value_guess(side, stream_byte, symbol.code);
        self.print_messages(false);
    }

    fn unset(&mut self, index: usize, length: usize) {
        self.pair.clear_at(index, length);
        self.print_messages(false);
    }

    fn print_messages(&self, with_key: bool) {
        println!();
        println!("Message 1: \n{}\n", self.pair.render(Side::Msg1));
        println!("Message 2: \n{}\n", self.pair.render(Side::Msg2));

        if with_key {
            println!("Key: \n{}\n", self.pair.derive_key(Side::Msg1));
        }
    }
}
