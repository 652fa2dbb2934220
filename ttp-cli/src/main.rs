#![deny(missing_docs)]
//! An interactive command-line workbench for two-time pad cryptanalysis.

use clap::Parser;
use log::{error, info};
use std::fs;
use std::path::PathBuf;

mod session;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(
    after_help = "EXAMPLES:\n  \n# Open two ciphertexts encrypted under the same keystream\nttp-cli ./msg1.enc ./msg2.enc\n\n# Then, inside the session:\n#   /search the        drag a guess across the combined stream\n#   /index msg1 14     commit the hit at offset 14 to message 1\n#   /print key         show both reconstructions and the keystream"
)]
struct Cli {
    /// Path to the first ciphertext file (raw bytes).
    ciphertext1: PathBuf,

    /// Path to the second ciphertext file (raw bytes).
    ciphertext2: PathBuf,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let first = fs::read(&cli.ciphertext1).unwrap_or_else(|e| {
        error!(
            "Failed to read ciphertext '{}': {e}",
            cli.ciphertext1.display()
        );
        std::process::exit(1);
    });
    let second = fs::read(&cli.ciphertext2).unwrap_or_else(|e| {
        error!(
            "Failed to read ciphertext '{}': {e}",
            cli.ciphertext2.display()
        );
        std::process::exit(1);
    });

    info!(
        "Loaded {} + {} ciphertext bytes.",
        first.len(),
        second.len()
    );

    let mut session = session::Session::new(first, second);
    session.run();
}
