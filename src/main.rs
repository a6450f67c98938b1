//! txnpack - transaction resource compiler
//!
//! Scans a directory of precompiled transaction binaries and writes Rust
//! sources that embed them compressed and decode them lazily at runtime.

use clap::Parser;

use txnpack::cli::Cli;
use txnpack::commands;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = commands::generate::run(&cli) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
