//! CLI definitions using clap derive API
//!
//! `txnpack` takes no subcommands: every run scans one transaction root and
//! writes (or, with `--list`, names) the two generated files.

use clap::Parser;
use clap::builder::{Styles, styling::AnsiColor};
use std::path::PathBuf;

use crate::compress::LiteralEncoding;

/// txnpack - embed transaction binaries as Rust sources
#[derive(Parser, Debug)]
#[command(
    name = "txnpack",
    author,
    version,
    color = clap::ColorChoice::Auto,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Compile transaction binaries into compressed, lazily decoded Rust sources",
    long_about = "txnpack scans <ROOT>/transaction/stx for .bin and .json files, compresses each \
                  one with zlib and writes two Rust files meant to be include!d together: \
                  transaction.rs (accessors and name registry) and all_txn_pkg.rs (compressed \
                  payloads).",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n   \
                  txnpack --root $DD_ROOT --out-dir gen            \x1b[90m# Generate both files\x1b[0m\n   \
                  txnpack --out-dir gen --disable-large-txn-ops   \x1b[90m# Root from DD_ROOT, skip large ops\x1b[0m\n   \
                  txnpack --out-dir gen --list                    \x1b[90m# Print generated file names only\x1b[0m\n\n\
                  "
)]
pub struct Cli {
    /// Transaction root directory (defaults to $DD_ROOT)
    #[arg(long, value_name = "DIR")]
    pub root: Option<PathBuf>,

    /// Directory the generated files are written to
    #[arg(long, value_name = "DIR")]
    pub out_dir: PathBuf,

    /// Directory under the root to scan [default: transaction/stx]
    #[arg(long, value_name = "DIR")]
    pub txn_dir: Option<PathBuf>,

    /// Print the names of the generated files and exit
    #[arg(long)]
    pub list: bool,

    /// Print nothing but errors
    #[arg(long, short = 'q', conflicts_with = "verbose")]
    pub quiet: bool,

    /// Print one line per embedded transaction
    #[arg(long, short = 'v')]
    pub verbose: bool,

    /// Skip the large transaction categories (mladfmatmulbias, elwmul)
    #[arg(long)]
    pub disable_large_txn_ops: bool,

    /// Skip files whose path contains SUBSTR (repeatable)
    #[arg(long = "exclude-path", value_name = "SUBSTR")]
    pub exclude_paths: Vec<String>,

    /// Keep names containing SUBSTR out of prefix search (repeatable, replaces the defaults)
    #[arg(long = "index-exclude", value_name = "SUBSTR")]
    pub index_excludes: Vec<String>,

    /// Maximum size of one literal segment
    #[arg(long, value_name = "N")]
    pub chunk_limit: Option<usize>,

    /// Literal form of the compressed bytes
    #[arg(long, value_enum)]
    pub encoding: Option<LiteralEncoding>,

    /// YAML configuration file
    #[arg(long, short = 'c', value_name = "FILE")]
    pub config: Option<PathBuf>,
}
