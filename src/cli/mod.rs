// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the acekit command-line interface.
//!
//! Raw codec subcommands (`encode`, `decode`), hostname subcommands
//! (`to-ascii`, `to-unicode`), and `inspect` to walk through a decode one
//! insertion at a time. Every subcommand can print JSON instead of text.

pub mod display;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "acekit",
    about = "Punycode (RFC 3492) and xn-- hostname conversion",
    version
)]
pub struct Cli {
    /// Emit a JSON object instead of plain text
    #[arg(long, global = true)]
    pub json: bool,

    /// Log at debug level (overrides RUST_LOG)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Encode a Unicode string as raw Punycode (no xn-- prefix)
    Encode {
        /// Text to encode
        text: String,
    },

    /// Decode raw Punycode (no xn-- prefix) to Unicode
    Decode {
        /// Punycode to decode
        text: String,
    },

    /// Convert a Unicode hostname to its xn-- form, label by label
    #[command(name = "to-ascii")]
    ToAscii {
        /// Hostname, e.g. bücher.example
        hostname: String,
    },

    /// Convert an xn-- hostname back to Unicode, label by label
    #[command(name = "to-unicode")]
    ToUnicode {
        /// Hostname, e.g. xn--bcher-kva.example
        hostname: String,
    },

    /// Show each insertion a decode performs
    Inspect {
        /// Raw Punycode, or a single xn-- label (the prefix is stripped)
        text: String,
    },
}

impl Commands {
    /// Short operation name used in JSON output.
    pub fn operation(&self) -> &'static str {
        match self {
            Commands::Encode { .. } => "encode",
            Commands::Decode { .. } => "decode",
            Commands::ToAscii { .. } => "to-ascii",
            Commands::ToUnicode { .. } => "to-unicode",
            Commands::Inspect { .. } => "inspect",
        }
    }
}
