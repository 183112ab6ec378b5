// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;

use acekit::{
    decode, encode, idna_decode, idna_encode, inspect, InsertionStep, Inspection, ACE_PREFIX,
};

mod cli;
use cli::display;
use cli::{Cli, Commands};

/// JSON shape for a plain conversion.
#[derive(Serialize)]
struct Conversion<'a> {
    operation: &'static str,
    input: &'a str,
    output: String,
}

/// JSON shape for `inspect`.
#[derive(Serialize)]
struct InspectReport<'a> {
    operation: &'static str,
    input: &'a str,
    decoded: String,
    #[serde(flatten)]
    inspection: &'a Inspection,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(&cli) {
        eprintln!("{} {:#}", display::error_mark(), e);
        std::process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let env = env_logger::Env::default();
    let mut logger = env_logger::Builder::from_env(env);
    if verbose {
        logger.filter(None, log::LevelFilter::Debug);
    }
    logger.init();
}

fn run(cli: &Cli) -> Result<()> {
    let operation = cli.command.operation();

    let (input, output) = match &cli.command {
        Commands::Encode { text } => (
            text,
            encode(text).with_context(|| format!("cannot encode {:?}", text))?,
        ),
        Commands::Decode { text } => (
            text,
            decode(text).with_context(|| format!("cannot decode {:?}", text))?,
        ),
        Commands::ToAscii { hostname } => (
            hostname,
            idna_encode(hostname).with_context(|| format!("cannot convert {:?}", hostname))?,
        ),
        Commands::ToUnicode { hostname } => (
            hostname,
            idna_decode(hostname).with_context(|| format!("cannot convert {:?}", hostname))?,
        ),
        Commands::Inspect { text } => return run_inspect(text, cli.json),
    };

    if cli.json {
        let conversion = Conversion {
            operation,
            input,
            output,
        };
        println!("{}", serde_json::to_string_pretty(&conversion)?);
    } else {
        println!("{}", display::value(&output));
    }
    Ok(())
}

fn run_inspect(text: &str, json: bool) -> Result<()> {
    let payload = text.strip_prefix(ACE_PREFIX).unwrap_or(text);
    log::debug!("inspecting {:?}", payload);

    let inspection = inspect(payload).with_context(|| format!("cannot decode {:?}", payload))?;
    let decoded = inspection.decoded();

    if json {
        let report = InspectReport {
            operation: "inspect",
            input: text,
            decoded,
            inspection: &inspection,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    display::section_top("PUNYCODE");
    display::row(&format!(" input    {}", text));
    display::row(&format!(" basic    {:?}", inspection.basic));
    display::row(&format!(" decoded  {}", display::value(&decoded)));
    display::section_bot();

    if inspection.steps.is_empty() {
        return Ok(());
    }

    display::section_top("INSERTIONS");
    display::row(&format!(
        " {}{}{}{}{}",
        display::pad_right("digits", 12),
        display::pad_right("delta", 12),
        display::pad_right("bias", 8),
        display::pad_right("at", 6),
        "code point"
    ));
    for step in &inspection.steps {
        display::row(&format_step(step));
    }
    display::section_bot();

    Ok(())
}

fn format_step(step: &InsertionStep) -> String {
    format!(
        " {}{}{}{}{}",
        display::pad_right(&step.digits, 12),
        display::pad_right(&step.delta.to_string(), 12),
        display::pad_right(&step.bias.to_string(), 8),
        display::pad_right(&step.position.to_string(), 6),
        display::code_point(step.code_point)
    )
}
