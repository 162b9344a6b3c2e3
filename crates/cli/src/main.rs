//! RISC-V instruction decoder CLI.
//!
//! This binary exercises the front end from the command line. It performs:
//! 1. **Decode:** Classify words given as arguments and print their disassembly or fields.
//! 2. **Dump:** Load a flat binary image into memory, then fetch and decode every aligned word.
//!
//! Output is plain text by default or JSON with `--json`. Diagnostics go to stderr
//! through `tracing`; `RUST_LOG` and `-v` control their verbosity.

use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{ArgAction, Parser, Subcommand};
use serde::Serialize;
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

use rvdec_core::common::constants::INSTRUCTION_SIZE_32;
use rvdec_core::config::Config;
use rvdec_core::isa::decode::Decoder;
use rvdec_core::isa::disasm;
use rvdec_core::isa::instruction::{Fields, InstructionWord};
use rvdec_core::soc::{AddressableMemory, Memory};

/// Result type of the subcommands; any error ends the process with a failure code.
type CliResult<T> = Result<T, Box<dyn Error>>;

#[derive(Parser, Debug)]
#[command(
    name = "rvdec",
    author,
    version,
    about = "RISC-V instruction decoder",
    long_about = "Decode 32-bit RISC-V instruction words into their fields and assembler syntax.\n\nExamples:\n  rvdec decode 0x00a00513 0x80000033\n  rvdec decode --json 0xfff00093\n  rvdec dump --file program.bin --base 0x80000000"
)]
struct Cli {
    /// JSON configuration file (memory layout, enabled extensions).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace). Overrides RUST_LOG.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Decode instruction words given on the command line.
    Decode {
        /// Words in hex (`0x` prefix optional) or decimal with a `#` prefix.
        #[arg(required = true, value_parser = parse_word)]
        words: Vec<u32>,

        /// Print JSON instead of text.
        #[arg(long)]
        json: bool,
    },

    /// Load a flat binary into memory and decode every aligned word.
    Dump {
        /// Flat binary image.
        #[arg(short, long)]
        file: PathBuf,

        /// Load address (defaults to the configured memory base).
        #[arg(long, value_parser = parse_addr)]
        base: Option<u64>,

        /// Print JSON instead of text.
        #[arg(long)]
        json: bool,
    },
}

/// One decoded word, as printed by both subcommands.
#[derive(Debug, Serialize)]
struct Row {
    /// Address the word was fetched from (dump only).
    #[serde(skip_serializing_if = "Option::is_none")]
    address: Option<u64>,
    /// Raw word in hex.
    word: String,
    /// Assembler syntax, or a `.word` directive.
    text: String,
    /// Decoded fields when the word is supported.
    #[serde(skip_serializing_if = "Option::is_none")]
    fields: Option<Fields>,
    /// Reason the word was rejected.
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

/// Installs the stderr subscriber.
///
/// `-v` flags win over `RUST_LOG`; with neither, only warnings are shown.
fn init_tracing(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Loads configuration and dispatches the subcommand.
fn run(cli: Cli) -> CliResult<()> {
    let config = match &cli.config {
        Some(path) => Config::from_file(path)?,
        None => Config::default(),
    };
    debug!(?config, "configuration loaded");

    match cli.command {
        Commands::Decode { words, json } => cmd_decode(&config, &words, json),
        Commands::Dump { file, base, json } => cmd_dump(&config, &file, base, json),
    }
}

/// Decodes each word given on the command line.
fn cmd_decode(config: &Config, words: &[u32], json: bool) -> CliResult<()> {
    let decoder = Decoder::new(&config.decode);
    let rows: Vec<Row> = words
        .iter()
        .map(|&raw| decode_row(config, &decoder, None, InstructionWord::new(raw)))
        .collect();
    print_rows(&rows, json)
}

/// Loads `file` at `base` and decodes it word by word.
///
/// Trailing bytes that do not form a whole word are reported and skipped.
fn cmd_dump(config: &Config, file: &Path, base: Option<u64>, json: bool) -> CliResult<()> {
    let image = fs::read(file).map_err(|err| format!("failed to read {}: {err}", file.display()))?;
    let base = base.unwrap_or(config.memory.base);

    let mut memory = Memory::from_config(&config.memory);
    memory.load(base, &image)?;
    info!(
        path = %file.display(),
        bytes = image.len(),
        base = %format!("{base:#x}"),
        "image loaded"
    );

    let word_size = INSTRUCTION_SIZE_32 as usize;
    let whole = image.len() / word_size;
    if image.len() % word_size != 0 {
        warn!(
            trailing = image.len() % word_size,
            "image length is not a multiple of 4; ignoring trailing bytes"
        );
    }

    let decoder = Decoder::new(&config.decode);
    let mut rows = Vec::with_capacity(whole);
    for index in 0..whole as u64 {
        let pc = base + index * INSTRUCTION_SIZE_32;
        let word = memory.fetch(pc)?;
        rows.push(decode_row(config, &decoder, Some(pc), word));
    }
    print_rows(&rows, json)
}

/// Decodes one word into an output row.
fn decode_row(config: &Config, decoder: &Decoder, address: Option<u64>, word: InstructionWord) -> Row {
    let row = match decoder.decode(word) {
        Ok(inst) => Row {
            address,
            word: word.to_string(),
            text: inst.to_string(),
            fields: Some(inst.fields()),
            error: None,
        },
        Err(err) => Row {
            address,
            word: word.to_string(),
            text: disasm::disassemble_with(decoder, word),
            fields: None,
            error: Some(err.to_string()),
        },
    };
    if config.general.trace_decode {
        info!(word = %row.word, text = %row.text, "decode");
    }
    row
}

/// Prints rows as text lines or as one JSON array.
fn print_rows(rows: &[Row], json: bool) -> CliResult<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(rows)?);
        return Ok(());
    }
    for row in rows {
        let prefix = row
            .address
            .map(|addr| format!("{addr:#010x}: "))
            .unwrap_or_default();
        match &row.error {
            Some(err) => println!("{prefix}{}  {}  # {err}", row.word, row.text),
            None => println!("{prefix}{}  {}", row.word, row.text),
        }
    }
    Ok(())
}

/// Parses an instruction word: `0x`-prefixed or bare hex, or `#`-prefixed decimal.
///
/// Bare digit strings are read as hex, the way words are usually written.
fn parse_word(s: &str) -> Result<u32, String> {
    let s = s.trim().replace('_', "");
    let parsed = if let Some(dec) = s.strip_prefix('#') {
        dec.parse::<u32>()
    } else {
        let hex = s
            .strip_prefix("0x")
            .or_else(|| s.strip_prefix("0X"))
            .unwrap_or(&s);
        u32::from_str_radix(hex, 16)
    };
    parsed.map_err(|err| format!("invalid instruction word `{s}`: {err}"))
}

/// Parses an address: `0x`-prefixed hex or decimal.
fn parse_addr(s: &str) -> Result<u64, String> {
    let s = s.trim().replace('_', "");
    let parsed = match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        Some(hex) => u64::from_str_radix(hex, 16),
        None => s.parse::<u64>(),
    };
    parsed.map_err(|err| format!("invalid address `{s}`: {err}"))
}
