//! nexseq - NEXUS alignment converter
//!
//! Reads the DATA block of a NEXUS file and writes it back, re-wrapped, as
//! NEXUS or as FASTA.
//!
//! ## Usage
//!
//! ```bash
//! nexseq input.nex                     # re-wrapped NEXUS on stdout
//! nexseq input.nex -w 60 -o out.nex    # 60-column lines
//! nexseq input.nex -t fasta -o out.fa  # FASTA
//! ```
//!
//! Set `RUST_LOG=debug` to trace parsing.

// Use jemalloc for better memory management (returns memory to OS)
#[cfg(not(windows))]
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};

use nexseq::document::{Mode, NexusFile};
use nexseq::model::Entry;
use nexseq::nexus::{DEFAULT_ENDLINE, DEFAULT_WRAP_AT};

/// Output format for command line
#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    /// NEXUS DATA block, non-interleaved
    Nexus,
    /// FASTA, one line per sequence
    Fasta,
}

/// nexseq - read a NEXUS alignment and write it as NEXUS or FASTA
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// NEXUS file to read
    file: PathBuf,

    /// Output file. Use "-" for stdout.
    #[arg(short = 'o', long = "output", default_value = "-")]
    output: String,

    /// Output format
    #[arg(short = 't', long = "to", value_enum, default_value = "nexus")]
    to: OutputFormat,

    /// Line width of NEXUS matrix lines
    #[arg(short = 'w', long = "wrap-at", default_value_t = DEFAULT_WRAP_AT)]
    wrap_at: usize,
}

fn open_output(output: &str) -> Result<Box<dyn Write>> {
    if output == "-" {
        Ok(Box::new(BufWriter::new(io::stdout())))
    } else {
        let file = File::create(output).with_context(|| format!("Cannot create {}", output))?;
        Ok(Box::new(BufWriter::new(file)))
    }
}

fn write_nexus(entries: &[Entry], out: Box<dyn Write>, wrap_at: usize) -> Result<()> {
    let mut doc = NexusFile::to_writer(out);
    for entry in entries {
        doc.write_wrapped(entry, wrap_at, DEFAULT_ENDLINE)?;
    }
    doc.close()?;
    Ok(())
}

fn write_fasta(entries: &[Entry], mut out: Box<dyn Write>) -> Result<()> {
    for entry in entries {
        writeln!(out, ">{}", entry.name)?;
        writeln!(out, "{}", entry.sequence)?;
    }
    out.flush()?;
    Ok(())
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    if args.wrap_at < 10 {
        anyhow::bail!("Wrap width must be at least 10 (got {})", args.wrap_at);
    }

    let entries = NexusFile::with_open(&args.file, Mode::Read, |f| f.read_entries())
        .with_context(|| format!("Failed to read {}", args.file.display()))?;

    let out = open_output(&args.output)?;
    match args.to {
        OutputFormat::Nexus => write_nexus(&entries, out, args.wrap_at)?,
        OutputFormat::Fasta => write_fasta(&entries, out)?,
    }

    if args.output != "-" {
        eprintln!("Wrote {} sequences to {}", entries.len(), args.output);
    }

    Ok(())
}
