extern crate env_logger;
#[macro_use]
extern crate log;

use std::path::{Path, PathBuf};
use std::process::exit;

use anyhow::{Context, Result};
use clap::Parser;

use tansy_scan::{find_by_name, Format, ScanError};

mod input;

const PREVIEW_LEN: usize = 50;

#[derive(Parser, Debug)]
#[command(author, version, about = "Search FASTA/FASTQ records by partial name", long_about = None)]
struct Cli {
    /// Sequence file (.fa/.fasta/.fq/.fastq)
    file: PathBuf,

    /// Substring to match against record headers
    name: String,

    /// Match case-insensitively
    #[arg(short, long)]
    ignore_case: bool,
}

/// Extension first, content sniff as fallback.
fn detect_format(path: &Path, data: &str) -> Result<Format> {
    if let Some(format) = Format::from_extension(path) {
        return Ok(format);
    }
    Format::detect(data)
        .ok_or(ScanError::UnknownFormat)
        .with_context(|| format!("cannot determine file type for {}", path.display()))
}

fn report(matches: &[tansy_scan::Record], name: &str) {
    match matches.split_first() {
        None => println!("No sequences found containing '{name}'"),
        Some((first, rest)) => {
            let preview: String = first.sequence.chars().take(PREVIEW_LEN).collect();
            println!("Line number: {}", first.header_line);
            println!("Sequence name: {}", first.header);
            println!("Sequence data: {preview}");
            println!("Sequence length: {}", first.sequence.len());
            if let Some(qual) = &first.quality {
                println!("Quality scores: {qual}");
            }
            if !rest.is_empty() {
                println!("({} more matching record(s) not shown)", rest.len());
            }
        }
    }
}

fn try_main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_target(false)
        .init();

    let cli = Cli::parse();

    let mmap = input::open_mmapped(&cli.file)
        .with_context(|| format!("unable to read {}", cli.file.display()))?;
    let data = tansy_scan::decode(&mmap)
        .with_context(|| format!("{} is not valid UTF-8", cli.file.display()))?;

    let format = detect_format(&cli.file, data)?;
    debug!("detected {format:?} input");

    let matches = find_by_name(data, Some(format), &cli.name, !cli.ignore_case);
    report(&matches, &cli.name);

    Ok(())
}

fn main() {
    if let Err(err) = try_main() {
        error!("{err}");
        err.chain()
            .skip(1)
            .for_each(|cause| error!("  because: {cause}"));
        exit(1);
    }
}
