use std::fmt::{self, Display};
use std::path::Path;
use thiserror::Error;

pub mod config;
pub mod scanner;

pub use config::ScanConfig;
pub use scanner::scan;

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("cannot determine file type")]
    UnknownFormat,
    #[error("file encoding error")]
    EncodeError(#[from] std::str::Utf8Error),
}

/// Decode raw file bytes into text the scanner can consume.
pub fn decode(bytes: &[u8]) -> Result<&str, ScanError> {
    Ok(std::str::from_utf8(bytes)?)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Format {
    Fasta,
    Fastq,
}

impl Format {
    /// Sniff the format from the first non-whitespace character of the input.
    pub fn detect(data: &str) -> Option<Format> {
        match data.trim_start().chars().next()? {
            '>' => Some(Format::Fasta),
            '@' => Some(Format::Fastq),
            _ => None,
        }
    }

    /// Detect the format from a file extension
    /// (`.fa`/`.fasta` or `.fq`/`.fastq`, any case).
    pub fn from_extension<P: AsRef<Path>>(path: P) -> Option<Format> {
        let ext = path.as_ref().extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "fa" | "fasta" => Some(Format::Fasta),
            "fq" | "fastq" => Some(Format::Fastq),
            _ => None,
        }
    }
}

/// A single parsed record, annotated with its 1-based source line numbers.
/// `quality` is only present for FASTQ input.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Record {
    pub header_line: usize,
    pub header: String,
    pub sequence_line: usize,
    pub sequence: String,
    pub quality: Option<String>,
}

impl Record {
    pub fn new() -> Self {
        Record::default()
    }

    pub fn len(&self) -> usize {
        self.sequence.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }
}

impl Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.quality {
            Some(qual) => write!(f, "@{}\n{}\n+\n{}", self.header, self.sequence, qual),
            None => write!(f, ">{}\n{}", self.header, self.sequence),
        }
    }
}

/// Scan with default configuration: format sniffed from the input,
/// no target filter, no hooks.
pub fn scan_with_defaults(data: &str) -> Vec<Record> {
    scanner::scan(data, &ScanConfig::default())
}

/// Scan and keep only records whose header contains `target`.
/// `format: None` sniffs the format from the input.
pub fn find_by_name(
    data: &str,
    format: Option<Format>,
    target: &str,
    case_sensitive: bool,
) -> Vec<Record> {
    let config = ScanConfig {
        format,
        target: Some(target),
        case_sensitive,
        ..ScanConfig::default()
    };
    scanner::scan(data, &config)
}

#[cfg(test)]
mod tests {
    use crate::*;

    #[test]
    fn detect_by_content() {
        assert_eq!(Format::detect(">chr1\nACGT\n"), Some(Format::Fasta));
        assert_eq!(Format::detect("  \n@read.1\nACGT\n"), Some(Format::Fastq));
        assert_eq!(Format::detect("not a sequence file"), None);
        assert_eq!(Format::detect(""), None);
    }

    #[test]
    fn detect_by_extension() {
        assert_eq!(Format::from_extension("genome.fasta"), Some(Format::Fasta));
        assert_eq!(Format::from_extension("reads.FQ"), Some(Format::Fastq));
        assert_eq!(Format::from_extension("notes.txt"), None);
        assert_eq!(Format::from_extension("no_extension"), None);
    }

    #[test]
    fn display_round_trips_both_formats() {
        let fa = Record {
            header_line: 1,
            header: String::from("a"),
            sequence_line: 2,
            sequence: String::from("ACGT"),
            quality: None,
        };
        assert_eq!(format!("{fa}"), ">a\nACGT");

        let fq = Record {
            quality: Some(String::from("IIII")),
            ..fa
        };
        assert_eq!(format!("{fq}"), "@a\nACGT\n+\nIIII");
    }

    #[test]
    fn decode_rejects_non_utf8() {
        assert!(matches!(
            decode(&[0xff, 0xfe, 0x00]),
            Err(ScanError::EncodeError(_))
        ));
        assert_eq!(decode(b">a\nACGT\n").unwrap(), ">a\nACGT\n");
    }

    #[test]
    fn find_by_name_filters() {
        let data = ">sample_01\nACGT\n>other\nGGGG\n";
        let hits = find_by_name(data, None, "sample", true);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].header, "sample_01");
    }
}
