use crate::config::{self, ScanConfig};
use crate::{Format, Record};

#[derive(Clone, Copy, Debug, PartialEq)]
enum State {
    SeekHeader,
    InHeader,
    InSequence,
    InPlusLine,
    InQuality,
}

/// Iterator over physical lines, splitting on `\n`, `\r\n`, or a lone `\r`.
/// A `\r\n` pair counts as a single line ending, so line numbers come out
/// the same for Windows and Unix renditions of the same content.
struct PhysicalLines<'a> {
    rest: &'a str,
}

fn physical_lines(data: &str) -> PhysicalLines<'_> {
    PhysicalLines { rest: data }
}

impl<'a> Iterator for PhysicalLines<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        if self.rest.is_empty() {
            return None;
        }
        let bytes = self.rest.as_bytes();
        let mut end = 0;
        while end < bytes.len() && bytes[end] != b'\n' && bytes[end] != b'\r' {
            end += 1;
        }
        let line = &self.rest[..end];
        if end < bytes.len() {
            if bytes[end] == b'\r' && bytes.get(end + 1) == Some(&b'\n') {
                end += 2;
            } else {
                end += 1;
            }
        }
        self.rest = &self.rest[end..];
        Some(line)
    }
}

/// The record currently being accumulated. Sequence lines are kept as spans
/// into the input and joined once at finalize time.
struct Pending<'a> {
    header_line: usize,
    header: String,
    sequence_line: usize,
    seq_parts: Vec<&'a str>,
    quality: Option<&'a str>,
}

impl<'a> Pending<'a> {
    fn open(line: &str, line_no: usize, config: &ScanConfig) -> Self {
        let mut chars = line.chars();
        chars.next(); // drop the sigil
        let raw = chars.as_str();
        let header = match config.on_header {
            Some(hook) => hook(raw, line_no),
            None => config::trim_header(raw),
        };
        Pending {
            header_line: line_no,
            header,
            sequence_line: line_no + 1,
            seq_parts: Vec::new(),
            quality: None,
        }
    }

    /// Apply the pending transforms exactly once, then push the record iff
    /// its header is non-empty and it passes the target filter and the
    /// record hook.
    fn finalize(self, config: &ScanConfig, line_no: usize, out: &mut Vec<Record>) {
        if self.header.is_empty() {
            return;
        }
        let record = Record {
            header_line: self.header_line,
            header: self.header,
            sequence_line: self.sequence_line,
            sequence: config::normalize_sequence(&self.seq_parts.concat()),
            quality: self.quality.map(config::trim_quality),
        };
        if !config.matches_target(&record.header) {
            return;
        }
        if let Some(hook) = config.on_record {
            if !hook(&record, line_no) {
                return;
            }
        }
        out.push(record);
    }
}

fn finalize_into(
    pending: &mut Option<Pending>,
    config: &ScanConfig,
    line_no: usize,
    out: &mut Vec<Record>,
) {
    if let Some(rec) = pending.take() {
        rec.finalize(config, line_no, out);
    }
}

fn infer_format(data: &str, config: &ScanConfig) -> Format {
    match data.trim_start().chars().next() {
        Some(c) if c == config.fastq_sigil => Format::Fastq,
        _ => Format::Fasta,
    }
}

/// Scan a complete in-memory buffer and return its records in input order.
///
/// One linear pass over the physical lines; state persists across lines and
/// each line's first character decides the transition. Malformed content
/// never raises an error: out-of-place lines leave the scanner in (or return
/// it to) a safe state and are dropped. FASTQ records are assumed to have
/// exactly one sequence line and one quality line; only FASTA sequences
/// accumulate across lines.
pub fn scan(data: &str, config: &ScanConfig) -> Vec<Record> {
    let format = config.format.unwrap_or_else(|| infer_format(data, config));
    let header_sigil = match format {
        Format::Fasta => config.header_sigil,
        Format::Fastq => config.fastq_sigil,
    };

    let mut out = Vec::new();
    let mut state = State::SeekHeader;
    let mut pending: Option<Pending> = None;
    let mut line_no = 0usize;

    for line in physical_lines(data) {
        line_no += 1;
        // blank lines are counted but never transition; any open buffer
        // simply stays open
        if line.trim().is_empty() {
            continue;
        }
        match state {
            State::SeekHeader => {
                if line.starts_with(header_sigil) {
                    finalize_into(&mut pending, config, line_no, &mut out);
                    pending = Some(Pending::open(line, line_no, config));
                    state = State::InHeader;
                }
                // pre-header garbage is dropped
            }
            State::InHeader => {
                if line.starts_with(header_sigil) {
                    finalize_into(&mut pending, config, line_no, &mut out);
                    pending = Some(Pending::open(line, line_no, config));
                } else if format == Format::Fastq && line.starts_with(config.plus_sigil) {
                    state = State::InPlusLine;
                } else {
                    if let Some(rec) = pending.as_mut() {
                        rec.seq_parts.push(line);
                        rec.sequence_line = line_no;
                    }
                    state = match format {
                        Format::Fastq => State::InPlusLine,
                        Format::Fasta => State::InSequence,
                    };
                }
            }
            State::InSequence => {
                if line.starts_with(header_sigil) {
                    finalize_into(&mut pending, config, line_no, &mut out);
                    pending = Some(Pending::open(line, line_no, config));
                    state = State::InHeader;
                } else if let Some(rec) = pending.as_mut() {
                    rec.seq_parts.push(line);
                }
            }
            State::InPlusLine => {
                if line.starts_with(config.plus_sigil) {
                    state = State::InQuality;
                }
                // a malformed separator line is skipped, not an error
            }
            State::InQuality => {
                if line.starts_with(config.fastq_sigil) {
                    finalize_into(&mut pending, config, line_no, &mut out);
                    pending = Some(Pending::open(line, line_no, config));
                    state = State::InHeader;
                } else {
                    if let Some(rec) = pending.as_mut() {
                        rec.quality = Some(line);
                    }
                    state = State::SeekHeader;
                }
            }
        }
    }

    finalize_into(&mut pending, config, line_no, &mut out);
    out
}
