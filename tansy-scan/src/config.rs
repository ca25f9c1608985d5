use crate::{Format, Record};

/// Replaces the default header transform. Receives the raw header text
/// (sigil already stripped) and the current 1-based line number.
pub type HeaderHook<'a> = &'a dyn Fn(&str, usize) -> String;

/// Per-record accept/reject test, run at finalize time after the target
/// filter. Returning false suppresses the record.
pub type RecordHook<'a> = &'a dyn Fn(&Record, usize) -> bool;

/// Configuration for one `scan` call. Immutable for the duration of the call.
pub struct ScanConfig<'a> {
    pub header_sigil: char,
    pub fastq_sigil: char,
    pub plus_sigil: char,
    /// None means the scanner sniffs the format once, before scanning.
    pub format: Option<Format>,
    pub target: Option<&'a str>,
    pub case_sensitive: bool,
    pub on_header: Option<HeaderHook<'a>>,
    pub on_record: Option<RecordHook<'a>>,
}

impl Default for ScanConfig<'_> {
    fn default() -> Self {
        ScanConfig {
            header_sigil: '>',
            fastq_sigil: '@',
            plus_sigil: '+',
            format: None,
            target: None,
            case_sensitive: true,
            on_header: None,
            on_record: None,
        }
    }
}

impl<'a> ScanConfig<'a> {
    pub fn for_format(format: Format) -> Self {
        ScanConfig {
            format: Some(format),
            ..ScanConfig::default()
        }
    }

    pub(crate) fn matches_target(&self, header: &str) -> bool {
        match self.target {
            None => true,
            Some(t) if self.case_sensitive => header.contains(t),
            Some(t) => header.to_lowercase().contains(&t.to_lowercase()),
        }
    }
}

/// Default header transform: trim surrounding whitespace.
pub fn trim_header(raw: &str) -> String {
    raw.trim().to_string()
}

/// Default sequence transform: strip all whitespace and uppercase.
pub fn normalize_sequence(raw: &str) -> String {
    raw.chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_uppercase)
        .collect()
}

/// Default quality transform: trim surrounding whitespace.
pub fn trim_quality(raw: &str) -> String {
    raw.trim().to_string()
}
