use std::collections::HashSet;

use bytes::Bytes;

pub const PDF_MEDIA_TYPE: &str = "application/pdf";

/// A file as delivered by a picker or drop event, before filtering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawFile {
    pub name: String,
    /// Media type declared by the source, e.g. `application/pdf`.
    pub media_type: String,
    pub content: Bytes,
}

impl RawFile {
    pub fn new(name: impl Into<String>, media_type: impl Into<String>, content: impl Into<Bytes>) -> Self {
        Self {
            name: name.into(),
            media_type: media_type.into(),
            content: content.into(),
        }
    }

    fn is_pdf(&self) -> bool {
        let essence = self
            .media_type
            .split(';')
            .next()
            .unwrap_or(&self.media_type)
            .trim();
        essence.eq_ignore_ascii_case(PDF_MEDIA_TYPE)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateFile {
    pub name: String,
    pub byte_size: u64,
    pub content: Bytes,
}

impl CandidateFile {
    /// Identity used for deduplication: name and byte size.
    pub fn identity_key(&self) -> String {
        format!("{}::{}", self.name, self.byte_size)
    }
}

impl From<RawFile> for CandidateFile {
    fn from(raw: RawFile) -> Self {
        Self {
            name: raw.name,
            byte_size: raw.content.len() as u64,
            content: raw.content,
        }
    }
}

/// Ordered, deduplicated batch of résumés staged for submission.
///
/// Only built by [`normalize`]; callers replace it wholesale rather than
/// editing it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FileSelection {
    files: Vec<CandidateFile>,
}

impl FileSelection {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    pub fn files(&self) -> &[CandidateFile] {
        &self.files
    }

    pub fn iter(&self) -> impl Iterator<Item = &CandidateFile> {
        self.files.iter()
    }

    pub fn total_bytes(&self) -> u64 {
        self.files.iter().map(|file| file.byte_size).sum()
    }
}

/// Keeps only PDF entries and drops repeated `(name, size)` identities,
/// preserving first-occurrence order.
pub fn normalize<I>(raw_files: I) -> FileSelection
where
    I: IntoIterator<Item = RawFile>,
{
    let mut seen = HashSet::new();
    let files = raw_files
        .into_iter()
        .filter(RawFile::is_pdf)
        .map(CandidateFile::from)
        .filter(|file| seen.insert(file.identity_key()))
        .collect();
    FileSelection { files }
}

/// Human readable size label for a file chip, e.g. `1.5 KB`.
pub fn format_file_size(bytes: u64) -> String {
    const UNITS: [&str; 4] = ["B", "KB", "MB", "GB"];
    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }
    let rounded = (value * 10.0).round() / 10.0;
    format!("{rounded} {}", UNITS[unit])
}
