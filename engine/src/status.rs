//! Status bar segments.

use folio_types::{FileKind, ViewMode};

/// Java-style string hash over UTF-16 units, with the shift done in 32 bits
/// and the sum kept wide. Stable per file name.
#[allow(clippy::cast_possible_truncation)]
fn name_hash(name: &str) -> i64 {
    name.encode_utf16().fold(0i64, |acc, unit| {
        let shifted = i64::from((acc as i32).wrapping_shl(5));
        shifted - acc + i64::from(unit)
    })
}

/// Pseudo cursor position for `name`, e.g. `Ln 35, Col 36`.
#[must_use]
pub fn cursor_label(name: &str) -> String {
    let hash = name_hash(name);
    let line = (hash % 50).abs() + 10;
    let col = (hash % 40).abs() + 1;
    format!("Ln {line}, Col {col}")
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusLine {
    pub branch: &'static str,
    pub errors: u32,
    pub warnings: u32,
    pub cursor: String,
    pub indent: &'static str,
    pub encoding: &'static str,
    pub language: &'static str,
    /// `None` for scratch files and pages without modes.
    pub mode: Option<ViewMode>,
}

impl StatusLine {
    #[must_use]
    pub fn for_file(name: &str, mode: Option<ViewMode>) -> Self {
        Self {
            branch: "main",
            errors: 0,
            warnings: 0,
            cursor: cursor_label(name),
            indent: "Spaces: 2",
            encoding: "UTF-8",
            language: FileKind::from_name(name).language(),
            mode,
        }
    }
}
