//! Locale list entries.
//!
//! FontForge's start script needs to map a Windows locale name such as
//! `de-DE` to what the C runtime reports for it (for example
//! `German_Germany.1252`). The platform crate gathers the raw locale
//! data and asks the runtime; this module builds the request and the
//! output lines.

use std::path::PathBuf;

/// File written when no output path is given.
pub const DEFAULT_OUTPUT: &str = "localelist.txt";

/// Name the C runtime answers with when it does not support a request.
pub const CRT_FALLBACK: &str = "C";

/// One system locale as reported by the OS.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleInfo {
    /// Locale name, e.g. `en-US`.
    pub name: String,
    /// English language name, e.g. `English`.
    pub language: String,
    /// English country name, e.g. `United States`.
    pub country: String,
    /// Default ANSI code page.
    pub code_page: u32,
}

impl LocaleInfo {
    /// Returns the `<language>_<country>.<codepage>` string handed to the
    /// C runtime's `setlocale`.
    pub fn crt_request(&self) -> String {
        format!("{}_{}.{}", self.language, self.country, self.code_page)
    }
}

/// Builds one output line from the runtime's answer and the locale name.
///
/// Returns `None` when the runtime fell back to `"C"`, i.e. the locale is
/// not usable from C code.
pub fn format_entry(resolved: &str, name: &str) -> Option<String> {
    if resolved == CRT_FALLBACK || resolved.is_empty() || name.is_empty() {
        return None;
    }
    Some(format!("{resolved} {name}"))
}

/// Joins entries into the file body, one per line.
pub fn render(entries: &[String]) -> String {
    let mut body = String::new();
    for entry in entries {
        body.push_str(entry);
        body.push('\n');
    }
    body
}

/// Picks the output file: the command-line tail if it is not blank,
/// otherwise the configured name.
pub fn output_path(tail: &str, configured: &str) -> PathBuf {
    let tail = tail.trim();
    let chosen = if !tail.is_empty() {
        tail.trim_matches('"')
    } else if !configured.trim().is_empty() {
        configured.trim()
    } else {
        DEFAULT_OUTPUT
    };
    PathBuf::from(chosen)
}
