//! Upload filename sanitization.
//!
//! Uploaded files are stored under `{receipt-millis}-{sanitized-original}`.
//! Two rules cover the two directions of the upload flow:
//!
//! - on **store**, every character outside `[A-Za-z0-9_.-]` in the client's
//!   original filename becomes `_`, so slashes and other separators can
//!   never reach the filesystem;
//! - on **retrieve**, the requested name is *stripped* to the same class,
//!   so a traversal attempt normalizes to a plain (and almost certainly
//!   absent) name instead of escaping the upload directory.

/// True for the characters allowed to appear in a stored filename.
fn is_safe_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '.' || c == '-'
}

/// Sanitize an original filename for storage: unsafe characters become `_`.
///
/// # Examples
///
/// ```
/// use stichting_core::uploads::sanitize_filename;
///
/// assert_eq!(sanitize_filename("kasboek 2026.pdf"), "kasboek_2026.pdf");
/// assert_eq!(sanitize_filename("../../etc/passwd"), ".._.._etc_passwd");
/// ```
pub fn sanitize_filename(original: &str) -> String {
    original
        .chars()
        .map(|c| if is_safe_char(c) { c } else { '_' })
        .collect()
}

/// Strip a requested filename down to the safe character class.
///
/// Unlike [`sanitize_filename`], unsafe characters are removed rather than
/// replaced, matching how stored names are resolved back from disk.
///
/// # Examples
///
/// ```
/// use stichting_core::uploads::strip_unsafe_chars;
///
/// assert_eq!(strip_unsafe_chars("../secret.txt"), "..secret.txt");
/// assert_eq!(strip_unsafe_chars("foto-1.jpg"), "foto-1.jpg");
/// ```
pub fn strip_unsafe_chars(requested: &str) -> String {
    requested.chars().filter(|&c| is_safe_char(c)).collect()
}

/// Build the stored filename for an upload received at `received_millis`
/// (Unix epoch milliseconds). The timestamp prefix makes names
/// collision-resistant across uploads of the same file.
pub fn stored_filename(received_millis: i64, original: &str) -> String {
    format!("{received_millis}-{}", sanitize_filename(original))
}
