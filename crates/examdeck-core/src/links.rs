#![forbid(unsafe_code)]

//! Safe Exam Browser link rewriting.
//!
//! Exam links are published as ordinary `https://` URLs; clients that open
//! them through the Safe Exam Browser expect the proprietary `sebs://`
//! scheme instead. The rewrite is a pure prefix substitution, applied once
//! at startup.

/// The standard encrypted-web prefix exam links are published with.
pub const SECURE_WEB_PREFIX: &str = "https://";

/// The Safe Exam Browser scheme that replaces it.
pub const SEB_PREFIX: &str = "sebs://";

/// Rewrite an `https://` URL to the `sebs://` scheme.
///
/// Returns `None` when the URL does not carry the secure-web prefix, in
/// which case it must be left untouched.
///
/// # Example
/// ```
/// use examdeck_core::to_seb_url;
///
/// assert_eq!(
///     to_seb_url("https://example.com/x").as_deref(),
///     Some("sebs://example.com/x")
/// );
/// assert_eq!(to_seb_url("http://example.com/x"), None);
/// ```
#[must_use]
pub fn to_seb_url(href: &str) -> Option<String> {
    href.strip_prefix(SECURE_WEB_PREFIX)
        .map(|rest| format!("{SEB_PREFIX}{rest}"))
}
