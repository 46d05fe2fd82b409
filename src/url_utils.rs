//! URL Utility Functions
//!
//! Validation and resolution helpers used by the reference resolver, link
//! discovery and the crawl loop.

use url::Url;

/// Schemes that are never rewritten.
const OPAQUE_SCHEMES: &[&str] = &["data:", "javascript:", "mailto:", "tel:"];

/// Check whether a string is an absolute `http(s)` URL with a host.
#[must_use]
pub fn is_absolute_url(s: &str) -> bool {
    let s = s.trim();
    if !s.starts_with("http://") && !s.starts_with("https://") {
        return false;
    }
    Url::parse(s).is_ok_and(|url| url.host().is_some())
}

/// Whether the reference uses a scheme that must be left untouched.
#[must_use]
pub fn is_opaque_reference(s: &str) -> bool {
    let lower = s.trim_start().to_ascii_lowercase();
    OPAQUE_SCHEMES.iter().any(|scheme| lower.starts_with(scheme))
}

/// Convert a relative or absolute reference to absolute form.
///
/// Uses standard relative-URL joining against `base`: `/x` lands on the
/// origin, `x` and `../x` resolve against the page's own path. Absolute and
/// opaque references are returned unchanged, as is anything that fails to
/// join.
#[must_use]
pub fn create_absolute_url(reference: &str, base: &Url) -> String {
    let reference = reference.trim();

    if reference.is_empty() || is_opaque_reference(reference) || is_absolute_url(reference) {
        return reference.to_string();
    }

    match base.join(reference) {
        Ok(resolved) => resolved.to_string(),
        Err(_) => reference.to_string(),
    }
}

/// Scheme, host and port of a URL (`https://x.org`, `http://h:8080`).
#[must_use]
pub fn origin(url: &Url) -> String {
    url.origin().ascii_serialization()
}

/// Whether two URLs share the same host.
#[must_use]
pub fn same_host(a: &Url, b: &Url) -> bool {
    a.host_str().is_some() && a.host_str() == b.host_str()
}

/// Copy of the URL with its fragment removed.
#[must_use]
pub fn without_fragment(url: &Url) -> Url {
    let mut url = url.clone();
    url.set_fragment(None);
    url
}
