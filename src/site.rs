//! Documentation-site detection for the `auto` variant.

use url::Url;

use crate::options::SiteVariant;

/// Host fragments of well-known documentation sites.
pub static DOCS_DOMAINS: &[&str] = &[
    "docs.nvda.net.cn",
    "docs.pytorch.org",
    "docs.huggingface.co",
    "tensorflow.org",
    "keras.io",
    "docs.rs",
    "readthedocs.io",
    "docs.scipy.org",
    "docs.djangoproject.com",
    "docs.oracle.com",
    "developer.mozilla.org",
];

/// Whether the URL looks like a documentation page.
///
/// True when the host contains a known documentation domain or the path
/// starts with `/docs`.
#[must_use]
pub fn is_docs_url(url: &Url) -> bool {
    let host = url.host_str().unwrap_or_default();
    if DOCS_DOMAINS.iter().any(|domain| host.contains(domain)) {
        return true;
    }
    let path = url.path().to_ascii_lowercase();
    path.starts_with("/docs") || path.contains("/docs/")
}

/// Variant guessed from the URL: docs when [`is_docs_url`] holds, blog
/// otherwise.
#[must_use]
pub fn detect_variant(url: &Url) -> SiteVariant {
    if is_docs_url(url) {
        SiteVariant::Docs
    } else {
        SiteVariant::Blog
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("https://docs.pytorch.org/tutorials/", true)]
    #[case("https://transformers.readthedocs.io/en/latest/", true)]
    #[case("https://www.tensorflow.org/guide", true)]
    #[case("https://example.com/docs", true)]
    #[case("https://example.com/en/docs/intro", true)]
    #[case("https://example.com/DOCS/", true)]
    #[case("https://lmsys.org/blog/2024-07-25-sglang-llama3/", false)]
    #[case("https://example.com/documentary", false)]
    #[case("https://example.com/docsify/start", true)]
    #[case("https://example.com/guide/", false)]
    fn test_is_docs_url(#[case] url: &str, #[case] expected: bool) {
        let url = Url::parse(url).expect("valid url");
        assert_eq!(is_docs_url(&url), expected);
    }

    #[test]
    fn test_detect_variant() {
        let blog = Url::parse("https://lmsys.org/blog/post/").expect("valid url");
        assert_eq!(detect_variant(&blog), SiteVariant::Blog);
        let docs = Url::parse("https://docs.rs/url").expect("valid url");
        assert_eq!(detect_variant(&docs), SiteVariant::Docs);
    }
}
