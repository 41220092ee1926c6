//! URL Helpers
//!
//! Favicon and title derivation for bookmark URLs. Parse failures never
//! propagate: callers get an empty icon or the raw input back.

use url::Url;

const FAVICON_SERVICE: &str = "https://www.google.com/s2/favicons";
const FAVICON_SIZE: u32 = 32;

fn host_of(url: &str) -> Option<String> {
    let parsed = Url::parse(url.trim()).ok()?;
    parsed.host_str().filter(|h| !h.is_empty()).map(str::to_string)
}

/// Icon URL for the bookmark's host, empty when the URL has no host
pub fn get_favicon_url(url: &str) -> String {
    match host_of(url) {
        Some(host) => format!("{}?domain={}&sz={}", FAVICON_SERVICE, host, FAVICON_SIZE),
        None => String::new(),
    }
}

/// Title for a bookmark left untitled: the host without a leading `www.`.
/// Falls back to the raw input when it does not parse.
pub fn title_from_url(url: &str) -> String {
    match host_of(url) {
        Some(host) => host.strip_prefix("www.").unwrap_or(&host).to_string(),
        None => url.to_string(),
    }
}

/// Host shown in card tooltips
pub fn display_host(url: &str) -> String {
    host_of(url).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_favicon_url() {
        assert_eq!(
            get_favicon_url("https://chat.openai.com/c/123"),
            "https://www.google.com/s2/favicons?domain=chat.openai.com&sz=32"
        );
    }

    #[test]
    fn test_favicon_url_unparseable() {
        assert_eq!(get_favicon_url("not a url"), "");
        assert_eq!(get_favicon_url(""), "");
        assert_eq!(get_favicon_url("mailto:someone@example.com"), "");
    }

    #[test]
    fn test_title_strips_scheme_path_and_www() {
        assert_eq!(title_from_url("https://app.kuse.ai/path"), "app.kuse.ai");
        assert_eq!(title_from_url("https://www.genspark.ai/"), "genspark.ai");
        assert_eq!(title_from_url("http://example.com:8080/x?y=1"), "example.com");
    }

    #[test]
    fn test_title_only_strips_leading_www() {
        assert_eq!(title_from_url("https://docs.www.example.com"), "docs.www.example.com");
    }

    #[test]
    fn test_title_falls_back_to_input() {
        assert_eq!(title_from_url("kuse.ai"), "kuse.ai");
    }

    #[test]
    fn test_display_host() {
        assert_eq!(display_host("https://claude.ai/new"), "claude.ai");
        assert_eq!(display_host("??"), "");
    }
}
