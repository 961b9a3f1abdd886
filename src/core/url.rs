use regex::Regex;
use std::sync::LazyLock;
use url::{Host, Url};

const YOUTUBE_DOMAINS: &[&str] = &["youtube.com", "youtu.be", "www.youtube.com"];
const ALLOWED_SCHEMES: &[&str] = &["http", "https", "ftp", "ftps"];

static VIDEO_ID_PATTERNS: LazyLock<[Regex; 2]> = LazyLock::new(|| {
    [
        Regex::new(r"(?:youtube\.com/watch\?v=|youtu\.be/|youtube\.com/embed/)([a-zA-Z0-9_-]{11})")
            .expect("valid video id pattern"),
        Regex::new(r"youtube\.com/watch\?.*&v=([a-zA-Z0-9_-]{11})")
            .expect("valid video id pattern"),
    ]
});

/// Check that `url` is a well-formed URL hosted on YouTube.
///
/// Both checks must pass: the string has to parse as a generic URL with a
/// scheme and a host, and it has to mention one of the YouTube domains.
pub fn validate(url: &str) -> bool {
    if !is_well_formed(url) {
        return false;
    }

    YOUTUBE_DOMAINS.iter().any(|domain| url.contains(domain))
}

/// Pull the 11-character video id out of the common YouTube URL shapes.
pub fn extract_video_id(url: &str) -> Option<String> {
    VIDEO_ID_PATTERNS.iter().find_map(|pattern| {
        pattern
            .captures(url)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().to_string())
    })
}

fn is_well_formed(raw: &str) -> bool {
    if raw.is_empty() || raw.contains('\\') || raw.chars().any(char::is_whitespace) {
        return false;
    }

    let Ok(parsed) = Url::parse(raw) else {
        return false;
    };

    let scheme = parsed.scheme();
    if !ALLOWED_SCHEMES.contains(&scheme) {
        return false;
    }

    // the parser forgives a missing or short "//"; require the literal authority marker
    let has_authority = raw
        .get(..scheme.len())
        .is_some_and(|prefix| prefix.eq_ignore_ascii_case(scheme))
        && raw[scheme.len()..].starts_with("://");
    if !has_authority {
        return false;
    }

    match parsed.host() {
        Some(Host::Domain(domain)) => is_valid_domain(domain),
        Some(Host::Ipv4(_)) | Some(Host::Ipv6(_)) => true,
        None => false,
    }
}

fn is_valid_domain(domain: &str) -> bool {
    if domain.eq_ignore_ascii_case("localhost") {
        return true;
    }

    let domain = domain.strip_suffix('.').unwrap_or(domain);
    let labels: Vec<&str> = domain.split('.').collect();
    if labels.len() < 2 {
        return false;
    }

    let labels_ok = labels.iter().all(|label| {
        !label.is_empty()
            && !label.starts_with('-')
            && !label.ends_with('-')
            && label
                .chars()
                .all(|c| c.is_alphanumeric() || c == '-' || c == '_')
    });

    let tld_ok = labels.last().is_some_and(|tld| {
        tld.len() >= 2 && (tld.chars().all(char::is_alphabetic) || tld.starts_with("xn--"))
    });

    labels_ok && tld_ok
}
