// src/extract/resolve.rs
// =============================================================================
// Turns a src/href value into an absolute URL.
//
// The rules are applied in order:
// 1. "http://..." or "https://..."   -> returned unchanged
// 2. "//host/path"                   -> base scheme + ":" + reference
// 3. "/path"                         -> base scheme + "://" + base host + reference
// 4. anything else                   -> base directory + reference
//
// This is a pure string transformation, no network or filesystem access.
// Note that "../" segments are kept as written; they are collapsed later
// when the extractor parses the result with the url crate.
// =============================================================================

use url::Url;

use crate::error::ResolveError;

/// Resolves `reference` against the absolute `base` URL.
///
/// Examples:
///   resolve("/p/q.png", "http://ex.com/a/b")        -> "http://ex.com/p/q.png"
///   resolve("q.png", "http://ex.com/a/b")           -> "http://ex.com/a/q.png"
///   resolve("//cdn.com/q.png", "https://ex.com/a/b") -> "https://cdn.com/q.png"
pub fn resolve(reference: &str, base: &str) -> Result<String, ResolveError> {
    let reference = reference.trim();

    if is_absolute_http(reference) {
        return Ok(reference.to_string());
    }

    // mailto:, tel:, data:, ftp: ... can never become an http(s) URL
    if has_scheme(reference) {
        return Err(ResolveError::UnsupportedScheme(reference.to_string()));
    }

    let base_url = Url::parse(base).map_err(|_| ResolveError::InvalidBase(base.to_string()))?;
    let scheme = base_url.scheme();

    if reference.starts_with("//") {
        return Ok(format!("{}:{}", scheme, reference));
    }

    let host = base_url
        .host_str()
        .ok_or_else(|| ResolveError::InvalidBase(base.to_string()))?;

    // Keep an explicit port, otherwise local servers on odd ports break
    let authority = match base_url.port() {
        Some(port) => format!("{}:{}", host, port),
        None => host.to_string(),
    };

    if reference.starts_with('/') {
        return Ok(format!("{}://{}{}", scheme, authority, reference));
    }

    // Drop the file name component of the base path
    let path = base_url.path();
    let directory = match path.rfind('/') {
        Some(idx) => &path[..=idx],
        None => "/",
    };

    Ok(format!("{}://{}{}{}", scheme, authority, directory, reference))
}

// Case-insensitive check for an absolute http(s) URL
fn is_absolute_http(reference: &str) -> bool {
    let starts_with = |prefix: &str| {
        reference
            .get(..prefix.len())
            .is_some_and(|head| head.eq_ignore_ascii_case(prefix))
    };

    starts_with("http://") || starts_with("https://")
}

// True when the reference begins with "<scheme>:" as defined by RFC 3986
fn has_scheme(reference: &str) -> bool {
    let Some((candidate, _)) = reference.split_once(':') else {
        return false;
    };

    let mut chars = candidate.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() => {}
        _ => return false,
    }

    chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_relative() {
        assert_eq!(
            resolve("/p/q.png", "http://ex.com/a/b").unwrap(),
            "http://ex.com/p/q.png"
        );
    }

    #[test]
    fn test_path_relative() {
        assert_eq!(
            resolve("q.png", "http://ex.com/a/b").unwrap(),
            "http://ex.com/a/q.png"
        );
    }

    #[test]
    fn test_path_relative_against_bare_host() {
        assert_eq!(resolve("q.png", "http://ex.com").unwrap(), "http://ex.com/q.png");
    }

    #[test]
    fn test_protocol_relative() {
        assert_eq!(
            resolve("//cdn.com/q.png", "https://ex.com/a/b").unwrap(),
            "https://cdn.com/q.png"
        );
    }

    #[test]
    fn test_absolute_unchanged() {
        assert_eq!(
            resolve("http://other.com/x.png", "http://ex.com/a").unwrap(),
            "http://other.com/x.png"
        );
        assert_eq!(
            resolve("HTTPS://Other.com/X.png", "http://ex.com/a").unwrap(),
            "HTTPS://Other.com/X.png"
        );
    }

    #[test]
    fn test_port_is_kept() {
        assert_eq!(
            resolve("/img/a.png", "http://127.0.0.1:8080/page").unwrap(),
            "http://127.0.0.1:8080/img/a.png"
        );
    }

    #[test]
    fn test_other_schemes_rejected() {
        assert_eq!(
            resolve("mailto:test@example.com", "http://ex.com/"),
            Err(ResolveError::UnsupportedScheme("mailto:test@example.com".to_string()))
        );
        assert!(resolve("data:image/png;base64,AAAA", "http://ex.com/").is_err());
    }

    #[test]
    fn test_colon_in_path_is_not_a_scheme() {
        assert_eq!(
            resolve("./a:b.png", "http://ex.com/x/").unwrap(),
            "http://ex.com/x/./a:b.png"
        );
    }

    #[test]
    fn test_invalid_base() {
        assert!(matches!(
            resolve("q.png", "not a url"),
            Err(ResolveError::InvalidBase(_))
        ));
    }
}
