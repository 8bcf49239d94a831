//! Syntactic URL validation for the request layer.

use url::Url;

/// Checks that `input` is a parseable absolute URL with a host.
///
/// Nothing is normalized or rewritten; callers store the accepted string
/// verbatim. Reachability is never checked.
pub fn is_valid_url(input: &str) -> bool {
    match Url::parse(input) {
        Ok(url) => url.has_host(),
        Err(_) => false,
    }
}
