//! Rewrites between raw S3 file URLs and Notion's signed file proxy.
//!
//! Files uploaded to Notion live in a private bucket. The web client fetches
//! them through `https://www.notion.so/signed/<form-encoded S3 URL>`, which
//! redirects to a short-lived presigned link. These helpers only do the string
//! rewrite; following the redirect is left to the HTTP layer.

use crate::config::{S3_URL_PREFIX, SIGNED_URL_PREFIX};
use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Bytes left alone by `quote_plus`: alphanumerics and `_.-~`.
const QUOTE_PLUS: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'_')
    .remove(b'.')
    .remove(b'-')
    .remove(b'~');

/// Routes an S3 file URL through the signed proxy. Other URLs pass through.
///
/// ```
/// use notion_utils::urls::add_signed_prefix_as_needed;
///
/// let raw = "https://s3-us-west-2.amazonaws.com/secure.notion-static.com/a/b.png?x=1";
/// assert_eq!(
///     add_signed_prefix_as_needed(raw),
///     "https://www.notion.so/signed/https%3A%2F%2Fs3-us-west-2.amazonaws.com%2Fsecure.notion-static.com%2Fa%2Fb.png?x=1",
/// );
/// assert_eq!(add_signed_prefix_as_needed("https://example.com/x"), "https://example.com/x");
/// ```
pub fn add_signed_prefix_as_needed(url: &str) -> String {
    add_signed_prefix_with(url, S3_URL_PREFIX, SIGNED_URL_PREFIX)
}

pub fn add_signed_prefix_with(url: &str, s3_prefix: &str, signed_prefix: &str) -> String {
    if url.is_empty() || !url.starts_with(s3_prefix) {
        return url.to_string();
    }

    let (path, query) = match url.split_once('?') {
        Some((path, query)) => (path, Some(query)),
        None => (url, None),
    };
    let encoded = quote_plus(path);

    let signed = match query {
        Some(query) => format!("{}{}?{}", signed_prefix, encoded, query),
        None => format!("{}{}", signed_prefix, encoded),
    };
    tracing::trace!(from = url, to = %signed, "added signed prefix");
    signed
}

/// Undoes [`add_signed_prefix_as_needed`]. Unsigned URLs pass through.
pub fn remove_signed_prefix_as_needed(url: &str) -> String {
    remove_signed_prefix_with(url, SIGNED_URL_PREFIX)
}

pub fn remove_signed_prefix_with(url: &str, signed_prefix: &str) -> String {
    match url.strip_prefix(signed_prefix) {
        Some(rest) => {
            let unsigned = unquote_plus(rest);
            tracing::trace!(from = url, to = %unsigned, "removed signed prefix");
            unsigned
        }
        None => url.to_string(),
    }
}

fn quote_plus(s: &str) -> String {
    s.split(' ')
        .map(|part| utf8_percent_encode(part, QUOTE_PLUS).to_string())
        .collect::<Vec<_>>()
        .join("+")
}

/// `+` means space in form encoding; it must be swapped before `%2B` is decoded.
fn unquote_plus(s: &str) -> String {
    let spaced = s.replace('+', " ");
    percent_decode_str(&spaced).decode_utf8_lossy().into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    const FILE: &str =
        "https://s3-us-west-2.amazonaws.com/secure.notion-static.com/1f2e/My File.pdf";

    #[test]
    fn test_empty_url() {
        assert_eq!(add_signed_prefix_as_needed(""), "");
        assert_eq!(remove_signed_prefix_as_needed(""), "");
    }

    #[test]
    fn test_foreign_url_untouched() {
        let url = "https://images.unsplash.com/photo?w=100";
        assert_eq!(add_signed_prefix_as_needed(url), url);
        assert_eq!(remove_signed_prefix_as_needed(url), url);
    }

    #[test]
    fn test_add_encodes_path_and_keeps_query() {
        let signed = add_signed_prefix_as_needed(&format!("{}?table=block&id=42", FILE));
        assert!(signed.starts_with(SIGNED_URL_PREFIX));
        assert!(signed.ends_with("My+File.pdf?table=block&id=42"));
        assert!(signed.contains("https%3A%2F%2Fs3-us-west-2.amazonaws.com%2F"));
    }

    #[test]
    fn test_add_matches_quote_plus_for_tilde_and_star() {
        let raw = format!("{}dir/a~b c*d.png?x=1", S3_URL_PREFIX);
        let signed = add_signed_prefix_as_needed(&raw);
        assert!(signed.ends_with("%2Fdir%2Fa~b+c%2Ad.png?x=1"), "{}", signed);
        assert_eq!(remove_signed_prefix_as_needed(&signed), raw);
    }

    #[test]
    fn test_add_without_query() {
        let signed = add_signed_prefix_as_needed(FILE);
        assert!(signed.ends_with("%2FMy+File.pdf"));
        assert!(!signed.contains('?'));
    }

    #[test]
    fn test_remove_decodes_plus_and_escapes() {
        let signed = format!(
            "{}https%3A%2F%2Fhost%2Fa+b%2Bc.txt?x=1",
            SIGNED_URL_PREFIX
        );
        assert_eq!(
            remove_signed_prefix_as_needed(&signed),
            "https://host/a b+c.txt?x=1"
        );
    }

    #[test]
    fn test_sign_then_unsign_restores_url() {
        let raw = format!("{}?table=block&id=42", FILE);
        let signed = add_signed_prefix_as_needed(&raw);
        assert_eq!(remove_signed_prefix_as_needed(&signed), raw);
    }

    #[test]
    fn test_already_signed_is_not_signed_again() {
        let signed = add_signed_prefix_as_needed(FILE);
        assert_eq!(add_signed_prefix_as_needed(&signed), signed);
    }

    #[test]
    fn test_custom_prefixes() {
        let signed = add_signed_prefix_with(
            "https://bucket.example/f.png",
            "https://bucket.example/",
            "https://proxy.example/signed/",
        );
        assert_eq!(
            signed,
            "https://proxy.example/signed/https%3A%2F%2Fbucket.example%2Ff.png"
        );
        assert_eq!(
            remove_signed_prefix_with(&signed, "https://proxy.example/signed/"),
            "https://bucket.example/f.png"
        );
    }
}
