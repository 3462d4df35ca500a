//! URL Codec Module
//!
//! Reversible mapping between HTTPS URLs and flat object-store keys.

use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};
use tracing::warn;
use url::Url;

use crate::error::{Result, ServiceError};

// == Public Constants ==
/// Suffix marking a stored object as a gzip-compressed artifact
pub const BLOB_SUFFIX: &str = ".gz";

// == Encode ==
/// Encodes a URL's exact string bytes for use in a flat object name.
///
/// URL-safe base64 with padding stripped; the padding is implied by the
/// encoded length and restored on decode, so one URL has exactly one key.
pub fn encode_url(url: &str) -> String {
    URL_SAFE_NO_PAD.encode(url.as_bytes())
}

// == Decode ==
/// Reverses [`encode_url`].
///
/// Canonical trailing `=` padding is accepted and stripped first, so padded
/// and unpadded spellings of the same key decode identically. Fails only on
/// input that cannot be a round trip of this codec.
pub fn decode_url(encoded: &str) -> Result<String> {
    let trimmed = encoded.trim_end_matches('=');
    let bytes = URL_SAFE_NO_PAD
        .decode(trimmed.as_bytes())
        .map_err(|e| ServiceError::Decode(format!("{encoded}: {e}")))?;
    String::from_utf8(bytes).map_err(|_| ServiceError::Decode(format!("{encoded}: not UTF-8")))
}

// == Blob Name ==
/// Derives the object name a URL is stored under.
pub fn blob_name(url: &str) -> String {
    format!("{}{}", encode_url(url), BLOB_SUFFIX)
}

/// Recovers the URL stored under an object name.
///
/// The suffix is stripped before decoding, and the decoded string must pass
/// HTTPS validation, so foreign or corrupted keys in the backend cannot be
/// served as valid URLs.
pub fn url_from_blob_name(name: &str) -> Result<String> {
    let encoded = name
        .strip_suffix(BLOB_SUFFIX)
        .ok_or_else(|| ServiceError::Decode(format!("{name}: missing {BLOB_SUFFIX} suffix")))?;
    let url = decode_url(encoded)?;
    validate_url(&url)
}

// == Validate ==
/// Validates a candidate as an HTTPS URL.
///
/// A missing `https://` prefix is prepended before parsing; the result must
/// parse with scheme exactly `https` and a non-empty host. Returns the
/// accepted string byte-for-byte (prefix included) rather than a
/// re-serialized form, so the codec round trip stays exact.
pub fn validate_url(candidate: &str) -> Result<String> {
    let url = if candidate.starts_with("https://") {
        candidate.to_string()
    } else {
        format!("https://{candidate}")
    };

    let parsed = Url::parse(&url).map_err(|e| {
        warn!("URL validation failed for {url}: {e}");
        ServiceError::InvalidUrl(url.clone())
    })?;

    if parsed.scheme() != "https" || parsed.host_str().map_or(true, str::is_empty) {
        warn!("URL validation failed: {url}");
        return Err(ServiceError::InvalidUrl(url));
    }

    Ok(url)
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roundtrip_simple_url() {
        let url = "https://example.com/article";
        assert_eq!(decode_url(&encode_url(url)).unwrap(), url);
        assert_eq!(url_from_blob_name(&blob_name(url)).unwrap(), url);
    }

    #[test]
    fn test_roundtrip_all_padding_lengths() {
        // URL lengths covering every value of length mod 4
        for url in [
            "https://a.io/",
            "https://a.io/x",
            "https://a.io/xy",
            "https://a.io/xyz",
        ] {
            assert_eq!(url_from_blob_name(&blob_name(url)).unwrap(), url);
        }
    }

    #[test]
    fn test_decode_accepts_padded_spelling() {
        // 22 bytes, so the canonical encoding carries two padding chars
        let url = "https://example.com/ab";
        let unpadded = encode_url(url);
        assert!(!unpadded.ends_with('='));

        let padding = (4 - unpadded.len() % 4) % 4;
        assert!(padding > 0);
        let padded = format!("{}{}", unpadded, "=".repeat(padding));
        assert_eq!(decode_url(&padded).unwrap(), url);
    }

    #[test]
    fn test_encode_is_injective_on_samples() {
        let urls = [
            "https://example.com/a",
            "https://example.com/b",
            "https://example.com/a/",
            "https://example.com:8443/a",
            "https://other.example.com/a",
        ];
        let keys: std::collections::HashSet<String> =
            urls.iter().map(|u| encode_url(u)).collect();
        assert_eq!(keys.len(), urls.len());
    }

    #[test]
    fn test_decode_rejects_non_base64() {
        for junk in ["not base64!!", "abc def", "%%%%", "a"] {
            assert!(
                matches!(decode_url(junk), Err(ServiceError::Decode(_))),
                "input: {junk}"
            );
        }
    }

    #[test]
    fn test_decode_rejects_non_utf8_payload() {
        let encoded = URL_SAFE_NO_PAD.encode([0xff, 0xfe, 0x80]);
        assert!(matches!(decode_url(&encoded), Err(ServiceError::Decode(_))));
    }

    #[test]
    fn test_url_from_blob_name_requires_suffix() {
        let encoded = encode_url("https://example.com");
        assert!(matches!(
            url_from_blob_name(&encoded),
            Err(ServiceError::Decode(_))
        ));
    }

    #[test]
    fn test_url_from_blob_name_rejects_non_https_payload() {
        // Well-formed base64 holding something that is not an HTTPS URL
        let name = format!("{}{}", encode_url("ftp://example.com/x"), BLOB_SUFFIX);
        assert!(url_from_blob_name(&name).is_err());
    }

    #[test]
    fn test_validate_accepts_https() {
        assert_eq!(
            validate_url("https://example.com/path?q=1").unwrap(),
            "https://example.com/path?q=1"
        );
    }

    #[test]
    fn test_validate_prepends_scheme() {
        assert_eq!(
            validate_url("example.com/path").unwrap(),
            "https://example.com/path"
        );
    }

    #[test]
    fn test_validate_accepts_host_with_port() {
        assert_eq!(
            validate_url("https://example.com:8443/x").unwrap(),
            "https://example.com:8443/x"
        );
    }

    #[test]
    fn test_validate_rejects_http() {
        assert!(matches!(
            validate_url("http://example.com"),
            Err(ServiceError::InvalidUrl(_))
        ));
    }

    #[test]
    fn test_validate_rejects_empty_and_malformed() {
        for candidate in ["", "https://", "https:///path", "https://exa mple.com"] {
            assert!(
                matches!(validate_url(candidate), Err(ServiceError::InvalidUrl(_))),
                "candidate: {candidate}"
            );
        }
    }

    #[test]
    fn test_validate_preserves_exact_bytes() {
        // No normalization: trailing slash and query order stay untouched
        let url = "https://Example.com/A/B//C?z=1&a=2";
        assert_eq!(validate_url(url).unwrap(), url);
    }
}
