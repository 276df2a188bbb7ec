//! Log sanitization utilities
//!
//! Keeps response bodies short in debug/error logs and keeps the API key out
//! of them entirely.

/// Maximum number of bytes of a response body included in log output.
const TRUNCATE_LIMIT: usize = 256;

/// Number of leading characters of a secret left visible when masking.
const SECRET_VISIBLE_PREFIX: usize = 4;

/// MSRV-compatible replacement for `str::floor_char_boundary` (stable since 1.91.0).
fn floor_char_boundary(s: &str, index: usize) -> usize {
    if index >= s.len() {
        s.len()
    } else {
        let mut i = index;
        while i > 0 && !s.is_char_boundary(i) {
            i -= 1;
        }
        i
    }
}

/// Truncate a response body for logging.
///
/// Bodies within the limit are returned as-is; longer bodies are cut at a
/// character boundary and suffixed with the total length.
pub fn truncate_for_log(s: &str) -> String {
    if s.len() <= TRUNCATE_LIMIT {
        s.to_string()
    } else {
        format!(
            "{}... [truncated, total {} bytes]",
            &s[..floor_char_boundary(s, TRUNCATE_LIMIT)],
            s.len()
        )
    }
}

/// Mask a secret for `Debug` output, keeping only a short prefix.
///
/// Short secrets are masked completely.
pub fn mask_secret(secret: &str) -> String {
    if secret.chars().count() <= SECRET_VISIBLE_PREFIX * 2 {
        "****".to_string()
    } else {
        let prefix: String = secret.chars().take(SECRET_VISIBLE_PREFIX).collect();
        format!("{prefix}****")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_body_unchanged() {
        let s = r#"{"data":[]}"#;
        assert_eq!(truncate_for_log(s), s);
    }

    #[test]
    fn body_at_limit_unchanged() {
        let s = "a".repeat(TRUNCATE_LIMIT);
        assert_eq!(truncate_for_log(&s), s);
    }

    #[test]
    fn long_body_truncated() {
        let s = "a".repeat(TRUNCATE_LIMIT + 100);
        let result = truncate_for_log(&s);
        assert!(result.ends_with(&format!("total {} bytes]", TRUNCATE_LIMIT + 100)));
        assert!(result.len() < s.len());
    }

    #[test]
    fn multibyte_body_cut_on_char_boundary() {
        // 'é' is 2 bytes; 257 of them straddle the limit
        let s = "é".repeat(257);
        let result = truncate_for_log(&s);
        assert!(result.starts_with(&"é".repeat(128)));
    }

    #[test]
    fn mask_keeps_prefix_of_long_secret() {
        assert_eq!(mask_secret("abcd1234efgh"), "abcd****");
    }

    #[test]
    fn mask_hides_short_secret() {
        assert_eq!(mask_secret("abc"), "****");
        assert_eq!(mask_secret(""), "****");
    }
}
