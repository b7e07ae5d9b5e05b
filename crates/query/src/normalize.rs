//! Organization name normalization.
//!
//! The host may bring its own normalizer; anything implementing
//! [`NameNormalizer`] (including a plain closure) plugs into the generator.
//! [`normalize_organization_name`] is the default.

use unicode_normalization::UnicodeNormalization;

/// Turns a raw organization name into its query form, or `None` when nothing
/// usable remains.
pub trait NameNormalizer {
    fn normalize(&self, name: &str) -> Option<String>;
}

impl<F> NameNormalizer for F
where
    F: Fn(&str) -> Option<String>,
{
    fn normalize(&self, name: &str) -> Option<String> {
        self(name)
    }
}

/// Default normalizer: NFKC, collapse whitespace, strip quotes and punctuation
/// hanging off either end. Casing is preserved since the API matches on the
/// display name.
///
/// ```
/// use query::normalize_organization_name;
///
/// assert_eq!(
///     normalize_organization_name("  \"Acme\u{00A0}  Corp.\" "),
///     Some("Acme Corp".to_string())
/// );
/// assert_eq!(normalize_organization_name(" -- "), None);
/// ```
pub fn normalize_organization_name(name: &str) -> Option<String> {
    let composed: String = name.nfkc().collect();

    let mut collapsed = String::with_capacity(composed.len());
    for segment in composed.split_whitespace() {
        if !collapsed.is_empty() {
            collapsed.push(' ');
        }
        collapsed.push_str(segment);
    }

    let trimmed = collapsed.trim_matches(is_edge_noise);
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

// Closing brackets and '&' are kept; they are meaningful in names like "Foo (UK)".
fn is_edge_noise(ch: char) -> bool {
    ch.is_whitespace() || matches!(ch, '"' | '\'' | '`' | '.' | ',' | ';' | ':' | '-' | '_' | '*')
}
