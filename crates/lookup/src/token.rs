use std::sync::atomic::{AtomicUsize, Ordering};

use crate::error::LookupError;

/// Source of API credentials, one per lookup.
pub trait TokenProvider: Send + Sync {
    fn next_token(&self) -> Result<String, LookupError>;
}

/// Hands out tokens in order, wrapping forever.
///
/// The cursor is a single atomic counter, so concurrent callers each claim a
/// distinct index. Tokens are never validated or retired.
#[derive(Debug, Default)]
pub struct RoundRobinTokenProvider {
    tokens: Vec<String>,
    cursor: AtomicUsize,
}

impl RoundRobinTokenProvider {
    pub fn new<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            tokens: tokens.into_iter().map(Into::into).collect(),
            cursor: AtomicUsize::new(0),
        }
    }

    /// Split a `,` or `;` delimited list. Entries are trimmed and blanks dropped.
    ///
    /// ```
    /// use lookup::{RoundRobinTokenProvider, TokenProvider};
    ///
    /// let tokens = RoundRobinTokenProvider::from_delimited("a, b;;c");
    /// assert_eq!(tokens.len(), 3);
    /// assert_eq!(tokens.next_token().unwrap(), "a");
    /// ```
    pub fn from_delimited(raw: &str) -> Self {
        Self::new(split_tokens(raw))
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

impl TokenProvider for RoundRobinTokenProvider {
    fn next_token(&self) -> Result<String, LookupError> {
        if self.tokens.is_empty() {
            return Err(LookupError::Configuration(
                "no API tokens configured".into(),
            ));
        }
        // Relaxed is enough: only the claimed index matters, not ordering with
        // other memory.
        let index = self.cursor.fetch_add(1, Ordering::Relaxed) % self.tokens.len();
        Ok(self.tokens[index].clone())
    }
}

/// Tokens from a delimited string, in order.
pub fn split_tokens(raw: &str) -> Vec<String> {
    raw.split([',', ';'])
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_owned)
        .collect()
}
