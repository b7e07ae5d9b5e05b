use thiserror::Error;

/// Errors surfaced by an enrichment lookup.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    /// No usable API token, or a transport that could not be built.
    #[error("lookup misconfigured: {0}")]
    Configuration(String),
    /// The request never produced a usable response: connection, timeout, or
    /// a 200 body that does not decode to an organization record.
    #[error("transport failure: {0}")]
    Transport(String),
    /// The service accepted the request and queued enrichment for later.
    #[error("enrichment queued")]
    Deferred,
    /// Any status outside the known set.
    #[error("unexpected status {status}: {body}")]
    UnexpectedStatus { status: u16, body: String },
}

impl LookupError {
    /// Whether this error belongs in error logs. Deferred lookups are
    /// postponed, not failed, and are routine.
    pub fn is_loggable(&self) -> bool {
        !matches!(self, LookupError::Deferred)
    }

    pub fn is_configuration(&self) -> bool {
        matches!(self, LookupError::Configuration(_))
    }
}
