use std::fmt;

use record::OrganizationPayload;

use crate::error::LookupError;
use crate::transport::RawResponse;

/// Result of one lookup.
#[derive(Debug, Clone, PartialEq)]
pub enum LookupOutcome {
    Found(OrganizationPayload),
    NotFound,
    /// Enrichment was queued upstream; retry later.
    Deferred,
    Failed(LookupError),
}

impl LookupOutcome {
    pub fn kind(&self) -> OutcomeKind {
        match self {
            LookupOutcome::Found(_) => OutcomeKind::Found,
            LookupOutcome::NotFound => OutcomeKind::NotFound,
            LookupOutcome::Deferred => OutcomeKind::Deferred,
            LookupOutcome::Failed(_) => OutcomeKind::Failed,
        }
    }
}

/// Payload-free tag of a [`LookupOutcome`], for metrics and logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OutcomeKind {
    Found,
    NotFound,
    Deferred,
    Failed,
}

impl OutcomeKind {
    pub fn as_str(self) -> &'static str {
        match self {
            OutcomeKind::Found => "found",
            OutcomeKind::NotFound => "not_found",
            OutcomeKind::Deferred => "deferred",
            OutcomeKind::Failed => "failed",
        }
    }
}

impl fmt::Display for OutcomeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Map a transport result onto a [`LookupOutcome`].
///
/// | status | outcome |
/// |---|---|
/// | 200, decodable body | `Found` |
/// | 200, empty or `null` body | `NotFound` |
/// | 200, record without tax id, ticker, website or name | `NotFound` |
/// | 200, undecodable body | `Failed(Transport)` |
/// | 204, 404 | `NotFound` |
/// | 202 | `Deferred` |
/// | anything else | `Failed(UnexpectedStatus)` |
///
/// A transport error becomes `Failed` unchanged.
pub fn classify(result: Result<RawResponse, LookupError>) -> LookupOutcome {
    let response = match result {
        Ok(response) => response,
        Err(err) => return LookupOutcome::Failed(err),
    };

    match response.status {
        200 => decode_body(&response.body),
        202 => LookupOutcome::Deferred,
        204 | 404 => LookupOutcome::NotFound,
        status => LookupOutcome::Failed(LookupError::UnexpectedStatus {
            status,
            body: response.body,
        }),
    }
}

fn decode_body(body: &str) -> LookupOutcome {
    let body = body.trim();
    if body.is_empty() {
        return LookupOutcome::NotFound;
    }
    match serde_json::from_str::<Option<OrganizationPayload>>(body) {
        Ok(Some(payload)) if payload.has_identity() => LookupOutcome::Found(payload),
        Ok(_) => LookupOutcome::NotFound,
        Err(e) => LookupOutcome::Failed(LookupError::Transport(format!(
            "undecodable lookup response: {e}"
        ))),
    }
}
