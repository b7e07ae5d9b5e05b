//! Organization lookups against the enrichment API.
//!
//! One lookup is one authenticated GET. This crate turns a
//! [`QuerySpec`](query::QuerySpec) into query parameters, sends it through a
//! [`LookupTransport`], and classifies the response:
//!
//! - `200` with a record is [`LookupOutcome::Found`]
//! - `204`/`404`, or a `200` with nothing in it, is [`LookupOutcome::NotFound`]
//! - `202` means the service queued enrichment: [`LookupOutcome::Deferred`]
//! - anything else is [`LookupOutcome::Failed`]
//!
//! Credentials come from a [`TokenProvider`]. [`RoundRobinTokenProvider`]
//! spreads calls over several API tokens with a lock-free cursor.
//!
//! No retries happen here. A deferred lookup is for the caller to reschedule.

mod classify;
mod error;
mod executor;
mod request;
mod token;
mod transport;

pub use crate::classify::{classify, LookupOutcome, OutcomeKind};
pub use crate::error::LookupError;
pub use crate::executor::LookupExecutor;
pub use crate::request::LookupRequest;
pub use crate::token::{split_tokens, RoundRobinTokenProvider, TokenProvider};
pub use crate::transport::{
    lookup_endpoint, LookupTransport, RawResponse, ReqwestTransport, DEFAULT_BASE_URL,
    LOOKUP_PATH,
};
