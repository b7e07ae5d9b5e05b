use std::sync::Arc;
use std::time::Instant;

use query::QuerySpec;
use tracing::{debug, info, warn, Instrument, Level};

use crate::classify::{classify, LookupOutcome};
use crate::error::LookupError;
use crate::request::LookupRequest;
use crate::transport::LookupTransport;

/// Runs a single lookup and classifies what came back.
#[derive(Clone)]
pub struct LookupExecutor {
    transport: Arc<dyn LookupTransport>,
}

impl LookupExecutor {
    pub fn new(transport: Arc<dyn LookupTransport>) -> Self {
        Self { transport }
    }

    /// Look up `spec` using `token` as the bearer credential.
    ///
    /// `Err` only for an empty token; everything the remote side does is
    /// reported through [`LookupOutcome`], including failures.
    pub async fn execute(
        &self,
        spec: &QuerySpec,
        token: &str,
    ) -> Result<LookupOutcome, LookupError> {
        if token.trim().is_empty() {
            warn!(spec = %spec, "lookup_missing_token");
            return Err(LookupError::Configuration("API token is empty".into()));
        }

        let Some(request) = LookupRequest::from_spec(spec) else {
            debug!(spec = %spec, "lookup_nothing_to_send");
            return Ok(LookupOutcome::NotFound);
        };

        let span = tracing::span!(
            Level::INFO,
            "lookup.execute",
            name = ?request.name,
            domain_name = ?request.domain_name
        );
        let start = Instant::now();
        let outcome = async {
            let outcome = classify(self.transport.send(&request, token).await);
            let elapsed_micros = start.elapsed().as_micros();
            match &outcome {
                LookupOutcome::Found(payload) => {
                    info!(organization = ?payload.name(), elapsed_micros, "lookup_found")
                }
                LookupOutcome::NotFound => debug!(elapsed_micros, "lookup_not_found"),
                LookupOutcome::Deferred => debug!(elapsed_micros, "lookup_deferred"),
                LookupOutcome::Failed(err) => warn!(error = %err, elapsed_micros, "lookup_failure"),
            }
            outcome
        }
        .instrument(span)
        .await;

        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport::RawResponse;
    use async_trait::async_trait;
    use query::QueryParameter;
    use std::sync::Mutex;

    /// Replies with a fixed response and records what it was asked.
    struct Scripted {
        reply: Result<RawResponse, LookupError>,
        seen: Mutex<Vec<(LookupRequest, String)>>,
    }

    impl Scripted {
        fn new(reply: Result<RawResponse, LookupError>) -> Arc<Self> {
            Arc::new(Self {
                reply,
                seen: Mutex::new(Vec::new()),
            })
        }

        fn calls(&self) -> Vec<(LookupRequest, String)> {
            self.seen.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl LookupTransport for Scripted {
        async fn send(
            &self,
            request: &LookupRequest,
            token: &str,
        ) -> Result<RawResponse, LookupError> {
            self.seen
                .lock()
                .unwrap()
                .push((request.clone(), token.to_owned()));
            self.reply.clone()
        }
    }

    fn spec() -> QuerySpec {
        QuerySpec::new([
            (QueryParameter::Name, "Acme"),
            (QueryParameter::Domain, "acme.test"),
        ])
        .unwrap()
    }

    #[tokio::test]
    async fn found_record_is_returned() {
        let transport = Scripted::new(Ok(RawResponse::new(200, r#"{"name":"Acme"}"#)));
        let executor = LookupExecutor::new(transport.clone());

        let outcome = executor.execute(&spec(), "tok").await.unwrap();
        match outcome {
            LookupOutcome::Found(payload) => assert_eq!(payload.name(), Some("Acme")),
            other => panic!("expected Found, got {other:?}"),
        }

        let calls = transport.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].0.name.as_deref(), Some("Acme"));
        assert_eq!(calls[0].0.domain_name.as_deref(), Some("acme.test"));
        assert_eq!(calls[0].1, "tok");
    }

    #[tokio::test]
    async fn empty_token_fails_before_any_call() {
        let transport = Scripted::new(Ok(RawResponse::new(200, r#"{"name":"Acme"}"#)));
        let executor = LookupExecutor::new(transport.clone());

        for token in ["", "   "] {
            let err = executor.execute(&spec(), token).await.unwrap_err();
            assert!(err.is_configuration());
        }
        assert!(transport.calls().is_empty());
    }

    #[tokio::test]
    async fn blank_spec_is_not_found_without_a_call() {
        let transport = Scripted::new(Ok(RawResponse::new(500, "")));
        let executor = LookupExecutor::new(transport.clone());
        let blank = QuerySpec::new([(QueryParameter::Name, "  ")]).unwrap();

        let outcome = executor.execute(&blank, "tok").await.unwrap();
        assert_eq!(outcome, LookupOutcome::NotFound);
        assert!(transport.calls().is_empty());
    }

    #[tokio::test]
    async fn deferred_and_failures_are_outcomes_not_errors() {
        let deferred = LookupExecutor::new(Scripted::new(Ok(RawResponse::new(202, ""))));
        assert_eq!(
            deferred.execute(&spec(), "tok").await.unwrap(),
            LookupOutcome::Deferred
        );

        let down = LookupExecutor::new(Scripted::new(Err(LookupError::Transport(
            "timed out".into(),
        ))));
        assert_eq!(
            down.execute(&spec(), "tok").await.unwrap(),
            LookupOutcome::Failed(LookupError::Transport("timed out".into()))
        );

        let broken = LookupExecutor::new(Scripted::new(Ok(RawResponse::new(500, "oops"))));
        assert_eq!(
            broken.execute(&spec(), "tok").await.unwrap(),
            LookupOutcome::Failed(LookupError::UnexpectedStatus {
                status: 500,
                body: "oops".into()
            })
        );
    }
}
