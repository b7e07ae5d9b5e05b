mod common;

use std::sync::{Arc, Mutex};
use std::time::Duration;

use common::{ScriptedTransport, provider};
use orgenrich::{
    EnrichmentProvider, LookupMetrics, OutcomeKind, QueryParameter, QuerySpec, RawResponse,
    set_lookup_metrics,
};

#[derive(Default)]
struct Recorder {
    outcomes: Mutex<Vec<OutcomeKind>>,
}

impl LookupMetrics for Recorder {
    fn record_lookup(&self, _latency: Duration, outcome: OutcomeKind) {
        self.outcomes.lock().unwrap().push(outcome);
    }
}

// One test per binary: the recorder is process-wide.
#[tokio::test]
async fn every_search_is_recorded_with_its_outcome() {
    let recorder = Arc::new(Recorder::default());
    set_lookup_metrics(Some(recorder.clone()));

    let transport = ScriptedTransport::new(|request| {
        let status = match request.name.as_deref() {
            Some("found") => return Ok(RawResponse::new(200, r#"{"name":"Found Inc"}"#)),
            Some("queued") => 202,
            Some("missing") => 404,
            _ => 500,
        };
        Ok(RawResponse::new(status, ""))
    });
    let p = provider(&transport, &["tok"]);

    for name in ["found", "queued", "missing", "broken"] {
        let spec = QuerySpec::new([(QueryParameter::Name, name)]).unwrap();
        let _ = p.execute_search(&spec).await;
    }

    set_lookup_metrics(None);
    let spec = QuerySpec::new([(QueryParameter::Name, "found")]).unwrap();
    p.execute_search(&spec).await.unwrap();

    assert_eq!(
        *recorder.outcomes.lock().unwrap(),
        vec![
            OutcomeKind::Found,
            OutcomeKind::Deferred,
            OutcomeKind::NotFound,
            OutcomeKind::Failed,
        ]
    );
}
