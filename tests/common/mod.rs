#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use orgenrich::{
    LookupError, LookupRequest, LookupTransport, OrganizationEnrichmentProvider, RawResponse,
    RoundRobinTokenProvider,
};

type Script = dyn Fn(&LookupRequest) -> Result<RawResponse, LookupError> + Send + Sync;

/// In-memory transport: answers each request from a script and remembers
/// what it was sent.
pub struct ScriptedTransport {
    script: Box<Script>,
    calls: Mutex<Vec<(LookupRequest, String)>>,
}

impl ScriptedTransport {
    pub fn new<F>(script: F) -> Arc<Self>
    where
        F: Fn(&LookupRequest) -> Result<RawResponse, LookupError> + Send + Sync + 'static,
    {
        Arc::new(Self {
            script: Box::new(script),
            calls: Mutex::new(Vec::new()),
        })
    }

    pub fn replying(status: u16, body: &str) -> Arc<Self> {
        let body = body.to_owned();
        Self::new(move |_| Ok(RawResponse::new(status, body.clone())))
    }

    pub fn failing(message: &str) -> Arc<Self> {
        let message = message.to_owned();
        Self::new(move |_| Err(LookupError::Transport(message.clone())))
    }

    pub fn calls(&self) -> Vec<(LookupRequest, String)> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    pub fn tokens_used(&self) -> Vec<String> {
        self.calls().into_iter().map(|(_, token)| token).collect()
    }
}

#[async_trait]
impl LookupTransport for ScriptedTransport {
    async fn send(&self, request: &LookupRequest, token: &str) -> Result<RawResponse, LookupError> {
        self.calls
            .lock()
            .unwrap()
            .push((request.clone(), token.to_owned()));
        (self.script)(request)
    }
}

pub fn provider(transport: &Arc<ScriptedTransport>, tokens: &[&str]) -> OrganizationEnrichmentProvider {
    OrganizationEnrichmentProvider::new(
        transport.clone(),
        Arc::new(RoundRobinTokenProvider::new(tokens.iter().copied())),
    )
}

pub const ACME_JSON: &str = r#"{
    "name": "Acme",
    "description": "Makers of everything",
    "taxId": "DK12345678",
    "website": { "url": "https://acme.test" },
    "domains": ["acme.test"],
    "tags": ["a", "b"],
    "technologies": ["rust", "postgres"],
    "socialProfiles": [
        { "type": "LinkedIn", "value": "https://linkedin.com/company/acme" },
        { "type": "MySpace", "value": "https://myspace.test/acme" }
    ],
    "logo": "https://cdn.test/acme.png"
}"#;
