//! Organization enrichment connector.
//!
//! This crate stitches the query generator, the lookup executor and the
//! response mapper together behind one provider a host can drive: build
//! queries from what it knows about an organization, run them against the
//! enrichment API with rotated tokens, and merge the resulting fragments.
//!
//! ```no_run
//! use orgenrich::{
//!     EnrichmentConfig, EnrichmentProvider, EnrichmentRequest, InputFacts,
//!     OrganizationEnrichmentProvider,
//! };
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let mut config = EnrichmentConfig::default();
//! config.apply_env_overrides();
//! let provider = OrganizationEnrichmentProvider::from_config(&config)?;
//!
//! let request = EnrichmentRequest::new(
//!     InputFacts::default().with_name("Acme").with_domain("acme.test"),
//! );
//! for spec in provider.build_queries(&request) {
//!     if let Some(hit) = provider.execute_search(&spec).await? {
//!         println!("{}", provider.build_fragment(&hit).origin_code);
//!     }
//! }
//! # Ok(())
//! # }
//! ```

mod config;
mod error;
mod provider;

pub use crate::config::{ConfigLoadError, ENV_API_TOKEN, ENV_BASE_URL, EnrichmentConfig};
pub use crate::error::EnrichError;
pub use crate::provider::{
    ENTITY_TYPE, EnrichmentProvider, EnrichmentRequest, OrganizationEnrichmentProvider,
    PROVIDER_ID, SearchResult,
};

pub use lookup::{
    LookupError, LookupExecutor, LookupOutcome, LookupRequest, LookupTransport, OutcomeKind,
    RawResponse, ReqwestTransport, RoundRobinTokenProvider, TokenProvider,
};
pub use query::{
    InputFacts, NameFilter, NameNormalizer, PriorResult, QueryParameter, QuerySpec,
    normalize_organization_name,
};
pub use record::{
    CodeOrigin, EntityCode, EntityFragment, EntityType, OrganizationPayload,
    OrganizationVocabulary, PreviewImageRef, PropertyValue, ResponseMapper, SocialKeyResolver,
    Tag,
};

use std::sync::{Arc, OnceLock, RwLock};
use std::time::{Duration, Instant};

/// Metrics observer for lookups.
pub trait LookupMetrics: Send + Sync {
    fn record_lookup(&self, latency: Duration, outcome: OutcomeKind);
}

/// Install or clear the global lookup metrics recorder.
pub fn set_lookup_metrics(recorder: Option<Arc<dyn LookupMetrics>>) {
    let mut guard = metrics_lock()
        .write()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    *guard = recorder;
}

fn metrics_lock() -> &'static RwLock<Option<Arc<dyn LookupMetrics>>> {
    static METRICS: OnceLock<RwLock<Option<Arc<dyn LookupMetrics>>>> = OnceLock::new();
    METRICS.get_or_init(|| RwLock::new(None))
}

fn metrics_recorder() -> Option<Arc<dyn LookupMetrics>> {
    let guard = metrics_lock()
        .read()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    guard.clone()
}

pub(crate) struct MetricsSpan {
    recorder: Arc<dyn LookupMetrics>,
    start: Instant,
}

impl MetricsSpan {
    pub(crate) fn start() -> Option<Self> {
        metrics_recorder().map(|recorder| Self {
            recorder,
            start: Instant::now(),
        })
    }

    pub(crate) fn record_lookup(self, outcome: OutcomeKind) {
        self.recorder.record_lookup(self.start.elapsed(), outcome);
    }
}
