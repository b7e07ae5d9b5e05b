//! The organization enrichment provider the host talks to.
//!
//! A host drives a provider in four steps: ask it which lookups are worth
//! making ([`EnrichmentProvider::build_queries`]), run each one
//! ([`EnrichmentProvider::execute_search`]), then turn any hit into an
//! [`EntityFragment`] and an optional logo reference.

use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use lookup::{
    LookupError, LookupExecutor, LookupOutcome, LookupTransport, OutcomeKind, ReqwestTransport,
    RoundRobinTokenProvider, TokenProvider,
};
use query::{
    AcceptedNames, InputFacts, NameFilter, NameNormalizer, PriorResult, QuerySpec, generate,
    normalize_organization_name,
};
use record::{EntityFragment, EntityType, OrganizationPayload, PreviewImageRef, ResponseMapper};
use tracing::debug;
use uuid::Uuid;

use crate::MetricsSpan;
use crate::config::EnrichmentConfig;
use crate::error::EnrichError;

/// Stable identifier of this provider.
pub const PROVIDER_ID: Uuid = Uuid::from_u128(0xd57f_e28f_068e_4187_895b_f1b2_8e88_a435);

/// The only entity type this provider produces.
pub const ENTITY_TYPE: EntityType = EntityType::Organization;

static NOTHING_KNOWN: fn(&str) -> bool = |_| false;

/// What the host knows about the entity being enriched.
pub struct EnrichmentRequest<'a> {
    pub facts: InputFacts,
    /// Results this provider already produced for the entity.
    pub prior_results: Vec<PriorResult>,
    /// Host predicate for names it already resolved or excludes.
    pub filter: &'a dyn NameFilter,
}

impl EnrichmentRequest<'static> {
    /// A request with no prior results and no host filter.
    pub fn new(facts: InputFacts) -> Self {
        Self {
            facts,
            prior_results: Vec::new(),
            filter: &NOTHING_KNOWN,
        }
    }
}

impl<'a> EnrichmentRequest<'a> {
    pub fn with_prior_results(mut self, prior_results: Vec<PriorResult>) -> Self {
        self.prior_results = prior_results;
        self
    }

    pub fn with_filter<'b>(self, filter: &'b dyn NameFilter) -> EnrichmentRequest<'b> {
        EnrichmentRequest {
            facts: self.facts,
            prior_results: self.prior_results,
            filter,
        }
    }
}

/// A found organization, plus the credential that found it.
///
/// The credential is kept so the logo can be fetched with the same token.
#[derive(Clone)]
pub struct SearchResult {
    pub query: QuerySpec,
    pub payload: OrganizationPayload,
    token: String,
}

impl SearchResult {
    pub fn new(query: QuerySpec, payload: OrganizationPayload, token: impl Into<String>) -> Self {
        Self {
            query,
            payload,
            token: token.into(),
        }
    }

    /// `Authorization` header value for follow-up downloads.
    pub fn authorization(&self) -> String {
        format!("Bearer {}", self.token)
    }
}

impl fmt::Debug for SearchResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SearchResult")
            .field("query", &self.query)
            .field("payload", &self.payload)
            .field("token", &"<redacted>")
            .finish()
    }
}

/// Capability interface of an external enrichment source.
#[async_trait]
pub trait EnrichmentProvider: Send + Sync {
    fn provider_id(&self) -> Uuid;

    fn entity_type(&self) -> EntityType;

    /// Lookups worth making for this request. May be empty.
    fn build_queries(&self, request: &EnrichmentRequest<'_>) -> Vec<QuerySpec>;

    /// Run one lookup. `Ok(None)` means nothing was found. A queued
    /// enrichment comes back as [`LookupError::Deferred`].
    async fn execute_search(&self, spec: &QuerySpec)
        -> Result<Option<SearchResult>, LookupError>;

    /// Fragment for a hit, logo reference included.
    fn build_fragment(&self, result: &SearchResult) -> EntityFragment;

    /// Fragment for a hit, without the logo reference.
    fn primary_entity_metadata(&self, result: &SearchResult) -> EntityFragment;

    fn primary_preview_image(&self, result: &SearchResult) -> Option<PreviewImageRef>;
}

pub struct OrganizationEnrichmentProvider {
    executor: LookupExecutor,
    tokens: Arc<dyn TokenProvider>,
    mapper: ResponseMapper,
    normalizer: Arc<dyn NameNormalizer + Send + Sync>,
}

impl OrganizationEnrichmentProvider {
    pub fn new(transport: Arc<dyn LookupTransport>, tokens: Arc<dyn TokenProvider>) -> Self {
        Self {
            executor: LookupExecutor::new(transport),
            tokens,
            mapper: ResponseMapper::new(),
            normalizer: Arc::new(normalize_organization_name),
        }
    }

    /// HTTP transport and round-robin tokens from `config`.
    pub fn from_config(config: &EnrichmentConfig) -> Result<Self, EnrichError> {
        config.validate()?;
        let transport = ReqwestTransport::new(
            &config.base_url,
            config.timeout(),
            config.connect_timeout(),
        )?;
        let tokens = RoundRobinTokenProvider::new(config.tokens());
        debug!(
            base_url = %transport.endpoint(),
            token_count = tokens.len(),
            "provider_configured"
        );
        Ok(Self::new(Arc::new(transport), Arc::new(tokens)))
    }

    pub fn with_mapper(mut self, mapper: ResponseMapper) -> Self {
        self.mapper = mapper;
        self
    }

    pub fn with_normalizer(mut self, normalizer: Arc<dyn NameNormalizer + Send + Sync>) -> Self {
        self.normalizer = normalizer;
        self
    }
}

#[async_trait]
impl EnrichmentProvider for OrganizationEnrichmentProvider {
    fn provider_id(&self) -> Uuid {
        PROVIDER_ID
    }

    fn entity_type(&self) -> EntityType {
        ENTITY_TYPE
    }

    fn build_queries(&self, request: &EnrichmentRequest<'_>) -> Vec<QuerySpec> {
        let accepted = AcceptedNames::new(&request.prior_results, request.filter);
        let specs: Vec<QuerySpec> =
            generate(&request.facts, accepted, self.normalizer.as_ref()).collect();
        debug!(count = specs.len(), "queries_built");
        specs
    }

    async fn execute_search(
        &self,
        spec: &QuerySpec,
    ) -> Result<Option<SearchResult>, LookupError> {
        let metrics = MetricsSpan::start();
        let result = self.search(spec).await;
        if let Some(span) = metrics {
            let kind = match &result {
                Ok(Some(_)) => OutcomeKind::Found,
                Ok(None) => OutcomeKind::NotFound,
                Err(LookupError::Deferred) => OutcomeKind::Deferred,
                Err(_) => OutcomeKind::Failed,
            };
            span.record_lookup(kind);
        }
        result
    }

    fn build_fragment(&self, result: &SearchResult) -> EntityFragment {
        self.primary_entity_metadata(result)
            .with_preview_image(self.primary_preview_image(result))
    }

    fn primary_entity_metadata(&self, result: &SearchResult) -> EntityFragment {
        self.mapper.map_to_fragment(&result.payload)
    }

    fn primary_preview_image(&self, result: &SearchResult) -> Option<PreviewImageRef> {
        let logo = result.payload.logo.as_deref()?.trim();
        if logo.is_empty() {
            return None;
        }
        Some(PreviewImageRef {
            uri: logo.to_owned(),
            authorization: Some(result.authorization()),
        })
    }
}

impl OrganizationEnrichmentProvider {
    async fn search(&self, spec: &QuerySpec) -> Result<Option<SearchResult>, LookupError> {
        let token = self.tokens.next_token()?;
        match self.executor.execute(spec, &token).await? {
            LookupOutcome::Found(payload) => {
                Ok(Some(SearchResult::new(spec.clone(), payload, token)))
            }
            LookupOutcome::NotFound => Ok(None),
            LookupOutcome::Deferred => Err(LookupError::Deferred),
            LookupOutcome::Failed(err) => Err(err),
        }
    }
}
