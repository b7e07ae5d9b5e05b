//! Query-candidate generation for organization enrichment.
//!
//! Given what the host already knows about an organization (names, email
//! domains, websites) this crate works out the smallest set of lookups worth
//! sending to the enrichment API.
//!
//! ## What we do here
//!
//! - **Normalize names** - NFKC, whitespace collapse, trim stray punctuation.
//!   Anything that normalizes to nothing is dropped.
//! - **Skip known names** - names the host already resolved, or that match a
//!   prior result for the same entity, never produce a query.
//! - **Combine when unambiguous** - exactly one domain and one website collapse
//!   into a single richer query; otherwise each value gets its own query so no
//!   candidate is silently lost.
//!
//! The generator is pure and lazy. Specs for a name are only built when the
//! iterator reaches that name.
//!
//! ## Example
//!
//! ```
//! use query::{generate_queries, normalize_organization_name, InputFacts, QueryParameter};
//!
//! let facts = InputFacts::default()
//!     .with_name("Acme Corp")
//!     .with_domain("acme.test")
//!     .with_website("https://acme.test/");
//!
//! let no_filter = |_: &str| false;
//! let specs: Vec<_> =
//!     generate_queries(&[], &no_filter, &normalize_organization_name, &facts).collect();
//!
//! assert_eq!(specs.len(), 1);
//! assert_eq!(specs[0].get(QueryParameter::Name), Some("Acme Corp"));
//! ```

mod error;
mod filter;
mod generator;
mod input;
mod normalize;
mod spec;

pub use crate::error::QueryError;
pub use crate::filter::{AcceptedNames, NameFilter, PriorResult};
pub use crate::generator::{generate, generate_queries, QueryCandidates};
pub use crate::input::InputFacts;
pub use crate::normalize::{normalize_organization_name, NameNormalizer};
pub use crate::spec::{QueryParameter, QuerySpec};
