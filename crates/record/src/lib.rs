//! Organization enrichment records and their canonical mapping.
//!
//! The enrichment API returns a loosely-typed organization record. This crate
//! owns that wire model ([`OrganizationPayload`]) and the pure mapping from it
//! into an [`EntityFragment`] the host can merge into its identity graph.
//!
//! ## Decoding
//!
//! Unknown fields are ignored and malformed nested fields decode as absent, so
//! one odd field never throws away the whole record. Every field is optional,
//! `name` included: a record identified only by its tax id still decodes.
//!
//! ## Mapping rules worth knowing
//!
//! - The origin code prefers tax id, then ticker symbol, then website URL, and
//!   falls back to a name-based code. A record with none of these has no
//!   identity ([`OrganizationPayload::has_identity`]).
//! - Absent (or blank) source fields are omitted from the property map. Nothing
//!   is ever written as an empty string or zero.
//! - Social profiles go through a [`SocialKeyResolver`]. Unknown profile types
//!   are dropped quietly.
//!
//! Same payload in, same fragment out.

mod fragment;
mod lenient;
mod mapping;
mod payload;
mod social;
mod vocabulary;

pub use crate::fragment::{
    CodeOrigin, EntityCode, EntityFragment, EntityType, PreviewImageRef, PropertyValue, Tag,
};
pub use crate::mapping::{origin_code, ResponseMapper};
pub use crate::payload::{ContactInfo, EmployeeCount, OrganizationPayload, SocialProfile, Website};
pub use crate::social::{SocialKeyResolver, SocialLinksVocabulary, SocialPlatform};
pub use crate::vocabulary::{KeyDataType, OrganizationVocabulary, VocabularyKey, CORE_PREFIX};
