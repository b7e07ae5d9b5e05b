use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use chrono::NaiveDate;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum EntityType {
    Organization,
}

impl EntityType {
    pub fn as_str(self) -> &'static str {
        match self {
            EntityType::Organization => "/Organization",
        }
    }
}

impl fmt::Display for EntityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where an [`EntityCode`] value came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum CodeOrigin {
    /// Tax id, ticker symbol, or website URL from the enrichment record.
    Enrichment,
    /// Fallback on the organization name.
    Name,
}

impl CodeOrigin {
    pub fn as_str(self) -> &'static str {
        match self {
            CodeOrigin::Enrichment => "enrichment",
            CodeOrigin::Name => "enrichment:name",
        }
    }
}

impl fmt::Display for CodeOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Stable `(type, origin, value)` identity of an organization.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct EntityCode {
    pub entity_type: EntityType,
    pub origin: CodeOrigin,
    pub value: String,
}

impl EntityCode {
    pub fn organization(origin: CodeOrigin, value: impl Into<String>) -> Self {
        Self {
            entity_type: EntityType::Organization,
            origin,
            value: value.into(),
        }
    }
}

impl fmt::Display for EntityCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}#{}:{}", self.entity_type, self.origin, self.value)
    }
}

/// Typed property value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum PropertyValue {
    Text(String),
    Number(u64),
    Date(NaiveDate),
}

impl PropertyValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            PropertyValue::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for PropertyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PropertyValue::Text(s) => f.write_str(s),
            PropertyValue::Number(n) => write!(f, "{n}"),
            PropertyValue::Date(d) => write!(f, "{}", d.format("%Y-%m-%d")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Tag(pub String);

impl Tag {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Where the host can fetch the organization's logo, and the header it must
/// send to do so.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PreviewImageRef {
    pub uri: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authorization: Option<String>,
}

/// Canonical entity data produced from one enrichment record.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EntityFragment {
    pub entity_type: EntityType,
    pub origin_code: EntityCode,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub properties: BTreeMap<String, PropertyValue>,
    /// Always contains [`origin_code`](Self::origin_code).
    pub codes: BTreeSet<EntityCode>,
    pub tags: Vec<Tag>,
    pub external_references: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preview_image: Option<PreviewImageRef>,
}

impl EntityFragment {
    pub fn property(&self, key: &str) -> Option<&PropertyValue> {
        self.properties.get(key)
    }

    pub fn with_preview_image(mut self, preview: Option<PreviewImageRef>) -> Self {
        self.preview_image = preview;
        self
    }
}
