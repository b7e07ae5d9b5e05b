use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// What the host already knows about the organization being enriched.
///
/// Each field is a set; an absent fact is an empty set, never `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputFacts {
    #[serde(default)]
    pub organization_names: BTreeSet<String>,
    #[serde(default)]
    pub email_domains: BTreeSet<String>,
    #[serde(default)]
    pub website_urls: BTreeSet<String>,
}

impl InputFacts {
    pub fn new<N, D, W>(names: N, domains: D, websites: W) -> Self
    where
        N: IntoIterator,
        N::Item: Into<String>,
        D: IntoIterator,
        D::Item: Into<String>,
        W: IntoIterator,
        W::Item: Into<String>,
    {
        Self {
            organization_names: names.into_iter().map(Into::into).collect(),
            email_domains: domains.into_iter().map(Into::into).collect(),
            website_urls: websites.into_iter().map(Into::into).collect(),
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.organization_names.insert(name.into());
        self
    }

    pub fn with_domain(mut self, domain: impl Into<String>) -> Self {
        self.email_domains.insert(domain.into());
        self
    }

    pub fn with_website(mut self, website: impl Into<String>) -> Self {
        self.website_urls.insert(website.into());
        self
    }

    /// Domains with blank entries removed.
    pub fn domains(&self) -> Vec<&str> {
        non_blank(&self.email_domains)
    }

    /// Websites with blank entries removed.
    pub fn websites(&self) -> Vec<&str> {
        non_blank(&self.website_urls)
    }
}

// Trimming can make two entries equal, so dedupe again afterwards.
fn non_blank(values: &BTreeSet<String>) -> Vec<&str> {
    values
        .iter()
        .map(|v| v.trim())
        .filter(|v| !v.is_empty())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_deserialize_as_empty_sets() {
        let facts: InputFacts =
            serde_json::from_str(r#"{"organization_names":["Acme"]}"#).unwrap();
        assert_eq!(facts.organization_names.len(), 1);
        assert!(facts.email_domains.is_empty());
        assert!(facts.website_urls.is_empty());
    }

    #[test]
    fn blank_values_are_ignored_by_accessors() {
        let facts = InputFacts::new(["Acme"], ["", "  ", "acme.test"], [" https://acme.test "]);
        assert_eq!(facts.domains(), vec!["acme.test"]);
        assert_eq!(facts.websites(), vec!["https://acme.test"]);
    }

    #[test]
    fn builder_deduplicates() {
        let facts = InputFacts::default()
            .with_domain("acme.test")
            .with_domain("acme.test");
        assert_eq!(facts.email_domains.len(), 1);
    }
}
