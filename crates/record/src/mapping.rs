use std::collections::{BTreeMap, BTreeSet};
use std::sync::Arc;

use chrono::NaiveDate;
use tracing::trace;

use crate::fragment::{CodeOrigin, EntityCode, EntityFragment, EntityType, PropertyValue, Tag};
use crate::payload::{EmployeeCount, OrganizationPayload};
use crate::social::SocialKeyResolver;
use crate::vocabulary::{OrganizationVocabulary, VocabularyKey};

/// Derive the origin code for a payload.
///
/// First present of tax id, ticker symbol, website URL gives an
/// enrichment-origin code; otherwise the name is used with a name origin.
/// A record with no name either gets a name-origin code with an empty value;
/// such records never leave the lookup as found.
pub fn origin_code(payload: &OrganizationPayload) -> EntityCode {
    let identifier = present(payload.tax_id.as_deref())
        .or_else(|| present(payload.ticker_symbol.as_deref()))
        .or_else(|| present(payload.website_url()));

    match identifier {
        Some(value) => EntityCode::organization(CodeOrigin::Enrichment, value),
        None => EntityCode::organization(CodeOrigin::Name, payload.name().unwrap_or_default()),
    }
}

/// Maps enrichment records into [`EntityFragment`]s.
///
/// Pure: the same payload always yields the same fragment.
#[derive(Clone)]
pub struct ResponseMapper {
    vocabulary: OrganizationVocabulary,
    social: Arc<dyn SocialKeyResolver>,
}

impl ResponseMapper {
    /// Mapper using the built-in social-profile table.
    pub fn new() -> Self {
        let vocabulary = OrganizationVocabulary::new();
        let social = Arc::new(vocabulary.social_profiles.clone());
        Self { vocabulary, social }
    }

    /// Mapper with a host-supplied social-key resolver.
    pub fn with_social_resolver(social: Arc<dyn SocialKeyResolver>) -> Self {
        Self {
            vocabulary: OrganizationVocabulary::new(),
            social,
        }
    }

    pub fn vocabulary(&self) -> &OrganizationVocabulary {
        &self.vocabulary
    }

    pub fn map_to_fragment(&self, payload: &OrganizationPayload) -> EntityFragment {
        let vocab = &self.vocabulary;
        let code = origin_code(payload);
        let mut props = PropertyWriter::default();

        props.text(&vocab.name, payload.name.as_deref());
        props.text(&vocab.description, payload.description.as_deref());

        if let Some(contact) = &payload.contact_info {
            props.text(&vocab.contact_email, contact.contact_email.as_deref());
            props.text(&vocab.contact_phone_number, contact.contact_phone_number.as_deref());
            props.text(&vocab.fax, contact.fax.as_deref());
            props.text(&vocab.phone_number, contact.phone_number.as_deref());
        }

        match &payload.employee_count {
            Some(EmployeeCount::Count(n)) => props.number(&vocab.employee_count, *n),
            Some(EmployeeCount::Label(label)) => props.text(&vocab.employee_count, Some(label.as_str())),
            None => {}
        }
        props.date(&vocab.founding_date, payload.founding_date);
        props.text(&vocab.industry, payload.industry.as_deref());
        props.text(&vocab.tax_id, payload.tax_id.as_deref());
        props.text(&vocab.ticker_symbol, payload.ticker_symbol.as_deref());
        props.text(&vocab.vat_number, payload.vat_number.as_deref());
        props.text(&vocab.logo, payload.logo.as_deref());

        props.joined(&vocab.domains, &payload.domains, ";");
        props.joined(&vocab.tags, &payload.tags, ";");
        props.joined(&vocab.technologies, &payload.technologies, ", ");
        props.text(&vocab.website, payload.website_url());
        props.joined(&vocab.uris, &payload.uris, ";");

        for profile in &payload.social_profiles {
            match self.social.resolve(&profile.profile_type) {
                Some(key) => props.text(&key, Some(profile.value.as_str())),
                None => trace!(profile_type = %profile.profile_type, "social_profile_unmapped"),
            }
        }

        let tags = payload.tags.iter().cloned().map(Tag).collect();
        let external_references = payload.uris.clone();

        let mut codes = BTreeSet::new();
        codes.insert(code.clone());

        EntityFragment {
            entity_type: EntityType::Organization,
            origin_code: code,
            name: payload.name().map(str::to_owned),
            description: present(payload.description.as_deref()).map(str::to_owned),
            properties: props.into_inner(),
            codes,
            tags,
            external_references,
            preview_image: None,
        }
    }
}

impl Default for ResponseMapper {
    fn default() -> Self {
        Self::new()
    }
}

fn present(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

/// Property map that refuses absent and blank values.
#[derive(Default)]
struct PropertyWriter {
    properties: BTreeMap<String, PropertyValue>,
}

impl PropertyWriter {
    fn text(&mut self, key: &VocabularyKey, value: Option<&str>) {
        if let Some(value) = present(value) {
            self.properties
                .insert(key.key().to_owned(), PropertyValue::Text(value.to_owned()));
        }
    }

    fn number(&mut self, key: &VocabularyKey, value: u64) {
        self.properties
            .insert(key.key().to_owned(), PropertyValue::Number(value));
    }

    fn date(&mut self, key: &VocabularyKey, value: Option<NaiveDate>) {
        if let Some(value) = value {
            self.properties
                .insert(key.key().to_owned(), PropertyValue::Date(value));
        }
    }

    fn joined(&mut self, key: &VocabularyKey, values: &[String], separator: &str) {
        let parts: Vec<&str> = values
            .iter()
            .map(String::as_str)
            .filter(|v| !v.trim().is_empty())
            .collect();
        if !parts.is_empty() {
            self.properties
                .insert(key.key().to_owned(), PropertyValue::Text(parts.join(separator)));
        }
    }

    fn into_inner(self) -> BTreeMap<String, PropertyValue> {
        self.properties
    }
}
