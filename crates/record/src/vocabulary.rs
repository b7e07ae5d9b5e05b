//! Vocabulary keys written by the organization mapper.
//!
//! Keys are namespaced under [`OrganizationVocabulary::PREFIX`]. Most of them
//! also map onto the host's core organization vocabulary; [`core_mappings`]
//! lists those pairs so the host can promote enrichment values.
//!
//! [`core_mappings`]: OrganizationVocabulary::core_mappings

use std::fmt;

use serde::Serialize;

use crate::social::SocialLinksVocabulary;

/// Prefix of the host's core organization vocabulary.
pub const CORE_PREFIX: &str = "organization";

/// Storage type the host should use for a key's values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum KeyDataType {
    Text,
    Email,
    PhoneNumber,
    DateTime,
    Uri,
    Integer,
}

/// A fully-qualified, typed property key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct VocabularyKey {
    key: String,
    data_type: KeyDataType,
}

impl VocabularyKey {
    pub fn new(prefix: &str, name: &str, data_type: KeyDataType) -> Self {
        Self {
            key: format!("{prefix}.{name}"),
            data_type,
        }
    }

    /// Fully-qualified key, e.g. `enrichment.organization.taxId`.
    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn data_type(&self) -> KeyDataType {
        self.data_type
    }

    /// The last dotted segment.
    pub fn local_name(&self) -> &str {
        self.key.rsplit('.').next().unwrap_or(&self.key)
    }
}

impl fmt::Display for VocabularyKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.key)
    }
}

/// Keys for the enrichment organization record.
#[derive(Debug, Clone)]
pub struct OrganizationVocabulary {
    pub name: VocabularyKey,
    pub description: VocabularyKey,
    pub contact_email: VocabularyKey,
    pub contact_phone_number: VocabularyKey,
    pub fax: VocabularyKey,
    pub phone_number: VocabularyKey,
    pub employee_count: VocabularyKey,
    pub founding_date: VocabularyKey,
    pub industry: VocabularyKey,
    pub tax_id: VocabularyKey,
    pub ticker_symbol: VocabularyKey,
    pub vat_number: VocabularyKey,
    pub logo: VocabularyKey,
    pub domains: VocabularyKey,
    pub tags: VocabularyKey,
    pub technologies: VocabularyKey,
    pub website: VocabularyKey,
    pub uris: VocabularyKey,
    pub social_profiles: SocialLinksVocabulary,
}

impl OrganizationVocabulary {
    pub const PREFIX: &'static str = "enrichment.organization";
    pub const DISPLAY_NAME: &'static str = "Enrichment Organization";

    pub fn new() -> Self {
        let key = |name: &str, data_type| VocabularyKey::new(Self::PREFIX, name, data_type);
        Self {
            name: key("name", KeyDataType::Text),
            description: key("description", KeyDataType::Text),
            contact_email: key("contactEmail", KeyDataType::Email),
            contact_phone_number: key("contactPhoneNumber", KeyDataType::PhoneNumber),
            fax: key("fax", KeyDataType::PhoneNumber),
            phone_number: key("phoneNumber", KeyDataType::PhoneNumber),
            employee_count: key("employeeCount", KeyDataType::Text),
            founding_date: key("foundingDate", KeyDataType::DateTime),
            industry: key("industry", KeyDataType::Text),
            tax_id: key("taxId", KeyDataType::Text),
            ticker_symbol: key("tickerSymbol", KeyDataType::Text),
            vat_number: key("vatNumber", KeyDataType::Text),
            logo: key("logo", KeyDataType::Uri),
            domains: key("domains", KeyDataType::Text),
            tags: key("tags", KeyDataType::Text),
            technologies: key("technologies", KeyDataType::Text),
            website: key("website", KeyDataType::Text),
            uris: key("uris", KeyDataType::Text),
            social_profiles: SocialLinksVocabulary::under(&format!("{}.socialProfiles", Self::PREFIX)),
        }
    }

    /// Every scalar and list key, in declaration order. Social keys are not
    /// included; see [`SocialLinksVocabulary::keys`].
    pub fn keys(&self) -> Vec<&VocabularyKey> {
        vec![
            &self.name,
            &self.description,
            &self.contact_email,
            &self.contact_phone_number,
            &self.fax,
            &self.phone_number,
            &self.employee_count,
            &self.founding_date,
            &self.industry,
            &self.tax_id,
            &self.ticker_symbol,
            &self.vat_number,
            &self.logo,
            &self.domains,
            &self.tags,
            &self.technologies,
            &self.website,
            &self.uris,
        ]
    }

    /// `(enrichment key, core key)` pairs the host may promote.
    ///
    /// Description, logo, tags and uris have no core counterpart.
    pub fn core_mappings(&self) -> Vec<(&VocabularyKey, String)> {
        let core = |name: &str| format!("{CORE_PREFIX}.{name}");
        let mut pairs = vec![
            (&self.name, core("organizationName")),
            (&self.contact_email, core("contactEmail")),
            (&self.contact_phone_number, core("contactPhoneNumber")),
            (&self.fax, core("fax")),
            (&self.phone_number, core("phoneNumber")),
            (&self.employee_count, core("employeeCount")),
            (&self.founding_date, core("foundingDate")),
            (&self.industry, core("industry")),
            (&self.tax_id, core("taxId")),
            (&self.ticker_symbol, core("tickerSymbol")),
            (&self.vat_number, core("vatNumber")),
            (&self.domains, core("emailDomainNames")),
            (&self.technologies, core("usedTechnologies")),
            (&self.website, core("website")),
        ];
        pairs.extend(
            self.social_profiles
                .entries()
                .map(|(platform, key)| (key, core(&format!("social.{}", platform.key_name())))),
        );
        pairs
    }

    /// Core key for a fully-qualified enrichment key, if one exists.
    pub fn core_key_for(&self, key: &str) -> Option<String> {
        self.core_mappings()
            .into_iter()
            .find(|(enrichment, _)| enrichment.key() == key)
            .map(|(_, core)| core)
    }
}

impl Default for OrganizationVocabulary {
    fn default() -> Self {
        Self::new()
    }
}
