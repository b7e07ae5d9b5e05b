use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::lenient;

/// Organization record returned by the enrichment lookup endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrganizationPayload {
    #[serde(default, deserialize_with = "lenient::text")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub tax_id: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub ticker_symbol: Option<String>,
    #[serde(default, deserialize_with = "lenient::optional")]
    pub website: Option<Website>,
    #[serde(default, deserialize_with = "lenient::text_list")]
    pub domains: Vec<String>,
    #[serde(default, deserialize_with = "lenient::text_list")]
    pub tags: Vec<String>,
    #[serde(default, deserialize_with = "lenient::text_list")]
    pub technologies: Vec<String>,
    #[serde(default, deserialize_with = "lenient::text_list")]
    pub uris: Vec<String>,
    #[serde(default, deserialize_with = "lenient::list")]
    pub social_profiles: Vec<SocialProfile>,
    #[serde(default, deserialize_with = "lenient::optional")]
    pub contact_info: Option<ContactInfo>,
    #[serde(default, deserialize_with = "lenient::optional")]
    pub employee_count: Option<EmployeeCount>,
    #[serde(default, deserialize_with = "lenient::date")]
    pub founding_date: Option<NaiveDate>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub industry: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub vat_number: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub logo: Option<String>,
}

impl OrganizationPayload {
    /// A payload carrying only a name; everything else absent.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            description: None,
            tax_id: None,
            ticker_symbol: None,
            website: None,
            domains: Vec::new(),
            tags: Vec::new(),
            technologies: Vec::new(),
            uris: Vec::new(),
            social_profiles: Vec::new(),
            contact_info: None,
            employee_count: None,
            founding_date: None,
            industry: None,
            vat_number: None,
            logo: None,
        }
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref().filter(|name| !name.trim().is_empty())
    }

    pub fn website_url(&self) -> Option<&str> {
        self.website.as_ref().and_then(|w| w.url.as_deref())
    }

    /// True when the record carries something an identity code can be built
    /// from: a tax id, ticker symbol, website or name.
    pub fn has_identity(&self) -> bool {
        [self.tax_id.as_deref(), self.ticker_symbol.as_deref(), self.website_url(), self.name()]
            .into_iter()
            .flatten()
            .any(|value| !value.trim().is_empty())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Website {
    #[serde(default, deserialize_with = "lenient::text")]
    pub url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialProfile {
    #[serde(rename = "type")]
    pub profile_type: String,
    pub value: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactInfo {
    #[serde(default, deserialize_with = "lenient::text")]
    pub contact_email: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub contact_phone_number: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub fax: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub phone_number: Option<String>,
}

/// Head count as reported upstream: an exact number or a band like `"51-200"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EmployeeCount {
    Count(u64),
    Label(String),
}
