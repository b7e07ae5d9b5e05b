use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::QueryError;

/// Named parameter carried by a [`QuerySpec`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum QueryParameter {
    Name,
    Domain,
    Uri,
}

impl QueryParameter {
    pub fn as_str(self) -> &'static str {
        match self {
            QueryParameter::Name => "Name",
            QueryParameter::Domain => "Domain",
            QueryParameter::Uri => "Uri",
        }
    }
}

impl fmt::Display for QueryParameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parameters for exactly one enrichment API call.
///
/// A spec always carries at least one parameter. Two specs are equal iff
/// their parameter maps are equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "BTreeMap<QueryParameter, String>", into = "BTreeMap<QueryParameter, String>")]
pub struct QuerySpec {
    parameters: BTreeMap<QueryParameter, String>,
}

impl QuerySpec {
    /// Build a spec from `(parameter, value)` pairs. Later pairs overwrite
    /// earlier ones for the same parameter.
    pub fn new<I, V>(parameters: I) -> Result<Self, QueryError>
    where
        I: IntoIterator<Item = (QueryParameter, V)>,
        V: Into<String>,
    {
        let parameters: BTreeMap<QueryParameter, String> = parameters
            .into_iter()
            .map(|(key, value)| (key, value.into()))
            .collect();
        Self::try_from(parameters)
    }

    pub(crate) fn combined(domain: &str, website: &str, name: &str) -> Self {
        Self::from_pairs([
            (QueryParameter::Domain, domain),
            (QueryParameter::Uri, website),
            (QueryParameter::Name, name),
        ])
    }

    pub(crate) fn domain(domain: &str, name: &str) -> Self {
        Self::from_pairs([(QueryParameter::Domain, domain), (QueryParameter::Name, name)])
    }

    pub(crate) fn website(website: &str, name: &str) -> Self {
        Self::from_pairs([(QueryParameter::Uri, website), (QueryParameter::Name, name)])
    }

    // Non-empty by construction: callers always pass at least one pair.
    fn from_pairs<const N: usize>(pairs: [(QueryParameter, &str); N]) -> Self {
        Self {
            parameters: pairs
                .into_iter()
                .map(|(key, value)| (key, value.to_owned()))
                .collect(),
        }
    }

    pub fn get(&self, parameter: QueryParameter) -> Option<&str> {
        self.parameters.get(&parameter).map(String::as_str)
    }

    pub fn contains(&self, parameter: QueryParameter) -> bool {
        self.parameters.contains_key(&parameter)
    }

    pub fn parameters(&self) -> &BTreeMap<QueryParameter, String> {
        &self.parameters
    }

    pub fn len(&self) -> usize {
        self.parameters.len()
    }

    /// Always false; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.parameters.is_empty()
    }
}

impl TryFrom<BTreeMap<QueryParameter, String>> for QuerySpec {
    type Error = QueryError;

    fn try_from(parameters: BTreeMap<QueryParameter, String>) -> Result<Self, Self::Error> {
        if parameters.is_empty() {
            return Err(QueryError::Empty);
        }
        Ok(Self { parameters })
    }
}

impl From<QuerySpec> for BTreeMap<QueryParameter, String> {
    fn from(spec: QuerySpec) -> Self {
        spec.parameters
    }
}

impl fmt::Display for QuerySpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (key, value) in &self.parameters {
            if !first {
                f.write_str(", ")?;
            }
            write!(f, "{key}={value}")?;
            first = false;
        }
        Ok(())
    }
}
