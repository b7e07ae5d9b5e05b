use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// Host-side predicate: is this name already resolved or explicitly excluded?
pub trait NameFilter {
    fn is_known_or_filtered(&self, name: &str) -> bool;
}

impl<F> NameFilter for F
where
    F: Fn(&str) -> bool,
{
    fn is_known_or_filtered(&self, name: &str) -> bool {
        self(name)
    }
}

/// A result this provider already produced for the same entity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriorResult {
    pub name: String,
}

impl PriorResult {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Decides whether a normalized name has already been accepted and should not
/// be queried again.
///
/// A name is accepted when the host filter says so, or when it matches the
/// name on any prior result ignoring case.
pub struct AcceptedNames<'a> {
    filter: &'a dyn NameFilter,
    prior_names: HashSet<String>,
}

impl<'a> AcceptedNames<'a> {
    pub fn new(prior_results: &[PriorResult], filter: &'a dyn NameFilter) -> Self {
        Self {
            filter,
            prior_names: prior_results
                .iter()
                .map(|result| fold_case(&result.name))
                .collect(),
        }
    }

    pub fn is_accepted(&self, name: &str) -> bool {
        self.filter.is_known_or_filtered(name) || self.prior_names.contains(&fold_case(name))
    }
}

fn fold_case(value: &str) -> String {
    value.to_lowercase()
}
