//! Query-candidate generation.
//!
//! Turns the name/domain/website facts of one entity into the lookups worth
//! sending. Every surviving name is an independent identity hypothesis, so
//! specs are never deduplicated across names.

use std::collections::BTreeSet;
use std::iter::FusedIterator;

use tracing::debug;

use crate::filter::{AcceptedNames, NameFilter, PriorResult};
use crate::input::InputFacts;
use crate::normalize::NameNormalizer;
use crate::spec::QuerySpec;

/// Lazy, single-pass sequence of [`QuerySpec`]s produced by [`generate`].
pub struct QueryCandidates<'a> {
    names: std::vec::IntoIter<String>,
    domains: Vec<&'a str>,
    websites: Vec<&'a str>,
    accepted: AcceptedNames<'a>,
    pending: std::vec::IntoIter<QuerySpec>,
}

/// Generate query candidates for `facts`.
///
/// Produces nothing unless there is at least one name and at least one domain
/// or website. Names are normalized and deduplicated up front; acceptance is
/// checked, and specs built, only as the iterator advances.
pub fn generate<'a, N>(
    facts: &'a InputFacts,
    accepted: AcceptedNames<'a>,
    normalizer: &N,
) -> QueryCandidates<'a>
where
    N: NameNormalizer + ?Sized,
{
    let domains = facts.domains();
    let websites = facts.websites();

    let names: Vec<String> = if domains.is_empty() && websites.is_empty() {
        Vec::new()
    } else {
        facts
            .organization_names
            .iter()
            .filter_map(|name| normalizer.normalize(name))
            .filter(|name| !name.is_empty())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    };

    debug!(
        names = names.len(),
        domains = domains.len(),
        websites = websites.len(),
        "query_candidates_start"
    );

    QueryCandidates {
        names: names.into_iter(),
        domains,
        websites,
        accepted,
        pending: Vec::new().into_iter(),
    }
}

/// Convenience wrapper over [`generate`] taking the prior results and host
/// filter directly.
pub fn generate_queries<'a, F, N>(
    prior_results: &[PriorResult],
    filter: &'a F,
    normalizer: &N,
    facts: &'a InputFacts,
) -> QueryCandidates<'a>
where
    F: NameFilter,
    N: NameNormalizer + ?Sized,
{
    generate(facts, AcceptedNames::new(prior_results, filter), normalizer)
}

impl QueryCandidates<'_> {
    fn specs_for(&self, name: &str) -> Vec<QuerySpec> {
        let domain_count = self.domains.len();
        let website_count = self.websites.len();
        let mut specs = Vec::with_capacity(domain_count + website_count + 1);

        let mut combined_emitted = false;
        if let ([domain], [website]) = (self.domains.as_slice(), self.websites.as_slice()) {
            specs.push(QuerySpec::combined(domain, website, name));
            combined_emitted = true;
        }

        if domain_count != 1 || !combined_emitted {
            specs.extend(self.domains.iter().map(|domain| QuerySpec::domain(domain, name)));
        }

        if website_count != 1 || !combined_emitted {
            specs.extend(
                self.websites
                    .iter()
                    .map(|website| QuerySpec::website(website, name)),
            );
        }

        debug!(name, specs = specs.len(), combined_emitted, "query_candidates_for_name");
        specs
    }
}

impl Iterator for QueryCandidates<'_> {
    type Item = QuerySpec;

    fn next(&mut self) -> Option<QuerySpec> {
        loop {
            if let Some(spec) = self.pending.next() {
                return Some(spec);
            }

            let name = self.names.next()?;
            if self.accepted.is_accepted(&name) {
                debug!(name = %name, "query_name_skipped");
                continue;
            }
            self.pending = self.specs_for(&name).into_iter();
        }
    }
}

impl FusedIterator for QueryCandidates<'_> {}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;
    use crate::normalize::normalize_organization_name;
    use crate::spec::QueryParameter;

    fn no_filter(_: &str) -> bool {
        false
    }

    fn run(facts: &InputFacts) -> Vec<QuerySpec> {
        generate_queries(&[], &no_filter, &normalize_organization_name, facts).collect()
    }

    fn spec(pairs: &[(QueryParameter, &str)]) -> QuerySpec {
        QuerySpec::new(pairs.iter().copied()).unwrap()
    }

    #[test]
    fn no_names_yields_nothing() {
        let facts = InputFacts::default()
            .with_domain("acme.test")
            .with_website("https://acme.test/");
        assert!(run(&facts).is_empty());
    }

    #[test]
    fn names_without_domain_or_website_yield_nothing() {
        let facts = InputFacts::default().with_name("Acme").with_name("Other");
        assert!(run(&facts).is_empty());

        let blanks = InputFacts::new(["Acme"], [" "], [""]);
        assert!(run(&blanks).is_empty());
    }

    #[test]
    fn single_domain_and_website_emit_one_combined_spec() {
        let facts = InputFacts::new(["Acme"], ["acme.test"], ["https://acme.test/"]);
        let specs = run(&facts);

        assert_eq!(
            specs,
            vec![spec(&[
                (QueryParameter::Domain, "acme.test"),
                (QueryParameter::Uri, "https://acme.test/"),
                (QueryParameter::Name, "Acme"),
            ])]
        );
    }

    #[test]
    fn multiple_domains_fall_back_to_per_value_specs() {
        let facts = InputFacts::new(
            ["Acme"],
            ["acme.test", "acme.example"],
            ["https://acme.test/"],
        );
        let specs = run(&facts);

        assert_eq!(specs.len(), 3);
        assert!(specs.contains(&spec(&[
            (QueryParameter::Domain, "acme.example"),
            (QueryParameter::Name, "Acme"),
        ])));
        assert!(specs.contains(&spec(&[
            (QueryParameter::Domain, "acme.test"),
            (QueryParameter::Name, "Acme"),
        ])));
        assert!(specs.contains(&spec(&[
            (QueryParameter::Uri, "https://acme.test/"),
            (QueryParameter::Name, "Acme"),
        ])));
        assert!(specs.iter().all(|s| s.len() == 2));
    }

    #[test]
    fn multiple_websites_with_one_domain() {
        let facts = InputFacts::new(
            ["Acme"],
            ["acme.test"],
            ["https://acme.test/", "https://www.acme.test/"],
        );
        let specs = run(&facts);

        assert_eq!(specs.len(), 3);
        assert_eq!(
            specs
                .iter()
                .filter(|s| s.contains(QueryParameter::Uri))
                .count(),
            2
        );
        assert!(specs
            .iter()
            .all(|s| !(s.contains(QueryParameter::Uri) && s.contains(QueryParameter::Domain))));
    }

    #[test]
    fn only_domains_emit_domain_specs() {
        let facts = InputFacts::new(["Acme"], ["acme.test"], Vec::<String>::new());
        assert_eq!(
            run(&facts),
            vec![spec(&[
                (QueryParameter::Domain, "acme.test"),
                (QueryParameter::Name, "Acme"),
            ])]
        );
    }

    #[test]
    fn only_websites_emit_uri_specs() {
        let facts = InputFacts::new(["Acme"], Vec::<String>::new(), ["https://acme.test/"]);
        assert_eq!(
            run(&facts),
            vec![spec(&[
                (QueryParameter::Uri, "https://acme.test/"),
                (QueryParameter::Name, "Acme"),
            ])]
        );
    }

    #[test]
    fn names_normalizing_to_none_never_appear() {
        let facts = InputFacts::new(["Acme", "   ", "..."], ["acme.test"], Vec::<String>::new());
        let specs = run(&facts);

        assert_eq!(specs.len(), 1);
        assert_eq!(specs[0].get(QueryParameter::Name), Some("Acme"));
    }

    #[test]
    fn names_are_deduplicated_after_normalization() {
        let facts = InputFacts::new(["Acme  Corp", "Acme Corp", " Acme Corp."], ["acme.test"], Vec::<String>::new());
        assert_eq!(run(&facts).len(), 1);
    }

    #[test]
    fn no_cross_name_deduplication() {
        let facts = InputFacts::new(["Acme", "Acme Holding"], ["acme.test"], ["https://acme.test/"]);
        let specs = run(&facts);

        assert_eq!(specs.len(), 2);
        assert_ne!(specs[0], specs[1]);
        assert_eq!(specs[0].get(QueryParameter::Domain), specs[1].get(QueryParameter::Domain));
    }

    #[test]
    fn filtered_names_produce_no_specs() {
        let facts = InputFacts::new(["Acme", "Blocked Inc"], ["acme.test"], Vec::<String>::new());
        let filter = |name: &str| name == "Blocked Inc";
        let specs: Vec<_> =
            generate_queries(&[], &filter, &normalize_organization_name, &facts).collect();

        assert_eq!(specs.len(), 1);
        assert_eq!(specs[0].get(QueryParameter::Name), Some("Acme"));
    }

    #[test]
    fn prior_result_names_produce_no_specs() {
        let facts = InputFacts::new(["Acme", "Globex"], ["acme.test"], Vec::<String>::new());
        let prior = [PriorResult::new("ACME")];
        let specs: Vec<_> =
            generate_queries(&prior, &no_filter, &normalize_organization_name, &facts).collect();

        assert_eq!(specs.len(), 1);
        assert_eq!(specs[0].get(QueryParameter::Name), Some("Globex"));
    }

    #[test]
    fn filter_sees_normalized_names() {
        let facts = InputFacts::new(["  Acme\tCorp "], ["acme.test"], Vec::<String>::new());
        let filter = |name: &str| {
            assert_eq!(name, "Acme Corp");
            false
        };
        let specs: Vec<_> =
            generate_queries(&[], &filter, &normalize_organization_name, &facts).collect();
        assert_eq!(specs.len(), 1);
    }

    #[test]
    fn acceptance_is_checked_lazily() {
        let facts = InputFacts::new(["Acme", "Globex"], ["acme.test"], Vec::<String>::new());
        let calls = Cell::new(0);
        let filter = |_: &str| {
            calls.set(calls.get() + 1);
            false
        };
        let mut candidates =
            generate_queries(&[], &filter, &normalize_organization_name, &facts);
        assert_eq!(calls.get(), 0);

        assert!(candidates.next().is_some());
        assert_eq!(calls.get(), 1);

        assert!(candidates.next().is_some());
        assert!(candidates.next().is_none());
        assert!(candidates.next().is_none());
        assert_eq!(calls.get(), 2);
    }

    #[test]
    fn custom_normalizer_is_used() {
        let facts = InputFacts::new(["acme"], ["acme.test"], Vec::<String>::new());
        let upper = |name: &str| Some(name.to_uppercase());
        let specs: Vec<_> = generate_queries(&[], &no_filter, &upper, &facts).collect();
        assert_eq!(specs[0].get(QueryParameter::Name), Some("ACME"));
    }

    #[test]
    fn every_spec_carries_a_name_and_a_locator() {
        let facts = InputFacts::new(
            ["Acme", "Globex"],
            ["acme.test", "globex.test"],
            ["https://acme.test/", "https://globex.test/", "https://initech.test/"],
        );
        let specs = run(&facts);

        // 2 names x (2 domains + 3 websites)
        assert_eq!(specs.len(), 10);
        for s in &specs {
            assert!(s.contains(QueryParameter::Name));
            assert!(s.contains(QueryParameter::Domain) || s.contains(QueryParameter::Uri));
        }
    }
}
