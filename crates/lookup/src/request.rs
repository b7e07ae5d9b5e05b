use query::{QueryParameter, QuerySpec};

/// Query string parameters for one lookup call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupRequest {
    pub name: Option<String>,
    pub domain_name: Option<String>,
}

impl LookupRequest {
    /// Build the request for a spec. `domainName` takes the Uri when present,
    /// otherwise the Domain.
    ///
    /// Returns `None` when there is nothing to send.
    pub fn from_spec(spec: &QuerySpec) -> Option<Self> {
        let value = |param| {
            spec.get(param)
                .map(str::trim)
                .filter(|v| !v.is_empty())
                .map(str::to_owned)
        };

        let name = value(QueryParameter::Name);
        let domain_name = value(QueryParameter::Uri).or_else(|| value(QueryParameter::Domain));

        if name.is_none() && domain_name.is_none() {
            return None;
        }
        Some(Self { name, domain_name })
    }

    pub fn query_pairs(&self) -> Vec<(&'static str, &str)> {
        let mut pairs = Vec::with_capacity(2);
        if let Some(name) = &self.name {
            pairs.push(("name", name.as_str()));
        }
        if let Some(domain) = &self.domain_name {
            pairs.push(("domainName", domain.as_str()));
        }
        pairs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spec(params: &[(QueryParameter, &str)]) -> QuerySpec {
        QuerySpec::new(params.iter().map(|(p, v)| (*p, v.to_string()))).unwrap()
    }

    #[test]
    fn uri_wins_over_domain() {
        let req = LookupRequest::from_spec(&spec(&[
            (QueryParameter::Name, "Acme"),
            (QueryParameter::Domain, "acme.test"),
            (QueryParameter::Uri, "https://acme.test"),
        ]))
        .unwrap();
        assert_eq!(req.name.as_deref(), Some("Acme"));
        assert_eq!(req.domain_name.as_deref(), Some("https://acme.test"));
        assert_eq!(
            req.query_pairs(),
            vec![("name", "Acme"), ("domainName", "https://acme.test")]
        );
    }

    #[test]
    fn domain_used_when_no_uri() {
        let req = LookupRequest::from_spec(&spec(&[
            (QueryParameter::Name, "Acme"),
            (QueryParameter::Domain, "acme.test"),
        ]))
        .unwrap();
        assert_eq!(req.domain_name.as_deref(), Some("acme.test"));
    }

    #[test]
    fn blank_uri_falls_back_to_domain() {
        let req = LookupRequest::from_spec(&spec(&[
            (QueryParameter::Domain, "acme.test"),
            (QueryParameter::Uri, "  "),
        ]))
        .unwrap();
        assert!(req.name.is_none());
        assert_eq!(req.domain_name.as_deref(), Some("acme.test"));
        assert_eq!(req.query_pairs(), vec![("domainName", "acme.test")]);
    }

    #[test]
    fn nothing_to_send() {
        let blank = spec(&[(QueryParameter::Name, " "), (QueryParameter::Domain, "")]);
        assert!(LookupRequest::from_spec(&blank).is_none());
    }
}
