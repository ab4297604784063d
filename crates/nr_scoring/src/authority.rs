use url::Url;

/// Source credibility tier, derived from the last label of the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthorityTier {
    Government,
    Education,
    Organization,
    Commercial,
    Unknown,
}

impl AuthorityTier {
    pub fn from_url(url: &str) -> Self {
        let Ok(parsed) = Url::parse(url) else {
            return AuthorityTier::Unknown;
        };
        let Some(host) = parsed.host_str() else {
            return AuthorityTier::Unknown;
        };
        match host.rsplit('.').next() {
            Some("gov") => AuthorityTier::Government,
            Some("edu") => AuthorityTier::Education,
            Some("org") => AuthorityTier::Organization,
            Some("com") => AuthorityTier::Commercial,
            _ => AuthorityTier::Unknown,
        }
    }

    pub fn weight(&self) -> f64 {
        match self {
            AuthorityTier::Government => 4.0,
            AuthorityTier::Education => 3.0,
            AuthorityTier::Organization => 2.0,
            AuthorityTier::Commercial => 1.0,
            AuthorityTier::Unknown => 0.0,
        }
    }
}

pub fn weight(url: &str) -> f64 {
    AuthorityTier::from_url(url).weight()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_suffix_weights() {
        assert_eq!(weight("https://x.gov/a"), 4.0);
        assert_eq!(weight("https://x.edu"), 3.0);
        assert_eq!(weight("https://x.org"), 2.0);
        assert_eq!(weight("https://x.com"), 1.0);
        assert_eq!(weight("https://x.io"), 0.0);
    }

    #[test]
    fn test_host_only() {
        assert_eq!(weight("https://www.nasa.gov:8443/news?id=com"), 4.0);
        assert_eq!(weight("https://example.com.ar/nota"), 0.0);
        assert_eq!(weight("https://WWW.CENSUS.GOV/data"), 4.0);
    }

    #[test]
    fn test_unparsable_urls() {
        assert_eq!(AuthorityTier::from_url("not a url"), AuthorityTier::Unknown);
        assert_eq!(AuthorityTier::from_url("mailto:editor@paper.com"), AuthorityTier::Unknown);
        assert_eq!(weight("http://127.0.0.1/a"), 0.0);
        assert_eq!(weight("https://x.gov./a"), 0.0);
    }
}
