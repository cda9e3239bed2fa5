pub mod domain {
    /// Tallies produced by one aggregation pass over a URL list.
    ///
    /// `matched_per_host` holds one entry per known host that matched at
    /// least one URL, in first-seen order. `unmatched_urls` holds the
    /// original input strings that matched nothing, in input order.
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct UrlAggregation {
        pub matched_per_host: Vec<(String, usize)>,
        pub unmatched_urls: Vec<String>,
    }

    impl UrlAggregation {
        pub fn matched_count(&self) -> usize {
            self.matched_per_host.iter().map(|(_, n)| n).sum()
        }

        pub fn unmatched_count(&self) -> usize {
            self.unmatched_urls.len()
        }
    }
}

pub mod dto {
    use serde::{Deserialize, Serialize};

    use super::domain::UrlAggregation;

    /// Body of `POST /urlcounts`.
    #[derive(Debug, Clone, Serialize, Deserialize)]
    pub struct UrlcountsRequest {
        pub urls: Vec<String>,
    }

    /// Wire form of an aggregation result. Per-host counts are rendered as
    /// "host: count" lines so the form can display them as-is.
    #[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
    pub struct UrlcountsResponse {
        pub count_urls_match_a_host: usize,
        pub count_urls_not_match_any_hosts: usize,
        pub count_urls_matched_per_host: Vec<String>,
        pub urls_not_match_any_hosts: Vec<String>,
    }

    impl From<&UrlAggregation> for UrlcountsResponse {
        fn from(aggregation: &UrlAggregation) -> Self {
            Self {
                count_urls_match_a_host: aggregation.matched_count(),
                count_urls_not_match_any_hosts: aggregation.unmatched_count(),
                count_urls_matched_per_host: aggregation
                    .matched_per_host
                    .iter()
                    .map(|(host, count)| format!("{}: {}", host, count))
                    .collect(),
                urls_not_match_any_hosts: aggregation.unmatched_urls.clone(),
            }
        }
    }
}
