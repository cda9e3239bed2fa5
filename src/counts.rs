//! The aggregation core: classifies submitted URLs against the known-hosts
//! set and tallies matches per host.

use std::collections::{HashMap, HashSet};

use crate::hosts::{self, KnownHosts};
use crate::models::domain::UrlAggregation;

/// Classifies each submitted URL by whether its host is a known host.
///
/// Entries are deduplicated first, keeping the first occurrence, then every
/// unique entry is processed. URLs whose normalized host is in `known`
/// increment that host's tally; everything else, including strings that do
/// not parse as URLs, lands verbatim in the unmatched list. Both outputs
/// keep first-seen order, so repeated calls with the same input return the
/// same result.
pub fn aggregate(urls: &[String], known: &KnownHosts) -> UrlAggregation {
    let mut seen = HashSet::new();
    let mut host_index: HashMap<String, usize> = HashMap::new();
    let mut matched_per_host: Vec<(String, usize)> = Vec::new();
    let mut unmatched_urls = Vec::new();

    for url in urls {
        if !seen.insert(url.as_str()) {
            continue;
        }

        match hosts::host_of(url) {
            Some(host) if known.contains(&host) => match host_index.get(&host) {
                Some(&slot) => matched_per_host[slot].1 += 1,
                None => {
                    host_index.insert(host.clone(), matched_per_host.len());
                    matched_per_host.push((host, 1));
                }
            },
            _ => unmatched_urls.push(url.clone()),
        }
    }

    UrlAggregation {
        matched_per_host,
        unmatched_urls,
    }
}
