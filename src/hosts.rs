use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;
use url::Url;

#[derive(Debug, Error)]
pub enum HostsError {
    #[error("failed to read known-hosts file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// The set of hosts a submitted URL can match against.
///
/// Entries are stored in normalized form so membership tests and URL hosts
/// go through the same rule.
#[derive(Debug, Clone, Default)]
pub struct KnownHosts {
    hosts: HashSet<String>,
}

impl KnownHosts {
    /// Loads hosts from a text file, one host per line.
    pub fn load(path: &Path) -> Result<Self, HostsError> {
        let text = fs::read_to_string(path).map_err(|source| HostsError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::parse(&text))
    }

    /// Parses a host list: entries trimmed, blank lines skipped, duplicates
    /// collapsed.
    pub fn parse(text: &str) -> Self {
        let hosts = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(normalize_host)
            .collect();
        Self { hosts }
    }

    pub fn contains(&self, host: &str) -> bool {
        self.hosts.contains(host)
    }

    pub fn len(&self) -> usize {
        self.hosts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hosts.is_empty()
    }
}

/// Canonical form used on both sides of a match: ASCII-lowercased, with a
/// single leading "www." label removed. Scheme and port never reach this
/// function; matching is on the host component alone.
pub fn normalize_host(host: &str) -> String {
    let lower = host.to_ascii_lowercase();
    match lower.strip_prefix("www.") {
        Some(rest) => rest.to_string(),
        None => lower,
    }
}

/// Extracts the normalized host of a URL, if the string parses as one.
pub fn host_of(url: &str) -> Option<String> {
    let parsed = Url::parse(url).ok()?;
    parsed.host_str().map(normalize_host)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn parse_trims_skips_blanks_and_dedups() {
        let known = KnownHosts::parse("example.com\n example.com \n\nexample.org\n");
        assert_eq!(known.len(), 2);
        assert!(known.contains("example.com"));
        assert!(known.contains("example.org"));
    }

    #[test]
    fn entries_normalize_like_url_hosts() {
        let known = KnownHosts::parse("WWW.Example.com");
        assert!(known.contains("example.com"));
    }

    #[test]
    fn load_reads_hosts_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "example.com").unwrap();
        writeln!(file, "torrentdownloads.test").unwrap();

        let known = KnownHosts::load(file.path()).unwrap();
        assert_eq!(known.len(), 2);
        assert!(known.contains("torrentdownloads.test"));
    }

    #[test]
    fn load_reports_missing_file() {
        let err = KnownHosts::load(Path::new("/no/such/hosts.txt")).unwrap_err();
        assert!(err.to_string().contains("/no/such/hosts.txt"));
    }

    #[test]
    fn host_of_ignores_scheme_port_and_case() {
        assert_eq!(
            host_of("HTTPS://WWW.Example.COM:8443/path?q=1"),
            Some("example.com".to_string())
        );
        assert_eq!(host_of("http://127.0.0.1:5000/x"), Some("127.0.0.1".to_string()));
    }

    #[test]
    fn host_of_rejects_non_urls() {
        assert_eq!(host_of(""), None);
        assert_eq!(host_of("not a url"), None);
        assert_eq!(host_of("example.com/path"), None);
    }
}
