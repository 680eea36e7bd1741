//! Admin allowlist
//!
//! Static set of emails permitted to view the birthday report, supplied as
//! a comma-separated deployment setting.

use std::collections::HashSet;

/// Parsed allowlist with case-insensitive membership
#[derive(Debug, Clone, Default)]
pub struct Allowlist {
    emails: HashSet<String>,
}

impl Allowlist {
    /// Parse a comma-separated email list.
    ///
    /// Entries are trimmed and lowercased; empty entries are dropped.
    pub fn parse(raw: &str) -> Self {
        let emails = raw
            .split(',')
            .map(|s| s.trim().to_lowercase())
            .filter(|s| !s.is_empty())
            .collect();
        Self { emails }
    }

    /// Case-insensitive exact membership check
    pub fn contains(&self, email: &str) -> bool {
        self.emails.contains(&email.trim().to_lowercase())
    }

    pub fn is_empty(&self) -> bool {
        self.emails.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn membership_is_case_insensitive() {
        let list = Allowlist::parse("Pastor@Example.org, deacon@example.org");
        assert!(list.contains("pastor@example.org"));
        assert!(list.contains("PASTOR@EXAMPLE.ORG"));
        assert!(list.contains(" deacon@example.org "));
        assert!(!list.contains("visitor@example.org"));
    }

    #[test]
    fn empty_entries_are_dropped() {
        let list = Allowlist::parse(" , ,pastor@example.org,");
        assert!(list.contains("pastor@example.org"));
        assert!(!list.contains(""));
    }

    #[test]
    fn blank_input_yields_empty_list() {
        assert!(Allowlist::parse("").is_empty());
        assert!(Allowlist::parse(" , ").is_empty());
    }
}
