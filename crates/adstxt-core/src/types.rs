//! Core type definitions for the ad-system domain engine.

// =============================================================================
// Ad Systems
// =============================================================================

/// A known advertising system (SSP/exchange).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdSystem {
    /// Synthetic identifier. Values are sparse and carry no ordering or
    /// meaning; treat as an opaque key.
    pub id: u32,
    /// Human-readable exchange name.
    pub name: String,
    /// Comma-separated canonical-domain declaration as published by the
    /// exchange. Empty when no canonical form has been declared.
    pub canonical_domains: String,
}

impl AdSystem {
    pub fn new(id: u32, name: impl Into<String>, canonical_domains: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            canonical_domains: canonical_domains.into(),
        }
    }

    /// Whether the exchange has declared any canonical form.
    pub fn declares_canonical(&self) -> bool {
        self.canonical_members().next().is_some()
    }

    /// Members of the canonical declaration: split on commas, trimmed of
    /// surrounding whitespace, empty members dropped.
    pub fn canonical_members(&self) -> impl Iterator<Item = &str> {
        self.canonical_domains
            .split(',')
            .map(str::trim)
            .filter(|member| !member.is_empty())
    }

    /// Case-insensitive membership test against the canonical declaration.
    pub fn is_canonical_spelling(&self, domain: &str) -> bool {
        self.canonical_members()
            .any(|member| member.eq_ignore_ascii_case(domain))
    }
}

// =============================================================================
// Domain Aliases
// =============================================================================

/// A domain spelling observed in field #1 of publisher ads.txt files,
/// misspellings and decorated forms included.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomainAlias {
    /// The spelling as observed in the wild.
    pub domain: String,
    /// Id of the [`AdSystem`] this spelling identifies.
    pub ad_system_id: u32,
}

impl DomainAlias {
    pub fn new(domain: impl Into<String>, ad_system_id: u32) -> Self {
        Self {
            domain: domain.into(),
            ad_system_id,
        }
    }
}

// =============================================================================
// Resolution Outcome
// =============================================================================

/// Recognition status of a field #1 domain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainStatus {
    /// Recognized, and spelled as the exchange declared canonical.
    Canonical,
    /// Recognized alias of an exchange that has not declared a canonical
    /// form; the spelling is accepted as-is.
    KnownNoCanonical,
    /// Recognized alias of a real exchange, but the exchange prefers
    /// another spelling. Advisory, not a hard rejection.
    NonCanonical {
        /// The exchange's canonical declaration, for the remediation hint.
        canonical: String,
    },
    /// Not a known exchange domain.
    Unknown,
}

impl DomainStatus {
    /// Whether the domain identifies a known exchange at all, canonical
    /// spelling or not.
    pub fn is_recognized(&self) -> bool {
        !matches!(self, Self::Unknown)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_members_split_and_trim() {
        let system = AdSystem::new(44, "SpotX", "spotx.tv, spotxchange.com");
        let members: Vec<&str> = system.canonical_members().collect();
        assert_eq!(members, ["spotx.tv", "spotxchange.com"]);
    }

    #[test]
    fn test_empty_declaration_has_no_members() {
        let system = AdSystem::new(2, "33Across", "");
        assert!(!system.declares_canonical());
        assert_eq!(system.canonical_members().count(), 0);
    }

    #[test]
    fn test_whitespace_only_declaration_counts_as_none() {
        let system = AdSystem::new(9, "Whitespace", "  ");
        assert!(!system.declares_canonical());
    }

    #[test]
    fn test_is_canonical_spelling_ignores_case_and_padding() {
        // The shipped table carries declarations like "Addroplet.com "
        // verbatim; they must still match their own spelling.
        let system = AdSystem::new(223, "Addroplet.com ", "Addroplet.com ");
        assert!(system.is_canonical_spelling("addroplet.com"));
        assert!(!system.is_canonical_spelling(""));
    }

    #[test]
    fn test_status_recognition() {
        assert!(DomainStatus::Canonical.is_recognized());
        assert!(DomainStatus::KnownNoCanonical.is_recognized());
        assert!(DomainStatus::NonCanonical {
            canonical: "example.com".into()
        }
        .is_recognized());
        assert!(!DomainStatus::Unknown.is_recognized());
    }
}
