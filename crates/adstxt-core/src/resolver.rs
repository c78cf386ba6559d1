//! Domain resolution against the ad-system registry.
//!
//! Stateless per call: every outcome is deterministic given the registry
//! snapshot and the input string. The heaviest path is a linear scan over
//! the (small, fixed) ad-system set when no alias matches.

use crate::error::ValidationError;
use crate::registry::Registry;
use crate::types::DomainStatus;

/// Decides whether a domain names a recognized, correctly spelled ad system.
pub struct Resolver<'a> {
    registry: &'a Registry,
}

impl<'a> Resolver<'a> {
    pub fn new(registry: &'a Registry) -> Self {
        Self { registry }
    }

    /// Resolve a field #1 domain to its recognition status.
    ///
    /// Comparison is case-insensitive throughout, on both the alias-lookup
    /// path and the canonical-declaration scan.
    pub fn resolve(&self, domain: &str) -> DomainStatus {
        let alias = match self.registry.find_alias(domain) {
            Some(alias) => alias,
            None => {
                // Not an observed spelling; the declared canonical sets get
                // the last word.
                if self
                    .registry
                    .ad_systems()
                    .any(|system| system.is_canonical_spelling(domain))
                {
                    return DomainStatus::Canonical;
                }
                return DomainStatus::Unknown;
            }
        };

        let system = match self.registry.find_ad_system(alias.ad_system_id) {
            Some(system) => system,
            None => {
                // Referential gap in the data set; indistinguishable from an
                // unknown domain at this surface.
                log::debug!(
                    "alias {:?} references unknown ad system {}",
                    alias.domain,
                    alias.ad_system_id
                );
                return DomainStatus::Unknown;
            }
        };

        if !system.declares_canonical() {
            return DomainStatus::KnownNoCanonical;
        }
        if system.is_canonical_spelling(domain) {
            DomainStatus::Canonical
        } else {
            DomainStatus::NonCanonical {
                canonical: system.canonical_domains.clone(),
            }
        }
    }

    /// Error-shaped validation surface over [`Resolver::resolve`].
    ///
    /// Both recognized-canonical and recognized-without-declaration pass;
    /// an unknown domain is a hard rejection, a non-canonical spelling an
    /// advisory error carrying the preferred form.
    pub fn validate(&self, domain: &str) -> Result<(), ValidationError> {
        match self.resolve(domain) {
            DomainStatus::Canonical | DomainStatus::KnownNoCanonical => Ok(()),
            DomainStatus::NonCanonical { canonical } => {
                Err(ValidationError::NonCanonicalSpelling {
                    domain: domain.to_string(),
                    canonical,
                })
            }
            DomainStatus::Unknown => Err(ValidationError::UnknownExchange(domain.to_string())),
        }
    }
}

/// Resolve a domain against the built-in registry.
pub fn resolve_domain(domain: &str) -> DomainStatus {
    Resolver::new(Registry::builtin()).resolve(domain)
}

/// Validate a domain against the built-in registry.
pub fn validate_ad_system_domain(domain: &str) -> Result<(), ValidationError> {
    Resolver::new(Registry::builtin()).validate(domain)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{AdSystem, DomainAlias};

    #[test]
    fn test_canonical_spelling_any_case() {
        assert_eq!(resolve_domain("rubiconproject.com"), DomainStatus::Canonical);
        assert_eq!(resolve_domain("RUBICONPROJECT.COM"), DomainStatus::Canonical);
    }

    #[test]
    fn test_multi_member_declaration() {
        assert_eq!(resolve_domain("spotx.tv"), DomainStatus::Canonical);
        assert_eq!(resolve_domain("spotxchange.com"), DomainStatus::Canonical);
    }

    #[test]
    fn test_alias_without_declared_canonical() {
        assert_eq!(resolve_domain("33across.com"), DomainStatus::KnownNoCanonical);
    }

    #[test]
    fn test_non_canonical_spelling_names_the_preferred_form() {
        match resolve_domain("fastlane.rubiconproject.com") {
            DomainStatus::NonCanonical { canonical } => {
                assert_eq!(canonical, "rubiconproject.com");
            }
            other => panic!("unexpected status {other:?}"),
        }
    }

    #[test]
    fn test_unknown_domain() {
        assert_eq!(
            resolve_domain("definitely-not-an-exchange.example"),
            DomainStatus::Unknown
        );
        assert_eq!(resolve_domain(""), DomainStatus::Unknown);
    }

    #[test]
    fn test_declared_canonical_without_alias_entry() {
        // btrll.com appears only in BrightRoll's declaration, never as an
        // observed spelling; the fallback scan must still recognize it.
        assert_eq!(resolve_domain("btrll.com"), DomainStatus::Canonical);
    }

    #[test]
    fn test_dangling_alias_folds_to_unknown() {
        assert_eq!(resolve_domain("mobileadtrading.com"), DomainStatus::Unknown);
    }

    #[test]
    fn test_mixed_case_table_entries_are_reachable() {
        // Stored as "Brealtime" and "SpotIM" in the data set.
        assert_eq!(resolve_domain("brealtime"), DomainStatus::KnownNoCanonical);
        assert_eq!(resolve_domain("spotim"), DomainStatus::KnownNoCanonical);
    }

    #[test]
    fn test_validate_passes_recognized_domains() {
        assert!(validate_ad_system_domain("rubiconproject.com").is_ok());
        assert!(validate_ad_system_domain("33across.com").is_ok());
    }

    #[test]
    fn test_validate_error_messages() {
        let err = validate_ad_system_domain("fastlane.rubiconproject.com").unwrap_err();
        assert_eq!(
            err.to_string(),
            "fastlane.rubiconproject.com is not the preferred form of the exchange domain. \
             Please consider using rubiconproject.com as the canonical domain name"
        );

        let err = validate_ad_system_domain("definitely-not-an-exchange.example").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Please verify that definitely-not-an-exchange.example is a known exchange domain"
        );
    }

    #[test]
    fn test_resolver_over_fake_registry() {
        let registry = Registry::new(
            vec![
                AdSystem::new(1, "Example Exchange", "example-exchange.com"),
                AdSystem::new(2, "Plain", ""),
            ],
            vec![
                DomainAlias::new("legacy-exchange.com", 1),
                DomainAlias::new("plain.com", 2),
            ],
        )
        .unwrap();
        let resolver = Resolver::new(&registry);

        assert_eq!(resolver.resolve("example-exchange.com"), DomainStatus::Canonical);
        assert_eq!(
            resolver.resolve("legacy-exchange.com"),
            DomainStatus::NonCanonical {
                canonical: "example-exchange.com".into()
            }
        );
        assert_eq!(resolver.resolve("plain.com"), DomainStatus::KnownNoCanonical);
        assert_eq!(resolver.resolve("nope.com"), DomainStatus::Unknown);
    }
}
