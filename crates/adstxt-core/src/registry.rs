//! Read-only registry of known ad systems and observed domain spellings.
//!
//! The registry is an explicit immutable value: construct one from your own
//! tables with [`Registry::new`], or share the compiled-in data set via
//! [`Registry::builtin`]. Every operation after construction is a pure read,
//! so a registry may be used from any number of threads without locking.

use std::collections::HashMap;
use std::sync::OnceLock;

use crate::data;
use crate::error::RegistryError;
use crate::types::{AdSystem, DomainAlias};

/// Lookup tables for ad systems and their observed domain spellings.
///
/// Alias lookups are exact matches after case folding; there is no fuzzy
/// matching. Aliases are indexed by their lower-cased spelling, so
/// mixed-case table entries are reachable from any-cased queries.
#[derive(Debug)]
pub struct Registry {
    systems: HashMap<u32, AdSystem>,
    /// Keyed by the lower-cased spelling.
    aliases: HashMap<String, DomainAlias>,
}

static BUILTIN: OnceLock<Registry> = OnceLock::new();

impl Registry {
    /// Build a registry from caller-supplied tables, validating them:
    /// duplicate system ids, duplicate alias spellings (after case folding),
    /// and aliases referencing a missing system id are all rejected.
    pub fn new<S, A>(systems: S, aliases: A) -> Result<Self, RegistryError>
    where
        S: IntoIterator<Item = AdSystem>,
        A: IntoIterator<Item = DomainAlias>,
    {
        let mut by_id = HashMap::new();
        for system in systems {
            let id = system.id;
            if by_id.insert(id, system).is_some() {
                return Err(RegistryError::DuplicateAdSystem(id));
            }
        }

        let mut by_domain = HashMap::new();
        for alias in aliases {
            if !by_id.contains_key(&alias.ad_system_id) {
                return Err(RegistryError::DanglingAlias {
                    domain: alias.domain,
                    ad_system_id: alias.ad_system_id,
                });
            }
            let key = alias.domain.to_lowercase();
            if let Some(previous) = by_domain.insert(key, alias) {
                return Err(RegistryError::DuplicateAlias(previous.domain));
            }
        }

        Ok(Self {
            systems: by_id,
            aliases: by_domain,
        })
    }

    /// The compiled-in data set, constructed on first use.
    ///
    /// The shipped tables knowingly violate referential integrity once
    /// (`"mobileadtrading.com"` references a retired id), so this path does
    /// not go through the strict checks of [`Registry::new`]: the dangling
    /// entry is kept, logged here, and folds to an unknown-domain outcome at
    /// query time.
    pub fn builtin() -> &'static Registry {
        BUILTIN.get_or_init(|| {
            let registry = Registry::from_tables(data::AD_SYSTEMS, data::DOMAIN_ALIASES);
            for alias in registry.dangling_aliases() {
                log::warn!(
                    "registry data: alias {:?} references retired ad system id {}",
                    alias.domain,
                    alias.ad_system_id
                );
            }
            registry
        })
    }

    fn from_tables(systems: &[(u32, &str, &str)], aliases: &[(&str, u32)]) -> Self {
        let systems = systems
            .iter()
            .map(|&(id, name, canonical)| (id, AdSystem::new(id, name, canonical)))
            .collect();
        let aliases = aliases
            .iter()
            .map(|&(domain, id)| (domain.to_lowercase(), DomainAlias::new(domain, id)))
            .collect();
        Self { systems, aliases }
    }

    /// Look up an observed spelling. Exact match after lower-casing the
    /// input; no fuzzy matching.
    pub fn find_alias(&self, domain: &str) -> Option<&DomainAlias> {
        self.aliases.get(&domain.to_lowercase())
    }

    /// Look up an ad system by id.
    pub fn find_ad_system(&self, id: u32) -> Option<&AdSystem> {
        self.systems.get(&id)
    }

    /// All known ad systems, in unspecified order. Used by the resolver's
    /// fallback scan over canonical declarations.
    pub fn ad_systems(&self) -> impl Iterator<Item = &AdSystem> {
        self.systems.values()
    }

    /// Aliases whose `ad_system_id` does not resolve to a registered system.
    pub fn dangling_aliases(&self) -> impl Iterator<Item = &DomainAlias> {
        self.aliases
            .values()
            .filter(|alias| !self.systems.contains_key(&alias.ad_system_id))
    }

    pub fn system_count(&self) -> usize {
        self.systems.len()
    }

    pub fn alias_count(&self) -> usize {
        self.aliases.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_registry() -> Registry {
        Registry::new(
            vec![
                AdSystem::new(1, "Example Exchange", "example-exchange.com"),
                AdSystem::new(7, "No Canonical", ""),
            ],
            vec![
                DomainAlias::new("example-exchange.com", 1),
                DomainAlias::new("Example-Exchange.net", 1),
                DomainAlias::new("nocanonical.com", 7),
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_alias_lookup_is_case_insensitive() {
        let registry = small_registry();
        assert!(registry.find_alias("EXAMPLE-EXCHANGE.COM").is_some());
        // Mixed-case table entries are reachable through the folded key.
        assert!(registry.find_alias("example-exchange.net").is_some());
        assert!(registry.find_alias("example-exchange.org").is_none());
    }

    #[test]
    fn test_find_ad_system() {
        let registry = small_registry();
        assert_eq!(
            registry.find_ad_system(1).map(|s| s.name.as_str()),
            Some("Example Exchange")
        );
        assert!(registry.find_ad_system(2).is_none());
    }

    #[test]
    fn test_new_rejects_dangling_alias() {
        let err = Registry::new(
            vec![AdSystem::new(1, "Example", "")],
            vec![DomainAlias::new("other.com", 9)],
        )
        .unwrap_err();
        assert_eq!(
            err,
            RegistryError::DanglingAlias {
                domain: "other.com".into(),
                ad_system_id: 9,
            }
        );
    }

    #[test]
    fn test_new_rejects_duplicate_system_id() {
        let err = Registry::new(
            vec![
                AdSystem::new(1, "Example", ""),
                AdSystem::new(1, "Example Again", ""),
            ],
            vec![],
        )
        .unwrap_err();
        assert_eq!(err, RegistryError::DuplicateAdSystem(1));
    }

    #[test]
    fn test_new_rejects_aliases_that_collide_after_folding() {
        let err = Registry::new(
            vec![AdSystem::new(1, "Example", "")],
            vec![
                DomainAlias::new("Example.com", 1),
                DomainAlias::new("example.com", 1),
            ],
        )
        .unwrap_err();
        assert_eq!(err, RegistryError::DuplicateAlias("Example.com".into()));
    }

    #[test]
    fn test_builtin_tables_loaded() {
        let registry = Registry::builtin();
        assert_eq!(registry.system_count(), 231);
        assert_eq!(registry.alias_count(), 364);
        // Ids are sparse; holes must not resolve.
        assert!(registry.find_ad_system(73).is_some());
        assert!(registry.find_ad_system(72).is_none());
    }

    #[test]
    fn test_builtin_known_integrity_gap() {
        // The shipped tables carry exactly one dangling alias. If this test
        // starts failing after a data update, either the missing system was
        // added or a new gap crept in.
        let dangling: Vec<&str> = Registry::builtin()
            .dangling_aliases()
            .map(|alias| alias.domain.as_str())
            .collect();
        assert_eq!(dangling, ["mobileadtrading.com"]);
    }
}
