//! Error types for registry construction and domain validation.

/// Error type for semantic domain validation.
///
/// `NonCanonicalSpelling` is advisory: the domain does identify a real
/// exchange, just not by its preferred spelling. Callers that need to react
/// differently to "reject" and "warn" should use
/// [`DomainStatus`](crate::DomainStatus) instead of matching on this.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// The domain is neither a known alias nor a canonical spelling of any
    /// ad system. Also covers aliases whose target record is missing from
    /// the data set; that gap is not separately reported.
    #[error("Please verify that {0} is a known exchange domain")]
    UnknownExchange(String),
    /// Known alias of an exchange that declares a different canonical form.
    #[error("{domain} is not the preferred form of the exchange domain. Please consider using {canonical} as the canonical domain name")]
    NonCanonicalSpelling { domain: String, canonical: String },
}

/// Error type for strict registry construction.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    #[error("duplicate ad system id {0}")]
    DuplicateAdSystem(u32),
    #[error("duplicate domain alias {0:?}")]
    DuplicateAlias(String),
    #[error("alias {domain:?} references unknown ad system {ad_system_id}")]
    DanglingAlias { domain: String, ad_system_id: u32 },
}

/// Error type for root-domain extraction.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomainError {
    #[error("no public suffix found in {0:?}")]
    NoRootDomain(String),
}
