//! Ad-system domain canonicalization and resolution for the ads.txt
//! ecosystem.
//!
//! Given a domain string taken from field #1 of a publisher's ads.txt file,
//! this crate answers two questions: does it identify a known advertising
//! exchange, and is the spelling the exchange's declared canonical one.
//! Recognition does not imply that an exchange has been vetted or certified.
//!
//! # Architecture
//!
//! Three layers over an immutable, compiled-in data set:
//!
//! - `registry`: known ad systems and observed domain spellings
//! - `domain`: domain-syntax validation and root-domain (eTLD+1) extraction
//! - `resolver`: alias lookup plus canonical-name comparison
//!
//! The built-in registry is constructed once and only ever read; resolution
//! is synchronous and side-effect-free, so any number of threads may call
//! into it concurrently without coordination.
//!
//! # Examples
//!
//! ```
//! use adstxt_core::{resolve_domain, DomainStatus};
//!
//! assert_eq!(resolve_domain("rubiconproject.com"), DomainStatus::Canonical);
//! assert!(matches!(
//!     resolve_domain("fastlane.rubiconproject.com"),
//!     DomainStatus::NonCanonical { .. }
//! ));
//! ```

mod data;
pub mod domain;
pub mod error;
pub mod registry;
pub mod resolver;
pub mod types;

// Re-export commonly used types
pub use domain::{is_valid_domain_syntax, root_domain};
pub use error::{DomainError, RegistryError, ValidationError};
pub use registry::Registry;
pub use resolver::{resolve_domain, validate_ad_system_domain, Resolver};
pub use types::{AdSystem, DomainAlias, DomainStatus};
