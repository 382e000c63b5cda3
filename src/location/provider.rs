// src/location/provider.rs
//! Location provider registry abstraction

use crate::error::Result;
use crate::location::fix::FixResolver;
use crate::location::sample::LocationSample;

/// Requested accuracy class for a one-shot fix.
///
/// Coarse gets the fastest possible answer; callers that need precision
/// typically follow up with their own fine-grained updates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FixAccuracy {
    #[default]
    Coarse,
    Fine,
}

/// Criteria passed along with a one-shot fix request.
#[derive(Debug, Clone, Default)]
pub struct FixCriteria {
    pub accuracy: FixAccuracy,
}

/// A registry of location providers and their cached fixes.
///
/// This is the seam towards the platform location stack: anything that
/// can enumerate providers, answer "last known position" queries, and
/// deliver a one-shot update into a [`FixResolver`] qualifies.
pub trait ProviderRegistry {
    /// Names of all known providers.
    fn providers(&self) -> Vec<String>;

    /// The provider's last known position, or `None` if it never fixed.
    fn last_known(&self, provider: &str) -> Option<LocationSample>;

    /// Request a single asynchronous update. The registry delivers at
    /// most one sample into the resolver, on whatever thread or task it
    /// pleases.
    fn request_single_update(&self, criteria: &FixCriteria, resolver: FixResolver) -> Result<()>;
}
