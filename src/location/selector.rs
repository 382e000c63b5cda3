// src/location/selector.rs
//! Best-known-location selection
//!
//! Finds the "best" (most accurate and timely) previously detected
//! location across whatever providers are available. Where no timely and
//! accurate sample exists the caller is told to request a fresh one-shot
//! fix instead.

use crate::error::Result;
use crate::location::fix::PendingFix;
use crate::location::provider::{FixCriteria, ProviderRegistry};
use crate::location::sample::LocationSample;

/// Outcome of a best-location query against the freshness policy.
#[derive(Debug, Clone, PartialEq)]
pub enum SelectionResult {
    /// A cached sample that satisfies the freshness and accuracy policy.
    Known(LocationSample),
    /// Nothing usable is cached; request a one-shot fix.
    NeedsFreshFix,
}

/// Single-pass best-so-far scan over last-known samples.
///
/// Samples newer than `min_time_millis` compete on accuracy; while no
/// such sample has been seen, stale samples compete on age and the least
/// stale one is kept as a fallback. A sample whose age equals
/// `min_time_millis` exactly matches neither branch. The scan is
/// incremental, so it can run as providers answer, without sorting.
pub fn scan_best<I>(samples: I, min_time_millis: i64) -> Option<LocationSample>
where
    I: IntoIterator<Item = Option<LocationSample>>,
{
    let mut best: Option<LocationSample> = None;
    let mut best_accuracy = f32::INFINITY;
    let mut best_age = i64::MIN;

    for sample in samples.into_iter().flatten() {
        let age = sample.age_millis;
        let accuracy = sample.accuracy_meters;

        if age < min_time_millis && accuracy < best_accuracy {
            best_accuracy = accuracy;
            best_age = age;
            best = Some(sample);
        } else if age > min_time_millis
            && best_accuracy.is_infinite()
            && (best.is_none() || age < best_age)
        {
            best_age = age;
            best = Some(sample);
        }
    }

    best
}

/// Run the scan and apply the final freshness/accuracy check.
///
/// `Known` is returned only when the winning sample is both newer than
/// `min_time_millis` and at least as accurate as `min_distance_meters`;
/// anything else means a fresh fix is required.
pub fn select<I>(
    samples: I,
    min_distance_meters: u32,
    min_time_millis: i64,
) -> SelectionResult
where
    I: IntoIterator<Item = Option<LocationSample>>,
{
    match scan_best(samples, min_time_millis) {
        None => SelectionResult::NeedsFreshFix,
        Some(best) => {
            if best.age_millis > min_time_millis
                || best.accuracy_meters > min_distance_meters as f32
            {
                SelectionResult::NeedsFreshFix
            } else {
                SelectionResult::Known(best)
            }
        }
    }
}

/// Queries a [`ProviderRegistry`] for the last best location and issues
/// one-shot fix requests when nothing cached is usable.
pub struct LocationFinder<R: ProviderRegistry> {
    registry: R,
}

impl<R: ProviderRegistry> LocationFinder<R> {
    pub fn new(registry: R) -> Self {
        Self { registry }
    }

    /// Snapshot every provider's last known position and select the best
    /// one against the policy.
    pub fn last_best_location(
        &self,
        min_distance_meters: u32,
        min_time_millis: i64,
    ) -> SelectionResult {
        let samples = self
            .registry
            .providers()
            .into_iter()
            .map(|provider| self.registry.last_known(&provider));

        select(samples, min_distance_meters, min_time_millis)
    }

    /// Kick off a one-shot fix. Each call creates a fresh handle; the
    /// registry resolves it when (if) the update arrives.
    pub fn request_single_fix(&self, criteria: &FixCriteria) -> Result<PendingFix> {
        let (fix, resolver) = PendingFix::new();
        self.registry.request_single_update(criteria, resolver)?;
        Ok(fix)
    }

    pub fn registry(&self) -> &R {
        &self.registry
    }
}
