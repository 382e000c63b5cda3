// src/location/simulated.rs
//! Simulated location provider registry
//!
//! Stands in for a platform location stack in the demo binary and in
//! tests: providers report scripted last-known samples, and a one-shot
//! update is delivered from a background task after a configurable
//! delay.

use crate::error::{GeoError, Result};
use crate::location::fix::FixResolver;
use crate::location::provider::{FixCriteria, ProviderRegistry};
use crate::location::sample::LocationSample;
use std::time::Duration;
use tokio::time::sleep;

/// A scripted provider: a name plus an optional cached fix.
#[derive(Debug, Clone)]
struct SimulatedProvider {
    name: String,
    last_known: Option<LocationSample>,
}

/// Scripted [`ProviderRegistry`] implementation.
#[derive(Debug, Clone, Default)]
pub struct SimulatedRegistry {
    providers: Vec<SimulatedProvider>,
    single_update: Option<LocationSample>,
    update_delay: Duration,
}

impl SimulatedRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a provider with an optional last-known sample. `None` models
    /// a provider that never produced a fix.
    pub fn with_provider(mut self, name: &str, last_known: Option<LocationSample>) -> Self {
        self.providers.push(SimulatedProvider {
            name: name.to_string(),
            last_known,
        });
        self
    }

    /// Script the sample a one-shot update will deliver, and how long
    /// the delivery takes.
    pub fn with_single_update(mut self, sample: LocationSample, delay: Duration) -> Self {
        self.single_update = Some(sample);
        self.update_delay = delay;
        self
    }
}

impl ProviderRegistry for SimulatedRegistry {
    fn providers(&self) -> Vec<String> {
        self.providers.iter().map(|p| p.name.clone()).collect()
    }

    fn last_known(&self, provider: &str) -> Option<LocationSample> {
        self.providers
            .iter()
            .find(|p| p.name == provider)
            .and_then(|p| p.last_known.clone())
    }

    fn request_single_update(&self, _criteria: &FixCriteria, resolver: FixResolver) -> Result<()> {
        let sample = self
            .single_update
            .clone()
            .ok_or_else(|| GeoError::Provider("no single update scripted".to_string()))?;
        let delay = self.update_delay;

        // Delivery happens on a runtime task, like a platform callback
        // arriving on its own thread.
        tokio::spawn(async move {
            sleep(delay).await;
            resolver.resolve(sample);
        });

        Ok(())
    }
}
