// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! One shared provider per process.
//!
//! The first caller builds the provider; every later caller, concurrent or
//! not, observes the same fully configured instance. Since construction
//! runs exactly once, engine configuration cannot race with queries.

use std::sync::OnceLock;

use crate::adapter::EngineAdapter;
use crate::config::EphemerisSettings;
use crate::provider::EphemerisProvider;

type SharedProvider = Box<dyn EphemerisProvider>;

/// Write-once slot for a provider.
#[derive(Default)]
pub struct ProviderRegistry {
    slot: OnceLock<SharedProvider>,
}

impl ProviderRegistry {
    pub const fn new() -> Self {
        Self {
            slot: OnceLock::new(),
        }
    }

    /// Returns the provider, building it with `init` on first use.
    pub fn get_or_init<F>(&self, init: F) -> &dyn EphemerisProvider
    where
        F: FnOnce() -> SharedProvider,
    {
        self.slot
            .get_or_init(|| {
                let provider = init();
                tracing::info!(engine = %provider.describe().engine, "ephemeris provider initialised");
                provider
            })
            .as_ref()
    }

    /// Installs a ready-made provider. Hands it back if one is already set.
    pub fn install(&self, provider: SharedProvider) -> Result<(), SharedProvider> {
        self.slot.set(provider)
    }

    /// The provider, if it has been built.
    pub fn get(&self) -> Option<&dyn EphemerisProvider> {
        self.slot.get().map(|p| p.as_ref())
    }

    /// Releases the provider's engine resources. Meant for process teardown;
    /// a no-op when nothing was ever built.
    pub fn shutdown(&self) {
        if let Some(provider) = self.slot.get() {
            provider.close();
            tracing::info!("ephemeris provider shut down");
        }
    }
}

static GLOBAL: ProviderRegistry = ProviderRegistry::new();

/// The process-wide provider, configured from the environment on first use.
pub fn ephemeris_provider() -> &'static dyn EphemerisProvider {
    GLOBAL.get_or_init(|| Box::new(EngineAdapter::new(&EphemerisSettings::from_env())))
}

/// Closes the process-wide provider at teardown.
pub fn shutdown_provider() {
    GLOBAL.shutdown();
}
