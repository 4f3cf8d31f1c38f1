use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;
use std::time::Duration;

use rand::rngs::StdRng;
use rand::RngExt;
use serde::Serialize;

use crate::config::{self, SimulationConfig};
use crate::utils::AppError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RequestMetrics {
    pub requests_total: u64,
    pub failures_total: u64,
}

/// Envelope de latência/falha aplicado a toda chamada do backend mock
#[derive(Debug)]
pub struct RequestSimulator {
    config: SimulationConfig,
    rng: Mutex<StdRng>,
    requests: AtomicU64,
    failures: AtomicU64,
}

impl RequestSimulator {
    pub fn new(config: SimulationConfig) -> Result<Self, AppError> {
        config.validate()?;
        let rng = config::make_rng(config.seed);
        Ok(Self {
            config,
            rng: Mutex::new(rng),
            requests: AtomicU64::new(0),
            failures: AtomicU64::new(0),
        })
    }

    /// Delays for a random interval, then fails with probability
    /// `failure_rate` or hands `payload` back.
    pub async fn simulate_request<T>(&self, payload: T) -> Result<T, AppError> {
        self.requests.fetch_add(1, Ordering::Relaxed);

        let delay = self.next_delay();
        tokio::time::sleep(delay).await;

        if self.should_fail() {
            self.failures.fetch_add(1, Ordering::Relaxed);
            log::warn!("🌐 Simulated request failed after {}ms", delay.as_millis());
            return Err(AppError::network());
        }

        log::debug!("🌐 Simulated request resolved after {}ms", delay.as_millis());
        Ok(payload)
    }

    pub fn metrics(&self) -> RequestMetrics {
        RequestMetrics {
            requests_total: self.requests.load(Ordering::Relaxed),
            failures_total: self.failures.load(Ordering::Relaxed),
        }
    }

    fn next_delay(&self) -> Duration {
        // Poisoned lock only means a panic elsewhere; the RNG itself is still usable
        let mut rng = self.rng.lock().unwrap_or_else(|e| e.into_inner());
        config::pick_delay(&mut rng, self.config.delay_range())
    }

    fn should_fail(&self) -> bool {
        if self.config.failure_rate <= 0.0 {
            return false;
        }
        let mut rng = self.rng.lock().unwrap_or_else(|e| e.into_inner());
        rng.random_bool(self.config.failure_rate)
    }
}
