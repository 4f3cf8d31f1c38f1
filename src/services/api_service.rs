use std::sync::Arc;

use crate::config::SimulationConfig;
use crate::database::FixtureStore;
use crate::services::request_simulator::{RequestMetrics, RequestSimulator};
use crate::utils::AppError;

/// Backend mock: operações nomeadas sobre o fixture store.
///
/// Every call goes through [`RequestSimulator::simulate_request`]. Writes
/// return the merged record but never touch the store, so a later read still
/// shows the original fixtures.
#[derive(Debug, Clone)]
pub struct ApiService {
    store: Arc<FixtureStore>,
    simulator: Arc<RequestSimulator>,
}

impl ApiService {
    pub fn new(store: FixtureStore, config: SimulationConfig) -> Result<Self, AppError> {
        Ok(Self {
            store: Arc::new(store),
            simulator: Arc::new(RequestSimulator::new(config)?),
        })
    }

    pub fn store(&self) -> &FixtureStore {
        &self.store
    }

    pub fn metrics(&self) -> RequestMetrics {
        self.simulator.metrics()
    }

    pub(crate) async fn simulate_request<T>(&self, payload: T) -> Result<T, AppError> {
        self.simulator.simulate_request(payload).await
    }

    /// Runs an update through the request envelope; a missing record fails
    /// with `NotFound` once the simulated request has settled.
    pub(crate) async fn simulate_update<T>(
        &self,
        merged: Option<T>,
        entity: &str,
        id: &str,
    ) -> Result<T, AppError> {
        self.simulate_request(merged)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("{} '{}'", entity, id)))
    }
}

pub(crate) fn new_record_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;

    /// Service with no latency and no failures
    pub fn instant_service() -> ApiService {
        ApiService::new(FixtureStore::seeded(), SimulationConfig::instant()).unwrap()
    }

    pub fn failing_service() -> ApiService {
        ApiService::new(
            FixtureStore::seeded(),
            SimulationConfig {
                failure_rate: 1.0,
                ..SimulationConfig::instant()
            },
        )
        .unwrap()
    }
}
