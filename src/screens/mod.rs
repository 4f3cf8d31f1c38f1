//! Data-loading side of the app's tabs. Each screen owns its loaders and
//! fires the backend calls it needs; rendering is left to the caller.

pub mod home;
pub mod save;
pub mod expenses;
pub mod profile;

use std::sync::atomic::{AtomicBool, Ordering};

use futures::future::LocalBoxFuture;

pub use expenses::{ExpenseFilter, ExpensesScreen};
pub use home::HomeScreen;
pub use profile::ProfileScreen;
pub use save::SaveScreen;

pub trait Screen {
    fn name(&self) -> &'static str;

    /// Fetches everything the screen shows. Failures stay in the loaders.
    fn load(&self) -> LocalBoxFuture<'_, ()>;

    fn refresh_flag(&self) -> &RefreshFlag;

    /// Pull-to-refresh: reload while `is_refreshing()` reports true
    fn refresh(&self) -> LocalBoxFuture<'_, ()> {
        Box::pin(async move {
            self.refresh_flag().set(true);
            log::info!("🔄 Refreshing {} screen", self.name());
            self.load().await;
            self.refresh_flag().set(false);
        })
    }

    fn is_refreshing(&self) -> bool {
        self.refresh_flag().get()
    }
}

#[derive(Debug, Default)]
pub struct RefreshFlag(AtomicBool);

impl RefreshFlag {
    pub fn get(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }

    fn set(&self, value: bool) {
        self.0.store(value, Ordering::SeqCst);
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use crate::config::{LoaderConfig, SimulationConfig};
    use crate::database::FixtureStore;
    use crate::services::ApiService;

    pub fn api(failure_rate: f64) -> ApiService {
        ApiService::new(
            FixtureStore::seeded(),
            SimulationConfig {
                failure_rate,
                ..SimulationConfig::instant()
            },
        )
        .unwrap()
    }

    pub fn loader_config() -> LoaderConfig {
        LoaderConfig::default()
    }
}
