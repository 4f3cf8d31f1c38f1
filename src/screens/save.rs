use futures::future::LocalBoxFuture;

use crate::config::LoaderConfig;
use crate::loading_state::{LoadingOptions, LoadingState};
use crate::models::{SavingsPlan, SavingsSummary};
use crate::screens::{RefreshFlag, Screen};
use crate::services::ApiService;

/// Aba de poupança: lista de planos e totais
pub struct SaveScreen {
    api: ApiService,
    pub savings_plans: LoadingState<Vec<SavingsPlan>>,
    pub summary: LoadingState<SavingsSummary>,
    refreshing: RefreshFlag,
}

impl SaveScreen {
    pub fn new(api: ApiService, config: &LoaderConfig) -> Self {
        Self {
            api,
            savings_plans: LoadingState::new("savings_plans", LoadingOptions::loading(), config.clone()),
            // Only ever written through set_data, so it never starts "loading"
            summary: LoadingState::new(
                "savings_summary",
                LoadingOptions::default().with_initial_state(SavingsSummary::default()),
                config.clone(),
            ),
            refreshing: RefreshFlag::default(),
        }
    }

    /// Overall progress across every plan, 0 until plans are loaded
    pub fn progress_percentage(&self) -> u32 {
        self.summary
            .data()
            .map(|s| s.progress_percentage())
            .unwrap_or(0)
    }

    async fn load_plans(&self) {
        log::info!("💰 Loading save screen");
        let api = &self.api;
        let summary = &self.summary;

        // Summary is written only when this call's plans are the ones kept
        let result = self
            .savings_plans
            .execute_with(
                || api.get_savings_plans(),
                |plans| summary.set_data(SavingsSummary::from_plans(plans)),
                |_| {},
            )
            .await;

        if let Ok(plans) = result {
            log::info!("✅ {} savings plans, {}% of target", plans.len(), self.progress_percentage());
        }
    }
}

impl Screen for SaveScreen {
    fn name(&self) -> &'static str {
        "save"
    }

    fn load(&self) -> LocalBoxFuture<'_, ()> {
        Box::pin(self.load_plans())
    }

    fn refresh_flag(&self) -> &RefreshFlag {
        &self.refreshing
    }
}
