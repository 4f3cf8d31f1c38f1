use futures::future::LocalBoxFuture;

use crate::config::LoaderConfig;
use crate::loading_state::{LoadingOptions, LoadingState};
use crate::models::{DashboardSummary, Expense, SavingsPlan, Student, Transaction};
use crate::screens::{RefreshFlag, Screen};
use crate::services::ApiService;

const RECENT_EXPENSES: usize = 2;
const RECENT_TRANSACTIONS: usize = 3;

/// Aba inicial: resumo, alunos, planos e atividade recente
pub struct HomeScreen {
    api: ApiService,
    pub dashboard: LoadingState<DashboardSummary>,
    pub students: LoadingState<Vec<Student>>,
    pub savings_plans: LoadingState<Vec<SavingsPlan>>,
    pub expenses: LoadingState<Vec<Expense>>,
    pub transactions: LoadingState<Vec<Transaction>>,
    refreshing: RefreshFlag,
}

impl HomeScreen {
    pub fn new(api: ApiService, config: &LoaderConfig) -> Self {
        Self {
            api,
            dashboard: LoadingState::new("dashboard", LoadingOptions::loading(), config.clone()),
            students: LoadingState::new("students", LoadingOptions::loading(), config.clone()),
            savings_plans: LoadingState::new("savings_plans", LoadingOptions::loading(), config.clone()),
            expenses: LoadingState::new("recent_expenses", LoadingOptions::loading(), config.clone()),
            transactions: LoadingState::new("recent_transactions", LoadingOptions::loading(), config.clone()),
            refreshing: RefreshFlag::default(),
        }
    }

    async fn load_all(&self) {
        log::info!("🏠 Loading home screen");
        let api = &self.api;

        // Each slot settles on its own; one failure doesn't block the others
        let _ = futures::join!(
            self.dashboard.execute(|| api.get_dashboard_data()),
            self.students.execute(|| api.get_students()),
            self.savings_plans.execute(|| api.get_savings_plans()),
            self.expenses.execute(|| async {
                let mut expenses = api.get_expenses().await?;
                expenses.truncate(RECENT_EXPENSES);
                Ok::<_, crate::utils::AppError>(expenses)
            }),
            self.transactions.execute(|| async {
                let mut transactions = api.get_transactions().await?;
                transactions.truncate(RECENT_TRANSACTIONS);
                Ok::<_, crate::utils::AppError>(transactions)
            }),
        );
    }
}

impl Screen for HomeScreen {
    fn name(&self) -> &'static str {
        "home"
    }

    fn load(&self) -> LocalBoxFuture<'_, ()> {
        Box::pin(self.load_all())
    }

    fn refresh_flag(&self) -> &RefreshFlag {
        &self.refreshing
    }
}
