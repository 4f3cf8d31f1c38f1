use futures::future::LocalBoxFuture;

use crate::config::LoaderConfig;
use crate::loading_state::{LoadingOptions, LoadingState};
use crate::models::{Expense, ExpenseStatus};
use crate::screens::{RefreshFlag, Screen};
use crate::services::ApiService;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExpenseFilter {
    #[default]
    All,
    Pending,
    Paid,
}

impl ExpenseFilter {
    pub fn matches(&self, expense: &Expense) -> bool {
        match self {
            ExpenseFilter::All => true,
            ExpenseFilter::Pending => expense.status == ExpenseStatus::Pending,
            ExpenseFilter::Paid => expense.status == ExpenseStatus::Paid,
        }
    }
}

pub struct ExpensesScreen {
    api: ApiService,
    pub expenses: LoadingState<Vec<Expense>>,
    refreshing: RefreshFlag,
}

impl ExpensesScreen {
    pub fn new(api: ApiService, config: &LoaderConfig) -> Self {
        Self {
            api,
            expenses: LoadingState::new("expenses", LoadingOptions::loading(), config.clone()),
            refreshing: RefreshFlag::default(),
        }
    }

    /// Expenses for the selected tab; empty until loaded
    pub fn filtered(&self, filter: ExpenseFilter) -> Vec<Expense> {
        self.expenses
            .data()
            .unwrap_or_default()
            .into_iter()
            .filter(|e| filter.matches(e))
            .collect()
    }

    pub fn outstanding_total(&self) -> f64 {
        self.expenses
            .data()
            .unwrap_or_default()
            .iter()
            .filter(|e| e.is_outstanding())
            .map(|e| e.amount)
            .sum()
    }

    async fn load_expenses(&self) {
        log::info!("🧾 Loading expenses screen");
        let api = &self.api;
        let _ = self.expenses.execute(|| api.get_expenses()).await;
    }
}

impl Screen for ExpensesScreen {
    fn name(&self) -> &'static str {
        "expenses"
    }

    fn load(&self) -> LocalBoxFuture<'_, ()> {
        Box::pin(self.load_expenses())
    }

    fn refresh_flag(&self) -> &RefreshFlag {
        &self.refreshing
    }
}
