use dotenv::dotenv;
use futures::future::join_all;

use edusave_service::config::AppConfig;
use edusave_service::database::FixtureStore;
use edusave_service::loading_state::LoadingState;
use edusave_service::screens::{
    ExpenseFilter, ExpensesScreen, HomeScreen, ProfileScreen, SaveScreen, Screen,
};
use edusave_service::services::ApiService;
use edusave_service::utils::format_amount;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables
    dotenv().ok();

    // Initialize logger
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = AppConfig::from_env()?;

    log::info!("🚀 Starting EduSave...");
    log::info!(
        "🌐 Simulated API: {}-{}ms latency, {:.0}% failure rate",
        config.api.delay_min_ms,
        config.api.delay_max_ms,
        config.api.failure_rate * 100.0
    );
    log::info!(
        "⏳ Loader delay: {}-{}ms",
        config.loader.delay_min_ms,
        config.loader.delay_max_ms
    );

    let api = ApiService::new(FixtureStore::seeded(), config.api.clone())?;

    let home = HomeScreen::new(api.clone(), &config.loader);
    let save = SaveScreen::new(api.clone(), &config.loader);
    let expenses = ExpensesScreen::new(api.clone(), &config.loader);
    let profile = ProfileScreen::new(api.clone(), &config.loader);

    let screens: Vec<&dyn Screen> = vec![&home, &save, &expenses, &profile];
    join_all(screens.iter().map(|screen| screen.load())).await;

    log::info!("👋 Hello, {} ({})", profile.display_name(), profile.display_email());

    if let Some(dashboard) = home.dashboard.data() {
        log::debug!("📄 Dashboard payload: {}", serde_json::to_string(&dashboard)?);
        log::info!(
            "📊 Saved {} | Expenses {} | {} upcoming payments | {}% of goal",
            format_amount(dashboard.total_saved),
            format_amount(dashboard.total_expenses),
            dashboard.upcoming_payments,
            dashboard.savings_goal_progress
        );
    }

    for plan in save.savings_plans.data().unwrap_or_default() {
        log::info!(
            "   💰 {} [{}]: {} / {} ({}%), due {}",
            plan.name,
            plan.status,
            format_amount(plan.current_amount),
            format_amount(plan.target_amount),
            plan.progress_percentage(),
            edusave_service::utils::date_format::to_display(&plan.due_date)
        );
    }

    log::info!(
        "🧾 {} pending expenses, {} outstanding",
        expenses.filtered(ExpenseFilter::Pending).len(),
        format_amount(expenses.outstanding_total())
    );

    for transaction in home.transactions.data().unwrap_or_default() {
        log::info!("   🔁 {}: {}", transaction.title, format_amount(transaction.signed_amount()));
    }

    report_failure(&home.dashboard);
    report_failure(&home.students);
    report_failure(&home.transactions);
    report_failure(&save.savings_plans);
    report_failure(&expenses.expenses);
    report_failure(&profile.user);

    let metrics = api.metrics();
    log::info!(
        "✅ Done: {} simulated requests, {} failed",
        metrics.requests_total,
        metrics.failures_total
    );

    Ok(())
}

fn report_failure<T: Clone>(state: &LoadingState<T>) {
    if let Some(error) = state.error() {
        log::error!("❌ {} failed to load: {}", state.label(), error);
    }
}
