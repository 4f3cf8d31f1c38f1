use crate::models::DashboardSummary;
use crate::services::ApiService;
use crate::utils::AppError;

impl ApiService {
    pub async fn get_dashboard_data(&self) -> Result<DashboardSummary, AppError> {
        log::debug!("📊 get_dashboard_data");
        self.simulate_request(self.store().dashboard().clone()).await
    }
}
