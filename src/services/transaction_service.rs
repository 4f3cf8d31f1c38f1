use crate::models::Transaction;
use crate::services::ApiService;
use crate::utils::AppError;

impl ApiService {
    pub async fn get_transactions(&self) -> Result<Vec<Transaction>, AppError> {
        log::debug!("🔁 get_transactions");
        self.simulate_request(self.store().transactions().to_vec()).await
    }
}
