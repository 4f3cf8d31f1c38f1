use crate::models::{UpdateUserRequest, User};
use crate::services::ApiService;
use crate::utils::AppError;

impl ApiService {
    pub async fn get_user(&self) -> Result<User, AppError> {
        log::debug!("👤 get_user");
        self.simulate_request(self.store().user().clone()).await
    }

    pub async fn update_user(&self, update: UpdateUserRequest) -> Result<User, AppError> {
        log::debug!("👤 update_user");
        let merged = self.store().user().merged(update);
        self.simulate_request(merged).await
    }
}
