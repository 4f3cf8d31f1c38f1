use crate::models::{CreateSavingsPlanRequest, SavingsPlan, UpdateSavingsPlanRequest};
use crate::services::{api_service::new_record_id, ApiService};
use crate::utils::AppError;

impl ApiService {
    pub async fn get_savings_plans(&self) -> Result<Vec<SavingsPlan>, AppError> {
        log::debug!("💰 get_savings_plans");
        self.simulate_request(self.store().savings_plans().to_vec()).await
    }

    pub async fn get_savings_plan(&self, id: &str) -> Result<Option<SavingsPlan>, AppError> {
        log::debug!("💰 get_savings_plan {}", id);
        self.simulate_request(self.store().find_savings_plan(id).cloned()).await
    }

    /// Planos de um aluno, na ordem do fixture
    pub async fn get_student_savings_plans(
        &self,
        student_id: &str,
    ) -> Result<Vec<SavingsPlan>, AppError> {
        log::debug!("💰 get_student_savings_plans {}", student_id);
        let plans: Vec<SavingsPlan> = self
            .store()
            .savings_plans_for_student(student_id)
            .cloned()
            .collect();
        self.simulate_request(plans).await
    }

    pub async fn add_savings_plan(
        &self,
        plan: CreateSavingsPlanRequest,
    ) -> Result<SavingsPlan, AppError> {
        let plan = plan.into_plan(new_record_id());
        log::debug!("💰 add_savings_plan {} ({})", plan.name, plan.id);
        self.simulate_request(plan).await
    }

    pub async fn update_savings_plan(
        &self,
        id: &str,
        update: UpdateSavingsPlanRequest,
    ) -> Result<SavingsPlan, AppError> {
        log::debug!("💰 update_savings_plan {}", id);
        let merged = self.store().find_savings_plan(id).map(|p| p.merged(update));
        self.simulate_update(merged, "savings plan", id).await
    }
}
