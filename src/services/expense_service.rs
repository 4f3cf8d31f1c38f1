use crate::models::{CreateExpenseRequest, Expense, UpdateExpenseRequest};
use crate::services::{api_service::new_record_id, ApiService};
use crate::utils::AppError;

impl ApiService {
    pub async fn get_expenses(&self) -> Result<Vec<Expense>, AppError> {
        log::debug!("🧾 get_expenses");
        self.simulate_request(self.store().expenses().to_vec()).await
    }

    pub async fn get_expense(&self, id: &str) -> Result<Option<Expense>, AppError> {
        log::debug!("🧾 get_expense {}", id);
        self.simulate_request(self.store().find_expense(id).cloned()).await
    }

    pub async fn get_student_expenses(&self, student_id: &str) -> Result<Vec<Expense>, AppError> {
        log::debug!("🧾 get_student_expenses {}", student_id);
        let expenses: Vec<Expense> = self
            .store()
            .expenses_for_student(student_id)
            .cloned()
            .collect();
        self.simulate_request(expenses).await
    }

    pub async fn add_expense(&self, expense: CreateExpenseRequest) -> Result<Expense, AppError> {
        let expense = expense.into_expense(new_record_id());
        log::debug!("🧾 add_expense {} ({})", expense.title, expense.id);
        self.simulate_request(expense).await
    }

    pub async fn update_expense(
        &self,
        id: &str,
        update: UpdateExpenseRequest,
    ) -> Result<Expense, AppError> {
        log::debug!("🧾 update_expense {}", id);
        let merged = self.store().find_expense(id).map(|e| e.merged(update));
        self.simulate_update(merged, "expense", id).await
    }
}
