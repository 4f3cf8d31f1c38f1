use crate::models::{DashboardSummary, Expense, SavingsPlan, Student, Transaction, User};
use crate::seeds::fixtures_seed;

/// In-memory store standing in for the backend's database.
///
/// Built once and shared read-only by the service; writes never land here.
#[derive(Debug, Clone)]
pub struct FixtureStore {
    user: User,
    students: Vec<Student>,
    savings_plans: Vec<SavingsPlan>,
    expenses: Vec<Expense>,
    transactions: Vec<Transaction>,
    dashboard: DashboardSummary,
}

impl FixtureStore {
    pub fn new(
        user: User,
        students: Vec<Student>,
        savings_plans: Vec<SavingsPlan>,
        expenses: Vec<Expense>,
        transactions: Vec<Transaction>,
        dashboard: DashboardSummary,
    ) -> Self {
        Self {
            user,
            students,
            savings_plans,
            expenses,
            transactions,
            dashboard,
        }
    }

    /// Store populated with the default sample data
    pub fn seeded() -> Self {
        let store = fixtures_seed::build_default_store();
        log::debug!(
            "🌱 Fixture store seeded: {} students, {} plans, {} expenses, {} transactions",
            store.students.len(),
            store.savings_plans.len(),
            store.expenses.len(),
            store.transactions.len()
        );
        store
    }

    pub fn user(&self) -> &User {
        &self.user
    }

    pub fn students(&self) -> &[Student] {
        &self.students
    }

    pub fn savings_plans(&self) -> &[SavingsPlan] {
        &self.savings_plans
    }

    pub fn expenses(&self) -> &[Expense] {
        &self.expenses
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn dashboard(&self) -> &DashboardSummary {
        &self.dashboard
    }

    pub fn find_student(&self, id: &str) -> Option<&Student> {
        self.students.iter().find(|s| s.id == id)
    }

    pub fn find_savings_plan(&self, id: &str) -> Option<&SavingsPlan> {
        self.savings_plans.iter().find(|p| p.id == id)
    }

    pub fn find_expense(&self, id: &str) -> Option<&Expense> {
        self.expenses.iter().find(|e| e.id == id)
    }

    pub fn savings_plans_for_student<'a>(
        &'a self,
        student_id: &'a str,
    ) -> impl Iterator<Item = &'a SavingsPlan> + 'a {
        self.savings_plans.iter().filter(move |p| p.student_id == student_id)
    }

    pub fn expenses_for_student<'a>(
        &'a self,
        student_id: &'a str,
    ) -> impl Iterator<Item = &'a Expense> + 'a {
        self.expenses.iter().filter(move |e| e.student_id == student_id)
    }
}
