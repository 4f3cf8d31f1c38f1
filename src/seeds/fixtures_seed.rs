use crate::database::FixtureStore;
use crate::models::{
    DashboardSummary, Expense, ExpenseStatus, PlanStatus, SavingsPlan, Student, Transaction,
    TransactionType, User,
};
use crate::utils::date_format::ymd;

/// Monta o store com os dados de exemplo do app
pub fn build_default_store() -> FixtureStore {
    FixtureStore::new(
        default_user(),
        default_students(),
        default_savings_plans(),
        default_expenses(),
        default_transactions(),
        default_dashboard(),
    )
}

fn default_user() -> User {
    User {
        id: "1".into(),
        name: "Mr. Fred".into(),
        email: "fred.mensah@example.com".into(),
        phone: "+233 55 123 4567".into(),
    }
}

fn default_students() -> Vec<Student> {
    vec![
        Student {
            id: "1".into(),
            name: "Abena Mensah".into(),
            school: "Golden Gate International School".into(),
            grade: "Grade 9".into(),
            image_url: Some("https://images.pexels.com/photos/3755511/pexels-photo-3755511.jpeg?auto=compress&cs=tinysrgb&fit=crop&h=500&w=500".into()),
        },
        Student {
            id: "2".into(),
            name: "Kwame Mensah".into(),
            school: "Future Academy".into(),
            grade: "Grade 6".into(),
            image_url: Some("https://images.pexels.com/photos/5212339/pexels-photo-5212339.jpeg?auto=compress&cs=tinysrgb&fit=crop&h=500&w=500".into()),
        },
    ]
}

fn default_savings_plans() -> Vec<SavingsPlan> {
    vec![
        SavingsPlan {
            id: "1".into(),
            name: "School Fees 2025".into(),
            student_id: "1".into(),
            current_amount: 3500.00,
            target_amount: 5000.00,
            due_date: ymd(2025, 9, 5),
            interval: "Monthly".into(),
            status: PlanStatus::Active,
        },
        SavingsPlan {
            id: "2".into(),
            name: "Summer Camp".into(),
            student_id: "1".into(),
            current_amount: 1200.00,
            target_amount: 1200.00,
            due_date: ymd(2025, 7, 15),
            interval: "Weekly".into(),
            status: PlanStatus::Completed,
        },
        SavingsPlan {
            id: "3".into(),
            name: "School Fees 2025".into(),
            student_id: "2".into(),
            current_amount: 1800.00,
            target_amount: 4500.00,
            due_date: ymd(2025, 8, 30),
            interval: "Monthly".into(),
            status: PlanStatus::Active,
        },
    ]
}

fn default_expenses() -> Vec<Expense> {
    vec![
        Expense {
            id: "1".into(),
            title: "Term 2 Fees".into(),
            student_id: "1".into(),
            amount: 2500.00,
            date: ymd(2025, 3, 15),
            category: "Tuition".into(),
            status: ExpenseStatus::Paid,
        },
        Expense {
            id: "2".into(),
            title: "School Uniform".into(),
            student_id: "1".into(),
            amount: 350.00,
            date: ymd(2025, 3, 22),
            category: "Uniform".into(),
            status: ExpenseStatus::Pending,
        },
        Expense {
            id: "3".into(),
            title: "School Books".into(),
            student_id: "2".into(),
            amount: 420.00,
            date: ymd(2025, 2, 28),
            category: "Books".into(),
            status: ExpenseStatus::Paid,
        },
    ]
}

fn default_transactions() -> Vec<Transaction> {
    vec![
        Transaction {
            id: "1".into(),
            title: "Saved to School Fees 2025".into(),
            description: Some("Abena Mensah".into()),
            amount: 500.00,
            date: ymd(2025, 4, 1),
            transaction_type: TransactionType::Deposit,
        },
        Transaction {
            id: "2".into(),
            title: "Paid Term 2 Fees".into(),
            description: Some("Abena Mensah".into()),
            amount: 2500.00,
            date: ymd(2025, 3, 15),
            transaction_type: TransactionType::Payment,
        },
        Transaction {
            id: "3".into(),
            title: "Saved to School Fees 2025".into(),
            description: Some("Kwame Mensah".into()),
            amount: 600.00,
            date: ymd(2025, 3, 1),
            transaction_type: TransactionType::Deposit,
        },
        Transaction {
            id: "4".into(),
            title: "Withdrawal for Exam Fees".into(),
            description: Some("Abena Mensah".into()),
            amount: 200.00,
            date: ymd(2025, 2, 10),
            transaction_type: TransactionType::Withdrawal,
        },
    ]
}

// Mantido estático como no app; bate com a soma dos planos e despesas
fn default_dashboard() -> DashboardSummary {
    DashboardSummary {
        total_saved: 6500.00,
        total_expenses: 3270.00,
        upcoming_payments: 2,
        savings_goal_progress: 65,
    }
}
