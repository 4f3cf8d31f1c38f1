pub mod api_service;
pub mod request_simulator;
pub mod user_service;
pub mod student_service;
pub mod savings_plan_service;
pub mod expense_service;
pub mod transaction_service;
pub mod dashboard_service;

pub use api_service::*;
pub use request_simulator::*;
