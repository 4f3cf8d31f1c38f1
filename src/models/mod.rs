pub mod user;
pub mod student;
pub mod savings_plan;
pub mod expense;
pub mod transaction;
pub mod dashboard;

pub use user::*;
pub use student::*;
pub use savings_plan::*;
pub use expense::*;
pub use transaction::*;
pub use dashboard::*;
