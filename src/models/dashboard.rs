use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub total_saved: f64,
    pub total_expenses: f64,
    pub upcoming_payments: u32,
    /// 0-100
    pub savings_goal_progress: u8,
}
