use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::utils::date_format;

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PlanStatus {
    Active,
    Completed,
    Overdue,
}

impl fmt::Display for PlanStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlanStatus::Active => write!(f, "active"),
            PlanStatus::Completed => write!(f, "completed"),
            PlanStatus::Overdue => write!(f, "overdue"),
        }
    }
}

/// Plano de poupança vinculado a um aluno
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SavingsPlan {
    pub id: String,
    pub name: String,
    pub student_id: String,
    pub current_amount: f64,
    pub target_amount: f64,
    #[serde(with = "date_format")]
    pub due_date: NaiveDate,
    /// Contribution cadence label ("Monthly", "Weekly", ...)
    pub interval: String,
    pub status: PlanStatus,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct CreateSavingsPlanRequest {
    pub name: String,
    pub student_id: String,
    pub current_amount: f64,
    pub target_amount: f64,
    #[serde(with = "date_format")]
    pub due_date: NaiveDate,
    pub interval: String,
    pub status: PlanStatus,
}

#[derive(Debug, Default, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSavingsPlanRequest {
    pub name: Option<String>,
    pub student_id: Option<String>,
    pub current_amount: Option<f64>,
    pub target_amount: Option<f64>,
    #[serde(default, with = "date_format::option")]
    pub due_date: Option<NaiveDate>,
    pub interval: Option<String>,
    pub status: Option<PlanStatus>,
}

impl CreateSavingsPlanRequest {
    pub fn into_plan(self, id: String) -> SavingsPlan {
        SavingsPlan {
            id,
            name: self.name,
            student_id: self.student_id,
            current_amount: self.current_amount,
            target_amount: self.target_amount,
            due_date: self.due_date,
            interval: self.interval,
            status: self.status,
        }
    }
}

impl SavingsPlan {
    pub fn merged(&self, update: UpdateSavingsPlanRequest) -> SavingsPlan {
        SavingsPlan {
            id: self.id.clone(),
            name: update.name.unwrap_or_else(|| self.name.clone()),
            student_id: update.student_id.unwrap_or_else(|| self.student_id.clone()),
            current_amount: update.current_amount.unwrap_or(self.current_amount),
            target_amount: update.target_amount.unwrap_or(self.target_amount),
            due_date: update.due_date.unwrap_or(self.due_date),
            interval: update.interval.unwrap_or_else(|| self.interval.clone()),
            status: update.status.unwrap_or(self.status),
        }
    }

    /// Progresso do plano (0-100), limitado a 100
    pub fn progress_percentage(&self) -> u32 {
        if self.target_amount <= 0.0 {
            return 0;
        }
        let pct = (self.current_amount / self.target_amount * 100.0).round();
        pct.clamp(0.0, 100.0) as u32
    }
}

/// Totais exibidos no topo da aba de poupança
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct SavingsSummary {
    pub total_saved: f64,
    pub total_target: f64,
}

impl SavingsSummary {
    pub fn from_plans(plans: &[SavingsPlan]) -> Self {
        plans.iter().fold(SavingsSummary::default(), |acc, plan| SavingsSummary {
            total_saved: acc.total_saved + plan.current_amount,
            total_target: acc.total_target + plan.target_amount,
        })
    }

    pub fn progress_percentage(&self) -> u32 {
        if self.total_target <= 0.0 {
            return 0;
        }
        (self.total_saved / self.total_target * 100.0).round().max(0.0) as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::date_format::ymd;

    fn plan(current: f64, target: f64) -> SavingsPlan {
        SavingsPlan {
            id: "p".into(),
            name: "School Fees".into(),
            student_id: "1".into(),
            current_amount: current,
            target_amount: target,
            due_date: ymd(2025, 9, 5),
            interval: "Monthly".into(),
            status: PlanStatus::Active,
        }
    }

    #[test]
    fn test_progress_is_rounded_and_capped() {
        assert_eq!(plan(3500.0, 5000.0).progress_percentage(), 70);
        assert_eq!(plan(1800.0, 4500.0).progress_percentage(), 40);
        assert_eq!(plan(1300.0, 1200.0).progress_percentage(), 100);
        assert_eq!(plan(10.0, 0.0).progress_percentage(), 0);
    }

    #[test]
    fn test_merge_keeps_id_and_unset_fields() {
        let original = plan(3500.0, 5000.0);
        let merged = original.merged(UpdateSavingsPlanRequest {
            current_amount: Some(5000.0),
            status: Some(PlanStatus::Completed),
            ..Default::default()
        });

        assert_eq!(merged.id, "p");
        assert_eq!(merged.current_amount, 5000.0);
        assert_eq!(merged.status, PlanStatus::Completed);
        assert_eq!(merged.target_amount, 5000.0);
        assert_eq!(merged.due_date, original.due_date);
    }

    #[test]
    fn test_serializes_with_camel_case_and_display_date() {
        let json = serde_json::to_value(plan(3500.0, 5000.0)).unwrap();
        assert_eq!(json["studentId"], "1");
        assert_eq!(json["dueDate"], "Sep 5, 2025");
        assert_eq!(json["status"], "active");
    }

    #[test]
    fn test_summary_progress() {
        let summary = SavingsSummary::from_plans(&[plan(3500.0, 5000.0), plan(1800.0, 4500.0)]);
        assert_eq!(summary.total_saved, 5300.0);
        assert_eq!(summary.total_target, 9500.0);
        assert_eq!(summary.progress_percentage(), 56);
        assert_eq!(SavingsSummary::default().progress_percentage(), 0);
    }
}
