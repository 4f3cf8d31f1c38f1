use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::utils::date_format;

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ExpenseStatus {
    Paid,
    Pending,
    Overdue,
}

impl fmt::Display for ExpenseStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExpenseStatus::Paid => write!(f, "paid"),
            ExpenseStatus::Pending => write!(f, "pending"),
            ExpenseStatus::Overdue => write!(f, "overdue"),
        }
    }
}

/// Despesa escolar de um aluno
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Expense {
    pub id: String,
    pub title: String,
    pub student_id: String,
    pub amount: f64,
    #[serde(with = "date_format")]
    pub date: NaiveDate,
    pub category: String,
    pub status: ExpenseStatus,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct CreateExpenseRequest {
    pub title: String,
    pub student_id: String,
    pub amount: f64,
    #[serde(with = "date_format")]
    pub date: NaiveDate,
    pub category: String,
    pub status: ExpenseStatus,
}

#[derive(Debug, Default, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct UpdateExpenseRequest {
    pub title: Option<String>,
    pub student_id: Option<String>,
    pub amount: Option<f64>,
    #[serde(default, with = "date_format::option")]
    pub date: Option<NaiveDate>,
    pub category: Option<String>,
    pub status: Option<ExpenseStatus>,
}

impl CreateExpenseRequest {
    pub fn into_expense(self, id: String) -> Expense {
        Expense {
            id,
            title: self.title,
            student_id: self.student_id,
            amount: self.amount,
            date: self.date,
            category: self.category,
            status: self.status,
        }
    }
}

impl Expense {
    pub fn merged(&self, update: UpdateExpenseRequest) -> Expense {
        Expense {
            id: self.id.clone(),
            title: update.title.unwrap_or_else(|| self.title.clone()),
            student_id: update.student_id.unwrap_or_else(|| self.student_id.clone()),
            amount: update.amount.unwrap_or(self.amount),
            date: update.date.unwrap_or(self.date),
            category: update.category.unwrap_or_else(|| self.category.clone()),
            status: update.status.unwrap_or(self.status),
        }
    }

    pub fn is_outstanding(&self) -> bool {
        matches!(self.status, ExpenseStatus::Pending | ExpenseStatus::Overdue)
    }
}
