use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::utils::date_format;

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    Deposit,
    Withdrawal,
    Payment,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Transaction {
    pub id: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub amount: f64,
    #[serde(with = "date_format")]
    pub date: NaiveDate,
    #[serde(rename = "type")]
    pub transaction_type: TransactionType,
}

impl Transaction {
    /// Valor com sinal: depósitos entram, saques e pagamentos saem
    pub fn signed_amount(&self) -> f64 {
        match self.transaction_type {
            TransactionType::Deposit => self.amount,
            TransactionType::Withdrawal | TransactionType::Payment => -self.amount,
        }
    }
}
