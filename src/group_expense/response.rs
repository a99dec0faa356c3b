//! The JSON representation of a group expense.

use serde::{Deserialize, Serialize};
use time::Date;

use crate::group_expense::{
    core::{GroupExpense, GroupExpenseId},
    settlement::{Participant, Settlement},
};

/// A group expense as sent to clients, including its totals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupExpenseResponse {
    /// The ID of the group expense.
    pub id: GroupExpenseId,
    /// What the expense was for.
    pub name: String,
    /// When the expense was recorded, e.g. "2024-01-15".
    pub created_date: Date,
    /// The sum of what every participant spent.
    pub total_amount: f64,
    /// The amount each participant should end up paying.
    pub fair_share: f64,
    /// The people sharing the expense.
    pub participants: Vec<Participant>,
    /// The payments that settle the expense.
    pub settlements: Vec<Settlement>,
}

impl From<GroupExpense> for GroupExpenseResponse {
    fn from(expense: GroupExpense) -> Self {
        Self {
            total_amount: expense.total_amount,
            fair_share: expense.fair_share,
            id: expense.id,
            name: expense.name,
            created_date: expense.created_date,
            participants: expense.participants,
            settlements: expense.settlements,
        }
    }
}
