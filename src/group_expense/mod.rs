//! Group expenses: splitting a shared expense fairly between participants.

mod core;
mod create_endpoint;
mod delete_endpoint;
mod form;
mod response;
mod settle_endpoint;
mod settlement;
mod view_endpoint;

pub use self::core::{GroupExpense, GroupExpenseId, GroupExpenseStore};
pub use create_endpoint::create_group_expense_endpoint;
pub use delete_endpoint::delete_group_expense_endpoint;
pub use form::{parse_amount, validate_participants};
pub use settle_endpoint::settle_endpoint;
pub use settlement::{
    Balance, Participant, SETTLEMENT_THRESHOLD, Settlement, SettlementPlan, balances,
    compute_settlements, fair_share, total_spent,
};
pub use view_endpoint::{get_group_expense_endpoint, list_group_expenses_endpoint};
