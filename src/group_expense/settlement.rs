//! The settlement calculator for group expenses.
//!
//! Given what each participant paid towards a shared expense, works out a
//! short list of payments that leaves everyone having paid the same amount.

use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::{Error, currency::format_currency};

/// Balances and transfers at or below this amount are treated as zero.
///
/// Dividing the total between participants rarely produces exact cents, so
/// anything smaller than a cent is rounding noise rather than money owed.
pub const SETTLEMENT_THRESHOLD: f64 = 0.01;

/// A person taking part in a group expense.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Participant {
    /// The name of the person, unique within a group expense.
    pub name: String,
    /// How much the person paid out of their own pocket.
    pub spent: f64,
}

impl Participant {
    /// Create a participant who paid `spent` towards the expense.
    pub fn new(name: &str, spent: f64) -> Self {
        Self {
            name: name.to_owned(),
            spent,
        }
    }
}

/// A one-off payment from a participant who paid too little to one who paid
/// too much.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settlement {
    /// The name of the participant making the payment.
    pub from: String,
    /// The name of the participant receiving the payment.
    pub to: String,
    /// The amount to pay, rounded to cents. Always greater than
    /// [SETTLEMENT_THRESHOLD].
    pub amount: f64,
}

impl Display for Settlement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} pays {} to {}",
            self.from,
            format_currency(self.amount),
            self.to
        )
    }
}

/// How far a participant's spending is from the fair share.
///
/// Positive amounts mean the participant is owed money, negative amounts mean
/// they owe money.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Balance<'a> {
    /// The participant's name.
    pub name: &'a str,
    /// The participant's spending minus the fair share.
    pub amount: f64,
}

/// The sum of what every participant spent.
pub fn total_spent(participants: &[Participant]) -> f64 {
    participants.iter().map(|participant| participant.spent).sum()
}

/// The amount each participant should end up paying.
///
/// # Errors
/// Returns [Error::InvalidInput] if `participants` is empty since there is
/// nobody to share the expense between.
pub fn fair_share(participants: &[Participant]) -> Result<f64, Error> {
    if participants.is_empty() {
        return Err(Error::InvalidInput(
            "cannot split an expense between zero participants".to_owned(),
        ));
    }

    Ok(total_spent(participants) / participants.len() as f64)
}

/// Get each participant's balance against the fair share, in input order.
///
/// # Errors
/// Returns [Error::InvalidInput] if `participants` is empty.
pub fn balances(participants: &[Participant]) -> Result<Vec<Balance<'_>>, Error> {
    let fair_share = fair_share(participants)?;

    Ok(participants
        .iter()
        .map(|participant| Balance {
            name: &participant.name,
            amount: participant.spent - fair_share,
        })
        .collect())
}

/// Work out who should pay whom so that everyone pays the fair share.
///
/// Uses a greedy strategy: the participant who owes the most pays the
/// participant who is owed the most, as much as the smaller of the two
/// balances allows, until one side runs out. Participants with equal balances
/// are matched in the order they were given. Payments of a cent or less are
/// dropped.
///
/// This produces at most `participants.len() - 1` settlements but is not
/// guaranteed to find the fewest possible payments.
///
/// # Errors
/// Returns [Error::InvalidInput] if `participants` is empty.
pub fn compute_settlements(participants: &[Participant]) -> Result<Vec<Settlement>, Error> {
    let balances = balances(participants)?;

    let mut debtors: Vec<Balance> = balances
        .iter()
        .filter(|balance| balance.amount < 0.0)
        .copied()
        .collect();
    let mut creditors: Vec<Balance> = balances
        .iter()
        .filter(|balance| balance.amount > 0.0)
        .copied()
        .collect();

    // `sort_by` is stable, so ties keep their input order.
    debtors.sort_by(|a, b| a.amount.total_cmp(&b.amount));
    creditors.sort_by(|a, b| b.amount.total_cmp(&a.amount));

    let mut settlements = Vec::new();
    let mut debtor_index = 0;
    let mut creditor_index = 0;

    while debtor_index < debtors.len() && creditor_index < creditors.len() {
        let debtor = &mut debtors[debtor_index];
        let creditor = &mut creditors[creditor_index];
        let amount = debtor.amount.abs().min(creditor.amount);

        if amount > SETTLEMENT_THRESHOLD {
            settlements.push(Settlement {
                from: debtor.name.to_owned(),
                to: creditor.name.to_owned(),
                amount: round_to_cents(amount),
            });
        }

        debtor.amount += amount;
        creditor.amount -= amount;

        if debtor.amount.abs() < SETTLEMENT_THRESHOLD {
            debtor_index += 1;
        }

        if creditor.amount.abs() < SETTLEMENT_THRESHOLD {
            creditor_index += 1;
        }
    }

    Ok(settlements)
}

fn round_to_cents(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}

/// The outcome of splitting an expense: the totals and the payments needed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SettlementPlan {
    /// The sum of what every participant spent.
    pub total_amount: f64,
    /// The amount each participant should end up paying.
    pub fair_share: f64,
    /// The payments that settle the expense.
    pub settlements: Vec<Settlement>,
}

impl SettlementPlan {
    /// Compute the settlement plan for `participants`.
    ///
    /// # Errors
    /// Returns [Error::InvalidInput] if `participants` is empty.
    pub fn new(participants: &[Participant]) -> Result<Self, Error> {
        Ok(Self {
            total_amount: total_spent(participants),
            fair_share: fair_share(participants)?,
            settlements: compute_settlements(participants)?,
        })
    }
}


#[cfg(test)]
mod settlement_plan_tests {
    use super::{Participant, Settlement, SettlementPlan};

    #[test]
    fn includes_totals() {
        let participants = vec![Participant::new("A", 90.0), Participant::new("B", 30.0)];

        let plan = SettlementPlan::new(&participants).unwrap();

        assert_eq!(
            plan,
            SettlementPlan {
                total_amount: 120.0,
                fair_share: 60.0,
                settlements: vec![Settlement {
                    from: "B".to_owned(),
                    to: "A".to_owned(),
                    amount: 30.0
                }],
            }
        );
    }

    #[test]
    fn settlement_displays_as_sentence() {
        let settlement = Settlement {
            from: "Ana".to_owned(),
            to: "Juan".to_owned(),
            amount: 800.0,
        };

        assert_eq!(settlement.to_string(), "Ana pays $800.00 to Juan");
    }
}
