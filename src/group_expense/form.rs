//! Turns the raw text submitted for a new group expense into participants.

use std::collections::HashSet;

use serde::Deserialize;

use crate::{Error, group_expense::settlement::Participant};

/// The form data for creating a group expense.
///
/// Participants are sent as repeated fields, e.g.
/// `name=Lunch&participant_name=Ana&participant_spent=12.50&participant_name=Juan&participant_spent=0`.
/// The n-th name is paired with the n-th amount.
#[derive(Debug, Default, Deserialize)]
pub struct GroupExpenseForm {
    /// What the expense was for.
    #[serde(default)]
    pub name: String,
    /// The name of each participant.
    #[serde(default)]
    pub participant_name: Vec<String>,
    /// How much each participant spent, as entered.
    #[serde(default)]
    pub participant_spent: Vec<String>,
}

/// A group expense that has passed validation and is ready to be settled.
#[derive(Debug, Clone, PartialEq)]
pub struct NewGroupExpense {
    /// What the expense was for, trimmed.
    pub name: String,
    /// The participants in the order they were entered.
    pub participants: Vec<Participant>,
}

impl GroupExpenseForm {
    /// Check every field and build the participants.
    ///
    /// # Errors
    /// Returns an error describing the first problem found:
    /// - [Error::EmptyExpenseName] if the expense name is blank,
    /// - [Error::InvalidInput] if there are no participants or the number of
    ///   names and amounts differ,
    /// - [Error::MissingParticipantName], [Error::InvalidAmount],
    ///   [Error::NegativeAmount] or [Error::DuplicateParticipantName] for a
    ///   bad participant.
    pub fn validate(&self) -> Result<NewGroupExpense, Error> {
        let name = self.name.trim();

        if name.is_empty() {
            return Err(Error::EmptyExpenseName);
        }

        if self.participant_name.len() != self.participant_spent.len() {
            return Err(Error::InvalidInput(format!(
                "got {} participant names but {} amounts",
                self.participant_name.len(),
                self.participant_spent.len()
            )));
        }

        let participants = self
            .participant_name
            .iter()
            .zip(&self.participant_spent)
            .enumerate()
            .map(|(index, (name, spent))| {
                let name = name.trim();

                if name.is_empty() {
                    return Err(Error::MissingParticipantName(index + 1));
                }

                Ok(Participant::new(name, parse_amount(spent)?))
            })
            .collect::<Result<Vec<_>, _>>()?;

        validate_participants(&participants)?;

        Ok(NewGroupExpense {
            name: name.to_owned(),
            participants,
        })
    }
}

/// Parse an amount of money entered by a user, e.g. "12.50".
///
/// # Errors
/// Returns [Error::InvalidAmount] if `text` is blank or not a finite number,
/// and [Error::NegativeAmount] if it is less than zero.
pub fn parse_amount(text: &str) -> Result<f64, Error> {
    let text = text.trim();

    let amount: f64 = text
        .parse()
        .map_err(|_| Error::InvalidAmount(text.to_owned()))?;

    if !amount.is_finite() {
        return Err(Error::InvalidAmount(text.to_owned()));
    }

    if amount < 0.0 {
        return Err(Error::NegativeAmount(text.to_owned()));
    }

    Ok(amount)
}

/// Check that `participants` can be settled.
///
/// # Errors
/// Returns an error if there are no participants, a name is blank, an amount
/// is negative or not finite, or a name appears more than once.
pub fn validate_participants(participants: &[Participant]) -> Result<(), Error> {
    if participants.is_empty() {
        return Err(Error::InvalidInput(
            "a group expense needs at least one participant".to_owned(),
        ));
    }

    let mut seen_names = HashSet::new();

    for (index, participant) in participants.iter().enumerate() {
        if participant.name.trim().is_empty() {
            return Err(Error::MissingParticipantName(index + 1));
        }

        if !participant.spent.is_finite() {
            return Err(Error::InvalidAmount(participant.spent.to_string()));
        }

        if participant.spent < 0.0 {
            return Err(Error::NegativeAmount(participant.spent.to_string()));
        }

        let name = participant.name.trim();

        if !seen_names.insert(name) {
            return Err(Error::DuplicateParticipantName(name.to_owned()));
        }
    }

    Ok(())
}
