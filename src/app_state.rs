//! Implements a struct that holds the state of the REST server.

use std::sync::{Arc, Mutex};

use crate::{Error, group_expense::GroupExpenseStore, timezone::get_local_offset};

/// The state of the REST server.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The local timezone as a canonical timezone name, e.g. "Pacific/Auckland".
    pub local_timezone: String,

    /// The group expenses recorded since the server started.
    pub group_expense_store: Arc<Mutex<GroupExpenseStore>>,
}

impl AppState {
    /// Create a new [AppState] that serves the expenses in `group_expense_store`.
    ///
    /// `local_timezone` should be a valid, canonical timezone name, e.g. "Pacific/Auckland".
    /// It is used to date new group expenses.
    ///
    /// # Errors
    /// Returns [Error::InvalidTimezoneError] if `local_timezone` is not a known timezone.
    pub fn new(local_timezone: &str, group_expense_store: GroupExpenseStore) -> Result<Self, Error> {
        if get_local_offset(local_timezone).is_none() {
            return Err(Error::InvalidTimezoneError(local_timezone.to_owned()));
        }

        Ok(Self {
            local_timezone: local_timezone.to_owned(),
            group_expense_store: Arc::new(Mutex::new(group_expense_store)),
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::{AppState, Error, group_expense::GroupExpenseStore};

    #[test]
    fn accepts_canonical_timezone() {
        let state = AppState::new("Pacific/Auckland", GroupExpenseStore::new());

        assert!(state.is_ok());
    }

    #[test]
    fn rejects_unknown_timezone() {
        let state = AppState::new("Middle/Earth", GroupExpenseStore::new());

        assert!(matches!(
            state,
            Err(Error::InvalidTimezoneError(timezone)) if timezone == "Middle/Earth"
        ));
    }
}
