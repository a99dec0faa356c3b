use time::{Date, macros::date};

use crate::{
    Error,
    group_expense::settlement::{Participant, Settlement, SettlementPlan},
};

/// The identifier the store assigns to a group expense.
pub type GroupExpenseId = i64;

/// A shared expense, who paid what towards it, and how to settle it.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupExpense {
    /// The ID of the group expense.
    pub id: GroupExpenseId,
    /// What the expense was for, e.g. "Birthday dinner".
    pub name: String,
    /// When the expense was recorded.
    pub created_date: Date,
    /// The people sharing the expense, in the order they were entered.
    pub participants: Vec<Participant>,
    /// The sum of what every participant spent.
    pub total_amount: f64,
    /// The amount each participant should end up paying.
    pub fair_share: f64,
    /// The payments that settle the expense.
    pub settlements: Vec<Settlement>,
}

/// Holds the group expenses recorded since the server started.
///
/// Expenses are kept in memory only and are lost when the process exits.
#[derive(Debug, Default)]
pub struct GroupExpenseStore {
    expenses: Vec<GroupExpense>,
    last_id: GroupExpenseId,
}

impl GroupExpenseStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a new group expense and compute its totals and settlements.
    ///
    /// IDs start at 1 and are never reused, even after a delete.
    ///
    /// # Errors
    /// Returns [Error::InvalidInput] if `participants` is empty.
    pub fn create(
        &mut self,
        name: &str,
        created_date: Date,
        participants: Vec<Participant>,
    ) -> Result<GroupExpense, Error> {
        let plan = SettlementPlan::new(&participants)?;

        self.last_id += 1;

        let expense = GroupExpense {
            id: self.last_id,
            name: name.to_owned(),
            created_date,
            participants,
            total_amount: plan.total_amount,
            fair_share: plan.fair_share,
            settlements: plan.settlements,
        };

        self.expenses.push(expense.clone());

        Ok(expense)
    }

    /// Get the group expense with `id`.
    ///
    /// # Errors
    /// Returns [Error::NotFound] if there is no group expense with `id`.
    pub fn get(&self, id: GroupExpenseId) -> Result<GroupExpense, Error> {
        self.expenses
            .iter()
            .find(|expense| expense.id == id)
            .cloned()
            .ok_or(Error::NotFound)
    }

    /// Get all group expenses, most recently created first.
    pub fn list(&self) -> Vec<GroupExpense> {
        self.expenses.iter().rev().cloned().collect()
    }

    /// Remove the group expense with `id`.
    ///
    /// # Errors
    /// Returns [Error::DeleteMissingGroupExpense] if there is no group expense with `id`.
    pub fn delete(&mut self, id: GroupExpenseId) -> Result<(), Error> {
        let index = self
            .expenses
            .iter()
            .position(|expense| expense.id == id)
            .ok_or(Error::DeleteMissingGroupExpense)?;

        self.expenses.remove(index);

        Ok(())
    }

    /// Add a couple of example group expenses for trying out the API.
    ///
    /// # Errors
    /// Returns an error if the example expenses could not be created.
    pub fn seed_examples(&mut self) -> Result<(), Error> {
        self.create(
            "Viaje a Córdoba",
            date!(2024 - 01 - 10),
            vec![
                Participant::new("Pedro", 8000.0),
                Participant::new("Laura", 2000.0),
                Participant::new("Diego", 2000.0),
            ],
        )?;

        self.create(
            "Cena de Cumpleaños",
            date!(2024 - 01 - 15),
            vec![
                Participant::new("Juan", 2400.0),
                Participant::new("María", 1200.0),
                Participant::new("Carlos", 800.0),
                Participant::new("Ana", 400.0),
            ],
        )?;

        Ok(())
    }
}

#[cfg(test)]
mod group_expense_store_tests {
    use time::macros::date;

    use crate::{
        Error,
        group_expense::{
            GroupExpenseStore,
            settlement::{Participant, Settlement, SettlementPlan},
        },
    };

    fn participants() -> Vec<Participant> {
        vec![Participant::new("A", 100.0), Participant::new("B", 0.0)]
    }

    #[test]
    fn create_assigns_increasing_ids() {
        let mut store = GroupExpenseStore::new();

        let first = store
            .create("Lunch", date!(2025 - 03 - 01), participants())
            .unwrap();
        let second = store
            .create("Dinner", date!(2025 - 03 - 01), participants())
            .unwrap();

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
    }

    #[test]
    fn create_computes_settlements() {
        let mut store = GroupExpenseStore::new();

        let expense = store
            .create("Lunch", date!(2025 - 03 - 01), participants())
            .unwrap();

        assert_eq!(
            expense.settlements,
            vec![Settlement {
                from: "B".to_owned(),
                to: "A".to_owned(),
                amount: 50.0
            }]
        );
        assert_eq!(expense.total_amount, 100.0);
        assert_eq!(expense.fair_share, 50.0);
    }

    #[test]
    fn create_stores_totals_from_settlement_plan() {
        let mut store = GroupExpenseStore::new();
        let participants = vec![
            Participant::new("A", 100.0),
            Participant::new("B", 0.0),
            Participant::new("C", 0.0),
        ];
        let want = SettlementPlan::new(&participants).unwrap();

        let expense = store
            .create("Taxi", date!(2025 - 03 - 01), participants)
            .unwrap();

        assert_eq!(expense.total_amount, want.total_amount);
        assert_eq!(expense.fair_share, want.fair_share);
        assert_eq!(expense.settlements, want.settlements);
    }

    #[test]
    fn create_fails_without_participants() {
        let mut store = GroupExpenseStore::new();

        let result = store.create("Lunch", date!(2025 - 03 - 01), vec![]);

        assert!(matches!(result, Err(Error::InvalidInput(_))));
        assert!(store.list().is_empty());
    }

    #[test]
    fn get_returns_created_expense() {
        let mut store = GroupExpenseStore::new();
        let want = store
            .create("Lunch", date!(2025 - 03 - 01), participants())
            .unwrap();

        let got = store.get(want.id);

        assert_eq!(got, Ok(want));
    }

    #[test]
    fn get_missing_expense_is_not_found() {
        let store = GroupExpenseStore::new();

        assert_eq!(store.get(42), Err(Error::NotFound));
    }

    #[test]
    fn list_returns_newest_first() {
        let mut store = GroupExpenseStore::new();
        store
            .create("First", date!(2025 - 03 - 01), participants())
            .unwrap();
        store
            .create("Second", date!(2025 - 03 - 02), participants())
            .unwrap();

        let names: Vec<String> = store
            .list()
            .into_iter()
            .map(|expense| expense.name)
            .collect();

        assert_eq!(names, vec!["Second", "First"]);
    }

    #[test]
    fn delete_removes_expense() {
        let mut store = GroupExpenseStore::new();
        let expense = store
            .create("Lunch", date!(2025 - 03 - 01), participants())
            .unwrap();

        store.delete(expense.id).unwrap();

        assert_eq!(store.get(expense.id), Err(Error::NotFound));
    }

    #[test]
    fn delete_missing_expense_fails() {
        let mut store = GroupExpenseStore::new();

        assert_eq!(store.delete(1), Err(Error::DeleteMissingGroupExpense));
    }

    #[test]
    fn ids_are_not_reused_after_delete() {
        let mut store = GroupExpenseStore::new();
        let first = store
            .create("Lunch", date!(2025 - 03 - 01), participants())
            .unwrap();
        store.delete(first.id).unwrap();

        let second = store
            .create("Dinner", date!(2025 - 03 - 01), participants())
            .unwrap();

        assert_eq!(second.id, 2);
    }

    #[test]
    fn seeds_example_expenses() {
        let mut store = GroupExpenseStore::new();

        store.seed_examples().unwrap();

        let expenses = store.list();
        assert_eq!(expenses.len(), 2);
        assert_eq!(expenses[0].name, "Cena de Cumpleaños");
        assert_eq!(expenses[0].total_amount, 4800.0);
        assert_eq!(
            expenses[0].settlements,
            vec![
                Settlement {
                    from: "Ana".to_owned(),
                    to: "Juan".to_owned(),
                    amount: 800.0
                },
                Settlement {
                    from: "Carlos".to_owned(),
                    to: "Juan".to_owned(),
                    amount: 400.0
                },
            ]
        );
    }
}
