use tracing::debug;

use crate::domain::{Cost, Expense, Ledger, SearchCriteria, SearchMode, SortOrder};
use crate::storage::{LoadPolicy, Store};

use super::AppError;

/// One operation requested by the caller.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Add {
        name: String,
        cost: Cost,
    },
    /// List all expenses, optionally sorting first.
    View {
        sort: Option<SortOrder>,
    },
    /// Total all expenses, optionally sorting first.
    Summarize {
        sort: Option<SortOrder>,
    },
    Search {
        criteria: SearchCriteria,
        mode: SearchMode,
    },
    Sort {
        order: SortOrder,
    },
}

impl Action {
    pub fn name(&self) -> &'static str {
        match self {
            Action::Add { .. } => "add",
            Action::View { .. } => "view",
            Action::Summarize { .. } => "summarize",
            Action::Search { .. } => "search",
            Action::Sort { .. } => "sort",
        }
    }
}

/// What an action produced, for the caller to present.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Added(Expense),
    Listed(Vec<Expense>),
    Total(Cost),
    Found(Vec<Expense>),
    Sorted(SortOrder),
    /// Nothing recorded yet.
    Empty,
    /// A search matched no expenses.
    NoMatch,
}

/// Application service owning the store and the ledger loaded from it.
/// This is the primary interface for any client.
pub struct ExpenseService<S: Store> {
    store: S,
    ledger: Ledger,
}

impl<S: Store> ExpenseService<S> {
    /// Load the ledger from `store` according to `policy`.
    pub fn open(store: S, policy: LoadPolicy) -> Result<Self, AppError> {
        let ledger = store.load_with(policy)?;
        Ok(Self { store, ledger })
    }

    /// Wrap an already loaded ledger.
    pub fn with_ledger(store: S, ledger: Ledger) -> Self {
        Self { store, ledger }
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    // ========================
    // Ledger operations
    // ========================

    /// Record a new expense.
    pub fn add_expense(&mut self, name: &str, cost: Cost) -> Result<Expense, AppError> {
        let expense = self.ledger.add_expense(name, cost)?.clone();
        Ok(expense)
    }

    /// All expenses in current order, or `None` if nothing is recorded.
    pub fn view_expenses(&self) -> Option<impl Iterator<Item = &Expense>> {
        self.ledger.view()
    }

    /// Sum of all costs, or `None` if nothing is recorded.
    pub fn summarize_expenses(&self) -> Option<Cost> {
        self.ledger.total()
    }

    /// Expenses matching `criteria`. An empty result means no match.
    pub fn search_expenses(
        &self,
        criteria: &SearchCriteria,
        mode: SearchMode,
    ) -> Result<Vec<Expense>, AppError> {
        let found = self.ledger.search_with(criteria, mode)?;
        Ok(found.into_iter().cloned().collect())
    }

    pub fn sort_by_cost(&mut self, order: SortOrder) {
        self.ledger.sort_by_cost(order);
    }

    /// Run a single action against the ledger.
    pub fn execute(&mut self, action: Action) -> Result<Outcome, AppError> {
        debug!(action = action.name(), count = self.ledger.len(), "executing action");

        let outcome = match action {
            Action::Add { name, cost } => Outcome::Added(self.add_expense(&name, cost)?),

            Action::View { sort } => {
                if let Some(order) = sort {
                    self.sort_by_cost(order);
                }
                match self.view_expenses() {
                    Some(expenses) => Outcome::Listed(expenses.cloned().collect()),
                    None => Outcome::Empty,
                }
            }

            Action::Summarize { sort } => {
                if let Some(order) = sort {
                    self.sort_by_cost(order);
                }
                match self.summarize_expenses() {
                    Some(total) => Outcome::Total(total),
                    None => Outcome::Empty,
                }
            }

            Action::Search { criteria, mode } => {
                let found = self.search_expenses(&criteria, mode)?;
                if found.is_empty() {
                    Outcome::NoMatch
                } else {
                    Outcome::Found(found)
                }
            }

            Action::Sort { order } => {
                self.sort_by_cost(order);
                Outcome::Sorted(order)
            }
        };

        Ok(outcome)
    }

    /// Overwrite the store with the current ledger.
    pub fn save(&mut self) -> Result<(), AppError> {
        self.store.save(&self.ledger)?;
        Ok(())
    }
}
