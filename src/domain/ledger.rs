use serde::{Deserialize, Serialize};

use super::{Cost, Expense, SearchCriteria, SearchMode, SortOrder, ValidationError};

/// The ordered collection of expenses for one run.
///
/// Insertion order is kept until [`Ledger::sort_by_cost`] reorders it.
/// This is also the exact shape written to the store.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Ledger {
    #[serde(default)]
    expenses: Vec<Expense>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.expenses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.expenses.is_empty()
    }

    pub fn expenses(&self) -> &[Expense] {
        &self.expenses
    }

    /// Validate and append a new expense, returning the stored record.
    pub fn add_expense(
        &mut self,
        name: impl Into<String>,
        cost: Cost,
    ) -> Result<&Expense, ValidationError> {
        let expense = Expense::new(name, cost)?;
        self.expenses.push(expense);
        Ok(&self.expenses[self.expenses.len() - 1])
    }

    /// Iterate over all expenses in current order, or `None` if there are none.
    pub fn view(&self) -> Option<std::slice::Iter<'_, Expense>> {
        if self.is_empty() {
            return None;
        }
        Some(self.expenses.iter())
    }

    /// Total cost of every expense, or `None` for an empty ledger.
    pub fn total(&self) -> Option<Cost> {
        if self.is_empty() {
            return None;
        }
        Some(self.expenses.iter().map(Expense::cost).sum())
    }

    /// All expenses matching the criteria, in ledger order.
    pub fn search(&self, criteria: &SearchCriteria) -> Result<Vec<&Expense>, ValidationError> {
        self.search_with(criteria, SearchMode::Criteria)
    }

    pub fn search_with(
        &self,
        criteria: &SearchCriteria,
        mode: SearchMode,
    ) -> Result<Vec<&Expense>, ValidationError> {
        criteria.validate()?;

        let first_only = mode == SearchMode::FirstByName
            && !criteria.name.is_empty()
            && !criteria.has_cost_bounds();
        if first_only {
            return Ok(self.find_by_name(&criteria.name).into_iter().collect());
        }

        Ok(self
            .expenses
            .iter()
            .filter(|expense| criteria.matches(expense))
            .collect())
    }

    /// First expense with exactly this name.
    pub fn find_by_name(&self, name: &str) -> Option<&Expense> {
        self.expenses.iter().find(|expense| expense.name() == name)
    }

    /// Stable sort by cost; equal costs keep their relative order.
    pub fn sort_by_cost(&mut self, order: SortOrder) {
        match order {
            SortOrder::Ascending => self
                .expenses
                .sort_by(|a, b| a.cost().total_cmp(&b.cost())),
            SortOrder::Descending => self
                .expenses
                .sort_by(|a, b| b.cost().total_cmp(&a.cost())),
        }
    }
}
