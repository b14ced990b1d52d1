use serde::{Deserialize, Serialize};

use super::{Cost, is_valid_cost};

/// A single named cost entry.
///
/// Names are not unique: two expenses called "Coffee" are separate records.
/// Fields are never changed once the record exists; sorting only moves it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    name: String,
    cost: Cost,
}

impl Expense {
    /// Create a new expense, rejecting an empty name or a non-positive cost.
    pub fn new(name: impl Into<String>, cost: Cost) -> Result<Self, ValidationError> {
        let name = name.into();
        if name.is_empty() || !is_valid_cost(cost) {
            return Err(ValidationError::InvalidExpense);
        }
        Ok(Self { name, cost })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn cost(&self) -> Cost {
        self.cost
    }
}

/// Rejected user input. The ledger is never touched when one of these is returned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Empty name or a cost that is not strictly positive.
    InvalidExpense,
    /// A search with no name and no cost bounds.
    NoSearchCriteria,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::InvalidExpense => write!(f, "missing or invalid fields"),
            ValidationError::NoSearchCriteria => write!(f, "no search criteria"),
        }
    }
}

impl std::error::Error for ValidationError {}
