use super::{Cost, Expense, ValidationError};

/// Direction for [`Ledger::sort_by_cost`](super::Ledger::sort_by_cost).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Ascending,
    Descending,
}

impl SortOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Ascending => "asc",
            SortOrder::Descending => "desc",
        }
    }

    /// Parse a sort token. Anything other than "desc" sorts ascending.
    pub fn parse(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "desc" => SortOrder::Descending,
            _ => SortOrder::Ascending,
        }
    }
}

impl std::fmt::Display for SortOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// How a search reports its matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchMode {
    /// Every record matching the name and cost bounds.
    #[default]
    Criteria,
    /// Only the first record with exactly this name, unless cost bounds are
    /// given, in which case it behaves like `Criteria`.
    FirstByName,
}

/// Search filter over name and cost range.
///
/// An empty name matches any name. A bound `<= 0` means "unbounded", so an
/// upper bound of exactly zero cannot be expressed.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchCriteria {
    pub name: String,
    pub min_cost: Cost,
    pub max_cost: Cost,
}

impl SearchCriteria {
    pub fn new(name: impl Into<String>, min_cost: Cost, max_cost: Cost) -> Self {
        Self {
            name: name.into(),
            min_cost,
            max_cost,
        }
    }

    pub fn by_name(name: impl Into<String>) -> Self {
        Self::new(name, 0.0, 0.0)
    }

    pub fn in_range(min_cost: Cost, max_cost: Cost) -> Self {
        Self::new("", min_cost, max_cost)
    }

    pub fn has_cost_bounds(&self) -> bool {
        self.min_cost > 0.0 || self.max_cost > 0.0
    }

    /// At least one of name, min or max must be set.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.is_empty() && !self.has_cost_bounds() {
            return Err(ValidationError::NoSearchCriteria);
        }
        Ok(())
    }

    pub fn matches(&self, expense: &Expense) -> bool {
        let name_match = self.name.is_empty() || expense.name() == self.name;
        let above_min = self.min_cost <= 0.0 || expense.cost() >= self.min_cost;
        let below_max = self.max_cost <= 0.0 || expense.cost() <= self.max_cost;
        name_match && above_min && below_max
    }
}
