/// Costs are plain floating-point amounts; rounding only happens when printing.
pub type Cost = f64;

/// Format a cost as a human-readable amount with two decimals.
/// Example: 4.5 -> "$4.50", 15.5 -> "$15.50"
pub fn format_cost(cost: Cost) -> String {
    format!("${:.2}", cost)
}

/// Returns true if the value can be stored as the cost of a new expense.
pub fn is_valid_cost(cost: Cost) -> bool {
    cost.is_finite() && cost > 0.0
}
