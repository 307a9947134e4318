//! Transaction data aggregation and budget comparison.
//!
//! Provides the pure functions behind the dashboard and charts views:
//! total spend, per-category totals, chart share rows, dense daily series,
//! and budget-vs-actual comparison with generated insight messages.
//!
//! Amounts are summed raw and rounded only at final output, so running
//! totals never accumulate rounding error from repeated truncation.

use std::collections::HashMap;

use serde::Serialize;
use time::Month;

use crate::{budget::Budgets, category::Category, transaction::Transaction};

/// One slice of the spending-by-category chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryShare {
    /// The category the slice belongs to.
    pub name: Category,
    /// The summed spending, rounded to two decimal places for display.
    pub value: f64,
}

/// The spending total for a single day of a month.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailyTotal {
    /// The day of the month, starting at 1.
    pub day: u8,
    /// The summed spending on that day, 0 when nothing was spent.
    pub amount: f64,
}

/// A budget-vs-actual comparison row for one budgeted category.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BudgetRow {
    /// The budgeted category.
    pub category: Category,
    /// The monthly limit for the category.
    pub budget: f64,
    /// The summed spending in the category, 0 when there is none.
    pub actual: f64,
    /// `budget - actual`. Negative values signify overspend.
    pub remaining: f64,
}

/// Sum the amounts of all transactions.
///
/// # Returns
/// The total spend, 0 for an empty input.
pub fn total_spend(transactions: &[Transaction]) -> f64 {
    transactions
        .iter()
        .map(|transaction| transaction.amount)
        .sum()
}

/// Aggregate transaction amounts by category.
///
/// # Returns
/// HashMap mapping each category with at least one transaction to its
/// summed amount. Categories absent from the input never appear.
pub fn category_totals(transactions: &[Transaction]) -> HashMap<Category, f64> {
    let mut totals = HashMap::new();

    for transaction in transactions {
        *totals.entry(transaction.category).or_insert(0.0) += transaction.amount;
    }

    totals
}

/// Build the per-category chart rows.
///
/// Rows appear in the order each category is first seen in the input,
/// which fixes the chart segment order. Values are rounded to two decimal
/// places for display.
pub fn category_share(transactions: &[Transaction]) -> Vec<CategoryShare> {
    let mut first_seen = Vec::new();
    let mut totals: HashMap<Category, f64> = HashMap::new();

    for transaction in transactions {
        if !totals.contains_key(&transaction.category) {
            first_seen.push(transaction.category);
        }
        *totals.entry(transaction.category).or_insert(0.0) += transaction.amount;
    }

    first_seen
        .into_iter()
        .map(|name| CategoryShare {
            name,
            value: round_to_cents(totals[&name]),
        })
        .collect()
}

/// Sum transaction amounts per day for the given month.
///
/// Only transactions dated within `year`/`month` are counted.
///
/// # Returns
/// One entry per calendar day of the month, in day order, with 0 for days
/// without transactions. The output is always dense so a chart has a point
/// for every day, and its length follows the civil calendar (29 entries
/// for February 2024, 28 for February 2023).
pub fn daily_series(transactions: &[Transaction], year: i32, month: Month) -> Vec<DailyTotal> {
    let mut totals_by_day: HashMap<u8, f64> = HashMap::new();

    for transaction in transactions {
        if transaction.date.year() == year && transaction.date.month() == month {
            *totals_by_day.entry(transaction.date.day()).or_insert(0.0) += transaction.amount;
        }
    }

    (1..=month.length(year))
        .map(|day| DailyTotal {
            day,
            amount: totals_by_day.get(&day).copied().unwrap_or(0.0),
        })
        .collect()
}

/// Compare actual spending against the budget mapping.
///
/// Rows follow the mapping's own entry order. A budgeted category with no
/// transactions gets an actual of 0; a category with transactions but no
/// budget entry produces no row at all — only budgeted categories are
/// reported.
///
/// `remaining` is not clamped, overspending yields a negative value.
pub fn budget_comparison(transactions: &[Transaction], budgets: &Budgets) -> Vec<BudgetRow> {
    let totals = category_totals(transactions);

    budgets
        .iter()
        .map(|(category, budget)| {
            let actual = totals.get(&category).copied().unwrap_or(0.0);

            BudgetRow {
                category,
                budget,
                actual,
                remaining: budget - actual,
            }
        })
        .collect()
}

/// The fraction of a budget below which it counts as nearly depleted.
const NEAR_DEPLETION_THRESHOLD: f64 = 0.2;

/// Generate textual alerts from budget comparison rows.
///
/// Each row is checked independently, in input order: overspent rows
/// produce an overspend message with the overage to two decimal places,
/// rows with less than 20% of their budget left produce a near-depletion
/// message with the remaining percentage to one decimal place.
pub fn generate_insights(rows: &[BudgetRow]) -> Vec<String> {
    let mut insights = Vec::new();

    for row in rows {
        if row.actual > row.budget {
            insights.push(format!(
                "Over budget in {} by ${:.2}",
                row.category,
                row.actual - row.budget
            ));
        } else if row.remaining < row.budget * NEAR_DEPLETION_THRESHOLD {
            insights.push(format!(
                "{} budget is nearly depleted ({:.1}% remaining)",
                row.category,
                row.remaining / row.budget * 100.0
            ));
        }
    }

    insights
}

/// Round a raw amount to two decimal places for display.
fn round_to_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
