//! Totals computed from the cached transactions for the dashboard.

use std::collections::HashMap;

use crate::transaction::{Transaction, TransactionType};

/// Income, expense and balance totals.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub(super) struct Summary {
    pub income: f64,
    pub expenses: f64,
    /// Always `income - expenses`.
    pub balance: f64,
}

/// Sums the amounts of `transactions` by type.
///
/// # Returns
/// A [Summary] whose totals are all zero when `transactions` is empty.
pub(super) fn summarize(transactions: &[Transaction]) -> Summary {
    let (income, expenses) =
        transactions
            .iter()
            .fold((0.0, 0.0), |(income, expenses), transaction| {
                match transaction.type_ {
                    TransactionType::Income => (income + transaction.amount, expenses),
                    TransactionType::Expense => (income, expenses + transaction.amount),
                }
            });

    Summary {
        income,
        expenses,
        balance: income - expenses,
    }
}

/// The expenses of one category.
#[derive(Debug, Clone, PartialEq)]
pub(super) struct CategoryTotal {
    pub category: String,
    pub total: f64,
    /// The share of all expenses as a percentage, 0 to 100.
    pub percentage: f64,
}

/// Groups expenses by category.
///
/// Income is ignored.
///
/// # Returns
/// One entry per category, largest total first. Ties are ordered by category name.
pub(super) fn expenses_by_category(transactions: &[Transaction]) -> Vec<CategoryTotal> {
    let mut totals: HashMap<&str, f64> = HashMap::new();

    for transaction in transactions {
        if transaction.type_ == TransactionType::Expense {
            *totals.entry(transaction.category.as_str()).or_insert(0.0) += transaction.amount;
        }
    }

    let grand_total: f64 = totals.values().sum();

    let mut category_totals: Vec<CategoryTotal> = totals
        .into_iter()
        .map(|(category, total)| CategoryTotal {
            category: category.to_owned(),
            total,
            percentage: if grand_total > 0.0 {
                total * 100.0 / grand_total
            } else {
                0.0
            },
        })
        .collect();

    category_totals.sort_by(|a, b| {
        b.total
            .total_cmp(&a.total)
            .then_with(|| a.category.cmp(&b.category))
    });

    category_totals
}
