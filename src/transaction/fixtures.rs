//! The transactions the mock store starts with.

use time::macros::date;

use super::core::{Transaction, TransactionType};

/// The eight sample transactions (two income, six expenses) in May 2024.
pub fn seed_transactions() -> Vec<Transaction> {
    let entry = |id: &str,
                 type_: TransactionType,
                 amount: f64,
                 category: &str,
                 date: time::Date,
                 description: &str| Transaction {
        id: id.to_owned(),
        type_,
        amount,
        category: category.to_owned(),
        date,
        description: description.to_owned(),
    };

    vec![
        entry(
            "1",
            TransactionType::Income,
            2000.0,
            "Salary",
            date!(2024 - 05 - 01),
            "Monthly paycheck",
        ),
        entry(
            "2",
            TransactionType::Expense,
            75.50,
            "Groceries",
            date!(2024 - 05 - 03),
            "Weekly grocery shopping at Trader Joes",
        ),
        entry(
            "3",
            TransactionType::Expense,
            1200.0,
            "Rent",
            date!(2024 - 05 - 05),
            "Monthly rent payment",
        ),
        entry(
            "4",
            TransactionType::Expense,
            45.00,
            "Entertainment",
            date!(2024 - 05 - 07),
            "Movie tickets and popcorn",
        ),
        entry(
            "5",
            TransactionType::Income,
            300.0,
            "Freelance",
            date!(2024 - 05 - 10),
            "Payment for freelance design work",
        ),
        entry(
            "6",
            TransactionType::Expense,
            22.99,
            "Utilities",
            date!(2024 - 05 - 12),
            "Internet bill",
        ),
        entry(
            "7",
            TransactionType::Expense,
            55.00,
            "Transport",
            date!(2024 - 05 - 15),
            "Monthly public transport pass",
        ),
        entry(
            "8",
            TransactionType::Expense,
            150.75,
            "Healthcare",
            date!(2024 - 05 - 20),
            "Dentist check-up",
        ),
    ]
}
