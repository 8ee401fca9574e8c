//! Defines the core data models for transactions.

use std::fmt::Display;

use serde::{Deserialize, Serialize};
use time::Date;

/// The ID the persistence layer (the API or the mock store) assigned to a transaction.
pub type TransactionId = String;

/// Whether money was earned or spent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    /// Money coming in, e.g. a salary.
    Income,
    /// Money going out, e.g. rent.
    Expense,
}

impl TransactionType {
    /// The lowercase name used in JSON and HTML forms.
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionType::Income => "income",
            TransactionType::Expense => "expense",
        }
    }

    /// Parse the lowercase name used in JSON and HTML forms.
    pub fn parse(text: &str) -> Option<Self> {
        match text {
            "income" => Some(TransactionType::Income),
            "expense" => Some(TransactionType::Expense),
            _ => None,
        }
    }
}

impl Display for TransactionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An expense or income, i.e. an event where money was either spent or earned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// The ID of the transaction.
    pub id: TransactionId,
    /// Whether the transaction is income or an expense.
    #[serde(rename = "type")]
    pub type_: TransactionType,
    /// The amount of money spent or earned, always positive.
    pub amount: f64,
    /// A label used to group transactions, e.g. "Groceries".
    pub category: String,
    /// When the transaction happened.
    pub date: Date,
    /// A text description of what the transaction was for.
    pub description: String,
}

impl Transaction {
    /// Attach `id` to the fields of a transaction that has not been stored yet.
    pub fn from_new(id: TransactionId, new_transaction: NewTransaction) -> Self {
        Self {
            id,
            type_: new_transaction.type_,
            amount: new_transaction.amount,
            category: new_transaction.category,
            date: new_transaction.date,
            description: new_transaction.description,
        }
    }

    /// Overwrite the fields that are set in `patch`.
    ///
    /// The ID is never changed.
    pub fn apply(&mut self, patch: TransactionPatch) {
        if let Some(type_) = patch.type_ {
            self.type_ = type_;
        }

        if let Some(amount) = patch.amount {
            self.amount = amount;
        }

        if let Some(category) = patch.category {
            self.category = category;
        }

        if let Some(date) = patch.date {
            self.date = date;
        }

        if let Some(description) = patch.description {
            self.description = description;
        }
    }
}

/// A transaction that has not been assigned an ID yet.
///
/// This is the request body for creating a transaction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewTransaction {
    /// Whether the transaction is income or an expense.
    #[serde(rename = "type")]
    pub type_: TransactionType,
    /// The amount of money spent or earned, always positive.
    pub amount: f64,
    /// A label used to group transactions, e.g. "Groceries".
    pub category: String,
    /// When the transaction happened.
    pub date: Date,
    /// A text description of what the transaction was for.
    pub description: String,
}

/// A partial update to a transaction. Fields set to `None` are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TransactionPatch {
    /// The new type.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub type_: Option<TransactionType>,
    /// The new amount.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<f64>,
    /// The new category.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// The new date.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<Date>,
    /// The new description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl From<NewTransaction> for TransactionPatch {
    /// A patch that replaces every field.
    fn from(value: NewTransaction) -> Self {
        Self {
            type_: Some(value.type_),
            amount: Some(value.amount),
            category: Some(value.category),
            date: Some(value.date),
            description: Some(value.description),
        }
    }
}
