//! Transactions: the model, the pages for listing and editing them, and the
//! endpoints the pages submit to.
//!
//! Records are read through the shared [crate::store::TransactionStore] and
//! every change goes through it so that the cached list is refetched.

mod core;
mod create_endpoint;
mod create_page;
mod delete_endpoint;
mod delete_page;
mod edit_endpoint;
mod edit_page;
mod fixtures;
mod form;
mod transactions_page;
mod view;

pub use core::{NewTransaction, Transaction, TransactionId, TransactionPatch, TransactionType};
pub use create_endpoint::create_transaction_endpoint;
pub use create_page::{NewTransactionPageState, get_new_transaction_page};
pub use delete_endpoint::{DeleteQuery, delete_transaction_endpoint};
pub use delete_page::get_delete_transaction_page;
pub use edit_endpoint::edit_transaction_endpoint;
pub use edit_page::get_edit_transaction_page;
pub use fixtures::seed_transactions;
pub use form::{CATEGORIES, FormError, TransactionForm};
pub use transactions_page::{TransactionFilters, get_transactions_page};
