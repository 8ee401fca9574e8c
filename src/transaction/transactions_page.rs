//! Defines the route handler for the page that lists transactions as a table.

use axum::{
    extract::{Query, State},
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::{
    Error, endpoints,
    store::{FIRST_LOAD_WAIT, TransactionStore},
    transaction::Transaction,
};

use super::view::transactions_view;

/// The filters for the transactions page. Both are optional and combined with AND.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionFilters {
    /// Matches transactions whose date (YYYY-MM-DD) contains this text, e.g. "2024-05".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    /// Matches transactions whose category contains this text, ignoring case.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl TransactionFilters {
    fn date_filter(&self) -> Option<&str> {
        self.date
            .as_deref()
            .map(str::trim)
            .filter(|date| !date.is_empty())
    }

    fn category_filter(&self) -> Option<String> {
        self.category
            .as_deref()
            .map(str::trim)
            .filter(|category| !category.is_empty())
            .map(str::to_lowercase)
    }

    /// Whether `transaction` passes every filter that is set.
    pub fn matches(&self, transaction: &Transaction) -> bool {
        let date_matches = self
            .date_filter()
            .is_none_or(|date| transaction.date.to_string().contains(date));

        let category_matches = self
            .category_filter()
            .is_none_or(|category| transaction.category.to_lowercase().contains(&category));

        date_matches && category_matches
    }

    /// The transactions that pass the filters, in their original order.
    pub fn apply<'a>(&self, transactions: &'a [Transaction]) -> Vec<&'a Transaction> {
        transactions
            .iter()
            .filter(|transaction| self.matches(transaction))
            .collect()
    }

    /// The URL of the transactions page with these filters applied.
    pub fn to_url(&self) -> String {
        match serde_urlencoded::to_string(self) {
            Ok(query) if !query.is_empty() => format!("{}?{query}", endpoints::TRANSACTIONS_VIEW),
            Ok(_) => endpoints::TRANSACTIONS_VIEW.to_owned(),
            Err(error) => {
                tracing::warn!("Could not encode transaction filters {self:?}: {error}");
                endpoints::TRANSACTIONS_VIEW.to_owned()
            }
        }
    }
}

/// Every category used by `transactions`, sorted and without duplicates.
pub fn distinct_categories(transactions: &[Transaction]) -> Vec<&str> {
    let mut categories: Vec<&str> = transactions
        .iter()
        .map(|transaction| transaction.category.as_str())
        .collect();
    categories.sort_unstable();
    categories.dedup();
    categories
}

/// Render the transaction list, loading it first if needed.
///
/// If the first load takes longer than [FIRST_LOAD_WAIT] the loading view is
/// rendered instead and polls this page until the list arrives.
pub async fn get_transactions_page(
    State(store): State<TransactionStore>,
    Query(filters): Query<TransactionFilters>,
) -> Result<Response, Error> {
    // A failed load is recorded in the snapshot and shown on the page.
    if let Err(error) = store.load_within(FIRST_LOAD_WAIT).await {
        tracing::warn!("Rendering transactions page after a failed load: {error}");
    }

    let snapshot = store.snapshot()?;

    Ok(transactions_view(&snapshot, &filters).into_response())
}

#[cfg(test)]
mod tests {
    use axum::{
        extract::{Query, State},
        http::StatusCode,
    };
    use scraper::Selector;

    use crate::{
        repository::FallbackPolicy,
        store::TransactionStore,
        test_utils::{
            assert_status, assert_valid_html, hanging_store, offline_repository, offline_store,
            parse_html_document, select_all_text,
        },
        transaction::seed_transactions,
    };

    use super::{TransactionFilters, distinct_categories, get_transactions_page};

    fn filters(date: Option<&str>, category: Option<&str>) -> TransactionFilters {
        TransactionFilters {
            date: date.map(str::to_owned),
            category: category.map(str::to_owned),
        }
    }

    #[test]
    fn no_filters_match_everything() {
        let transactions = seed_transactions();

        assert_eq!(
            TransactionFilters::default().apply(&transactions).len(),
            transactions.len()
        );
        assert_eq!(
            filters(Some("  "), Some("")).apply(&transactions).len(),
            transactions.len()
        );
    }

    #[test]
    fn category_filter_ignores_case_and_matches_substrings() {
        let transactions = seed_transactions();

        let rent = filters(None, Some("rEnT")).apply(&transactions);
        let partial: Vec<_> = filters(None, Some("ent"))
            .apply(&transactions)
            .into_iter()
            .map(|transaction| transaction.category.as_str())
            .collect();

        assert_eq!(rent.len(), 1);
        assert_eq!(rent[0].id, "3");
        assert_eq!(partial, ["Rent", "Entertainment"]);
    }

    #[test]
    fn date_filter_matches_substrings() {
        let transactions = seed_transactions();

        assert_eq!(
            filters(Some("2024-05"), None).apply(&transactions).len(),
            transactions.len()
        );
        let ids: Vec<_> = filters(Some("2024-05-1"), None)
            .apply(&transactions)
            .into_iter()
            .map(|transaction| transaction.id.as_str())
            .collect();
        assert_eq!(ids, ["5", "6", "7"]);
    }

    #[test]
    fn filters_combine_with_and() {
        let transactions = seed_transactions();

        assert_eq!(
            filters(Some("2024-05-05"), Some("Rent"))
                .apply(&transactions)
                .len(),
            1
        );
        assert!(
            filters(Some("2024-05-01"), Some("Rent"))
                .apply(&transactions)
                .is_empty()
        );
    }

    #[test]
    fn url_includes_set_filters() {
        assert_eq!(TransactionFilters::default().to_url(), "/transactions");
        assert_eq!(
            filters(Some("2024-05"), Some("Rent & Bills")).to_url(),
            "/transactions?date=2024-05&category=Rent+%26+Bills"
        );
    }

    #[test]
    fn categories_are_sorted_and_distinct() {
        let mut transactions = seed_transactions();
        transactions.extend(seed_transactions());

        let categories = distinct_categories(&transactions);

        assert_eq!(categories.len(), 8);
        assert!(categories.is_sorted());
    }

    #[tokio::test]
    async fn slow_first_load_polls_with_filters() {
        let store = hanging_store().await;

        let response = get_transactions_page(State(store), Query(filters(None, Some("Rent"))))
            .await
            .unwrap();

        assert_status(&response, StatusCode::OK);
        let document = parse_html_document(response).await;
        assert_eq!(
            select_all_text(&document, "#page-content p"),
            ["Loading transactions..."]
        );
        let poll_url = document
            .select(&Selector::parse("#page-content").unwrap())
            .next()
            .and_then(|content| content.value().attr("hx-get"))
            .map(str::to_owned);
        assert_eq!(poll_url.as_deref(), Some("/transactions?category=Rent"));
    }

    #[tokio::test]
    async fn page_lists_every_transaction() {
        let (store, _) = offline_store().await;

        let response = get_transactions_page(State(store), Query(TransactionFilters::default()))
            .await
            .unwrap();

        assert_status(&response, StatusCode::OK);
        let document = parse_html_document(response).await;
        assert_valid_html(&document);
        let rows = document
            .select(&Selector::parse("tbody tr[data-transaction-row]").unwrap())
            .count();
        assert_eq!(rows, 8);
        assert_eq!(
            document
                .select(&Selector::parse("datalist#categories option").unwrap())
                .count(),
            8
        );
        assert!(
            select_all_text(&document, "#fallback-notice p")
                .first()
                .is_some_and(|text| text.contains("offline sample data"))
        );
    }

    #[tokio::test]
    async fn rent_filter_shows_one_row() {
        let (store, _) = offline_store().await;

        let response = get_transactions_page(
            State(store),
            Query(filters(None, Some("Rent"))),
        )
        .await
        .unwrap();

        let document = parse_html_document(response).await;
        let amounts = select_all_text(&document, "tbody tr[data-transaction-row] td.amount");
        assert_eq!(amounts.len(), 1);
        assert!(amounts[0].starts_with("-$"), "got {}", amounts[0]);
    }

    #[tokio::test]
    async fn unknown_category_shows_empty_state() {
        let (store, _) = offline_store().await;

        let response = get_transactions_page(
            State(store),
            Query(filters(None, Some("Yachts"))),
        )
        .await
        .unwrap();

        let document = parse_html_document(response).await;
        assert_eq!(
            select_all_text(&document, "td[data-empty-state]"),
            ["No transactions found."]
        );
    }

    #[tokio::test]
    async fn failed_load_shows_error() {
        let (repository, _) = offline_repository(FallbackPolicy::Never).await;
        let store = TransactionStore::new(repository);

        let response = get_transactions_page(State(store), Query(TransactionFilters::default()))
            .await
            .unwrap();

        assert_status(&response, StatusCode::OK);
        let document = parse_html_document(response).await;
        assert_eq!(
            select_all_text(&document, "#error-notice p"),
            ["Error loading transactions: Failed to fetch transactions"]
        );
    }
}
