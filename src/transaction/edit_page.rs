//! Defines the route handler for the page for editing a transaction.

use axum::{
    extract::{Path, State},
    response::{IntoResponse, Response},
};

use crate::{
    Error,
    endpoints::{self, format_endpoint},
    error_page::ErrorPage,
    store::TransactionStore,
    transaction::{
        Transaction, TransactionId,
        form::{FormAction, TransactionFormDefaults, transaction_form_view},
    },
};

/// Renders the page for editing a transaction.
///
/// The transaction is looked up in the cached list first and fetched from the
/// repository if the cache does not have it.
pub async fn get_edit_transaction_page(
    State(store): State<TransactionStore>,
    Path(transaction_id): Path<TransactionId>,
) -> Response {
    let transaction = match find_transaction(&store, &transaction_id).await {
        Ok(Some(transaction)) => transaction,
        Ok(None) => {
            return ErrorPage::not_found(
                &format!("Transaction with ID {transaction_id} not found."),
                "It may have been deleted. Go back to the transactions page and try again.",
            )
            .into_response();
        }
        Err(error) => {
            tracing::error!("Failed to retrieve transaction {transaction_id}: {error}");
            return error.into_response();
        }
    };

    let update_endpoint = format_endpoint(endpoints::TRANSACTION, &transaction.id);

    transaction_form_view(
        "Edit Transaction",
        FormAction::Update(&update_endpoint),
        &TransactionFormDefaults::from_transaction(&transaction),
    )
    .into_response()
}

async fn find_transaction(
    store: &TransactionStore,
    transaction_id: &str,
) -> Result<Option<Transaction>, Error> {
    if let Some(transaction) = store.get_local(transaction_id)? {
        return Ok(Some(transaction));
    }

    store.fetch_fresh(transaction_id).await
}

#[cfg(test)]
mod tests {
    use axum::{
        extract::{Path, State},
        http::StatusCode,
    };

    use crate::{
        mock_store::MockStore,
        repository::FallbackPolicy,
        store::TransactionStore,
        test_utils::{
            assert_form_input, assert_form_input_with_value, assert_form_select,
            assert_form_submit_button_with_text, assert_hx_endpoint, assert_status,
            assert_valid_html, must_get_form, offline_repository, offline_store, online_store,
            parse_html_document, select_all_text,
        },
        transaction::{TransactionPatch, form::CATEGORIES},
    };

    use super::get_edit_transaction_page;

    #[tokio::test]
    async fn form_is_prefilled_from_cache() {
        let (store, _) = offline_store().await;
        store.refresh().await.unwrap();

        let response = get_edit_transaction_page(State(store), Path("3".to_owned())).await;

        assert_status(&response, StatusCode::OK);
        let document = parse_html_document(response).await;
        assert_valid_html(&document);
        assert_eq!(select_all_text(&document, "h2"), ["Edit Transaction"]);

        let form = must_get_form(&document);
        assert_hx_endpoint(&form, "/transactions/3", "hx-put");
        assert_form_input(&form, "type_", "radio");
        assert_form_input_with_value(&form, "amount", "number", "1200.00");
        assert_form_input_with_value(&form, "date", "date", "2024-05-05");
        assert_form_select(&form, "category", &CATEGORIES, Some("Rent"));
        assert_form_submit_button_with_text(&form, "Update Transaction");
    }

    #[tokio::test]
    async fn fetches_transaction_missing_from_cache() {
        let store = online_store(MockStore::seeded()).await;

        let response = get_edit_transaction_page(State(store.clone()), Path("5".to_owned())).await;

        assert_status(&response, StatusCode::OK);
        assert!(!store.snapshot().unwrap().is_loaded());
        let document = parse_html_document(response).await;
        let form = must_get_form(&document);
        assert_form_input_with_value(&form, "description", "text", "Payment for freelance design work");
    }

    #[tokio::test]
    async fn unlisted_category_is_still_selectable() {
        let api_store = MockStore::seeded();
        api_store
            .update(
                "7",
                TransactionPatch {
                    category: Some("Commute".to_owned()),
                    ..Default::default()
                },
            )
            .unwrap();
        let store = online_store(api_store).await;

        let response = get_edit_transaction_page(State(store), Path("7".to_owned())).await;

        let document = parse_html_document(response).await;
        let form = must_get_form(&document);
        let mut options = CATEGORIES.to_vec();
        options.push("Commute");
        assert_form_select(&form, "category", &options, Some("Commute"));
    }

    #[tokio::test]
    async fn missing_transaction_is_not_found() {
        let (store, _) = offline_store().await;

        let response = get_edit_transaction_page(State(store), Path("999".to_owned())).await;

        assert_status(&response, StatusCode::NOT_FOUND);
        let document = parse_html_document(response).await;
        assert!(
            select_all_text(&document, "p")
                .iter()
                .any(|text| text == "Transaction with ID 999 not found.")
        );
    }

    #[tokio::test]
    async fn unreachable_api_without_fallback_is_server_error() {
        let (repository, _) = offline_repository(FallbackPolicy::Never).await;
        let store = TransactionStore::new(repository);

        let response = get_edit_transaction_page(State(store), Path("1".to_owned())).await;

        assert_status(&response, StatusCode::INTERNAL_SERVER_ERROR);
    }
}
