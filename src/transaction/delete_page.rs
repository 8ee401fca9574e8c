//! The page asking the user to confirm deleting a transaction.

use axum::{
    extract::{Path, State},
    response::{IntoResponse, Response},
};
use maud::{Markup, html};

use crate::{
    endpoints::{self, format_endpoint},
    error_page::ErrorPage,
    html::{
        BUTTON_DELETE_STYLE, BUTTON_SECONDARY_STYLE, CARD_STYLE, FORM_CONTAINER_STYLE, base,
        format_signed_amount, loading_spinner,
    },
    navigation::NavBar,
    store::TransactionStore,
    transaction::{Transaction, TransactionId},
};

fn delete_transaction_view(transaction: &Transaction) -> Markup {
    let nav_bar = NavBar::new(endpoints::DELETE_TRANSACTION_VIEW).into_html();
    let delete_endpoint = format_endpoint(endpoints::TRANSACTION, &transaction.id);
    let spinner = loading_spinner();

    let content = html! {
        (nav_bar)

        main id="page-content" class=(FORM_CONTAINER_STYLE)
        {
            h2 class="text-xl font-bold mb-4" { "Delete Transaction" }

            p class="mb-4" { "Are you sure you want to delete this transaction?" }

            dl id="transaction-summary" class={ (CARD_STYLE) " w-full mb-4 grid grid-cols-2 gap-2" }
            {
                dt class="font-medium" { "Description" }
                dd { (transaction.description) }
                dt class="font-medium" { "Amount" }
                dd { (format_signed_amount(transaction.type_, transaction.amount)) }
                dt class="font-medium" { "Category" }
                dd { (transaction.category) }
                dt class="font-medium" { "Date" }
                dd { (transaction.date) }
            }

            form
                hx-delete=(delete_endpoint)
                hx-target-error="#alert-container"
                hx-indicator="#indicator"
                class="w-full space-y-2"
            {
                input type="hidden" name="confirmed" value="true";

                button type="submit" class=(BUTTON_DELETE_STYLE)
                {
                    span id="indicator" class="inline htmx-indicator" { (spinner) }
                    " Delete"
                }
            }

            a href=(endpoints::TRANSACTIONS_VIEW) class={ (BUTTON_SECONDARY_STYLE) " block text-center mt-2" }
            {
                "Cancel"
            }
        }
    };

    base("Delete Transaction", &[], &content)
}

/// Renders the confirmation page for deleting a transaction.
pub async fn get_delete_transaction_page(
    State(store): State<TransactionStore>,
    Path(transaction_id): Path<TransactionId>,
) -> Response {
    let found = match store.get_local(&transaction_id) {
        Ok(Some(transaction)) => Ok(Some(transaction)),
        Ok(None) => store.fetch_fresh(&transaction_id).await,
        Err(error) => Err(error),
    };

    match found {
        Ok(Some(transaction)) => delete_transaction_view(&transaction).into_response(),
        Ok(None) => ErrorPage::not_found(
            &format!("Transaction with ID {transaction_id} not found."),
            "It may have already been deleted.",
        )
        .into_response(),
        Err(error) => {
            tracing::error!("Failed to retrieve transaction {transaction_id}: {error}");
            error.into_response()
        }
    }
}
