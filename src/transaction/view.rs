//! HTML rendering for the transactions page.

use maud::{Markup, html};
use unicode_segmentation::UnicodeSegmentation;

use crate::{
    endpoints::{self, format_endpoint},
    html::{
        BUTTON_PRIMARY_STYLE, FORM_LABEL_STYLE, FORM_TEXT_INPUT_STYLE, LINK_STYLE,
        PAGE_CONTAINER_STYLE, TABLE_CELL_STYLE, TABLE_HEADER_STYLE, TABLE_ROW_STYLE, base,
        error_notice, fallback_notice, format_signed_amount, loading_view,
    },
    navigation::NavBar,
    repository::DataSource,
    store::Snapshot,
    transaction::{Transaction, TransactionType},
};

use super::transactions_page::{TransactionFilters, distinct_categories};

/// The max number of graphemes to display in the transaction table rows before
/// truncating and displaying ellipses.
const MAX_DESCRIPTION_GRAPHEMES: usize = 32;

fn amount_class(type_: TransactionType) -> &'static str {
    match type_ {
        TransactionType::Expense => "text-red-700 dark:text-red-300",
        TransactionType::Income => "text-green-700 dark:text-green-300",
    }
}

pub(crate) fn transactions_view(snapshot: &Snapshot, filters: &TransactionFilters) -> Markup {
    let nav_bar = NavBar::new(endpoints::TRANSACTIONS_VIEW).into_html();

    if !snapshot.is_loaded() && snapshot.loading {
        let content = html! {
            (nav_bar)
            main class=(PAGE_CONTAINER_STYLE)
            {
                (loading_view("Loading transactions...", &filters.to_url()))
            }
        };

        return base("Transactions", &[], &content);
    }

    let rows = filters.apply(&snapshot.transactions);
    let categories = distinct_categories(&snapshot.transactions);

    let content = html! {
        (nav_bar)

        main id="page-content" class=(PAGE_CONTAINER_STYLE)
        {
            section class="space-y-4 w-full lg:max-w-5xl" id="transactions-content"
            {
                header class="flex justify-between flex-wrap items-end"
                {
                    h1 class="text-xl font-bold" { "Transactions" }

                    a href=(endpoints::NEW_TRANSACTION_VIEW) class=(LINK_STYLE)
                    {
                        "New Transaction"
                    }
                }

                @if let Some(error) = &snapshot.error {
                    (error_notice(&format!("Error loading transactions: {error}")))
                }

                @if snapshot.source == Some(DataSource::Fallback) {
                    (fallback_notice())
                }

                (filter_form(filters, &categories))

                div class="rounded bg-gray-50 dark:bg-gray-800 overflow-x-auto"
                {
                    table class="w-full my-2 text-sm text-left rtl:text-right
                        text-gray-500 dark:text-gray-400"
                    {
                        thead class=(TABLE_HEADER_STYLE)
                        {
                            tr
                            {
                                th scope="col" class="px-6 py-3 text-right" { "Amount" }
                                th scope="col" class=(TABLE_CELL_STYLE) { "Category" }
                                th scope="col" class=(TABLE_CELL_STYLE) { "Date" }
                                th scope="col" class=(TABLE_CELL_STYLE) { "Description" }
                                th scope="col" class=(TABLE_CELL_STYLE) { "Actions" }
                            }
                        }

                        tbody
                        {
                            @for transaction in &rows {
                                (transaction_row_view(transaction))
                            }

                            @if rows.is_empty() {
                                tr
                                {
                                    td
                                        colspan="5"
                                        data-empty-state="true"
                                        class="px-6 py-4 text-center"
                                    {
                                        "No transactions found."
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    };

    base("Transactions", &[], &content)
}

fn filter_form(filters: &TransactionFilters, categories: &[&str]) -> Markup {
    html! {
        form
            method="get"
            action=(endpoints::TRANSACTIONS_VIEW)
            class="flex flex-wrap items-end gap-4"
        {
            div
            {
                label for="filter-date" class=(FORM_LABEL_STYLE) { "Date" }
                input
                    id="filter-date"
                    name="date"
                    type="text"
                    placeholder="YYYY-MM-DD"
                    value=[filters.date.as_deref()]
                    class=(FORM_TEXT_INPUT_STYLE);
            }

            div
            {
                label for="filter-category" class=(FORM_LABEL_STYLE) { "Category" }
                input
                    id="filter-category"
                    name="category"
                    type="text"
                    list="categories"
                    placeholder="Type or select category"
                    value=[filters.category.as_deref()]
                    class=(FORM_TEXT_INPUT_STYLE);
                datalist id="categories"
                {
                    @for category in categories {
                        option value=(category) {}
                    }
                }
            }

            div class="flex gap-4 items-center"
            {
                button type="submit" class=(BUTTON_PRIMARY_STYLE) { "Filter" }
                a href=(endpoints::TRANSACTIONS_VIEW) class=(LINK_STYLE) { "Clear" }
            }
        }
    }
}

fn transaction_row_view(transaction: &Transaction) -> Markup {
    let amount_str = format_signed_amount(transaction.type_, transaction.amount);
    let amount_class = amount_class(transaction.type_);
    let (description, tooltip) = format_description(&transaction.description);
    let edit_url = format_endpoint(endpoints::EDIT_TRANSACTION_VIEW, &transaction.id);
    let delete_url = format_endpoint(endpoints::DELETE_TRANSACTION_VIEW, &transaction.id);

    html! {
        tr class=(TABLE_ROW_STYLE) data-transaction-row="true"
        {
            td class={ "amount px-6 py-4 text-right " (amount_class) } { (amount_str) }
            td class=(TABLE_CELL_STYLE) { (transaction.category) }
            td class=(TABLE_CELL_STYLE) { time datetime=(transaction.date) { (transaction.date) } }
            td class=(TABLE_CELL_STYLE) title=[tooltip] { (description) }
            td class=(TABLE_CELL_STYLE)
            {
                div class="flex gap-4"
                {
                    a href=(edit_url) class=(LINK_STYLE) { "Edit" }
                    a href=(delete_url) class="text-red-600 hover:text-red-500 dark:text-red-500 underline"
                    {
                        "Delete"
                    }
                }
            }
        }
    }
}

fn format_description(description: &str) -> (String, Option<&str>) {
    let description_length = description.graphemes(true).count();

    if description_length <= MAX_DESCRIPTION_GRAPHEMES {
        (description.to_owned(), None)
    } else {
        let truncated: String = description
            .graphemes(true)
            .take(MAX_DESCRIPTION_GRAPHEMES - 3)
            .collect();
        (truncated + "...", Some(description))
    }
}
