//! The create/edit transaction form: its fields, the submitted data and validation.

use axum::{http::StatusCode, response::Response};
use maud::{Markup, html};
use serde::Deserialize;
use time::{Date, macros::format_description};

use crate::{
    alert::Alert,
    endpoints,
    html::{
        BUTTON_PRIMARY_STYLE, FORM_CONTAINER_STYLE, FORM_LABEL_STYLE, FORM_RADIO_GROUP_STYLE,
        FORM_RADIO_INPUT_STYLE, FORM_RADIO_LABEL_STYLE, FORM_TEXT_INPUT_STYLE, base,
        dollar_input_styles, loading_spinner,
    },
    navigation::NavBar,
    transaction::core::{NewTransaction, Transaction, TransactionType},
};

/// The categories offered by the form.
pub const CATEGORIES: [&str; 8] = [
    "Groceries",
    "Rent",
    "Salary",
    "Entertainment",
    "Utilities",
    "Transport",
    "Healthcare",
    "Other",
];

/// The largest amount the form accepts, in dollars.
pub const MAX_AMOUNT: f64 = 1_000_000_000.0;

/// Why a submitted form was rejected. The message is shown to the user as is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    /// A field was left blank.
    #[error("Please fill in all fields.")]
    MissingFields,
    /// The amount is not a finite number greater than zero.
    #[error("Please enter a valid positive amount.")]
    InvalidAmount,
    /// The date is not in the format YYYY-MM-DD.
    #[error("Please enter a valid date.")]
    InvalidDate,
    /// The type is neither income nor expense.
    #[error("Please choose either income or expense.")]
    InvalidType,
}

impl FormError {
    pub(crate) fn into_alert_response(self) -> Response {
        Alert::error("Could not save transaction", &self.to_string())
            .into_response_with_status(StatusCode::BAD_REQUEST)
    }
}

/// The raw fields of a submitted transaction form.
///
/// Every field is kept as text so that blank and malformed values reach
/// [TransactionForm::validate] instead of failing extraction.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct TransactionForm {
    /// "income" or "expense".
    pub type_: String,
    /// A positive number of dollars, e.g. "12.50".
    pub amount: String,
    /// What the money was spent on or earned for.
    pub description: String,
    /// The date in the format YYYY-MM-DD.
    pub date: String,
    /// The category name, usually one of [CATEGORIES].
    pub category: String,
}

impl TransactionForm {
    /// Check the fields in order and convert them into a [NewTransaction].
    ///
    /// # Errors
    /// Returns the first problem found: blank fields, then the amount, the
    /// date and the type.
    pub fn validate(&self) -> Result<NewTransaction, FormError> {
        let type_ = self.type_.trim();
        let amount = self.amount.trim();
        let description = self.description.trim();
        let date = self.date.trim();
        let category = self.category.trim();

        if [type_, amount, description, date, category]
            .iter()
            .any(|field| field.is_empty())
        {
            return Err(FormError::MissingFields);
        }

        let amount = amount
            .parse::<f64>()
            .ok()
            .filter(|amount| amount.is_finite())
            .map(|amount| (amount * 100.0).round() / 100.0)
            .filter(|amount| *amount > 0.0 && *amount <= MAX_AMOUNT)
            .ok_or(FormError::InvalidAmount)?;

        let date = Date::parse(date, format_description!("[year]-[month]-[day]"))
            .map_err(|_| FormError::InvalidDate)?;

        let type_ = TransactionType::parse(type_).ok_or(FormError::InvalidType)?;

        Ok(NewTransaction {
            type_,
            amount,
            category: category.to_owned(),
            date,
            description: description.to_owned(),
        })
    }
}

/// The values the form fields start with.
pub struct TransactionFormDefaults<'a> {
    pub transaction_type: TransactionType,
    pub amount: Option<f64>,
    pub date: Date,
    pub description: Option<&'a str>,
    pub category: Option<&'a str>,
}

impl<'a> TransactionFormDefaults<'a> {
    /// A blank expense dated `today`.
    pub fn blank(today: Date) -> Self {
        Self {
            transaction_type: TransactionType::Expense,
            amount: None,
            date: today,
            description: None,
            category: None,
        }
    }

    /// The values of an existing transaction.
    pub fn from_transaction(transaction: &'a Transaction) -> Self {
        Self {
            transaction_type: transaction.type_,
            amount: Some(transaction.amount),
            date: transaction.date,
            description: Some(&transaction.description),
            category: Some(&transaction.category),
        }
    }
}

/// The category choices: the fixed list plus `current` if it is not in it.
pub fn category_options(current: Option<&str>) -> Vec<&str> {
    let mut options = CATEGORIES.to_vec();

    if let Some(current) = current
        && !options.contains(&current)
    {
        options.push(current);
    }

    options
}

pub fn transaction_form_fields(defaults: &TransactionFormDefaults<'_>) -> Markup {
    let is_expense = matches!(defaults.transaction_type, TransactionType::Expense);
    let amount_str = defaults.amount.map(|amount| format!("{:.2}", amount.abs()));

    html! {
        fieldset class="space-y-2"
        {
            legend class=(FORM_LABEL_STYLE) { "Transaction type" }

            div class=(FORM_RADIO_GROUP_STYLE)
            {
                div class="flex items-center gap-3"
                {
                    input
                        name="type_"
                        id="transaction-type-expense"
                        type="radio"
                        value=(TransactionType::Expense.as_str())
                        checked[is_expense]
                        required
                        class=(FORM_RADIO_INPUT_STYLE);

                    label for="transaction-type-expense" class=(FORM_RADIO_LABEL_STYLE)
                    {
                        "Expense"
                    }
                }

                div class="flex items-center gap-3"
                {
                    input
                        name="type_"
                        id="transaction-type-income"
                        type="radio"
                        value=(TransactionType::Income.as_str())
                        checked[!is_expense]
                        required
                        class=(FORM_RADIO_INPUT_STYLE);

                    label for="transaction-type-income" class=(FORM_RADIO_LABEL_STYLE)
                    {
                        "Income"
                    }
                }
            }
        }

        div
        {
            label for="amount" class=(FORM_LABEL_STYLE) { "Amount" }

            // w-full needed to ensure input takes the full width when prefilled with a value
            div class="input-wrapper w-full"
            {
                input
                    name="amount"
                    id="amount"
                    type="number"
                    step="0.01"
                    min="0.01"
                    placeholder="0.00"
                    required
                    autofocus
                    value=[amount_str.as_deref()]
                    class=(FORM_TEXT_INPUT_STYLE);
            }
        }

        div
        {
            label for="description" class=(FORM_LABEL_STYLE) { "Description" }

            input
                name="description"
                id="description"
                type="text"
                placeholder="e.g., Coffee with friends"
                required
                value=[defaults.description]
                class=(FORM_TEXT_INPUT_STYLE);
        }

        div
        {
            label for="date" class=(FORM_LABEL_STYLE) { "Date" }

            input
                name="date"
                id="date"
                type="date"
                required
                value=(defaults.date)
                class=(FORM_TEXT_INPUT_STYLE);
        }

        div
        {
            label for="category" class=(FORM_LABEL_STYLE) { "Category" }

            select
                name="category"
                id="category"
                required
                class=(FORM_TEXT_INPUT_STYLE)
            {
                option value="" disabled selected[defaults.category.is_none()]
                {
                    "Select a category"
                }

                @for category in category_options(defaults.category) {
                    option value=(category) selected[Some(category) == defaults.category]
                    {
                        (category)
                    }
                }
            }
        }
    }
}

/// How the form is submitted.
pub enum FormAction<'a> {
    /// POST to the transactions collection.
    Create,
    /// PUT to the transaction at this URL.
    Update(&'a str),
}

/// The full page around the form.
pub fn transaction_form_view(
    heading: &str,
    action: FormAction<'_>,
    defaults: &TransactionFormDefaults<'_>,
) -> Markup {
    let (active_endpoint, hx_post, hx_put, submit_label) = match action {
        FormAction::Create => (
            endpoints::NEW_TRANSACTION_VIEW,
            Some(endpoints::TRANSACTIONS_VIEW),
            None,
            "Add Transaction",
        ),
        FormAction::Update(url) => (
            endpoints::EDIT_TRANSACTION_VIEW,
            None,
            Some(url),
            "Update Transaction",
        ),
    };
    let nav_bar = NavBar::new(active_endpoint).into_html();
    let fields = transaction_form_fields(defaults);
    let spinner = loading_spinner();

    let content = html! {
        (nav_bar)

        main id="page-content" class=(FORM_CONTAINER_STYLE)
        {
            form
                hx-post=[hx_post]
                hx-put=[hx_put]
                hx-target-error="#alert-container"
                hx-indicator="#indicator"
                class="w-full space-y-4 md:space-y-6"
            {
                h2 class="text-xl font-bold" { (heading) }

                (fields)

                button type="submit" id="submit-button" class=(BUTTON_PRIMARY_STYLE)
                {
                    span id="indicator" class="inline htmx-indicator" { (spinner) }
                    " " (submit_label)
                }
            }
        }
    };

    base(heading, &[dollar_input_styles()], &content)
}
