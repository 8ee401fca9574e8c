//! The income, expense and balance cards at the top of the dashboard.

use maud::{Markup, html};

use crate::{dashboard::aggregation::Summary, html::format_currency};

fn summary_card(id: &str, label: &str, value: f64, value_class: &str) -> Markup {
    html! {
        div id=(id) class="rounded-lg bg-white dark:bg-gray-800 p-6 shadow"
        {
            h3 class="text-sm font-medium text-gray-500 dark:text-gray-400" { (label) }
            p
                class={ "mt-2 text-2xl font-semibold " (value_class) }
                data-value=(format!("{value:.2}"))
            {
                (format_currency(value))
            }
        }
    }
}

/// Renders the three summary cards.
///
/// Each value carries its raw amount in a `data-value` attribute.
pub(super) fn summary_cards_view(summary: &Summary) -> Markup {
    let balance_class = if summary.balance < 0.0 {
        "text-red-700 dark:text-red-300"
    } else {
        "text-gray-900 dark:text-white"
    };

    html! {
        section id="summary" class="grid w-full gap-4 sm:grid-cols-3"
        {
            (summary_card(
                "total-income",
                "Total Income",
                summary.income,
                "text-green-700 dark:text-green-300",
            ))
            (summary_card(
                "total-expenses",
                "Total Expenses",
                summary.expenses,
                "text-red-700 dark:text-red-300",
            ))
            (summary_card("current-balance", "Current Balance", summary.balance, balance_class))
        }
    }
}
