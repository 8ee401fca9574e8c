//! The expense breakdown chart: one horizontal bar per category.

use maud::{Markup, html};

use crate::{dashboard::aggregation::CategoryTotal, html::format_currency};

/// Renders the expense breakdown section.
///
/// Bars are scaled relative to the largest category so the top category
/// always fills the chart width.
///
/// # Arguments
/// * `totals` - Per-category expenses, largest first, see
///   [super::aggregation::expenses_by_category].
pub(super) fn expense_breakdown_view(totals: &[CategoryTotal]) -> Markup {
    let largest = totals.first().map_or(0.0, |total| total.total);

    html! {
        section id="expense-breakdown" class="w-full rounded-lg bg-white dark:bg-gray-800 p-6 shadow"
        {
            h3 class="text-xl font-semibold mb-4" { "Expense Breakdown (Mock Chart)" }

            div
                id="chart-placeholder"
                class="rounded border-2 border-dashed border-gray-300 dark:border-gray-600 p-4"
            {
                @if totals.is_empty() {
                    p class="text-center text-gray-500 dark:text-gray-400 py-8"
                    {
                        "Mock Chart Placeholder"
                    }
                } @else {
                    ul class="space-y-3"
                    {
                        @for total in totals {
                            (bar(total, largest))
                        }
                    }
                }
            }
        }
    }
}

fn bar(total: &CategoryTotal, largest: f64) -> Markup {
    let width = if largest > 0.0 {
        total.total / largest * 100.0
    } else {
        0.0
    };

    html! {
        li data-category=(total.category)
        {
            div class="flex justify-between text-sm mb-1"
            {
                span class="font-medium" { (total.category) }
                span
                {
                    (format_currency(total.total))
                    " (" (format!("{:.0}", total.percentage)) "%)"
                }
            }
            div class="w-full h-3 rounded bg-gray-200 dark:bg-gray-700"
            {
                div
                    class="h-3 rounded bg-blue-600 dark:bg-blue-500"
                    style=(format!("width: {width:.1}%"))
                {}
            }
        }
    }
}
