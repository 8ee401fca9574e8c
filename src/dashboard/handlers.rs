//! Dashboard HTTP handler and view rendering.

use axum::{
    extract::{Query, State},
    response::{IntoResponse, Response},
};
use maud::{Markup, html};
use serde::Deserialize;

use crate::{
    Error,
    dashboard::{
        advice::{AdviceMode, AdviceOptions, advice_view},
        aggregation::{expenses_by_category, summarize},
        cards::summary_cards_view,
        charts::expense_breakdown_view,
    },
    endpoints,
    html::{PAGE_CONTAINER_STYLE, base, error_notice, fallback_notice, link, loading_view},
    navigation::NavBar,
    repository::DataSource,
    store::{FIRST_LOAD_WAIT, Snapshot, TransactionStore},
};

/// The query parameters of the dashboard page.
#[derive(Debug, Default, Deserialize)]
pub struct DashboardQuery {
    /// "open" shows the advice panel.
    #[serde(default)]
    pub advice: Option<String>,
    /// Selects the tough love advice.
    #[serde(default)]
    pub tough_love: bool,
}

impl DashboardQuery {
    fn advice_options(&self) -> AdviceOptions {
        AdviceOptions {
            open: self.advice.as_deref() == Some("open"),
            mode: AdviceMode::from_flag(self.tough_love),
        }
    }
}

/// Display a page with the income, expense and balance totals.
///
/// The transactions are loaded first if they have not been loaded yet. A
/// failed load is shown on the page instead of failing the request, and a
/// load slower than [FIRST_LOAD_WAIT] renders the loading view, which polls
/// until the data arrives.
pub async fn get_dashboard_page(
    State(store): State<TransactionStore>,
    Query(query): Query<DashboardQuery>,
) -> Result<Response, Error> {
    if let Err(error) = store.load_within(FIRST_LOAD_WAIT).await {
        tracing::warn!("Rendering dashboard after a failed load: {error}");
    }

    let snapshot = store.snapshot()?;

    Ok(dashboard_view(&snapshot, query.advice_options()).into_response())
}

/// Picks the loading, error or summary view for `snapshot`.
fn dashboard_view(snapshot: &Snapshot, advice: AdviceOptions) -> Markup {
    let nav_bar = NavBar::new(endpoints::DASHBOARD_VIEW).into_html();

    let body = if !snapshot.is_loaded() && snapshot.loading {
        loading_view("Loading dashboard data...", &advice.to_url())
    } else if let Some(error) = &snapshot.error {
        error_view(error)
    } else {
        summary_view(snapshot, advice)
    };

    let content = html! {
        (nav_bar)
        main class=(PAGE_CONTAINER_STYLE) { (body) }
    };

    base("Dashboard", &[], &content)
}

fn error_view(error: &str) -> Markup {
    html! {
        div id="page-content" class="w-full max-w-screen-md space-y-4"
        {
            (error_notice(&format!("Error loading data: {error}")))
            p { "Refresh the page to try again." }
        }
    }
}

fn summary_view(snapshot: &Snapshot, advice: AdviceOptions) -> Markup {
    let summary = summarize(&snapshot.transactions);
    let expense_totals = expenses_by_category(&snapshot.transactions);
    let is_fallback = snapshot.source == Some(DataSource::Fallback);

    html! {
        div id="page-content" class="w-full max-w-screen-md space-y-6"
        {
            h1 class="text-2xl font-bold" { "Dashboard" }

            @if is_fallback {
                (fallback_notice())
            }

            (summary_cards_view(&summary))

            @if snapshot.transactions.is_empty() {
                p id="no-transactions"
                {
                    "No transactions yet. You can add one "
                    (link(endpoints::NEW_TRANSACTION_VIEW, "here"))
                    "."
                }
            }

            (expense_breakdown_view(&expense_totals))

            (advice_view(advice))
        }
    }
}
