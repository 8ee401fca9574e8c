//! Dashboard module
//!
//! Provides an overview page with income, expense and balance totals, an
//! expense breakdown and a mocked advice panel.

mod advice;
mod aggregation;
mod cards;
mod charts;
mod handlers;

pub use handlers::{DashboardQuery, get_dashboard_page};
