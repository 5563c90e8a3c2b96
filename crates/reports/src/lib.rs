//! `bunai-reports` — pure queries over composed bill views.
//!
//! The list screen's combinable filter, the dashboard's urgent list and its
//! headline counters. Everything operates on already-built
//! [`bunai_invoicing::BillView`] slices, mutates nothing, and is safe to
//! call repeatedly.

pub mod filter;
pub mod summary;

pub use filter::{FilterSpec, StatusFilter, filter_bills, urgent_bills};
pub use summary::{DashboardStats, dashboard_stats};
