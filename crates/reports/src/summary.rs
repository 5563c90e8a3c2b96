//! Headline counters for the dashboard.

use serde::{Deserialize, Serialize};

use bunai_invoicing::BillView;

/// Aggregate numbers shown at the top of the home screen.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct DashboardStats {
    pub total_bills: usize,
    pub pending_bills: usize,
    /// Total amount billed, paid or not.
    pub total_revenue: f64,
    /// Outstanding amount across unpaid bills.
    pub pending_amount: f64,
}

/// Fold a set of bill views into dashboard counters. Pure; a snapshot of
/// whatever `bills` reflects.
pub fn dashboard_stats(bills: &[BillView]) -> DashboardStats {
    let mut stats = DashboardStats {
        total_bills: bills.len(),
        ..DashboardStats::default()
    };
    for bill in bills {
        stats.total_revenue += bill.total_amount;
        if !bill.payment_received {
            stats.pending_bills += 1;
            stats.pending_amount += bill.total_amount;
        }
    }
    stats
}
