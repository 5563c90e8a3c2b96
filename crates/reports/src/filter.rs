//! Combinable bill-list filtering and the dashboard's urgent list.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use bunai_billing::DUE_SOON_WINDOW_DAYS;
use bunai_invoicing::BillView;
use bunai_parties::BuyerId;

/// Payment-status bucket selectable on the bill list.
///
/// `Pending` is simply "payment not received". It does not discriminate
/// further by aging; overdue and due-soon bills all land in it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusFilter {
    #[default]
    All,
    Pending,
    Paid,
}

/// Bill-list filter. All fields are optional and combine with AND
/// semantics; the default spec matches everything.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FilterSpec {
    pub status: StatusFilter,
    pub buyer: Option<BuyerId>,
    pub from_date: Option<NaiveDate>,
    /// Inclusive upper bound.
    pub to_date: Option<NaiveDate>,
}

impl FilterSpec {
    fn matches(&self, bill: &BillView) -> bool {
        let status_ok = match self.status {
            StatusFilter::All => true,
            StatusFilter::Pending => !bill.payment_received,
            StatusFilter::Paid => bill.payment_received,
        };
        status_ok
            && self.buyer.is_none_or(|id| bill.buyer_id == id)
            && self.from_date.is_none_or(|from| bill.date >= from)
            && self.to_date.is_none_or(|to| bill.date <= to)
    }
}

/// Filter and order bills for the list screen, most recent first.
///
/// Pure and idempotent; ties on date keep their input order.
pub fn filter_bills(bills: &[BillView], spec: &FilterSpec) -> Vec<BillView> {
    let mut out: Vec<BillView> = bills.iter().filter(|b| spec.matches(b)).cloned().collect();
    out.sort_by(|a, b| b.date.cmp(&a.date));
    out
}

/// Unpaid bills inside the due-soon window or already past due, most
/// overdue first.
///
/// Deliberately no lower bound: a bill overdue by months stays on the
/// urgent list until payment is received.
pub fn urgent_bills(bills: &[BillView]) -> Vec<BillView> {
    let mut out: Vec<BillView> = bills
        .iter()
        .filter(|b| !b.payment_received && b.days_to_due <= DUE_SOON_WINDOW_DAYS)
        .cloned()
        .collect();
    out.sort_by_key(|b| b.days_to_due);
    out
}

#[cfg(test)]
pub(crate) mod test_fixtures {
    use super::*;
    use bunai_billing::{BillId, BillStatus};
    use bunai_core::RecordId;

    /// A view with just the fields the queries read set meaningfully.
    pub fn view(
        id: i64,
        date: NaiveDate,
        buyer: i64,
        payment_received: bool,
        days_to_due: i64,
        total_amount: f64,
    ) -> BillView {
        BillView {
            id: BillId::new(RecordId::new(id)),
            bill_no: id as u32,
            date,
            buyer_id: BuyerId::new(RecordId::new(buyer)),
            buyer_name: "Jalaram Ltd.".to_string(),
            buyer_gst: None,
            dalal_name: "Kishan Patel".to_string(),
            material_name: "Cotton".to_string(),
            material_hsn: None,
            term_name: "Regular (35 days)".to_string(),
            term_days: 35,
            tax_name: "GST".to_string(),
            tax_percentage: 10.0,
            meter: 50.0,
            price_rate: 200.0,
            chalan_no: "8526".to_string(),
            taka_count: 120,
            payment_received,
            base_amount: total_amount / 1.1,
            tax_amount: total_amount - total_amount / 1.1,
            total_amount,
            due_date: date,
            days_to_due,
            status: BillStatus::classify(payment_received, days_to_due),
        }
    }

    pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }
}
