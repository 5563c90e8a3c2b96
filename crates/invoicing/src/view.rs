//! Denormalized bill view for list screens and invoice printing.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use bunai_billing::{Bill, BillId, BillStatus, days_to_due, resolve_due_date};
use bunai_core::DomainResult;
use bunai_parties::BuyerId;

use crate::directory::{BillRefs, ReferenceDirectory};

/// Everything a bill row or a printed invoice needs, flattened.
///
/// `due_date`, `days_to_due` and `status` are snapshots relative to the
/// `today` the view was built with. They are re-derived on every read and
/// never persisted, so they must not be compared across builds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BillView {
    pub id: BillId,
    pub bill_no: u32,
    pub date: NaiveDate,
    pub buyer_id: BuyerId,
    pub buyer_name: String,
    pub buyer_gst: Option<String>,
    pub dalal_name: String,
    pub material_name: String,
    pub material_hsn: Option<String>,
    pub term_name: String,
    pub term_days: u32,
    pub tax_name: String,
    /// Snapshot taken at bill creation/revision, not the current rate.
    pub tax_percentage: f64,
    pub meter: f64,
    pub price_rate: f64,
    pub chalan_no: String,
    pub taka_count: u32,
    pub payment_received: bool,
    pub base_amount: f64,
    pub tax_amount: f64,
    pub total_amount: f64,
    pub due_date: NaiveDate,
    pub days_to_due: i64,
    pub status: BillStatus,
}

impl BillView {
    /// Compose the read-time view of a bill.
    ///
    /// Pure: amounts come from the bill's stored fields, aging from the
    /// injected `today`. Reference names come from the current records
    /// (a renamed buyer shows its new name on old bills), while the tax
    /// percentage stays the stored snapshot.
    pub fn build(bill: &Bill, refs: &BillRefs, today: NaiveDate) -> Self {
        let input = bill.input();
        debug_assert_eq!(refs.buyer.id_typed(), input.buyer_id);
        debug_assert_eq!(refs.term.id_typed(), input.term_id);

        let due_date = resolve_due_date(input.date, refs.term.days());
        let days = days_to_due(due_date, today);

        Self {
            id: bill.id_typed(),
            bill_no: input.bill_no,
            date: input.date,
            buyer_id: input.buyer_id,
            buyer_name: refs.buyer.name().to_string(),
            buyer_gst: refs.buyer.gst_number().map(str::to_string),
            dalal_name: refs.dalal.name().to_string(),
            material_name: refs.material.name().to_string(),
            material_hsn: refs.material.hsn_code().map(str::to_string),
            term_name: refs.term.name().to_string(),
            term_days: refs.term.days(),
            tax_name: refs.tax.name().to_string(),
            tax_percentage: bill.tax_percentage(),
            meter: input.meter,
            price_rate: input.price_rate,
            chalan_no: input.chalan_no.clone(),
            taka_count: input.taka_count,
            payment_received: bill.payment_received(),
            base_amount: bill.base_amount(),
            tax_amount: bill.tax_amount(),
            total_amount: bill.total_amount(),
            due_date,
            days_to_due: days,
            status: BillStatus::classify(bill.payment_received(), days),
        }
    }
}

/// Resolve references and build the view in one step.
pub fn compose_view(
    bill: &Bill,
    dir: &impl ReferenceDirectory,
    today: NaiveDate,
) -> DomainResult<BillView> {
    let refs = BillRefs::resolve(bill.input(), dir)?;
    Ok(BillView::build(bill, &refs, today))
}
