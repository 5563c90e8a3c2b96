//! `bunai-billing` — the bill aggregate and its computation leaves.
//!
//! Two pure leaves do the arithmetic: [`amounts`] turns quantity, rate and
//! tax percentage into stored amounts, and [`schedule`] turns bill date and
//! credit period into a due date, a signed day count and a settlement
//! status. The [`bill`] aggregate composes them behind a command/event
//! lifecycle (create, revise, mark paid, delete).

pub mod amounts;
pub mod bill;
pub mod schedule;

pub use amounts::{BillAmounts, compute_amounts};
pub use bill::{
    Bill, BillCommand, BillCreated, BillDeleted, BillEvent, BillId, BillInput, BillPaid,
    BillRevised, CreateBill, DeleteBill, MarkBillPaid, ReviseBill,
};
pub use schedule::{BillStatus, DUE_SOON_WINDOW_DAYS, days_to_due, resolve_due_date};
