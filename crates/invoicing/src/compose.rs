//! Bridge from raw form input to bill aggregate commands.
//!
//! Reference resolution happens here, so the tax percentage a bill stores
//! is the one in force at the moment the command is composed; later edits
//! to the `TaxRate` record leave existing bills untouched.

use chrono::{DateTime, Utc};

use bunai_billing::{BillId, BillInput, CreateBill, ReviseBill};
use bunai_core::DomainResult;

use crate::directory::{BillRefs, ReferenceDirectory};

/// Build a `CreateBill` command, resolving and validating every reference.
pub fn compose_create(
    bill_id: BillId,
    input: BillInput,
    dir: &impl ReferenceDirectory,
    occurred_at: DateTime<Utc>,
) -> DomainResult<CreateBill> {
    let refs = BillRefs::resolve(&input, dir)?;
    Ok(CreateBill {
        bill_id,
        input,
        tax_percentage: refs.tax.percentage(),
        occurred_at,
    })
}

/// Build a `ReviseBill` command from replacement inputs.
///
/// The tax snapshot is re-taken: an edit prices against the current rate.
pub fn compose_revise(
    bill_id: BillId,
    input: BillInput,
    dir: &impl ReferenceDirectory,
    occurred_at: DateTime<Utc>,
) -> DomainResult<ReviseBill> {
    let refs = BillRefs::resolve(&input, dir)?;
    Ok(ReviseBill {
        bill_id,
        input,
        tax_percentage: refs.tax.percentage(),
        occurred_at,
    })
}
