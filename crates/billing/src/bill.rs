use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use bunai_catalog::{MaterialId, PaymentTermId, TaxRateId};
use bunai_core::{Aggregate, AggregateRoot, DomainError, RecordId};
use bunai_events::Event;
use bunai_parties::{BuyerId, DalalId};

use crate::amounts::compute_amounts;

/// Bill identifier.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BillId(pub RecordId);

impl BillId {
    pub fn new(id: RecordId) -> Self {
        Self(id)
    }
}

impl core::fmt::Display for BillId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// Raw bill fields as entered on the form, already parsed to their types.
///
/// Carried whole on create and revise: an edit is a full replacement of the
/// inputs, never a delta.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BillInput {
    /// User-facing bill number. Intended to be human-sequential; the system
    /// does not enforce uniqueness.
    pub bill_no: u32,
    pub date: NaiveDate,
    pub buyer_id: BuyerId,
    pub dalal_id: DalalId,
    pub material_id: MaterialId,
    pub term_id: PaymentTermId,
    pub tax_id: TaxRateId,
    /// Quantity in meters.
    pub meter: f64,
    /// Currency per meter.
    pub price_rate: f64,
    /// Delivery-note reference, free text.
    pub chalan_no: String,
    /// Count of fabric rolls.
    pub taka_count: u32,
}

/// Aggregate root: Bill.
///
/// `base_amount`, `tax_amount` and the `tax_percentage` snapshot are fixed
/// at creation (or revision) time; editing the underlying `TaxRate` record
/// later never rewrites them. Everything aging-related (due date,
/// days-to-due, status) is derived at read time and deliberately absent
/// from this state.
#[derive(Debug, Clone, PartialEq)]
pub struct Bill {
    id: BillId,
    input: BillInput,
    base_amount: f64,
    tax_amount: f64,
    tax_percentage: f64,
    payment_received: bool,
    deleted: bool,
    version: u64,
    created: bool,
}

impl Bill {
    /// Create an empty, not-yet-created aggregate instance for rehydration.
    pub fn empty(id: BillId) -> Self {
        Self {
            id,
            input: BillInput {
                bill_no: 0,
                date: NaiveDate::MIN,
                buyer_id: BuyerId::new(RecordId::new(0)),
                dalal_id: DalalId::new(RecordId::new(0)),
                material_id: MaterialId::new(RecordId::new(0)),
                term_id: PaymentTermId::new(RecordId::new(0)),
                tax_id: TaxRateId::new(RecordId::new(0)),
                meter: 0.0,
                price_rate: 0.0,
                chalan_no: String::new(),
                taka_count: 0,
            },
            base_amount: 0.0,
            tax_amount: 0.0,
            tax_percentage: 0.0,
            payment_received: false,
            deleted: false,
            version: 0,
            created: false,
        }
    }

    pub fn id_typed(&self) -> BillId {
        self.id
    }

    pub fn input(&self) -> &BillInput {
        &self.input
    }

    pub fn base_amount(&self) -> f64 {
        self.base_amount
    }

    pub fn tax_amount(&self) -> f64 {
        self.tax_amount
    }

    /// Derived, never stored: always base + tax.
    pub fn total_amount(&self) -> f64 {
        self.base_amount + self.tax_amount
    }

    /// Tax percentage as it was when the amounts were computed.
    pub fn tax_percentage(&self) -> f64 {
        self.tax_percentage
    }

    pub fn payment_received(&self) -> bool {
        self.payment_received
    }

    pub fn is_deleted(&self) -> bool {
        self.deleted
    }
}

impl AggregateRoot for Bill {
    type Id = BillId;

    fn id(&self) -> &Self::Id {
        &self.id
    }

    fn version(&self) -> u64 {
        self.version
    }
}

/// Command: CreateBill.
///
/// `tax_percentage` is the snapshot the caller resolved from the referenced
/// `TaxRate` at this moment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateBill {
    pub bill_id: BillId,
    pub input: BillInput,
    pub tax_percentage: f64,
    pub occurred_at: DateTime<Utc>,
}

/// Command: ReviseBill (full replacement of the inputs, amounts recomputed).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReviseBill {
    pub bill_id: BillId,
    pub input: BillInput,
    pub tax_percentage: f64,
    pub occurred_at: DateTime<Utc>,
}

/// Command: MarkBillPaid (one-way; false → true only).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarkBillPaid {
    pub bill_id: BillId,
    pub occurred_at: DateTime<Utc>,
}

/// Command: DeleteBill.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeleteBill {
    pub bill_id: BillId,
    pub occurred_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum BillCommand {
    CreateBill(CreateBill),
    ReviseBill(ReviseBill),
    MarkBillPaid(MarkBillPaid),
    DeleteBill(DeleteBill),
}

/// Event: BillCreated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BillCreated {
    pub bill_id: BillId,
    pub input: BillInput,
    pub base_amount: f64,
    pub tax_amount: f64,
    pub tax_percentage: f64,
    pub occurred_at: DateTime<Utc>,
}

/// Event: BillRevised.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BillRevised {
    pub bill_id: BillId,
    pub input: BillInput,
    pub base_amount: f64,
    pub tax_amount: f64,
    pub tax_percentage: f64,
    pub occurred_at: DateTime<Utc>,
}

/// Event: BillPaid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BillPaid {
    pub bill_id: BillId,
    pub occurred_at: DateTime<Utc>,
}

/// Event: BillDeleted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BillDeleted {
    pub bill_id: BillId,
    pub occurred_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum BillEvent {
    BillCreated(BillCreated),
    BillRevised(BillRevised),
    BillPaid(BillPaid),
    BillDeleted(BillDeleted),
}

impl Event for BillEvent {
    fn event_type(&self) -> &'static str {
        match self {
            BillEvent::BillCreated(_) => "billing.bill.created",
            BillEvent::BillRevised(_) => "billing.bill.revised",
            BillEvent::BillPaid(_) => "billing.bill.paid",
            BillEvent::BillDeleted(_) => "billing.bill.deleted",
        }
    }

    fn version(&self) -> u32 {
        1
    }

    fn occurred_at(&self) -> DateTime<Utc> {
        match self {
            BillEvent::BillCreated(e) => e.occurred_at,
            BillEvent::BillRevised(e) => e.occurred_at,
            BillEvent::BillPaid(e) => e.occurred_at,
            BillEvent::BillDeleted(e) => e.occurred_at,
        }
    }
}

impl Aggregate for Bill {
    type Command = BillCommand;
    type Event = BillEvent;
    type Error = DomainError;

    fn apply(&mut self, event: &Self::Event) {
        match event {
            BillEvent::BillCreated(e) => {
                self.id = e.bill_id;
                self.input = e.input.clone();
                self.base_amount = e.base_amount;
                self.tax_amount = e.tax_amount;
                self.tax_percentage = e.tax_percentage;
                self.payment_received = false;
                self.deleted = false;
                self.created = true;
            }
            BillEvent::BillRevised(e) => {
                self.input = e.input.clone();
                self.base_amount = e.base_amount;
                self.tax_amount = e.tax_amount;
                self.tax_percentage = e.tax_percentage;
            }
            BillEvent::BillPaid(_) => {
                self.payment_received = true;
            }
            BillEvent::BillDeleted(_) => {
                self.deleted = true;
            }
        }

        // Deterministic version tracking: +1 per applied event.
        self.version += 1;
    }

    fn handle(&self, command: &Self::Command) -> Result<Vec<Self::Event>, Self::Error> {
        match command {
            BillCommand::CreateBill(cmd) => self.handle_create(cmd),
            BillCommand::ReviseBill(cmd) => self.handle_revise(cmd),
            BillCommand::MarkBillPaid(cmd) => self.handle_mark_paid(cmd),
            BillCommand::DeleteBill(cmd) => self.handle_delete(cmd),
        }
    }
}

impl Bill {
    fn ensure_bill_id(&self, bill_id: BillId) -> Result<(), DomainError> {
        if self.id != bill_id {
            return Err(DomainError::invariant("bill_id mismatch"));
        }
        Ok(())
    }

    fn ensure_live(&self) -> Result<(), DomainError> {
        if !self.created {
            return Err(DomainError::not_found());
        }
        if self.deleted {
            return Err(DomainError::conflict("bill is deleted"));
        }
        Ok(())
    }

    fn handle_create(&self, cmd: &CreateBill) -> Result<Vec<BillEvent>, DomainError> {
        if self.created {
            return Err(DomainError::conflict("bill already exists"));
        }
        validate_input(&cmd.input)?;
        validate_tax_percentage(cmd.tax_percentage)?;

        let amounts = compute_amounts(cmd.input.meter, cmd.input.price_rate, cmd.tax_percentage);

        Ok(vec![BillEvent::BillCreated(BillCreated {
            bill_id: cmd.bill_id,
            input: cmd.input.clone(),
            base_amount: amounts.base_amount,
            tax_amount: amounts.tax_amount,
            tax_percentage: cmd.tax_percentage,
            occurred_at: cmd.occurred_at,
        })])
    }

    fn handle_revise(&self, cmd: &ReviseBill) -> Result<Vec<BillEvent>, DomainError> {
        self.ensure_live()?;
        self.ensure_bill_id(cmd.bill_id)?;
        validate_input(&cmd.input)?;
        validate_tax_percentage(cmd.tax_percentage)?;

        let amounts = compute_amounts(cmd.input.meter, cmd.input.price_rate, cmd.tax_percentage);

        Ok(vec![BillEvent::BillRevised(BillRevised {
            bill_id: cmd.bill_id,
            input: cmd.input.clone(),
            base_amount: amounts.base_amount,
            tax_amount: amounts.tax_amount,
            tax_percentage: cmd.tax_percentage,
            occurred_at: cmd.occurred_at,
        })])
    }

    fn handle_mark_paid(&self, cmd: &MarkBillPaid) -> Result<Vec<BillEvent>, DomainError> {
        self.ensure_live()?;
        self.ensure_bill_id(cmd.bill_id)?;

        if self.payment_received {
            return Err(DomainError::conflict("payment already received"));
        }

        Ok(vec![BillEvent::BillPaid(BillPaid {
            bill_id: cmd.bill_id,
            occurred_at: cmd.occurred_at,
        })])
    }

    fn handle_delete(&self, cmd: &DeleteBill) -> Result<Vec<BillEvent>, DomainError> {
        if !self.created {
            return Err(DomainError::not_found());
        }
        self.ensure_bill_id(cmd.bill_id)?;

        if self.deleted {
            return Err(DomainError::conflict("bill is already deleted"));
        }

        Ok(vec![BillEvent::BillDeleted(BillDeleted {
            bill_id: cmd.bill_id,
            occurred_at: cmd.occurred_at,
        })])
    }
}

fn validate_input(input: &BillInput) -> Result<(), DomainError> {
    if input.bill_no == 0 {
        return Err(DomainError::validation("bill number must be positive"));
    }
    if !input.meter.is_finite() || input.meter <= 0.0 {
        return Err(DomainError::validation("meter must be positive"));
    }
    if !input.price_rate.is_finite() || input.price_rate <= 0.0 {
        return Err(DomainError::validation("price rate must be positive"));
    }
    if input.chalan_no.trim().is_empty() {
        return Err(DomainError::validation("chalan number cannot be empty"));
    }
    if input.taka_count == 0 {
        return Err(DomainError::validation("taka count must be positive"));
    }
    Ok(())
}

fn validate_tax_percentage(tax_percentage: f64) -> Result<(), DomainError> {
    if !tax_percentage.is_finite() || tax_percentage < 0.0 {
        return Err(DomainError::validation(
            "tax percentage must be a non-negative number",
        ));
    }
    Ok(())
}
