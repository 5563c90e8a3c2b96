//! In-memory reference tables + bill register.
//!
//! Intended for tests and the embedding UI shell. Not optimized for
//! performance; everything lives behind one `RwLock` and clones on read.

use std::collections::HashMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::{DateTime, NaiveDate, Utc};
use thiserror::Error;
use tracing::{debug, info};

use bunai_billing::{Bill, BillCommand, BillId, BillInput, DeleteBill, MarkBillPaid};
use bunai_catalog::{
    Material, MaterialDetails, MaterialId, PaymentTerm, PaymentTermDetails, PaymentTermId,
    TaxRate, TaxRateDetails, TaxRateId,
};
use bunai_core::{Aggregate, DomainError, RecordId};
use bunai_invoicing::{
    BillView, ReferenceDirectory, compose_create, compose_revise, compose_view,
};
use bunai_parties::{Buyer, BuyerDetails, BuyerId, Dalal, DalalDetails, DalalId};

/// Storage-layer error: domain failures plus lock poisoning.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("storage lock poisoned")]
    LockPoisoned,

    #[error(transparent)]
    Domain(#[from] DomainError),
}

pub type StoreResult<T> = Result<T, StoreError>;

#[derive(Debug, Default)]
struct Tables {
    buyers: HashMap<BuyerId, Buyer>,
    dalals: HashMap<DalalId, Dalal>,
    materials: HashMap<MaterialId, Material>,
    terms: HashMap<PaymentTermId, PaymentTerm>,
    taxes: HashMap<TaxRateId, TaxRate>,
    bills: HashMap<BillId, Bill>,
    next_id: i64,
}

impl Tables {
    fn next_record_id(&mut self) -> RecordId {
        self.next_id += 1;
        RecordId::new(self.next_id)
    }
}

impl ReferenceDirectory for Tables {
    fn buyer(&self, id: BuyerId) -> Option<Buyer> {
        self.buyers.get(&id).cloned()
    }

    fn dalal(&self, id: DalalId) -> Option<Dalal> {
        self.dalals.get(&id).cloned()
    }

    fn material(&self, id: MaterialId) -> Option<Material> {
        self.materials.get(&id).cloned()
    }

    fn payment_term(&self, id: PaymentTermId) -> Option<PaymentTerm> {
        self.terms.get(&id).cloned()
    }

    fn tax_rate(&self, id: TaxRateId) -> Option<TaxRate> {
        self.taxes.get(&id).cloned()
    }
}

/// Single-process store backing the app: reference tables plus bills.
///
/// Owns write serialization (one lock, whole-store granularity); the pure
/// domain code it calls into never blocks on anything.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    tables: RwLock<Tables>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the default reference rows the app ships with.
    pub fn seed_defaults(&self) -> StoreResult<()> {
        for (name, days) in [
            ("Regular (35 days)", 35),
            ("War to War (10 days)", 10),
            ("Cash (0 days)", 0),
            ("Extended (60 days)", 60),
        ] {
            self.add_payment_term(PaymentTermDetails {
                name: name.to_string(),
                days,
            })?;
        }
        for (name, detail) in [
            ("Cotton", "Premium quality cotton fabric"),
            ("Polyester", "Synthetic blend material"),
            ("Silk", "Natural silk fabric"),
            ("Wool", "Pure wool material"),
        ] {
            self.add_material(MaterialDetails {
                name: name.to_string(),
                extra_detail: Some(detail.to_string()),
                hsn_code: None,
            })?;
        }
        info!("seeded default payment terms and materials");
        Ok(())
    }

    fn read(&self) -> StoreResult<RwLockReadGuard<'_, Tables>> {
        self.tables.read().map_err(|_| StoreError::LockPoisoned)
    }

    fn write(&self) -> StoreResult<RwLockWriteGuard<'_, Tables>> {
        self.tables.write().map_err(|_| StoreError::LockPoisoned)
    }

    // --- buyers ---

    pub fn add_buyer(&self, details: BuyerDetails) -> StoreResult<BuyerId> {
        let mut tables = self.write()?;
        let id = BuyerId::new(tables.next_record_id());
        let buyer = Buyer::new(id, details)?;
        tables.buyers.insert(id, buyer);
        debug!(buyer = %id, "buyer added");
        Ok(id)
    }

    pub fn update_buyer(&self, id: BuyerId, details: BuyerDetails) -> StoreResult<()> {
        let mut tables = self.write()?;
        let buyer = tables.buyers.get_mut(&id).ok_or(DomainError::NotFound)?;
        buyer.update(details)?;
        Ok(())
    }

    pub fn remove_buyer(&self, id: BuyerId) -> StoreResult<()> {
        let mut tables = self.write()?;
        if !tables.buyers.contains_key(&id) {
            return Err(DomainError::not_found().into());
        }
        if tables.bills.values().any(|b| b.input().buyer_id == id) {
            return Err(
                DomainError::conflict("buyer is referenced by existing bills").into(),
            );
        }
        tables.buyers.remove(&id);
        debug!(buyer = %id, "buyer removed");
        Ok(())
    }

    /// All buyers, ordered by name.
    pub fn buyers(&self) -> StoreResult<Vec<Buyer>> {
        let tables = self.read()?;
        let mut out: Vec<Buyer> = tables.buyers.values().cloned().collect();
        out.sort_by(|a, b| a.name().cmp(b.name()));
        Ok(out)
    }

    // --- dalals ---

    pub fn add_dalal(&self, details: DalalDetails) -> StoreResult<DalalId> {
        let mut tables = self.write()?;
        let id = DalalId::new(tables.next_record_id());
        let dalal = Dalal::new(id, details)?;
        tables.dalals.insert(id, dalal);
        debug!(dalal = %id, "dalal added");
        Ok(id)
    }

    pub fn update_dalal(&self, id: DalalId, details: DalalDetails) -> StoreResult<()> {
        let mut tables = self.write()?;
        let dalal = tables.dalals.get_mut(&id).ok_or(DomainError::NotFound)?;
        dalal.update(details)?;
        Ok(())
    }

    pub fn remove_dalal(&self, id: DalalId) -> StoreResult<()> {
        let mut tables = self.write()?;
        if !tables.dalals.contains_key(&id) {
            return Err(DomainError::not_found().into());
        }
        if tables.bills.values().any(|b| b.input().dalal_id == id) {
            return Err(
                DomainError::conflict("dalal is referenced by existing bills").into(),
            );
        }
        tables.dalals.remove(&id);
        debug!(dalal = %id, "dalal removed");
        Ok(())
    }

    /// All dalals, ordered by name.
    pub fn dalals(&self) -> StoreResult<Vec<Dalal>> {
        let tables = self.read()?;
        let mut out: Vec<Dalal> = tables.dalals.values().cloned().collect();
        out.sort_by(|a, b| a.name().cmp(b.name()));
        Ok(out)
    }

    // --- materials ---

    pub fn add_material(&self, details: MaterialDetails) -> StoreResult<MaterialId> {
        let mut tables = self.write()?;
        let id = MaterialId::new(tables.next_record_id());
        let material = Material::new(id, details)?;
        tables.materials.insert(id, material);
        debug!(material = %id, "material added");
        Ok(id)
    }

    pub fn update_material(&self, id: MaterialId, details: MaterialDetails) -> StoreResult<()> {
        let mut tables = self.write()?;
        let material = tables.materials.get_mut(&id).ok_or(DomainError::NotFound)?;
        material.update(details)?;
        Ok(())
    }

    pub fn remove_material(&self, id: MaterialId) -> StoreResult<()> {
        let mut tables = self.write()?;
        if !tables.materials.contains_key(&id) {
            return Err(DomainError::not_found().into());
        }
        if tables.bills.values().any(|b| b.input().material_id == id) {
            return Err(
                DomainError::conflict("material is referenced by existing bills").into(),
            );
        }
        tables.materials.remove(&id);
        debug!(material = %id, "material removed");
        Ok(())
    }

    /// All materials, ordered by name.
    pub fn materials(&self) -> StoreResult<Vec<Material>> {
        let tables = self.read()?;
        let mut out: Vec<Material> = tables.materials.values().cloned().collect();
        out.sort_by(|a, b| a.name().cmp(b.name()));
        Ok(out)
    }

    // --- payment terms ---

    pub fn add_payment_term(&self, details: PaymentTermDetails) -> StoreResult<PaymentTermId> {
        let mut tables = self.write()?;
        let id = PaymentTermId::new(tables.next_record_id());
        let term = PaymentTerm::new(id, details)?;
        tables.terms.insert(id, term);
        debug!(term = %id, "payment term added");
        Ok(id)
    }

    pub fn update_payment_term(
        &self,
        id: PaymentTermId,
        details: PaymentTermDetails,
    ) -> StoreResult<()> {
        let mut tables = self.write()?;
        let term = tables.terms.get_mut(&id).ok_or(DomainError::NotFound)?;
        term.update(details)?;
        Ok(())
    }

    pub fn remove_payment_term(&self, id: PaymentTermId) -> StoreResult<()> {
        let mut tables = self.write()?;
        if !tables.terms.contains_key(&id) {
            return Err(DomainError::not_found().into());
        }
        if tables.bills.values().any(|b| b.input().term_id == id) {
            return Err(
                DomainError::conflict("payment term is referenced by existing bills").into(),
            );
        }
        tables.terms.remove(&id);
        debug!(term = %id, "payment term removed");
        Ok(())
    }

    /// All payment terms, shortest credit period first.
    pub fn payment_terms(&self) -> StoreResult<Vec<PaymentTerm>> {
        let tables = self.read()?;
        let mut out: Vec<PaymentTerm> = tables.terms.values().cloned().collect();
        out.sort_by_key(PaymentTerm::days);
        Ok(out)
    }

    // --- tax rates ---

    pub fn add_tax_rate(&self, details: TaxRateDetails) -> StoreResult<TaxRateId> {
        let mut tables = self.write()?;
        let id = TaxRateId::new(tables.next_record_id());
        let tax = TaxRate::new(id, details)?;
        tables.taxes.insert(id, tax);
        debug!(tax = %id, "tax rate added");
        Ok(id)
    }

    pub fn update_tax_rate(&self, id: TaxRateId, details: TaxRateDetails) -> StoreResult<()> {
        let mut tables = self.write()?;
        let tax = tables.taxes.get_mut(&id).ok_or(DomainError::NotFound)?;
        tax.update(details)?;
        Ok(())
    }

    pub fn remove_tax_rate(&self, id: TaxRateId) -> StoreResult<()> {
        let mut tables = self.write()?;
        if !tables.taxes.contains_key(&id) {
            return Err(DomainError::not_found().into());
        }
        if tables.bills.values().any(|b| b.input().tax_id == id) {
            return Err(
                DomainError::conflict("tax rate is referenced by existing bills").into(),
            );
        }
        tables.taxes.remove(&id);
        debug!(tax = %id, "tax rate removed");
        Ok(())
    }

    /// All tax rates, ordered by name.
    pub fn tax_rates(&self) -> StoreResult<Vec<TaxRate>> {
        let tables = self.read()?;
        let mut out: Vec<TaxRate> = tables.taxes.values().cloned().collect();
        out.sort_by(|a, b| a.name().cmp(b.name()));
        Ok(out)
    }

    // --- bills ---

    /// Validate references, compute amounts and persist a new bill.
    pub fn create_bill(
        &self,
        input: BillInput,
        occurred_at: DateTime<Utc>,
    ) -> StoreResult<BillId> {
        let mut tables = self.write()?;
        let id = BillId::new(tables.next_record_id());
        let cmd = compose_create(id, input, &*tables, occurred_at)?;
        let mut bill = Bill::empty(id);
        let events = bill.handle(&BillCommand::CreateBill(cmd))?;
        for event in &events {
            bill.apply(event);
        }
        tables.bills.insert(id, bill);
        info!(bill = %id, "bill created");
        Ok(id)
    }

    /// Full replacement of a bill's inputs; amounts are recomputed against
    /// the tax rate in force now.
    pub fn revise_bill(
        &self,
        id: BillId,
        input: BillInput,
        occurred_at: DateTime<Utc>,
    ) -> StoreResult<()> {
        let mut tables = self.write()?;
        let existing = tables.bills.get(&id).cloned().ok_or(DomainError::NotFound)?;
        let cmd = compose_revise(id, input, &*tables, occurred_at)?;
        let events = existing.handle(&BillCommand::ReviseBill(cmd))?;
        let mut updated = existing;
        for event in &events {
            updated.apply(event);
        }
        tables.bills.insert(id, updated);
        info!(bill = %id, "bill revised");
        Ok(())
    }

    pub fn mark_bill_paid(&self, id: BillId, occurred_at: DateTime<Utc>) -> StoreResult<()> {
        let mut tables = self.write()?;
        let existing = tables.bills.get(&id).cloned().ok_or(DomainError::NotFound)?;
        let events = existing.handle(&BillCommand::MarkBillPaid(MarkBillPaid {
            bill_id: id,
            occurred_at,
        }))?;
        let mut updated = existing;
        for event in &events {
            updated.apply(event);
        }
        tables.bills.insert(id, updated);
        info!(bill = %id, "bill marked paid");
        Ok(())
    }

    /// Remove a bill outright (the aggregate validates the transition; the
    /// row itself is dropped, matching the app's hard delete).
    pub fn delete_bill(&self, id: BillId, occurred_at: DateTime<Utc>) -> StoreResult<()> {
        let mut tables = self.write()?;
        let existing = tables.bills.get(&id).cloned().ok_or(DomainError::NotFound)?;
        existing.handle(&BillCommand::DeleteBill(DeleteBill {
            bill_id: id,
            occurred_at,
        }))?;
        tables.bills.remove(&id);
        info!(bill = %id, "bill deleted");
        Ok(())
    }

    pub fn bill(&self, id: BillId) -> StoreResult<Option<Bill>> {
        Ok(self.read()?.bills.get(&id).cloned())
    }

    /// Denormalized views of every bill, most recent first.
    ///
    /// Aging is re-derived against the given `today` on every call; nothing
    /// date-relative is read from stored state.
    pub fn bill_views(&self, today: NaiveDate) -> StoreResult<Vec<BillView>> {
        let tables = self.read()?;
        let mut views = tables
            .bills
            .values()
            .map(|bill| compose_view(bill, &*tables, today))
            .collect::<Result<Vec<_>, _>>()?;
        views.sort_by(|a, b| b.date.cmp(&a.date));
        Ok(views)
    }
}

impl ReferenceDirectory for InMemoryStore {
    fn buyer(&self, id: BuyerId) -> Option<Buyer> {
        self.read().ok().and_then(|t| t.buyers.get(&id).cloned())
    }

    fn dalal(&self, id: DalalId) -> Option<Dalal> {
        self.read().ok().and_then(|t| t.dalals.get(&id).cloned())
    }

    fn material(&self, id: MaterialId) -> Option<Material> {
        self.read().ok().and_then(|t| t.materials.get(&id).cloned())
    }

    fn payment_term(&self, id: PaymentTermId) -> Option<PaymentTerm> {
        self.read().ok().and_then(|t| t.terms.get(&id).cloned())
    }

    fn tax_rate(&self, id: TaxRateId) -> Option<TaxRate> {
        self.read().ok().and_then(|t| t.taxes.get(&id).cloned())
    }
}
