//! Lookup-by-id access to reference data.

use bunai_billing::BillInput;
use bunai_catalog::{Material, MaterialId, PaymentTerm, PaymentTermId, TaxRate, TaxRateId};
use bunai_core::{DomainError, DomainResult};
use bunai_parties::{Buyer, BuyerId, Dalal, DalalId};

/// Read access to reference records by id.
///
/// The storage layer implements this; the domain only ever reads through
/// it. Returning owned records keeps implementations free to hold their
/// data behind locks.
pub trait ReferenceDirectory {
    fn buyer(&self, id: BuyerId) -> Option<Buyer>;
    fn dalal(&self, id: DalalId) -> Option<Dalal>;
    fn material(&self, id: MaterialId) -> Option<Material>;
    fn payment_term(&self, id: PaymentTermId) -> Option<PaymentTerm>;
    fn tax_rate(&self, id: TaxRateId) -> Option<TaxRate>;
}

/// The five reference records a bill depends on, fully resolved.
///
/// A bill cannot exist without all of them; [`BillRefs::resolve`] is the
/// single place that referential completeness is checked.
#[derive(Debug, Clone, PartialEq)]
pub struct BillRefs {
    pub buyer: Buyer,
    pub dalal: Dalal,
    pub material: Material,
    pub term: PaymentTerm,
    pub tax: TaxRate,
}

impl BillRefs {
    /// Resolve every reference a bill input names.
    ///
    /// Fails with [`DomainError::ReferenceNotFound`] naming the first
    /// missing record, so the form layer can point at the offending field.
    pub fn resolve(input: &BillInput, dir: &impl ReferenceDirectory) -> DomainResult<Self> {
        let buyer = dir
            .buyer(input.buyer_id)
            .ok_or_else(|| DomainError::reference_not_found("buyer", input.buyer_id.0))?;
        let dalal = dir
            .dalal(input.dalal_id)
            .ok_or_else(|| DomainError::reference_not_found("dalal", input.dalal_id.0))?;
        let material = dir
            .material(input.material_id)
            .ok_or_else(|| DomainError::reference_not_found("material", input.material_id.0))?;
        let term = dir
            .payment_term(input.term_id)
            .ok_or_else(|| DomainError::reference_not_found("payment term", input.term_id.0))?;
        let tax = dir
            .tax_rate(input.tax_id)
            .ok_or_else(|| DomainError::reference_not_found("tax rate", input.tax_id.0))?;

        Ok(Self {
            buyer,
            dalal,
            material,
            term,
            tax,
        })
    }
}

#[cfg(test)]
pub(crate) mod test_fixtures {
    use super::*;
    use bunai_catalog::{MaterialDetails, PaymentTermDetails, TaxRateDetails};
    use bunai_core::RecordId;
    use bunai_parties::{BuyerDetails, DalalDetails};
    use chrono::NaiveDate;

    /// Directory with exactly one record per table, all at id 1.
    #[derive(Debug, Default)]
    pub struct SingleEntryDirectory;

    impl ReferenceDirectory for SingleEntryDirectory {
        fn buyer(&self, id: BuyerId) -> Option<Buyer> {
            (id == BuyerId::new(RecordId::new(1))).then(|| {
                Buyer::new(
                    id,
                    BuyerDetails {
                        name: "Jalaram Ltd.".to_string(),
                        contact_number: "8574968596".to_string(),
                        address: Some("Adajan, Surat".to_string()),
                        gst_number: Some("DEFG446734".to_string()),
                    },
                )
                .unwrap()
            })
        }

        fn dalal(&self, id: DalalId) -> Option<Dalal> {
            (id == DalalId::new(RecordId::new(1))).then(|| {
                Dalal::new(
                    id,
                    DalalDetails {
                        name: "Kishan Patel".to_string(),
                        contact_number: "7418529635".to_string(),
                        address: None,
                    },
                )
                .unwrap()
            })
        }

        fn material(&self, id: MaterialId) -> Option<Material> {
            (id == MaterialId::new(RecordId::new(1))).then(|| {
                Material::new(
                    id,
                    MaterialDetails {
                        name: "Silk".to_string(),
                        extra_detail: Some("Natural silk fabric".to_string()),
                        hsn_code: Some("5007".to_string()),
                    },
                )
                .unwrap()
            })
        }

        fn payment_term(&self, id: PaymentTermId) -> Option<PaymentTerm> {
            (id == PaymentTermId::new(RecordId::new(1))).then(|| {
                PaymentTerm::new(
                    id,
                    PaymentTermDetails {
                        name: "War to War (10 days)".to_string(),
                        days: 10,
                    },
                )
                .unwrap()
            })
        }

        fn tax_rate(&self, id: TaxRateId) -> Option<TaxRate> {
            (id == TaxRateId::new(RecordId::new(1))).then(|| {
                TaxRate::new(
                    id,
                    TaxRateDetails {
                        name: "GST".to_string(),
                        percentage: 10.0,
                    },
                )
                .unwrap()
            })
        }
    }

    pub fn test_input() -> BillInput {
        BillInput {
            bill_no: 101,
            date: NaiveDate::from_ymd_opt(2025, 8, 5).unwrap(),
            buyer_id: BuyerId::new(RecordId::new(1)),
            dalal_id: DalalId::new(RecordId::new(1)),
            material_id: MaterialId::new(RecordId::new(1)),
            term_id: PaymentTermId::new(RecordId::new(1)),
            tax_id: TaxRateId::new(RecordId::new(1)),
            meter: 50.0,
            price_rate: 200.0,
            chalan_no: "8526".to_string(),
            taka_count: 120,
        }
    }
}
