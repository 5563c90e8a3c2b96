//! `bunai-catalog` — the reference data a bill prices against.
//!
//! Materials (what was traded), payment terms (the "dhara" credit policy)
//! and tax rates. All three are lookup records resolved by id at billing
//! time; a bill snapshots the tax percentage at creation, so editing a
//! `TaxRate` here never rewrites history.

pub mod material;
pub mod payment_term;
pub mod tax_rate;

pub use material::{Material, MaterialDetails, MaterialId};
pub use payment_term::{PaymentTerm, PaymentTermDetails, PaymentTermId};
pub use tax_rate::{TaxRate, TaxRateDetails, TaxRateId};
