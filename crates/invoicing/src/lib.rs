//! `bunai-invoicing` — read-side composition for list screens and invoices.
//!
//! Turns a stored [`bunai_billing::Bill`] plus its five reference records
//! into the fully denormalized [`BillView`] the UI and PDF layers consume,
//! and renders totals as Indian-English words for the invoice footer.
//! Everything here is pure; reference records arrive through the
//! [`ReferenceDirectory`] lookup interface and "today" is always an
//! explicit argument.

pub mod compose;
pub mod directory;
pub mod view;
pub mod words;

pub use compose::{compose_create, compose_revise};
pub use directory::{BillRefs, ReferenceDirectory};
pub use view::{BillView, compose_view};
pub use words::amount_to_words;
