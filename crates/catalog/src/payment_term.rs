use serde::{Deserialize, Serialize};

use bunai_core::{DomainError, DomainResult, Entity, RecordId};

/// Payment-term identifier.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PaymentTermId(pub RecordId);

impl PaymentTermId {
    pub fn new(id: RecordId) -> Self {
        Self(id)
    }
}

impl core::fmt::Display for PaymentTermId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// Editable payment-term fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentTermDetails {
    pub name: String,
    /// Credit period in calendar days. 0 means cash/immediate terms.
    pub days: u32,
}

/// Reference entity: a named credit-period policy (the "dhara").
///
/// A bill's due date is its date plus the term's days; the term record
/// itself carries no aging logic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentTerm {
    id: PaymentTermId,
    name: String,
    days: u32,
}

impl PaymentTerm {
    pub fn new(id: PaymentTermId, details: PaymentTermDetails) -> DomainResult<Self> {
        if details.name.trim().is_empty() {
            return Err(DomainError::validation(
                "payment term name cannot be empty",
            ));
        }
        Ok(Self {
            id,
            name: details.name,
            days: details.days,
        })
    }

    pub fn id_typed(&self) -> PaymentTermId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn days(&self) -> u32 {
        self.days
    }

    /// Replace every editable field (identity is immutable).
    pub fn update(&mut self, details: PaymentTermDetails) -> DomainResult<()> {
        if details.name.trim().is_empty() {
            return Err(DomainError::validation(
                "payment term name cannot be empty",
            ));
        }
        self.name = details.name;
        self.days = details.days;
        Ok(())
    }
}

impl Entity for PaymentTerm {
    type Id = PaymentTermId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
