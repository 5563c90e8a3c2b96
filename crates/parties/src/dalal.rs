use serde::{Deserialize, Serialize};

use bunai_core::{DomainError, DomainResult, Entity, RecordId};

/// Dalal identifier.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DalalId(pub RecordId);

impl DalalId {
    pub fn new(id: RecordId) -> Self {
        Self(id)
    }
}

impl core::fmt::Display for DalalId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// Editable dalal fields, used for creation and full-replacement update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DalalDetails {
    pub name: String,
    pub contact_number: String,
    pub address: Option<String>,
}

/// Reference entity: the broker who placed the deal.
///
/// Distinct from the buyer; a bill always names both.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dalal {
    id: DalalId,
    name: String,
    contact_number: String,
    address: Option<String>,
}

impl Dalal {
    pub fn new(id: DalalId, details: DalalDetails) -> DomainResult<Self> {
        validate(&details)?;
        Ok(Self {
            id,
            name: details.name,
            contact_number: details.contact_number,
            address: details.address,
        })
    }

    pub fn id_typed(&self) -> DalalId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn contact_number(&self) -> &str {
        &self.contact_number
    }

    pub fn address(&self) -> Option<&str> {
        self.address.as_deref()
    }

    /// Replace every editable field (identity is immutable).
    pub fn update(&mut self, details: DalalDetails) -> DomainResult<()> {
        validate(&details)?;
        self.name = details.name;
        self.contact_number = details.contact_number;
        self.address = details.address;
        Ok(())
    }
}

impl Entity for Dalal {
    type Id = DalalId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

fn validate(details: &DalalDetails) -> DomainResult<()> {
    if details.name.trim().is_empty() {
        return Err(DomainError::validation("dalal name cannot be empty"));
    }
    if details.contact_number.trim().is_empty() {
        return Err(DomainError::validation(
            "dalal contact number cannot be empty",
        ));
    }
    Ok(())
}
