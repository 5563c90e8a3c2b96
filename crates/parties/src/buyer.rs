use serde::{Deserialize, Serialize};

use bunai_core::{DomainError, DomainResult, Entity, RecordId};

/// Buyer identifier.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BuyerId(pub RecordId);

impl BuyerId {
    pub fn new(id: RecordId) -> Self {
        Self(id)
    }
}

impl core::fmt::Display for BuyerId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// Editable buyer fields, as entered on the form.
///
/// Used for both creation and full-replacement update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuyerDetails {
    pub name: String,
    pub contact_number: String,
    pub address: Option<String>,
    /// GST registration number, printed on invoices when present.
    pub gst_number: Option<String>,
}

/// Reference entity: the party a bill is raised against.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Buyer {
    id: BuyerId,
    name: String,
    contact_number: String,
    address: Option<String>,
    gst_number: Option<String>,
}

impl Buyer {
    pub fn new(id: BuyerId, details: BuyerDetails) -> DomainResult<Self> {
        validate(&details)?;
        Ok(Self {
            id,
            name: details.name,
            contact_number: details.contact_number,
            address: details.address,
            gst_number: details.gst_number,
        })
    }

    pub fn id_typed(&self) -> BuyerId {
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

    pub fn gst_number(&self) -> Option<&str> {
        self.gst_number.as_deref()
    }

    /// Replace every editable field (identity is immutable).
    pub fn update(&mut self, details: BuyerDetails) -> DomainResult<()> {
        validate(&details)?;
        self.name = details.name;
        self.contact_number = details.contact_number;
        self.address = details.address;
        self.gst_number = details.gst_number;
        Ok(())
    }
}

impl Entity for Buyer {
    type Id = BuyerId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

fn validate(details: &BuyerDetails) -> DomainResult<()> {
    if details.name.trim().is_empty() {
        return Err(DomainError::validation("buyer name cannot be empty"));
    }
    if details.contact_number.trim().is_empty() {
        return Err(DomainError::validation(
            "buyer contact number cannot be empty",
        ));
    }
    Ok(())
}
