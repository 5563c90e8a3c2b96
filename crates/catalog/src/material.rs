use serde::{Deserialize, Serialize};

use bunai_core::{DomainError, DomainResult, Entity, RecordId};

/// Material identifier.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MaterialId(pub RecordId);

impl MaterialId {
    pub fn new(id: RecordId) -> Self {
        Self(id)
    }
}

impl core::fmt::Display for MaterialId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// Editable material fields, used for creation and full-replacement update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaterialDetails {
    pub name: String,
    pub extra_detail: Option<String>,
    /// Tax classification code, printed on invoices for compliance.
    pub hsn_code: Option<String>,
}

/// Reference entity: a fabric/cloth type traded on bills.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Material {
    id: MaterialId,
    name: String,
    extra_detail: Option<String>,
    hsn_code: Option<String>,
}

impl Material {
    pub fn new(id: MaterialId, details: MaterialDetails) -> DomainResult<Self> {
        if details.name.trim().is_empty() {
            return Err(DomainError::validation("material name cannot be empty"));
        }
        Ok(Self {
            id,
            name: details.name,
            extra_detail: details.extra_detail,
            hsn_code: details.hsn_code,
        })
    }

    pub fn id_typed(&self) -> MaterialId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn extra_detail(&self) -> Option<&str> {
        self.extra_detail.as_deref()
    }

    pub fn hsn_code(&self) -> Option<&str> {
        self.hsn_code.as_deref()
    }

    /// Replace every editable field (identity is immutable).
    pub fn update(&mut self, details: MaterialDetails) -> DomainResult<()> {
        if details.name.trim().is_empty() {
            return Err(DomainError::validation("material name cannot be empty"));
        }
        self.name = details.name;
        self.extra_detail = details.extra_detail;
        self.hsn_code = details.hsn_code;
        Ok(())
    }
}

impl Entity for Material {
    type Id = MaterialId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
