use serde::{Deserialize, Serialize};

use bunai_core::{DomainError, DomainResult, Entity, RecordId};

/// Tax-rate identifier.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaxRateId(pub RecordId);

impl TaxRateId {
    pub fn new(id: RecordId) -> Self {
        Self(id)
    }
}

impl core::fmt::Display for TaxRateId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// Editable tax-rate fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaxRateDetails {
    pub name: String,
    /// Percentage applied to the base amount. 0 is a legal "no tax" rate.
    pub percentage: f64,
}

/// Reference entity: a named tax rate (e.g. "GST 5%").
///
/// Bills snapshot the percentage at creation time; editing this record
/// afterwards does not change existing bills.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaxRate {
    id: TaxRateId,
    name: String,
    percentage: f64,
}

impl TaxRate {
    pub fn new(id: TaxRateId, details: TaxRateDetails) -> DomainResult<Self> {
        validate(&details)?;
        Ok(Self {
            id,
            name: details.name,
            percentage: details.percentage,
        })
    }

    pub fn id_typed(&self) -> TaxRateId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn percentage(&self) -> f64 {
        self.percentage
    }

    /// Replace every editable field (identity is immutable).
    pub fn update(&mut self, details: TaxRateDetails) -> DomainResult<()> {
        validate(&details)?;
        self.name = details.name;
        self.percentage = details.percentage;
        Ok(())
    }
}

impl Entity for TaxRate {
    type Id = TaxRateId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

fn validate(details: &TaxRateDetails) -> DomainResult<()> {
    if details.name.trim().is_empty() {
        return Err(DomainError::validation("tax rate name cannot be empty"));
    }
    if !details.percentage.is_finite() || details.percentage < 0.0 {
        return Err(DomainError::validation(
            "tax percentage must be a non-negative number",
        ));
    }
    Ok(())
}
