// Typed inventory query criteria

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Expiration filter. Every `Expires*` bucket means "not yet expired and within N days",
/// so the buckets overlap: a lot 10 days out is in all four of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExpirationBucket {
    #[serde(rename = "expired")]
    Expired,
    #[serde(rename = "expires_30")]
    Expires30,
    #[serde(rename = "expires_90")]
    Expires90,
    #[serde(rename = "expires_180")]
    Expires180,
    #[serde(rename = "expires_365")]
    Expires365,
}

impl ExpirationBucket {
    pub fn contains(&self, days_until_expiry: i64) -> bool {
        match self {
            ExpirationBucket::Expired => days_until_expiry < 0,
            ExpirationBucket::Expires30 => (0..=30).contains(&days_until_expiry),
            ExpirationBucket::Expires90 => (0..=90).contains(&days_until_expiry),
            ExpirationBucket::Expires180 => (0..=180).contains(&days_until_expiry),
            ExpirationBucket::Expires365 => (0..=365).contains(&days_until_expiry),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuantityRange {
    Empty,
    Low,
    Medium,
    High,
}

impl QuantityRange {
    pub fn contains(&self, quantity: u32) -> bool {
        match self {
            QuantityRange::Empty => quantity == 0,
            QuantityRange::Low => (1..=5).contains(&quantity),
            QuantityRange::Medium => (6..=15).contains(&quantity),
            QuantityRange::High => quantity >= 16,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    CommercialName,
    GenericName,
    LotNumber,
    ExpirationDate,
    RemainingQuantity,
}

impl SortField {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortField::CommercialName => "commercialName",
            SortField::GenericName => "genericName",
            SortField::LotNumber => "lotNumber",
            SortField::ExpirationDate => "expirationDate",
            SortField::RemainingQuantity => "remainingQuantity",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

/// `sortBy` value, written as `field_direction` (e.g. `expirationDate_asc`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SortSpec {
    pub field: SortField,
    pub direction: SortDirection,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid sortBy '{0}', expected <field>_<asc|desc>")]
pub struct SortSpecParseError(pub String);

impl FromStr for SortSpec {
    type Err = SortSpecParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw = s.trim();
        let (field, direction) = raw
            .rsplit_once('_')
            .ok_or_else(|| SortSpecParseError(raw.to_string()))?;
        let field = match field {
            "commercialName" => SortField::CommercialName,
            "genericName" => SortField::GenericName,
            "lotNumber" => SortField::LotNumber,
            "expirationDate" => SortField::ExpirationDate,
            "remainingQuantity" => SortField::RemainingQuantity,
            _ => return Err(SortSpecParseError(raw.to_string())),
        };
        let direction = match direction {
            "asc" => SortDirection::Asc,
            "desc" => SortDirection::Desc,
            _ => return Err(SortSpecParseError(raw.to_string())),
        };
        Ok(SortSpec { field, direction })
    }
}

impl TryFrom<String> for SortSpec {
    type Error = SortSpecParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<SortSpec> for String {
    fn from(value: SortSpec) -> Self {
        value.to_string()
    }
}

impl fmt::Display for SortSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let direction = match self.direction {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        };
        write!(f, "{}_{}", self.field.as_str(), direction)
    }
}
