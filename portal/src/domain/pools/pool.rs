//! Pool entity and its service history.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Serialize, Serializer};

use super::PoolValidationError;
use crate::domain::rating::StarRating;

/// Water treatment system of a pool.
///
/// Unknown systems are preserved verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum WaterSystem {
    Saltwater,
    Chlorine,
    Bromine,
    Other(String),
}

impl WaterSystem {
    /// Classifies a water system label, case-insensitively.
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_ascii_lowercase().as_str() {
            "saltwater" => Self::Saltwater,
            "chlorine" => Self::Chlorine,
            "bromine" => Self::Bromine,
            _ => Self::Other(label.trim().to_owned()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Saltwater => "Saltwater",
            Self::Chlorine => "Chlorine",
            Self::Bromine => "Bromine",
            Self::Other(label) => label.as_str(),
        }
    }
}

impl fmt::Display for WaterSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WaterSystem {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_label(s))
    }
}

impl Serialize for WaterSystem {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Postal address of a pool.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PoolAddress {
    pub line1: String,
    pub line2: String,
    pub city: String,
    pub state: String,
    pub postal_code: String,
    pub country: String,
}

/// A past service visit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ServiceVisit {
    pub date: NaiveDate,
    pub service: String,
    pub technician: String,
    pub rating: StarRating,
}

/// Input payload for [`Pool::new`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PoolDraft {
    pub id: String,
    pub name: String,
    pub address: PoolAddress,
    pub size: String,
    pub gallons: u32,
    pub water_system: WaterSystem,
    pub heater_type: String,
    pub equipment: Vec<String>,
    pub notes: String,
    pub last_service: Option<NaiveDate>,
    pub next_service: Option<NaiveDate>,
    pub service_history: Vec<ServiceVisit>,
}

/// A customer's pool or spa.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Pool {
    id: String,
    name: String,
    address: PoolAddress,
    size: String,
    gallons: u32,
    water_system: WaterSystem,
    heater_type: String,
    equipment: Vec<String>,
    notes: String,
    last_service: Option<NaiveDate>,
    next_service: Option<NaiveDate>,
    service_history: Vec<ServiceVisit>,
}

impl Pool {
    /// Validate and construct a pool.
    ///
    /// The id and name are required and a scheduled next service may not
    /// precede the last one.
    pub fn new(draft: PoolDraft) -> Result<Self, PoolValidationError> {
        Self::try_from(draft)
    }

    pub fn id(&self) -> &str {
        self.id.as_str()
    }
    pub fn name(&self) -> &str {
        self.name.as_str()
    }
    pub fn address(&self) -> &PoolAddress {
        &self.address
    }
    pub fn size(&self) -> &str {
        self.size.as_str()
    }
    pub fn gallons(&self) -> u32 {
        self.gallons
    }
    pub fn water_system(&self) -> &WaterSystem {
        &self.water_system
    }
    pub fn heater_type(&self) -> &str {
        self.heater_type.as_str()
    }
    pub fn equipment(&self) -> &[String] {
        self.equipment.as_slice()
    }
    pub fn notes(&self) -> &str {
        self.notes.as_str()
    }
    pub fn last_service(&self) -> Option<NaiveDate> {
        self.last_service
    }
    pub fn next_service(&self) -> Option<NaiveDate> {
        self.next_service
    }
    /// Past visits, most recent first.
    pub fn service_history(&self) -> &[ServiceVisit] {
        self.service_history.as_slice()
    }

    /// Converts the pool back into an editable draft.
    pub fn to_draft(&self) -> PoolDraft {
        PoolDraft {
            id: self.id.clone(),
            name: self.name.clone(),
            address: self.address.clone(),
            size: self.size.clone(),
            gallons: self.gallons,
            water_system: self.water_system.clone(),
            heater_type: self.heater_type.clone(),
            equipment: self.equipment.clone(),
            notes: self.notes.clone(),
            last_service: self.last_service,
            next_service: self.next_service,
            service_history: self.service_history.clone(),
        }
    }
}

impl TryFrom<PoolDraft> for Pool {
    type Error = PoolValidationError;

    fn try_from(draft: PoolDraft) -> Result<Self, Self::Error> {
        if draft.id.trim().is_empty() {
            return Err(PoolValidationError::EmptyField { field: "pool.id" });
        }
        if draft.name.trim().is_empty() {
            return Err(PoolValidationError::EmptyField { field: "pool.name" });
        }
        match (draft.last_service, draft.next_service) {
            (Some(last_service), Some(next_service)) if next_service < last_service => {
                return Err(PoolValidationError::NextServiceBeforeLastService {
                    last_service,
                    next_service,
                });
            }
            _ => {}
        }

        Ok(Self {
            id: draft.id,
            name: draft.name,
            address: draft.address,
            size: draft.size,
            gallons: draft.gallons,
            water_system: draft.water_system,
            heater_type: draft.heater_type,
            equipment: draft.equipment,
            notes: draft.notes,
            last_service: draft.last_service,
            next_service: draft.next_service,
            service_history: draft.service_history,
        })
    }
}
