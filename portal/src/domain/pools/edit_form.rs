//! Edit form for pool details.

use std::fmt;

use tracing::debug;

use super::{Pool, PoolAddress, PoolValidationError, WaterSystem};
use crate::domain::form::FieldErrors;

/// Equipment that can be ticked on the edit form.
pub const EQUIPMENT_OPTIONS: [&str; 5] = ["Pump", "Filter", "Skimmer", "Cleaner", "Cover"];

/// Countries offered by the country selector.
pub const COUNTRY_OPTIONS: [&str; 5] = [
    "United States",
    "Canada",
    "Mexico",
    "United Kingdom",
    "Australia",
];

/// Heater types offered by the heater selector.
pub const HEATER_OPTIONS: [&str; 4] = ["Gas", "Electric", "Heat Pump", "None"];

const GALLONS_MESSAGE: &str = "Enter a whole number of gallons";

/// Editable text fields on the pool form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PoolField {
    Name,
    Address,
    Address2,
    City,
    State,
    PostalCode,
    Country,
    WaterSystem,
    Size,
    Gallons,
    HeaterType,
    Notes,
}

impl PoolField {
    const REQUIRED: [Self; 6] = [
        Self::Name,
        Self::City,
        Self::State,
        Self::PostalCode,
        Self::Country,
        Self::WaterSystem,
    ];
}

/// Why a pool edit was not saved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PoolEditError {
    /// One or more fields need attention.
    Fields(FieldErrors<PoolField>),
    /// The edited pool failed entity validation.
    Pool(PoolValidationError),
}

impl fmt::Display for PoolEditError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fields(errors) => write!(f, "{} field(s) need attention", errors.len()),
            Self::Pool(error) => error.fmt(f),
        }
    }
}

impl std::error::Error for PoolEditError {}

/// Draft state of the pool edit dialog.
///
/// The form is seeded from an existing pool; [`PoolEditForm::submit`]
/// validates it and returns the replacement pool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PoolEditForm {
    original: Pool,
    values: [String; 12],
    equipment: Vec<String>,
    errors: FieldErrors<PoolField>,
}

impl PoolEditForm {
    /// Seeds every field from `pool`.
    pub fn for_pool(pool: &Pool) -> Self {
        let address = pool.address();
        let values = [
            pool.name().to_owned(),
            address.line1.clone(),
            address.line2.clone(),
            address.city.clone(),
            address.state.clone(),
            address.postal_code.clone(),
            address.country.clone(),
            pool.water_system().to_string(),
            pool.size().to_owned(),
            pool.gallons().to_string(),
            pool.heater_type().to_owned(),
            pool.notes().to_owned(),
        ];
        Self {
            original: pool.clone(),
            values,
            equipment: pool.equipment().to_vec(),
            errors: FieldErrors::default(),
        }
    }

    /// Current text of `field`, as typed.
    pub fn value(&self, field: PoolField) -> &str {
        self.values
            .get(field as usize)
            .map_or("", String::as_str)
    }

    /// Updates a field and clears any error shown for it.
    pub fn set(&mut self, field: PoolField, value: impl Into<String>) {
        if let Some(slot) = self.values.get_mut(field as usize) {
            *slot = value.into();
        }
        self.errors.clear(field);
    }

    /// Ticks or unticks a piece of equipment.
    ///
    /// Returns `false` when `equipment` is not one of [`EQUIPMENT_OPTIONS`].
    pub fn toggle_equipment(&mut self, equipment: &str) -> bool {
        if !EQUIPMENT_OPTIONS.contains(&equipment) {
            return false;
        }
        if let Some(index) = self.equipment.iter().position(|item| item == equipment) {
            self.equipment.remove(index);
        } else {
            self.equipment.push(equipment.to_owned());
        }
        true
    }

    pub fn equipment(&self) -> &[String] {
        self.equipment.as_slice()
    }

    /// Field errors from the last rejected submit.
    pub fn errors(&self) -> &FieldErrors<PoolField> {
        &self.errors
    }

    /// Validates the form and builds the replacement pool.
    ///
    /// Field errors are retained on the form until the fields are edited.
    pub fn submit(&mut self) -> Result<Pool, PoolEditError> {
        let mut errors = FieldErrors::default();
        for field in PoolField::REQUIRED {
            errors.require(field, self.value(field));
        }
        let gallons = self.parse_gallons(&mut errors);
        if !errors.is_empty() {
            debug!(pool_id = self.original.id(), errors = errors.len(), "pool edit rejected");
            self.errors = errors.clone();
            return Err(PoolEditError::Fields(errors));
        }

        let mut draft = self.original.to_draft();
        draft.name = self.value(PoolField::Name).trim().to_owned();
        draft.address = PoolAddress {
            line1: self.value(PoolField::Address).to_owned(),
            line2: self.value(PoolField::Address2).to_owned(),
            city: self.value(PoolField::City).to_owned(),
            state: self.value(PoolField::State).to_owned(),
            postal_code: self.value(PoolField::PostalCode).to_owned(),
            country: self.value(PoolField::Country).to_owned(),
        };
        draft.water_system = WaterSystem::from_label(self.value(PoolField::WaterSystem));
        draft.size = self.value(PoolField::Size).to_owned();
        draft.gallons = gallons;
        draft.heater_type = self.value(PoolField::HeaterType).to_owned();
        draft.notes = self.value(PoolField::Notes).to_owned();
        draft.equipment = self.equipment.clone();

        Pool::new(draft).map_err(PoolEditError::Pool)
    }

    fn parse_gallons(&self, errors: &mut FieldErrors<PoolField>) -> u32 {
        let raw = self.value(PoolField::Gallons).trim();
        if raw.is_empty() {
            return self.original.gallons();
        }
        raw.parse().unwrap_or_else(|_| {
            errors.insert(PoolField::Gallons, GALLONS_MESSAGE);
            self.original.gallons()
        })
    }
}
