//! Bookable service entity and the catalogue that holds it.

use std::collections::{BTreeSet, HashSet};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::CatalogueValidationError;

/// Input payload for [`Service::new`].
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceDraft {
    pub id: String,
    pub name: String,
    pub company: String,
    pub description: String,
    pub price: i32,
    pub duration: String,
    pub popular: bool,
    pub created_at: NaiveDate,
    pub features: Vec<String>,
}

/// A service card in the catalogue.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use portal::domain::{Service, ServiceDraft};
///
/// let service = Service::new(ServiceDraft {
///     id: "cleaning-1".to_owned(),
///     name: "Pool Cleaning".to_owned(),
///     company: "AquaPro Services".to_owned(),
///     description: "Skimming and vacuuming".to_owned(),
///     price: 85,
///     duration: "1-2 hours".to_owned(),
///     popular: true,
///     created_at: NaiveDate::from_ymd_opt(2024, 1, 15).expect("valid date"),
///     features: vec![],
/// })
/// .expect("valid service");
///
/// assert_eq!(service.price(), 85);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Service {
    id: String,
    name: String,
    company: String,
    description: String,
    price: i32,
    duration: String,
    popular: bool,
    created_at: NaiveDate,
    features: Vec<String>,
}

impl Service {
    /// Validate and construct a service card.
    pub fn new(draft: ServiceDraft) -> Result<Self, CatalogueValidationError> {
        Self::try_from(draft)
    }

    pub fn id(&self) -> &str {
        self.id.as_str()
    }
    pub fn name(&self) -> &str {
        self.name.as_str()
    }
    pub fn company(&self) -> &str {
        self.company.as_str()
    }
    pub fn description(&self) -> &str {
        self.description.as_str()
    }
    pub fn price(&self) -> i32 {
        self.price
    }
    pub fn duration(&self) -> &str {
        self.duration.as_str()
    }
    /// Popular services sort first under the default sort key.
    pub fn is_popular(&self) -> bool {
        self.popular
    }
    pub fn created_at(&self) -> NaiveDate {
        self.created_at
    }
    pub fn features(&self) -> &[String] {
        self.features.as_slice()
    }
}

impl TryFrom<ServiceDraft> for Service {
    type Error = CatalogueValidationError;

    fn try_from(draft: ServiceDraft) -> Result<Self, Self::Error> {
        for (field, value) in [
            ("service.id", &draft.id),
            ("service.name", &draft.name),
            ("service.company", &draft.company),
        ] {
            if value.trim().is_empty() {
                return Err(CatalogueValidationError::EmptyField { field });
            }
        }
        if draft.price < 0 {
            return Err(CatalogueValidationError::NegativeValue {
                field: "service.price",
                value: draft.price,
            });
        }

        Ok(Self {
            id: draft.id,
            name: draft.name,
            company: draft.company,
            description: draft.description,
            price: draft.price,
            duration: draft.duration,
            popular: draft.popular,
            created_at: draft.created_at,
            features: draft.features,
        })
    }
}

/// The master list of bookable services.
///
/// Service ids are unique within a catalogue.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ServiceCatalogue {
    services: Vec<Service>,
}

impl ServiceCatalogue {
    /// Builds a catalogue, rejecting repeated service ids.
    pub fn new(services: Vec<Service>) -> Result<Self, CatalogueValidationError> {
        let mut seen = HashSet::new();
        for service in &services {
            if !seen.insert(service.id()) {
                return Err(CatalogueValidationError::DuplicateServiceId {
                    id: service.id().to_owned(),
                });
            }
        }
        Ok(Self { services })
    }

    /// Services in registry order.
    pub fn services(&self) -> &[Service] {
        self.services.as_slice()
    }

    /// Looks a service up by id.
    pub fn find(&self, id: &str) -> Option<&Service> {
        self.services.iter().find(|service| service.id() == id)
    }

    /// Distinct company names, sorted alphabetically.
    ///
    /// These are the options of the catalogue's company filter.
    pub fn companies(&self) -> Vec<&str> {
        self.services
            .iter()
            .map(Service::company)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    pub fn len(&self) -> usize {
        self.services.len()
    }

    pub fn is_empty(&self) -> bool {
        self.services.is_empty()
    }
}
