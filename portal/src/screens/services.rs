//! Service catalogue screen.

use std::sync::Arc;

use mockable::Clock;
use tracing::debug;

use crate::booking::BookingWizard;
use crate::domain::{BookingHandoff, Pool, Service, ServiceCatalogue, ServiceSortKey};
use crate::listing::{FacetFilter, derive_list};
use crate::selection::DetailSelection;

/// Catalogue browsing plus the booking wizard it launches.
pub struct ServicesScreen {
    catalogue: ServiceCatalogue,
    pools: Vec<Pool>,
    companies: FacetFilter<String>,
    sort: ServiceSortKey,
    details: DetailSelection<String>,
    booking: Option<BookingWizard>,
    clock: Arc<dyn Clock>,
    handoff: Arc<dyn BookingHandoff>,
}

impl ServicesScreen {
    /// Opens on the full catalogue with no filters, the default sort and no
    /// dialog or wizard showing.
    pub fn new(
        catalogue: ServiceCatalogue,
        pools: Vec<Pool>,
        clock: Arc<dyn Clock>,
        handoff: Arc<dyn BookingHandoff>,
    ) -> Self {
        Self {
            catalogue,
            pools,
            companies: FacetFilter::default(),
            sort: ServiceSortKey::default(),
            details: DetailSelection::default(),
            booking: None,
            clock,
            handoff,
        }
    }

    /// Company filter options.
    pub fn companies(&self) -> Vec<&str> {
        self.catalogue.companies()
    }

    pub fn company_filter(&self) -> &FacetFilter<String> {
        &self.companies
    }

    /// Returns whether `company` is selected afterwards.
    pub fn toggle_company(&mut self, company: &str) -> bool {
        let selected = self.companies.toggle(company.to_owned());
        debug!(company, selected, "company filter toggled");
        selected
    }

    /// Shows every company again.
    pub fn clear_company_filters(&mut self) {
        self.companies.clear();
    }

    pub fn sort_key(&self) -> ServiceSortKey {
        self.sort
    }

    /// Changes the order of [`visible`](Self::visible). Filters are kept.
    pub fn set_sort_key(&mut self, key: ServiceSortKey) {
        self.sort = key;
    }

    /// The derived list for the current filters and sort key.
    pub fn visible(&self) -> Vec<&Service> {
        let sort = self.sort;
        derive_list(
            self.catalogue.services(),
            |service| self.companies.matches(service.company()),
            |a, b| sort.compare(a, b),
        )
    }

    /// Shows a service's details. Unknown ids are ignored.
    pub fn open_details(&mut self, service_id: &str) -> bool {
        if self.catalogue.find(service_id).is_none() {
            return false;
        }
        self.details.open(service_id.to_owned());
        true
    }

    pub fn close_details(&mut self) {
        self.details.close();
    }

    /// The service shown in the detail dialog.
    pub fn selected_service(&self) -> Option<&Service> {
        self.details
            .selected()
            .and_then(|id| self.catalogue.find(id))
    }

    /// Opens a fresh wizard for `service_id`, replacing any open one.
    pub fn book(&mut self, service_id: &str) -> Option<&mut BookingWizard> {
        let service = self.catalogue.find(service_id)?.clone();
        self.details.close();
        let wizard = BookingWizard::new(
            service,
            &self.pools,
            Arc::clone(&self.clock),
            Arc::clone(&self.handoff),
        );
        Some(self.booking.insert(wizard))
    }

    /// The open booking wizard, if any.
    pub fn booking(&self) -> Option<&BookingWizard> {
        self.booking.as_ref()
    }

    pub fn booking_mut(&mut self) -> Option<&mut BookingWizard> {
        self.booking.as_mut()
    }

    /// Dismisses the wizard, discarding the chosen service and draft.
    pub fn close_booking(&mut self) {
        if let Some(wizard) = self.booking.take() {
            debug!(service_id = %wizard.service().id(), step = wizard.step().number(), "booking closed");
        }
    }
}
